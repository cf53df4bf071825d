diesel::table! {
    books (id) {
        id -> Int4,
        title -> Text,
        author_name -> Text,
    }
}
