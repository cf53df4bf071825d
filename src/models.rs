use std::fmt;

/// A row of the `books` table in column order: id, title, author_name
pub type BookRow = (i32, String, String);

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_name: String,
}

impl Book {
    pub fn new(id: i32, title: impl Into<String>, author_name: impl Into<String>) -> Self {
        Book {
            id,
            title: title.into(),
            author_name: author_name.into(),
        }
    }

    pub fn from_row((id, title, author_name): BookRow) -> Self {
        Book {
            id,
            title,
            author_name,
        }
    }
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::from_row(row)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book({}, {}, {})", self.id, self.title, self.author_name)
    }
}
