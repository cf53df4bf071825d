use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::database::DatabaseError;
use crate::models::{Book, BookRow};
use crate::schema::books;

/// Read access to the `books` table over a connection owned by the caller
pub struct BookRepository<'c> {
    conn: &'c mut AsyncPgConnection,
}

impl<'c> BookRepository<'c> {
    pub fn new(conn: &'c mut AsyncPgConnection) -> Self {
        BookRepository { conn }
    }

    /// Every book in the table, ordered by ID
    pub async fn all(&mut self) -> Result<Vec<Book>, DatabaseError> {
        let rows = books::table
            .select((books::id, books::title, books::author_name))
            .order(books::id.asc())
            .load::<BookRow>(&mut *self.conn)
            .await?;

        let books: Vec<Book> = rows.into_iter().map(Book::from_row).collect();

        debug!("Loaded {} books from the DB", books.len());

        Ok(books)
    }
}
