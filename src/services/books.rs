//! Book catalog service

use validator::Validate;

use crate::{
    client::ApiClient,
    error::{ClientError, ClientResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksService {
    client: ApiClient,
}

impl BooksService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all books
    pub async fn list(&self) -> ClientResult<Vec<Book>> {
        let value = self.client.get_value("/books").await?;
        super::unwrap_list(value, "books")
    }

    /// Create a new book
    pub async fn create(&self, book: &CreateBook) -> ClientResult<Book> {
        book.validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.post("/books", book).await?;
        super::unwrap_one(value, "book")
    }

    /// Update an existing book
    pub async fn update(&self, id: i64, book: &UpdateBook) -> ClientResult<Book> {
        book.validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.put(&format!("/books/{}", id), book).await?;
        super::unwrap_one(value, "book")
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/books/{}", id)).await
    }
}
