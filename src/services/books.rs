use crate::models::responses::{BookListResponse, BookRecord};
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Book list request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed book list: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait BooksApi {
    async fn list_books(&self, user_id: i64) -> Result<Vec<BookRecord>, LoadError>;
}

pub struct HttpBooksApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBooksApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl BooksApi for HttpBooksApi {
    async fn list_books(&self, user_id: i64) -> Result<Vec<BookRecord>, LoadError> {
        let url = format!("{}/api/books?user_id={}", self.base_url, user_id);
        let response = self.client.get(&url).send().await?;

        // A non-success status means no books, not a load failure.
        if !response.status().is_success() {
            warn!(
                "Book list request for user {} returned {}",
                user_id,
                response.status()
            );
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        if body.is_empty() {
            return Ok(Vec::new());
        }

        let parsed: BookListResponse = serde_json::from_str(&body)?;
        Ok(parsed.books)
    }
}
