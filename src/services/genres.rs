//! Genre management service

use validator::Validate;

use crate::{
    client::ApiClient,
    error::{ClientError, ClientResult},
    models::genre::{CreateGenre, Genre, UpdateGenre},
};

#[derive(Clone)]
pub struct GenresService {
    client: ApiClient,
}

impl GenresService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all genres
    pub async fn list(&self) -> ClientResult<Vec<Genre>> {
        let value = self.client.get_value("/genres").await?;
        super::unwrap_list(value, "genres")
    }

    /// Get one genre by id
    pub async fn get(&self, id: i64) -> ClientResult<Genre> {
        let value = self.client.get_value(&format!("/genres/{}", id)).await?;
        super::unwrap_one(value, "genre")
    }

    /// Create a new genre
    pub async fn create(&self, genre: &CreateGenre) -> ClientResult<Genre> {
        genre
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.post("/genres", genre).await?;
        super::unwrap_one(value, "genre")
    }

    /// Update an existing genre
    pub async fn update(&self, id: i64, genre: &UpdateGenre) -> ClientResult<Genre> {
        genre
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let value = self.client.patch(&format!("/genres/{}", id), genre).await?;
        super::unwrap_one(value, "genre")
    }

    /// Delete a genre
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client.delete(&format!("/genres/{}", id)).await
    }
}
