use std::sync::Arc;

use crate::data::author_repository::AuthorRepository;
use crate::domain::{author::Author, error::DomainError};
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct AuthorService<R: AuthorRepository + 'static> {
    repo: Arc<R>,
}

impl<R> AuthorService<R>
where
    R: AuthorRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_author(&self, id: Uuid) -> Result<Author, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::AuthorNotFound(id))
    }

    pub async fn list_authors(&self) -> Result<Vec<Author>, DomainError> {
        self.repo.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn create_author(
        &self,
        name: String,
        hometown: String,
    ) -> Result<Author, DomainError> {
        let author = Author::new(name, hometown);
        self.repo.create(author).await
    }

    #[instrument(skip(self))]
    pub async fn update_author(
        &self,
        id: Uuid,
        name: String,
        hometown: String,
    ) -> Result<Author, DomainError> {
        match self.repo.update(id, name, hometown).await {
            Ok(Some(author)) => Ok(author),
            Ok(None) => Err(DomainError::AuthorNotFound(id)),
            Err(e) => Err(e),
        }
    }
}
