//! In-memory repository implementations for service-level tests.

use crate::data::author_repository::AuthorRepository;
use crate::data::post_repository::PostRepository;
use crate::domain::author::Author;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter, start_of_today};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryAuthorRepository {
    rows: Mutex<Vec<Author>>,
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn create(&self, author: Author) -> Result<Author, DomainError> {
        self.rows.lock().unwrap().push(author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Author>, DomainError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn update(
        &self,
        id: Uuid,
        name: String,
        hometown: String,
    ) -> Result<Option<Author>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|a| a.id == id) {
            Some(author) => {
                author.name = name;
                author.hometown = hometown;
                author.updated_at = Utc::now();
                Ok(Some(author.clone()))
            }
            None => Ok(None),
        }
    }
}

#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        self.rows.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let rows = self.rows.lock().unwrap();
        let boundary = start_of_today();
        let mut posts: Vec<Post> = rows
            .iter()
            .filter(|p| match filter {
                PostFilter::All => true,
                PostFilter::ByAuthor(author_id) => p.author_id == author_id,
                PostFilter::FromToday => p.created_at >= boundary,
                PostFilter::OldNews => p.created_at < boundary,
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn update(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<Option<Post>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.title = title;
                post.description = description;
                post.updated_at = Utc::now();
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }
}
