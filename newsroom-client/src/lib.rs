use async_trait::async_trait;
use uuid::Uuid;

mod error;
mod http_client;
mod models;

pub use crate::error::NewsroomClientError;
pub use crate::http_client::NewsroomHttpClient;
pub use crate::models::{Author, DateFilter, Post, PostDetail};

/// Typed surface of the newsroom HTTP API.
#[async_trait]
pub trait NewsroomApi: Send + Sync {
    async fn list_authors(&self) -> Result<Vec<Author>, NewsroomClientError>;
    async fn get_author(&self, id: Uuid) -> Result<Author, NewsroomClientError>;
    async fn create_author(
        &self,
        name: String,
        hometown: String,
    ) -> Result<Author, NewsroomClientError>;
    async fn update_author(
        &self,
        id: Uuid,
        name: String,
        hometown: String,
    ) -> Result<Author, NewsroomClientError>;

    async fn list_posts(
        &self,
        author: Option<Uuid>,
        date: Option<DateFilter>,
    ) -> Result<Vec<Post>, NewsroomClientError>;
    async fn get_post(&self, id: Uuid) -> Result<PostDetail, NewsroomClientError>;
    async fn create_post(
        &self,
        author_id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, NewsroomClientError>;
    async fn update_post(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, NewsroomClientError>;
}
