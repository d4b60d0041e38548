use crate::NewsroomApi;
use crate::error::NewsroomClientError;
use crate::models::{Author, DateFilter, Post, PostDetail};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct NewsroomHttpClient {
    client: Arc<Client>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct AuthorsResponse {
    authors: Vec<Author>,
}

#[derive(Debug, Deserialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

impl NewsroomHttpClient {
    pub fn connect(endpoint: &str) -> Result<Self, NewsroomClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }
}

#[async_trait]
impl NewsroomApi for NewsroomHttpClient {
    async fn list_authors(&self) -> Result<Vec<Author>, NewsroomClientError> {
        let resp = self
            .client
            .get(format!("{}/authors", self.base_url))
            .send()
            .await?;

        if resp.status().is_success() {
            let authors: AuthorsResponse = resp.json().await?;
            Ok(authors.authors)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn get_author(&self, id: Uuid) -> Result<Author, NewsroomClientError> {
        let resp = self
            .client
            .get(format!("{}/authors/{}", self.base_url, id))
            .send()
            .await?;

        if resp.status().is_success() {
            let author: Author = resp.json().await?;
            Ok(author)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn create_author(
        &self,
        name: String,
        hometown: String,
    ) -> Result<Author, NewsroomClientError> {
        let resp = self
            .client
            .post(format!("{}/authors", self.base_url))
            .json(&serde_json::json!({
                "name": name,
                "hometown": hometown,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let author: Author = resp.json().await?;
            Ok(author)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn update_author(
        &self,
        id: Uuid,
        name: String,
        hometown: String,
    ) -> Result<Author, NewsroomClientError> {
        let resp = self
            .client
            .put(format!("{}/authors/{}", self.base_url, id))
            .json(&serde_json::json!({
                "name": name,
                "hometown": hometown,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let author: Author = resp.json().await?;
            Ok(author)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn list_posts(
        &self,
        author: Option<Uuid>,
        date: Option<DateFilter>,
    ) -> Result<Vec<Post>, NewsroomClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(author) = author {
            query.push(("author", author.to_string()));
        }
        if let Some(date) = date {
            query.push(("date", date.as_str().to_string()));
        }

        let resp = self
            .client
            .get(format!("{}/posts", self.base_url))
            .query(&query)
            .send()
            .await?;

        if resp.status().is_success() {
            let posts: PostsResponse = resp.json().await?;
            Ok(posts.posts)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn get_post(&self, id: Uuid) -> Result<PostDetail, NewsroomClientError> {
        let resp = self
            .client
            .get(format!("{}/posts/{}", self.base_url, id))
            .send()
            .await?;

        if resp.status().is_success() {
            let detail: PostDetail = resp.json().await?;
            Ok(detail)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn create_post(
        &self,
        author_id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, NewsroomClientError> {
        let resp = self
            .client
            .post(format!("{}/posts", self.base_url))
            .json(&serde_json::json!({
                "author_id": author_id,
                "title": title,
                "description": description,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let post: Post = resp.json().await?;
            Ok(post)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }

    async fn update_post(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, NewsroomClientError> {
        let resp = self
            .client
            .put(format!("{}/posts/{}", self.base_url, id))
            .json(&serde_json::json!({
                "title": title,
                "description": description,
            }))
            .send()
            .await?;

        if resp.status().is_success() {
            let post: Post = resp.json().await?;
            Ok(post)
        } else {
            Err(NewsroomClientError::from_http_response(resp).await)
        }
    }
}
