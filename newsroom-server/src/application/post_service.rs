use std::sync::Arc;

use crate::data::author_repository::AuthorRepository;
use crate::data::post_repository::PostRepository;
use crate::domain::author::Author;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter};
use tracing::instrument;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostService<P, A>
where
    P: PostRepository + 'static,
    A: AuthorRepository + 'static,
{
    posts: Arc<P>,
    authors: Arc<A>,
}

impl<P, A> PostService<P, A>
where
    P: PostRepository + 'static,
    A: AuthorRepository + 'static,
{
    pub fn new(posts: Arc<P>, authors: Arc<A>) -> Self {
        Self { posts, authors }
    }

    /// Loads a post together with its author. The author lookup is eager:
    /// every caller of the show path needs both records.
    pub async fn get_post(&self, id: Uuid) -> Result<(Post, Author), DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;
        let author = self
            .authors
            .find_by_id(post.author_id)
            .await?
            .ok_or(DomainError::AuthorNotFound(post.author_id))?;
        Ok((post, author))
    }

    pub async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        self.posts.list(filter).await
    }

    #[instrument(skip(self))]
    pub async fn create_post(
        &self,
        author_id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, DomainError> {
        // explicit author contract: the referenced author must exist
        self.authors
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::AuthorNotFound(author_id))?;

        let post = Post::new(author_id, title, description);
        self.posts.create(post).await
    }

    #[instrument(skip(self))]
    pub async fn update_post(
        &self,
        id: Uuid,
        title: String,
        description: String,
    ) -> Result<Post, DomainError> {
        match self.posts.update(id, title, description).await {
            Ok(Some(post)) => Ok(post),
            Ok(None) => Err(DomainError::PostNotFound(id)),
            Err(e) => Err(e),
        }
    }
}
