use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::application::author_service::AuthorService;
use crate::application::post_service::PostService;
use crate::data::memory::{InMemoryAuthorRepository, InMemoryPostRepository};
use crate::data::post_repository::PostRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFilter};

type Posts = PostService<InMemoryPostRepository, InMemoryAuthorRepository>;

fn authors() -> (AuthorService<InMemoryAuthorRepository>, Arc<InMemoryAuthorRepository>) {
    let repo = Arc::new(InMemoryAuthorRepository::default());
    (AuthorService::new(Arc::clone(&repo)), repo)
}

fn services() -> (Posts, AuthorService<InMemoryAuthorRepository>, Arc<InMemoryPostRepository>) {
    let author_repo = Arc::new(InMemoryAuthorRepository::default());
    let post_repo = Arc::new(InMemoryPostRepository::default());
    let post_service = PostService::new(Arc::clone(&post_repo), Arc::clone(&author_repo));
    let author_service = AuthorService::new(author_repo);
    (post_service, author_service, post_repo)
}

#[tokio::test]
async fn created_author_round_trips() {
    let (service, _repo) = authors();

    let created = service
        .create_author(
            "J.K. Rowling".to_string(),
            "Killiechassie, Scotland".to_string(),
        )
        .await
        .unwrap();

    let fetched = service.get_author(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "J.K. Rowling");
    assert_eq!(fetched.hometown, "Killiechassie, Scotland");
}

#[tokio::test]
async fn get_missing_author_is_not_found() {
    let (service, _repo) = authors();
    let missing = Uuid::new_v4();

    let err = service.get_author(missing).await.unwrap_err();
    assert!(matches!(err, DomainError::AuthorNotFound(id) if id == missing));
}

#[tokio::test]
async fn update_author_overwrites_both_fields() {
    let (service, _repo) = authors();
    let created = service
        .create_author("Bob".to_string(), "USA".to_string())
        .await
        .unwrap();

    let updated = service
        .update_author(created.id, "Robert".to_string(), "Canada".to_string())
        .await
        .unwrap();

    assert_eq!(updated.name, "Robert");
    assert_eq!(updated.hometown, "Canada");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let fetched = service.get_author(created.id).await.unwrap();
    assert_eq!(fetched.name, "Robert");
    assert_eq!(fetched.hometown, "Canada");
}

#[tokio::test]
async fn update_missing_author_is_not_found() {
    let (service, _repo) = authors();
    let missing = Uuid::new_v4();

    let err = service
        .update_author(missing, "X".to_string(), "Y".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AuthorNotFound(id) if id == missing));
}

#[tokio::test]
async fn list_authors_returns_all() {
    let (service, _repo) = authors();
    let a = service
        .create_author("Bob".to_string(), "USA".to_string())
        .await
        .unwrap();
    let b = service
        .create_author("Alice".to_string(), "Norway".to_string())
        .await
        .unwrap();

    let all = service.list_authors().await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|x| x.id == a.id));
    assert!(all.iter().any(|x| x.id == b.id));
}

#[tokio::test]
async fn post_with_author_round_trips() {
    let (posts, authors, _repo) = services();
    let bob = authors
        .create_author("Bob".to_string(), "USA".to_string())
        .await
        .unwrap();

    let post = posts
        .create_post(bob.id, "My Post".to_string(), "My post desc".to_string())
        .await
        .unwrap();

    let (fetched, author) = posts.get_post(post.id).await.unwrap();
    assert_eq!(fetched.title, "My Post");
    assert_eq!(fetched.description, "My post desc");
    assert_eq!(author.id, bob.id);
    assert_eq!(author.name, "Bob");
}

#[tokio::test]
async fn create_post_requires_existing_author() {
    let (posts, _authors, repo) = services();
    let missing = Uuid::new_v4();

    let err = posts
        .create_post(missing, "Title".to_string(), "Body".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::AuthorNotFound(id) if id == missing));

    // nothing was stored
    let all = repo.list(PostFilter::All).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn get_missing_post_is_not_found() {
    let (posts, _authors, _repo) = services();
    let missing = Uuid::new_v4();

    let err = posts.get_post(missing).await.unwrap_err();
    assert!(matches!(err, DomainError::PostNotFound(id) if id == missing));
}

#[tokio::test]
async fn update_post_overwrites_fields_and_keeps_author() {
    let (posts, authors, _repo) = services();
    let bob = authors
        .create_author("Bob".to_string(), "USA".to_string())
        .await
        .unwrap();
    let post = posts
        .create_post(bob.id, "Draft".to_string(), "wip".to_string())
        .await
        .unwrap();

    let updated = posts
        .update_post(post.id, "Final".to_string(), "done".to_string())
        .await
        .unwrap();

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.description, "done");
    assert_eq!(updated.author_id, bob.id);
    assert_eq!(updated.created_at, post.created_at);
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let (posts, _authors, _repo) = services();
    let missing = Uuid::new_v4();

    let err = posts
        .update_post(missing, "T".to_string(), "D".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PostNotFound(id) if id == missing));
}

#[tokio::test]
async fn list_filters_by_author_exactly() {
    let (posts, authors, _repo) = services();
    let bob = authors
        .create_author("Bob".to_string(), "USA".to_string())
        .await
        .unwrap();
    let alice = authors
        .create_author("Alice".to_string(), "Norway".to_string())
        .await
        .unwrap();

    let p1 = posts
        .create_post(bob.id, "One".to_string(), "d".to_string())
        .await
        .unwrap();
    let p2 = posts
        .create_post(bob.id, "Two".to_string(), "d".to_string())
        .await
        .unwrap();
    posts
        .create_post(alice.id, "Three".to_string(), "d".to_string())
        .await
        .unwrap();

    let bobs = posts.list_posts(PostFilter::ByAuthor(bob.id)).await.unwrap();
    assert_eq!(bobs.len(), 2);
    assert!(bobs.iter().all(|p| p.author_id == bob.id));
    assert!(bobs.iter().any(|p| p.id == p1.id));
    assert!(bobs.iter().any(|p| p.id == p2.id));
}

#[tokio::test]
async fn date_buckets_partition_the_posts() {
    let (posts, authors, repo) = services();
    let bob = authors
        .create_author("Bob".to_string(), "USA".to_string())
        .await
        .unwrap();

    let fresh = posts
        .create_post(bob.id, "Fresh".to_string(), "d".to_string())
        .await
        .unwrap();

    let mut stale = Post::new(bob.id, "Stale".to_string(), "d".to_string());
    stale.created_at = Utc::now() - Duration::days(2);
    stale.updated_at = stale.created_at;
    let stale = repo.create(stale).await.unwrap();

    let today = posts.list_posts(PostFilter::FromToday).await.unwrap();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, fresh.id);

    let older = posts.list_posts(PostFilter::OldNews).await.unwrap();
    assert_eq!(older.len(), 1);
    assert_eq!(older[0].id, stale.id);
}
