use crate::application::author_service::AuthorService;
use crate::application::post_service::PostService;
use crate::data::author_repository::PostgresAuthorRepository;
use crate::data::post_repository::PostgresPostRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{
    CreatePostRequest, ListPostsQuery, ListPostsResponse, PostDetail, PostForm, UpdatePostRequest,
};
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, put, web};
use tracing::info;
use uuid::Uuid;

type Posts = PostService<PostgresPostRepository, PostgresAuthorRepository>;
type Authors = AuthorService<PostgresAuthorRepository>;

#[get("/posts")]
pub async fn list_posts(
    req: HttpRequest,
    posts: web::Data<Posts>,
    authors: web::Data<Authors>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, DomainError> {
    let filter = query.filter();
    let posts = posts.list_posts(filter).await?;
    // the list view exposes the author collection for its filter control
    let authors = authors.list_authors().await?;

    info!(
        request_id = %request_id(&req),
        filter = ?filter,
        total = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(ListPostsResponse { posts, authors }))
}

#[get("/posts/new")]
pub async fn new_post(authors: web::Data<Authors>) -> Result<HttpResponse, DomainError> {
    let authors = authors.list_authors().await?;
    Ok(HttpResponse::Ok().json(PostForm::blank(authors)))
}

#[get("/posts/{id}")]
pub async fn get_post(
    posts: web::Data<Posts>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let (post, author) = posts.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostDetail { post, author }))
}

#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    posts: web::Data<Posts>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let payload = payload.into_inner();
    let post = posts
        .create_post(payload.author_id, payload.title, payload.description)
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        author_id = %post.author_id,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[get("/posts/{id}/edit")]
pub async fn edit_post(
    posts: web::Data<Posts>,
    authors: web::Data<Authors>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let (post, _author) = posts.get_post(path.into_inner()).await?;
    let authors = authors.list_authors().await?;
    Ok(HttpResponse::Ok().json(PostForm::from_post(post, authors)))
}

#[put("/posts/{id}")]
pub async fn update_post(
    req: HttpRequest,
    posts: web::Data<Posts>,
    payload: web::Json<UpdatePostRequest>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let payload = payload.into_inner();
    let post = posts
        .update_post(post_id, payload.title, payload.description)
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = %post.id,
        "post updated"
    );

    Ok(HttpResponse::Ok().json(post))
}
