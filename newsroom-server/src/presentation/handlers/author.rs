use crate::application::author_service::AuthorService;
use crate::data::author_repository::PostgresAuthorRepository;
use crate::domain::error::DomainError;
use crate::presentation::dto::{
    AuthorForm, CreateAuthorRequest, ListAuthorsResponse, UpdateAuthorRequest,
};
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, route, web};
use tracing::info;
use uuid::Uuid;

#[get("/authors")]
pub async fn list_authors(
    req: HttpRequest,
    service: web::Data<AuthorService<PostgresAuthorRepository>>,
) -> Result<HttpResponse, DomainError> {
    let authors = service.list_authors().await?;

    info!(
        request_id = %request_id(&req),
        total = authors.len(),
        "authors retrieved"
    );

    Ok(HttpResponse::Ok().json(ListAuthorsResponse { authors }))
}

#[get("/authors/new")]
pub async fn new_author() -> Result<HttpResponse, DomainError> {
    Ok(HttpResponse::Ok().json(AuthorForm::blank()))
}

#[get("/authors/{id}")]
pub async fn get_author(
    service: web::Data<AuthorService<PostgresAuthorRepository>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let author = service.get_author(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(author))
}

#[post("/authors")]
pub async fn create_author(
    req: HttpRequest,
    service: web::Data<AuthorService<PostgresAuthorRepository>>,
    payload: web::Json<CreateAuthorRequest>,
) -> Result<HttpResponse, DomainError> {
    let payload = payload.into_inner();
    let author = service.create_author(payload.name, payload.hometown).await?;

    info!(
        request_id = %request_id(&req),
        author_id = %author.id,
        "author created"
    );

    Ok(HttpResponse::Created().json(author))
}

#[get("/authors/{id}/edit")]
pub async fn edit_author(
    service: web::Data<AuthorService<PostgresAuthorRepository>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let author = service.get_author(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AuthorForm::from_author(author)))
}

#[route("/authors/{id}", method = "PUT", method = "PATCH")]
pub async fn update_author(
    req: HttpRequest,
    service: web::Data<AuthorService<PostgresAuthorRepository>>,
    payload: web::Json<UpdateAuthorRequest>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, DomainError> {
    let author_id = path.into_inner();
    let payload = payload.into_inner();
    let author = service
        .update_author(author_id, payload.name, payload.hometown)
        .await?;

    info!(
        request_id = %request_id(&req),
        author_id = %author.id,
        "author updated"
    );

    Ok(HttpResponse::Ok().json(author))
}
