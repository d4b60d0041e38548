use crate::domain::author::Author;
use crate::domain::post::{DateFilter, Post, PostFilter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ======================= AUTHORS =======================

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub hometown: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: String,
    pub hometown: String,
}

#[derive(Debug, Serialize)]
pub struct ListAuthorsResponse {
    pub authors: Vec<Author>,
}

/// View-model for the author form endpoints, blank for `new` and populated
/// for `edit`.
#[derive(Debug, Serialize)]
pub struct AuthorForm {
    pub id: Option<Uuid>,
    pub name: String,
    pub hometown: String,
}

impl AuthorForm {
    pub fn blank() -> Self {
        Self {
            id: None,
            name: String::new(),
            hometown: String::new(),
        }
    }

    pub fn from_author(author: Author) -> Self {
        Self {
            id: Some(author.id),
            name: author.name,
            hometown: author.hometown,
        }
    }
}

// ======================= POSTS =======================

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, deserialize_with = "empty_as_none_uuid")]
    pub author: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_as_none_date")]
    pub date: Option<DateFilter>,
}

impl ListPostsQuery {
    pub fn filter(&self) -> PostFilter {
        PostFilter::resolve(self.author, self.date)
    }
}

// Blank query parameters count as absent, so a form submitted with empty
// filter controls still resolves to the unfiltered list.

fn empty_as_none_uuid<'de, D>(de: D) -> Result<Option<Uuid>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn empty_as_none_date<'de, D>(de: D) -> Result<Option<DateFilter>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some("today") | Some("Today") => Ok(Some(DateFilter::Today)),
        Some("older") | Some("Older") => Ok(Some(DateFilter::Older)),
        Some(other) => Err(serde::de::Error::custom(format!(
            "unknown date filter: {other}"
        ))),
    }
}

#[derive(Debug, Serialize)]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
    /// author collection backing the list's filter control
    pub authors: Vec<Author>,
}

#[derive(Debug, Serialize)]
pub struct PostDetail {
    pub post: Post,
    pub author: Author,
}

/// View-model for the post form endpoints. `authors` carries the selectable
/// options for the author control; on `edit` the author is fixed.
#[derive(Debug, Serialize)]
pub struct PostForm {
    pub id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub author_id: Option<Uuid>,
    pub authors: Vec<Author>,
}

impl PostForm {
    pub fn blank(authors: Vec<Author>) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            author_id: None,
            authors,
        }
    }

    pub fn from_post(post: Post, authors: Vec<Author>) -> Self {
        Self {
            id: Some(post.id),
            title: post.title,
            description: post.description,
            author_id: Some(post.author_id),
            authors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web::Query;

    #[test]
    fn list_query_prefers_author_over_date() {
        let author = Uuid::new_v4();
        let query = ListPostsQuery {
            author: Some(author),
            date: Some(DateFilter::Older),
        };
        assert_eq!(query.filter(), PostFilter::ByAuthor(author));
    }

    #[test]
    fn blank_query_params_mean_unfiltered() {
        let query = Query::<ListPostsQuery>::from_query("author=&date=").unwrap();
        assert_eq!(query.filter(), PostFilter::All);

        let query = Query::<ListPostsQuery>::from_query("").unwrap();
        assert_eq!(query.filter(), PostFilter::All);
    }

    #[test]
    fn date_param_accepts_both_spellings() {
        let query = Query::<ListPostsQuery>::from_query("date=Today").unwrap();
        assert_eq!(query.filter(), PostFilter::FromToday);

        let query = Query::<ListPostsQuery>::from_query("date=older").unwrap();
        assert_eq!(query.filter(), PostFilter::OldNews);
    }

    #[test]
    fn unknown_date_param_is_rejected() {
        assert!(Query::<ListPostsQuery>::from_query("date=yesterday").is_err());
    }

    #[test]
    fn author_param_filters_by_author() {
        let author = Uuid::new_v4();
        let query =
            Query::<ListPostsQuery>::from_query(&format!("author={author}&date=today")).unwrap();
        assert_eq!(query.filter(), PostFilter::ByAuthor(author));
    }

    #[test]
    fn blank_author_form_has_no_id() {
        let form = AuthorForm::blank();
        assert!(form.id.is_none());
        assert!(form.name.is_empty());
        assert!(form.hometown.is_empty());
    }
}
