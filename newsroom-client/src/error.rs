use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsroomClientError {
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Not found")]
    NotFound,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl NewsroomClientError {
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::NOT_FOUND => NewsroomClientError::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                NewsroomClientError::InvalidRequest(message)
            }
            _ => NewsroomClientError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub(crate) async fn from_http_response(resp: reqwest::Response) -> Self {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        Self::from_status(status, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert!(matches!(
            NewsroomClientError::from_status(StatusCode::NOT_FOUND, String::new()),
            NewsroomClientError::NotFound
        ));
        assert!(matches!(
            NewsroomClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "bad".into()),
            NewsroomClientError::InvalidRequest(_)
        ));
        assert!(matches!(
            NewsroomClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            NewsroomClientError::Api { status: 500, .. }
        ));
    }
}
