use std::fmt;

use actix_web::body::BoxBody;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Record kinds that can be looked up by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Character,
    Planet,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User => f.write_str("User"),
            Resource::Character => f.write_str("Character"),
            Resource::Planet => f.write_str("Planet"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0} does not exist")]
    NotFound(Resource),
    #[error("{0} does not exist as favorite")]
    FavoriteNotFound(Resource),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("An unspecified internal error ocurred: {0}")]
    InternalError(#[from] anyhow::Error),
    #[error("A database query failed: {0}")]
    QueryError(#[from] diesel::result::Error),
    #[error("An unspecified internal error ocurred")]
    DatabaseError(#[from] BlockingError),
}

impl ApiError {
    fn get_error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NF-00404",
            ApiError::FavoriteNotFound(_) => "FNF-00404",
            ApiError::InvalidPath(_) => "IP-00404",
            ApiError::InternalError(_) => "IE-00500",
            ApiError::QueryError(_) => "QE-00500",
            ApiError::DatabaseError(_) => "DE-00500",
        }
    }

    /// Text sent to the client. Server side causes stay in the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::NotFound(_) | ApiError::FavoriteNotFound(_) | ApiError::InvalidPath(_) => {
                self.to_string()
            }
            _ => "An unspecified internal error ocurred".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(value: &ApiError) -> Self {
        Self {
            message: value.public_message(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ApiError::NotFound(_) | ApiError::FavoriteNotFound(_) | ApiError::InvalidPath(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("[{}] {}", self.get_error_code(), self);
        } else {
            log::debug!("[{}] {}", self.get_error_code(), self);
        }
        HttpResponse::build(status).json(ErrorResponse::from(self))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use anyhow::anyhow;

    use super::*;

    async fn body_of(err: ApiError) -> (StatusCode, ErrorResponse) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn missing_records_map_to_not_found() {
        let (status, body) = body_of(ApiError::NotFound(Resource::User)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "User does not exist");

        let (status, body) = body_of(ApiError::NotFound(Resource::Planet)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Planet does not exist");
    }

    #[actix_web::test]
    async fn missing_favorites_name_the_target_kind() {
        let (status, body) = body_of(ApiError::FavoriteNotFound(Resource::Character)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Character does not exist as favorite");
    }

    #[actix_web::test]
    async fn internal_errors_hide_their_cause() {
        let (status, body) = body_of(ApiError::from(anyhow!("pool exhausted"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.message.contains("pool exhausted"));

        let (status, _) = body_of(ApiError::from(diesel::result::Error::RollbackTransaction)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
