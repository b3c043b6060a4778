//! Viewer identity extractor.
//!
//! The API gateway authenticates requests and injects the caller's id as an
//! `X-User-Id` header before forwarding to this service. Handlers that need
//! the viewer take a `ViewerId` parameter; requests without a valid header
//! are rejected with 401 before the handler body runs.

use crate::error::AppError;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

pub const VIEWER_HEADER: &str = "X-User-Id";

/// The authenticated viewer's user id, extracted from the gateway header.
#[derive(Debug, Clone, Copy)]
pub struct ViewerId(pub Uuid);

impl FromRequest for ViewerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .headers()
            .get(VIEWER_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value.trim()).ok());

        ready(match parsed {
            Some(id) => Ok(ViewerId(id)),
            None => Err(AppError::Unauthorized(format!(
                "missing or invalid {} header",
                VIEWER_HEADER
            ))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_rt::test]
    async fn extracts_valid_uuid() {
        let req = TestRequest::default()
            .insert_header((VIEWER_HEADER, "00000000-0000-0000-0000-000000000001"))
            .to_http_request();

        let viewer = ViewerId::extract(&req).await.unwrap();
        assert_eq!(viewer.0, Uuid::from_u128(1));
    }

    #[actix_rt::test]
    async fn rejects_missing_header() {
        let req = TestRequest::default().to_http_request();
        let err = ViewerId::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[actix_rt::test]
    async fn rejects_malformed_uuid() {
        let req = TestRequest::default()
            .insert_header((VIEWER_HEADER, "not-a-uuid"))
            .to_http_request();

        let err = ViewerId::extract(&req).await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
