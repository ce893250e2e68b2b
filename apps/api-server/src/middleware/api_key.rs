//! API key extractor for mutating endpoints.

use std::future::{Ready, ready};
use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload};

use uyd_infra::auth::{ApiKeyError, ApiKeyVerifier};

use super::error::AppError;

/// Header carrying the shared-secret credential.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Verified API key marker extractor.
///
/// Add it as a handler parameter to require the key:
/// ```ignore
/// async fn delete_program(_key: ApiKey, ...) -> AppResult<HttpResponse> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ApiKey;

impl FromRequest for ApiKey {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = match req.app_data::<actix_web::web::Data<Arc<ApiKeyVerifier>>>() {
            Some(verifier) => verifier,
            None => {
                tracing::error!("ApiKeyVerifier not found in app data");
                return ready(Err(AppError::from(ApiKeyError::NotConfigured)));
            }
        };

        let provided = req
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        ready(verifier.verify(provided).map(|_| ApiKey).map_err(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    use crate::middleware::error::AppResult;

    async fn guarded(_key: ApiKey) -> AppResult<HttpResponse> {
        Ok(HttpResponse::Ok().finish())
    }

    fn verifier() -> web::Data<Arc<ApiKeyVerifier>> {
        web::Data::new(Arc::new(ApiKeyVerifier::new(Some("secret123".to_owned()))))
    }

    #[actix_web::test]
    async fn missing_key_yields_401() {
        let app = test::init_service(
            App::new()
                .app_data(verifier())
                .route("/guarded", web::post().to(guarded)),
        )
        .await;

        let req = test::TestRequest::post().uri("/guarded").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn wrong_key_yields_403() {
        let app = test::init_service(
            App::new()
                .app_data(verifier())
                .route("/guarded", web::post().to(guarded)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/guarded")
            .insert_header((API_KEY_HEADER, "wrong"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn matching_key_passes() {
        let app = test::init_service(
            App::new()
                .app_data(verifier())
                .route("/guarded", web::post().to(guarded)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/guarded")
            .insert_header((API_KEY_HEADER, "secret123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn unconfigured_key_yields_500() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(ApiKeyVerifier::new(None))))
                .route("/guarded", web::post().to(guarded)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/guarded")
            .insert_header((API_KEY_HEADER, "secret123"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
