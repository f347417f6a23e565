//! Handler identification header
//!
//! Tags every response with `X-Shining-Web-Handler` so the chat platform's
//! request logs show which webhook answered.
//!
//! Author: hephaex@gmail.com

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

pub const HANDLER_HEADER: HeaderName = HeaderName::from_static("x-shining-web-handler");

pub const HANDLER_NAME: &str = "soton-rooms-handler";

pub async fn handler_header_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(HANDLER_HEADER, HeaderValue::from_static(HANDLER_NAME));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{Request, StatusCode},
        middleware,
        response::IntoResponse,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_header_added_to_success_and_error() {
        async fn ok_handler() -> impl IntoResponse {
            (StatusCode::OK, "ok")
        }
        async fn error_handler() -> impl IntoResponse {
            (StatusCode::INTERNAL_SERVER_ERROR, "error")
        }

        let app = Router::new()
            .route("/ok", get(ok_handler))
            .route("/error", get(error_handler))
            .layer(middleware::from_fn(handler_header_middleware));

        for uri in ["/ok", "/error"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();

            assert_eq!(
                response.headers().get("x-shining-web-handler").unwrap(),
                HANDLER_NAME
            );
        }
    }
}
