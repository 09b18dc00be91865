use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

pub const ALLOWED_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";

pub const ALLOWED_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, \
     Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

/// Stamp permissive cross-origin headers on every response, errors included.
///
/// `tower_http::cors::CorsLayer` refuses a wildcard origin combined with
/// credentials, which browser clients of this API rely on, so the headers are
/// written directly.
pub async fn permissive_cors_middleware(req: Request, next: Next) -> impl IntoResponse {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        header::HeaderValue::from_static("true"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        header::HeaderValue::from_static(ALLOWED_HEADERS),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn,
        routing::get,
    };
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn headers_present_on_success_and_not_found() {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(from_fn(permissive_cors_middleware));

        for (uri, status) in [("/", StatusCode::OK), ("/missing", StatusCode::NOT_FOUND)] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), status);
            let headers = response.headers();
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOWED_METHODS);
            assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], ALLOWED_HEADERS);
        }
    }
}
