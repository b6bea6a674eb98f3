//! HTTP server - hosts the rendered site.
//!
//! ```text
//! GET /healthz        → 200 "ok"
//! GET /, /index.html  → 200 home document
//! GET /*              → 404 not-found document
//! other methods       → 405
//! ```
//!
//! Every request renders its page afresh; there is no shared state.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tgbot_site::{Page, render_document};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

/// Build the site router.
pub fn router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(serve_page)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn serve_page(method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let page = Page::from_path(uri.path());
    let status = match page {
        Page::Home => StatusCode::OK,
        Page::NotFound => {
            debug!(path = %uri.path(), "no page for path");
            StatusCode::NOT_FOUND
        }
    };
    (status, Html(render_document(page))).into_response()
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local = listener.local_addr().unwrap_or(addr);

    info!(%local, "serving landing page");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    async fn get_path(method: Method, path: &str) -> (StatusCode, String, Option<String>) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), content_type)
    }

    #[tokio::test]
    async fn root_serves_home_document() {
        let (status, body, content_type) = get_path(Method::GET, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert_eq!(body, render_document(Page::Home));
    }

    #[tokio::test]
    async fn index_html_is_home() {
        let (status, body, _) = get_path(Method::GET, "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Команды бота:"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found_page() {
        let (status, body, _) = get_path(Method::GET, "/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Страница не найдена"));
        assert!(body.contains("<title>Telegram AI Bot</title>"));
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let (status, body, _) = get_path(Method::GET, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn post_is_rejected() {
        let (status, _, _) = get_path(Method::POST, "/").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn post_to_unknown_path_is_405_not_404() {
        let (status, body, _) = get_path(Method::POST, "/missing").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.is_empty());

        let (status, _, _) = get_path(Method::POST, "/healthz").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn head_root_is_ok_without_body() {
        let (status, body, _) = get_path(Method::HEAD, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn repeated_requests_are_identical() {
        let (_, first, _) = get_path(Method::GET, "/").await;
        let (_, second, _) = get_path(Method::GET, "/").await;
        assert_eq!(first, second);
    }
}
