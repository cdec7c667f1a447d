//! Axum application setup.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/upload",
            post(handlers::upload_dataset)
                .layer(DefaultBodyLimit::max(state.max_upload_bytes)),
        )
        // Dataset views
        .route("/preview", get(handlers::get_preview))
        .route("/summary", get(handlers::get_summary))
        .route("/describe", get(handlers::get_describe))
        .route("/columns", get(handlers::get_columns))
        // Charts
        .route("/plot", post(handlers::plot_chart));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(cors)
        .with_state(state)
}

/// Start the web server. Returns after Ctrl+C.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use csvscope::Explorer;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const SALES: &str = "region,amount,order_date\n\
                         north,10.5,2024-01-01\n\
                         south,,2024-01-02\n\
                         north,7.25,2024-01-03\n";

    fn app() -> (AppState, Router) {
        let state = AppState::new(Explorer::new(), 1024 * 1024);
        (state.clone(), create_router(state))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn upload(name: &str, csv: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/upload?name={}", name))
            .body(Body::from(csv.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn plot(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/plot")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_views_need_a_dataset() {
        let (_, app) = app();

        for uri in ["/api/preview", "/api/summary", "/api/describe", "/api/columns"] {
            let (status, body) = send(&app, get_req(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body["error"], "no_dataset");
        }

        let (status, body) = send(&app, get_req("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["loaded"], false);
    }

    #[tokio::test]
    async fn test_upload_then_views() {
        let (_, app) = app();

        let (status, body) = send(&app, upload("sales.csv", SALES)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["file"], "sales.csv");
        assert_eq!(body["row_count"], 3);

        let (_, preview) = send(&app, get_req("/api/preview")).await;
        assert_eq!(preview["headers"], json!(["region", "amount", "order_date"]));
        assert_eq!(preview["dtypes"][2], "timestamp");

        let (_, summary) = send(&app, get_req("/api/summary")).await;
        assert_eq!(summary[0]["name"], "amount");
        assert_eq!(summary[0]["missing_count"], 1);
        assert_eq!(summary[0]["missing_ratio"], 33.33);

        let (_, describe) = send(&app, get_req("/api/describe")).await;
        assert_eq!(describe[0]["column"], "amount");
        assert_eq!(describe[0]["count"], 2);

        let (_, columns) = send(&app, get_req("/api/columns")).await;
        assert_eq!(
            columns["classification"]["categorical"],
            json!(["region", "amount", "order_date"])
        );
        assert_eq!(columns["charts"].as_array().map(|a| a.len()), Some(7));
    }

    #[tokio::test]
    async fn test_bad_upload_keeps_previous_dataset() {
        let (state, app) = app();
        send(&app, upload("sales.csv", SALES)).await;

        let (status, body) = send(&app, upload("broken.csv", "due_date\nsoon\n")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "parse_error");

        let session = state.session.read().await;
        assert_eq!(session.current().unwrap().source.file, "sales.csv");
    }

    #[tokio::test]
    async fn test_plot_requests() {
        let (_, app) = app();
        send(&app, upload("sales.csv", SALES)).await;

        let (status, body) = send(&app, plot(json!({"kind": "line", "x": "order_date"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["figure"].is_null());

        let (status, body) = send(&app, plot(json!({"kind": "pie", "x": "region"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["figure"]["title"], "Pie Chart of region");
        assert_eq!(body["figure"]["data"]["type"], "slices");

        let (status, body) = send(
            &app,
            plot(json!({"kind": "boxplot", "x": "amount", "y": "region"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "render_error");

        let (status, body) = send(&app, plot(json!({"kind": "radar", "x": "region"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_upload_size_limit() {
        let state = AppState::new(Explorer::new(), 16);
        let app = create_router(state);

        let response = app
            .oneshot(upload("big.csv", "a,b\n1,2\n3,4\n5,6\n7,8\n"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_index_is_served() {
        let (_, app) = app();
        let response = app.oneshot(get_req("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/html"
        );
    }
}
