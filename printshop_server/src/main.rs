use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use printshop_server::config::AppConfig;
use printshop_server::domains::pickup::handlers::FormatAmountQuery;
use printshop_server::domains::pickup::models::*;
use printshop_server::routes::create_router;
use printshop_server::shared::database::{Database, InMemoryPickupStore, PickupRepository, PickupStore};
use printshop_server::shared::services::AppState;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        printshop_server::domains::pickup::handlers::pickup_handler::create_pickup,
        printshop_server::domains::pickup::handlers::pickup_handler::get_pickup,
        printshop_server::domains::pickup::handlers::pickup_handler::get_pickup_by_order,
        printshop_server::domains::pickup::handlers::pickup_handler::collect_pickup,
        printshop_server::domains::pickup::handlers::currency_handler::format_amount
    ),
    components(schemas(
        OrderPickup,
        CreatePickupRequest,
        PickupResponse,
        FormattedAmountResponse,
        FormatAmountQuery
    )),
    tags(
        (name = "Pickups", description = "In-store pickup codes for print orders"),
        (name = "Currency", description = "INR amount formatting")
    ),
    info(
        title = "Print Shop Pickup Server",
        description = "Pickup code issuance and currency formatting for the print storefront",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::load().expect("Environment misconfigured");

    // 저장소 선택: DATABASE_URL 있으면 PostgreSQL, 없으면 메모리
    let store: Arc<dyn PickupStore> = match &config.database_url {
        Some(db_url) => {
            let db = Database::new(db_url)
                .await
                .expect("Failed to connect to database");
            db.initialize()
                .await
                .expect("Failed to initialize database");
            info!("Using PostgreSQL pickup store");
            Arc::new(PickupRepository::new(db.pool().clone()))
        }
        None => {
            warn!("Using in-memory pickup store, data is lost on restart");
            Arc::new(InMemoryPickupStore::new())
        }
    };

    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .expect("Invalid CORS_ORIGIN");
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT]);

    let address = format!("0.0.0.0:{}", config.port);
    let app_state = AppState::new(&config, store);

    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");

    info!("Server running on http://{address}");
    info!("Swagger UI available at http://{address}/api");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
