use std::sync::Arc;

use axum::http::{HeaderName, Method, header};
use axum::{Router, routing::get};
use clap::Parser;
use shobdokosh::config::Cli;
use shobdokosh::handler::{AppState, healthcheck};
use shobdokosh::store::Storage;
use shobdokosh::{saved_words, sentences, words};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Ensure the data directory exists before any store touches it
    if let Err(e) = std::fs::create_dir_all(&args.data_dir) {
        eprintln!("failed to create data directory {:?}: {}", args.data_dir, e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt().json().init();
    tracing::info!("shobdokosh.svc starting");

    let store = Arc::new(Storage::new(&args.data_dir));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
        ]);

    let app = Router::new()
        .route("/", get(healthcheck))
        .nest(
            "/api",
            Router::new()
                .merge(words::routes())
                .merge(saved_words::routes())
                .merge(sentences::routes()),
        )
        .layer(cors)
        .with_state(AppState { store });

    let address = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("shobdokosh.svc running on {}", &address);
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, preparing to shutdown");
        }
    }

    tracing::info!("shobdokosh.svc going off, graceful shutdown complete");
}
