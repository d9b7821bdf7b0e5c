use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use tracing::{info, warn};

use mergington::store::{self, ActivityDirectory};
use mergington::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    // In-memory directory, seeded once. Nothing survives a restart.
    let directory = store::shared(ActivityDirectory::seed());
    let app = web::router(directory);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!("could not bind {}: {}. Trying {}:{}", addr, e, host, port + 1);
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("no local address");
    info!(
        "Mergington activities API listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await.expect("server error");
}
