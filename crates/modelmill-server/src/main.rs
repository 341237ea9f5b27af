//! Binary entrypoint for the modelmill HTTP server.
//!
//! Takes exactly one command-line argument, the TCP port to listen on.
//! The image root is read from the `MODELMILL_IMG_ROOT` environment
//! variable (default: "img").

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use modelmill_compile::PassthroughCompiler;
use modelmill_server::router::build_router;
use modelmill_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 1 {
        eprintln!("usage: modelmill-server <port>");
        process::exit(2);
    }
    let port: u16 = match args[0].parse() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("port must be an integer");
            process::exit(2);
        }
    };

    let image_root = std::env::var("MODELMILL_IMG_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("img"));

    let state = AppState::new(Arc::new(PassthroughCompiler), image_root);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("modelmill server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
