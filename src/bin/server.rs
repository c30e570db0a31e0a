use std::net::SocketAddr;

use axum::middleware;
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;

use welth::{
    AppState, Config, build_router,
    email::ResendSender,
    graceful_shutdown,
    logging::{add_tracing_layer, logging_middleware, setup_logging},
};

/// The JSON API server for seeding demo data and sending report emails.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();
    let config = Config::from_env();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let conn = Connection::open(&args.db_path).expect("Could not open the database.");
    let sender = ResendSender::new(config.resend_api_key, &config.resend_api_base)
        .expect("Could not create the email client.");
    let state = AppState::new(conn, sender, &config.email_from)
        .expect("Could not initialize the application state.");

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state).layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .unwrap();
}
