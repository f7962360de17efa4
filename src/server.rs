//! Web server module for colorpage.
//!
//! Builds the single-route axum router and serves it over plain HTTP on
//! all interfaces. The resolved configuration is injected as router state;
//! request handlers never read ambient global state.
//!
use axum::{Router, extract::State, response::Html, routing::get};
use tokio::net::TcpListener;

use crate::{
    config::{Config, PORT},
    html,
};

/// Build the application router. Unmatched paths fall through to axum's
/// default 404 response.
pub fn router(config: Config) -> Router {
    Router::new().route("/", get(home)).with_state(config)
}

/// Serve the landing page for the resolved background color
async fn home(State(config): State<Config>) -> Html<String> {
    Html(html::render(config.color))
}

/// Start the web server: resolve the configuration once, then serve forever
pub async fn run() {
    let config = Config::from_env();
    let app = router(config);

    println!(
        "🌐 Serving {} page at http://0.0.0.0:{}",
        config.color.as_css(),
        PORT
    );

    let addr = format!("0.0.0.0:{}", PORT);
    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind listening socket");

    axum::serve(listener, app).await.expect("server error");
}
