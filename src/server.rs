use std::io;
use std::net::SocketAddr;

use axum::Router;
use clap::Parser;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use thiserror::Error;
use tower_http::compression::CompressionLayer;
use tracing::info;

use crate::app::{App, shell};

#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to; overrides `site-addr`
    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<SocketAddr>,
    /// Tracing filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Loads the leptos options from `Cargo.toml`, applying the CLI overrides.
pub fn load_options(config: &ServerConfig) -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(bind) = config.bind {
        leptos_options.site_addr = bind;
    }
    Ok(leptos_options)
}

pub fn router(leptos_options: LeptosOptions) -> Router {
    let shell_options = leptos_options.clone();
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes(&leptos_options, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new().gzip(true).zstd(true))
        .with_state(leptos_options)
}

pub async fn serve(leptos_options: LeptosOptions) -> Result<(), ServerError> {
    let addr = leptos_options.site_addr;
    let app = router(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_flag_parses_socket_addr() {
        let config =
            ServerConfig::try_parse_from(["courses-frontend", "--bind", "127.0.0.1:4000"]).unwrap();
        assert_eq!(config.bind, Some("127.0.0.1:4000".parse().unwrap()));
    }

    #[test]
    fn rejects_malformed_bind() {
        assert!(ServerConfig::try_parse_from(["courses-frontend", "--bind", "nope"]).is_err());
    }

    #[test]
    fn bind_error_names_address() {
        let err = ServerError::Bind {
            addr: "0.0.0.0:3000".parse().unwrap(),
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "failed to bind 0.0.0.0:3000: in use");
    }
}
