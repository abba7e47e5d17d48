#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use courses_frontend::logging::init_logging;
    use courses_frontend::server::{ServerConfig, load_options, serve};

    let _ = dotenvy::dotenv();
    let config = ServerConfig::parse();
    init_logging(&config.log_filter)?;

    let leptos_options = load_options(&config).context("failed to load configuration")?;
    serve(leptos_options).await.context("server exited with error")?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
