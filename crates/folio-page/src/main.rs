mod config;
mod controller;
mod error;
mod matcher;
mod model;
mod render;

use folio_common::fetch::{DocumentClient, DocumentClientConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use controller::PageController;
use error::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout is reserved for the rendered fragment.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("building portfolio page");
    run().await?;
    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    info!(
        base_url = %config.base_url,
        timeout_ms = config.timeout.as_millis(),
        category = %config.category,
        "configuration loaded"
    );

    let client = DocumentClient::new(DocumentClientConfig {
        base_url: config.base_url.clone(),
        timeout: config.timeout,
    })?;

    let mut page = PageController::new();
    page.load(&client).await;
    info!(
        projects = page.project_count(),
        writeups = page.writeup_count(),
        "catalogs populated"
    );

    page.set_query(&config.query);
    page.set_category(&config.category);

    let html = format!(
        "<section id=\"projectGrid\" class=\"grid\">{}</section>\n\
         <section id=\"writeupGrid\" class=\"grid\">{}</section>\n",
        page.project_grid(),
        page.writeup_grid()
    );

    match &config.output {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!(path = %path.display(), "page fragment written");
        }
        None => print!("{html}"),
    }

    Ok(())
}
