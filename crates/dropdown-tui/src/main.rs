mod action;
mod app;
mod click_outside;
mod component;
mod components;
mod config;
mod focus;
mod keys;
mod platform;
mod session;
mod theme;
mod widgets;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let log_path = platform::log_path();
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Config is read before logging starts so its filter can apply; failures
    // are reported once the subscriber is up.
    let loaded = config::Config::load();
    let default_filter = match &loaded {
        Ok(c) => c.logging.filter.clone(),
        Err(_) => config::LoggingConfig::default().filter,
    };

    // RUST_LOG wins over the configured filter.
    let log_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(EnvFilter::new(log_filter.as_str()))
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("dropdown-demo log: {}", log_path.display());
    tracing::info!("dropdown demo starting…");

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config unusable, falling back to defaults: {}", e);
        config::Config::default()
    });

    let session_path = platform::session_path();
    let session = session::Session::load(&session_path);

    app::App::new(&config, session, session_path).run().await
}
