use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sl_client::{ChatService, RestChatClient};
use sl_domain::config::Config;
use sl_domain::locale::Locale;
use sl_session::SessionController;

mod repl;

/// Terminal client for the conversational support service.
#[derive(Debug, Parser)]
#[command(name = "supportline", version)]
struct Args {
    /// Path to the TOML config file.
    #[arg(long, default_value = "supportline.toml")]
    config: String,

    /// Backend base URL (overrides config).
    #[arg(long)]
    backend_url: Option<String>,

    /// User identifier sent with every request (overrides config).
    #[arg(long)]
    user_id: Option<String>,

    /// Starting locale, e.g. `Hindi` (overrides config).
    #[arg(long)]
    lang: Option<Locale>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── Tracing ────────────────────────────────────────────────────
    // Logs go to stderr so they never interleave with the transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    EnvFilter::new("supportline=info,sl_session=info,sl_client=info,sl_domain=info")
                }),
        )
        .with_writer(std::io::stderr)
        .init();

    // ── Config ─────────────────────────────────────────────────────
    let args = Args::parse();
    let mut config = Config::load_or_default(&args.config);
    if let Some(url) = args.backend_url {
        config.backend.base_url = url;
    }

    let user_id = args
        .user_id
        .or_else(|| config.backend.user_id.clone())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    tracing::info!(
        base_url = %config.backend.base_url,
        user_id = %user_id,
        timeout_secs = ?config.backend.timeout_secs,
        "supportline starting"
    );

    // ── Backend client ─────────────────────────────────────────────
    let service: Arc<dyn ChatService> = Arc::new(RestChatClient::new(&config.backend)?);

    // ── Session ────────────────────────────────────────────────────
    // The session always starts in the default locale; a configured or
    // requested starting language goes through `change_locale` so sample
    // seeding behaves the same as a manual switch.
    let controller = SessionController::new(
        service.clone(),
        Arc::new(repl::ConsoleSink),
        user_id,
        Locale::default(),
    );

    let starting_locale = args.lang.unwrap_or(config.chat.default_locale);
    if starting_locale != Locale::default() {
        controller.change_locale(starting_locale);
    }

    // ── REPL ───────────────────────────────────────────────────────
    repl::run(&controller, service.as_ref()).await
}
