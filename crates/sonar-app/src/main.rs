mod cli;
mod input;
mod repl;
mod terminal;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use sonar_common::SonarError;
use sonar_config::SonarConfig;
use sonar_session::{HttpSearchClient, SearchClientConfig, SessionController, SubmitOutcome};
use tracing_subscriber::EnvFilter;

use crate::terminal::TerminalRenderer;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        PathBuf::from(".env"),
        // Workspace root, two levels up from crates/sonar-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "sonar=info".parse().expect("valid default directive")),
            ),
        )
        .init();
}

fn build_session(
    config: &SonarConfig,
    color: bool,
    interactive: bool,
) -> sonar_common::Result<Arc<SessionController>> {
    let mut client_config = SearchClientConfig::new(config.search.endpoint.clone());
    if let Some(secs) = config.search.request_timeout_secs {
        client_config = client_config.with_request_timeout(Duration::from_secs(secs));
    }
    let client =
        HttpSearchClient::new(client_config).map_err(|e| SonarError::Network(e.to_string()))?;

    let renderer = TerminalRenderer::new(std::io::stdout(), &config.ui, color);
    if interactive {
        renderer.show_intro();
    }

    let session = SessionController::new(Arc::new(client), Arc::new(renderer))
        .with_history_limit(config.session.history_limit as usize)
        .with_fallback_template(config.session.fallback_message.clone());
    Ok(Arc::new(session))
}

async fn run(args: cli::Args, config: SonarConfig) -> sonar_common::Result<()> {
    let session = build_session(&config, !args.no_color, args.query.is_none())?;
    tracing::info!(
        session = %session.session_id().short(),
        endpoint = %config.search.endpoint,
        "session started"
    );

    if let Some(query) = args.query {
        return match session.submit_query(&query).await {
            SubmitOutcome::Answered(_) => Ok(()),
            SubmitOutcome::Failed(e) => Err(SonarError::Network(e.to_string())),
            SubmitOutcome::Ignored(reason) => {
                Err(SonarError::Session(format!("query not sent: {reason:?}")))
            }
            SubmitOutcome::Discarded => Err(SonarError::Session("reply discarded".into())),
        };
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(session, &config.ui, stdin).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging so its level can apply; failures are
    // reported once the subscriber is up.
    let loaded = sonar_config::load_config(args.config.as_deref().map(Path::new));

    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => format!("sonar={level}"),
        (None, Ok(config)) => format!("sonar={}", config.logging.level.as_directive()),
        (None, Err(_)) => "sonar=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("sonar v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        let mut config = SonarConfig::default();
        sonar_config::apply_env_overrides(&mut config);
        config
    });
    if let Some(endpoint) = args.endpoint.clone() {
        config.search.endpoint = endpoint;
    }

    match run(args, config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
