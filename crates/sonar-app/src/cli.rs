use clap::Parser;

/// sonar — a terminal chat front end for a search backend.
#[derive(Parser, Debug)]
#[command(name = "sonar", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Search endpoint URL (overrides config and SONAR_ENDPOINT).
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Ask a single question, print the answer, and exit.
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Disable ANSI styling of bot messages.
    #[arg(long)]
    pub no_color: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_shot_query() {
        let args = Args::try_parse_from(["sonar", "-q", "what is gg4", "--no-color"]).unwrap();
        assert_eq!(args.query.as_deref(), Some("what is gg4"));
        assert!(args.no_color);
        assert!(args.endpoint.is_none());
    }

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "sonar",
            "--endpoint",
            "https://search.example.com/search",
            "--log-level",
            "debug",
            "--config",
            "/tmp/sonar.toml",
        ])
        .unwrap();
        assert_eq!(
            args.endpoint.as_deref(),
            Some("https://search.example.com/search")
        );
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.config.as_deref(), Some("/tmp/sonar.toml"));
    }
}
