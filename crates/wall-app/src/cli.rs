use clap::Parser;

/// News Wall: a grid of live news streams with one audible tile.
#[derive(Parser, Debug)]
#[command(name = "newswall", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level or filter directive override (debug, info, wall_core=trace, ...).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "newswall",
            "--config",
            "/tmp/wall.toml",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config.as_deref(), Some("/tmp/wall.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn no_args_means_defaults() {
        let args = Args::parse_from(["newswall"]);
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }
}
