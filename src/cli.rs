use clap::Parser;
use std::path::PathBuf;

/// Form builder service - stored form schemas with validated submissions
#[derive(Parser, Debug, Clone)]
#[command(name = "formbase", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "FORMBASE_CONFIG", default_value = "formbase.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "FORMBASE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "FORMBASE_PORT")]
    pub port: Option<u16>,

    /// Database connection URL (sqlite://, postgres://, mysql://)
    #[arg(long, env = "FORMBASE_DATABASE_URL")]
    pub database_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["formbase"]);
        assert_eq!(cli.config, PathBuf::from("formbase.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.database_url.is_none());
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "formbase",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--database-url",
            "postgres://localhost/forms",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(
            cli.database_url,
            Some("postgres://localhost/forms".to_string())
        );
    }
}
