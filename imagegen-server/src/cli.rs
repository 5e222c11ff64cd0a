use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use imagegen_core::config::{DEFAULT_UPSTREAM_TIMEOUT_SECS, RelayConfig};

use crate::router::StaticSettings;

#[derive(Parser, Debug)]
#[command(
    name = "imagegen-server",
    about = "Image Relay - turns a text prompt into an inline PNG via Hugging Face Inference",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[arg(long, env = "HF_API_KEY", hide_env_values = true, help = "Hugging Face API token")]
    pub api_key: Option<String>,

    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(
        long,
        env = "RUN_MODE",
        value_enum,
        default_value_t = RunMode::Local,
        help = "local: bind HOST:PORT; hosted: use the socket handed over by the host"
    )]
    pub mode: RunMode,

    #[arg(long, env = "HF_INFERENCE_URL", help = "Override the inference endpoint URL")]
    pub inference_url: Option<String>,

    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS)]
    pub upstream_timeout_secs: u64,

    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[arg(long, env = "INDEX_FILE", default_value = "index.html")]
    pub index_file: PathBuf,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    #[value(alias = "development")]
    Local,
    #[value(alias = "production")]
    Hosted,
}

impl Cli {
    pub fn relay_config(&self) -> RelayConfig {
        RelayConfig::new(self.api_key.clone())
            .with_inference_url(self.inference_url.clone())
            .with_upstream_timeout(Duration::from_secs(self.upstream_timeout_secs))
    }

    pub fn static_settings(&self) -> StaticSettings {
        StaticSettings { static_dir: self.static_dir.clone(), index_file: self.index_file.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("imagegen-server").chain(args.iter().copied());
        Cli::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = parse(&[
            "--api-key",
            "hf_abc",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--mode",
            "hosted",
            "--upstream-timeout-secs",
            "30",
            "--static-dir",
            "assets",
            "--index-file",
            "landing.html",
        ]);

        assert_eq!(cli.port, 8080);
        assert_eq!(cli.host, "127.0.0.1");
        assert_eq!(cli.mode, RunMode::Hosted);

        let config = cli.relay_config();
        assert_eq!(config.api_key(), Some("hf_abc"));
        assert_eq!(config.upstream_timeout(), Duration::from_secs(30));

        let settings = cli.static_settings();
        assert_eq!(settings.static_dir, PathBuf::from("assets"));
        assert_eq!(settings.index_file, PathBuf::from("landing.html"));
    }

    #[test]
    fn test_production_is_hosted_alias() {
        assert_eq!(parse(&["--mode", "production"]).mode, RunMode::Hosted);
        assert_eq!(parse(&["--mode", "development"]).mode, RunMode::Local);
    }

    #[test]
    fn test_empty_api_key_is_unset() {
        let cli = parse(&["--api-key", ""]);
        assert!(!cli.relay_config().has_api_key());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["imagegen-server", "--port", "99999"]).is_err());
        assert!(Cli::try_parse_from(["imagegen-server", "--mode", "lambda"]).is_err());
    }
}
