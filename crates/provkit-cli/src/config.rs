//! # Config Subcommand
//!
//! Resolves the signing configuration the same way a signing session
//! would (YAML file, then environment overrides) and reports it. Key
//! material is never printed; `check` only reports that it was read.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use provkit_engine::EngineConfig;

/// Arguments for `provkit config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,

    /// Ignore `PROVKIT_*` and `SIGNING_SERVER_URL` environment overrides.
    #[arg(long, global = true)]
    pub no_env: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the resolved configuration as YAML.
    Show,
    /// Read the certificate and key files the configuration points at.
    Check,
}

/// Load `path` (or the defaults) and apply environment overrides unless
/// disabled.
pub fn resolve(path: Option<&Path>, use_env: bool) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading configuration: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    Ok(if use_env { config.apply_env() } else { config })
}

/// Render the resolved configuration. The signing endpoint is appended
/// when a server is configured.
pub fn render(config: &EngineConfig) -> Result<String> {
    let mut text = serde_yaml::to_string(config).context("rendering configuration")?;
    if let Some(url) = config.signing_url() {
        text.push_str(&format!("# signing endpoint: {url}\n"));
    }
    Ok(text)
}

/// Execute `provkit config`.
pub fn run_config(args: &ConfigArgs, config_path: Option<&Path>) -> Result<u8> {
    let config = resolve(config_path, !args.no_env)?;
    match args.command {
        ConfigCommand::Show => {
            print!("{}", render(&config)?);
            Ok(0)
        }
        ConfigCommand::Check => {
            let info = config.signer_info().context("reading signer material")?;
            println!("OK: algorithm={}", info.algorithm);
            println!("  certificate: {} bytes", info.certificate_pem.len());
            println!("  private key: present");
            println!("  timestamp authority: {}", info.ta_url.as_deref().unwrap_or("none"));
            Ok(0)
        }
    }
}
