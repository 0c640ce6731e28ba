//! # provkit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use provkit_cli::config::{run_config, ConfigArgs};
use provkit_cli::preset::{run_preset, PresetArgs};
use provkit_cli::validate::{run_validate, ValidateArgs};

/// provkit: content-provenance manifest toolkit.
///
/// Builds manifest documents from presets, validates manifest JSON before
/// it is handed to a signing engine, and inspects signing configuration.
#[derive(Parser, Debug)]
#[command(name = "provkit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the signing configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a manifest from a preset.
    Preset(PresetArgs),

    /// Strictly validate manifest JSON files.
    Validate(ValidateArgs),

    /// Show or check the signing configuration.
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "provkit starting");

    let result = match &cli.command {
        Commands::Preset(args) => run_preset(args),
        Commands::Validate(args) => run_validate(args),
        Commands::Config(args) => run_config(args, cli.config.as_deref()),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provkit_cli::config::ConfigCommand;
    use provkit_cli::preset::PresetKind;

    #[test]
    fn cli_parse_preset_with_global_options() {
        let cli = Cli::try_parse_from([
            "provkit",
            "-vv",
            "preset",
            "basic-image",
            "--title",
            "a.jpg",
            "--format",
            "image/png",
            "--out",
            "m.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Preset(args) => {
                assert!(matches!(args.kind, PresetKind::BasicImage { ref title, .. } if title == "a.jpg"));
                assert_eq!(args.common.format.as_deref(), Some("image/png"));
                assert_eq!(args.common.out, Some(PathBuf::from("m.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_preset_default_format() {
        let cli = Cli::try_parse_from(["provkit", "preset", "screenshot", "--device", "Laptop"]).unwrap();
        if let Commands::Preset(args) = cli.command {
            assert_eq!(args.common.format, None);
            assert_eq!(args.kind.default_format(), "image/jpeg");
            assert!(!args.common.thumbnail);
        }
    }

    #[test]
    fn cli_parse_validate_paths() {
        let cli = Cli::try_parse_from(["provkit", "validate", "a.json", "b.json", "--summary"]).unwrap();
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.paths, vec![PathBuf::from("a.json"), PathBuf::from("b.json")]);
            assert!(args.summary);
        } else {
            panic!("expected validate");
        }
    }

    #[test]
    fn cli_parse_validate_requires_path() {
        assert!(Cli::try_parse_from(["provkit", "validate"]).is_err());
    }

    #[test]
    fn cli_parse_config_show_with_global_config() {
        let cli = Cli::try_parse_from(["provkit", "config", "show", "--config", "provkit.yaml", "--no-env"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("provkit.yaml")));
        if let Commands::Config(args) = cli.command {
            assert!(matches!(args.command, ConfigCommand::Show));
            assert!(args.no_env);
        } else {
            panic!("expected config");
        }
    }

    #[test]
    fn cli_parse_creator_verified_identities() {
        let cli = Cli::try_parse_from([
            "provkit",
            "preset",
            "creator-verified",
            "--title",
            "c.jpg",
            "--identity",
            "github=ada",
            "--identity",
            "x=ada",
        ])
        .unwrap();
        match cli.command {
            Commands::Preset(args) => match args.kind {
                PresetKind::CreatorVerified { identities, .. } => assert_eq!(identities.len(), 2),
                other => panic!("unexpected preset: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parse_unknown_preset_fails() {
        assert!(Cli::try_parse_from(["provkit", "preset", "hologram", "--title", "x"]).is_err());
    }

    #[test]
    fn cli_parse_lat_requires_lon() {
        assert!(Cli::try_parse_from(["provkit", "preset", "photo", "--title", "p", "--lat", "1.0"]).is_err());
    }
}
