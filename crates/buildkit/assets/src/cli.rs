//! `asset-compiler` command line.
//!
//! The surface is exactly `--input <DIR> --output <DIR>`: four arguments after
//! the program name, nothing more or less. Anything else is a usage error
//! reported on stderr with a non-zero exit.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::compiler::{AssetCompiler, CompileReport};
use crate::config::CompilerConfig;
use crate::error::AssetResult;

/// Arguments expected after the program name.
pub const EXPECTED_ARGS: usize = 4;

/// Compile the server's web assets into embeddable headers
#[derive(Debug, Parser)]
#[command(name = "asset-compiler", disable_help_flag = true)]
pub struct Cli {
    /// Directory holding the web assets
    #[arg(long, value_name = "DIR")]
    pub input: PathBuf,

    /// Directory receiving the generated headers
    #[arg(long, value_name = "DIR")]
    pub output: PathBuf,
}

impl Cli {
    /// Parse `args` (program name first), rejecting any count other than
    /// [`EXPECTED_ARGS`] before clap sees them. This rules out the
    /// `--input=DIR` spelling.
    pub fn try_parse_strict<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let supplied = args.len().saturating_sub(1);
        if supplied != EXPECTED_ARGS {
            return Err(Cli::command().error(
                ErrorKind::WrongNumberOfValues,
                format!(
                    "expected exactly {EXPECTED_ARGS} arguments (--input <DIR> --output <DIR>), got {supplied}"
                ),
            ));
        }
        Cli::try_parse_from(args)
    }

    pub fn config(&self) -> CompilerConfig {
        CompilerConfig::new(&self.input, &self.output)
    }
}

/// Install the stderr log subscriber. Verbosity comes from `RUST_LOG`,
/// defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Compile the default manifest as configured by `cli`.
pub fn run(cli: &Cli) -> AssetResult<CompileReport> {
    AssetCompiler::new(cli.config()).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_input_and_output() {
        let cli =
            Cli::try_parse_strict(["asset-compiler", "--input", "public", "--output", "gen"])
                .unwrap();
        assert_eq!(cli.input, PathBuf::from("public"));
        assert_eq!(cli.output, PathBuf::from("gen"));

        let config = cli.config();
        assert_eq!(config.input_dir, PathBuf::from("public"));
        assert_eq!(config.output_dir, PathBuf::from("gen"));
    }

    #[test]
    fn rejects_missing_arguments() {
        assert!(Cli::try_parse_strict(["asset-compiler"]).is_err());
        assert!(Cli::try_parse_strict(["asset-compiler", "--input", "public"]).is_err());
        assert!(Cli::try_parse_strict(["asset-compiler", "--output", "gen"]).is_err());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(Cli::try_parse_strict([
            "asset-compiler",
            "--input",
            "public",
            "--output",
            "gen",
            "extra"
        ])
        .is_err());
        assert!(Cli::try_parse_strict([
            "asset-compiler",
            "--input",
            "a",
            "--input",
            "b",
            "--output",
            "gen"
        ])
        .is_err());
    }

    #[test]
    fn rejects_equals_spelling() {
        let err = Cli::try_parse_strict(["asset-compiler", "--input=public", "--output=gen"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongNumberOfValues);

        let err =
            Cli::try_parse_strict(["asset-compiler", "--input=public", "--output", "gen"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WrongNumberOfValues);
    }

    #[test]
    fn rejects_help_flag() {
        assert!(Cli::try_parse_strict(["asset-compiler", "--help"]).is_err());
        assert!(Cli::try_parse_strict(["asset-compiler", "--help", "a", "--output", "b"]).is_err());
    }

    #[test]
    fn run_compiles_manifest() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for entry in crate::DEFAULT_MANIFEST {
            std::fs::write(input.path().join(entry.name), entry.name.as_bytes()).unwrap();
        }

        let cli = Cli::try_parse_strict([
            OsString::from("asset-compiler"),
            OsString::from("--input"),
            input.path().as_os_str().to_os_string(),
            OsString::from("--output"),
            output.path().as_os_str().to_os_string(),
        ])
        .unwrap();
        let report = run(&cli).unwrap();
        assert_eq!(report.assets.len(), crate::DEFAULT_MANIFEST.len());
    }
}
