//! errror CLI - builds the Trial and Errror site from templates.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

const BUILD_PROCESS: &str = "\
Build Process:
  1. Creates the output directory (dist/) if it doesn't exist
  2. Renders every registered page template into it
  3. Copies all static assets into it
  4. Serves it over HTTP when --serve is given

Flags may also be written with a single dash, e.g. -serve -port 9090.
Boolean flags take an optional value with '=', e.g. -serve=false.";

#[derive(Parser, Debug)]
#[command(name = "errror")]
#[command(about = "Build the site from templates into the dist/ directory")]
#[command(after_help = BUILD_PROCESS)]
#[command(version)]
pub struct Cli {
    /// Start HTTP server after building (serves the output directory)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    serve: bool,

    /// Port for HTTP server (default: 8000, or server.port from the config)
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Build the site without serving it, even when --serve is given
    #[arg(long)]
    build: bool,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Long flags that may be spelled with a single dash.
const LONG_FLAGS: &[&str] = &["serve", "port", "build", "config", "verbose"];

/// Rewrite single-dash long flags (`-serve`, `-port=9090`) to the
/// double-dash form clap expects.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some(s) if is_single_dash_long(s) => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}

/// Without any flags the tool only explains itself. Positional arguments
/// don't count as flags.
fn wants_usage(args: &[OsString]) -> bool {
    !args.iter().skip(1).any(|arg| {
        arg.to_str()
            .is_some_and(|s| s.len() > 1 && s.starts_with('-'))
    })
}

impl Cli {
    fn should_serve(&self) -> bool {
        self.serve && !self.build
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = normalize_args(std::env::args_os());
    if wants_usage(&args) {
        Cli::command().print_help()?;
        return Ok(());
    }

    let cli = Cli::parse_from(args);

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load(&cli.config)?;

    commands::build::run(&config)?;

    if cli.should_serve() {
        commands::serve::run(config.preview(cli.port)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_args(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_prints_usage() {
        assert!(wants_usage(&normalize_args(["errror"])));
        assert!(!wants_usage(&normalize_args(["errror", "-build"])));
    }

    #[test]
    fn positional_arguments_still_print_usage() {
        assert!(wants_usage(&normalize_args(["errror", "foo"])));
        assert!(wants_usage(&normalize_args(["errror", "foo", "-"])));
        assert!(!wants_usage(&normalize_args(["errror", "foo", "-v"])));
    }

    #[test]
    fn serve_accepts_boolean_values() {
        assert!(parse(&["errror", "-serve=true"]).serve);
        assert!(!parse(&["errror", "-serve=false"]).serve);
        assert!(!parse(&["errror", "-port", "9090"]).serve);

        let cli = parse(&["errror", "-serve", "-port", "9090"]);
        assert!(cli.serve);
        assert_eq!(cli.port, Some(9090));
    }

    #[test]
    fn accepts_single_dash_flags() {
        let cli = parse(&["errror", "-serve", "-port", "9090"]);

        assert!(cli.serve);
        assert_eq!(cli.port, Some(9090));
        assert!(!cli.build);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn accepts_double_dash_flags() {
        let cli = parse(&["errror", "--build", "--port=4000", "-v"]);

        assert!(cli.build);
        assert!(!cli.serve);
        assert!(cli.verbose);
        assert_eq!(cli.port, Some(4000));
    }

    #[test]
    fn build_flag_suppresses_serving() {
        assert!(!parse(&["errror", "-build", "-serve"]).should_serve());
        assert!(parse(&["errror", "-serve"]).should_serve());
        assert!(!parse(&["errror", "-serve=false"]).should_serve());
    }

    #[test]
    fn normalizes_only_known_flags() {
        let args = normalize_args(["errror", "-port=9090", "--serve", "-v", "-config", "-x"]);

        assert_eq!(
            args,
            ["errror", "--port=9090", "--serve", "-v", "--config", "-x"]
                .map(OsString::from)
                .to_vec()
        );
    }

    #[test]
    fn rejects_invalid_port() {
        let result = Cli::try_parse_from(normalize_args(["errror", "-port", "http"]));

        assert!(result.is_err());
    }
}
