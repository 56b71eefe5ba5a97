//! CLI module for the Courses API
//!
//! Provides the `serve` subcommand, which runs the HTTP server.

pub mod serve;

use clap::{Parser, Subcommand};

/// Courses API - REST service for managing courses
#[derive(Debug, Parser)]
#[command(name = "cursos-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "cursos-api",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_parse_serve_without_overrides() {
        let cli = Cli::try_parse_from(["cursos-api", "serve"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["cursos-api"]).is_err());
    }
}
