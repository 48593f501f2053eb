//! Command-line surface for the resume engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "resumake",
    about = "Typeset a structured JSON resume into a PDF via LaTeX",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the resume repository root directory
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a resume PDF from a JSON-with-comments document
    Build(BuildOpts),
    /// Print version information
    Version,
}

/// Options for the `build` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct BuildOpts {
    /// Path to the resume document (.json or .jsonc)
    pub input: PathBuf,

    /// Output base name; defaults to the input file stem
    pub output_name: Option<String>,

    /// Directory receiving the artifact and log
    #[arg(long, default_value = "out")]
    pub output_dir: PathBuf,

    /// Preserve the generated .tex sources in <output-dir>/resume/
    #[arg(long)]
    pub keep_sources: bool,

    /// Toolchain time budget in seconds
    #[arg(long, default_value_t = 60)]
    pub compile_timeout: u64,

    /// Escape LaTeX special characters in skill keywords
    #[arg(long)]
    pub escape_keywords: bool,

    /// Link employer names to their websites
    #[arg(long)]
    pub link_websites: bool,

    /// Render per-entry summaries of work entries
    #[arg(long)]
    pub show_summaries: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_with_input_only() {
        let cli = Cli::parse_from(["resumake", "build", "resume.jsonc"]);
        match cli.command {
            Command::Build(opts) => {
                assert_eq!(opts.input, PathBuf::from("resume.jsonc"));
                assert!(opts.output_name.is_none());
                assert_eq!(opts.output_dir, PathBuf::from("out"));
                assert_eq!(opts.compile_timeout, 60);
                assert!(!opts.keep_sources);
            }
            Command::Version => panic!("expected build command"),
        }
    }

    #[test]
    fn parse_build_with_output_name() {
        let cli = Cli::parse_from(["resumake", "build", "resume.jsonc", "ada"]);
        match cli.command {
            Command::Build(opts) => assert_eq!(opts.output_name.as_deref(), Some("ada")),
            Command::Version => panic!("expected build command"),
        }
    }

    #[test]
    fn parse_build_flags() {
        let cli = Cli::parse_from([
            "resumake",
            "build",
            "r.jsonc",
            "--keep-sources",
            "--compile-timeout",
            "120",
            "--escape-keywords",
            "--link-websites",
            "--output-dir",
            "dist",
        ]);
        match cli.command {
            Command::Build(opts) => {
                assert!(opts.keep_sources);
                assert_eq!(opts.compile_timeout, 120);
                assert!(opts.escape_keywords);
                assert!(opts.link_websites);
                assert_eq!(opts.output_dir, PathBuf::from("dist"));
            }
            Command::Version => panic!("expected build command"),
        }
    }

    #[test]
    fn parse_verbose_and_root() {
        let cli = Cli::parse_from(["resumake", "-v", "--root", "/repo", "build", "r.jsonc"]);
        assert!(cli.global.verbose);
        assert_eq!(cli.global.root, Some(PathBuf::from("/repo")));
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["resumake", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }
}
