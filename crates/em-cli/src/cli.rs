//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Interactive event manager.
///
/// Records events with cost attributes, warns about date clashes and
/// processes added events in the order they were entered. Nothing is saved
/// between runs.
#[derive(Debug, Parser)]
#[command(name = "em", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["em", "-v", "--config", "/tmp/em.toml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/em.toml")));
    }

    #[test]
    fn no_flags_is_interactive_default() {
        let cli = Cli::try_parse_from(["em"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }
}
