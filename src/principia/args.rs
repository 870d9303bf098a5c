use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "principia", version)]
#[command(
    about = "Runnable demonstrations of the specification pattern and the single responsibility principle",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to $PRINCIPIA_HOME, then the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the product catalog (no criteria: run the demo)
    #[command(alias = "f")]
    Filter {
        /// Keep products of this color (red, green, blue)
        #[arg(short, long)]
        color: Option<String>,

        /// Keep products of this size (small, medium, large, extra-large)
        #[arg(short, long)]
        size: Option<String>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write, trim and save a journal (no entries: use the demo entries)
    #[command(alias = "j")]
    Journal {
        /// Entries to add, in order
        entries: Vec<String>,

        /// Position to remove after adding (repeatable, applied in order)
        #[arg(short, long, allow_negative_numbers = true)]
        remove: Vec<i64>,

        /// Where to save (defaults to the configured save-destination)
        #[arg(short, long)]
        destination: Option<String>,

        /// Allow replacing an earlier save
        #[arg(long)]
        overwrite: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (separator, save-destination, overwrite)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_removals() {
        let cli = Cli::try_parse_from(["principia", "journal", "a", "-r", "-1", "--remove", "0"])
            .unwrap();
        match cli.command {
            Some(Commands::Journal {
                entries, remove, ..
            }) => {
                assert_eq!(entries, vec!["a"]);
                assert_eq!(remove, vec![-1, 0]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn config_value_may_start_with_dashes() {
        let cli = Cli::try_parse_from(["principia", "config", "separator", "-----"]).unwrap();
        match cli.command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("separator"));
                assert_eq!(value.as_deref(), Some("-----"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["principia", "filter", "--verbose", "--color", "blue"])
            .unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Some(Commands::Filter { color: Some(ref c), .. }) if c == "blue"
        ));
    }
}
