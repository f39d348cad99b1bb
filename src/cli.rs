//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `randuuid`.
#[derive(Debug, Parser)]
#[command(name = "randuuid", version, about = "Generate random version-4 UUIDs")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print identifiers in canonical string form, one per line.
    Generate {
        /// Number of identifiers to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Hex-encoded entropy (at least 16 bytes) used instead of a random source.
        #[arg(long, value_name = "HEX")]
        random: Option<String>,
        /// Print call statistics as JSON to stderr when done.
        #[arg(long)]
        stats: bool,
    },
    /// Write one identifier into a zero-filled buffer and print the buffer as hex.
    Bytes {
        /// Buffer length in bytes.
        #[arg(long, default_value_t = 16)]
        len: usize,
        /// Offset of the identifier within the buffer.
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Hex-encoded entropy (at least 16 bytes) used instead of a random source.
        #[arg(long, value_name = "HEX")]
        random: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn generate_defaults_to_one() {
        let cli = Cli::parse_from(["randuuid", "generate"]);
        assert!(matches!(cli.command, Command::Generate { count: 1, random: None, stats: false }));
    }

    #[test]
    fn parses_generate_options() {
        let cli = Cli::parse_from(["randuuid", "generate", "-n", "5", "--random", "ab", "--stats"]);
        match cli.command {
            Command::Generate { count, random, stats } => {
                assert_eq!(count, 5);
                assert_eq!(random.as_deref(), Some("ab"));
                assert!(stats);
            }
            Command::Bytes { .. } => panic!("expected generate"),
        }
    }

    #[test]
    fn parses_bytes_subcommand() {
        let cli = Cli::parse_from(["randuuid", "bytes", "--len", "20", "--offset", "4"]);
        assert!(matches!(cli.command, Command::Bytes { len: 20, offset: 4, random: None }));
    }

    #[test]
    fn rejects_negative_offset() {
        assert!(Cli::try_parse_from(["randuuid", "bytes", "--offset", "-1"]).is_err());
    }
}
