//! CLI argument parsing for temple

use clap::{Parser, Subcommand, ValueEnum};

/// Default cap on accepted input length, in characters
pub const DEFAULT_MAX_LEN: usize = 10_000;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "temple")]
#[command(version)]
#[command(about = "Command-driven text toolkit: ciphers, big-number addition, path reconstruction, two-gram counts", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Maximum accepted input length in characters
    #[arg(long = "max-len", value_name = "CHARS", default_value_t = DEFAULT_MAX_LEN, global = true)]
    pub max_len: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shift every letter and digit of TEXT back by KEY positions
    Caesar {
        /// Shift key; any integer, reduced modulo 26 for letters and 10 for digits
        #[arg(allow_hyphen_values = true)]
        key: i32,
        /// Text to transform
        text: String,
    },

    /// Shift TEXT back by per-position offsets taken cyclically from KEY
    Vigenere {
        /// Key of ASCII uppercase letters; 'A' means no shift at that position
        key: String,
        /// Text to transform
        text: String,
    },

    /// Caesar-shift two decimal operands by KEY mod 10, then add them
    Addition {
        /// Shift key applied to each operand's digits before the addition
        #[arg(allow_hyphen_values = true)]
        key: i32,
        /// First decimal operand
        num1: String,
        /// Second decimal operand
        num2: String,
    },

    /// Rebuild a temple path from a moves line read on stdin
    Path {
        /// Grid rows
        rows: usize,
        /// Grid columns
        cols: usize,
    },

    /// Count adjacent word pairs in text read on stdin
    Bigram,
}
