use clap::{ArgAction, Parser, Subcommand};
use dacq_data::ValueType;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v warn, -vv info, -vvv debug, -vvvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encode a value given as text into hex bytes
    Encode {
        /// Value type name, e.g. LONG or BYTE_ARRAY
        value_type: ValueType,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Decode hex bytes into a value
    Decode {
        /// Value type name, e.g. LONG or BYTE_ARRAY
        value_type: ValueType,
        /// Hex byte pairs, optionally separated by whitespace
        hex: String,
    },
    /// Show the tag and every conversion of a value given as text
    Inspect {
        /// Value type name, e.g. LONG or BYTE_ARRAY
        value_type: ValueType,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::ERROR,
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            3 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
