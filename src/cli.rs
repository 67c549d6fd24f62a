//! Command line arguments.

use crate::models::Family;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// Calculate IP subnet information for IPv4 or IPv6. Defaults to IPv6 if no version flag is specified.
#[derive(Parser, Debug)]
#[command(name = "subnet-calc", version, about)]
pub struct Cli {
    /// Specify IPv4 address calculation.
    #[arg(short = '4', conflicts_with = "ipv6")]
    pub ipv4: bool,

    /// Specify IPv6 address calculation.
    #[arg(short = '6')]
    pub ipv6: bool,

    /// The IP address and prefix in CIDR notation (e.g., 192.168.1.0/24 or 2001:db8::/32).
    pub network_address: String,

    /// Print the result as a JSON object.
    #[arg(long)]
    pub json: bool,

    /// Disable coloured error output.
    #[arg(long)]
    pub no_color: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Selected family, IPv6 unless `-4` was given.
    pub fn family(&self) -> Family {
        if self.ipv4 {
            Family::V4
        } else {
            Family::V6
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
