// Describe a single IPv4 or IPv6 network given in CIDR notation.

mod calculator;
pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;

pub use calculator::calculate;
pub use cli::Cli;
pub use error::{CalcError, InvalidReason};
pub use models::{Family, SubnetInfo};

/// Compute and render the network named on the command line.
///
/// Returns the text for stdout, or the error message to report.
pub fn run(cli: &Cli) -> Result<String, CalcError> {
    let info = calculate(&cli.network_address, cli.family())?;
    output::render(&info, cli.output_format())
        .map_err(|e| CalcError::Unexpected(format!("rendering output: {e}")))
}
