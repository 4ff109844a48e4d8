use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "swrkit")]
#[command(about = "Generate SWR cutlist workbooks from an openings table")]
#[command(version)]
pub struct CliArgs {
    /// Openings table (CSV with Tag / Overall Width in / Overall Height in / Qty)
    #[arg(long, short = 'i', value_name = "CSV")]
    pub input: PathBuf,

    /// Job configuration file (TOML)
    #[arg(long, short = 'c', value_name = "TOML")]
    pub config: PathBuf,

    /// Directory the four workbooks are written into
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Also fail the run on non-physical computed dimensions
    /// (by default those are logged as warnings and computed through)
    #[arg(long)]
    pub strict: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
