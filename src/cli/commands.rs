//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Substitute tags, expand ranges and validate names (default pipeline)
    Format {
        /// Names to format, e.g. sub-001 or sub-01@TO@05_@DATE@
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Expand @TO@ ranges only
    Expand {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Substitute @DATE@, @TIME@ and @DATETIME@ tags only
    Datetime {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Extract the value of one key from every name
    Extract {
        /// Key to extract, e.g. sub, ses or date
        #[arg(short, long)]
        key: String,
        /// Require integer values
        #[arg(short, long)]
        int: bool,
        /// Sort the values
        #[arg(short, long)]
        sort: bool,
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show the key-value pairs of each name
    Inspect {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// List the recognised tags
    Tags,
}
