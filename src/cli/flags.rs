use clap::Parser;

/// Generate random passwords from letters, digits and ASCII punctuation.
///
/// Run without arguments in a terminal to open the interactive menu.
#[derive(Debug, Default, Parser)]
#[command(name = "securepass", version)]
pub struct CliFlags {
    /// Characters per password
    #[arg(
        short,
        long,
        value_name = "N",
        env = "SECUREPASS_LENGTH",
        allow_hyphen_values = true
    )]
    pub length: Option<String>,

    /// How many passwords to generate, one per line
    #[arg(short, long, value_name = "N", env = "SECUREPASS_NUMBER")]
    pub number: Option<usize>,

    /// Leave out letters (a-z, A-Z)
    #[arg(long)]
    pub no_letters: bool,

    /// Leave out numbers (0-9)
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out symbols (ASCII punctuation)
    #[arg(long)]
    pub no_symbols: bool,

    /// Refuse lengths above this value
    #[arg(long, value_name = "N", env = "SECUREPASS_MAX_LENGTH")]
    pub max_length: Option<usize>,

    /// Warn when the length is above this value
    #[arg(long, value_name = "N", env = "SECUREPASS_WARN_LENGTH")]
    pub warn_length: Option<usize>,

    /// Suppress warnings; only passwords and errors are printed
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive menu with these settings
    #[arg(short, long)]
    pub interactive: bool,
}
