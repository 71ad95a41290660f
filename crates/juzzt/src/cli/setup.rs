use clap::{Parser, Subcommand, ValueEnum};
use juzztapp::catalog::SortKey;
use juzztapp::model::RecordId;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter, e.g. `JUZZT_LOG=juzztapp=trace`.
pub const LOG_ENV: &str = "JUZZT_LOG";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "juzzt",
    bin_name = "juzzt",
    version,
    disable_help_subcommand = true,
    about = "Browse the Juzzt vinyl store and manage your cart from the terminal",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory for the cart and session (defaults to $JUZZT_DATA or the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog
    #[command(alias = "ls", display_order = 1)]
    Records {
        /// Only this genre ("all" for every genre)
        #[arg(short, long)]
        genre: Option<String>,

        /// Lowest price, inclusive
        #[arg(long, value_name = "PRICE")]
        min: Option<f64>,

        /// Highest price, inclusive
        #[arg(long, value_name = "PRICE")]
        max: Option<f64>,

        /// newest, priceAsc, priceDesc, titleAsc or titleDesc
        #[arg(short, long)]
        sort: Option<SortKey>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// List genres with the number of records in each
    #[command(display_order = 2)]
    Genres,

    /// Records on sale
    #[command(display_order = 3)]
    Sale,

    /// Show a single record
    #[command(display_order = 4)]
    Record { id: RecordId },

    /// Show the cart, or change it
    #[command(display_order = 10)]
    Cart {
        #[command(subcommand)]
        action: Option<CartCommands>,
    },

    /// Create an account
    #[command(display_order = 20)]
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "JUZZT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Log in and remember the session
    #[command(display_order = 21)]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long, env = "JUZZT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the session
    #[command(display_order = 22)]
    Logout,

    /// Show the logged-in account
    #[command(display_order = 23)]
    Profile,

    /// Show or change configuration
    #[command(display_order = 30)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CartCommands {
    /// Add one copy of a record
    Add { id: RecordId },

    /// Remove a record entirely
    #[command(alias = "rm")]
    Remove { id: RecordId },

    /// Set how many copies of a record to buy
    Qty {
        id: RecordId,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Empty the cart
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print one resolved value
    Get { key: String },

    /// Persist a value to juzzt.toml in the data directory
    Set { key: String, value: String },

    /// Generate a commented sample juzzt.toml
    Gen {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Installs the stderr log subscriber. `JUZZT_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "juzzt=debug,juzztapp=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
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
    fn parses_records_filters() {
        let cli = Cli::try_parse_from([
            "juzzt", "records", "--genre", "hard bop", "--max", "25", "--sort", "price-asc",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Records {
                genre,
                min,
                max,
                sort,
                page,
            }) => {
                assert_eq!(genre.as_deref(), Some("hard bop"));
                assert_eq!(min, None);
                assert_eq!(max, Some(25.0));
                assert_eq!(sort, Some(SortKey::PriceAsc));
                assert_eq!(page, 1);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["juzzt", "records", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn accepts_negative_quantity() {
        let cli = Cli::try_parse_from(["juzzt", "cart", "qty", "3", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Cart {
                action: Some(CartCommands::Qty {
                    id: 3,
                    quantity: -1
                })
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["juzzt", "cart", "--data", "/tmp/x", "--output", "json"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert_eq!(cli.output, OutputMode::Json);
    }
}
