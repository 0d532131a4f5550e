use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stardock")]
#[command(version, about = "Terminal client for the Stardock space-trading game")]
pub struct Cli {
    /// Directory holding the saved profile and game
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show profile, location and counters
    Status,

    /// Sign in with an email address
    SignIn {
        email: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Create a profile
    SignUp {
        email: String,

        /// Name other pilots see
        display_name: String,

        #[arg(short, long, default_value = "")]
        password: String,
    },

    /// Sign out and forget the saved profile
    SignOut,

    /// Edit the saved profile
    Profile {
        #[arg(long)]
        display_name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// List the galaxies that can be joined
    Galaxies,

    /// Join a galaxy and start a new game there
    Join {
        /// Galaxy id, short id or name (e.g. `galaxy_pirate`, `pirate`)
        galaxy: String,
    },

    /// Start over with a fresh ship in the home sector
    NewGame,

    /// Move to a connected sector (1 turn)
    Move {
        /// `sector_N` or just `N`
        sector: String,
    },

    /// Scan nearby sectors (1 turn)
    Scan,

    /// Dock at the local port (1 turn)
    Dock,

    /// Show commodity prices at the local port
    Market,

    /// Buy one unit of a commodity
    Buy { commodity: String },

    /// Sell one unit of a commodity
    Sell { commodity: String },

    /// Move credits from the wallet into the bank
    Deposit { amount: String },

    /// Move credits from the bank into the wallet
    Withdraw { amount: String },

    /// Show ship statistics and upgrade prices
    Ship,

    /// Upgrade a ship system (holds, shields, fighters, torps)
    Upgrade { stat: String },

    /// Rename the ship (500 credits)
    Rename { name: String },

    /// List mission offers
    Missions,

    /// Show the galaxy news feed
    Feed {
        /// Only show one category (combat, economy, missions, planets, system)
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Restore the full daily turn allowance
    ResetTurns,

    /// Open the interactive shell
    Play,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Default log filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
