//! Command line front end for power dice calculations.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use model::budget::{RerollBudget, Tokens};
use model::threshold::PowerCheck;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "power-dice",
    about = "Success chances and optimal rerolls for power dice pools",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file with die face tables (default: the bundled reference tables)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Largest pool that will be evaluated
    #[arg(long, global = true, default_value = "8")]
    max_dice: usize,

    /// Log search details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chance that the faces currently shown pass the check
    Chance {
        #[command(flatten)]
        pool: PoolArgs,
    },

    /// Best dice to reroll for the faces currently shown
    Reroll {
        #[command(flatten)]
        pool: PoolArgs,

        #[command(flatten)]
        budget: BudgetArgs,
    },

    /// Chance of passing when rolling the pool from scratch and rerolling optimally
    Expect {
        #[command(flatten)]
        pool: PoolArgs,

        #[command(flatten)]
        budget: BudgetArgs,
    },
}

#[derive(Args)]
struct PoolArgs {
    /// JSON file with the dice pool
    pool: PathBuf,

    /// Power the pool has to reach
    #[arg(short, long)]
    threshold: u32,

    /// Breaks (or fire) available to unlock potential
    #[arg(short, long, default_value = "0")]
    breaks: u32,

    /// Hope available to unlock dots
    #[arg(long, default_value = "0")]
    hope: u32,
}

impl PoolArgs {
    fn check(&self) -> PowerCheck {
        PowerCheck::new(self.threshold, Tokens::new(self.breaks, self.hope))
    }
}

#[derive(Args)]
struct BudgetArgs {
    /// Regular rerolls available
    #[arg(short, long, default_value = "0")]
    rerolls: usize,

    /// Premium rerolls available
    #[arg(short, long, default_value = "0")]
    premium: usize,
}

impl BudgetArgs {
    fn budget(&self) -> RerollBudget {
        RerollBudget::new(self.rerolls, self.premium)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let settings = commands::Settings {
        tables: cli.tables,
        max_dice: cli.max_dice,
    };

    let result = match cli.command {
        Commands::Chance { pool } => commands::chance::run(&settings, &pool.pool, &pool.check()),
        Commands::Reroll { pool, budget } => {
            commands::reroll::run(&settings, &pool.pool, &pool.check(), budget.budget())
        },
        Commands::Expect { pool, budget } => {
            commands::expect::run(&settings, &pool.pool, &pool.check(), budget.budget())
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
