use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_budget, handle_delete, handle_export, handle_list, handle_period_command,
    handle_summary, handle_total, PeriodCommands,
};
use spendlog::config::{LedgerPaths, Settings};
use spendlog::models::{BudgetTable, CategorySet};
use spendlog::services::calculator;
use spendlog::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Flat-file personal expense ledger for the terminal",
    long_about = "spendlog records spending events in a plain text ledger and \
                  answers aggregate and time-windowed queries over them: \
                  totals, category breakdowns, daily/weekly/monthly/yearly \
                  views and budget alerts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add {
        /// Amount, either a number or a calculation like "25+18+42"
        amount: String,
        /// Category (Food, Transport, Entertainment, Utilities, Shopping, Healthcare, Other)
        category: String,
        /// Expense date (DD/MM/YYYY, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Show only this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense by id
    #[command(alias = "rm")]
    Delete {
        /// Expense id
        id: u32,
    },

    /// Show total spending
    Total,

    /// Show spending summary by category
    Summary,

    /// Time-based analytics
    #[command(subcommand)]
    Period(PeriodCommands),

    /// Show budget alerts for the current month
    Budget,

    /// Evaluate a quick calculation (e.g. "25+18+42")
    Calc {
        /// Expression using a single operator kind: + - * /
        expression: String,
    },

    /// Export the ledger to CSV
    Export {
        /// Output file (defaults to the configured export file name)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;

    let mut store = ExpenseStore::open(paths.ledger_file(&settings.data_file));
    let categories = CategorySet::default();
    let budgets = BudgetTable::default();

    match cli.command {
        Commands::Add {
            amount,
            category,
            date,
            description,
        } => handle_add(
            &mut store,
            &categories,
            &amount,
            &category,
            date.as_deref(),
            &description,
        )?,

        Commands::List { category } => handle_list(&store, category.as_deref())?,

        Commands::Delete { id } => handle_delete(&mut store, id)?,

        Commands::Total => handle_total(&store)?,

        Commands::Summary => handle_summary(&store, &categories)?,

        Commands::Period(cmd) => handle_period_command(&store, cmd)?,

        Commands::Budget => handle_budget(&store, &budgets)?,

        Commands::Calc { expression } => match calculator::evaluate(&expression) {
            Ok(result) => println!("Result: ${:.2}", result),
            Err(_) => anyhow::bail!("invalid calculation (use a format like 25+18+42)"),
        },

        Commands::Export { output } => {
            let output = output.unwrap_or_else(|| settings.export_file.clone());
            handle_export(&store, std::path::Path::new(&output))?;
        }

        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!(
                "Ledger file:     {}",
                paths.ledger_file(&settings.data_file).display()
            );
            println!("Export file:     {}", settings.export_file);
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Categories:      {}", categories);
        }
    }

    Ok(())
}
