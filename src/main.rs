use anyhow::Result;
use clap::Parser;

use uncleared::api::{BudgetApi, YnabClient};
use uncleared::config::{ConfigOverrides, ReviewPaths, Settings};
use uncleared::display::{format_transaction_list, RowLayout};
use uncleared::error::ReviewError;
use uncleared::logging;

/// Exit status for configuration problems
const EXIT_CONFIG: i32 = 2;

#[derive(Parser)]
#[command(
    name = "uncleared",
    version,
    about = "Review uncleared YNAB transactions and mark them cleared",
    long_about = "Fetches the uncleared transactions of a YNAB budget and shows them \
                  in a terminal list. Select a transaction and press c to mark it \
                  cleared on the server."
)]
struct Cli {
    /// YNAB personal access token
    #[arg(long, env = "YNAB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Budget to review (a budget id or `last-used`)
    #[arg(long, env = "YNAB_BUDGET_ID")]
    budget_id: Option<String>,

    /// API root, for testing against another server
    #[arg(long, env = "YNAB_API_URL")]
    api_url: Option<String>,

    /// Print the uncleared transactions and exit instead of opening the TUI
    #[arg(long)]
    list: bool,

    /// Show current configuration and paths
    #[arg(long)]
    show_config: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            token: self.token.clone(),
            budget_id: self.budget_id.clone(),
            api_base_url: self.api_url.clone(),
        }
    }
}

fn main() -> Result<()> {
    // .env has to be in the environment before clap reads its env fallbacks
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let paths = ReviewPaths::new().unwrap_or_else(|e| exit_config(e));
    let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| exit_config(e));

    let _log_guard = match logging::init(&paths) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: {}", e);
            None
        }
    };

    if cli.show_config {
        show_config(&paths, &settings, &cli.overrides());
        return Ok(());
    }

    let config = settings
        .resolve(&cli.overrides())
        .unwrap_or_else(|e| exit_config(e));
    tracing::info!(budget = %config.budget_id, api = %config.api_base_url, "Starting review");

    let client = YnabClient::with_base_url(config.token.clone(), config.api_base_url.clone())
        .unwrap_or_else(|e| exit_config(e));

    if cli.list {
        let transactions = client.fetch_uncleared_transactions(&config.budget_id)?;
        let layout = RowLayout {
            payee_width: settings.payee_width,
            amount_width: settings.amount_width,
        };
        print!("{}", format_transaction_list(&transactions, layout));
        return Ok(());
    }

    uncleared::tui::run_tui(&client, &config, &settings)
}

/// Report a configuration problem with its remediation hint and exit
fn exit_config(error: ReviewError) -> ! {
    eprintln!("Error: {}", error);
    if let Some(hint) = error.remediation() {
        eprintln!();
        eprintln!("{}", hint);
    }
    std::process::exit(EXIT_CONFIG);
}

fn show_config(paths: &ReviewPaths, settings: &Settings, overrides: &ConfigOverrides) {
    println!("uncleared-cli Configuration");
    println!("===========================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Payee width:  {}", settings.payee_width);
    println!("  Amount width: {}", settings.amount_width);
    println!("  Tick rate:    {}ms", settings.tick_rate_ms);
    println!();

    match settings.resolve(overrides) {
        Ok(resolved) => {
            println!("  Token:     {}", resolved.masked_token());
            println!("  Budget ID: {}", resolved.budget_id);
            println!("  API URL:   {}", resolved.api_base_url);
        }
        Err(e) => {
            println!("  {}", e);
            if let Some(hint) = e.remediation() {
                println!("  {}", hint);
            }
        }
    }
}
