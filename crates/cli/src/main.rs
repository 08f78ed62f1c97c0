use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use pipeline::{FilterValue, SelectionAction, Tab, ALL_SENTINEL};
use session::{CardListing, CardRow, FilterOptions, ListingView};
use sources::{FileCardSource, MockCardSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Card listing - browse payment cards by tab, search and filters
#[derive(Parser)]
#[command(name = "card-listing")]
#[command(about = "List payment cards with tab, search and dropdown filters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cards visible for a selection
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Tab to show: your, all or blocked
        #[arg(long, default_value = "your")]
        tab: Tab,

        /// Case-insensitive text to look for in card names
        #[arg(long, default_value = "")]
        search: String,

        /// Exact card type, or "all"
        #[arg(long, default_value = ALL_SENTINEL)]
        card_type: String,

        /// Exact card name, or "all"
        #[arg(long, default_value = ALL_SENTINEL)]
        card_name: String,

        /// Also print the filter dropdown options
        #[arg(long)]
        show_filters: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the values offered by the type and name dropdowns
    Options {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// JSON card file to read; the built-in demo cards are used if omitted
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Simulated latency of the demo source, in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            source,
            tab,
            search,
            card_type,
            card_name,
            show_filters,
            json,
        } => {
            let actions = vec![
                SelectionAction::SelectTab(tab),
                SelectionAction::Search(search),
                SelectionAction::ChooseCardType(FilterValue::from(card_type)),
                SelectionAction::ChooseCardName(FilterValue::from(card_name)),
            ];
            handle_list(&source, actions, show_filters, json).await?
        }
        Commands::Options { source } => handle_options(&source).await?,
    }

    Ok(())
}

/// Load the listing from whichever source the arguments name
async fn load_listing(args: &SourceArgs) -> Result<CardListing> {
    let mut listing = CardListing::new();
    match &args.data_file {
        Some(path) => {
            info!("Loading cards from {}", path.display());
            listing
                .load(&FileCardSource::new(path))
                .await
                .context("Failed to load card file")?;
        }
        None => {
            info!("No data file given; using the demo cards");
            let source = MockCardSource::new().with_delay(Duration::from_millis(args.delay_ms));
            listing.load(&source).await?;
        }
    }
    Ok(listing)
}

/// Handle the 'list' command
async fn handle_list(
    source: &SourceArgs,
    actions: Vec<SelectionAction>,
    show_filters: bool,
    json: bool,
) -> Result<()> {
    let mut listing = load_listing(source).await?;

    debug!("Applying {} selection actions: {:?}", actions.len(), actions);
    for action in actions {
        listing.dispatch(action);
    }
    if show_filters {
        listing.dispatch(SelectionAction::ToggleFilterPanel);
    }

    let view = listing.view();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("Failed to serialize listing view")?
        );
    } else {
        print_view(&view);
    }
    Ok(())
}

/// Handle the 'options' command
async fn handle_options(source: &SourceArgs) -> Result<()> {
    let listing = load_listing(source).await?;
    print_options(&listing.filter_options());
    Ok(())
}

fn print_view(view: &ListingView) {
    println!(
        "{}",
        format!(
            "{} cards ({} of {})",
            tab_title(view.active_tab),
            view.visible_count(),
            view.total_count
        )
        .bold()
        .blue()
    );

    if view.rows.is_empty() {
        println!("  {}", "No cards match the current selection".dimmed());
    }
    for row in &view.rows {
        print_row(row);
    }

    if let Some(options) = &view.filter_options {
        println!();
        print_options(options);
    }
}

fn print_row(row: &CardRow) {
    let card_type = match row.card_type.as_str() {
        "burner" => row.card_type.yellow(),
        "subscription" => row.card_type.cyan(),
        _ => row.card_type.normal(),
    };
    let status = if row.status == "Active" {
        row.status.green()
    } else {
        row.status.red()
    };

    println!("{} {} [{}]", "•".green(), row.name.bold(), card_type);
    println!(
        "    Spent: {}  Available to spend: {}  Status: {}",
        row.spent, row.available_to_spend, status
    );
}

fn print_options(options: &FilterOptions) {
    println!("{}", "Filter Options".bold().blue());
    println!("  Card Type");
    for value in std::iter::once(ALL_SENTINEL).chain(options.card_types.iter().map(String::as_str)) {
        println!("    - {}", value);
    }
    println!("  Card Name");
    for value in std::iter::once(ALL_SENTINEL).chain(options.card_names.iter().map(String::as_str)) {
        println!("    - {}", value);
    }
}

fn tab_title(tab: Tab) -> &'static str {
    match tab {
        Tab::Your => "Your",
        Tab::All => "All",
        Tab::Blocked => "Blocked",
    }
}
