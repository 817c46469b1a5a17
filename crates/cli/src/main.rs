//! TrueShade CLI - a colorblind-friendly storefront in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog, optionally filtered
//! trueshade catalog --family cool --max-price 100
//!
//! # Cart and wishlist
//! trueshade cart add p1
//! trueshade wishlist toggle p2
//! trueshade cart show
//!
//! # Inspect a color or sample the center of a photo
//! trueshade color inspect "#c83232"
//! trueshade sample swatch.png
//!
//! # Accessibility preferences
//! trueshade prefs set --filter deuteranopia --high-contrast true
//! ```
//!
//! State is kept in the JSON file named by `TRUESHADE_DATA_FILE`
//! (default `trueshade.json`), or `--data-file`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trueshade_core::{ColorFamily, FilterMode};
use trueshade_storefront::{AppError, AppState};
use trueshade_storefront::config::StorefrontConfig;
use trueshade_storefront::persistence::JsonFileStore;

mod commands;

#[derive(Parser)]
#[command(name = "trueshade")]
#[command(author, version, about = "Colorblind-friendly storefront")]
struct Cli {
    /// Override the persisted state file
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products, optionally filtered
    Catalog {
        /// Case-insensitive search over name, color, and description
        #[arg(short, long, default_value = "")]
        query: String,

        /// Maximum price (inclusive)
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Color family (`cool`, `warm`, `neutral`); repeatable
        #[arg(short, long)]
        family: Vec<ColorFamily>,

        /// Required tag; repeatable, all must match
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Products similar to the given one
    Recommend {
        /// Product ID
        id: String,
    },
    /// Analyze colors
    Color {
        #[command(subcommand)]
        action: ColorAction,
    },
    /// Sample the center pixel of a PNG image
    Sample {
        /// Path to a PNG image
        image: PathBuf,

        /// Try to toggle the torch after sampling
        #[arg(long)]
        torch: bool,
    },
    /// Show or change accessibility preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Start checkout
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add { id: String },
    /// Increase the quantity of a line by one
    Inc { id: String },
    /// Decrease the quantity of a line by one, removing it at zero
    Dec { id: String },
    /// Remove a line
    Remove { id: String },
    /// Show cart lines and subtotal
    Show,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add or remove a product
    Toggle { id: String },
    /// Remove a product
    Remove { id: String },
    /// Move a product into the cart
    Move { id: String },
    /// Show the wishlist
    Show,
}

#[derive(Subcommand)]
enum ColorAction {
    /// Name a color and recommend a text treatment
    Inspect {
        /// `#rrggbb` or `r,g,b`
        color: String,
    },
    /// Lighten (positive) or darken (negative) a color
    Shade {
        /// `#rrggbb` or `r,g,b`
        color: String,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
    },
    /// Preview a color through the colorblind filters
    Simulate {
        /// `#rrggbb` or `r,g,b`
        color: String,

        /// Single filter to apply; all filters when omitted
        #[arg(short, long)]
        mode: Option<FilterMode>,
    },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Show current preferences and theme
    Show,
    /// Change preferences
    Set {
        /// `none`, `protanopia`, `deuteranopia`, `tritanopia`, `achromatopsia`
        #[arg(short, long)]
        filter: Option<FilterMode>,

        #[arg(long)]
        high_contrast: Option<bool>,

        #[arg(long)]
        large_text: Option<bool>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.sentry_environment.clone().into()),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing() {
    // Defaults to info for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trueshade_storefront=info,trueshade_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing();
            let err = AppError::from(e);
            err.report();
            println!("{}", err.notice());
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    if let Err(e) = run(cli, config).await {
        e.report();
        println!("{}", e.notice());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> trueshade_storefront::Result<()> {
    let data_file = cli.data_file.unwrap_or(config.data_file);
    let store = Arc::new(JsonFileStore::open(data_file)?);
    let mut state = AppState::new(store, config.currency);

    match cli.command {
        Commands::Catalog {
            query,
            max_price,
            family,
            tag,
        } => commands::shop::list_catalog(&state, query, max_price, family, tag),
        Commands::Cart { action } => match action {
            CartAction::Add { id } => commands::shop::add_to_cart(&mut state, &id),
            CartAction::Inc { id } => commands::shop::change_quantity(&mut state, &id, 1),
            CartAction::Dec { id } => commands::shop::change_quantity(&mut state, &id, -1),
            CartAction::Remove { id } => commands::shop::remove_from_cart(&mut state, &id),
            CartAction::Show => commands::shop::show_cart(&state),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Toggle { id } => {
                commands::shop::toggle_wishlist(&mut state, &id, true);
            }
            WishlistAction::Remove { id } => {
                commands::shop::toggle_wishlist(&mut state, &id, false);
            }
            WishlistAction::Move { id } => commands::shop::move_to_cart(&mut state, &id),
            WishlistAction::Show => commands::shop::show_wishlist(&state),
        },
        Commands::Recommend { id } => commands::shop::recommend(&state, &id),
        Commands::Color { action } => match action {
            ColorAction::Inspect { color } => commands::color::inspect(&color)?,
            ColorAction::Shade { color, amount } => commands::color::shade(&color, amount)?,
            ColorAction::Simulate { color, mode } => commands::color::simulate(&color, mode)?,
        },
        Commands::Sample { image, torch } => commands::color::sample(image, torch).await,
        Commands::Prefs { action } => match action {
            PrefsAction::Show => commands::prefs::show(&state),
            PrefsAction::Set {
                filter,
                high_contrast,
                large_text,
            } => commands::prefs::set(&mut state, filter, high_contrast, large_text),
        },
        Commands::Checkout => commands::shop::checkout(&state),
    }
    Ok(())
}
