mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rideborn_gallery_core::{FileStorage, GalleryOrderStore, StorageKeys};

#[derive(Parser)]
#[command(
    name = "rideborn-gallery",
    version,
    about = "Inspect and edit saved RIDE BORN gallery order and pins"
)]
struct Cli {
    /// Storage file standing in for the browser's localStorage.
    #[arg(long, global = true, env = "RIDEBORN_GALLERY_STORAGE")]
    storage: Option<PathBuf>,

    /// Key prefix for a site variant, e.g. `alt` → `alt:gallery-order`.
    #[arg(long, global = true, env = "RIDEBORN_GALLERY_NAMESPACE", default_value = "")]
    namespace: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the order and pins to apply for the given cards.
    Restore {
        /// JSON array of card ids, or a CMS post list response.
        #[arg(long)]
        cards: PathBuf,
    },
    /// Save a display order verbatim.
    SaveOrder {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Save the pinned cards, replacing the previous set.
    SavePinned { ids: Vec<String> },
    /// Pin a card, or unpin it if already pinned.
    Pin {
        id: String,
        #[arg(long)]
        cards: PathBuf,
    },
    /// Shuffle the unpinned cards and save the result.
    Shuffle {
        #[arg(long)]
        cards: PathBuf,
        /// Seed for a reproducible shuffle.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the shuffled order without saving it.
        #[arg(long)]
        dry_run: bool,
    },
    /// Forget the saved order and pins.
    Reset,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn default_storage_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("no platform data directory; pass --storage")?;
    Ok(base.join("rideborn").join("gallery.json"))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let path = match cli.storage {
        Some(path) => path,
        None => default_storage_path()?,
    };
    let keys = StorageKeys::namespaced(&cli.namespace);
    let mut store = GalleryOrderStore::with_keys(FileStorage::open(&path), keys);

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Command::Restore { cards } => commands::restore(&store, &cards, &mut stdout),
        Command::SaveOrder { ids } => commands::save_order(&mut store, &ids),
        Command::SavePinned { ids } => commands::save_pinned(&mut store, &ids),
        Command::Pin { id, cards } => commands::pin(&mut store, &cards, &id, &mut stdout),
        Command::Shuffle {
            cards,
            seed,
            dry_run,
        } => commands::shuffle(&mut store, &cards, seed, dry_run, &mut stdout),
        Command::Reset => commands::reset(&mut store),
    };
    result.with_context(|| format!("gallery storage {}", path.display()))
}
