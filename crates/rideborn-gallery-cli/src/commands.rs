use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use rideborn_gallery_core::gallery::card_ids;
use rideborn_gallery_core::{
    CardId, CardSource, GalleryOrderStore, GalleryState, Persistence, PinSet,
};

/// What the page would display, as printed on stdout.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// `false` when nothing is saved and the gallery shows its natural order.
    pub customized: bool,
    pub order: &'a [CardId],
    pub pinned: &'a PinSet,
}

fn load_cards(path: &Path) -> Result<Vec<CardId>> {
    let source = CardSource::from_path(path)
        .with_context(|| format!("reading cards from {}", path.display()))?;
    Ok(source.into_cards())
}

/// Restore saved state for `known`, falling back to the natural order.
fn current_state<P: Persistence>(
    store: &GalleryOrderStore<P>,
    known: Vec<CardId>,
) -> (GalleryState, bool) {
    let restored = store.restore(&known);
    if restored == GalleryState::default() {
        (GalleryState::natural(known), false)
    } else {
        (restored, true)
    }
}

fn print_state(out: &mut impl Write, state: &GalleryState, customized: bool) -> Result<()> {
    let report = Report {
        customized,
        order: &state.order,
        pinned: &state.pinned,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn restore<P: Persistence>(
    store: &GalleryOrderStore<P>,
    cards: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let (state, customized) = current_state(store, load_cards(cards)?);
    print_state(out, &state, customized)
}

pub fn save_order<P: Persistence>(store: &mut GalleryOrderStore<P>, ids: &[String]) -> Result<()> {
    store.save_order(&card_ids(ids.iter().map(String::as_str)))?;
    info!(cards = ids.len(), "order saved");
    Ok(())
}

pub fn save_pinned<P: Persistence>(store: &mut GalleryOrderStore<P>, ids: &[String]) -> Result<()> {
    let pinned: PinSet = card_ids(ids.iter().map(String::as_str)).into_iter().collect();
    store.save_pinned(&pinned)?;
    info!(cards = pinned.len(), "pins saved");
    Ok(())
}

pub fn pin<P: Persistence>(
    store: &mut GalleryOrderStore<P>,
    cards: &Path,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let (state, _) = current_state(store, load_cards(cards)?);
    let id = CardId::from(id);
    if !state.order.contains(&id) {
        anyhow::bail!("card {id} is not in {}", cards.display());
    }
    let next = store.toggle_pin(&state, &id)?;
    print_state(out, &next, true)
}

pub fn shuffle<P: Persistence>(
    store: &mut GalleryOrderStore<P>,
    cards: &Path,
    seed: Option<u64>,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let (state, customized) = current_state(store, load_cards(cards)?);
    let order = match seed {
        Some(seed) => store.shuffle(&state, &mut StdRng::seed_from_u64(seed)),
        None => store.shuffle(&state, &mut rand::thread_rng()),
    };
    let next = GalleryState::new(order, state.pinned);
    if !dry_run {
        store.save_order(&next.order)?;
    }
    print_state(out, &next, customized || !dry_run)
}

pub fn reset<P: Persistence>(store: &mut GalleryOrderStore<P>) -> Result<()> {
    store.reset()?;
    info!(keys = ?store.keys().all(), "gallery reset");
    Ok(())
}
