use std::{collections::HashMap, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    classify,
    config::OrganizerConfig,
    error, info,
    management::TokenManager,
    paging::{self, Walk},
    reconcile, spotify,
    types::{Playlist, PlaylistItemsPage, PlaylistsPage, YearSummaryRow},
    warning,
};

pub async fn organize(cfg: &OrganizerConfig) {
    if cfg.source_playlists.is_empty() || cfg.years.is_empty() {
        warning!("Nothing to organize. Configure SOURCE_PLAYLIST_NAMES and YEARS.");
        return;
    }

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run yearlist auth\n Error: {}",
                e
            );
        }
    };

    let listing = fetch_playlist_listing(&mut token_mgr).await;

    let sources = resolve_source_playlists(cfg, &listing);
    let mut existing_yearly = resolve_yearly_playlists(cfg, &listing);

    if sources.is_empty() {
        warning!("None of the configured source playlists exist for this user.");
        return;
    }

    let mut summary: Vec<YearSummaryRow> = Vec::new();

    for playlist in sources {
        info!("Scanning source playlist \"{}\"...", playlist.name);

        let token = token_mgr.get_valid_token().await;
        let first = match spotify::playlists::playlist_items(&token, &playlist.id).await {
            Ok(page) => page,
            Err(e) => {
                warning!(
                    "Failed to fetch tracks of playlist \"{}\": {}",
                    playlist.name,
                    e
                );
                continue;
            }
        };

        let entries = match paging::walk(first, |url| {
            spotify::playlists::next_page::<PlaylistItemsPage>(&token, url)
        })
        .await
        {
            Walk::Ok(entries) => entries,
            Walk::Empty | Walk::Malformed => {
                warning!("No tracks found in playlist: {}", playlist.name);
                continue;
            }
        };

        let buckets = classify::bucket_by_year(entries, &cfg.years);

        for (year, bucket) in &buckets {
            let row =
                reconcile::reconcile_year(cfg, &mut token_mgr, *year, bucket, &mut existing_yearly)
                    .await;
            if let Some(row) = row {
                summary.push(row);
            }
        }
    }

    if summary.is_empty() {
        info!("All yearly playlists are already up to date.");
    } else {
        println!("{}", Table::new(summary));
    }
}

/// Drains the user's complete playlist listing.
///
/// The listing decides which source playlists and which yearly playlists
/// exist, so it is walked across all pages; truncating it would silently
/// drop matches. A user without any usable playlists ends the run.
async fn fetch_playlist_listing(token_mgr: &mut TokenManager) -> Vec<Playlist> {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching your playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let token = token_mgr.get_valid_token().await;
    let first = match spotify::playlists::current_user_playlists(&token).await {
        Ok(page) => page,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    let walked = paging::walk(first, |url| {
        spotify::playlists::next_page::<PlaylistsPage>(&token, url)
    })
    .await;
    pb.finish_and_clear();

    match walked {
        Walk::Ok(playlists) => playlists,
        Walk::Empty | Walk::Malformed => error!("No playlists found for the user."),
    }
}

/// Picks the playlists to scan, in the order their names are configured.
///
/// Every listing playlist bearing a configured name is scanned; Spotify
/// allows several playlists with the same name.
fn resolve_source_playlists<'a>(
    cfg: &OrganizerConfig,
    listing: &'a [Playlist],
) -> Vec<&'a Playlist> {
    cfg.source_playlists
        .iter()
        .flat_map(|name| listing.iter().filter(move |playlist| &playlist.name == name))
        .collect()
}

/// Maps each configured year to its existing yearly playlist, if any.
///
/// When several playlists carry the same yearly name, the first one in the
/// listing wins and the others are reported and ignored.
fn resolve_yearly_playlists(
    cfg: &OrganizerConfig,
    listing: &[Playlist],
) -> HashMap<i32, Playlist> {
    let mut existing = HashMap::new();

    for year in &cfg.years {
        let name = cfg.yearly_playlist_name(*year);
        let mut matches = listing.iter().filter(|playlist| playlist.name == name);

        if let Some(first) = matches.next() {
            existing.insert(*year, first.clone());
            for ignored in matches {
                warning!(
                    "Multiple playlists are named \"{}\". Using the first one, ignoring {}.",
                    name,
                    ignored.id
                );
            }
        }
    }

    existing
}
