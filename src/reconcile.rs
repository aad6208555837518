//! Reconciliation of wanted tracks against the platform-side yearly playlists.
//!
//! For every year with a non-empty bucket the reconciler either appends the
//! missing tracks to the already existing yearly playlist, or creates the
//! playlist and populates it. Failures stay local to their year; the caller
//! carries on with the next one.

use std::collections::{HashMap, HashSet};

use crate::{
    config::OrganizerConfig,
    info,
    management::TokenManager,
    paging::{self, Walk},
    spotify, success,
    types::{Playlist, PlaylistItem, PlaylistItemsPage, Track, YearSummaryRow},
    warning,
};

/// Returns the wanted tracks whose ids are not present in the existing
/// playlist entries, preserving the wanted order.
///
/// Entries with a null track or a null track id contribute nothing to the
/// present-id set. Running the reconciliation twice against unchanged
/// playlist contents therefore yields an empty second diff: every track
/// added by the first pass is found by id on the second.
pub fn missing_tracks<'a>(wanted: &'a [Track], existing: &[PlaylistItem]) -> Vec<&'a Track> {
    let present: HashSet<&str> = existing
        .iter()
        .filter_map(|item| item.track.as_ref())
        .filter_map(|track| track.id.as_deref())
        .collect();

    wanted
        .iter()
        .filter(|track| !present.contains(track.id.as_str()))
        .collect()
}

/// Reconciles one year's bucket against the platform.
///
/// Selects append mode when the year already has a playlist in `existing`,
/// create mode otherwise. A newly created playlist is recorded in
/// `existing`, so buckets of later source playlists append to it instead of
/// creating a second playlist for the same year. Empty buckets are skipped
/// without any output. Returns the outcome for the run summary, or `None`
/// when nothing was done.
pub async fn reconcile_year(
    cfg: &OrganizerConfig,
    token_mgr: &mut TokenManager,
    year: i32,
    wanted: &[Track],
    existing: &mut HashMap<i32, Playlist>,
) -> Option<YearSummaryRow> {
    if wanted.is_empty() {
        return None;
    }

    info!("Processing year {}...", year);

    if let Some(playlist) = existing.get(&year) {
        append_missing(token_mgr, year, playlist, wanted).await
    } else {
        let (playlist, row) = create_and_populate(cfg, token_mgr, year, wanted).await?;
        existing.insert(year, playlist);
        Some(row)
    }
}

/// Appends the wanted tracks that the existing yearly playlist does not
/// already contain.
///
/// The duplicate check walks every page of the existing playlist, so
/// playlists that have grown beyond one page still deduplicate correctly.
/// A malformed reply skips the year; it never falls through to creating a
/// second playlist.
async fn append_missing(
    token_mgr: &mut TokenManager,
    year: i32,
    playlist: &Playlist,
    wanted: &[Track],
) -> Option<YearSummaryRow> {
    info!("Playlist for year {} already exists.", year);

    let token = token_mgr.get_valid_token().await;
    let first = match spotify::playlists::playlist_items(&token, &playlist.id).await {
        Ok(page) => page,
        Err(e) => {
            warning!(
                "Failed to fetch tracks of playlist \"{}\": {}",
                playlist.name,
                e
            );
            return None;
        }
    };

    let existing_items = match paging::walk(first, |url| {
        spotify::playlists::next_page::<PlaylistItemsPage>(&token, url)
    })
    .await
    {
        Walk::Ok(items) => items,
        // an existing playlist with no tracks yet: everything wanted is missing
        Walk::Empty => Vec::new(),
        Walk::Malformed => {
            warning!("No tracks found in playlist \"{}\"", playlist.name);
            return None;
        }
    };

    let missing = missing_tracks(wanted, &existing_items);
    let skipped = wanted.len() - missing.len();
    if skipped > 0 {
        info!(
            "{} of {} tracks already exist in playlist \"{}\". Skipping those.",
            skipped,
            wanted.len(),
            playlist.name
        );
    }

    let mut added = 0;
    for track in missing {
        let token = token_mgr.get_valid_token().await;
        match spotify::playlists::add_tracks(&token, &playlist.id, vec![track.uri.clone()]).await {
            Ok(_) => {
                success!(
                    "Added track \"{}\" to existing playlist \"{}\".",
                    track.name,
                    playlist.name
                );
                added += 1;
            }
            Err(e) => {
                warning!(
                    "Failed to add track \"{}\" to playlist \"{}\": {}",
                    track.name,
                    playlist.name,
                    e
                );
            }
        }
    }

    Some(YearSummaryRow {
        year,
        playlist: playlist.name.clone(),
        added,
        skipped,
        created: false,
    })
}

/// Creates the yearly playlist and populates it with the whole bucket.
///
/// Resolving the current user or creating the playlist can fail; both
/// abandon the year and leave the rest of the run untouched. Track URIs are
/// added in chunks of 100, the most one add request accepts.
async fn create_and_populate(
    cfg: &OrganizerConfig,
    token_mgr: &mut TokenManager,
    year: i32,
    wanted: &[Track],
) -> Option<(Playlist, YearSummaryRow)> {
    let name = cfg.yearly_playlist_name(year);

    let token = token_mgr.get_valid_token().await;
    let user = match spotify::playlists::current_user(&token).await {
        Ok(user) => user,
        Err(e) => {
            warning!("Could not retrieve current user information: {}", e);
            return None;
        }
    };

    let created = match spotify::playlists::create(&token, &user.id, &name).await {
        Ok(resp) => resp,
        Err(e) => {
            warning!("Could not create playlist \"{}\": {}", name, e);
            return None;
        }
    };

    let uris: Vec<String> = wanted.iter().map(|track| track.uri.clone()).collect();
    let mut added = 0;
    for chunk in uris.chunks(100) {
        let token = token_mgr.get_valid_token().await;
        match spotify::playlists::add_tracks(&token, &created.id, chunk.to_vec()).await {
            Ok(_) => added += chunk.len(),
            Err(e) => {
                warning!("Failed to add tracks to playlist \"{}\": {}", created.name, e);
            }
        }
    }

    success!("Created playlist \"{}\" with {} tracks.", created.name, added);

    Some((
        Playlist {
            id: created.id,
            name: created.name.clone(),
        },
        YearSummaryRow {
            year,
            playlist: created.name,
            added,
            skipped: 0,
            created: true,
        },
    ))
}
