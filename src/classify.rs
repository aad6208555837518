//! Release-year classification of playlist entries.
//!
//! Raw playlist entries come in with every nested field possibly absent:
//! local files have no album and no id, removed tracks resolve to null.
//! Classification quietly drops everything that cannot be attributed to a
//! release year and buckets the rest by the configured years.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{PlaylistItem, PlaylistTrack, Track};

/// Extracts the release year of a raw track.
///
/// The year is the leading four characters of the album release date, which
/// Spotify reports as `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on the
/// release-date precision. Returns `None` when the album, the date or a
/// parseable four-digit prefix is missing.
pub fn release_year(track: &PlaylistTrack) -> Option<i32> {
    let date = track.album.as_ref()?.release_date.as_deref()?;
    date.get(..4)?.parse().ok()
}

/// Buckets playlist entries by release year.
///
/// Returns one bucket per configured year, possibly empty, keyed in
/// increasing year order. An entry qualifies for the bucket of its release
/// year when it has a resolvable track with an id, and its release year is
/// one of the configured years; qualifying tracks keep their source order.
/// Everything else is skipped silently — incomplete metadata is expected,
/// not an error.
pub fn bucket_by_year(
    entries: Vec<PlaylistItem>,
    years: &BTreeSet<i32>,
) -> BTreeMap<i32, Vec<Track>> {
    let mut buckets: BTreeMap<i32, Vec<Track>> =
        years.iter().map(|year| (*year, Vec::new())).collect();

    for entry in entries {
        let Some(track) = entry.track else {
            continue;
        };
        let Some(year) = release_year(&track) else {
            continue;
        };
        // local files carry no id and can be neither diffed nor added
        let Some(id) = track.id else {
            continue;
        };

        if let Some(bucket) = buckets.get_mut(&year) {
            bucket.push(Track {
                id,
                name: track.name,
                uri: track.uri,
            });
        }
    }

    buckets
}
