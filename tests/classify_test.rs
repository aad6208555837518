use std::collections::BTreeSet;

use yearlist::classify::{bucket_by_year, release_year};
use yearlist::types::{PlaylistItem, PlaylistTrack, TrackAlbum};

// Helper function to create a playlist entry with full metadata
fn entry(id: &str, name: &str, release_date: &str) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            id: Some(id.to_string()),
            name: name.to_string(),
            uri: format!("spotify:track:{}", id),
            album: Some(TrackAlbum {
                release_date: Some(release_date.to_string()),
            }),
        }),
    }
}

// Helper function to create an entry missing parts of its metadata
fn partial_entry(
    id: Option<&str>,
    album: Option<TrackAlbum>,
) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            id: id.map(str::to_string),
            name: "Partial".to_string(),
            uri: "spotify:track:partial".to_string(),
            album,
        }),
    }
}

fn years(list: &[i32]) -> BTreeSet<i32> {
    list.iter().copied().collect()
}

#[test]
fn test_release_year_parses_date_prefix() {
    let full = entry("id1", "Track", "2001-05-01");
    assert_eq!(release_year(full.track.as_ref().unwrap()), Some(2001));

    // year-only precision is enough
    let year_only = entry("id2", "Track", "1987");
    assert_eq!(release_year(year_only.track.as_ref().unwrap()), Some(1987));
}

#[test]
fn test_release_year_rejects_unusable_dates() {
    // empty date string
    let empty = entry("id1", "Track", "");
    assert_eq!(release_year(empty.track.as_ref().unwrap()), None);

    // fewer than four leading characters
    let short = entry("id2", "Track", "199");
    assert_eq!(release_year(short.track.as_ref().unwrap()), None);

    // non-numeric prefix
    let garbage = entry("id3", "Track", "unknown");
    assert_eq!(release_year(garbage.track.as_ref().unwrap()), None);

    // album present but date absent
    let dateless = partial_entry(Some("id4"), Some(TrackAlbum { release_date: None }));
    assert_eq!(release_year(dateless.track.as_ref().unwrap()), None);

    // album absent entirely
    let albumless = partial_entry(Some("id5"), None);
    assert_eq!(release_year(albumless.track.as_ref().unwrap()), None);
}

#[test]
fn test_bucket_by_year_places_track_in_exactly_one_bucket() {
    let entries = vec![
        entry("a", "A", "2001-05-01"),
        entry("b", "B", "2000-03-02"),
        entry("c", "C", "2001-07-01"),
    ];

    let buckets = bucket_by_year(entries, &years(&[2000, 2001]));

    // every configured year has a bucket
    assert_eq!(buckets.len(), 2);

    // each track shows up once, in its own year, in source order
    let ids_2000: Vec<&str> = buckets[&2000].iter().map(|t| t.id.as_str()).collect();
    let ids_2001: Vec<&str> = buckets[&2001].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids_2000, vec!["b"]);
    assert_eq!(ids_2001, vec!["a", "c"]);
}

#[test]
fn test_bucket_by_year_keeps_empty_buckets_for_configured_years() {
    let entries = vec![entry("a", "A", "2000-01-01")];

    let buckets = bucket_by_year(entries, &years(&[1999, 2000]));

    assert_eq!(buckets[&2000].len(), 1);
    assert!(buckets[&1999].is_empty());
}

#[test]
fn test_bucket_by_year_drops_years_outside_the_configured_set() {
    let entries = vec![
        entry("a", "A", "1995-01-01"),
        entry("b", "B", "2000-01-01"),
    ];

    let buckets = bucket_by_year(entries, &years(&[2000]));

    assert_eq!(buckets.len(), 1);
    let ids: Vec<&str> = buckets[&2000].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b"]);
}

#[test]
fn test_bucket_by_year_skips_incomplete_entries_silently() {
    let entries = vec![
        // unresolvable entry
        PlaylistItem { track: None },
        // local file without an id
        partial_entry(
            None,
            Some(TrackAlbum {
                release_date: Some("2000-01-01".to_string()),
            }),
        ),
        // no album metadata
        partial_entry(Some("x"), None),
        // the one usable track
        entry("a", "A", "2000-06-06"),
    ];

    let buckets = bucket_by_year(entries, &years(&[2000]));

    let ids: Vec<&str> = buckets[&2000].iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn test_bucket_by_year_iterates_years_in_increasing_order() {
    let entries = vec![
        entry("a", "A", "2001-01-01"),
        entry("b", "B", "1999-01-01"),
        entry("c", "C", "2000-01-01"),
    ];

    let buckets = bucket_by_year(entries, &years(&[2001, 1999, 2000]));

    let keys: Vec<i32> = buckets.keys().copied().collect();
    assert_eq!(keys, vec![1999, 2000, 2001]);
}
