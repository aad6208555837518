use yearlist::reconcile::missing_tracks;
use yearlist::types::{PlaylistItem, PlaylistTrack, Track};

// Helper function to create a wanted track
fn track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
    }
}

// Helper function to create an existing playlist entry
fn existing_entry(id: &str) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            id: Some(id.to_string()),
            name: format!("existing {}", id),
            uri: format!("spotify:track:{}", id),
            album: None,
        }),
    }
}

#[test]
fn test_missing_tracks_against_empty_playlist() {
    let wanted = vec![track("a", "A"), track("b", "B")];

    let missing = missing_tracks(&wanted, &[]);

    let ids: Vec<&str> = missing.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_missing_tracks_skips_already_present_ids() {
    // Source playlist has tracks released 2001-05-01 and 2001-07-01; the
    // yearly playlist already contains the first one. Exactly one add
    // remains: the second track.
    let wanted = vec![track("first", "May release"), track("second", "July release")];
    let existing = vec![existing_entry("first")];

    let missing = missing_tracks(&wanted, &existing);

    let ids: Vec<&str> = missing.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["second"]);
}

#[test]
fn test_missing_tracks_is_idempotent() {
    let wanted = vec![track("a", "A"), track("b", "B"), track("c", "C")];
    let mut existing = vec![existing_entry("b")];

    // first pass adds "a" and "c"
    let first_pass = missing_tracks(&wanted, &existing);
    assert_eq!(first_pass.len(), 2);

    // simulate the platform state after those adds
    for added in &first_pass {
        existing.push(existing_entry(&added.id));
    }

    // second pass against unchanged contents has nothing left to add
    let second_pass = missing_tracks(&wanted, &existing);
    assert!(second_pass.is_empty());
}

#[test]
fn test_missing_tracks_ignores_null_entries_in_existing_playlist() {
    let wanted = vec![track("a", "A")];
    let existing = vec![
        // unresolvable entry contributes nothing to the present-id set
        PlaylistItem { track: None },
        // a local file without an id can never match
        PlaylistItem {
            track: Some(PlaylistTrack {
                id: None,
                name: "local file".to_string(),
                uri: "spotify:local:whatever".to_string(),
                album: None,
            }),
        },
    ];

    let missing = missing_tracks(&wanted, &existing);

    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].id, "a");
}

#[test]
fn test_missing_tracks_preserves_wanted_order() {
    let wanted = vec![
        track("d", "D"),
        track("a", "A"),
        track("c", "C"),
        track("b", "B"),
    ];
    let existing = vec![existing_entry("a")];

    let missing = missing_tracks(&wanted, &existing);

    let ids: Vec<&str> = missing.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["d", "c", "b"]);
}
