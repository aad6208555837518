use std::collections::BTreeSet;

use yearlist::config::{OrganizerConfig, parse_playlist_names, parse_years};

fn config_with_template(prefix: &str, suffix: &str) -> OrganizerConfig {
    OrganizerConfig {
        source_playlists: vec!["Inbox".to_string()],
        years: BTreeSet::from([2000]),
        playlist_prefix: prefix.to_string(),
        playlist_suffix: suffix.to_string(),
    }
}

#[test]
fn test_parse_playlist_names_valid_inputs() {
    let names = parse_playlist_names(r#"["Discover Weekly","Inbox"]"#).unwrap();
    assert_eq!(names, vec!["Discover Weekly", "Inbox"]);

    // an empty array is a valid, if pointless, configuration
    let empty = parse_playlist_names("[]").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_parse_playlist_names_invalid_inputs() {
    // not JSON at all
    let result = parse_playlist_names("Discover Weekly");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("SOURCE_PLAYLIST_NAMES"));

    // wrong element type
    assert!(parse_playlist_names("[1,2]").is_err());
}

#[test]
fn test_parse_years_valid_inputs() {
    let years = parse_years("[2001,1999,2000]").unwrap();

    // set semantics, increasing iteration order
    let collected: Vec<i32> = years.iter().copied().collect();
    assert_eq!(collected, vec![1999, 2000, 2001]);

    // duplicates collapse
    let deduped = parse_years("[2000,2000]").unwrap();
    assert_eq!(deduped.len(), 1);
}

#[test]
fn test_parse_years_invalid_inputs() {
    let result = parse_years(r#"["2000"]"#);
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("YEARS"));

    assert!(parse_years("2000").is_err());
}

#[test]
fn test_yearly_playlist_name_template() {
    let both = config_with_template("Best of ", " so far");
    assert_eq!(both.yearly_playlist_name(2000), "Best of 2000 so far");

    let prefix_only = config_with_template("Year ", "");
    assert_eq!(prefix_only.yearly_playlist_name(1999), "Year 1999");

    // with no prefix and suffix the name is just the year
    let bare = config_with_template("", "");
    assert_eq!(bare.yearly_playlist_name(2001), "2001");
}
