use gamelist_catalog::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

fn sample_records() -> Vec<CanonicalGameRecord> {
    let mut portal = CanonicalGameRecord::new("Portal 2");
    portal.platforms = BTreeSet::from(["GOG".to_string(), "Steam".to_string()]);
    portal.genres = BTreeSet::from(["Puzzle".to_string()]);
    portal.played = true;

    let mut okami = CanonicalGameRecord::new("Ōkami HD");
    okami.platforms.insert("Steam".to_string());
    okami.custom_title = Some("Okami".to_string());
    okami.rating = Some(90);

    vec![okami, portal]
}

#[test]
fn missing_snapshot_loads_empty() {
    let tmp = TempDir::new().unwrap();
    let records = load_snapshot(&tmp.path().join("merged_games.json")).unwrap();
    assert!(records.is_empty());
}

#[test]
fn malformed_snapshot_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("merged_games.json");
    fs::write(&path, "[{\"title\": ").unwrap();

    let err = load_snapshot(&path).unwrap_err();
    assert!(matches!(err, SnapshotError::Parse { .. }));
}

#[test]
fn written_snapshot_reads_back_identically() {
    let tmp = TempDir::new().unwrap();
    let json = tmp.path().join("merged_games.json");
    let js = tmp.path().join("merged_games.js");
    let records = sample_records();

    write_snapshot(&json, &js, &records).unwrap();

    let loaded: Vec<CanonicalGameRecord> = load_snapshot(&json)
        .unwrap()
        .into_iter()
        .map(StoredGameRecord::into_canonical)
        .collect();
    assert_eq!(loaded, records);
}

#[test]
fn snapshot_uses_schema_field_order() {
    let json = render_snapshot(&sample_records()[1..]).unwrap();
    let keys = [
        "\"title\"",
        "\"custom_title\"",
        "\"platforms\"",
        "\"device\"",
        "\"genres\"",
        "\"is_dlc\"",
        "\"notes\"",
        "\"played\"",
        "\"rating\"",
        "\"to_play\"",
        "\"to_play_order\"",
        "\"description\"",
        "\"release_date\"",
        "\"deleted\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    assert!(json.contains("\"custom_title\": null"));
    assert!(json.starts_with("[\n  {\n    \"title\": \"Portal 2\""));
}

#[test]
fn snapshot_keeps_non_ascii_verbatim() {
    let json = render_snapshot(&sample_records()).unwrap();
    assert!(json.contains("Ōkami HD"));
}

#[test]
fn mirror_wraps_same_json() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join("merged_games.json");
    let js_path = tmp.path().join("merged_games.js");

    write_snapshot(&json_path, &js_path, &sample_records()).unwrap();

    let json = fs::read_to_string(&json_path).unwrap();
    let js = fs::read_to_string(&js_path).unwrap();
    assert_eq!(js, format!("window.gamesData = {json};"));
}

#[test]
fn write_leaves_no_temp_files() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join("out").join("merged_games.json");
    let js_path = tmp.path().join("out").join("merged_games.js");

    write_snapshot(&json_path, &js_path, &sample_records()).unwrap();
    write_snapshot(&json_path, &js_path, &sample_records()).unwrap();

    let mut names: Vec<String> = fs::read_dir(tmp.path().join("out"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["merged_games.js", "merged_games.json"]);
}

#[test]
fn failed_mirror_write_leaves_valid_snapshot() {
    let tmp = TempDir::new().unwrap();
    let json_path = tmp.path().join("merged_games.json");
    fs::write(&json_path, "[]").unwrap();

    // The mirror's parent is a regular file, so its write fails after the
    // snapshot itself has been replaced atomically.
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let js_path = blocker.join("merged_games.js");

    let err = write_snapshot(&json_path, &js_path, &sample_records()).unwrap_err();
    assert!(matches!(err, SnapshotError::Write { .. }));

    // The JSON snapshot is a complete, parseable document either way.
    let loaded = load_snapshot(&json_path).unwrap();
    assert_eq!(loaded.len(), 2);
}

#[test]
fn legacy_rows_without_new_fields_load() {
    let rows = parse_snapshot(
        r#"[{"title": "Halo", "platforms": ["Microsoft"], "genres": ["Shooter"], "notes": null, "played": true}]"#,
    )
    .unwrap();
    let record = rows.into_iter().next().unwrap().into_canonical();
    assert_eq!(record.title, "Halo");
    assert_eq!(record.notes, "");
    assert!(record.played);
    assert_eq!(record.device, BTreeSet::from(["PC".to_string()]));
    assert!(!record.deleted);
}

#[test]
fn empty_file_is_empty_snapshot() {
    assert!(parse_snapshot("  \n").unwrap().is_empty());
}
