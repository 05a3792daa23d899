use super::*;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_are_relative_to_base() {
    let config = PipelineConfig::new("/library");
    assert_eq!(config.sources_dir, PathBuf::from("/library/sources"));
    assert_eq!(config.snapshot_path, PathBuf::from("/library/merged_games.json"));
    assert_eq!(config.mirror_path, PathBuf::from("/library/merged_games.js"));
    assert_eq!(
        config.source_path(Storefront::Steam),
        PathBuf::from("/library/sources/steam_library.json")
    );
    assert_eq!(
        config.source_path(Storefront::Ea),
        PathBuf::from("/library/sources/ea_library.csv")
    );
}

#[test]
fn env_file_overrides_filenames() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".env"),
        "# storefront exports\nSTEAM_LIBRARY=steam_2024.json\nEA_LIBRARY=eagames.CSV\nUNRELATED=1\n",
    )
    .unwrap();

    let config = PipelineConfig::load_with_env(tmp.path(), no_env).unwrap();
    assert_eq!(
        config.source_path(Storefront::Steam),
        tmp.path().join("sources").join("steam_2024.json")
    );
    assert_eq!(
        config.source_path(Storefront::Ea),
        tmp.path().join("sources").join("eagames.CSV")
    );
    assert_eq!(
        config.source_path(Storefront::Gog),
        tmp.path().join("sources").join("gog_library.json")
    );
}

#[test]
fn process_env_beats_env_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".env"), "GOG_LIBRARY=from_file.json\n").unwrap();

    let config = PipelineConfig::load_with_env(tmp.path(), |key| {
        (key == "GOG_LIBRARY").then(|| "from_env.json".to_string())
    })
    .unwrap();
    assert!(config.source_path(Storefront::Gog).ends_with("from_env.json"));
}

#[test]
fn missing_env_file_is_fine() {
    let tmp = TempDir::new().unwrap();
    let config = PipelineConfig::load_with_env(tmp.path(), no_env).unwrap();
    assert_eq!(config, PipelineConfig::new(tmp.path()));
}

#[test]
fn sources_dir_override() {
    let mut config = PipelineConfig::new("/library");
    config.apply_overrides([(SOURCES_DIR_KEY.to_string(), "exports".to_string())]);
    assert_eq!(config.sources_dir, PathBuf::from("/library/exports"));
}

#[test]
fn empty_values_ignored() {
    let mut config = PipelineConfig::new("/library");
    config.apply_overrides([("AMAZON_LIBRARY".to_string(), "  ".to_string())]);
    assert!(config.source_path(Storefront::Amazon).ends_with("amazon_library.json"));
}

#[test]
fn snapshot_override_moves_mirror() {
    let mut config = PipelineConfig::new("/library");
    config.set_snapshot_path("/out/games.json");
    assert_eq!(config.mirror_path, PathBuf::from("/out/games.js"));
}

#[test]
fn skipped_stores_are_reported() {
    let mut config = PipelineConfig::new("/library");
    config.skip_stores([Storefront::Ea, Storefront::Amazon]);
    let skipped: Vec<_> = Storefront::all()
        .iter()
        .copied()
        .filter(|s| config.is_skipped(*s))
        .collect();
    assert_eq!(skipped, vec![Storefront::Amazon, Storefront::Ea]);
    assert!(!config.is_skipped(Storefront::Steam));
}

#[test]
fn unparseable_env_lines_are_skipped() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(".env"),
        "this line is junk\nSTEAM_LIBRARY=steam_2024.json\n",
    )
    .unwrap();

    let config = PipelineConfig::load_with_env(tmp.path(), no_env).unwrap();
    assert!(config.source_path(Storefront::Steam).ends_with("steam_2024.json"));
}
