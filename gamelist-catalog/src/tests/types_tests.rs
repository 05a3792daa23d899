use super::*;

#[test]
fn new_record_has_documented_defaults() {
    let record = CanonicalGameRecord::new("Portal 2");
    assert_eq!(record.title, "Portal 2");
    assert_eq!(record.custom_title, None);
    assert!(record.platforms.is_empty());
    assert_eq!(record.device, BTreeSet::from(["PC".to_string()]));
    assert!(record.genres.is_empty());
    assert!(!record.is_dlc);
    assert_eq!(record.notes, "");
    assert!(!record.played);
    assert_eq!(record.rating, None);
    assert!(!record.to_play);
    assert_eq!(record.to_play_order, None);
    assert_eq!(record.description, None);
    assert_eq!(record.release_date, None);
    assert!(!record.deleted);
}

#[test]
fn new_record_classifies_dlc_once() {
    let record = CanonicalGameRecord::new("Borderlands 2 Season Pass");
    assert!(record.is_dlc);
}

#[test]
fn display_title_prefers_custom_title() {
    let mut record = CanonicalGameRecord::new("DOOM (1993)");
    assert_eq!(record.display_title(), "DOOM (1993)");
    record.custom_title = Some("Doom".to_string());
    assert_eq!(record.display_title(), "Doom");
    record.custom_title = Some(String::new());
    assert_eq!(record.display_title(), "DOOM (1993)");
}

#[test]
fn sentinel_genre_dropped_only_alongside_real_genres() {
    let mut record = CanonicalGameRecord::new("Some Game");
    record.genres.insert(UNKNOWN_GENRE.to_string());
    record.drop_sentinel_genre();
    assert_eq!(record.genres.len(), 1);
    assert!(record.needs_genres());

    record.genres.insert("Puzzle".to_string());
    record.drop_sentinel_genre();
    assert_eq!(record.genres, BTreeSet::from(["Puzzle".to_string()]));
    assert!(!record.needs_genres());
}

#[test]
fn stored_record_backfills_missing_fields() {
    let stored = StoredGameRecord {
        title: Some("Mass Effect 2 DLC - Alternate Appearance Pack 1".to_string()),
        ..StoredGameRecord::default()
    };
    let record = stored.into_canonical();
    assert_eq!(record.device, BTreeSet::from(["PC".to_string()]));
    assert!(record.is_dlc, "missing is_dlc is classified from the title");
    assert_eq!(record.notes, "");
}

#[test]
fn stored_record_keeps_existing_dlc_verdict() {
    let stored = StoredGameRecord {
        title: Some("Dragon Age: Origins - Expansion".to_string()),
        is_dlc: Some(false),
        ..StoredGameRecord::default()
    };
    assert!(!stored.into_canonical().is_dlc);
}

#[test]
fn stored_record_with_empty_device_gets_default() {
    let stored = StoredGameRecord {
        title: Some("Halo".to_string()),
        device: Some(vec![]),
        ..StoredGameRecord::default()
    };
    assert_eq!(
        stored.into_canonical().device,
        BTreeSet::from(["PC".to_string()])
    );
}

#[test]
fn partial_record_builder_skips_blank_genres() {
    let partial = PartialRecord::new("Celeste")
        .with_genres(["Platformer", " ", "Indie"])
        .with_played(true)
        .with_device("PC");
    assert_eq!(partial.genres.len(), 2);
    assert_eq!(partial.played_hint, Some(true));
    assert_eq!(partial.device, Some(BTreeSet::from(["PC".to_string()])));
}

#[test]
fn storefront_parses_tags_and_aliases() {
    let cases = [
        ("GOG", Storefront::Gog),
        ("steam", Storefront::Steam),
        ("Origin", Storefront::Ea),
        ("egs", Storefront::Epic),
        ("Microsoft", Storefront::Microsoft),
        ("prime gaming", Storefront::Amazon),
    ];
    for (input, expected) in cases {
        let parsed: Storefront = input.parse().unwrap();
        assert_eq!(parsed, expected, "'{}' should parse to {:?}", input, expected);
    }
    assert!("itch".parse::<Storefront>().is_err());
}

#[test]
fn storefront_short_name_is_first_alias() {
    for &store in Storefront::all() {
        assert_eq!(store.short_name(), store.aliases()[0]);
    }
}

#[test]
fn only_amazon_and_gog_provide_genres() {
    let with_genres: Vec<_> = Storefront::all()
        .iter()
        .filter(|s| s.provides_genres())
        .collect();
    assert_eq!(with_genres, vec![&Storefront::Amazon, &Storefront::Gog]);
}
