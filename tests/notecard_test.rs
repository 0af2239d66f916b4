mod common;

use common::{harness, harness_with, id, settings, start, StaticFetcher};
use slv_ao::ao::{
    load_when_inventory_ready, notecard, stock, AoSlot, LoadReport, MovementState,
};
use slv_ao::{create_engine_handle, load_configuration, AoError, FetchError};
use std::time::Duration;

const READ_FAILED: &str = "Could not read the specified Config Notecard";

/// Harness whose engine points at the notecard item.
fn configured(enabled: bool) -> common::Harness {
    let mut h = harness(enabled);
    let notecard = h.notecard.clone();
    h.engine.set_config_notecard(&notecard);
    h
}

#[tokio::test]
async fn test_walking_section_sets_walk_override() {
    let h = configured(false);
    h.inventory.add_animation(h.folder, "MyWalk", id(0x31));
    let handle = create_engine_handle(h.engine);

    let fetcher = StaticFetcher::text("[ Walking ]\nMyWalk\n");
    let report = load_configuration(&handle, &fetcher).await.unwrap();

    assert_eq!(
        report,
        LoadReport {
            stands: 0,
            overrides: 1,
            warnings: 0
        }
    );
    let engine = handle.lock().await;
    assert_eq!(engine.overrides().override_for(stock::WALK), Some(id(0x31)));
    assert_eq!(engine.config_folder(), Some(h.folder));
}

#[tokio::test]
async fn test_one_missing_name_one_warning() {
    let h = configured(true);
    h.inventory.add_animation(h.folder, "MyWalk", id(0x31));
    h.inventory.add_animation(h.folder, "MyRun", id(0x32));
    h.inventory.add_animation(h.folder, "StandA", id(0x3a));
    h.inventory.add_animation(h.folder, "StandB", id(0x3b));
    let handle = create_engine_handle(h.engine);

    let text = "[ Walking ]MyWalk\n[ Running ]Ghost|MyRun\n[ Standing ]StandA, StandB\n";
    let report = load_configuration(&handle, &StaticFetcher::text(text))
        .await
        .unwrap();
    assert_eq!(report.warnings, 1);

    assert_eq!(
        h.notifier.messages(),
        vec!["Warning: animation 'Ghost' could not be found (Section: [ Running ])."]
    );
    let engine = handle.lock().await;
    assert_eq!(engine.overrides().override_for(stock::WALK), Some(id(0x31)));
    assert_eq!(engine.overrides().override_for(stock::RUN), Some(id(0x32)));
    assert_eq!(engine.stands().len(), 2);
    assert_eq!(engine.stands().entries()[1].display_name, "StandB");

    // Enabled engines start standing right after the load.
    assert_eq!(h.requests.calls(), vec![start(id(0x3a))]);
    assert_eq!(engine.state(), MovementState::Stand);
}

#[tokio::test]
async fn test_saved_default_wins_over_notecard() {
    let mut s = settings(false);
    s.set_default_animation(AoSlot::Walk, "Favorite");
    let mut h = harness_with(s);
    let notecard = h.notecard.clone();
    h.engine.set_config_notecard(&notecard);
    h.inventory.add_animation(h.folder, "MyWalk", id(0x31));
    h.inventory.add_animation(h.folder, "Favorite", id(0x33));
    let handle = create_engine_handle(h.engine);

    let fetcher = StaticFetcher::text("[ Walking ]MyWalk|Favorite\n[ Sitting ]Bench\n");
    load_configuration(&handle, &fetcher).await.unwrap();

    let engine = handle.lock().await;
    assert_eq!(engine.overrides().override_for(stock::WALK), Some(id(0x33)));
    assert_eq!(engine.choices().names(AoSlot::Walk), ["MyWalk", "Favorite"]);
    assert_eq!(engine.choices().selected(AoSlot::Walk), Some("Favorite"));
    assert!(engine.choices().names(AoSlot::Sit).is_empty());
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_table() {
    let h = configured(false);
    h.inventory.add_animation(h.folder, "MyWalk", id(0x31));
    let handle = create_engine_handle(h.engine);
    load_configuration(&handle, &StaticFetcher::text("[ Walking ]MyWalk"))
        .await
        .unwrap();

    let broken = StaticFetcher::failing(FetchError::Decode {
        reason: "bad header".to_string(),
    });
    let err = load_configuration(&handle, &broken).await.unwrap_err();

    assert!(matches!(err, AoError::Fetch(FetchError::Decode { .. })));
    assert_eq!(h.notifier.messages(), vec![READ_FAILED]);
    let engine = handle.lock().await;
    assert_eq!(engine.overrides().override_for(stock::WALK), Some(id(0x31)));
}

#[tokio::test]
async fn test_reload_replaces_previous_configuration() {
    let h = configured(false);
    h.inventory.add_animation(h.folder, "MyWalk", id(0x31));
    h.inventory.add_animation(h.folder, "MyRun", id(0x32));
    let handle = create_engine_handle(h.engine);

    load_configuration(&handle, &StaticFetcher::text("[ Walking ]MyWalk"))
        .await
        .unwrap();
    load_configuration(&handle, &StaticFetcher::text("[ Running ]MyRun"))
        .await
        .unwrap();

    let engine = handle.lock().await;
    assert_eq!(engine.overrides().override_for(stock::WALK), None);
    assert_eq!(engine.overrides().override_for(stock::RUN), Some(id(0x32)));
}

#[tokio::test]
async fn test_unset_notecard_is_silent() {
    let h = harness(true);
    let handle = create_engine_handle(h.engine);

    let err = load_configuration(&handle, &StaticFetcher::text("[ Walking ]MyWalk"))
        .await
        .unwrap_err();

    assert_eq!(err, AoError::ConfigNotSet);
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_unreadable_notecard_items_rejected() {
    let mut h = configured(true);
    h.inventory.set_fetched(false);
    assert_eq!(h.engine.begin_load().unwrap_err(), AoError::InventoryNotReady);
    assert!(h.notifier.messages().is_empty());
    h.inventory.set_fetched(true);

    let mut locked = h.notecard.clone();
    locked.item_id = id(0xc2);
    locked.can_copy = false;
    h.inventory.add_item(locked.clone());
    h.engine.set_config_notecard(&locked);
    assert!(matches!(
        h.engine.begin_load(),
        Err(AoError::PermissionDenied { .. })
    ));

    let mut empty = h.notecard.clone();
    empty.item_id = id(0xc3);
    empty.asset_id = None;
    h.inventory.add_item(empty.clone());
    h.engine.set_config_notecard(&empty);
    assert!(matches!(
        h.engine.begin_load(),
        Err(AoError::MissingAsset { .. })
    ));

    h.engine.settings_mut().config_notecard_id = Some(id(0xc4));
    assert_eq!(
        h.engine.begin_load().unwrap_err(),
        AoError::ItemNotFound { item_id: id(0xc4) }
    );
    assert_eq!(h.notifier.messages(), vec![READ_FAILED; 3]);
}

#[tokio::test]
async fn test_load_waits_for_inventory() {
    let h = configured(true);
    h.inventory.add_animation(h.folder, "MyWalk", id(0x31));
    let handle = create_engine_handle(h.engine);

    let fetcher = StaticFetcher::text("[ Walking ]MyWalk");
    let report = tokio::time::timeout(
        Duration::from_secs(5),
        load_when_inventory_ready(&handle, &fetcher),
    )
    .await
    .expect("inventory gate should open")
    .unwrap();

    assert_eq!(report.overrides, 1);
}

#[test]
fn test_swimming_sections_ignored() {
    let mut lookups = 0;
    let parsed = notecard::parse("[ Swimming Forward ]Paddle\n[ Floating ]Bob\n", |_| {
        lookups += 1;
        Some(id(1))
    });

    assert!(parsed.is_empty());
    assert!(parsed.warnings.is_empty());
    assert_eq!(lookups, 0);
}

#[test]
fn test_template_parses_cleanly() {
    let parsed = notecard::parse(&notecard::template(), |_| None);
    assert!(parsed.is_empty());
    assert!(parsed.warnings.is_empty());
    assert!(notecard::template().contains("[ Standing ]"));
}
