use extlist_core::{
    ExtensionRecord, ExtensionSource, ExtensionsPage, FilterMode, LoadState, SourceError,
    SourceResult,
};
use std::time::Instant;

struct StaticSource(Vec<ExtensionRecord>);

impl ExtensionSource for StaticSource {
    fn location(&self) -> String {
        "static".to_string()
    }

    fn fetch(&self) -> SourceResult<Vec<ExtensionRecord>> {
        Ok(self.0.clone())
    }
}

struct OfflineSource;

impl ExtensionSource for OfflineSource {
    fn location(&self) -> String {
        "http://offline.invalid/data.json".to_string()
    }

    fn fetch(&self) -> SourceResult<Vec<ExtensionRecord>> {
        Err(SourceError::Transport {
            location: self.location(),
            message: "network unreachable".to_string(),
        })
    }
}

fn record(name: &str, is_active: bool) -> ExtensionRecord {
    ExtensionRecord {
        name: name.to_string(),
        description: format!("{name} description"),
        logo: format!("./assets/images/logo-{}.svg", name.to_lowercase()),
        is_active,
    }
}

fn loaded_page() -> ExtensionsPage {
    let mut page = ExtensionsPage::new();
    let state = page.startup(&StaticSource(vec![record("A", true), record("B", false)]));
    assert_eq!(state, LoadState::Loaded { count: 2 });
    page
}

fn id_of(page: &ExtensionsPage, name: &str) -> extlist_core::ExtensionId {
    page.store().find_by_name(name).unwrap().id
}

#[test]
fn startup_renders_one_card_per_record_in_order() {
    let names = ["DevLens", "StyleSpy", "SpeedBoost", "JSONWizard"];
    let mut page = ExtensionsPage::new();
    page.startup(&StaticSource(
        names.iter().map(|name| record(name, true)).collect(),
    ));

    assert!(page.view().is_rendered());
    assert_eq!(page.view().names(), names.to_vec());
    let store_ids: Vec<_> = page.store().iter().map(|extension| extension.id).collect();
    let card_ids: Vec<_> = page.view().cards().iter().map(|card| card.id).collect();
    assert_eq!(store_ids, card_ids);
}

#[test]
fn inactive_filter_shows_only_inactive_records() {
    let mut page = loaded_page();
    page.apply_filter(FilterMode::Inactive);

    assert_eq!(page.filter(), FilterMode::Inactive);
    assert_eq!(page.view().names(), vec!["B"]);
}

#[test]
fn filtering_is_non_destructive() {
    let mut page = loaded_page();
    page.apply_filter(FilterMode::Active);
    assert_eq!(page.view().names(), vec!["A"]);
    assert_eq!(page.store().len(), 2);

    page.apply_filter(FilterMode::All);
    assert_eq!(page.view().names(), vec!["A", "B"]);
}

#[test]
fn toggled_record_appears_under_active_filter() {
    let mut page = loaded_page();
    let b = id_of(&page, "B");

    assert!(page.toggle(b, true));
    page.apply_filter(FilterMode::Active);
    assert_eq!(page.view().names(), vec!["A", "B"]);
}

#[test]
fn toggle_flips_only_the_target_record() {
    let mut page = loaded_page();
    let a = id_of(&page, "A");
    let b = id_of(&page, "B");

    assert!(page.toggle(a, false));
    assert!(!page.store().get(a).unwrap().is_active);
    assert!(!page.store().get(b).unwrap().is_active);
    assert!(!page.view().card(a).unwrap().checked);
    assert!(!page.view().card(b).unwrap().checked);
}

#[test]
fn toggle_keeps_card_visible_until_next_filter() {
    let mut page = loaded_page();
    page.apply_filter(FilterMode::Active);
    let a = id_of(&page, "A");

    page.toggle(a, false);
    assert_eq!(page.view().names(), vec!["A"]);

    page.apply_filter(FilterMode::Active);
    assert!(page.view().names().is_empty());
}

#[test]
fn remove_deletes_record_and_detaches_card_after_transition() {
    let mut page = loaded_page();
    let a = id_of(&page, "A");
    let start = Instant::now();

    assert!(page.remove(a, start));
    assert_eq!(page.store().len(), 1);
    assert!(page.store().find_by_name("A").is_none());
    assert!(page.view().card(a).unwrap().is_leaving());

    let detached = page.tick(start + extlist_core::REMOVE_TRANSITION);
    assert_eq!(detached, vec![a]);
    assert_eq!(page.view().names(), vec!["B"]);

    page.apply_filter(FilterMode::All);
    assert_eq!(page.view().names(), vec!["B"]);
}

#[test]
fn removing_unknown_extension_is_noop() {
    let mut page = loaded_page();
    let a = id_of(&page, "A");
    let now = Instant::now();
    assert!(page.remove(a, now));

    assert!(!page.remove(a, now));
    assert!(!page.toggle(a, true));
    assert_eq!(page.store().len(), 1);
}

#[test]
fn failed_load_leaves_store_empty_and_view_unrendered() {
    let mut page = ExtensionsPage::new();
    let state = page.startup(&OfflineSource);

    assert_eq!(state, LoadState::Failed);
    assert_eq!(page.load_state(), LoadState::Failed);
    assert!(page.store().is_empty());
    assert!(!page.view().is_rendered());
    assert!(page.view().cards().is_empty());
}

#[test]
fn failed_reload_keeps_existing_collection() {
    let mut page = loaded_page();
    let err = page.load(&OfflineSource).unwrap_err();
    assert!(matches!(err, SourceError::Transport { .. }));
    assert_eq!(page.store().len(), 2);
}

#[test]
fn ids_stay_stable_across_filter_and_toggle() {
    let mut page = loaded_page();
    let before: Vec<_> = page.store().iter().map(|extension| extension.id).collect();

    page.apply_filter(FilterMode::Inactive);
    page.toggle(before[1], true);
    page.apply_filter(FilterMode::All);

    let after: Vec<_> = page.view().cards().iter().map(|card| card.id).collect();
    assert_eq!(before, after);
}

#[test]
fn reload_rerenders_cards_with_fresh_ids_under_current_filter() {
    let mut page = loaded_page();
    page.apply_filter(FilterMode::Active);

    let count = page
        .load(&StaticSource(vec![record("A", true), record("C", true), record("D", false)]))
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(page.filter(), FilterMode::Active);
    assert_eq!(page.view().names(), vec!["A", "C"]);
    for card in page.view().cards() {
        assert!(page.store().get(card.id).is_some());
    }

    let a = page.view().cards()[0].id;
    assert!(page.toggle(a, false));
    assert!(!page.store().get(a).unwrap().is_active);
}
