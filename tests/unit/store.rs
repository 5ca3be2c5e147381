use chrono::NaiveDate;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("target/unit_store")
        .join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn goal() -> Goal {
    Goal {
        title: "Read 20 books".into(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    }
}

#[test]
fn theme_defaults_to_midnight() {
    let prefs = Preferences::new(MemoryStore::default());
    assert_eq!(prefs.load_theme().unwrap(), Theme::Midnight);
}

#[test]
fn unknown_theme_falls_back() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "neon").unwrap();
    assert_eq!(Preferences::new(store).load_theme().unwrap(), Theme::Midnight);
}

#[test]
fn theme_is_stored_by_id() {
    let mut prefs = Preferences::new(MemoryStore::default());
    prefs.save_theme(Theme::Sunset).unwrap();
    assert_eq!(prefs.load_theme().unwrap(), Theme::Sunset);
    assert_eq!(
        prefs.into_inner().get(THEME_KEY).unwrap().as_deref(),
        Some("sunset")
    );
}

#[test]
fn goal_uses_camel_case_json() {
    let mut prefs = Preferences::new(MemoryStore::default());
    prefs.save_goal(&goal()).unwrap();
    assert_eq!(prefs.load_goal().unwrap(), Some(goal()));

    let raw = prefs.into_inner().get(GOAL_KEY).unwrap().unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        v,
        serde_json::json!({
            "title": "Read 20 books",
            "startDate": "2025-01-01",
            "endDate": "2025-12-31",
        })
    );
}

#[test]
fn corrupt_goal_reads_as_absent() {
    let mut store = MemoryStore::default();
    store.set(GOAL_KEY, "{not json").unwrap();
    assert_eq!(Preferences::new(store).load_goal().unwrap(), None);
}

#[test]
fn clear_goal_removes_entry() {
    let mut prefs = Preferences::new(MemoryStore::default());
    prefs.save_goal(&goal()).unwrap();
    prefs.clear_goal().unwrap();
    assert_eq!(prefs.load_goal().unwrap(), None);
}

#[test]
fn json_file_store_persists_across_instances() {
    let dir = scratch("persist");
    let mut prefs = Preferences::new(JsonFileStore::in_dir(&dir));
    prefs.save_theme(Theme::Ocean).unwrap();
    prefs.save_goal(&goal()).unwrap();

    let reopened = Preferences::new(JsonFileStore::in_dir(&dir));
    assert_eq!(reopened.load_theme().unwrap(), Theme::Ocean);
    assert_eq!(reopened.load_goal().unwrap(), Some(goal()));

    let on_disk: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.join(STATE_FILE)).unwrap()).unwrap();
    assert_eq!(on_disk["life-calendar-theme"], "ocean");
}

#[test]
fn json_file_store_missing_file_is_empty() {
    let dir = scratch("missing");
    let mut store = JsonFileStore::in_dir(&dir);
    assert_eq!(store.get(THEME_KEY).unwrap(), None);
    store.remove(THEME_KEY).unwrap();
    assert!(!store.path().exists());
}

#[test]
fn json_file_store_treats_garbage_as_empty() {
    let dir = scratch("garbage");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(STATE_FILE), b"[1, 2").unwrap();

    let mut prefs = Preferences::new(JsonFileStore::in_dir(&dir));
    assert_eq!(prefs.load_theme().unwrap(), Theme::Midnight);
    assert_eq!(prefs.load_goal().unwrap(), None);
    prefs.clear_goal().unwrap();
    prefs.save_theme(Theme::Ruby).unwrap();

    let store = JsonFileStore::in_dir(&dir);
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("ruby"));
}
