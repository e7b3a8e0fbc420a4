//! Integration tests for persistence of saved courses and search history.

use course_finder::core::discovery::{Action, DiscoverySettings, Effect, NoticeKind};
use course_finder::core::models::Catalog;
use course_finder::core::session::Session;
use course_finder::core::storage::{
    FileStore, KeyValueStore, MemoryStore, SAVED_COURSES_KEY, SEARCH_HISTORY_KEY,
};
use std::fs;
use tempfile::TempDir;

fn open(dir: &TempDir) -> Session<FileStore> {
    Session::open(
        Catalog::sample(),
        DiscoverySettings::default(),
        FileStore::new(dir.path()),
    )
}

#[test]
fn saved_and_history_survive_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let mut session = open(&dir);
        session
            .dispatch(Action::ToggleSaved("data-analytics".to_string()))
            .expect("Failed to persist saved");
        session
            .dispatch(Action::ToggleSaved("ai-fundamentals".to_string()))
            .expect("Failed to persist saved");
        for term in ["ai", "data", "ai"] {
            session
                .dispatch(Action::SubmitSearch(term.to_string()))
                .expect("Failed to persist history");
        }
    }

    let session = open(&dir);
    assert_eq!(
        session.state().saved().ids(),
        ["data-analytics", "ai-fundamentals"]
    );
    assert_eq!(session.state().history().terms(), ["data", "ai"]);
    assert!(dir.path().join("saved_courses.json").exists());
    assert!(dir.path().join("search_history.json").exists());
}

#[test]
fn corrupt_files_load_as_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("saved_courses.json"), "{not json").unwrap();
    fs::write(dir.path().join("search_history.json"), "42").unwrap();

    let mut session = open(&dir);
    assert!(session.state().saved().is_empty());
    assert!(session.state().history().is_empty());

    session
        .dispatch(Action::ToggleSaved("project-management".to_string()))
        .expect("Failed to overwrite corrupt file");
    let raw = fs::read_to_string(dir.path().join("saved_courses.json")).unwrap();
    assert_eq!(raw, r#"["project-management"]"#);
}

#[test]
fn duplicate_stored_ids_collapse() {
    let mut store = MemoryStore::new();
    store
        .write(SAVED_COURSES_KEY, r#"["ai-fundamentals","ai-fundamentals"]"#)
        .unwrap();
    let session = Session::open(Catalog::sample(), DiscoverySettings::default(), store);
    assert_eq!(session.state().saved().len(), 1);
}

#[test]
fn stored_history_is_truncated_to_limit() {
    let mut store = MemoryStore::new();
    store
        .write(SEARCH_HISTORY_KEY, r#"["a","b","c","d","e","f","g"]"#)
        .unwrap();
    let settings = DiscoverySettings {
        history_limit: 3,
        ..DiscoverySettings::default()
    };
    let session = Session::open(Catalog::sample(), settings, store);
    assert_eq!(session.state().history().terms(), ["a", "b", "c"]);
}

#[test]
fn clearing_history_is_persisted() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    {
        let mut session = open(&dir);
        session
            .dispatch(Action::SubmitSearch("marketing".to_string()))
            .unwrap();
        session.dispatch(Action::ClearHistory).unwrap();
    }
    let raw = fs::read_to_string(dir.path().join("search_history.json")).unwrap();
    assert_eq!(raw, "[]");
    assert!(open(&dir).state().history().is_empty());
}

#[test]
fn saved_ids_missing_from_catalog_are_kept() {
    let mut store = MemoryStore::new();
    store
        .write(SAVED_COURSES_KEY, r#"["retired-course","ai-fundamentals"]"#)
        .unwrap();
    let mut session = Session::open(Catalog::sample(), DiscoverySettings::default(), store);
    assert_eq!(session.state().saved().len(), 2);
    assert_eq!(session.state().saved_courses(session.catalog()).len(), 1);

    session
        .dispatch(Action::ToggleSaved("data-analytics".to_string()))
        .unwrap();
    let raw = session.store().read(SAVED_COURSES_KEY).unwrap().unwrap();
    assert!(raw.contains("retired-course"));
}

#[test]
fn failed_write_keeps_state_and_effects() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("saved_courses.json")).unwrap();
    let mut session = open(&dir);

    let err = session
        .dispatch(Action::ToggleSaved("ai-fundamentals".to_string()))
        .expect_err("write onto a directory must fail");
    assert!(err.effects.contains(&Effect::SavedChanged));
    assert!(err.effects.contains(&Effect::Notify(NoticeKind::Saved {
        course_id: "ai-fundamentals".to_string()
    })));
    assert!(session.state().saved().contains("ai-fundamentals"));
}
