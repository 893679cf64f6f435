use tempfile::tempdir;
use todoboard_core::{AppConfig, KeyValueStore};
use todoboard_domain::*;
use todoboard_persistence::{open_store, JsonFileStore, MemoryStore};

#[test]
fn test_disabled_storage_keeps_session_working() {
    let mut workspace = Workspace::open(MemoryStore::disabled());
    let board = workspace.add_board();
    workspace.set_title(&board, "Ephemeral");
    let task = workspace.add_task(&board, "only in memory").unwrap();
    assert!(workspace.toggle_task(&board, task));

    let current = workspace.board(&board).unwrap();
    assert_eq!(current.title(), "Ephemeral");
    assert!(current.task(task).unwrap().completion);

    let reopened = Workspace::open(workspace.into_store());
    assert!(reopened.is_empty());
}

#[test]
fn test_quota_keeps_last_successful_write() {
    let mut workspace = Workspace::open(MemoryStore::with_quota(300));
    let board = workspace.add_board();
    workspace.add_task(&board, "short").unwrap();

    let long_text = "x".repeat(500);
    let long_task = workspace.add_task(&board, &long_text).unwrap();
    assert_eq!(workspace.board(&board).unwrap().tasks().len(), 2);
    assert!(workspace.board(&board).unwrap().task(long_task).is_some());

    let reopened = Workspace::open(workspace.into_store());
    let tasks = reopened.board(&board).unwrap().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "short");
}

#[test]
fn test_file_store_round_trip() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("boards.json");

    let board = {
        let mut workspace = Workspace::open(JsonFileStore::open(&file_path).unwrap());
        let board = workspace.add_board();
        workspace.set_title(&board, "On disk");
        workspace.add_task(&board, "survive restart").unwrap();
        board
    };

    let workspace = Workspace::open(JsonFileStore::open(&file_path).unwrap());
    let reloaded = workspace.board(&board).unwrap();
    assert_eq!(reloaded.title(), "On disk");
    assert_eq!(reloaded.tasks()[0].text, "survive restart");
}

#[test]
fn test_configured_store_with_corrupt_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("boards.json");
    std::fs::write(&file_path, "garbage").unwrap();
    let config = AppConfig {
        data_file: Some(file_path.clone()),
        ..AppConfig::default()
    };

    let mut workspace = Workspace::open(open_store(&config).unwrap());
    assert!(workspace.is_empty());
    let board = workspace.add_board();

    let store = open_store(&config).unwrap();
    assert!(store.get(COLLECTION_KEY).unwrap().unwrap().contains(board.as_str()));
}

#[test]
fn test_malformed_entries_fall_back_to_defaults() {
    let mut store = MemoryStore::new();
    store
        .set(COLLECTION_KEY, r#"[{"id":"legacy"}]"#)
        .unwrap();
    store.set("todos_legacy", r#"[{"id":"not a number"}]"#).unwrap();
    store.set("todos_legacy-color", "").unwrap();

    let workspace = Workspace::open(store);
    let board = workspace.board(&BoardId::from("legacy")).unwrap();
    assert_eq!(board.title(), "");
    assert_eq!(board.theme_color(), &ThemeColor::Default);
    assert!(board.tasks().is_empty());
    assert_eq!(
        workspace.store().get("todos_legacy").unwrap(),
        Some("[]".to_string())
    );
}
