use todolist_core::{
    JsonFileStore, ListError, MemoryListStore, Priority, ToDoItem, ToDoItemKind, ToDoListService,
};

#[test]
fn create_item_appends_empty_normal_item_and_returns_index() {
    let mut service = ToDoListService::open(MemoryListStore::new());

    let first = service.create_item(ToDoItemKind::Homework).unwrap();
    let second = service.create_item(ToDoItemKind::Game).unwrap();

    assert_eq!((first, second), (0, 1));
    assert_eq!(service.len(), 2);
    let item = service.get(0).unwrap();
    assert_eq!(item.kind, ToDoItemKind::Homework);
    assert_eq!(item.title, "");
    assert_eq!(item.priority, Priority::Normal);
}

#[test]
fn every_mutation_is_mirrored_to_the_store() {
    let store = MemoryListStore::new();
    let mut service = ToDoListService::open(&store);

    service.add(ToDoItem::new(ToDoItemKind::Game, "chess")).unwrap();
    assert_eq!(store.persisted().len(), 1);

    service.add(ToDoItem::new(ToDoItemKind::Homework, "read")).unwrap();
    service.update_title(1, "read chapter 3").unwrap();
    assert_eq!(store.persisted()[1].title, "read chapter 3");

    service.remove_at(0).unwrap();
    let persisted = store.persisted();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].title, "read chapter 3");
}

#[test]
fn mutations_survive_reload_from_the_same_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.json");

    let mut service = ToDoListService::open(JsonFileStore::new(&path));
    service.add(ToDoItem::new(ToDoItemKind::Classwork, "notes")).unwrap();
    service.add(ToDoItem::new(ToDoItemKind::Game, "go")).unwrap();
    service.update_title(0, "lecture notes").unwrap();

    let reopened = ToDoListService::open(JsonFileStore::new(&path));
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get(0).unwrap().title, "lecture notes");
    assert_eq!(reopened.get(1).unwrap().kind, ToDoItemKind::Game);

    let mut service = ToDoListService::open(JsonFileStore::new(&path));
    service.remove_at(1).unwrap();

    let reopened = ToDoListService::open(JsonFileStore::new(&path));
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get(0).unwrap().title, "lecture notes");
}

#[test]
fn remove_at_len_fails_and_leaves_list_unmodified() {
    let store = MemoryListStore::new();
    let mut service = ToDoListService::open(&store);
    service.add(ToDoItem::new(ToDoItemKind::Game, "chess")).unwrap();

    // A rejected index triggers neither a removal nor a rewrite.
    store.set_fail_writes(true);
    let err = service.remove_at(1).unwrap_err();
    assert!(matches!(err, ListError::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(service.len(), 1);
    assert_eq!(store.persisted().len(), 1);
}

#[test]
fn update_title_out_of_range_fails_without_mutation() {
    let mut service = ToDoListService::open(MemoryListStore::new());

    let err = service.update_title(0, "anything").unwrap_err();
    assert!(matches!(err, ListError::IndexOutOfRange { index: 0, len: 0 }));
    assert!(service.is_empty());
}

#[test]
fn failed_save_keeps_in_memory_list_authoritative() {
    let store = MemoryListStore::new();
    let mut service = ToDoListService::open(&store);

    service.add(ToDoItem::new(ToDoItemKind::Homework, "persisted")).unwrap();

    store.set_fail_writes(true);
    let err = service.add(ToDoItem::new(ToDoItemKind::Game, "unsaved")).unwrap_err();
    assert!(matches!(err, ListError::Store(_)));

    // The mutation sticks in memory even though the rewrite failed.
    assert_eq!(service.len(), 2);
    assert_eq!(service.get(1).unwrap().title, "unsaved");
    assert_eq!(store.persisted().len(), 1);
}

#[test]
fn next_successful_save_reconciles_after_failure() {
    let store = MemoryListStore::new();
    store.set_fail_writes(true);
    let mut service = ToDoListService::open(&store);

    let err = service.add(ToDoItem::new(ToDoItemKind::Game, "first")).unwrap_err();
    assert!(matches!(err, ListError::Store(_)));
    assert!(store.persisted().is_empty());

    store.set_fail_writes(false);
    service.add(ToDoItem::new(ToDoItemKind::Classwork, "second")).unwrap();

    // The full surviving sequence lands in the store, not just the delta.
    let persisted = store.persisted();
    assert_eq!(persisted.len(), 2);
    assert_eq!(persisted[0].title, "first");
    assert_eq!(persisted[1].title, "second");
}

#[test]
fn snapshot_projects_rows_in_display_order() {
    let mut service = ToDoListService::open(MemoryListStore::new());
    service.add(ToDoItem::new(ToDoItemKind::Homework, "read chapter 3")).unwrap();
    service
        .add(ToDoItem::with_priority(ToDoItemKind::Game, "chess", Priority::High))
        .unwrap();

    let rows = service.snapshot();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].display_title, "Read Chapter 3");
    assert_eq!(rows[0].icon.asset_name(), "icon_0");
    assert_eq!(rows[0].color.hex(), "#05e177");
    assert_eq!(rows[1].display_title, "Chess");
    assert_eq!(rows[1].icon.asset_name(), "icon_1");
    assert_eq!(rows[1].color.hex(), "#ff0000");
}

#[test]
fn end_to_end_homework_edit_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todolist.json");

    let mut service = ToDoListService::open(JsonFileStore::new(&path));
    assert!(service.is_empty());

    service.add(ToDoItem::new(ToDoItemKind::Homework, "")).unwrap();
    service.update_title(0, "read chapter 3").unwrap();

    let reopened = ToDoListService::open(JsonFileStore::new(&path));
    assert_eq!(reopened.len(), 1);
    let item = reopened.get(0).unwrap();
    assert_eq!(item.kind, ToDoItemKind::Homework);
    assert_eq!(item.title, "read chapter 3");
    assert_eq!(item.priority, Priority::Normal);
    assert_eq!(item.display_title(), "Read Chapter 3");
}

#[test]
fn end_to_end_remove_first_keeps_classwork() {
    let mut service = ToDoListService::open(MemoryListStore::new());
    service.add(ToDoItem::new(ToDoItemKind::Game, "")).unwrap();
    service.add(ToDoItem::new(ToDoItemKind::Classwork, "")).unwrap();

    let removed = service.remove_at(0).unwrap();
    assert_eq!(removed.kind, ToDoItemKind::Game);

    assert_eq!(service.len(), 1);
    assert_eq!(service.get(0).unwrap().kind, ToDoItemKind::Classwork);
}
