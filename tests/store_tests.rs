mod common;
use common::april;
use rworkouts::core::store::{DEFAULT_STORAGE_KEY, read_snapshot};
use rworkouts::core::{StoreState, WorkoutStore};
use rworkouts::db::log::read_log;
use rworkouts::db::{KeyValueStore, MemoryStorage, SqliteStorage};
use rworkouts::models::{Coords, Workout};

fn sample_workouts() -> Vec<Workout> {
    vec![
        Workout::running_at(april(10, 7, 0), Coords::new(40.7, -74.0), 5.2, 24.0, 178.0).unwrap(),
        Workout::cycling_at(april(11, 8, 0), Coords::new(40.71, -74.02), 25.0, 95.0, 523.0)
            .unwrap(),
        Workout::running_at(april(12, 9, 0), Coords::new(40.69, -73.99), 10.0, 55.0, 165.0)
            .unwrap(),
    ]
}

fn filled_store() -> WorkoutStore {
    let mut store = WorkoutStore::new();
    for w in sample_workouts() {
        store.add(w);
    }
    store
}

#[test]
fn test_add_then_find_by_id() {
    let store = filled_store();
    let ride = &sample_workouts()[1];

    assert_eq!(store.len(), 3);
    assert_eq!(store.find_by_id(ride.id()), Some(ride));
    assert_eq!(store.find_by_id("does-not-exist"), None);
}

#[test]
fn test_find_by_id_returns_first_match() {
    let t = april(10, 7, 0);
    let first = Workout::running_at(t, Coords::new(1.0, 1.0), 1.0, 5.0, 150.0).unwrap();
    let second = Workout::cycling_at(t, Coords::new(2.0, 2.0), 9.0, 30.0, 0.0).unwrap();
    assert_eq!(first.id(), second.id());

    let mut store = WorkoutStore::new();
    store.add(first.clone());
    store.add(second);

    assert_eq!(store.find_by_id(first.id()), Some(&first));
}

#[test]
fn test_all_keeps_insertion_order() {
    let store = filled_store();
    let ids: Vec<&str> = store.all().iter().map(|w| w.id()).collect();
    let expected: Vec<String> = sample_workouts().iter().map(|w| w.id().to_string()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_state_transitions() {
    let mut store = WorkoutStore::new();
    assert_eq!(store.state(), StoreState::Empty);

    store.add(sample_workouts().remove(0));
    assert_eq!(store.state(), StoreState::Populated);

    store.add(sample_workouts().remove(1));
    assert_eq!(store.state(), StoreState::Populated);

    // reset only drops the persisted copy
    let mut storage = MemoryStorage::new();
    store.save_to(&mut storage).unwrap();
    store.reset(&mut storage).unwrap();
    assert_eq!(store.state(), StoreState::Populated);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_save_then_load_in_fresh_store() {
    let store = filled_store();
    let mut storage = MemoryStorage::new();
    store.save_to(&mut storage).unwrap();

    let mut fresh = WorkoutStore::new();
    let loaded = fresh.load_from(&storage).unwrap();
    assert_eq!(loaded, store.all());
    assert_eq!(fresh.all(), store.all());
    assert_eq!(fresh.state(), StoreState::Populated);
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let mut storage = MemoryStorage::new();
    filled_store().save_to(&mut storage).unwrap();

    let mut smaller = WorkoutStore::new();
    smaller.add(sample_workouts().remove(2));
    smaller.save_to(&mut storage).unwrap();

    assert_eq!(storage.len(), 1);
    let snapshot = read_snapshot(&storage, DEFAULT_STORAGE_KEY).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0], sample_workouts()[2]);
}

#[test]
fn test_saved_value_is_one_json_array() {
    let mut storage = MemoryStorage::new();
    filled_store().save_to(&mut storage).unwrap();

    let raw = storage.get_item("workouts").unwrap().expect("stored");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().expect("array");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["type"], "running");
    assert_eq!(records[1]["type"], "cycling");
}

#[test]
fn test_load_absent_key_is_empty() {
    let storage = MemoryStorage::new();
    let mut store = WorkoutStore::new();

    assert!(store.load_from(&storage).unwrap().is_empty());
    assert_eq!(store.state(), StoreState::Empty);
}

#[test]
fn test_load_corrupt_value_is_empty() {
    for garbage in ["not json", "null", "{\"id\": 1}", "[{\"type\": \"swimming\"}]", ""] {
        let mut storage = MemoryStorage::new();
        storage.set_item(DEFAULT_STORAGE_KEY, garbage).unwrap();

        let mut store = WorkoutStore::new();
        assert!(store.load_from(&storage).unwrap().is_empty(), "{garbage}");
        assert!(store.is_empty());
    }
}

#[test]
fn test_reset_then_load_is_empty() {
    let store = filled_store();
    let mut storage = MemoryStorage::new();
    store.save_to(&mut storage).unwrap();

    store.reset(&mut storage).unwrap();
    assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);

    let mut fresh = WorkoutStore::new();
    assert!(fresh.load_from(&storage).unwrap().is_empty());
}

#[test]
fn test_custom_key() {
    let mut store = WorkoutStore::with_key("mapty");
    store.add(sample_workouts().remove(0));

    let mut storage = MemoryStorage::new();
    store.save_to(&mut storage).unwrap();

    assert!(storage.get_item("mapty").unwrap().is_some());
    assert!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap().is_none());
    assert!(WorkoutStore::new().load_from(&storage).unwrap().is_empty());
    assert_eq!(WorkoutStore::with_key("mapty").load_from(&storage).unwrap().len(), 1);
}

#[test]
fn test_find_by_id_mut_counts_interactions() {
    let mut store = filled_store();
    let id = sample_workouts()[0].id().to_string();

    store.find_by_id_mut(&id).unwrap().register_interaction();
    assert_eq!(store.find_by_id(&id).unwrap().click_count(), 1);
    assert!(store.find_by_id_mut("missing").is_none());
}

#[test]
fn test_sqlite_storage_round_trip() {
    let mut storage = SqliteStorage::in_memory().unwrap();
    let store = filled_store();
    store.save_to(&mut storage).unwrap();

    let mut fresh = WorkoutStore::new();
    assert_eq!(fresh.load_from(&storage).unwrap(), store.all());

    store.reset(&mut storage).unwrap();
    assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_sqlite_storage_file_survives_reopen() {
    let db_path = common::setup_test_db("store_reopen");

    {
        let mut storage = SqliteStorage::open(&db_path).unwrap();
        filled_store().save_to(&mut storage).unwrap();
    }

    let storage = SqliteStorage::open(&db_path).unwrap();
    let mut store = WorkoutStore::new();
    assert_eq!(store.load_from(&storage).unwrap().len(), 3);
    assert_eq!(store.all(), filled_store().all());
}

#[test]
fn test_sqlite_storage_set_replaces_and_remove_is_idempotent() {
    let mut storage = SqliteStorage::in_memory().unwrap();

    storage.set_item("k", "one").unwrap();
    storage.set_item("k", "two").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

    storage.remove_item("k").unwrap();
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn test_fresh_database_records_its_migrations_once() {
    let db_path = common::setup_test_db("store_migrations");

    SqliteStorage::open(&db_path).unwrap();
    // reopening finds nothing pending
    let mut storage = SqliteStorage::open(&db_path).unwrap();

    let migrations: Vec<String> = read_log(&storage.pool().conn)
        .unwrap()
        .into_iter()
        .filter(|(_, _, op, _, _)| op == "migration_applied")
        .map(|(_, _, _, target, _)| target)
        .collect();
    assert_eq!(migrations, vec!["20260901_0001_create_storage".to_string()]);

    let has_updated_at: bool = storage
        .pool()
        .conn
        .query_row(
            "SELECT COUNT(*) FROM pragma_table_info('storage') WHERE name = 'updated_at'",
            [],
            |row| row.get::<_, i64>(0),
        )
        .map(|n| n == 1)
        .unwrap();
    assert!(has_updated_at);
}
