use crate::db::storage::KeyValueStore;
use crate::errors::AppResult;
use crate::models::workout::Workout;

/// Key the workout snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Nothing added or loaded yet.
    Empty,
    /// At least one workout added or loaded.
    Populated,
}

/// Ordered, in-memory collection of the session's workouts.
///
/// Insertion order is creation order. Workouts are only ever appended; the
/// persisted copy can be dropped wholesale with [`WorkoutStore::reset`].
#[derive(Debug, Clone)]
pub struct WorkoutStore {
    key: String,
    workouts: Vec<Workout>,
}

impl Default for WorkoutStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            workouts: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Append without a duplicate-id check: ids come from creation
    /// timestamps.
    pub fn add(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// First workout with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id() == id)
    }

    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn state(&self) -> StoreState {
        if self.workouts.is_empty() {
            StoreState::Empty
        } else {
            StoreState::Populated
        }
    }

    /// Write the whole sequence as one JSON array, replacing the previous
    /// value under the key.
    pub fn save_to<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> AppResult<()> {
        let json = serde_json::to_string(&self.workouts)?;
        storage.set_item(&self.key, &json)
    }

    /// Hydrate from the persisted snapshot.
    ///
    /// An absent or unparsable value means "no prior data": the returned slice
    /// is empty and the in-memory sequence is left as it was. Otherwise the
    /// loaded workouts replace it.
    pub fn load_from<S: KeyValueStore + ?Sized>(&mut self, storage: &S) -> AppResult<&[Workout]> {
        let loaded = read_snapshot(storage, &self.key)?;
        if loaded.is_empty() {
            return Ok(&[]);
        }

        self.workouts = loaded;
        Ok(&self.workouts)
    }

    /// Drop the persisted snapshot. The in-memory sequence is kept: callers
    /// are expected to discard and rebuild their whole state afterwards.
    pub fn reset<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> AppResult<()> {
        storage.remove_item(&self.key)
    }
}

/// Parse the snapshot stored under `key`. Corrupt data reads as empty.
pub fn read_snapshot<S: KeyValueStore + ?Sized>(storage: &S, key: &str) -> AppResult<Vec<Workout>> {
    let Some(raw) = storage.get_item(key)? else {
        return Ok(Vec::new());
    };

    Ok(serde_json::from_str::<Vec<Workout>>(&raw).unwrap_or_default())
}
