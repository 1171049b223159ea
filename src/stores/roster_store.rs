use crate::core::error::StorageError;
use crate::models::roster::RosterSnapshot;
use crate::models::user::{Status, User, UserId};
use crate::storage::{KeyValueStore, NEXT_ID_KEY, USERS_KEY};
use crate::stores::confirm::Confirm;
use crate::utils::time::activity_timestamp;
use tracing::{debug, info, warn};

/// Question asked before a user is removed
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

/// Result of [`RosterStore::delete_user`]
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The prompt was declined; nothing changed
    Declined,
    /// Confirmed, but no record had the id
    NotFound,
    /// Confirmed and removed; carries the deleted record
    Removed(User),
}

/// Authoritative in-memory roster with write-through persistence.
///
/// Every mutating operation writes the complete roster back to the
/// key-value store. Invalid input is ignored rather than reported: each
/// operation returns `None` (or [`DeleteOutcome::Declined`]) and leaves the
/// roster untouched.
pub struct RosterStore<S> {
    storage: S,
    users: Vec<User>,
    next_id: u64,
    clock: fn() -> String,
}

impl<S: KeyValueStore> RosterStore<S> {
    /// Load the roster from `storage`.
    ///
    /// Missing or unparsable entries fall back to an empty list and a counter
    /// of 1. Never fails.
    pub fn load(storage: S) -> Self {
        let users = read_entry::<Vec<User>>(&storage, USERS_KEY).unwrap_or_default();

        // a stored 0 counts as missing
        let stored_next = read_entry::<u64>(&storage, NEXT_ID_KEY)
            .filter(|n| *n > 0)
            .unwrap_or(1);

        // an id of u64::MAX leaves no room above it; the counter then stays
        // exhausted and add_user refuses to issue ids
        let floor = users
            .iter()
            .map(|u| u.id.0)
            .max()
            .map_or(1, |max| max.checked_add(1).unwrap_or(u64::MAX));
        let next_id = if stored_next < floor {
            warn!(
                stored_next_id = stored_next,
                repaired_next_id = floor,
                "Stored id counter is behind existing users, raising it"
            );
            floor
        } else {
            stored_next
        };

        info!(users = users.len(), next_id, "Roster loaded");

        Self {
            storage,
            users,
            next_id,
            clock: activity_timestamp,
        }
    }

    /// Replace the source of `lastActivity` stamps
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// Create a user named `name` (trimmed).
    ///
    /// Ignored when the name is blank, or when the counter cannot move past
    /// the id it would hand out.
    pub fn add_user(&mut self, name: &str) -> Option<User> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring add with blank name");
            return None;
        }

        let Some(following) = self.next_id.checked_add(1) else {
            debug!(next_id = self.next_id, "Id counter exhausted, ignoring add");
            return None;
        };
        let id = UserId(self.next_id);
        self.next_id = following;

        let user = User::new(id, name.to_string(), (self.clock)());
        self.users.push(user.clone());

        info!(user_id = %id, name = %user.name, "User added");
        self.persist_or_warn();

        Some(user)
    }

    /// Set a user's frequency and mark them active.
    ///
    /// Ignored when `user_id` is 0, when `frequency` is not a finite positive
    /// number, or when no user has the id.
    pub fn assign_frequency(&mut self, user_id: UserId, frequency: f64) -> Option<&User> {
        if user_id.0 == 0 || !frequency.is_finite() || frequency <= 0.0 {
            debug!(user_id = %user_id, frequency, "Ignoring invalid frequency assignment");
            return None;
        }

        let now = (self.clock)();
        let Some(index) = self.position(user_id) else {
            debug!(user_id = %user_id, "Frequency assignment for unknown user");
            return None;
        };

        let user = &mut self.users[index];
        user.frequency = Some(frequency);
        user.status = Status::Active;
        user.last_activity = now;

        info!(user_id = %user_id, frequency, "Frequency assigned");
        self.persist_or_warn();

        self.users.get(index)
    }

    /// Remove a user after asking `confirmer` with [`DELETE_PROMPT`]
    pub fn delete_user<C>(&mut self, user_id: UserId, confirmer: &mut C) -> DeleteOutcome
    where
        C: Confirm + ?Sized,
    {
        if !confirmer.confirm(DELETE_PROMPT) {
            debug!(user_id = %user_id, "Delete declined");
            return DeleteOutcome::Declined;
        }

        let outcome = match self.position(user_id) {
            Some(index) => DeleteOutcome::Removed(self.users.remove(index)),
            None => DeleteOutcome::NotFound,
        };

        match &outcome {
            DeleteOutcome::Removed(user) => info!(user_id = %user.id, name = %user.name, "User deleted"),
            _ => debug!(user_id = %user_id, "Delete confirmed for unknown user"),
        }

        // written even when nothing matched
        self.persist_or_warn();

        outcome
    }

    /// Advance a user's status `Idle -> Active -> Inactive -> Idle`.
    /// Returns the new status, or `None` if no user has the id.
    pub fn cycle_status(&mut self, user_id: UserId) -> Option<Status> {
        let now = (self.clock)();
        let Some(index) = self.position(user_id) else {
            debug!(user_id = %user_id, "Status change for unknown user");
            return None;
        };

        let user = &mut self.users[index];
        let previous = user.status;
        user.status = previous.next();
        user.last_activity = now;
        let status = user.status;

        info!(user_id = %user_id, from = %previous, to = %status, "Status changed");
        self.persist_or_warn();

        Some(status)
    }

    /// Write the full roster and counter to storage, replacing what was there
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let users = serde_json::to_string(&self.users)?;
        let next_id = serde_json::to_string(&self.next_id)?;

        self.storage.set(USERS_KEY, &users)?;
        self.storage.set(NEXT_ID_KEY, &next_id)?;

        Ok(())
    }

    fn persist_or_warn(&mut self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "Failed to persist roster, keeping in-memory state");
        }
    }

    fn position(&self, user_id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id == user_id)
    }

    /// Users in insertion order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, user_id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// `(id, name)` pairs for the user selection list, in display order
    pub fn user_options(&self) -> Vec<(UserId, String)> {
        self.users.iter().map(|u| (u.id, u.name.clone())).collect()
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            users: self.users.clone(),
            next_id: self.next_id,
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Give back the storage backend, e.g. to reload it as after a restart
    pub fn into_storage(self) -> S {
        self.storage
    }
}

fn read_entry<T>(storage: &impl KeyValueStore, key: &str) -> Option<T>
where
    T: serde::de::DeserializeOwned,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored roster entry, using default");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored roster entry is malformed, using default");
            None
        }
    }
}
