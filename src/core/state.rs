// Application state (AppState)

use crate::core::config::Config;
use crate::core::error::UiError;
use crate::storage::KeyValueStore;
use crate::stores::roster_store::RosterStore;
use std::sync::{Arc, Mutex, MutexGuard};

/// Storage backend chosen at startup
pub type DynStore = Box<dyn KeyValueStore + Send>;

pub type Roster = RosterStore<DynStore>;

/// Shared application state
///
/// The roster sits behind a single lock, so requests apply their roster
/// operation one at a time.
pub struct AppState {
    roster: Mutex<Roster>,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, roster: Roster) -> Self {
        Self {
            roster: Mutex::new(roster),
            config: Arc::new(config),
        }
    }

    /// Exclusive access to the roster for the duration of one operation
    pub fn roster(&self) -> Result<MutexGuard<'_, Roster>, UiError> {
        self.roster
            .lock()
            .map_err(|e| UiError::RosterUnavailable(e.to_string()))
    }
}
