use anyhow::{Context, Result};
use tracing::info;

use crate::core::config::{StorageBackend, StorageConfig};
use crate::core::state::{DynStore, Roster};
use crate::storage::{FileStore, MemoryStore};
use crate::stores::roster_store::RosterStore;

/// Open the configured persistence backend
pub fn open_storage(config: &StorageConfig) -> Result<DynStore> {
    match config.backend {
        StorageBackend::File => {
            let store = FileStore::open(&config.path).context(format!(
                "Failed to open roster storage file: {}",
                config.path.display()
            ))?;
            info!(path = %store.path().display(), "File storage opened");
            Ok(Box::new(store))
        }
        StorageBackend::Memory => {
            info!("In-memory storage selected, roster will not survive a restart");
            Ok(Box::new(MemoryStore::new()))
        }
    }
}

// this runs at boot time
pub fn load_roster(config: &StorageConfig) -> Result<Roster> {
    let storage = open_storage(config)?;
    let roster = RosterStore::load(storage);

    info!(
        users = roster.len(),
        next_id = roster.next_id(),
        "Roster restored from storage"
    );

    Ok(roster)
}
