use crate::core::error::UiError;
use crate::core::state::AppState;
use crate::models::roster::RosterSnapshot;
use axum::{extract::State, Json};
use std::sync::Arc;

/// Full roster as JSON
///
/// GET /api/roster
pub async fn roster_handler(State(state): State<Arc<AppState>>) -> Result<Json<RosterSnapshot>, UiError> {
    Ok(Json(state.roster()?.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::state::DynStore;
    use crate::models::user::UserId;
    use crate::storage::MemoryStore;
    use crate::stores::roster_store::RosterStore;

    #[tokio::test]
    async fn test_roster_snapshot() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        let storage: DynStore = Box::new(MemoryStore::new());
        let state = Arc::new(AppState::new(config, RosterStore::load(storage)));
        state.roster().unwrap().add_user("Alice").unwrap();

        let Json(snapshot) = roster_handler(State(state)).await.unwrap();
        assert_eq!(snapshot.next_id, 2);
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.users[0].id, UserId(1));
    }

    #[test]
    fn test_snapshot_json_keys() {
        let snapshot = RosterSnapshot {
            users: Vec::new(),
            next_id: 1,
        };
        let value = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(value, serde_json::json!({ "users": [], "nextId": 1 }));
    }
}
