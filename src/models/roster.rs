use crate::models::user::User;
use serde::{Deserialize, Serialize};

/// Full roster state as served by `GET /api/roster`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSnapshot {
    pub users: Vec<User>,
    pub next_id: u64,
}
