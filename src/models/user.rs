use serde::{Deserialize, Serialize};

/// Code uniquely identifying a user within one roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tri-state activity marker of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Idle,
    Active,
    Inactive,
}

impl Status {
    /// Rotation order used by [`Status::next`]
    pub const CYCLE: [Status; 3] = [Status::Idle, Status::Active, Status::Inactive];

    /// The following status in the cycle, wrapping `Inactive` back to `Idle`
    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|s| *s == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "Idle",
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person on the roster.
///
/// Field names follow the persisted JSON layout (`lastActivity`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    /// Display name, fixed at creation. Duplicates are allowed.
    pub name: String,
    /// Assigned frequency in MHz; `None` until the first assignment
    #[serde(serialize_with = "serialize_frequency")]
    pub frequency: Option<f64>,
    pub status: Status,
    /// Local time of the last mutation, already formatted for display
    pub last_activity: String,
}

impl User {
    pub fn new(id: UserId, name: String, last_activity: String) -> Self {
        Self {
            id,
            name,
            frequency: None,
            status: Status::Idle,
            last_activity,
        }
    }
}

/// Whole frequencies are written as JSON integers (`146`, not `146.0`)
fn serialize_frequency<S>(frequency: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    const MAX_EXACT: f64 = 9_007_199_254_740_991.0;

    match *frequency {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_EXACT => serializer.serialize_i64(f as i64),
        Some(f) => serializer.serialize_f64(f),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle_order() {
        assert_eq!(Status::Idle.next(), Status::Active);
        assert_eq!(Status::Active.next(), Status::Inactive);
        assert_eq!(Status::Inactive.next(), Status::Idle);
    }

    #[test]
    fn test_status_cycle_is_closed() {
        for status in Status::CYCLE {
            assert_eq!(status.next().next().next(), status);
        }
    }

    #[test]
    fn test_new_user_is_idle_without_frequency() {
        let user = User::new(UserId(7), "Alice".to_string(), "now".to_string());
        assert_eq!(user.status, Status::Idle);
        assert!(user.frequency.is_none());
    }

    #[test]
    fn test_user_json_layout() {
        let user = User::new(UserId(1), "Alice".to_string(), "1/1/2025, 9:00:00 AM".to_string());
        let value = serde_json::to_value(&user).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Alice",
                "frequency": null,
                "status": "Idle",
                "lastActivity": "1/1/2025, 9:00:00 AM"
            })
        );
    }

    #[test]
    fn test_user_reads_integer_frequency() {
        let user: User = serde_json::from_str(
            r#"{"id":3,"name":"Bo","frequency":146,"status":"Active","lastActivity":"x"}"#,
        )
        .unwrap();

        assert_eq!(user.id, UserId(3));
        assert_eq!(user.frequency, Some(146.0));
        assert_eq!(user.status, Status::Active);
    }

    #[test]
    fn test_whole_frequency_written_as_integer() {
        let mut user = User::new(UserId(1), "Alice".to_string(), "x".to_string());

        user.frequency = Some(146.0);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"frequency\":146,"), "{json}");

        user.frequency = Some(146.52);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"frequency\":146.52,"), "{json}");

        let reread: User = serde_json::from_str(&json).unwrap();
        assert_eq!(reread, user);
    }

    #[test]
    fn test_user_reads_id_beyond_32_bits() {
        let user: User = serde_json::from_str(
            r#"{"id":5000000000,"name":"Bo","frequency":null,"status":"Idle","lastActivity":"x"}"#,
        )
        .unwrap();
        assert_eq!(user.id, UserId(5_000_000_000));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"id":3,"name":"Bo","frequency":null,"status":"Busy","lastActivity":"x"}"#,
        );
        assert!(result.is_err());
    }
}
