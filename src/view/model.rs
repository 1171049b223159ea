//! Display-ready projection of the roster, free of any markup.

use crate::models::user::{User, UserId};

/// Number of columns in the roster table
pub const TABLE_COLUMNS: usize = 6;

pub const EMPTY_MESSAGE: &str = "No users added yet. Click \"Add User\" to get started.";

pub const NOT_ASSIGNED: &str = "Not Assigned";

/// Label of the blank entry that heads the user selection list
pub const SELECT_PLACEHOLDER: &str = "Select User";

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: UserId,
    pub name: String,
    pub frequency: String,
    pub status: &'static str,
    /// CSS class for the status cell, e.g. `status-active`
    pub status_class: String,
    pub last_activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterView {
    /// Nothing on the roster; one row spanning `colspan` columns
    Empty { message: &'static str, colspan: usize },
    Rows(Vec<RowView>),
}

impl RosterView {
    pub fn from_users(users: &[User]) -> Self {
        if users.is_empty() {
            return RosterView::Empty {
                message: EMPTY_MESSAGE,
                colspan: TABLE_COLUMNS,
            };
        }

        RosterView::Rows(users.iter().map(RowView::from_user).collect())
    }
}

impl RowView {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            frequency: format_frequency(user.frequency),
            status: user.status.as_str(),
            status_class: format!("status-{}", user.status.as_str().to_lowercase()),
            last_activity: user.last_activity.clone(),
        }
    }
}

/// `"146 MHz"` for an assigned frequency, `"Not Assigned"` otherwise
pub fn format_frequency(frequency: Option<f64>) -> String {
    match frequency {
        Some(f) if f != 0.0 && !f.is_nan() => format!("{f} MHz"),
        _ => NOT_ASSIGNED.to_string(),
    }
}

/// One entry of the user selection list; `value` is empty for the placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

/// Selection list built from the roster at the moment the form is opened
pub fn user_options(options: &[(UserId, String)]) -> Vec<OptionView> {
    std::iter::once(OptionView {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(options.iter().map(|(id, name)| OptionView {
        value: id.to_string(),
        label: name.clone(),
    }))
    .collect()
}
