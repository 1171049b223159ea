use serde::Deserialize;

/// Body of `POST /users`
#[derive(Debug, Deserialize)]
pub struct AddUserForm {
    #[serde(default)]
    pub name: String,
}

/// Body of `POST /frequency`.
///
/// Both fields arrive as raw text and are coerced in
/// [`crate::validation::params`].
#[derive(Debug, Deserialize)]
pub struct AssignFrequencyForm {
    #[serde(default, rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub frequency: String,
}

/// Body of `POST /users/{id}/delete`
#[derive(Debug, Deserialize)]
pub struct DeleteUserForm {
    #[serde(default)]
    pub confirm: String,
}
