use crate::core::error::UiError;
use crate::core::state::AppState;
use crate::models::forms::{AddUserForm, AssignFrequencyForm, DeleteUserForm};
use crate::stores::roster_store::DELETE_PROMPT;
use crate::validation::params::{coerce_number, coerce_user_id, is_confirmed};
use crate::view::{html, model};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

/// Render the roster table
///
/// GET /
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, UiError> {
    let roster = state.roster()?;
    let view = model::RosterView::from_users(roster.users());

    Ok(Html(html::index_page(&view)))
}

/// Add a user
///
/// POST /users  (name=<text>)
pub async fn add_user_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddUserForm>,
) -> Result<Redirect, UiError> {
    state.roster()?.add_user(&form.name);

    Ok(Redirect::to("/"))
}

/// Show the assign-frequency form, listing the users on the roster right now
///
/// GET /frequency
pub async fn assign_frequency_form_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, UiError> {
    let options = model::user_options(&state.roster()?.user_options());

    Ok(Html(html::assign_frequency_page(&options)))
}

/// Assign a frequency to a user
///
/// POST /frequency  (userId=<id>&frequency=<number>)
pub async fn assign_frequency_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AssignFrequencyForm>,
) -> Result<Redirect, UiError> {
    let user_id = coerce_user_id(&form.user_id);
    let frequency = coerce_number(&form.frequency);

    state.roster()?.assign_frequency(user_id, frequency);

    Ok(Redirect::to("/"))
}

/// Ask before deleting
///
/// GET /users/{id}/delete
pub async fn confirm_delete_handler(Path(raw_id): Path<String>) -> Html<String> {
    let user_id = coerce_user_id(&raw_id);

    Html(html::confirm_delete_page(user_id, DELETE_PROMPT))
}

/// Delete a user if the prompt was confirmed
///
/// POST /users/{id}/delete  (confirm=yes|no)
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Form(form): Form<DeleteUserForm>,
) -> Result<Redirect, UiError> {
    let user_id = coerce_user_id(&raw_id);
    let mut answer = is_confirmed(&form.confirm);

    state.roster()?.delete_user(user_id, &mut answer);

    Ok(Redirect::to("/"))
}

/// Advance a user's status
///
/// POST /users/{id}/status
pub async fn cycle_status_handler(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, UiError> {
    state.roster()?.cycle_status(coerce_user_id(&raw_id));

    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::state::DynStore;
    use crate::models::user::{Status, UserId};
    use crate::storage::MemoryStore;
    use crate::stores::roster_store::RosterStore;
    use axum::{http::StatusCode, response::IntoResponse};

    fn create_test_config() -> Config {
        Config::from_toml("[server]\nport = 8080\n[storage]\nbackend = \"memory\"\n").unwrap()
    }

    fn create_test_state() -> Arc<AppState> {
        let storage: DynStore = Box::new(MemoryStore::new());
        let roster = RosterStore::load(storage);

        Arc::new(AppState::new(create_test_config(), roster))
    }

    fn seed(state: &AppState, names: &[&str]) {
        let mut roster = state.roster().unwrap();
        for name in names {
            roster.add_user(name).unwrap();
        }
    }

    fn assert_redirects_home(redirect: Redirect) {
        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }

    #[tokio::test]
    async fn test_index_shows_placeholder_when_empty() {
        let state = create_test_state();

        let Html(body) = index_handler(State(state)).await.unwrap();
        assert!(body.contains("No users added yet."));
    }

    #[tokio::test]
    async fn test_add_user_success() {
        let state = create_test_state();

        let form = AddUserForm {
            name: " Alice ".to_string(),
        };
        let redirect = add_user_handler(State(state.clone()), Form(form)).await.unwrap();
        assert_redirects_home(redirect);

        let roster = state.roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.users()[0].name, "Alice");
    }

    #[tokio::test]
    async fn test_add_user_blank_name_ignored() {
        let state = create_test_state();

        let form = AddUserForm {
            name: "   ".to_string(),
        };
        let redirect = add_user_handler(State(state.clone()), Form(form)).await.unwrap();
        assert_redirects_home(redirect);

        assert!(state.roster().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assign_form_lists_current_users() {
        let state = create_test_state();
        seed(&state, &["Alice", "Bob"]);

        let Html(body) = assign_frequency_form_handler(State(state)).await.unwrap();
        assert!(body.contains("<option value=\"1\">Alice</option>"));
        assert!(body.contains("<option value=\"2\">Bob</option>"));
    }

    #[tokio::test]
    async fn test_assign_frequency_success() {
        let state = create_test_state();
        seed(&state, &["Alice"]);

        let form = AssignFrequencyForm {
            user_id: "1".to_string(),
            frequency: "146".to_string(),
        };
        let redirect = assign_frequency_handler(State(state.clone()), Form(form)).await.unwrap();
        assert_redirects_home(redirect);

        let roster = state.roster().unwrap();
        let user = roster.get(UserId(1)).unwrap();
        assert_eq!(user.frequency, Some(146.0));
        assert_eq!(user.status, Status::Active);
    }

    #[tokio::test]
    async fn test_assign_frequency_invalid_input_ignored() {
        let state = create_test_state();
        seed(&state, &["Alice"]);

        let cases = [("", "146"), ("1", ""), ("1", "abc"), ("1", "-5"), ("1", "0")];
        for (user_id, frequency) in cases {
            let form = AssignFrequencyForm {
                user_id: user_id.to_string(),
                frequency: frequency.to_string(),
            };
            let redirect = assign_frequency_handler(State(state.clone()), Form(form)).await.unwrap();
            assert_redirects_home(redirect);
        }

        let roster = state.roster().unwrap();
        let user = roster.get(UserId(1)).unwrap();
        assert_eq!(user.frequency, None);
        assert_eq!(user.status, Status::Idle);
    }

    #[tokio::test]
    async fn test_confirm_page_asks_question() {
        let Html(body) = confirm_delete_handler(Path("3".to_string())).await;

        assert!(body.contains(DELETE_PROMPT));
        assert!(body.contains("action=\"/users/3/delete\""));
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let state = create_test_state();
        seed(&state, &["Alice", "Bob"]);

        let form = DeleteUserForm {
            confirm: "yes".to_string(),
        };
        let redirect = delete_user_handler(State(state.clone()), Path("1".to_string()), Form(form))
            .await
            .unwrap();
        assert_redirects_home(redirect);

        let roster = state.roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert!(roster.get(UserId(1)).is_none());
        assert_eq!(roster.next_id(), 3);
    }

    #[tokio::test]
    async fn test_delete_cancelled() {
        let state = create_test_state();
        seed(&state, &["Alice"]);

        let form = DeleteUserForm {
            confirm: "no".to_string(),
        };
        delete_user_handler(State(state.clone()), Path("1".to_string()), Form(form))
            .await
            .unwrap();

        assert_eq!(state.roster().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cycle_status() {
        let state = create_test_state();
        seed(&state, &["Alice"]);

        cycle_status_handler(State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(state.roster().unwrap().get(UserId(1)).unwrap().status, Status::Active);

        // garbage id is a no-op
        cycle_status_handler(State(state.clone()), Path("abc".to_string()))
            .await
            .unwrap();
        assert_eq!(state.roster().unwrap().get(UserId(1)).unwrap().status, Status::Active);
    }
}
