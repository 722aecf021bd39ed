//! Simulated login. A form that passes validation is accepted as-is: the
//! login flag and email are persisted and nothing else is checked.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::LoginForm;
use crate::model::Session;
use crate::store::DataStore;
use crate::validation::validate_login_form;
use tracing::info;

pub fn run<S: DataStore>(store: &mut S, form: LoginForm) -> Result<CmdResult> {
    let validation = validate_login_form(&form);
    if !validation.is_valid() {
        return Ok(CmdResult::default().with_validation(validation));
    }

    let email = form.email.trim().to_string();
    let session = Session::logged_in_as(email.clone());
    store.save_session(&session)?;
    info!(%email, "logged in");

    let mut result = CmdResult::default().with_session(session);
    let message = format!("Login successful! Welcome, {}", email);
    result.add_message(CmdMessage::success(message));
    Ok(result)
}

pub fn logout<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let was = store.load_session()?;
    store.clear_session()?;

    let mut result = CmdResult::default().with_session(Session::default());
    if was.logged_in {
        result.add_message(CmdMessage::success("Logged out"));
    } else {
        result.add_message(CmdMessage::warning("Not logged in"));
    }
    Ok(result)
}

pub fn status<S: DataStore>(store: &S) -> Result<CmdResult> {
    let session = store.load_session()?;
    let message = match (session.logged_in, &session.email) {
        (true, Some(email)) => format!("Logged in as {}", email),
        (true, None) => "Logged in".to_string(),
        (false, _) => "Not logged in".to_string(),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(message));
    Ok(result.with_session(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::validation::Field;

    #[test]
    fn valid_login_persists_session() {
        let mut store = InMemoryStore::new();
        let form = LoginForm::new(" a@b.co ", "123456");
        let result = run(&mut store, form).unwrap();

        assert!(!result.is_rejected());
        assert_eq!(
            result.messages[0].content,
            "Login successful! Welcome, a@b.co"
        );
        assert_eq!(
            store.load_session().unwrap(),
            Session::logged_in_as("a@b.co")
        );
    }

    #[test]
    fn invalid_login_leaves_session_untouched() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, LoginForm::new("a@b.co", "123")).unwrap();

        assert!(result.is_rejected());
        let validation = result.validation.unwrap();
        assert!(validation.error_for(Field::Password).is_some());
        assert!(validation.error_for(Field::Email).is_none());
        assert_eq!(store.load_session().unwrap(), Session::default());
    }

    #[test]
    fn logout_clears_session() {
        let mut store = InMemoryStore::new();
        let form = LoginForm::new("a@b.co", "hunter22");
        run(&mut store, form).unwrap();

        let result = logout(&mut store).unwrap();
        assert_eq!(result.messages[0].content, "Logged out");
        assert_eq!(store.load_session().unwrap(), Session::default());

        let again = logout(&mut store).unwrap();
        assert_eq!(again.messages[0].content, "Not logged in");
        assert_eq!(again.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn status_reports_email() {
        let mut store = InMemoryStore::new();
        let before = status(&store).unwrap();
        assert_eq!(before.messages[0].content, "Not logged in");

        let form = LoginForm::new("me@cars.io", "secret1");
        run(&mut store, form).unwrap();
        let result = status(&store).unwrap();
        assert_eq!(result.messages[0].content, "Logged in as me@cars.io");
        assert!(result.session.unwrap().logged_in);
    }
}
