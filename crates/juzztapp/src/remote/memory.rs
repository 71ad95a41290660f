use super::{AuthService, CatalogSource, Credentials, Profile, Registration};
use crate::error::{JuzztError, Result};
use crate::model::{Record, RecordId};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Account {
    name: Option<String>,
    password: String,
}

/// Stand-in for the storefront API, for testing without a server.
#[derive(Default)]
pub struct InMemoryRemote {
    records: RefCell<Vec<Record>>,
    accounts: RefCell<HashMap<String, Account>>,
    sessions: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
    catalog_fetches: Cell<usize>,
}

impl InMemoryRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let remote = Self::new();
        remote.set_records(records);
        remote
    }

    pub fn set_records(&self, records: Vec<Record>) {
        *self.records.borrow_mut() = records;
    }

    /// Pre-registers an account without going through [`AuthService::register`].
    pub fn with_account(self, name: Option<&str>, email: &str, password: &str) -> Self {
        self.accounts.borrow_mut().insert(
            email.to_string(),
            Account {
                name: name.map(str::to_string),
                password: password.to_string(),
            },
        );
        self
    }

    /// Every call fails as if the server were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Invalidates all issued tokens.
    pub fn expire_sessions(&self) {
        self.sessions.borrow_mut().clear();
    }

    /// How many times the full catalog was requested.
    pub fn catalog_fetches(&self) -> usize {
        self.catalog_fetches.get()
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline.get() {
            Err(JuzztError::Api("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl CatalogSource for InMemoryRemote {
    fn fetch_records(&self) -> Result<Vec<Record>> {
        self.ensure_online()?;
        self.catalog_fetches.set(self.catalog_fetches.get() + 1);
        Ok(self.records.borrow().clone())
    }

    fn fetch_record(&self, id: RecordId) -> Result<Option<Record>> {
        self.ensure_online()?;
        Ok(self.records.borrow().iter().find(|r| r.id == id).cloned())
    }
}

impl AuthService for InMemoryRemote {
    fn register(&self, registration: &Registration) -> Result<()> {
        self.ensure_online()?;
        let mut accounts = self.accounts.borrow_mut();
        if accounts.contains_key(&registration.email) {
            return Err(JuzztError::Api("email already registered".to_string()));
        }
        accounts.insert(
            registration.email.clone(),
            Account {
                name: Some(registration.name.clone()),
                password: registration.password.clone(),
            },
        );
        Ok(())
    }

    fn login(&self, credentials: &Credentials) -> Result<String> {
        self.ensure_online()?;
        let accounts = self.accounts.borrow();
        match accounts.get(&credentials.email) {
            Some(account) if account.password == credentials.password => {
                let token = Uuid::new_v4().to_string();
                self.sessions
                    .borrow_mut()
                    .insert(token.clone(), credentials.email.clone());
                Ok(token)
            }
            _ => Err(JuzztError::Api("bad credentials".to_string())),
        }
    }

    fn profile(&self, token: &str) -> Result<Profile> {
        self.ensure_online()?;
        let sessions = self.sessions.borrow();
        let email = sessions.get(token).ok_or(JuzztError::NotLoggedIn)?;
        let name = self
            .accounts
            .borrow()
            .get(email)
            .and_then(|account| account.name.clone());
        Ok(Profile {
            name,
            email: Some(email.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_issues_token_accepted_by_profile() {
        let remote = InMemoryRemote::new().with_account(Some("Nina"), "nina@example.com", "pw");
        let token = remote
            .login(&Credentials {
                email: "nina@example.com".into(),
                password: "pw".into(),
            })
            .unwrap();

        let profile = remote.profile(&token).unwrap();
        assert_eq!(profile.display_name(), "Nina");

        remote.expire_sessions();
        assert!(matches!(
            remote.profile(&token),
            Err(JuzztError::NotLoggedIn)
        ));
    }

    #[test]
    fn offline_remote_fails_every_call() {
        let remote = InMemoryRemote::with_records(vec![Record::new(1, "A", 1.0)]);
        remote.set_offline(true);
        assert!(remote.fetch_records().is_err());
        assert!(remote.fetch_record(1).is_err());
        assert_eq!(remote.catalog_fetches(), 0);
    }
}
