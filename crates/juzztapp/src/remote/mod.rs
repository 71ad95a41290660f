//! # Remote Services
//!
//! Everything juzzt knows about the outside world goes through two traits:
//!
//! - [`CatalogSource`]: the record list and single-record lookups.
//! - [`AuthService`]: account registration, login and the profile endpoint.
//!
//! Both are implemented by [`ApiClient`], which talks to the storefront REST
//! API, and by [`InMemoryRemote`], which the test suites use instead of a
//! server. Nothing above this layer builds URLs or inspects status codes.
//!
//! ## Endpoints
//!
//! | Operation      | Request                                   | Success body          |
//! |----------------|-------------------------------------------|-----------------------|
//! | records        | `GET {api_url}{records_path}`             | `[Record]`            |
//! | record         | `GET {api_url}{records_path}/{id}`        | `Record` (404 = none) |
//! | register       | `POST {api_url}/api/auth/register`        | ignored               |
//! | login          | `POST {api_url}/api/auth/login`           | `{"token": "..."}`    |
//! | profile        | `GET {api_url}/api/auth/profile` + bearer | `{"name", "email"}`   |

use crate::error::Result;
use crate::model::{Record, RecordId};
use serde::{Deserialize, Serialize};

pub mod http;
pub mod memory;

pub use http::ApiClient;
pub use memory::InMemoryRemote;

pub trait CatalogSource {
    /// The full catalog, in server order.
    fn fetch_records(&self) -> Result<Vec<Record>>;

    /// `Ok(None)` when the server has no such record.
    fn fetch_record(&self, id: RecordId) -> Result<Option<Record>>;
}

pub trait AuthService {
    fn register(&self, registration: &Registration) -> Result<()>;

    /// Returns the session token.
    fn login(&self, credentials: &Credentials) -> Result<String>;

    /// Fails with [`crate::error::JuzztError::NotLoggedIn`] when the server
    /// rejects `token`.
    fn profile(&self, token: &str) -> Result<Profile>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Profile {
    pub const NO_NAME: &'static str = "No Name Provided";

    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => Self::NO_NAME,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_falls_back_when_name_missing() {
        let profile: Profile = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
        assert_eq!(profile.display_name(), "No Name Provided");

        let blank = Profile {
            name: Some("  ".into()),
            email: None,
        };
        assert_eq!(blank.display_name(), "No Name Provided");

        let named = Profile {
            name: Some("Nina".into()),
            email: None,
        };
        assert_eq!(named.display_name(), "Nina");
    }
}
