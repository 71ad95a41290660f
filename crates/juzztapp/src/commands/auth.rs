use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JuzztError, Result};
use crate::remote::{AuthService, Credentials, Registration};
use crate::session::Session;
use crate::store::StorageBackend;

pub fn register<R: AuthService>(remote: &R, registration: &Registration) -> Result<CmdResult> {
    if let Err(e) = remote.register(registration) {
        tracing::debug!(error = %e, "registration refused");
        return Err(JuzztError::RegistrationFailed);
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Registration successful. You can now log in.",
    ));
    Ok(result)
}

/// Any refusal is reported as invalid credentials, whatever the server said.
pub fn login<B: StorageBackend, R: AuthService>(
    session: &Session<B>,
    remote: &R,
    credentials: &Credentials,
) -> Result<CmdResult> {
    let token = match remote.login(credentials) {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!(error = %e, "login refused");
            return Err(JuzztError::InvalidCredentials);
        }
    };
    session.store_token(&token)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Logged in as {}",
        credentials.email
    )));
    Ok(result)
}

pub fn logout<B: StorageBackend>(session: &Session<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if session.is_logged_in() {
        session.clear()?;
        result.add_message(CmdMessage::success("Logged out"));
    } else {
        result.add_message(CmdMessage::info("Not logged in"));
    }
    Ok(result)
}

/// A token the server no longer accepts is dropped before reporting
/// [`JuzztError::NotLoggedIn`].
pub fn profile<B: StorageBackend, R: AuthService>(
    session: &Session<B>,
    remote: &R,
) -> Result<CmdResult> {
    let token = session.token().ok_or(JuzztError::NotLoggedIn)?;
    match remote.profile(&token) {
        Ok(profile) => Ok(CmdResult::default().with_profile(profile)),
        Err(JuzztError::NotLoggedIn) => {
            tracing::warn!("session token rejected, logging out");
            session.clear()?;
            Err(JuzztError::NotLoggedIn)
        }
        Err(e) => Err(e),
    }
}
