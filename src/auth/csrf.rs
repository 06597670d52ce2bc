//! Session-bound CSRF tokens for the dialog forms.

use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const TOKEN_KEY: &str = "csrf_token";
const TOKEN_BYTES: usize = 32;

fn stored_token(session: &Session) -> Option<String> {
    session
        .get::<String>(TOKEN_KEY)
        .ok()
        .flatten()
        .filter(|t| !t.is_empty())
}

/// Token for the hidden form field. Minted on first use and kept for the
/// rest of the session.
pub fn get_or_create_token(session: &Session) -> String {
    if let Some(token) = stored_token(session) {
        return token;
    }
    let token = generate_token();
    if let Err(e) = session.insert(TOKEN_KEY, &token) {
        log::warn!("Could not store CSRF token in session: {e}");
    }
    token
}

/// Check a posted token. A session without a token never validates.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    match stored_token(session) {
        Some(expected) if tokens_match(&expected, submitted) => Ok(()),
        Some(_) => {
            log::warn!("CSRF token mismatch");
            Err(AppError::Csrf)
        }
        None => {
            log::warn!("CSRF check without a session token");
            Err(AppError::Csrf)
        }
    }
}

fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

/// Compares every byte regardless of where the first difference is.
fn tokens_match(expected: &str, submitted: &str) -> bool {
    let (a, b) = (expected.as_bytes(), submitted.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}
