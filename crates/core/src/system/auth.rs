//! Mock sign-in: any filled-in credentials are accepted

use chrono::Utc;
use contracts::system::auth::{LoginRequest, Session};

/// Start a session for the given credentials
pub fn login(request: &LoginRequest) -> anyhow::Result<Session> {
    let email = request.email.trim();
    if email.is_empty() || request.password.is_empty() {
        anyhow::bail!("Fill in the fields to sign in");
    }

    tracing::info!("Signed in as {}", email);
    Ok(Session {
        email: email.to_string(),
        logged_in_at: Utc::now(),
    })
}
