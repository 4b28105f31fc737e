use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials typed on the login screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Mock session handed out after a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}
