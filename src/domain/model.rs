use serde::{Deserialize, Serialize};

/// Signup request as received on `POST /api/users/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Wire shape expected by the ATProto createAccount endpoint.
/// The upstream calls the username a "handle"; the other fields pass through.
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccountPayload {
    pub handle: String,
    pub email: String,
    pub password: String,
}

impl From<SignupRequest> for CreateAccountPayload {
    fn from(signup: SignupRequest) -> Self {
        Self {
            handle: signup.username,
            email: signup.email,
            password: signup.password,
        }
    }
}

/// Upstream status and body, relayed verbatim to the caller on success.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: serde_json::Value,
}
