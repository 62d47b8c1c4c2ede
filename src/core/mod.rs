pub mod concat;
pub mod gateway;

pub use crate::domain::model::{CreateAccountPayload, SignupRequest, UpstreamReply};
pub use crate::utils::error::Result;
