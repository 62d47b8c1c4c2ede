pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::{ConcatConfig, GatewayConfig};
pub use crate::core::concat::{concatenate_important_files, is_important_file, ConcatSummary};
pub use crate::core::gateway::AtprotoClient;
pub use crate::server::{build_router, AppState};
pub use crate::utils::error::{GatewayError, Result};
