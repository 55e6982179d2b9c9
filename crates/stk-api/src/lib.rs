pub mod auth;
pub mod checklist;
pub mod config;
pub mod error;
pub mod middleware;
pub mod notification;
pub mod router;
pub mod state;
pub mod subject;
pub mod timetable;
pub mod topic;
pub mod tracing;
pub mod validation;

pub use config::{ApiConfig, Environment};
pub use state::{ApiState, AuthConfig};
