// src/health/mod.rs
mod checker;
mod error;
mod validator;

pub use checker::HealthChecker;
pub use error::{CheckError, FailureKind};
pub use validator::{check_body, check_status};
