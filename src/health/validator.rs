// src/health/validator.rs
use super::CheckError;
use std::collections::BTreeSet;

/// Exact membership, no ranges.
pub fn check_status(accepted: &BTreeSet<i64>, status: u16) -> Result<(), CheckError> {
    if accepted.contains(&i64::from(status)) {
        Ok(())
    } else {
        Err(CheckError::InvalidStatus(status))
    }
}

/// Literal, case-sensitive match. An empty needle always passes.
pub fn check_body(needle: &str, body: &[u8]) -> Result<(), CheckError> {
    if needle.is_empty() || String::from_utf8_lossy(body).contains(needle) {
        Ok(())
    } else {
        Err(CheckError::MissingSubstring(needle.to_string()))
    }
}
