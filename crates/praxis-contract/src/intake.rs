//! JSON intake boundary
//!
//! The entry point the web tier calls with the raw form payload. Malformed
//! JSON and rule violations are kept apart: the former is a transport
//! problem, the latter is data the form renders per field.

use crate::record::ContractRecord;
use crate::report::ValidationReport;
use crate::stage::Contract;
use crate::validate::validate;

/// Intake failure
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// Payload was not a well-formed contract record
    #[error("malformed contract payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Record parsed but failed the validation rule set
    #[error(transparent)]
    Invalid(#[from] ValidationReport),
}

impl IntakeError {
    /// Violation report, when the payload parsed but failed validation
    #[inline]
    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Invalid(report) => Some(report),
            Self::MalformedPayload(_) => None,
        }
    }
}

/// Accept a contract submission payload
///
/// Deserializes the form payload, runs the validation rule set, and hands
/// back the normalized stage-typed contract.
///
/// # Errors
/// [`IntakeError::MalformedPayload`] when the payload is not valid JSON for
/// a record; [`IntakeError::Invalid`] carrying the full violation report
/// otherwise.
pub fn submit_json(payload: &str) -> Result<Contract, IntakeError> {
    let record: ContractRecord = serde_json::from_str(payload).map_err(|e| {
        tracing::warn!("malformed contract payload: {e}");
        e
    })?;

    match validate(&record) {
        Ok(contract) => {
            tracing::info!(
                client = contract.client_name(),
                status = contract.status().as_str(),
                "contract submission accepted"
            );
            Ok(contract)
        }
        Err(report) => {
            tracing::debug!(
                violations = report.len(),
                status = %record.status,
                "contract submission rejected"
            );
            Err(report.into())
        }
    }
}
