//! Contract lifecycle status
//!
//! The enumerated stage of a legal case/contract. The status gates which
//! record fields are mandatory; it does not encode transition rules (those
//! belong to an external collaborator).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle stage of a case/contract
///
/// Exactly one value at a time. Serialized as the lowercase wire token the
/// web tier submits (`"analysis"`, `"proposal"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    /// Case under initial analysis
    Analysis,
    /// Proposal sent to the client
    Proposal,
    /// Contract signed and active
    Active,
    /// Proposal rejected by the client
    Rejected,
    /// Pro bono engagement
    Probono,
}

impl ContractStatus {
    /// All statuses in lifecycle order
    pub const ALL: [Self; 5] = [
        Self::Analysis,
        Self::Proposal,
        Self::Active,
        Self::Rejected,
        Self::Probono,
    ];

    /// Wire token for this status
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::Proposal => "proposal",
            Self::Active => "active",
            Self::Rejected => "rejected",
            Self::Probono => "probono",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analysis" => Ok(Self::Analysis),
            "proposal" => Ok(Self::Proposal),
            "active" => Ok(Self::Active),
            "rejected" => Ok(Self::Rejected),
            "probono" => Ok(Self::Probono),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Status token outside the enumerated set
///
/// Surfaced as a violation on the `status` field rather than aborting the
/// submission, so the form can highlight it alongside other field errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contract status: {0:?}")]
pub struct UnknownStatus(pub String);
