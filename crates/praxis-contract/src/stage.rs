//! Stage-typed contract
//!
//! The normalized form of an accepted submission. Each lifecycle stage is a
//! variant that carries its own mandatory fields, so downstream code never
//! re-checks presence: holding a [`Contract`] is the proof it validated.

use crate::status::ContractStatus;
use serde::Serialize;

/// Lifecycle stage with its mandatory payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ContractStage {
    /// Under analysis; the prospect date is mandatory
    Analysis {
        /// Date the prospect was registered
        prospect_date: String,
    },
    /// Proposal sent; the proposal date is mandatory
    Proposal {
        /// Date the proposal was sent
        proposal_date: String,
    },
    /// Signed and active; file number, billing and signature are mandatory
    Active {
        /// Date the contract was signed
        contract_date: String,
        /// Internal case file number
        hon_number: String,
        /// Billing location
        billing_location: String,
        /// Physically signed copy reference
        physical_signature: String,
    },
    /// Rejected; the rejection date is not enforced
    Rejected {
        /// Date the proposal was rejected, when recorded
        rejection_date: Option<String>,
    },
    /// Pro bono engagement; the start date is not enforced
    Probono {
        /// Date the engagement started, when recorded
        probono_date: Option<String>,
    },
}

impl ContractStage {
    /// Status discriminant of this stage
    #[inline]
    #[must_use]
    pub fn status(&self) -> ContractStatus {
        match self {
            Self::Analysis { .. } => ContractStatus::Analysis,
            Self::Proposal { .. } => ContractStatus::Proposal,
            Self::Active { .. } => ContractStatus::Active,
            Self::Rejected { .. } => ContractStatus::Rejected,
            Self::Probono { .. } => ContractStatus::Probono,
        }
    }
}

/// Long-tail descriptive and financial fields
///
/// All optional, no cross-field invariants. Amounts stay as the formatted
/// strings the web tier produced; no arithmetic happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionalDetails {
    /// Client tax id (CNPJ)
    pub cnpj: Option<String>,
    /// Fixed fee amount
    pub fixed_fee: Option<String>,
    /// Success fee amount
    pub success_fee: Option<String>,
    /// Monthly retainer amount
    pub monthly_fee: Option<String>,
    /// Installment descriptor
    pub installments: Option<String>,
    /// Fee clause free text
    pub fee_clause: Option<String>,
    /// Free-text observations
    pub observations: Option<String>,
}

/// A validated, stage-typed contract
///
/// Only [`crate::validate`] constructs these; every instance satisfies the
/// rule set for its stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contract {
    client_name: String,
    partner_id: String,
    #[serde(flatten)]
    stage: ContractStage,
    #[serde(flatten)]
    details: OptionalDetails,
}

impl Contract {
    /// Assemble a validated contract (validation pass only)
    pub(crate) fn new(
        client_name: String,
        partner_id: String,
        stage: ContractStage,
        details: OptionalDetails,
    ) -> Self {
        Self {
            client_name,
            partner_id,
            stage,
            details,
        }
    }

    /// Client display name (non-empty)
    #[inline]
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Responsible partner identifier (non-empty)
    #[inline]
    #[must_use]
    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    /// Lifecycle stage with its mandatory payload
    #[inline]
    #[must_use]
    pub fn stage(&self) -> &ContractStage {
        &self.stage
    }

    /// Status discriminant
    #[inline]
    #[must_use]
    pub fn status(&self) -> ContractStatus {
        self.stage.status()
    }

    /// Optional descriptive/financial details
    #[inline]
    #[must_use]
    pub fn details(&self) -> &OptionalDetails {
        &self.details
    }
}
