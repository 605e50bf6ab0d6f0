//! Contract submission record
//!
//! The loose, serde-facing shape the web form posts. Every field arrives as
//! text; presence means non-null and non-empty with no trimming applied
//! (`""` is missing, `" "` is present). Validation against the lifecycle
//! status lives in [`crate::validate`].

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Candidate contract record as submitted by the intake form
///
/// Unknown keys are ignored on deserialization; the form evolves ahead of
/// the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Raw lifecycle status token (validated, not trusted)
    #[serde(default)]
    pub status: String,

    /// Client display name
    #[serde(default)]
    pub client_name: String,
    /// Responsible partner identifier
    #[serde(default)]
    pub partner_id: String,

    /// Date the prospect was registered
    #[serde(default)]
    pub prospect_date: Option<String>,
    /// Date the proposal was sent
    #[serde(default)]
    pub proposal_date: Option<String>,
    /// Date the contract was signed
    #[serde(default)]
    pub contract_date: Option<String>,
    /// Date the proposal was rejected
    #[serde(default)]
    pub rejection_date: Option<String>,
    /// Date the pro bono engagement started
    #[serde(default)]
    pub probono_date: Option<String>,

    /// Internal case file number
    #[serde(default)]
    pub hon_number: Option<String>,
    /// Billing location
    #[serde(default)]
    pub billing_location: Option<String>,
    /// Physically signed copy reference or attachment id
    #[serde(default)]
    pub physical_signature: Option<String>,

    /// Client tax id (CNPJ)
    #[serde(default)]
    pub cnpj: Option<String>,
    /// Fixed fee amount, formatted by the web tier
    #[serde(default)]
    pub fixed_fee: Option<String>,
    /// Success fee amount, formatted by the web tier
    #[serde(default)]
    pub success_fee: Option<String>,
    /// Monthly retainer amount, formatted by the web tier
    #[serde(default)]
    pub monthly_fee: Option<String>,
    /// Installment descriptor
    #[serde(default)]
    pub installments: Option<String>,
    /// Fee clause free text
    #[serde(default)]
    pub fee_clause: Option<String>,
    /// Free-text observations
    #[serde(default)]
    pub observations: Option<String>,
}

impl ContractRecord {
    /// Create an empty record with the given status token
    #[inline]
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    /// With client name
    #[inline]
    #[must_use]
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = name.into();
        self
    }

    /// With partner id
    #[inline]
    #[must_use]
    pub fn with_partner_id(mut self, id: impl Into<String>) -> Self {
        self.partner_id = id.into();
        self
    }

    /// With an arbitrary validatable field set to the given text
    ///
    /// Used by fixtures and tests to build records field-by-field.
    #[must_use]
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Status => self.status = value,
            Field::ClientName => self.client_name = value,
            Field::PartnerId => self.partner_id = value,
            Field::ProspectDate => self.prospect_date = Some(value),
            Field::ProposalDate => self.proposal_date = Some(value),
            Field::ContractDate => self.contract_date = Some(value),
            Field::RejectionDate => self.rejection_date = Some(value),
            Field::ProbonoDate => self.probono_date = Some(value),
            Field::HonNumber => self.hon_number = Some(value),
            Field::BillingLocation => self.billing_location = Some(value),
            Field::PhysicalSignature => self.physical_signature = Some(value),
        }
        self
    }

    /// Raw text of a validatable field, `None` when absent
    #[must_use]
    pub fn raw_value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Status => Some(self.status.as_str()),
            Field::ClientName => Some(self.client_name.as_str()),
            Field::PartnerId => Some(self.partner_id.as_str()),
            Field::ProspectDate => self.prospect_date.as_deref(),
            Field::ProposalDate => self.proposal_date.as_deref(),
            Field::ContractDate => self.contract_date.as_deref(),
            Field::RejectionDate => self.rejection_date.as_deref(),
            Field::ProbonoDate => self.probono_date.as_deref(),
            Field::HonNumber => self.hon_number.as_deref(),
            Field::BillingLocation => self.billing_location.as_deref(),
            Field::PhysicalSignature => self.physical_signature.as_deref(),
        }
    }

    /// Whether a validatable field holds a value
    ///
    /// Non-null and non-empty, no trimming: `""` is missing, `" "` counts.
    #[inline]
    #[must_use]
    pub fn has_value(&self, field: Field) -> bool {
        self.raw_value(field).is_some_and(|s| !s.is_empty())
    }
}
