//! Validatable field paths
//!
//! Every field a rule can fire on, in declaration order. Violation reports
//! are sorted by this order (not discovery order) so form highlighting is
//! deterministic.

use serde::Serialize;

/// Field path of the contract record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Lifecycle status token
    Status,
    /// Client display name (always required)
    ClientName,
    /// Responsible partner identifier (always required)
    PartnerId,
    /// Date the prospect was registered (required under analysis)
    ProspectDate,
    /// Date the proposal was sent (required under proposal)
    ProposalDate,
    /// Date the contract was signed (required under active)
    ContractDate,
    /// Date the proposal was rejected (not enforced)
    RejectionDate,
    /// Date the pro bono engagement started (not enforced)
    ProbonoDate,
    /// Internal case file number (required under active)
    HonNumber,
    /// Billing location (required under active)
    BillingLocation,
    /// Physically signed copy reference (required under active)
    PhysicalSignature,
}

impl Field {
    /// All fields in declaration order
    pub const ALL: [Self; 11] = [
        Self::Status,
        Self::ClientName,
        Self::PartnerId,
        Self::ProspectDate,
        Self::ProposalDate,
        Self::ContractDate,
        Self::RejectionDate,
        Self::ProbonoDate,
        Self::HonNumber,
        Self::BillingLocation,
        Self::PhysicalSignature,
    ];

    /// Snake_case field path as seen by the form
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::ClientName => "client_name",
            Self::PartnerId => "partner_id",
            Self::ProspectDate => "prospect_date",
            Self::ProposalDate => "proposal_date",
            Self::ContractDate => "contract_date",
            Self::RejectionDate => "rejection_date",
            Self::ProbonoDate => "probono_date",
            Self::HonNumber => "hon_number",
            Self::BillingLocation => "billing_location",
            Self::PhysicalSignature => "physical_signature",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
