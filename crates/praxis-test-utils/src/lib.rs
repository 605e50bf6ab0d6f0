//! Testing utilities for the Praxis workspace
//!
//! Shared contract record fixtures.

#![allow(missing_docs)]

use praxis_contract::{ContractRecord, ContractStatus, Field};

/// Bare record with only the status token set
pub fn record(status: &str) -> ContractRecord {
    ContractRecord::new(status)
}

/// Record with the base identity fields filled in
pub fn record_with_base(status: &str) -> ContractRecord {
    ContractRecord::new(status)
        .with_client_name("Acme Ltda")
        .with_partner_id("partner-01")
}

/// Minimal record that passes validation under the given status
pub fn valid_record(status: ContractStatus) -> ContractRecord {
    let record = record_with_base(status.as_str());
    match status {
        ContractStatus::Analysis => record.with_field(Field::ProspectDate, "2024-01-10"),
        ContractStatus::Proposal => record.with_field(Field::ProposalDate, "2024-02-20"),
        ContractStatus::Active => record
            .with_field(Field::ContractDate, "2024-03-05")
            .with_field(Field::HonNumber, "HON-0042")
            .with_field(Field::BillingLocation, "São Paulo")
            .with_field(Field::PhysicalSignature, "scan-0042.pdf"),
        ContractStatus::Rejected | ContractStatus::Probono => record,
    }
}

/// Valid active record with one required field blanked out
pub fn active_record_missing(field: Field) -> ContractRecord {
    valid_record(ContractStatus::Active).with_field(field, "")
}
