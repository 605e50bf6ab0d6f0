//! Status-conditional validation rule set
//!
//! One pass over the record: base rules always apply, the lifecycle status
//! selects the additional required fields. Every failed rule is collected
//! (never fail-fast) so the form can highlight all invalid fields at once,
//! and the report is ordered by field declaration order for deterministic
//! highlighting. Pure and re-entrant: no I/O, no mutation.

use crate::field::Field;
use crate::record::ContractRecord;
use crate::report::{FieldViolation, ValidationReport};
use crate::stage::{Contract, ContractStage, OptionalDetails};
use crate::status::ContractStatus;

/// Messages surfaced next to each invalid field
pub mod messages {
    /// Base rule on `client_name` and `partner_id`
    pub const REQUIRED: &str = "must not be empty";
    /// Status token outside the enumerated set
    pub const UNKNOWN_STATUS: &str = "unknown status";
    /// `prospect_date` missing under analysis
    pub const PROSPECT_DATE: &str = "prospect date required";
    /// `proposal_date` missing under proposal
    pub const PROPOSAL_DATE: &str = "proposal date required";
    /// `contract_date` missing under active
    pub const CONTRACT_DATE: &str = "contract date required";
    /// `hon_number` missing under active
    pub const HON_NUMBER: &str = "hon number required";
    /// `billing_location` missing under active
    pub const BILLING_LOCATION: &str = "billing location required";
    /// `physical_signature` missing under active
    pub const PHYSICAL_SIGNATURE: &str = "physical signature required";
}

/// Fields required under every status
const REQUIRED_ALWAYS: [Field; 2] = [Field::ClientName, Field::PartnerId];

/// Additional fields required under the given status
///
/// `rejected` and `probono` enforce nothing beyond the base rules; their
/// date fields exist on the record but stay optional.
#[must_use]
pub fn required_for(status: ContractStatus) -> &'static [Field] {
    match status {
        ContractStatus::Analysis => &[Field::ProspectDate],
        ContractStatus::Proposal => &[Field::ProposalDate],
        ContractStatus::Active => &[
            Field::ContractDate,
            Field::HonNumber,
            Field::BillingLocation,
            Field::PhysicalSignature,
        ],
        ContractStatus::Rejected | ContractStatus::Probono => &[],
    }
}

/// Message for a missing required field
fn message_for(field: Field) -> &'static str {
    match field {
        Field::ProspectDate => messages::PROSPECT_DATE,
        Field::ProposalDate => messages::PROPOSAL_DATE,
        Field::ContractDate => messages::CONTRACT_DATE,
        Field::HonNumber => messages::HON_NUMBER,
        Field::BillingLocation => messages::BILLING_LOCATION,
        Field::PhysicalSignature => messages::PHYSICAL_SIGNATURE,
        Field::Status => messages::UNKNOWN_STATUS,
        Field::ClientName | Field::PartnerId | Field::RejectionDate | Field::ProbonoDate => {
            messages::REQUIRED
        }
    }
}

/// Validate a candidate record against its lifecycle status
///
/// Returns the normalized stage-typed [`Contract`] when every rule passes,
/// or the full [`ValidationReport`] otherwise. Validating the same record
/// twice yields the same result.
///
/// # Errors
/// A non-empty, declaration-ordered violation report. An unrecognized
/// status token is itself a violation on the `status` field; the
/// status-conditional rules are then skipped (there is no stage to select
/// them) while the base rules still apply.
pub fn validate(record: &ContractRecord) -> Result<Contract, ValidationReport> {
    let mut violations = Vec::new();

    for field in REQUIRED_ALWAYS {
        if !record.has_value(field) {
            violations.push(FieldViolation::new(field, messages::REQUIRED));
        }
    }

    let status = match record.status.parse::<ContractStatus>() {
        Ok(status) => {
            for &field in required_for(status) {
                if !record.has_value(field) {
                    violations.push(FieldViolation::new(field, message_for(field)));
                }
            }
            Some(status)
        }
        Err(_) => {
            violations.push(FieldViolation::new(Field::Status, messages::UNKNOWN_STATUS));
            None
        }
    };

    if violations.is_empty() {
        if let Some(status) = status {
            return Ok(assemble(record, status));
        }
    }
    // A failed status parse pushed a violation above, so the set is
    // non-empty on every path that reaches here.
    Err(ValidationReport::new(violations))
}

/// Text of a field the rule pass already verified present
fn required_text(record: &ContractRecord, field: Field) -> String {
    record.raw_value(field).unwrap_or_default().to_string()
}

/// Build the normalized contract once every rule has passed
fn assemble(record: &ContractRecord, status: ContractStatus) -> Contract {
    let stage = match status {
        ContractStatus::Analysis => ContractStage::Analysis {
            prospect_date: required_text(record, Field::ProspectDate),
        },
        ContractStatus::Proposal => ContractStage::Proposal {
            proposal_date: required_text(record, Field::ProposalDate),
        },
        ContractStatus::Active => ContractStage::Active {
            contract_date: required_text(record, Field::ContractDate),
            hon_number: required_text(record, Field::HonNumber),
            billing_location: required_text(record, Field::BillingLocation),
            physical_signature: required_text(record, Field::PhysicalSignature),
        },
        ContractStatus::Rejected => ContractStage::Rejected {
            rejection_date: record.rejection_date.clone(),
        },
        ContractStatus::Probono => ContractStage::Probono {
            probono_date: record.probono_date.clone(),
        },
    };

    let details = OptionalDetails {
        cnpj: record.cnpj.clone(),
        fixed_fee: record.fixed_fee.clone(),
        success_fee: record.success_fee.clone(),
        monthly_fee: record.monthly_fee.clone(),
        installments: record.installments.clone(),
        fee_clause: record.fee_clause.clone(),
        observations: record.observations.clone(),
    };

    Contract::new(
        record.client_name.clone(),
        record.partner_id.clone(),
        stage,
        details,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(status: &str) -> ContractRecord {
        ContractRecord::new(status)
            .with_client_name("Acme")
            .with_partner_id("p1")
    }

    #[test]
    fn analysis_requires_prospect_date() {
        let report = validate(&base("analysis")).unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.contains(Field::ProspectDate));
    }

    #[test]
    fn analysis_passes_once_prospect_date_set() {
        let record = base("analysis").with_field(Field::ProspectDate, "2024-01-10");
        let contract = validate(&record).unwrap();
        assert_eq!(contract.status(), ContractStatus::Analysis);
        assert_eq!(
            contract.stage(),
            &ContractStage::Analysis {
                prospect_date: "2024-01-10".to_string()
            }
        );
    }

    #[test]
    fn active_reports_all_four_missing_fields() {
        let report = validate(&base("active")).unwrap_err();
        let fields: Vec<Field> = report.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::ContractDate,
                Field::HonNumber,
                Field::BillingLocation,
                Field::PhysicalSignature,
            ]
        );
    }

    #[test]
    fn base_rules_apply_under_every_status() {
        for status in ContractStatus::ALL {
            let report = validate(&ContractRecord::new(status.as_str())).unwrap_err();
            assert!(report.contains(Field::ClientName), "status {status}");
            assert!(report.contains(Field::PartnerId), "status {status}");
        }
    }

    #[test]
    fn rejected_needs_only_base_fields() {
        let contract = validate(&base("rejected")).unwrap();
        assert_eq!(
            contract.stage(),
            &ContractStage::Rejected {
                rejection_date: None
            }
        );
    }

    #[test]
    fn probono_keeps_optional_date_when_given() {
        let record = base("probono").with_field(Field::ProbonoDate, "2024-06-01");
        let contract = validate(&record).unwrap();
        assert_eq!(
            contract.stage(),
            &ContractStage::Probono {
                probono_date: Some("2024-06-01".to_string())
            }
        );
    }

    #[test]
    fn empty_proposal_date_fails_like_missing() {
        let record = base("proposal").with_field(Field::ProposalDate, "");
        let report = validate(&record).unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.contains(Field::ProposalDate));
    }

    #[test]
    fn unknown_status_is_a_status_violation() {
        let report = validate(&base("archived")).unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.contains(Field::Status));
    }

    #[test]
    fn unknown_status_still_collects_base_violations() {
        let report = validate(&ContractRecord::new("archived")).unwrap_err();
        let fields: Vec<Field> = report.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![Field::Status, Field::ClientName, Field::PartnerId]
        );
    }

    #[test]
    fn violations_follow_declaration_order() {
        // partner_id fails the base rule, contract_date the active rule;
        // declaration order puts partner_id first either way.
        let record = ContractRecord::new("active")
            .with_client_name("Acme")
            .with_field(Field::HonNumber, "HON-1")
            .with_field(Field::BillingLocation, "SP")
            .with_field(Field::PhysicalSignature, "scan.pdf");
        let report = validate(&record).unwrap_err();
        let fields: Vec<Field> = report.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec![Field::PartnerId, Field::ContractDate]);
    }

    #[test]
    fn same_data_valid_under_one_status_invalid_under_another() {
        let record = base("rejected");
        assert!(validate(&record).is_ok());
        let record = ContractRecord {
            status: "active".to_string(),
            ..record
        };
        assert!(validate(&record).is_err());
    }

    #[test]
    fn optional_details_carry_through() {
        let record = base("rejected");
        let record = ContractRecord {
            cnpj: Some("12.345.678/0001-90".to_string()),
            observations: Some("referred by existing client".to_string()),
            ..record
        };
        let contract = validate(&record).unwrap();
        assert_eq!(contract.details().cnpj.as_deref(), Some("12.345.678/0001-90"));
        assert_eq!(
            contract.details().observations.as_deref(),
            Some("referred by existing client")
        );
    }
}
