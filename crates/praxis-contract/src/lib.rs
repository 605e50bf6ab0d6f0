//! Praxis Contract - contract lifecycle model and validation
//!
//! The domain core behind the contract intake form:
//! - Models the case/contract submission record and its lifecycle status
//! - Applies status-conditional required-field rules, collecting every
//!   violation in one pass for per-field form display
//! - Normalizes accepted submissions into a stage-typed [`Contract`] whose
//!   variants carry their mandatory fields by construction
//! - Exposes the JSON intake boundary used by the web tier
//!
//! # Example
//!
//! ```rust
//! use praxis_contract::{validate, ContractRecord, Field};
//!
//! let record = ContractRecord::new("proposal")
//!     .with_client_name("Acme")
//!     .with_partner_id("p1");
//!
//! let report = validate(&record).unwrap_err();
//! assert!(report.contains(Field::ProposalDate));
//! ```

#![warn(unreachable_pub)]

pub mod field;
pub mod intake;
pub mod record;
pub mod report;
pub mod stage;
pub mod status;
pub mod validate;

// Re-exports for convenience
pub use field::Field;
pub use intake::{submit_json, IntakeError};
pub use record::ContractRecord;
pub use report::{FieldViolation, ValidationReport};
pub use stage::{Contract, ContractStage, OptionalDetails};
pub use status::{ContractStatus, UnknownStatus};
pub use validate::validate;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with contract validation
    pub use crate::{
        submit_json, validate, Contract, ContractRecord, ContractStage, ContractStatus, Field,
        FieldViolation, ValidationReport,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
