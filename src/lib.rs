//! # NACHA Builder
//!
//! Builds and serializes NACHA files, the fixed-width ASCII batch format
//! for ACH electronic payments in the US banking system.
//!
//! ## Design Principles
//!
//! - **Wire format is the model**: every field is stored as its
//!   fixed-width ASCII representation; numeric fields are zero-padded
//!   digit strings
//! - **Validate on write**: setters reject bad values before storing, so
//!   the tree never holds an invalid intermediate value
//! - **Explicit aggregation**: control totals are recomputed on demand by
//!   the caller once child records are final, never kept in sync
//! - **Write-only**: no parsing of existing NACHA files, no I/O; rendering
//!   produces text for the host to transmit
//!
//! ## Example
//!
//! ```no_run
//! use nacha_builder::{LineEnding, NachaFile};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), nacha_builder::ValidationError> {
//! let mut file = NachaFile::new();
//! file.header_mut().set_immediate_destination("123456789")?;
//!
//! let batch = file.add_batch();
//! batch.header_mut().set_service_class_code("220")?;
//! batch.header_mut().set_company_name("Acme Payroll")?;
//!
//! let entry = batch.add_entry();
//! entry.set_transaction_code("22")?;
//! entry.set_receiving_dfi_identification("09100001")?;
//! entry.set_amount(Decimal::new(15000, 2))?;
//!
//! batch.generate_control();
//! file.generate_control();
//! println!("{}", file.render(LineEnding::Lf));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file;
pub mod format;
pub mod records;

pub use error::{Result, ValidationError};
pub use file::{LineEnding, NachaBatch, NachaFile};
pub use records::{
    Addenda, BatchControl, BatchHeader, BlockFiller, EntryDetail, FileControl, FileHeader,
    RECORD_WIDTH,
};
