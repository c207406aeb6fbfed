//! The seven NACHA record kinds.
//!
//! Every record renders to a line of exactly [`RECORD_WIDTH`] characters by
//! concatenating its fields, which are stored already fixed-width formatted.
//! The wire representation doubles as the in-memory representation: numeric
//! fields are zero-padded digit strings, text fields are blank-padded ASCII.

pub mod addenda;
pub mod batch_control;
pub mod batch_header;
pub mod block_filler;
pub mod entry;
pub mod file_control;
pub mod file_header;

pub use addenda::Addenda;
pub use batch_control::BatchControl;
pub use batch_header::BatchHeader;
pub use block_filler::BlockFiller;
pub use entry::EntryDetail;
pub use file_control::FileControl;
pub use file_header::FileHeader;

/// Width of every NACHA record line, in characters.
pub const RECORD_WIDTH: usize = 94;
