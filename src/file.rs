//! The file/batch containers, control aggregation, and the serializer.
//!
//! Construction flows top-down: the caller appends batches, entries, and
//! addenda, then mutates fields through validated setters. Aggregation
//! flows bottom-up on demand: batch controls fold over entries, the file
//! control folds over batch controls. Controls are not kept in sync
//! automatically; re-run aggregation after mutating children.

use crate::records::{
    BatchControl, BatchHeader, BlockFiller, EntryDetail, FileControl, FileHeader,
};
use log::{debug, warn};
use serde::Serialize;

/// Lines per physical NACHA block.
const BLOCK_SIZE: u64 = 10;

/// Line terminator for rendered output. The format does not mandate one;
/// transmission agreements differ, so the host picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix newline, `\n`.
    Lf,
    /// Windows / classic mainframe transfer, `\r\n`.
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// A batch: one header, its entries in insertion order, one control.
///
/// The control mirrors the header's service class, company identification,
/// ODFI identification, and batch number once [`generate_control`] runs.
///
/// [`generate_control`]: NachaBatch::generate_control
#[derive(Debug, Clone, Serialize)]
pub struct NachaBatch {
    header: BatchHeader,
    entries: Vec<EntryDetail>,
    control: BatchControl,
}

impl NachaBatch {
    fn new() -> Self {
        NachaBatch {
            header: BatchHeader::new(),
            entries: Vec::new(),
            control: BatchControl::new(),
        }
    }

    pub fn header(&self) -> &BatchHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut BatchHeader {
        &mut self.header
    }

    /// Appends a defaulted entry and returns it for mutation.
    pub fn add_entry(&mut self) -> &mut EntryDetail {
        self.entries.push(EntryDetail::new());

        // Safety: pushed just above
        self.entries.last_mut().expect("entry just appended")
    }

    /// The batch's entries, in insertion order.
    pub fn entries(&self) -> &[EntryDetail] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [EntryDetail] {
        &mut self.entries
    }

    pub fn control(&self) -> &BatchControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut BatchControl {
        &mut self.control
    }

    /// Recomputes the batch control from the current entries.
    ///
    /// Entry/addenda count, entry hash, and debit/credit totals fold over
    /// the entries; service class, company identification, ODFI
    /// identification, and batch number copy from the header. Idempotent:
    /// a pure function of the current children.
    ///
    /// Hash sums wider than 10 digits keep their low-order digits, the
    /// format's wraparound rule.
    pub fn generate_control(&mut self) {
        let mut entry_addenda_count = self.entries.len() as u64;
        let mut entry_hash: u64 = 0;
        let mut total_debits: u64 = 0;
        let mut total_credits: u64 = 0;

        for entry in &self.entries {
            entry_addenda_count += entry.addenda().len() as u64;
            entry_hash += digits_or_zero(
                "ReceivingDFIIdentification",
                entry.receiving_dfi_identification(),
            );

            if entry.is_debit() {
                total_debits += digits_or_zero("Amount", entry.amount());
            } else if entry.is_credit() {
                total_credits += digits_or_zero("Amount", entry.amount());
            }
        }

        debug!(
            "batch {}: {} entries/addenda, hash {}, debits {}, credits {}",
            self.header.batch_number(),
            entry_addenda_count,
            entry_hash,
            total_debits,
            total_credits
        );

        self.control.populate(
            self.header.service_class_code(),
            entry_addenda_count,
            entry_hash,
            total_debits,
            total_credits,
            self.header.company_identification(),
            self.header.odfi_identification(),
            self.header.batch_number(),
        );
    }

    /// Lines this batch contributes: header + entries + addenda + control.
    fn line_count(&self) -> u64 {
        let addenda: usize = self.entries.iter().map(|e| e.addenda().len()).sum();
        2 + self.entries.len() as u64 + addenda as u64
    }

    fn render_into(&self, lines: &mut Vec<String>) {
        lines.push(self.header.render());
        for entry in &self.entries {
            lines.push(entry.render());
            for addenda in entry.addenda() {
                lines.push(addenda.render());
            }
        }
        lines.push(self.control.render());
    }
}

/// The root of the record tree: one file header, batches in insertion
/// order, one file control, and the block filler lines.
///
/// # Example
///
/// ```no_run
/// use nacha_builder::{LineEnding, NachaFile};
/// use rust_decimal::Decimal;
///
/// let mut file = NachaFile::new();
/// let batch = file.add_batch();
/// batch.header_mut().set_service_class_code("220")?;
///
/// let entry = batch.add_entry();
/// entry.set_transaction_code("22")?;
/// entry.set_amount(Decimal::new(15000, 2))?;
///
/// batch.generate_control();
/// file.generate_control();
/// let text = file.render(LineEnding::Lf);
/// # Ok::<(), nacha_builder::ValidationError>(())
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct NachaFile {
    header: FileHeader,
    batches: Vec<NachaBatch>,
    control: FileControl,
    fillers: Vec<BlockFiller>,
}

impl NachaFile {
    /// Creates a file with a defaulted header and an empty control.
    pub fn new() -> Self {
        NachaFile {
            header: FileHeader::new(),
            batches: Vec::new(),
            control: FileControl::new(),
            fillers: Vec::new(),
        }
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut FileHeader {
        &mut self.header
    }

    /// Appends a defaulted batch and returns it for mutation.
    pub fn add_batch(&mut self) -> &mut NachaBatch {
        self.batches.push(NachaBatch::new());

        // Safety: pushed just above
        self.batches.last_mut().expect("batch just appended")
    }

    /// The file's batches, in insertion order.
    pub fn batches(&self) -> &[NachaBatch] {
        &self.batches
    }

    pub fn batches_mut(&mut self) -> &mut [NachaBatch] {
        &mut self.batches
    }

    pub fn control(&self) -> &FileControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut FileControl {
        &mut self.control
    }

    /// Number of block filler lines currently generated.
    pub fn filler_count(&self) -> usize {
        self.fillers.len()
    }

    /// Recomputes the file control and block fillers from the current
    /// batches. Expects each batch control to be generated already
    /// ([`NachaBatch::generate_control`]); the file-level totals sum the
    /// stored batch control fields.
    ///
    /// Fillers are regenerated from scratch on every call, so re-running
    /// aggregation after mutation never stacks padding. Idempotent.
    pub fn generate_control(&mut self) {
        let batch_count = self.batches.len() as u64;
        let mut entry_addenda_count: u64 = 0;
        let mut entry_hash: u64 = 0;
        let mut total_debits: u64 = 0;
        let mut total_credits: u64 = 0;

        for batch in &self.batches {
            let control = batch.control();
            entry_addenda_count +=
                digits_or_zero("EntryAddendaCount", control.entry_addenda_count());
            entry_hash += digits_or_zero("EntryHash", control.entry_hash());
            total_debits += digits_or_zero("TotalDebits", control.total_debits());
            total_credits += digits_or_zero("TotalCredits", control.total_credits());
        }

        // File header + file control, plus each batch's lines.
        let raw_line_count: u64 =
            2 + self.batches.iter().map(NachaBatch::line_count).sum::<u64>();
        let block_count = (raw_line_count + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let filler_count = (BLOCK_SIZE - raw_line_count % BLOCK_SIZE) % BLOCK_SIZE;

        debug!(
            "file: {} batches, {} lines, {} blocks, {} fillers",
            batch_count, raw_line_count, block_count, filler_count
        );

        self.control.populate(
            batch_count,
            block_count,
            entry_addenda_count,
            entry_hash,
            total_debits,
            total_credits,
        );

        self.fillers.clear();
        for _ in 0..filler_count {
            self.fillers.push(BlockFiller::new());
        }
    }

    /// Renders the record tree as fixed-width text: file header, each batch
    /// (header, entries with their addenda, control), file control, then
    /// the block fillers. Every line is 94 characters plus the terminator,
    /// including the last.
    pub fn render(&self, ending: LineEnding) -> String {
        let mut lines = Vec::new();
        lines.push(self.header.render());
        for batch in &self.batches {
            batch.render_into(&mut lines);
        }
        lines.push(self.control.render());
        for filler in &self.fillers {
            lines.push(filler.render());
        }

        let mut out = String::with_capacity(lines.len() * (94 + ending.as_str().len()));
        for line in lines {
            out.push_str(&line);
            out.push_str(ending.as_str());
        }
        out
    }
}

impl Default for NachaFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a stored digit field, treating failures as zero.
///
/// Fields only enter the model through validated setters, so an
/// unparseable value here means the field was never set (blank defaults
/// trim to empty). Warn and carry on with zero rather than failing the
/// whole aggregation.
fn digits_or_zero(field: &'static str, value: &str) -> u64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0;
    }

    match trimmed.parse::<u64>() {
        Ok(n) => n,
        Err(_) => {
            warn!("{}: unparseable value {:?} treated as 0", field, value);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn credit_entry(batch: &mut NachaBatch, routing: &str, amount: rust_decimal::Decimal) {
        let entry = batch.add_entry();
        entry.set_transaction_code("22").unwrap();
        entry.set_receiving_dfi_identification(routing).unwrap();
        entry.set_amount(amount).unwrap();
    }

    #[test]
    fn test_batch_control_totals_two_credits() {
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        batch.header_mut().set_service_class_code("220").unwrap();
        batch.header_mut().set_company_identification("1234567890").unwrap();
        batch.header_mut().set_odfi_identification("09100001").unwrap();
        batch.header_mut().set_batch_number(1).unwrap();

        credit_entry(batch, "12345678", dec!(150.00));
        credit_entry(batch, "12345678", dec!(150.00));

        batch.generate_control();

        let control = batch.control();
        assert_eq!(control.entry_addenda_count(), "000002");
        assert_eq!(control.total_credits(), "000000030000");
        assert_eq!(control.total_debits(), "000000000000");
        assert_eq!(control.entry_hash(), "0024691356");
        assert_eq!(control.service_class_code(), "220");
        assert_eq!(control.company_identification(), "1234567890");
        assert_eq!(control.odfi_identification(), "09100001");
        assert_eq!(control.batch_number(), "0000001");
    }

    #[test]
    fn test_debits_and_credits_split_by_transaction_code() {
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        batch.header_mut().set_service_class_code("200").unwrap();

        let entry = batch.add_entry();
        entry.set_transaction_code("27").unwrap();
        entry.set_receiving_dfi_identification("11111111").unwrap();
        entry.set_amount(dec!(75.50)).unwrap();

        credit_entry(batch, "22222222", dec!(20.00));

        batch.generate_control();

        assert_eq!(batch.control().total_debits(), "000000007550");
        assert_eq!(batch.control().total_credits(), "000000002000");
    }

    #[test]
    fn test_addenda_counted_in_entry_addenda_count() {
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        let entry = batch.add_entry();
        entry.set_transaction_code("22").unwrap();
        entry.add_addenda();
        entry.add_addenda();

        batch.generate_control();
        assert_eq!(batch.control().entry_addenda_count(), "000003");
    }

    #[test]
    fn test_entry_hash_wraps_to_last_10_digits() {
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        // 101 * 99_999_999 = 10_099_999_899, one digit too wide.
        for _ in 0..101 {
            credit_entry(batch, "99999999", dec!(1.00));
        }

        batch.generate_control();
        assert_eq!(batch.control().entry_hash(), "0099999899");
    }

    #[test]
    fn test_file_control_sums_batch_controls() {
        let mut file = NachaFile::new();

        let batch = file.add_batch();
        batch.header_mut().set_service_class_code("220").unwrap();
        credit_entry(batch, "11111111", dec!(10.00));
        batch.generate_control();

        let batch = file.add_batch();
        batch.header_mut().set_service_class_code("220").unwrap();
        credit_entry(batch, "22222222", dec!(5.00));
        credit_entry(batch, "33333333", dec!(5.00));
        batch.generate_control();

        file.generate_control();

        let control = file.control();
        assert_eq!(control.batch_count(), "000002");
        assert_eq!(control.entry_addenda_count(), "00000003");
        assert_eq!(control.entry_hash(), "0066666666");
        assert_eq!(control.total_credits(), "000000002000");
        assert_eq!(control.total_debits(), "000000000000");
    }

    #[test]
    fn test_block_count_and_fillers() {
        // 1 batch, 1 entry, 0 addenda: 2 + 2 + 1 = 5 raw lines.
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        credit_entry(batch, "11111111", dec!(1.00));
        batch.generate_control();
        file.generate_control();

        assert_eq!(file.control().block_count(), "000001");
        assert_eq!(file.filler_count(), 5);

        let rendered = file.render(LineEnding::Lf);
        assert_eq!(rendered.lines().count(), 10);
    }

    #[test]
    fn test_no_fillers_when_block_aligned() {
        // 2 batches of 3 entries: 2 + 2*(2+3) = 12... make it land on 10:
        // 1 batch with 6 entries: 2 + 2 + 6 = 10 raw lines.
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        for _ in 0..6 {
            credit_entry(batch, "11111111", dec!(1.00));
        }
        batch.generate_control();
        file.generate_control();

        assert_eq!(file.control().block_count(), "000001");
        assert_eq!(file.filler_count(), 0);
        assert_eq!(file.render(LineEnding::Lf).lines().count(), 10);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let mut file = NachaFile::new();
        let batch = file.add_batch();
        credit_entry(batch, "11111111", dec!(1.00));
        batch.generate_control();

        file.generate_control();
        let first = file.render(LineEnding::Lf);
        let first_fillers = file.filler_count();

        file.batches_mut()[0].generate_control();
        file.generate_control();

        assert_eq!(file.filler_count(), first_fillers);
        assert_eq!(file.render(LineEnding::Lf), first);
    }

    #[test]
    fn test_render_line_endings() {
        let mut file = NachaFile::new();
        file.generate_control();

        let lf = file.render(LineEnding::Lf);
        assert!(lf.ends_with('\n'));
        assert!(!lf.contains('\r'));

        let crlf = file.render(LineEnding::Crlf);
        assert!(crlf.ends_with("\r\n"));
        assert_eq!(crlf.matches("\r\n").count(), crlf.matches('\n').count());
    }

    #[test]
    fn test_digits_or_zero() {
        assert_eq!(digits_or_zero("Test", "0000015000"), 15000);
        assert_eq!(digits_or_zero("Test", "          "), 0);
        assert_eq!(digits_or_zero("Test", "12AB"), 0);
    }
}
