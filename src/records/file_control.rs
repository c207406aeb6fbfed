//! File Control record (type "9").

use crate::error::{Result, ValidationError};
use crate::format::{pad_to_width, zero_pad_num, Align};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

const MAX_TOTAL_CENTS: u64 = 999_999_999_999;

/// Closes the file with grand totals over every batch.
///
/// Field layout (94 characters): record type 1, batch count 6, block count
/// 6, entry/addenda count 8, entry hash 10, total debits 12, total credits
/// 12, reserved 39 (blank).
#[derive(Debug, Clone, Serialize)]
pub struct FileControl {
    record_type: String,
    batch_count: String,
    block_count: String,
    entry_addenda_count: String,
    entry_hash: String,
    total_debits: String,
    total_credits: String,
    reserved: String,
}

impl FileControl {
    pub fn new() -> Self {
        FileControl {
            record_type: "9".to_string(),
            batch_count: zero_pad_num(0, 6),
            block_count: zero_pad_num(0, 6),
            entry_addenda_count: zero_pad_num(0, 8),
            entry_hash: zero_pad_num(0, 10),
            total_debits: zero_pad_num(0, 12),
            total_credits: zero_pad_num(0, 12),
            reserved: pad_to_width("", 39, Align::Left),
        }
    }

    /// Sets the number of batch header records in the file.
    pub fn set_batch_count(&mut self, count: u32) -> Result<()> {
        if count < 1 || count > 999_999 {
            return Err(ValidationError::new(
                "BatchCount",
                "must be between 1 and 999999",
            ));
        }

        self.batch_count = zero_pad_num(count as u64, 6);
        Ok(())
    }

    /// Sets the number of 10-line physical blocks in the file.
    pub fn set_block_count(&mut self, count: u32) -> Result<()> {
        if count < 1 || count > 999_999 {
            return Err(ValidationError::new(
                "BlockCount",
                "must be between 1 and 999999",
            ));
        }

        self.block_count = zero_pad_num(count as u64, 6);
        Ok(())
    }

    /// Sets the entry/addenda count over all batches.
    pub fn set_entry_addenda_count(&mut self, count: u32) -> Result<()> {
        if count > 99_999_999 {
            return Err(ValidationError::new(
                "EntryAddendaCount",
                "must be between 0 and 99999999",
            ));
        }

        self.entry_addenda_count = zero_pad_num(count as u64, 8);
        Ok(())
    }

    /// Sets the entry hash: the sum of the batch control hashes.
    pub fn set_entry_hash(&mut self, hash: u64) -> Result<()> {
        if hash > 9_999_999_999 {
            return Err(ValidationError::new(
                "EntryHash",
                "must be 9999999999 or less",
            ));
        }

        self.entry_hash = zero_pad_num(hash, 10);
        Ok(())
    }

    /// Sets the total debits in dollars, stored as 12 digits of cents.
    pub fn set_total_debits(&mut self, amount: Decimal) -> Result<()> {
        self.total_debits = format_total("TotalDebits", amount)?;
        Ok(())
    }

    /// Sets the total credits in dollars, stored as 12 digits of cents.
    pub fn set_total_credits(&mut self, amount: Decimal) -> Result<()> {
        self.total_credits = format_total("TotalCredits", amount)?;
        Ok(())
    }

    /// Writes computed totals directly in their stored form; see
    /// [`BatchControl::populate`](crate::records::batch_control) for why
    /// aggregation bypasses the validating setters.
    pub(crate) fn populate(
        &mut self,
        batch_count: u64,
        block_count: u64,
        entry_addenda_count: u64,
        entry_hash: u64,
        total_debits_cents: u64,
        total_credits_cents: u64,
    ) {
        self.batch_count = zero_pad_num(batch_count, 6);
        self.block_count = zero_pad_num(block_count, 6);
        self.entry_addenda_count = zero_pad_num(entry_addenda_count, 8);
        self.entry_hash = zero_pad_num(entry_hash, 10);
        self.total_debits = zero_pad_num(total_debits_cents, 12);
        self.total_credits = zero_pad_num(total_credits_cents, 12);
    }

    pub fn batch_count(&self) -> &str {
        &self.batch_count
    }

    pub fn block_count(&self) -> &str {
        &self.block_count
    }

    pub fn entry_addenda_count(&self) -> &str {
        &self.entry_addenda_count
    }

    pub fn entry_hash(&self) -> &str {
        &self.entry_hash
    }

    pub fn total_debits(&self) -> &str {
        &self.total_debits
    }

    pub fn total_credits(&self) -> &str {
        &self.total_credits
    }

    /// Renders the record as a 94-character line.
    pub fn render(&self) -> String {
        let line = [
            self.record_type.as_str(),
            &self.batch_count,
            &self.block_count,
            &self.entry_addenda_count,
            &self.entry_hash,
            &self.total_debits,
            &self.total_credits,
            &self.reserved,
        ]
        .concat();

        debug_assert_eq!(line.len(), super::RECORD_WIDTH);
        line
    }
}

impl Default for FileControl {
    fn default() -> Self {
        Self::new()
    }
}

fn format_total(field: &'static str, amount: Decimal) -> Result<String> {
    let cents = (amount * Decimal::from(100)).trunc();
    let cents = cents
        .to_u64()
        .ok_or_else(|| ValidationError::new(field, "must be 0 or greater"))?;

    if cents > MAX_TOTAL_CENTS {
        return Err(ValidationError::new(field, "must be 9999999999.99 or less"));
    }

    Ok(zero_pad_num(cents, 12))
}
