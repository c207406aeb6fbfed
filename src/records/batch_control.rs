//! Batch Control record (type "8").

use crate::error::{Result, ValidationError};
use crate::format::{pad_to_width, zero_pad_num, Align};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Largest total storable in a 12-digit amount field, in cents.
const MAX_TOTAL_CENTS: u64 = 999_999_999_999;

/// Closes a batch with its control totals.
///
/// Normally populated by batch-level aggregation rather than by hand; the
/// setters exist for hosts that assemble control records themselves.
///
/// Field layout (94 characters): record type 1, service class code 3,
/// entry/addenda count 6, entry hash 10, total debits 12, total credits 12,
/// company identification 10, message authentication code 19 (blank),
/// reserved 6 (blank), ODFI identification 8, batch number 7.
#[derive(Debug, Clone, Serialize)]
pub struct BatchControl {
    record_type: String,
    service_class_code: String,
    entry_addenda_count: String,
    entry_hash: String,
    total_debits: String,
    total_credits: String,
    company_identification: String,
    message_authentication_code: String,
    reserved: String,
    odfi_identification: String,
    batch_number: String,
}

impl BatchControl {
    pub fn new() -> Self {
        BatchControl {
            record_type: "8".to_string(),
            service_class_code: pad_to_width("", 3, Align::Left),
            entry_addenda_count: zero_pad_num(0, 6),
            entry_hash: zero_pad_num(0, 10),
            total_debits: zero_pad_num(0, 12),
            total_credits: zero_pad_num(0, 12),
            company_identification: pad_to_width("", 10, Align::Left),
            message_authentication_code: pad_to_width("", 19, Align::Left),
            reserved: pad_to_width("", 6, Align::Left),
            odfi_identification: pad_to_width("", 8, Align::Left),
            batch_number: zero_pad_num(0, 7),
        }
    }

    /// Sets the service class code: 200, 220, or 225. Must match the
    /// batch header's value.
    pub fn set_service_class_code(&mut self, code: &str) -> Result<()> {
        if code != "200" && code != "220" && code != "225" {
            return Err(ValidationError::new(
                "ServiceClassCode",
                "must be 200, 220, or 225",
            ));
        }

        self.service_class_code = code.to_string();
        Ok(())
    }

    /// Sets the entry/addenda count.
    pub fn set_entry_addenda_count(&mut self, count: u32) -> Result<()> {
        if count < 1 || count > 999_999 {
            return Err(ValidationError::new(
                "EntryAddendaCount",
                "must be between 1 and 999999",
            ));
        }

        self.entry_addenda_count = zero_pad_num(count as u64, 6);
        Ok(())
    }

    /// Sets the entry hash: the sum of receiving DFI identifications.
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
    /// Fractional cents are truncated toward zero.
    pub fn set_total_debits(&mut self, amount: Decimal) -> Result<()> {
        self.total_debits = format_total("TotalDebits", amount)?;
        Ok(())
    }

    /// Sets the total credits in dollars, stored as 12 digits of cents.
    /// Fractional cents are truncated toward zero.
    pub fn set_total_credits(&mut self, amount: Decimal) -> Result<()> {
        self.total_credits = format_total("TotalCredits", amount)?;
        Ok(())
    }

    /// Sets the company identification. Must match the batch header's value.
    pub fn set_company_identification(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ValidationError::new(
                "CompanyIdentification",
                "cannot be empty",
            ));
        }
        if id.len() > 10 {
            return Err(ValidationError::new(
                "CompanyIdentification",
                "must be 10 characters or less",
            ));
        }

        self.company_identification = pad_to_width(id, 10, Align::Left);
        Ok(())
    }

    /// Restores the message authentication code to blanks. The field is
    /// unused without an MAC agreement and always transmits blank here.
    pub fn reset_message_authentication_code(&mut self) {
        self.message_authentication_code = pad_to_width("", 19, Align::Left);
    }

    /// Restores the reserved field to blanks.
    pub fn reset_reserved(&mut self) {
        self.reserved = pad_to_width("", 6, Align::Left);
    }

    /// Sets the ODFI identification. Exact length, must match the batch
    /// header's value.
    pub fn set_odfi_identification(&mut self, id: &str) -> Result<()> {
        if id.len() != 8 {
            return Err(ValidationError::new(
                "ODFIIdentification",
                "must be 8 characters",
            ));
        }

        self.odfi_identification = id.to_string();
        Ok(())
    }

    /// Sets the batch number, zero-padded to 7 digits.
    pub fn set_batch_number(&mut self, number: u32) -> Result<()> {
        if number < 1 || number > 9_999_999 {
            return Err(ValidationError::new(
                "BatchNumber",
                "must be between 1 and 9999999",
            ));
        }

        self.batch_number = zero_pad_num(number as u64, 7);
        Ok(())
    }

    /// Writes computed totals and mirrored header fields directly in their
    /// stored form. Aggregation uses this instead of the public setters so
    /// that legitimate computed values (a zero count for an empty batch, a
    /// hash sum wider than 10 digits) are stored under the format's
    /// truncating zero-pad rule rather than rejected.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn populate(
        &mut self,
        service_class_code: &str,
        entry_addenda_count: u64,
        entry_hash: u64,
        total_debits_cents: u64,
        total_credits_cents: u64,
        company_identification: &str,
        odfi_identification: &str,
        batch_number: &str,
    ) {
        self.service_class_code = service_class_code.to_string();
        self.entry_addenda_count = zero_pad_num(entry_addenda_count, 6);
        self.entry_hash = zero_pad_num(entry_hash, 10);
        self.total_debits = zero_pad_num(total_debits_cents, 12);
        self.total_credits = zero_pad_num(total_credits_cents, 12);
        self.company_identification = company_identification.to_string();
        self.odfi_identification = odfi_identification.to_string();
        self.batch_number = batch_number.to_string();
    }

    pub fn service_class_code(&self) -> &str {
        &self.service_class_code
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

    pub fn company_identification(&self) -> &str {
        &self.company_identification
    }

    pub fn odfi_identification(&self) -> &str {
        &self.odfi_identification
    }

    pub fn batch_number(&self) -> &str {
        &self.batch_number
    }

    /// Renders the record as a 94-character line.
    pub fn render(&self) -> String {
        let line = [
            self.record_type.as_str(),
            &self.service_class_code,
            &self.entry_addenda_count,
            &self.entry_hash,
            &self.total_debits,
            &self.total_credits,
            &self.company_identification,
            &self.message_authentication_code,
            &self.reserved,
            &self.odfi_identification,
            &self.batch_number,
        ]
        .concat();

        debug_assert_eq!(line.len(), super::RECORD_WIDTH);
        line
    }
}

impl Default for BatchControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a dollar amount to 12 zero-padded digits of cents.
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
