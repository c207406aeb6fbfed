//! Entry Detail record (type "6").

use crate::error::{Result, ValidationError};
use crate::format::{pad_to_width, zero_pad_num, Align};
use crate::records::Addenda;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

/// Transaction codes for debit entries (live and prenote).
pub const DEBIT_TRANSACTION_CODES: [&str; 4] = ["27", "28", "37", "38"];

/// Transaction codes for credit entries (live and prenote).
pub const CREDIT_TRANSACTION_CODES: [&str; 4] = ["22", "23", "32", "33"];

/// Largest amount storable in the 10-digit amount field, in cents.
const MAX_AMOUNT_CENTS: u64 = 9_999_999_999;

/// A single payment instruction: a debit or credit against one account.
///
/// Owns its addenda records. Appending an addenda flips the addenda record
/// indicator to "1" and assigns the next 1-based sequence number.
///
/// Field layout (94 characters): record type 1, transaction code 2,
/// receiving DFI identification 8, check digit 1, DFI account number 17,
/// amount 10 (integer cents), individual ID number 15, individual name 22,
/// discretionary data 2, addenda record indicator 1, trace number 15.
#[derive(Debug, Clone, Serialize)]
pub struct EntryDetail {
    record_type: String,
    transaction_code: String,
    receiving_dfi_identification: String,
    check_digit: String,
    dfi_account_number: String,
    amount: String,
    individual_id_number: String,
    individual_name: String,
    discretionary_data: String,
    addenda_record_indicator: String,
    trace_number: String,
    addenda: Vec<Addenda>,
}

impl EntryDetail {
    pub fn new() -> Self {
        EntryDetail {
            record_type: "6".to_string(),
            transaction_code: pad_to_width("", 2, Align::Left),
            receiving_dfi_identification: pad_to_width("", 8, Align::Left),
            check_digit: pad_to_width("", 1, Align::Left),
            dfi_account_number: pad_to_width("", 17, Align::Left),
            amount: zero_pad_num(0, 10),
            individual_id_number: pad_to_width("", 15, Align::Left),
            individual_name: pad_to_width("", 22, Align::Left),
            discretionary_data: pad_to_width("", 2, Align::Left),
            addenda_record_indicator: "0".to_string(),
            trace_number: zero_pad_num(0, 15),
            addenda: Vec::new(),
        }
    }

    /// Sets the transaction code:
    ///
    /// - Checking: 22 (credit), 23 (prenote credit), 27 (debit), 28 (prenote debit)
    /// - Savings: 32 (credit), 33 (prenote credit), 37 (debit), 38 (prenote debit)
    pub fn set_transaction_code(&mut self, code: &str) -> Result<()> {
        if !DEBIT_TRANSACTION_CODES.contains(&code) && !CREDIT_TRANSACTION_CODES.contains(&code) {
            return Err(ValidationError::new(
                "TransactionCode",
                "must be 22, 23, 27, 28, 32, 33, 37, or 38",
            ));
        }

        self.transaction_code = code.to_string();
        Ok(())
    }

    /// Sets the receiving DFI identification: the first 8 digits of the
    /// receiving bank's routing number. Exact length, not case-mapped.
    pub fn set_receiving_dfi_identification(&mut self, id: &str) -> Result<()> {
        if id.len() != 8 {
            return Err(ValidationError::new(
                "ReceivingDFIIdentification",
                "must be 8 characters",
            ));
        }

        self.receiving_dfi_identification = id.to_string();
        Ok(())
    }

    /// Sets the check digit: the last digit of the receiving routing number.
    pub fn set_check_digit(&mut self, digit: &str) -> Result<()> {
        if digit.len() != 1 {
            return Err(ValidationError::new("CheckDigit", "must be 1 character"));
        }

        self.check_digit = digit.to_string();
        Ok(())
    }

    /// Sets the receiver's account number at their DFI. Not case-mapped;
    /// values longer than 17 characters are truncated.
    pub fn set_dfi_account_number(&mut self, number: &str) -> Result<()> {
        if number.is_empty() {
            return Err(ValidationError::new("DFIAccountNumber", "cannot be empty"));
        }

        self.dfi_account_number = pad_to_width(number, 17, Align::Left);
        Ok(())
    }

    /// Sets the entry amount in dollars, stored as zero-padded integer cents.
    ///
    /// Fractional cents are truncated toward zero, not rounded: 1.999
    /// stores as 199 cents. Rejects zero, negative amounts, and amounts
    /// over 99,999,999.99 (the 10-digit field limit).
    pub fn set_amount(&mut self, amount: Decimal) -> Result<()> {
        let cents = (amount * Decimal::from(100)).trunc();
        let cents = cents.to_u64().ok_or_else(|| {
            ValidationError::new("Amount", "must be greater than 0")
        })?;

        if cents == 0 {
            return Err(ValidationError::new("Amount", "must be greater than 0"));
        }
        if cents > MAX_AMOUNT_CENTS {
            return Err(ValidationError::new(
                "Amount",
                "must be 99999999.99 or less",
            ));
        }

        self.amount = zero_pad_num(cents, 10);
        Ok(())
    }

    /// Sets the optional individual ID number (employee number etc).
    pub fn set_individual_id_number(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ValidationError::new(
                "IndividualIDNumber",
                "cannot be empty",
            ));
        }
        if id.len() > 15 {
            return Err(ValidationError::new(
                "IndividualIDNumber",
                "must be 15 characters or less",
            ));
        }

        self.individual_id_number = pad_to_width(id, 15, Align::Left);
        Ok(())
    }

    /// Sets the receiver's name, upper-cased.
    /// Names longer than 22 characters are truncated.
    pub fn set_individual_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ValidationError::new("IndividualName", "cannot be empty"));
        }

        self.individual_name = pad_to_width(&name.to_uppercase(), 22, Align::Left);
        Ok(())
    }

    /// Sets the optional discretionary data, upper-cased.
    /// Values longer than 2 characters are truncated.
    pub fn set_discretionary_data(&mut self, data: &str) {
        self.discretionary_data = pad_to_width(&data.to_uppercase(), 2, Align::Left);
    }

    /// Restores the discretionary data to the default blank value.
    pub fn reset_discretionary_data(&mut self) {
        self.discretionary_data = pad_to_width("", 2, Align::Left);
    }

    /// Sets the addenda record indicator: "0" (no addenda) or "1".
    /// Appending an addenda sets this to "1" automatically.
    pub fn set_addenda_record_indicator(&mut self, indicator: &str) -> Result<()> {
        if indicator != "0" && indicator != "1" {
            return Err(ValidationError::new(
                "AddendaRecordIndicator",
                "must be 0 or 1",
            ));
        }

        self.addenda_record_indicator = indicator.to_string();
        Ok(())
    }

    /// Sets the trace number: the 8-character ODFI identification followed
    /// by the 7-digit entry sequence number, zero-padded.
    pub fn set_trace_number(&mut self, odfi_id: &str, sequence: u32) -> Result<()> {
        if odfi_id.len() != 8 {
            return Err(ValidationError::new("TraceNumber", "ODFI id must be 8 characters"));
        }
        if sequence < 1 || sequence > 9_999_999 {
            return Err(ValidationError::new(
                "TraceNumber",
                "sequence must be between 1 and 9999999",
            ));
        }

        self.trace_number = format!("{}{}", odfi_id, zero_pad_num(sequence as u64, 7));
        Ok(())
    }

    /// Appends a defaulted addenda record and returns it for mutation.
    ///
    /// The new addenda gets the next 1-based sequence number and the
    /// entry's addenda record indicator is set to "1".
    pub fn add_addenda(&mut self) -> &mut Addenda {
        let mut addenda = Addenda::new();
        addenda.assign_sequence_number(self.addenda.len() as u64 + 1);
        self.addenda_record_indicator = "1".to_string();
        self.addenda.push(addenda);

        // Safety: pushed just above
        self.addenda.last_mut().expect("addenda just appended")
    }

    /// The entry's addenda records, in insertion order.
    pub fn addenda(&self) -> &[Addenda] {
        &self.addenda
    }

    pub fn addenda_mut(&mut self) -> &mut [Addenda] {
        &mut self.addenda
    }

    pub fn transaction_code(&self) -> &str {
        &self.transaction_code
    }

    /// Returns `true` if the transaction code is a debit (27, 28, 37, 38).
    pub fn is_debit(&self) -> bool {
        DEBIT_TRANSACTION_CODES.contains(&self.transaction_code.as_str())
    }

    /// Returns `true` if the transaction code is a credit (22, 23, 32, 33).
    pub fn is_credit(&self) -> bool {
        CREDIT_TRANSACTION_CODES.contains(&self.transaction_code.as_str())
    }

    pub fn receiving_dfi_identification(&self) -> &str {
        &self.receiving_dfi_identification
    }

    pub fn check_digit(&self) -> &str {
        &self.check_digit
    }

    pub fn dfi_account_number(&self) -> &str {
        &self.dfi_account_number
    }

    /// The stored amount: 10 zero-padded digits of cents.
    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn individual_id_number(&self) -> &str {
        &self.individual_id_number
    }

    pub fn individual_name(&self) -> &str {
        &self.individual_name
    }

    pub fn discretionary_data(&self) -> &str {
        &self.discretionary_data
    }

    pub fn addenda_record_indicator(&self) -> &str {
        &self.addenda_record_indicator
    }

    pub fn trace_number(&self) -> &str {
        &self.trace_number
    }

    /// Renders the record as a 94-character line (addenda render separately).
    pub fn render(&self) -> String {
        let line = [
            self.record_type.as_str(),
            &self.transaction_code,
            &self.receiving_dfi_identification,
            &self.check_digit,
            &self.dfi_account_number,
            &self.amount,
            &self.individual_id_number,
            &self.individual_name,
            &self.discretionary_data,
            &self.addenda_record_indicator,
            &self.trace_number,
        ]
        .concat();

        debug_assert_eq!(line.len(), super::RECORD_WIDTH);
        line
    }
}

impl Default for EntryDetail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_render_to_full_width() {
        let entry = EntryDetail::new();
        let line = entry.render();
        assert_eq!(line.len(), 94);
        assert!(line.starts_with('6'));
        assert_eq!(entry.addenda_record_indicator(), "0");
        assert_eq!(entry.amount(), "0000000000");
    }

    #[test]
    fn test_transaction_code_enum() {
        let mut entry = EntryDetail::new();
        for code in ["22", "23", "27", "28", "32", "33", "37", "38"] {
            entry.set_transaction_code(code).unwrap();
            assert_eq!(entry.transaction_code(), code);
        }

        assert!(entry.set_transaction_code("24").is_err());
        assert!(entry.set_transaction_code("2").is_err());
        assert_eq!(entry.transaction_code(), "38");
    }

    #[test]
    fn test_debit_and_credit_classification() {
        let mut entry = EntryDetail::new();
        entry.set_transaction_code("27").unwrap();
        assert!(entry.is_debit());
        assert!(!entry.is_credit());

        entry.set_transaction_code("22").unwrap();
        assert!(entry.is_credit());
        assert!(!entry.is_debit());
    }

    #[test]
    fn test_amount_stored_as_integer_cents() {
        let mut entry = EntryDetail::new();
        entry.set_amount(dec!(150.00)).unwrap();
        assert_eq!(entry.amount(), "0000015000");
    }

    #[test]
    fn test_amount_truncates_fractional_cents() {
        let mut entry = EntryDetail::new();
        entry.set_amount(dec!(1.999)).unwrap();
        assert_eq!(entry.amount(), "0000000199");
    }

    #[test]
    fn test_amount_bounds() {
        let mut entry = EntryDetail::new();
        assert!(entry.set_amount(dec!(0)).is_err());
        assert!(entry.set_amount(dec!(-5.00)).is_err());
        assert!(entry.set_amount(dec!(100000000.00)).is_err());

        entry.set_amount(dec!(0.01)).unwrap();
        assert_eq!(entry.amount(), "0000000001");
        entry.set_amount(dec!(99999999.99)).unwrap();
        assert_eq!(entry.amount(), "9999999999");
    }

    #[test]
    fn test_rejected_amount_leaves_prior_value() {
        let mut entry = EntryDetail::new();
        entry.set_amount(dec!(10.00)).unwrap();
        assert!(entry.set_amount(dec!(-1)).is_err());
        assert_eq!(entry.amount(), "0000001000");
    }

    #[test]
    fn test_individual_name_truncates_upper_cased() {
        let mut entry = EntryDetail::new();
        entry.set_individual_name("Bartholomew Featherstonehaugh").unwrap();
        assert_eq!(entry.individual_name(), "BARTHOLOMEW FEATHERSTO");
        assert_eq!(entry.individual_name().len(), 22);
    }

    #[test]
    fn test_account_number_not_case_mapped() {
        let mut entry = EntryDetail::new();
        entry.set_dfi_account_number("12ab34").unwrap();
        assert_eq!(entry.dfi_account_number(), "12ab34           ");
    }

    #[test]
    fn test_trace_number_composition() {
        let mut entry = EntryDetail::new();
        entry.set_trace_number("09100001", 42).unwrap();
        assert_eq!(entry.trace_number(), "091000010000042");

        assert!(entry.set_trace_number("0910000", 1).is_err());
        assert!(entry.set_trace_number("09100001", 0).is_err());
        assert!(entry.set_trace_number("09100001", 10_000_000).is_err());
    }

    #[test]
    fn test_add_addenda_flips_indicator_and_sequences() {
        let mut entry = EntryDetail::new();
        assert_eq!(entry.addenda_record_indicator(), "0");

        entry.add_addenda();
        entry.add_addenda();

        assert_eq!(entry.addenda_record_indicator(), "1");
        assert_eq!(entry.addenda().len(), 2);
        assert_eq!(entry.addenda()[0].addenda_sequence_number(), "0001");
        assert_eq!(entry.addenda()[1].addenda_sequence_number(), "0002");
    }
}
