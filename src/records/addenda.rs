//! Addenda record (type "7").

use crate::error::{Result, ValidationError};
use crate::format::{pad_to_width, zero_pad_num, Align};
use serde::Serialize;

/// Free-text continuation of an entry detail record.
///
/// The entry detail sequence number is a plain copied value, the last 7
/// digits of the parent entry's trace number; the format carries it
/// redundantly rather than by reference.
///
/// Field layout (94 characters): record type 1, addenda type code 2,
/// payment related information 80, addenda sequence number 4, entry detail
/// sequence number 7.
#[derive(Debug, Clone, Serialize)]
pub struct Addenda {
    record_type: String,
    addenda_type_code: String,
    payment_related_information: String,
    addenda_sequence_number: String,
    entry_detail_sequence_number: String,
}

impl Addenda {
    /// Creates an addenda with type code "05" (the PPD/CCD addenda type)
    /// and blank payment information.
    pub fn new() -> Self {
        Addenda {
            record_type: "7".to_string(),
            addenda_type_code: "05".to_string(),
            payment_related_information: pad_to_width("", 80, Align::Left),
            addenda_sequence_number: zero_pad_num(0, 4),
            entry_detail_sequence_number: zero_pad_num(0, 7),
        }
    }

    /// Sets the addenda type code. Must be exactly 2 characters.
    pub fn set_addenda_type_code(&mut self, code: &str) -> Result<()> {
        if code.len() != 2 {
            return Err(ValidationError::new(
                "AddendaTypeCode",
                "must be 2 characters",
            ));
        }

        self.addenda_type_code = code.to_string();
        Ok(())
    }

    /// Restores the addenda type code to the default "05".
    pub fn reset_addenda_type_code(&mut self) {
        self.addenda_type_code = "05".to_string();
    }

    /// Sets the payment related information, upper-cased.
    /// Values longer than 80 characters are truncated.
    pub fn set_payment_related_information(&mut self, info: &str) {
        self.payment_related_information = pad_to_width(&info.to_uppercase(), 80, Align::Left);
    }

    /// Restores the payment related information to the default blank value.
    pub fn reset_payment_related_information(&mut self) {
        self.payment_related_information = pad_to_width("", 80, Align::Left);
    }

    /// Sets the addenda sequence number, zero-padded to 4 digits.
    pub fn set_addenda_sequence_number(&mut self, sequence: u16) -> Result<()> {
        if sequence < 1 || sequence > 9999 {
            return Err(ValidationError::new(
                "AddendaSequenceNumber",
                "must be between 1 and 9999",
            ));
        }

        self.addenda_sequence_number = zero_pad_num(sequence as u64, 4);
        Ok(())
    }

    /// Sets the entry detail sequence number: the last 7 digits of the
    /// parent entry's trace number, zero-padded.
    pub fn set_entry_detail_sequence_number(&mut self, sequence: u32) -> Result<()> {
        if sequence < 1 || sequence > 9_999_999 {
            return Err(ValidationError::new(
                "EntryDetailSequenceNumber",
                "must be between 1 and 9999999",
            ));
        }

        self.entry_detail_sequence_number = zero_pad_num(sequence as u64, 7);
        Ok(())
    }

    /// Unvalidated sequence assignment for the append path, which numbers
    /// addenda positionally.
    pub(crate) fn assign_sequence_number(&mut self, sequence: u64) {
        self.addenda_sequence_number = zero_pad_num(sequence, 4);
    }

    pub fn addenda_type_code(&self) -> &str {
        &self.addenda_type_code
    }

    pub fn payment_related_information(&self) -> &str {
        &self.payment_related_information
    }

    pub fn addenda_sequence_number(&self) -> &str {
        &self.addenda_sequence_number
    }

    pub fn entry_detail_sequence_number(&self) -> &str {
        &self.entry_detail_sequence_number
    }

    /// Renders the record as a 94-character line.
    pub fn render(&self) -> String {
        let line = [
            self.record_type.as_str(),
            &self.addenda_type_code,
            &self.payment_related_information,
            &self.addenda_sequence_number,
            &self.entry_detail_sequence_number,
        ]
        .concat();

        debug_assert_eq!(line.len(), super::RECORD_WIDTH);
        line
    }
}

impl Default for Addenda {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render_to_full_width() {
        let addenda = Addenda::new();
        let line = addenda.render();
        assert_eq!(line.len(), 94);
        assert!(line.starts_with('7'));
        assert_eq!(addenda.addenda_type_code(), "05");
    }

    #[test]
    fn test_payment_information_upper_cased_and_padded() {
        let mut addenda = Addenda::new();
        addenda.set_payment_related_information("Invoice 1234");
        assert!(addenda.payment_related_information().starts_with("INVOICE 1234"));
        assert_eq!(addenda.payment_related_information().len(), 80);

        addenda.reset_payment_related_information();
        assert_eq!(addenda.payment_related_information().trim(), "");
    }

    #[test]
    fn test_addenda_sequence_number_bounds() {
        let mut addenda = Addenda::new();
        assert!(addenda.set_addenda_sequence_number(0).is_err());

        addenda.set_addenda_sequence_number(1).unwrap();
        assert_eq!(addenda.addenda_sequence_number(), "0001");
        addenda.set_addenda_sequence_number(9999).unwrap();
        assert_eq!(addenda.addenda_sequence_number(), "9999");
    }

    #[test]
    fn test_entry_detail_sequence_number_zero_padded() {
        let mut addenda = Addenda::new();
        addenda.set_entry_detail_sequence_number(42).unwrap();
        assert_eq!(addenda.entry_detail_sequence_number(), "0000042");

        assert!(addenda.set_entry_detail_sequence_number(0).is_err());
        assert!(addenda.set_entry_detail_sequence_number(10_000_000).is_err());
    }

    #[test]
    fn test_addenda_type_code_exact_length() {
        let mut addenda = Addenda::new();
        assert!(addenda.set_addenda_type_code("5").is_err());
        addenda.set_addenda_type_code("98").unwrap();
        assert_eq!(addenda.addenda_type_code(), "98");

        addenda.reset_addenda_type_code();
        assert_eq!(addenda.addenda_type_code(), "05");
    }
}
