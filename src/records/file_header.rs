//! File Header record (type "1").

use crate::error::{Result, ValidationError};
use crate::format::{pad_to_width, Align};
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Serialize;

/// The first line of every NACHA file.
///
/// Identifies the sending and receiving points and carries the fixed format
/// constants (record size 094, blocking factor 10, format code 1).
///
/// Field layout (94 characters):
///
/// | Field | Width |
/// |---|---|
/// | record type | 1 |
/// | priority code | 2 |
/// | immediate destination | 10 |
/// | immediate origin | 10 |
/// | file creation date (YYMMDD) | 6 |
/// | file creation time (HHMM) | 4 |
/// | file ID modifier | 1 |
/// | record size | 3 |
/// | blocking factor | 2 |
/// | format code | 1 |
/// | immediate destination name | 23 |
/// | immediate origin name | 23 |
/// | reference code | 8 |
#[derive(Debug, Clone, Serialize)]
pub struct FileHeader {
    record_type: String,
    priority_code: String,
    immediate_destination: String,
    immediate_origin: String,
    file_creation_date: String,
    file_creation_time: String,
    file_id_modifier: String,
    record_size: String,
    blocking_factor: String,
    format_code: String,
    immediate_destination_name: String,
    immediate_origin_name: String,
    reference_code: String,
}

impl FileHeader {
    /// Creates a header with format defaults: priority "01", creation
    /// date/time now (UTC), modifier "A", and blank routing/name fields.
    pub fn new() -> Self {
        let now = Utc::now();
        FileHeader {
            record_type: "1".to_string(),
            priority_code: "01".to_string(),
            immediate_destination: pad_to_width("", 10, Align::Left),
            immediate_origin: pad_to_width("", 10, Align::Left),
            file_creation_date: now.format("%y%m%d").to_string(),
            file_creation_time: now.format("%H%M").to_string(),
            file_id_modifier: "A".to_string(),
            record_size: "094".to_string(),
            blocking_factor: "10".to_string(),
            format_code: "1".to_string(),
            immediate_destination_name: pad_to_width("", 23, Align::Left),
            immediate_origin_name: pad_to_width("", 23, Align::Left),
            reference_code: pad_to_width("", 8, Align::Left),
        }
    }

    /// Sets the priority code. Must be exactly 2 characters ("01" in
    /// practice; other values are bank-assigned).
    pub fn set_priority_code(&mut self, code: &str) -> Result<()> {
        if code.len() != 2 {
            return Err(ValidationError::new(
                "PriorityCode",
                "must be 2 characters",
            ));
        }

        self.priority_code = code.to_string();
        Ok(())
    }

    /// Restores the priority code to the default "01".
    pub fn reset_priority_code(&mut self) {
        self.priority_code = "01".to_string();
    }

    /// Sets the immediate destination (the receiving point's routing number).
    ///
    /// Stored right-aligned in 10 characters, so a 9-digit routing number
    /// gets its customary leading space. Not case-mapped.
    pub fn set_immediate_destination(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ValidationError::new(
                "ImmediateDestination",
                "cannot be empty",
            ));
        }
        if id.len() > 10 {
            return Err(ValidationError::new(
                "ImmediateDestination",
                "must be 10 characters or less",
            ));
        }

        self.immediate_destination = pad_to_width(id, 10, Align::Right);
        Ok(())
    }

    /// Sets the immediate origin (the sending point's routing number or
    /// company identification). Stored right-aligned in 10 characters.
    pub fn set_immediate_origin(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ValidationError::new("ImmediateOrigin", "cannot be empty"));
        }
        if id.len() > 10 {
            return Err(ValidationError::new(
                "ImmediateOrigin",
                "must be 10 characters or less",
            ));
        }

        self.immediate_origin = pad_to_width(id, 10, Align::Right);
        Ok(())
    }

    /// Sets the file creation date, formatted YYMMDD.
    pub fn set_file_creation_date(&mut self, date: NaiveDate) {
        self.file_creation_date = date.format("%y%m%d").to_string();
    }

    /// Sets the file creation time, formatted HHMM.
    pub fn set_file_creation_time(&mut self, time: NaiveTime) {
        self.file_creation_time = time.format("%H%M").to_string();
    }

    /// Sets the file ID modifier, which distinguishes multiple files sent
    /// the same day. Must be A-Z or 0-9.
    pub fn set_file_id_modifier(&mut self, modifier: char) -> Result<()> {
        if !modifier.is_ascii_uppercase() && !modifier.is_ascii_digit() {
            return Err(ValidationError::new(
                "FileIDModifier",
                "must be A-Z or 0-9",
            ));
        }

        self.file_id_modifier = modifier.to_string();
        Ok(())
    }

    /// Restores the file ID modifier to the default "A".
    pub fn reset_file_id_modifier(&mut self) {
        self.file_id_modifier = "A".to_string();
    }

    /// Sets the immediate destination name, upper-cased.
    /// Names longer than 23 characters are truncated.
    pub fn set_immediate_destination_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ValidationError::new(
                "ImmediateDestinationName",
                "cannot be empty",
            ));
        }

        self.immediate_destination_name = pad_to_width(&name.to_uppercase(), 23, Align::Left);
        Ok(())
    }

    /// Sets the immediate origin name, upper-cased.
    /// Names longer than 23 characters are truncated.
    pub fn set_immediate_origin_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ValidationError::new(
                "ImmediateOriginName",
                "cannot be empty",
            ));
        }

        self.immediate_origin_name = pad_to_width(&name.to_uppercase(), 23, Align::Left);
        Ok(())
    }

    /// Sets the optional reference code.
    pub fn set_reference_code(&mut self, code: &str) -> Result<()> {
        if code.len() > 8 {
            return Err(ValidationError::new(
                "ReferenceCode",
                "must be 8 characters or less",
            ));
        }

        self.reference_code = pad_to_width(&code.to_uppercase(), 8, Align::Left);
        Ok(())
    }

    /// Restores the reference code to the default blank value.
    pub fn reset_reference_code(&mut self) {
        self.reference_code = pad_to_width("", 8, Align::Left);
    }

    pub fn priority_code(&self) -> &str {
        &self.priority_code
    }

    pub fn immediate_destination(&self) -> &str {
        &self.immediate_destination
    }

    pub fn immediate_origin(&self) -> &str {
        &self.immediate_origin
    }

    pub fn file_creation_date(&self) -> &str {
        &self.file_creation_date
    }

    pub fn file_creation_time(&self) -> &str {
        &self.file_creation_time
    }

    pub fn file_id_modifier(&self) -> &str {
        &self.file_id_modifier
    }

    pub fn immediate_destination_name(&self) -> &str {
        &self.immediate_destination_name
    }

    pub fn immediate_origin_name(&self) -> &str {
        &self.immediate_origin_name
    }

    pub fn reference_code(&self) -> &str {
        &self.reference_code
    }

    /// Renders the record as a 94-character line.
    pub fn render(&self) -> String {
        let line = [
            self.record_type.as_str(),
            &self.priority_code,
            &self.immediate_destination,
            &self.immediate_origin,
            &self.file_creation_date,
            &self.file_creation_time,
            &self.file_id_modifier,
            &self.record_size,
            &self.blocking_factor,
            &self.format_code,
            &self.immediate_destination_name,
            &self.immediate_origin_name,
            &self.reference_code,
        ]
        .concat();

        debug_assert_eq!(line.len(), super::RECORD_WIDTH);
        line
    }
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let header = FileHeader::new();
        assert_eq!(header.priority_code(), "01");
        assert_eq!(header.file_id_modifier(), "A");
        assert_eq!(header.file_creation_date().len(), 6);
        assert_eq!(header.file_creation_time().len(), 4);
        assert_eq!(header.render().len(), 94);
    }

    #[test]
    fn test_render_starts_with_record_type() {
        let header = FileHeader::new();
        assert!(header.render().starts_with('1'));
    }

    #[test]
    fn test_immediate_destination_right_aligned() {
        let mut header = FileHeader::new();
        header.set_immediate_destination("123456789").unwrap();
        assert_eq!(header.immediate_destination(), " 123456789");
    }

    #[test]
    fn test_immediate_destination_rejects_over_10() {
        let mut header = FileHeader::new();
        let err = header.set_immediate_destination("12345678901").unwrap_err();
        assert_eq!(err.field, "ImmediateDestination");
        assert_eq!(header.immediate_destination(), "          ");
    }

    #[test]
    fn test_file_id_modifier_validation() {
        let mut header = FileHeader::new();
        header.set_file_id_modifier('B').unwrap();
        assert_eq!(header.file_id_modifier(), "B");
        header.set_file_id_modifier('7').unwrap();
        assert_eq!(header.file_id_modifier(), "7");

        assert!(header.set_file_id_modifier('b').is_err());
        assert!(header.set_file_id_modifier('-').is_err());
        assert_eq!(header.file_id_modifier(), "7");
    }

    #[test]
    fn test_creation_date_and_time_formats() {
        let mut header = FileHeader::new();
        header.set_file_creation_date(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        header.set_file_creation_time(NaiveTime::from_hms_opt(14, 5, 0).unwrap());
        assert_eq!(header.file_creation_date(), "240307");
        assert_eq!(header.file_creation_time(), "1405");
    }

    #[test]
    fn test_names_upper_cased_and_padded() {
        let mut header = FileHeader::new();
        header.set_immediate_destination_name("First Bank").unwrap();
        assert_eq!(header.immediate_destination_name(), "FIRST BANK             ");

        header.set_immediate_origin_name("Acme Payroll").unwrap();
        assert_eq!(header.immediate_origin_name().len(), 23);
    }

    #[test]
    fn test_reference_code_optional_with_reset() {
        let mut header = FileHeader::new();
        header.set_reference_code("ref42").unwrap();
        assert_eq!(header.reference_code(), "REF42   ");

        header.reset_reference_code();
        assert_eq!(header.reference_code(), "        ");

        assert!(header.set_reference_code("123456789").is_err());
    }
}
