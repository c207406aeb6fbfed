//! Batch Header record (type "5").

use crate::error::{Result, ValidationError};
use crate::format::{pad_to_width, zero_pad_num, Align};
use chrono::NaiveDate;
use serde::Serialize;

/// Opens a batch: identifies the originating company, the kind of entries
/// the batch carries, and when they settle.
///
/// Field layout (94 characters): record type 1, service class code 3,
/// company name 16, company discretionary data 20, company identification
/// 10, standard entry class code 3, company entry description 10, company
/// descriptive date 6, effective entry date 6, settlement date 3 (blank,
/// filled in by the ACH operator), originator status code 1, ODFI
/// identification 8, batch number 7.
#[derive(Debug, Clone, Serialize)]
pub struct BatchHeader {
    record_type: String,
    service_class_code: String,
    company_name: String,
    company_discretionary_data: String,
    company_identification: String,
    standard_entry_class_code: String,
    company_entry_description: String,
    company_descriptive_date: String,
    effective_entry_date: String,
    settlement_date: String,
    originator_status_code: String,
    odfi_identification: String,
    batch_number: String,
}

impl BatchHeader {
    pub fn new() -> Self {
        BatchHeader {
            record_type: "5".to_string(),
            service_class_code: pad_to_width("", 3, Align::Left),
            company_name: pad_to_width("", 16, Align::Left),
            company_discretionary_data: pad_to_width("", 20, Align::Left),
            company_identification: pad_to_width("", 10, Align::Left),
            standard_entry_class_code: pad_to_width("", 3, Align::Left),
            company_entry_description: pad_to_width("", 10, Align::Left),
            company_descriptive_date: pad_to_width("", 6, Align::Left),
            effective_entry_date: pad_to_width("", 6, Align::Left),
            settlement_date: pad_to_width("", 3, Align::Left),
            originator_status_code: "1".to_string(),
            odfi_identification: pad_to_width("", 8, Align::Left),
            batch_number: zero_pad_num(0, 7),
        }
    }

    /// Sets the service class code: 200 (mixed debits and credits),
    /// 220 (credits only), or 225 (debits only).
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

    /// Sets the company name, upper-cased.
    /// Names longer than 16 characters are truncated.
    pub fn set_company_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(ValidationError::new("CompanyName", "cannot be empty"));
        }

        self.company_name = pad_to_width(&name.to_uppercase(), 16, Align::Left);
        Ok(())
    }

    /// Sets the optional company discretionary data, upper-cased.
    /// Values longer than 20 characters are truncated.
    pub fn set_company_discretionary_data(&mut self, data: &str) {
        self.company_discretionary_data = pad_to_width(&data.to_uppercase(), 20, Align::Left);
    }

    /// Restores the company discretionary data to the default blank value.
    pub fn reset_company_discretionary_data(&mut self) {
        self.company_discretionary_data = pad_to_width("", 20, Align::Left);
    }

    /// Sets the company identification (tax ID or bank-assigned ID).
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

    /// Sets the standard entry class code: PPD (consumer) or CCD (corporate).
    pub fn set_standard_entry_class_code(&mut self, code: &str) -> Result<()> {
        if code != "PPD" && code != "CCD" {
            return Err(ValidationError::new(
                "StandardEntryClassCode",
                "must be PPD or CCD",
            ));
        }

        self.standard_entry_class_code = code.to_string();
        Ok(())
    }

    /// Sets the company entry description ("PAYROLL", "GAS BILL", ...),
    /// upper-cased.
    pub fn set_company_entry_description(&mut self, description: &str) -> Result<()> {
        if description.is_empty() {
            return Err(ValidationError::new(
                "CompanyEntryDescription",
                "cannot be empty",
            ));
        }
        if description.len() > 10 {
            return Err(ValidationError::new(
                "CompanyEntryDescription",
                "must be 10 characters or less",
            ));
        }

        self.company_entry_description = pad_to_width(&description.to_uppercase(), 10, Align::Left);
        Ok(())
    }

    /// Sets the optional company descriptive date, formatted YYMMDD.
    pub fn set_company_descriptive_date(&mut self, date: NaiveDate) {
        self.company_descriptive_date = date.format("%y%m%d").to_string();
    }

    /// Restores the company descriptive date to the default blank value.
    pub fn reset_company_descriptive_date(&mut self) {
        self.company_descriptive_date = pad_to_width("", 6, Align::Left);
    }

    /// Sets the effective entry date (requested settlement date), YYMMDD.
    pub fn set_effective_entry_date(&mut self, date: NaiveDate) {
        self.effective_entry_date = date.format("%y%m%d").to_string();
    }

    /// Restores the settlement date to blanks. The field belongs to the ACH
    /// operator; originators always transmit it blank.
    pub fn reset_settlement_date(&mut self) {
        self.settlement_date = pad_to_width("", 3, Align::Left);
    }

    /// Sets the originator status code. Must be exactly 1 character
    /// ("1" for an ODFI-originated batch).
    pub fn set_originator_status_code(&mut self, code: &str) -> Result<()> {
        if code.len() != 1 {
            return Err(ValidationError::new(
                "OriginatorStatusCode",
                "must be 1 character",
            ));
        }

        self.originator_status_code = code.to_string();
        Ok(())
    }

    /// Restores the originator status code to the default "1".
    pub fn reset_originator_status_code(&mut self) {
        self.originator_status_code = "1".to_string();
    }

    /// Sets the ODFI identification: the first 8 digits of the originating
    /// bank's routing number. Exact length, not case-mapped.
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

    pub fn service_class_code(&self) -> &str {
        &self.service_class_code
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_discretionary_data(&self) -> &str {
        &self.company_discretionary_data
    }

    pub fn company_identification(&self) -> &str {
        &self.company_identification
    }

    pub fn standard_entry_class_code(&self) -> &str {
        &self.standard_entry_class_code
    }

    pub fn company_entry_description(&self) -> &str {
        &self.company_entry_description
    }

    pub fn company_descriptive_date(&self) -> &str {
        &self.company_descriptive_date
    }

    pub fn effective_entry_date(&self) -> &str {
        &self.effective_entry_date
    }

    pub fn originator_status_code(&self) -> &str {
        &self.originator_status_code
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
            &self.company_name,
            &self.company_discretionary_data,
            &self.company_identification,
            &self.standard_entry_class_code,
            &self.company_entry_description,
            &self.company_descriptive_date,
            &self.effective_entry_date,
            &self.settlement_date,
            &self.originator_status_code,
            &self.odfi_identification,
            &self.batch_number,
        ]
        .concat();

        debug_assert_eq!(line.len(), super::RECORD_WIDTH);
        line
    }
}

impl Default for BatchHeader {
    fn default() -> Self {
        Self::new()
    }
}
