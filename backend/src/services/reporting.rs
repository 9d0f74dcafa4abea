//! Saved report listing and CSV export

use chrono::NaiveDate;
use serde::Serialize;
use shared::{saved_reports, ReportRecord, ReportType};

use crate::error::{AppError, AppResult};

/// Reporting service
#[derive(Clone, Default)]
pub struct ReportingService;

impl ReportingService {
    pub fn new() -> Self {
        Self
    }

    pub fn list_saved_reports(&self) -> Vec<ReportRecord> {
        saved_reports()
    }

    /// Saved reports of one type dated on or before the reference date
    pub fn generate(&self, report_type: ReportType, reference: NaiveDate) -> Vec<ReportRecord> {
        saved_reports()
            .into_iter()
            .filter(|r| r.report_type == report_type && r.date <= reference)
            .collect()
    }

    /// Export any serializable rows as CSV with a header line
    pub fn export_to_csv<T: Serialize>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}
