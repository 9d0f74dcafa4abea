//! Saved reports listed on the reports page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Report period
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportType {
    #[serde(rename = "diario")]
    Daily,
    #[serde(rename = "semanal")]
    Weekly,
    #[serde(rename = "mensal")]
    Monthly,
}

impl ReportType {
    pub const ALL: [ReportType; 3] = [ReportType::Daily, ReportType::Weekly, ReportType::Monthly];

    pub fn value(&self) -> &'static str {
        match self {
            ReportType::Daily => "diario",
            ReportType::Weekly => "semanal",
            ReportType::Monthly => "mensal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Daily => "Diário",
            ReportType::Weekly => "Semanal",
            ReportType::Monthly => "Mensal",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value.trim())
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub date: NaiveDate,
}

/// The fixed list of saved reports; never mutated
pub fn saved_reports() -> Vec<ReportRecord> {
    [
        (1, ReportType::Daily, (2025, 5, 27)),
        (2, ReportType::Weekly, (2025, 5, 20)),
        (3, ReportType::Monthly, (2025, 5, 1)),
        (4, ReportType::Daily, (2025, 5, 15)),
        (5, ReportType::Monthly, (2025, 4, 1)),
    ]
    .into_iter()
    .filter_map(|(id, report_type, (y, m, d))| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| ReportRecord {
            id,
            report_type,
            date,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_list_matches_dashboard() {
        let reports = saved_reports();
        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].id, 1);
        assert_eq!(reports[0].report_type, ReportType::Daily);
        assert_eq!(reports[0].date.to_string(), "2025-05-27");
        assert_eq!(reports[4].report_type, ReportType::Monthly);
    }

    #[test]
    fn serializes_type_field() {
        let json = serde_json::to_value(&saved_reports()[1]).unwrap();
        assert_eq!(json["type"], "semanal");
        assert_eq!(json["date"], "2025-05-20");
    }
}
