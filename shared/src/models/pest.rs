//! Pest and disease identification page data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Past diagnosis shown in the history table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PestDiagnosis {
    pub date: NaiveDate,
    pub pest: String,
}

pub fn diagnosis_history() -> Vec<PestDiagnosis> {
    [
        ((2025, 5, 27), "Lagarta-do-cartucho"),
        ((2025, 5, 26), "Pulgão-verde"),
        ((2025, 5, 25), "Mosca branca"),
    ]
    .into_iter()
    .filter_map(|((y, m, d), pest)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| PestDiagnosis {
            date,
            pest: pest.to_string(),
        })
    })
    .collect()
}

/// Confidence label displayed for every identification
pub const IDENTIFICATION_CONFIDENCE: &str = "Alta";

pub fn suggested_actions() -> Vec<&'static str> {
    vec![
        "Aplicar inseticida natural nas próximas 48 horas.",
        "Monitorar novas áreas próximas.",
        "Evitar irrigação nas áreas afetadas temporariamente.",
    ]
}

/// Image echoed back after upload; nothing is decoded or stored
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedImage {
    pub filename: String,
    pub content_type: String,
    /// `data:` URI of the original bytes
    pub data_uri: String,
}

impl UploadedImage {
    /// Wrap already base64-encoded bytes
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, base64_body: &str) -> Self {
        let content_type = content_type.into();
        let data_uri = format!("data:{};base64,{}", content_type, base64_body);
        Self {
            filename: filename.into(),
            content_type,
            data_uri,
        }
    }
}
