//! Reports page and export handlers

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use shared::{Page, ReportRecord, ReportType};

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::services::ReportingService;
use crate::views::{render, Layout, ReportRow, ReportsPage};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub tipo: Option<String>,
    pub data: Option<String>, // YYYY-MM-DD
}

/// Reports page; submitting the form narrows the table
pub async fn reports_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Query(query): Query<ReportQuery>,
) -> AppResult<Html<String>> {
    let session = state.sessions.load(session_id).await;
    let service = ReportingService::new();

    let reference = query
        .data
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Local::now().date_naive());
    let selected = query.tipo.as_deref().and_then(ReportType::from_value);

    let (reports, generated) = match selected {
        Some(report_type) => {
            let reports = service.generate(report_type, reference);
            let summary = format!(
                "Relatório {} gerado para {}: {} registro(s).",
                report_type.label(),
                reference.format("%d/%m/%Y"),
                reports.len()
            );
            (reports, Some(summary))
        }
        None => (service.list_saved_reports(), None),
    };

    render(&ReportsPage {
        layout: Layout::new(Page::Reports, &session.settings),
        types: ReportsPage::type_choices(selected.unwrap_or(ReportType::Daily)),
        reference_date: reference.format("%Y-%m-%d").to_string(),
        generated,
        reports: reports.iter().map(ReportRow::from).collect(),
    })
}

/// Saved reports as JSON
pub async fn list_reports() -> Json<Vec<ReportRecord>> {
    Json(ReportingService::new().list_saved_reports())
}

/// Saved reports as a CSV download
pub async fn export_reports_csv() -> AppResult<impl IntoResponse> {
    let reports = ReportingService::new().list_saved_reports();
    let csv = ReportingService::export_to_csv(&reports)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"relatorios.csv\""),
        ],
        csv,
    ))
}
