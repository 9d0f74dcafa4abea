//! Simulator page handlers
//!
//! Form posts change the session and redirect back to the page, so a reload
//! never re-submits.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Json,
};
use axum_extra::extract::Form;
use serde::Deserialize;
use shared::{
    Catalog, Page, SimulationForm, SimulationInput, SimulationReport, SimulatorTab, TabSelection,
};

use crate::error::AppResult;
use crate::middleware::CurrentSession;
use crate::views::{
    render, Layout, SimulationFormView, SimulationTabView, SimulatorPage, SimulatorTabBody,
    SustainabilityView,
};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SimulatorQuery {
    pub aba: Option<String>,
}

/// Render the simulator with the requested tab
pub async fn simulator_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Query(query): Query<SimulatorQuery>,
) -> AppResult<Html<String>> {
    let session = state.sessions.load(session_id).await;
    let selection = TabSelection::resolve(query.aba.as_deref());

    let body = match selection.tab() {
        Some(SimulatorTab::Simulation) => SimulatorTabBody::Simulation(SimulationTabView {
            form: SimulationFormView::new(&session.simulation_form),
            report: session.last_report.clone(),
        }),
        Some(SimulatorTab::Sustainability) => {
            SimulatorTabBody::Sustainability(SustainabilityView::new())
        }
        Some(SimulatorTab::Assistant) => {
            SimulatorTabBody::Assistant(session.chat.messages().to_vec())
        }
        None => {
            tracing::debug!(aba = ?query.aba, "Unknown simulator tab");
            SimulatorTabBody::Unknown
        }
    };

    render(&SimulatorPage {
        layout: Layout::new(Page::Simulator, &session.settings),
        tabs: SimulatorPage::tab_links(selection),
        body,
    })
}

/// "Simular": score the submitted form and keep the result in the session
pub async fn run_simulation(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Form(form): Form<SimulationForm>,
) -> Redirect {
    let score = state
        .sessions
        .update(session_id, |session| session.simulate(&form).score)
        .await;
    tracing::info!(session = %session_id, score, "Simulation evaluated");

    Redirect::to(&tab_path(SimulatorTab::Simulation))
}

/// "Nova Simulação": reset the form and hide the result
pub async fn reset_simulation(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Redirect {
    state
        .sessions
        .update(session_id, |session| session.reset_simulation())
        .await;

    Redirect::to(&tab_path(SimulatorTab::Simulation))
}

pub(crate) fn tab_path(tab: SimulatorTab) -> String {
    format!("{}?aba={}", Page::Simulator.path(), tab.key())
}

/// All option lists of the simulator form
pub async fn get_catalog() -> Json<Catalog> {
    Json(Catalog::new())
}

/// Stateless evaluation of a raw form
pub async fn create_simulation(Json(form): Json<SimulationForm>) -> Json<SimulationReport> {
    let report = SimulationReport::assemble(SimulationInput::from_form(&form));
    tracing::debug!(score = report.score, "API simulation evaluated");
    Json(report)
}
