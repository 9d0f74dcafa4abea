//! Server-rendered pages
//!
//! Template structs carry display-ready data only: every selection flag,
//! label and chart figure is computed here, templates just print.

use askama::Template;
use axum::response::Html;
use shared::{
    options, sustainability, Alarm, AlarmKind, CatalogOption, Chart, ChatMessage, Climate, Crop,
    DisplayMode, Language, NotificationChannel, OfflineFeature, Page, PestDiagnosis, Phase,
    Practice, ReportRecord, ReportType, Season, Settings, SimulationInput, SimulationReport,
    SimulatorTab, SoilType, TabSelection, UploadedImage, NAVBAR_NOTIFICATIONS,
};

use crate::error::AppResult;

/// Render a template into an HTML response
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// Sidebar entry
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Chrome shared by every page: navbar, sidebar and heading
pub struct Layout {
    pub title: &'static str,
    pub nav: Vec<NavLink>,
    pub notifications: Vec<&'static str>,
    pub dark: bool,
}

impl Layout {
    pub fn new(page: Page, settings: &Settings) -> Self {
        Self {
            title: page.title(),
            nav: Page::ALL
                .into_iter()
                .map(|p| NavLink {
                    path: p.path(),
                    label: p.nav_label(),
                    active: p == page,
                })
                .collect(),
            notifications: NAVBAR_NOTIFICATIONS.to_vec(),
            dark: settings.display_mode == DisplayMode::Dark,
        }
    }
}

/// One option of a dropdown, radio group or checklist
pub struct FormChoice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl FormChoice {
    fn new(value: &str, label: &str, selected: bool) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            selected,
        }
    }
}

fn catalog_choices<T: CatalogOption + PartialEq>(current: Option<T>) -> Vec<FormChoice> {
    T::ALL
        .iter()
        .map(|option| FormChoice::new(option.value(), option.label(), current == Some(*option)))
        .collect()
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardPage {
    pub layout: Layout,
    pub charts: Vec<Chart>,
}

// ============================================================================
// Simulator
// ============================================================================

pub struct TabLink {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Simulator form state ready for rendering
pub struct SimulationFormView {
    pub crops: Vec<FormChoice>,
    pub phases: Vec<FormChoice>,
    pub seasons: Vec<FormChoice>,
    pub climates: Vec<FormChoice>,
    pub soils: Vec<FormChoice>,
    pub practices: Vec<FormChoice>,
}

impl SimulationFormView {
    pub fn new(input: &SimulationInput) -> Self {
        Self {
            crops: catalog_choices::<Crop>(input.crop),
            phases: catalog_choices::<Phase>(input.phase),
            seasons: catalog_choices::<Season>(input.season),
            climates: catalog_choices::<Climate>(input.climate),
            soils: catalog_choices::<SoilType>(input.soil_type),
            practices: options::<Practice>()
                .into_iter()
                .map(|entry| {
                    let selected = Practice::parse(&entry.value)
                        .map(|p| input.has_practice(p))
                        .unwrap_or(false);
                    FormChoice::new(&entry.value, &entry.label, selected)
                })
                .collect(),
        }
    }
}

/// Static "Análise de Sustentabilidade" tab
pub struct SustainabilityView {
    pub intro: &'static str,
    pub chart: Chart,
    pub impact: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub ranking: &'static str,
}

impl SustainabilityView {
    pub fn new() -> Self {
        Self {
            intro: sustainability::INTRO,
            chart: sustainability::indicators_chart(),
            impact: sustainability::ENVIRONMENTAL_IMPACT.to_vec(),
            recommendations: sustainability::RECOMMENDATIONS.to_vec(),
            ranking: sustainability::RANKING,
        }
    }
}

impl Default for SustainabilityView {
    fn default() -> Self {
        Self::new()
    }
}

/// "Simulação" tab: the form plus the last result, if any
pub struct SimulationTabView {
    pub form: SimulationFormView,
    pub report: Option<SimulationReport>,
}

/// Body of the currently selected simulator tab
pub enum SimulatorTabBody {
    Simulation(SimulationTabView),
    Sustainability(SustainabilityView),
    Assistant(Vec<ChatMessage>),
    Unknown,
}

#[derive(Template)]
#[template(path = "pages/simulator.html")]
pub struct SimulatorPage {
    pub layout: Layout,
    pub tabs: Vec<TabLink>,
    pub body: SimulatorTabBody,
}

impl SimulatorPage {
    pub fn tab_links(selection: TabSelection) -> Vec<TabLink> {
        SimulatorTab::ALL
            .into_iter()
            .map(|tab| TabLink {
                key: tab.key(),
                label: tab.label(),
                active: selection.tab() == Some(tab),
            })
            .collect()
    }
}

// ============================================================================
// Pest identification
// ============================================================================

pub struct DiagnosisRow {
    pub date: String,
    pub pest: String,
}

impl From<&PestDiagnosis> for DiagnosisRow {
    fn from(diagnosis: &PestDiagnosis) -> Self {
        Self {
            date: diagnosis.date.format("%d/%m/%Y").to_string(),
            pest: diagnosis.pest.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/identification.html")]
pub struct IdentificationPage {
    pub layout: Layout,
    pub upload: Option<UploadedImage>,
    pub confidence: &'static str,
    pub actions: Vec<&'static str>,
    pub history: Vec<DiagnosisRow>,
}

// ============================================================================
// Alarms
// ============================================================================

pub struct AlarmRow {
    pub text: String,
    pub color: &'static str,
}

impl From<&Alarm> for AlarmRow {
    fn from(alarm: &Alarm) -> Self {
        Self {
            text: alarm.text.clone(),
            color: alarm.kind.value(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/alarms.html")]
pub struct AlarmsPage {
    pub layout: Layout,
    pub kinds: Vec<FormChoice>,
    pub alarms: Vec<AlarmRow>,
    pub error: Option<String>,
}

impl AlarmsPage {
    pub fn kind_choices() -> Vec<FormChoice> {
        AlarmKind::ALL
            .into_iter()
            .map(|kind| FormChoice::new(kind.value(), kind.label(), false))
            .collect()
    }
}

// ============================================================================
// Reports
// ============================================================================

pub struct ReportRow {
    pub id: u32,
    pub kind: &'static str,
    pub date: String,
}

impl From<&ReportRecord> for ReportRow {
    fn from(report: &ReportRecord) -> Self {
        Self {
            id: report.id,
            kind: report.report_type.label(),
            date: report.date.to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/reports.html")]
pub struct ReportsPage {
    pub layout: Layout,
    pub types: Vec<FormChoice>,
    pub reference_date: String,
    pub generated: Option<String>,
    pub reports: Vec<ReportRow>,
}

impl ReportsPage {
    pub fn type_choices(selected: ReportType) -> Vec<FormChoice> {
        ReportType::ALL
            .into_iter()
            .map(|kind| FormChoice::new(kind.value(), kind.label(), kind == selected))
            .collect()
    }
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Template)]
#[template(path = "pages/settings.html")]
pub struct SettingsPage {
    pub layout: Layout,
    pub display_modes: Vec<FormChoice>,
    pub notifications: Vec<FormChoice>,
    pub languages: Vec<FormChoice>,
    pub auto_update: bool,
    pub offline_features: Vec<FormChoice>,
    pub auto_offline: bool,
    pub saved: bool,
}

impl SettingsPage {
    pub fn new(layout: Layout, settings: &Settings, saved: bool) -> Self {
        Self {
            layout,
            display_modes: DisplayMode::ALL
                .into_iter()
                .map(|m| FormChoice::new(m.value(), m.label(), m == settings.display_mode))
                .collect(),
            notifications: NotificationChannel::ALL
                .into_iter()
                .map(|c| FormChoice::new(c.value(), c.label(), settings.notifications.contains(&c)))
                .collect(),
            languages: Language::ALL
                .into_iter()
                .map(|l| FormChoice::new(l.code(), l.label(), l == settings.language))
                .collect(),
            auto_update: settings.auto_update,
            offline_features: OfflineFeature::ALL
                .into_iter()
                .map(|f| FormChoice::new(f.value(), f.label(), settings.offline_features.contains(&f)))
                .collect(),
            auto_offline: settings.auto_offline,
            saved,
        }
    }
}
