//! Sidebar navigation and page routing

use serde::{Deserialize, Serialize};

/// Top-level pages reachable from the sidebar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Dashboard,
    Simulator,
    PestIdentification,
    Alarms,
    Reports,
    Settings,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Simulator,
        Page::PestIdentification,
        Page::Alarms,
        Page::Reports,
        Page::Settings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Simulator => "/simulador",
            Page::PestIdentification => "/identificacao",
            Page::Alarms => "/alarmes",
            Page::Reports => "/relatorios",
            Page::Settings => "/configuracoes",
        }
    }

    /// Sidebar link text
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Simulator => "Simulador IA",
            Page::PestIdentification => "Identificação de Pragas",
            Page::Alarms => "Alarmes",
            Page::Reports => "Relatórios",
            Page::Settings => "Configurações",
        }
    }

    /// Heading of the page body
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard de Monitoramento Agrícola",
            Page::Simulator => "Simulador Inteligente (IA)",
            Page::PestIdentification => "Identificação de Pragas e Doenças",
            Page::Alarms => "Alarmes de Desastres Naturais",
            Page::Reports => "Relatórios",
            Page::Settings => "Configurações",
        }
    }

    /// Exact path match; `None` for anything that is not a page path
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}

/// How a navigation key was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The path names a page
    Page(Page),
    /// Unknown path, shown as the dashboard
    Fallback,
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        match Page::from_path(path) {
            Some(page) => Route::Page(page),
            None => Route::Fallback,
        }
    }

    /// Page body rendered for this route
    pub fn page(&self) -> Page {
        match self {
            Route::Page(page) => *page,
            Route::Fallback => Page::Dashboard,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Route::Fallback)
    }
}

/// Tabs of the simulator page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SimulatorTab {
    #[serde(rename = "simulacao")]
    Simulation,
    #[serde(rename = "sustentabilidade")]
    Sustainability,
    #[serde(rename = "assistente")]
    Assistant,
}

impl SimulatorTab {
    pub const ALL: [SimulatorTab; 3] = [
        SimulatorTab::Simulation,
        SimulatorTab::Sustainability,
        SimulatorTab::Assistant,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SimulatorTab::Simulation => "simulacao",
            SimulatorTab::Sustainability => "sustentabilidade",
            SimulatorTab::Assistant => "assistente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimulatorTab::Simulation => "Simulação",
            SimulatorTab::Sustainability => "Análise de Sustentabilidade",
            SimulatorTab::Assistant => "Assistente IA",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Tab selection of the simulator page; an absent key opens the first tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSelection {
    Tab(SimulatorTab),
    Unknown,
}

impl TabSelection {
    pub fn resolve(key: Option<&str>) -> Self {
        match key {
            None => TabSelection::Tab(SimulatorTab::Simulation),
            Some(key) => SimulatorTab::from_key(key)
                .map(TabSelection::Tab)
                .unwrap_or(TabSelection::Unknown),
        }
    }

    pub fn tab(&self) -> Option<SimulatorTab> {
        match self {
            TabSelection::Tab(tab) => Some(*tab),
            TabSelection::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_path_round_trips() {
        for page in Page::ALL {
            assert_eq!(Route::resolve(page.path()), Route::Page(page));
        }
    }

    #[test]
    fn reports_path_resolves() {
        assert_eq!(Route::resolve("/relatorios").page(), Page::Reports);
        assert_eq!(Route::resolve("/relatorios/").page(), Page::Reports);
    }

    #[test]
    fn unknown_path_falls_back_to_dashboard() {
        let route = Route::resolve("/unknown");
        assert!(route.is_fallback());
        assert_eq!(route.page(), Page::Dashboard);
    }

    #[test]
    fn root_is_the_dashboard_not_a_fallback() {
        assert_eq!(Route::resolve("/"), Route::Page(Page::Dashboard));
        assert_eq!(Route::resolve(""), Route::Page(Page::Dashboard));
    }

    #[test]
    fn tab_selection() {
        assert_eq!(TabSelection::resolve(None).tab(), Some(SimulatorTab::Simulation));
        assert_eq!(TabSelection::resolve(Some("assistente")).tab(), Some(SimulatorTab::Assistant));
        assert_eq!(TabSelection::resolve(Some("xyz")), TabSelection::Unknown);
    }
}
