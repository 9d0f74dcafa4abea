//! Per-browser-session state
//!
//! Everything a visitor changes lives here and nowhere else. Handlers take a
//! context, apply one transition and hand it back to the store.

use serde::{Deserialize, Serialize};

use super::alarm::{seed_alarms, Alarm};
use super::chat::ChatLog;
use super::presentation::SimulationReport;
use super::settings::{Settings, SettingsForm};
use super::simulation::{SimulationForm, SimulationInput};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub chat: ChatLog,
    /// Current simulator form values
    pub simulation_form: SimulationInput,
    /// Result of the last "Simular" click, cleared by a form reset
    pub last_report: Option<SimulationReport>,
    pub alarms: Vec<Alarm>,
    pub settings: Settings,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            chat: ChatLog::new(),
            simulation_form: SimulationInput::initial(),
            last_report: None,
            alarms: seed_alarms(),
            settings: Settings::default(),
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the form, score it and keep the report for re-rendering
    pub fn simulate(&mut self, form: &SimulationForm) -> &SimulationReport {
        let input = SimulationInput::from_form(form);
        self.simulation_form = input.clone();
        self.last_report.insert(SimulationReport::assemble(input))
    }

    /// "Nova Simulação": restore form defaults and drop the last result
    pub fn reset_simulation(&mut self) {
        self.simulation_form = SimulationInput::initial();
        self.last_report = None;
    }

    /// Returns the number of appended chat entries
    pub fn send_chat(&mut self, message: &str) -> usize {
        self.chat.submit(message)
    }

    pub fn add_alarm(&mut self, alarm: Alarm) {
        self.alarms.push(alarm);
    }

    pub fn save_settings(&mut self, form: &SettingsForm) {
        self.settings = Settings::from_form(form);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::alarm::AlarmKind;
    use crate::models::catalog::{Climate, Crop};

    #[test]
    fn fresh_session() {
        let session = SessionContext::new();
        assert!(session.chat.is_empty());
        assert!(session.last_report.is_none());
        assert_eq!(session.alarms.len(), 5);
        assert_eq!(session.simulation_form, SimulationInput::initial());
    }

    #[test]
    fn simulate_then_reset() {
        let mut session = SessionContext::new();
        let form = SimulationForm {
            cultura: Some("cana".into()),
            clima: Some("chuva".into()),
            praticas: vec!["irrigacao".into(), "cobertura".into(), "rotacao".into()],
            ..Default::default()
        };

        let score = session.simulate(&form).score;
        assert_eq!(score, 100);
        assert_eq!(session.simulation_form.crop, Some(Crop::SugarCane));
        assert_eq!(session.simulation_form.climate, Some(Climate::HeavyRain));

        session.reset_simulation();
        assert!(session.last_report.is_none());
        assert_eq!(session.simulation_form.crop, Some(Crop::Corn));
    }

    #[test]
    fn chat_and_alarms_accumulate() {
        let mut session = SessionContext::new();
        assert_eq!(session.send_chat("oi"), 2);
        assert_eq!(session.send_chat(""), 0);
        session.add_alarm(Alarm::new("Geada", AlarmKind::Other));

        assert_eq!(session.chat.len(), 2);
        assert_eq!(session.alarms.len(), 6);
    }
}
