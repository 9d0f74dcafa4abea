//! Sustainability simulation: scoring, risk messages and suggestions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::{CatalogOption, Climate, Crop, Phase, Practice, Season, SoilType};

/// Score every simulation starts from, also the "without sustainability" bar
pub const BASE_SCORE: u32 = 50;

/// Upper end of the score scale shown to the user
pub const MAX_SCORE: u32 = 100;

/// Raw simulator form as submitted by the browser or an API client
///
/// Every field is optional and unparsed; unknown values are dropped when the
/// form is captured into a [`SimulationInput`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationForm {
    #[serde(default)]
    pub cultura: Option<String>,
    #[serde(default)]
    pub fase: Option<String>,
    #[serde(default)]
    pub sazonal: Option<String>,
    #[serde(default)]
    pub clima: Option<String>,
    #[serde(default)]
    pub solo: Option<String>,
    #[serde(default)]
    pub praticas: Vec<String>,
}

/// Simulator selections captured for one evaluation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationInput {
    pub crop: Option<Crop>,
    pub phase: Option<Phase>,
    pub season: Option<Season>,
    pub climate: Option<Climate>,
    pub soil_type: Option<SoilType>,
    pub practices: BTreeSet<Practice>,
}

impl SimulationInput {
    /// Form state after "Nova Simulação": milho, plantio, seco, irrigação
    pub fn initial() -> Self {
        Self {
            crop: Some(Crop::Corn),
            phase: Some(Phase::Planting),
            season: None,
            climate: Some(Climate::Dry),
            soil_type: None,
            practices: BTreeSet::from([Practice::Irrigation]),
        }
    }

    /// Capture a raw form, ignoring unknown values and duplicates
    pub fn from_form(form: &SimulationForm) -> Self {
        Self {
            crop: form.cultura.as_deref().and_then(Crop::parse),
            phase: form.fase.as_deref().and_then(Phase::parse),
            season: form.sazonal.as_deref().and_then(Season::parse),
            climate: form.clima.as_deref().and_then(Climate::parse),
            soil_type: form.solo.as_deref().and_then(SoilType::parse),
            practices: form
                .praticas
                .iter()
                .filter_map(|value| Practice::parse(value))
                .collect(),
        }
    }

    /// Round-trip back into form values, used to pre-fill the simulator form
    pub fn to_form(&self) -> SimulationForm {
        SimulationForm {
            cultura: self.crop.map(|c| c.value().to_string()),
            fase: self.phase.map(|p| p.value().to_string()),
            sazonal: self.season.map(|s| s.value().to_string()),
            clima: self.climate.map(|c| c.value().to_string()),
            solo: self.soil_type.map(|s| s.value().to_string()),
            praticas: self.practices.iter().map(|p| p.value().to_string()).collect(),
        }
    }

    pub fn has_practice(&self, practice: Practice) -> bool {
        self.practices.contains(&practice)
    }
}

/// Risk warning keyed by the momentary climate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskMessage {
    WaterStress,
    Waterlogging,
    HeatStress,
    NormalConditions,
}

impl RiskMessage {
    pub fn for_climate(climate: Option<Climate>) -> Self {
        match climate {
            Some(Climate::Dry) => RiskMessage::WaterStress,
            Some(Climate::HeavyRain) => RiskMessage::Waterlogging,
            Some(Climate::Heat) => RiskMessage::HeatStress,
            None => RiskMessage::NormalConditions,
        }
    }

    pub fn message_pt(&self) -> &'static str {
        match self {
            RiskMessage::WaterStress => "⚠️ Risco de estresse hídrico devido à condição seca.",
            RiskMessage::Waterlogging => "⚠️ Risco de encharcamento e proliferação de fungos.",
            RiskMessage::HeatStress => "⚠️ Temperaturas elevadas podem afetar a fotossíntese.",
            RiskMessage::NormalConditions => "Condições climáticas normais.",
        }
    }

    pub fn message_en(&self) -> &'static str {
        match self {
            RiskMessage::WaterStress => "⚠️ Risk of water stress due to dry conditions.",
            RiskMessage::Waterlogging => "⚠️ Risk of waterlogging and fungal growth.",
            RiskMessage::HeatStress => "⚠️ High temperatures may impair photosynthesis.",
            RiskMessage::NormalConditions => "Normal climate conditions.",
        }
    }

    /// Whether the banner should be rendered as a warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, RiskMessage::NormalConditions)
    }
}

/// Outcome of the scoring function
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    pub risk: RiskMessage,
    pub score: u32,
}

/// Score a climate and practice set
///
/// Starts at [`BASE_SCORE`] and adds each adopted practice's bonus. Absent
/// climate yields the normal-conditions message. Total and pure.
pub fn evaluate<'a, I>(climate: Option<Climate>, practices: I) -> Evaluation
where
    I: IntoIterator<Item = &'a Practice>,
{
    let adopted: BTreeSet<Practice> = practices.into_iter().copied().collect();
    let score = BASE_SCORE + adopted.iter().map(Practice::bonus).sum::<u32>();

    Evaluation {
        risk: RiskMessage::for_climate(climate),
        score,
    }
}

/// Score raw form values; unknown climate and practice strings are ignored
pub fn evaluate_raw(climate: Option<&str>, practices: &[&str]) -> Evaluation {
    let practices: Vec<Practice> = practices.iter().filter_map(|p| Practice::parse(p)).collect();
    evaluate(climate.and_then(Climate::parse), &practices)
}

/// Advisory line shown under the simulation result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub message_pt: String,
    pub message_en: String,
}

const SUGGESTIONS: [(&str, &str); 3] = [
    (
        "💡 Evite irrigar entre 12h e 15h em dias muito quentes.",
        "💡 Avoid irrigating between 12:00 and 15:00 on very hot days.",
    ),
    (
        "💡 Utilize sensores de solo para adaptar a irrigação.",
        "💡 Use soil sensors to adapt irrigation.",
    ),
    (
        "💡 Considere adubação orgânica na fase de crescimento.",
        "💡 Consider organic fertilisation during the growth phase.",
    ),
];

/// Fixed advisory list; does not depend on the simulation input
pub fn suggestions() -> Vec<Suggestion> {
    SUGGESTIONS
        .iter()
        .map(|(pt, en)| Suggestion {
            message_pt: pt.to_string(),
            message_en: en.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_capture_drops_unknown_values() {
        let form = SimulationForm {
            cultura: Some("soja".into()),
            fase: Some("germinacao".into()),
            sazonal: None,
            clima: Some("neve".into()),
            solo: Some("misto".into()),
            praticas: vec!["rotacao".into(), "adubo".into(), "rotacao".into()],
        };
        let input = SimulationInput::from_form(&form);

        assert_eq!(input.crop, Some(Crop::Soy));
        assert_eq!(input.phase, None);
        assert_eq!(input.climate, None);
        assert_eq!(input.soil_type, Some(SoilType::Mixed));
        assert_eq!(input.practices.len(), 1);
        assert!(input.has_practice(Practice::Rotation));
    }

    #[test]
    fn initial_form_defaults() {
        let input = SimulationInput::initial();
        assert_eq!(input.crop, Some(Crop::Corn));
        assert_eq!(input.climate, Some(Climate::Dry));
        assert_eq!(input.soil_type, None);
        assert_eq!(input.practices, BTreeSet::from([Practice::Irrigation]));
    }

    #[test]
    fn to_form_round_trips() {
        let input = SimulationInput::initial();
        assert_eq!(SimulationInput::from_form(&input.to_form()), input);
    }

    #[test]
    fn duplicate_practices_count_once() {
        let eval = evaluate(None, &[Practice::Irrigation, Practice::Irrigation]);
        assert_eq!(eval.score, 70);
    }

    #[test]
    fn raw_evaluation_ignores_unknown_strings() {
        let eval = evaluate_raw(Some("granizo"), &["cobertura", "foo"]);
        assert_eq!(eval.risk, RiskMessage::NormalConditions);
        assert_eq!(eval.score, 65);
    }

    #[test]
    fn suggestions_are_fixed() {
        let list = suggestions();
        assert_eq!(list.len(), 3);
        assert!(list[0].message_pt.contains("12h e 15h"));
        assert_eq!(list, suggestions());
    }

    #[test]
    fn normal_conditions_is_not_a_warning() {
        assert!(!RiskMessage::NormalConditions.is_warning());
        assert!(RiskMessage::HeatStress.is_warning());
    }
}
