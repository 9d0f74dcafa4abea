//! Natural disaster alarms

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_not_blank;

/// Alarm category; the wire value doubles as the banner colour
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AlarmKind {
    #[serde(rename = "danger")]
    Fire,
    #[serde(rename = "primary")]
    Flood,
    #[serde(rename = "warning")]
    StrongWind,
    #[default]
    #[serde(rename = "secondary")]
    Other,
}

impl AlarmKind {
    pub const ALL: [AlarmKind; 4] = [
        AlarmKind::Fire,
        AlarmKind::Flood,
        AlarmKind::StrongWind,
        AlarmKind::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            AlarmKind::Fire => "danger",
            AlarmKind::Flood => "primary",
            AlarmKind::StrongWind => "warning",
            AlarmKind::Other => "secondary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlarmKind::Fire => "Incêndio",
            AlarmKind::Flood => "Alagamento",
            AlarmKind::StrongWind => "Vento Forte",
            AlarmKind::Other => "Outro",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alarm {
    pub text: String,
    pub kind: AlarmKind,
}

impl Alarm {
    pub fn new(text: impl Into<String>, kind: AlarmKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Alarms every session starts with
pub fn seed_alarms() -> Vec<Alarm> {
    vec![
        Alarm::new("🔥 Incêndio detectado na zona norte!", AlarmKind::Fire),
        Alarm::new("🌊 Risco de alagamento na zona sul!", AlarmKind::Flood),
        Alarm::new("🌀 Vento forte em direção às plantações!", AlarmKind::StrongWind),
        Alarm::new("⚠️ Sensores inativos na área oeste.", AlarmKind::Other),
        Alarm::new("🌪️ Possível formação de ciclone na região central.", AlarmKind::Fire),
    ]
}

/// "Adicionar Novo Alarme" form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewAlarmInput {
    #[validate(
        length(min = 1, max = 200, message = "Descrição do alarme deve ter entre 1 e 200 caracteres"),
        custom = "validate_not_blank"
    )]
    #[serde(default)]
    pub texto: String,
    #[serde(default)]
    pub tipo: Option<String>,
}

impl NewAlarmInput {
    /// Build the alarm; unknown or missing kinds become [`AlarmKind::Other`]
    pub fn into_alarm(self) -> Alarm {
        let kind = self
            .tipo
            .as_deref()
            .and_then(AlarmKind::from_value)
            .unwrap_or_default();
        Alarm::new(self.texto.trim(), kind)
    }
}
