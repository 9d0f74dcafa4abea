//! User preferences edited on the settings page

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::types::Language;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    #[serde(rename = "claro")]
    Light,
    #[serde(rename = "escuro")]
    Dark,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Light, DisplayMode::Dark];

    pub fn value(&self) -> &'static str {
        match self {
            DisplayMode::Light => "claro",
            DisplayMode::Dark => "escuro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Light => "Claro",
            DisplayMode::Dark => "Escuro",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationChannel {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "som")]
    Sound,
    #[serde(rename = "ia")]
    Ai,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 3] = [
        NotificationChannel::Email,
        NotificationChannel::Sound,
        NotificationChannel::Ai,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Sound => "som",
            NotificationChannel::Ai => "ia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "Email",
            NotificationChannel::Sound => "Som",
            NotificationChannel::Ai => "IA",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|channel| channel.value() == value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum OfflineFeature {
    #[serde(rename = "ver_simulacoes")]
    ViewSimulations,
    #[serde(rename = "exportar_pdf")]
    ExportPdf,
    #[serde(rename = "guia_boas_praticas")]
    PracticesGuide,
}

impl OfflineFeature {
    pub const ALL: [OfflineFeature; 3] = [
        OfflineFeature::ViewSimulations,
        OfflineFeature::ExportPdf,
        OfflineFeature::PracticesGuide,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            OfflineFeature::ViewSimulations => "ver_simulacoes",
            OfflineFeature::ExportPdf => "exportar_pdf",
            OfflineFeature::PracticesGuide => "guia_boas_praticas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OfflineFeature::ViewSimulations => "Visualizar últimas simulações salvas no navegador",
            OfflineFeature::ExportPdf => "Exportar dados simulados em PDF",
            OfflineFeature::PracticesGuide => "Acessar guia rápido de boas práticas agrícolas",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.value() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub display_mode: DisplayMode,
    pub notifications: BTreeSet<NotificationChannel>,
    pub language: Language,
    pub auto_update: bool,
    pub offline_features: BTreeSet<OfflineFeature>,
    pub auto_offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Light,
            notifications: BTreeSet::from([NotificationChannel::Email, NotificationChannel::Ai]),
            language: Language::Portuguese,
            auto_update: true,
            offline_features: BTreeSet::from([
                OfflineFeature::ViewSimulations,
                OfflineFeature::PracticesGuide,
            ]),
            auto_offline: false,
        }
    }
}

/// Raw settings form; checklists arrive as repeated keys
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub modo: Option<String>,
    #[serde(default)]
    pub notificacoes: Vec<String>,
    #[serde(default)]
    pub idioma: Option<String>,
    #[serde(default)]
    pub atualizacao: Option<String>,
    #[serde(default)]
    pub offline: Vec<String>,
    #[serde(default)]
    pub auto_offline: Option<String>,
}

impl Settings {
    /// Apply a submitted form; unknown values keep the defaults
    pub fn from_form(form: &SettingsForm) -> Self {
        let defaults = Settings::default();

        Self {
            display_mode: form
                .modo
                .as_deref()
                .and_then(DisplayMode::from_value)
                .unwrap_or(defaults.display_mode),
            notifications: form
                .notificacoes
                .iter()
                .filter_map(|v| NotificationChannel::from_value(v))
                .collect(),
            language: form
                .idioma
                .as_deref()
                .and_then(Language::from_code)
                .unwrap_or(defaults.language),
            auto_update: match form.atualizacao.as_deref() {
                Some("nao") => false,
                Some("sim") => true,
                _ => defaults.auto_update,
            },
            offline_features: form
                .offline
                .iter()
                .filter_map(|v| OfflineFeature::from_value(v))
                .collect(),
            auto_offline: form.auto_offline.as_deref() == Some("auto_offline"),
        }
    }
}
