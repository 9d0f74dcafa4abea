//! Common types used across the platform

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Supported interface languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Portuguese, Language::English, Language::Spanish];

    pub fn code(&self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Portuguese => "Português",
            Language::English => "Inglês",
            Language::Spanish => "Espanhol",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Chart trace type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
}

/// X axis of a chart: category labels or numeric values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChartAxis {
    Labels(Vec<String>),
    Values(Vec<f64>),
}

impl ChartAxis {
    /// `0, 1, .. n-1`, the sample index axis used by the dashboard
    pub fn index(len: usize) -> Self {
        ChartAxis::Values((0..len).map(|i| i as f64).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            ChartAxis::Labels(labels) => labels.len(),
            ChartAxis::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single-trace chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub x: ChartAxis,
    pub y: Vec<f64>,
    pub height: Option<u32>,
}

impl Chart {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: ChartKind, x: ChartAxis, y: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            x,
            y,
            height: None,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Plotly figure (`{data, layout}`) for client-side rendering
    pub fn figure(&self) -> Value {
        let trace = match self.kind {
            ChartKind::Line => json!({ "x": self.x, "y": self.y, "type": "scatter", "mode": "lines" }),
            ChartKind::Scatter => json!({ "x": self.x, "y": self.y, "type": "scatter", "mode": "markers" }),
            ChartKind::Bar => json!({ "x": self.x, "y": self.y, "type": "bar" }),
        };

        let mut layout = json!({ "title": self.title });
        if let Some(height) = self.height {
            layout["height"] = json!(height);
        }

        json!({ "data": [trace], "layout": layout })
    }

    pub fn figure_json(&self) -> String {
        self.figure().to_string()
    }
}

/// A label/value line of a textual recap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecapLine {
    pub label: String,
    pub value: String,
}

impl RecapLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
