//! Display payload for a simulation result

use serde::{Deserialize, Serialize};

use super::catalog::CatalogOption;
use super::simulation::{evaluate, suggestions, RiskMessage, SimulationInput, Suggestion, BASE_SCORE};
use crate::types::{Chart, ChartAxis, ChartKind, RecapLine};

/// Everything the simulator renders after "Simular"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub risk: RiskMessage,
    pub risk_message_pt: String,
    pub risk_message_en: String,
    pub score: u32,
    pub score_label: String,
    pub comparison: Chart,
    pub suggestions: Vec<Suggestion>,
    pub recap: Vec<RecapLine>,
    pub input: SimulationInput,
}

impl SimulationReport {
    /// Run the scorer and suggestion generator and assemble the display
    pub fn assemble(input: SimulationInput) -> Self {
        let evaluation = evaluate(input.climate, &input.practices);
        let score = evaluation.score;

        let comparison = Chart::new(
            "comparacao-cenarios",
            "Comparação de Cenários",
            ChartKind::Bar,
            ChartAxis::Labels(vec![
                "Sem Sustentabilidade".to_string(),
                "Com Sustentabilidade".to_string(),
            ]),
            vec![BASE_SCORE as f64, score as f64],
        )
        .with_height(300);

        let recap = recap_lines(&input, score);

        Self {
            risk: evaluation.risk,
            risk_message_pt: evaluation.risk.message_pt().to_string(),
            risk_message_en: evaluation.risk.message_en().to_string(),
            score,
            score_label: format!("{}/100 pontos", score),
            comparison,
            suggestions: suggestions(),
            recap,
            input,
        }
    }
}

fn value_of<T: CatalogOption>(option: Option<T>) -> String {
    option.map(|o| o.value().to_string()).unwrap_or_default()
}

fn recap_lines(input: &SimulationInput, score: u32) -> Vec<RecapLine> {
    let practices = input
        .practices
        .iter()
        .map(|p| p.value())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        RecapLine::new("Cultura", value_of(input.crop)),
        RecapLine::new("Fase", value_of(input.phase)),
        RecapLine::new("Período sazonal", value_of(input.season)),
        RecapLine::new("Clima", value_of(input.climate)),
        RecapLine::new("Solo", value_of(input.soil_type)),
        RecapLine::new("Práticas adotadas", practices),
        RecapLine::new("Pontuação final", format!("{}/100", score)),
    ]
}
