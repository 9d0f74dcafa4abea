//! Static sustainability-analysis tab of the simulator

use crate::types::{Chart, ChartAxis, ChartKind};

pub const INTRO: &str =
    "Sua lavoura foi analisada com base nas práticas adotadas e nas condições climáticas simuladas.";

pub const ENVIRONMENTAL_IMPACT: [&str; 3] = [
    "Economia estimada de água: 1.200 L/ha",
    "Redução potencial de emissões: 5,2 kg CO₂/ha",
    "Uso positivo de cobertura vegetal: melhora da biodiversidade do solo",
];

pub const RECOMMENDATIONS: [&str; 3] = [
    "➡️ Para elevar sua sustentabilidade geral, considere adotar irrigação por gotejamento.",
    "➡️ Avalie rotação de culturas com leguminosas para reduzir impacto no solo.",
    "➡️ A substituição parcial de adubos químicos por orgânicos pode melhorar seu score.",
];

pub const RANKING: &str =
    "Você está entre os 10% de lavouras mais sustentáveis simuladas nesta plataforma hoje.";

pub fn indicators_chart() -> Chart {
    Chart::new(
        "grafico-sustentabilidade",
        "Indicadores de Sustentabilidade",
        ChartKind::Bar,
        ChartAxis::Labels(
            ["Ambiental", "Hídrico", "Solo", "Geral"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        ),
        vec![85.0, 70.0, 90.0, 82.0],
    )
    .with_height(300)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_are_static() {
        let chart = indicators_chart();
        assert_eq!(chart.y, vec![85.0, 70.0, 90.0, 82.0]);
        assert_eq!(chart.x.len(), 4);
    }
}
