//! Sustainability scoring tests
//!
//! Covers the scorer, the presentation assembler, the chat echo and the
//! page router through their public API.

use proptest::prelude::*;
use shared::{
    evaluate, evaluate_raw, suggestions, CatalogOption, ChartAxis, ChatAuthor, ChatLog, Climate,
    Page, Practice, RiskMessage, Route, SimulationForm, SimulationInput, SimulationReport,
    BASE_SCORE, MAX_SCORE,
};
use std::collections::BTreeSet;

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_dry_climate_with_irrigation_only() {
        let result = evaluate_raw(Some("seco"), &["irrigacao"]);
        assert_eq!(result.score, 70);
        assert_eq!(
            result.risk.message_pt(),
            "⚠️ Risco de estresse hídrico devido à condição seca."
        );
    }

    #[test]
    fn test_heavy_rain_with_all_practices() {
        let result = evaluate_raw(Some("chuva"), &["irrigacao", "cobertura", "rotacao"]);
        assert_eq!(result.score, 100);
        assert_eq!(result.risk, RiskMessage::Waterlogging);
    }

    #[test]
    fn test_heat_without_practices() {
        let result = evaluate_raw(Some("calor"), &[]);
        assert_eq!(result.score, 50);
        assert_eq!(
            result.risk.message_pt(),
            "⚠️ Temperaturas elevadas podem afetar a fotossíntese."
        );
    }

    #[test]
    fn test_dry_climate_with_all_practices() {
        let result = evaluate_raw(Some("seco"), &["irrigacao", "cobertura", "rotacao"]);
        assert_eq!(result.score, 100);
        assert_eq!(result.risk, RiskMessage::WaterStress);
    }

    #[test]
    fn test_heavy_rain_without_practices() {
        let result = evaluate_raw(Some("chuva"), &[]);
        assert_eq!(result.score, 50);
        assert_eq!(
            result.risk.message_pt(),
            "⚠️ Risco de encharcamento e proliferação de fungos."
        );
    }

    #[test]
    fn test_missing_climate_is_normal() {
        let result = evaluate_raw(None, &["cobertura", "rotacao"]);
        assert_eq!(result.score, 80);
        assert_eq!(result.risk.message_pt(), "Condições climáticas normais.");
    }

    #[test]
    fn test_unknown_values_are_ignored() {
        let result = evaluate_raw(Some("neve"), &["irrigacao", "adubacao"]);
        assert_eq!(result.score, 70);
        assert_eq!(result.risk, RiskMessage::NormalConditions);
    }

    #[test]
    fn test_suggestions_are_fixed() {
        let items = suggestions();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0].message_pt,
            "💡 Evite irrigar entre 12h e 15h em dias muito quentes."
        );
    }

    #[test]
    fn test_report_for_sugar_cane_scenario() {
        let form = SimulationForm {
            cultura: Some("cana".into()),
            fase: Some("colheita".into()),
            sazonal: Some("chuva".into()),
            clima: Some("chuva".into()),
            solo: Some("argiloso".into()),
            praticas: vec!["irrigacao".into(), "cobertura".into(), "rotacao".into()],
        };
        let report = SimulationReport::assemble(SimulationInput::from_form(&form));

        assert_eq!(report.score, 100);
        assert_eq!(report.score_label, "100/100 pontos");
        assert_eq!(report.comparison.y, vec![50.0, 100.0]);
        assert_eq!(
            report.comparison.x,
            ChartAxis::Labels(vec![
                "Sem Sustentabilidade".to_string(),
                "Com Sustentabilidade".to_string()
            ])
        );

        let recap: Vec<(&str, &str)> = report
            .recap
            .iter()
            .map(|line| (line.label.as_str(), line.value.as_str()))
            .collect();
        assert_eq!(recap[0], ("Cultura", "cana"));
        assert_eq!(recap[4], ("Solo", "argiloso"));
        assert_eq!(recap[5], ("Práticas adotadas", "irrigacao, cobertura, rotacao"));
        assert_eq!(recap[6], ("Pontuação final", "100/100"));
    }

    #[test]
    fn test_report_with_empty_form() {
        let report = SimulationReport::assemble(SimulationInput::from_form(&SimulationForm::default()));
        assert_eq!(report.score, 50);
        assert_eq!(report.risk, RiskMessage::NormalConditions);
        assert!(report.recap.iter().take(6).all(|line| line.value.is_empty()));
    }

    #[test]
    fn test_chat_echo() {
        let mut log = ChatLog::new();
        log.submit("oi");

        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, ChatAuthor::User);
        assert_eq!(messages[0].text, "oi");
        assert_eq!(messages[1].author, ChatAuthor::Assistant);
        assert_eq!(messages[1].text, "Simulação de resposta para: 'oi'");
    }

    #[test]
    fn test_router_known_and_unknown_paths() {
        assert_eq!(Route::resolve("/relatorios"), Route::Page(Page::Reports));
        assert_eq!(Route::resolve("/"), Route::Page(Page::Dashboard));
        assert_eq!(Route::resolve("/inexistente"), Route::Fallback);
        assert_eq!(Route::resolve("/inexistente").page(), Page::Dashboard);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn climate_strategy() -> impl Strategy<Value = Option<Climate>> {
    prop_oneof![
        Just(None),
        prop::sample::select(Climate::ALL.to_vec()).prop_map(Some),
    ]
}

fn practices_strategy() -> impl Strategy<Value = Vec<Practice>> {
    prop::collection::vec(prop::sample::select(Practice::ALL.to_vec()), 0..8)
}

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Score is the base plus each distinct practice's bonus
        #[test]
        fn prop_score_is_sum_of_distinct_bonuses(
            climate in climate_strategy(),
            practices in practices_strategy()
        ) {
            let distinct: BTreeSet<Practice> = practices.iter().copied().collect();
            let expected = BASE_SCORE + distinct.iter().map(Practice::bonus).sum::<u32>();

            let result = evaluate(climate, &practices);
            prop_assert_eq!(result, evaluate(climate, &practices));
            prop_assert_eq!(result.score, expected);
            prop_assert!(result.score >= BASE_SCORE && result.score <= MAX_SCORE);
        }

        /// Climate never moves the score; practices never move the risk
        #[test]
        fn prop_score_and_risk_are_independent(
            a in climate_strategy(),
            b in climate_strategy(),
            practices in practices_strategy()
        ) {
            prop_assert_eq!(evaluate(a, &practices).score, evaluate(b, &practices).score);
            prop_assert_eq!(evaluate(a, &practices).risk, evaluate(a, std::iter::empty()).risk);
        }

        /// Adopting one more practice never lowers the score
        #[test]
        fn prop_score_is_monotonic(
            practices in practices_strategy(),
            extra in prop::sample::select(Practice::ALL.to_vec())
        ) {
            let before = evaluate(None, &practices).score;
            let mut more = practices.clone();
            more.push(extra);
            prop_assert!(evaluate(None, &more).score >= before);
        }

        /// Recap always ends with the score and the label matches it
        #[test]
        fn prop_report_is_consistent(
            climate in climate_strategy(),
            practices in practices_strategy()
        ) {
            let input = SimulationInput {
                climate,
                practices: practices.iter().copied().collect(),
                ..Default::default()
            };
            let report = SimulationReport::assemble(input);

            prop_assert_eq!(report.recap.len(), 7);
            prop_assert_eq!(&report.recap[6].value, &format!("{}/100", report.score));
            prop_assert_eq!(report.score_label, format!("{}/100 pontos", report.score));
            prop_assert_eq!(report.comparison.y[0], BASE_SCORE as f64);
        }

        /// Every non-blank message adds exactly two alternating entries
        #[test]
        fn prop_chat_grows_by_pairs(messages in prop::collection::vec("[a-z]{1,12}", 0..10)) {
            let mut log = ChatLog::new();
            for message in &messages {
                prop_assert_eq!(log.submit(message), 2);
            }

            prop_assert_eq!(log.len(), messages.len() * 2);
            for (i, entry) in log.messages().iter().enumerate() {
                prop_assert_eq!(entry.author.is_user(), i % 2 == 0);
            }
        }

        /// Whitespace-only messages leave the log untouched
        #[test]
        fn prop_blank_chat_is_ignored(blank in "[ \t\n]{0,6}") {
            let mut log = ChatLog::new();
            prop_assert_eq!(log.submit(&blank), 0);
            prop_assert!(log.is_empty());
        }

        /// Anything outside the six page paths resolves to the dashboard
        #[test]
        fn prop_unknown_paths_fall_back(path in "/[a-z]{1,20}") {
            let route = Route::resolve(&path);
            let known = Page::ALL.iter().any(|p| p.path() == path);
            prop_assert_eq!(route.is_fallback(), !known);
            if !known {
                prop_assert_eq!(route.page(), Page::Dashboard);
            }
        }
    }
}
