//! WebAssembly module for the AgroGraf dashboard
//!
//! Runs the simulator logic in the browser:
//! - Sustainability score and climate risk
//! - Full simulation report for a raw form
//! - Assistant chat echo

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("AgroGraf WASM carregado"));
}

#[derive(Serialize)]
struct EvaluationJson {
    score: u32,
    risk: RiskMessage,
    message_pt: &'static str,
    message_en: &'static str,
}

/// Score a climate and a JSON array of practice values
///
/// Unknown climate or practice values are ignored, like the server does.
#[wasm_bindgen]
pub fn evaluate_sustainability(climate: Option<String>, practices_json: &str) -> Result<String, JsValue> {
    let practices: Vec<String> = serde_json::from_str(practices_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid practices JSON: {}", e)))?;
    let practices: Vec<&str> = practices.iter().map(String::as_str).collect();

    let evaluation = evaluate_raw(climate.as_deref(), &practices);
    let json = EvaluationJson {
        score: evaluation.score,
        risk: evaluation.risk,
        message_pt: evaluation.risk.message_pt(),
        message_en: evaluation.risk.message_en(),
    };
    serde_json::to_string(&json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Score from the three practice checkboxes
#[wasm_bindgen]
pub fn sustainability_score(irrigation: bool, cover_crop: bool, rotation: bool) -> u32 {
    let adopted: Vec<Practice> = [
        (irrigation, Practice::Irrigation),
        (cover_crop, Practice::CoverCrop),
        (rotation, Practice::Rotation),
    ]
    .into_iter()
    .filter_map(|(on, practice)| on.then_some(practice))
    .collect();

    evaluate(None, &adopted).score
}

/// Portuguese risk banner for a climate value
#[wasm_bindgen]
pub fn risk_message(climate: &str) -> String {
    RiskMessage::for_climate(Climate::parse(climate))
        .message_pt()
        .to_string()
}

/// Build the full simulation report for a raw form JSON
#[wasm_bindgen]
pub fn simulate(form_json: &str) -> Result<String, JsValue> {
    let form: SimulationForm = serde_json::from_str(form_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid form JSON: {}", e)))?;
    let report = SimulationReport::assemble(SimulationInput::from_form(&form));
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Scripted assistant reply
#[wasm_bindgen]
pub fn chat_reply(text: &str) -> String {
    assistant_reply(text)
}
