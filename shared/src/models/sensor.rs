//! Mock sensor series behind the dashboard charts

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::types::{Chart, ChartAxis, ChartKind};

/// Samples per series
pub const SAMPLE_COUNT: usize = 10;

pub const WATER_LITERS: RangeInclusive<u32> = 200..=800;
pub const SOIL_MOISTURE_PERCENT: RangeInclusive<f64> = 20.0..=80.0;
pub const ENERGY_KWH: RangeInclusive<f64> = 1.2..=4.5;
pub const PEST_EVENTS: RangeInclusive<u32> = 0..=3;
pub const TEMPERATURE_CELSIUS: RangeInclusive<f64> = 18.0..=35.0;
pub const AIR_HUMIDITY_PERCENT: RangeInclusive<f64> = 30.0..=80.0;

/// Ten random readings per measured quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorSeries {
    pub water_liters: Vec<u32>,
    pub soil_moisture_percent: Vec<f64>,
    pub energy_kwh: Vec<f64>,
    pub pest_events: Vec<u32>,
    pub temperature_celsius: Vec<f64>,
    pub air_humidity_percent: Vec<f64>,
}

fn sample_u32<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<u32>) -> Vec<u32> {
    (0..SAMPLE_COUNT).map(|_| rng.gen_range(range.clone())).collect()
}

fn sample_f64<R: Rng + ?Sized>(rng: &mut R, range: &RangeInclusive<f64>) -> Vec<f64> {
    (0..SAMPLE_COUNT).map(|_| rng.gen_range(range.clone())).collect()
}

fn as_f64(values: &[u32]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}

impl SensorSeries {
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            water_liters: sample_u32(rng, &WATER_LITERS),
            soil_moisture_percent: sample_f64(rng, &SOIL_MOISTURE_PERCENT),
            energy_kwh: sample_f64(rng, &ENERGY_KWH),
            pest_events: sample_u32(rng, &PEST_EVENTS),
            temperature_celsius: sample_f64(rng, &TEMPERATURE_CELSIUS),
            air_humidity_percent: sample_f64(rng, &AIR_HUMIDITY_PERCENT),
        }
    }

    /// The five dashboard charts, in page order
    pub fn charts(&self) -> Vec<Chart> {
        let index = ChartAxis::index(SAMPLE_COUNT);

        vec![
            Chart::new(
                "consumo-agua",
                "Consumo de Água (litros)",
                ChartKind::Line,
                index.clone(),
                as_f64(&self.water_liters),
            ),
            Chart::new(
                "consumo-energia",
                "Consumo de Energia (kWh)",
                ChartKind::Line,
                index.clone(),
                self.energy_kwh.clone(),
            ),
            Chart::new(
                "umidade-solo",
                "Umidade do Solo (%)",
                ChartKind::Bar,
                index.clone(),
                self.soil_moisture_percent.clone(),
            ),
            Chart::new(
                "clima",
                "Clima: Temp vs Umidade",
                ChartKind::Scatter,
                ChartAxis::Values(self.temperature_celsius.clone()),
                self.air_humidity_percent.clone(),
            ),
            Chart::new(
                "deteccao-pragas",
                "Detecção de Pragas (eventos)",
                ChartKind::Bar,
                index,
                as_f64(&self.pest_events),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn series_have_ten_samples_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let series = SensorSeries::generate_with(&mut rng);

        assert_eq!(series.water_liters.len(), SAMPLE_COUNT);
        assert!(series.water_liters.iter().all(|v| WATER_LITERS.contains(v)));
        assert!(series.energy_kwh.iter().all(|v| ENERGY_KWH.contains(v)));
        assert!(series.pest_events.iter().all(|v| PEST_EVENTS.contains(v)));
        assert!(series
            .air_humidity_percent
            .iter()
            .all(|v| AIR_HUMIDITY_PERCENT.contains(v)));
    }

    #[test]
    fn same_seed_same_series() {
        let a = SensorSeries::generate_with(&mut StdRng::seed_from_u64(42));
        let b = SensorSeries::generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn scatter_pairs_temperature_with_humidity() {
        let series = SensorSeries::generate_with(&mut StdRng::seed_from_u64(1));
        let charts = series.charts();

        assert_eq!(charts.len(), 5);
        assert_eq!(charts[3].kind, ChartKind::Scatter);
        assert_eq!(charts[3].x, ChartAxis::Values(series.temperature_celsius.clone()));
        assert_eq!(charts[3].y, series.air_humidity_percent);
        assert!(charts.iter().all(|c| c.x.len() == c.y.len()));
    }
}
