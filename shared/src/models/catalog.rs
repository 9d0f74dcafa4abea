//! Option catalog for the simulator form
//!
//! Every selectable value has a stable wire value (the value posted by the
//! HTML form and accepted by the API) and a Portuguese display label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A closed set of form choices with wire values and display labels
pub trait CatalogOption: Sized + Copy + 'static {
    /// Every variant, in display order
    const ALL: &'static [Self];

    /// Value submitted by forms and API clients
    fn value(&self) -> &'static str;

    /// Label shown to the user
    fn label(&self) -> &'static str;

    /// Lenient lookup: unknown or blank values yield `None`
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.iter().copied().find(|option| option.value() == value)
    }
}

/// Error returned by strict `FromStr` parsing of catalog values
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} option: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

/// Value/label pair as rendered in dropdowns, radios and checklists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// Build the entries for one catalog
pub fn options<T: CatalogOption>() -> Vec<OptionEntry> {
    T::ALL
        .iter()
        .map(|option| OptionEntry {
            value: option.value().to_string(),
            label: option.label().to_string(),
        })
        .collect()
}

/// Crop under simulation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Crop {
    #[serde(rename = "milho")]
    Corn,
    #[serde(rename = "soja")]
    Soy,
    #[serde(rename = "cana")]
    SugarCane,
}

impl CatalogOption for Crop {
    const ALL: &'static [Self] = &[Crop::Corn, Crop::Soy, Crop::SugarCane];

    fn value(&self) -> &'static str {
        match self {
            Crop::Corn => "milho",
            Crop::Soy => "soja",
            Crop::SugarCane => "cana",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Crop::Corn => "Milho",
            Crop::Soy => "Soja",
            Crop::SugarCane => "Cana-de-açúcar",
        }
    }
}

/// Crop growth phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    #[serde(rename = "plantio")]
    Planting,
    #[serde(rename = "crescimento")]
    Growth,
    #[serde(rename = "colheita")]
    Harvest,
}

impl CatalogOption for Phase {
    const ALL: &'static [Self] = &[Phase::Planting, Phase::Growth, Phase::Harvest];

    fn value(&self) -> &'static str {
        match self {
            Phase::Planting => "plantio",
            Phase::Growth => "crescimento",
            Phase::Harvest => "colheita",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Phase::Planting => "Plantio",
            Phase::Growth => "Crescimento",
            Phase::Harvest => "Colheita",
        }
    }
}

/// Seasonal period of the year
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    #[serde(rename = "chuva")]
    Rainy,
    #[serde(rename = "seca")]
    Dry,
    #[serde(rename = "transicao")]
    Transition,
}

impl CatalogOption for Season {
    const ALL: &'static [Self] = &[Season::Rainy, Season::Dry, Season::Transition];

    fn value(&self) -> &'static str {
        match self {
            Season::Rainy => "chuva",
            Season::Dry => "seca",
            Season::Transition => "transicao",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Season::Rainy => "Estação chuvosa (Jan - Mar)",
            Season::Dry => "Estação seca (Jul - Set)",
            Season::Transition => "Transição (Abr - Jun / Out - Dez)",
        }
    }
}

/// Momentary climate condition; drives the risk message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Climate {
    #[serde(rename = "seco")]
    Dry,
    #[serde(rename = "chuva")]
    HeavyRain,
    #[serde(rename = "calor")]
    Heat,
}

impl CatalogOption for Climate {
    const ALL: &'static [Self] = &[Climate::Dry, Climate::HeavyRain, Climate::Heat];

    fn value(&self) -> &'static str {
        match self {
            Climate::Dry => "seco",
            Climate::HeavyRain => "chuva",
            Climate::Heat => "calor",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Climate::Dry => "Seco",
            Climate::HeavyRain => "Chuva forte",
            Climate::Heat => "Temperatura alta",
        }
    }
}

/// Soil texture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SoilType {
    #[serde(rename = "arenoso")]
    Sandy,
    #[serde(rename = "argiloso")]
    Clay,
    #[serde(rename = "misto")]
    Mixed,
}

impl CatalogOption for SoilType {
    const ALL: &'static [Self] = &[SoilType::Sandy, SoilType::Clay, SoilType::Mixed];

    fn value(&self) -> &'static str {
        match self {
            SoilType::Sandy => "arenoso",
            SoilType::Clay => "argiloso",
            SoilType::Mixed => "misto",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Arenoso",
            SoilType::Clay => "Argiloso",
            SoilType::Mixed => "Misto",
        }
    }
}

/// Sustainable practice; each one adds a fixed bonus to the score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Practice {
    #[serde(rename = "irrigacao")]
    Irrigation,
    #[serde(rename = "cobertura")]
    CoverCrop,
    #[serde(rename = "rotacao")]
    Rotation,
}

impl Practice {
    /// Points added to the base score when the practice is adopted
    pub fn bonus(&self) -> u32 {
        match self {
            Practice::Irrigation => 20,
            Practice::CoverCrop => 15,
            Practice::Rotation => 15,
        }
    }
}

impl CatalogOption for Practice {
    const ALL: &'static [Self] = &[Practice::Irrigation, Practice::CoverCrop, Practice::Rotation];

    fn value(&self) -> &'static str {
        match self {
            Practice::Irrigation => "irrigacao",
            Practice::CoverCrop => "cobertura",
            Practice::Rotation => "rotacao",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Practice::Irrigation => "Irrigação Inteligente",
            Practice::CoverCrop => "Cobertura vegetal",
            Practice::Rotation => "Rotação de culturas",
        }
    }
}

macro_rules! impl_catalog_traits {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = UnknownOption;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as CatalogOption>::parse(s).ok_or_else(|| UnknownOption {
                        kind: $kind,
                        value: s.to_string(),
                    })
                }
            }
        )*
    };
}

impl_catalog_traits!(
    Crop => "crop",
    Phase => "phase",
    Season => "season",
    Climate => "climate",
    SoilType => "soil",
    Practice => "practice",
);

/// All option lists of the simulator form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub crops: Vec<OptionEntry>,
    pub phases: Vec<OptionEntry>,
    pub seasons: Vec<OptionEntry>,
    pub climates: Vec<OptionEntry>,
    pub soils: Vec<OptionEntry>,
    pub practices: Vec<OptionEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            crops: options::<Crop>(),
            phases: options::<Phase>(),
            seasons: options::<Season>(),
            climates: options::<Climate>(),
            soils: options::<SoilType>(),
            practices: options::<Practice>(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
