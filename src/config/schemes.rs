//! Built-in grant scheme presets.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::ui::UI_TEXT;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum SchemeId {
    #[strum(to_string = "Accelerator")]
    #[default]
    Accelerator,
    #[strum(to_string = "Steady Builder")]
    SteadyBuilder,
    #[strum(to_string = "Slow Burn")]
    SlowBurn,
}

impl SchemeId {
    pub fn icon(&self) -> String {
        match self {
            SchemeId::Accelerator => UI_TEXT.icon_scheme_accelerator.to_string(),
            SchemeId::SteadyBuilder => UI_TEXT.icon_scheme_builder.to_string(),
            SchemeId::SlowBurn => UI_TEXT.icon_scheme_slow_burn.to_string(),
        }
    }
}

/// Immutable blueprint for one preset scheme. Amounts are plain f64 here so
/// the table can live in a const; the domain layer wraps them in BtcAmount.
pub struct SchemePreset {
    pub id: SchemeId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub initial_grant_btc: f64,
    pub annual_grant_btc: f64,
    pub annual_grant_years: u32,
}

pub const PRESETS: &[SchemePreset] = &[
    SchemePreset {
        id: SchemeId::Accelerator,
        name: "Accelerator",
        tagline: "One big grant up front. Maximum time in the market.",
        initial_grant_btc: 0.02,
        annual_grant_btc: 0.0,
        annual_grant_years: 0,
    },
    SchemePreset {
        id: SchemeId::SteadyBuilder,
        name: "Steady Builder",
        tagline: "A solid start plus five annual top-ups.",
        initial_grant_btc: 0.015,
        annual_grant_btc: 0.001,
        annual_grant_years: 5,
    },
    SchemePreset {
        id: SchemeId::SlowBurn,
        name: "Slow Burn",
        tagline: "No up-front grant. Ten equal annual awards.",
        initial_grant_btc: 0.0,
        annual_grant_btc: 0.002,
        annual_grant_years: 10,
    },
];

pub fn preset(id: SchemeId) -> &'static SchemePreset {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .expect("every SchemeId has a PRESETS entry")
}
