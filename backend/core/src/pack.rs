//! Startup pack wire model.
//!
//! The structured JSON the assistant returns next to its markdown reply.
//! Every field tolerates absence: strings default to empty, sections to `None`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupPack {
    pub startup_summary: Option<String>,
    pub competitors: Vec<String>,
    pub brand: Option<Brand>,
    pub financials: Option<Financials>,
    pub real_world_scenario: Option<RealWorldScenario>,
    pub pitch: Option<Pitch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub alt_name: String,
    pub tagline: String,
    pub colors: Vec<String>,
    pub brand_tone: String,
    pub logo_prompt: String,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Financials {
    pub total_cost: String,
    pub projected_revenue: String,
    pub roi: String,
    pub burn_rate: String,
    pub break_even_month: String,
    pub runway: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pitch {
    pub elevator_pitch: String,
    pub slides: PitchSlides,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchSlides {
    pub problem: String,
    pub solution: String,
    pub market: String,
    pub model: String,
    pub brand_ask: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealWorldScenario {
    pub user_story: String,
    pub pain_point_solved: String,
    pub day_in_life: String,
}

/// One row of the competitor matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorRow {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub strengths: String,
    pub weaknesses: String,
    pub differentiation: String,
    pub pricing_hint: String,
}

/// Availability check for a suggested domain name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainCheck {
    pub domain: String,
    pub tld: String,
    pub availability: String,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_pack_deserializes() {
        let pack: StartupPack = serde_json::from_value(json!({
            "startup_summary": "Bikes for dogs",
            "brand": { "name": "Woof Wheels", "colors": ["#ff0000"] }
        }))
        .unwrap();

        assert_eq!(pack.startup_summary.as_deref(), Some("Bikes for dogs"));
        let brand = pack.brand.unwrap();
        assert_eq!(brand.name, "Woof Wheels");
        assert_eq!(brand.tagline, "");
        assert!(brand.logo_url.is_none());
        assert!(pack.financials.is_none());
        assert!(pack.competitors.is_empty());
    }

    #[test]
    fn test_competitor_row_type_field() {
        let row: CompetitorRow =
            serde_json::from_value(json!({ "name": "Acme", "type": "direct" })).unwrap();
        assert_eq!(row.kind, "direct");
        assert_eq!(serde_json::to_value(&row).unwrap()["type"], "direct");
    }
}
