use serde::{Deserialize, Serialize};

/// Kilometers since overhaul at which a train is pulled from consideration
/// regardless of any other signal. Rejection triggers at the ceiling itself.
pub const MAX_SAFE_MILEAGE_KM: f64 = 30_000.0;

const DEFAULT_MILEAGE_WEIGHT: f64 = 0.7;
const DEFAULT_BRANDING_WEIGHT: f64 = 0.3;

/// Rubric configuration for the composite ranking.
///
/// The canonical weighting favors wear-balancing over commercial branding
/// exposure 70/30.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub mileage_weight: f64,
    pub branding_weight: f64,
    pub max_safe_mileage_km: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            mileage_weight: DEFAULT_MILEAGE_WEIGHT,
            branding_weight: DEFAULT_BRANDING_WEIGHT,
            max_safe_mileage_km: MAX_SAFE_MILEAGE_KM,
        }
    }
}
