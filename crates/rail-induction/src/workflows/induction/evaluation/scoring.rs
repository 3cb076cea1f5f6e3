use super::super::domain::Train;
use super::config::EvaluationConfig;

/// Scored view of an eligible train prior to partitioning.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTrain {
    pub name: String,
    pub score: f64,
    pub mileage: f64,
    pub branding_priority: u32,
}

/// Ranking seam: alternative weighting policies plug in here without touching
/// the eligibility screen or the partitioner.
pub trait ScoringStrategy: Send + Sync {
    /// Score the eligible cohort, preserving input order.
    fn score_cohort(&self, eligible: &[Train]) -> Vec<ScoredTrain>;
}

/// Canonical composite strategy.
///
/// Both factors are normalized against the maximum within the eligible cohort
/// (not the full fleet), so scores stay comparable among the trains actually
/// competing for slots and insensitive to absolute mileage scale. A zero
/// maximum is floored to 1 to keep the division defined.
#[derive(Debug, Clone, Default)]
pub struct CompositeScoring {
    config: EvaluationConfig,
}

impl CompositeScoring {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }
}

impl ScoringStrategy for CompositeScoring {
    fn score_cohort(&self, eligible: &[Train]) -> Vec<ScoredTrain> {
        let max_mileage = eligible
            .iter()
            .map(|train| train.mileage)
            .fold(0.0_f64, f64::max);
        let max_mileage = if max_mileage == 0.0 { 1.0 } else { max_mileage };

        let max_branding = eligible
            .iter()
            .map(|train| train.branding_priority)
            .max()
            .unwrap_or(0);
        let max_branding = if max_branding == 0 {
            1.0
        } else {
            f64::from(max_branding)
        };

        eligible
            .iter()
            .map(|train| {
                let mileage_factor = 1.0 - train.mileage / max_mileage;
                let branding_factor = f64::from(train.branding_priority) / max_branding;
                let score = self.config.mileage_weight * mileage_factor
                    + self.config.branding_weight * branding_factor;

                ScoredTrain {
                    name: train.name.clone(),
                    score: round_to_millis(score),
                    mileage: train.mileage,
                    branding_priority: train.branding_priority,
                }
            })
            .collect()
    }
}

fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
