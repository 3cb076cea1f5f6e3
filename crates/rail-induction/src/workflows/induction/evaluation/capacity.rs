use super::super::domain::RankedAssignment;
use super::scoring::ScoredTrain;

/// Fraction of the eligible cohort sent to active service per traffic level.
const DEMAND_TABLE: [(i32, f64); 5] = [
    (1, 0.40),
    (2, 0.55),
    (3, 0.70),
    (4, 0.85),
    (5, 0.95),
];

/// Fallback when the requested traffic level falls outside the 1-5 band.
const DEFAULT_DEMAND_FRACTION: f64 = 0.70;

pub(crate) fn demand_fraction(traffic_level: i32) -> f64 {
    DEMAND_TABLE
        .iter()
        .find(|(level, _)| *level == traffic_level)
        .map(|(_, fraction)| *fraction)
        .unwrap_or(DEFAULT_DEMAND_FRACTION)
}

/// Orders the scored cohort and splits it into service and standby.
///
/// The sort is stable, so score ties keep their snapshot order. Two guards
/// shape the cutoff: at least one train stays on standby whenever more than
/// one is eligible, and service is never left empty while any train qualifies.
pub(crate) fn partition(
    mut scored: Vec<ScoredTrain>,
    traffic_level: i32,
) -> (Vec<RankedAssignment>, Vec<RankedAssignment>) {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let fraction = demand_fraction(traffic_level);
    let mut service_count = (scored.len() as f64 * fraction).round() as usize;

    if scored.len() > 1 && service_count >= scored.len() {
        service_count = scored.len() - 1;
    }
    if service_count == 0 && !scored.is_empty() {
        service_count = 1;
    }

    let mut service = Vec::with_capacity(service_count);
    let mut standby = Vec::with_capacity(scored.len().saturating_sub(service_count));

    for (position, train) in scored.into_iter().enumerate() {
        let slot = position as u32 + 1;
        let in_service = position < service_count;
        let explanation = explain(&train, in_service);
        let assignment = RankedAssignment {
            name: train.name,
            score: train.score,
            slot,
            explanation,
        };

        if in_service {
            service.push(assignment);
        } else {
            standby.push(assignment);
        }
    }

    (service, standby)
}

fn explain(train: &ScoredTrain, in_service: bool) -> String {
    let placement = if in_service {
        "assigned to service for highest operational suitability"
    } else {
        "held in standby to maintain operational buffer"
    };

    format!(
        "Mileage {:.1} km, branding priority {}, composite score {:.3}; {}",
        train.mileage, train.branding_priority, train.score, placement
    )
}
