use super::common::*;
use crate::workflows::induction::evaluation::{
    REASON_CLEANING, REASON_FITNESS, REASON_JOB_CARD, REASON_MILEAGE, REASON_SENSOR,
    MAX_SAFE_MILEAGE_KM,
};

#[test]
fn healthy_train_clears_every_constraint() {
    let plan = engine().evaluate(&[train("KM-01", 10_000.0, 3)], 3);

    assert!(plan.maintenance.is_empty());
    assert_eq!(plan.service.len(), 1);
}

#[test]
fn expired_fitness_certificate_is_rejected() {
    let mut unfit = train("KM-02", 10_000.0, 3);
    unfit.fitness_valid = false;

    let plan = engine().evaluate(&[unfit], 3);

    assert_eq!(plan.maintenance.len(), 1);
    assert_eq!(plan.maintenance[0].reasons, vec![REASON_FITNESS.to_string()]);
}

#[test]
fn open_job_card_is_rejected() {
    let mut ticketed = train("KM-03", 10_000.0, 3);
    ticketed.open_job_card = true;

    let plan = engine().evaluate(&[ticketed], 3);

    assert_eq!(plan.maintenance[0].reasons, vec![REASON_JOB_CARD.to_string()]);
}

#[test]
fn incomplete_cleaning_is_rejected() {
    let mut dirty = train("KM-04", 10_000.0, 3);
    dirty.cleaning_completed = false;

    let plan = engine().evaluate(&[dirty], 3);

    assert_eq!(plan.maintenance[0].reasons, vec![REASON_CLEANING.to_string()]);
}

#[test]
fn sensor_alert_is_rejected() {
    let mut alerting = train("KM-05", 10_000.0, 3);
    alerting.sensor_alert = true;

    let plan = engine().evaluate(&[alerting], 3);

    assert_eq!(plan.maintenance[0].reasons, vec![REASON_SENSOR.to_string()]);
}

#[test]
fn mileage_ceiling_rejects_at_the_boundary_only() {
    let at_ceiling = train("KM-06", MAX_SAFE_MILEAGE_KM, 3);
    let below_ceiling = train("KM-07", MAX_SAFE_MILEAGE_KM - 1.0, 3);

    let plan = engine().evaluate(&[at_ceiling, below_ceiling], 3);

    assert_eq!(plan.maintenance.len(), 1);
    assert_eq!(plan.maintenance[0].name, "KM-06");
    assert_eq!(plan.maintenance[0].reasons, vec![REASON_MILEAGE.to_string()]);
    assert_eq!(plan.service.len() + plan.standby.len(), 1);
}

#[test]
fn every_failing_reason_is_collected_in_fixed_order() {
    let wreck = crate::workflows::induction::domain::Train {
        name: "KM-08".to_string(),
        fitness_valid: false,
        open_job_card: true,
        cleaning_completed: false,
        sensor_alert: true,
        mileage: 31_000.0,
        branding_priority: 5,
        override_status: None,
    };

    let plan = engine().evaluate(&[wreck], 3);

    assert_eq!(
        plan.maintenance[0].reasons,
        vec![
            REASON_FITNESS.to_string(),
            REASON_JOB_CARD.to_string(),
            REASON_CLEANING.to_string(),
            REASON_MILEAGE.to_string(),
            REASON_SENSOR.to_string(),
        ]
    );
    assert!(plan.maintenance[0]
        .explanation
        .contains("Held for maintenance"));
}

#[test]
fn override_pins_do_not_affect_eligibility() {
    let mut pinned = train("KM-09", 10_000.0, 3);
    pinned.override_status =
        Some(crate::workflows::induction::domain::OverrideStatus::Maintenance);

    let plan = engine().evaluate(&[pinned], 3);

    assert!(plan.maintenance.is_empty());
    assert_eq!(plan.service.len(), 1);
}
