use crate::infra::{default_evaluation_config, InMemoryDecisionLog, InMemoryTrainRepository};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use rail_induction::error::AppError;
use rail_induction::workflows::induction::{
    InductionPlan, InductionService, OverrideStatus, TrainSubmission, TrainUpdate,
};
use rail_induction::workflows::roster::RosterImporter;

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    /// Roster CSV export to evaluate (defaults to a built-in sample fleet)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Expected demand, 1 (lightest) through 5 (peak)
    #[arg(long, default_value_t = 3)]
    pub(crate) traffic_level: i32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Roster CSV export to seed the demo fleet (defaults to a built-in sample)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Expected demand, 1 (lightest) through 5 (peak)
    #[arg(long, default_value_t = 3)]
    pub(crate) traffic_level: i32,
    /// Skip the maintenance desk update portion of the demo
    #[arg(long)]
    pub(crate) skip_updates: bool,
}

type DemoService = InductionService<InMemoryTrainRepository, InMemoryDecisionLog>;

fn build_memory_service() -> (Arc<DemoService>, Arc<InMemoryDecisionLog>) {
    let repository = Arc::new(InMemoryTrainRepository::default());
    let decision_log = Arc::new(InMemoryDecisionLog::default());
    let service = Arc::new(InductionService::new(
        repository,
        decision_log.clone(),
        default_evaluation_config(),
    ));
    (service, decision_log)
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let PlanArgs {
        roster,
        traffic_level,
    } = args;

    let (service, _) = build_memory_service();
    let (submissions, imported) = load_roster_from_path(roster)?;

    if let Err(err) = service.import(submissions) {
        println!("Roster rejected: {err}");
        return Ok(());
    }

    let plan = match service.plan(traffic_level) {
        Ok(plan) => plan,
        Err(err) => {
            println!("Planning unavailable: {err}");
            return Ok(());
        }
    };

    render_plan(&plan, imported);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        roster,
        traffic_level,
        skip_updates,
    } = args;

    println!("Fleet induction demo");
    let (service, decision_log) = build_memory_service();
    let (submissions, imported) = load_roster_from_path(roster)?;
    let fleet_size = submissions.len();

    let summary = match service.import(submissions) {
        Ok(summary) => summary,
        Err(err) => {
            println!("Roster rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "Fleet intake: {} trains ({} registered, {} updated)",
        fleet_size, summary.registered, summary.updated
    );

    if !skip_updates {
        println!("\nMaintenance desk updates");
        apply_demo_updates(&service);
    }

    let plan = match service.plan(traffic_level) {
        Ok(plan) => plan,
        Err(err) => {
            println!("Planning unavailable: {err}");
            return Ok(());
        }
    };
    render_plan(&plan, imported);

    println!("\nAudit trail");
    for entry in decision_log.entries() {
        println!(
            "- {} | traffic level {} | service {:?} | standby {:?} | maintenance {:?}",
            entry.recorded_at, entry.traffic_level, entry.service, entry.standby, entry.maintenance
        );
    }

    match serde_json::to_string_pretty(&plan) {
        Ok(json) => println!("\nPlan payload:\n{}", json),
        Err(err) => println!("\nPlan payload unavailable: {}", err),
    }

    Ok(())
}

fn apply_demo_updates(service: &DemoService) {
    // A telemetry alert pulls one unit out of contention, an override pin
    // shows up in the record store until the next plan run clears it.
    match service.apply_update("KM-02", TrainUpdate::SensorAlert(true)) {
        Ok(train) => println!("- {}: sensor alert raised", train.name),
        Err(err) => println!("- sensor update skipped: {err}"),
    }
    match service.apply_update(
        "KM-05",
        TrainUpdate::Override(Some(OverrideStatus::Standby)),
    ) {
        Ok(train) => println!("- {}: supervisor pinned to standby", train.name),
        Err(err) => println!("- override update skipped: {err}"),
    }
}

fn load_roster_from_path(
    roster: Option<PathBuf>,
) -> Result<(Vec<TrainSubmission>, bool), AppError> {
    match roster {
        Some(path) => RosterImporter::from_path(path)
            .map(|submissions| (submissions, true))
            .map_err(AppError::from),
        None => Ok((sample_fleet(), false)),
    }
}

fn render_plan(plan: &InductionPlan, imported: bool) {
    println!("\nInduction plan");
    if imported {
        println!("Data source: roster CSV import");
    } else {
        println!("Data source: built-in sample fleet");
    }
    println!(
        "Traffic level {} -> demand fraction {:.2}",
        plan.traffic_level, plan.demand_fraction
    );

    println!("\nActive service");
    for entry in &plan.service {
        println!(
            "- slot {} | {} | score {:.3} | {}",
            entry.slot, entry.name, entry.score, entry.explanation
        );
    }

    if plan.standby.is_empty() {
        println!("\nStandby reserve: none");
    } else {
        println!("\nStandby reserve");
        for entry in &plan.standby {
            println!(
                "- slot {} | {} | score {:.3} | {}",
                entry.slot, entry.name, entry.score, entry.explanation
            );
        }
    }

    if plan.maintenance.is_empty() {
        println!("\nMaintenance: none");
    } else {
        println!("\nMaintenance");
        for entry in &plan.maintenance {
            println!("- {} | {}", entry.name, entry.reasons.join("; "));
        }
    }
}

fn sample_fleet() -> Vec<TrainSubmission> {
    let healthy = |name: &str, mileage: f64, branding_priority: u32| TrainSubmission {
        name: name.to_string(),
        fitness_valid: true,
        open_job_card: false,
        cleaning_completed: true,
        sensor_alert: false,
        mileage,
        branding_priority,
        override_status: None,
    };

    let mut fleet = vec![
        healthy("KM-01", 4_200.0, 6),
        healthy("KM-02", 9_100.0, 0),
        healthy("KM-03", 18_300.0, 2),
        healthy("KM-04", 12_750.0, 8),
        healthy("KM-05", 6_400.0, 1),
        healthy("KM-06", 22_900.0, 3),
    ];

    let mut ticketed = healthy("KM-07", 7_500.0, 4);
    ticketed.open_job_card = true;
    fleet.push(ticketed);

    let mut overrun = healthy("KM-08", 30_000.0, 5);
    overrun.cleaning_completed = false;
    fleet.push(overrun);

    fleet
}
