use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::induction::domain::TrainSubmission;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<TrainSubmission>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        records.push(record?.into_submission());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(deserialize_with = "flag_from_text")]
    fitness_valid: bool,
    #[serde(deserialize_with = "flag_from_text")]
    open_job_card: bool,
    #[serde(deserialize_with = "flag_from_text")]
    cleaning_completed: bool,
    // Legacy depot exports predate the telemetry column.
    #[serde(default, deserialize_with = "optional_flag_from_text")]
    sensor_alert: Option<bool>,
    mileage: f64,
    branding_priority: u32,
}

impl RosterRow {
    fn into_submission(self) -> TrainSubmission {
        TrainSubmission {
            name: self.name,
            fitness_valid: self.fitness_valid,
            open_job_card: self.open_job_card,
            cleaning_completed: self.cleaning_completed,
            sensor_alert: self.sensor_alert.unwrap_or(false),
            mileage: self.mileage,
            branding_priority: self.branding_priority,
            override_status: None,
        }
    }
}

fn flag_from_text<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().eq_ignore_ascii_case("true"))
}

fn optional_flag_from_text<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .filter(|value| !value.trim().is_empty())
        .map(|value| value.trim().eq_ignore_ascii_case("true")))
}
