//! Writers for query results.

use crate::error::ExtractError;
use neodb_core::{ApproachRecord, CloseApproach, NearEarthObject, NeoRecord};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;

/// An unlinked approach has no NEO to describe; its output columns fall back
/// to the raw designation and the usual absent-value conventions.
fn neo_record(approach: &CloseApproach, neo: Option<&NearEarthObject>) -> NeoRecord {
    match neo {
        Some(neo) => neo.to_record(),
        None => NeoRecord {
            designation: approach.designation().to_string(),
            name: String::new(),
            diameter_km: f64::NAN,
            potentially_hazardous: false,
        },
    }
}

/// Writes query results as a flat CSV file, one row per approach: the
/// approach's fields followed by the fields of its NEO.
pub fn write_csv<'a, I>(results: I, path: impl AsRef<Path>) -> Result<(), ExtractError>
where
    I: IntoIterator<Item = (&'a CloseApproach, Option<&'a NearEarthObject>)>,
{
    // The csv serializer cannot flatten nested structs, so the row is built
    // by hand from the two entity records.
    #[derive(Serialize)]
    struct CsvRow {
        datetime_utc: String,
        distance_au: f64,
        velocity_km_s: f64,
        designation: String,
        name: String,
        diameter_km: f64,
        potentially_hazardous: bool,
    }

    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0usize;
    for (approach, neo) in results {
        let ApproachRecord {
            datetime_utc,
            distance_au,
            velocity_km_s,
        } = approach.to_record();
        let neo = neo_record(approach, neo);
        writer.serialize(CsvRow {
            datetime_utc,
            distance_au,
            velocity_km_s,
            designation: neo.designation,
            name: neo.name,
            diameter_km: neo.diameter_km,
            potentially_hazardous: neo.potentially_hazardous,
        })?;
        count += 1;
    }
    writer.flush().map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(count, path = %path.display(), "wrote results as CSV");
    Ok(())
}

/// Writes query results as a JSON array, one object per approach with the
/// NEO's record nested under `"neo"`.
///
/// An unknown diameter serializes as JSON `null` (JSON has no NaN literal).
pub fn write_json<'a, I>(results: I, path: impl AsRef<Path>) -> Result<(), ExtractError>
where
    I: IntoIterator<Item = (&'a CloseApproach, Option<&'a NearEarthObject>)>,
{
    #[derive(Serialize)]
    struct JsonRow {
        #[serde(flatten)]
        approach: ApproachRecord,
        neo: NeoRecord,
    }

    let path = path.as_ref();
    let rows: Vec<JsonRow> = results
        .into_iter()
        .map(|(approach, neo)| JsonRow {
            approach: approach.to_record(),
            neo: neo_record(approach, neo),
        })
        .collect();

    let file = File::create(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows)?;

    info!(count = rows.len(), path = %path.display(), "wrote results as JSON");
    Ok(())
}
