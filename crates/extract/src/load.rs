//! Loaders for the NASA NEO and close-approach data files.

use crate::error::ExtractError;
use chrono::NaiveDateTime;
use neodb_core::{CloseApproach, NearEarthObject};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Input format of the close-approach `cd` timestamps, e.g. `2021-Jan-01 12:30`.
pub const CD_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// The NEO CSV columns the loader cares about; the file carries dozens more,
/// which serde ignores.
#[derive(Debug, Deserialize)]
struct NeoRow {
    pdes: String,
    name: String,
    diameter: String,
    pha: String,
}

/// Reads near-Earth objects from the NEO CSV file.
///
/// An empty `name` becomes an absent name, an empty `diameter` an unknown
/// diameter, and only `pha == "Y"` marks an object hazardous.
pub fn load_neos(path: impl AsRef<Path>) -> Result<Vec<NearEarthObject>, ExtractError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut neos = Vec::new();
    for row in reader.deserialize::<NeoRow>() {
        let row = row?;
        let name = (!row.name.is_empty()).then_some(row.name);
        let diameter = match row.diameter.as_str() {
            "" => None,
            s => Some(parse_f64(s)?),
        };
        let hazardous = row.pha == "Y";
        neos.push(NearEarthObject::new(row.pdes, name, diameter, hazardous));
    }

    info!(count = neos.len(), path = %path.display(), "loaded near-Earth objects");
    Ok(neos)
}

/// Shape of the close-approach JSON file: a header naming the columns and an
/// array of rows of strings.
#[derive(Debug, Deserialize)]
struct CadFile {
    fields: Vec<String>,
    data: Vec<Vec<serde_json::Value>>,
}

/// Reads close approaches from the close-approach JSON file.
///
/// Column positions for `des`, `cd`, `dist`, and `v_rel` are resolved by name
/// from the file's `fields` header rather than hard-coded, so column
/// reordering upstream doesn't break the loader.
pub fn load_approaches(path: impl AsRef<Path>) -> Result<Vec<CloseApproach>, ExtractError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cad: CadFile = serde_json::from_reader(BufReader::new(file))?;

    let des = field_index(&cad.fields, "des")?;
    let cd = field_index(&cad.fields, "cd")?;
    let dist = field_index(&cad.fields, "dist")?;
    let v_rel = field_index(&cad.fields, "v_rel")?;

    let mut approaches = Vec::with_capacity(cad.data.len());
    for row in &cad.data {
        let designation = str_at(row, des)?;
        let cd_value = str_at(row, cd)?;
        let time = NaiveDateTime::parse_from_str(cd_value, CD_TIME_FORMAT).map_err(|source| {
            ExtractError::Timestamp {
                value: cd_value.to_string(),
                source,
            }
        })?;
        let distance = parse_f64(str_at(row, dist)?)?;
        let velocity = parse_f64(str_at(row, v_rel)?)?;
        approaches.push(CloseApproach::new(designation, time, distance, velocity));
    }

    info!(count = approaches.len(), path = %path.display(), "loaded close approaches");
    Ok(approaches)
}

fn field_index(fields: &[String], name: &'static str) -> Result<usize, ExtractError> {
    fields
        .iter()
        .position(|f| f == name)
        .ok_or(ExtractError::MissingField(name))
}

fn str_at(row: &[serde_json::Value], index: usize) -> Result<&str, ExtractError> {
    row.get(index)
        .and_then(|v| v.as_str())
        .ok_or_else(|| ExtractError::MalformedRow(format!("{row:?}")))
}

fn parse_f64(s: &str) -> Result<f64, ExtractError> {
    s.parse().map_err(|source| ExtractError::Number {
        value: s.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const NEO_CSV: &str = "\
id,pdes,name,diameter,pha\n\
a0000433,433,Eros,16.84,N\n\
a0002021,2021 AB,,,Y\n\
a0000719,719,Albert,,N\n";

    #[test]
    fn test_load_neos() {
        let file = write_temp(NEO_CSV);
        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos.len(), 3);

        assert_eq!(neos[0].designation(), "433");
        assert_eq!(neos[0].name(), Some("Eros"));
        assert_eq!(neos[0].diameter(), 16.84);
        assert!(!neos[0].hazardous());

        // Missing name and diameter normalize; pha "Y" maps to hazardous.
        assert_eq!(neos[1].name(), None);
        assert!(neos[1].diameter_unknown());
        assert!(neos[1].hazardous());

        assert_eq!(neos[2].name(), Some("Albert"));
        assert!(neos[2].diameter_unknown());
    }

    #[test]
    fn test_load_neos_bad_diameter() {
        let file = write_temp("id,pdes,name,diameter,pha\nx,433,Eros,wide,N\n");
        let err = load_neos(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Number { .. }));
    }

    const CAD_JSON: &str = r#"{
        "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel"],
        "data": [
            ["433", "659", "2459216.5", "2021-Jan-01 12:30", "0.05", "0.04", "0.06", "10.0"],
            ["2021 AB", "1", "2459300.5", "2021-Mar-26 06:15", "0.15", "0.14", "0.16", "20.5"]
        ]
    }"#;

    #[test]
    fn test_load_approaches() {
        let file = write_temp(CAD_JSON);
        let approaches = load_approaches(file.path()).unwrap();
        assert_eq!(approaches.len(), 2);

        assert_eq!(approaches[0].designation(), "433");
        assert_eq!(approaches[0].time_str(), "2021-01-01 12:30");
        assert_eq!(approaches[0].distance(), 0.05);
        assert_eq!(approaches[0].velocity(), 10.0);
        assert_eq!(approaches[0].neo(), None);

        assert_eq!(approaches[1].designation(), "2021 AB");
        assert_eq!(approaches[1].time_str(), "2021-03-26 06:15");
    }

    #[test]
    fn test_load_approaches_resolves_columns_by_name() {
        // Same rows, shuffled header: positions must come from "fields".
        let shuffled = r#"{
            "fields": ["cd", "v_rel", "des", "dist"],
            "data": [["2021-Jan-01 12:30", "10.0", "433", "0.05"]]
        }"#;
        let file = write_temp(shuffled);
        let approaches = load_approaches(file.path()).unwrap();
        assert_eq!(approaches[0].designation(), "433");
        assert_eq!(approaches[0].distance(), 0.05);
        assert_eq!(approaches[0].velocity(), 10.0);
    }

    #[test]
    fn test_load_approaches_missing_field() {
        let file = write_temp(r#"{"fields": ["des", "cd", "dist"], "data": []}"#);
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField("v_rel")));
    }

    #[test]
    fn test_load_approaches_bad_timestamp() {
        let bad = r#"{
            "fields": ["des", "cd", "dist", "v_rel"],
            "data": [["433", "not a time", "0.05", "10.0"]]
        }"#;
        let file = write_temp(bad);
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Timestamp { .. }));
    }

    #[test]
    fn test_load_approaches_short_row() {
        let bad = r#"{
            "fields": ["des", "cd", "dist", "v_rel"],
            "data": [["433", "2021-Jan-01 12:30"]]
        }"#;
        let file = write_temp(bad);
        let err = load_approaches(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedRow(_)));
    }
}
