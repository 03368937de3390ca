//! Near-Earth object entity.

use crate::approach::ApproachId;
use serde::Serialize;
use std::fmt;

/// Position of a `NearEarthObject` in the database arena.
pub type NeoId = usize;

/// A near-Earth object (NEO).
///
/// An NEO carries its primary designation (required, unique), an optional IAU
/// name, a diameter in kilometers (`f64::NAN` when unknown), and whether it is
/// flagged as potentially hazardous.
///
/// It also maintains the positions of its linked close approaches - empty at
/// construction, populated by the database during linking.
#[derive(Clone, Debug)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates a new NEO, applying the default substitutions in one place:
    /// an empty or absent name becomes "no name" (`None`), an absent diameter
    /// becomes the unknown sentinel (`f64::NAN`).
    ///
    /// No further validation happens here; coercing raw field strings into
    /// typed arguments is the loader's job.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.filter(|n| !n.is_empty()),
            diameter: diameter.unwrap_or(f64::NAN),
            hazardous,
            approaches: Vec::new(),
        }
    }

    /// Returns the primary designation.
    #[inline]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns the IAU name, if the object has one.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the diameter in kilometers. NaN means unknown.
    #[inline]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns true if the diameter is unknown.
    #[inline]
    pub fn diameter_unknown(&self) -> bool {
        self.diameter.is_nan()
    }

    /// Returns whether the object is flagged potentially hazardous.
    #[inline]
    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Returns the full display name: `"designation (name)"` when named,
    /// otherwise the designation alone.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Returns the positions of this NEO's linked close approaches,
    /// in the order they were linked.
    #[inline]
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// Registers a linked close approach. Called by the database during
    /// linking; entities are never re-linked afterwards.
    pub fn push_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }

    /// Serializes this NEO into its output record.
    ///
    /// An absent name serializes as the empty string and an unknown diameter
    /// as NaN - different conventions from the display formatting, and kept
    /// that way deliberately for output-format compatibility.
    pub fn to_record(&self) -> NeoRecord {
        NeoRecord {
            designation: self.designation.clone(),
            name: self.name.clone().unwrap_or_default(),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.diameter.is_nan() {
            write!(f, "NEO {} has an unknown diameter", self.fullname())?;
        } else {
            write!(f, "NEO {} has a diameter of {:.3} km", self.fullname(), self.diameter)?;
        }
        if self.hazardous {
            write!(f, " and is potentially hazardous.")
        } else {
            write!(f, " and is not potentially hazardous.")
        }
    }
}

/// Serialization record for a `NearEarthObject`.
#[derive(Clone, Debug, Serialize)]
pub struct NeoRecord {
    pub designation: String,
    pub name: String,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullname_with_name() {
        let neo = NearEarthObject::new("433", Some("Eros".into()), Some(16.84), false);
        assert_eq!(neo.fullname(), "433 (Eros)");
    }

    #[test]
    fn test_fullname_without_name() {
        let neo = NearEarthObject::new("2021 AB", None, None, false);
        assert_eq!(neo.fullname(), "2021 AB");
    }

    #[test]
    fn test_empty_name_normalizes_to_absent() {
        let neo = NearEarthObject::new("2021 AB", Some(String::new()), None, false);
        assert_eq!(neo.name(), None);
        assert_eq!(neo.fullname(), "2021 AB");
    }

    #[test]
    fn test_absent_diameter_is_unknown() {
        let neo = NearEarthObject::new("2021 AB", None, None, false);
        assert!(neo.diameter_unknown());
        assert!(neo.diameter().is_nan());

        let sized = NearEarthObject::new("433", None, Some(16.84), false);
        assert!(!sized.diameter_unknown());
        assert_eq!(sized.diameter(), 16.84);
    }

    #[test]
    fn test_zero_diameter_is_not_unknown() {
        let neo = NearEarthObject::new("2021 AB", None, Some(0.0), false);
        assert!(!neo.diameter_unknown());
    }

    #[test]
    fn test_display_unknown_diameter() {
        let neo = NearEarthObject::new("2021 AB", None, None, false);
        let text = neo.to_string();
        assert!(text.contains("unknown diameter"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_display_hazardous() {
        let neo = NearEarthObject::new("433", Some("Eros".into()), Some(16.84), true);
        let text = neo.to_string();
        assert!(text.contains("433 (Eros)"));
        assert!(text.contains("16.840 km"));
        assert!(text.contains("is potentially hazardous"));

        let safe = NearEarthObject::new("433", None, None, false);
        assert!(safe.to_string().contains("not potentially hazardous"));
    }

    #[test]
    fn test_record_absent_name_is_empty_string() {
        let neo = NearEarthObject::new("2021 AB", None, None, false);
        let record = neo.to_record();
        assert_eq!(record.designation, "2021 AB");
        assert_eq!(record.name, "");
        assert!(record.diameter_km.is_nan());
        assert!(!record.potentially_hazardous);
    }

    #[test]
    fn test_record_present_fields() {
        let neo = NearEarthObject::new("433", Some("Eros".into()), Some(16.84), true);
        let record = neo.to_record();
        assert_eq!(record.name, "Eros");
        assert_eq!(record.diameter_km, 16.84);
        assert!(record.potentially_hazardous);
    }

    #[test]
    fn test_record_json_shape() {
        let neo = NearEarthObject::new("2021 AB", None, None, false);
        let json = serde_json::to_value(neo.to_record()).unwrap();
        assert_eq!(json["designation"], "2021 AB");
        assert_eq!(json["name"], "");
        // serde_json has no NaN literal; the unknown sentinel becomes null.
        assert!(json["diameter_km"].is_null());
        assert_eq!(json["potentially_hazardous"], false);
    }

    #[test]
    fn test_push_approach_preserves_order() {
        let mut neo = NearEarthObject::new("433", None, None, false);
        neo.push_approach(3);
        neo.push_approach(1);
        neo.push_approach(7);
        assert_eq!(neo.approaches(), &[3, 1, 7]);
    }
}
