//! Close approach entity.

use crate::neo::{NearEarthObject, NeoId};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Position of a `CloseApproach` in the database arena.
pub type ApproachId = usize;

/// Output format for approach timestamps. The input data set carries no
/// seconds, so the serialized form doesn't either.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single close approach to Earth by an NEO.
///
/// A `CloseApproach` records the date and time (UTC) of closest approach, the
/// nominal approach distance in astronomical units, and the relative approach
/// velocity in kilometers per second.
///
/// It also holds the position of its `NearEarthObject` in the database arena -
/// initially only the NEO's primary designation is known, and the position is
/// set exactly once by the database during linking. An approach whose
/// designation matches no loaded NEO simply stays unlinked.
#[derive(Clone, Debug)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl CloseApproach {
    /// Creates a new close approach, not yet linked to its NEO.
    ///
    /// The timestamp is already parsed; turning the data file's compact
    /// date-time string into a `NaiveDateTime` is the loader's job.
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Returns the primary designation of the NEO this approach belongs to.
    #[inline]
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns the date and time (UTC) of closest approach.
    #[inline]
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Returns the calendar date of closest approach, with the time-of-day
    /// dropped. Date criteria compare against this.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Returns the nominal approach distance in astronomical units.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the relative approach velocity in kilometers per second.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the arena position of the linked NEO, if linking found one.
    #[inline]
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Links this approach to its NEO. Called exactly once by the database
    /// during linking.
    pub fn link(&mut self, id: NeoId) {
        self.neo = Some(id);
    }

    /// Returns the approach time formatted as `YYYY-MM-DD HH:MM`.
    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// Returns a human-readable summary line. With the linked NEO supplied
    /// its full name is used; otherwise the raw designation stands in.
    pub fn describe(&self, neo: Option<&NearEarthObject>) -> String {
        let name = match neo {
            Some(neo) => neo.fullname(),
            None => self.designation.clone(),
        };
        format!(
            "On {}, '{}' passes by Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            name,
            self.distance,
            self.velocity
        )
    }

    /// Serializes this close approach into its output record.
    pub fn to_record(&self) -> ApproachRecord {
        ApproachRecord {
            datetime_utc: self.time_str(),
            distance_au: self.distance,
            velocity_km_s: self.velocity,
        }
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(None))
    }
}

/// Serialization record for a `CloseApproach`.
#[derive(Clone, Debug, Serialize)]
pub struct ApproachRecord {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
}
