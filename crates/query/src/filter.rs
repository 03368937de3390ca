//! Criterion and filter definitions for close-approach queries.

use chrono::NaiveDate;
use core::cmp::Ordering;
use neodb_core::{CloseApproach, DataType, NearEarthObject, Value};

/// Comparison operator for a criterion.
///
/// The set covers everything the query surface needs to express: exact date,
/// on-or-after, on-or-before, minimum, maximum, and exact hazard flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    /// Equal
    Eq,
    /// Greater than or equal
    Ge,
    /// Less than or equal
    Le,
}

impl CmpOp {
    /// Applies the operator to an attribute/reference ordering. An
    /// incomparable pair (NaN on either side) satisfies no operator.
    fn eval(self, ord: Option<Ordering>) -> bool {
        matches!(
            (self, ord),
            (CmpOp::Eq, Some(Ordering::Equal))
                | (CmpOp::Ge, Some(Ordering::Greater | Ordering::Equal))
                | (CmpOp::Le, Some(Ordering::Less | Ordering::Equal))
        )
    }
}

/// Attribute of a close approach (or its linked NEO) that a criterion tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Calendar date of the approach timestamp (time-of-day dropped)
    Date,
    /// Nominal approach distance (au)
    Distance,
    /// Relative approach velocity (km/s)
    Velocity,
    /// Diameter of the linked NEO (km)
    Diameter,
    /// Hazard flag of the linked NEO
    Hazardous,
}

impl Selector {
    /// Returns the reference value type this selector compares against.
    pub fn data_type(self) -> DataType {
        match self {
            Selector::Date => DataType::Date,
            Selector::Distance | Selector::Velocity | Selector::Diameter => DataType::Float64,
            Selector::Hazardous => DataType::Boolean,
        }
    }

    /// Resolves the attribute on an approach. Diameter and hazardous read
    /// through the linked NEO and resolve to `None` for an unlinked approach.
    fn resolve(self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> Option<Value> {
        match self {
            Selector::Date => Some(Value::Date(approach.date())),
            Selector::Distance => Some(Value::Float64(approach.distance())),
            Selector::Velocity => Some(Value::Float64(approach.velocity())),
            Selector::Diameter => neo.map(|n| Value::Float64(n.diameter())),
            Selector::Hazardous => neo.map(|n| Value::Boolean(n.hazardous())),
        }
    }
}

/// A single criterion: one (selector, operator, reference value) test.
#[derive(Clone, Copy, Debug)]
pub struct Criterion {
    pub selector: Selector,
    pub op: CmpOp,
    pub value: Value,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(selector: Selector, op: CmpOp, value: Value) -> Self {
        Self { selector, op, value }
    }

    /// Evaluates this criterion against an approach and its linked NEO.
    ///
    /// An approach with no linked NEO never satisfies a diameter or hazardous
    /// criterion.
    ///
    /// # Panics
    ///
    /// Panics if the reference value's type does not match the selector.
    /// That is a bug in criterion wiring, not bad user input; the typed
    /// builder never produces such a criterion.
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        assert_eq!(
            self.value.data_type(),
            self.selector.data_type(),
            "criterion value type does not fit selector {:?}",
            self.selector
        );
        match self.selector.resolve(approach, neo) {
            Some(attr) => self.op.eval(attr.partial_cmp(&self.value)),
            None => false,
        }
    }
}

/// A conjunction of criteria.
///
/// An approach satisfies the filter iff it satisfies every criterion; an
/// empty conjunction matches everything.
#[derive(Clone, Debug, Default)]
pub struct Filter {
    criteria: Vec<Criterion>,
}

impl Filter {
    /// Creates a filter from an ordered list of criteria.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// Starts a builder over the user-facing query bounds.
    pub fn builder() -> FilterBuilder {
        FilterBuilder::default()
    }

    /// Returns the criteria, in construction order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Evaluates the conjunction against an approach and its linked NEO.
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        self.criteria.iter().all(|c| c.matches(approach, neo))
    }
}

/// Builder turning optional user-supplied bounds into a `Filter`.
///
/// `build` emits exactly one criterion per supplied bound, in a fixed order
/// independent of the order the setters were called in: date-equality,
/// start date, end date, distance min/max, velocity min/max, diameter
/// min/max, hazardous-equality. With no bounds supplied at all it yields
/// `None` - the "no filter" sentinel, behaviorally equivalent to an empty
/// filter.
#[derive(Clone, Debug, Default)]
pub struct FilterBuilder {
    date: Option<NaiveDate>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    distance_min: Option<f64>,
    distance_max: Option<f64>,
    velocity_min: Option<f64>,
    velocity_max: Option<f64>,
    diameter_min: Option<f64>,
    diameter_max: Option<f64>,
    hazardous: Option<bool>,
}

impl FilterBuilder {
    /// Matches approaches occurring on exactly this date.
    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Matches approaches occurring on or after this date.
    pub fn start_date(mut self, date: Option<NaiveDate>) -> Self {
        self.start_date = date;
        self
    }

    /// Matches approaches occurring on or before this date.
    pub fn end_date(mut self, date: Option<NaiveDate>) -> Self {
        self.end_date = date;
        self
    }

    /// Matches approaches at least this far from Earth (au, inclusive).
    pub fn distance_min(mut self, distance: Option<f64>) -> Self {
        self.distance_min = distance;
        self
    }

    /// Matches approaches at most this far from Earth (au, inclusive).
    pub fn distance_max(mut self, distance: Option<f64>) -> Self {
        self.distance_max = distance;
        self
    }

    /// Matches approaches at least this fast (km/s, inclusive).
    pub fn velocity_min(mut self, velocity: Option<f64>) -> Self {
        self.velocity_min = velocity;
        self
    }

    /// Matches approaches at most this fast (km/s, inclusive).
    pub fn velocity_max(mut self, velocity: Option<f64>) -> Self {
        self.velocity_max = velocity;
        self
    }

    /// Matches approaches of NEOs at least this large (km, inclusive).
    pub fn diameter_min(mut self, diameter: Option<f64>) -> Self {
        self.diameter_min = diameter;
        self
    }

    /// Matches approaches of NEOs at most this large (km, inclusive).
    pub fn diameter_max(mut self, diameter: Option<f64>) -> Self {
        self.diameter_max = diameter;
        self
    }

    /// Matches approaches of NEOs with exactly this hazard flag.
    pub fn hazardous(mut self, hazardous: Option<bool>) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Builds the filter, or `None` if no bounds were supplied.
    pub fn build(self) -> Option<Filter> {
        let mut criteria = Vec::new();
        if let Some(v) = self.date {
            criteria.push(Criterion::new(Selector::Date, CmpOp::Eq, v.into()));
        }
        if let Some(v) = self.start_date {
            criteria.push(Criterion::new(Selector::Date, CmpOp::Ge, v.into()));
        }
        if let Some(v) = self.end_date {
            criteria.push(Criterion::new(Selector::Date, CmpOp::Le, v.into()));
        }
        if let Some(v) = self.distance_min {
            criteria.push(Criterion::new(Selector::Distance, CmpOp::Ge, v.into()));
        }
        if let Some(v) = self.distance_max {
            criteria.push(Criterion::new(Selector::Distance, CmpOp::Le, v.into()));
        }
        if let Some(v) = self.velocity_min {
            criteria.push(Criterion::new(Selector::Velocity, CmpOp::Ge, v.into()));
        }
        if let Some(v) = self.velocity_max {
            criteria.push(Criterion::new(Selector::Velocity, CmpOp::Le, v.into()));
        }
        if let Some(v) = self.diameter_min {
            criteria.push(Criterion::new(Selector::Diameter, CmpOp::Ge, v.into()));
        }
        if let Some(v) = self.diameter_max {
            criteria.push(Criterion::new(Selector::Diameter, CmpOp::Le, v.into()));
        }
        if let Some(v) = self.hazardous {
            criteria.push(Criterion::new(Selector::Hazardous, CmpOp::Eq, v.into()));
        }

        if criteria.is_empty() {
            None
        } else {
            Some(Filter::new(criteria))
        }
    }
}
