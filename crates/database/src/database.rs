//! Database construction, linking, and the query surface.

use neodb_core::{CloseApproach, NearEarthObject};
use neodb_index::HashIndex;
use neodb_query::Filter;
use tracing::debug;

/// An in-memory database of near-Earth objects and their close approaches.
///
/// The database owns both entity collections in input order and maintains two
/// auxiliary hash indexes: designation -> arena position (every NEO) and
/// name -> arena position (only NEOs with a present, non-empty name).
/// Cross-links between entities are plain arena positions, so the database is
/// the sole lifetime authority for both collections.
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashIndex<String>,
    by_name: HashIndex<String>,
}

impl NeoDatabase {
    /// Builds the database from independently constructed collections.
    ///
    /// As a precondition, the collections have not been linked yet: every
    /// NEO's approach list is empty and every approach's NEO reference is
    /// absent. This constructor builds both indexes in a single pass over the
    /// NEOs, then resolves each approach's designation through the
    /// designation index, in input order. A hit links both directions; a miss
    /// leaves the approach unlinked and is not an error. Construction never
    /// fails.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashIndex::with_capacity(neos.len());
        let mut by_name = HashIndex::new();
        for (id, neo) in neos.iter().enumerate() {
            by_designation.set(neo.designation().to_string(), id);
            if let Some(name) = neo.name() {
                by_name.set(name.to_string(), id);
            }
        }

        let mut linked = 0usize;
        for (id, approach) in approaches.iter_mut().enumerate() {
            if let Some(neo_id) = by_designation.get(approach.designation()) {
                approach.link(neo_id);
                neos[neo_id].push_approach(id);
                linked += 1;
            }
        }
        debug!(
            neos = neos.len(),
            approaches = approaches.len(),
            linked,
            "built NEO database"
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
        }
    }

    /// Returns the NEO collection, in input order.
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// Returns the close-approach collection, in input order.
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Finds an NEO by its primary designation.
    ///
    /// Matching is byte-exact; capitalization and whitespace variations do
    /// not match. O(1) expected.
    pub fn neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|id| &self.neos[id])
    }

    /// Finds an NEO by its IAU name.
    ///
    /// Matching is byte-exact. Not every NEO has a name; neither the empty
    /// string nor an absent name ever matches anything. O(1) expected.
    pub fn neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|id| &self.neos[id])
    }

    /// Returns the NEO an approach was linked to, if any.
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo().map(|id| &self.neos[id])
    }

    /// Returns an NEO's linked approaches, in input order.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches().iter().map(|&id| &self.approaches[id])
    }

    /// Lazily streams close approaches matching `filter`, in storage order
    /// (the input file's order, commonly chronological but not guaranteed).
    ///
    /// `None` is the "no filter" sentinel and yields every approach. Nothing
    /// is materialized eagerly: a consumer that stops after a prefix costs
    /// only that prefix.
    pub fn query<'a>(&'a self, filter: Option<&'a Filter>) -> Query<'a> {
        Query {
            db: self,
            approaches: self.approaches.iter(),
            filter,
        }
    }
}

/// Lazy stream of matching close approaches. Finite; not restartable after
/// exhaustion.
pub struct Query<'a> {
    db: &'a NeoDatabase,
    approaches: core::slice::Iter<'a, CloseApproach>,
    filter: Option<&'a Filter>,
}

impl<'a> Iterator for Query<'a> {
    type Item = &'a CloseApproach;

    fn next(&mut self) -> Option<Self::Item> {
        for approach in self.approaches.by_ref() {
            let Some(filter) = self.filter else {
                return Some(approach);
            };
            if filter.matches(approach, self.db.neo_for(approach)) {
                return Some(approach);
            }
        }
        None
    }
}
