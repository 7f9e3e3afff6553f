use super::location::LocationIdx;

pub type Distance = f64;

/// Directed distances between locations.
///
/// Entries are stored in a flat vector, the entry for a pair of locations
/// lives at `from * num_locations + to`. A pair that was never set has no
/// distance, the table never invents one. `d(a, b)` and `d(b, a)` are
/// independent entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable {
    distances: Vec<Option<Distance>>,
    num_locations: usize,
}

impl DistanceTable {
    pub fn new(num_locations: usize) -> Self {
        Self {
            distances: vec![None; num_locations * num_locations],
            num_locations,
        }
    }

    #[inline(always)]
    fn index(&self, from: LocationIdx, to: LocationIdx) -> usize {
        from.get() * self.num_locations + to.get()
    }

    /// Sets the distance for the directed pair, returning the previous value.
    ///
    /// # Panics
    ///
    /// Panics if either location is out of bounds.
    pub fn set(
        &mut self,
        from: LocationIdx,
        to: LocationIdx,
        distance: Distance,
    ) -> Option<Distance> {
        let index = self.index(from, to);
        self.distances[index].replace(distance)
    }

    #[inline(always)]
    pub fn get(&self, from: LocationIdx, to: LocationIdx) -> Option<Distance> {
        if from == to {
            return Some(0.0);
        }

        if from.get() >= self.num_locations || to.get() >= self.num_locations {
            return None;
        }

        self.distances[self.index(from, to)]
    }

    pub fn contains(&self, from: LocationIdx, to: LocationIdx) -> bool {
        self.get(from, to).is_some()
    }

    /// Whether every declared entry has an equal reverse entry.
    pub fn is_symmetric(&self) -> bool {
        self.entries()
            .all(|(from, to, distance)| self.get(to, from) == Some(distance))
    }

    /// Declared entries, row by row.
    pub fn entries(&self) -> impl Iterator<Item = (LocationIdx, LocationIdx, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(move |(index, distance)| {
                distance.map(|distance| {
                    (
                        LocationIdx::new(index / self.num_locations),
                        LocationIdx::new(index % self.num_locations),
                        distance,
                    )
                })
            })
    }
}
