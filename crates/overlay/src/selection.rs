use foundation::geo::GeoRect;
use foundation::time::TimeIndex;

/// The current query context: which region and which forecast period the
/// viewer is looking at.
///
/// Exactly one selection is current per synchronizer. It is replaced
/// wholesale on every viewport or time change, never partially mutated in
/// place, so a fetch ticket always snapshots a coherent pair.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Selection {
    pub bounds: GeoRect,
    pub time: TimeIndex,
}

impl Selection {
    /// Selection for a fresh map view: the initial viewport at the default
    /// `(0, 0)` period.
    pub fn new(bounds: GeoRect) -> Self {
        Self {
            bounds,
            time: TimeIndex::default(),
        }
    }

    pub fn with_bounds(self, bounds: GeoRect) -> Self {
        Self { bounds, ..self }
    }

    pub fn with_time(self, time: TimeIndex) -> Self {
        Self { time, ..self }
    }
}
