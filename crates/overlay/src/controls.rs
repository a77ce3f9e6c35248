use foundation::time::TimeIndex;

/// The row of selectable forecast-period controls next to the map.
///
/// Mirrors the page's clickable period badges: an ordered list of time
/// indices with exactly one active entry, initially the first. The core
/// owns the active index; the embedding app only mirrors it onto whatever
/// widget styling marks the current control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeControls {
    entries: Vec<TimeIndex>,
    active: usize,
}

impl TimeControls {
    pub fn new(entries: Vec<TimeIndex>) -> Self {
        Self { entries, active: 0 }
    }

    pub fn entries(&self) -> &[TimeIndex] {
        &self.entries
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Time carried by the active control, or the default period when the
    /// page has no controls at all.
    pub fn active_time(&self) -> TimeIndex {
        self.entries
            .get(self.active)
            .copied()
            .unwrap_or_default()
    }

    /// Makes `index` the sole active control.
    ///
    /// Returns the newly active time, or `None` (state unchanged) when the
    /// index does not name a control.
    pub fn activate(&mut self, index: usize) -> Option<TimeIndex> {
        let time = *self.entries.get(index)?;
        self.active = index;
        Some(time)
    }
}

impl Default for TimeControls {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::TimeControls;
    use foundation::time::TimeIndex;

    fn controls() -> TimeControls {
        TimeControls::new(vec![
            TimeIndex::new(0, 0),
            TimeIndex::new(0, 6),
            TimeIndex::new(2, 5),
        ])
    }

    #[test]
    fn first_control_starts_active() {
        let c = controls();
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.active_time(), TimeIndex::new(0, 0));
    }

    #[test]
    fn activate_moves_the_single_active_mark() {
        let mut c = controls();
        assert_eq!(c.activate(2), Some(TimeIndex::new(2, 5)));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn activate_out_of_range_changes_nothing() {
        let mut c = controls();
        assert_eq!(c.activate(7), None);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn empty_controls_fall_back_to_default_period() {
        let c = TimeControls::default();
        assert_eq!(c.active_time(), TimeIndex::default());
    }
}
