/// Discrete forecast period index: days ahead of "today", plus an hour slot.
///
/// The default `(0, 0)` is the current period and is what a freshly opened
/// map view displays until the user picks something else.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeIndex {
    pub day: u32,
    pub hour: u32,
}

impl TimeIndex {
    pub fn new(day: u32, hour: u32) -> Self {
        Self { day, hour }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeIndex;

    #[test]
    fn default_is_first_period() {
        assert_eq!(TimeIndex::default(), TimeIndex::new(0, 0));
    }

    #[test]
    fn orders_by_day_then_hour() {
        assert!(TimeIndex::new(0, 5) < TimeIndex::new(1, 0));
        assert!(TimeIndex::new(2, 3) < TimeIndex::new(2, 4));
    }
}
