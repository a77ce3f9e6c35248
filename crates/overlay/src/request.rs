//! Fetch tickets and the depth request path.
//!
//! Every selection change issues a new ticket; nothing in flight is ever
//! cancelled. Instead each ticket carries a monotonically increasing
//! sequence number and the synchronizer discards any completion whose
//! number is not the latest issued, so an old response racing a newer one
//! can never roll the overlay back.

use crate::selection::Selection;

/// Identifies one issued depth fetch.
///
/// Small, copyable, totally ordered by issue order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchSeq(pub u64);

/// A fetch the embedding app has been asked to execute.
///
/// The app performs the HTTP GET for `path` and reports the outcome back to
/// the synchronizer together with `seq`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: FetchSeq,
    pub path: String,
}

/// Request path for a selection.
///
/// Canonical bounds ordering is `west,south,east,north` (x-min, y-min,
/// x-max, y-max), matching the backend's bounding-box URL converter. The
/// older `south,west,north,east` ordering seen in early clients is not
/// supported.
pub fn depth_path(selection: &Selection) -> String {
    let b = selection.bounds;
    format!(
        "/depths/{}/{}/{},{},{},{}",
        selection.time.day, selection.time.hour, b.west, b.south, b.east, b.north
    )
}

/// Why a depth fetch produced no usable response.
///
/// All three variants are recovered identically: the stale overlay stays on
/// screen and the synchronizer returns to idle. None is fatal to the view.
#[derive(Debug)]
pub enum FetchError {
    /// The request never completed: network failure or timeout.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The body was not a well-formed depth response.
    Decode(serde_json::Error),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "depth fetch failed: {msg}"),
            FetchError::Status(code) => write!(f, "depth fetch failed: HTTP status {code}"),
            FetchError::Decode(err) => write!(f, "depth response malformed: {err}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::depth_path;
    use crate::selection::Selection;
    use foundation::geo::GeoRect;
    use foundation::time::TimeIndex;

    #[test]
    fn path_orders_bounds_west_south_east_north() {
        let sel = Selection::new(GeoRect::new(50.0, -1.0, 52.0, 1.0));
        assert_eq!(depth_path(&sel), "/depths/0/0/-1,50,1,52");
    }

    #[test]
    fn path_carries_day_and_hour() {
        let sel =
            Selection::new(GeoRect::new(50.0, -1.0, 52.0, 1.0)).with_time(TimeIndex::new(2, 5));
        assert_eq!(depth_path(&sel), "/depths/2/5/-1,50,1,52");
    }

    #[test]
    fn path_keeps_fractional_coordinates() {
        let sel = Selection::new(GeoRect::new(-7.05, 107.73, -7.044, 107.77));
        assert_eq!(depth_path(&sel), "/depths/0/0/107.73,-7.05,107.77,-7.044");
    }
}
