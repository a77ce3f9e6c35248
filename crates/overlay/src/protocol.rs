//! Wire format for the depth prediction endpoint.
//!
//! One response covers one (bounding box, time index) query:
//!
//! ```json
//! {
//!   "items": [
//!     { "bounds": [[50.0, -1.0], [51.0, 0.0]],
//!       "depth": 0.5, "lower_centile": 0.4, "upper_centile": 0.6 }
//!   ],
//!   "max_depth": 1.0
//! }
//! ```
//!
//! Decoding is strict: malformed JSON or a missing `items`/`max_depth`
//! field is a decode failure, never a defaulted value. The synchronizer
//! treats decode failures like transport failures and keeps whatever
//! overlay is already on screen.

use foundation::geo::GeoRect;
use serde::{Deserialize, Serialize};

/// One grid cell of the depth prediction.
///
/// `bounds` holds the southwest then northeast corner, each as `[lat, lng]`.
/// `depth` nominally falls within `[lower_centile, upper_centile]`, but
/// nothing downstream may assume it does.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthCell {
    pub bounds: [[f64; 2]; 2],
    pub depth: f64,
    pub lower_centile: f64,
    pub upper_centile: f64,
}

impl DepthCell {
    /// Geographic rectangle covered by this cell.
    pub fn rect(&self) -> GeoRect {
        let [[south, west], [north, east]] = self.bounds;
        GeoRect::new(south, west, north, east)
    }

    /// Width of the predictive interval, floored at zero.
    pub fn interval_width(&self) -> f64 {
        (self.upper_centile - self.lower_centile).max(0.0)
    }
}

/// Full payload for one selection.
///
/// `max_depth` is the normalization scale for color and opacity. A value of
/// zero means no predicted flooding anywhere in view; the symbology maps
/// that to a fully transparent overlay rather than dividing by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthResponse {
    pub items: Vec<DepthCell>,
    pub max_depth: f64,
}

pub fn decode_response(body: &str) -> Result<DepthResponse, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::{DepthCell, decode_response};
    use foundation::geo::GeoRect;

    #[test]
    fn decodes_well_formed_payload() {
        let body = r#"{
            "items": [
                { "bounds": [[50.0, -1.0], [51.0, 0.0]],
                  "depth": 0.5, "lower_centile": 0.4, "upper_centile": 0.6 }
            ],
            "max_depth": 1.0
        }"#;
        let resp = decode_response(body).expect("decode");
        assert_eq!(resp.max_depth, 1.0);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].rect(), GeoRect::new(50.0, -1.0, 51.0, 0.0));
    }

    #[test]
    fn rejects_missing_max_depth() {
        let body = r#"{ "items": [] }"#;
        assert!(decode_response(body).is_err());
    }

    #[test]
    fn rejects_missing_items() {
        let body = r#"{ "max_depth": 2.0 }"#;
        assert!(decode_response(body).is_err());
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(decode_response("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn empty_items_is_valid() {
        let resp = decode_response(r#"{ "items": [], "max_depth": 1.5 }"#).expect("decode");
        assert!(resp.items.is_empty());
    }

    #[test]
    fn interval_width_floors_inverted_centiles() {
        let cell = DepthCell {
            bounds: [[0.0, 0.0], [1.0, 1.0]],
            depth: 0.5,
            lower_centile: 0.8,
            upper_centile: 0.2,
        };
        assert_eq!(cell.interval_width(), 0.0);
    }
}
