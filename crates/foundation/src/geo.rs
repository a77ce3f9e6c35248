/// Axis-aligned geographic rectangles in WGS84 degrees.
///
/// Edges are named rather than packed into min/max arrays because both the
/// depth request path and the backend's wire format are edge-ordered, and
/// mixing up an ordering silently queries the wrong region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoRect {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoRect {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Southwest corner as `[lat, lng]`, matching the wire format's corners.
    pub fn south_west(&self) -> [f64; 2] {
        [self.south, self.west]
    }

    /// Northeast corner as `[lat, lng]`.
    pub fn north_east(&self) -> [f64; 2] {
        [self.north, self.east]
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    pub fn intersects(&self, other: &GeoRect) -> bool {
        self.west <= other.east
            && other.west <= self.east
            && self.south <= other.north
            && other.south <= self.north
    }
}

#[cfg(test)]
mod tests {
    use super::GeoRect;

    #[test]
    fn corners_are_lat_lng() {
        let r = GeoRect::new(50.0, -1.0, 52.0, 1.0);
        assert_eq!(r.south_west(), [50.0, -1.0]);
        assert_eq!(r.north_east(), [52.0, 1.0]);
    }

    #[test]
    fn contains_point_inside() {
        let r = GeoRect::new(50.0, -1.0, 52.0, 1.0);
        assert!(r.contains(51.0, 0.0));
        assert!(!r.contains(49.0, 0.0));
        assert!(!r.contains(51.0, 2.0));
    }

    #[test]
    fn intersects_overlapping_and_disjoint() {
        let a = GeoRect::new(50.0, -1.0, 52.0, 1.0);
        let b = GeoRect::new(51.0, 0.0, 53.0, 2.0);
        let c = GeoRect::new(55.0, 5.0, 56.0, 6.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }
}
