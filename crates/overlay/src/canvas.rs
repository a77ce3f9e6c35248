use foundation::geo::GeoRect;

/// One rendered cell: geometry plus its computed visual encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayShape {
    pub bounds: GeoRect,
    pub css_color: String,
    pub color: [f32; 4],
    pub opacity: f64,
    pub tooltip: String,
}

/// The canonical set of currently drawn shapes for one map view.
///
/// Owned exclusively by the synchronizer: created empty, replaced wholesale
/// per processed response, emptied again at teardown. The map widget's
/// layer group is a mirror of this set, kept in step through
/// [`OverlayCanvas`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedOverlaySet {
    shapes: Vec<OverlayShape>,
}

impl RenderedOverlaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shapes(&self) -> &[OverlayShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.shapes.clear();
    }

    pub(crate) fn push(&mut self, shape: OverlayShape) {
        self.shapes.push(shape);
    }
}

/// The only seam through which the core touches the map widget.
///
/// The wasm app implements this over the page's Leaflet-style bindings
/// (rectangle with fill color, fill opacity, tooltip; layer-group add and
/// remove). Tests implement it with a recording fake.
pub trait OverlayCanvas {
    /// Remove every shape from the widget's overlay group.
    fn clear(&mut self);

    /// Draw one rectangle into the overlay group.
    fn add_shape(&mut self, shape: &OverlayShape);

    /// Ensure the overlay group is on the map.
    fn attach(&mut self);

    /// Take the overlay group off the map.
    fn detach(&mut self);
}
