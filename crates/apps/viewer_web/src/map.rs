//! Bindings to the page's map widget.
//!
//! The page hands over one bridge object per map view. Its methods wrap the
//! Leaflet-style calls the overlay needs: reading the viewport, filling a
//! layer group with styled rectangles, and putting that group on or off the
//! map. Keeping the bridge on the JS side means the page, not this crate,
//! decides which map library is in use.

use overlay::canvas::{OverlayCanvas, OverlayShape};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type MapBridge;

    /// Current viewport as `[south, west, north, east]` degrees.
    #[wasm_bindgen(method, js_name = viewBounds)]
    pub fn view_bounds(this: &MapBridge) -> Vec<f64>;

    /// Remove every shape from the overlay layer group.
    #[wasm_bindgen(method, js_name = clearOverlay)]
    pub fn clear_overlay(this: &MapBridge);

    /// Add one rectangle with a fill color, fill opacity, and tooltip HTML.
    #[wasm_bindgen(method, js_name = addRectangle)]
    pub fn add_rectangle(
        this: &MapBridge,
        south: f64,
        west: f64,
        north: f64,
        east: f64,
        fill_color: &str,
        fill_opacity: f64,
        tooltip_html: &str,
    );

    /// Ensure the overlay layer group is on the map.
    #[wasm_bindgen(method, js_name = attachOverlay)]
    pub fn attach_overlay(this: &MapBridge);

    /// Take the overlay layer group off the map.
    #[wasm_bindgen(method, js_name = detachOverlay)]
    pub fn detach_overlay(this: &MapBridge);

    /// Mark the period control at `index` as the sole current one.
    #[wasm_bindgen(method, js_name = setActiveControl)]
    pub fn set_active_control(this: &MapBridge, index: usize);
}

/// [`OverlayCanvas`] over the page's bridge object.
pub struct WidgetCanvas<'a> {
    bridge: &'a MapBridge,
}

impl<'a> WidgetCanvas<'a> {
    pub fn new(bridge: &'a MapBridge) -> Self {
        Self { bridge }
    }
}

impl OverlayCanvas for WidgetCanvas<'_> {
    fn clear(&mut self) {
        self.bridge.clear_overlay();
    }

    fn add_shape(&mut self, shape: &OverlayShape) {
        let b = shape.bounds;
        // The tooltip body is plain text with newlines; the widget renders HTML.
        let tooltip = shape.tooltip.replace('\n', "<br>");
        self.bridge.add_rectangle(
            b.south,
            b.west,
            b.north,
            b.east,
            &shape.css_color,
            shape.opacity,
            &tooltip,
        );
    }

    fn attach(&mut self) {
        self.bridge.attach_overlay();
    }

    fn detach(&mut self) {
        self.bridge.detach_overlay();
    }
}
