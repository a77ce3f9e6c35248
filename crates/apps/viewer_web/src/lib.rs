//! Wasm entry points wiring the overlay synchronizer to the page.
//!
//! The page calls `init_overlay` from its map-init handler, then forwards
//! moveend and period-control clicks to `notify_viewport_changed` and
//! `notify_time_selected`. All state lives in one thread-local slot per
//! view; fetches run through `gloo-net` on the UI task queue with a bounded
//! timeout, and stale completions are discarded by the synchronizer.

use std::cell::RefCell;

use console_error_panic_hook::set_once;
use futures_util::future::{Either, select};
use futures_util::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use foundation::geo::GeoRect;
use foundation::time::TimeIndex;
use overlay::controls::TimeControls;
use overlay::protocol::{DepthResponse, decode_response};
use overlay::request::{FetchError, FetchSeq, FetchTicket};
use overlay::symbology;
use overlay::synchronizer::{Completion, OverlaySynchronizer};

mod map;
use map::{MapBridge, WidgetCanvas};

const FETCH_TIMEOUT_MS: u32 = 15_000;

struct App {
    sync: OverlaySynchronizer,
    bridge: MapBridge,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// One period control as declared by the page, `hour` defaulting to 0 for
/// day-granularity pages.
#[derive(Debug, Deserialize)]
struct ControlSpec {
    day: u32,
    #[serde(default)]
    hour: u32,
}

fn warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

fn viewport_of(bridge: &MapBridge) -> Option<GeoRect> {
    let b = bridge.view_bounds();
    match b.as_slice() {
        [south, west, north, east] => Some(GeoRect::new(*south, *west, *north, *east)),
        _ => {
            warn("map bridge returned malformed view bounds");
            None
        }
    }
}

fn parse_controls(controls_json: &str) -> TimeControls {
    match serde_json::from_str::<Vec<ControlSpec>>(controls_json) {
        Ok(specs) => TimeControls::new(
            specs
                .iter()
                .map(|s| TimeIndex::new(s.day, s.hour))
                .collect(),
        ),
        Err(err) => {
            warn(&format!("ignoring malformed period controls: {err}"));
            TimeControls::default()
        }
    }
}

/// The map widget is ready: build the view's synchronizer and fetch the
/// overlay for the initial viewport and the default period.
#[wasm_bindgen]
pub fn init_overlay(bridge: MapBridge, controls_json: &str) {
    set_once();

    let Some(viewport) = viewport_of(&bridge) else {
        return;
    };
    let mut sync = OverlaySynchronizer::new(viewport, parse_controls(controls_json));
    let ticket = sync.map_initialized(viewport);
    bridge.set_active_control(sync.controls().active_index());

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App { sync, bridge });
    });
    run_fetch(ticket);
}

/// The user finished panning or zooming.
#[wasm_bindgen]
pub fn notify_viewport_changed() {
    let ticket = APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let app = slot.as_mut()?;
        let viewport = viewport_of(&app.bridge)?;
        Some(app.sync.viewport_changed(viewport))
    });
    if let Some(ticket) = ticket {
        run_fetch(ticket);
    }
}

/// The user clicked the period control at `index`.
#[wasm_bindgen]
pub fn notify_time_selected(index: usize) {
    let ticket = APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let app = slot.as_mut()?;
        let ticket = app.sync.time_selected(index)?;
        app.bridge
            .set_active_control(app.sync.controls().active_index());
        Some(ticket)
    });
    if let Some(ticket) = ticket {
        run_fetch(ticket);
    }
}

/// The map view is going away: drop shapes, detach the group, forget state.
#[wasm_bindgen]
pub fn teardown_overlay() {
    APP.with(|slot| {
        if let Some(mut app) = slot.borrow_mut().take() {
            let mut canvas = WidgetCanvas::new(&app.bridge);
            app.sync.teardown(&mut canvas);
        }
    });
}

/// Background color for a period's risk badge, fraction in `[0, 1]`.
#[wasm_bindgen]
pub fn risk_color(fraction: f64) -> String {
    symbology::risk_css_color(fraction)
}

/// Whether the badge at `fraction` needs white text to stay readable.
#[wasm_bindgen]
pub fn risk_needs_light_text(fraction: f64) -> bool {
    symbology::risk_text_is_light(fraction)
}

fn run_fetch(ticket: FetchTicket) {
    spawn_local(async move {
        let outcome = fetch_depths(&ticket.path).await;
        apply_completion(ticket.seq, outcome);
    });
}

async fn fetch_depths(path: &str) -> Result<DepthResponse, FetchError> {
    let fetch = async {
        let resp = Request::get(path)
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp
            .text()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        decode_response(&body).map_err(FetchError::Decode)
    };
    pin_mut!(fetch);
    let timeout = TimeoutFuture::new(FETCH_TIMEOUT_MS);
    pin_mut!(timeout);

    match select(fetch, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(FetchError::Transport(format!(
            "no response within {FETCH_TIMEOUT_MS}ms"
        ))),
    }
}

fn apply_completion(seq: FetchSeq, outcome: Result<DepthResponse, FetchError>) {
    APP.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(app) = slot.as_mut() else {
            // View torn down while the fetch was in flight.
            return;
        };
        let App { sync, bridge } = app;
        let mut canvas = WidgetCanvas::new(bridge);
        match sync.complete(seq, outcome, &mut canvas) {
            Ok(Completion::Applied { .. }) | Ok(Completion::Stale) => {}
            Err(err) => warn(&format!("keeping previous overlay: {err}")),
        }
    });
}
