//! Keeps the rendered overlay consistent with the latest selection.
//!
//! One synchronizer exists per map view and owns all of that view's mutable
//! overlay state: the current selection, the active time control, the fetch
//! sequence counter, and the canonical rendered set. Nothing here is
//! global, so a process can host several independent map views.
//!
//! The synchronizer is transport-agnostic: selection-changing events return
//! a [`FetchTicket`] for the embedding app to execute, and the app feeds
//! the outcome back through [`OverlaySynchronizer::complete`]. All calls
//! happen on one UI task queue; no locking.

use foundation::geo::GeoRect;
use foundation::time::TimeIndex;

use crate::canvas::{OverlayCanvas, OverlayShape, RenderedOverlaySet};
use crate::controls::TimeControls;
use crate::protocol::DepthResponse;
use crate::request::{FetchError, FetchSeq, FetchTicket, depth_path};
use crate::selection::Selection;
use crate::symbology;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SyncState {
    /// No fetch outstanding.
    Idle,
    /// A fetch is outstanding for the current selection.
    Fetching,
}

/// What became of a reported fetch outcome.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The response was for the latest ticket and the overlay was replaced.
    Applied { shapes: usize },
    /// A newer ticket had been issued in the meantime; the completion was
    /// discarded without touching the overlay.
    Stale,
}

#[derive(Debug)]
pub struct OverlaySynchronizer {
    selection: Selection,
    controls: TimeControls,
    state: SyncState,
    next_seq: u64,
    latest: Option<FetchSeq>,
    rendered: RenderedOverlaySet,
}

impl OverlaySynchronizer {
    /// A synchronizer for a view that is not yet showing anything.
    ///
    /// `viewport` is the map's initial extent; the selection starts at the
    /// active control's period (the first, for a fresh page).
    pub fn new(viewport: GeoRect, controls: TimeControls) -> Self {
        let time = controls.active_time();
        Self {
            selection: Selection::new(viewport).with_time(time),
            controls,
            state: SyncState::Idle,
            next_seq: 1,
            latest: None,
            rendered: RenderedOverlaySet::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn rendered(&self) -> &RenderedOverlaySet {
        &self.rendered
    }

    pub fn controls(&self) -> &TimeControls {
        &self.controls
    }

    /// The map widget became ready with `viewport` as its initial extent.
    pub fn map_initialized(&mut self, viewport: GeoRect) -> FetchTicket {
        self.selection = self.selection.with_bounds(viewport);
        self.issue()
    }

    /// The user finished panning or zooming.
    ///
    /// Always issues a new ticket, even with a fetch still in flight; the
    /// superseded fetch is not cancelled, its completion is discarded by
    /// sequence number instead.
    pub fn viewport_changed(&mut self, viewport: GeoRect) -> FetchTicket {
        self.selection = self.selection.with_bounds(viewport);
        self.issue()
    }

    /// The user activated the time control at `index`.
    ///
    /// Marks that control as the sole active one and re-fetches for its
    /// period. An index that names no control changes nothing and issues
    /// no fetch.
    pub fn time_selected(&mut self, index: usize) -> Option<FetchTicket> {
        let time = self.controls.activate(index)?;
        self.selection = self.selection.with_time(time);
        Some(self.issue())
    }

    /// Reports the outcome of the fetch issued as `seq`.
    ///
    /// A success for the latest ticket replaces the rendered set wholesale:
    /// old shapes out, one encoded shape per response item in, overlay
    /// group attached. A failure for the latest ticket degrades in place,
    /// leaving whatever was already drawn, and hands the error back for the
    /// caller to log. Completions for superseded tickets are discarded
    /// outright, outcome and all.
    pub fn complete<C: OverlayCanvas>(
        &mut self,
        seq: FetchSeq,
        outcome: Result<DepthResponse, FetchError>,
        canvas: &mut C,
    ) -> Result<Completion, FetchError> {
        if self.latest != Some(seq) {
            return Ok(Completion::Stale);
        }
        self.state = SyncState::Idle;

        let response = outcome?;
        self.rendered.clear();
        canvas.clear();
        for cell in &response.items {
            let style = symbology::encode(cell, response.max_depth);
            let shape = OverlayShape {
                bounds: cell.rect(),
                css_color: style.css_color,
                color: style.color,
                opacity: style.opacity,
                tooltip: symbology::tooltip_text(cell),
            };
            canvas.add_shape(&shape);
            self.rendered.push(shape);
        }
        canvas.attach();
        Ok(Completion::Applied {
            shapes: self.rendered.len(),
        })
    }

    /// Convenience for the embedding app: the period carried by the active
    /// control.
    pub fn active_time(&self) -> TimeIndex {
        self.controls.active_time()
    }

    /// Tears the view down: shapes gone, overlay group off the map.
    ///
    /// Any fetch still in flight will complete as stale afterwards.
    pub fn teardown<C: OverlayCanvas>(&mut self, canvas: &mut C) {
        self.rendered.clear();
        canvas.clear();
        canvas.detach();
        self.latest = None;
        self.state = SyncState::Idle;
    }

    fn issue(&mut self) -> FetchTicket {
        let seq = FetchSeq(self.next_seq);
        self.next_seq += 1;
        self.latest = Some(seq);
        self.state = SyncState::Fetching;
        FetchTicket {
            seq,
            path: depth_path(&self.selection),
        }
    }
}
