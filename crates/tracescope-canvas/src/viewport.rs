//! Timeline viewport: timestamp to pixel mapping with zoom and pan.
//!
//! Markers on the surface work in pixel offsets; the trace data lives in
//! timestamps. The viewport owns the mapping between the two: it tracks
//! the full trace range, the currently visible sub-range, and the pixel
//! width of the surface. Marker position and range sources are typically
//! small closures over a shared viewport.

use tracescope_core::Segment;

/// Multiplier applied per zoom step.
const ZOOM_STEP: f64 = 1.2;

/// Maximum magnification of the visible range relative to the full
/// trace.
const MAX_ZOOM: f64 = 50.0;

/// Maps trace timestamps to surface pixel offsets.
///
/// The visible range is always contained in the full range and never
/// shorter than `full / MAX_ZOOM`, so the mapping stays well defined
/// while zooming and panning.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineViewport {
    full: Segment,
    visible: Segment,
    width_px: f64,
}

impl TimelineViewport {
    /// Creates a viewport showing the full trace range.
    ///
    /// An inverted `full` segment is normalized, so the span arithmetic
    /// behind zooming never sees a negative trace length.
    pub fn new(full: Segment, width_px: f64) -> Self {
        let full = if full.from <= full.to {
            full
        } else {
            Segment::new(full.to, full.from)
        };
        Self {
            full,
            visible: full,
            width_px,
        }
    }

    /// The full trace range.
    pub fn full(&self) -> Segment {
        self.full
    }

    /// The currently visible range.
    pub fn visible(&self) -> Segment {
        self.visible
    }

    /// Pixel width of the surface.
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Sets the pixel width (typically on surface resize).
    pub fn set_width_px(&mut self, width_px: f64) {
        self.width_px = width_px;
    }

    /// The pixel span markers may occupy, as a drag domain.
    pub fn pixel_range(&self) -> Segment {
        Segment::new(0.0, self.width_px)
    }

    /// Current magnification relative to the full trace (1.0 = fully
    /// zoomed out).
    pub fn zoom(&self) -> f64 {
        if self.visible.length() == 0.0 {
            1.0
        } else {
            self.full.length() / self.visible.length()
        }
    }

    /// Maps a timestamp to a pixel offset on the surface.
    ///
    /// Timestamps outside the visible range map to offsets outside
    /// `[0, width_px]`; markers clamp against their drag domain
    /// separately.
    pub fn position_of(&self, timestamp: f64) -> f64 {
        let span = self.visible.length();
        if span == 0.0 {
            return 0.0;
        }
        (timestamp - self.visible.from) / span * self.width_px
    }

    /// Maps a pixel offset back to a timestamp.
    pub fn timestamp_of(&self, px: f64) -> f64 {
        if self.width_px == 0.0 {
            return self.visible.from;
        }
        self.visible.from + px / self.width_px * self.visible.length()
    }

    /// Sets the visible range, normalized and constrained into the full
    /// trace range.
    pub fn set_visible(&mut self, range: Segment) {
        let (from, to) = if range.from <= range.to {
            (range.from, range.to)
        } else {
            (range.to, range.from)
        };
        let len = (to - from).min(self.full.length());
        self.apply_span(from, len);
    }

    /// Zooms in one step around the given focal timestamp.
    pub fn zoom_in(&mut self, focal: f64) {
        self.zoom_about(focal, 1.0 / ZOOM_STEP);
    }

    /// Zooms out one step around the given focal timestamp.
    pub fn zoom_out(&mut self, focal: f64) {
        self.zoom_about(focal, ZOOM_STEP);
    }

    /// Pans the visible range by a pixel delta (positive = later).
    pub fn pan_by(&mut self, delta_px: f64) {
        if self.width_px == 0.0 {
            return;
        }
        let dt = delta_px / self.width_px * self.visible.length();
        self.apply_span(self.visible.from + dt, self.visible.length());
    }

    /// Resets the viewport to show the full trace.
    pub fn reset(&mut self) {
        self.visible = self.full;
    }

    /// Scales the visible span by `factor`, keeping `focal` at the same
    /// fraction of the visible range.
    fn zoom_about(&mut self, focal: f64, factor: f64) {
        let span = self.visible.length();
        if span == 0.0 {
            return;
        }
        let min_span = self.full.length() / MAX_ZOOM;
        let new_span = (span * factor).clamp(min_span, self.full.length());
        let fraction = (focal - self.visible.from) / span;
        self.apply_span(focal - fraction * new_span, new_span);
    }

    /// Installs a visible span of the given length starting at `from`,
    /// shifted as needed to stay inside the full range.
    fn apply_span(&mut self, from: f64, len: f64) {
        let len = len.max(0.0).min(self.full.length());
        let mut from = from;
        if from + len > self.full.to {
            from = self.full.to - len;
        }
        if from < self.full.from {
            from = self.full.from;
        }
        self.visible = Segment::new(from, from + len);
    }
}
