//! Draggable marker objects.
//!
//! A [`DraggableObject`] is one draggable handle on a shared surface: a
//! timeline cursor, a trace-range edge, a bookmark flag. It owns no
//! persistent position. While idle its position comes from the embedding
//! layer through its position source; while a drag gesture is in
//! progress it carries the clamped drag position and reverts to the
//! source on drop.

use crate::context::DrawContext;
use serde::{Deserialize, Serialize};
use tracescope_core::{DragCallback, PositionSource, RangeSource, Segment};

/// Defines the paint/hit geometry of a marker for a given position.
///
/// Invoked with a freshly reset path; the closure extends it and must
/// not retain the context beyond the call.
pub type PathDefiner = Box<dyn Fn(&mut dyn DrawContext, f64)>;

/// Static paint configuration for a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawStyle {
    /// Fill style in CSS color syntax.
    pub fill_style: String,
    /// Whether the path is filled when painted.
    pub fill: bool,
}

impl DrawStyle {
    /// Creates a filled style with the given fill color.
    pub fn filled(fill_style: impl Into<String>) -> Self {
        Self {
            fill_style: fill_style.into(),
            fill: true,
        }
    }
}

/// Drag gesture state of a marker.
///
/// The dragging position exists only between the pointer-down that hit
/// the marker and the matching pointer-up; outside a gesture the
/// position source is authoritative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    Idle,
    /// A gesture is in progress; `position` is already clamped to the
    /// range that was current when it was last updated.
    Dragging { position: f64 },
}

/// One draggable marker on a shared drawing surface.
///
/// Configuration is supplied as callbacks at construction and never
/// changes; the only mutable state the object owns is its [`DragState`].
/// Errors raised by the supplied callbacks are not caught here and
/// propagate to the surface's caller.
pub struct DraggableObject {
    position_source: PositionSource,
    range_source: RangeSource,
    path_definer: PathDefiner,
    style: DrawStyle,
    on_drag: DragCallback,
    on_drop: DragCallback,
    state: DragState,
}

impl DraggableObject {
    /// Creates a marker from its callback configuration.
    pub fn new(
        position_source: PositionSource,
        range_source: RangeSource,
        path_definer: PathDefiner,
        style: DrawStyle,
        on_drag: DragCallback,
        on_drop: DragCallback,
    ) -> Self {
        Self {
            position_source,
            range_source,
            path_definer,
            style,
            on_drag,
            on_drop,
            state: DragState::Idle,
        }
    }

    /// Current effective position: the drag position while a gesture is
    /// in progress, the external position source otherwise.
    pub fn position(&self) -> f64 {
        match self.state {
            DragState::Dragging { position } => position,
            DragState::Idle => (self.position_source)(),
        }
    }

    /// Current valid drag domain, read fresh from the range source.
    pub fn range(&self) -> Segment {
        (self.range_source)()
    }

    /// Returns `true` while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The marker's paint configuration.
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Defines the marker's path at its current position.
    ///
    /// Resets the context's path first so hit-tests see only this
    /// marker's geometry.
    pub fn define_path(&self, ctx: &mut dyn DrawContext) {
        ctx.begin_path();
        (self.path_definer)(ctx, self.position());
    }

    /// Paints the marker: defines its path, applies the fill style, and
    /// fills when configured to.
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        self.define_path(ctx);
        ctx.set_fill_style(&self.style.fill_style);
        if self.style.fill {
            ctx.fill();
        }
    }

    /// Handles a drag-move at raw pointer coordinate `x`.
    ///
    /// Clamps against the current range (re-evaluated now, not at
    /// drag-start), enters or stays in the dragging state, invokes the
    /// drag callback with the clamped value, and returns it.
    pub fn drag_to(&mut self, x: f64) -> f64 {
        let position = self.range().clamp(x);
        self.state = DragState::Dragging { position };
        (self.on_drag)(position);
        position
    }

    /// Handles the end of a drag gesture at raw pointer coordinate `x`.
    ///
    /// Clamps against the current range, returns the marker to idle (the
    /// position source is authoritative again), invokes the drop
    /// callback with the clamped value, and returns it.
    pub fn drop_at(&mut self, x: f64) -> f64 {
        let position = self.range().clamp(x);
        self.state = DragState::Idle;
        (self.on_drop)(position);
        position
    }
}
