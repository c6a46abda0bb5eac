//! Type aliases for the callback contracts between the canvas layer and
//! its embedders.
//!
//! The drag core never owns positions or ranges; it borrows them through
//! these accessors on every read. Keeping the aliases here gives every
//! crate the same spelling for the same contract.
//!
//! All callbacks are single-threaded: the canvas layer runs entirely
//! inside the host UI event loop, so the boxed closures are neither
//! `Send` nor `Sync`.

use crate::segment::Segment;

/// Produces a marker's canonical position while it is not being dragged
/// (for instance a timestamp mapped to a pixel offset).
///
/// Must be side-effect free; the canvas may call it any number of times
/// per frame.
pub type PositionSource = Box<dyn Fn() -> f64>;

/// Produces the current valid drag domain.
///
/// Re-read on every clamp, so the domain may change between calls (e.g.
/// when the viewport zooms mid-drag).
pub type RangeSource = Box<dyn Fn() -> Segment>;

/// Receives a clamped position during or at the end of a drag gesture.
///
/// Expected to update external model state, such as writing the new
/// timestamp back to the timeline.
pub type DragCallback = Box<dyn FnMut(f64)>;
