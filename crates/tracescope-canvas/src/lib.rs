//! # Tracescope Canvas
//!
//! Draggable-marker coordination on a shared drawing surface. This crate
//! provides the interaction core of a timeline trace viewer: markers
//! (cursors, range edges, bookmarks) that can be dragged along a
//! timeline, with hit-testing, z-order arbitration, and range-clamped
//! drag state.
//!
//! ## Core Components
//!
//! - **DrawContext**: abstraction over a 2D drawing backend, with a
//!   lyon-backed software implementation ([`PathContext`]) used for
//!   hit-testing and tests
//! - **DraggableObject**: one marker; externally sourced position, an
//!   explicit idle/dragging state machine, and clamp-on-every-update
//!   drag handling
//! - **DrawSurface**: owns the marker registry, resolves pointer events
//!   to at most one active drag, and tracks which marker is topmost
//! - **TimelineViewport**: timestamp to pixel mapping with zoom and pan;
//!   the usual source of marker positions and drag domains
//!
//! ## Architecture
//!
//! ```text
//! DrawSurface (registry, active drag, z-order)
//!   ├── DraggableObject (drag state, clamp, callbacks)
//!   │     └── position/range sources ← embedding layer
//!   └── DrawContext (paths, fills, point-in-path)
//!
//! TimelineViewport (timestamp ↔ pixel)
//! ```
//!
//! The surface is single-threaded and synchronous: pointer events and
//! redraws run inside the host UI event loop, and a repaint triggered by
//! a drag-move completes before the event method returns.

pub mod context;
pub mod draggable;
pub mod surface;
pub mod viewport;

pub use context::{DrawContext, PathContext};
pub use draggable::{DragState, DraggableObject, DrawStyle, PathDefiner};
pub use surface::DrawSurface;
pub use viewport::TimelineViewport;
