//! # Tracescope Core
//!
//! Core types and utilities for tracescope.
//! Provides the fundamental abstractions shared by the canvas layer and
//! its embedders: numeric segments and clamping, callback aliases, trace
//! transition tags, and error types.

pub mod error;
pub mod segment;
pub mod tags;
pub mod types;

pub use error::{Error, Result};
pub use segment::Segment;
pub use tags::TransitionType;
pub use types::{DragCallback, PositionSource, RangeSource};
