//! The shared drawing surface.
//!
//! One [`DrawSurface`] exists per rendering surface. It owns every
//! registered marker, arbitrates which single marker receives an active
//! drag gesture, and tracks z-order: the most recently painted marker is
//! "topmost" and wins hit-test ties when markers overlap.
//!
//! Everything here is single-threaded and synchronous. State changes
//! happen inside a pointer-event method or an explicit [`DrawSurface::redraw`],
//! both driven by the host UI event loop, and a repaint triggered by a
//! drag-move completes before the event method returns.

use crate::context::DrawContext;
use crate::draggable::DraggableObject;
use tracing::{debug, trace};

/// One registry entry: a marker and its surface-assigned id.
struct RegisteredDraggable {
    id: u64,
    object: DraggableObject,
}

/// Shared drawing surface hosting draggable markers.
///
/// The registry keeps insertion order, which is also the paint order:
/// later-registered markers are painted later and therefore sit on top,
/// both visually and for hit-testing, until a redraw paints them in a
/// different order.
#[derive(Default)]
pub struct DrawSurface {
    registry: Vec<RegisteredDraggable>,
    next_id: u64,
    active_drag: Option<u64>,
    topmost: Option<u64>,
}

impl DrawSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a marker and returns its surface-assigned id.
    ///
    /// Registering the same logical marker twice is a caller defect (the
    /// same pointer event would then drive both entries); it is not
    /// checked here.
    pub fn register(&mut self, object: DraggableObject) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.registry.push(RegisteredDraggable { id, object });
        debug!("Registered draggable {} ({} total)", id, self.registry.len());
        id
    }

    /// Removes a marker from the surface.
    ///
    /// Unknown ids are ignored, so unregistering twice is a no-op. An
    /// active drag or topmost reference to the removed marker is
    /// cleared.
    pub fn unregister(&mut self, id: u64) {
        let Some(index) = self.registry.iter().position(|e| e.id == id) else {
            trace!("Unregister of unknown draggable {} ignored", id);
            return;
        };
        self.registry.remove(index);
        if self.active_drag == Some(id) {
            self.active_drag = None;
        }
        if self.topmost == Some(id) {
            self.topmost = None;
        }
        debug!("Unregistered draggable {} ({} remain)", id, self.registry.len());
    }

    /// Number of registered markers.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns `true` if no markers are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Gets a reference to a registered marker by id.
    pub fn get(&self, id: u64) -> Option<&DraggableObject> {
        self.registry.iter().find(|e| e.id == id).map(|e| &e.object)
    }

    /// Gets a mutable reference to a registered marker by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut DraggableObject> {
        self.registry
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.object)
    }

    /// Id of the marker currently receiving move/drop events, if any.
    pub fn active_drag(&self) -> Option<u64> {
        self.active_drag
    }

    /// Id of the most recently painted marker, if any.
    pub fn topmost(&self) -> Option<u64> {
        self.topmost
    }

    /// Records that a marker was just painted, making it the topmost
    /// hit-test candidate.
    ///
    /// Called once per marker per redraw pass, in paint order, so after
    /// a full redraw the last-painted (visually front-most) marker holds
    /// hit-test priority. Ids not in the registry are ignored.
    pub fn notify_drawn_on_top(&mut self, id: u64) {
        if self.registry.iter().any(|e| e.id == id) {
            self.topmost = Some(id);
        }
    }

    /// Ingests a pointer-down event.
    ///
    /// Hit-tests registered markers topmost-first; the first marker
    /// whose path contains the point becomes the active drag target and
    /// its id is returned. Without a hit, no drag starts and subsequent
    /// move/up events are ignored until the next pointer-down.
    pub fn on_pointer_down(&mut self, ctx: &mut dyn DrawContext, x: f64, y: f64) -> Option<u64> {
        let hit = self.hit_test(ctx, x, y);
        self.active_drag = hit;
        match hit {
            Some(id) => debug!("Pointer down at ({}, {}) starts drag of {}", x, y, id),
            None => trace!("Pointer down at ({}, {}) hit nothing", x, y),
        }
        hit
    }

    /// Ingests a pointer-move event.
    ///
    /// Forwards the raw x coordinate to the active marker's drag-move
    /// handling, then repaints every marker so dependent markers reflect
    /// the latest shared state. No-op without an active drag.
    pub fn on_pointer_move(&mut self, ctx: &mut dyn DrawContext, x: f64) {
        let Some(id) = self.active_drag else {
            return;
        };
        if let Some(object) = self.get_mut(id) {
            let position = object.drag_to(x);
            trace!("Drag of {} moved to {}", id, position);
        }
        self.redraw(ctx);
    }

    /// Ingests a pointer-up event.
    ///
    /// Forwards the raw x coordinate to the active marker's drop
    /// handling, clears the active drag, and repaints. No-op without an
    /// active drag.
    pub fn on_pointer_up(&mut self, ctx: &mut dyn DrawContext, x: f64) {
        let Some(id) = self.active_drag.take() else {
            return;
        };
        if let Some(object) = self.get_mut(id) {
            let position = object.drop_at(x);
            debug!("Drag of {} dropped at {}", id, position);
        }
        self.redraw(ctx);
    }

    /// Repaints every registered marker in registration order.
    ///
    /// Paint order determines the new z-order: each paint updates the
    /// topmost bookkeeping, so the last-painted marker ends up with
    /// hit-test priority.
    pub fn redraw(&mut self, ctx: &mut dyn DrawContext) {
        for index in 0..self.registry.len() {
            let id = self.registry[index].id;
            self.registry[index].object.paint(ctx);
            self.notify_drawn_on_top(id);
        }
    }

    /// Resolves which marker, if any, a pointer coordinate lands on.
    ///
    /// Candidate order is front-to-back: the topmost marker first, then
    /// the rest in reverse registration order.
    fn hit_test(&mut self, ctx: &mut dyn DrawContext, x: f64, y: f64) -> Option<u64> {
        let mut candidates: Vec<u64> = Vec::with_capacity(self.registry.len());
        if let Some(top) = self.topmost {
            candidates.push(top);
        }
        for entry in self.registry.iter().rev() {
            if Some(entry.id) != self.topmost {
                candidates.push(entry.id);
            }
        }

        for id in candidates {
            let Some(object) = self.get(id) else {
                continue;
            };
            object.define_path(ctx);
            if ctx.point_in_path(x, y) {
                return Some(id);
            }
        }
        None
    }
}
