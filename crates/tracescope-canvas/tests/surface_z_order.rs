// Tests for registry bookkeeping, z-order, and hit-test priority.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracescope_canvas::{DraggableObject, DrawContext, DrawStyle, DrawSurface, PathContext};
use tracescope_core::Segment;

/// A 10x20 rectangular marker centered on a fixed position.
fn fixed_marker(position: f64, style: DrawStyle) -> (DraggableObject, Rc<RefCell<Vec<f64>>>) {
    let drags = Rc::new(RefCell::new(Vec::new()));
    let drag_log = Rc::clone(&drags);
    let range = Cell::new(Segment::new(0.0, 100.0));
    let object = DraggableObject::new(
        Box::new(move || position),
        Box::new(move || range.get()),
        Box::new(|ctx, position| {
            ctx.rect(position - 5.0, 0.0, 10.0, 20.0);
        }),
        style,
        Box::new(move |x| drag_log.borrow_mut().push(x)),
        Box::new(|_| {}),
    );
    (object, drags)
}

#[test]
fn test_redraw_paints_in_registration_order_and_updates_topmost() {
    let (a, _) = fixed_marker(10.0, DrawStyle::filled("#ff0000"));
    let (b, _) = fixed_marker(12.0, DrawStyle::filled("#00ff00"));

    let mut surface = DrawSurface::new();
    let mut ctx = PathContext::new();
    let _id_a = surface.register(a);
    let id_b = surface.register(b);

    assert_eq!(surface.topmost(), None);
    surface.redraw(&mut ctx);
    assert_eq!(surface.topmost(), Some(id_b));
    // Both markers were filled, last one with B's style.
    assert_eq!(ctx.fill_count(), 2);
    assert_eq!(ctx.last_fill_style(), Some("#00ff00"));
}

#[test]
fn test_pointer_down_on_overlap_resolves_to_last_drawn() {
    let (a, _) = fixed_marker(10.0, DrawStyle::filled("#ff0000"));
    let (b, _) = fixed_marker(12.0, DrawStyle::filled("#00ff00"));

    let mut surface = DrawSurface::new();
    let mut ctx = PathContext::new();
    let id_a = surface.register(a);
    let id_b = surface.register(b);
    surface.redraw(&mut ctx);

    assert_eq!(surface.on_pointer_down(&mut ctx, 11.0, 10.0), Some(id_b));
    surface.on_pointer_up(&mut ctx, 11.0);

    // Promote A back on top, as if it had just been repainted last.
    surface.notify_drawn_on_top(id_a);
    assert_eq!(surface.on_pointer_down(&mut ctx, 11.0, 10.0), Some(id_a));
}

#[test]
fn test_hit_falls_through_topmost_to_lower_markers() {
    let (a, _) = fixed_marker(10.0, DrawStyle::filled("#ff0000"));
    let (b, _) = fixed_marker(50.0, DrawStyle::filled("#00ff00"));

    let mut surface = DrawSurface::new();
    let mut ctx = PathContext::new();
    let id_a = surface.register(a);
    let id_b = surface.register(b);
    surface.redraw(&mut ctx);
    assert_eq!(surface.topmost(), Some(id_b));

    // The point misses the topmost marker but hits the lower one.
    assert_eq!(surface.on_pointer_down(&mut ctx, 10.0, 10.0), Some(id_a));
}

#[test]
fn test_unregister_is_idempotent() {
    let (a, _) = fixed_marker(10.0, DrawStyle::filled("#ff0000"));

    let mut surface = DrawSurface::new();
    let id = surface.register(a);
    assert_eq!(surface.len(), 1);

    surface.unregister(9999);
    assert_eq!(surface.len(), 1);

    surface.unregister(id);
    assert_eq!(surface.len(), 0);
    assert!(surface.is_empty());

    // Second unregister of the same id is a no-op.
    surface.unregister(id);
    assert!(surface.is_empty());
}

#[test]
fn test_unregister_clears_active_drag_and_topmost() {
    let (a, log) = fixed_marker(10.0, DrawStyle::filled("#ff0000"));

    let mut surface = DrawSurface::new();
    let mut ctx = PathContext::new();
    let id = surface.register(a);
    surface.redraw(&mut ctx);
    surface.on_pointer_down(&mut ctx, 10.0, 10.0);
    assert_eq!(surface.active_drag(), Some(id));

    surface.unregister(id);
    assert_eq!(surface.active_drag(), None);
    assert_eq!(surface.topmost(), None);

    // Events for the torn-down gesture are ignored.
    surface.on_pointer_move(&mut ctx, 50.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_notify_drawn_on_top_ignores_unknown_ids() {
    let mut surface = DrawSurface::new();
    surface.notify_drawn_on_top(7);
    assert_eq!(surface.topmost(), None);
}

#[test]
fn test_unfilled_style_defines_path_without_filling() {
    let (a, _) = fixed_marker(
        10.0,
        DrawStyle {
            fill_style: "#123456".to_string(),
            fill: false,
        },
    );

    let mut surface = DrawSurface::new();
    let mut ctx = PathContext::new();
    let id = surface.register(a);
    surface.redraw(&mut ctx);

    assert_eq!(ctx.fill_count(), 0);
    // The outline still participates in hit-testing.
    assert_eq!(surface.on_pointer_down(&mut ctx, 10.0, 10.0), Some(id));
}
