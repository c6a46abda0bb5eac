//! Drawing-context abstraction and the software path context.
//!
//! The canvas layer never talks to a rendering backend directly. It
//! builds paths and issues fills through [`DrawContext`], and asks the
//! same context whether a pointer coordinate falls inside the current
//! path. A real backend (e.g. an HTML canvas 2D context behind a WASM
//! binding) implements the trait over its native path state;
//! [`PathContext`] is the built-in software implementation used for
//! hit-testing and tests.

use lyon::algorithms::hit_test::hit_test_path;
use lyon::math::point;
use lyon::path::{FillRule, Path};

/// Flattening tolerance for curve hit-testing.
const HIT_TOLERANCE: f32 = 0.1;

/// Bezier circle approximation constant (kappa).
const KAPPA: f64 = 0.552_284_749_831;

/// A 2D drawing context the canvas layer can define paths on, paint
/// with, and hit-test against.
///
/// Path state is implicit, as in a canvas 2D context: `begin_path`
/// resets it, the geometry calls extend it, and `fill`/`point_in_path`
/// consume whatever has been defined since. Implementations must not
/// retain path geometry across `begin_path` calls.
///
/// Using a context after its underlying backend has been torn down is a
/// precondition violation; no recovery is attempted at this layer.
pub trait DrawContext {
    /// Clears the current path.
    fn begin_path(&mut self);

    /// Starts a new subpath at the given point.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extends the current subpath with a straight line.
    fn line_to(&mut self, x: f64, y: f64);

    /// Extends the current subpath with a cubic bezier curve.
    fn cubic_bezier_to(&mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64);

    /// Closes the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Sets the fill style for subsequent fills (CSS color syntax).
    fn set_fill_style(&mut self, style: &str);

    /// Fills the current path.
    fn fill(&mut self);

    /// Returns `true` if the point lies inside the current path.
    fn point_in_path(&mut self, x: f64, y: f64) -> bool;

    /// Adds a closed axis-aligned rectangle subpath.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.move_to(x, y);
        self.line_to(x + width, y);
        self.line_to(x + width, y + height);
        self.line_to(x, y + height);
        self.close_path();
    }

    /// Adds a closed circle subpath (four-arc bezier approximation).
    fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        let k = KAPPA * r;
        self.move_to(cx + r, cy);
        self.cubic_bezier_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
        self.cubic_bezier_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
        self.cubic_bezier_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
        self.cubic_bezier_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        self.close_path();
    }
}

/// One recorded path command.
#[derive(Debug, Clone, Copy)]
enum PathCmd {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CubicTo(f64, f64, f64, f64, f64, f64),
    Close,
}

/// Software [`DrawContext`] backed by lyon paths.
///
/// Accumulates path commands, answers `point_in_path` analytically via
/// lyon's `hit_test_path`, and records fill operations so tests and
/// debug tooling can observe what was painted.
#[derive(Debug, Clone, Default)]
pub struct PathContext {
    commands: Vec<PathCmd>,
    fill_style: String,
    fills: Vec<String>,
}

impl PathContext {
    /// Creates an empty path context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fill operations issued since creation (or the last
    /// [`PathContext::clear_fills`]).
    pub fn fill_count(&self) -> usize {
        self.fills.len()
    }

    /// Fill style of the most recent fill operation.
    pub fn last_fill_style(&self) -> Option<&str> {
        self.fills.last().map(String::as_str)
    }

    /// Forgets recorded fill operations.
    pub fn clear_fills(&mut self) {
        self.fills.clear();
    }

    /// Returns `true` if no path has been defined since the last
    /// `begin_path`.
    pub fn is_path_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the recorded commands into a lyon path.
    fn build_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut open = false;
        for cmd in &self.commands {
            match *cmd {
                PathCmd::MoveTo(x, y) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(point(x as f32, y as f32));
                    open = true;
                }
                PathCmd::LineTo(x, y) => {
                    if open {
                        builder.line_to(point(x as f32, y as f32));
                    } else {
                        builder.begin(point(x as f32, y as f32));
                        open = true;
                    }
                }
                PathCmd::CubicTo(cx1, cy1, cx2, cy2, x, y) => {
                    if open {
                        builder.cubic_bezier_to(
                            point(cx1 as f32, cy1 as f32),
                            point(cx2 as f32, cy2 as f32),
                            point(x as f32, y as f32),
                        );
                    } else {
                        builder.begin(point(x as f32, y as f32));
                        open = true;
                    }
                }
                PathCmd::Close => {
                    if open {
                        builder.close();
                        open = false;
                    }
                }
            }
        }
        if open {
            builder.end(false);
        }
        builder.build()
    }
}

impl DrawContext for PathContext {
    fn begin_path(&mut self) {
        self.commands.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCmd::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCmd::LineTo(x, y));
    }

    fn cubic_bezier_to(&mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) {
        self.commands.push(PathCmd::CubicTo(cx1, cy1, cx2, cy2, x, y));
    }

    fn close_path(&mut self) {
        self.commands.push(PathCmd::Close);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.fill_style = style.to_string();
    }

    fn fill(&mut self) {
        self.fills.push(self.fill_style.clone());
    }

    fn point_in_path(&mut self, x: f64, y: f64) -> bool {
        if self.commands.is_empty() {
            return false;
        }
        let path = self.build_path();
        hit_test_path(
            &point(x as f32, y as f32),
            path.iter(),
            FillRule::NonZero,
            HIT_TOLERANCE,
        )
    }
}
