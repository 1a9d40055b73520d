//! Point-grid simulation behind the waves background.
//!
//! The grid owns a line-major arena of point states, the cursor-tracking
//! state, the per-frame physics integration, and the serialization of each
//! line into an SVG-style polyline path. It has no platform dependencies;
//! the host feeds it container bounds, pointer positions, and a per-frame
//! timestamp, and reads back one path string per line.

use std::fmt::Write as _;

use glam::DVec2;

use crate::constants::*;
use crate::noise::NoiseField;

/// Container geometry in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64, left: f64, top: f64) -> Self {
        Self {
            width,
            height,
            left,
            top,
        }
    }
}

/// Grid spacing. Fixed design constants by default; tests and hosts may
/// override them at construction.
#[derive(Clone, Copy, Debug)]
pub struct GridParams {
    pub x_gap: f64,
    pub y_gap: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            x_gap: X_GAP,
            y_gap: Y_GAP,
        }
    }
}

/// Per-point simulation state. `base` never changes after a rebuild; `wave`
/// is recomputed from noise every frame; `cursor`/`cursor_vel` are the
/// integrated spring physics that persist across frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointState {
    pub base: DVec2,
    pub wave: DVec2,
    pub cursor: DVec2,
    pub cursor_vel: DVec2,
}

impl PointState {
    /// Final on-screen position, rounded to one decimal to keep the
    /// serialized paths short. The cursor offset is dropped for a line's
    /// tail point so the line end stays anchored.
    pub fn screen_position(&self, is_tail: bool) -> DVec2 {
        let mut pos = self.base + self.wave;
        if !is_tail {
            pos += self.cursor;
        }
        DVec2::new(round1(pos.x), round1(pos.y))
    }
}

/// Cursor tracking state in container-local coordinates. Written once per
/// frame by [`WaveGrid::tick`]; `set_pointer` only updates the raw position
/// (and snaps everything on the first input after a rebuild, so the first
/// movement does not register as a huge velocity).
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorState {
    pub pos: DVec2,
    pub last: DVec2,
    pub smooth: DVec2,
    pub velocity: f64,
    pub smooth_velocity: f64,
    pub angle: f64,
    seen_input: bool,
}

/// The line grid: point arena, cursor state, physics step, path emission.
pub struct WaveGrid {
    noise: NoiseField,
    params: GridParams,
    bounds: Bounds,
    line_count: usize,
    points_per_line: usize,
    /// Line-major arena: point `(line, i)` lives at `line * points_per_line + i`.
    points: Vec<PointState>,
    /// One serialized path per line, refreshed by [`WaveGrid::render`].
    paths: Vec<String>,
    cursor: CursorState,
}

impl WaveGrid {
    pub fn new(seed: f64, params: GridParams) -> Self {
        Self {
            noise: NoiseField::new(seed),
            params,
            bounds: Bounds::default(),
            line_count: 0,
            points_per_line: 0,
            points: Vec::new(),
            paths: Vec::new(),
            cursor: CursorState::default(),
        }
    }

    /// Rebuild the grid for a new container size, discarding every line,
    /// point, and the cursor state. The working area is padded beyond the
    /// visible bounds so motion never exposes a ragged edge, and the grid is
    /// centered (start offsets may be negative; overflow is intentional).
    pub fn rebuild(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.points.clear();
        self.paths.clear();
        self.cursor = CursorState::default();

        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            self.line_count = 0;
            self.points_per_line = 0;
            log::warn!(
                "[grid] degenerate container {:.0}x{:.0}, leaving grid empty",
                bounds.width,
                bounds.height
            );
            return;
        }

        let total_lines = ((bounds.width + PAD_X) / self.params.x_gap).ceil();
        let total_points = ((bounds.height + PAD_Y) / self.params.y_gap).ceil();
        let x_start = (bounds.width - self.params.x_gap * total_lines) / 2.0;
        let y_start = (bounds.height - self.params.y_gap * total_points) / 2.0;

        // Inclusive ranges: a grid spanning `total` gaps has `total + 1` lines.
        self.line_count = total_lines as usize + 1;
        self.points_per_line = total_points as usize + 1;

        self.points.reserve(self.line_count * self.points_per_line);
        self.paths.reserve(self.line_count);
        for i in 0..self.line_count {
            let x = x_start + self.params.x_gap * i as f64;
            for j in 0..self.points_per_line {
                self.points.push(PointState {
                    base: DVec2::new(x, y_start + self.params.y_gap * j as f64),
                    ..PointState::default()
                });
            }
            self.paths.push(String::new());
        }

        log::debug!(
            "[grid] rebuilt {} lines x {} points for {:.0}x{:.0}",
            self.line_count,
            self.points_per_line,
            bounds.width,
            bounds.height
        );
    }

    /// Ingest a pointer position in page coordinates. On the first call
    /// after a (re)build the smoothed and last positions snap to the raw
    /// position, so no spurious velocity spike leaks into the physics.
    pub fn set_pointer(&mut self, page_x: f64, page_y: f64) {
        let local = DVec2::new(page_x - self.bounds.left, page_y - self.bounds.top);
        self.cursor.pos = local;
        if !self.cursor.seen_input {
            self.cursor.smooth = local;
            self.cursor.last = local;
            self.cursor.seen_input = true;
        }
    }

    /// Advance cursor smoothing and every point's physics by one frame.
    /// `time_ms` is the host's monotonically increasing frame timestamp.
    pub fn tick(&mut self, time_ms: f64) {
        let c = &mut self.cursor;
        c.smooth += (c.pos - c.smooth) * CURSOR_POS_LERP;
        let delta = c.pos - c.last;
        c.velocity = delta.length();
        c.smooth_velocity += (c.velocity - c.smooth_velocity) * CURSOR_VEL_LERP;
        c.smooth_velocity = c.smooth_velocity.min(CURSOR_VEL_MAX);
        c.angle = delta.y.atan2(delta.x);
        c.last = c.pos;

        let cursor = self.cursor;
        let radius = cursor.smooth_velocity.max(INFLUENCE_RADIUS_MIN);
        let clamp = DVec2::splat(MAX_OFFSET);

        for p in self.points.iter_mut() {
            // Organic drift: a noise phase swept through cos/sin, fully
            // decoupled from the cursor term.
            let phase = self.noise.sample(
                (p.base.x + time_ms * DRIFT_TIME_X) * DRIFT_FREQ,
                (p.base.y + time_ms * DRIFT_TIME_Y) * DRIFT_FREQ,
            ) * DRIFT_PHASE;
            p.wave.x = phase.cos() * DRIFT_AMP_X;
            p.wave.y = phase.sin() * DRIFT_AMP_Y;

            // Cursor influence: additive push along the movement direction,
            // fading to zero at the radius boundary.
            let d = p.base.distance(cursor.smooth);
            if d < radius {
                let strength = 1.0 - d / radius;
                let falloff = (d * INFLUENCE_FALLOFF_FREQ).cos() * strength;
                let push = falloff * radius * cursor.smooth_velocity * INFLUENCE_FORCE;
                p.cursor_vel.x += cursor.angle.cos() * push;
                p.cursor_vel.y += cursor.angle.sin() * push;
            }

            // Spring back toward rest, then friction, then the fixed
            // integration step. Order matters for the reference feel.
            p.cursor_vel += -p.cursor * SPRING;
            p.cursor_vel *= FRICTION;
            p.cursor += p.cursor_vel * STEP_SCALE;
            p.cursor = p.cursor.clamp(-clamp, clamp);
        }
    }

    /// Re-serialize every line's polyline path from the current point state.
    pub fn render(&mut self) {
        let ppl = self.points_per_line;
        for (li, path) in self.paths.iter_mut().enumerate() {
            path.clear();
            let line = &self.points[li * ppl..(li + 1) * ppl];
            for (i, p) in line.iter().enumerate() {
                let pos = p.screen_position(i + 1 == ppl);
                if i == 0 {
                    let _ = write!(path, "M {:.1} {:.1}", pos.x, pos.y);
                } else {
                    let _ = write!(path, " L {:.1} {:.1}", pos.x, pos.y);
                }
            }
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn points_per_line(&self) -> usize {
        self.points_per_line
    }

    pub fn points(&self) -> &[PointState] {
        &self.points
    }

    pub fn point(&self, line: usize, index: usize) -> Option<&PointState> {
        if line >= self.line_count || index >= self.points_per_line {
            return None;
        }
        self.points.get(line * self.points_per_line + index)
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    /// Smoothed cursor position, exposed for cosmetic host use.
    pub fn smooth_cursor(&self) -> DVec2 {
        self.cursor.smooth
    }
}

#[inline]
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_1000x800() -> WaveGrid {
        let mut g = WaveGrid::new(0.5, GridParams::default());
        g.rebuild(Bounds::new(1000.0, 800.0, 0.0, 0.0));
        g
    }

    #[test]
    fn first_pointer_snaps_without_velocity() {
        let mut g = grid_1000x800();
        g.set_pointer(640.0, 360.0);
        g.tick(0.0);
        assert_eq!(g.cursor().velocity, 0.0);
        assert_eq!(g.smooth_cursor(), DVec2::new(640.0, 360.0));
    }

    #[test]
    fn pointer_converts_to_container_local() {
        let mut g = WaveGrid::new(0.5, GridParams::default());
        g.rebuild(Bounds::new(400.0, 300.0, 100.0, 50.0));
        g.set_pointer(150.0, 80.0);
        assert_eq!(g.cursor().pos, DVec2::new(50.0, 30.0));
    }

    #[test]
    fn degenerate_bounds_leave_grid_empty() {
        let mut g = WaveGrid::new(0.5, GridParams::default());
        for (w, h) in [(0.0, 600.0), (800.0, 0.0), (-20.0, -20.0)] {
            g.rebuild(Bounds::new(w, h, 0.0, 0.0));
            assert_eq!(g.line_count(), 0);
            assert!(g.paths().is_empty());
            // Ticks and renders against an empty grid must be no-ops.
            g.set_pointer(10.0, 10.0);
            g.tick(16.0);
            g.render();
        }
    }

    #[test]
    fn render_anchors_line_tails() {
        let mut g = grid_1000x800();
        // Force a visible cursor offset on every point, then check the tail
        // position ignores it.
        for _ in 0..3 {
            g.set_pointer(500.0, 400.0);
            g.tick(16.0);
        }
        let tail = g.point(0, g.points_per_line() - 1).unwrap();
        let anchored = tail.screen_position(true);
        assert_eq!(anchored, DVec2::new(round1(tail.base.x + tail.wave.x), round1(tail.base.y + tail.wave.y)));
    }

    #[test]
    fn paths_start_with_move_to() {
        let mut g = grid_1000x800();
        g.tick(16.0);
        g.render();
        assert_eq!(g.paths().len(), g.line_count());
        for d in g.paths() {
            assert!(d.starts_with("M "));
            assert_eq!(d.matches('L').count(), g.points_per_line() - 1);
        }
    }
}
