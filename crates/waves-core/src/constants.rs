// Motion-model tuning constants shared by the grid simulation and its tests.
//
// The physics numbers below are empirically tuned for the reference look of
// the effect. Changing any of them changes the motion visibly and needs new
// reference captures; they are not derived from each other.

// Grid layout
pub const X_GAP: f64 = 10.0; // horizontal spacing between lines, px
pub const Y_GAP: f64 = 32.0; // vertical spacing between points on a line, px
pub const PAD_X: f64 = 200.0; // working-area width beyond the visible bounds
pub const PAD_Y: f64 = 60.0; // working-area height beyond the visible bounds

// Cursor smoothing
pub const CURSOR_POS_LERP: f64 = 0.08; // smoothed position chase per frame
pub const CURSOR_VEL_LERP: f64 = 0.1; // smoothed velocity blend per frame
pub const CURSOR_VEL_MAX: f64 = 100.0; // clamp on smoothed velocity, px/frame

// Organic drift (noise term)
pub const DRIFT_TIME_X: f64 = 0.015; // time advance along x, ms -> noise units
pub const DRIFT_TIME_Y: f64 = 0.008; // time advance along y
pub const DRIFT_FREQ: f64 = 0.002; // spatial frequency of the noise field
pub const DRIFT_PHASE: f64 = 12.0; // noise value -> phase angle scale
pub const DRIFT_AMP_X: f64 = 28.0; // horizontal wave amplitude, px
pub const DRIFT_AMP_Y: f64 = 14.0; // vertical wave amplitude, px

// Cursor influence
pub const INFLUENCE_RADIUS_MIN: f64 = 175.0; // radius floor, px
pub const INFLUENCE_FALLOFF_FREQ: f64 = 0.001; // cos falloff frequency over distance
pub const INFLUENCE_FORCE: f64 = 0.0006; // force scale per unit radius*velocity

// Per-point spring/friction integration
pub const SPRING: f64 = 0.004; // restoring force toward rest position
pub const FRICTION: f64 = 0.92; // velocity decay per frame
pub const STEP_SCALE: f64 = 2.0; // fixed integration step (no delta time)
pub const MAX_OFFSET: f64 = 80.0; // clamp on cursor displacement, px
