// Sanity checks on the motion-model constants and their relationships.

use waves_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spacing_and_padding_are_positive() {
    assert!(X_GAP > 0.0);
    assert!(Y_GAP > 0.0);
    assert!(PAD_X > 0.0);
    assert!(PAD_Y > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_valid_lerp_weights() {
    assert!(CURSOR_POS_LERP > 0.0 && CURSOR_POS_LERP < 1.0);
    assert!(CURSOR_VEL_LERP > 0.0 && CURSOR_VEL_LERP < 1.0);
    // Friction must decay, not amplify.
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn influence_radius_dominates_velocity_clamp() {
    // The radius floor exceeds the velocity clamp, so the divisor in the
    // falloff is always >= 175 and the radius never collapses.
    assert!(INFLUENCE_RADIUS_MIN > CURSOR_VEL_MAX);
    assert!(INFLUENCE_FORCE > 0.0);
    assert!(SPRING > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn displacement_clamp_bounds_the_drift_terms() {
    assert!(MAX_OFFSET > 0.0);
    assert!(STEP_SCALE > 0.0);
    // Wave amplitudes stay well inside the working-area padding so the
    // padded grid always covers the viewport.
    assert!(DRIFT_AMP_X < PAD_X / 2.0);
    assert!(DRIFT_AMP_Y < PAD_Y / 2.0);
    assert!(DRIFT_AMP_X > DRIFT_AMP_Y);
}
