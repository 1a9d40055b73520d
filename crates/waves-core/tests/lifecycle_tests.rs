// Lifecycle state-machine tests, driven in the same sequence the web frame
// loop uses: mount, schedule frames, tear down, observe that a second
// teardown and any late callbacks are no-ops.

use waves_core::{Bounds, GridParams, Lifecycle, WaveGrid};

#[test]
fn unmounting_twice_leaves_no_scheduled_frame() {
    let mut lc = Lifecycle::new();

    // A few frames of normal operation, each recording its reschedule.
    for id in 1..=5 {
        assert!(lc.is_alive());
        lc.frame_scheduled(id);
    }

    // First unmount: cancels the pending frame, does the detach work.
    assert!(lc.shut_down());
    assert_eq!(lc.take_pending_frame(), Some(5));

    // Second unmount: nothing to do, nothing pending, no panic.
    assert!(!lc.shut_down());
    assert_eq!(lc.take_pending_frame(), None);
}

#[test]
fn torn_down_component_ignores_frames_and_pointers() {
    let mut lc = Lifecycle::new();
    let mut grid = WaveGrid::new(0.5, GridParams::default());
    grid.rebuild(Bounds::new(800.0, 600.0, 0.0, 0.0));

    // Run the grid the way the frame loop does while alive.
    for i in 0..10 {
        assert!(lc.is_alive());
        grid.set_pointer(300.0 + 10.0 * i as f64, 300.0);
        grid.tick(i as f64 * 16.0);
        grid.render();
        lc.frame_scheduled(i);
    }
    let paths_before: Vec<String> = grid.paths().to_vec();
    let cursor_before = *grid.cursor();

    lc.shut_down();
    lc.take_pending_frame();

    // A frame or pointer event dispatched after teardown is gated on the
    // liveness check and never reaches the grid.
    for i in 10..20 {
        if lc.is_alive() {
            grid.set_pointer(900.0, 100.0);
            grid.tick(i as f64 * 16.0);
            grid.render();
        }
        lc.frame_scheduled(i);
    }
    assert_eq!(grid.paths(), &paths_before[..]);
    assert_eq!(grid.cursor().pos, cursor_before.pos);
    assert_eq!(lc.take_pending_frame(), None);
}
