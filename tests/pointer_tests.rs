// Host-side tests for pointer-driven rotation state.

use galaxy_core::*;

#[test]
fn press_at_center_gives_zero_rotation() {
    for &(w, h) in &[(1024.0, 768.0), (390.0, 844.0)] {
        let mut p = PointerRotation::default();
        p.press(w / 2.0, h / 2.0, w, h);
        assert!(p.pressed);
        assert_eq!(p.rotation, ViewRotation::IDENTITY);
    }
}

#[test]
fn moves_without_press_are_ignored() {
    let mut p = PointerRotation::default();
    assert!(!p.move_to(10.0, 10.0, 800.0, 600.0));
    assert_eq!(p.rotation, ViewRotation::IDENTITY);
}

#[test]
fn drag_updates_rotation_from_raw_coordinates() {
    let mut p = PointerRotation::new(0.002);
    p.press(400.0, 300.0, 800.0, 600.0);
    assert!(p.move_to(600.0, 100.0, 800.0, 600.0));
    assert_eq!(
        p.rotation,
        ViewRotation::from_pointer(600.0, 100.0, 800.0, 600.0, 0.002)
    );
    assert!(p.rotation.yaw > 0.0);
    assert!(p.rotation.pitch < 0.0);
}

#[test]
fn release_freezes_rotation() {
    let mut p = PointerRotation::default();
    p.press(100.0, 100.0, 800.0, 600.0);
    p.move_to(700.0, 550.0, 800.0, 600.0);
    let frozen = p.rotation;

    p.release();
    assert!(!p.pressed);
    for _ in 0..5 {
        assert!(!p.move_to(0.0, 0.0, 800.0, 600.0));
        assert_eq!(p.rotation, frozen);
    }

    // A new press picks up from the press position.
    p.press(400.0, 300.0, 800.0, 600.0);
    assert_eq!(p.rotation, ViewRotation::IDENTITY);
}

#[test]
fn frozen_rotation_is_used_for_subsequent_frames() {
    let mut pointer = PointerRotation::default();
    pointer.press(700.0, 100.0, 800.0, 600.0);
    pointer.release();
    let rotation = pointer.rotation;

    let star = Particle::new(0.0, 1.0, PALETTE[0], 0.0, 0.0, 100.0);
    let center = glam::DVec2::new(400.0, 300.0);
    let expected = project(star.position(), &rotation, center, FOCAL_LENGTH);
    assert_ne!(expected.screen, glam::DVec2::new(500.0, 300.0));
    assert_eq!(pointer.rotation, rotation);
}
