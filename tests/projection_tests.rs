// Host-side tests for view rotation and perspective projection.

use galaxy_core::*;
use glam::{DVec2, DVec3};
use std::f64::consts::FRAC_PI_2;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn zero_rotation_projects_with_plain_perspective() {
    let center = DVec2::new(400.0, 300.0);
    for &(x, y, z) in &[(100.0, 0.0, 0.0), (-30.0, 45.0, 250.0), (10.0, -20.0, -200.0)] {
        let p = project(DVec3::new(x, y, z), &ViewRotation::IDENTITY, center, 500.0);
        let scale = 500.0 / (500.0 + z);
        assert_eq!(p.scale, scale);
        assert_eq!(p.screen, DVec2::new(x * scale + 400.0, y * scale + 300.0));
        assert_eq!(p.depth, z);
        assert!(p.is_visible(500.0));
    }
}

#[test]
fn scenario_point_lands_right_of_center() {
    let center = DVec2::new(640.0, 360.0);
    let p = project(DVec3::new(100.0, 0.0, 0.0), &ViewRotation::IDENTITY, center, FOCAL_LENGTH);
    assert_eq!(p.screen, DVec2::new(740.0, 360.0));
    assert_eq!(p.scale, 1.0);
}

#[test]
fn yaw_turns_x_into_depth() {
    let r = ViewRotation {
        pitch: 0.0,
        yaw: FRAC_PI_2,
    };
    let out = r.apply(DVec3::new(1.0, 2.0, 0.0));
    assert!(close(out.x, 0.0));
    assert!(close(out.y, 2.0));
    assert!(close(out.z, 1.0));
}

#[test]
fn pitch_turns_y_into_depth() {
    let r = ViewRotation {
        pitch: FRAC_PI_2,
        yaw: 0.0,
    };
    let out = r.apply(DVec3::new(3.0, 1.0, 0.0));
    assert!(close(out.x, 3.0));
    assert!(close(out.y, 0.0));
    assert!(close(out.z, 1.0));
}

#[test]
fn yaw_is_applied_before_pitch() {
    let r = ViewRotation {
        pitch: FRAC_PI_2,
        yaw: FRAC_PI_2,
    };
    // yaw: (1,0,0) -> (0,0,1); pitch: y'' = -z' = -1, z'' = 0
    let out = r.apply(DVec3::new(1.0, 0.0, 0.0));
    assert!(close(out.x, 0.0));
    assert!(close(out.y, -1.0));
    assert!(close(out.z, 0.0));
}

#[test]
fn rotation_preserves_distance_from_origin() {
    let r = ViewRotation {
        pitch: 0.37,
        yaw: -1.2,
    };
    let v = DVec3::new(120.0, -80.0, 45.0);
    assert!(close(r.apply(v).length(), v.length()));
}

#[test]
fn points_at_or_behind_camera_plane_are_culled() {
    let center = DVec2::ZERO;
    let at_plane = project(DVec3::new(0.0, 0.0, -500.0), &ViewRotation::IDENTITY, center, 500.0);
    assert!(!at_plane.is_visible(500.0));

    let behind = project(DVec3::new(5.0, 5.0, -800.0), &ViewRotation::IDENTITY, center, 500.0);
    assert!(behind.scale < 0.0);
    assert!(!behind.is_visible(500.0));

    let near = project(DVec3::new(5.0, 5.0, -499.0), &ViewRotation::IDENTITY, center, 500.0);
    assert!(near.is_visible(500.0));
    assert!(near.scale > 1.0);
}

#[test]
fn pointer_at_center_means_no_rotation() {
    for &(w, h) in &[(800.0, 600.0), (1920.0, 1080.0), (333.0, 77.0)] {
        let r = ViewRotation::from_pointer(w / 2.0, h / 2.0, w, h, POINTER_SENSITIVITY);
        assert_eq!(r, ViewRotation::IDENTITY);
    }
}

#[test]
fn pointer_offset_scales_by_sensitivity() {
    let r = ViewRotation::from_pointer(500.0, 200.0, 800.0, 600.0, 0.002);
    assert!(close(r.yaw, 100.0 * 0.002));
    assert!(close(r.pitch, -100.0 * 0.002));
}
