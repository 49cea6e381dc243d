use glam::{Vec2, Vec3};
use ripple_core::{pointer_ray, project_to_surface, Camera, MapError, SURFACE_PLANE_Z};

fn sideways_camera() -> Camera {
    Camera {
        eye: Vec3::ZERO,
        target: Vec3::X,
        ..Camera::default()
    }
}

#[test]
fn centre_of_screen_maps_to_origin() {
    let camera = Camera::default();
    let p = project_to_surface(Vec2::ZERO, &camera, SURFACE_PLANE_Z).unwrap();
    assert!(p.length() < 1e-5);
}

#[test]
fn mapping_is_mirrored_through_the_eye() {
    let camera = Camera::default();
    let p = project_to_surface(Vec2::new(0.5, 0.0), &camera, SURFACE_PLANE_Z).unwrap();
    // 5 * tan(22.5deg) * 0.5, on the opposite side
    let expected = 5.0 * 22.5f32.to_radians().tan() * 0.5;
    assert!((p.x + expected).abs() < 1e-3, "got {p:?}");
    assert!(p.y.abs() < 1e-5);

    let q = project_to_surface(Vec2::new(0.0, 0.5), &camera, SURFACE_PLANE_Z).unwrap();
    assert!(q.y < 0.0);
}

#[test]
fn aspect_widens_horizontal_reach() {
    let square = Camera::default();
    let wide = Camera::for_viewport(1600.0, 800.0);
    let a = project_to_surface(Vec2::new(0.5, 0.0), &square, SURFACE_PLANE_Z).unwrap();
    let b = project_to_surface(Vec2::new(0.5, 0.0), &wide, SURFACE_PLANE_Z).unwrap();
    assert!((b.x / a.x - 2.0).abs() < 1e-3);
}

#[test]
fn mapping_is_pure() {
    let camera = Camera::for_viewport(1280.0, 720.0);
    let ndc = Vec2::new(-0.37, 0.61);
    let a = project_to_surface(ndc, &camera, SURFACE_PLANE_Z);
    let b = project_to_surface(ndc, &camera, SURFACE_PLANE_Z);
    assert_eq!(a, b);
}

#[test]
fn pointer_ray_starts_at_eye_with_unit_direction() {
    let camera = Camera::default();
    let (origin, dir) = pointer_ray(Vec2::new(0.2, -0.4), &camera);
    assert_eq!(origin, camera.eye);
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert!(dir.z < 0.0);
}

#[test]
fn ray_parallel_to_plane_is_rejected() {
    let camera = sideways_camera();
    assert_eq!(
        project_to_surface(Vec2::ZERO, &camera, SURFACE_PLANE_Z),
        Err(MapError::ParallelRay)
    );
    assert_eq!(
        project_to_surface(Vec2::new(0.0, 0.5), &camera, SURFACE_PLANE_Z),
        Err(MapError::ParallelRay)
    );
}

#[test]
fn non_finite_result_is_rejected() {
    let camera = Camera::default();
    assert_eq!(
        project_to_surface(Vec2::new(0.1, 0.1), &camera, f32::NAN),
        Err(MapError::NonFinite)
    );
    assert_eq!(
        project_to_surface(Vec2::new(0.1, 0.1), &camera, f32::INFINITY),
        Err(MapError::NonFinite)
    );
}

#[test]
fn degenerate_resize_keeps_previous_aspect() {
    let mut camera = Camera::for_viewport(800.0, 400.0);
    camera.set_aspect(0.0, 400.0);
    camera.set_aspect(800.0, f32::NAN);
    assert_eq!(camera.aspect, 2.0);
}
