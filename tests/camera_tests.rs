use glam::{Mat3, Vec3};
use shader_flight::camera::{CameraTuning, FlyCamera};
use shader_flight::config::Config;
use shader_flight::math::{is_orthonormal, ORTHONORMAL_TOLERANCE};

const DT: f32 = 1.0 / 60.0;
const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

fn default_camera() -> FlyCamera {
    FlyCamera::from_config(&Config::default())
}

#[cfg(test)]
mod motion_tests {
    use super::*;

    #[test]
    fn test_one_second_of_forward_thrust() {
        let mut camera = default_camera();

        for _ in 0..60 {
            camera.integrate(DT, 0.0, 0.0, FORWARD);
        }

        // v_n = 1.5 * n / 60, p += v_n * dt, summed over n = 1..60
        let expected_z = 12.0 - 1.5 * DT * DT * 1830.0;
        let p = camera.position();
        assert!((p.z - expected_z).abs() < 1e-3, "z should be ~{}, got {}", expected_z, p.z);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert!((camera.speed() - 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_velocity_decays_to_rest() {
        let mut camera = default_camera();
        for _ in 0..30 {
            camera.integrate(DT, 0.0, 0.0, FORWARD);
        }
        assert!(camera.speed() > 0.5);

        for _ in 0..60 {
            let before = camera.speed();
            camera.integrate(DT, 0.0, 0.0, Vec3::ZERO);
            assert!(camera.speed() < before || before == 0.0);
        }
        assert!(camera.speed() < 1e-6, "speed should settle, got {}", camera.speed());
    }

    #[test]
    fn test_idle_decay_is_per_tick() {
        let mut slow = default_camera();
        let mut fast = default_camera();
        for _ in 0..10 {
            slow.integrate(DT, 0.0, 0.0, FORWARD);
            fast.integrate(DT, 0.0, 0.0, FORWARD);
        }

        slow.integrate(DT, 0.0, 0.0, Vec3::ZERO);
        fast.integrate(DT * 0.25, 0.0, 0.0, Vec3::ZERO);

        assert_eq!(slow.velocity(), fast.velocity());
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        let config = Config::default();
        let mut camera = FlyCamera::from_config(&config);

        for i in 0..5000 {
            let movement = if i % 2 == 0 {
                Vec3::new(1.0, 0.0, -1.0)
            } else {
                FORWARD
            };
            camera.integrate(0.1, 0.0, 0.0, movement);
            assert!(
                camera.speed() <= config.max_velocity + 1e-4,
                "tick {}: speed {} over cap",
                i,
                camera.speed()
            );
        }
    }

    #[test]
    fn test_opposite_strafes_cancel() {
        let mut camera = default_camera();
        for _ in 0..3 {
            camera.integrate(DT, 0.0, 0.0, FORWARD);
        }
        let prior = camera.velocity();

        camera.integrate(DT, 0.0, 0.0, Vec3::X);
        camera.integrate(DT, 0.0, 0.0, -Vec3::X);

        assert!(camera.velocity().abs_diff_eq(prior, 1e-6));
    }

    #[test]
    fn test_opposite_strafes_at_cap_lose_speed() {
        let config = Config::default();
        let mut camera = FlyCamera::from_config(&config);
        for _ in 0..200 {
            camera.integrate(DT, 0.0, 0.0, FORWARD);
        }
        let prior = camera.velocity();
        assert!((prior.length() - config.max_velocity).abs() < 1e-5);

        camera.integrate(DT, 0.0, 0.0, Vec3::X);
        camera.integrate(DT, 0.0, 0.0, -Vec3::X);

        // The clamp after the first strafe shortens the forward component for good
        let v = camera.velocity();
        assert!(v.x.abs() < 1e-5);
        assert!(v.z > prior.z + 1e-4, "expected {} to shrink from {}", v.z, prior.z);
        assert!(camera.speed() < config.max_velocity);
    }

    #[test]
    fn test_degenerate_dt_changes_nothing() {
        let mut camera = default_camera();
        for _ in 0..5 {
            camera.integrate(DT, 4.0, -2.0, FORWARD);
        }
        let before = camera.clone();

        for dt in [0.0, -DT, f32::NAN, f32::INFINITY] {
            camera.integrate(dt, 50.0, 50.0, FORWARD);
            assert_eq!(camera.position(), before.position());
            assert_eq!(camera.rotation(), before.rotation());
            assert_eq!(camera.velocity(), before.velocity());
        }
    }
}

#[cfg(test)]
mod orientation_tests {
    use super::*;

    #[test]
    fn test_no_mouse_keeps_rotation_bit_identical() {
        let mut camera = default_camera();
        camera.integrate(DT, 17.0, -9.0, Vec3::ZERO);
        let rotation = camera.rotation();

        for _ in 0..100 {
            camera.integrate(DT, 0.0, 0.0, FORWARD);
        }

        assert_eq!(camera.rotation(), rotation);
    }

    #[test]
    fn test_turn_right_then_back() {
        let mut camera = default_camera();

        camera.integrate(DT, 40.0, 0.0, Vec3::ZERO);
        assert!(camera.forward().x > 0.0, "moving the mouse right should look right");

        camera.integrate(DT, -40.0, 0.0, Vec3::ZERO);
        assert!(camera
            .rotation()
            .abs_diff_eq(Mat3::IDENTITY, ORTHONORMAL_TOLERANCE));
    }

    #[test]
    fn test_mouse_down_looks_down() {
        let mut camera = default_camera();
        camera.integrate(DT, 0.0, 30.0, Vec3::ZERO);
        assert!(camera.forward().y < 0.0);
    }

    #[test]
    fn test_quarter_turn_redirects_thrust() {
        let tuning = CameraTuning::default();
        let mut camera = FlyCamera::new(Vec3::ZERO, tuning);
        let quarter_turn = std::f32::consts::FRAC_PI_2 / tuning.look_speed;

        camera.integrate(DT, quarter_turn, 0.0, Vec3::ZERO);
        assert!(camera.forward().abs_diff_eq(Vec3::X, 1e-4));

        for _ in 0..30 {
            camera.integrate(DT, 0.0, 0.0, FORWARD);
        }
        let p = camera.position();
        assert!(p.x > 0.1);
        assert!(p.z.abs() < 1e-3);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_basis_stays_orthonormal_under_long_input() {
        let mut camera = default_camera();
        let mut seed: u32 = 12345;
        let mut next = || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
        };

        for _ in 0..20_000 {
            let dx = next() * 60.0;
            let dy = next() * 60.0;
            camera.integrate(DT, dx, dy, Vec3::new(next().round(), 0.0, next().round()));
        }

        assert!(is_orthonormal(camera.rotation(), ORTHONORMAL_TOLERANCE));
        assert!(camera.rotation().determinant() > 0.0);
    }

    #[test]
    fn test_view_matrix_tracks_camera() {
        let mut camera = default_camera();
        camera.integrate(DT, 25.0, 10.0, FORWARD);

        let view = camera.view_matrix();
        assert_eq!(view.w_axis.truncate(), camera.position());
        assert_eq!(view.z_axis.truncate(), -camera.forward());
        assert_eq!(view.x_axis.truncate(), camera.right());
        assert_eq!(view.y_axis.truncate(), camera.up());
    }
}
