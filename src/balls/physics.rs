//! Ball integration and wall bouncing.
//!
//! Semi-implicit Euler: the position update uses the pre-collision
//! velocity, then each axis is checked and resolved independently. A ball
//! whose leading edge crossed a wall is clamped onto it (it never renders
//! inside a wall) and its velocity component is negated, plus a uniform
//! random perturbation in [-15, +15]. The jitter keeps the swarm from
//! settling into lockstep trajectories; both axes get the same treatment
//! every frame.

use bevy::prelude::*;
use rand::Rng;

use crate::shared::*;

/// Advances one ball by `dt` seconds inside `bounds`.
pub fn step_ball(ball: &mut BallBody, dt: f32, bounds: &ArenaBounds, rng: &mut impl Rng) {
    ball.x += ball.vx * dt;
    ball.y += ball.vy * dt;

    if ball.x - ball.radius < bounds.left {
        ball.x = bounds.left + ball.radius;
        ball.vx = -ball.vx + bounce_jitter(rng);
    } else if ball.x + ball.radius > bounds.right {
        ball.x = bounds.right - ball.radius;
        ball.vx = -ball.vx + bounce_jitter(rng);
    }

    if ball.y - ball.radius < bounds.top {
        ball.y = bounds.top + ball.radius;
        ball.vy = -ball.vy + bounce_jitter(rng);
    } else if ball.y + ball.radius > bounds.bottom {
        ball.y = bounds.bottom - ball.radius;
        ball.vy = -ball.vy + bounce_jitter(rng);
    }
}

fn bounce_jitter(rng: &mut impl Rng) -> f32 {
    rng.gen_range(-BOUNCE_JITTER..=BOUNCE_JITTER)
}

/// Per-frame system: advance every live ball.
pub fn advance_balls(time: Res<Time>, bounds: Res<ArenaBounds>, mut shop: ResMut<ShopState>) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let mut rng = rand::thread_rng();
    for ball in shop.balls.iter_mut() {
        step_ball(ball, dt, &bounds, &mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> BallBody {
        BallBody {
            x,
            y,
            vx,
            vy,
            radius: 14.0,
            value: 1.0,
            type_id: Some(1),
        }
    }

    fn in_bounds(b: &BallBody, bounds: &ArenaBounds) -> bool {
        b.x >= bounds.left + b.radius
            && b.x <= bounds.right - b.radius
            && b.y >= bounds.top + b.radius
            && b.y <= bounds.bottom - b.radius
    }

    #[test]
    fn test_free_flight_integrates_position() {
        let bounds = ArenaBounds::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = ball(400.0, 300.0, 100.0, -50.0);
        step_ball(&mut b, 0.1, &bounds, &mut rng);
        assert!((b.x - 410.0).abs() < 1e-4);
        assert!((b.y - 295.0).abs() < 1e-4);
        assert_eq!(b.vx, 100.0);
        assert_eq!(b.vy, -50.0);
    }

    #[test]
    fn test_left_wall_bounce_clamps_and_reflects() {
        let bounds = ArenaBounds::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = ball(20.0, 300.0, -200.0, 0.0);
        step_ball(&mut b, 0.1, &bounds, &mut rng);
        assert_eq!(b.x, bounds.left + b.radius);
        // Reflected 200 plus jitter within +-15.
        assert!(b.vx >= 185.0 && b.vx <= 215.0);
    }

    #[test]
    fn test_corner_bounce_resolves_both_axes() {
        let bounds = ArenaBounds::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut b = ball(20.0, 20.0, -300.0, -300.0);
        step_ball(&mut b, 0.1, &bounds, &mut rng);
        assert_eq!(b.x, bounds.left + b.radius);
        assert_eq!(b.y, bounds.top + b.radius);
        assert!(b.vx > 0.0);
        assert!(b.vy > 0.0);
    }

    #[test]
    fn test_stays_in_bounds_over_long_random_runs() {
        let bounds = ArenaBounds::default();
        let mut rng = StdRng::seed_from_u64(1234);
        for trial in 0..20 {
            let mut b = ball(
                200.0 + 40.0 * trial as f32,
                100.0 + 25.0 * trial as f32,
                -250.0 + 30.0 * trial as f32,
                180.0 - 20.0 * trial as f32,
            );
            for _ in 0..2000 {
                step_ball(&mut b, 1.0 / 60.0, &bounds, &mut rng);
                assert!(in_bounds(&b, &bounds), "ball escaped on trial {}", trial);
            }
        }
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let bounds = ArenaBounds::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut b = ball(400.0, 300.0, 120.0, 90.0);
        let before = b.clone();
        step_ball(&mut b, 0.0, &bounds, &mut rng);
        assert_eq!(b, before);
    }
}
