//! Random serve velocities

use glam::Vec2;
use rand::Rng;

use crate::GameRng;

/// +1 or -1 with equal odds
pub fn random_sign(rng: &mut GameRng) -> f32 {
    if rng.0.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// A diagonal velocity whose components each have magnitude in
/// `[max_speed, 2 * max_speed)` and an independently random sign
pub fn random_velocity(rng: &mut GameRng, max_speed: f32) -> Vec2 {
    let x = random_sign(rng) * rng.0.gen_range(1.0f32..2.0) * max_speed;
    let y = random_sign(rng) * rng.0.gen_range(1.0f32..2.0) * max_speed;
    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_sign_is_unit() {
        let mut rng = GameRng::new(7);
        for _ in 0..100 {
            let sign = random_sign(&mut rng);
            assert!(sign == 1.0 || sign == -1.0);
        }
    }

    #[test]
    fn test_random_velocity_magnitude_range() {
        let mut rng = GameRng::new(42);
        for _ in 0..10_000 {
            let vel = random_velocity(&mut rng, 10.0);
            assert!((10.0..20.0).contains(&vel.x.abs()), "vx = {}", vel.x);
            assert!((10.0..20.0).contains(&vel.y.abs()), "vy = {}", vel.y);
        }
    }

    #[test]
    fn test_random_velocity_signs_are_balanced_and_independent() {
        let mut rng = GameRng::new(99);
        let samples = 20_000;
        let mut quadrants = [0u32; 4];

        for _ in 0..samples {
            let vel = random_velocity(&mut rng, 10.0);
            let idx = (vel.x > 0.0) as usize * 2 + (vel.y > 0.0) as usize;
            quadrants[idx] += 1;
        }

        // Each diagonal direction should turn up about a quarter of the time
        for count in quadrants {
            let share = count as f32 / samples as f32;
            assert!((0.22..0.28).contains(&share), "quadrant share {}", share);
        }
    }

    #[test]
    fn test_random_velocity_is_seed_deterministic() {
        let a = random_velocity(&mut GameRng::new(5), 10.0);
        let b = random_velocity(&mut GameRng::new(5), 10.0);
        assert_eq!(a, b);
    }
}
