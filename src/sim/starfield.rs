//! Decorative parallax starfield

use rand::Rng;

use super::state::Viewport;
use crate::tuning::Tuning;

/// A background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Leftward pixels per frame at speed multiplier 1
    pub speed: f32,
    pub opacity: f32,
}

/// Scatter a fresh starfield over the viewport
pub fn generate_stars<R: Rng>(rng: &mut R, tuning: &Tuning, viewport: Viewport) -> Vec<Star> {
    (0..tuning.star_count)
        .map(|_| Star {
            x: rng.random::<f32>() * viewport.width,
            y: rng.random::<f32>() * viewport.height,
            size: rng.random::<f32>() * tuning.star_max_size,
            speed: rng.random::<f32>() * tuning.star_speed_range + tuning.star_min_speed,
            opacity: rng.random::<f32>(),
        })
        .collect()
}

/// Scroll every star left, wrapping to the right edge
pub fn scroll_stars(stars: &mut [Star], speed_multiplier: f32, width: f32) {
    for star in stars {
        star.x -= star.speed * speed_multiplier;
        if star.x < 0.0 {
            star.x = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn star_wraps_to_right_edge() {
        let mut stars = [Star {
            x: 0.15,
            y: 10.0,
            size: 1.0,
            speed: 0.1,
            opacity: 1.0,
        }];
        scroll_stars(&mut stars, 1.0, 640.0);
        assert!(stars[0].x > 0.0 && stars[0].x < 0.1);

        scroll_stars(&mut stars, 1.0, 640.0);
        assert_eq!(stars[0].x, 640.0);
    }

    #[test]
    fn multiplier_scales_scroll() {
        let mut stars = [Star {
            x: 100.0,
            y: 0.0,
            size: 1.0,
            speed: 0.25,
            opacity: 0.5,
        }];
        scroll_stars(&mut stars, 4.0, 640.0);
        assert_eq!(stars[0].x, 99.0);
    }

    proptest! {
        #[test]
        fn generated_stars_stay_in_bounds(seed: u64, w in 1.0f32..4000.0, h in 1.0f32..4000.0) {
            let tuning = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let stars = generate_stars(&mut rng, &tuning, Viewport { width: w, height: h });
            prop_assert_eq!(stars.len(), tuning.star_count);
            for s in stars {
                prop_assert!(s.x >= 0.0 && s.x <= w);
                prop_assert!(s.y >= 0.0 && s.y <= h);
                prop_assert!(s.size >= 0.0 && s.size < 2.0);
                prop_assert!(s.speed >= 0.1 && s.speed < 0.4 + f32::EPSILON);
                prop_assert!(s.opacity >= 0.0 && s.opacity < 1.0);
            }
        }
    }
}
