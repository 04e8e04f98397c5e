//! Random per-face colours

use rand::Rng;
use shared::{Rgb, FACE_COLOR_COUNT};

/// One uniformly sampled colour (three independent draws in [0, 1))
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb::new(rng.gen(), rng.gen(), rng.gen())
}

/// Fresh palette with one colour per face group.
///
/// Pass `rand::thread_rng()` for the process-wide source, or a seeded RNG in tests.
pub fn generate_face_colors<R: Rng + ?Sized>(rng: &mut R) -> [Rgb; FACE_COLOR_COUNT] {
    std::array::from_fn(|_| random_color(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_palette_has_six_colors_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = generate_face_colors(&mut rng);
        assert_eq!(colors.len(), 6);
        for c in colors {
            for ch in c.to_array() {
                assert!((0.0..1.0).contains(&ch));
            }
        }
    }

    #[test]
    fn test_consecutive_palettes_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = generate_face_colors(&mut rng);
        let b = generate_face_colors(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_seed_same_palette() {
        let a = generate_face_colors(&mut StdRng::seed_from_u64(99));
        let b = generate_face_colors(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_sequence_source() {
        // A constant source yields a constant palette
        let mut rng = StepRng::new(0, 0);
        let colors = generate_face_colors(&mut rng);
        assert!(colors.iter().all(|c| *c == Rgb::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn test_covers_color_space() {
        // Over many draws every channel reaches both halves of its range
        let mut rng = StdRng::seed_from_u64(2024);
        let mut low = [false; 3];
        let mut high = [false; 3];
        for _ in 0..200 {
            for c in generate_face_colors(&mut rng) {
                for (ch, v) in c.to_array().into_iter().enumerate() {
                    if v < 0.1 {
                        low[ch] = true;
                    }
                    if v > 0.9 {
                        high[ch] = true;
                    }
                }
            }
        }
        assert_eq!(low, [true; 3]);
        assert_eq!(high, [true; 3]);
    }
}
