//! Record construction with randomized placement and colours

use rand::Rng;
use shared::{Dimensions, PrimitiveId, PrimitiveRecord, ShapeKind};

use crate::build::generate_face_colors;

/// Half-size of the placement cube: positions are sampled in [-2, 2] per axis
pub const PLACEMENT_EXTENT: f32 = 2.0;

/// Uniform position inside the placement cube
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    let mut axis = || rng.gen_range(-PLACEMENT_EXTENT..=PLACEMENT_EXTENT);
    [axis(), axis(), axis()]
}

/// Build one record: position draws first, then six face colours
pub fn spawn_record<R: Rng + ?Sized>(
    id: PrimitiveId,
    kind: ShapeKind,
    dimensions: Dimensions,
    rng: &mut R,
) -> PrimitiveRecord {
    let position = random_position(rng);
    let face_colors = generate_face_colors(rng);
    PrimitiveRecord {
        id,
        kind,
        position,
        dimensions,
        face_colors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_positions_stay_in_cube() {
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..1000 {
            let p = random_position(&mut rng);
            assert!(p.iter().all(|c| (-PLACEMENT_EXTENT..=PLACEMENT_EXTENT).contains(c)));
        }
    }

    #[test]
    fn test_fixed_source_gives_fixed_record() {
        let dims = Dimensions::new(1.0, 2.0, 3.0).unwrap();
        let a = spawn_record(PrimitiveId(1), ShapeKind::Box, dims, &mut StepRng::new(0, 0));
        let b = spawn_record(PrimitiveId(1), ShapeKind::Box, dims, &mut StepRng::new(0, 0));
        assert_eq!(a, b);
        assert_eq!(a.position, [-PLACEMENT_EXTENT; 3]);
    }

    #[test]
    fn test_record_keeps_parameters() {
        let mut rng = StdRng::seed_from_u64(1);
        let dims = Dimensions::new(0.5, 1.5, 2.5).unwrap();
        let r = spawn_record(PrimitiveId(7), ShapeKind::Pyramid, dims, &mut rng);
        assert_eq!(r.id, PrimitiveId(7));
        assert_eq!(r.kind, ShapeKind::Pyramid);
        assert_eq!(r.dimensions, dims);
        assert_eq!(r.face_colors.len(), 6);
    }
}
