//! Factory functions for creating test data.
//!
//! Fixed-position records and pre-populated stores, so tests can reason about
//! exact placement without going through the random source.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::*;

use crate::state::scene::SceneStore;

// ── Record factories ────────────────────────────────────────────

/// Six evenly spread greys, distinct per face
pub fn grey_faces() -> [Rgb; FACE_COLOR_COUNT] {
    std::array::from_fn(|i| {
        let v = (i as f32 + 1.0) / (FACE_COLOR_COUNT as f32 + 1.0);
        Rgb::new(v, v, v)
    })
}

/// A record at a fixed position.
pub fn record_at(id: u64, kind: ShapeKind, dimensions: Dimensions, position: [f32; 3]) -> PrimitiveRecord {
    PrimitiveRecord {
        id: PrimitiveId(id),
        kind,
        position,
        dimensions,
        face_colors: grey_faces(),
    }
}

/// Unit box (1x1x1) at a fixed position.
pub fn unit_box_at(id: u64, position: [f32; 3]) -> PrimitiveRecord {
    record_at(id, ShapeKind::Box, Dimensions::default(), position)
}

/// Unit pyramid (radius 1, height 1) at a fixed position.
pub fn unit_pyramid_at(id: u64, position: [f32; 3]) -> PrimitiveRecord {
    record_at(id, ShapeKind::Pyramid, Dimensions::default(), position)
}

// ── Random sources ──────────────────────────────────────────────

/// Seeded generator for reproducible scenes
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Constant source: every draw yields zero, so positions land on the cube corner
pub fn constant_rng() -> StepRng {
    StepRng::new(0, 0)
}

// ── Store factories ─────────────────────────────────────────────

/// Store with `boxes` unit boxes added first, then `pyramids` unit pyramids.
pub fn store_with(boxes: usize, pyramids: usize, seed: u64) -> SceneStore {
    let mut rng = seeded_rng(seed);
    let mut store = SceneStore::default();
    if boxes > 0 {
        let _ = store.add_group_with(ShapeKind::Box, Dimensions::default(), boxes, &mut rng);
    }
    if pyramids > 0 {
        let _ = store.add_group_with(ShapeKind::Pyramid, Dimensions::default(), pyramids, &mut rng);
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_faces_distinct() {
        let faces = grey_faces();
        for i in 0..faces.len() {
            for j in i + 1..faces.len() {
                assert_ne!(faces[i], faces[j]);
            }
        }
    }

    #[test]
    fn test_record_at_keeps_position() {
        let r = unit_box_at(4, [1.0, 2.0, 3.0]);
        assert_eq!(r.id, PrimitiveId(4));
        assert_eq!(r.position, [1.0, 2.0, 3.0]);
        assert_eq!(r.kind, ShapeKind::Box);
    }

    #[test]
    fn test_constant_rng_places_on_corner() {
        let mut store = SceneStore::default();
        store
            .add_group_with(ShapeKind::Pyramid, Dimensions::default(), 2, &mut constant_rng())
            .unwrap();
        for record in store.records() {
            assert_eq!(record.position, [-2.0; 3]);
            assert_eq!(record.face_colors[0], Rgb::new(0.0, 0.0, 0.0));
        }
        assert_ne!(store.records()[0].id, store.records()[1].id);
    }

    #[test]
    fn test_store_with_order() {
        let store = store_with(2, 1, 0);
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[0].kind, ShapeKind::Pyramid);
        assert_eq!(store.records()[2].kind, ShapeKind::Box);
    }
}
