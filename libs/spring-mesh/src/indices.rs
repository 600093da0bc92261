//! # Index Builder
//!
//! Triangulates a `rings x splits` vertex lattice stored row-major
//! (`base + ring * splits + split`). The split axis always wraps; the ring
//! axis wraps only for closed lattices.

use config::constants::MIN_SPLITS;

use crate::error::{require_count, MeshError, MeshResult};

/// Appends the triangles covering every quad of the lattice.
///
/// For quad corners `p0` (ring, split), `p1` (ring, split + 1),
/// `p2` (ring + 1, split), `p3` (ring + 1, split + 1) the triangles are
/// `(p1, p0, p2)` and `(p2, p3, p1)`, or `(p1, p2, p0)` and `(p2, p1, p3)`
/// when `flip` is set. Stitching the same lattice twice with opposite `flip`
/// gives a double-sided shell.
///
/// Produces `rings * splits * 2` triangles when `closed`, otherwise
/// `(rings - 1) * splits * 2`.
///
/// # Errors
///
/// `InvalidParameter` for `rings == 0` (or `rings < 2` when closed),
/// `splits < 3`, or a lattice whose indices do not fit in `u32`.
///
/// # Example
///
/// ```rust
/// use spring_mesh::indices::build_ring_indices;
///
/// let mut triangles = Vec::new();
/// build_ring_indices(&mut triangles, 0, 3, 4, false, false).unwrap();
/// assert_eq!(triangles.len(), 2 * 4 * 2);
/// assert_eq!(triangles[0], [1, 0, 4]);
/// ```
pub fn build_ring_indices(
    triangles: &mut Vec<[u32; 3]>,
    base: u32,
    rings: u32,
    splits: u32,
    closed: bool,
    flip: bool,
) -> MeshResult<()> {
    require_count("rings", rings, if closed { 2 } else { 1 })?;
    require_count("splits", splits, MIN_SPLITS)?;
    rings
        .checked_mul(splits)
        .and_then(|count| count.checked_add(base))
        .ok_or_else(|| {
            MeshError::invalid_parameter(format!(
                "lattice of {rings}x{splits} at base {base} overflows u32 indices"
            ))
        })?;

    let ring_pairs = if closed { rings } else { rings - 1 };
    triangles.reserve(ring_pairs as usize * splits as usize * 2);

    for ring in 0..ring_pairs {
        let next_ring = (ring + 1) % rings;
        for split in 0..splits {
            let next_split = (split + 1) % splits;

            let p0 = base + ring * splits + split;
            let p1 = base + ring * splits + next_split;
            let p2 = base + next_ring * splits + split;
            let p3 = base + next_ring * splits + next_split;

            if flip {
                triangles.push([p1, p2, p0]);
                triangles.push([p2, p1, p3]);
            } else {
                triangles.push([p1, p0, p2]);
                triangles.push([p2, p3, p1]);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stitch(base: u32, rings: u32, splits: u32, closed: bool, flip: bool) -> Vec<[u32; 3]> {
        let mut triangles = Vec::new();
        build_ring_indices(&mut triangles, base, rings, splits, closed, flip).unwrap();
        triangles
    }

    #[test]
    fn test_closed_lattice_counts_and_range() {
        for (rings, splits) in [(2, 3), (4, 6), (24, 16), (7, 360)] {
            let triangles = stitch(0, rings, splits, true, false);
            assert_eq!(triangles.len() as u32, rings * splits * 2);
            assert!(triangles.iter().flatten().all(|&i| i < rings * splits));
        }
    }

    #[test]
    fn test_open_lattice_counts() {
        for (rings, splits) in [(1, 3), (2, 3), (5, 8), (10, 360)] {
            let triangles = stitch(0, rings, splits, false, false);
            assert_eq!(triangles.len() as u32, (rings - 1) * splits * 2);
        }
    }

    #[test]
    fn test_base_offset_shifts_indices() {
        let triangles = stitch(100, 3, 4, true, false);
        assert!(triangles.iter().flatten().all(|&i| (100..112).contains(&i)));
    }

    #[test]
    fn test_closed_lattice_wraps_last_ring_to_first() {
        let triangles = stitch(0, 3, 4, true, false);
        let last_quad = &triangles[triangles.len() - 2..];
        assert_eq!(last_quad[0], [8, 11, 3]);
        assert_eq!(last_quad[1], [3, 0, 8]);
    }

    #[test]
    fn test_flip_reverses_every_triangle() {
        let front = stitch(0, 4, 5, true, false);
        let back = stitch(0, 4, 5, true, true);
        assert_eq!(front.len(), back.len());
        for (f, b) in front.iter().zip(&back) {
            assert_eq!(*b, [f[0], f[2], f[1]]);
        }
    }

    #[test]
    fn test_invalid_counts() {
        let mut triangles = Vec::new();
        assert!(build_ring_indices(&mut triangles, 0, 0, 4, false, false).is_err());
        assert!(build_ring_indices(&mut triangles, 0, 1, 4, true, false).is_err());
        assert!(build_ring_indices(&mut triangles, 0, 4, 2, true, false).is_err());
        assert!(build_ring_indices(&mut triangles, u32::MAX - 4, 4, 4, true, false).is_err());
        assert!(triangles.is_empty());
    }
}
