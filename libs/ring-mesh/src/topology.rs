//! # Edge Topology
//!
//! Closedness analysis for meshes that duplicate vertices along hard edges.
//!
//! Index-level half-edge pairing cannot see through deliberate vertex
//! duplication, so positions are welded first: vertices with bit-identical
//! coordinates share one id. A mesh is closed when every welded directed
//! edge `(a, b)` is used exactly once and its reverse `(b, a)` is used
//! exactly once.

use glam::DVec3;
use std::collections::HashMap;

/// Result of an edge pairing analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeReport {
    /// Directed edges examined after welding (collapsed edges excluded)
    pub directed_edges: usize,
    /// Welded directed edges with no reverse partner
    pub unmatched: usize,
    /// Welded directed edges used by more than one triangle
    pub overused: usize,
    /// Directed edges with no reverse partner at the raw index level.
    ///
    /// Non-zero for meshes with hard edges; these are the duplication seams.
    pub index_boundary: usize,
    /// Edges whose two endpoints weld to the same position
    pub collapsed: usize,
    /// Triangles skipped because they reference a missing vertex
    pub out_of_range: usize,
}

impl EdgeReport {
    /// Returns true if every welded edge is matched by exactly one reverse
    /// and no triangle was skipped.
    pub fn is_closed(&self) -> bool {
        self.unmatched == 0 && self.overused == 0 && self.out_of_range == 0
    }
}

/// Canonical key of a position, folding `-0.0` into `0.0`.
fn weld_key(p: DVec3) -> [u64; 3] {
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}

fn directed_edges(tri: &[u32; 3]) -> [(u32, u32); 3] {
    [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])]
}

/// Computes an [`EdgeReport`] for raw buffers.
///
/// Triangles with an index past the end of `vertices` are skipped and
/// counted in [`EdgeReport::out_of_range`].
pub fn edge_report(vertices: &[DVec3], triangles: &[[u32; 3]]) -> EdgeReport {
    let mut ids: HashMap<[u64; 3], u32> = HashMap::with_capacity(vertices.len());
    let welded: Vec<u32> = vertices
        .iter()
        .map(|&p| {
            let next = ids.len() as u32;
            *ids.entry(weld_key(p)).or_insert(next)
        })
        .collect();

    let mut report = EdgeReport::default();
    let mut raw_edges: HashMap<(u32, u32), usize> = HashMap::new();
    let mut welded_edges: HashMap<(u32, u32), usize> = HashMap::new();

    for tri in triangles {
        if tri.iter().any(|&i| i as usize >= welded.len()) {
            report.out_of_range += 1;
            continue;
        }

        for (a, b) in directed_edges(tri) {
            *raw_edges.entry((a, b)).or_default() += 1;

            let (wa, wb) = (welded[a as usize], welded[b as usize]);
            if wa == wb {
                report.collapsed += 1;
                continue;
            }
            report.directed_edges += 1;
            *welded_edges.entry((wa, wb)).or_default() += 1;
        }
    }

    report.index_boundary = raw_edges
        .keys()
        .filter(|(a, b)| !raw_edges.contains_key(&(*b, *a)))
        .count();

    for (&(a, b), &count) in &welded_edges {
        if count > 1 {
            report.overused += 1;
        }
        if !welded_edges.contains_key(&(b, a)) {
            report.unmatched += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tetrahedron with consistent outward winding.
    fn tetrahedron() -> (Vec<DVec3>, Vec<[u32; 3]>) {
        let vertices = vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z];
        let triangles = vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];
        (vertices, triangles)
    }

    #[test]
    fn test_tetrahedron_is_closed() {
        let (vertices, triangles) = tetrahedron();
        let report = edge_report(&vertices, &triangles);
        assert!(report.is_closed());
        assert_eq!(report.directed_edges, 12);
        assert_eq!(report.index_boundary, 0);
        assert_eq!(report.collapsed, 0);
    }

    #[test]
    fn test_missing_face_is_open() {
        let (vertices, mut triangles) = tetrahedron();
        triangles.pop();
        let report = edge_report(&vertices, &triangles);
        assert!(!report.is_closed());
        assert_eq!(report.unmatched, 3);
    }

    #[test]
    fn test_flipped_face_is_overused() {
        let (vertices, mut triangles) = tetrahedron();
        triangles[3] = [1, 3, 2];
        let report = edge_report(&vertices, &triangles);
        assert!(report.overused > 0);
        assert!(!report.is_closed());
    }

    #[test]
    fn test_duplicated_vertices_weld() {
        // Same tetrahedron, but the last face owns copies of its corners
        let (mut vertices, mut triangles) = tetrahedron();
        vertices.extend_from_slice(&[DVec3::X, DVec3::Y, DVec3::Z]);
        triangles[3] = [4, 5, 6];
        let report = edge_report(&vertices, &triangles);
        assert!(report.is_closed());
        assert_eq!(report.index_boundary, 6);
    }

    #[test]
    fn test_negative_zero_welds() {
        let (mut vertices, mut triangles) = tetrahedron();
        vertices.push(DVec3::new(-0.0, 0.0, -0.0));
        triangles[0] = [4, 2, 1];
        assert!(edge_report(&vertices, &triangles).is_closed());
    }

    #[test]
    fn test_out_of_range_triangle_is_skipped() {
        let (vertices, mut triangles) = tetrahedron();
        triangles.push([0, 1, 7]);
        let report = edge_report(&vertices, &triangles);
        assert_eq!(report.out_of_range, 1);
        assert_eq!(report.directed_edges, 12);
        assert_eq!(report.unmatched, 0);
        assert!(!report.is_closed());
    }
}
