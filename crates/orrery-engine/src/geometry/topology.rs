/// Number of addressable `u16` indices.
const INDEX_SPACE: u32 = 1 << 16;

/// Primitive assembly a vertex range was authored for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Topology {
    /// Every triangle shares the range's first vertex.
    TriangleFan,
    /// Independent four-vertex quads.
    Quads,
    /// Independent triangles.
    Triangles,
}

impl Topology {
    /// Lowers `count` vertices starting at `first` to triangle-list indices.
    ///
    /// Trailing vertices that do not complete a primitive are dropped. A range
    /// reaching past the last `u16` index yields no indices.
    pub fn triangulate(self, first: u16, count: u16) -> Vec<u16> {
        if u32::from(first) + u32::from(count) > INDEX_SPACE {
            return Vec::new();
        }
        // In range: every index below is at most `first + count - 1`.
        let idx = |offset: u16| first + offset;

        match self {
            Topology::TriangleFan => {
                if count < 3 {
                    return Vec::new();
                }
                let mut out = Vec::with_capacity(3 * (count as usize - 2));
                for k in 1..count - 1 {
                    out.extend_from_slice(&[first, idx(k), idx(k + 1)]);
                }
                out
            }
            Topology::Quads => {
                let quads = count / 4;
                let mut out = Vec::with_capacity(6 * quads as usize);
                for q in 0..quads {
                    let a = q * 4;
                    out.extend_from_slice(&[
                        idx(a),
                        idx(a + 1),
                        idx(a + 2),
                        idx(a),
                        idx(a + 2),
                        idx(a + 3),
                    ]);
                }
                out
            }
            Topology::Triangles => {
                let full = count - count % 3;
                (0..full).map(idx).collect()
            }
        }
    }

    /// Number of indices [`triangulate`](Self::triangulate) emits for `count` vertices.
    pub fn index_count(self, count: u16) -> u32 {
        let count = count as u32;
        match self {
            Topology::TriangleFan => 3 * count.saturating_sub(2),
            Topology::Quads => 6 * (count / 4),
            Topology::Triangles => count - count % 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_shares_first_vertex() {
        let idx = Topology::TriangleFan.triangulate(10, 5);
        assert_eq!(idx, vec![10, 11, 12, 10, 12, 13, 10, 13, 14]);
    }

    #[test]
    fn fan_below_three_vertices_is_empty() {
        assert!(Topology::TriangleFan.triangulate(0, 2).is_empty());
        assert!(Topology::TriangleFan.triangulate(0, 0).is_empty());
    }

    #[test]
    fn quads_split_into_two_triangles() {
        let idx = Topology::Quads.triangulate(363, 4);
        assert_eq!(idx, vec![363, 364, 365, 363, 365, 366]);
    }

    #[test]
    fn quads_drop_incomplete_tail() {
        assert_eq!(Topology::Quads.triangulate(0, 7).len(), 6);
    }

    #[test]
    fn triangles_pass_through() {
        assert_eq!(Topology::Triangles.triangulate(360, 3), vec![360, 361, 362]);
        assert_eq!(Topology::Triangles.triangulate(0, 5), vec![0, 1, 2]);
    }

    #[test]
    fn ranges_ending_at_the_last_index_are_kept() {
        let top = u16::MAX;
        assert_eq!(Topology::TriangleFan.triangulate(top - 2, 3), vec![top - 2, top - 1, top]);
        assert_eq!(Topology::Triangles.triangulate(top - 2, 3), vec![top - 2, top - 1, top]);
        assert_eq!(
            Topology::Quads.triangulate(top - 3, 4),
            vec![top - 3, top - 2, top - 1, top - 3, top - 1, top]
        );
    }

    #[test]
    fn ranges_past_the_last_index_yield_nothing() {
        let top = u16::MAX;
        for topo in [Topology::TriangleFan, Topology::Quads, Topology::Triangles] {
            assert!(topo.triangulate(top - 1, 3).is_empty(), "{topo:?}");
            assert!(topo.triangulate(top, 4).is_empty(), "{topo:?}");
            assert!(topo.triangulate(2, u16::MAX).is_empty(), "{topo:?}");
        }
    }

    #[test]
    fn index_count_matches_triangulate() {
        for topo in [Topology::TriangleFan, Topology::Quads, Topology::Triangles] {
            for count in 0..12 {
                assert_eq!(
                    topo.index_count(count) as usize,
                    topo.triangulate(0, count).len(),
                    "{topo:?} with {count} vertices"
                );
            }
        }
    }
}
