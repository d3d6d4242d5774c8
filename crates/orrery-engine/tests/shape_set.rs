use orrery_engine::geometry::{ShapeKind, ShapeSet, Topology};

#[test]
fn every_index_addresses_a_vertex() {
    let set = ShapeSet::standard();
    let (indices, _) = set.triangle_indices();
    let n = set.vertex_count() as u16;
    assert!(indices.iter().all(|&i| i < n));
}

#[test]
fn shape_indices_stay_inside_their_vertex_range() {
    let set = ShapeSet::standard();
    let (indices, ranges) = set.triangle_indices();

    for (kind, range) in ShapeKind::ALL.into_iter().zip(ranges) {
        let verts = set.range(kind);
        let lo = verts.first;
        let hi = verts.first + verts.count;
        let slice = &indices[range.as_range().start as usize..range.as_range().end as usize];
        assert!(
            slice.iter().all(|&i| (lo..hi).contains(&i)),
            "{kind:?} indexes outside {lo}..{hi}"
        );
    }
}

#[test]
fn topologies_match_primitive_assembly() {
    let set = ShapeSet::standard();
    assert_eq!(set.range(ShapeKind::Circle).topology, Topology::TriangleFan);
    assert_eq!(set.range(ShapeKind::Triangle).topology, Topology::Triangles);
    assert_eq!(set.range(ShapeKind::Square).topology, Topology::Quads);
    assert_eq!(set.range(ShapeKind::Pentagon).topology, Topology::TriangleFan);
}

#[test]
fn rim_vertices_lie_on_unit_circle() {
    let set = ShapeSet::standard();
    for (i, p) in set.positions().iter().enumerate() {
        let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
        let is_center = i == 0 || i == set.vertex_count() - 1;
        if is_center {
            assert_eq!(r, 0.0, "vertex {i}");
        } else {
            assert!((r - 1.0).abs() < 1e-5, "vertex {i} has radius {r}");
        }
    }
}
