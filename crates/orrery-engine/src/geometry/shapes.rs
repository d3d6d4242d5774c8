use super::Topology;

pub const CIRCLE_VERTICES: u16 = 360;
pub const TRIANGLE_VERTICES: u16 = 3;
pub const SQUARE_VERTICES: u16 = 4;
pub const PENTAGON_VERTICES: u16 = 7;

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const BROWN: [f32; 3] = [0.5, 0.4, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];

/// The shapes stored in the static vertex buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Square,
    Pentagon,
}

impl ShapeKind {
    /// All shapes in buffer order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Square,
        ShapeKind::Pentagon,
    ];

    #[inline]
    fn slot(self) -> usize {
        match self {
            ShapeKind::Circle => 0,
            ShapeKind::Triangle => 1,
            ShapeKind::Square => 2,
            ShapeKind::Pentagon => 3,
        }
    }
}

/// Vertex range of one shape inside the shared position/color arrays.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShapeRange {
    pub first: u16,
    pub count: u16,
    pub topology: Topology,
}

/// Index range of one shape inside the triangle-list index buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IndexRange {
    pub first: u32,
    pub count: u32,
}

impl IndexRange {
    #[inline]
    pub fn as_range(self) -> std::ops::Range<u32> {
        self.first..self.first + self.count
    }
}

/// Flat position array plus a parallel color array, partitioned into shapes.
///
/// Invariant: `positions.len() == colors.len()`; entry `i` of one belongs to
/// entry `i` of the other.
#[derive(Debug, Clone)]
pub struct ShapeSet {
    positions: Vec<[f32; 2]>,
    colors: Vec<[f32; 3]>,
    ranges: [ShapeRange; 4],
}

impl ShapeSet {
    /// Builds the circle/triangle/square/pentagon layout.
    ///
    /// ```text
    ///   0 - 359   circle    (fan around the origin at vertex 0)
    /// 360 - 362   triangle
    /// 363 - 366   square    (quad)
    /// 367 - 373   pentagon  (fan, closing vertex then the origin)
    /// ```
    pub fn standard() -> Self {
        let total = (CIRCLE_VERTICES + TRIANGLE_VERTICES + SQUARE_VERTICES + PENTAGON_VERTICES)
            as usize;
        let mut positions = Vec::with_capacity(total);
        let mut colors = Vec::with_capacity(total);

        let circle = ShapeRange {
            first: 0,
            count: CIRCLE_VERTICES,
            topology: Topology::TriangleFan,
        };
        positions.push([0.0, 0.0]);
        for deg in 1..CIRCLE_VERTICES {
            positions.push(unit_at(deg as f32));
        }
        colors.resize(positions.len(), WHITE);

        let triangle = ShapeRange {
            first: positions.len() as u16,
            count: TRIANGLE_VERTICES,
            topology: Topology::Triangles,
        };
        for k in 0..TRIANGLE_VERTICES {
            positions.push(unit_at(90.0 + 120.0 * k as f32));
            colors.push(BROWN);
        }

        let square = ShapeRange {
            first: positions.len() as u16,
            count: SQUARE_VERTICES,
            topology: Topology::Quads,
        };
        for k in 0..SQUARE_VERTICES {
            let index = positions.len();
            positions.push(unit_at(270.0 + 90.0 * k as f32));
            colors.push(if index % 2 == 0 { GREEN } else { BLUE });
        }

        let pentagon = ShapeRange {
            first: positions.len() as u16,
            count: PENTAGON_VERTICES,
            topology: Topology::TriangleFan,
        };
        // Five corners plus a repeat of the first to close the fan.
        for k in 0..PENTAGON_VERTICES - 1 {
            positions.push(unit_at(162.0 + 72.0 * k as f32));
            colors.push(RED);
        }
        positions.push([0.0, 0.0]);
        colors.push(RED);

        debug_assert_eq!(positions.len(), total);
        debug_assert_eq!(positions.len(), colors.len());

        Self {
            positions,
            colors,
            ranges: [circle, triangle, square, pentagon],
        }
    }

    #[inline]
    pub fn positions(&self) -> &[[f32; 2]] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn range(&self, kind: ShapeKind) -> ShapeRange {
        self.ranges[kind.slot()]
    }

    /// Returns the triangle-list index buffer for every shape, plus the index
    /// range each shape occupies in it.
    pub fn triangle_indices(&self) -> (Vec<u16>, [IndexRange; 4]) {
        let mut indices = Vec::new();
        let mut out = [IndexRange { first: 0, count: 0 }; 4];

        for kind in ShapeKind::ALL {
            let r = self.range(kind);
            let first = indices.len() as u32;
            indices.extend(r.topology.triangulate(r.first, r.count));
            out[kind.slot()] = IndexRange {
                first,
                count: indices.len() as u32 - first,
            };
        }

        (indices, out)
    }

    /// Index range of `kind` as laid out by [`triangle_indices`](Self::triangle_indices).
    pub fn index_range(&self, kind: ShapeKind) -> IndexRange {
        let mut first = 0;
        for k in ShapeKind::ALL {
            let r = self.range(k);
            let count = r.topology.index_count(r.count);
            if k == kind {
                return IndexRange { first, count };
            }
            first += count;
        }
        IndexRange { first, count: 0 }
    }
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[inline]
fn unit_at(degrees: f32) -> [f32; 2] {
    let (s, c) = degrees.to_radians().sin_cos();
    [c, s]
}
