use crate::error::{GeometryError, Result};
use crate::math::{distance, Point, Vector, TOLERANCE};

use super::Arcseg;

/// Poly vertex: a point and the bulge of the edge leaving it.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyVertex {
    pub point: Point,
    pub bulge: f64,
}

impl PolyVertex {
    /// Creates a new vertex with the given point and bulge.
    #[must_use]
    pub fn new(point: Point, bulge: f64) -> Self {
        Self { point, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(point: Point) -> Self {
        Self { point, bulge: 0.0 }
    }
}

/// A closed loop of straight and circular edges.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1` and carries the bulge of
/// vertex `i`; the last edge closes back to vertex `0`. All index accessors
/// take any integer and wrap it, so `poly.vertex(-1)` is the last vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Poly {
    vertices: Vec<PolyVertex>,
}

impl Poly {
    /// Creates a poly from `(point, bulge)` vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than two vertices.
    pub fn new(vertices: Vec<PolyVertex>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices(vertices.len()).into());
        }
        Ok(Self { vertices })
    }

    /// Creates a straight-edged poly through `points`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than two points.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        Self::new(points.iter().copied().map(PolyVertex::line).collect())
    }

    /// Creates a poly from a closed chain of arc segments, keeping each
    /// segment's start point and bulge.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than two segments and
    /// `GeometryError::DisconnectedChain` if a segment does not end where the
    /// next one (cyclically) starts.
    pub fn from_arcsegs(segments: &[Arcseg]) -> Result<Self> {
        let n = segments.len();
        if n < 2 {
            return Err(GeometryError::TooFewVertices(n).into());
        }
        for (i, seg) in segments.iter().enumerate() {
            let next = &segments[(i + 1) % n];
            if distance(&seg.end(), &next.start()) > TOLERANCE {
                return Err(GeometryError::DisconnectedChain(i).into());
            }
        }
        Self::new(
            segments
                .iter()
                .map(|s| PolyVertex::new(s.start(), s.bulge()))
                .collect(),
        )
    }

    /// A full circle as two counter-clockwise semicircles.
    ///
    /// Vertex 0 is `center + (radius, 0)`, vertex 1 is `center - (radius, 0)`.
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        let offset = Vector::new(radius, 0.0);
        Self {
            vertices: vec![
                PolyVertex::new(center + offset, 1.0),
                PolyVertex::new(center - offset, 1.0),
            ],
        }
    }

    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Point of vertex `i`, wrapped.
    #[must_use]
    pub fn vertex(&self, i: i64) -> Point {
        self.vertices[self.wrap(i)].point
    }

    /// Bulge of edge `i`, wrapped.
    #[must_use]
    pub fn bulge(&self, i: i64) -> f64 {
        self.vertices[self.wrap(i)].bulge
    }

    /// Edge `i`, wrapped: from vertex `i` to vertex `i + 1`.
    #[must_use]
    pub fn edge(&self, i: i64) -> Arcseg {
        let i = self.wrap(i);
        let j = (i + 1) % self.vertices.len();
        Arcseg::new(
            self.vertices[i].point,
            self.vertices[j].point,
            self.vertices[i].bulge,
        )
    }

    /// Vertices in order.
    pub fn vertices(&self) -> impl Iterator<Item = &PolyVertex> + '_ {
        self.vertices.iter()
    }

    /// Edges in order, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = Arcseg> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            let j = (i + 1) % n;
            Arcseg::new(
                self.vertices[i].point,
                self.vertices[j].point,
                self.vertices[i].bulge,
            )
        })
    }

    /// Total length of all edges.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.edges().map(|e| e.length()).sum()
    }

    /// Returns a new poly traversing the same loop in the opposite direction.
    ///
    /// Edge `v[i] → v[i+1]` with bulge `b` becomes `v[i+1] → v[i]` with
    /// bulge `-b`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let n = self.vertices.len();
        let vertices = (0..n)
            .map(|j| {
                let orig = n - 1 - j;
                // The reversed edge leaving `orig` is the forward edge entering it.
                let entering = (orig + n - 1) % n;
                PolyVertex::new(self.vertices[orig].point, -self.vertices[entering].bulge)
            })
            .collect();
        Self { vertices }
    }

    /// Moves every vertex through `f`, keeping the bulges.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(&Point) -> Point) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|v| PolyVertex::new(f(&v.point), v.bulge))
            .collect();
        Self { vertices }
    }

    #[allow(
        clippy::cast_possible_wrap,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn wrap(&self, i: i64) -> usize {
        let n = self.vertices.len() as i64;
        i.rem_euclid(n) as usize
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square() -> Poly {
        Poly::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn from_points_creates_line_only() {
        let poly = square();
        assert_eq!(poly.num_vertices(), 4);
        assert!(poly.edges().all(|e| e.is_line()));
        assert!((poly.perimeter() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn too_few_vertices_rejected() {
        assert!(Poly::from_points(&[]).is_err());
        assert!(Poly::from_points(&[Point::new(0.0, 0.0)]).is_err());
        assert!(Poly::from_points(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).is_ok());
    }

    #[test]
    fn indexing_is_periodic() {
        let poly = square();
        #[allow(clippy::cast_possible_wrap)]
        let n = poly.num_vertices() as i64;
        for i in -9..9 {
            assert_eq!(poly.vertex(i), poly.vertex(i + n));
            assert_eq!(poly.vertex(i), poly.vertex(i - n));
            assert_eq!(poly.edge(i), poly.edge(i + 3 * n));
        }
        assert_eq!(poly.vertex(-1), Point::new(0.0, 1.0));
        assert_eq!(poly.vertex(4), Point::new(0.0, 0.0));
    }

    #[test]
    fn closing_edge() {
        let poly = square();
        let e = poly.edge(3);
        assert_eq!(e.start(), Point::new(0.0, 1.0));
        assert_eq!(e.end(), Point::new(0.0, 0.0));
        assert_eq!(poly.edge(-1), e);
    }

    #[test]
    fn edge_carries_start_vertex_bulge() {
        let poly = Poly::new(vec![
            PolyVertex::line(Point::new(0.0, 0.0)),
            PolyVertex::new(Point::new(2.0, 0.0), 1.0),
            PolyVertex::line(Point::new(2.0, 2.0)),
        ])
        .unwrap();
        assert!(poly.edge(0).is_line());
        assert!((poly.edge(1).bulge() - 1.0).abs() < 1e-12);
        assert!(poly.edge(2).is_line());
        assert!((poly.bulge(-2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn circle_is_two_semicircles() {
        let c = Poly::circle(Point::new(1.0, 2.0), 3.0);
        assert_eq!(c.num_vertices(), 2);
        assert_eq!(c.vertex(0), Point::new(4.0, 2.0));
        assert_eq!(c.vertex(1), Point::new(-2.0, 2.0));
        for e in c.edges() {
            assert_eq!(e.center(), Point::new(1.0, 2.0));
            assert!((e.radius() - 3.0).abs() < 1e-12);
        }
        assert!((c.perimeter() - 6.0 * PI).abs() < 1e-10);
    }

    #[test]
    fn from_arcsegs_roundtrip() {
        let circle = Poly::circle(Point::new(0.0, 0.0), 1.0);
        let edges: Vec<Arcseg> = circle.edges().collect();
        assert_eq!(Poly::from_arcsegs(&edges).unwrap(), circle);
    }

    #[test]
    fn from_arcsegs_requires_closed_chain() {
        let a = Arcseg::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = Arcseg::line(Point::new(1.0, 0.0), Point::new(1.0, 1.0));
        assert!(Poly::from_arcsegs(&[a, b]).is_err());
        assert!(Poly::from_arcsegs(&[a]).is_err());
    }

    #[test]
    fn reversed_with_arc() {
        let poly = Poly::new(vec![
            PolyVertex::line(Point::new(0.0, 0.0)),
            PolyVertex::new(Point::new(2.0, 0.0), 1.0),
            PolyVertex::line(Point::new(2.0, 2.0)),
        ])
        .unwrap();
        let rev = poly.reversed();
        // Reversed: (2,2) → (2,0) → (0,0) → back to (2,2).
        assert_eq!(rev.vertex(0), Point::new(2.0, 2.0));
        assert_eq!(rev.edge(0), -poly.edge(1));
        assert_eq!(rev.edge(1), -poly.edge(0));
        assert_eq!(rev.edge(2), -poly.edge(2));
    }
}
