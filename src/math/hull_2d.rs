use crate::geometry::Point;

/// Computes the convex hull of a point set with the quickhull algorithm.
///
/// The input order matters only for tie-breaking: extreme points and
/// farthest points are taken first-seen. The output walks the hull boundary
/// starting from the maximum-x point. Expected O(n log n), worst case
/// O(n^2).
///
/// Degenerate inputs: an empty set yields an empty hull, a set of
/// coincident points collapses to a single point, and an all-collinear set
/// yields only its two extreme-x points (interior points of the line are on
/// the dividing edge and are excluded by the strict sign test).
#[must_use]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut u = points[0];
    let mut v = points[0];
    for point in &points[1..] {
        if point.x() < u.x() {
            u = *point;
        }
        if point.x() > v.x() {
            v = *point;
        }
    }

    let left = outside(&u, &v, points);
    let right = outside(&v, &u, points);

    let mut hull = vec![v];
    hull.extend(extend(&u, &v, &left));
    hull.push(u);
    hull.extend(extend(&v, &u, &right));

    // A single distinct input point reaches here as the pair [v, u].
    if hull.len() == 2 && hull[0] == hull[1] {
        hull.pop();
    }

    hull
}

/// Signed cross product of `(p - a)` and `(b - a)`.
fn cross(p: &Point, a: &Point, b: &Point) -> f64 {
    (p.x() - a.x()) * (b.y() - a.y()) - (p.y() - a.y()) * (b.x() - a.x())
}

/// Keeps the points strictly outside the directed edge `a -> b`; points on
/// the edge line are excluded.
fn outside(a: &Point, b: &Point, points: &[Point]) -> Vec<Point> {
    points
        .iter()
        .copied()
        .filter(|p| cross(p, a, b) < 0.0)
        .collect()
}

/// Expands the hull between `p` and `q`: takes the point farthest outside
/// the edge and recurses on the candidates outside the two new edges.
fn extend(p: &Point, q: &Point, points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut w = points[0];
    let mut extreme = cross(&w, p, q);
    for candidate in &points[1..] {
        let value = cross(candidate, p, q);
        if value < extreme {
            w = *candidate;
            extreme = value;
        }
    }

    let toward_q = outside(&w, q, points);
    let toward_p = outside(p, &w, points);

    let mut result = extend(&w, q, &toward_q);
    result.push(w);
    result.extend(extend(p, &w, &toward_p));
    result
}
