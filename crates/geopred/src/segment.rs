//! 2D segment intersection classification.
//!
//! Tolerances
//! - One caller tolerance `tol` (default `sqrt(f64::EPSILON)`).
//! - Distances are compared against `tol * max(|d1|, |d2|)`.
//! - Parametric checks (`t` along the first segment, `u` along the second) use
//!   `tol` directly, so a long partner never widens the endpoint window of a
//!   short segment.
//! - Parallelism: `|d1 × d2| <= tol * |d1| |d2|` (sine of the angle below `tol`).
//!
//! Classification order
//! - Parallel pairs are split into `Parallel` (distinct lines) and the
//!   collinear cases (`NoIntersection`, `EndpointTouch`, `CollinearOverlap`).
//! - Otherwise the crossing parameters `(t, u)` are solved by Cramer's rule;
//!   endpoint proximity wins over `ProperCrossing`.

use std::fmt;

use crate::error::GeomError;
use crate::vec::{approx_eq, cross2, point_from_slice, Point2};

/// Default tolerance for `intersect`.
pub const DEFAULT_SEGMENT_TOL: f64 = 1.4901161193847656e-8;

/// Segment between two distinct points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    p1: Point2,
    p2: Point2,
}

impl Segment {
    /// `DegenerateSegment` if the endpoints coincide (or are not finite).
    pub fn new(p1: Point2, p2: Point2) -> Result<Self, GeomError> {
        let len = (p2 - p1).norm();
        if len > 0.0 && len.is_finite() {
            Ok(Self { p1, p2 })
        } else {
            Err(GeomError::DegenerateSegment)
        }
    }

    pub fn from_rows<R: AsRef<[f64]>>(p1: R, p2: R) -> Result<Self, GeomError> {
        Self::new(point_from_slice(p1.as_ref())?, point_from_slice(p2.as_ref())?)
    }

    #[inline]
    pub fn p1(&self) -> Point2 {
        self.p1
    }

    #[inline]
    pub fn p2(&self) -> Point2 {
        self.p2
    }

    /// Endpoint 0 or 1.
    #[inline]
    pub fn endpoint(&self, end: usize) -> Point2 {
        if end == 0 {
            self.p1
        } else {
            self.p2
        }
    }

    #[inline]
    pub fn direction(&self) -> Point2 {
        self.p2 - self.p1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// `p1 + t (p2 - p1)`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p1 + self.direction() * t
    }

    /// Parameter of the orthogonal projection of `p` on the supporting line.
    #[inline]
    pub fn parameter_of(&self, p: &Point2) -> f64 {
        let d = self.direction();
        (p - self.p1).dot(&d) / d.norm_squared()
    }

    /// Distance from `p` to the supporting line.
    #[inline]
    pub fn line_distance(&self, p: &Point2) -> f64 {
        cross2(self.direction(), p - self.p1).abs() / self.length()
    }
}

/// Relationship between two segments. Exactly one variant holds per query.
///
/// `t` pairs are the parameters of the point along the first and second
/// segment; `ends[i]` names the endpoint (0 or 1) of segment `i` at the
/// contact, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    NoIntersection,
    ProperCrossing {
        point: Point2,
        t: [f64; 2],
    },
    EndpointTouch {
        point: Point2,
        t: [f64; 2],
        ends: [Option<usize>; 2],
    },
    /// Shared sub-segment, endpoints in lexicographic `(x, y)` order so the
    /// pair does not depend on how either segment is oriented.
    CollinearOverlap {
        points: [Point2; 2],
        t: [[f64; 2]; 2],
        identical: bool,
    },
    /// Distinct parallel lines.
    Parallel {
        distance: f64,
    },
}

impl Intersection {
    #[inline]
    pub fn intersects(&self) -> bool {
        !matches!(
            self,
            Intersection::NoIntersection | Intersection::Parallel { .. }
        )
    }

    /// Intersection points (0, 1 or 2).
    pub fn points(&self) -> Vec<Point2> {
        match *self {
            Intersection::ProperCrossing { point, .. }
            | Intersection::EndpointTouch { point, .. } => vec![point],
            Intersection::CollinearOverlap { points, .. } => points.to_vec(),
            Intersection::NoIntersection | Intersection::Parallel { .. } => Vec::new(),
        }
    }

    /// Short tag, stable for machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Intersection::NoIntersection => "no_intersection",
            Intersection::ProperCrossing { .. } => "proper_crossing",
            Intersection::EndpointTouch { .. } => "endpoint_touch",
            Intersection::CollinearOverlap { .. } => "collinear_overlap",
            Intersection::Parallel { .. } => "parallel",
        }
    }
}

fn fmt_point(p: &Point2) -> String {
    format!("({:.6}, {:.6})", p.x, p.y)
}

impl fmt::Display for Intersection {
    /// One line by default; `{:#}` gives a multi-line report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return match self {
                Intersection::NoIntersection => write!(f, "no intersection"),
                Intersection::ProperCrossing { point, t } => write!(
                    f,
                    "proper crossing at {} (t={:.6}, u={:.6})",
                    fmt_point(point),
                    t[0],
                    t[1]
                ),
                Intersection::EndpointTouch { point, t, .. } => write!(
                    f,
                    "endpoint touch at {} (t={:.6}, u={:.6})",
                    fmt_point(point),
                    t[0],
                    t[1]
                ),
                Intersection::CollinearOverlap {
                    points, identical, ..
                } => write!(
                    f,
                    "collinear overlap from {} to {}{}",
                    fmt_point(&points[0]),
                    fmt_point(&points[1]),
                    if *identical { " (identical)" } else { "" }
                ),
                Intersection::Parallel { distance } => {
                    write!(f, "parallel, distance {distance:.6}")
                }
            };
        }
        let points = self.points();
        writeln!(f, "segment intersection: {}", self.kind())?;
        writeln!(f, "  intersect : {}", self.intersects())?;
        writeln!(f, "  points    : {}", points.len())?;
        for (i, p) in points.iter().enumerate() {
            writeln!(f, "    [{i}] {}", fmt_point(p))?;
        }
        match self {
            Intersection::ProperCrossing { t, .. } | Intersection::EndpointTouch { t, .. } => {
                writeln!(f, "  params    : t={:.6} u={:.6}", t[0], t[1])?;
            }
            Intersection::CollinearOverlap { t, .. } => {
                for (i, tu) in t.iter().enumerate() {
                    writeln!(f, "  params[{i}] : t={:.6} u={:.6}", tu[0], tu[1])?;
                }
            }
            _ => {}
        }
        let parallel = matches!(
            self,
            Intersection::Parallel { .. } | Intersection::CollinearOverlap { .. }
        );
        writeln!(f, "  parallel  : {parallel}")?;
        if let Intersection::Parallel { distance } = self {
            writeln!(f, "  distance  : {distance:.6}")?;
        }
        if let Intersection::CollinearOverlap { identical, .. } = self {
            writeln!(f, "  identical : {identical}")?;
        }
        if let Intersection::EndpointTouch { ends, .. } = self {
            for (seg, end) in ends.iter().enumerate() {
                if let Some(end) = end {
                    writeln!(f, "  endpoint {end} of segment {seg} is on the intersection")?;
                }
            }
        }
        Ok(())
    }
}

/// Classify `s1` against `s2` with `DEFAULT_SEGMENT_TOL`.
pub fn intersect(s1: &Segment, s2: &Segment) -> Intersection {
    classify(s1, s2, DEFAULT_SEGMENT_TOL)
}

/// Classify `s1` against `s2`; `InvalidTolerance` for negative or non-finite `tol`.
pub fn intersect_with_tol(s1: &Segment, s2: &Segment, tol: f64) -> Result<Intersection, GeomError> {
    let tol = GeomError::check_tolerance("tol", tol)?;
    Ok(classify(s1, s2, tol))
}

/// `Some(0)`/`Some(1)` when `t` is within `tol` of that end.
#[inline]
fn end_of(t: f64, tol: f64) -> Option<usize> {
    if t.abs() <= tol {
        Some(0)
    } else if (t - 1.0).abs() <= tol {
        Some(1)
    } else {
        None
    }
}

/// Lexicographic `(x, y)` order.
#[inline]
fn lex_le(a: &Point2, b: &Point2) -> bool {
    a.x < b.x || (a.x == b.x && a.y <= b.y)
}

fn classify(s1: &Segment, s2: &Segment, tol: f64) -> Intersection {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let len1 = d1.norm();
    let len2 = d2.norm();
    let tol_dist = tol * len1.max(len2);

    let denom = cross2(d1, d2);
    if denom.abs() <= tol * len1 * len2 {
        return classify_parallel(s1, s2, tol_dist, tol);
    }

    let w = s2.p1 - s1.p1;
    let t = cross2(w, d2) / denom;
    let u = cross2(w, d1) / denom;
    let on_s1 = t >= -tol && t <= 1.0 + tol;
    let on_s2 = u >= -tol && u <= 1.0 + tol;
    if !(on_s1 && on_s2) {
        return Intersection::NoIntersection;
    }
    let ends = [end_of(t, tol), end_of(u, tol)];
    match ends {
        [None, None] => Intersection::ProperCrossing {
            point: s1.p1 + d1 * t,
            t: [t, u],
        },
        [Some(e1), e2] => Intersection::EndpointTouch {
            point: s1.endpoint(e1),
            t: [e1 as f64, e2.map_or(u, |e| e as f64)],
            ends,
        },
        [None, Some(e2)] => Intersection::EndpointTouch {
            point: s2.endpoint(e2),
            t: [t, e2 as f64],
            ends,
        },
    }
}

fn classify_parallel(s1: &Segment, s2: &Segment, tol_dist: f64, tol: f64) -> Intersection {
    let distance = s1.line_distance(&s2.p1);
    if distance > tol_dist {
        return Intersection::Parallel { distance };
    }

    // Collinear: overlap of [0, 1] with the span of s2 projected on s1.
    let ta = s1.parameter_of(&s2.p1);
    let tb = s1.parameter_of(&s2.p2);
    let (lo_raw, lo_end, hi_raw, hi_end) = if ta <= tb {
        (ta, 0, tb, 1)
    } else {
        (tb, 1, ta, 0)
    };
    let lo = lo_raw.max(0.0);
    let hi = hi_raw.min(1.0);
    if hi < lo - tol {
        return Intersection::NoIntersection;
    }

    // Interval ends come from s1 when clamped, else from an s2 endpoint.
    let p_lo = if lo_raw < 0.0 { s1.p1 } else { s2.endpoint(lo_end) };
    let p_hi = if hi_raw > 1.0 { s1.p2 } else { s2.endpoint(hi_end) };

    if hi - lo <= tol {
        let e1 = end_of(0.5 * (lo + hi), tol);
        let point = e1.map_or(p_lo, |e| s1.endpoint(e));
        let t = s1.parameter_of(&point);
        let u = s2.parameter_of(&point);
        let e2 = end_of(u, tol);
        return Intersection::EndpointTouch {
            point,
            t: [e1.map_or(t, |e| e as f64), e2.map_or(u, |e| e as f64)],
            ends: [e1, e2],
        };
    }

    let identical = (approx_eq(&s1.p1, &s2.p1, tol_dist) && approx_eq(&s1.p2, &s2.p2, tol_dist))
        || (approx_eq(&s1.p1, &s2.p2, tol_dist) && approx_eq(&s1.p2, &s2.p1, tol_dist));
    let points = if lex_le(&p_lo, &p_hi) {
        [p_lo, p_hi]
    } else {
        [p_hi, p_lo]
    };
    Intersection::CollinearOverlap {
        points,
        t: points.map(|p| [s1.parameter_of(&p), s2.parameter_of(&p)]),
        identical,
    }
}
