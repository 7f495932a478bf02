//! Query records shared by the single-shot subcommands and `batch`.
//!
//! Inputs are untyped coordinate lists (JSON or CLI strings); conversion goes
//! through the library's `from_rows` constructors so dimension and vertex-count
//! errors surface as `GeomError`s.

use anyhow::{anyhow, Context, Result};
use geopred::api::{
    intersect_with_tol, point_from_slice, point_in_simplex, point_in_triangle3, Barycentric,
    Intersection, Segment, Simplex, SimplexCfg, Triangle3, DEFAULT_PLANE_EPS,
    DEFAULT_SEGMENT_TOL,
};
use geopred::GeomError;
use nalgebra::{Const, DimMin};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One predicate evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    Triangle {
        vertices: Vec<Vec<f64>>,
        point: Vec<f64>,
        #[serde(default)]
        eps: Option<f64>,
    },
    Tetrahedron {
        vertices: Vec<Vec<f64>>,
        point: Vec<f64>,
        #[serde(default)]
        eps: Option<f64>,
    },
    Triangle3 {
        vertices: Vec<Vec<f64>>,
        point: Vec<f64>,
        #[serde(default)]
        eps: Option<f64>,
    },
    Segments {
        first: Vec<Vec<f64>>,
        second: Vec<Vec<f64>>,
        #[serde(default)]
        tol: Option<f64>,
    },
}

impl Query {
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Triangle { .. } => "triangle",
            Query::Tetrahedron { .. } => "tetrahedron",
            Query::Triangle3 { .. } => "triangle3",
            Query::Segments { .. } => "segments",
        }
    }

    /// Evaluate into a JSON record.
    pub fn evaluate(&self) -> Result<Value, GeomError> {
        match self {
            Query::Triangle {
                vertices,
                point,
                eps,
            } => containment::<2>(vertices, point, *eps),
            Query::Tetrahedron {
                vertices,
                point,
                eps,
            } => containment::<3>(vertices, point, *eps),
            Query::Triangle3 {
                vertices,
                point,
                eps,
            } => {
                let tri = Triangle3::from_rows(vertices)?;
                let p = point_from_slice::<3>(point)?;
                let q = point_in_triangle3(&p, &tri, eps.unwrap_or(DEFAULT_PLANE_EPS))?;
                Ok(json!({
                    "kind": "triangle3",
                    "inside": q.inside(),
                    "in_plane": q.in_plane(),
                    "distance": q.distance(),
                    "coordinates": coords_json(&q.coordinates()),
                }))
            }
            Query::Segments { first, second, tol } => {
                let r = segments(first, second, tol.unwrap_or(DEFAULT_SEGMENT_TOL))?;
                Ok(intersection_json(&r))
            }
        }
    }
}

fn containment<const D: usize>(
    vertices: &[Vec<f64>],
    point: &[f64],
    eps: Option<f64>,
) -> Result<Value, GeomError>
where
    Const<D>: DimMin<Const<D>, Output = Const<D>>,
{
    let simplex = Simplex::<D>::from_rows(vertices)?;
    let p = point_from_slice::<D>(point)?;
    let cfg = eps.map_or_else(SimplexCfg::default, SimplexCfg::with_inside_eps);
    let res = point_in_simplex(&p, &simplex, cfg)?;
    Ok(json!({
        "kind": if D == 2 { "triangle" } else { "tetrahedron" },
        "inside": res.inside,
        "coordinates": coords_json(&res.coordinates),
    }))
}

fn segment_from_rows(rows: &[Vec<f64>]) -> Result<Segment, GeomError> {
    match rows {
        [p1, p2] => Segment::from_rows(p1, p2),
        _ => Err(GeomError::VertexCount {
            expected: 2,
            found: rows.len(),
        }),
    }
}

/// Build both segments from `[p1, p2]` rows and classify them.
pub fn segments(
    first: &[Vec<f64>],
    second: &[Vec<f64>],
    tol: f64,
) -> Result<Intersection, GeomError> {
    let s1 = segment_from_rows(first)?;
    let s2 = segment_from_rows(second)?;
    intersect_with_tol(&s1, &s2, tol)
}

fn coords_json<const D: usize>(c: &Barycentric<D>) -> Value {
    json!(c.to_vec())
}

pub fn intersection_json(r: &Intersection) -> Value {
    let points: Vec<[f64; 2]> = r.points().iter().map(|p| [p.x, p.y]).collect();
    let mut out = json!({
        "kind": "segments",
        "outcome": r.kind(),
        "intersect": r.intersects(),
        "points": points,
        "text": r.to_string(),
    });
    match *r {
        Intersection::ProperCrossing { t, .. } => {
            out["params"] = json!([t]);
        }
        Intersection::EndpointTouch { t, ends, .. } => {
            out["params"] = json!([t]);
            out["ends"] = json!(ends);
        }
        Intersection::CollinearOverlap { t, identical, .. } => {
            out["params"] = json!(t);
            out["identical"] = json!(identical);
        }
        Intersection::Parallel { distance } => {
            out["distance"] = json!(distance);
        }
        Intersection::NoIntersection => {}
    }
    out
}

/// Parse `"x,y[,z]"`.
pub fn parse_point(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|c| {
            c.trim()
                .parse::<f64>()
                .with_context(|| format!("bad coordinate {c:?} in {s:?}"))
        })
        .collect()
}

/// Parse `"x,y;x,y;..."`.
pub fn parse_points(s: &str) -> Result<Vec<Vec<f64>>> {
    let pts = s
        .split(';')
        .filter(|p| !p.trim().is_empty())
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;
    if pts.is_empty() {
        return Err(anyhow!("no points in {s:?}"));
    }
    Ok(pts)
}
