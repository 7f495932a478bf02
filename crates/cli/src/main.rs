use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geopred::api::{DEFAULT_PLANE_EPS, DEFAULT_SEGMENT_TOL};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod query;

use query::{parse_point, parse_points, segments, Query};

#[derive(Parser)]
#[command(name = "geopred")]
#[command(about = "Point-in-simplex and segment intersection queries")]
struct Cmd {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Point in a 2D triangle: --vertices "x,y;x,y;x,y" --point "x,y"
    Triangle {
        #[arg(long)]
        vertices: String,
        #[arg(long)]
        point: String,
        /// Containment slack (default 1e-12)
        #[arg(long)]
        eps: Option<f64>,
    },
    /// Point in a tetrahedron: four "x,y,z" vertices
    Tetra {
        #[arg(long)]
        vertices: String,
        #[arg(long)]
        point: String,
        #[arg(long)]
        eps: Option<f64>,
    },
    /// Point against a triangle in 3-space (plane distance + containment)
    Triangle3 {
        #[arg(long)]
        vertices: String,
        #[arg(long)]
        point: String,
        #[arg(long, default_value_t = DEFAULT_PLANE_EPS)]
        eps: f64,
    },
    /// Classify two 2D segments: --first "x,y;x,y" --second "x,y;x,y"
    Segments {
        #[arg(long)]
        first: String,
        #[arg(long)]
        second: String,
        #[arg(long, default_value_t = DEFAULT_SEGMENT_TOL)]
        tol: f64,
        /// Print the multi-line report instead of JSON
        #[arg(long)]
        report: bool,
    },
    /// Evaluate a JSON array of queries, write results plus a provenance sidecar
    Batch {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print version/provenance JSON
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let pretty = cmd.pretty;
    match cmd.action {
        Action::Triangle {
            vertices,
            point,
            eps,
        } => single(
            Query::Triangle {
                vertices: parse_points(&vertices)?,
                point: parse_point(&point)?,
                eps,
            },
            pretty,
        ),
        Action::Tetra {
            vertices,
            point,
            eps,
        } => single(
            Query::Tetrahedron {
                vertices: parse_points(&vertices)?,
                point: parse_point(&point)?,
                eps,
            },
            pretty,
        ),
        Action::Triangle3 {
            vertices,
            point,
            eps,
        } => single(
            Query::Triangle3 {
                vertices: parse_points(&vertices)?,
                point: parse_point(&point)?,
                eps: Some(eps),
            },
            pretty,
        ),
        Action::Segments {
            first,
            second,
            tol,
            report,
        } => {
            let (first, second) = (parse_points(&first)?, parse_points(&second)?);
            if report {
                segments_report(&first, &second, tol)
            } else {
                single(
                    Query::Segments {
                        first,
                        second,
                        tol: Some(tol),
                    },
                    pretty,
                )
            }
        }
        Action::Batch { input, out } => batch(input, out),
        Action::Report => report(),
    }
}

fn emit(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn single(q: Query, pretty: bool) -> Result<()> {
    let kind = q.kind();
    let value = q.evaluate().map_err(|err| {
        tracing::warn!(kind, %err, "query rejected");
        err
    })?;
    tracing::info!(kind, "query");
    emit(&value, pretty)
}

fn segments_report(first: &[Vec<f64>], second: &[Vec<f64>], tol: f64) -> Result<()> {
    let r = segments(first, second, tol)?;
    tracing::info!(outcome = r.kind(), "segments");
    print!("{r:#}");
    Ok(())
}

/// Counts and outputs of one `batch` run.
#[derive(Debug)]
struct BatchSummary {
    queries: usize,
    failures: usize,
    sidecar: PathBuf,
}

fn batch(input: String, out: String) -> Result<()> {
    let summary = run_batch(Path::new(&input), Path::new(&out))?;
    tracing::info!(
        queries = summary.queries,
        failures = summary.failures,
        sidecar = %summary.sidecar.display(),
        "batch_done"
    );
    Ok(())
}

/// Evaluate every query in `input`; rejected queries become `{kind, error}`
/// records instead of aborting the run.
fn run_batch(input: &Path, out: &Path) -> Result<BatchSummary> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let queries: Vec<Query> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing queries in {}", input.display()))?;

    let mut failures = 0usize;
    let results: Vec<Value> = queries
        .iter()
        .enumerate()
        .map(|(i, q)| match q.evaluate() {
            Ok(v) => v,
            Err(err) => {
                failures += 1;
                tracing::warn!(index = i, kind = q.kind(), %err, "query rejected");
                json!({ "kind": q.kind(), "error": err.to_string() })
            }
        })
        .collect();

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&results)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload {
        input: input.display().to_string(),
        queries: results.len(),
        failures,
        params: json!({
            "default_plane_eps": DEFAULT_PLANE_EPS,
            "default_segment_tol": DEFAULT_SEGMENT_TOL,
        }),
    };
    let sidecar = provenance::write_sidecar(out, payload)?;
    Ok(BatchSummary {
        queries: results.len(),
        failures,
        sidecar,
    })
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "geopred_version": geopred::VERSION,
        "defaults": {
            "plane_eps": DEFAULT_PLANE_EPS,
            "segment_tol": DEFAULT_SEGMENT_TOL,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn batch_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("queries.json");
        let out = dir.path().join("out/results.json");
        std::fs::write(
            &input,
            r#"[
                {"kind":"triangle","vertices":[[0,0],[1,0],[0,1]],"point":[0.25,0.25]},
                {"kind":"triangle","vertices":[[0,0],[1,1],[2,2]],"point":[0.5,0.5]},
                {"kind":"segments","first":[[0,0],[2,2]],"second":[[0,2],[2,0]]}
            ]"#,
        )
        .unwrap();

        let summary = run_batch(&input, &out).unwrap();
        assert_eq!(summary.queries, 3);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.sidecar, dir.path().join("out/results.provenance.json"));

        let results: Vec<Value> = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(results[0]["inside"], json!(true));
        assert_eq!(results[1]["kind"], json!("triangle"));
        assert!(results[1]["error"]
            .as_str()
            .unwrap()
            .starts_with("degenerate simplex"));
        assert_eq!(results[2]["outcome"], json!("proper_crossing"));

        let sidecar: Value =
            serde_json::from_slice(&std::fs::read(&summary.sidecar).unwrap()).unwrap();
        assert_eq!(sidecar["queries"], 3);
        assert_eq!(sidecar["failures"], 1);
    }

    #[test]
    fn batch_rejects_malformed_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, r#"[{"kind":"hexagon"}]"#).unwrap();
        assert!(run_batch(&input, &dir.path().join("r.json")).is_err());
    }
}
