//! Segment intersection walkthrough covering every outcome.
//!
//! Usage:
//!   cargo run -p geopred --example segment_intersect

use geopred::api::{intersect, make_segment};
use geopred::GeomError;

fn main() -> Result<(), GeomError> {
    let cases = [
        ("crossing", [[0.0, 0.0], [2.0, 2.0]], [[0.0, 2.0], [2.0, 0.0]]),
        ("touch", [[0.0, 0.0], [1.0, 0.0]], [[1.0, 0.0], [2.0, 0.0]]),
        ("collinear apart", [[0.0, 0.0], [1.0, 1.0]], [[2.0, 2.0], [3.0, 3.0]]),
        ("overlap", [[0.0, 0.0], [2.0, 0.0]], [[1.0, 0.0], [3.0, 0.0]]),
        ("parallel", [[0.0, 0.0], [1.0, 0.0]], [[0.0, 1.0], [1.0, 1.0]]),
        ("disjoint", [[0.0, 0.0], [1.0, 0.0]], [[2.0, -1.0], [2.0, 1.0]]),
    ];
    for (name, a, b) in cases {
        let s1 = make_segment(a[0], a[1])?;
        let s2 = make_segment(b[0], b[1])?;
        let r = intersect(&s1, &s2);
        println!("== {name}: {r}");
        print!("{r:#}");
    }
    Ok(())
}
