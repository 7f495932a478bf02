//! Tolerance defaults for simplex predicates.
//!
//! Policy
//! - Defaults are fixed constants; callers that need different values pass a
//!   `SimplexCfg` (or an explicit `eps`) to the `_with` variants. There is no
//!   global mutable default.

use crate::error::GeomError;

/// Relative volume below which a simplex counts as degenerate.
pub const DEGENERATE_EPS: f64 = 1e-12;
/// Round-off slack for the `[-eps, 1 + eps]` containment rule.
pub const INSIDE_EPS: f64 = 1e-12;
/// Default in-plane tolerance for `point_in_triangle3`.
pub const DEFAULT_PLANE_EPS: f64 = 1e-3;

/// Tolerances used by the barycentric solver and containment rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimplexCfg {
    /// Degeneracy threshold on `|det| / prod(|edge_i|)`.
    pub eps_det: f64,
    /// Containment slack on each barycentric coordinate.
    pub eps_inside: f64,
}

impl Default for SimplexCfg {
    fn default() -> Self {
        Self {
            eps_det: DEGENERATE_EPS,
            eps_inside: INSIDE_EPS,
        }
    }
}

impl SimplexCfg {
    /// Default degeneracy threshold with a caller-chosen containment slack.
    #[inline]
    pub fn with_inside_eps(eps_inside: f64) -> Self {
        Self {
            eps_inside,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GeomError> {
        GeomError::check_tolerance("eps_det", self.eps_det)?;
        GeomError::check_tolerance("eps_inside", self.eps_inside)?;
        Ok(())
    }
}
