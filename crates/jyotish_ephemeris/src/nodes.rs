//! Lunar node (Rahu/Ketu) longitude.
//!
//! Mean node: the 5th Delaunay argument Omega (IERS Conventions 2010,
//! Table 5.2e). True node: Omega plus the five largest periodic terms
//! given in Meeus, *Astronomical Algorithms* 2nd ed., p. 344.
//!
//! Ketu is always exactly Rahu + 180 deg.

use jyotish_frames::{fundamental_arguments, normalize_360};
use serde::{Deserialize, Serialize};

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node.
    Rahu,
    /// Descending node.
    Ketu,
}

/// Mean or true node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Smooth polynomial motion only.
    #[default]
    Mean,
    /// Mean node plus short-period perturbations.
    True,
}

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }
}

/// Periodic correction true - mean, in degrees.
///
/// `args` = `[l, l', F, D, Omega]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    let [l, lp, f, d, _] = *args;
    -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * lp.sin() + 0.1226 * (2.0 * d).sin()
        - 0.1176 * (2.0 * f).sin()
        + 0.0801 * (2.0 * (l - f)).sin()
}

/// Rahu longitude in degrees [0, 360), mean equinox of date.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    let args = fundamental_arguments(t);
    let mean = args[4].to_degrees();
    match mode {
        NodeMode::Mean => normalize_360(mean),
        NodeMode::True => normalize_360(mean + node_perturbation_deg(&args)),
    }
}

/// Node longitude in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = rahu_deg(t, mode);
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => normalize_360(rahu + 180.0),
    }
}
