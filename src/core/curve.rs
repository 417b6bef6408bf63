use serde::{Deserialize, Serialize};

/// One drawing step of a projected curve, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveStep {
    Line {
        to: (f64, f64),
    },
    Cubic {
        control1: (f64, f64),
        control2: (f64, f64),
        to: (f64, f64),
    },
}

impl CurveStep {
    #[must_use]
    pub fn end(self) -> (f64, f64) {
        match self {
            Self::Line { to } | Self::Cubic { to, .. } => to,
        }
    }
}

/// Curve through a point sequence: a start point plus one step per
/// following point.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    pub start: Option<(f64, f64)>,
    pub steps: Vec<CurveStep>,
}

/// Builds a cubic curve through `points` that is monotone between every pair
/// of neighbours.
///
/// Tangents follow the Steffen/Fritsch-Carlson construction: interior
/// tangents are zero at local extrema and otherwise bounded by the adjacent
/// secants, so no control point leaves the vertical span of its segment.
/// `points` must be ordered by strictly increasing x.
#[must_use]
pub fn monotone_x_curve(points: &[(f64, f64)]) -> Curve {
    let Some(&first) = points.first() else {
        return Curve::default();
    };
    if points.len() == 2 {
        return Curve {
            start: Some(first),
            steps: vec![CurveStep::Line { to: points[1] }],
        };
    }

    let tangents = tangents(points);
    let steps = points
        .windows(2)
        .zip(tangents.windows(2))
        .map(|(pair, t)| {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let dx = (x1 - x0) / 3.0;
            CurveStep::Cubic {
                control1: (x0 + dx, y0 + dx * t[0]),
                control2: (x1 - dx, y1 - dx * t[1]),
                to: (x1, y1),
            }
        })
        .collect();

    Curve {
        start: Some(first),
        steps,
    }
}

fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let mut out = vec![0.0; n];
    if n < 3 {
        return out;
    }

    for i in 1..n - 1 {
        out[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    out[0] = endpoint_tangent(points[0], points[1], out[1]);
    out[n - 1] = endpoint_tangent(points[n - 2], points[n - 1], out[n - 2]);
    out
}

fn interior_tangent(previous: (f64, f64), current: (f64, f64), next: (f64, f64)) -> f64 {
    let h0 = current.0 - previous.0;
    let h1 = next.0 - current.0;
    if h0 <= 0.0 || h1 <= 0.0 {
        return 0.0;
    }
    let s0 = (current.1 - previous.1) / h0;
    let s1 = (next.1 - current.1) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn endpoint_tangent(a: (f64, f64), b: (f64, f64), neighbour_tangent: f64) -> f64 {
    let h = b.0 - a.0;
    if h <= 0.0 {
        return neighbour_tangent;
    }
    (3.0 * (b.1 - a.1) / h - neighbour_tangent) / 2.0
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
