//! Color distance metrics
//!
//! Four scalar distances between equal-length component vectors:
//! unweighted Euclidean, two weighted Euclidean variants, and the full
//! CIEDE2000 difference over LAB triples.

/// Perceptual luma-like weights for [`euclidean_wp`]
pub const WP_WEIGHTS: [f64; 3] = [0.3, 0.59, 0.11];

/// Alternative channel weights for [`euclidean_wn`]
pub const WN_WEIGHTS: [f64; 3] = [2.0, 4.0, 3.0];

/// Distance metric selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Unweighted L2 distance
    #[default]
    Euclidean,
    /// L2 weighted by [`WP_WEIGHTS`]
    EuclideanWp,
    /// L2 weighted by [`WN_WEIGHTS`]
    EuclideanWn,
    /// CIEDE2000 over LAB triples
    DeltaE,
}

impl Metric {
    /// Name used in log and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::EuclideanWp => "euclidean_wp",
            Metric::EuclideanWn => "euclidean_wn",
            Metric::DeltaE => "delta_e",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the distance between two equal-length component vectors
pub fn distance(metric: Metric, v1: &[f64], v2: &[f64]) -> f64 {
    match metric {
        Metric::Euclidean => euclidean(v1, v2),
        Metric::EuclideanWp => weighted_euclidean(v1, v2, &WP_WEIGHTS),
        Metric::EuclideanWn => weighted_euclidean(v1, v2, &WN_WEIGHTS),
        Metric::DeltaE => delta_e(v1, v2),
    }
}

/// Unweighted Euclidean distance
pub fn euclidean(v1: &[f64], v2: &[f64]) -> f64 {
    let mut sum = 0.0;
    for (a, b) in v1.iter().zip(v2) {
        sum += (a - b) * (a - b);
    }
    sum.sqrt()
}

/// Weighted Euclidean distance
///
/// Returns 0.0 when the vector length differs from the weight count: a
/// documented degenerate case kept for parity with historical fixtures.
fn weighted_euclidean(v1: &[f64], v2: &[f64], weights: &[f64]) -> f64 {
    if v1.len() != weights.len() {
        return 0.0;
    }

    let mut sum = 0.0;
    for k in 0..v1.len() {
        sum += weights[k] * (v1[k] - v2[k]) * (v1[k] - v2[k]);
    }
    sum.sqrt()
}

/// WP-weighted Euclidean distance
pub fn euclidean_wp(v1: &[f64], v2: &[f64]) -> f64 {
    weighted_euclidean(v1, v2, &WP_WEIGHTS)
}

/// WN-weighted Euclidean distance
pub fn euclidean_wn(v1: &[f64], v2: &[f64]) -> f64 {
    weighted_euclidean(v1, v2, &WN_WEIGHTS)
}

/// CIEDE2000 color difference between two LAB triples
///
/// Full reference algorithm: chroma averaging with the G compensation
/// factor, hue angles wrapped into [0, 360) with the near-0/360 average
/// branch, the T / S_L / S_C / S_H weighting terms and the rotation term
/// R_T, with kl = kc = kh = 1. Components beyond the first three are
/// ignored.
pub fn delta_e(v1: &[f64], v2: &[f64]) -> f64 {
    let (l1, a1, b1) = (v1[0], v1[1], v1[2]);
    let (l2, a2, b2) = (v2[0], v2[1], v2[2]);

    let avg_lp = (l1 + l2) / 2.0;
    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let avg_c1_c2 = (c1 + c2) / 2.0;

    let g = 0.5
        * (1.0 - (avg_c1_c2.powi(7) / (avg_c1_c2.powi(7) + 25.0_f64.powi(7))).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;

    let c1p = (a1p * a1p + b1 * b1).sqrt();
    let c2p = (a2p * a2p + b2 * b2).sqrt();
    let avg_c1p_c2p = (c1p + c2p) / 2.0;

    let mut h1p = if b1 == 0.0 && a1p == 0.0 {
        0.0
    } else {
        b1.atan2(a1p).to_degrees()
    };
    if h1p < 0.0 {
        h1p += 360.0;
    }

    let mut h2p = if b2 == 0.0 && a2p == 0.0 {
        0.0
    } else {
        b2.atan2(a2p).to_degrees()
    };
    if h2p < 0.0 {
        h2p += 360.0;
    }

    let avg_hp = if (h1p - h2p).abs() > 180.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p) / 2.0
    };

    let t = 1.0 - 0.17 * (avg_hp - 30.0).to_radians().cos()
        + 0.24 * (2.0 * avg_hp).to_radians().cos()
        + 0.32 * (3.0 * avg_hp + 6.0).to_radians().cos()
        - 0.2 * (4.0 * avg_hp - 63.0).to_radians().cos();

    let diff_h2p_h1p = h2p - h1p;
    let delta_hp = if diff_h2p_h1p.abs() <= 180.0 {
        diff_h2p_h1p
    } else if h2p <= h1p {
        diff_h2p_h1p + 360.0
    } else {
        diff_h2p_h1p - 360.0
    };

    let delta_lp = l2 - l1;
    let delta_cp = c2p - c1p;
    let delta_hp = 2.0 * (c2p * c1p).sqrt() * (delta_hp.to_radians() / 2.0).sin();

    let s_l = 1.0
        + (0.015 * (avg_lp - 50.0) * (avg_lp - 50.0))
            / (20.0 + (avg_lp - 50.0) * (avg_lp - 50.0)).sqrt();
    let s_c = 1.0 + 0.045 * avg_c1p_c2p;
    let s_h = 1.0 + 0.015 * avg_c1p_c2p * t;

    let delta_ro = 30.0 * (-((avg_hp - 275.0) / 25.0) * ((avg_hp - 275.0) / 25.0)).exp();

    let r_c =
        (avg_c1p_c2p.powi(7) / (avg_c1p_c2p.powi(7) + 25.0_f64.powi(7))).sqrt();
    let r_t = -2.0 * r_c * (2.0 * delta_ro).to_radians().sin();

    ((delta_lp / s_l) * (delta_lp / s_l)
        + (delta_cp / s_c) * (delta_cp / s_c)
        + (delta_hp / s_h) * (delta_hp / s_h)
        + r_t * (delta_cp / s_c) * (delta_hp / s_h))
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_euclidean_known() {
        assert_eq!(euclidean(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]), 1.0);
        assert!(close(
            euclidean(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]),
            3.0_f64.sqrt(),
            1e-12
        ));
    }

    #[test]
    fn test_symmetry_all_metrics() {
        let v1 = [0.2, 0.5, 0.9];
        let v2 = [0.7, 0.1, 0.3];
        let lab1 = [53.2, 80.1, 67.2];
        let lab2 = [32.3, 79.2, -107.9];

        for metric in [Metric::Euclidean, Metric::EuclideanWp, Metric::EuclideanWn] {
            assert_eq!(
                distance(metric, &v1, &v2),
                distance(metric, &v2, &v1),
                "{metric} not symmetric"
            );
        }
        assert!(close(
            distance(Metric::DeltaE, &lab1, &lab2),
            distance(Metric::DeltaE, &lab2, &lab1),
            1e-12
        ));
    }

    #[test]
    fn test_weighted_degenerate_length() {
        // length mismatch with the 3 weights falls back to 0.0
        assert_eq!(euclidean_wp(&[1.0, 2.0], &[3.0, 4.0]), 0.0);
        assert_eq!(euclidean_wn(&[1.0, 2.0, 3.0, 4.0], &[0.0; 4]), 0.0);
    }

    #[test]
    fn test_weighted_known() {
        // single differing channel isolates one weight
        let d = euclidean_wp(&[1.0, 0.0, 0.0], &[0.0, 0.0, 0.0]);
        assert!(close(d, 0.3_f64.sqrt(), 1e-12));

        let d = euclidean_wn(&[0.0, 1.0, 0.0], &[0.0, 0.0, 0.0]);
        assert!(close(d, 2.0, 1e-12));
    }

    #[test]
    fn test_delta_e_identity() {
        for lab in [[0.0, 0.0, 0.0], [50.0, 2.5, -3.5], [100.0, 0.0, 0.0]] {
            assert_eq!(delta_e(&lab, &lab), 0.0);
        }
    }

    #[test]
    fn test_delta_e_reference_pairs() {
        // published CIEDE2000 verification pairs (Sharma et al.)
        let d = delta_e(&[50.0, 2.6772, -79.7751], &[50.0, 0.0, -82.7485]);
        assert!(close(d, 2.0425, 1e-3), "got {d}");

        let d = delta_e(&[50.0, 3.1571, -77.2803], &[50.0, 0.0, -82.7485]);
        assert!(close(d, 2.8615, 1e-3), "got {d}");

        let d = delta_e(&[60.2574, -34.0099, 36.2677], &[60.4626, -34.1751, 39.4387]);
        assert!(close(d, 1.2644, 1e-3), "got {d}");
    }

    #[test]
    fn test_delta_e_ignores_extra_components() {
        let a = [50.0, 10.0, -10.0, 99.0];
        let b = [50.0, 10.0, -10.0, -99.0];
        assert_eq!(delta_e(&a, &b), 0.0);
    }
}
