//! Linear interpolation helpers.

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the parameter at which `v` sits between `a` and `b`.
///
/// Returns 0 when `a == b` to avoid a division by zero.
pub fn inv_lerp(a: f64, b: f64, v: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (v - a) / (b - a)
}

/// Map `v` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`, clamping to the
/// output range outside the input range.
pub fn remap_clamped(v: f64, in_lo: f64, in_hi: f64, out_lo: f64, out_hi: f64) -> f64 {
    let t = inv_lerp(in_lo, in_hi, v).clamp(0.0, 1.0);
    lerp(out_lo, out_hi, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
        assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
        assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn inv_lerp_round_trips() {
        let t = inv_lerp(2.0, 6.0, 5.0);
        assert!(approx_eq(lerp(2.0, 6.0, t), 5.0, 1e-12));
    }

    #[test]
    fn inv_lerp_degenerate_range() {
        assert_eq!(inv_lerp(4.0, 4.0, 9.0), 0.0);
    }

    #[test]
    fn remap_clamps_both_ends() {
        assert_eq!(remap_clamped(1.0, 2.5, 6.0, 0.4, 3.0), 0.4);
        assert_eq!(remap_clamped(9.0, 2.5, 6.0, 0.4, 3.0), 3.0);
    }

    #[test]
    fn remap_interior_is_linear() {
        let mid = remap_clamped(4.25, 2.5, 6.0, 0.4, 3.0);
        assert!(approx_eq(mid, 1.7, 1e-12));
    }
}
