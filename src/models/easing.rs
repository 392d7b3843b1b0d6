/// Easing curve mapping animation progress in `[0, 1]` to eased progress.
pub type EasingFn = fn(f64) -> f64;

/// Quadratic ease-out, `1 - (1 - x)^2`.
///
/// Input outside `[0, 1]` is clamped so a late frame never overshoots.
pub fn ease_out_quad(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn test_matches_closed_form() {
        for step in 0..=20 {
            let x = step as f64 / 20.0;
            let expected = 1.0 - (1.0 - x) * (1.0 - x);
            assert!((ease_out_quad(x) - expected).abs() < 1e-12, "x = {x}");
        }
        assert!((ease_out_quad(0.5) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut previous = ease_out_quad(0.0);
        for step in 1..=1000 {
            let current = ease_out_quad(step as f64 / 1000.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(ease_out_quad(-0.5), 0.0);
        assert_eq!(ease_out_quad(1.7), 1.0);
    }
}
