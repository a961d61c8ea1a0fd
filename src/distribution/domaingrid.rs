use thiserror::Error;

/// Relative tolerance used when deciding whether 2L/h is an integer.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Largest grid the engine will allocate.
pub const MAX_POINTS: usize = 50_000_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid domain: half width {half_width} and step {step} must both be positive and finite")]
    InvalidDomainError {
        half_width: f64,
        step: f64
    },
    #[error("grid too large: half width {half_width} and step {step} need more than {max_points} points")]
    GridTooLargeError {
        half_width: f64,
        step: f64,
        max_points: usize
    }
}

/// Evenly spaced sample points over the half-open range [-L, L).
#[derive(Debug, Clone)]
pub struct DomainGrid {
    half_width: f64,
    step: f64,
    points: Vec<f64>
}

impl DomainGrid {
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn point(&self, i: usize) -> f64 {
        self.points[i]
    }

    /// First index `i` with `points[i] >= bound`, or `len()` when every point
    /// lies below the bound. A NaN bound compares false everywhere and maps to 0.
    pub fn insertion_index(&self, bound: f64) -> usize {
        if bound.is_nan() {
            return 0;
        }
        self.points.partition_point(|&x| x < bound)
    }
}

fn point_count(half_width: f64, step: f64) -> usize {
    let ratio = 2.0 * half_width / step;
    let nearest = ratio.round();
    let n = if (ratio - nearest).abs() <= COUNT_TOLERANCE * nearest.max(1.0) {
        nearest as usize
    } else {
        ratio.ceil() as usize
    };
    n.max(1)
}

pub fn validate_domain(half_width: f64, step: f64) -> Result<(), GridError> {
    let valid = half_width.is_finite() && step.is_finite() && half_width > 0.0 && step > 0.0;
    if !valid {
        return Err(GridError::InvalidDomainError { half_width, step });
    }
    let ratio = 2.0 * half_width / step;
    if !ratio.is_finite() || ratio > MAX_POINTS as f64 {
        return Err(GridError::GridTooLargeError { half_width, step, max_points: MAX_POINTS });
    }
    Ok(())
}

pub fn build_grid(half_width: f64, step: f64) -> Result<DomainGrid, GridError> {
    validate_domain(half_width, step)?;

    let n = point_count(half_width, step);
    let points = (0..n)
        .map(|i| f64::mul_add(i as f64, step, -half_width))
        .collect();

    Ok(DomainGrid { half_width, step, points })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_expected_count() {
        let grid = build_grid(6.0, 0.001).unwrap();
        assert_eq!(grid.len(), 12_000);
        assert_eq!(grid.point(0), -6.0);
        assert!(grid.points().last().unwrap() < &6.0);
    }

    #[test]
    fn test_count_rounds_up_for_uneven_step() {
        let grid = build_grid(1.0, 0.3).unwrap();
        // 2 / 0.3 = 6.67 -> 7 points: -1.0, -0.7, ..., 0.8
        assert_eq!(grid.len(), 7);
        assert!((grid.point(6) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_grid_is_strictly_increasing_with_fixed_spacing() {
        let grid = build_grid(2.0, 0.01).unwrap();
        for w in grid.points().windows(2) {
            assert!(w[1] > w[0]);
            assert!((w[1] - w[0] - 0.01).abs() < 1e-9);
        }
    }

    #[test]
    fn test_step_wider_than_domain_keeps_one_point() {
        let grid = build_grid(1e-12, 1.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.point(0), -1e-12);
    }

    #[test]
    fn test_invalid_domain_rejected() {
        assert!(matches!(build_grid(0.0, 0.1), Err(GridError::InvalidDomainError { .. })));
        assert!(matches!(build_grid(-1.0, 0.1), Err(GridError::InvalidDomainError { .. })));
        assert!(matches!(build_grid(6.0, 0.0), Err(GridError::InvalidDomainError { .. })));
        assert!(matches!(build_grid(6.0, -0.001), Err(GridError::InvalidDomainError { .. })));
        assert!(build_grid(f64::NAN, 0.1).is_err());
        assert!(build_grid(f64::INFINITY, 0.1).is_err());
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(build_grid(1e300, 1.0), Err(GridError::GridTooLargeError { .. })));
        assert!(matches!(build_grid(6.0, 1e-300), Err(GridError::GridTooLargeError { .. })));
        assert!(matches!(build_grid(f64::MAX, f64::MIN_POSITIVE), Err(GridError::GridTooLargeError { .. })));
        let half_width = 0.5 * MAX_POINTS as f64;
        assert!(validate_domain(half_width, 1.0).is_ok());
        assert!(validate_domain(half_width, 0.999).is_err());
    }

    #[test]
    fn test_insertion_index_semantics() {
        let grid = build_grid(1.0, 0.5).unwrap();
        // points: -1.0, -0.5, 0.0, 0.5
        assert_eq!(grid.insertion_index(-5.0), 0);
        assert_eq!(grid.insertion_index(-1.0), 0);
        assert_eq!(grid.insertion_index(-0.75), 1);
        assert_eq!(grid.insertion_index(0.0), 2);
        assert_eq!(grid.insertion_index(0.6), 4);
        assert_eq!(grid.insertion_index(f64::INFINITY), 4);
        assert_eq!(grid.insertion_index(f64::NAN), 0);
    }
}
