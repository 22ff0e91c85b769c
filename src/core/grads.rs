use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::LinearScale;
use crate::error::{GanttError, GanttResult};

/// Minimum pixel distance between two adjacent grads.
pub const MIN_GRAD_SPACING_PX: f64 = 40.0;

/// Multipliers cycled through while searching the grad interval.
///
/// Starting from 1 this yields 1, 2, 5, 10, 20, 50, 100, ...
pub const GRAD_INTERVAL_COEFFICIENTS: [f64; 3] = [2.0, 2.5, 2.0];

/// One gridline: a time value and its rounded pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeGrad {
    pub time: f64,
    pub pos: i64,
}

impl TimeGrad {
    #[must_use]
    pub fn new(time: f64, pos: i64) -> Self {
        Self { time, pos }
    }
}

/// Controls how the grad interval is searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradSpacingPolicy {
    pub min_spacing_px: f64,
    pub coefficients: SmallVec<[f64; 4]>,
}

impl Default for GradSpacingPolicy {
    fn default() -> Self {
        Self {
            min_spacing_px: MIN_GRAD_SPACING_PX,
            coefficients: smallvec![
                GRAD_INTERVAL_COEFFICIENTS[0],
                GRAD_INTERVAL_COEFFICIENTS[1],
                GRAD_INTERVAL_COEFFICIENTS[2]
            ],
        }
    }
}

impl GradSpacingPolicy {
    /// Checks that the interval search is guaranteed to terminate.
    pub fn validate(&self) -> GanttResult<()> {
        if !self.min_spacing_px.is_finite() || self.min_spacing_px <= 0.0 {
            return Err(GanttError::InvalidData(
                "grad min spacing must be finite and > 0".to_owned(),
            ));
        }
        if self.coefficients.is_empty() {
            return Err(GanttError::InvalidData(
                "grad interval coefficients must not be empty".to_owned(),
            ));
        }
        if self
            .coefficients
            .iter()
            .any(|coef| !coef.is_finite() || *coef <= 1.0)
        {
            return Err(GanttError::InvalidData(
                "grad interval coefficients must be finite and > 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Computes grads for `width` pixels using the default spacing policy.
///
/// Scales too small for the interval or the visible span to stay finite are
/// rejected with `InvalidScale`.
pub fn compute_grads(scale: LinearScale, width: u32) -> GanttResult<Vec<TimeGrad>> {
    let policy = GradSpacingPolicy::default();
    let interval = search_interval(scale, &policy);
    build_grads(scale, width, interval)
}

/// Computes grads for `width` pixels with an explicit spacing policy.
pub fn compute_grads_with(
    scale: LinearScale,
    width: u32,
    policy: &GradSpacingPolicy,
) -> GanttResult<Vec<TimeGrad>> {
    let interval = grad_interval(scale, policy)?;
    build_grads(scale, width, interval)
}

/// Returns the smallest "nice" interval whose pixel span reaches the policy minimum.
pub fn grad_interval(scale: LinearScale, policy: &GradSpacingPolicy) -> GanttResult<f64> {
    policy.validate()?;
    Ok(search_interval(scale, policy))
}

// `policy` must be valid: every coefficient > 1 keeps the loop finite. The
// result overflows to infinity for subnormal-range scales.
fn search_interval(scale: LinearScale, policy: &GradSpacingPolicy) -> f64 {
    let mut interval = 1.0;
    let mut index = 0;
    while scale.time_to_pos(interval) < policy.min_spacing_px {
        interval *= policy.coefficients[index];
        index = (index + 1) % policy.coefficients.len();
    }
    interval
}

fn build_grads(scale: LinearScale, width: u32, interval: f64) -> GanttResult<Vec<TimeGrad>> {
    let visible_time = scale.pos_to_time(f64::from(width));
    if !interval.is_finite() || !visible_time.is_finite() {
        return Err(GanttError::InvalidScale {
            scale: scale.scale(),
        });
    }

    let count = (1.0 + visible_time / interval).round();
    let last_time = (count - 1.0) * interval;
    if !last_time.is_finite() || !scale.time_to_pos(last_time).is_finite() {
        return Err(GanttError::InvalidScale {
            scale: scale.scale(),
        });
    }

    Ok((0..count as usize)
        .map(|index| {
            let time = index as f64 * interval;
            TimeGrad::new(time, scale.time_to_pos(time).round() as i64)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{GradSpacingPolicy, compute_grads, grad_interval};
    use crate::core::LinearScale;
    use crate::error::GanttError;
    use smallvec::smallvec;

    #[test]
    fn interval_walks_the_nice_number_progression() {
        let policy = GradSpacingPolicy::default();
        let cases = [(40.0, 1.0), (20.0, 2.0), (10.0, 5.0), (800.0 / 120.0, 10.0), (0.5, 100.0)];
        for (scale, expected) in cases {
            let scale = LinearScale::new(scale).expect("valid scale");
            let interval = grad_interval(scale, &policy).expect("valid policy");
            assert_eq!(interval, expected);
        }
    }

    #[test]
    fn zero_width_yields_single_origin_grad() {
        let scale = LinearScale::new(3.0).expect("valid scale");
        let grads = compute_grads(scale, 0).expect("finite grads");
        assert_eq!(grads.len(), 1);
        assert_eq!(grads[0].time, 0.0);
        assert_eq!(grads[0].pos, 0);
    }

    #[test]
    fn subnormal_scale_is_rejected_instead_of_emptying_grid() {
        for raw in [1.33e-308, 3e-307, f64::MIN_POSITIVE] {
            let scale = LinearScale::new(raw).expect("positive scale");
            assert!(matches!(
                compute_grads(scale, 800),
                Err(GanttError::InvalidScale { .. })
            ));
        }
    }

    #[test]
    fn policy_with_shrinking_coefficient_is_rejected() {
        let policy = GradSpacingPolicy {
            min_spacing_px: 40.0,
            coefficients: smallvec![2.0, 0.5],
        };
        assert!(policy.validate().is_err());
    }
}
