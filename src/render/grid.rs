use crate::core::TimeGrad;
use crate::error::{GanttError, GanttResult};

use super::{Color, LinePrimitive};

pub const GRAD_LINE_STROKE_WIDTH: f64 = 1.0;

/// Projects grads into vertical gridline draw commands spanning `0..height`.
pub fn grad_lines(
    grads: &[TimeGrad],
    height: f64,
    color: Color,
) -> GanttResult<Vec<LinePrimitive>> {
    if !height.is_finite() || height < 0.0 {
        return Err(GanttError::InvalidData(
            "grid height must be finite and >= 0".to_owned(),
        ));
    }
    color.validate()?;

    Ok(grads
        .iter()
        .map(|grad| {
            let x = grad.pos as f64;
            LinePrimitive::new(x, 0.0, x, height, GRAD_LINE_STROKE_WIDTH, color)
        })
        .collect())
}
