pub mod grads;
pub mod scale;

pub use grads::{
    GRAD_INTERVAL_COEFFICIENTS, GradSpacingPolicy, MIN_GRAD_SPACING_PX, TimeGrad, compute_grads,
    compute_grads_with, grad_interval,
};
pub use scale::LinearScale;
