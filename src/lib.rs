#![forbid(unsafe_code)]

//! # `posterior_diagnostics`
//!
//! Default ROPE bounds and Monte Carlo standard errors for posterior samples
//! from fitted Bayesian models.
//!
//! Model fitting, posterior extraction, and effective-sample-size estimation
//! live in external collaborators; this crate consumes their outputs. The
//! ROPE resolver never fails: missing quantities degrade to a documented
//! generic default with a warning attached to the result.

pub mod mcse;
pub mod model;
pub mod rope;
pub mod stats;

pub use mcse::{
    Component, DrawColumn, Effects, EssTable, ParameterFilter, ParameterMcse, PosteriorDraws,
    PosteriorSource, compute_mcse, mcse,
};
pub use model::{BayesFactorModel, FamilyFlags, ModelDescriptor, ModelFamily, ModelProfile};
pub use rope::{
    DEFAULT_HALF_WIDTH, NEGLIGIBLE_CORRELATION, RopeEstimate, RopeInterval, RopeRange,
    RopeWarning, rope_range,
};
pub use stats::{column_std_dev, mean, sample_std_dev};
