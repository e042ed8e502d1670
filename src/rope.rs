//! # Default ROPE resolution
//!
//! Maps a classified model to a symmetric region of practical equivalence
//! around zero. Each family has its own negligible-effect formula; whenever a
//! required quantity is missing the resolver degrades to the generic
//! `[-0.1, 0.1]` default and records a warning instead of failing.

use std::f64::consts::PI;

use thiserror::Error;

use crate::model::{BayesFactorModel, ModelDescriptor, ModelFamily, ModelProfile};
use crate::stats::{column_std_dev, sample_std_dev};

/// Generic negligible-effect half-width used by the default arm and by every
/// degraded resolution path.
pub const DEFAULT_HALF_WIDTH: f64 = 0.1;

/// Negligible correlation magnitude, half the linear default.
pub const NEGLIGIBLE_CORRELATION: f64 = 0.05;

/// Non-fatal notices emitted while resolving a default ROPE.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RopeWarning {
    /// A family-specific estimate could not be computed from the available
    /// model quantities.
    #[error("Could not estimate a good default ROPE range. Using default.")]
    FallbackUsed,
}

/// Symmetric interval around zero.
///
/// Invariant: `lower == -upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeInterval {
    lower: f64,
    upper: f64,
}

impl RopeInterval {
    /// The interval `[-half_width, half_width]`.
    #[must_use]
    pub fn symmetric(half_width: f64) -> Self {
        Self {
            lower: -half_width,
            upper: half_width,
        }
    }

    #[must_use]
    pub const fn lower(self) -> f64 {
        self.lower
    }

    #[must_use]
    pub const fn upper(self) -> f64 {
        self.upper
    }

    /// Bounds as a `(lower, upper)` pair.
    #[must_use]
    pub const fn bounds(self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

/// Resolved default ROPE for one model.
#[derive(Debug, Clone, PartialEq)]
pub enum RopeRange {
    /// Univariate model: a single interval.
    Single(RopeInterval),
    /// Multivariate or multi-response model: one interval per response, in
    /// response order.
    PerResponse(Vec<RopeInterval>),
}

/// Resolution output: the range plus any degradation notices collected along
/// the way. The caller decides whether to surface the warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct RopeEstimate {
    pub range: RopeRange,
    pub warnings: Vec<RopeWarning>,
}

/// Resolve the default ROPE for `model`.
///
/// Never fails: estimation problems degrade to `[-0.1, 0.1]` and are reported
/// through [`RopeEstimate::warnings`]. Multivariate descriptors resolve each
/// sub-profile independently and accumulate the warnings of every response.
#[must_use]
pub fn rope_range(model: &ModelDescriptor) -> RopeEstimate {
    match model {
        ModelDescriptor::Univariate(profile) => {
            let (interval, warning) = resolve_profile(profile);
            RopeEstimate {
                range: RopeRange::Single(interval),
                warnings: warning.into_iter().collect(),
            }
        }
        ModelDescriptor::Multivariate(profiles) => {
            let mut intervals = Vec::with_capacity(profiles.len());
            let mut warnings = Vec::new();
            for profile in profiles {
                let (interval, warning) = resolve_profile(profile);
                intervals.push(interval);
                warnings.extend(warning);
            }
            RopeEstimate {
                range: RopeRange::PerResponse(intervals),
                warnings,
            }
        }
    }
}

fn resolve_profile(profile: &ModelProfile) -> (RopeInterval, Option<RopeWarning>) {
    let (half_width, warning) = half_width_for(profile);
    (RopeInterval::symmetric(half_width), warning)
}

/// Family dispatch for the negligible-effect half-width.
fn half_width_for(profile: &ModelProfile) -> (f64, Option<RopeWarning>) {
    match profile.family() {
        ModelFamily::Linear => scaled_response_sd(profile.response.as_deref()),
        // Log-odds conversion of the linear 0.1 * sd default.
        ModelFamily::Binomial => (DEFAULT_HALF_WIDTH * PI / 3.0_f64.sqrt(), None),
        ModelFamily::Count => match profile.residual_scale {
            Some(scale) if scale.is_finite() => (DEFAULT_HALF_WIDTH * scale, None),
            _ => degraded(),
        },
        ModelFamily::TTest => ttest_half_width(profile.bayes_factor.as_ref()),
        ModelFamily::Correlation => (NEGLIGIBLE_CORRELATION, None),
        ModelFamily::Unclassified => unclassified_half_width(profile.bayes_factor.as_ref()),
    }
}

const fn degraded() -> (f64, Option<RopeWarning>) {
    (DEFAULT_HALF_WIDTH, Some(RopeWarning::FallbackUsed))
}

fn scaled_response_sd(response: Option<&[f64]>) -> (f64, Option<RopeWarning>) {
    match response.map(sample_std_dev) {
        Some(sd) if sd.is_finite() => (DEFAULT_HALF_WIDTH * sd, None),
        _ => degraded(),
    }
}

/// Only Bayes-factor t-test objects expose the raw observation table; any
/// other t-test model has no response to scale by and degrades.
fn ttest_half_width(bayes_factor: Option<&BayesFactorModel>) -> (f64, Option<RopeWarning>) {
    match bayes_factor.and_then(|comparison| comparison.data.as_ref()) {
        Some(data) => {
            let sd = column_std_dev(data, 0);
            if sd.is_finite() {
                (DEFAULT_HALF_WIDTH * sd, None)
            } else {
                degraded()
            }
        }
        None => degraded(),
    }
}

/// A Bayes-factor object whose numerator is a linear model scales the default
/// by the numerator response's standard deviation; without an extractable
/// response the factor stays at one. Everything else takes the generic
/// default without a warning.
fn unclassified_half_width(bayes_factor: Option<&BayesFactorModel>) -> (f64, Option<RopeWarning>) {
    let Some(numerator) = bayes_factor.and_then(|comparison| comparison.numerator.as_deref())
    else {
        return (DEFAULT_HALF_WIDTH, None);
    };
    if numerator.family() != ModelFamily::Linear {
        return (DEFAULT_HALF_WIDTH, None);
    }
    match numerator.response.as_deref().map(sample_std_dev) {
        Some(sd) if sd.is_finite() => (DEFAULT_HALF_WIDTH * sd, None),
        _ => (DEFAULT_HALF_WIDTH, None),
    }
}
