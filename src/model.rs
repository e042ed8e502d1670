//! # Model descriptors
//!
//! Defines the light-weight records handed over by the external extraction
//! layer: family capability flags, optional response and residual-scale
//! quantities, and embedded Bayes-factor structure.
//!
//! # Examples
//!
//! ```
//! use posterior_diagnostics::{FamilyFlags, ModelFamily, ModelProfile};
//!
//! let flags = FamilyFlags {
//!     is_linear: true,
//!     ..FamilyFlags::default()
//! };
//! let profile = ModelProfile::new(flags).with_response(vec![1.0, 2.0, 3.0]);
//!
//! assert_eq!(profile.family(), ModelFamily::Linear);
//! ```

use faer::Mat;

/// Capability flags reported by the external model-family classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FamilyFlags {
    pub is_linear: bool,
    pub is_binomial: bool,
    pub is_count: bool,
    pub is_ttest: bool,
    pub is_correlation: bool,
}

/// Closed set of model families, listed in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// Gaussian linear regression.
    Linear,
    /// Binomial/logistic regression on the log-odds scale.
    Binomial,
    /// Count regression (Poisson, negative binomial).
    Count,
    /// T-test comparison.
    TTest,
    /// Correlation estimate.
    Correlation,
    /// None of the flags matched.
    Unclassified,
}

impl ModelFamily {
    /// First-match-wins classification over the capability flags.
    ///
    /// Flags are consulted in the fixed order linear, binomial, count,
    /// t-test, correlation; a model setting several flags resolves to the
    /// earliest match.
    #[must_use]
    pub const fn from_flags(flags: FamilyFlags) -> Self {
        if flags.is_linear {
            Self::Linear
        } else if flags.is_binomial {
            Self::Binomial
        } else if flags.is_count {
            Self::Count
        } else if flags.is_ttest {
            Self::TTest
        } else if flags.is_correlation {
            Self::Correlation
        } else {
            Self::Unclassified
        }
    }
}

/// A Bayes-factor comparison object.
///
/// Carries the numerator sub-model and the raw data table when the producing
/// backend exposes them; either may be absent.
#[derive(Debug, Clone, Default)]
pub struct BayesFactorModel {
    /// Numerator model of the comparison.
    pub numerator: Option<Box<ModelProfile>>,
    /// Raw observation table, one column per variable.
    pub data: Option<Mat<f64>>,
}

impl BayesFactorModel {
    #[must_use]
    pub fn with_numerator(mut self, numerator: ModelProfile) -> Self {
        self.numerator = Some(Box::new(numerator));
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Mat<f64>) -> Self {
        self.data = Some(data);
        self
    }
}

/// Per-model quantities produced by the external extraction layer.
///
/// Availability varies by family and backend, so the response vector,
/// residual scale, and Bayes-factor structure are all optional; resolvers
/// degrade to documented defaults when a quantity is absent.
#[derive(Debug, Clone, Default)]
pub struct ModelProfile {
    pub flags: FamilyFlags,
    pub response: Option<Vec<f64>>,
    pub residual_scale: Option<f64>,
    pub bayes_factor: Option<BayesFactorModel>,
}

impl ModelProfile {
    #[must_use]
    pub const fn new(flags: FamilyFlags) -> Self {
        Self {
            flags,
            response: None,
            residual_scale: None,
            bayes_factor: None,
        }
    }

    #[must_use]
    pub fn with_response(mut self, response: Vec<f64>) -> Self {
        self.response = Some(response);
        self
    }

    #[must_use]
    pub fn with_residual_scale(mut self, residual_scale: f64) -> Self {
        self.residual_scale = Some(residual_scale);
        self
    }

    #[must_use]
    pub fn with_bayes_factor(mut self, bayes_factor: BayesFactorModel) -> Self {
        self.bayes_factor = Some(bayes_factor);
        self
    }

    /// Family implied by the capability flags.
    #[must_use]
    pub const fn family(&self) -> ModelFamily {
        ModelFamily::from_flags(self.flags)
    }
}

/// Top-level model shape handed to the resolvers.
#[derive(Debug, Clone)]
pub enum ModelDescriptor {
    /// Single fitted model with at most one response vector.
    Univariate(ModelProfile),
    /// Sub-model/response pairs resolved independently, in declaration order.
    Multivariate(Vec<ModelProfile>),
}

impl ModelDescriptor {
    /// Multi-response (multinomial) model: one shared flag set applied to
    /// each response, in response order.
    #[must_use]
    pub fn multi_response(flags: FamilyFlags, responses: Vec<Vec<f64>>) -> Self {
        Self::Multivariate(
            responses
                .into_iter()
                .map(|response| ModelProfile::new(flags).with_response(response))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_defaults_to_unclassified() {
        assert_eq!(
            ModelFamily::from_flags(FamilyFlags::default()),
            ModelFamily::Unclassified
        );
    }

    #[test]
    fn classification_is_first_match_wins() {
        let flags = FamilyFlags {
            is_linear: true,
            is_binomial: true,
            is_correlation: true,
            ..FamilyFlags::default()
        };
        assert_eq!(ModelFamily::from_flags(flags), ModelFamily::Linear);

        let flags = FamilyFlags {
            is_count: true,
            is_ttest: true,
            ..FamilyFlags::default()
        };
        assert_eq!(ModelFamily::from_flags(flags), ModelFamily::Count);
    }

    #[test]
    fn multi_response_shares_flags_across_profiles() {
        let flags = FamilyFlags {
            is_binomial: true,
            ..FamilyFlags::default()
        };
        let descriptor =
            ModelDescriptor::multi_response(flags, vec![vec![0.0, 1.0], vec![1.0, 0.0, 1.0]]);

        let ModelDescriptor::Multivariate(profiles) = descriptor else {
            panic!("multi_response must produce a multivariate descriptor");
        };
        assert_eq!(profiles.len(), 2);
        assert!(
            profiles
                .iter()
                .all(|profile| profile.family() == ModelFamily::Binomial)
        );
        assert_eq!(profiles[1].response.as_deref(), Some(&[1.0, 0.0, 1.0][..]));
    }

    #[test]
    fn builders_populate_optional_fields() {
        let numerator = ModelProfile::new(FamilyFlags {
            is_linear: true,
            ..FamilyFlags::default()
        });
        let profile = ModelProfile::new(FamilyFlags::default())
            .with_residual_scale(1.5)
            .with_bayes_factor(
                BayesFactorModel::default()
                    .with_numerator(numerator)
                    .with_data(Mat::from_fn(3, 1, |_row, _col| 1.0)),
            );

        assert_eq!(profile.residual_scale, Some(1.5));
        let bayes_factor = profile.bayes_factor.expect("bayes factor should be set");
        assert!(bayes_factor.data.is_some());
        assert_eq!(
            bayes_factor.numerator.expect("numerator should be set").family(),
            ModelFamily::Linear
        );
    }
}
