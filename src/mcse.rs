//! # Monte Carlo standard errors
//!
//! Joins per-parameter posterior draws with per-parameter effective sample
//! sizes and computes `sd / sqrt(ess)` for every parameter present on both
//! sides. The two collections come from independent estimators and may differ
//! in parameter set or ordering; the join keeps the draw ordering.

use num_traits::ToPrimitive;

use crate::stats::sample_std_dev;

/// Which coefficient groups the extraction layer should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effects {
    #[default]
    Fixed,
    Random,
    All,
}

/// Which mixture component the extraction layer should return for
/// zero-inflated or hurdle models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Component {
    #[default]
    Conditional,
    ZeroInflated,
    All,
}

/// Parameter selection forwarded unchanged to the extraction layer.
///
/// Using one filter for both the draw extraction and the ESS estimation
/// guarantees the two collections cover a compatible parameter universe
/// before the join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterFilter {
    pub effects: Effects,
    pub component: Component,
    /// Optional explicit parameter-name subset.
    pub parameters: Option<Vec<String>>,
}

/// One named column of posterior draws, one value per retained iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Ordered collection of named posterior draw columns.
///
/// Names are expected to be unique and all columns the same length; violating
/// that is a caller-side contract error, not something this crate detects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PosteriorDraws {
    columns: Vec<DrawColumn>,
}

impl PosteriorDraws {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append one parameter's draw column.
    pub fn push(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.columns.push(DrawColumn {
            name: name.into(),
            values,
        });
    }

    #[must_use]
    pub fn columns(&self) -> &[DrawColumn] {
        &self.columns
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Per-parameter effective sample sizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EssTable {
    entries: Vec<(String, f64)>,
}

impl EssTable {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record one estimate; integer and float ESS values are both accepted.
    pub fn insert(&mut self, name: impl Into<String>, ess: impl ToPrimitive) {
        self.entries
            .push((name.into(), ess.to_f64().unwrap_or(f64::NAN)));
    }

    /// Estimate for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, ess)| *ess)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// MCSE for one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterMcse {
    pub name: String,
    pub mcse: f64,
}

/// Per-parameter Monte Carlo standard error, `sd / sqrt(ess)`.
///
/// Draws and ESS are joined by parameter name; parameters present on only one
/// side are silently dropped. Output follows the draw-column ordering. An ESS
/// of zero propagates the natural division result (infinity, or `NaN` for a
/// zero standard deviation) rather than coercing to zero.
#[must_use]
pub fn compute_mcse(draws: &PosteriorDraws, ess: &EssTable) -> Vec<ParameterMcse> {
    draws
        .columns()
        .iter()
        .filter_map(|column| {
            ess.get(&column.name).map(|ess_value| ParameterMcse {
                name: column.name.clone(),
                mcse: sample_std_dev(&column.values) / ess_value.sqrt(),
            })
        })
        .collect()
}

/// Posterior access implemented by fitted-model adapters.
///
/// Both methods must honor the same filter so that draws and ESS describe a
/// compatible parameter universe; [`mcse`] relies on that when joining.
pub trait PosteriorSource {
    /// Posterior draw columns for the parameters selected by `filter`.
    fn posterior_draws(&self, filter: &ParameterFilter) -> PosteriorDraws;

    /// Effective sample sizes for the parameters selected by `filter`.
    fn effective_sample_sizes(&self, filter: &ParameterFilter) -> EssTable;
}

/// Extract draws and ESS with a single filter and compute per-parameter MCSE.
#[must_use]
pub fn mcse(model: &impl PosteriorSource, filter: &ParameterFilter) -> Vec<ParameterMcse> {
    compute_mcse(
        &model.posterior_draws(filter),
        &model.effective_sample_sizes(filter),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn draws_of(columns: &[(&str, &[f64])]) -> PosteriorDraws {
        let mut draws = PosteriorDraws::new();
        for (name, values) in columns {
            draws.push(*name, values.to_vec());
        }
        draws
    }

    #[test]
    fn mcse_is_sd_over_sqrt_ess() {
        // Sample sd of [-1, 0, 1] is exactly 1.
        let draws = draws_of(&[("b", &[-1.0, 0.0, 1.0])]);
        let mut ess = EssTable::new();
        ess.insert("b", 100);

        let result = compute_mcse(&draws, &ess);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "b");
        assert_relative_eq!(result[0].mcse, 0.1);
    }

    #[test]
    fn join_keeps_intersection_in_draw_order() {
        let draws = draws_of(&[
            ("a", &[1.0, 2.0]),
            ("b", &[3.0, 4.0]),
            ("c", &[5.0, 6.0]),
        ]);
        let mut ess = EssTable::new();
        ess.insert("d", 50.0);
        ess.insert("c", 40.0);
        ess.insert("b", 30.0);

        let result = compute_mcse(&draws, &ess);
        let names: Vec<&str> = result.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn zero_ess_propagates_infinity() {
        let draws = draws_of(&[("b", &[-1.0, 0.0, 1.0])]);
        let mut ess = EssTable::new();
        ess.insert("b", 0.0);

        let result = compute_mcse(&draws, &ess);
        assert!(result[0].mcse.is_infinite());
        assert!(result[0].mcse > 0.0);
    }

    #[test]
    fn float_and_integer_ess_agree() {
        let draws = draws_of(&[("b", &[-1.0, 0.0, 1.0])]);
        let mut integer_ess = EssTable::new();
        integer_ess.insert("b", 25usize);
        let mut float_ess = EssTable::new();
        float_ess.insert("b", 25.0);

        assert_eq!(
            compute_mcse(&draws, &integer_ess),
            compute_mcse(&draws, &float_ess)
        );
    }

    #[test]
    fn empty_inputs_produce_empty_output() {
        assert!(compute_mcse(&PosteriorDraws::new(), &EssTable::new()).is_empty());

        let draws = draws_of(&[("a", &[1.0, 2.0])]);
        assert!(compute_mcse(&draws, &EssTable::new()).is_empty());
    }

    #[test]
    fn computation_is_idempotent() {
        let draws = draws_of(&[("a", &[0.4, 0.9, 1.3]), ("b", &[2.0, 2.5, 1.5])]);
        let mut ess = EssTable::new();
        ess.insert("a", 120.0);
        ess.insert("b", 80.0);

        assert_eq!(compute_mcse(&draws, &ess), compute_mcse(&draws, &ess));
    }
}
