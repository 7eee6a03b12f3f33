//! Solver counters and the statistics sink they are reported into.

use std::fmt;

/// Raw counters maintained by the solver.
#[derive(Debug, Clone, Default)]
pub struct SolverStats {
    /// Number of `step()` invocations across all `saturate()` calls.
    pub compute_steps: u64,
    /// Number of successful single-equation rewrites.
    pub simplified: u64,
    /// Number of S-polynomials added to the working set.
    pub superposed: u64,
    /// Largest polynomial degree seen on any equation.
    pub max_expr_degree: usize,
    /// Largest polynomial tree size seen on any equation.
    pub max_expr_size: usize,
}

impl SolverStats {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Ordered key/value sink for statistics reporting.
///
/// Hosts pass one to [`collect_statistics`](crate::Solver::collect_statistics);
/// repeated `update` calls on the same key accumulate.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    entries: Vec<(String, u64)>,
}

impl Statistics {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` under `key`, accumulating with any prior value.
    pub fn update(&mut self, key: &str, value: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            entry.1 += value;
        } else {
            self.entries.push((key.to_string(), value));
        }
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| *v)
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}
