//! Solver configuration.

/// Tunable limits for the saturation loop.
///
/// The equation and step thresholds are soft stops: the loop exits but
/// the surviving queues remain observable. The expression caps bound
/// individual reduction and superposition results; a result above
/// either cap is discarded and the producing step is marked
/// too-complex.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Give up once `|processed| + |to_simplify|` reaches this bound.
    pub eqs_threshold: usize,
    /// Maximum number of `step()` invocations per `saturate()` call.
    pub max_steps: usize,
    /// Largest tree size a reduction or S-polynomial result may have.
    pub max_expr_size: usize,
    /// Largest degree a reduction or S-polynomial result may have.
    pub max_expr_degree: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            eqs_threshold: 1024,
            max_steps: 4096,
            max_expr_size: 1024,
            max_expr_degree: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.eqs_threshold, 1024);
        assert_eq!(config.max_steps, 4096);
        assert!(config.max_expr_size > 0);
        assert!(config.max_expr_degree > 0);
    }
}
