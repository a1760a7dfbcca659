//! Front-end configuration.

/// Tunables for parsing and analysis.
///
/// Capacities are initial reservations only. The arenas grow past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Maximum number of analysis errors before stopping (0 = unlimited).
    pub error_limit: usize,
    /// Initial node count reserved in the AST arena.
    pub node_capacity: usize,
    /// Initial slot count reserved in the scratch region used for lists.
    pub scratch_capacity: usize,
    /// Initial symbol count reserved in the symbol arena.
    pub symbol_capacity: usize,
    /// Initial scope count reserved in the scope arena.
    pub scope_capacity: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        FrontendConfig {
            error_limit: 0,
            node_capacity: 4096,
            scratch_capacity: 64,
            symbol_capacity: 1024,
            scope_capacity: 256,
        }
    }
}

impl FrontendConfig {
    /// Stop analysis at the first error, like a fail-fast compiler.
    pub fn first_error_only() -> Self {
        FrontendConfig {
            error_limit: 1,
            ..Default::default()
        }
    }

    /// Whether `count` errors is enough to stop analysis.
    pub fn limit_reached(&self, count: usize) -> bool {
        self.error_limit != 0 && count >= self.error_limit
    }
}

#[cfg(test)]
mod tests {
    use super::FrontendConfig;

    #[test]
    fn test_default_is_unlimited() {
        let config = FrontendConfig::default();
        assert!(!config.limit_reached(1000));
    }

    #[test]
    fn test_first_error_only() {
        let config = FrontendConfig::first_error_only();
        assert!(!config.limit_reached(0));
        assert!(config.limit_reached(1));
        assert_eq!(config.node_capacity, FrontendConfig::default().node_capacity);
    }
}
