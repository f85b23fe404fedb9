//! Dijkstra configuration.

use crate::error::Result;
use crate::graph::NodeId;
use crate::scalar::validate_coefficients;

/// Configuration for [`DijkstraRunner`](super::DijkstraRunner).
///
/// # Examples
///
/// ```
/// use u_mograph::graph::NodeId;
/// use u_mograph::shortest::DijkstraConfig;
///
/// let config = DijkstraConfig::new(NodeId::new(0), NodeId::new(5))
///     .with_coefficients(vec![1.0, 0.5]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraConfig {
    /// Node the search starts from.
    pub source: NodeId,

    /// Node whose shortest path is reported.
    pub destination: NodeId,

    /// Scalarization coefficients, one per weight component.
    ///
    /// `None` sums the components.
    pub coefficients: Option<Vec<f64>>,
}

impl DijkstraConfig {
    /// Creates a configuration that sums weight components.
    pub fn new(source: NodeId, destination: NodeId) -> Self {
        Self {
            source,
            destination,
            coefficients: None,
        }
    }

    /// Sets the scalarization coefficients.
    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_coefficients(self.coefficients.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sums_components() {
        let config = DijkstraConfig::new(NodeId::new(0), NodeId::new(1));
        assert!(config.coefficients.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_coefficients() {
        let base = DijkstraConfig::new(NodeId::new(0), NodeId::new(1));
        assert!(base.clone().with_coefficients(vec![]).validate().is_err());
        assert!(base
            .with_coefficients(vec![1.0, f64::NAN])
            .validate()
            .is_err());
    }
}
