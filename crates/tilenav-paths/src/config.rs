/// Default bound on the estimated total cost (`f`) of any expanded node.
pub const MAX_SEARCH_DISTANCE: f64 = 300.0;

/// Default Chebyshev radius searched when repairing an outline point with
/// [`PathFlag::Expand`](crate::PathFlag::Expand).
pub const DEFAULT_EXPAND_RADIUS: i32 = 3;

/// Tunables shared by every [`PathGenerator`](crate::PathGenerator) query.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// A search aborts as soon as the cheapest frontier node has
    /// `f > max_search_distance`. Also caps the Manhattan builder's route
    /// length.
    pub max_search_distance: f64,
    /// How far (in tiles, Chebyshev) `Expand` looks for a walkable substitute.
    pub expand_radius: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_search_distance: MAX_SEARCH_DISTANCE,
            expand_radius: DEFAULT_EXPAND_RADIUS,
        }
    }
}

impl SearchConfig {
    /// Set the cost bound beyond which A* gives up.
    pub fn with_max_search_distance(mut self, distance: f64) -> Self {
        self.max_search_distance = distance;
        self
    }

    /// Set the Expand search radius, clamped to zero or more.
    pub fn with_expand_radius(mut self, radius: i32) -> Self {
        self.expand_radius = radius.max(0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = SearchConfig::default();
        assert_eq!(c.max_search_distance, 300.0);
        assert_eq!(c.expand_radius, DEFAULT_EXPAND_RADIUS);
    }

    #[test]
    fn builders_override_fields() {
        let c = SearchConfig::default()
            .with_max_search_distance(50.0)
            .with_expand_radius(-2);
        assert_eq!(c.max_search_distance, 50.0);
        // Negative radii clamp to zero (no substitution).
        assert_eq!(c.expand_radius, 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c: SearchConfig = serde_json::from_str(r#"{"expand_radius": 5}"#).unwrap();
        assert_eq!(c.expand_radius, 5);
        assert_eq!(c.max_search_distance, MAX_SEARCH_DISTANCE);
    }
}
