//! Reference quality standards

use serde::Serialize;

/// Acceptable envelope of one measurable parameter for one experiment stage
///
/// Standards are compile-time data. Lookup is by [`QualityStandard::parameter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityStandard {
    /// Display name
    pub name: &'static str,
    /// Record field this standard applies to
    pub parameter: &'static str,
    /// Lowest acceptable value
    pub min_value: Option<f64>,
    /// Highest acceptable value
    pub max_value: Option<f64>,
    /// Single target value
    pub optimal_value: Option<f64>,
    /// Ideal band, inclusive on both ends
    pub optimal_range: Option<(f64, f64)>,
    /// Unit of measure
    pub unit: Option<&'static str>,
    /// Citation for the thresholds
    pub source: Option<&'static str>,
}

impl QualityStandard {
    /// Check if a value lies inside the optimal band
    #[inline]
    #[must_use]
    pub fn in_optimal_range(&self, value: f64) -> bool {
        self.optimal_range
            .is_some_and(|(low, high)| value >= low && value <= high)
    }

    /// Check if a value exceeds the maximum
    #[inline]
    #[must_use]
    pub fn exceeds_max(&self, value: f64) -> bool {
        self.max_value.is_some_and(|max| value > max)
    }

    /// Check if a value falls below the minimum
    #[inline]
    #[must_use]
    pub fn below_min(&self, value: f64) -> bool {
        self.min_value.is_some_and(|min| value < min)
    }

    /// Append the unit, when one is defined
    #[must_use]
    pub fn with_unit(&self, value: f64) -> String {
        match self.unit {
            Some(unit) => format!("{value} {unit}"),
            None => value.to_string(),
        }
    }

    /// Human-readable acceptable range, e.g. `10-1000 ng/μL (最佳 50-200 ng/μL)`
    #[must_use]
    pub fn range_text(&self) -> String {
        let base = match (self.min_value, self.max_value) {
            (Some(min), Some(max)) => format!("{min}-{}", self.with_unit(max)),
            (Some(min), None) => format!("≥ {}", self.with_unit(min)),
            (None, Some(max)) => format!("≤ {}", self.with_unit(max)),
            (None, None) => String::new(),
        };
        match self.optimal_range {
            Some((low, high)) if base.is_empty() => {
                format!("最佳 {low}-{}", self.with_unit(high))
            }
            Some((low, high)) => format!("{base} (最佳 {low}-{})", self.with_unit(high)),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONCENTRATION: QualityStandard = QualityStandard {
        name: "DNA浓度",
        parameter: "dnaConcentration",
        min_value: Some(10.0),
        max_value: Some(1000.0),
        optimal_value: None,
        optimal_range: Some((50.0, 200.0)),
        unit: Some("ng/μL"),
        source: None,
    };

    #[test]
    fn range_checks() {
        assert!(CONCENTRATION.in_optimal_range(50.0));
        assert!(CONCENTRATION.in_optimal_range(200.0));
        assert!(!CONCENTRATION.in_optimal_range(201.0));
        assert!(CONCENTRATION.exceeds_max(1000.1));
        assert!(!CONCENTRATION.exceeds_max(1000.0));
        assert!(CONCENTRATION.below_min(9.9));
    }

    #[test]
    fn range_text_includes_optimal_band() {
        assert_eq!(
            CONCENTRATION.range_text(),
            "10-1000 ng/μL (最佳 50-200 ng/μL)"
        );
    }

    #[test]
    fn missing_bounds_never_trip() {
        let open = QualityStandard {
            min_value: None,
            max_value: None,
            optimal_range: None,
            ..CONCENTRATION
        };
        assert!(!open.exceeds_max(f64::MAX));
        assert!(!open.below_min(f64::MIN));
        assert!(!open.in_optimal_range(100.0));
        assert_eq!(open.range_text(), "");
    }
}
