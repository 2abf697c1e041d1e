//! Validation rules
//!
//! A [`ValidationRule`] binds a field name to a [`FieldCheck`] strategy. The
//! rule name is documentation only and never used for lookup.

use crate::check::FieldCheck;
use seqlims_model::{Record, ValidationResult};
use std::fmt;
use std::sync::Arc;

/// One field validator in a rule set
#[derive(Clone)]
pub struct ValidationRule {
    name: String,
    field: String,
    required: bool,
    description: Option<String>,
    check: Arc<dyn FieldCheck>,
}

impl ValidationRule {
    /// Create rule for `field`
    ///
    /// The rule counts as required when its check does.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        field: impl Into<String>,
        check: impl FieldCheck + 'static,
    ) -> Self {
        let required = check.is_required();
        Self {
            name: name.into(),
            field: field.into(),
            required,
            description: None,
            check: Arc::new(check),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Rule name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field the rule reads
    #[inline]
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Whether the field counts towards the missing-fields penalty
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Optional description
    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Run the check against `record[field]`
    #[inline]
    #[must_use]
    pub fn evaluate(&self, record: &Record) -> Option<ValidationResult> {
        self.check
            .evaluate(&self.field, record.value(&self.field), record)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}
