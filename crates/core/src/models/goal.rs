use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A savings goal. `current_amount` grows only through the allocation
/// operation; the target is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
}

impl Goal {
    /// Create a goal. The target must be strictly positive — a zero
    /// target would make progress undefined.
    pub fn new(
        title: impl Into<String>,
        target_amount: f64,
        current_amount: f64,
    ) -> Result<Self, CoreError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CoreError::Validation("Goal title must not be empty".into()));
        }
        if !target_amount.is_finite() || target_amount <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Goal target must be greater than zero, got {target_amount}"
            )));
        }
        if !current_amount.is_finite() || current_amount < 0.0 {
            return Err(CoreError::Validation(format!(
                "Goal starting amount must not be negative, got {current_amount}"
            )));
        }
        Ok(Self {
            id: super::new_entry_id(),
            title,
            target_amount,
            current_amount,
        })
    }

    /// Progress toward the target, clamped to 0..=100. Never reports
    /// above 100 even when the accumulated amount overshoots the target.
    ///
    /// Creation validates the target, but stored JSON is not re-validated
    /// on load; a non-positive target reads as zero progress.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).clamp(0.0, 100.0)
    }
}
