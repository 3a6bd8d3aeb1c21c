//! SLA threshold configuration

use crate::SlaError;
use serde::{Deserialize, Serialize};

/// Threshold table bucketing remaining time into severities
///
/// A timer is `warning` once its remaining minutes drop to
/// `warning_minutes`, `critical` once they drop to `critical_minutes`, and
/// `overdue` once the due timestamp passes.
///
/// Invariant: `warning_minutes > critical_minutes >= 1`. Violations are
/// rejected up front rather than producing nonsensical buckets.
///
/// # Examples
///
/// ```
/// use venlyn_sla::SlaThresholds;
///
/// // Default thresholds (warn at 60 minutes, critical at 15)
/// let thresholds = SlaThresholds::default();
/// assert_eq!(thresholds.warning_minutes, 60);
///
/// // Tighter table for emergency queues
/// let thresholds = SlaThresholds::urgent();
/// assert_eq!(thresholds.critical_minutes, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaThresholds {
    /// Remaining minutes at or below which a timer is `warning`
    pub warning_minutes: u32,

    /// Remaining minutes at or below which a timer is `critical`
    pub critical_minutes: u32,
}

impl Default for SlaThresholds {
    fn default() -> Self {
        Self {
            warning_minutes: 60,
            critical_minutes: 15,
        }
    }
}

impl SlaThresholds {
    /// Create a threshold table, validating the ordering invariant
    pub fn new(warning_minutes: u32, critical_minutes: u32) -> Result<Self, SlaError> {
        let thresholds = Self {
            warning_minutes,
            critical_minutes,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Tight table for queues where minutes matter
    ///
    /// - Warning: 15 minutes
    /// - Critical: 5 minutes
    pub fn urgent() -> Self {
        Self {
            warning_minutes: 15,
            critical_minutes: 5,
        }
    }

    /// Loose table for next-business-day follow-ups
    ///
    /// - Warning: 8 hours
    /// - Critical: 1 hour
    pub fn relaxed() -> Self {
        Self {
            warning_minutes: 480,
            critical_minutes: 60,
        }
    }

    /// Check the ordering invariant
    pub fn validate(&self) -> Result<(), SlaError> {
        if self.critical_minutes == 0 {
            return Err(SlaError::InvalidConfiguration(
                "critical_minutes must be at least 1".to_string(),
            ));
        }
        if self.warning_minutes <= self.critical_minutes {
            return Err(SlaError::InvalidConfiguration(format!(
                "warning_minutes ({}) must exceed critical_minutes ({})",
                self.warning_minutes, self.critical_minutes
            )));
        }
        Ok(())
    }
}
