//! Attendance percentage, standing, and "how many classes" planning.

use aimpur_types::AttendanceStatus;
use serde::{Deserialize, Serialize};

use crate::units::{ceil_count, floor_count, round_to};

/// Future classes covered by [`attendance_projection`] in the standard view.
pub const PROJECTION_CLASSES: u32 = 20;

/// Outcome of [`calculate_attendance`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceResult {
    /// Attended share of held classes, in percent, kept at two decimals.
    pub current_percentage: f64,
    /// Standing band of `current_percentage`.
    pub status: AttendanceStatus,
    /// Consecutive classes that must be attended to reach the target.
    /// Absent when no target was given, or when the target is 100% and already missed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes_needed: Option<u64>,
    /// Additional classes that can be missed while staying at or above the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_skip: Option<u64>,
}

impl AttendanceResult {
    /// Percentage formatted for display, e.g. `"66.67"`.
    pub fn display_percentage(&self) -> String {
        format!("{:.2}", self.current_percentage)
    }
}

/// Percentage after a number of further classes, all attended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub future_classes: u32,
    /// Two decimals.
    pub percentage: f64,
    pub total: f64,
}

pub fn attendance_status(percentage: f64) -> AttendanceStatus {
    if percentage >= 90.0 {
        AttendanceStatus::Excellent
    } else if percentage >= 80.0 {
        AttendanceStatus::Good
    } else if percentage >= 75.0 {
        AttendanceStatus::Satisfactory
    } else if percentage >= 70.0 {
        AttendanceStatus::Warning
    } else if percentage >= 60.0 {
        AttendanceStatus::Critical
    } else {
        AttendanceStatus::Failing
    }
}

fn valid_counts(total: f64, attended: f64) -> bool {
    total.is_finite() && total > 0.0 && attended.is_finite() && (0.0..=total).contains(&attended)
}

/// Computes the attendance percentage and, when `required` is in (0, 100], the plan to
/// reach or keep it.
///
/// Returns `None` unless `total` is positive and `0 <= attended <= total`, or when a plan
/// count is too large to represent.
///
/// Below target, `classes_needed` is the smallest `x` with
/// `(attended + x) / (total + x) >= required / 100`, assuming every future class is attended.
/// At or above target, `can_skip` is the largest number of missed classes that keeps the
/// ratio at or above `required`.
pub fn calculate_attendance(
    total: f64,
    attended: f64,
    required: Option<f64>,
) -> Option<AttendanceResult> {
    if !valid_counts(total, attended) {
        return None;
    }

    let current = (attended / total) * 100.0;
    let current_percentage = round_to(current, 2);
    let mut result = AttendanceResult {
        current_percentage,
        status: attendance_status(current_percentage),
        classes_needed: None,
        can_skip: None,
    };

    let Some(required) = required.filter(|r| r.is_finite() && *r > 0.0 && *r <= 100.0) else {
        return Some(result);
    };

    if current >= required {
        result.can_skip = Some(floor_count(attended / (required / 100.0) - total)?);
        result.classes_needed = Some(0);
    } else {
        // At 100% the denominator vanishes: a missed class can never be made up.
        if required < 100.0 {
            let needed = (required * total - attended * 100.0) / (100.0 - required);
            result.classes_needed = Some(ceil_count(needed)?);
        }
        result.can_skip = Some(0);
    }

    Some(result)
}

/// Percentage after each of `0..=future_classes` further classes, assuming all are attended.
///
/// Same preconditions as [`calculate_attendance`].
pub fn attendance_projection(
    total: f64,
    attended: f64,
    future_classes: u32,
) -> Option<Vec<ProjectionPoint>> {
    if !valid_counts(total, attended) {
        return None;
    }
    let points = (0..=future_classes)
        .map(|i| {
            let extra = f64::from(i);
            let new_total = total + extra;
            ProjectionPoint {
                future_classes: i,
                percentage: round_to((attended + extra) / new_total * 100.0, 2),
                total: new_total,
            }
        })
        .collect();
    Some(points)
}
