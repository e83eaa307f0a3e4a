// 🧮 GPA Calculator - Credit-weighted grade average
// Pure function: course entries in, GPA + total credits out

use crate::grade_scale::grade_points;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Fractional digits kept in a reported GPA.
pub const GPA_SCALE: u32 = 2;

// ============================================================================
// VALUE OBJECTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub credit_hours: u32,
    pub letter_grade: String,
}

impl CourseEntry {
    pub fn new(credit_hours: u32, letter_grade: impl Into<String>) -> Self {
        CourseEntry {
            credit_hours,
            letter_grade: letter_grade.into(),
        }
    }

    /// credit_hours × grade points, exact.
    pub fn weighted_points(&self) -> Decimal {
        Decimal::from(self.credit_hours) * grade_points(&self.letter_grade)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpaResult {
    /// Always carries exactly two fractional digits.
    pub gpa: Decimal,
    pub total_credits: u64,
}

impl GpaResult {
    /// GPA as a float for JSON output. Rounding has already happened in decimal.
    pub fn gpa_f64(&self) -> f64 {
        self.gpa.to_f64().unwrap_or_default()
    }
}

// ============================================================================
// COMPUTATION
// ============================================================================

/// Compute the credit-weighted GPA of a course list.
///
/// Grades off the scale count as zero points. An empty list, or one where
/// every entry has zero credits, yields `0.00`.
pub fn compute(courses: &[CourseEntry]) -> GpaResult {
    let total_credits: u64 = courses.iter().map(|c| u64::from(c.credit_hours)).sum();

    let weighted_sum: Decimal = courses.iter().map(CourseEntry::weighted_points).sum();

    let gpa = if total_credits == 0 {
        Decimal::new(0, GPA_SCALE)
    } else {
        round_half_up(weighted_sum / Decimal::from(total_credits))
    };

    GpaResult { gpa, total_credits }
}

/// Round to two places, ties away from zero (3.445 → 3.45, never 3.44).
pub fn round_half_up(raw: Decimal) -> Decimal {
    let mut rounded = raw.round_dp_with_strategy(GPA_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(GPA_SCALE);
    rounded
}

// ============================================================================
// TESTS
// ============================================================================
