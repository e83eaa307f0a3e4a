// 🎓 Grade Scale - Letter grades as data
// Fixed 4.5-point scale. Read-only, shared by every request.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ============================================================================
// SCALE TABLE
// ============================================================================

/// Letter grade → grade points, highest first.
///
/// A+ is worth 4.5, so the scale tops out above the usual 4.0.
pub static GRADE_SCALE: [(&str, Decimal); 9] = [
    ("A+", dec!(4.5)),
    ("A", dec!(4.0)),
    ("B+", dec!(3.5)),
    ("B", dec!(3.0)),
    ("C+", dec!(2.5)),
    ("C", dec!(2.0)),
    ("D+", dec!(1.5)),
    ("D", dec!(1.0)),
    ("F", dec!(0.0)),
];

// ============================================================================
// LOOKUPS
// ============================================================================

/// Grade points for a letter grade.
///
/// Anything not on the scale (including lowercase or padded input) is worth
/// zero points rather than an error.
pub fn grade_points(grade: &str) -> Decimal {
    GRADE_SCALE
        .iter()
        .find(|(letter, _)| *letter == grade)
        .map(|(_, points)| *points)
        .unwrap_or(Decimal::ZERO)
}

pub fn is_known_grade(grade: &str) -> bool {
    GRADE_SCALE.iter().any(|(letter, _)| *letter == grade)
}

/// Letter grades in scale order.
pub fn known_grades() -> impl Iterator<Item = &'static str> {
    GRADE_SCALE.iter().map(|(letter, _)| *letter)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_maps_to_its_points() {
        assert_eq!(grade_points("A+"), dec!(4.5));
        assert_eq!(grade_points("A"), dec!(4.0));
        assert_eq!(grade_points("B+"), dec!(3.5));
        assert_eq!(grade_points("B"), dec!(3.0));
        assert_eq!(grade_points("C+"), dec!(2.5));
        assert_eq!(grade_points("C"), dec!(2.0));
        assert_eq!(grade_points("D+"), dec!(1.5));
        assert_eq!(grade_points("D"), dec!(1.0));
        assert_eq!(grade_points("F"), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_grade_is_worth_zero() {
        assert_eq!(grade_points("X"), Decimal::ZERO);
        assert_eq!(grade_points(""), Decimal::ZERO);
        assert_eq!(grade_points("A-"), Decimal::ZERO);
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_sensitive() {
        assert_eq!(grade_points("a"), Decimal::ZERO);
        assert_eq!(grade_points(" A"), Decimal::ZERO);
        assert!(!is_known_grade("b+"));
        assert!(is_known_grade("B+"));
    }

    #[test]
    fn test_known_grades_in_scale_order() {
        let grades: Vec<&str> = known_grades().collect();
        assert_eq!(grades, vec!["A+", "A", "B+", "B", "C+", "C", "D+", "D", "F"]);
    }
}
