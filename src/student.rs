// 🧑‍🎓 Student Summary - Request/response envelope around the calculator
// Carries the student identity through unchanged; only credits + grade reach compute()

use crate::calculator::{compute, CourseEntry};
use crate::grade_scale::is_known_grade;
use serde::{Deserialize, Serialize};

// ============================================================================
// REQUEST
// ============================================================================

/// One course as submitted by a client.
///
/// `course_code` and `course_name` are accepted for the caller's benefit and
/// do not affect the result. Credits are unsigned, so a negative value is a
/// shape error at deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_code: String,
    pub course_name: String,
    pub credits: u32,
    pub grade: String,
}

impl From<&Course> for CourseEntry {
    fn from(course: &Course) -> Self {
        CourseEntry::new(course.credits, course.grade.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRequest {
    pub student_id: String,
    pub name: String,
    pub courses: Vec<Course>,
}

// ============================================================================
// RESPONSE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub student_id: String,
    pub name: String,
    pub gpa: f64,
    pub total_credits: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentResponse {
    pub student_summary: StudentSummary,
}

// ============================================================================
// SUMMARIZE
// ============================================================================

/// Compute the summary for one student, courses taken in submission order.
pub fn summarize(request: &StudentRequest) -> StudentResponse {
    for course in request.courses.iter().filter(|c| !is_known_grade(&c.grade)) {
        tracing::debug!(
            student_id = %request.student_id,
            course_code = %course.course_code,
            grade = %course.grade,
            "grade not on scale, counted as 0 points"
        );
    }

    let entries: Vec<CourseEntry> = request.courses.iter().map(CourseEntry::from).collect();
    let result = compute(&entries);

    tracing::debug!(
        student_id = %request.student_id,
        courses = entries.len(),
        gpa = %result.gpa,
        total_credits = result.total_credits,
        "computed student summary"
    );

    StudentResponse {
        student_summary: StudentSummary {
            student_id: request.student_id.clone(),
            name: request.name.clone(),
            gpa: result.gpa_f64(),
            total_credits: result.total_credits,
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
