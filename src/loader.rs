// 📂 Loaders - Course lists from CSV, whole requests from JSON

use crate::error::{GpaError, Result};
use crate::student::{Course, StudentRequest};
use std::fs;
use std::path::Path;

/// Read courses from a CSV file with header
/// `course_code,course_name,credits,grade`.
pub fn load_courses_csv(csv_path: &Path) -> Result<Vec<Course>> {
    let mut rdr = csv::Reader::from_path(csv_path)?;

    let mut courses = Vec::new();
    for result in rdr.deserialize() {
        let course: Course = result?;
        courses.push(course);
    }

    tracing::debug!("loaded {} courses from {:?}", courses.len(), csv_path);
    Ok(courses)
}

/// Read a full student request from a JSON file.
pub fn load_request_json(json_path: &Path) -> Result<StudentRequest> {
    let content = fs::read_to_string(json_path)?;
    let request: StudentRequest = serde_json::from_str(&content)?;
    Ok(request)
}

/// Build a request from CSV courses plus identity given on the command line.
pub fn request_from_csv(csv_path: &Path, student_id: &str, name: &str) -> Result<StudentRequest> {
    if student_id.trim().is_empty() {
        return Err(GpaError::validation("student_id cannot be empty"));
    }

    Ok(StudentRequest {
        student_id: student_id.to_string(),
        name: name.to_string(),
        courses: load_courses_csv(csv_path)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_courses_csv() {
        let file = write_temp(
            "course_code,course_name,credits,grade\n\
             CS101,Intro to CS,3,A+\n\
             MA201,\"Linear Algebra, I\",2,B\n",
        );

        let courses = load_courses_csv(file.path()).unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].course_code, "CS101");
        assert_eq!(courses[1].course_name, "Linear Algebra, I");
        assert_eq!(courses[1].credits, 2);
        assert_eq!(courses[1].grade, "B");
    }

    #[test]
    fn test_csv_negative_credits_is_error() {
        let file = write_temp("course_code,course_name,credits,grade\nCS101,Intro,-3,A\n");

        let err = load_courses_csv(file.path()).unwrap_err();
        assert!(matches!(err, GpaError::Csv(_)));
    }

    #[test]
    fn test_missing_csv_is_error() {
        let err = load_courses_csv(Path::new("/no/such/courses.csv")).unwrap_err();
        assert!(matches!(err, GpaError::Csv(_)));
    }

    #[test]
    fn test_load_request_json() {
        let file = write_temp(
            r#"{"student_id": "42", "name": "Choi", "courses": [
                {"course_code": "PH100", "course_name": "Physics", "credits": 4, "grade": "C+"}
            ]}"#,
        );

        let request = load_request_json(file.path()).unwrap();
        assert_eq!(request.student_id, "42");
        assert_eq!(request.courses[0].credits, 4);
    }

    #[test]
    fn test_request_json_missing_field_is_error() {
        let file = write_temp(r#"{"student_id": "42", "courses": []}"#);

        let err = load_request_json(file.path()).unwrap_err();
        assert!(matches!(err, GpaError::Json(_)));
    }

    #[test]
    fn test_request_from_csv_requires_student_id() {
        let file = write_temp("course_code,course_name,credits,grade\n");

        let err = request_from_csv(file.path(), "  ", "Nobody").unwrap_err();
        assert!(matches!(err, GpaError::Validation { .. }));

        let request = request_from_csv(file.path(), "s1", "Somebody").unwrap();
        assert!(request.courses.is_empty());
    }
}
