// GPA Summary - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod grade_scale;
pub mod calculator;
pub mod student;
pub mod loader;
pub mod config;
pub mod logger;
pub mod error;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use grade_scale::{grade_points, is_known_grade, known_grades, GRADE_SCALE};
pub use calculator::{compute, round_half_up, CourseEntry, GpaResult, GPA_SCALE};
pub use student::{summarize, Course, StudentRequest, StudentResponse, StudentSummary};
pub use loader::{load_courses_csv, load_request_json, request_from_csv};
pub use config::{load_config, load_config_with_source, AppConfig, ConfigSource, LoggingConfig, ServerConfig};
pub use error::{GpaError, Result};
