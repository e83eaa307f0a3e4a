use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gpa_summary::{
    grade_points, known_grades, load_request_json, logger, request_from_csv, summarize, StudentRequest,
};

#[derive(Debug, Parser)]
#[command(name = "gpa-summary")]
#[command(about = "Compute a student's GPA and total credits", version)]
struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summarize a JSON request file
    Summarize {
        request: PathBuf,
    },
    /// Summarize courses from a CSV file (course_code,course_name,credits,grade)
    Csv {
        courses: PathBuf,
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        name: String,
    },
    /// Print the grade scale
    Grades,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger("warn", cli.verbose);

    match cli.command {
        Command::Summarize { request } => {
            let request = load_request_json(&request)
                .with_context(|| format!("Failed to read request file: {:?}", request))?;
            print_summary(&request)?;
        }
        Command::Csv {
            courses,
            student_id,
            name,
        } => {
            let request = request_from_csv(&courses, &student_id, &name)
                .with_context(|| format!("Failed to load courses from {:?}", courses))?;
            print_summary(&request)?;
        }
        Command::Grades => {
            for grade in known_grades() {
                println!("{:<3} {}", grade, grade_points(grade));
            }
        }
    }

    Ok(())
}

fn print_summary(request: &StudentRequest) -> Result<()> {
    let response = summarize(request);
    let json = serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
    println!("{}", json);
    Ok(())
}
