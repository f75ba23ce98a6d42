//! Interactive course planner menu.
//!
//! Reads choices line by line and writes prompts and results to the given
//! streams, so the loop runs the same against a terminal or a test buffer.
//! Load diagnostics go to the log, not to `out`.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::session::CatalogSession;

/// A parsed menu selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    ListCourses,
    ShowCourse,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Load,
            "2" => MenuChoice::ListCourses,
            "3" => MenuChoice::ShowCourse,
            "9" => MenuChoice::Exit,
            other => MenuChoice::Invalid(other.to_string()),
        }
    }
}

const MENU: &str = "1. Load Data Structure.\n\
                    2. Print Course List.\n\
                    3. Print Course.\n\
                    9. Exit\n";

/// Run the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    session: &mut CatalogSession,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Welcome to the course planner.\n")?;

    loop {
        writeln!(out, "{}", MENU)?;
        writeln!(out, "What would you like to do?")?;

        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match MenuChoice::parse(&choice) {
            MenuChoice::Load => {
                writeln!(out, "Enter the file name to load:")?;
                let Some(file_name) = read_line(&mut input)? else {
                    break;
                };
                match session.try_load(Path::new(&file_name)) {
                    Ok(report) => writeln!(
                        out,
                        "Courses loaded successfully ({} loaded, {} skipped).\n",
                        report.accepted,
                        report.diagnostics.len()
                    )?,
                    Err(err) => writeln!(
                        out,
                        "Error: {}. Please check the file and try again.\n",
                        err
                    )?,
                }
            }
            MenuChoice::ListCourses => match session.list_all() {
                Ok(rows) => {
                    writeln!(out, "\nHere is a sample schedule:")?;
                    for row in rows {
                        writeln!(out, "{}", row)?;
                    }
                    writeln!(out)?;
                }
                Err(err) => write_miss(out, session, err)?,
            },
            MenuChoice::ShowCourse => {
                if !session.is_loaded() {
                    write_miss(out, session, CatalogError::EmptyCatalog)?;
                    continue;
                }
                writeln!(out, "\nWhat course do you want to know about?")?;
                let Some(query) = read_line(&mut input)? else {
                    break;
                };
                match session.detail(&query) {
                    Ok(course) => writeln!(out, "\n{}\n", course)?,
                    Err(err) => write_miss(out, session, err)?,
                }
            }
            MenuChoice::Exit => {
                writeln!(out, "Thank you for using the course planner!")?;
                return Ok(());
            }
            MenuChoice::Invalid(choice) => {
                writeln!(out, "{} is not a valid option.\n", choice)?;
            }
        }
    }

    tracing::debug!("input closed, leaving menu");
    Ok(())
}

/// Next trimmed line, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_miss<W: Write>(out: &mut W, session: &CatalogSession, err: CatalogError) -> Result<()> {
    match err {
        CatalogError::EmptyCatalog if !session.is_loaded() => {
            writeln!(out, "Please load data first using option 1.\n")?
        }
        CatalogError::EmptyCatalog => writeln!(out, "No courses loaded. Please load data first.\n")?,
        CatalogError::NotFound(_) => writeln!(out, "Course not found.\n")?,
        other => return Err(other),
    }
    Ok(())
}
