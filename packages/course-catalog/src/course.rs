//! Course record and course-number canonicalization.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical form of a course number: surrounding whitespace trimmed, then
/// ASCII letters uppercased. Non-ASCII characters pass through unchanged.
///
/// All equality and hashing of course numbers goes through this.
pub fn canonicalize(number: &str) -> String {
    number.trim().to_ascii_uppercase()
}

/// One course as read from the catalog file.
///
/// `number` and `title` are stored verbatim (already trimmed by the loader);
/// only comparisons use the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub number: String,
    pub title: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Builder-style prerequisite list. Blank entries are dropped.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.trim().is_empty())
            .collect();
        self
    }

    /// Canonical key used by the index.
    pub fn key(&self) -> String {
        canonicalize(&self.number)
    }

    /// Whether `query` names this course, ignoring case and padding.
    pub fn matches(&self, query: &str) -> bool {
        self.key() == canonicalize(query)
    }

    pub fn row(&self) -> CourseRow {
        CourseRow {
            number: self.number.clone(),
            title: self.title.clone(),
        }
    }
}

/// Detail rendering: `NUMBER, TITLE` followed by the prerequisite line.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, {}", self.number, self.title)?;
        if self.prerequisites.is_empty() {
            write!(f, "Prerequisites: None")
        } else {
            write!(f, "Prerequisites: {}", self.prerequisites.join(", "))
        }
    }
}

/// One line of the sorted course listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRow {
    pub number: String,
    pub title: String,
}

impl fmt::Display for CourseRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize(" csci101 "), "CSCI101");
        assert_eq!(canonicalize("CSCI101"), "CSCI101");
        assert_eq!(canonicalize("Csci101"), "CSCI101");
        assert_eq!(canonicalize("\tmath 201\r\n"), "MATH 201");
        assert_eq!(canonicalize("   "), "");
        assert_eq!(canonicalize("straße"), "STRAßE");
    }

    #[test]
    fn test_canonicalize_idempotent() {
        for s in ["", " a ", "Csci101", "\tx y\n", "ß"] {
            let once = canonicalize(s);
            assert_eq!(canonicalize(&once), once);
        }
    }

    #[test]
    fn test_matches_ignores_case_and_padding() {
        let course = Course::new("CSCI200", "Data Structures");
        assert!(course.matches("csci200"));
        assert!(course.matches("  CsCi200 "));
        assert!(!course.matches("CSCI20"));
    }

    #[test]
    fn test_with_prerequisites_drops_blank() {
        let course = Course::new("CSCI300", "Algorithms")
            .with_prerequisites(["CSCI200", "", "  ", "CSCI101"]);
        assert_eq!(course.prerequisites, vec!["CSCI200", "CSCI101"]);
    }

    #[test]
    fn test_display_detail() {
        let course = Course::new("CSCI300", "Algorithms")
            .with_prerequisites(["CSCI200", "CSCI101"]);
        assert_eq!(
            course.to_string(),
            "CSCI300, Algorithms\nPrerequisites: CSCI200, CSCI101"
        );

        let intro = Course::new("CSCI101", "Intro to Programming");
        assert_eq!(
            intro.to_string(),
            "CSCI101, Intro to Programming\nPrerequisites: None"
        );
    }

    #[test]
    fn test_row_display() {
        let row = Course::new("MATH201", "Discrete Mathematics").row();
        assert_eq!(row.to_string(), "MATH201, Discrete Mathematics");
    }

    #[test]
    fn test_json_shape() {
        let course = Course::new("CSCI200", "Data Structures").with_prerequisites(["CSCI101"]);
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["number"], "CSCI200");
        assert_eq!(json["prerequisites"][0], "CSCI101");

        let parsed: Course =
            serde_json::from_str(r#"{"number":"A1","title":"T"}"#).unwrap();
        assert!(parsed.prerequisites.is_empty());
    }
}
