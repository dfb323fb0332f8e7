use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    pub fn is_passing(self) -> bool {
        !matches!(self, Self::F)
    }

    fn colored(self) -> String {
        match self {
            Self::APlus | Self::A => self.as_str().green().bold().to_string(),
            Self::B | Self::C => self.as_str().blue().bold().to_string(),
            Self::D => self.as_str().yellow().bold().to_string(),
            Self::F => self.as_str().red().bold().to_string(),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summary derived from one student record. Field names serialize as the
/// camelCase record labels (`totalMarks`, `passedSubjects`, ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportCard {
    pub name: String,
    pub total_marks: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub highest_subject: String,
    pub lowest_subject: String,
    pub passed_subjects: Vec<String>,
    pub failed_subjects: Vec<String>,
    pub subject_count: usize,
}

pub fn render_human(report: &ReportCard) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Report Card: {}", report.name);
    let _ = writeln!(
        out,
        "Grade: {} ({:.2}%)",
        report.grade.colored(),
        report.percentage
    );
    let _ = writeln!(
        out,
        "Total Marks: {}/{}",
        report.total_marks,
        report.subject_count * 100
    );
    let _ = writeln!(out, "Subjects: {}", report.subject_count);

    let sections = [
        ("PASSED".green().bold().to_string(), &report.passed_subjects),
        ("FAILED".red().bold().to_string(), &report.failed_subjects),
    ];
    for (header, subjects) in sections {
        if subjects.is_empty() {
            continue;
        }

        out.push('\n');
        let _ = writeln!(out, "{} ({})", header, subjects.len());
        for subject in subjects {
            let _ = writeln!(out, "- {}", subject);
        }
    }

    out.push('\n');
    let _ = writeln!(out, "Highest: {}", report.highest_subject);
    let _ = writeln!(out, "Lowest: {}", report.lowest_subject);

    out
}
