//! Report card generation from a student's per-subject marks: totals,
//! percentage, letter grade, best and worst subject, and pass/fail lists.

pub mod report;
pub mod score;
pub mod validate;

use serde_json::Value;

pub use report::{Grade, ReportCard, render_human};
pub use validate::{Student, validate_student};

/// Computes the full report card for one student record.
///
/// Returns `None` for any invalid input: a non-object record, a missing or
/// empty name, a missing or empty marks mapping, or any mark that is not a
/// number in 0..=100. No partial result is produced.
pub fn generate_report_card(student: &Value) -> Option<ReportCard> {
    let student = validate::validate_student(student)?;
    let scan = scan_marks(&student.marks);

    let subject_count = student.marks.len();
    let percentage = score::percentage_for(scan.total_marks, subject_count);
    let grade = score::grade_for_percentage(percentage);

    Some(ReportCard {
        name: student.name.to_string(),
        total_marks: scan.total_marks,
        percentage,
        grade,
        highest_subject: scan.highest_subject.to_string(),
        lowest_subject: scan.lowest_subject.to_string(),
        passed_subjects: scan.passed_subjects,
        failed_subjects: scan.failed_subjects,
        subject_count,
    })
}

/// Parses a JSON document and computes its report card. Malformed JSON maps
/// to the same invalid sentinel as a malformed record.
pub fn report_card_from_json(input: &str) -> Option<ReportCard> {
    let value: Value = serde_json::from_str(input).ok()?;
    generate_report_card(&value)
}

struct MarksScan<'a> {
    total_marks: f64,
    highest_subject: &'a str,
    lowest_subject: &'a str,
    passed_subjects: Vec<String>,
    failed_subjects: Vec<String>,
}

// Single pass in mapping order. The running maximum seeds at zero, the
// running minimum from the first entry; the equality re-check after both
// update branches hands tied extremes to the latest subject.
fn scan_marks<'a>(marks: &[(&'a str, f64)]) -> MarksScan<'a> {
    debug_assert!(!marks.is_empty());

    let mut scan = MarksScan {
        total_marks: 0.0,
        highest_subject: "",
        lowest_subject: "",
        passed_subjects: Vec::new(),
        failed_subjects: Vec::new(),
    };

    let mut highest_marks = 0.0_f64;
    let mut lowest_marks = marks[0].1;

    for &(subject, marks_value) in marks {
        scan.total_marks += marks_value;

        if marks_value > highest_marks {
            highest_marks = marks_value;
        }
        if lowest_marks > marks_value {
            lowest_marks = marks_value;
        }
        if highest_marks == marks_value {
            scan.highest_subject = subject;
        }
        if lowest_marks == marks_value {
            scan.lowest_subject = subject;
        }

        if marks_value >= score::PASS_MARK {
            scan.passed_subjects.push(subject.to_string());
        } else {
            scan.failed_subjects.push(subject.to_string());
        }
    }

    scan
}
