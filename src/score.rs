use crate::report::Grade;

/// Marks at or above this count a subject as passed.
pub const PASS_MARK: f64 = 40.0;

/// Every subject is marked out of this.
pub const FULL_MARKS_PER_SUBJECT: f64 = 100.0;

/// Converts a rounded percentage (0–100) into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A+    |
/// | >= 80   | A     |
/// | >= 70   | B     |
/// | >= 60   | C     |
/// | >= 40   | D     |
/// | < 40    | F     |
pub fn grade_for_percentage(percentage: f64) -> Grade {
    match percentage {
        p if p >= 90.0 => Grade::APlus,
        p if p >= 80.0 => Grade::A,
        p if p >= 70.0 => Grade::B,
        p if p >= 60.0 => Grade::C,
        p if p >= 40.0 => Grade::D,
        _ => Grade::F,
    }
}

pub fn percentage_for(total_marks: f64, subject_count: usize) -> f64 {
    let raw = (total_marks / (subject_count as f64 * FULL_MARKS_PER_SUBJECT)) * 100.0;
    round_two_places(raw)
}

/// Two-decimal fixed-point rounding, ties away from zero.
fn round_two_places(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
