use serde_json::Value;

/// Borrowed view of a student record that passed every input check. Marks
/// keep the insertion order of the input mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Student<'a> {
    pub name: &'a str,
    pub marks: Vec<(&'a str, f64)>,
}

/// Vets a raw record and produces the typed view, or `None` on the first
/// failed check. Checks run in order: the value must be an object, `name` a
/// non-empty string, `marks` a non-empty mapping, and every mark a number in
/// 0..=100. The first offending mark rejects the whole record.
pub fn validate_student(value: &Value) -> Option<Student<'_>> {
    let record = value.as_object()?;

    let name = record.get("name")?.as_str()?;
    if name.is_empty() {
        return None;
    }

    let marks = record.get("marks")?.as_object()?;
    if marks.is_empty() {
        return None;
    }

    let mut collected = Vec::with_capacity(marks.len());
    for (subject, raw) in marks {
        let score = raw.as_f64()?;
        if !(0.0..=100.0).contains(&score) {
            return None;
        }
        collected.push((subject.as_str(), score));
    }

    Some(Student {
        name,
        marks: collected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_a_well_formed_record() {
        let value = json!({"name": "Rahul", "marks": {"maths": 85, "science": 92}});
        let student = validate_student(&value).unwrap();
        assert_eq!(student.name, "Rahul");
        assert_eq!(student.marks, vec![("maths", 85.0), ("science", 92.0)]);
    }

    #[test]
    fn rejects_non_record_inputs() {
        assert!(validate_student(&Value::Null).is_none());
        assert!(validate_student(&json!(42)).is_none());
        assert!(validate_student(&json!("Rahul")).is_none());
        assert!(validate_student(&json!(true)).is_none());
        assert!(validate_student(&json!(["Rahul"])).is_none());
    }

    #[test]
    fn rejects_bad_names() {
        assert!(validate_student(&json!({"marks": {"a": 50}})).is_none());
        assert!(validate_student(&json!({"name": "", "marks": {"a": 50}})).is_none());
        assert!(validate_student(&json!({"name": 7, "marks": {"a": 50}})).is_none());
        assert!(validate_student(&json!({"name": null, "marks": {"a": 50}})).is_none());
    }

    #[test]
    fn rejects_bad_marks_containers() {
        assert!(validate_student(&json!({"name": "A"})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": null})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": []})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": {}})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": 90})).is_none());
    }

    #[test]
    fn rejects_out_of_range_or_non_numeric_scores() {
        assert!(validate_student(&json!({"name": "A", "marks": {"a": 101}})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": {"a": -1}})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": {"a": "85"}})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": {"a": true}})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": {"a": null}})).is_none());
        assert!(validate_student(&json!({"name": "A", "marks": {"a": [85]}})).is_none());
    }

    #[test]
    fn first_bad_score_rejects_the_whole_record() {
        let value = json!({"name": "A", "marks": {"bad": 400, "fine": 75}});
        assert!(validate_student(&value).is_none());
    }

    #[test]
    fn boundary_scores_are_valid() {
        let value = json!({"name": "A", "marks": {"low": 0, "high": 100}});
        let student = validate_student(&value).unwrap();
        assert_eq!(student.marks, vec![("low", 0.0), ("high", 100.0)]);
    }
}
