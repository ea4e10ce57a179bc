//! JSON output formatting

use serde_json::{json, Value};

use crate::lessons::{LessonInfo, LessonReport};

pub fn format_json(report: &LessonReport) -> String {
    let data = serde_json::to_value(report).unwrap_or(json!(null));
    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_json_all(reports: &[LessonReport]) -> String {
    let items: Vec<Value> = reports
        .iter()
        .map(|r| serde_json::to_value(r).unwrap_or(json!(null)))
        .collect();
    serde_json::to_string_pretty(&json!({ "lessons": items }))
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn format_json_catalog(entries: &[LessonInfo]) -> String {
    serde_json::to_string_pretty(&json!({ "lessons": entries }))
        .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_tagged_by_kind() {
        let mut report = LessonReport::new("combining", "Combining");
        report.show("3 in c", true);
        report.text("done");

        let parsed: Value = serde_json::from_str(&format_json(&report)).unwrap();
        assert_eq!(parsed["name"], "combining");
        assert_eq!(parsed["steps"][0]["kind"], "value");
        assert_eq!(parsed["steps"][0]["value"], "true");
        assert_eq!(parsed["steps"][1]["kind"], "text");
    }

    #[test]
    fn test_catalog_is_an_array_of_entries() {
        let parsed: Value =
            serde_json::from_str(&format_json_catalog(&crate::lessons::catalog())).unwrap();
        assert_eq!(parsed["lessons"][0]["name"], "construction");
        assert_eq!(parsed["lessons"][12]["interactive"], true);
    }

    #[test]
    fn test_batch_wraps_lessons() {
        let reports = vec![LessonReport::new("a", "A"), LessonReport::new("b", "B")];
        let parsed: Value = serde_json::from_str(&format_json_all(&reports)).unwrap();
        assert_eq!(parsed["lessons"].as_array().map(Vec::len), Some(2));
    }
}
