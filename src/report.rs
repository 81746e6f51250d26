//! Plain-text rendering of a validated analysis.

use crate::types::{AnalysisResult, DetectedObject};
use std::cmp::Ordering;
use std::fmt::Write;

/// Render the object inventory as a human-readable report.
///
/// Warnings come first, then objects sorted by confidence descending.
/// The sort is stable: equal confidences keep the model's order, and a
/// NaN confidence compares as equal rather than panicking.
pub fn format_report(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if !result.warnings.is_empty() {
        out.push_str("Warnings:\n");
        for warning in &result.warnings {
            let _ = writeln!(out, "- {}", warning);
        }
        out.push('\n');
    }

    if result.objects.is_empty() {
        out.push_str("No objects returned.\n");
        return out;
    }

    let mut objects: Vec<&DetectedObject> = result.objects.iter().collect();
    objects.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    let _ = writeln!(out, "Detected {} objects:", objects.len());
    for o in objects {
        let _ = writeln!(
            out,
            "- {:<20} {:<50} conf={:.2}  box=[x={:.3}, y={:.3}, w={:.3}, h={:.3}]",
            o.label, o.description, o.confidence, o.x, o.y, o.w, o.h
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(label: &str, confidence: f64) -> DetectedObject {
        DetectedObject {
            label: label.to_string(),
            description: format!("a {}", label),
            confidence,
            x: 0.1,
            y: 0.2,
            w: 0.3,
            h: 0.4,
        }
    }

    #[test]
    fn empty_result_reports_no_objects() {
        let report = format_report(&AnalysisResult::default());
        assert_eq!(report, "No objects returned.\n");
    }

    #[test]
    fn warnings_block_precedes_object_section() {
        let result = AnalysisResult {
            objects: vec![obj("cup", 0.9)],
            warnings: vec!["low light".to_string(), "partial occlusion".to_string()],
        };
        let report = format_report(&result);
        let warnings_end = report.find("\n\n").expect("blank line after warnings");
        let header = &report[..warnings_end];
        assert!(header.starts_with("Warnings:\n- low light\n- partial occlusion"));
        assert!(report[warnings_end..].contains("Detected 1 objects:"));
    }

    #[test]
    fn warnings_with_no_objects() {
        let result = AnalysisResult {
            objects: vec![],
            warnings: vec!["could not distinguish mug from cup".to_string()],
        };
        let report = format_report(&result);
        assert!(report.starts_with("Warnings:\n"));
        assert!(report.ends_with("No objects returned.\n"));
    }

    #[test]
    fn one_line_per_object_plus_count() {
        let result = AnalysisResult {
            objects: vec![obj("a", 0.3), obj("b", 0.2), obj("c", 0.1)],
            warnings: vec![],
        };
        let report = format_report(&result);
        assert!(report.starts_with("Detected 3 objects:\n"));
        assert_eq!(report.lines().count(), 4);
    }

    #[test]
    fn objects_sorted_by_confidence_descending() {
        let result = AnalysisResult {
            objects: vec![obj("low", 0.15), obj("high", 0.95), obj("mid", 0.5)],
            warnings: vec![],
        };
        let report = format_report(&result);
        let high = report.find("high").unwrap();
        let mid = report.find("mid").unwrap();
        let low = report.find("low").unwrap();
        assert!(high < mid && mid < low);
    }

    #[test]
    fn equal_confidences_keep_original_order() {
        let result = AnalysisResult {
            objects: vec![obj("first", 0.5), obj("second", 0.5), obj("third", 0.5)],
            warnings: vec![],
        };
        let report = format_report(&result);
        let first = report.find("first").unwrap();
        let second = report.find("second").unwrap();
        let third = report.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn confidence_and_box_precision() {
        let result = AnalysisResult {
            objects: vec![DetectedObject {
                label: "cup".to_string(),
                description: "white ceramic mug".to_string(),
                confidence: 0.92,
                x: 0.1,
                y: 0.2,
                w: 0.1,
                h: 0.15,
            }],
            warnings: vec![],
        };
        let report = format_report(&result);
        assert!(report.contains("conf=0.92"));
        assert!(report.contains("box=[x=0.100, y=0.200, w=0.100, h=0.150]"));
    }

    #[test]
    fn nan_confidence_does_not_panic() {
        let result = AnalysisResult {
            objects: vec![obj("a", f64::NAN), obj("b", 0.5)],
            warnings: vec![],
        };
        let report = format_report(&result);
        assert!(report.contains("Detected 2 objects:"));
    }
}
