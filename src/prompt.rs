/// Instruction sent to the model with every image.
///
/// This natural-language contract is the only schema enforcement on the
/// wire; the parser still treats the response as untrusted.
const INSTRUCTION: &str = r#"Return ONLY valid JSON (no markdown) with this exact shape:

{
  "objects": [
    {
      "label": "string",
      "description": "string",
      "confidence": 0.0,
      "box": {"x": 0.0, "y": 0.0, "w": 0.0, "h": 0.0}
    }
  ],
  "warnings": ["string"]
}

Rules:
- box coordinates are normalized to [0,1] relative to image width/height.
- x,y are top-left; w,h are width/height.
- Include 8-25 objects max.
- Be specific about each item, to build a detailed inventory of the visible items.
- If unsure, omit the object or add a warning."#;

/// The constant object-detection instruction.
pub fn build_instruction() -> &'static str {
    INSTRUCTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_names_both_top_level_keys() {
        let text = build_instruction();
        assert!(text.contains("\"objects\""));
        assert!(text.contains("\"warnings\""));
    }

    #[test]
    fn instruction_pins_box_schema_and_bounds() {
        let text = build_instruction();
        assert!(text.contains(r#""box": {"x": 0.0, "y": 0.0, "w": 0.0, "h": 0.0}"#));
        assert!(text.contains("normalized to [0,1]"));
        assert!(text.contains("8-25 objects"));
    }

    #[test]
    fn instruction_is_stable() {
        assert_eq!(build_instruction(), build_instruction());
    }
}
