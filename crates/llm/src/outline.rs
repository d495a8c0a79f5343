use outliner_core::OutlineContent;

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;

/// Instruction sent for every question. The model is asked for JSON, but the
/// reply is split into lines rather than parsed, see [`parse_outline`].
#[must_use]
pub fn build_outline_prompt(question: &str) -> String {
    format!(
        r#"I need a well-structured outline for the following question: "{question}"
Format the response as a JSON object with:
{{
  "thesis": "Your thesis statement here",
  "points": ["Main point 1", "Main point 2", "Main point 3"]
}}

Only return valid JSON."#
    )
}

/// Split a model reply into thesis and points.
///
/// Lines that are empty after trimming are dropped. The first surviving line
/// becomes the thesis and the rest become points, all kept verbatim. Nothing
/// here parses JSON: a pretty-printed JSON reply yields `{` as the thesis and
/// one point per remaining line.
#[must_use]
pub fn parse_outline(reply: &str) -> OutlineContent {
    let mut lines = reply.split('\n').filter(|line| !line.trim().is_empty());
    let thesis = lines.next().unwrap_or_default().to_owned();
    let points = lines.map(str::to_owned).collect();
    OutlineContent { thesis, points }
}

impl LlmClient {
    /// Ask the model for an outline of `question` and split the reply.
    ///
    /// The returned content may be incomplete; callers decide whether an
    /// empty thesis or point list is acceptable.
    pub async fn generate_outline(&self, question: &str) -> Result<OutlineContent, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::user(build_outline_prompt(question))],
        };
        let reply = self.chat_completion(&request).await?;
        tracing::debug!(reply_len = reply.len(), "outline reply received");
        Ok(parse_outline(&reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_parse_drops_blank_lines_and_keeps_order() {
        let parsed = parse_outline("Thesis line\nPoint A\nPoint B\n\nPoint C");
        assert_eq!(parsed.thesis, "Thesis line");
        assert_eq!(parsed.points, strings(&["Point A", "Point B", "Point C"]));
    }

    #[test]
    fn test_parse_only_blank_lines() {
        let parsed = parse_outline("\n   \n\t\n");
        assert_eq!(parsed.thesis, "");
        assert!(parsed.points.is_empty());
        assert!(!parsed.is_complete());
    }

    #[test]
    fn test_parse_empty_reply() {
        assert_eq!(parse_outline(""), OutlineContent::default());
    }

    #[test]
    fn test_parse_keeps_lines_verbatim() {
        let parsed = parse_outline("  Indented thesis  \n - point one\n");
        assert_eq!(parsed.thesis, "  Indented thesis  ");
        assert_eq!(parsed.points, strings(&[" - point one"]));
    }

    #[test]
    fn test_parse_thesis_only_has_no_points() {
        let parsed = parse_outline("Just a thesis\n\n");
        assert_eq!(parsed.thesis, "Just a thesis");
        assert!(parsed.points.is_empty());
    }

    #[test]
    fn test_parse_pretty_printed_json_is_split_by_line() {
        let reply = "{\n  \"thesis\": \"T\",\n  \"points\": [\"a\", \"b\"]\n}";
        let parsed = parse_outline(reply);
        assert_eq!(parsed.thesis, "{");
        assert_eq!(
            parsed.points,
            strings(&["  \"thesis\": \"T\",", "  \"points\": [\"a\", \"b\"]", "}"])
        );
    }

    #[test]
    fn test_parse_single_line_json_becomes_thesis() {
        let reply = r#"{"thesis": "T", "points": ["a"]}"#;
        let parsed = parse_outline(reply);
        assert_eq!(parsed.thesis, reply);
        assert!(parsed.points.is_empty());
    }

    #[test]
    fn test_parse_keeps_carriage_returns() {
        let parsed = parse_outline("Thesis\r\nPoint\r\n");
        assert_eq!(parsed.thesis, "Thesis\r");
        assert_eq!(parsed.points, strings(&["Point\r"]));
    }

    #[test]
    fn test_prompt_embeds_question_verbatim() {
        let prompt = build_outline_prompt("Should the \"Fed\" cut rates?");
        assert!(prompt.contains(r#"question: "Should the "Fed" cut rates?""#));
        assert!(prompt.ends_with("Only return valid JSON."));
        assert!(prompt.contains(r#""points": ["Main point 1", "Main point 2", "Main point 3"]"#));
    }
}
