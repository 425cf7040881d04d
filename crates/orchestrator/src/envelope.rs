//! Structured-reply contract between the orchestrator and its clients.
//!
//! Replies are requested as three labeled sections (explanation, code,
//! resources). The responder is only *asked* to follow that layout, so the
//! parser here treats the reply as untrusted free-form text: parsing is
//! total and malformed input degrades to partial or empty fields.

use serde::{Deserialize, Serialize};

/// Separator token the instruction template uses around the reply body.
const SEPARATOR: &str = "---";

/// Marker that opens the code section.
const CODE_MARKER: &str = "Code:";

/// Marker that opens the resources section.
const RESOURCES_MARKER: &str = "Resources:";

/// The parsed, structured result of one responder invocation.
///
/// All three fields are always present; a section the reply did not contain
/// parses to an empty string or an empty list, never to an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyEnvelope {
    /// Explanation text, with separator tokens removed.
    pub explanation: String,
    /// Contents of the first fenced code block, language tag discarded.
    pub code: String,
    /// Linked resources listed under the resources section.
    pub resources: Vec<Resource>,
}

/// A single linked resource from the resources section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Link title.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// Parse a raw responder reply into a [`ReplyEnvelope`].
///
/// Section layout:
/// - `explanation` is everything before the first `Code:` marker line, with
///   literal `---` separators removed and whitespace trimmed. When no
///   `Code:` marker exists the entire reply is explanation.
/// - `code` is the body of the first fenced block after the `Code:` marker.
///   An unterminated fence runs to the end of the reply.
/// - `resources` are `- [title](url)` list items after the `Resources:`
///   marker; lines that do not match the link pattern are dropped.
pub fn parse_reply(raw: &str) -> ReplyEnvelope {
    let lines: Vec<&str> = raw.lines().collect();

    let code_marker = lines
        .iter()
        .position(|line| line.trim_start().starts_with(CODE_MARKER));

    let Some(code_line) = code_marker else {
        return ReplyEnvelope {
            explanation: clean_explanation(&lines),
            ..Default::default()
        };
    };

    let explanation = clean_explanation(&lines[..code_line]);

    let mut code = String::new();
    // Where to resume scanning for the resources section
    let mut rest_start = code_line + 1;

    let open_fence = lines[rest_start..]
        .iter()
        .position(|line| line.trim_start().starts_with("```"));

    if let Some(rel) = open_fence {
        let open_line = rest_start + rel;
        let close_fence = lines[open_line + 1..]
            .iter()
            .position(|line| line.trim_start().starts_with("```"));

        match close_fence {
            Some(rel) => {
                let close_line = open_line + 1 + rel;
                code = lines[open_line + 1..close_line].join("\n");
                rest_start = close_line + 1;
            }
            None => {
                // Unterminated fence: everything that follows is code
                code = lines[open_line + 1..].join("\n");
                rest_start = lines.len();
            }
        }
    }

    let resources = parse_resources(&lines[rest_start.min(lines.len())..]);

    ReplyEnvelope {
        explanation,
        code,
        resources,
    }
}

/// Join explanation lines, removing separator tokens and trimming.
fn clean_explanation(lines: &[&str]) -> String {
    lines
        .join("\n")
        .replace(SEPARATOR, "")
        .trim()
        .to_string()
}

/// Collect `- [title](url)` items after the `Resources:` marker.
fn parse_resources(lines: &[&str]) -> Vec<Resource> {
    let Some(marker) = lines
        .iter()
        .position(|line| line.trim_start().starts_with(RESOURCES_MARKER))
    else {
        return Vec::new();
    };

    lines[marker + 1..]
        .iter()
        .filter_map(|line| parse_resource_line(line))
        .collect()
}

/// Parse one `- [title](url)` list item, or None if it doesn't match.
fn parse_resource_line(line: &str) -> Option<Resource> {
    let item = line.trim().strip_prefix('-')?.trim();
    let rest = item.strip_prefix('[')?;
    let (title, rest) = rest.split_once("](")?;
    let (url, _) = rest.split_once(')')?;

    if title.is_empty() || url.is_empty() {
        return None;
    }

    Some(Resource {
        title: title.to_string(),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_reply() {
        let raw = "Explanation:\n- a\n- b\nCode:\n```js\nconsole.log(1)\n```\nResources:\n- [Doc](http://x)\n";
        let envelope = parse_reply(raw);

        assert!(envelope.explanation.contains("- a"));
        assert!(envelope.explanation.contains("- b"));
        assert_eq!(envelope.code, "console.log(1)");
        assert_eq!(
            envelope.resources,
            vec![Resource {
                title: "Doc".to_string(),
                url: "http://x".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let envelope = parse_reply("");
        assert_eq!(envelope.explanation, "");
        assert_eq!(envelope.code, "");
        assert!(envelope.resources.is_empty());
    }

    #[test]
    fn test_parse_without_code_marker() {
        let raw = "Just a plain answer with no sections at all.";
        let envelope = parse_reply(raw);

        assert_eq!(envelope.explanation, raw);
        assert_eq!(envelope.code, "");
        assert!(envelope.resources.is_empty());
    }

    #[test]
    fn test_separators_stripped_from_explanation() {
        let raw = "---\nExplanation:\n- point\n---\nCode:\n```rust\nfn main() {}\n```\n";
        let envelope = parse_reply(raw);

        assert!(!envelope.explanation.contains("---"));
        assert!(envelope.explanation.contains("- point"));
        assert_eq!(envelope.code, "fn main() {}");
    }

    #[test]
    fn test_separators_stripped_without_code_marker() {
        let envelope = parse_reply("--- here --- and ---there");
        assert!(!envelope.explanation.contains("---"));
    }

    #[test]
    fn test_language_tag_discarded() {
        let raw = "Code:\n```python\nprint(1)\n```\n";
        let envelope = parse_reply(raw);
        assert_eq!(envelope.code, "print(1)");
    }

    #[test]
    fn test_multiline_code_block() {
        let raw = "Code:\n```rust\nfn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n```\n";
        let envelope = parse_reply(raw);
        assert_eq!(envelope.code, "fn add(a: i32, b: i32) -> i32 {\n    a + b\n}");
    }

    #[test]
    fn test_unterminated_fence_runs_to_end() {
        let raw = "Explanation:\n- a\nCode:\n```js\nconsole.log(1)\nconsole.log(2)";
        let envelope = parse_reply(raw);

        assert_eq!(envelope.code, "console.log(1)\nconsole.log(2)");
        assert!(envelope.resources.is_empty());
    }

    #[test]
    fn test_code_marker_without_fence() {
        let raw = "Explanation:\n- a\nCode:\nno fence here\nResources:\n- [Doc](http://x)";
        let envelope = parse_reply(raw);

        assert_eq!(envelope.code, "");
        assert_eq!(envelope.resources.len(), 1);
    }

    #[test]
    fn test_only_first_code_block_taken() {
        let raw = "Code:\n```js\nfirst()\n```\n```js\nsecond()\n```\n";
        let envelope = parse_reply(raw);
        assert_eq!(envelope.code, "first()");
    }

    #[test]
    fn test_malformed_resource_lines_dropped() {
        let raw = "Code:\n```\nx\n```\nResources:\n- [Good](http://good)\n- not a link\n- [no url]\nplain text\n- [Also Good](http://also)\n";
        let envelope = parse_reply(raw);

        assert_eq!(envelope.resources.len(), 2);
        assert_eq!(envelope.resources[0].title, "Good");
        assert_eq!(envelope.resources[1].url, "http://also");
    }

    #[test]
    fn test_resources_require_marker() {
        let raw = "Code:\n```\nx\n```\n- [Orphan](http://x)\n";
        let envelope = parse_reply(raw);
        assert!(envelope.resources.is_empty());
    }

    #[test]
    fn test_parse_is_total_on_garbage() {
        // None of these may panic, whatever the shape
        for raw in [
            "```",
            "Code:",
            "Code:\n```",
            "Resources:",
            "- [](http://x)",
            "][)(",
            "Code:\n```\n```\nResources:\n-",
        ] {
            let envelope = parse_reply(raw);
            assert!(!envelope.explanation.contains("---"));
        }
    }

    #[test]
    fn test_envelope_wire_shape() {
        let envelope = ReplyEnvelope {
            explanation: "why".to_string(),
            code: "let x = 1;".to_string(),
            resources: vec![Resource {
                title: "Doc".to_string(),
                url: "http://x".to_string(),
            }],
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["explanation"], "why");
        assert_eq!(json["code"], "let x = 1;");
        assert_eq!(json["resources"][0]["title"], "Doc");
        assert_eq!(json["resources"][0]["url"], "http://x");
    }
}
