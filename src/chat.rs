//! Conversation client seam and reply post-processing.
//!
//! The library never talks to a model service itself. A host supplies a
//! [`ChatClient`]; one query yields a lazy, finite, non-restartable
//! sequence of text chunks which the caller drains once.

use crate::error::Result;
use serde_json::Value;

/// A finite stream of reply chunks for one query.
pub type ChunkStream = Box<dyn Iterator<Item = Result<String>> + Send>;

/// A request/response conversation service.
///
/// Implementations wrap whatever transport the host uses. The stream for
/// one call must be drained before the next call.
pub trait ChatClient {
    /// Send a query and return its reply chunks.
    fn stream(&mut self, query: &str) -> Result<ChunkStream>;
}

/// Drain a chunk stream into the final reply text.
///
/// Chunks are concatenated first and [`normalize_reply`] is applied to the
/// whole; per-chunk normalization would split JSON objects that happen to
/// straddle a chunk boundary.
pub fn collect_reply(stream: ChunkStream) -> Result<String> {
    let mut reply = String::new();
    for chunk in stream {
        reply.push_str(&chunk?);
    }
    Ok(normalize_reply(&reply))
}

/// Rewrite an embedded JSON object into `**key:** value` bullet lines.
///
/// Models occasionally ignore formatting instructions and emit a JSON
/// object; this flattens it back into the required bullet format. Text
/// around the object is preserved, and anything that does not parse as a
/// JSON object passes through unchanged.
pub fn normalize_reply(reply: &str) -> String {
    let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) else {
        return reply.to_string();
    };
    if end <= start {
        return reply.to_string();
    }

    let candidate = &reply[start..=end];
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(candidate) else {
        return reply.to_string();
    };

    let bullets = map
        .iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("**{key}:** {rendered}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}{}", &reply[..start], bullets, &reply[end + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Chunked canned replies for tests.
    struct ScriptedClient {
        chunks: Vec<String>,
    }

    impl ChatClient for ScriptedClient {
        fn stream(&mut self, _query: &str) -> Result<ChunkStream> {
            let chunks = std::mem::take(&mut self.chunks);
            Ok(Box::new(chunks.into_iter().map(Ok)))
        }
    }

    #[test]
    fn test_collect_reply_concatenates() {
        let mut client = ScriptedClient {
            chunks: vec!["Glucose ".to_string(), "needs plasma.".to_string()],
        };
        let stream = client.stream("q").unwrap();
        assert_eq!(collect_reply(stream).unwrap(), "Glucose needs plasma.");
    }

    #[test]
    fn test_json_straddling_chunks_normalized() {
        let mut client = ScriptedClient {
            chunks: vec![
                r#"{"Test Name": "#.to_string(),
                r#""Glucose"}"#.to_string(),
            ],
        };
        let stream = client.stream("q").unwrap();
        assert_eq!(
            collect_reply(stream).unwrap(),
            "**Test Name:** Glucose"
        );
    }

    #[test]
    fn test_normalize_reply_plain_text_unchanged() {
        assert_eq!(normalize_reply("No braces here."), "No braces here.");
        assert_eq!(normalize_reply("odd } brace {"), "odd } brace {");
    }

    #[test]
    fn test_normalize_reply_preserves_surrounding_text() {
        let reply = r#"Details: {"Specimen": "Plasma", "Volume": 2} as requested."#;
        assert_eq!(
            normalize_reply(reply),
            "Details: **Specimen:** Plasma\n**Volume:** 2 as requested."
        );
    }

    #[test]
    fn test_normalize_reply_invalid_json_unchanged() {
        let reply = "set {a, b} of values";
        assert_eq!(normalize_reply(reply), reply);
    }
}
