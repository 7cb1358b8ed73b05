//! Prompt construction over structured documents.
//!
//! Builds the ISO 15189-flavoured assistant system prompt, plus the
//! per-query envelope. Query classification is a
//! plain keyword match; it feeds the envelope so the model knows what kind
//! of answer is expected.

use crate::model::StructuredDocument;
use crate::render::{MarkdownRenderer, RenderOptions};
use serde::{Deserialize, Serialize};

const TEST_KEYWORDS: &[&str] = &["test", "assay", "panel", "profile", "reference"];
const PROCEDURE_KEYWORDS: &[&str] = &["procedure", "step", "guide", "handle", "process"];
const INTERPRETATION_KEYWORDS: &[&str] = &["interpret", "result", "significance", "means"];

/// Broad classification of a user query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryKind {
    /// Asking for test parameters (specimen, container, ranges, ...)
    TestParameters,
    /// Asking how to carry out a procedure
    Procedure,
    /// Asking what a result means
    Interpretation,
    /// Anything else
    General,
}

impl QueryKind {
    /// Classify a query by keyword lists, first match wins.
    pub fn classify(query: &str) -> Self {
        let query = query.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| query.contains(k));

        if contains_any(TEST_KEYWORDS) {
            QueryKind::TestParameters
        } else if contains_any(PROCEDURE_KEYWORDS) {
            QueryKind::Procedure
        } else if contains_any(INTERPRETATION_KEYWORDS) {
            QueryKind::Interpretation
        } else {
            QueryKind::General
        }
    }

    /// Stable label used in the query envelope.
    pub fn label(&self) -> &'static str {
        match self {
            QueryKind::TestParameters => "TEST_PARAMETERS",
            QueryKind::Procedure => "PROCEDURE",
            QueryKind::Interpretation => "INTERPRETATION",
            QueryKind::General => "GENERAL",
        }
    }
}

/// Builds system prompts from structured department documents.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    render: RenderOptions,
}

impl PromptBuilder {
    /// Create a prompt builder with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render options used for embedded context.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Build the system prompt for one department document.
    pub fn system_prompt(&self, department: &str, doc: &StructuredDocument) -> String {
        let renderer = MarkdownRenderer::new(self.render.clone());
        let tables_md = renderer.render_tables(doc);

        format!(
            r#"# {department} Assistant

## Response Requirements (ISO 15189 §7.11)
Always provide test details using the format below, dynamically adjusting based on available fields and test-specific context.

**Must format your response in bulleted points as follows:**

**Test Name**: {{"test_name"}}
**Specimen**: {{"sample_type"}}
**Container**: {{"container_color"}}
**Minimum Volume**: {{"volume"}}
**Method**: {{"methodology"}}
**Reference Range**: {{"reference_values"}}
**Turnaround Time**: {{"turnaround_time"}}
**Special Notes**: {{"critical_info"}}

*Only include fields present in the relevant table.*

---

## Dynamic Behavior Guidelines you must follow

- If a test appears in multiple forms (e.g., **Glucose** on CSF, plasma, urine), ask:
  "Which sample type are you referring to (e.g., plasma, urine, CSF)?"

- If a test includes subtypes (e.g., **Random Plasma Glucose**, **Fasting Plasma Glucose**), ask:
  "Do you mean fasting, random, or 2-hr post-load plasma glucose?"

- If reference, normal ranges or values vary by **age or gender**, ask:
  "Can you provide the patient's age and gender for accurate interpretation?"

---

## Department Reference Tables
{tables_md}

## Prohibited Formats
- JSON objects
- Unstructured text blocks
- Key-value pair lists
- Repeating tests with the same metadata but different reference values
- Terms or information outside of the attached document

## Critical Results Protocol
- **Code A**: Contact Sr Registrar <15 min
- **Code B**: Page clinician <4 hr
- **Code C**: Email GP <24 hr
"#
        )
    }

    /// Build the per-query envelope combining the department, the query
    /// classification, and the question itself.
    pub fn user_query(&self, department: &str, question: &str) -> String {
        let kind = QueryKind::classify(question);
        format!(
            "Department: {department}\nQuery Type: {}\nUser Question: {question}\n\nAnswer using the department reference material in your instructions.",
            kind.label()
        )
    }
}
