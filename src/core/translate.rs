//! Translation logic - turns Korean LLM instructions into English prompts.
//!
//! The input is wrapped in a fixed prompt-engineering template and sent to the
//! configured [`TextGenerator`] exactly once.

use crate::{
    errors::{Error, Result},
    providers::TextGenerator,
};
use tracing::{debug, instrument};

const PROMPT_HEADER: &str = "You are a professional prompt engineer and expert translator. \
Your task is to translate Korean LLM instructions into high-quality English prompts.

### Translation Guidelines:
1. **Model Neutrality**: Use terminology that works universally across Claude, GPT, and Gemini.
2. **Precision & Imperative**: Use strong, action-oriented verbs (e.g., \"Analyze\", \"Synthesize\", \"Construct\") instead of passive phrasing.
3. **Context Preservation**: Ensure technical nuances (especially in software or logic) are perfectly preserved.
4. **Prompt Optimization**: Structure the English output to be concise and instruction-heavy, which reduces token usage and improves LLM adherence.

### Constraints:
- Provide ONLY the translated English text.
- No conversational filler, no explanations, no preamble.
- Maintain the original markdown formatting if present.

---
**Korean Text to Translate:**
";

const PROMPT_FOOTER: &str = "\n\n**English Translation:**";

/// Returns the input if it contains anything besides whitespace.
pub fn validate_input(korean_text: Option<&str>) -> Result<&str> {
    korean_text
        .filter(|text| !text.trim().is_empty())
        .ok_or(Error::EmptyInput)
}

/// Embeds `korean_text` into the translation instruction template.
#[must_use]
pub fn build_prompt(korean_text: &str) -> String {
    let mut prompt =
        String::with_capacity(PROMPT_HEADER.len() + korean_text.len() + PROMPT_FOOTER.len());
    prompt.push_str(PROMPT_HEADER);
    prompt.push_str(korean_text);
    prompt.push_str(PROMPT_FOOTER);
    prompt
}

/// Translates Korean text to English with a single generator call.
///
/// Blank input is rejected before the generator is contacted. The result is
/// trimmed and must not be empty.
#[instrument(skip_all, fields(input_len = korean_text.map_or(0, str::len)))]
pub async fn translate(generator: &dyn TextGenerator, korean_text: Option<&str>) -> Result<String> {
    let korean_text = validate_input(korean_text)?;
    let prompt = build_prompt(korean_text);

    let english_text = generator.generate(&prompt).await?.trim().to_string();
    if english_text.is_empty() {
        return Err(Error::EmptyCandidate);
    }

    debug!(output_len = english_text.len(), "Translation complete");
    Ok(english_text)
}
