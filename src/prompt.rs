// src/prompt.rs
// Renders the instruction prompt sent to the completion service.

use crate::strategy::Strategy;

/// System instruction accompanying every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a professional text editor specializing in \
paragraph structuring and text formatting for English texts.";

/// Builds the full user prompt for one division request. The input text is
/// embedded verbatim, with no truncation or escaping. The model is expected to
/// treat it as data; no prompt-injection defenses are attempted.
pub fn build_prompt(text: &str, strategy: &Strategy) -> String {
    let mut rules = String::new();
    for (i, rule) in strategy.rules.iter().enumerate() {
        rules.push_str(&format!("{}. {}\n", i + 1, rule));
    }

    format!(
        "You are a professional text editor expert. Your task is to split a long paragraph \
into smaller, meaningful paragraphs that maintain logical flow and coherence.\n\
\n\
Division Strategy: {}\n\
\n\
Detailed Rules:\n\
{}\
\n\
General Principles:\n\
- Preserve the original meaning and flow of thought in the text\n\
- Use natural break points (topic changes, time transitions, viewpoints)\n\
- Keep the text in its original language\n\
- Don't add any content or commentary\n\
- Only return the text divided with appropriate paragraph breaks\n\
- Use double line breaks (\\n\\n) to separate paragraphs\n\
\n\
Text to split:\n\
{}\n\
\n\
Please return the text divided into well-structured paragraphs:",
        strategy.description, rules, text
    )
}
