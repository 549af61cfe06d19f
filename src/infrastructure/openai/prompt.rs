//! Prompt assembly for enhancement requests.
//!
//! The instruction text stays opaque; this module only wraps it in the fixed
//! framing the backend expects: a system prompt, a base preamble that gets
//! stricter for non-English drafts, the instruction, and the quoted draft.
use crate::services::language::is_non_english;

/// System prompt sent with every enhancement request
pub const SYSTEM_PROMPT: &str = "You are a LinkedIn post enhancement expert specializing in professional social media content optimization. Always respond in the exact same language as the input text. Never translate or change the language of the content. You may freely change tone, style, professionalism, and other aspects as requested by the enhancement instructions. Focus on creating content that performs well on LinkedIn's professional networking platform.";

const BASE_INSTRUCTIONS_NON_ENGLISH: &str = "You are a LinkedIn post enhancement expert specializing in optimizing professional social media content for maximum engagement and impact.

CRITICAL INSTRUCTION: The input text is written in a non-English language. You MUST respond in the EXACT SAME LANGUAGE as the input text. Do NOT translate or change the language of the response in any way.
CRITICAL INSTRUCTION: Never use dash (\u{2013}) in your response. Instead split the sentence or use a comma.

Your task is to enhance the given LinkedIn post while:
1. PRESERVING the original language completely
2. Maintaining professional LinkedIn standards and best practices
3. Applying the specific enhancement instructions below (which may change tone, style, professionalism, etc.)

Enhancement instructions:

";

const BASE_INSTRUCTIONS_DEFAULT: &str = "You are a LinkedIn post enhancement expert specializing in optimizing professional social media content for maximum engagement and impact.

Your task is to enhance the given LinkedIn post according to the specific instructions below. You may change tone, style, professionalism, and other aspects as requested while maintaining LinkedIn's professional standards.

Enhancement instructions:

";

/// Base preamble selected by the language heuristic
pub fn base_instructions(document: &str) -> &'static str {
    if is_non_english(document) {
        BASE_INSTRUCTIONS_NON_ENGLISH
    } else {
        BASE_INSTRUCTIONS_DEFAULT
    }
}

/// Full user-role prompt for one enhancement request
pub fn build_user_prompt(document: &str, instruction: &str) -> String {
    format!(
        "{}{}\n\nIMPORTANT: Respond in the same language as the input text below. Apply the enhancement while preserving the original language.\n\nOriginal post:\n\"{}\"\n\nEnhanced post:",
        base_instructions(document),
        instruction,
        document
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_draft_gets_default_preamble() {
        let prompt = build_user_prompt("Shipping a new feature today!", "Add appropriate emojis.");
        assert!(prompt.starts_with(BASE_INSTRUCTIONS_DEFAULT));
        assert!(prompt.contains("Add appropriate emojis."));
        assert!(prompt.contains("\"Shipping a new feature today!\""));
        assert!(prompt.ends_with("Enhanced post:"));
    }

    #[test]
    fn test_non_english_draft_gets_strict_preamble() {
        let document = "Bugün çok güzel bir gün, yeni işimi duyurmaktan mutluluk duyuyorum!";
        let prompt = build_user_prompt(document, "Fix grammar.");
        assert!(prompt.starts_with(BASE_INSTRUCTIONS_NON_ENGLISH));
    }
}
