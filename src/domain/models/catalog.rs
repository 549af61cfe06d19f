//! Instruction catalog for the enhancement backend.
//!
//! An `Instruction` is the opaque tuple handed to the orchestrator: the engine
//! never interprets the instruction text, it only forwards it. The built-in
//! lists cover the preset enhancements and the post-shape transformations;
//! custom free-text instructions use the same shape.
use serde::{Deserialize, Serialize};

/// A user-selectable enhancement instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Stable identifier for the catalog entry
    pub id: String,

    /// Display name, also used as the history entry label
    pub label: String,

    /// Instruction text sent to the backend (opaque to the engine)
    pub instruction: String,

    /// Short display marker attached to the resulting history entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Instruction {
    /// Creates a catalog entry
    pub fn preset(
        id: impl Into<String>,
        label: impl Into<String>,
        instruction: impl Into<String>,
        badge: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            instruction: instruction.into(),
            badge: Some(badge.into()),
        }
    }

    /// Wraps ad-hoc free-text input as an instruction.
    ///
    /// Returns `None` for blank input; a custom instruction with nothing in it
    /// has nothing to ask of the backend.
    pub fn custom(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id: "custom".to_string(),
            label: "Custom instruction".to_string(),
            instruction: text.to_string(),
            badge: None,
        })
    }
}

/// The built-in enhancement presets
pub fn builtin_presets() -> Vec<Instruction> {
    vec![
        Instruction::preset(
            "grammar",
            "Fix Grammar",
            "Fix any grammar, spelling, and punctuation errors while keeping the original meaning intact.",
            "✏️",
        ),
        Instruction::preset(
            "emojis",
            "Add Emojis",
            "Add appropriate emojis to make the content more engaging.",
            "😊",
        ),
        Instruction::preset(
            "rhythm",
            "Split to Sections",
            "Add rhythm to the text by splitting it into short sections separated by empty lines.",
            "✂️",
        ),
        Instruction::preset(
            "list",
            "Add List",
            "Create structure with one or more lists.",
            "📋",
        ),
        Instruction::preset(
            "clarity",
            "100% Clarity",
            "Rewrite the text in a 10x more clear and understandable way.",
            "💡",
        ),
        Instruction::preset(
            "engagement",
            "Boost Engagement",
            "Rewrite to maximize engagement by making it more compelling, actionable, and conversation-starting.",
            "🚀",
        ),
        Instruction::preset(
            "professional",
            "More Professional",
            "Rewrite to sound more professional and polished while keeping it authentic and relatable.",
            "👔",
        ),
        Instruction::preset(
            "provocate",
            "Provocate",
            "Subtly provocate readers to engage by writing falsy or bold statement that people have opinion about.",
            "🤯",
        ),
        Instruction::preset(
            "storytelling",
            "Add Storytelling",
            "Transform into a compelling story that engages readers emotionally and creates a narrative arc.",
            "📖",
        ),
        Instruction::preset(
            "casual",
            "More Casual",
            "Rewrite to sound more casual, conversational, and approachable.",
            "😎",
        ),
        Instruction::preset(
            "thought_leader",
            "Thought Leadership",
            "Rewrite to position as thought leadership content with industry insights and forward-thinking perspectives.",
            "🧠",
        ),
        Instruction::preset(
            "actionable",
            "Add Call-to-Action",
            "Add clear, compelling calls-to-action that encourage engagement, comments, or specific actions from readers.",
            "👉",
        ),
    ]
}

/// Post-shape transformations: same contract as presets, they just restructure
/// the draft into a different kind of post.
pub fn post_types() -> Vec<Instruction> {
    vec![
        Instruction::preset(
            "question",
            "Ask a Question",
            "Transform into a short, curiosity-sparking question post. Lead with a single clear question your audience can't resist answering. Keep it direct, conversational, and easy to respond to.",
            "❓",
        ),
        Instruction::preset(
            "poll",
            "Run a Poll",
            "Transform into a poll-style post. Pose a simple question and offer 2-4 concise answer choices that invite quick, opinionated responses. Encourage comments after the vote.",
            "📊",
        ),
        Instruction::preset(
            "thought_leadership",
            "Share a Bold Opinion",
            "Transform into a thought-leadership post that challenges conventional wisdom. Open with a strong statement, back it up with your reasoning or experience, and close by inviting others' perspectives.",
            "🔥",
        ),
        Instruction::preset(
            "listicle",
            "Create a Mini List",
            "Transform into a punchy list of 3-10 items. Each point should be easy to scan, offer immediate value, and feel like a quick resource people will want to save and share.",
            "📋",
        ),
        Instruction::preset(
            "short_one_liner",
            "Drop a One-Liner",
            "Transform into a short, striking one-liner post. Keep it under 2 sentences. Make it witty, insightful, or contrarian, something that hooks instantly while scrolling.",
            "⚡",
        ),
        Instruction::preset(
            "long_form",
            "Write Long-Form",
            "Transform into a long-form text post with a clear structure. Use short paragraphs, strong section breaks, and a narrative flow that rewards readers who keep scrolling.",
            "📝",
        ),
        Instruction::preset(
            "results",
            "Share Results",
            "Transform into a results breakdown. Share specific numbers, strategies, or outcomes. Explain what was done, what worked, and the key takeaway for others.",
            "📈",
        ),
        Instruction::preset(
            "announcement",
            "Make an Announcement",
            "Transform into a big announcement. Frame the update as exciting news, express gratitude, and invite others to celebrate or engage.",
            "📣",
        ),
        Instruction::preset(
            "life_update",
            "Post a Life Update",
            "Transform into an authentic, personal update. Share a real story about change, challenge, or growth, written in a relatable and genuine tone.",
            "🌱",
        ),
        Instruction::preset(
            "humor",
            "Add Humor",
            "Transform into a humorous, light-hearted post. Use wit, irony, or a playful observation that your professional audience will relate to.",
            "😂",
        ),
        Instruction::preset(
            "event_recap",
            "Do an Event Recap",
            "Transform into a recap of an event, talk, or workshop. Share the most valuable insights, lessons, or memorable moments, and highlight your key takeaways.",
            "🎤",
        ),
        Instruction::preset(
            "celebrate",
            "Celebrate a Win",
            "Transform into a celebratory post about a milestone or achievement. Share the story behind it, give credit where due, and show gratitude to those involved.",
            "🏆",
        ),
        Instruction::preset(
            "research",
            "Share Research",
            "Transform into an insight-driven post. Highlight data, research findings, or survey results, explain their meaning, and invite discussion around the implications.",
            "🔬",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_preset_ids_are_unique() {
        let presets = builtin_presets();
        let ids: HashSet<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), presets.len());
    }

    #[test]
    fn test_post_type_ids_are_unique() {
        let types = post_types();
        let ids: HashSet<&str> = types.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), types.len());
    }

    #[test]
    fn test_presets_carry_badges() {
        assert!(builtin_presets().iter().all(|p| p.badge.is_some()));
        assert!(post_types().iter().all(|p| p.badge.is_some()));
    }

    #[test]
    fn test_custom_instruction() {
        let custom = Instruction::custom("  make it rhyme  ").unwrap();
        assert_eq!(custom.id, "custom");
        assert_eq!(custom.label, "Custom instruction");
        assert_eq!(custom.instruction, "make it rhyme");
        assert!(custom.badge.is_none());
    }

    #[test]
    fn test_blank_custom_instruction_rejected() {
        assert!(Instruction::custom("").is_none());
        assert!(Instruction::custom("   \n\t").is_none());
    }
}
