//! Guidance Catalog — per-model formatting tips, behavioral notes, an
//! example user prompt, and a canned system prompt.
//!
//! Lookup never fails: unknown model tokens fall back to the `gpt-4o`
//! entry. The catalog is read-only after construction.

use std::collections::HashMap;

/// Catalog key of the fallback entry.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Static reference data for one model.
#[derive(Debug, Clone)]
pub struct GuidanceEntry {
    /// Canned system prompt tuned to the model's strengths.
    pub system_prompt: &'static str,
    pub formatting_tips: &'static [&'static str],
    pub user_prompt_notes: &'static [&'static str],
    pub ideal_user_prompt_example: &'static str,
}

/// Immutable model → guidance map. Construct once in `main`, share via
/// `Arc` in `AppState`.
pub struct GuidanceCatalog {
    entries: HashMap<&'static str, GuidanceEntry>,
}

impl GuidanceCatalog {
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "gpt-4o",
            GuidanceEntry {
                system_prompt: "You are a fast, versatile assistant. Respond in clear natural \
                    language, use markdown where it helps, and expand on details when asked \
                    rather than compressing.",
                formatting_tips: &[
                    "Supports markdown, bullet points, and code blocks",
                    "Use clear instructions but natural language is fine",
                    "Specify desired length (it may default to short answers)",
                ],
                user_prompt_notes: &[
                    "Tends to be more conversational unless constrained",
                    "Responds quickly but may compress info unless told to expand",
                ],
                ideal_user_prompt_example: "Summarize the following article using bullet points and simple language. Keep the core ideas but avoid repetition.\n\n[Paste text here]",
            },
        );

        entries.insert(
            "gpt-4.5",
            GuidanceEntry {
                system_prompt: "You are an emotionally intelligent writing assistant. Match the \
                    requested voice precisely, keep structure light, and prioritize tone and \
                    audience fit over exhaustive detail.",
                formatting_tips: &[
                    "Supports markdown, bullet points, and code blocks",
                    "Use clear instructions but natural language is fine",
                    "Specify desired length (it may default to short answers)",
                ],
                user_prompt_notes: &[
                    "Enhanced emotional intelligence and creativity",
                    "Strong at following intent with reduced hallucinations",
                ],
                ideal_user_prompt_example: "Summarize the following article using bullet points and simple language. Keep the core ideas but avoid repetition.\n\n[Paste text here]",
            },
        );

        entries.insert(
            "gpt-4.1",
            GuidanceEntry {
                system_prompt: "You are a precise coding and instruction-following assistant. \
                    Follow the stated steps exactly, show code in fenced blocks, and explain \
                    technical decisions concisely.",
                formatting_tips: &[
                    "Prefers clear step-by-step or numbered instructions",
                    "Excellent for code-related tasks and debugging",
                    "Handles technical documentation very well",
                ],
                user_prompt_notes: &[
                    "Specialized for coding and instruction-following",
                    "More precise than GPT-4o for development tasks",
                ],
                ideal_user_prompt_example: "Explain the following code in plain English. Use bullet points and include code snippets for reference.\n\n[Insert code here]",
            },
        );

        entries.insert(
            "gpt-4.1-mini",
            GuidanceEntry {
                system_prompt: "You are a fast, lightweight assistant for well-defined tasks. \
                    Keep answers short, deterministic, and directly responsive to the \
                    instruction given.",
                formatting_tips: &[
                    "Use simple, rule-based language (like a tagger or classifier)",
                    "Good for lightweight coding tasks",
                    "Keep instructions clear and concise",
                ],
                user_prompt_notes: &[
                    "Lightweight version optimized for speed",
                    "Best for simple, well-defined tasks",
                ],
                ideal_user_prompt_example: "Fix the syntax error in this code and explain what was wrong:\n\n[Insert code here]",
            },
        );

        entries.insert(
            "o3",
            GuidanceEntry {
                system_prompt: "You are a rigorous reasoning assistant. Work through problems \
                    step by step, state assumptions explicitly, and verify each conclusion \
                    before presenting it.",
                formatting_tips: &[
                    "Excellent for complex reasoning and analysis",
                    "Use structured problem statements",
                    "Great for mathematical and logical proofs",
                ],
                user_prompt_notes: &[
                    "State-of-the-art reasoning capabilities",
                    "Ideal for deep analysis and problem-solving",
                ],
                ideal_user_prompt_example: "Analyze the following problem step-by-step and provide a detailed solution with your reasoning:\n\n[Insert problem here]",
            },
        );

        entries.insert(
            "o4-mini",
            GuidanceEntry {
                system_prompt: "You are an efficient reasoning assistant. Solve problems step \
                    by step with minimal preamble, showing work for math, data, and code.",
                formatting_tips: &[
                    "Efficient for reasoning tasks with good performance",
                    "Use clear problem statements",
                    "Great for math, data science, and coding",
                ],
                user_prompt_notes: &[
                    "High-performance reasoning model",
                    "Cost-efficient with fast throughput",
                ],
                ideal_user_prompt_example: "Solve this step-by-step and show your work:\n\n[Insert problem here]",
            },
        );

        entries.insert(
            "o1",
            GuidanceEntry {
                system_prompt: "You are a careful problem-solving assistant. Break problems \
                    into parts, reason through each one, and present a structured solution.",
                formatting_tips: &[
                    "Good for complex problem-solving",
                    "Use structured reasoning prompts",
                    "Works well with coding and math problems",
                ],
                user_prompt_notes: &[
                    "Solid reasoning capabilities",
                    "Less advanced than o3/o4-mini models",
                ],
                ideal_user_prompt_example: "Break down this problem and solve it step-by-step:\n\n[Insert problem here]",
            },
        );

        entries.insert(
            "o1-mini",
            GuidanceEntry {
                system_prompt: "You are a compact analytical assistant. Keep reasoning focused \
                    and answers direct; flag uncertainty instead of speculating.",
                formatting_tips: &[
                    "Compact reasoning model",
                    "Use clear, direct problem statements",
                    "Good for moderate complexity tasks",
                ],
                user_prompt_notes: &[
                    "Lightweight reasoning model",
                    "Best for simpler analytical tasks",
                ],
                ideal_user_prompt_example: "Solve this problem and explain your approach:\n\n[Insert problem here]",
            },
        );

        entries.insert(
            "gpt-4-turbo",
            GuidanceEntry {
                system_prompt: "You are a thorough assistant with a large context window. \
                    Follow numbered instructions in order and respect formatting and length \
                    constraints exactly.",
                formatting_tips: &[
                    "Prefers clear step-by-step or numbered instructions",
                    "Works well with few-shot formatting (e.g., Input/Output pairs)",
                    "Handles large context windows — great for long prompts",
                ],
                user_prompt_notes: &[
                    "Can be verbose unless told to keep it short",
                    "Respects formatting and tone constraints reliably",
                ],
                ideal_user_prompt_example: "Explain the following code in plain English. Use bullet points and include code snippets for reference.\n\n[Insert code here]",
            },
        );

        entries.insert(
            "gpt-4",
            GuidanceEntry {
                system_prompt: "You are a deliberate, structured assistant. Expect clearly \
                    delimited sections in the input and keep your output tightly scoped to \
                    the question asked.",
                formatting_tips: &[
                    "Use delimiters like --- or ``` to separate sections",
                    "Be explicit in instructions — prefers structured prompts",
                    "Markdown support is strong, but slower output",
                ],
                user_prompt_notes: &[
                    "Most deliberate reasoning, but also the slowest",
                    "Needs clear scoping to avoid vague responses",
                ],
                ideal_user_prompt_example: "Write a one-paragraph summary of the following legal text. Focus on the constitutional arguments made by each side.\n\n---\n[Insert legal passage here]",
            },
        );

        entries.insert(
            "gpt-3.5",
            GuidanceEntry {
                system_prompt: "You are a literal, no-frills assistant. Follow the instruction \
                    exactly as written, produce only the requested output format, and never \
                    invent details.",
                formatting_tips: &[
                    "Keep prompts short and literal — no ambiguity",
                    "Use plain instructions and define expected output format",
                    "Wrap examples in delimiters like ``` or === for clarity",
                ],
                user_prompt_notes: &[
                    "Can hallucinate or make confident errors",
                    "Not good at open-ended or abstract tasks",
                ],
                ideal_user_prompt_example: "Extract all email addresses from the following text and return them as a list:\n\n===\n[Paste text here]\n===",
            },
        );

        entries.insert(
            "gpt-4o-mini",
            GuidanceEntry {
                system_prompt: "You are a deterministic classification and extraction \
                    assistant. Apply the given rules mechanically and output only the \
                    requested labels or fields.",
                formatting_tips: &[
                    "Use simple, rule-based language (like a tagger or classifier)",
                    "Avoid creative or open-ended tasks",
                ],
                user_prompt_notes: &[
                    "Optimized for deterministic, fast responses",
                    "Lower quality for nuanced writing or reasoning",
                ],
                ideal_user_prompt_example: "Classify this support request into one of the following categories: Billing, Technical, or Account Access.\n\n[Paste request here]",
            },
        );

        entries.insert(
            "gpt-3.5-turbo-instruct",
            GuidanceEntry {
                system_prompt: "You are a single-turn instruction executor. Treat the input \
                    as a command, perform it, and return only the result.",
                formatting_tips: &[
                    "Treat like CLI input — concise and directive",
                    "Avoid chatty language — just tell it what to do",
                ],
                user_prompt_notes: &[
                    "Ideal for tools, scripts, or single-turn commands",
                    "No chat history or memory — stateless interaction",
                ],
                ideal_user_prompt_example: "Rewrite this sentence to sound more professional:\n\"Hey, I need that report ASAP or we're gonna be in trouble.\"",
            },
        );

        Self { entries }
    }

    /// Looks up guidance for a model token. Unknown tokens get the
    /// default (`gpt-4o`) entry rather than an error.
    pub fn lookup(&self, model: &str) -> &GuidanceEntry {
        self.entries
            .get(model)
            .unwrap_or_else(|| &self.entries[DEFAULT_MODEL])
    }
}

impl Default for GuidanceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prompt::ModelId;

    const ALL_MODELS: &[ModelId] = &[
        ModelId::Gpt4o,
        ModelId::Gpt45,
        ModelId::Gpt41,
        ModelId::Gpt41Mini,
        ModelId::O3,
        ModelId::O4Mini,
        ModelId::O1,
        ModelId::O1Mini,
        ModelId::Gpt4Turbo,
        ModelId::Gpt4,
        ModelId::Gpt35,
        ModelId::Gpt4oMini,
        ModelId::Gpt35TurboInstruct,
    ];

    #[test]
    fn test_every_model_has_nonempty_guidance() {
        let catalog = GuidanceCatalog::new();
        for model in ALL_MODELS {
            let entry = catalog.lookup(model.as_str());
            assert!(
                !entry.formatting_tips.is_empty(),
                "{} has no formatting tips",
                model.as_str()
            );
            assert!(
                !entry.user_prompt_notes.is_empty(),
                "{} has no user prompt notes",
                model.as_str()
            );
            assert!(!entry.system_prompt.trim().is_empty());
            assert!(!entry.ideal_user_prompt_example.trim().is_empty());
        }
    }

    #[test]
    fn test_unknown_model_falls_back_to_default() {
        let catalog = GuidanceCatalog::new();
        let fallback = catalog.lookup("some-future-model");
        let default = catalog.lookup(DEFAULT_MODEL);
        assert_eq!(fallback.system_prompt, default.system_prompt);
        assert_eq!(fallback.ideal_user_prompt_example, default.ideal_user_prompt_example);
    }

    #[test]
    fn test_coding_model_guidance_mentions_code() {
        let catalog = GuidanceCatalog::new();
        let entry = catalog.lookup("gpt-4.1");
        assert!(entry
            .formatting_tips
            .iter()
            .any(|tip| tip.to_lowercase().contains("code")));
    }

    #[test]
    fn test_reasoning_model_guidance_mentions_reasoning() {
        let catalog = GuidanceCatalog::new();
        let entry = catalog.lookup("o3");
        assert!(entry
            .formatting_tips
            .iter()
            .any(|tip| tip.to_lowercase().contains("reasoning")));
    }
}
