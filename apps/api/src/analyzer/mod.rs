//! Task Analyzer — classifies a free-text task description and
//! recommends a model from a fixed roster.
//!
//! Pure and deterministic: lowercase the description, test substring
//! membership of five fixed keyword sets, then walk an ordered rule
//! cascade. The cascade order is a contract — first match wins, and it
//! is the tie-break policy when several keyword sets match. Do NOT
//! refactor it into a scoring or ranking system: that would silently
//! change recommendations for descriptions matching multiple sets.

use crate::models::prompt::{ModelAlternative, ModelId, ModelRecommendation, TaskComplexity};

/// Roster order is fixed and is itself a contract: alternatives are the
/// first three non-recommended entries in this order.
pub const MODEL_ROSTER: &[ModelId] = &[
    ModelId::Gpt4o,
    ModelId::Gpt45,
    ModelId::Gpt41,
    ModelId::Gpt41Mini,
    ModelId::O3,
    ModelId::O4Mini,
    ModelId::O1,
    ModelId::O1Mini,
];

const COMPLEXITY_KEYWORDS: &[&str] = &[
    "legal", "reasoning", "complex", "analysis", "research", "math", "logic", "proof",
    "algorithm", "deep",
];

const CODING_KEYWORDS: &[&str] = &[
    "code", "coding", "debug", "program", "script", "function", "api", "sql", "python",
    "javascript",
];

const CREATIVE_KEYWORDS: &[&str] = &[
    "creative", "story", "poem", "fiction", "novel", "narrative", "brainstorm", "lyrics",
];

const MULTIMODAL_KEYWORDS: &[&str] = &[
    "image", "photo", "picture", "visual", "audio", "video", "diagram", "chart", "screenshot",
];

const SPEED_KEYWORDS: &[&str] = &[
    "quick", "fast", "simple", "brief", "short", "summary", "summarize",
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Analyzes a task description and returns a model recommendation with
/// complexity tier, confidence, reasoning, and up to three alternatives.
pub fn analyze(description: &str) -> ModelRecommendation {
    let text = description.to_lowercase();
    let length = text.chars().count();

    let has_complexity = contains_any(&text, COMPLEXITY_KEYWORDS);
    let has_coding = contains_any(&text, CODING_KEYWORDS);
    let has_creative = contains_any(&text, CREATIVE_KEYWORDS);
    let has_multimodal = contains_any(&text, MULTIMODAL_KEYWORDS);
    let has_speed = contains_any(&text, SPEED_KEYWORDS);

    let task_complexity = if has_complexity || (has_coding && length > 100) {
        TaskComplexity::Complex
    } else if has_coding || has_creative || length > 50 {
        TaskComplexity::Moderate
    } else {
        TaskComplexity::Simple
    };

    // Ordered cascade — first matching rule wins.
    let (recommended_model, confidence, reasoning) = if has_complexity
        && (text.contains("math") || text.contains("logic") || text.contains("proof"))
    {
        (
            ModelId::O3,
            0.90,
            "Mathematical and logical reasoning benefits from o3's state-of-the-art \
             step-by-step analysis."
                .to_string(),
        )
    } else if text.contains("legal") || text.contains("contract") {
        (
            ModelId::O3,
            0.88,
            "Legal and contract work needs the careful, precise reasoning o3 is built for."
                .to_string(),
        )
    } else if has_coding && !has_speed {
        (
            ModelId::Gpt41,
            0.85,
            "Coding tasks get the most precise results from gpt-4.1's development \
             specialization."
                .to_string(),
        )
    } else if has_creative || text.contains("emotion") || text.contains("empathy") {
        (
            ModelId::Gpt45,
            0.85,
            "Creative and emotionally nuanced writing plays to gpt-4.5's strengths."
                .to_string(),
        )
    } else if has_multimodal {
        (
            ModelId::Gpt4o,
            0.90,
            "Tasks involving images, audio, or video call for the multimodal gpt-4o flagship."
                .to_string(),
        )
    } else if has_speed || task_complexity == TaskComplexity::Simple {
        (
            ModelId::Gpt41Mini,
            0.80,
            "A quick, well-defined task is best served by the fast, lightweight gpt-4.1-mini."
                .to_string(),
        )
    } else {
        (
            ModelId::Gpt4o,
            0.75,
            "A general-purpose task without strong signals fits the all-round gpt-4o flagship."
                .to_string(),
        )
    };

    ModelRecommendation {
        recommended_model,
        confidence,
        reasoning,
        task_complexity,
        alternatives: build_alternatives(recommended_model),
    }
}

/// Takes the roster in order, drops the recommended model, and keeps the
/// first three remaining entries with their static info.
fn build_alternatives(recommended: ModelId) -> Vec<ModelAlternative> {
    MODEL_ROSTER
        .iter()
        .filter(|model| **model != recommended)
        .take(3)
        .map(|model| {
            let info = model_info(*model);
            ModelAlternative {
                model: *model,
                reason: info.reason.to_string(),
                pros: info.pros.iter().map(|p| p.to_string()).collect(),
                cons: info.cons.iter().map(|c| c.to_string()).collect(),
            }
        })
        .collect()
}

struct ModelInfo {
    reason: &'static str,
    pros: &'static [&'static str],
    cons: &'static [&'static str],
}

/// Static per-model alternative info. Models outside the roster fall
/// back to the primary (gpt-4o) info so this never fails.
fn model_info(model: ModelId) -> ModelInfo {
    match model {
        ModelId::Gpt45 => ModelInfo {
            reason: "Best for natural, emotionally intelligent writing",
            pros: &["Strong tone control", "Reduced hallucinations", "Creative insight"],
            cons: &["Less focused on reasoning", "Slower than mini models"],
        },
        ModelId::Gpt41 => ModelInfo {
            reason: "Specialized for coding and precise instruction-following",
            pros: &["Excellent for dev work", "Precise output", "Strong with web tasks"],
            cons: &["Less conversational", "Overkill for simple text tasks"],
        },
        ModelId::Gpt41Mini => ModelInfo {
            reason: "Lightweight, fast model for general-purpose use",
            pros: &["Fast responses", "Low cost", "Good for simple coding"],
            cons: &["Lower quality on nuanced tasks", "Limited deep reasoning"],
        },
        ModelId::O3 => ModelInfo {
            reason: "State-of-the-art reasoning for deep analysis",
            pros: &["Top-tier math and logic", "Thorough analysis", "Visual problem-solving"],
            cons: &["Slower responses", "Higher cost"],
        },
        ModelId::O4Mini => ModelInfo {
            reason: "Cost-efficient reasoning with fast throughput",
            pros: &["Strong math and data science", "Fast for a reasoning model", "Cost-efficient"],
            cons: &["Less capable than o3 on the hardest problems"],
        },
        ModelId::O1 => ModelInfo {
            reason: "Solid reasoning for complex problem-solving",
            pros: &["Reliable step-by-step reasoning", "Good at coding and math"],
            cons: &["Less capable than o3/o4-mini", "No tool access"],
        },
        ModelId::O1Mini => ModelInfo {
            reason: "Compact reasoning model for moderate complexity",
            pros: &["Fast", "Inexpensive", "Decent analytical tasks"],
            cons: &["Weakest of the reasoning line", "No tool access"],
        },
        // Primary model info — also the fallback for anything off-roster.
        _ => ModelInfo {
            reason: "Best all-purpose model with multimodal support",
            pros: &["Fast real-time reasoning", "Text, vision, and audio", "Great tool use"],
            cons: &["May compress detail", "Not the strongest pure reasoner"],
        },
    }
}
