//! Prompt Request Builder — assembles the outbound system/user
//! instruction pair for the completion gateway.
//!
//! Three mutually exclusive branches, evaluated in this precedence:
//! 1. taskType "other" with a non-blank customPrompt — free-form
//!    analysis instruction (the handler rejects "other" without one).
//! 2. customPrompt present with any other taskType — optimize the
//!    existing prompt into a placeholder template.
//! 3. Neither — scaffold a new placeholder template from scratch.
//!
//! A customPrompt containing only whitespace counts as absent on every
//! branch: trimming happens before the branch decision, so blank text
//! scaffolds a new template instead of being "optimized".
//!
//! Every branch interpolates the per-model guidance entry into the
//! system instruction and appends the tone modifier. The placeholder
//! requirement in the instructions is advisory — the reply is never
//! checked for brackets.

use crate::catalog::guidance::GuidanceEntry;
use crate::catalog::{GuidanceCatalog, ToneCatalog};
use crate::generation::prompts::{
    FREEFORM_SYSTEM_TEMPLATE, FREEFORM_USER_TEMPLATE, OPTIMIZE_SYSTEM_TEMPLATE,
    OPTIMIZE_USER_TEMPLATE, RESPONSE_CONTRACT, SCAFFOLD_SYSTEM_TEMPLATE, SCAFFOLD_USER_TEMPLATE,
    TASK_FIRST_USER_TEMPLATE,
};
use crate::models::prompt::{PromptRequest, TaskFirstPromptRequest, TaskType};

/// The outbound instruction pair sent to the completion gateway. Not
/// the final PromptResponse — that comes back from the external API.
#[derive(Debug, Clone)]
pub struct InstructionPair {
    pub system: String,
    pub user: String,
}

/// Builds the instruction pair for POST /api/generate-prompt.
pub fn build(
    request: &PromptRequest,
    guidance: &GuidanceCatalog,
    tones: &ToneCatalog,
) -> InstructionPair {
    let model = request.model.as_str();
    let entry = guidance.lookup(model);
    let tone_modifier = tones.lookup(request.tone.as_str()).system_prompt_modifier;

    let custom_prompt = request
        .custom_prompt
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty());

    let (system_template, user) = match (request.task_type, custom_prompt) {
        (TaskType::Other, Some(custom)) => (
            FREEFORM_SYSTEM_TEMPLATE,
            FREEFORM_USER_TEMPLATE
                .replace("{custom_prompt}", custom)
                .replace("{model}", model)
                .replace("{tone}", request.tone.as_str()),
        ),
        (_, Some(custom)) => (
            OPTIMIZE_SYSTEM_TEMPLATE,
            OPTIMIZE_USER_TEMPLATE
                .replace("{custom_prompt}", custom)
                .replace("{model}", model)
                .replace("{task_type}", request.task_type.as_str())
                .replace("{tone}", request.tone.as_str()),
        ),
        (_, None) => (
            SCAFFOLD_SYSTEM_TEMPLATE,
            SCAFFOLD_USER_TEMPLATE
                .replace("{model}", model)
                .replace("{task_type}", request.task_type.as_str())
                .replace("{tone}", request.tone.as_str()),
        ),
    };

    InstructionPair {
        system: render_system(system_template, model, entry, tone_modifier),
        user,
    }
}

/// Builds the instruction pair for POST /api/generate-task-prompt.
/// Mirrors the free-form branch, keyed off the task description.
pub fn build_task_first(
    request: &TaskFirstPromptRequest,
    guidance: &GuidanceCatalog,
    tones: &ToneCatalog,
) -> InstructionPair {
    let model = request.selected_model.as_str();
    let entry = guidance.lookup(model);
    let tone_modifier = tones.lookup(request.tone.as_str()).system_prompt_modifier;

    InstructionPair {
        system: render_system(FREEFORM_SYSTEM_TEMPLATE, model, entry, tone_modifier),
        user: TASK_FIRST_USER_TEMPLATE
            .replace("{task_description}", request.task_description.trim())
            .replace("{model}", model)
            .replace("{tone}", request.tone.as_str()),
    }
}

fn render_system(
    template: &str,
    model: &str,
    entry: &GuidanceEntry,
    tone_modifier: &str,
) -> String {
    let mut system = template
        .replace("{contract}", RESPONSE_CONTRACT)
        .replace("{model_guidance}", &render_guidance(model, entry));
    system.push('\n');
    system.push_str(tone_modifier);
    system
}

/// Flattens a guidance entry into instruction text so the far end never
/// has to look anything up.
fn render_guidance(model: &str, entry: &GuidanceEntry) -> String {
    let mut block = format!("{model}: {}\n\nFormatting tips:\n", entry.system_prompt);
    for tip in entry.formatting_tips {
        block.push_str("- ");
        block.push_str(tip);
        block.push('\n');
    }
    block.push_str("\nBehavioral notes:\n");
    for note in entry.user_prompt_notes {
        block.push_str("- ");
        block.push_str(note);
        block.push('\n');
    }
    block.push_str("\nExample of an ideal user prompt for this model:\n");
    block.push_str(entry.ideal_user_prompt_example);
    block
}
