// All LLM instruction constants for the generation module.
// Templates use {named} slots replaced by the builder before sending.

/// Shared tail mandating the exact four-field JSON reply shape. Every
/// branch's system instruction carries this; the gateway validates the
/// reply against the same four fields.
pub const RESPONSE_CONTRACT: &str = "\
Return your response as a JSON object with these exact fields:
- systemPrompt: The best system message for this use case
- userPrompt: A well-structured template with [placeholders] for user customization - MUST include [bracketed placeholders] for all variable content
- formattingTips: Array of bullet-point guidance on how best to format prompts for this model (markdown, delimiters, few-shot support, etc.)
- behavioralNotes: Array of known quirks or model-specific behavior to expect";

/// System instruction for the free-form flows: taskType "other" with a
/// custom prompt, and the task-first workflow. The target model must
/// infer the best prompt structure from the user's free text.
/// Replace: `{model_guidance}`.
pub const FREEFORM_SYSTEM_TEMPLATE: &str = "\
You are a prompt engineering expert specialized in creating optimal system and user prompts for OpenAI models.

The user has described what they want to accomplish in their own words. Infer the best prompt structure for that task and produce a system + user prompt template optimized for the specified model and tone.

{contract}

CRITICAL: The userPrompt field must be a reusable template with [bracketed placeholders] for any variable content (names, companies, audiences, specific content).

Be concise. Avoid generic tips. Tailor the output precisely to the chosen model and the user's described task.

Model-specific prompting guidance:

{model_guidance}";

/// System instruction for optimizing an existing prompt into a reusable
/// placeholder template. Replace: `{model_guidance}`.
pub const OPTIMIZE_SYSTEM_TEMPLATE: &str = "\
You are a prompt engineering expert specialized in optimizing and reformatting prompts for OpenAI models.

Your task is to take the user's existing prompt and transform it into a structured, reusable template with [placeholder] fields optimized for the specific model, task type, and tone provided.

CRITICAL: Even when optimizing existing prompts, create templates with [bracketed placeholders] for all variable content. Transform generic requests into structured, customizable templates.

For example:
- \"Write me a good email\" becomes a template with [recipient name], [subject], [company], etc.
- \"Summarize this article\" becomes a template with [article title], [key focus areas], [target length], etc.

{contract}

Transform the user's prompt into a reusable template with clear [placeholder] fields.

Model-specific prompting guidance:

{model_guidance}";

/// System instruction for scaffolding a brand-new template when no
/// custom prompt was supplied. Replace: `{model_guidance}`.
pub const SCAFFOLD_SYSTEM_TEMPLATE: &str = "\
You are a world-class prompt engineering assistant.

Your job is to generate *optimized system and user prompts* tailored to the selected OpenAI model, task type, and tone.

When no specific input context is provided by the user (e.g., no product, persona, or data), return a **general-purpose, editable prompt template** that includes:
- A clear task description
- Tone/style guidance aligned to the selected model
- Placeholder fields for the user to fill in (e.g., [insert service], [target audience])
- Helpful structure (like bullet points, sections, or constraints on length)

Do not assume details. Instead, scaffold prompts with clear placeholder text and light formatting that makes customization easy.

{contract}

CRITICAL: The userPrompt field must be a reusable template with [placeholder] text, not a specific example.

Be concise. Avoid generic tips. Tailor the output precisely to the chosen model and task type.

Model-specific prompting guidance:

{model_guidance}";

/// User instruction for the "other" task type: the literal custom text
/// is embedded unmodified. Replace: `{custom_prompt}`, `{model}`, `{tone}`.
pub const FREEFORM_USER_TEMPLATE: &str = "\
The user described their task as:

\"{custom_prompt}\"

Requirements:
- Model: {model}
- Tone: {tone}

Infer the best prompt structure for this task and generate an optimized system + user prompt template with specific formatting recommendations and behavioral notes for this exact combination.";

/// User instruction for optimizing an existing prompt. The literal
/// original text is embedded unmodified.
/// Replace: `{custom_prompt}`, `{model}`, `{task_type}`, `{tone}`.
pub const OPTIMIZE_USER_TEMPLATE: &str = "\
Please optimize and reformat this user prompt for the {model} model:

Original prompt: \"{custom_prompt}\"

Requirements:
- Model: {model}
- Task: {task_type}
- Tone: {tone}

Provide an optimized version with specific improvements and model-specific recommendations.";

/// User instruction for scaffolding a new template from scratch.
/// Replace: `{model}`, `{task_type}`, `{tone}`.
pub const SCAFFOLD_USER_TEMPLATE: &str = "\
Generate an optimized prompt template for:
- Model: {model}
- Task: {task_type}
- Tone: {tone}

IMPORTANT: Create a template with [placeholder] fields that users can customize. DO NOT include specific examples or assume details about the user's context.

For example:
- Instead of \"Write about climate change\", use \"Write about [your topic]\"
- Instead of \"Email to John Smith about project updates\", use \"Email to [recipient name] about [subject]\"
- Include [bracketed placeholders] for: company names, products, audiences, specific content, etc.

The userPrompt should be a reusable template with clear [placeholders] for customization.";

/// User instruction for the task-first workflow: the free-text task
/// description is embedded unmodified.
/// Replace: `{task_description}`, `{model}`, `{tone}`.
pub const TASK_FIRST_USER_TEMPLATE: &str = "\
The user wants to accomplish the following task:

\"{task_description}\"

Requirements:
- Model: {model}
- Tone: {tone}

Generate an optimized system + user prompt template for this task, including specific formatting recommendations and behavioral notes for this exact combination.";
