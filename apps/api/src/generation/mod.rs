// Prompt generation pipeline: template constants, instruction builder,
// completion gateway, and route handlers.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod builder;
pub mod gateway;
pub mod handlers;
pub mod prompts;
