//! Completion Gateway — sends an instruction pair upstream and
//! validates the JSON reply against the PromptResponse contract.
//!
//! Validation is strict and applied uniformly: a reply that does not
//! parse as JSON fails with `MalformedReply`; parsed JSON missing a
//! required field or carrying a wrong type fails with
//! `ContractViolation`. A valid reply is returned with its field
//! content unchanged — nothing is normalized or rewritten.

use serde_json::Value;

use crate::errors::AppError;
use crate::generation::builder::InstructionPair;
use crate::llm_client::{strip_json_fences, ChatBackend};
use crate::models::prompt::PromptResponse;

/// Calls the completion backend and returns the validated response.
pub async fn complete(
    backend: &dyn ChatBackend,
    instructions: &InstructionPair,
) -> Result<PromptResponse, AppError> {
    let reply = backend
        .chat(&instructions.system, &instructions.user)
        .await?;

    let value: Value = serde_json::from_str(strip_json_fences(&reply))
        .map_err(|e| AppError::MalformedReply(e.to_string()))?;

    validate_contract(&value)?;

    serde_json::from_value(value).map_err(|e| AppError::ContractViolation(e.to_string()))
}

/// Structural check of the four required PromptResponse fields: two
/// string fields present and non-null, two fields that are actually
/// arrays of strings (empty allowed).
fn validate_contract(value: &Value) -> Result<(), AppError> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::ContractViolation("reply is not a JSON object".to_string()))?;

    for field in ["systemPrompt", "userPrompt"] {
        match object.get(field) {
            Some(Value::String(_)) => {}
            Some(_) => {
                return Err(AppError::ContractViolation(format!(
                    "field '{field}' is not a string"
                )))
            }
            None => {
                return Err(AppError::ContractViolation(format!(
                    "missing required field '{field}'"
                )))
            }
        }
    }

    for field in ["formattingTips", "behavioralNotes"] {
        match object.get(field) {
            Some(Value::Array(items)) => {
                if items.iter().any(|item| !item.is_string()) {
                    return Err(AppError::ContractViolation(format!(
                        "field '{field}' contains non-string entries"
                    )));
                }
            }
            Some(_) => {
                return Err(AppError::ContractViolation(format!(
                    "field '{field}' is not an array"
                )))
            }
            None => {
                return Err(AppError::ContractViolation(format!(
                    "missing required field '{field}'"
                )))
            }
        }
    }

    Ok(())
}
