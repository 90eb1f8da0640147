//! MCP tool handlers for repodocs
//!
//! Each tool handler processes a specific tool call and returns results.

use super::protocol::{JsonRpcError, ToolDefinition, ToolResult};
use crate::index::DocumentIndex;
use serde_json::{json, Value};

/// Get all tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "list_documents".to_string(),
            description: "List all documents with their filename and description.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        ToolDefinition {
            name: "get_document".to_string(),
            description: "Get the content of a document, without its front matter.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "Filename of the document, as returned by list_documents"
                    }
                },
                "required": ["filename"]
            }),
        },
    ]
}

/// Handle tool call dispatch
pub fn handle_tool_call(
    index: &DocumentIndex,
    tool_name: &str,
    arguments: &Value,
) -> Result<ToolResult, JsonRpcError> {
    match tool_name {
        "list_documents" => tool_list_documents(index),
        "get_document" => tool_get_document(index, arguments),
        _ => Err(JsonRpcError::invalid_params(format!(
            "Unknown tool: {}",
            tool_name
        ))),
    }
}

/// Execute list_documents
fn tool_list_documents(index: &DocumentIndex) -> Result<ToolResult, JsonRpcError> {
    let docs = index.list();

    let text = serde_json::to_string(&docs)
        .map_err(|e| JsonRpcError::internal_error(e.to_string()))?;

    Ok(ToolResult::text(text))
}

/// Execute get_document
fn tool_get_document(index: &DocumentIndex, args: &Value) -> Result<ToolResult, JsonRpcError> {
    let filename = args
        .get("filename")
        .and_then(|v| v.as_str())
        .ok_or_else(|| JsonRpcError::invalid_params("Missing filename parameter"))?;

    let body = index.get(filename).map_err(|e| {
        tracing::debug!("get_document {} failed: {}", filename, e);
        JsonRpcError::from(e)
    })?;

    Ok(ToolResult::text(body))
}
