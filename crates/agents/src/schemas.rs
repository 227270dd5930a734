//! JSON Schema documents for each agent's structured output, used by
//! Safe LLM Call's pre-validation pass.

use research_core::{AnalystOutput, ClarificationRequest, CriticOutput, WriterOutput};
use research_llm::AgentSchema;
use serde_json::json;

impl AgentSchema for AnalystOutput {
    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "required": ["status", "draft", "reasoning_chain", "reasoning_style", "citations_used", "missing_information", "new_queries"],
            "properties": {
                "status": { "enum": ["draft_ready", "search_required"] },
                "draft": { "type": "string", "minLength": 20 },
                "reasoning_chain": { "type": "string", "minLength": 1 },
                "reasoning_style": { "enum": ["deductive", "inductive", "abductive"] },
                "citations_used": {
                    "type": "array",
                    "items": { "type": "integer", "minimum": 1 }
                },
                "missing_information": { "type": "array", "items": { "type": "string" } },
                "new_queries": { "type": "array", "items": { "type": "string" }, "maxItems": 5 },
                "gap_resolutions": { "type": "array" }
            }
        })
    }
}

impl AgentSchema for CriticOutput {
    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "required": ["status", "critique", "suggestions", "mode_compliance", "logical_gaps", "source_issues"],
            "properties": {
                "status": { "enum": ["PASS", "WARN", "REJECT"] },
                "critique": { "type": "string", "minLength": 1 },
                "suggestions": { "type": "array", "items": { "type": "string" } },
                "mode_compliance": { "enum": ["符合", "違反"] },
                "logical_gaps": { "type": "array", "items": { "type": "string" } },
                "source_issues": { "type": "array", "items": { "type": "string" } }
            }
        })
    }
}

impl AgentSchema for WriterOutput {
    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "required": ["final_report", "sources_used", "confidence_level", "methodology_note"],
            "properties": {
                "final_report": { "type": "string", "minLength": 50 },
                "sources_used": { "type": "array", "items": { "type": "integer", "minimum": 1 } },
                "confidence_level": { "enum": ["High", "Medium", "Low"] },
                "methodology_note": { "type": "string" }
            }
        })
    }
}

impl AgentSchema for ClarificationRequest {
    fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "required": ["instruction", "submit_label", "questions"],
            "properties": {
                "instruction": { "type": "string" },
                "submit_label": { "type": "string" },
                "questions": {
                    "type": "array",
                    "minItems": 1,
                    "maxItems": 3,
                    "items": {
                        "type": "object",
                        "required": ["question_id", "question", "clarification_type", "required", "options"],
                        "properties": {
                            "clarification_type": { "enum": ["time", "scope", "entity"] },
                            "options": { "type": "array", "minItems": 2, "maxItems": 5 }
                        }
                    }
                }
            }
        })
    }
}
