use crate::constants::*;
use crate::core::TaskResult;
use crate::errors::TaskError;
use crate::tasks::TaskContext;
use tracing::info;

/// Fixed text operations offered by the assistant menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOp {
    Analyze,
    Summarize,
    Translate,
    Improve,
    ExtractKeywords,
}

impl TextOp {
    pub const ALL: [TextOp; 5] = [
        TextOp::Analyze,
        TextOp::Summarize,
        TextOp::Translate,
        TextOp::Improve,
        TextOp::ExtractKeywords,
    ];

    /// Menu label for the operation
    pub fn label(&self) -> &'static str {
        match self {
            TextOp::Analyze => "Analyze",
            TextOp::Summarize => "Summarize",
            TextOp::Translate => "Translate to Spanish",
            TextOp::Improve => "Improve wording",
            TextOp::ExtractKeywords => "Extract keywords",
        }
    }

    fn instruction(&self) -> &'static str {
        match self {
            TextOp::Analyze => ANALYZE_PROMPT,
            TextOp::Summarize => SUMMARIZE_PROMPT,
            TextOp::Translate => TRANSLATE_PROMPT,
            TextOp::Improve => IMPROVE_PROMPT,
            TextOp::ExtractKeywords => EXTRACT_KEYWORDS_PROMPT,
        }
    }
}

/// Sends a free-form prompt to the configured backend.
pub(super) async fn query_llm(ctx: &TaskContext, prompt: &str) -> Result<TaskResult, TaskError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(TaskError::InvalidInput("prompt is empty".into()));
    }
    let llm = backend(ctx)?;
    let answer = llm
        .complete(None, prompt)
        .await
        .map_err(|e| TaskError::Llm(e.to_string()))?;
    info!("LLM query answered ({} chars)", answer.len());
    Ok(TaskResult::Text(answer))
}

/// Runs one of the fixed text operations through the backend.
pub(super) async fn process_text(
    ctx: &TaskContext,
    op: TextOp,
    text: &str,
) -> Result<TaskResult, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::InvalidInput("text to process is empty".into()));
    }
    let llm = backend(ctx)?;
    let prompt = format!("{}\n\n{}", op.instruction(), text);
    let answer = llm
        .complete(Some(TEXT_ASSISTANT_SYSTEM_PROMPT), &prompt)
        .await
        .map_err(|e| TaskError::Llm(e.to_string()))?;
    info!("Text processed with {:?} ({} chars)", op, answer.len());
    Ok(TaskResult::Text(answer))
}

fn backend(ctx: &TaskContext) -> Result<&crate::llm::LlmClient, TaskError> {
    ctx.llm
        .as_ref()
        .ok_or_else(|| TaskError::Llm("no LLM backend is configured".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn context_without_backend() -> TaskContext {
        TaskContext {
            config: AppConfig::default(),
            llm: None,
        }
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_before_reaching_the_backend() {
        let ctx = context_without_backend();
        let err = query_llm(&ctx, "   ").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid input: prompt is empty");
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_reaching_the_backend() {
        let ctx = context_without_backend();
        let err = process_text(&ctx, TextOp::Summarize, "").await.unwrap_err();
        assert_eq!(err.to_string(), "invalid input: text to process is empty");
    }

    #[tokio::test]
    async fn missing_backend_is_a_clear_error() {
        let ctx = context_without_backend();
        let err = query_llm(&ctx, "hello").await.unwrap_err();
        assert_eq!(err.to_string(), "LLM error: no LLM backend is configured");
    }

    #[test]
    fn every_operation_has_a_distinct_instruction() {
        let mut seen = std::collections::HashSet::new();
        for op in TextOp::ALL {
            assert!(seen.insert(op.instruction()), "duplicate for {:?}", op);
            assert!(op.instruction().ends_with(':'));
        }
    }
}
