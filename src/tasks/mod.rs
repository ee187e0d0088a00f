mod assist;
mod documents;
mod scrape;

pub use assist::TextOp;

use crate::config::AppConfig;
use crate::core::TaskFuture;
use crate::llm::LlmClient;
use futures::FutureExt;
use std::sync::Arc;

/// Shared collaborators a task can use while it runs.
///
/// Built once at startup by the interactive layer and handed to every
/// submission. The LLM client is optional: when the backend cannot be
/// constructed the assistant tasks fail cleanly while everything else
/// keeps working.
#[derive(Debug)]
pub struct TaskContext {
    pub config: AppConfig,
    pub llm: Option<LlmClient>,
}

/// One unit of work the user can submit, with its typed parameters.
///
/// Dispatch happens on the variant, never on a display name.
#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Render a document artifact from a title and paragraph text
    GenerateDocument {
        title: String,
        content: String,
        filename: Option<String>,
    },
    /// Render a presentation outline from a title and slide blocks
    GeneratePresentation {
        title: String,
        content: String,
        filename: Option<String>,
    },
    /// Fetch a web page and extract a structured summary
    ScrapeWebsite {
        url: String,
        selector: Option<String>,
    },
    /// Send a free-form prompt to the configured LLM backend
    QueryLlm { prompt: String },
    /// Run one of the fixed text operations through the LLM backend
    ProcessText { op: TextOp, text: String },
}

impl TaskKind {
    /// Human-readable name used for status labels and the activity log
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::GenerateDocument { .. } => "Generate document",
            TaskKind::GeneratePresentation { .. } => "Generate presentation",
            TaskKind::ScrapeWebsite { .. } => "Scrape website",
            TaskKind::QueryLlm { .. } => "LLM query",
            TaskKind::ProcessText { .. } => "Process text",
        }
    }

    /// Turns the kind into the future the worker will drive
    pub fn into_future(self, ctx: Arc<TaskContext>) -> TaskFuture {
        async move {
            match self {
                TaskKind::GenerateDocument {
                    title,
                    content,
                    filename,
                } => documents::generate_document(&ctx, &title, &content, filename.as_deref()),
                TaskKind::GeneratePresentation {
                    title,
                    content,
                    filename,
                } => documents::generate_presentation(&ctx, &title, &content, filename.as_deref()),
                TaskKind::ScrapeWebsite { url, selector } => {
                    scrape::scrape_website(&url, selector.as_deref()).await
                }
                TaskKind::QueryLlm { prompt } => assist::query_llm(&ctx, &prompt).await,
                TaskKind::ProcessText { op, text } => assist::process_text(&ctx, op, &text).await,
            }
        }
        .boxed()
    }
}
