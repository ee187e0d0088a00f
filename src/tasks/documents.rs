use crate::core::TaskResult;
use crate::errors::TaskError;
use crate::tasks::TaskContext;
use crate::utils::{ensure_extension, timestamp_slug};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const SEPARATOR_WIDTH: usize = 50;

/// Renders a plain-text document artifact and writes it under the
/// configured documents directory.
///
/// # Arguments
///
/// * `title` - Heading placed on the first line; must not be blank
/// * `content` - Paragraph text; lines are trimmed and blank lines dropped
/// * `filename` - Optional file name, `.txt` extension enforced
///
/// # Returns
///
/// The path of the written artifact as `TaskResult::File`
pub(super) fn generate_document(
    ctx: &TaskContext,
    title: &str,
    content: &str,
    filename: Option<&str>,
) -> Result<TaskResult, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::InvalidInput("document title is empty".into()));
    }
    let body = render_document(title, content);
    let name = filename
        .map(str::to_owned)
        .unwrap_or_else(|| format!("documento_{}", timestamp_slug()));
    let path = write_artifact(&ctx.config.paths.documents_output, &name, &body)?;
    info!("Document generated: {}", path.display());
    Ok(TaskResult::File(path))
}

/// Renders a presentation outline artifact and writes it under the
/// configured presentations directory.
///
/// Slides come from blank-line-separated blocks of `content`: the first
/// line of each block is the slide heading, the rest become bullets.
pub(super) fn generate_presentation(
    ctx: &TaskContext,
    title: &str,
    content: &str,
    filename: Option<&str>,
) -> Result<TaskResult, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::InvalidInput("presentation title is empty".into()));
    }
    let body = render_presentation(title, content);
    let name = filename
        .map(str::to_owned)
        .unwrap_or_else(|| format!("presentacion_{}", timestamp_slug()));
    let path = write_artifact(&ctx.config.paths.presentations_output, &name, &body)?;
    info!("Presentation generated: {}", path.display());
    Ok(TaskResult::File(path))
}

fn write_artifact(dir: &Path, name: &str, body: &str) -> Result<PathBuf, TaskError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(ensure_extension(name, "txt"));
    fs::write(&path, body)?;
    Ok(path)
}

fn render_document(title: &str, content: &str) -> String {
    let mut body = String::new();
    body.push_str(title);
    body.push('\n');
    body.push_str(&format!(
        "Generado el: {}\n",
        Local::now().format("%d/%m/%Y %H:%M")
    ));
    body.push_str(&"─".repeat(SEPARATOR_WIDTH));
    body.push_str("\n\n");
    for line in content.lines() {
        let line = line.trim();
        if !line.is_empty() {
            body.push_str(line);
            body.push('\n');
        }
    }
    body
}

fn render_presentation(title: &str, content: &str) -> String {
    let mut body = String::new();
    body.push_str(title);
    body.push('\n');
    body.push_str(&format!(
        "Generado el {}\n",
        Local::now().format("%d/%m/%Y")
    ));
    body.push_str(&"─".repeat(SEPARATOR_WIDTH));
    body.push_str("\n\n");
    for (index, (heading, bullets)) in parse_slides(content).iter().enumerate() {
        body.push_str(&format!("{}. {}\n", index + 1, heading));
        for bullet in bullets {
            body.push_str(&format!("   • {}\n", bullet));
        }
        body.push('\n');
    }
    body
}

fn parse_slides(content: &str) -> Vec<(String, Vec<String>)> {
    let mut slides = Vec::new();
    for block in content.split("\n\n") {
        let mut lines = block.lines().map(str::trim).filter(|line| !line.is_empty());
        if let Some(heading) = lines.next() {
            slides.push((heading.to_string(), lines.map(str::to_owned).collect()));
        }
    }
    slides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use tempfile::tempdir;

    fn context_in(dir: &Path) -> TaskContext {
        let mut config = AppConfig::default();
        config.paths.documents_output = dir.join("docs");
        config.paths.presentations_output = dir.join("slides");
        TaskContext { config, llm: None }
    }

    #[test]
    fn document_body_has_header_separator_and_trimmed_content() {
        let body = render_document("Informe", "  first line  \n\n second ");
        let separator = "─".repeat(50);
        let mut lines = body.lines();
        assert_eq!(lines.next(), Some("Informe"));
        assert!(lines.next().unwrap().starts_with("Generado el: "));
        assert_eq!(lines.next(), Some(separator.as_str()));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("first line"));
        assert_eq!(lines.next(), Some("second"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn document_defaults_filename_and_enforces_extension() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        let result = generate_document(&ctx, "Informe", "body", None).unwrap();
        let path = match result {
            TaskResult::File(path) => path,
            other => panic!("expected a file result, got {:?}", other),
        };
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("documento_"));
        assert!(name.ends_with(".txt"));
        assert!(path.exists());
    }

    #[test]
    fn document_custom_filename_is_not_double_suffixed() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        let result = generate_document(&ctx, "Informe", "body", Some("notes.txt")).unwrap();
        match result {
            TaskResult::File(path) => assert_eq!(path.file_name().unwrap(), "notes.txt"),
            other => panic!("expected a file result, got {:?}", other),
        }
    }

    #[test]
    fn blank_document_title_is_rejected() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        let err = generate_document(&ctx, "   ", "body", None).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: document title is empty");
    }

    #[test]
    fn presentation_blocks_become_numbered_sections() {
        let content = "Intro\npoint one\npoint two\n\nWrap-up\nfinal point";
        let body = render_presentation("Plan", content);
        assert!(body.contains("1. Intro\n   • point one\n   • point two\n"));
        assert!(body.contains("2. Wrap-up\n   • final point\n"));
        let date_line = body.lines().nth(1).unwrap();
        assert!(date_line.starts_with("Generado el "));
        assert!(!date_line.starts_with("Generado el:"));
    }

    #[test]
    fn presentation_lands_in_its_own_output_dir() {
        let dir = tempdir().unwrap();
        let ctx = context_in(dir.path());
        let result = generate_presentation(&ctx, "Plan", "Solo\nuno", Some("deck")).unwrap();
        match result {
            TaskResult::File(path) => {
                assert!(path.starts_with(&ctx.config.paths.presentations_output));
                assert_eq!(path.file_name().unwrap(), "deck.txt");
                let written = fs::read_to_string(&path).unwrap();
                assert!(written.contains("1. Solo"));
            }
            other => panic!("expected a file result, got {:?}", other),
        }
    }
}
