use crate::core::{Coordinator, LogLevel, Sink};
use crate::tasks::{TaskContext, TaskKind, TextOp};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Editor, Input, Select};
use std::sync::Arc;
use tracing::warn;

/// How many recent log entries the menu header shows
const LOG_TAIL_LINES: usize = 5;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    GenerateDocument,
    GeneratePresentation,
    ScrapeWebsite,
    TextAssistant,
    ClearLog,
    SaveLog,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::GenerateDocument => "Generate document",
            MenuAction::GeneratePresentation => "Generate presentation",
            MenuAction::ScrapeWebsite => "Scrape website",
            MenuAction::TextAssistant => "Text assistant",
            MenuAction::ClearLog => "Clear log",
            MenuAction::SaveLog => "Save log",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Interactive application loop.
///
/// Owns the coordinator, the sink and the shared task context. The menu and
/// the event receive loop both run here, on the interactive task, which is
/// the only place the sink is ever mutated.
#[derive(Debug)]
pub struct App {
    coordinator: Coordinator,
    sink: Sink,
    ctx: Arc<TaskContext>,
}

impl App {
    pub fn new(coordinator: Coordinator, sink: Sink, ctx: Arc<TaskContext>) -> Self {
        Self {
            coordinator,
            sink,
            ctx,
        }
    }

    /// Runs the menu loop until the user quits.
    ///
    /// Each submitted task is followed to its terminal outcome before the
    /// menu is shown again, so at most one task is ever in flight.
    pub async fn run(&mut self) {
        self.welcome();
        loop {
            self.draw_header();
            let actions = self.available_actions();
            let choice = Self::pick("Choose a tool", &action_labels(&actions));
            match actions[choice] {
                MenuAction::Quit => {
                    self.coordinator.shutdown().await;
                    println!("{}", "\n👋 Goodbye!".bold().cyan());
                    break;
                }
                MenuAction::ClearLog => {
                    self.sink.clear();
                    self.sink.append("Log cleared", LogLevel::Info);
                }
                MenuAction::SaveLog => self.save_log(),
                action => {
                    self.sink.append(
                        &format!("Tool selected: {}", action.label()),
                        LogLevel::Info,
                    );
                    if let Some(kind) = self.gather(action) {
                        let label = kind.label();
                        let task = kind.into_future(self.ctx.clone());
                        self.coordinator.submit(label, task, &mut self.sink).await;
                        self.follow().await;
                    }
                }
            }
        }
    }

    /// Routes worker events until the active task settles.
    ///
    /// Runs on the interactive task; every outcome passes through the
    /// coordinator so stale generations are discarded in one place.
    async fn follow(&mut self) {
        while self.coordinator.is_busy() {
            match self.coordinator.recv().await {
                Some(event) => self.coordinator.route(event, &mut self.sink),
                None => break,
            }
        }
    }

    /// Menu entries allowed by the tools configuration.
    ///
    /// The assistant entry also needs a usable LLM backend; without one it
    /// is hidden rather than left to fail on every use.
    fn available_actions(&self) -> Vec<MenuAction> {
        let tools = &self.ctx.config.tools;
        let mut actions = Vec::new();
        if tools.documents {
            actions.push(MenuAction::GenerateDocument);
        }
        if tools.presentations {
            actions.push(MenuAction::GeneratePresentation);
        }
        if tools.scraper {
            actions.push(MenuAction::ScrapeWebsite);
        }
        if tools.assistant && self.ctx.llm.is_some() {
            actions.push(MenuAction::TextAssistant);
        }
        actions.extend([MenuAction::ClearLog, MenuAction::SaveLog, MenuAction::Quit]);
        actions
    }

    /// Collects the parameters for the chosen tool, or refuses the
    /// submission when required text is missing.
    fn gather(&mut self, action: MenuAction) -> Option<TaskKind> {
        match action {
            MenuAction::GenerateDocument => {
                let title = Self::input("Document title");
                let content = self.require_text(Self::multiline("Document content"))?;
                Some(TaskKind::GenerateDocument {
                    title,
                    content,
                    filename: None,
                })
            }
            MenuAction::GeneratePresentation => {
                let title = Self::input("Presentation title");
                let content = self.require_text(Self::multiline(
                    "Slides (blank line between slides, first line of each is the heading)",
                ))?;
                Some(TaskKind::GeneratePresentation {
                    title,
                    content,
                    filename: None,
                })
            }
            MenuAction::ScrapeWebsite => {
                let url = self.require_text(Self::input("URL to scrape"))?;
                let selector = Self::input("CSS selector (leave empty for a full-page summary)");
                let selector = if selector.trim().is_empty() {
                    None
                } else {
                    Some(selector)
                };
                Some(TaskKind::ScrapeWebsite { url, selector })
            }
            MenuAction::TextAssistant => self.gather_assistant(),
            _ => None,
        }
    }

    fn gather_assistant(&mut self) -> Option<TaskKind> {
        let mut labels: Vec<&str> = TextOp::ALL.iter().map(TextOp::label).collect();
        labels.push("Free-form query");
        let choice = Self::pick("Assistant operation", &labels);
        if choice < TextOp::ALL.len() {
            let text = self.require_text(Self::multiline("Text to process"))?;
            Some(TaskKind::ProcessText {
                op: TextOp::ALL[choice],
                text,
            })
        } else {
            let prompt = self.require_text(Self::input("Your question"))?;
            Some(TaskKind::QueryLlm { prompt })
        }
    }

    /// Refuses blank input with a warning entry instead of submitting
    fn require_text(&mut self, value: String) -> Option<String> {
        if value.trim().is_empty() {
            self.sink
                .append("Please enter some text to process", LogLevel::Warning);
            None
        } else {
            Some(value)
        }
    }

    fn save_log(&mut self) {
        if self.sink.log().is_empty() {
            self.sink
                .append("Log is empty, nothing to save", LogLevel::Warning);
            return;
        }
        let content = self.sink.rendered_log();
        match self.sink.save_to_file(&content, None) {
            Ok(path) => self.sink.append(
                &format!("Log saved to: {}", path.display()),
                LogLevel::Success,
            ),
            Err(e) => self
                .sink
                .append(&format!("Could not save log: {}", e), LogLevel::Error),
        }
    }

    /// Displays welcome message to the user
    fn welcome(&self) {
        Self::clear_screen();
        let app = &self.ctx.config.app;
        println!(
            "{}",
            format!("\n🖋️  Welcome to {} v{}!", app.name, app.version)
                .bold()
                .cyan()
        );
        println!(
            "{}",
            "Documents, presentations, web scraping and a text assistant.".yellow()
        );
    }

    /// Prints the status line and the most recent log entries
    fn draw_header(&mut self) {
        println!();
        self.sink.refresh_status();
        let entries = self.sink.log();
        let skip = entries.len().saturating_sub(LOG_TAIL_LINES);
        for entry in entries.iter().skip(skip) {
            println!("  {}", entry.render());
        }
    }

    fn pick(prompt: &str, labels: &[&str]) -> usize {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(labels)
            .default(0)
            .interact()
            .expect("Failed to read menu choice")
    }

    fn input(prompt: &str) -> String {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .expect("Failed to read input")
    }

    /// Multi-line input through the user's editor, falling back to a
    /// single-line prompt when no editor is available
    fn multiline(prompt: &str) -> String {
        println!("{}", format!("{} (your editor will open)", prompt).yellow());
        match Editor::new().edit("") {
            Ok(Some(text)) => text,
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Could not open an editor: {}", e);
                Self::input(prompt)
            }
        }
    }

    /// Clears the terminal screen
    fn clear_screen() {
        print!("\x1B[2J\x1B[1;1H");
    }
}

fn action_labels(actions: &[MenuAction]) -> Vec<&'static str> {
    actions.iter().map(MenuAction::label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::{LogLevel, TaskResult};
    use crate::llm::LlmClient;
    use crate::ui::testing::RecordingFrontend;
    use futures::FutureExt;
    use std::path::PathBuf;

    fn test_app(config: AppConfig, with_llm: bool) -> App {
        let llm = with_llm.then(|| LlmClient::new(&config.llm).unwrap());
        let sink = Sink::new(
            100,
            PathBuf::from("logs"),
            Box::new(RecordingFrontend::default()),
        );
        App::new(
            Coordinator::new(),
            sink,
            Arc::new(TaskContext { config, llm }),
        )
    }

    #[test]
    fn menu_hides_disabled_tools() {
        let mut config = AppConfig::default();
        config.tools.scraper = false;
        let app = test_app(config, false);
        let actions = app.available_actions();
        assert!(!actions.contains(&MenuAction::ScrapeWebsite));
        assert!(actions.contains(&MenuAction::GenerateDocument));
        assert!(actions.ends_with(&[MenuAction::ClearLog, MenuAction::SaveLog, MenuAction::Quit]));
    }

    #[test]
    fn assistant_entry_needs_a_backend() {
        let without = test_app(AppConfig::default(), false);
        assert!(!without
            .available_actions()
            .contains(&MenuAction::TextAssistant));

        let with = test_app(AppConfig::default(), true);
        assert!(with.available_actions().contains(&MenuAction::TextAssistant));
    }

    #[test]
    fn blank_input_is_refused_with_a_warning() {
        let mut app = test_app(AppConfig::default(), false);
        assert_eq!(app.require_text("   ".to_string()), None);
        let warning = app.sink.log().iter().last().cloned().unwrap();
        assert_eq!(warning.message, "Please enter some text to process");
        assert_eq!(warning.level, LogLevel::Warning);

        assert_eq!(app.require_text("hola".to_string()), Some("hola".into()));
    }

    #[test]
    fn saving_an_empty_log_is_refused() {
        let mut app = test_app(AppConfig::default(), false);
        app.save_log();
        let warning = app.sink.log().iter().last().cloned().unwrap();
        assert_eq!(warning.message, "Log is empty, nothing to save");
        assert_eq!(warning.level, LogLevel::Warning);
    }

    #[tokio::test]
    async fn follow_drains_events_until_the_task_settles() {
        let mut app = test_app(AppConfig::default(), false);
        let task = async { Ok(TaskResult::Text("done".into())) }.boxed();
        app.coordinator.submit("demo", task, &mut app.sink).await;
        assert!(app.coordinator.is_busy());

        app.follow().await;
        assert!(!app.coordinator.is_busy());
        let messages: Vec<String> = app.sink.log().iter().map(|e| e.message.clone()).collect();
        assert!(messages.contains(&"Task completed successfully".to_string()));
    }
}
