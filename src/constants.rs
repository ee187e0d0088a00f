/// System prompt used for every text-processing operation
pub const TEXT_ASSISTANT_SYSTEM_PROMPT: &str = "You are an expert text-processing assistant. Provide clear and useful answers.";

/// Instruction prefix for the analyze operation
pub const ANALYZE_PROMPT: &str =
    "Analyze the following text and provide a detailed summary of its key points:";

/// Instruction prefix for the summarize operation
pub const SUMMARIZE_PROMPT: &str = "Summarize the following text concisely:";

/// Instruction prefix for the translate operation
pub const TRANSLATE_PROMPT: &str = "Translate the following text to Spanish:";

/// Instruction prefix for the improve operation
pub const IMPROVE_PROMPT: &str = "Improve the wording and clarity of the following text:";

/// Instruction prefix for the keyword-extraction operation
pub const EXTRACT_KEYWORDS_PROMPT: &str =
    "Extract the most important keywords from the following text:";
