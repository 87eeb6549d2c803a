//! Prompt construction for the text-generation endpoint.

/// Assistant display name used when none is configured.
pub const DEFAULT_ASSISTANT_NAME: &str = "Ozilly AI";

/// Lead-in of the clause that lists names the model must not reuse.
pub const AVOID_CLAUSE_PREFIX: &str = "Avoid using these names: ";

/// The fixed system message: persona, feedback rules and reply format.
pub fn system_prompt(assistant_name: &str) -> String {
    format!(
        "You are {assistant_name}, a creative and friendly AI that helps users generate unique startup names and logo ideas.

You understand casual language. When users reject ideas using phrases like 'try again' or 'not good', generate a new name and logo for the *same* concept.
When users respond positively, stop suggesting more ideas until a new prompt is given.
Avoid repeating previous suggestions. Be playful, relevant, and brandable.

Always reply in this format:
Startup Name: <name>
Logo Idea: <logo>"
    )
}

/// The user turn: the idea, a blank line, then the avoid clause when there
/// are names to avoid. The result is trimmed, so an empty blacklist leaves
/// just the idea.
pub fn combined_prompt(idea: &str, blacklist: &[String]) -> String {
    let clause = if blacklist.is_empty() {
        String::new()
    } else {
        format!("{AVOID_CLAUSE_PREFIX}{}", blacklist.join(", "))
    };
    format!("{idea}\n\n{clause}").trim().to_string()
}
