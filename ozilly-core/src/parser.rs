//! Extraction of the name and logo idea from a model reply.

use crate::models::Suggestion;

pub const NAME_MARKER: &str = "Startup Name:";
pub const LOGO_MARKER: &str = "Logo Idea:";

/// Parse a raw model reply into a [`Suggestion`].
///
/// Each line containing [`NAME_MARKER`] sets the name to the trimmed text
/// after the marker's first occurrence; a line that does not contain it but
/// contains [`LOGO_MARKER`] sets the logo idea the same way. Later lines win.
/// Anything without the markers leaves the fields empty.
pub fn parse(raw: &str) -> Suggestion {
    let mut suggestion = Suggestion::default();

    for line in raw.split(is_line_break) {
        if let Some((_, rest)) = line.split_once(NAME_MARKER) {
            suggestion.name = rest.trim().to_string();
        } else if let Some((_, rest)) = line.split_once(LOGO_MARKER) {
            suggestion.logo_idea = rest.trim().to_string();
        }
    }

    suggestion
}

/// Line boundaries: `\n`, a lone `\r`, and the Unicode line and paragraph
/// separators. `\r\n` yields an extra empty line, which no marker matches.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}
