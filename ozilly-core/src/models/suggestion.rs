use serde::{Deserialize, Serialize};

/// The two labeled fields pulled out of a model reply.
///
/// Both default to empty. An empty `name` means the reply could not be
/// parsed; an empty `logo_idea` on its own is still a usable suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub logo_idea: String,
}

impl Suggestion {
    pub fn is_parsed(&self) -> bool {
        !self.name.is_empty()
    }
}
