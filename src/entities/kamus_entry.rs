use serde::{Deserialize, Serialize};

/// One row of the slang dictionary: an informal token and the formal word it
/// rewrites to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KamusEntry {
    pub slang: String,
    pub formal: String,
}

impl KamusEntry {
    pub fn new(slang: &str, formal: &str) -> Self {
        Self {
            slang: slang.to_string(),
            formal: formal.to_string(),
        }
    }
}
