use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What one invocation hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Vowels found in this input.
    #[serde(rename = "Count")]
    pub count: u32,
    /// Cumulative count after this input.
    #[serde(rename = "Total")]
    pub total: u32,
    /// Alphabet used for this input.
    #[serde(rename = "Vowels")]
    pub vowels: String,
}

impl Report {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
