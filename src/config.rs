//! Externally configured link pattern sets.
//!
//! The recognized URL grammar is configuration, not logic: deployments point
//! the classifier at their own domains by overriding the per-category pattern
//! lists. The defaults carry the service's built-in grammar.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::links::patterns::{
    CHAT_LINK_PATTERNS, CONTACT_LINK_PATTERNS, FILE_LINK_PATTERNS, FOLDER_LINK_PATTERNS,
    PatternSet, PatternSets,
};

/// Per-category regular-expression lists, deserializable from config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPatternConfig {
    pub file: Vec<String>,
    pub folder: Vec<String>,
    pub chat: Vec<String>,
    pub contact: Vec<String>,
}

impl Default for LinkPatternConfig {
    fn default() -> Self {
        let owned = |patterns: &[&str]| patterns.iter().map(ToString::to_string).collect();
        Self {
            file: owned(FILE_LINK_PATTERNS),
            folder: owned(FOLDER_LINK_PATTERNS),
            chat: owned(CHAT_LINK_PATTERNS),
            contact: owned(CONTACT_LINK_PATTERNS),
        }
    }
}

impl LinkPatternConfig {
    /// Compile into ready-to-use pattern sets.
    pub fn compile(&self) -> Result<PatternSets> {
        Ok(PatternSets::new(
            PatternSet::compile(&self.file)?,
            PatternSet::compile(&self.folder)?,
            PatternSet::compile(&self.chat)?,
            PatternSet::compile(&self.contact)?,
        ))
    }
}
