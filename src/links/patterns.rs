//! Per-category URL pattern sets.
//!
//! Each link category accepts several URL forms (the service changed its link
//! grammar over time and serves two domains), so a category is an ordered list
//! of compiled patterns and a candidate matches the category when it matches
//! any of them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LinkError, Result};

/// Link categories recognized in message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkCategory {
    File,
    Folder,
    Chat,
    Contact,
}

/// Accepted URL forms for file links: legacy `#!` fragment and current
/// `/file/` path, on both service domains.
pub(crate) const FILE_LINK_PATTERNS: &[&str] = &[
    r"^https://mega\.co\.nz/#!.+$",
    r"^https://mega\.nz/#!.+$",
    r"^https://mega\.co\.nz/file/.+$",
    r"^https://mega\.nz/file/.+$",
];

/// Accepted URL forms for folder links: legacy `#F!` fragment and current
/// `/folder/` path.
pub(crate) const FOLDER_LINK_PATTERNS: &[&str] = &[
    r"^https://mega\.co\.nz/#F!.+$",
    r"^https://mega\.nz/#F!.+$",
    r"^https://mega\.co\.nz/folder/.+$",
    r"^https://mega\.nz/folder/.+$",
];

pub(crate) const CHAT_LINK_PATTERNS: &[&str] = &[
    r"^https://mega\.co\.nz/chat/.+$",
    r"^https://mega\.nz/chat/.+$",
];

/// Contact links carry a `C!`-prefixed base64 user handle.
pub(crate) const CONTACT_LINK_PATTERNS: &[&str] = &[
    r"^https://mega\.co\.nz/C!.+$",
    r"^https://mega\.nz/C!.+$",
];

/// An ordered set of compiled patterns for one category.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<Regex>,
}

impl PatternSet {
    pub(crate) fn compile<S: AsRef<str>>(exprs: &[S]) -> Result<Self> {
        let patterns = exprs
            .iter()
            .map(|expr| {
                Regex::new(expr.as_ref()).map_err(|source| LinkError::Pattern {
                    pattern: expr.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// True when `url` matches any pattern in the set. Patterns are tested in
    /// order with early exit.
    pub fn is_match(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(url))
    }
}

/// The category → pattern-set table, compiled once.
#[derive(Debug, Clone)]
pub struct PatternSets {
    file: PatternSet,
    folder: PatternSet,
    chat: PatternSet,
    contact: PatternSet,
}

impl PatternSets {
    pub(crate) fn new(
        file: PatternSet,
        folder: PatternSet,
        chat: PatternSet,
        contact: PatternSet,
    ) -> Self {
        Self {
            file,
            folder,
            chat,
            contact,
        }
    }

    pub fn set(&self, category: LinkCategory) -> &PatternSet {
        match category {
            LinkCategory::File => &self.file,
            LinkCategory::Folder => &self.folder,
            LinkCategory::Chat => &self.chat,
            LinkCategory::Contact => &self.contact,
        }
    }

    pub fn matches(&self, category: LinkCategory, url: &str) -> bool {
        self.set(category).is_match(url)
    }
}

static DEFAULT_SETS: LazyLock<PatternSets> = LazyLock::new(|| {
    PatternSets::new(
        PatternSet::compile(FILE_LINK_PATTERNS).expect("built-in file patterns"),
        PatternSet::compile(FOLDER_LINK_PATTERNS).expect("built-in folder patterns"),
        PatternSet::compile(CHAT_LINK_PATTERNS).expect("built-in chat patterns"),
        PatternSet::compile(CONTACT_LINK_PATTERNS).expect("built-in contact patterns"),
    )
});

/// The process-wide default pattern sets, compiled lazily and shared.
pub fn defaults() -> &'static PatternSets {
    &DEFAULT_SETS
}
