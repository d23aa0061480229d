//! Link classification entry points.
//!
//! Extraction scans message text for URL candidates and returns the first one
//! that matches a category. Earlier-positioned URLs win over later ones;
//! within a single candidate the categories are tested in a fixed order
//! (file, folder, chat, then contact). Nothing here errors: malformed input
//! yields `None` or the invalid-handle sentinel.

use super::handle::{self, Handle, INVALID_HANDLE};
use super::patterns::{self, LinkCategory, PatternSets};
use super::scanner;

impl PatternSets {
    /// Classify a single decoded URL, or `None` when it matches no category.
    pub fn classify(&self, url: &str) -> Option<LinkCategory> {
        [
            LinkCategory::File,
            LinkCategory::Folder,
            LinkCategory::Chat,
            LinkCategory::Contact,
        ]
        .into_iter()
        .find(|&category| self.matches(category, url))
    }

    /// Find the first file, folder, or chat link in `text`, decoded.
    pub fn extract_service_link(&self, text: &str) -> Option<String> {
        scanner::scan_decoded(text).into_iter().find(|url| {
            matches!(
                self.classify(url),
                Some(LinkCategory::File | LinkCategory::Folder | LinkCategory::Chat)
            )
        })
    }

    /// Find the first contact link in `text`, decoded.
    ///
    /// Blank input short-circuits to `None` without invoking the scanner.
    pub fn extract_contact_link(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        scanner::scan_decoded(text)
            .into_iter()
            .find(|url| self.matches(LinkCategory::Contact, url))
    }
}

/// [`PatternSets::extract_service_link`] over the shared default patterns.
pub fn extract_service_link(text: &str) -> Option<String> {
    patterns::defaults().extract_service_link(text)
}

/// [`PatternSets::extract_contact_link`] over the shared default patterns.
pub fn extract_contact_link(text: &str) -> Option<String> {
    patterns::defaults().extract_contact_link(text)
}

pub fn is_file_link(url: &str) -> bool {
    patterns::defaults().matches(LinkCategory::File, url)
}

pub fn is_folder_link(url: &str) -> bool {
    patterns::defaults().matches(LinkCategory::Folder, url)
}

pub fn is_chat_link(url: &str) -> bool {
    patterns::defaults().matches(LinkCategory::Chat, url)
}

pub fn is_contact_link(url: &str) -> bool {
    patterns::defaults().matches(LinkCategory::Contact, url)
}

/// Parse the user handle out of a contact link.
///
/// The handle follows the `C!` delimiter as an unpadded base64 token. Returns
/// [`INVALID_HANDLE`] when the delimiter is absent or the token does not
/// decode.
pub fn parse_contact_handle(link: &str) -> Handle {
    match link.split_once("C!") {
        Some((_, token)) => handle::base64_to_handle(token.trim()).unwrap_or_else(|| {
            tracing::debug!(link, "contact link token did not decode to a handle");
            INVALID_HANDLE
        }),
        None => INVALID_HANDLE,
    }
}
