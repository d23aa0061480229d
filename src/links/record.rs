//! The resolved-link value object handed to the message-rendering layer.

use serde::{Deserialize, Serialize};
use url::Url;

use super::handle::Handle;

/// Resolved node metadata returned by the external resolution service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub handle: Handle,
    pub name: String,
    pub size: Option<u64>,
}

/// Category-specific link metadata. Exactly one shape per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinkPayload {
    File {
        resource: ResourceRef,
    },
    Folder {
        name: String,
        /// Listing summary, e.g. "3 files, 2 folders".
        content: String,
    },
    Chat {
        title: String,
        participants: u64,
    },
}

/// A service link paired with its resolved metadata, built per rendered
/// message and discarded with the UI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    url: String,
    server: Option<String>,
    payload: LinkPayload,
    // Settable independently of the payload; initialized to match it.
    chat: bool,
}

impl LinkRecord {
    pub fn new_file(url: impl Into<String>, resource: ResourceRef) -> Self {
        Self::new(url.into(), LinkPayload::File { resource })
    }

    pub fn new_folder(
        url: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(
            url.into(),
            LinkPayload::Folder {
                name: name.into(),
                content: content.into(),
            },
        )
    }

    pub fn new_chat(url: impl Into<String>, title: impl Into<String>, participants: u64) -> Self {
        Self::new(
            url.into(),
            LinkPayload::Chat {
                title: title.into(),
                participants,
            },
        )
    }

    fn new(url: String, payload: LinkPayload) -> Self {
        let server = authority_of(&url);
        let chat = matches!(payload, LinkPayload::Chat { .. });
        Self {
            url,
            server,
            payload,
            chat,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the stored link text. The server field is left untouched;
    /// correct it separately via [`set_server`](Self::set_server).
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// Host portion of the link, when the URL parses.
    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server = Some(server.into());
    }

    pub fn payload(&self) -> &LinkPayload {
        &self.payload
    }

    pub fn is_file(&self) -> bool {
        matches!(self.payload, LinkPayload::File { .. })
    }

    pub fn is_chat(&self) -> bool {
        self.chat
    }

    pub fn set_chat(&mut self, chat: bool) {
        self.chat = chat;
    }

    pub fn resource(&self) -> Option<&ResourceRef> {
        match &self.payload {
            LinkPayload::File { resource } => Some(resource),
            _ => None,
        }
    }

    pub fn folder_name(&self) -> Option<&str> {
        match &self.payload {
            LinkPayload::Folder { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn folder_content(&self) -> Option<&str> {
        match &self.payload {
            LinkPayload::Folder { content, .. } => Some(content),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.payload {
            LinkPayload::Chat { title, .. } => Some(title),
            _ => None,
        }
    }

    pub fn participants(&self) -> Option<u64> {
        match &self.payload {
            LinkPayload::Chat { participants, .. } => Some(*participants),
            _ => None,
        }
    }

    /// Update the resolved resource on a file record. No effect on other
    /// variants.
    pub fn set_resource(&mut self, new: ResourceRef) {
        if let LinkPayload::File { resource } = &mut self.payload {
            *resource = new;
        }
    }

    /// Update the listing summary on a folder record. No effect on other
    /// variants.
    pub fn set_folder_content(&mut self, new: impl Into<String>) {
        if let LinkPayload::Folder { content, .. } = &mut self.payload {
            *content = new.into();
        }
    }

    /// Update the title on a chat record. No effect on other variants.
    pub fn set_title(&mut self, new: impl Into<String>) {
        if let LinkPayload::Chat { title, .. } = &mut self.payload {
            *title = new.into();
        }
    }

    /// Update the participant count on a chat record. No effect on other
    /// variants.
    pub fn set_participants(&mut self, new: u64) {
        if let LinkPayload::Chat { participants, .. } = &mut self.payload {
            *participants = new;
        }
    }
}

fn authority_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
