#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Classification and extraction of cloud-service links embedded in chat
//! message text.
//!
//! A message body may carry file, folder, chat-room, or contact links in the
//! service's URL grammar. [`extract_service_link`] finds the first one in scan
//! order; [`LinkRecord`] holds the result together with metadata a resolution
//! service attaches later. Everything here is stateless and safe to call from
//! any thread.

pub mod config;
pub mod error;
pub mod links;

pub use config::LinkPatternConfig;
pub use error::{LinkError, Result};
pub use links::classifier::{
    extract_contact_link, extract_service_link, is_chat_link, is_contact_link, is_file_link,
    is_folder_link, parse_contact_handle,
};
pub use links::handle::{Handle, INVALID_HANDLE};
pub use links::patterns::{LinkCategory, PatternSets};
pub use links::record::{LinkPayload, LinkRecord, ResourceRef};
