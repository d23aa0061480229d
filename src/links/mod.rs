pub mod classifier;
pub mod handle;
pub mod patterns;
pub mod record;
pub(crate) mod scanner;

pub use classifier::{
    extract_contact_link, extract_service_link, is_chat_link, is_contact_link, is_file_link,
    is_folder_link, parse_contact_handle,
};
pub use handle::{Handle, INVALID_HANDLE};
pub use patterns::{LinkCategory, PatternSet, PatternSets};
pub use record::{LinkPayload, LinkRecord, ResourceRef};
