//! End-to-end extraction flow over the public API: scan a message, classify
//! the link, build a record, attach resolved metadata.

use chatlinks::{
    INVALID_HANDLE, LinkCategory, LinkPatternConfig, LinkRecord, ResourceRef,
    extract_contact_link, extract_service_link, is_contact_link, is_file_link,
    parse_contact_handle,
};

#[test]
fn message_without_urls_yields_nothing() {
    let message = "lunch at noon? bring the slides please";
    assert_eq!(extract_service_link(message), None);
    assert_eq!(extract_contact_link(message), None);
}

#[test]
fn file_link_extracted_and_wrapped_into_record() {
    let message = "here you go: https://mega.nz/file/q1w2e3#decryptkey enjoy";
    let link = extract_service_link(message).expect("file link");
    assert!(is_file_link(&link));

    // The rendering layer resolves the node and builds the record.
    let resource = ResourceRef {
        handle: 77,
        name: "slides.key".into(),
        size: Some(20_480),
    };
    let record = LinkRecord::new_file(&link, resource);
    assert_eq!(record.url(), link);
    assert_eq!(record.server(), Some("mega.nz"));
    assert!(record.is_file());
    assert!(!record.is_chat());
}

#[test]
fn earlier_folder_link_wins_over_later_file_link() {
    let message = "album https://mega.nz/folder/ph0t0s#k and doc https://mega.nz/file/d0c#k2";
    assert_eq!(
        extract_service_link(message),
        Some("https://mega.nz/folder/ph0t0s#k".to_string())
    );
}

#[test]
fn chat_link_becomes_chat_record_after_resolution() {
    let message = "join here https://mega.nz/chat/r00m#roomkey";
    let link = extract_service_link(message).expect("chat link");
    let record = LinkRecord::new_chat(&link, "Design sync", 12);
    assert!(record.is_chat());
    assert_eq!(record.title(), Some("Design sync"));
    assert_eq!(record.participants(), Some(12));
}

#[test]
fn contact_link_parses_to_a_handle() {
    let message = "add me: https://mega.nz/C!abcd1234";
    let link = extract_contact_link(message).expect("contact link");
    assert!(is_contact_link(&link));
    assert_ne!(parse_contact_handle(&link), INVALID_HANDLE);
}

#[test]
fn contact_parse_without_marker_is_invalid() {
    assert_eq!(
        parse_contact_handle("https://mega.nz/nopmarker"),
        INVALID_HANDLE
    );
}

#[test]
fn percent_encoded_legacy_link_is_decoded_before_matching() {
    let message = "old style https://mega.nz/%23!legacy!key works too";
    assert_eq!(
        extract_service_link(message),
        Some("https://mega.nz/#!legacy!key".to_string())
    );
}

#[test]
fn configured_pattern_sets_classify_custom_domains() {
    let config: LinkPatternConfig = toml::from_str(
        r#"
        file = ["^https://drive\\.corp\\.example/f/.+$"]
        folder = ["^https://drive\\.corp\\.example/d/.+$"]
        chat = ["^https://talk\\.corp\\.example/room/.+$"]
        contact = ["^https://talk\\.corp\\.example/C!.+$"]
        "#,
    )
    .expect("valid config");
    let sets = config.compile().expect("compiles");

    let message = "ping me in https://talk.corp.example/room/standup";
    assert_eq!(
        sets.extract_service_link(message),
        Some("https://talk.corp.example/room/standup".to_string())
    );
    assert_eq!(
        sets.classify("https://drive.corp.example/f/abc"),
        Some(LinkCategory::File)
    );
    // Default-grammar links mean nothing to a custom deployment.
    assert_eq!(sets.extract_service_link("https://mega.nz/file/abc#key"), None);
}
