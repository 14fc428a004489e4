use spotlist::utils::{generate_state_param, upload_file_name};

#[test]
fn test_generate_state_param() {
    let state = generate_state_param();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    let state2 = generate_state_param();
    assert_ne!(state, state2);
}

#[test]
fn test_upload_file_name() {
    let name = upload_file_name();

    // Fixed prefix and extension around a random tag
    assert!(name.starts_with("upload-"));
    assert!(name.ends_with(".txt"));

    // Tag should be alphanumeric
    let tag = name
        .strip_prefix("upload-")
        .and_then(|rest| rest.strip_suffix(".txt"))
        .unwrap();
    assert_eq!(tag.len(), 16);
    assert!(tag.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated names should be different
    assert_ne!(name, upload_file_name());
}
