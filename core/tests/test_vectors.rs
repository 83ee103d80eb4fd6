//! Verify URL assembly against the JSON test vectors in `test-vectors/`.
//!
//! Segments in the vectors are arbitrary JSON scalars; strings are used
//! as-is and everything else through its JSON rendering, which matches
//! `Display` for numbers and booleans.

use http_caller::assemble;

fn segment_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[test]
fn assemble_test_vectors() {
    let raw = include_str!("../../test-vectors/assemble.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let host = vectors["host"].as_str().unwrap();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();
        let segments: Vec<String> = case["segments"]
            .as_array()
            .unwrap()
            .iter()
            .map(segment_text)
            .collect();
        let expected = case["expected"].as_str().unwrap();

        assert_eq!(assemble(host, path, &segments), expected, "{name}");
    }
}

#[test]
fn appending_segments_extends_the_bare_url() {
    let raw = include_str!("../../test-vectors/assemble.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let host = vectors["host"].as_str().unwrap();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = case["path"].as_str().unwrap();
        let bare = assemble(host, path, std::iter::empty::<&str>());
        if bare.is_empty() {
            continue;
        }
        let segments: Vec<String> = case["segments"]
            .as_array()
            .unwrap()
            .iter()
            .map(segment_text)
            .collect();
        let expected: String = segments.iter().fold(bare, |url, s| format!("{url}/{s}"));
        assert_eq!(assemble(host, path, &segments), expected, "{name}");
    }
}
