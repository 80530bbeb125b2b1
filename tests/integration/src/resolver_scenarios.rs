//! End-to-end resolution scenarios over raw index documents.
//!
//! These tests exercise the complete flow a CLI front-end drives: parse the
//! published JSON index, resolve a request against it, and hand the selected
//! download URL and digest to an installer.

use ext_index::IndexDocument;
use ext_resolver::{
    Error, HostVersionProbe, MirrorPolicy, ResolutionRequest, Resolver, available_releases,
};
use pretty_assertions::assert_eq;
use semver::Version;

const TWO_RELEASES: &str = r#"{
    "foo": [
        {
            "filename": "foo-1.0.0-py3-none-any.whl",
            "downloadUrl": "http://x/foo-1.0.0.whl",
            "metadata": {"version": "1.0.0"}
        },
        {
            "filename": "foo-2.0.0-py3-none-any.whl",
            "downloadUrl": "http://x/foo-2.0.0.whl",
            "metadata": {"version": "2.0.0"}
        }
    ]
}"#;

fn resolver() -> Resolver<HostVersionProbe> {
    Resolver::new(HostVersionProbe::new(Version::new(2, 5, 0)))
}

fn message(err: Error) -> String {
    match err {
        Error::NoCandidates { message } => message,
        other => panic!("expected NoCandidates, got: {other:?}"),
    }
}

#[test]
fn latest_release_wins() {
    let index = IndexDocument::from_json_str(TWO_RELEASES).unwrap();
    let resolved = resolver()
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap();
    assert_eq!(resolved.download_url, "http://x/foo-2.0.0.whl");
    assert_eq!(resolved.sha256_digest, None);
}

#[test]
fn pinned_version_not_published() {
    let index = IndexDocument::from_json_str(TWO_RELEASES).unwrap();
    let err = resolver()
        .resolve(&ResolutionRequest::pinned("foo", "9.9.9"), &index)
        .unwrap_err();
    assert_eq!(message(err), "Version '9.9.9' not found for extension 'foo'");
}

#[test]
fn empty_index_knows_nothing() {
    let index = IndexDocument::from_json_str("{}").unwrap();
    let err = resolver()
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap_err();
    assert_eq!(message(err), "No extension found with name 'foo'");
}

#[test]
fn upgrade_flow_over_published_document() {
    let raw = r#"{
        "query-kit": [
            {
                "filename": "query_kit-0.9.0-py2.py3-none-any.whl",
                "downloadUrl": "https://releases.example.com/query_kit-0.9.0-py2.py3-none-any.whl",
                "sha256Digest": "9f2c4e",
                "metadata": {"version": "0.9.0"}
            },
            {
                "filename": "query_kit-1.1.0-py2.py3-none-any.whl",
                "downloadUrl": "https://releases.example.com/query_kit-1.1.0-py2.py3-none-any.whl",
                "sha256Digest": "77ab01",
                "metadata": {"version": "1.1.0", "summary": "Query helpers"}
            },
            {
                "filename": "query_kit-1.2.0-cp39-cp39-manylinux1_x86_64.whl",
                "downloadUrl": "https://releases.example.com/query_kit-1.2.0-cp39-cp39-manylinux1_x86_64.whl",
                "metadata": {"version": "1.2.0"}
            }
        ]
    }"#;
    let index = IndexDocument::from_json_str(raw).unwrap();

    // 1.2.0 is newer but platform-bound, so the upgrade lands on 1.1.0.
    let resolved = resolver()
        .resolve(&ResolutionRequest::upgrade_from("query-kit", "0.9.0"), &index)
        .unwrap();
    assert_eq!(
        resolved.download_url,
        "https://releases.example.com/query_kit-1.1.0-py2.py3-none-any.whl"
    );
    assert_eq!(resolved.sha256_digest.as_deref(), Some("77ab01"));

    // Already on 1.1.0: the platform-bound 1.2.0 never counts as an upgrade.
    let err = resolver()
        .resolve(&ResolutionRequest::upgrade_from("query-kit", "1.1.0"), &index)
        .unwrap_err();
    assert_eq!(
        message(err),
        "Latest version of 'query-kit' is already installed."
    );
}

#[test]
fn host_gate_explains_newest_rejected_release() {
    let raw = r#"{
        "foo": [
            {
                "filename": "foo-2.0.0-py3-none-any.whl",
                "downloadUrl": "http://x/foo-2.0.0.whl",
                "metadata": {"version": "2.0.0", "minHostVersion": "2.6.0"}
            },
            {
                "filename": "foo-3.0.0-py3-none-any.whl",
                "downloadUrl": "http://x/foo-3.0.0.whl",
                "metadata": {"version": "3.0.0", "minHostVersion": "3.0.0"}
            }
        ]
    }"#;
    let index = IndexDocument::from_json_str(raw).unwrap();
    let err = resolver()
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap_err();
    assert_eq!(
        message(err),
        "Extension 'foo' version 3.0.0 requires a host version of at least 3.0.0; host version is 2.5.0."
    );
}

#[test]
fn old_host_still_resolves_older_release() {
    let raw = r#"{
        "foo": [
            {
                "filename": "foo-1.0.0-py3-none-any.whl",
                "downloadUrl": "http://x/foo-1.0.0.whl",
                "metadata": {"version": "1.0.0", "maxHostVersion": "2.9.9"}
            },
            {
                "filename": "foo-2.0.0-py3-none-any.whl",
                "downloadUrl": "http://x/foo-2.0.0.whl",
                "metadata": {"version": "2.0.0", "minHostVersion": "3.0.0"}
            }
        ]
    }"#;
    let index = IndexDocument::from_json_str(raw).unwrap();
    let resolved = resolver()
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap();
    assert_eq!(resolved.download_url, "http://x/foo-1.0.0.whl");
}

#[test]
fn mirror_endpoint_rewrites_selected_url() {
    let index = IndexDocument::from_json_str(TWO_RELEASES).unwrap();
    let resolved = resolver()
        .with_mirror(MirrorPolicy::new(
            Some("https://mirror.example.com/wheels".to_string()),
            false,
        ))
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap();
    assert_eq!(
        resolved.download_url,
        "https://mirror.example.com/wheels/foo-2.0.0-py3-none-any.whl"
    );
}

#[test]
fn caller_index_override_keeps_published_url() {
    let index = IndexDocument::from_json_str(TWO_RELEASES).unwrap();
    let resolved = resolver()
        .with_mirror(MirrorPolicy::new(
            Some("https://mirror.example.com/wheels".to_string()),
            true,
        ))
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap();
    assert_eq!(resolved.download_url, "http://x/foo-2.0.0.whl");
}

#[test]
fn listing_matches_resolution_view() {
    let raw = r#"{
        "foo": [
            {
                "filename": "foo-1.0.0-py3-none-any.whl",
                "downloadUrl": "http://x/foo-1.0.0.whl",
                "metadata": {"version": "1.0.0"}
            },
            {
                "filename": "foo-2.0.0b1-py3-none-any.whl",
                "downloadUrl": "http://x/foo-2.0.0b1.whl",
                "metadata": {"version": "2.0.0-b1", "isPreview": true, "minHostVersion": "9.0.0"}
            }
        ]
    }"#;
    let index = IndexDocument::from_json_str(raw).unwrap();
    let probe = HostVersionProbe::new(Version::new(2, 5, 0));

    let rows = available_releases("foo", &index, &probe).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].version, "2.0.0-b1");
    assert!(rows[0].preview);
    assert!(!rows[0].compatible);
    assert_eq!(rows[1].version, "1.0.0");
    assert!(rows[1].compatible);

    // The incompatible preview never resolves; the stable release does.
    let resolved = resolver()
        .resolve(&ResolutionRequest::latest("foo"), &index)
        .unwrap();
    assert_eq!(resolved.download_url, "http://x/foo-1.0.0.whl");
}

#[test]
fn resolution_does_not_mutate_the_index() {
    let index = IndexDocument::from_json_str(TWO_RELEASES).unwrap();
    let snapshot = index.clone();
    let _ = resolver().resolve(&ResolutionRequest::latest("foo"), &index);
    let _ = resolver().resolve(&ResolutionRequest::pinned("foo", "9.9.9"), &index);
    assert_eq!(index, snapshot);
}
