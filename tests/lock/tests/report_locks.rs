//! Golden locks for the report artifact: canonical bytes, digest
//! stability, and fail-closed directory verification.

use lock_tests::canonical_report::{canonical_demo_report, THREE_DISK_MOVES};
use primer_harness::bundle_dir::{
    read_report_dir, write_report_dir, ReportDirReadError, DIGEST_FILENAME, REPORT_FILENAME,
};
use primer_harness::report::{report_digest, ScenarioOutcomeV1};

#[test]
fn canonical_bytes_and_digest_are_stable_across_builds() {
    let (bytes_a, digest_a) = report_digest(&canonical_demo_report()).unwrap();
    let (bytes_b, digest_b) = report_digest(&canonical_demo_report()).unwrap();
    assert_eq!(bytes_a, bytes_b, "canonical bytes must be bit-stable");
    assert_eq!(digest_a, digest_b);
}

#[test]
fn canonical_bytes_open_with_the_sorted_classic_hit() {
    let (bytes, _) = report_digest(&canonical_demo_report()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(
        text.starts_with(
            r#"{"outcomes":[{"index":2,"kind":"search","name":"classic_hit","outcome":"found","target":5},"#
        ),
        "canonical prefix drifted: {}",
        &text[..text.len().min(120)]
    );
}

#[test]
fn report_embeds_the_pinned_three_disk_sequence() {
    let report = canonical_demo_report();
    let tower = report
        .outcomes
        .iter()
        .find_map(|o| match o {
            ScenarioOutcomeV1::Hanoi { name, moves, .. } if name.as_str() == "classic_three_disks" => {
                Some(moves.clone())
            }
            _ => None,
        })
        .expect("built-in plan includes the three-disk tower");
    assert_eq!(tower, THREE_DISK_MOVES);
}

#[test]
fn report_directory_round_trips_and_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let report = canonical_demo_report();

    let written_digest = write_report_dir(dir.path(), &report).unwrap();
    let (read_back, read_digest) = read_report_dir(dir.path()).unwrap();

    assert_eq!(report, read_back);
    assert_eq!(written_digest, read_digest);

    let stored = std::fs::read_to_string(dir.path().join(DIGEST_FILENAME)).unwrap();
    assert_eq!(stored, written_digest.as_str());
}

#[test]
fn report_json_parses_as_plain_json() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(dir.path(), &canonical_demo_report()).unwrap();

    let bytes = std::fs::read(dir.path().join(REPORT_FILENAME)).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["schema_version"], "1.0");
    assert_eq!(value["scenario_count"], 6);
    assert_eq!(value["outcomes"].as_array().map(Vec::len), Some(6));
}

#[test]
fn single_byte_tamper_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(dir.path(), &canonical_demo_report()).unwrap();

    let path = dir.path().join(REPORT_FILENAME);
    let mut bytes = std::fs::read(&path).unwrap();
    let last = bytes.len() - 2;
    bytes[last] = bytes[last].wrapping_add(1);
    std::fs::write(&path, &bytes).unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(
        matches!(err, ReportDirReadError::DigestMismatch { .. }),
        "expected DigestMismatch, got {err:?}"
    );
}

#[test]
fn missing_report_file_is_fail_closed() {
    let dir = tempfile::tempdir().unwrap();
    write_report_dir(dir.path(), &canonical_demo_report()).unwrap();
    std::fs::remove_file(dir.path().join(REPORT_FILENAME)).unwrap();

    let err = read_report_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        ReportDirReadError::MissingFile {
            filename: REPORT_FILENAME
        }
    ));
}
