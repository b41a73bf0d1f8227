use filepecker::{
    BinaryDetection, CollectBuilder, OCTET_STREAM, detect_content_type, file_extension,
    format_header, is_binary, normalize_extension, parse_ignore_list, sample_is_binary,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_is_binary_text_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.txt");
    fs::write(&path, "Hello world").unwrap();
    assert!(!is_binary(&path).unwrap());
}
#[test]
fn test_is_binary_null_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.bin");
    fs::write(&path, [0x00, 0x01, 0x02]).unwrap();
    assert!(is_binary(&path).unwrap());
}
#[test]
fn test_is_binary_empty_file_is_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    assert!(!is_binary(&path).unwrap());
}
#[test]
fn test_is_binary_null_late_in_sample() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("late.dat");
    let mut data = "a".repeat(511).into_bytes();
    data.push(0);
    fs::write(&path, data).unwrap();
    assert!(is_binary(&path).unwrap());
}
#[test]
fn test_is_binary_null_after_sample_is_missed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("past.dat");
    let mut data = "a".repeat(512).into_bytes();
    data.push(0);
    fs::write(&path, data).unwrap();
    assert!(!is_binary(&path).unwrap());
}
#[test]
fn test_is_binary_control_bytes_without_null() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ctl.dat");
    fs::write(&path, [0x01, 0x02, 0x03, b'x']).unwrap();
    assert!(is_binary(&path).unwrap());
}
#[test]
fn test_is_binary_missing_file_errors() {
    let dir = tempdir().unwrap();
    assert!(is_binary(&dir.path().join("nope.txt")).is_err());
}
#[test]
fn test_sample_detection_strategies() {
    let control = [0x01, 0x02, 0x03];
    assert!(sample_is_binary(&control, BinaryDetection::Sniff));
    assert!(!sample_is_binary(&control, BinaryDetection::NullByte));
    assert!(sample_is_binary(&[0, 1], BinaryDetection::NullByte));
    assert!(!sample_is_binary(&[0, 1], BinaryDetection::None));
    assert!(!sample_is_binary(&[], BinaryDetection::Sniff));
}
#[test]
fn test_detect_content_type_text_and_markup() {
    assert_eq!(detect_content_type(b"Hello world"), "text/plain; charset=utf-8");
    assert_eq!(
        detect_content_type(b"  \n<!doctype html><html></html>"),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        detect_content_type(b"<?xml version=\"1.0\"?>"),
        "text/xml; charset=utf-8"
    );
    assert_eq!(detect_content_type(b"%PDF-1.7\n"), "application/pdf");
    assert_eq!(detect_content_type("héllo wörld".as_bytes()), "text/plain; charset=utf-8");
}
#[test]
fn test_detect_content_type_known_formats() {
    assert_eq!(detect_content_type(b"GIF89a\x01\x02"), "image/gif");
    assert_eq!(detect_content_type(b"\x89PNG\r\n\x1a\n\x00\x00"), "image/png");
    assert_eq!(detect_content_type(b"PK\x03\x04\x14"), "application/zip");
    assert_eq!(detect_content_type(b"\x1f\x8b\x08\x00"), "application/x-gzip");
    assert_eq!(detect_content_type(b"\xEF\xBB\xBFplain"), "text/plain; charset=utf-8");
}
#[test]
fn test_detect_content_type_byte_order_marks() {
    assert_eq!(detect_content_type(b"\xFE\xFFab"), "text/plain; charset=utf-16be");
    assert_eq!(detect_content_type(b"\xFF\xFEab"), "text/plain; charset=utf-16le");
    assert_eq!(
        detect_content_type(b"\xFF\xFE\x00\x00"),
        "text/plain; charset=utf-16le"
    );
    assert_eq!(detect_content_type(b"\x00\x00\xFE\xFF"), OCTET_STREAM);
}
#[test]
fn test_detect_content_type_mp4() {
    let mut data = vec![0x00, 0x00, 0x00, 0x18];
    data.extend_from_slice(b"ftypisom\x00\x00\x02\x00isommp41");
    assert_eq!(detect_content_type(&data), "video/mp4");
}
#[test]
fn test_detect_content_type_unknown_binary() {
    assert_eq!(detect_content_type(&[0x01, 0x7f, 0x1b, 0x10]), OCTET_STREAM);
}
#[test]
fn test_known_format_without_null_is_not_binary() {
    assert!(!sample_is_binary(b"GIF89a\x01\x02\x03", BinaryDetection::Sniff));
}
#[test]
fn test_file_extension() {
    assert_eq!(file_extension("data.json"), ".json");
    assert_eq!(file_extension("archive.tar.gz"), ".gz");
    assert_eq!(file_extension(".bashrc"), ".bashrc");
    assert_eq!(file_extension("Makefile"), "");
}
#[test]
fn test_parse_ignore_list() {
    let set = parse_ignore_list(" json, .md ,txt,json");
    let got: Vec<&str> = set.iter().map(String::as_str).collect();
    assert_eq!(got, vec![".json", ".md", ".txt"]);
    assert!(parse_ignore_list("").is_empty());
    assert_eq!(normalize_extension("JSON"), ".JSON");
}
#[test]
fn test_parse_ignore_list_blank_item_is_bare_dot() {
    let set = parse_ignore_list("json,");
    let got: Vec<&str> = set.iter().map(String::as_str).collect();
    assert_eq!(got, vec![".", ".json"]);
    assert_eq!(normalize_extension("  "), ".");
    assert_eq!(file_extension("notes."), ".");
}
#[test]
fn test_builder_skip_output_uses_basename() {
    let options = CollectBuilder::new(".")
        .skip_output(Path::new("out").join("dump.txt"))
        .ignore_extension("log")
        .build();
    assert_eq!(options.skip_name.as_deref(), Some("dump.txt"));
    assert!(options.ignored_extensions.contains(".log"));
    assert_eq!(options.binary_detection, BinaryDetection::Sniff);
}
#[test]
fn test_format_header() {
    assert_eq!(
        format_header(Path::new("src/main.rs")),
        "\n========================================\nPATH: src/main.rs\n---\n"
    );
}
