//! Tests for archive unpacking.

use super::super::pack::pack_driver;
use super::*;
use crate::record::DriverRecord;
use rstest::rstest;
use std::collections::BTreeMap;
use std::io::Write;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn sample_record() -> DriverRecord {
    DriverRecord {
        name: "HP LaserJet 4".to_owned(),
        architecture: "Windows NT x86".to_owned(),
        version: 3,
        driver_path: r"\\srv\print$\W32X86\3\HPPCL5.DLL".to_owned(),
        data_file: r"\\srv\print$\W32X86\3\HP4.PPD".to_owned(),
        config_file: r"\\srv\print$\W32X86\3\HPUI.DLL".to_owned(),
        help_file: r"\\srv\print$\W32X86\3\HP.HLP".to_owned(),
        monitor_name: "PJL Monitor".to_owned(),
        default_data_type: "RAW".to_owned(),
        dependent_files: vec![
            r"\\srv\print$\W32X86\3\HPRES.DLL".to_owned(),
            r"\\srv\print$\W32X86\3\COLOR\HPCLR.ICM".to_owned(),
        ],
        source_host: "srv".to_owned(),
    }
}

fn packed_sample() -> Vec<u8> {
    let record = sample_record();
    let files: BTreeMap<NormalizedPath, Vec<u8>> = record
        .referenced_files()
        .iter()
        .map(|reference| {
            let path = NormalizedPath::from_unc(reference).expect("valid reference");
            let bytes = path.as_str().as_bytes().to_vec();
            (path, bytes)
        })
        .collect();
    pack_driver(&record, &files).expect("packs")
}

#[test]
fn recovers_manifest_and_files_in_registration_order() {
    let unpacked = unpack_driver(&packed_sample()).expect("unpacks");
    assert_eq!(unpacked.manifest.driver_name, "HP LaserJet 4");

    let order: Vec<&str> = unpacked
        .files
        .iter()
        .map(|file| file.archive_path.as_str())
        .collect();
    assert_eq!(
        order,
        vec![
            "w32x86/3/hppcl5.dll",
            "w32x86/3/hp4.ppd",
            "w32x86/3/hpui.dll",
            "w32x86/3/hp.hlp",
            "w32x86/3/hpres.dll",
            "w32x86/3/color/hpclr.icm",
        ]
    );
}

#[test]
fn file_bytes_round_trip_through_the_archive() {
    let unpacked = unpack_driver(&packed_sample()).expect("unpacks");
    for file in &unpacked.files {
        assert_eq!(file.bytes, file.archive_path.as_str().as_bytes());
    }
}

#[test]
fn transfer_keys_discard_intermediate_directories() {
    let unpacked = unpack_driver(&packed_sample()).expect("unpacks");
    let keys: Vec<&str> = unpacked
        .files
        .iter()
        .map(|file| file.transfer_key.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "w32x86/hppcl5.dll",
            "w32x86/hp4.ppd",
            "w32x86/hpui.dll",
            "w32x86/hp.hlp",
            "w32x86/hpres.dll",
            "w32x86/hpclr.icm",
        ]
    );
}

#[rstest]
#[case::flat("w32x86/3/x.dll", "w32x86/x.dll")]
#[case::nested("w32x86/3/color/x.icm", "w32x86/x.icm")]
#[case::single("x.dll", "x.dll/x.dll")]
fn transfer_key_uses_first_and_last_segments(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(transfer_key(&NormalizedPath::new(input)), expected);
}

#[test]
fn archive_without_manifest_is_missing_entry() {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("w32x86/3/orphan.dll", SimpleFileOptions::default())
        .expect("starts entry");
    writer.write_all(b"bytes").expect("writes entry");
    let bytes = writer.finish().expect("finishes").into_inner();

    let result = unpack_driver(&bytes);
    assert!(matches!(
        result,
        Err(ArchiveError::MissingArchiveEntry { path }) if path == MANIFEST_ENTRY
    ));
}

#[test]
fn manifest_referencing_absent_file_is_missing_entry() {
    let record = sample_record();
    let manifest = DriverManifest::from_record(&record).expect("valid record");

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file(MANIFEST_ENTRY, SimpleFileOptions::default())
        .expect("starts manifest");
    writer
        .write_all(manifest.to_json().expect("serializes").as_bytes())
        .expect("writes manifest");
    let bytes = writer.finish().expect("finishes").into_inner();

    let result = unpack_driver(&bytes);
    assert!(matches!(
        result,
        Err(ArchiveError::MissingArchiveEntry { path }) if path == "w32x86/3/hppcl5.dll"
    ));
}

#[test]
fn garbage_bytes_are_a_container_error() {
    let result = unpack_driver(b"not a zip archive");
    assert!(matches!(result, Err(ArchiveError::Zip(_))));
}

#[test]
fn duplicate_dependents_stage_once_per_reference() {
    let mut record = sample_record();
    record.dependent_files = vec![
        r"\\srv\print$\W32X86\3\HPRES.DLL".to_owned(),
        r"\\srv\print$\W32X86\3\HPRES.DLL".to_owned(),
    ];
    let files: BTreeMap<NormalizedPath, Vec<u8>> = record
        .referenced_files()
        .iter()
        .map(|reference| {
            let path = NormalizedPath::from_unc(reference).expect("valid reference");
            (path, b"dep".to_vec())
        })
        .collect();
    let bytes = pack_driver(&record, &files).expect("packs");

    let unpacked = unpack_driver(&bytes).expect("unpacks");
    let dep_count = unpacked
        .files
        .iter()
        .filter(|file| file.archive_path.as_str() == "w32x86/3/hpres.dll")
        .count();
    assert_eq!(dep_count, 2);
}
