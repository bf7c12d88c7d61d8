//! Tests for archive packing.

use super::*;
use std::io::Read;
use zip::ZipArchive;

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
        dependent_files: vec![r"\\srv\print$\W32X86\3\HPRES.DLL".to_owned()],
        source_host: "srv".to_owned(),
    }
}

fn file_map(record: &DriverRecord) -> BTreeMap<NormalizedPath, Vec<u8>> {
    record
        .referenced_files()
        .iter()
        .map(|reference| {
            let path = NormalizedPath::from_unc(reference).expect("valid reference");
            let bytes = path.as_str().as_bytes().to_vec();
            (path, bytes)
        })
        .collect()
}

#[test]
fn archive_stores_files_at_normalized_paths() {
    let record = sample_record();
    let bytes = pack_driver(&record, &file_map(&record)).expect("packs");

    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("readable zip");
    let names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    assert!(names.contains(&"w32x86/3/hppcl5.dll".to_owned()));
    assert!(names.contains(&"w32x86/3/hpres.dll".to_owned()));
    assert!(names.contains(&MANIFEST_ENTRY.to_owned()));
    assert!(archive.by_name("w32x86/3/hppcl5.dll").is_ok());
}

#[test]
fn manifest_entry_holds_the_normalized_record() {
    let record = sample_record();
    let bytes = pack_driver(&record, &file_map(&record)).expect("packs");

    let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("readable zip");
    let mut entry = archive.by_name(MANIFEST_ENTRY).expect("manifest present");
    let mut json = String::new();
    entry.read_to_string(&mut json).expect("readable manifest");

    let manifest = DriverManifest::from_json(&json).expect("valid manifest");
    assert_eq!(manifest.driver_name, "HP LaserJet 4");
    assert_eq!(manifest.driver_path.as_str(), "w32x86/3/hppcl5.dll");
}

#[test]
fn missing_supplied_file_is_fatal() {
    let record = sample_record();
    let mut files = file_map(&record);
    files.remove(&NormalizedPath::new("w32x86/3/hp4.ppd"));

    let result = pack_driver(&record, &files);
    assert!(matches!(
        result,
        Err(ArchiveError::MissingArchiveEntry { path }) if path == "w32x86/3/hp4.ppd"
    ));
}

#[test]
fn repeated_references_collapse_to_one_entry() {
    let mut record = sample_record();
    record.dependent_files = vec![
        r"\\srv\print$\W32X86\3\HPRES.DLL".to_owned(),
        r"\\srv\print$\W32X86\3\HPRES.DLL".to_owned(),
    ];
    let bytes = pack_driver(&record, &file_map(&record)).expect("packs");

    let archive = ZipArchive::new(Cursor::new(bytes)).expect("readable zip");
    let count = archive
        .file_names()
        .filter(|name| *name == "w32x86/3/hpres.dll")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn entry_count_is_unique_files_plus_manifest() {
    let record = sample_record();
    let bytes = pack_driver(&record, &file_map(&record)).expect("packs");
    let archive = ZipArchive::new(Cursor::new(bytes)).expect("readable zip");
    assert_eq!(archive.len(), 6);
}

#[test]
fn foreign_share_reference_fails_before_writing() {
    let record = DriverRecord {
        help_file: r"\\srv\drivers\HP.HLP".to_owned(),
        ..sample_record()
    };
    let result = pack_driver(&record, &BTreeMap::new());
    assert!(matches!(result, Err(ArchiveError::Path(_))));
}
