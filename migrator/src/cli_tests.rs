//! Tests for the CLI definitions.

use super::*;
use rstest::rstest;

#[test]
fn get_connection_flags_use_lowercase_letters() {
    let cli = GetCli::parse_from([
        "spoolmig-get",
        "-s",
        "oldsrv",
        "-a",
        "10.0.0.5",
        "-u",
        "admin",
        "-p",
        "pw",
    ]);
    assert_eq!(cli.host.as_deref(), Some("oldsrv"));
    assert_eq!(cli.address.as_deref(), Some("10.0.0.5"));
    assert_eq!(cli.user.as_deref(), Some("admin"));
    assert_eq!(cli.password.as_deref(), Some("pw"));
}

#[test]
fn put_connection_flags_use_uppercase_letters() {
    let cli = PutCli::parse_from(["spoolmig-put", "-T", "newsrv", "-A", "10.0.0.9", "-U", "admin", "-P", "pw"]);
    assert_eq!(cli.host.as_deref(), Some("newsrv"));
    assert_eq!(cli.address.as_deref(), Some("10.0.0.9"));
    assert_eq!(cli.user.as_deref(), Some("admin"));
    assert_eq!(cli.password.as_deref(), Some("pw"));
}

#[test]
fn get_defaults_to_current_directory_output() {
    let cli = GetCli::parse_from(["spoolmig-get"]);
    assert_eq!(cli.output_dir.as_str(), ".");
    assert!(!cli.list);
    assert_eq!(cli.verbosity, 0);
}

#[test]
fn put_accepts_positional_archives() {
    let cli = PutCli::parse_from(["spoolmig-put", "a.zip", "b.zip"]);
    assert_eq!(cli.archives.len(), 2);
    assert!(!cli.all);
}

#[test]
fn put_all_conflicts_with_positional_archives() {
    let result = PutCli::try_parse_from(["spoolmig-put", "--all", "a.zip"]);
    assert!(result.is_err());
}

#[test]
fn overrides_mirror_the_connection_flags() {
    let cli = GetCli::parse_from(["spoolmig-get", "-s", "oldsrv", "-u", "admin"]);
    let overrides = cli.overrides();
    assert_eq!(overrides.host.as_deref(), Some("oldsrv"));
    assert_eq!(overrides.user.as_deref(), Some("admin"));
    assert!(overrides.password.is_none());
}

#[rstest]
#[case::default(0, log::LevelFilter::Warn)]
#[case::single(1, log::LevelFilter::Info)]
#[case::double(2, log::LevelFilter::Debug)]
#[case::excess(5, log::LevelFilter::Debug)]
fn verbosity_ladder(#[case] count: u8, #[case] expected: log::LevelFilter) {
    assert_eq!(log_level(count), expected);
}

#[test]
fn repeated_verbose_flags_accumulate() {
    let cli = PutCli::parse_from(["spoolmig-put", "-vv", "a.zip"]);
    assert_eq!(cli.verbosity, 2);
}
