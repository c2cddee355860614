use std::fs;

use anniv_config::{ConfigError, ConfigLoader};
use anniv_domain::IntervalKind;
use tempfile::tempdir;

#[test]
fn loader_reads_both_files_from_config_dir() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("monthly.ini"),
        "[Chores]\nTrash = 04-12\nRent = 04-01\n",
    )
    .expect("write monthly");
    fs::write(
        dir.path().join("yearly.ini"),
        "[Birthdays]\nsymbol = *\nAlice = 1990-04-12\n\n[Weddings]\nsymbol = &\nAnna & Ben = 2015-06-20\n",
    )
    .expect("write yearly");

    let model = ConfigLoader::with_config_dir(dir.path())
        .load()
        .expect("load config");

    let monthly = model.categories(IntervalKind::Monthly);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].marker(), "?");
    assert_eq!(monthly[0].entries.len(), 2);

    let yearly = model.categories(IntervalKind::Yearly);
    assert_eq!(yearly.len(), 2);
    assert_eq!(yearly[1].name, "Weddings");
    assert_eq!(yearly[1].entries[0].name, "Anna & Ben");
    assert_eq!(yearly[1].entries[0].recurrence_suffix, "2015-06-20");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("monthly.ini"), "[Chores]\n").expect("write monthly");

    let err = ConfigLoader::with_config_dir(dir.path())
        .load()
        .expect_err("yearly file is missing");

    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("yearly.ini")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn malformed_file_names_source_and_line() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("monthly.ini"), "[Chores]\nTrash = 04-12\n").expect("write");
    fs::write(dir.path().join("yearly.ini"), "[Birthdays]\nAlice 1990-04-12\n").expect("write");

    let err = ConfigLoader::with_config_dir(dir.path())
        .load()
        .expect_err("yearly file is malformed");

    let message = err.to_string();
    assert!(message.contains("yearly.ini:2"), "{message}");
}
