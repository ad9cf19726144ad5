use std::error::Error;
use std::fs;

use plandag::watch::content_hash;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn identical_bytes_hash_identically() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("table.csv");
    fs::write(&path, "Element,Preceded_by\n1,\n")?;

    let first = content_hash(&path)?;
    // Rewrite the same bytes; watch mode must treat this as "unchanged".
    fs::write(&path, "Element,Preceded_by\n1,\n")?;
    let second = content_hash(&path)?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn changed_bytes_change_the_hash() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("table.csv");
    fs::write(&path, "Element,Preceded_by\n1,\n")?;
    let first = content_hash(&path)?;

    fs::write(&path, "Element,Preceded_by\n1,\n2,1\n")?;
    let second = content_hash(&path)?;

    assert_ne!(first, second);

    Ok(())
}

#[test]
fn missing_file_reports_the_path() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nope.csv");

    let err = content_hash(&path).unwrap_err();
    assert!(format!("{err:#}").contains("opening input for hashing"));

    Ok(())
}
