use super::{init, level_for};
use tracing::level_filters::LevelFilter;

#[test]
fn test_verbosity_levels() {
    assert_eq!(level_for(0), LevelFilter::WARN);
    assert_eq!(level_for(1), LevelFilter::INFO);
    assert_eq!(level_for(2), LevelFilter::DEBUG);
    assert_eq!(level_for(7), LevelFilter::TRACE);
}

#[test]
fn test_init_with_log_file_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("treedeck.log");

    init(2, Some(&path)).unwrap();
    // A second install is tolerated.
    init(0, None).unwrap();

    assert!(path.exists());
}

#[test]
fn test_init_reports_unopenable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("treedeck.log");

    assert!(init(1, Some(&path)).is_err());
}
