use ridge::domain::config::LogConfig;
use ridge_demo::logging;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn log_section_drives_json_file_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let cfg = LogConfig {
        level: "debug".to_owned(),
        console: false,
        path: Some(log_dir.clone()),
        json: true,
        max_files: 2,
        ..LogConfig::default()
    };

    let logger = logging::init("ridge-demo-logging", &cfg)?;
    assert!(logger.guard().is_some(), "file output should hold a worker guard");
    tracing::debug!(path = "/", "served demo page");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let contents: String = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| fs::read_to_string(entry.path()))
        .collect::<Result<_, _>>()?;
    let first = contents.lines().next().ok_or("log file should not be empty")?;
    assert!(first.starts_with('{'), "records should be JSON lines: {first}");
    assert!(first.contains("served demo page"));
    Ok(())
}
