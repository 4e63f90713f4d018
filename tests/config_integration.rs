use std::path::PathBuf;
use std::time::Duration;

use paramedit::config::{ConfigFlags, load_config_flags, parse_flag_tokens};
use paramedit::remote::Endpoints;

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".parameditrc");
    let content = r#"
# robot on the bench
--server 192.168.1.20:8000

--fetch
   
--log-file=paramedit.log
"#;
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.fetch_on_start);
    assert_eq!(flags.server(), "192.168.1.20:8000");
    assert_eq!(flags.log_file, Some(PathBuf::from("paramedit.log")));
}

#[test]
fn test_missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let flags = load_config_flags(&dir.path().join("absent")).unwrap();
    assert_eq!(flags, ConfigFlags::default());
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".parameditrc");
    let content = "--fetch\n--server robot:8000\n--save-path /save\n";
    std::fs::write(&path, content).unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "paramedit".to_string(),
        "--server".to_string(),
        "bench:9000".to_string(),
        "--timeout".to_string(),
        "3".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.fetch_on_start, "file flags should remain enabled");
    assert_eq!(effective.server(), "bench:9000", "cli should override server");
    assert_eq!(effective.timeout(), Duration::from_secs(3));
    assert_eq!(
        effective.endpoints(),
        Endpoints {
            read_path: "/edit-param-raw".to_string(),
            save_path: "/save".to_string(),
        },
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_parse_flag_tokens_handles_equals_syntax() {
    let args = vec![
        "paramedit".to_string(),
        "--server=robot:8000".to_string(),
        "--status-ms=3000".to_string(),
    ];
    let flags = parse_flag_tokens(&args);
    assert_eq!(flags.server.as_deref(), Some("robot:8000"));
    assert_eq!(flags.status_duration(), Duration::from_millis(3000));
}
