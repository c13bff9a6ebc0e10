use std::path::PathBuf;

use textwalk::config::{ConfigError, ConfigFlags, load_config_flags, parse_flag_tokens};

fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(ToString::to_string).collect()
}

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".textwalkrc");
    let content = r"
# comment
--summary

--debug-log steps.log
   
--no-header
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.summary);
    assert!(flags.no_header);
    assert!(!flags.perf);
    assert_eq!(flags.debug_log, Some(PathBuf::from("steps.log")));
}

#[test]
fn test_config_file_with_dangling_flag_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".textwalkrc");
    std::fs::write(&path, "--perf\n--debug-log\n").unwrap();

    let err = load_config_flags(&path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid config"));
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::MissingValue {
            flag: "--debug-log"
        })
    );
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".textwalkrc");
    std::fs::write(&path, "--summary\n--debug-log file.log\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_flags =
        parse_flag_tokens(&args(&["textwalk", "--perf", "--debug-log=cli.log"])).unwrap();

    let effective = file_flags.union(&cli_flags);
    assert!(effective.summary, "file flags should remain enabled");
    assert!(effective.perf, "cli flags should be applied");
    assert_eq!(
        effective.debug_log,
        Some(PathBuf::from("cli.log")),
        "cli should override the log path"
    );
}

#[test]
fn test_file_debug_log_kept_when_cli_has_none() {
    let file = ConfigFlags {
        debug_log: Some(PathBuf::from("file.log")),
        ..ConfigFlags::default()
    };
    let cli = parse_flag_tokens(&args(&["textwalk", "notes.txt"])).unwrap();
    assert_eq!(file.union(&cli).debug_log, Some(PathBuf::from("file.log")));
}
