use stagedag::cli::LogLevel;
use stagedag::logging::resolve_filter;

#[test]
fn cli_level_wins_over_env() {
    let filter = resolve_filter(Some(LogLevel::Debug), Some("warn"));
    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn env_accepts_per_module_directives() {
    let filter = resolve_filter(None, Some("warn,stagedag::dag=debug"));
    let rendered = filter.to_string();

    assert!(rendered.contains("stagedag::dag=debug"), "filter: {rendered}");
    assert!(rendered.contains("warn"), "filter: {rendered}");
}

#[test]
fn unparsable_or_empty_env_falls_back_to_info() {
    assert_eq!(resolve_filter(None, Some("stagedag=loud")).to_string(), "info");
    assert_eq!(resolve_filter(None, Some("   ")).to_string(), "info");
    assert_eq!(resolve_filter(None, None).to_string(), "info");
}
