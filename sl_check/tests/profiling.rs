//! Timing events recorded while checking cases.

use sl_check::{builtin_cases, run_cases, CheckConfig, HostEventRecorder};

#[test]
fn test_profile_records_events() {
    let config = CheckConfig {
        profile: true,
        ..CheckConfig::default()
    };
    let cases = builtin_cases();
    let results = run_cases(&cases[..2], &config);
    assert!(results.iter().all(|(_, r)| r.is_ok()));

    let events = HostEventRecorder::instance().take();
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names.iter().filter(|n| **n == "candidate").count(), 2);
    assert_eq!(names.iter().filter(|n| **n == "reference").count(), 2);
    assert!(names.contains(&"case/window"));
    assert!(events.iter().all(|e| e.millis >= 0.0));

    // A later run without profiling stops recording.
    let results = run_cases(&cases[..2], &CheckConfig::default());
    assert!(results.iter().all(|(_, r)| r.is_ok()));
    assert!(HostEventRecorder::instance().take().is_empty());
}
