// tests/integration/monitor_cycle.rs
use std::{path::Path, time::Duration};

use ftp_monitor_domain::{BaselinePolicy, MonitorConfig, RuleSet, Schedule};
use ftp_monitor_infra::LocalFileSystem;
use ftp_monitor_ports::{clock::StopSignal, events::SilentEvents};
use ftp_monitor_shared_kernel::{Credentials, Endpoint, MonitorError};
use ftp_monitor_usecase::{CycleReport, MonitorLoop, MonitorPorts};

#[path = "../common/mod.rs"]
mod common;
use common::{MemoryServer, StepSleeper, TempWorkspace};

fn config(root: &Path, whitelist: &[&str], blacklist: &[&str], policy: BaselinePolicy) -> MonitorConfig {
    MonitorConfig::new(
        root.to_path_buf(),
        Endpoint::new("ftp.test", 21, Credentials::new("user", "pw")).with_remote_dir("upload"),
        RuleSet::new(whitelist, blacklist).expect("valid rules"),
        Schedule {
            scan_interval: Duration::from_secs(30),
            pacing_delay: Duration::ZERO,
            retry_attempts: 2,
            retry_delay: Duration::from_secs(1),
        },
        policy,
    )
    .expect("valid config")
}

#[test]
fn touched_whitelisted_file_is_uploaded_and_others_are_not() {
    let ws = TempWorkspace::new();
    ws.write("a.txt", "first", 1);
    ws.write("b.log", "log", 1);

    let fs = LocalFileSystem::new();
    let server = MemoryServer::new();
    let sleeper = StepSleeper::new(StopSignal::new(), usize::MAX);
    let events = SilentEvents;
    let ports = MonitorPorts { filesystem: &fs, connector: &server, sleeper: &sleeper, events: &events };
    let mut monitor = MonitorLoop::new(config(ws.path(), &["*.txt"], &[], BaselinePolicy::default()), ports, StopSignal::new());

    assert!(matches!(monitor.run_cycle().unwrap(), CycleReport::Baseline { files: 1 }));
    let baseline = monitor.baseline().expect("baseline");
    assert!(baseline.contains("a.txt"));
    assert!(!baseline.contains("b.log"));
    assert_eq!(server.sessions(), 0);

    ws.write("a.txt", "second", 2);
    ws.touch("b.log", 2);
    let report = monitor.run_cycle().unwrap();

    assert!(matches!(report, CycleReport::SessionRun { changes: 1, .. }));
    assert_eq!(server.uploads(), vec!["upload/a.txt"]);
    assert_eq!(server.content("upload/a.txt").as_deref(), Some("second"));
}

#[test]
fn nested_files_keep_their_relative_path_remotely() {
    let ws = TempWorkspace::new();
    ws.write("keep.txt", "k", 1);

    let fs = LocalFileSystem::new();
    let server = MemoryServer::new();
    let sleeper = StepSleeper::new(StopSignal::new(), usize::MAX);
    let events = SilentEvents;
    let ports = MonitorPorts { filesystem: &fs, connector: &server, sleeper: &sleeper, events: &events };
    let mut monitor =
        MonitorLoop::new(config(ws.path(), &[], &["*.tmp"], BaselinePolicy::default()), ports, StopSignal::new());
    monitor.run_cycle().unwrap();

    ws.write("reports/2024/q1.csv", "data", 5);
    ws.write("reports/scratch.tmp", "junk", 5);
    monitor.run_cycle().unwrap();

    assert_eq!(server.uploads(), vec!["upload/reports/2024/q1.csv"]);
}

#[test]
fn deleted_file_is_not_reuploaded_when_recreated_with_old_mtime() {
    let ws = TempWorkspace::new();
    ws.write("a.txt", "v1", 10);

    let fs = LocalFileSystem::new();
    let server = MemoryServer::new();
    let sleeper = StepSleeper::new(StopSignal::new(), usize::MAX);
    let events = SilentEvents;
    let ports = MonitorPorts { filesystem: &fs, connector: &server, sleeper: &sleeper, events: &events };
    let mut monitor = MonitorLoop::new(config(ws.path(), &[], &[], BaselinePolicy::default()), ports, StopSignal::new());
    monitor.run_cycle().unwrap();

    ws.remove("a.txt");
    assert!(matches!(monitor.run_cycle().unwrap(), CycleReport::NoChanges { scanned: 0 }));
    // the stale baseline entry is kept
    assert!(monitor.baseline().is_some_and(|b| b.contains("a.txt")));

    ws.write("a.txt", "v1 again", 10);
    assert!(matches!(monitor.run_cycle().unwrap(), CycleReport::NoChanges { .. }));
    assert!(server.uploads().is_empty());
}

#[test]
fn unreachable_server_keeps_changes_pending() {
    let ws = TempWorkspace::new();

    let fs = LocalFileSystem::new();
    let server = MemoryServer::new();
    let sleeper = StepSleeper::new(StopSignal::new(), usize::MAX);
    let events = SilentEvents;
    let ports = MonitorPorts { filesystem: &fs, connector: &server, sleeper: &sleeper, events: &events };
    let mut monitor =
        MonitorLoop::new(config(ws.path(), &[], &[], BaselinePolicy::CommitOnDelivery), ports, StopSignal::new());
    monitor.run_cycle().unwrap();

    ws.write("late.txt", "x", 3);
    server.refuse_next(2);
    assert!(matches!(monitor.run_cycle(), Err(MonitorError::Connection(_))));
    assert_eq!(sleeper.waits(), vec![Duration::from_secs(1)]);

    monitor.run_cycle().unwrap();
    assert_eq!(server.uploads(), vec!["upload/late.txt"]);
}

#[test]
fn missing_root_is_reported_as_scan_error() {
    let ws = TempWorkspace::new();
    let root = ws.path().join("not-there");

    let fs = LocalFileSystem::new();
    let server = MemoryServer::new();
    let sleeper = StepSleeper::new(StopSignal::new(), usize::MAX);
    let events = SilentEvents;
    let ports = MonitorPorts { filesystem: &fs, connector: &server, sleeper: &sleeper, events: &events };
    let mut monitor = MonitorLoop::new(config(&root, &[], &[], BaselinePolicy::default()), ports, StopSignal::new());

    assert!(matches!(monitor.run_cycle(), Err(MonitorError::Scan(_))));
    assert!(monitor.baseline().is_none());
}

#[cfg(unix)]
#[test]
fn file_name_that_is_not_utf8_is_uploaded_once() {
    use std::{ffi::OsStr, fs, os::unix::ffi::OsStrExt};

    let ws = TempWorkspace::new();
    ws.write("seed.txt", "s", 1);

    let fs_port = LocalFileSystem::new();
    let server = MemoryServer::new();
    let sleeper = StepSleeper::new(StopSignal::new(), usize::MAX);
    let events = SilentEvents;
    let ports = MonitorPorts { filesystem: &fs_port, connector: &server, sleeper: &sleeper, events: &events };
    let mut monitor =
        MonitorLoop::new(config(ws.path(), &["*.txt"], &[], BaselinePolicy::CommitOnDelivery), ports, StopSignal::new());
    monitor.run_cycle().unwrap();

    let raw = ws.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
    fs::write(&raw, "latin-1 name").unwrap();

    let report = monitor.run_cycle().unwrap();
    let CycleReport::SessionRun { session, .. } = report else {
        panic!("expected an upload session");
    };
    assert_eq!(session.uploaded.len(), 1);
    assert!(session.failed.is_empty());

    assert!(matches!(monitor.run_cycle().unwrap(), CycleReport::NoChanges { .. }));
    assert_eq!(server.uploads(), vec!["upload/caf\u{FFFD}.txt"]);
    assert_eq!(server.content("upload/caf\u{FFFD}.txt").as_deref(), Some("latin-1 name"));
}
