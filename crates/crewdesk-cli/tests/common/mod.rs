//! Shared E2E test helpers for `crewdesk` binary tests.

#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use std::time::Duration;

/// Default timeout for CLI tests.
pub const TIMEOUT_BASIC: Duration = Duration::from_secs(10);

/// Environment variables read by the config loader.
const CONFIG_VARS: &[&str] = &[
    "CREWDESK_DEBUG",
    "CREWDESK_AUDIT",
    "CREWDESK_AUDIT_ALLOWED",
    "CREWDESK_LOG_FILE",
    "CREWDESK_LOG_LEVEL",
    "RUST_LOG",
];

/// Build a Command for the `crewdesk` binary isolated from the host config.
///
/// `HOME` and the project root both point at a fresh tempdir, and every
/// `CREWDESK_*` variable is cleared. Returns (command, _guard); keep the
/// guard alive for the test's duration.
pub fn crewdesk_cmd() -> (assert_cmd::Command, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("create temp home");
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("crewdesk");
    cmd.timeout(TIMEOUT_BASIC);
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.env("HOME", tmp.path());
    cmd.args(["-C", tmp.path().to_str().expect("valid utf8")]);
    (cmd, tmp)
}

pub const EMPLOYEE: &str = r#"{"id":"u1","role":1,"companyId":"c1"}"#;
pub const LEADER: &str = r#"{"id":"u2","role":2,"companyId":"c1"}"#;
pub const OWNER: &str = r#"{"id":"u3","role":3,"companyId":"c1"}"#;
pub const ADMIN: &str = r#"{"id":"a1","role":4,"companyId":null}"#;

pub const OWN_TICKET: &str = r#"{"id":"t1","userId":"u1","companyId":"c1"}"#;
pub const COMPANY_TICKET: &str = r#"{"id":"t2","userId":"u9","companyId":"c1"}"#;
pub const PLATFORM_TICKET: &str = r#"{"id":"t3","userId":"u5","companyId":null}"#;
pub const MISSHAPEN_TICKET: &str = r#"{"title":"no owner","companyId":"c1"}"#;
