//! E2E tests for `crewdesk check` and `crewdesk actions`.

mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn own_ticket_view_is_allowed() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", EMPLOYEE, "--resource", "tickets", "--action", "view", "--record",
        OWN_TICKET,
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff("allowed\n"));
}

#[test]
fn record_with_only_ownership_fields_is_enough() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", EMPLOYEE, "--resource", "tickets", "--action", "view", "--record",
        r#"{"userId":"u1","companyId":"c1"}"#,
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff("allowed\n"));
}

#[test]
fn misshapen_record_counts_as_absent() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", LEADER, "--resource", "tickets", "--action", "close", "--record",
        MISSHAPEN_TICKET,
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("denied (missing_record)"));

    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "actions", "--user", LEADER, "--resource", "tickets", "--record", MISSHAPEN_TICKET,
    ])
    .assert()
    .success()
    .stdout(predicate::str::diff("CREATE\n"));
}

#[test]
fn unparsable_record_is_an_error_for_both_commands() {
    for command in ["check", "actions"] {
        let (mut cmd, _guard) = crewdesk_cmd();
        cmd.args([command, "--user", LEADER, "--resource", "tickets"]);
        if command == "check" {
            cmd.args(["--action", "view"]);
        }
        cmd.args(["--record", "{ nope"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("invalid inline record JSON"));
    }
}

#[test]
fn employee_cannot_view_colleague_ticket() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", EMPLOYEE, "--resource", "tickets", "--action", "view", "--record",
        COMPANY_TICKET,
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("denied (predicate_failed)"));
}

#[test]
fn leader_views_company_ticket() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", LEADER, "--resource", "tickets", "--action", "view", "--record",
        COMPANY_TICKET,
    ])
    .assert()
    .success();
}

#[test]
fn record_dependent_check_without_record_is_denied() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", EMPLOYEE, "--resource", "tickets", "--action", "view",
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("missing_record"));
}

#[test]
fn admin_handles_platform_tickets_only() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", ADMIN, "--resource", "tickets", "--action", "close", "--record",
        PLATFORM_TICKET,
    ])
    .assert()
    .success();

    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", ADMIN, "--resource", "tickets", "--action", "close", "--record",
        COMPANY_TICKET,
    ])
    .assert()
    .code(1);
}

#[test]
fn admin_schedules_have_no_rule() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", ADMIN, "--resource", "schedules", "--action", "view",
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("denied (no_rule)"));
}

#[test]
fn unknown_names_are_denied_not_errors() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", OWNER, "--resource", "payroll", "--action", "view",
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("unknown_resource"));

    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", OWNER, "--resource", "schedules", "--action", "respond",
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("unknown_action"));
}

#[test]
fn json_output_carries_reason() {
    let (mut cmd, _guard) = crewdesk_cmd();
    let output = cmd
        .args([
            "check", "--user", EMPLOYEE, "--resource", "schedules", "--action", "finalize",
            "--json",
        ])
        .output()
        .expect("run crewdesk");
    assert_eq!(output.status.code(), Some(1));

    let decision: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(decision["allowed"], false);
    assert_eq!(decision["reason"], "rule_denied");
    assert_eq!(decision["resource"], "schedules");
}

#[test]
fn user_and_record_from_files() {
    let (mut cmd, guard) = crewdesk_cmd();
    let user = guard.path().join("user.json");
    let record = guard.path().join("ticket.json");
    std::fs::write(&user, LEADER).expect("write user");
    std::fs::write(&record, COMPANY_TICKET).expect("write record");

    cmd.args(["check", "--user"])
        .arg(&user)
        .args(["--resource", "tickets", "--action", "respond", "--record"])
        .arg(&record)
        .assert()
        .success();
}

#[test]
fn bad_input_exits_with_two() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", "/nonexistent/user.json", "--resource", "tickets", "--action", "view",
    ])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("cannot read user file"));

    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args([
        "check", "--user", "{ nope", "--resource", "tickets", "--action", "view",
    ])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("invalid inline user JSON"));
}

#[test]
fn actions_lists_allowed_set() {
    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args(["actions", "--user", LEADER, "--resource", "schedules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VIEW"))
        .stdout(predicate::str::contains("FINALIZE"));

    let (mut cmd, _guard) = crewdesk_cmd();
    cmd.args(["actions", "--user", ADMIN, "--resource", "schedules"])
        .assert()
        .code(1);
}

#[test]
fn file_logging_writes_audit_trail() {
    let (mut cmd, guard) = crewdesk_cmd();
    let log_dir = guard.path().join("logs");
    cmd.args([
        "check", "--user", EMPLOYEE, "--resource", "schedules", "--action", "delete",
        "--log-level", "debug", "--log-file",
    ])
    .arg(&log_dir)
    .assert()
    .code(1);

    let log = std::fs::read_to_string(log_dir.join("crewdesk.log")).expect("log file written");
    assert!(log.contains("access denied"), "log: {log}");
}
