//! Subcommand implementations.
//!
//! Each command returns the text to print and whether the answer was
//! affirmative; `main` maps that to the exit status.

use anyhow::{Context, Result};
use crewdesk_auth::{
    allowed_actions, assignable_roles, PermissionPolicy, Resource, ResourceAction, ResourceKind,
    Section,
};
use crewdesk_runtime::{evaluate, AccessQuery};
use crewdesk_types::{Role, Schedule, Ticket, User};
use serde::de::DeserializeOwned;
use std::fmt::Write as _;
use std::path::Path;

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub affirmative: bool,
}

impl Outcome {
    fn yes(text: String) -> Self {
        Self {
            text,
            affirmative: true,
        }
    }
}

/// Reads a JSON value given inline or as a path to a file.
///
/// Arguments starting with `{` are parsed as inline JSON; anything else
/// is treated as a file path.
pub fn load_json<T: DeserializeOwned>(arg: &str, what: &str) -> Result<T> {
    let trimmed = arg.trim_start();
    if trimmed.starts_with('{') {
        return serde_json::from_str(trimmed).with_context(|| format!("invalid inline {what} JSON"));
    }
    let path = Path::new(arg);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {what} file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid {what} JSON in {}", path.display()))
}

/// `crewdesk check`
pub fn check(
    policy: &dyn PermissionPolicy,
    user: User,
    resource: &str,
    action: &str,
    record: Option<serde_json::Value>,
    json: bool,
) -> Result<Outcome> {
    let query = AccessQuery {
        user,
        resource: resource.to_string(),
        action: action.to_string(),
        record,
    };
    let decision = evaluate(policy, &query);
    tracing::info!(
        user = %query.user.id,
        resource = resource,
        action = action,
        allowed = decision.allowed,
        reason = %decision.reason,
        "check evaluated"
    );

    let text = if json {
        serde_json::to_string_pretty(&decision).context("failed to serialize decision")?
    } else if decision.allowed {
        "allowed".to_string()
    } else {
        format!("denied ({})", decision.reason)
    };

    Ok(Outcome {
        text,
        affirmative: decision.allowed,
    })
}

/// Decodes a record the way `check` does: JSON that does not fit the
/// record type is logged and treated as absent.
fn decode_record<T: DeserializeOwned>(
    resource: ResourceKind,
    value: serde_json::Value,
) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(resource = %resource, error = %e, "malformed record treated as absent");
            None
        }
    }
}

/// `crewdesk actions`
///
/// Unreadable input and invalid JSON are errors. A well-formed record of
/// the wrong shape counts as absent, so only record-independent actions
/// are listed.
pub fn actions(
    user: &User,
    resource: ResourceKind,
    record: Option<serde_json::Value>,
) -> Result<Outcome> {
    let set = match resource {
        ResourceKind::Tickets => {
            let record: Option<Ticket> = record.and_then(|r| decode_record(resource, r));
            allowed_actions(user, record.as_ref())
        }
        ResourceKind::Schedules => {
            let record: Option<Schedule> = record.and_then(|r| decode_record(resource, r));
            allowed_actions(user, record.as_ref())
        }
    };
    let affirmative = !set.is_empty();
    Ok(Outcome {
        text: set.to_string(),
        affirmative,
    })
}

/// `crewdesk table`
pub fn table(resource: Option<ResourceKind>) -> Outcome {
    let kinds: Vec<ResourceKind> = match resource {
        Some(kind) => vec![kind],
        None => ResourceKind::ALL.to_vec(),
    };
    let rendered: Vec<String> = kinds
        .into_iter()
        .map(|kind| match kind {
            ResourceKind::Tickets => render_table::<Ticket>(),
            ResourceKind::Schedules => render_table::<Schedule>(),
        })
        .collect();
    Outcome::yes(rendered.join("\n"))
}

/// Renders the role × action matrix of `R`.
///
/// Literal cells print `true`/`false`, predicates print their label, and
/// missing cells print `no rule`.
fn render_table<R: Resource>() -> String {
    let actions = <R::Action as ResourceAction>::ALL;
    let cell = |role: Role, action: R::Action| {
        R::rule(role, action).map_or("no rule", |rule| rule.describe())
    };

    let mut widths: Vec<usize> = actions.iter().map(|a| a.as_str().len()).collect();
    for role in Role::ALL {
        for (i, action) in actions.iter().enumerate() {
            widths[i] = widths[i].max(cell(role, *action).len());
        }
    }
    let role_width = Role::ALL
        .iter()
        .map(|r| r.as_str().len())
        .max()
        .unwrap_or(0)
        .max("role".len());

    let mut out = String::new();
    let _ = writeln!(out, "{}", R::KIND);
    let _ = write!(out, "{:<role_width$}", "role");
    for (action, width) in actions.iter().zip(&widths) {
        let _ = write!(out, " | {:<width$}", action.as_str());
    }
    out.push('\n');
    let _ = write!(out, "{}", "-".repeat(role_width));
    for width in &widths {
        let _ = write!(out, "-+-{}", "-".repeat(*width));
    }
    out.push('\n');
    for role in Role::ALL {
        let _ = write!(out, "{:<role_width$}", role.as_str());
        for (action, width) in actions.iter().zip(&widths) {
            let _ = write!(out, " | {:<width$}", cell(role, *action));
        }
        out.push('\n');
    }
    out
}

/// `crewdesk sections`
pub fn sections(policy: &dyn PermissionPolicy, user: &User) -> Outcome {
    let visible: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|section| policy.can_enter_section(user, *section))
        .collect();
    let text = if visible.is_empty() {
        "(none)".to_string()
    } else {
        visible
            .iter()
            .map(|s| format!("{:<12}{}", s.as_str(), s.path()))
            .collect::<Vec<_>>()
            .join("\n")
    };
    Outcome {
        text,
        affirmative: !visible.is_empty(),
    }
}

/// `crewdesk roles`
pub fn roles(user: &User) -> Outcome {
    let roles = assignable_roles(user);
    let text = if roles.is_empty() {
        "(none)".to_string()
    } else {
        roles
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };
    Outcome {
        text,
        affirmative: !roles.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewdesk_auth::StaticPolicy;

    fn employee() -> User {
        User::new("u1", Role::Employee, Some("c1"))
    }

    #[test]
    fn load_inline_json() {
        let user: User =
            load_json(r#" { "id": "u9", "role": 2, "companyId": "c1" }"#, "user").expect("inline");
        assert_eq!(user.role(), Some(Role::Leader));
    }

    #[test]
    fn load_json_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("user.json");
        std::fs::write(&path, r#"{ "id": "u3", "role": 3, "companyId": "c1" }"#)
            .expect("write user");
        let user: User = load_json(path.to_str().expect("utf8 path"), "user").expect("file");
        assert_eq!(user.role(), Some(Role::Owner));
    }

    #[test]
    fn load_json_errors_name_the_input() {
        let err = load_json::<User>("/nonexistent/user.json", "user").expect_err("missing");
        assert!(err.to_string().contains("cannot read user file"), "got: {err}");

        let err = load_json::<User>("{ not json", "user").expect_err("bad json");
        assert!(err.to_string().contains("invalid inline user JSON"), "got: {err}");
    }

    #[test]
    fn check_text_and_json() {
        let own = serde_json::json!({ "id": "t1", "userId": "u1", "companyId": "c1" });
        let out = check(&StaticPolicy, employee(), "tickets", "view", Some(own), false)
            .expect("check");
        assert_eq!(out, Outcome::yes("allowed".into()));

        let out = check(&StaticPolicy, employee(), "tickets", "view", None, true).expect("check");
        assert!(!out.affirmative);
        assert!(out.text.contains("\"missing_record\""), "got: {}", out.text);
    }

    #[test]
    fn actions_for_schedule() {
        let out = actions(&employee(), ResourceKind::Schedules, None).expect("actions");
        assert_eq!(out.text, "VIEW | CREATE");
    }

    #[test]
    fn actions_treat_misshapen_record_as_absent() {
        let own = serde_json::json!({ "userId": "u1", "companyId": "c1" });
        let out = actions(&employee(), ResourceKind::Tickets, Some(own)).expect("actions");
        assert_eq!(out.text, "VIEW | CREATE | RESPOND");

        let misshapen = serde_json::json!({ "title": "no owner" });
        let out = actions(&employee(), ResourceKind::Tickets, Some(misshapen.clone()))
            .expect("lenient");
        assert_eq!(out.text, "CREATE");

        let check_out =
            check(&StaticPolicy, employee(), "tickets", "view", Some(misshapen), false)
                .expect("lenient");
        assert_eq!(check_out.text, "denied (missing_record)");
    }

    #[test]
    fn ticket_table_layout() {
        let text = render_table::<Ticket>();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "tickets");
        assert!(lines[1].starts_with("role"));
        assert!(lines[1].contains("respond"));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("employee") && l.contains("self")));
        assert!(lines
            .iter()
            .any(|l| l.starts_with("admin") && l.contains("no company")));
    }

    #[test]
    fn schedule_table_marks_admin_gap() {
        let text = render_table::<Schedule>();
        let admin = text
            .lines()
            .find(|l| l.starts_with("admin"))
            .expect("admin row");
        assert_eq!(admin.matches("no rule").count(), 4);
    }

    #[test]
    fn sections_and_roles() {
        let out = sections(&StaticPolicy, &employee());
        assert!(!out.text.contains("management"));
        assert!(out.text.contains("/schedule"));

        assert_eq!(roles(&employee()).text, "(none)");
        let owner = User::new("u2", Role::Owner, Some("c1"));
        assert_eq!(roles(&owner).text, "employee\nleader");
    }
}
