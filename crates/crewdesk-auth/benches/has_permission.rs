//! Benchmark: permission check cost
//!
//! # Background
//!
//! List pages call `allowed_actions` once per row to decide which
//! affordances to render, so a page of 100 tickets runs ~500 checks.
//! This tracks the typed path against the string-keyed path that
//! request handlers use.
//!
//! # When to revisit
//!
//! - If predicates start allocating (e.g. string normalization)
//! - If the string path becomes the hot path for list pages

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use crewdesk_auth::{allowed_actions, check, has_permission, Query, TicketAction};
use crewdesk_types::{Role, Ticket, User};

fn bench_single_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("has_permission");

    let leader = User::new("u1", Role::Leader, Some("c1"));
    let ticket = Ticket::new("u2", Some("c1"));

    group.bench_function("typed/literal", |b| {
        b.iter(|| black_box(has_permission::<Ticket>(&leader, TicketAction::Create, None)));
    });

    group.bench_function("typed/predicate", |b| {
        b.iter(|| black_box(has_permission(&leader, TicketAction::Close, Some(&ticket))));
    });

    group.bench_function("query/predicate", |b| {
        let query = Query::new("tickets", "close").with_record(&ticket);
        b.iter(|| black_box(check(&leader, &query)));
    });

    group.finish();
}

fn bench_list_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("allowed_actions_page");
    let employee = User::new("u1", Role::Employee, Some("c1"));

    for rows in [10, 100, 500] {
        group.throughput(Throughput::Elements(rows as u64));
        let tickets: Vec<Ticket> = (0..rows)
            .map(|i| Ticket::new(format!("u{}", i % 3), Some("c1")))
            .collect();

        group.bench_with_input(BenchmarkId::new("Employee", rows), &tickets, |b, tickets| {
            b.iter(|| {
                for ticket in tickets {
                    black_box(allowed_actions(&employee, Some(ticket)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_check, bench_list_page);
criterion_main!(benches);
