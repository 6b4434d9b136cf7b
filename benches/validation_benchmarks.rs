//! Benchmarks for field validation and hand-off building.
//!
//! - Individual field rules (regex-backed email and phone checks)
//! - Full `prepare` on valid and invalid requests
//! - A complete submit through the in-memory page

use contact_handoff::{
    Config, ContactForm, ContactRequest, Field, FormValidator, ManualScheduler, MemoryDocument,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;
use std::time::Duration;

fn sample_request() -> ContactRequest {
    ContactRequest::new("Jo Example", "jo@example.com")
        .with_phone("+1 (555) 123-4567")
        .with_message("I'd like to book an introductory session next week.")
}

fn bench_field_rules(c: &mut Criterion) {
    c.bench_function("validate_name", |b| {
        b.iter(|| FormValidator::validate_name(black_box("  Jo Example  ")))
    });
    c.bench_function("validate_email", |b| {
        b.iter(|| FormValidator::validate_email(black_box("jo@example.com")))
    });
    c.bench_function("validate_phone", |b| {
        b.iter(|| FormValidator::validate_phone(black_box("+1 (555) 123-4567")))
    });
}

fn bench_prepare(c: &mut Criterion) {
    let validator = FormValidator::default();
    let valid = sample_request();
    let invalid = ContactRequest::new("J", "nope").with_phone("123");

    c.bench_function("prepare_valid", |b| {
        b.iter(|| validator.prepare(black_box(&valid)))
    });
    c.bench_function("prepare_invalid", |b| {
        b.iter(|| validator.prepare(black_box(&invalid)))
    });
}

fn bench_submit(c: &mut Criterion) {
    let request = sample_request();

    c.bench_function("submit_and_complete", |b| {
        b.iter(|| {
            let page = Arc::new(MemoryDocument::contact_page());
            let clock = Arc::new(ManualScheduler::new());
            let form = ContactForm::init(page.clone(), clock.clone(), &Config::default())
                .expect("fixture page is complete");
            for field in Field::ALL {
                page.fill(field, request.value(field));
            }
            let outcome = form.submit();
            clock.advance(Duration::from_secs(1));
            outcome
        })
    });
}

criterion_group!(benches, bench_field_rules, bench_prepare, bench_submit);
criterion_main!(benches);
