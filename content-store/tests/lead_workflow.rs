use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use content_store::core::{ContentStore, NoopObserver, PersistStatus};
use content_store::leads::{CSV_HEADER, DateRange, LeadFilter, distinct_sources, export_csv_in};
use content_store::stats::DashboardStats;
use content_store::storage::MemoryStorage;
use shared::error::ErrorCode;
use shared::models::{Lead, LeadSource, LeadStatus, LeadSubmission};
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn lead_at(id: &str, source: LeadSource, at: &str) -> Lead {
    Lead {
        id: id.to_string(),
        name: format!("客户{id}"),
        email: String::new(),
        phone: Some("13800000000".to_string()),
        company: None,
        message: String::new(),
        source,
        status: LeadStatus::New,
        created_at: at.parse::<DateTime<Utc>>().unwrap(),
    }
}

#[test]
fn contact_form_to_status_update() {
    let store = ContentStore::open(Arc::new(MemoryStorage::new()), Arc::new(NoopObserver));

    let lead = store
        .add_lead(
            LeadSubmission::new("张先生", "13800138000", LeadSource::ContactPage)
                .with_company("未来科技")
                .with_message("需要 5 台 M2"),
        )
        .unwrap();
    assert_eq!(store.find_lead(&lead.id).unwrap().status, LeadStatus::New);
    assert_eq!(DashboardStats::collect(&store.snapshot()).new_leads, 2);

    assert_eq!(
        store.update_lead_status(&lead.id, LeadStatus::Contacted),
        PersistStatus::Saved
    );
    assert_eq!(
        store.update_lead_status("nope", LeadStatus::Closed),
        PersistStatus::Unchanged
    );

    let stored = store.find_lead(&lead.id).unwrap();
    assert_eq!(stored.status, LeadStatus::Contacted);
    assert_eq!(stored.company.as_deref(), Some("未来科技"));
    assert_eq!(DashboardStats::collect(&store.snapshot()).new_leads, 1);
}

#[test]
fn submissions_without_name_or_phone_are_rejected() {
    let store = ContentStore::open(Arc::new(MemoryStorage::new()), Arc::new(NoopObserver));
    let before = store.leads();

    let err = store
        .add_lead(LeadSubmission::new("  ", "13800138000", LeadSource::Footer))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RequiredField);

    let mut no_phone = LeadSubmission::new("Bob", "", LeadSource::Footer);
    no_phone.phone = None;
    assert!(store.add_lead(no_phone).is_err());

    assert_eq!(store.leads(), before);
}

#[test]
fn filter_by_source_and_local_day() {
    let leads = vec![
        lead_at("a", LeadSource::Footer, "2024-03-01T15:30:00Z"),
        lead_at("b", LeadSource::ContactPage, "2024-03-01T17:00:00Z"),
        lead_at("c", LeadSource::Footer, "2024-02-28T09:00:00Z"),
    ];
    let beijing = FixedOffset::east_opt(8 * 3600).unwrap();

    // 17:00Z is already March 2nd in UTC+8
    let march_first = LeadFilter::new(None, DateRange::new(Some(day(2024, 3, 1)), Some(day(2024, 3, 1))).unwrap());
    let ids: Vec<_> = march_first
        .apply_in(&leads, &beijing)
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec!["a"]);

    let utc_ids: Vec<_> = march_first
        .apply_in(&leads, &Utc)
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(utc_ids, vec!["a", "b"]);

    let footer = LeadFilter::new(Some(LeadSource::Footer), DateRange::unbounded());
    assert_eq!(footer.apply_in(&leads, &Utc).len(), 2);

    assert_eq!(
        distinct_sources(&leads),
        vec![LeadSource::Footer, LeadSource::ContactPage]
    );
}

#[test]
fn date_span_over_three_months_is_rejected() {
    let err = DateRange::new(Some(day(2024, 1, 1)), Some(day(2024, 6, 1))).unwrap_err();
    assert_eq!(err.code, ErrorCode::LeadDateRangeTooLong);

    assert!(DateRange::new(Some(day(2024, 1, 1)), Some(day(2024, 4, 1))).is_ok());
    assert!(DateRange::new(Some(day(2020, 1, 1)), None).is_ok());
}

#[test]
fn export_filtered_leads() {
    let mut quoted = lead_at("q", LeadSource::CustomPage, "2024-03-01T01:02:03Z");
    quoted.message = "颜色: \"黑\", 尺寸 S".to_string();
    let leads = vec![quoted, lead_at("f", LeadSource::Footer, "2024-01-15T00:00:00Z")];

    let filter = LeadFilter::new(Some(LeadSource::CustomPage), DateRange::unbounded());
    let csv = export_csv_in(&filter.apply_in(&leads, &Utc), &Utc);

    let body = csv.trim_start_matches('\u{feff}');
    let lines: Vec<_> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(
        lines[1],
        "2024-03-01 01:02:03,CustomPage,客户q,,,13800000000,\"颜色: \"\"黑\"\", 尺寸 S\""
    );
}
