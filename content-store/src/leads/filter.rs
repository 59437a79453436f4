//! Lead filtering for the leads manager

use chrono::{Local, NaiveDate, TimeZone};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Lead, LeadSource};

/// Longest date span the leads manager accepts (about three months)
pub const MAX_RANGE_DAYS: i64 = 92;

/// Inclusive day range; either bound may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Both bounds set and more than [`MAX_RANGE_DAYS`] apart is rejected.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            let days = (e - s).num_days().abs();
            if days > MAX_RANGE_DAYS {
                return Err(AppError::with_message(
                    ErrorCode::LeadDateRangeTooLong,
                    "时间跨度不能超过3个月 (Time range cannot exceed 3 months)",
                )
                .with_detail("days", days));
            }
        }
        Ok(Self { start, end })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|s| day >= s) && self.end.is_none_or(|e| day <= e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub source: Option<LeadSource>,
    pub range: DateRange,
}

impl LeadFilter {
    pub fn new(source: Option<LeadSource>, range: DateRange) -> Self {
        Self { source, range }
    }

    /// Match using the day the lead was submitted in `tz`
    pub fn matches_in<Tz: TimeZone>(&self, lead: &Lead, tz: &Tz) -> bool {
        if self.source.is_some_and(|s| s != lead.source) {
            return false;
        }
        let day = lead.created_at.with_timezone(tz).date_naive();
        self.range.contains(day)
    }

    /// Matching leads in their original order, days in local time
    pub fn apply(&self, leads: &[Lead]) -> Vec<Lead> {
        self.apply_in(leads, &Local)
    }

    pub fn apply_in<Tz: TimeZone>(&self, leads: &[Lead], tz: &Tz) -> Vec<Lead> {
        leads
            .iter()
            .filter(|lead| self.matches_in(lead, tz))
            .cloned()
            .collect()
    }
}

/// Sources present in `leads`, first occurrence first
pub fn distinct_sources(leads: &[Lead]) -> Vec<LeadSource> {
    let mut sources = Vec::new();
    for lead in leads {
        if !sources.contains(&lead.source) {
            sources.push(lead.source);
        }
    }
    sources
}
