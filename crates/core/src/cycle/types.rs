use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One menstrual-cycle observation owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    pub id: Uuid,
    /// The user this cycle belongs to.
    pub user_id: Uuid,
    /// Human-readable month label (e.g. "Jan").
    pub month: String,
    /// Length of the period in days, at least 1.
    pub period_length: u32,
    /// Length of the full cycle in days, at least `period_length`.
    pub cycle_length: u32,
    pub start_date: NaiveDate,
    /// Expected start of the next cycle.
    pub next_cycle_date: NaiveDate,
    /// Ordered dates covered by the period.
    pub period_range: Vec<NaiveDate>,
    /// Ordered dates of the ovulation window.
    pub ovulation_range: Vec<NaiveDate>,
    /// Ordered dates of the unsafe window.
    pub unsafe_range: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cycle {
    /// Creates a cycle for `user_id` from a validated draft.
    ///
    /// Assigns a fresh id and timestamps. When the draft does not carry an
    /// explicit `next_cycle_date`, it defaults to `start_date + cycle_length`
    /// days; any phase prediction beyond that is left to the client.
    pub fn from_draft(user_id: Uuid, draft: CycleDraft) -> Self {
        let now = Utc::now();
        let next_cycle_date = draft.resolved_next_cycle_date();
        Self {
            id: Uuid::new_v4(),
            user_id,
            month: draft.month,
            period_length: draft.period_length,
            cycle_length: draft.cycle_length,
            start_date: draft.start_date,
            next_cycle_date,
            period_range: draft.period_range,
            ovulation_range: draft.ovulation_range,
            unsafe_range: draft.unsafe_range,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every mutable field from a validated draft.
    ///
    /// `id`, `user_id` and `created_at` are preserved; `updated_at` is
    /// bumped to now.
    pub fn apply_draft(&mut self, draft: CycleDraft) {
        self.next_cycle_date = draft.resolved_next_cycle_date();
        self.month = draft.month;
        self.period_length = draft.period_length;
        self.cycle_length = draft.cycle_length;
        self.start_date = draft.start_date;
        self.period_range = draft.period_range;
        self.ovulation_range = draft.ovulation_range;
        self.unsafe_range = draft.unsafe_range;
        self.updated_at = Utc::now();
    }

    /// Sets a specific ID for this cycle (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets both timestamps (useful for testing).
    pub fn with_timestamps(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self.updated_at = at;
        self
    }
}

/// Client-supplied fields for creating or fully replacing a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleDraft {
    pub month: String,
    pub period_length: u32,
    pub cycle_length: u32,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub next_cycle_date: Option<NaiveDate>,
    #[serde(default)]
    pub period_range: Vec<NaiveDate>,
    #[serde(default)]
    pub ovulation_range: Vec<NaiveDate>,
    #[serde(default)]
    pub unsafe_range: Vec<NaiveDate>,
}

impl CycleDraft {
    /// Creates a minimal draft with the required fields.
    pub fn new(
        month: impl Into<String>,
        period_length: u32,
        cycle_length: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            month: month.into(),
            period_length,
            cycle_length,
            start_date,
            next_cycle_date: None,
            period_range: Vec::new(),
            ovulation_range: Vec::new(),
            unsafe_range: Vec::new(),
        }
    }

    /// Sets an explicit next-cycle date.
    pub fn with_next_cycle_date(mut self, date: NaiveDate) -> Self {
        self.next_cycle_date = Some(date);
        self
    }

    /// Sets the period date range.
    pub fn with_period_range(mut self, range: Vec<NaiveDate>) -> Self {
        self.period_range = range;
        self
    }

    /// Sets the ovulation date range.
    pub fn with_ovulation_range(mut self, range: Vec<NaiveDate>) -> Self {
        self.ovulation_range = range;
        self
    }

    /// Sets the unsafe-day date range.
    pub fn with_unsafe_range(mut self, range: Vec<NaiveDate>) -> Self {
        self.unsafe_range = range;
        self
    }

    /// The next-cycle date, defaulted from the start date when absent.
    pub fn resolved_next_cycle_date(&self) -> NaiveDate {
        self.next_cycle_date
            .unwrap_or(self.start_date + Duration::days(i64::from(self.cycle_length)))
    }
}
