//! Challenge store: the tracked data, the displayed month, and write-through
//! persistence to a storage slot.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::challenge::{ChallengeData, MonthDays};
use crate::day_state::DayState;
use crate::error::{HabitGridError, HabitGridResult};
use crate::grid::{MonthGrid, project_month};
use crate::month::MonthCursor;
use crate::storage::Storage;

/// Per-state counts for one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthStats {
    pub success: usize,
    pub warning: usize,
    pub fail: usize,
}

impl MonthStats {
    pub fn count(&self, state: DayState) -> usize {
        match state {
            DayState::Success => self.success,
            DayState::Warning => self.warning,
            DayState::Fail => self.fail,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.warning + self.fail
    }
}

pub struct ChallengeStore<S: Storage> {
    data: ChallengeData,
    cursor: MonthCursor,
    storage: S,
}

static EMPTY_MONTH: MonthDays = MonthDays::new();

impl<S: Storage> ChallengeStore<S> {
    /// Load the snapshot from `storage`, starting on the month of `today`.
    ///
    /// A missing, unreadable or malformed snapshot loads as empty data.
    pub fn load(storage: S, today: NaiveDate) -> Self {
        let data = load_snapshot(&storage);

        ChallengeStore {
            data,
            cursor: MonthCursor::containing(today),
            storage,
        }
    }

    pub fn data(&self) -> &ChallengeData {
        &self.data
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
    }

    pub fn go_to_prev_month(&mut self) {
        self.cursor = self.cursor.prev();
    }

    pub fn go_to_next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    /// Day states of the displayed month.
    pub fn day_states(&self) -> &MonthDays {
        self.data.month(&self.cursor.key()).unwrap_or(&EMPTY_MONTH)
    }

    pub fn state_of(&self, day: u32) -> Option<DayState> {
        self.day_states().get(&day).copied()
    }

    /// Advance `day` of the displayed month to its next state and persist.
    /// Returns the new state, `None` meaning the day is unset again.
    pub fn toggle_day(&mut self, day: u32) -> HabitGridResult<Option<DayState>> {
        let days_in_month = self.cursor.days_in_month();
        if !(1..=days_in_month).contains(&day) {
            return Err(HabitGridError::InvalidDay {
                day,
                month_key: self.cursor.key().to_string(),
                days_in_month,
            });
        }

        let key = self.cursor.key();
        let next = self.mutate(|data| {
            let days = data.month_mut(&key);
            let next = DayState::advance(days.get(&day).copied());

            match next {
                Some(state) => {
                    days.insert(day, state);
                }
                None => {
                    days.remove(&day);
                }
            }

            next
        })?;

        debug!(month = %key, day, state = ?next, "toggled day");
        Ok(next)
    }

    /// Counts for the displayed month only.
    pub fn stats(&self) -> MonthStats {
        let mut stats = MonthStats::default();

        for state in self.day_states().values() {
            match state {
                DayState::Success => stats.success += 1,
                DayState::Warning => stats.warning += 1,
                DayState::Fail => stats.fail += 1,
            }
        }

        stats
    }

    pub fn has_any_data(&self) -> bool {
        self.data.has_any_data()
    }

    /// Grid of the displayed month relative to `today`.
    pub fn grid(&self, today: NaiveDate) -> HabitGridResult<MonthGrid> {
        project_month(self.cursor.year(), self.cursor.month(), self.day_states(), today)
    }

    /// Apply `change` to the data, then write the full snapshot.
    ///
    /// The change stays applied in memory even if the write fails.
    fn mutate<R>(&mut self, change: impl FnOnce(&mut ChallengeData) -> R) -> HabitGridResult<R> {
        let result = change(&mut self.data);
        self.persist()?;
        Ok(result)
    }

    fn persist(&mut self) -> HabitGridResult<()> {
        let snapshot = self.data.to_json()?;

        if let Err(e) = self.storage.write(&snapshot) {
            warn!(error = %e, "could not persist challenge data");
            return Err(e);
        }

        debug!(bytes = snapshot.len(), "persisted challenge data");
        Ok(())
    }
}

fn load_snapshot<S: Storage>(storage: &S) -> ChallengeData {
    let raw = match storage.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored challenge data, starting empty");
            return ChallengeData::new();
        }
        Err(e) => {
            warn!(error = %e, "could not read challenge data, starting empty");
            return ChallengeData::new();
        }
    };

    let mut data = match ChallengeData::from_json(&raw) {
        Ok(data) => data,
        Err(e) => {
            warn!(error = %e, "stored challenge data is malformed, starting empty");
            return ChallengeData::new();
        }
    };

    let dropped = data.retain_valid_days();
    if dropped > 0 {
        warn!(dropped, "ignored stored days outside their month");
    }

    data
}
