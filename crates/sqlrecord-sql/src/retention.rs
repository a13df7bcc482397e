//! Retention thinning, evaluated in memory.
//!
//! [`Serializer::prune_by`](crate::Serializer::prune_by) emits the statement
//! that applies the policy inside the database. [`Retention::expired`]
//! computes the same selection over rows held by the caller, e.g. to preview
//! what a prune would remove.

use sqlrecord_core::Result;

use jiff::{
    civil::{Date, DateTime},
    Span,
};
use std::collections::{HashMap, HashSet};

/// Keep every row newer than `days` days, and the earliest-dated rows of
/// each calendar month for everything older.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retention {
    days: u32,
}

impl Retention {
    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Rows strictly before this instant are outside the window. Mirrors
    /// `CURDATE() - INTERVAL n DAY`.
    pub fn cutoff(&self, today: Date) -> Result<DateTime> {
        let date = today.checked_sub(Span::new().try_days(self.days)?)?;
        Ok(date.at(0, 0, 0, 0))
    }

    /// Returns the ids of the rows a prune would delete, in input order.
    ///
    /// The earliest date of each month is computed over all rows, including
    /// those inside the window. A row outside the window survives when its
    /// calendar date equals one of those monthly minimums, so several rows can
    /// survive for a month if they share its earliest day. Rows without a date
    /// are never deleted.
    pub fn expired<I>(&self, today: Date, rows: I) -> Result<Vec<i64>>
    where
        I: IntoIterator<Item = (i64, Option<DateTime>)>,
    {
        let cutoff = self.cutoff(today)?;
        let rows: Vec<_> = rows.into_iter().collect();

        let mut earliest: HashMap<(i16, i8), Date> = HashMap::new();
        for date in rows.iter().filter_map(|(_, at)| at.map(|at| at.date())) {
            earliest
                .entry((date.year(), date.month()))
                .and_modify(|min| *min = (*min).min(date))
                .or_insert(date);
        }

        let keep: HashSet<Date> = earliest.into_values().collect();

        Ok(rows
            .into_iter()
            .filter_map(|(id, at)| {
                let at = at?;
                (at < cutoff && !keep.contains(&at.date())).then_some(id)
            })
            .collect())
    }
}
