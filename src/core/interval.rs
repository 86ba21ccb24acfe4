//! Sort-and-sweep merging of calendar intervals.
//!
//! Open-ended spans are resolved against a single `now` before sorting, and
//! totals are always taken over the merged result, never over the raw spans.
//! The month total is capped at the sum of the members' own months: flooring
//! per merged interval can otherwise join two partial months into a whole one.

use chrono::{Datelike, NaiveDate};

use crate::domain::model::{DateSpan, Interval, MergeSummary};
use crate::utils::error::{Result, TimelineError};

/// Coverage below this many days is reported as sub-month.
pub const SUB_MONTH_DAYS: i64 = 30;

impl Interval {
    /// An open span started after `now` resolves to a zero-length interval.
    pub fn resolve(span: &DateSpan, now: NaiveDate) -> Self {
        let end = span.end.unwrap_or(now).max(span.start);
        Self {
            start: span.start,
            end,
            is_open_ended: span.is_open_ended(),
        }
    }

    /// Whole calendar months covered; a partial final month does not count.
    pub fn months(&self) -> u32 {
        let mut months = (self.end.year() - self.start.year()) * 12
            + (self.end.month() as i32 - self.start.month() as i32);
        if self.end.day() < self.start.day() {
            months -= 1;
        }
        months.max(0) as u32
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Orders by start, then by effective end.
pub fn sort_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));
    intervals
}

/// Collapses sorted intervals into the minimal disjoint set. Touching
/// intervals (`next.start == current.end`) merge.
pub fn sweep(sorted: Vec<Interval>) -> Vec<Interval> {
    sorted.into_iter().fold(Vec::new(), |mut merged: Vec<Interval>, next| {
        match merged.last_mut() {
            Some(current) if next.start <= current.end => {
                current.end = current.end.max(next.end);
                current.is_open_ended |= next.is_open_ended;
            }
            _ => merged.push(next),
        }
        merged
    })
}

pub fn merge(spans: &[DateSpan], now: NaiveDate) -> Result<MergeSummary> {
    if spans.is_empty() {
        return Err(TimelineError::EmptyIntervals);
    }

    let resolved: Vec<Interval> = spans.iter().map(|span| Interval::resolve(span, now)).collect();
    let member_months: u32 = resolved.iter().map(Interval::months).sum();
    let disjoint = sweep(sort_intervals(resolved));

    let is_current = disjoint.iter().any(|interval| interval.is_open_ended);
    let merged_months: u32 = disjoint.iter().map(Interval::months).sum();
    let total_duration_months = merged_months.min(member_months);
    let total_duration_days: i64 = disjoint.iter().map(Interval::days).sum();

    tracing::debug!(
        input = spans.len(),
        disjoint = disjoint.len(),
        total_duration_months,
        total_duration_days,
        "merged intervals"
    );

    Ok(MergeSummary {
        disjoint,
        is_current,
        total_duration_months,
        total_duration_days,
        is_sub_month: total_duration_days < SUB_MONTH_DAYS,
    })
}
