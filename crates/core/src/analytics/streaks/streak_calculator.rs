//! Consecutive-activity streak calculation.

use chrono::NaiveDate;

use crate::transactions::Transaction;

/// Length of the unbroken run of consecutive calendar days with at least one
/// transaction, ending at the set's most recent date.
///
/// The streak is anchored to the most recent *transaction* date, never to
/// the current real-world date: a user who stopped recording months ago
/// still sees the length of their last run. Multiple transactions on one
/// day count once; an empty set yields 0.
pub fn transaction_streak<'a, I>(transactions: I) -> u32
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut dates: Vec<NaiveDate> = transactions.into_iter().map(|t| t.date).collect();
    if dates.is_empty() {
        return 0;
    }
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();

    let mut streak = 1;
    let mut current = dates[0];
    for &date in &dates[1..] {
        match current.pred_opt() {
            Some(previous_day) if date == previous_day => {
                streak += 1;
                current = date;
            }
            _ => break,
        }
    }
    streak
}
