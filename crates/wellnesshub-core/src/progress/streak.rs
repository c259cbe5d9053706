//! Daily check-in streak computation.

use chrono::NaiveDate;

/// Length of the run of consecutive calendar days ending at the most recent
/// entry date, provided that date is today or yesterday; otherwise 0.
///
/// Duplicates and ordering of the input don't matter; dates are deduplicated
/// and sorted internally. `today` is passed explicitly so callers and tests
/// stay deterministic.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = dates.to_vec();
    days.sort_unstable();
    days.dedup();
    days.reverse();

    let Some(&newest) = days.first() else {
        return 0;
    };
    if (today - newest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    fn day(offset_from_today: u64, today: NaiveDate) -> NaiveDate {
        today.checked_sub_days(Days::new(offset_from_today)).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(current_streak(&[], today()), 0);
    }

    #[test]
    fn single_entry_today_is_one() {
        let t = today();
        assert_eq!(current_streak(&[t], t), 1);
    }

    #[test]
    fn yesterday_still_counts() {
        let t = today();
        assert_eq!(current_streak(&[day(1, t)], t), 1);
    }

    #[test]
    fn two_consecutive_days_is_two() {
        let t = today();
        assert_eq!(current_streak(&[t, day(1, t)], t), 2);
    }

    #[test]
    fn gap_breaks_the_run() {
        let t = today();
        // today and two days ago: the gap at yesterday stops the walk.
        assert_eq!(current_streak(&[t, day(2, t)], t), 1);
    }

    #[test]
    fn stale_history_is_zero() {
        let t = today();
        assert_eq!(current_streak(&[day(2, t), day(3, t), day(4, t)], t), 0);
    }

    #[test]
    fn duplicates_on_one_day_count_once() {
        let t = today();
        assert_eq!(current_streak(&[t, t, t], t), 1);
    }

    #[test]
    fn long_run_with_old_gap() {
        let t = today();
        let dates = vec![t, day(1, t), day(2, t), day(3, t), day(7, t), day(8, t)];
        assert_eq!(current_streak(&dates, t), 4);
    }

    proptest! {
        #[test]
        fn stale_sets_always_score_zero(offsets in proptest::collection::vec(2u64..400, 1..50)) {
            let t = today();
            let dates: Vec<NaiveDate> = offsets.iter().map(|&o| day(o, t)).collect();
            prop_assert_eq!(current_streak(&dates, t), 0);
        }

        #[test]
        fn streak_never_exceeds_distinct_day_count(offsets in proptest::collection::vec(0u64..30, 0..40)) {
            let t = today();
            let dates: Vec<NaiveDate> = offsets.iter().map(|&o| day(o, t)).collect();
            let mut distinct = dates.clone();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert!(current_streak(&dates, t) as usize <= distinct.len());
        }
    }
}
