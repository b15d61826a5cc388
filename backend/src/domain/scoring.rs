//! Scoring rule: approved task ratings → points → level.
//!
//! A task contributes `round(base_points * rating / 3)` points once it has a
//! rating; 3 is the neutral rating. Rounding happens per task, before the
//! sum. The level is a bucket over the total:
//!
//! | points      | level |
//! |-------------|-------|
//! | 0 – 99      | 1     |
//! | 100 – 249   | 2     |
//! | 250 – 499   | 3     |
//! | 500 – 799   | 4     |
//! | 800 and up  | 5     |

use crate::domain::models::{ChildScore, Rating, Task};

/// Upper bounds (exclusive) of levels 1 to 4
const LEVEL_THRESHOLDS: [u64; 4] = [100, 250, 500, 800];

/// Points earned by one approved task.
///
/// Integer form of round-half-away-from-zero: `base * rating / 3` only ever
/// has a fractional part of 0, 1/3 or 2/3, and `(2x + 3) / 6` floors `x/3 + 1/2`.
pub fn points_for(base_points: u32, rating: Rating) -> u64 {
    let scaled = 2 * base_points as u64 * rating.value() as u64;
    (scaled + 3) / 6
}

pub fn level_for(total_points: u64) -> u8 {
    LEVEL_THRESHOLDS
        .iter()
        .position(|&upper| total_points < upper)
        .map(|index| index as u8 + 1)
        .unwrap_or(LEVEL_THRESHOLDS.len() as u8 + 1)
}

/// Score of `username` over the full task list. Unrated tasks count for nothing.
pub fn score_of<'a, I>(username: &str, tasks: I) -> ChildScore
where
    I: IntoIterator<Item = &'a Task>,
{
    let total_points = tasks
        .into_iter()
        .filter(|task| task.is_owned_by(username))
        .filter_map(|task| task.rating().map(|rating| points_for(task.base_points(), rating)))
        .sum();

    ChildScore {
        total_points,
        level: level_for(total_points),
    }
}
