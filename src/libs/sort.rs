//! Workflow ordering for task lists.
//!
//! Active work comes before finished work, and inside a status tier the most
//! urgent due date comes first:
//!
//! 1. status precedence (`To Do` < `In Progress` < `Completed`)
//! 2. due date ascending, a task with a due date before one without
//! 3. for two completed tasks that both lack a due date, completion date
//!    ascending, present before absent
//! 4. creation time descending (newest first)
//! 5. identifier ascending, so that the order is total
//!
//! ```rust
//! use taskmaster::libs::sort::sort;
//!
//! let ordered = sort(&[]);
//! assert!(ordered.is_empty());
//! ```

use super::task::{Task, TaskStatus};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Returns a sorted copy of `tasks`.
pub fn sort(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Total order used by [`sort`].
pub fn compare(a: &Task, b: &Task) -> Ordering {
    a.status
        .cmp(&b.status)
        .then_with(|| present_first(a.due_date, b.due_date))
        .then_with(|| {
            let undated = a.due_date.is_none() && b.due_date.is_none();
            if undated && a.status == TaskStatus::Completed && b.status == TaskStatus::Completed {
                present_first(a.actual_completion_date, b.actual_completion_date)
            } else {
                Ordering::Equal
            }
        })
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Ascending date order where any date sorts before a missing one.
fn present_first(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
