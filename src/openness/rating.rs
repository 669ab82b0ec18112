//! Rating places over approved tasks' openness values.
//!
//! Tasks sort by descending openness; equal openness shares a place, and the
//! place number only advances when openness strictly drops.

use serde::{Deserialize, Serialize};

use crate::domain::TaskId;

/// Openness inputs for one approved task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskOpenness {
    pub task: TaskId,
    pub openness: f64,
    pub openness_initial: f64,
}

/// One row of the published rating table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub task: TaskId,
    pub openness: f64,
    pub openness_initial: f64,
    /// 1-based place; ties share it.
    pub place: usize,
    /// How many tasks share this place.
    pub place_count: usize,
}

/// Monitoring-level averages reported alongside the rating.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatingAverages {
    pub openness: f64,
    pub openness_initial: f64,
    pub total_tasks: usize,
}

/// Build the rating list and averages for one monitoring cycle.
pub fn rating(tasks: &[TaskOpenness]) -> (Vec<RatingEntry>, RatingAverages) {
    let mut ordered: Vec<TaskOpenness> = tasks.to_vec();
    ordered.sort_by(|a, b| b.openness.total_cmp(&a.openness));

    let mut averages = RatingAverages {
        total_tasks: ordered.len(),
        ..RatingAverages::default()
    };
    if ordered.is_empty() {
        return (Vec::new(), averages);
    }

    averages.openness =
        ordered.iter().map(|t| t.openness).sum::<f64>() / ordered.len() as f64;
    averages.openness_initial =
        ordered.iter().map(|t| t.openness_initial).sum::<f64>() / ordered.len() as f64;

    let mut place = 1;
    let mut threshold = ordered[0].openness;
    let mut entries: Vec<RatingEntry> = Vec::with_capacity(ordered.len());
    let mut counts: Vec<usize> = vec![0];

    for task in ordered {
        if task.openness < threshold {
            place += 1;
            threshold = task.openness;
            counts.push(0);
        }
        counts[place - 1] += 1;
        entries.push(RatingEntry {
            task: task.task,
            openness: task.openness,
            openness_initial: task.openness_initial,
            place,
            place_count: 0,
        });
    }

    for entry in &mut entries {
        entry.place_count = counts[entry.place - 1];
    }

    (entries, averages)
}
