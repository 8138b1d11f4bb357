use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::geometry::{Line, Rect};
use crate::model::Task;

/// One task row of the grid. Its index decides the vertical offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSpec {
    pub id: Uuid,
    pub index: usize,
}

impl RowSpec {
    pub fn new(id: Uuid, index: usize) -> Self {
        Self { id, index }
    }

    /// One row per task, in task order.
    pub fn from_tasks(tasks: &[Task]) -> Vec<RowSpec> {
        tasks
            .iter()
            .enumerate()
            .map(|(index, task)| RowSpec::new(task.id, index))
            .collect()
    }
}

/// Row bands and separators, plus the stacked height every overlay spans.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub bands: Vec<Rect>,
    pub lines: Vec<Line>,
    pub height: f32,
}

/// Stack `row_count` rows of `row_height` top to bottom.
///
/// There is always a separator at `y = 0`, followed by one under each row.
pub fn layout_rows(row_count: usize, row_height: f32, total_width: f32) -> RowLayout {
    let mut bands = Vec::with_capacity(row_count);
    let mut lines = Vec::with_capacity(row_count + 1);
    lines.push(Line::horizontal(0.0, total_width));

    for index in 0..row_count {
        let y = index as f32 * row_height;
        bands.push(Rect::new(0.0, y, total_width, row_height));
        lines.push(Line::horizontal(y + row_height, total_width));
    }

    RowLayout {
        bands,
        lines,
        height: row_count as f32 * row_height,
    }
}
