use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use clap::Args;
use tracing::info;

use crate::grid::parse_date_time;
use crate::{
    compute_grid_layout, io, GridConfig, GridError, GridResult, RowSpec, Task, TimelineScale,
    TimelineViewport,
};

/// Lay out the grid for a project and render it as JSON
#[derive(Debug, Default, Args)]
pub struct LayoutCommand {
    /// Project JSON file
    #[arg(long, conflicts_with = "csv", required_unless_present = "csv")]
    pub project: Option<PathBuf>,

    /// CSV task list
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Time covered by one column: days, weeks or months
    #[arg(long, default_value_t = TimelineScale::Days)]
    pub scale: TimelineScale,

    /// Instant used for the today marker, e.g. 2024-01-03T12:00:00 (defaults to now)
    #[arg(long, value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    /// Right-to-left layout (overrides the config file)
    #[arg(long)]
    pub rtl: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl LayoutCommand {
    /// Load the config and tasks, compute the layout and return it as JSON.
    pub fn execute(&self, config_path: &Path) -> GridResult<String> {
        let mut config = GridConfig::load_or_default(config_path)?;
        config.rtl |= self.rtl;

        let tasks = load_tasks(self.project.as_deref(), self.csv.as_deref())?;
        let now = self.now.unwrap_or_else(|| chrono::Local::now().naive_local());

        let viewport = TimelineViewport::for_tasks(&tasks, now.date(), self.scale);
        let dates = viewport.column_dates()?;
        let rows = RowSpec::from_tasks(&tasks);
        info!(
            rows = rows.len(),
            columns = dates.len(),
            scale = %self.scale,
            start = %viewport.start,
            end = %viewport.end,
            "laying out grid"
        );

        let layout = compute_grid_layout(&rows, &dates, &config, now)?;
        let json = if self.pretty {
            serde_json::to_string_pretty(&layout)
        } else {
            serde_json::to_string(&layout)
        };
        json.map_err(GridError::Serialize)
    }
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    parse_date_time(s).ok_or_else(|| format!("invalid date '{}': expected YYYY-MM-DD[THH:MM:SS]", s))
}

fn load_tasks(project: Option<&Path>, csv: Option<&Path>) -> GridResult<Vec<Task>> {
    match (project, csv) {
        (Some(path), _) => Ok(io::load_project(path)?.tasks),
        (None, Some(path)) => {
            let (tasks, skipped) = io::import_csv(path)?;
            if skipped > 0 {
                info!(skipped, "some CSV rows were skipped");
            }
            Ok(tasks)
        }
        (None, None) => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_now_accepts_date_and_date_time() {
        let day = parse_now("2024-01-03").unwrap();
        assert_eq!(day.to_string(), "2024-01-03 00:00:00");
        let instant = parse_now("2024-01-03T12:30:00").unwrap();
        assert_eq!(instant.to_string(), "2024-01-03 12:30:00");
    }

    #[test]
    fn test_parse_now_rejects_garbage() {
        let err = parse_now("next tuesday").unwrap_err();
        assert!(err.contains("next tuesday"));
    }
}
