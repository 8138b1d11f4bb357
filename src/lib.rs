//! Layout geometry for the grid body of a Gantt chart.
//!
//! Given the task rows and the ordered column dates, [`compute_grid_layout`]
//! produces row bands, row separators, column ticks, the today marker and the
//! weekend/holiday highlight bands as plain rectangles and lines. Painting them
//! is left to the caller; [`Rect::to_egui`] and [`Line::to_egui`] place them on
//! an egui canvas.
//!
//! The `gantt-grid` binary is a thin wrapper over [`commands`], which are
//! exposed here for integration tests.

pub mod commands;
pub mod config;
pub mod error;
pub mod grid;
pub mod io;
pub mod model;

pub use config::{GridColors, GridConfig};
pub use error::{GridError, GridResult};
pub use grid::{
    compute_grid_layout, DateColumn, Direction, GridLayout, Line, Rect, RowSpec, TimeUnit,
    WeekendDays,
};
pub use model::{Project, Task, TimelineScale, TimelineViewport};
