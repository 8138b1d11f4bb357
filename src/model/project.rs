use serde::{Deserialize, Serialize};

use super::task::Task;

/// A Gantt project: a name and the ordered task list that becomes the grid rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

fn default_name() -> String {
    "Untitled Project".to_string()
}

impl Default for Project {
    fn default() -> Self {
        Self {
            name: default_name(),
            tasks: Vec::new(),
        }
    }
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tasks(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }
}
