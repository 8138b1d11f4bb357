//! Grid configuration.
//!
//! Every option of the layout engine lives in [`GridConfig`]. Configurations
//! are stored as JSON with `#RRGGBB` / `#RRGGBBAA` colour strings; all fields
//! carry `#[serde(default)]` so a partial file is valid.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use egui::Color32;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::grid::{Direction, WeekendDays};

// ─── Hex-colour serde helper ────────────────────────────────────────────────

pub mod hex_color {
    use egui::Color32;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex(*color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color32, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }

    pub fn to_hex(color: Color32) -> String {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == 255 {
            format!("#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }

    pub fn parse_hex_color(s: &str) -> Result<Color32, String> {
        let s = s.trim().trim_start_matches('#');
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex color '{}': only hex digits allowed", s));
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string());
        match s.len() {
            6 => Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color32::from_rgba_unmultiplied(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => Err(format!("Invalid hex color '{}': expected 6 or 8 hex digits", s)),
        }
    }
}

/// Holiday list stored as date or date-time strings.
mod holiday_list {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    use crate::grid::parse_date_time;

    pub fn serialize<S>(dates: &Option<Vec<NaiveDateTime>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        dates
            .as_ref()
            .map(|list| {
                list.iter()
                    .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
                    .collect::<Vec<_>>()
            })
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<NaiveDateTime>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<Vec<String>> = Deserialize::deserialize(deserializer)?;
        raw.map(|list| {
            list.iter()
                .map(|s| {
                    parse_date_time(s).ok_or_else(|| {
                        serde::de::Error::custom(format!("Invalid holiday date '{}'", s))
                    })
                })
                .collect::<Result<Vec<_>, D::Error>>()
        })
        .transpose()
    }
}

/// Colours handed through to the renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridColors {
    #[serde(with = "hex_color")]
    pub today: Color32,
    #[serde(with = "hex_color")]
    pub weekend: Color32,
    #[serde(with = "hex_color")]
    pub holiday: Color32,
}

impl Default for GridColors {
    fn default() -> Self {
        Self {
            today: Color32::from_rgba_unmultiplied(252, 248, 227, 128),
            weekend: Color32::from_rgb(245, 245, 245),
            holiday: Color32::from_rgb(255, 228, 225),
        }
    }
}

/// All options of a grid layout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub row_height: f32,
    pub column_width: f32,
    /// Width of row bands and separators; `None` spans every date column.
    pub total_width: Option<f32>,
    pub rtl: bool,
    /// Weekend days, 0 = Sunday .. 6 = Saturday. `None` disables the bands.
    pub weekend_days: Option<Vec<u8>>,
    #[serde(with = "holiday_list")]
    pub holidays: Option<Vec<NaiveDateTime>>,
    pub colors: GridColors,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 50.0,
            column_width: 60.0,
            total_width: None,
            rtl: false,
            weekend_days: None,
            holidays: None,
            colors: GridColors::default(),
        }
    }
}

impl GridConfig {
    /// Check the numeric options.
    pub fn validate(&self) -> GridResult<()> {
        check_positive("row_height", self.row_height)?;
        check_positive("column_width", self.column_width)?;
        if let Some(width) = self.total_width {
            if !width.is_finite() || width < 0.0 {
                return Err(GridError::invalid(
                    "total_width",
                    format!("must be a finite number >= 0, got {}", width),
                ));
            }
        }
        self.weekend()?;
        Ok(())
    }

    pub fn direction(&self) -> Direction {
        Direction::from_rtl(self.rtl)
    }

    pub fn weekend(&self) -> GridResult<Option<WeekendDays>> {
        self.weekend_days
            .as_ref()
            .map(|days| WeekendDays::new(days.iter().copied()))
            .transpose()
    }

    /// `total_width`, or the width of `column_count` columns when unset.
    pub fn resolved_width(&self, column_count: usize) -> f32 {
        self.total_width
            .unwrap_or(column_count as f32 * self.column_width)
    }

    // ── Persistence ─────────────────────────────────────────────

    /// Default location: `grid.json` in the OS config directory.
    pub fn default_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "GanttGrid") {
            proj_dirs.config_dir().join("grid.json")
        } else {
            PathBuf::from(".").join("grid.json")
        }
    }

    pub fn load(path: &Path) -> GridResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| GridError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> GridResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no grid config, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> GridResult<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| GridError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GridError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, json).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> GridResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::invalid(
            field,
            format!("must be a finite number > 0, got {}", value),
        ))
    }
}
