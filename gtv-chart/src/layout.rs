//! Canvas layout parameters.
//!
//! Every offset the heat map uses lives here so that a canvas of a different
//! size can be described without touching the drawing code. The defaults
//! reproduce the classic 1400×600 page.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which end of the y axis January occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthOrientation {
    /// January in the bottom row, December in the top row.
    #[default]
    JanuaryBottom,
    /// January in the top row, December in the bottom row.
    JanuaryTop,
}

/// Geometry of the heat map canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Canvas width in pixels
    pub width: f64,
    /// Height of the plot region including padding (legend strip excluded)
    pub height: f64,
    /// Padding on every side of the plot area
    pub padding: f64,
    /// Extra height below the plot reserved for the legend
    pub legend_strip: f64,
    /// Horizontal position of the legend group
    pub legend_x: f64,
    /// Distance from the bottom of the plot area to the legend group
    pub legend_gap: f64,
    /// Width of one legend swatch
    pub legend_swatch_width: f64,
    /// Height of one legend swatch
    pub legend_swatch_height: f64,
    /// How far left of a swatch boundary its label starts
    pub legend_label_offset: f64,
    /// Font size of legend labels
    pub legend_font_size: f64,
    /// Length of y axis tick lines
    pub tick_size: f64,
    /// Gap between a tick line and its label
    pub tick_padding: f64,
    /// Length of x axis tick lines
    pub year_tick_size: f64,
    /// Gap between an x axis tick line and its year label
    pub year_tick_padding: f64,
    /// Extra downward nudge applied to month labels after centring
    pub month_label_nudge: f64,
    /// Year step between x axis ticks
    pub year_tick_step: i32,
    pub month_orientation: MonthOrientation,
    /// Offset subtracted from the pointer position when placing the tooltip
    pub tooltip_offset: (f64, f64),
    pub tooltip_width: f64,
    /// Inner padding of the tooltip box
    pub tooltip_padding: f64,
    pub tooltip_line_height: f64,
    pub tooltip_font_size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            width: 1400.0,
            height: 600.0,
            padding: 70.0,
            legend_strip: 40.0,
            legend_x: 200.0,
            legend_gap: 50.0,
            legend_swatch_width: 45.0,
            legend_swatch_height: 25.0,
            legend_label_offset: 10.0,
            legend_font_size: 12.0,
            tick_size: 9.0,
            tick_padding: 6.0,
            year_tick_size: 6.0,
            year_tick_padding: 3.0,
            month_label_nudge: 2.5,
            year_tick_step: 10,
            month_orientation: MonthOrientation::JanuaryBottom,
            tooltip_offset: (50.0, 90.0),
            tooltip_width: 120.0,
            tooltip_padding: 10.0,
            tooltip_line_height: 16.0,
            tooltip_font_size: 12.0,
        }
    }
}

impl Layout {
    /// Parse a layout from JSON; omitted fields keep their defaults.
    pub fn from_json(body: &str) -> serde_json::Result<Layout> {
        serde_json::from_str(body)
    }

    /// Read a JSON layout file.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Layout> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read layout {}", path.display()))?;
        let layout = Layout::from_json(&body)
            .with_context(|| format!("failed to parse layout {}", path.display()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Reject layouts that leave no room for the plot area.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            bail!(
                "padding {} leaves no plot area in a {}x{} canvas",
                self.padding,
                self.width,
                self.height
            );
        }
        if self.year_tick_step <= 0 {
            bail!("year tick step must be positive, got {}", self.year_tick_step);
        }
        Ok(())
    }

    pub fn plot_left(&self) -> f64 {
        self.padding
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    /// Height of one month row.
    pub fn band_height(&self) -> f64 {
        self.plot_height() / 12.0
    }

    /// Total SVG height, plot plus legend strip.
    pub fn canvas_height(&self) -> f64 {
        self.height + self.legend_strip
    }

    pub fn legend_y(&self) -> f64 {
        self.plot_bottom() + self.legend_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_area() {
        let layout = Layout::default();
        assert_eq!(layout.plot_width(), 1260.0);
        assert_eq!(layout.plot_height(), 460.0);
        assert_eq!(layout.canvas_height(), 640.0);
        assert_eq!(layout.legend_y(), 580.0);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let layout =
            Layout::from_json(r#"{ "width": 800, "month_orientation": "january_top" }"#).unwrap();
        assert_eq!(layout.width, 800.0);
        assert_eq!(layout.height, 600.0);
        assert_eq!(layout.month_orientation, MonthOrientation::JanuaryTop);
        assert_eq!(layout.year_tick_size, 6.0);
        assert_eq!(layout.tooltip_width, 120.0);
    }

    #[test]
    fn test_validate_rejects_oversized_padding() {
        let layout = Layout {
            width: 100.0,
            padding: 60.0,
            ..Layout::default()
        };
        assert!(layout.validate().is_err());
    }
}
