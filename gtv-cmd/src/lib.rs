//! Command implementations for the GTV CLI.
//!
//! Provides subcommands for rendering the heat map to SVG and for exporting
//! the drawn cells as CSV.

use anyhow::Context;
use clap::{Args, Subcommand};
use gtv_chart::{pipeline, HeatMap, Layout, MonthOrientation};
use gtv_data::{FileSource, HttpSource, DEFAULT_URL};
use std::path::PathBuf;

pub mod export;
pub mod render;

#[derive(Subcommand)]
pub enum Command {
    /// Render the heat map to an SVG file
    Render {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output path for the SVG document
        #[arg(short, long)]
        output: PathBuf,

        /// Simulate hovering the cell for this year (needs --hover-month)
        #[arg(long, requires = "hover_month")]
        hover_year: Option<i32>,

        /// Simulate hovering the cell for this month, 1-12 (needs --hover-year)
        #[arg(long, requires = "hover_year")]
        hover_month: Option<u32>,
    },

    /// Export one CSV row per drawn cell
    Export {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Output path for the cells CSV
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Where the dataset comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// URL of the monthly variance JSON payload
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Read the payload from a local file instead of fetching it
    #[arg(short, long, conflicts_with = "url")]
    pub input: Option<PathBuf>,
}

/// Canvas geometry overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// JSON file with layout parameters; flags below take precedence
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    pub width: Option<f64>,

    /// Plot height in pixels, legend strip excluded
    #[arg(long)]
    pub height: Option<f64>,

    /// Padding around the plot area
    #[arg(long)]
    pub padding: Option<f64>,

    /// Put January in the top row instead of the bottom row
    #[arg(long)]
    pub january_top: bool,
}

impl LayoutArgs {
    /// Resolve the layout: file (or defaults), then flag overrides.
    pub fn resolve(&self) -> anyhow::Result<Layout> {
        let mut layout = match &self.layout {
            Some(path) => Layout::from_path(path)?,
            None => Layout::default(),
        };
        if let Some(width) = self.width {
            layout.width = width;
        }
        if let Some(height) = self.height {
            layout.height = height;
        }
        if let Some(padding) = self.padding {
            layout.padding = padding;
        }
        if self.january_top {
            layout.month_orientation = MonthOrientation::JanuaryTop;
        }
        layout.validate()?;
        Ok(layout)
    }
}

impl SourceArgs {
    /// Load the dataset once and draw it.
    pub async fn load(&self, layout: &Layout) -> anyhow::Result<HeatMap> {
        let heat_map = match &self.input {
            Some(path) => pipeline::render(&FileSource::new(path), layout)
                .await
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => pipeline::render(&HttpSource::new(self.url.as_str()), layout)
                .await
                .with_context(|| format!("failed to load {}", self.url))?,
        };
        Ok(heat_map)
    }
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            source,
            layout,
            output,
            hover_year,
            hover_month,
        } => {
            let hover = hover_year.zip(hover_month);
            render::run_render(&source, &layout, &output, hover).await
        }
        Command::Export {
            source,
            layout,
            output,
        } => export::run_export(&source, &layout, &output).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_overrides() {
        let args = LayoutArgs {
            width: Some(1000.0),
            padding: Some(50.0),
            january_top: true,
            ..LayoutArgs::default()
        };
        let layout = args.resolve().unwrap();
        assert_eq!(layout.width, 1000.0);
        assert_eq!(layout.height, 600.0);
        assert_eq!(layout.padding, 50.0);
        assert_eq!(layout.month_orientation, MonthOrientation::JanuaryTop);
    }

    #[test]
    fn test_layout_rejects_bad_padding() {
        let args = LayoutArgs {
            width: Some(100.0),
            ..LayoutArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
