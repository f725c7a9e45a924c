//! Export the drawn cells as CSV.
//!
//! One row per cell, carrying the same values the SVG publishes in its
//! `data-*` attributes plus the cell's position and fill.

use crate::{LayoutArgs, SourceArgs};
use gtv_chart::HeatMap;
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CellRow {
    year: i32,
    month: u32,
    data_month: u32,
    variance: f64,
    temp: f64,
    fill: &'static str,
    x: f64,
    y: f64,
}

/// Load the dataset, draw it and write the cells CSV to `output`.
pub async fn run_export(
    source: &SourceArgs,
    layout: &LayoutArgs,
    output: &Path,
) -> anyhow::Result<()> {
    let layout = layout.resolve()?;
    let heat_map = source.load(&layout).await?;
    let file = std::fs::File::create(output)?;
    let rows = write_cells_csv(&heat_map, file)?;
    info!("Export complete. {} rows written to {}", rows, output.display());
    Ok(())
}

/// Write the header and one row per cell. Returns the row count.
pub fn write_cells_csv<W: Write>(heat_map: &HeatMap, writer: W) -> anyhow::Result<usize> {
    let base = heat_map.dataset().base_temperature();
    let mut wtr = csv::Writer::from_writer(writer);
    for cell in heat_map.grid().cells() {
        let observation = cell.observation;
        wtr.serialize(CellRow {
            year: observation.year,
            month: observation.month,
            data_month: observation.month_index(),
            variance: observation.variance,
            temp: observation.temperature(base),
            fill: cell.fill,
            x: cell.rect.x,
            y: cell.rect.y,
        })?;
    }
    wtr.flush()?;
    Ok(heat_map.grid().len())
}
