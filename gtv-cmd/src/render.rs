//! Render the heat map to an SVG document.

use crate::{LayoutArgs, SourceArgs};
use gtv_chart::HeatMap;
use log::{info, warn};
use std::path::Path;

/// Load the dataset, draw it and write the SVG to `output`.
///
/// `hover` is a `(year, month)` pair; when given, the pointer is moved to the
/// centre of that cell first so the tooltip overlay is drawn visible.
pub async fn run_render(
    source: &SourceArgs,
    layout: &LayoutArgs,
    output: &Path,
    hover: Option<(i32, u32)>,
) -> anyhow::Result<()> {
    let layout = layout.resolve()?;
    let mut heat_map = source.load(&layout).await?;

    if let Some((year, month)) = hover {
        if !hover_cell(&mut heat_map, year, month) {
            warn!("No cell for {}-{:02}; tooltip left hidden", year, month);
        }
    }

    std::fs::write(output, heat_map.to_svg())?;
    info!(
        "Render complete. {} cells written to {}",
        heat_map.grid().len(),
        output.display()
    );
    Ok(())
}

/// Move the pointer onto the cell for `year`/`month`. False if there is none.
pub fn hover_cell(heat_map: &mut HeatMap, year: i32, month: u32) -> bool {
    let Some(index) = heat_map.cell_at(year, month) else {
        return false;
    };
    let center = heat_map.grid().cells()[index].rect.center();
    heat_map.pointer_move(center);
    true
}
