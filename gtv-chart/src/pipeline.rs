//! Load, scale and draw: the whole heat map in one pass.

use crate::axis::{draw_axes, AxisNodes};
use crate::cells::CellGrid;
use crate::color::{LEGEND_COLORS, LEGEND_LABELS};
use crate::layout::Layout;
use crate::legend::draw_legend;
use crate::scale::Scales;
use crate::surface::{NodeId, Point, SvgDocument};
use crate::tooltip::Tooltip;
use gtv_data::{DataSource, Dataset, Result};
use log::{error, info};

/// A fully drawn heat map, ready for hover events or serialization.
#[derive(Debug, Clone)]
pub struct HeatMap {
    dataset: Dataset,
    layout: Layout,
    scales: Scales,
    document: SvgDocument,
    axes: AxisNodes,
    legend: NodeId,
    grid: CellGrid,
    tooltip: Tooltip,
}

/// Load the dataset from `source` and draw it.
///
/// A load failure is logged and returned before anything is drawn.
pub async fn render<S: DataSource>(source: &S, layout: &Layout) -> Result<HeatMap> {
    let dataset = match source.load().await {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset, nothing drawn: {}", e);
            return Err(e);
        }
    };
    Ok(HeatMap::draw(dataset, layout.clone()))
}

impl HeatMap {
    /// Draw a heat map for an already loaded dataset.
    pub fn draw(dataset: Dataset, layout: Layout) -> HeatMap {
        let mut document = SvgDocument::new(layout.width, layout.canvas_height());
        let scales = Scales::build(&dataset, &layout);
        let axes = draw_axes(&mut document, &scales, &layout);
        let grid = CellGrid::draw(&mut document, &dataset, &scales);
        let legend = draw_legend(&mut document, &layout, &LEGEND_COLORS, &LEGEND_LABELS);
        let mut tooltip = Tooltip::from_layout(&layout);
        tooltip.draw_overlay(&mut document);
        info!(
            "Rendered {} cells for {}..={} on a {}x{} canvas",
            grid.len(),
            scales.min_year,
            scales.max_year,
            layout.width,
            layout.canvas_height()
        );
        HeatMap {
            dataset,
            layout,
            scales,
            document,
            axes,
            legend,
            grid,
            tooltip,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn scales(&self) -> &Scales {
        &self.scales
    }

    pub fn document(&self) -> &SvgDocument {
        &self.document
    }

    pub fn axes(&self) -> AxisNodes {
        self.axes
    }

    pub fn legend(&self) -> NodeId {
        self.legend
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Index of the cell for a year and 1-based month.
    pub fn cell_at(&self, year: i32, month: u32) -> Option<usize> {
        self.grid.find(year, month)
    }

    /// Pointer entered cell `index` at `pointer`.
    pub fn pointer_enter(&mut self, index: usize, pointer: Point) -> bool {
        let entered = self.grid.pointer_enter(index, pointer, &mut self.tooltip);
        self.tooltip.draw_overlay(&mut self.document);
        entered
    }

    /// Pointer left the hovered cell.
    pub fn pointer_leave(&mut self) {
        self.grid.pointer_leave(&mut self.tooltip);
        self.tooltip.draw_overlay(&mut self.document);
    }

    /// Pointer moved to `pointer`; fires leave/enter as cells change.
    pub fn pointer_move(&mut self, pointer: Point) {
        if self.grid.pointer_move(pointer, &mut self.tooltip) {
            self.tooltip.draw_overlay(&mut self.document);
        }
    }

    pub fn to_svg(&self) -> String {
        self.document.to_svg_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tooltip::TooltipState;
    use gtv_data::{LoadError, StaticSource};

    const TWO_ROWS: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            { "year": 1900, "month": 1, "variance": -4.8 },
            { "year": 2000, "month": 12, "variance": 1.9 }
        ]
    }"#;

    #[tokio::test]
    async fn test_two_observation_scenario() {
        let heat_map = render(&StaticSource::body(TWO_ROWS), &Layout::default())
            .await
            .unwrap();
        let doc = heat_map.document();
        let cells = doc.select_all("cell");
        assert_eq!(cells.len(), 2);
        assert_eq!(doc.element(cells[0]).unwrap().get("fill"), Some("#210872"));
        // 1.9 sits in [0.84, 1.94)
        assert_eq!(doc.element(cells[1]).unwrap().get("fill"), Some("#d99138"));
        assert!(doc.find_by_id("x-axis").is_some());
        assert!(doc.find_by_id("y-axis").is_some());
        assert_eq!(doc.select_all("colorRect").len(), 9);
    }

    #[tokio::test]
    async fn test_empty_dataset_draws_nothing() {
        let source = StaticSource::body(r#"{"baseTemperature":8.66,"monthlyVariance":[]}"#);
        let result = render(&source, &Layout::default()).await;
        assert!(matches!(result, Err(LoadError::EmptyDataset)));
    }

    #[tokio::test]
    async fn test_network_failure_is_returned() {
        let source = StaticSource::failing(|| LoadError::Network("timed out".into()));
        let result = render(&source, &Layout::default()).await;
        assert!(matches!(result, Err(LoadError::Network(_))));
    }

    #[tokio::test]
    async fn test_hover_updates_overlay() {
        let mut heat_map = render(&StaticSource::body(TWO_ROWS), &Layout::default())
            .await
            .unwrap();
        let index = heat_map.cell_at(2000, 12).unwrap();
        let center = heat_map.grid().cells()[index].rect.center();

        heat_map.pointer_move(center);
        assert_eq!(heat_map.tooltip().state(), TooltipState::Visible);
        assert!(heat_map.tooltip().text().contains("+1.9°C"));
        let overlay = heat_map.document().find_by_id("tooltip").unwrap();
        let element = heat_map.document().element(overlay).unwrap();
        assert_eq!(element.get("visibility"), Some("visible"));
        assert_eq!(element.get("data-year"), Some("2000"));

        heat_map.pointer_leave();
        assert_eq!(heat_map.tooltip().state(), TooltipState::Hidden);
        let element = heat_map.document().element(overlay).unwrap();
        assert_eq!(element.get("visibility"), Some("hidden"));
    }

    #[test]
    fn test_repeated_hover_keeps_document_size() {
        let dataset = Dataset::from_json(TWO_ROWS).unwrap();
        let mut heat_map = HeatMap::draw(dataset, Layout::default());
        let center = heat_map.grid().cells()[0].rect.center();

        heat_map.pointer_move(center);
        let allocated = heat_map.document().allocated();
        let attached = heat_map.document().len();
        for _ in 0..1000 {
            heat_map.pointer_move(center);
        }
        assert_eq!(heat_map.document().allocated(), allocated);

        // crossing between cells redraws the overlay into reused slots
        let other = heat_map.grid().cells()[1].rect.center();
        for _ in 0..100 {
            heat_map.pointer_move(other);
            heat_map.pointer_move(center);
            heat_map.pointer_leave();
        }
        assert_eq!(heat_map.document().allocated(), allocated);
        assert_eq!(heat_map.document().len(), attached);
    }

    #[test]
    fn test_svg_output() {
        let dataset = Dataset::from_json(TWO_ROWS).unwrap();
        let svg = HeatMap::draw(dataset, Layout::default()).to_svg();
        assert!(svg.contains("width=\"1400\" height=\"640\""));
        assert!(svg.contains("class=\"cell\""));
        assert!(svg.contains("data-month=\"11\""));
        assert!(svg.contains("id=\"tooltip\""));
        assert!(svg.contains(">January</text>"));
    }
}
