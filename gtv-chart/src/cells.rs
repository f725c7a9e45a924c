//! The grid of coloured cells, one per observation, and its hover handling.

use crate::color::color_for;
use crate::scale::Scales;
use crate::surface::{Element, NodeId, Point, Rect, Surface};
use crate::tooltip::{tooltip_lines, Tooltip};
use gtv_data::{Dataset, Observation};
use log::debug;

/// A drawn cell and the observation behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub node: NodeId,
    pub rect: Rect,
    pub fill: &'static str,
    pub observation: Observation,
}

/// All cells of the heat map plus the one currently under the pointer.
#[derive(Debug, Clone, Default)]
pub struct CellGrid {
    cells: Vec<Cell>,
    hovered: Option<usize>,
    base_temperature: f64,
}

impl CellGrid {
    /// Draw one `rect.cell` per observation.
    pub fn draw<S: Surface>(surface: &mut S, dataset: &Dataset, scales: &Scales) -> CellGrid {
        let width = scales.cell_width();
        let height = scales.cell_height();
        let base = dataset.base_temperature();
        let root = surface.root();

        let cells = dataset
            .observations()
            .iter()
            .map(|observation| {
                let rect = Rect::new(
                    scales.x(observation.year),
                    scales.y(observation.month),
                    width,
                    height,
                );
                let fill = color_for(observation.variance);
                let node = surface.append(
                    root,
                    Element::new("rect")
                        .attr("class", "cell")
                        .attr("fill", fill)
                        .attr("data-month", observation.month_index())
                        .attr("data-year", observation.year)
                        .attr("data-temp", observation.temperature(base))
                        .num("x", rect.x)
                        .num("y", rect.y)
                        .num("width", rect.width)
                        .num("height", rect.height),
                );
                surface.append(
                    node,
                    Element::new("title").text(tooltip_lines(observation, base).join("\n")),
                );
                Cell {
                    node,
                    rect,
                    fill,
                    observation: *observation,
                }
            })
            .collect::<Vec<Cell>>();
        debug!("Drew {} cells of {:.2}x{:.2}", cells.len(), width, height);

        CellGrid {
            cells,
            hovered: None,
            base_temperature: base,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the cell currently under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Index of the cell containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.cells.iter().position(|cell| cell.rect.contains(point))
    }

    /// Index of the cell drawn for a given year and 1-based month.
    pub fn find(&self, year: i32, month: u32) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.observation.year == year && cell.observation.month == month)
    }

    /// Pointer entered cell `index`. Returns false for an unknown index.
    pub fn pointer_enter(&mut self, index: usize, pointer: Point, tooltip: &mut Tooltip) -> bool {
        match self.cells.get(index) {
            Some(cell) => {
                tooltip.show(pointer, &cell.observation, self.base_temperature);
                self.hovered = Some(index);
                true
            }
            None => false,
        }
    }

    /// Pointer left the hovered cell.
    pub fn pointer_leave(&mut self, tooltip: &mut Tooltip) {
        self.hovered = None;
        tooltip.hide();
    }

    /// Translate a raw pointer position into leave/enter transitions.
    ///
    /// Moving within the same cell does not re-show the tooltip, matching
    /// enter/leave event semantics. Returns true when the hovered cell changed.
    pub fn pointer_move(&mut self, pointer: Point, tooltip: &mut Tooltip) -> bool {
        let target = self.hit_test(pointer);
        if target == self.hovered {
            return false;
        }
        if self.hovered.is_some() {
            self.pointer_leave(tooltip);
        }
        if let Some(index) = target {
            self.pointer_enter(index, pointer, tooltip);
        }
        true
    }
}
