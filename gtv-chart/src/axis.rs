//! Bottom year axis and left month axis.

use crate::layout::Layout;
use crate::scale::Scales;
use crate::surface::{fmt_num, Element, NodeId, Surface};
use gtv_data::month_name;

/// Nodes created by [`draw_axes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisNodes {
    pub x_axis: NodeId,
    pub y_axis: NodeId,
}

/// Draw both axes. Calling this twice on the same surface draws them twice.
pub fn draw_axes<S: Surface>(surface: &mut S, scales: &Scales, layout: &Layout) -> AxisNodes {
    let x_axis = draw_year_axis(surface, scales, layout);
    let y_axis = draw_month_axis(surface, scales, layout);
    AxisNodes { x_axis, y_axis }
}

fn draw_year_axis<S: Surface>(surface: &mut S, scales: &Scales, layout: &Layout) -> NodeId {
    let root = surface.root();
    let axis = surface.append(
        root,
        Element::new("g")
            .attr("id", "x-axis")
            .attr(
                "transform",
                format!("translate(0, {})", fmt_num(layout.plot_bottom())),
            )
            .attr("font-size", 10)
            .attr("text-anchor", "middle"),
    );
    let (x0, x1) = scales.year_to_x.range();
    surface.append(
        axis,
        Element::new("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr(
                "d",
                format!(
                    "M{},{}V0H{}V{}",
                    fmt_num(x0),
                    fmt_num(layout.year_tick_size),
                    fmt_num(x1),
                    fmt_num(layout.year_tick_size)
                ),
            ),
    );
    for year in scales.year_ticks(layout.year_tick_step) {
        let tick = surface.append(
            axis,
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", format!("translate({}, 0)", fmt_num(scales.x(year)))),
        );
        surface.append(
            tick,
            Element::new("line")
                .attr("stroke", "currentColor")
                .num("y2", layout.year_tick_size),
        );
        surface.append(
            tick,
            Element::new("text")
                .attr("fill", "currentColor")
                .num("y", layout.year_tick_size + layout.year_tick_padding)
                .attr("dy", "0.71em")
                .text(year.to_string()),
        );
    }
    axis
}

/// Month ticks are shifted down half a row so line and label sit in the
/// middle of their band instead of on its edge.
fn draw_month_axis<S: Surface>(surface: &mut S, scales: &Scales, layout: &Layout) -> NodeId {
    let root = surface.root();
    let axis = surface.append(
        root,
        Element::new("g")
            .attr("id", "y-axis")
            .attr("transform", format!("translate({}, 0)", fmt_num(layout.plot_left())))
            .attr("font-size", 10)
            .attr("text-anchor", "end"),
    );
    surface.append(
        axis,
        Element::new("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr(
                "d",
                format!(
                    "M-{},{}H0V{}H-{}",
                    fmt_num(layout.tick_size),
                    fmt_num(layout.plot_top()),
                    fmt_num(layout.plot_bottom()),
                    fmt_num(layout.tick_size)
                ),
            ),
    );
    let half_band = scales.cell_height() / 2.0;
    for month in 1..=12u32 {
        let tick = surface.append(
            axis,
            Element::new("g")
                .attr("class", "tick")
                .attr("transform", format!("translate(0, {})", fmt_num(scales.y(month)))),
        );
        surface.append(
            tick,
            Element::new("line")
                .attr("stroke", "currentColor")
                .num("x2", -layout.tick_size)
                .num("y1", half_band)
                .num("y2", half_band),
        );
        surface.append(
            tick,
            Element::new("text")
                .attr("fill", "currentColor")
                .num("x", -(layout.tick_size + layout.tick_padding))
                .num("dy", half_band + layout.month_label_nudge)
                .text(month_name(month).unwrap_or_default()),
        );
    }
    axis
}
