//! Hover tooltip.
//!
//! A single overlay per heat map. `show` and `hide` only touch the state
//! here; [`Tooltip::draw_overlay`] pushes that state onto the surface.

use crate::layout::Layout;
use crate::surface::{fmt_num, Element, NodeId, Point, Surface};
use gtv_data::Observation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    Visible,
}

/// Size of the drawn tooltip box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipBox {
    pub width: f64,
    pub padding: f64,
    pub line_height: f64,
    pub font_size: f64,
}

impl Default for TooltipBox {
    fn default() -> Self {
        let layout = Layout::default();
        TooltipBox::from_layout(&layout)
    }
}

impl TooltipBox {
    pub fn from_layout(layout: &Layout) -> Self {
        TooltipBox {
            width: layout.tooltip_width,
            padding: layout.tooltip_padding,
            line_height: layout.tooltip_line_height,
            font_size: layout.tooltip_font_size,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tooltip {
    state: TooltipState,
    lines: Vec<String>,
    position: Option<Point>,
    year: Option<i32>,
    offset: (f64, f64),
    frame: TooltipBox,
    node: Option<NodeId>,
}

impl Tooltip {
    /// `offset` is subtracted from the pointer so the box clears the cursor.
    pub fn new(offset: (f64, f64)) -> Self {
        Tooltip {
            offset,
            ..Tooltip::default()
        }
    }

    /// Tooltip with the offset and box geometry of `layout`.
    pub fn from_layout(layout: &Layout) -> Self {
        Tooltip {
            offset: layout.tooltip_offset,
            frame: TooltipBox::from_layout(layout),
            ..Tooltip::default()
        }
    }

    /// Show the tooltip for `observation` near `pointer`.
    pub fn show(&mut self, pointer: Point, observation: &Observation, base_temperature: f64) {
        self.lines = tooltip_lines(observation, base_temperature).to_vec();
        self.position = Some(Point::new(
            pointer.x - self.offset.0,
            pointer.y - self.offset.1,
        ));
        self.year = Some(observation.year);
        self.state = TooltipState::Visible;
    }

    /// Hide the tooltip. Text and position are kept.
    pub fn hide(&mut self) {
        self.state = TooltipState::Hidden;
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == TooltipState::Visible
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Displayed text, one line per row of the box.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Year of the last observation shown.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Create or refresh the `#tooltip` overlay group on `surface`.
    pub fn draw_overlay<S: Surface>(&mut self, surface: &mut S) -> NodeId {
        let node = match self.node {
            Some(node) => {
                surface.clear_children(node);
                node
            }
            None => {
                let root = surface.root();
                let node = surface.append(
                    root,
                    Element::new("g")
                        .attr("id", "tooltip")
                        .attr("pointer-events", "none"),
                );
                self.node = Some(node);
                node
            }
        };

        let visibility = match self.state {
            TooltipState::Visible => "visible",
            TooltipState::Hidden => "hidden",
        };
        surface.set_attribute(node, "visibility", visibility.to_string());
        let position = self.position.unwrap_or(Point::new(0.0, 0.0));
        surface.set_attribute(
            node,
            "transform",
            format!("translate({}, {})", fmt_num(position.x), fmt_num(position.y)),
        );
        if let Some(year) = self.year {
            surface.set_attribute(node, "data-year", year.to_string());
        }

        let frame = self.frame;
        let height = frame.padding * 2.0 + frame.line_height * self.lines.len() as f64;
        surface.append(
            node,
            Element::new("rect")
                .num("width", frame.width)
                .num("height", height)
                .num("rx", 5.0)
                .attr("fill", "rgba(0, 0, 0, 0.8)"),
        );
        let text = surface.append(
            node,
            Element::new("text")
                .attr("fill", "white")
                .num("font-size", frame.font_size)
                .num("y", frame.padding),
        );
        for line in &self.lines {
            surface.append(
                text,
                Element::new("tspan")
                    .num("x", frame.padding)
                    .num("dy", frame.line_height)
                    .text(line.clone()),
            );
        }
        node
    }
}

/// The three tooltip rows: "year - Month", absolute temperature, signed variance.
pub fn tooltip_lines(observation: &Observation, base_temperature: f64) -> [String; 3] {
    let sign = if observation.variance >= 0.0 { "+" } else { "" };
    [
        format!(
            "{} - {}",
            observation.year,
            observation.month_name().unwrap_or_default()
        ),
        format!("{:.1}°C", observation.temperature(base_temperature)),
        format!("{}{:.1}°C", sign, observation.variance),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SvgDocument;

    #[test]
    fn test_sign_convention() {
        let cold = tooltip_lines(&Observation::new(1900, 1, -2.3), 8.66);
        assert!(cold[2].contains("-2.3°C"));
        assert!(!cold[2].contains('+'));

        let warm = tooltip_lines(&Observation::new(2000, 7, 1.5), 8.66);
        assert!(warm[2].contains("+1.5°C"));

        let zero = tooltip_lines(&Observation::new(2000, 7, 0.0), 8.66);
        assert_eq!(zero[2], "+0.0°C");
    }

    #[test]
    fn test_lines() {
        let lines = tooltip_lines(&Observation::new(1753, 3, -1.25), 8.66);
        assert_eq!(lines[0], "1753 - March");
        assert_eq!(lines[1], "7.4°C");
    }

    #[test]
    fn test_hover_then_unhover() {
        let mut tooltip = Tooltip::new((50.0, 90.0));
        assert_eq!(tooltip.state(), TooltipState::Hidden);

        tooltip.show(Point::new(300.0, 200.0), &Observation::new(1850, 6, 0.4), 8.66);
        assert_eq!(tooltip.state(), TooltipState::Visible);
        assert_eq!(tooltip.position(), Some(Point::new(250.0, 110.0)));
        assert_eq!(tooltip.year(), Some(1850));
        let shown = tooltip.text();
        assert!(shown.starts_with("1850 - June"));

        tooltip.hide();
        assert_eq!(tooltip.state(), TooltipState::Hidden);
        assert!(!tooltip.is_visible());
        assert_eq!(tooltip.text(), shown);
        assert_eq!(tooltip.position(), Some(Point::new(250.0, 110.0)));
    }

    #[test]
    fn test_overlay_reflects_state() {
        let mut doc = SvgDocument::new(100.0, 100.0);
        let mut tooltip = Tooltip::new((50.0, 90.0));
        let node = tooltip.draw_overlay(&mut doc);
        assert_eq!(doc.element(node).unwrap().get("visibility"), Some("hidden"));

        tooltip.show(Point::new(60.0, 95.0), &Observation::new(1999, 12, -0.2), 8.66);
        assert_eq!(tooltip.draw_overlay(&mut doc), node);
        let overlay = doc.element(node).unwrap();
        assert_eq!(overlay.get("visibility"), Some("visible"));
        assert_eq!(overlay.get("data-year"), Some("1999"));
        assert_eq!(overlay.get("transform"), Some("translate(10, 5)"));
        assert_eq!(doc.find_by_id("tooltip"), Some(node));
        // box + text, with one tspan per line
        assert_eq!(doc.children(node).len(), 2);
        assert_eq!(doc.children(doc.children(node)[1]).len(), 3);
    }

    #[test]
    fn test_box_follows_layout() {
        let layout = Layout {
            tooltip_width: 200.0,
            tooltip_padding: 4.0,
            tooltip_line_height: 20.0,
            ..Layout::default()
        };
        let mut doc = SvgDocument::new(100.0, 100.0);
        let mut tooltip = Tooltip::from_layout(&layout);
        tooltip.show(Point::new(60.0, 95.0), &Observation::new(1999, 12, -0.2), 8.66);
        let node = tooltip.draw_overlay(&mut doc);

        let frame = doc.element(doc.children(node)[0]).unwrap();
        assert_eq!(frame.get("width"), Some("200"));
        // padding on both sides plus three lines
        assert_eq!(frame.get("height"), Some("68"));
        assert_eq!(doc.element(node).unwrap().get("transform"), Some("translate(10, 5)"));
    }
}
