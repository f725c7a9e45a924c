//! Static colour legend below the plot.

use crate::layout::Layout;
use crate::surface::{fmt_num, Element, NodeId, Surface};

/// Draw a row of colour swatches with boundary labels.
///
/// `labels` holds one more entry than `colors`: label `i` marks the left
/// boundary of swatch `i`, the last one the right boundary of the last swatch.
pub fn draw_legend<S: Surface>(
    surface: &mut S,
    layout: &Layout,
    colors: &[&str],
    labels: &[&str],
) -> NodeId {
    let root = surface.root();
    let legend = surface.append(
        root,
        Element::new("g")
            .attr("id", "legend")
            .attr(
                "transform",
                format!(
                    "translate({}, {})",
                    fmt_num(layout.legend_x),
                    fmt_num(layout.legend_y())
                ),
            ),
    );

    let width = layout.legend_swatch_width;
    let height = layout.legend_swatch_height;
    for (i, color) in colors.iter().enumerate() {
        surface.append(
            legend,
            Element::new("rect")
                .attr("class", "colorRect")
                .num("x", i as f64 * width)
                .num("y", 0.0)
                .num("width", width)
                .num("height", height)
                .attr("fill", color),
        );
    }
    for (i, label) in labels.iter().enumerate() {
        surface.append(
            legend,
            Element::new("text")
                .num("x", i as f64 * width - layout.legend_label_offset)
                .num("y", height * 1.5)
                .attr("font-size", format!("{}px", fmt_num(layout.legend_font_size)))
                .attr("alignment-baseline", "middle")
                .text(*label),
        );
    }
    legend
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{LEGEND_COLORS, LEGEND_LABELS};
    use crate::surface::SvgDocument;

    #[test]
    fn test_legend_layout() {
        let layout = Layout::default();
        let mut doc = SvgDocument::new(layout.width, layout.canvas_height());
        let legend = draw_legend(&mut doc, &layout, &LEGEND_COLORS, &LEGEND_LABELS);

        assert_eq!(doc.find_by_id("legend"), Some(legend));
        assert_eq!(
            doc.element(legend).unwrap().get("transform"),
            Some("translate(200, 580)")
        );

        let swatches = doc.select_all("colorRect");
        assert_eq!(swatches.len(), 9);
        let last = doc.element(swatches[8]).unwrap();
        assert_eq!(last.get("x"), Some("360"));
        assert_eq!(last.get("fill"), Some("#801003"));

        let texts: Vec<_> = doc
            .children(legend)
            .iter()
            .filter_map(|&n| doc.element(n))
            .filter(|e| e.tag == "text")
            .collect();
        assert_eq!(texts.len(), 10);
        assert_eq!(texts[0].get("x"), Some("-10"));
        assert_eq!(texts[0].get("y"), Some("37.5"));
        assert_eq!(texts[9].text.as_deref(), Some("12.8"));
    }
}
