//! Heat map rendering for the global temperature variance dataset.
//!
//! This crate provides:
//! - `layout`: canvas geometry, every offset configurable
//! - `scale`: year → x and month → y scales
//! - `color`: variance buckets and legend tables
//! - `surface`: the retained SVG scene drawing code appends to
//! - `axis`, `cells`, `legend`, `tooltip`: the drawing steps
//! - `pipeline`: load + draw, and the resulting `HeatMap`

pub mod axis;
pub mod cells;
pub mod color;
pub mod layout;
pub mod legend;
pub mod pipeline;
pub mod scale;
pub mod surface;
pub mod tooltip;

pub use layout::{Layout, MonthOrientation};
pub use pipeline::{render, HeatMap};
pub use scale::Scales;
pub use surface::{Point, SvgDocument};
pub use tooltip::{Tooltip, TooltipBox, TooltipState};
