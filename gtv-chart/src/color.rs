//! Variance colour buckets and the static legend tables.

/// One contiguous variance interval and its fill colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBucket {
    /// Exclusive upper bound in °C; `None` for the open top bucket.
    pub upper: Option<f64>,
    pub color: &'static str,
}

/// Ordered from coldest to warmest. Boundaries strictly increase.
pub const BUCKETS: [ColorBucket; 9] = [
    ColorBucket {
        upper: Some(-4.76),
        color: "#210872",
    },
    ColorBucket {
        upper: Some(-3.66),
        color: "#24559b",
    },
    ColorBucket {
        upper: Some(-2.56),
        color: "#5c92ed",
    },
    ColorBucket {
        upper: Some(-1.46),
        color: "#cedefb",
    },
    ColorBucket {
        upper: Some(-0.36),
        color: "#fafa9b",
    },
    ColorBucket {
        upper: Some(0.84),
        color: "#e0c944",
    },
    ColorBucket {
        upper: Some(1.94),
        color: "#d99138",
    },
    ColorBucket {
        upper: Some(3.04),
        color: "#b14d26",
    },
    ColorBucket {
        upper: None,
        color: "#801003",
    },
];

/// Swatch colours drawn in the legend, one per bucket.
pub const LEGEND_COLORS: [&str; 9] = [
    "#210872", "#24559b", "#5c92ed", "#cedefb", "#fafa9b", "#e0c944", "#d99138", "#b14d26",
    "#801003",
];

/// Absolute temperature labels printed at the swatch boundaries.
pub const LEGEND_LABELS: [&str; 10] = [
    "2.8", "3.9", "5.0", "6.1", "7.2", "8.3", "9.5", "10.6", "11.7", "12.8",
];

/// Index of the bucket `variance` falls into.
///
/// Total over every `f64`: a value that is not below any bound (including
/// NaN) lands in the open top bucket.
pub fn bucket_index(variance: f64) -> usize {
    BUCKETS
        .iter()
        .position(|bucket| match bucket.upper {
            Some(upper) => variance < upper,
            None => true,
        })
        .unwrap_or(BUCKETS.len() - 1)
}

/// Fill colour for a variance value.
pub fn color_for(variance: f64) -> &'static str {
    BUCKETS[bucket_index(variance)].color
}
