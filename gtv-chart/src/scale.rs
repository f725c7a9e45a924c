//! Year and month scales derived from the loaded dataset.

use crate::layout::{Layout, MonthOrientation};
use gtv_data::Dataset;

/// Continuous mapping from a domain interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        r0 + (x - d0) / denom * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Twelve equal rows, one per calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthScale {
    top: f64,
    bottom: f64,
    orientation: MonthOrientation,
}

impl MonthScale {
    pub fn new(top: f64, bottom: f64, orientation: MonthOrientation) -> Self {
        MonthScale {
            top,
            bottom,
            orientation,
        }
    }

    pub fn band_height(&self) -> f64 {
        (self.bottom - self.top) / 12.0
    }

    /// Row index counted from the top edge of the plot.
    fn row(&self, month: u32) -> f64 {
        let month = month.clamp(1, 12);
        match self.orientation {
            MonthOrientation::JanuaryBottom => f64::from(12 - month),
            MonthOrientation::JanuaryTop => f64::from(month - 1),
        }
    }

    /// Top edge of the row for a 1-based month.
    pub fn map(&self, month: u32) -> f64 {
        self.top + self.row(month) * self.band_height()
    }

    /// Vertical centre of the row for a 1-based month.
    pub fn center(&self, month: u32) -> f64 {
        self.map(month) + self.band_height() / 2.0
    }
}

/// The pair of scales every drawing step shares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub year_to_x: LinearScale,
    pub month_to_y: MonthScale,
    pub min_year: i32,
    pub max_year: i32,
}

impl Scales {
    /// Derive both scales from the dataset's year span and the layout.
    ///
    /// The year domain ends at `max_year + 1` so the last year keeps a full
    /// cell of room at the right edge.
    pub fn build(dataset: &Dataset, layout: &Layout) -> Scales {
        let min_year = dataset.min_year();
        let max_year = dataset.max_year();
        let year_to_x = LinearScale::new(
            (f64::from(min_year), f64::from(max_year) + 1.0),
            (layout.plot_left(), layout.plot_right()),
        );
        let month_to_y = MonthScale::new(
            layout.plot_top(),
            layout.plot_bottom(),
            layout.month_orientation,
        );
        Scales {
            year_to_x,
            month_to_y,
            min_year,
            max_year,
        }
    }

    pub fn x(&self, year: i32) -> f64 {
        self.year_to_x.map(f64::from(year))
    }

    pub fn y(&self, month: u32) -> f64 {
        self.month_to_y.map(month)
    }

    /// Width of one year column.
    pub fn cell_width(&self) -> f64 {
        let (d0, d1) = self.year_to_x.domain();
        let (r0, r1) = self.year_to_x.range();
        (r1 - r0) / (d1 - d0)
    }

    pub fn cell_height(&self) -> f64 {
        self.month_to_y.band_height()
    }

    /// Years on the x axis that fall on multiples of `step`.
    ///
    /// Spans too short to contain a multiple get one tick per year.
    pub fn year_ticks(&self, step: i32) -> Vec<i32> {
        let step = i64::from(step.max(1));
        let (min, max) = (i64::from(self.min_year), i64::from(self.max_year));
        let first = min + (step - min.rem_euclid(step)) % step;
        let ticks: Vec<i32> = (first..=max)
            .step_by(step as usize)
            .filter_map(|year| i32::try_from(year).ok())
            .collect();
        if ticks.is_empty() {
            (self.min_year..=self.max_year).collect()
        } else {
            ticks
        }
    }
}
