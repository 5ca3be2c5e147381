use crate::foundation::core::{Point, Rect};

/// Placement of a row-major day grid: day 1 top-left, `columns` days per row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub columns: u32,
    pub rows: u32,
    /// Dot diameter.
    pub dot: f64,
    /// Space between neighbouring dots.
    pub gap: f64,
    /// Top-left corner of the first dot's bounding box.
    pub origin: Point,
}

impl GridGeometry {
    /// Grid for `total_days` anchored at the origin. Zero columns yields an empty grid.
    pub fn new(total_days: u32, columns: u32, dot: f64, gap: f64) -> Self {
        Self {
            columns,
            rows: rows_for(total_days, columns),
            dot,
            gap,
            origin: Point::ZERO,
        }
    }

    /// Grid whose dot is `max_dot` or smaller, shrunk until the whole grid fits in
    /// `region` (width, height). Gaps stay `gap_ratio` dot diameters wide.
    pub fn fitted(
        total_days: u32,
        columns: u32,
        max_dot: f64,
        gap_ratio: f64,
        region: (f64, f64),
    ) -> Self {
        let rows = rows_for(total_days, columns);
        let fit = |count: u32, extent: f64| match count {
            0 => f64::INFINITY,
            n => extent / (f64::from(n) * (1.0 + gap_ratio) - gap_ratio),
        };
        let dot = max_dot
            .min(fit(columns, region.0))
            .min(fit(rows, region.1))
            .max(0.0);
        Self::new(total_days, columns, dot, dot * gap_ratio)
    }

    pub fn at(self, origin: Point) -> Self {
        Self { origin, ..self }
    }

    /// Distance between neighbouring dot centres.
    pub fn pitch(&self) -> f64 {
        self.dot + self.gap
    }

    pub fn width(&self) -> f64 {
        span(self.columns, self.dot, self.gap)
    }

    pub fn height(&self) -> f64 {
        span(self.rows, self.dot, self.gap)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, (self.width(), self.height()))
    }

    /// Centre of the dot for 1-based `day`.
    pub fn dot_center(&self, day: u32) -> Point {
        let idx = day.saturating_sub(1);
        let (col, row) = match self.columns {
            0 => (0, 0),
            n => (idx % n, idx / n),
        };
        Point::new(
            self.origin.x + f64::from(col) * self.pitch() + self.dot / 2.0,
            self.origin.y + f64::from(row) * self.pitch() + self.dot / 2.0,
        )
    }
}

/// `ceil(total_days / columns)`; 0 when there are no columns.
pub fn rows_for(total_days: u32, columns: u32) -> u32 {
    if columns == 0 {
        return 0;
    }
    total_days.div_ceil(columns)
}

fn span(count: u32, dot: f64, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    f64::from(count) * (dot + gap) - gap
}

#[cfg(test)]
#[path = "../../tests/unit/render/grid.rs"]
mod tests;
