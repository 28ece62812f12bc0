use ratatui::layout::{Position, Rect};

/// Screen placement of the visible rows of a list, supplied by the render layer
pub trait RowGeometry {
    /// Bounding box of visible row `slot` (0 = top of the viewport)
    fn row_bounds(&self, slot: usize) -> Option<Rect>;

    /// For cycle rows: x coordinate where the option arrows begin.
    /// Points at or right of it hit the arrow region.
    fn arrow_split(&self, _slot: usize) -> Option<u16> {
        None
    }
}

/// Geometry with no rows; pointer input never hits anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRows;

impl RowGeometry for NoRows {
    fn row_bounds(&self, _slot: usize) -> Option<Rect> {
        None
    }
}

/// Uniform rows stacked below `origin`
#[derive(Debug, Clone, Copy)]
pub struct FixedRows {
    pub origin: Rect,
    pub row_height: u16,
}

impl RowGeometry for FixedRows {
    fn row_bounds(&self, slot: usize) -> Option<Rect> {
        let offset = u16::try_from(slot).ok()?.checked_mul(self.row_height)?;
        if offset >= self.origin.height {
            return None;
        }
        let y = self.origin.y.checked_add(offset)?;
        let height = self.row_height.min(self.origin.height - offset);
        Some(Rect::new(self.origin.x, y, self.origin.width, height))
    }
}

/// Which part of a row a point falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRegion {
    Label,
    Arrow,
}

/// Hit-test visible slots. Returns the slot and region under the point.
pub fn hit_slot(
    geometry: &dyn RowGeometry,
    rows: usize,
    x: u16,
    y: u16,
) -> Option<(usize, RowRegion)> {
    let point = Position::new(x, y);
    (0..rows).find_map(|slot| {
        let bounds = geometry.row_bounds(slot)?;
        if !bounds.contains(point) {
            return None;
        }
        let region = match geometry.arrow_split(slot) {
            Some(split) if x >= split => RowRegion::Arrow,
            _ => RowRegion::Label,
        };
        Some((slot, region))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_rows_bounds() {
        let rows = FixedRows { origin: Rect::new(2, 5, 20, 3), row_height: 1 };
        assert_eq!(rows.row_bounds(0), Some(Rect::new(2, 5, 20, 1)));
        assert_eq!(rows.row_bounds(2), Some(Rect::new(2, 7, 20, 1)));
        assert_eq!(rows.row_bounds(3), None);
    }

    #[test]
    fn test_hit_slot() {
        let rows = FixedRows { origin: Rect::new(0, 0, 10, 5), row_height: 1 };
        assert_eq!(hit_slot(&rows, 5, 3, 2), Some((2, RowRegion::Label)));
        assert_eq!(hit_slot(&rows, 2, 3, 2), None);
        assert_eq!(hit_slot(&rows, 5, 30, 2), None);
        assert_eq!(hit_slot(&NoRows, 5, 0, 0), None);
    }

    struct Split;

    impl RowGeometry for Split {
        fn row_bounds(&self, slot: usize) -> Option<Rect> {
            Some(Rect::new(0, slot as u16, 20, 1))
        }

        fn arrow_split(&self, _slot: usize) -> Option<u16> {
            Some(12)
        }
    }

    #[test]
    fn test_hit_arrow_region() {
        assert_eq!(hit_slot(&Split, 3, 11, 1), Some((1, RowRegion::Label)));
        assert_eq!(hit_slot(&Split, 3, 12, 1), Some((1, RowRegion::Arrow)));
    }
}
