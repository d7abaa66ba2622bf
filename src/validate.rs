use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    point::{Point, PointRecord},
};

/// Bounding box of a checked instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub count: usize,
    pub min: Point,
    pub max: Point,
}

/// Verifies that every point is inside `[0, bound]` and no two share a position.
pub fn check(records: &[PointRecord], bound: u32) -> Result<Summary> {
    let mut seen = HashMap::with_capacity(records.len());
    let mut summary = Summary {
        count: records.len(),
        ..Default::default()
    };

    for (i, r) in records.iter().enumerate() {
        if !r.point.within(bound) {
            return Err(Error::OutOfBounds {
                id: r.id,
                point: r.point,
                bound,
            });
        }
        if let Some(&first) = seen.get(&r.point) {
            return Err(Error::Duplicate {
                first,
                second: r.id,
            });
        }
        seen.insert(r.point, r.id);

        if i == 0 {
            summary.min = r.point;
            summary.max = r.point;
        } else {
            summary.min.x = summary.min.x.min(r.point.x);
            summary.min.y = summary.min.y.min(r.point.y);
            summary.max.x = summary.max.x.max(r.point.x);
            summary.max.y = summary.max.y.max(r.point.y);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::records;

    #[test]
    fn summary_of_valid_points() {
        let points = [Point::new(3, 40), Point::new(10, 20), Point::new(7, 0)];
        let summary = check(&records(&points), 500).unwrap();
        assert_eq!(
            summary,
            Summary {
                count: 3,
                min: Point::new(3, 0),
                max: Point::new(10, 40),
            }
        );
    }

    #[test]
    fn empty_is_valid() {
        assert_eq!(check(&[], 0).unwrap().count, 0);
    }

    #[test]
    fn finds_duplicates() {
        let points = [Point::new(1, 1), Point::new(2, 2), Point::new(1, 1)];
        assert!(matches!(
            check(&records(&points), 5),
            Err(Error::Duplicate {
                first: 1,
                second: 3
            })
        ));
    }

    #[test]
    fn finds_out_of_bounds() {
        let points = [Point::new(1, 1), Point::new(6, 2)];
        assert!(matches!(
            check(&records(&points), 5),
            Err(Error::OutOfBounds { id: 2, bound: 5, .. })
        ));
    }
}
