//! Instance file encoding.
//!
//! The text form is a count line followed by one `id\tx\ty` line per point,
//! ids starting at 1:
//!
//! ```text
//! 2
//! 1	3	4
//! 2	10	20
//! ```

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    point::{Point, PointRecord},
};

/// Tags each point with its 1-based position.
pub fn records(points: &[Point]) -> Vec<PointRecord> {
    points
        .iter()
        .enumerate()
        .map(|(i, &point)| PointRecord { id: i + 1, point })
        .collect()
}

/// Formats each point as `id\tx\ty`, without a line terminator.
pub fn format(points: &[Point]) -> Vec<String> {
    records(points).iter().map(format_record).collect()
}

fn format_record(r: &PointRecord) -> String {
    format!("{}\t{}\t{}", r.id, r.point.x, r.point.y)
}

/// Writes the count line followed by every formatted point.
pub fn write_instance<W: Write + ?Sized>(w: &mut W, points: &[Point]) -> Result<()> {
    writeln!(w, "{}", points.len())?;
    for line in format(points) {
        writeln!(w, "{line}")?;
    }
    Ok(())
}

/// Reads back what [`write_instance`] produced.
///
/// Fields may be separated by any whitespace. Blank lines are ignored. Ids
/// must run 1, 2, 3, ... and the header count must match the number of
/// records.
pub fn parse_instance<R: BufRead>(reader: R) -> Result<Vec<PointRecord>> {
    let mut expected = None;
    let mut records = Vec::new();
    let mut last_line = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        last_line = number;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let Some(count) = expected else {
            if fields.len() != 1 {
                return Err(parse_error(number, "expected a single point count"));
            }
            let count = parse_field::<usize>(number, "count", fields[0])?;
            expected = Some(count);
            continue;
        };

        if fields.len() != 3 {
            return Err(parse_error(
                number,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        let id = parse_field::<usize>(number, "id", fields[0])?;
        let x = parse_field::<u32>(number, "x", fields[1])?;
        let y = parse_field::<u32>(number, "y", fields[2])?;

        if records.len() == count {
            return Err(parse_error(
                number,
                format!("more than the {count} declared points"),
            ));
        }
        if id != records.len() + 1 {
            return Err(parse_error(
                number,
                format!("expected id {}, found {id}", records.len() + 1),
            ));
        }

        records.push(PointRecord {
            id,
            point: Point::new(x, y),
        });
    }

    match expected {
        None => Err(parse_error(last_line, "missing point count")),
        Some(count) if count != records.len() => Err(parse_error(
            last_line,
            format!("declared {count} points, found {}", records.len()),
        )),
        Some(_) => Ok(records),
    }
}

fn parse_field<T: std::str::FromStr>(line: usize, name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| parse_error(line, format!("invalid {name} {value:?}")))
}

fn parse_error(line: usize, reason: impl Into<String>) -> Error {
    Error::Parse {
        line,
        reason: reason.into(),
    }
}

/// JSON rendition of an instance.
#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    pub points: Vec<PointRecord>,
}

impl Instance {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: records(points),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}
