//! Loading of external aperture outlines from two-column text files.
//!
//! A point file lists one `x y` pair per line, separated by whitespace.
//! Blank lines and lines starting with `#` or `!` are ignored. Values are
//! scaled from the file's unit to millimetres.

mod cache;

pub use cache::PointFileCache;

use std::path::Path;

use crate::error::PointFileError;
use crate::math::Point2;

/// Unit assumed when a point file reference does not name one.
pub const DEFAULT_UNIT: &str = "m";

/// Minimum number of points a file must provide.
pub const MIN_POINTS: usize = 3;

/// Factor converting a value in `unit` to millimetres.
///
/// # Errors
///
/// Returns [`PointFileError::UnknownUnit`] for an unrecognised unit.
pub fn unit_scale(unit: &str) -> Result<f64, PointFileError> {
    match unit.trim() {
        "m" => Ok(1000.0),
        "cm" => Ok(10.0),
        "mm" => Ok(1.0),
        "um" => Ok(1e-3),
        "nm" => Ok(1e-6),
        other => Err(PointFileError::UnknownUnit(other.to_owned())),
    }
}

/// Parses point-file text, multiplying every value by `scale`.
///
/// `path` is only used in error messages.
///
/// # Errors
///
/// Returns an error if a data line does not hold exactly two numbers or
/// fewer than [`MIN_POINTS`] points are found.
pub fn parse_points(text: &str, scale: f64, path: &str) -> Result<Vec<Point2>, PointFileError> {
    let mut points = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let malformed = || PointFileError::Malformed {
            path: path.to_owned(),
            line: index + 1,
            content: line.to_owned(),
        };
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(malformed());
        };
        let x: f64 = x.parse().map_err(|_| malformed())?;
        let y: f64 = y.parse().map_err(|_| malformed())?;
        if !x.is_finite() || !y.is_finite() {
            return Err(malformed());
        }
        points.push(Point2::new(x * scale, y * scale));
    }
    if points.len() < MIN_POINTS {
        return Err(PointFileError::TooFewPoints {
            path: path.to_owned(),
            count: points.len(),
        });
    }
    Ok(points)
}

/// Reads and parses a point file, converting its values from `unit` to
/// millimetres.
///
/// # Errors
///
/// Returns an error if the unit is unknown, the file cannot be read, or its
/// content is malformed.
pub fn load(path: impl AsRef<Path>, unit: &str) -> Result<Vec<Point2>, PointFileError> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let scale = unit_scale(unit)?;
    let text = std::fs::read_to_string(path).map_err(|source| PointFileError::Io {
        path: shown.clone(),
        source,
    })?;
    let points = parse_points(&text, scale, &shown)?;
    tracing::debug!(path = %shown, unit, count = points.len(), "loaded aperture point file");
    Ok(points)
}
