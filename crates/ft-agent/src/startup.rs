//! Startup input validation.
//!
//! Locations arrive on the command line as JSON arrays and headings as plain
//! numbers.  Anything malformed is rejected here, before any tick runs.

use ft_core::{FtError, FtResult, Position};

/// Parse `"[lat, lon]"` or `"[lat, lon, alt]"` into a [`Position`].
///
/// Two-element arrays are padded with altitude `0.0`.
///
/// # Errors
///
/// [`FtError::Location`] when the input is not valid JSON, contains a
/// non-numeric element, or has the wrong number of elements.
pub fn parse_location(input: &str) -> FtResult<Position> {
    let coords: Vec<f64> = serde_json::from_str(input).map_err(|e| FtError::Location {
        input:  input.to_owned(),
        reason: e.to_string(),
    })?;

    Position::from_coords(&coords)
        .map(Position::rounded)
        .ok_or_else(|| FtError::Location {
            input:  input.to_owned(),
            reason: format!("expected 2 or 3 numbers, got {}", coords.len()),
        })
}

/// Parse a heading in compass degrees.
///
/// # Errors
///
/// [`FtError::Heading`] when the input is not a number, or is `NaN` or
/// infinite (either would turn every later position into `NaN`).
pub fn parse_heading(input: &str) -> FtResult<f64> {
    let heading: f64 = input.trim().parse().map_err(|e: std::num::ParseFloatError| FtError::Heading {
        input:  input.to_owned(),
        reason: e.to_string(),
    })?;
    if !heading.is_finite() {
        return Err(FtError::Heading {
            input:  input.to_owned(),
            reason: "must be a finite number of degrees".into(),
        });
    }
    Ok(heading)
}
