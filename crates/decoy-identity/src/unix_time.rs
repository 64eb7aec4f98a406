// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use chrono::{NaiveDate, NaiveTime};
use log::debug;
use rand::Rng;

use crate::error::IdentityError;

/// `chrono` format of the date strings accepted by [`random_unix_time`].
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a `DD.MM.YYYY` date into Unix seconds at 00:00 UTC.
///
/// # Errors
///
/// Returns [`IdentityError::InvalidDate`] if `input` is not a valid date.
pub fn parse_date(input: &str) -> Result<i64, IdentityError> {
    let date =
        NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| IdentityError::InvalidDate {
            input: input.to_owned(),
            source,
        })?;

    Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp())
}

/// Returns a Unix timestamp drawn uniformly from `[from_date, to_date]`.
///
/// Both bounds are `DD.MM.YYYY` strings, e.g. `("01.01.2005", "01.01.2018")`,
/// and are inclusive.
///
/// # Errors
///
/// - [`IdentityError::InvalidDate`] if either bound fails to parse.
/// - [`IdentityError::InvertedRange`] if `from_date` is after `to_date`.
pub fn random_unix_time<R: Rng + ?Sized>(
    rng: &mut R,
    from_date: &str,
    to_date: &str,
) -> Result<i64, IdentityError> {
    let from = parse_date(from_date)?;
    let to = parse_date(to_date)?;

    if from > to {
        return Err(IdentityError::InvertedRange { from, to });
    }

    debug!("Drawing unix time in [{from}, {to}]");

    Ok(rng.random_range(from..=to))
}
