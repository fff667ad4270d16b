//! age.rs
//!
//! Whole-year age between a birth date and a reference date.
//!
//! The year difference is only adjusted by the month: once the birth month
//! has started in the reference year, the birthday counts as reached. The
//! day of the month is never looked at, so someone born on the 15th is a
//! year older from the 1st of that month onward.

use chrono::{Datelike, NaiveDate};

/// Returns the age in completed years.
///
/// Total over any two dates. A reference date before the birth date yields
/// zero or a negative number.
pub fn compute_age(birth_date: NaiveDate, reference_date: NaiveDate) -> i32 {
    let mut years = reference_date.year() - birth_date.year();

    if reference_date.month() < birth_date.month() {
        years -= 1;
    }

    years
}
