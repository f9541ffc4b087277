//! Pure projections of the latest result list. Nothing here holds state.

pub mod map;
pub mod table;

pub use map::{MapMarker, MarkerCollection};
pub use table::{TableRow, VacanciesTable};

use crate::consts::SALARY_PLACEHOLDER;
use crate::models::Salary;

/// `<from> <currency>`, or the placeholder when there is no amount to show.
pub fn format_salary(salary: Option<&Salary>) -> String {
    match salary {
        Some(Salary {
            from: Some(from),
            currency,
            ..
        }) => match currency.as_deref() {
            Some(currency) if !currency.is_empty() => format!("{from} {currency}"),
            _ => from.to_string(),
        },
        _ => SALARY_PLACEHOLDER.to_string(),
    }
}
