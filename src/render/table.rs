use chrono::DateTime;
use serde::Serialize;

use crate::consts::{
    HEADER_DATE, HEADER_EMPLOYER, HEADER_LINK, HEADER_SALARY, HEADER_TITLE, LOADING_PLACEHOLDER,
    TITLE_MAX_CHARS,
};
use crate::models::Vacancy;

use super::format_salary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub title: String,
    pub url: String,
    pub employer: String,
    pub published: String,
    pub salary: String,
}

impl TableRow {
    pub fn from_vacancy(vacancy: &Vacancy) -> Self {
        Self {
            title: truncate_title(&vacancy.name),
            url: vacancy.alternate_url.clone(),
            employer: vacancy.employer.name.clone(),
            published: format_published(&vacancy.published_at),
            salary: format_salary(vacancy.salary.as_ref()),
        }
    }

    fn cells(&self) -> [&str; 5] {
        [&self.title, &self.employer, &self.published, &self.salary, &self.url]
    }
}

pub fn truncate_title(name: &str) -> String {
    name.chars().take(TITLE_MAX_CHARS).collect()
}

/// Day, month and year in the offset the service published with (`01.05.2024`).
/// Unparsable input is shown as is.
pub fn format_published(raw: &str) -> String {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|published| published.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Rows(Vec<TableRow>),
}

#[derive(Debug, Clone, Copy)]
pub struct VacanciesTable<'a> {
    vacancies: &'a [Vacancy],
    is_loading: bool,
}

impl<'a> VacanciesTable<'a> {
    pub fn new(vacancies: &'a [Vacancy], is_loading: bool) -> Self {
        Self {
            vacancies,
            is_loading,
        }
    }

    pub fn body(&self) -> TableBody {
        if self.is_loading {
            TableBody::Loading
        } else {
            TableBody::Rows(self.vacancies.iter().map(TableRow::from_vacancy).collect())
        }
    }

    /// Plain-text table, or `None` while there is nothing to show yet.
    pub fn render(&self) -> Option<String> {
        if self.vacancies.is_empty() {
            return None;
        }

        let header = [HEADER_TITLE, HEADER_EMPLOYER, HEADER_DATE, HEADER_SALARY, HEADER_LINK];
        let body = self.body();

        let mut widths = header.map(|cell| cell.chars().count());
        if let TableBody::Rows(rows) = &body {
            for row in rows {
                for (width, cell) in widths.iter_mut().zip(row.cells()) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        out.push_str(&rule.join("-+-"));
        out.push('\n');

        match body {
            TableBody::Loading => {
                out.push_str(LOADING_PLACEHOLDER);
                out.push('\n');
            }
            TableBody::Rows(rows) => {
                for row in &rows {
                    push_line(&mut out, &row.cells(), &widths);
                }
            }
        }

        Some(out)
    }
}

fn push_line(out: &mut String, cells: &[&str; 5], widths: &[usize; 5]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
