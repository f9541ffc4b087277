use reqwest::Url;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{LookupOption, MetroStationOption};

/// The two text fields of the search form, exactly as typed or selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCriteria {
    pub query_text: String,
    pub metro_label: String,
}

/// Options the autocomplete offers for `typed`. The backing list is untouched.
pub fn suggestions<'a, T: LookupOption>(options: &'a [T], typed: &str) -> Vec<&'a T> {
    let needle = typed.to_lowercase();
    options
        .iter()
        .filter(|option| option.label().to_lowercase().contains(&needle))
        .collect()
}

/// First station whose label equals `metro_label` byte for byte.
pub fn resolve_metro<'a>(
    stations: &'a [MetroStationOption],
    metro_label: &str,
) -> Option<&'a MetroStationOption> {
    stations.iter().find(|station| station.label == metro_label)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub area: u32,
    pub text: String,
    pub metro: Option<String>,
}

impl SearchRequest {
    pub fn from_criteria(
        criteria: &SearchCriteria,
        stations: &[MetroStationOption],
        area: u32,
    ) -> Self {
        Self {
            area,
            text: criteria.query_text.clone(),
            metro: resolve_metro(stations, &criteria.metro_label).map(|station| station.id.clone()),
        }
    }

    /// `vacancies?area=..&text=..[&metro=..]` relative to `base`.
    pub fn url(&self, base: &Url) -> ApiResult<Url> {
        let mut url = base
            .join("vacancies")
            .map_err(|err| ApiError::Url(err.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("area", &self.area.to_string());
            query.append_pair("text", &self.text);
            if let Some(metro) = &self.metro {
                query.append_pair("metro", metro);
            }
        }
        Ok(url)
    }
}
