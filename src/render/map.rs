use serde::Serialize;

use crate::consts::MAP_COUNTER_LABEL;
use crate::models::Vacancy;

use super::format_salary;

/// A placemark for one vacancy that has both coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub balloon_body: String,
    pub footer: String,
    pub cluster_caption: String,
}

impl MapMarker {
    pub fn from_vacancy(vacancy: &Vacancy) -> Option<Self> {
        let (lat, lng) = vacancy.coordinates()?;
        let employer_url = vacancy
            .employer
            .alternate_url
            .as_deref()
            .unwrap_or(&vacancy.alternate_url);

        Some(Self {
            id: vacancy.id.clone(),
            lat,
            lng,
            title: vacancy.name.clone(),
            balloon_body: format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                escape_html(employer_url),
                escape_html(&vacancy.employer.name)
            ),
            footer: format_salary(vacancy.salary.as_ref()),
            cluster_caption: vacancy.name.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MarkerCollection {
    markers: Vec<MapMarker>,
}

impl MarkerCollection {
    pub fn from_vacancies(vacancies: &[Vacancy]) -> Self {
        Self {
            markers: vacancies.iter().filter_map(MapMarker::from_vacancy).collect(),
        }
    }

    pub fn markers(&self) -> &[MapMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn counter(&self) -> String {
        format!("{MAP_COUNTER_LABEL}: {}", self.len())
    }

    /// Object-manager input: a `FeatureCollection` of `Point`s with balloon properties.
    pub fn to_feature_collection(&self) -> FeatureCollection<'_> {
        FeatureCollection {
            kind: "FeatureCollection",
            features: self
                .markers
                .iter()
                .map(|marker| Feature {
                    kind: "Feature",
                    id: &marker.id,
                    geometry: Geometry {
                        kind: "Point",
                        coordinates: [marker.lat, marker.lng],
                    },
                    properties: Properties {
                        hint_content: &marker.title,
                        balloon_content_header: &marker.title,
                        balloon_content_body: &marker.balloon_body,
                        balloon_content_footer: &marker.footer,
                        cluster_caption: &marker.cluster_caption,
                    },
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeatureCollection<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature<'a>>,
}

#[derive(Debug, Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    id: &'a str,
    geometry: Geometry,
    properties: Properties<'a>,
}

#[derive(Debug, Serialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: [f64; 2],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Properties<'a> {
    hint_content: &'a str,
    balloon_content_header: &'a str,
    balloon_content_body: &'a str,
    balloon_content_footer: &'a str,
    cluster_caption: &'a str,
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
