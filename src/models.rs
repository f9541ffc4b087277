use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpecializationGroup {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub specializations: Vec<Specialization>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Specialization {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetroCity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lines: Vec<MetroLine>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetroLine {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stations: Vec<MetroStation>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MetroStation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

/// One page of the vacancy search. Only `items` drives rendering.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct VacancyPage {
    #[serde(default)]
    pub items: Vec<Vacancy>,
    #[serde(default)]
    pub found: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Vacancy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alternate_url: String,
    #[serde(default)]
    pub published_at: String,
    pub employer: Employer,
    #[serde(default)]
    pub salary: Option<Salary>,
    #[serde(default)]
    pub address: Option<Address>,
}

impl Vacancy {
    /// Coordinates as `(lat, lng)` when the address carries both.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let address = self.address.as_ref()?;
        Some((address.lat?, address.lng?))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Employer {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub alternate_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Salary {
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub gross: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Address {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub raw: Option<String>,
}

/// An entry an autocomplete field can offer.
pub trait LookupOption {
    fn label(&self) -> &str;
    fn group_name(&self) -> &str;
    fn id(&self) -> &str;
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SpecializationOption {
    pub label: String,
    pub group_name: String,
    pub id: String,
}

impl LookupOption for SpecializationOption {
    fn label(&self) -> &str {
        &self.label
    }

    fn group_name(&self) -> &str {
        &self.group_name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MetroStationOption {
    pub label: String,
    pub line_name: String,
    pub id: String,
}

impl LookupOption for MetroStationOption {
    fn label(&self) -> &str {
        &self.label
    }

    fn group_name(&self) -> &str {
        &self.line_name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
