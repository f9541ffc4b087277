use tracing::debug;

use crate::api::HhClient;
use crate::error::ApiResult;
use crate::models::{MetroCity, MetroStationOption, SpecializationGroup, SpecializationOption};

pub fn flatten_specializations(groups: &[SpecializationGroup]) -> Vec<SpecializationOption> {
    groups
        .iter()
        .flat_map(|group| {
            group.specializations.iter().map(|specialization| SpecializationOption {
                label: specialization.name.clone(),
                group_name: group.name.clone(),
                id: specialization.id.clone(),
            })
        })
        .collect()
}

pub fn flatten_metro(city: &MetroCity) -> Vec<MetroStationOption> {
    city.lines
        .iter()
        .flat_map(|line| {
            line.stations.iter().map(|station| MetroStationOption {
                label: station.name.clone(),
                line_name: line.name.clone(),
                id: station.id.clone(),
            })
        })
        .collect()
}

pub async fn load_specializations(client: &HhClient) -> ApiResult<Vec<SpecializationOption>> {
    let groups = client.specializations().await?;
    Ok(flatten_specializations(&groups))
}

pub async fn load_metro(client: &HhClient, city_id: u32) -> ApiResult<Vec<MetroStationOption>> {
    let city = client.metro(city_id).await?;
    Ok(flatten_metro(&city))
}

/// Both reference lists, each with its own outcome.
#[derive(Debug)]
pub struct Lookups {
    pub specializations: ApiResult<Vec<SpecializationOption>>,
    pub metro_stations: ApiResult<Vec<MetroStationOption>>,
}

/// Fetches both lists concurrently. Neither failure affects the other.
pub async fn load_lookups(client: &HhClient, metro_city: u32) -> Lookups {
    let (specializations, metro_stations) = futures::join!(
        load_specializations(client),
        load_metro(client, metro_city)
    );
    debug!(
        specializations_ok = specializations.is_ok(),
        metro_ok = metro_stations.is_ok(),
        "lookups settled"
    );
    Lookups {
        specializations,
        metro_stations,
    }
}
