use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::concat_str;
use crate::error::{ApiError, ApiResult};
use crate::models::{MetroCity, SpecializationGroup, VacancyPage};
use crate::search::SearchRequest;

const USER_AGENT_HEADER: &str = "HH-User-Agent";

/// Read-only client for the job service.
#[derive(Debug, Clone)]
pub struct HhClient {
    http: Client,
    base_url: Url,
    user_agent: String,
}

impl HhClient {
    pub fn new(base_url: &str, user_agent: &str) -> ApiResult<Self> {
        // `Url::join` drops the last segment unless the base ends with a slash.
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)
        } else {
            Url::parse(&concat_str!(base_url, "/"))
        }
        .map_err(|err| ApiError::Url(err.to_string()))?;

        let http = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            http,
            base_url,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::Url(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!(%url, "GET");
        let resp = self
            .http
            .get(url.clone())
            .header(USER_AGENT_HEADER, &self.user_agent)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    #[instrument(skip(self))]
    pub async fn specializations(&self) -> ApiResult<Vec<SpecializationGroup>> {
        let groups: Vec<SpecializationGroup> = self.get_json(self.endpoint("specializations")?).await?;
        debug!(groups = groups.len(), "specializations fetched");
        Ok(groups)
    }

    #[instrument(skip(self))]
    pub async fn metro(&self, city_id: u32) -> ApiResult<MetroCity> {
        let path = concat_str!("metro/", city_id.to_string());
        let city: MetroCity = self.get_json(self.endpoint(&path)?).await?;
        debug!(lines = city.lines.len(), "metro fetched");
        Ok(city)
    }

    #[instrument(skip(self))]
    pub async fn vacancies(&self, request: &SearchRequest) -> ApiResult<VacancyPage> {
        let page: VacancyPage = self.get_json(request.url(&self.base_url)?).await?;
        debug!(items = page.items.len(), found = ?page.found, "vacancies fetched");
        Ok(page)
    }
}
