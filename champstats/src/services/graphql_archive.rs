//! GraphQL results archive client
//!
//! Issues the two read queries the pipeline needs against the archive's
//! GraphQL endpoint, authenticating with an `X-Api-Key` header.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use shared::{AthleteId, SeasonResults};
use url::Url;

use crate::error::{EnrichError, EnrichResult};
use crate::traits::ResultsArchive;

/// Years in which an athlete has any results
const ACTIVITY_QUERY: &str = r#"
  query GetSingleCompetitor($getSingleCompetitorId: Int) {
    getSingleCompetitor(id: $getSingleCompetitorId) {
      resultsByYear {
        activeYears
      }
    }
  }
"#;

/// All results for an athlete in a given year
const RESULTS_QUERY: &str = r#"
  query GetSingleCompetitorResultsDiscipline(
    $getSingleCompetitorResultsDisciplineId: Int
    $resultsByYear: Int
  ) {
    getSingleCompetitorResultsDiscipline(
      id: $getSingleCompetitorResultsDisciplineId
      resultsByYear: $resultsByYear
    ) {
      resultsByEvent {
        indoor
        discipline
        results {
          date
          competition
          mark
          wind
          notLegal
        }
      }
    }
  }
"#;

const API_KEY_HEADER: &str = "X-Api-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityData {
    get_single_competitor: Option<Competitor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Competitor {
    results_by_year: Option<ResultsByYear>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultsByYear {
    #[serde(default)]
    active_years: Vec<YearValue>,
}

/// The archive lists years as strings; numbers are accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YearValue {
    Number(i32),
    Text(String),
}

impl YearValue {
    fn to_year(&self) -> Option<i32> {
        match self {
            YearValue::Number(year) => Some(*year),
            YearValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultsData {
    get_single_competitor_results_discipline: Option<SeasonResults>,
}

/// Real archive client over HTTP
pub struct GraphqlArchive {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl GraphqlArchive {
    pub fn new(endpoint: Url, api_key: impl Into<String>) -> EnrichResult<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        athlete: &AthleteId,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> EnrichResult<T> {
        let archive_error = |message: String| EnrichError::ArchiveError {
            athlete: athlete.to_string(),
            operation: operation.to_string(),
            message,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| archive_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(archive_error(format!("HTTP {}", response.status())));
        }

        let body: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| archive_error(format!("Failed to parse response: {e}")))?;

        if !body.errors.is_empty() {
            let message = body
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(EnrichError::GraphqlError { message });
        }

        body.data
            .ok_or_else(|| archive_error("response carried no data".to_string()))
    }
}

#[async_trait]
impl ResultsArchive for GraphqlArchive {
    async fn active_years(&self, athlete: &AthleteId) -> EnrichResult<Vec<i32>> {
        let variables = json!({ "getSingleCompetitorId": athlete.as_numeric()? });
        let data: ActivityData = self
            .query(athlete, "active_years", ACTIVITY_QUERY, variables)
            .await?;

        let listed = data
            .get_single_competitor
            .and_then(|competitor| competitor.results_by_year)
            .map(|by_year| by_year.active_years)
            .unwrap_or_default();

        listed
            .iter()
            .map(|value| {
                value.to_year().ok_or_else(|| EnrichError::ArchiveError {
                    athlete: athlete.to_string(),
                    operation: "active_years".to_string(),
                    message: format!("unreadable year {value:?}"),
                })
            })
            .collect()
    }

    async fn season_results(&self, athlete: &AthleteId, year: i32) -> EnrichResult<Option<SeasonResults>> {
        let variables = json!({
            "getSingleCompetitorResultsDisciplineId": athlete.as_numeric()?,
            "resultsByYear": year,
        });
        let data: ResultsData = self
            .query(athlete, "season_results", RESULTS_QUERY, variables)
            .await?;
        Ok(data.get_single_competitor_results_discipline)
    }
}
