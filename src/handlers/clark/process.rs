use axum::{body::Bytes, extract::State, response::Json};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::body::{lenient_json, text_field};
use crate::fixtures::{self, CLARK_RECOMMENDATIONS, COORDINATOR, FAMILY_PRIORITIES};
use crate::mapper::{compact_number, serialize_compact, status_equals, AgentProfile, AgentStatus};
use crate::notion::NotionError;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct ClarkRequest {
    pub request: String,
    pub urgency: String,
    pub context: String,
}

impl ClarkRequest {
    pub fn from_body(body: &Value) -> Self {
        Self {
            request: text_field(body, "request").unwrap_or_default(),
            urgency: text_field(body, "urgency").unwrap_or_else(|| "normal".to_string()),
            context: text_field(body, "context").unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

/// Clark's budget and the specialists he can delegate to.
#[derive(Debug, Clone)]
pub struct FamilyData {
    pub budget_authority: f64,
    pub agents: Vec<AgentProfile>,
    pub source: DataSource,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClarkResponse {
    pub clark_response: String,
    #[serde(serialize_with = "serialize_compact")]
    pub current_budget_authority: f64,
    pub available_agents: Vec<AgentProfile>,
    pub urgency_level: String,
    pub context: String,
    pub family_priorities: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub data_source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub timestamp: String,
}

async fn fetch_roster(state: &AppState) -> Result<Vec<AgentProfile>, NotionError> {
    let database_id = state.databases.roles()?;
    let names = &state.properties.agent;
    let filter = status_equals(&names.status, names.status_kind, AgentStatus::Active.as_str());

    info!(database_id, "Fetching agent roster from Notion");
    let response = state.notion.query_database(database_id, Some(filter)).await?;
    Ok(response
        .results
        .iter()
        .map(|page| AgentProfile::decode(page, names))
        .collect())
}

/// Live roster when the roles database answers, fixtures otherwise. Never fails.
pub async fn load_family_data(state: &AppState) -> FamilyData {
    let fallback = |note: Option<String>| FamilyData {
        budget_authority: state.defaults.clark_budget_authority,
        agents: fixtures::fallback_agents(),
        source: DataSource::Fallback,
        note,
    };

    match fetch_roster(state).await {
        Ok(profiles) => {
            let budget_authority = profiles
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(COORDINATOR))
                .map(|p| p.budget_authority)
                .filter(|budget| *budget > 0.0)
                .unwrap_or(state.defaults.clark_budget_authority);

            let agents = profiles
                .into_iter()
                .filter(|p| p.is_active() && !p.name.eq_ignore_ascii_case(COORDINATOR))
                .collect();

            FamilyData {
                budget_authority,
                agents,
                source: DataSource::Live,
                note: None,
            }
        }
        Err(NotionError::NotConfigured(var)) => {
            debug!("{} not set, using fixture roster", var);
            fallback(None)
        }
        Err(e) => {
            warn!("Could not fetch live agent roster, using fixtures: {}", e);
            fallback(Some("Could not fetch live data".to_string()))
        }
    }
}

/// POST /clark/process - Clark acknowledges a request and reports what he can do
pub async fn process(State(state): State<AppState>, body: Bytes) -> Json<ClarkResponse> {
    let request = ClarkRequest::from_body(&lenient_json(&body));
    let family = load_family_data(&state).await;

    info!(
        urgency = %request.urgency,
        agents = family.agents.len(),
        source = ?family.source,
        "Clark processing request"
    );

    Json(ClarkResponse {
        clark_response: format!(
            "I've received your request: \"{}\". I have authority up to ${} and can coordinate with {} active agents.",
            request.request,
            compact_number(family.budget_authority),
            family.agents.len()
        ),
        current_budget_authority: family.budget_authority,
        available_agents: family.agents,
        urgency_level: request.urgency,
        context: request.context,
        family_priorities: FAMILY_PRIORITIES.to_vec(),
        recommendations: CLARK_RECOMMENDATIONS.to_vec(),
        data_source: family.source,
        note: family.note,
        timestamp: Utc::now().to_rfc3339(),
    })
}
