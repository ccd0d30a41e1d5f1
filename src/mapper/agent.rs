use serde::{Deserialize, Serialize};

use super::properties::AgentProperties;
use super::{read_number, read_rich_text, read_select, read_title, serialize_compact};
use crate::notion::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentStatus {
    Active,
    Inactive,
}

impl AgentStatus {
    pub fn parse(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("active") {
            AgentStatus::Active
        } else {
            AgentStatus::Inactive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Inactive => "Inactive",
        }
    }
}

/// A family agent as listed in the roles & policies database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub role: String,
    #[serde(serialize_with = "serialize_compact")]
    pub budget_authority: f64,
    pub authority_level: String,
    #[serde(serialize_with = "serialize_compact")]
    pub performance_rating: f64,
    pub escalation_trigger: String,
    pub status: AgentStatus,
}

impl AgentProfile {
    pub fn decode(page: &Page, names: &AgentProperties) -> Self {
        let p = &page.properties;

        Self {
            name: read_title(p, &names.name).unwrap_or_else(|| "Unnamed".to_string()),
            // Role is a select in some workspaces and free text in others
            role: read_select(p, &names.role)
                .or_else(|| read_rich_text(p, &names.role))
                .unwrap_or_default(),
            budget_authority: read_number(p, &names.budget_authority).unwrap_or(0.0),
            authority_level: read_select(p, &names.authority_level)
                .or_else(|| read_rich_text(p, &names.authority_level))
                .unwrap_or_default(),
            performance_rating: read_number(p, &names.performance_rating).unwrap_or(0.0),
            escalation_trigger: read_rich_text(p, &names.escalation_trigger).unwrap_or_default(),
            status: read_select(p, &names.status)
                .map(|s| AgentStatus::parse(&s))
                .unwrap_or(AgentStatus::Inactive),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }
}
