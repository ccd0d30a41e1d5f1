// fixtures.rs - static family data served where no live source exists yet

use serde::{Deserialize, Serialize};

use crate::mapper::agent::{AgentProfile, AgentStatus};
use crate::mapper::grocery_list::GrocerySections;
use crate::mapper::serialize_compact;

pub const AGENT_NAMES: [&str; 4] = ["Clark", "Nora", "Oz", "Sage"];

pub const COORDINATOR: &str = "Clark";

pub const FAMILY_PRIORITIES: [&str; 5] = [
    "Safety",
    "Relationships",
    "Budget",
    "Growth",
    "Convenience",
];

pub const CLARK_RECOMMENDATIONS: [&str; 3] = [
    "I can handle this directly if under budget",
    "I can delegate to appropriate specialist agent",
    "I can coordinate multi-agent response if needed",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyPreferences {
    pub dietary_restrictions: Vec<String>,
    pub favorite_cuisines: Vec<String>,
    pub disliked_ingredients: Vec<String>,
    #[serde(serialize_with = "serialize_compact")]
    pub weekly_budget: f64,
    pub health_goals: Vec<String>,
    pub family_size: u32,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn preferences() -> FamilyPreferences {
    FamilyPreferences {
        dietary_restrictions: Vec::new(),
        favorite_cuisines: strings(&["Italian", "Mexican", "American", "Asian"]),
        disliked_ingredients: strings(&["mushrooms", "olives"]),
        weekly_budget: 200.0,
        health_goals: strings(&["balanced nutrition", "more vegetables"]),
        family_size: 4,
    }
}

/// The simplified weekly list saved with every grocery-list request.
pub fn grocery_sections() -> GrocerySections {
    GrocerySections {
        produce: strings(&["Lettuce", "Tomatoes", "Onions", "Peppers"]),
        proteins: strings(&["Chicken", "Beef", "Salmon", "Eggs"]),
        dairy: strings(&["Milk", "Cheese", "Yogurt"]),
        pantry: strings(&["Rice", "Pasta", "Oil", "Spices"]),
    }
}

fn agent(name: &str, role: &str, budget: f64, authority: &str, trigger: &str) -> AgentProfile {
    AgentProfile {
        name: name.to_string(),
        role: role.to_string(),
        budget_authority: budget,
        authority_level: authority.to_string(),
        performance_rating: 0.0,
        escalation_trigger: trigger.to_string(),
        status: AgentStatus::Active,
    }
}

/// Specialists Clark can hand work to when the roles database is unreachable.
pub fn fallback_agents() -> Vec<AgentProfile> {
    vec![
        agent("Nora", "Nutritionist", 150.0, "Recommend", "Plans over weekly budget"),
        agent("Oz", "Order Taker", 300.0, "Execute", "Orders over $300"),
        agent("Sage", "Scheduler", 100.0, "Recommend", "Calendar conflicts"),
    ]
}
