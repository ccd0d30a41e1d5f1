// mapper - translation between loose app records and Notion typed properties
//
// Encode side: build `{ "<Property Name>": { "<type>": ... } }` maps that always
// carry the full key set for a document kind.
// Decode side: walk `properties.<name>.<type>...` and fall back to a default
// whenever a link in the chain is missing.

pub mod agent;
pub mod grocery_list;
pub mod meal_plan;
pub mod properties;
pub mod recipe;

pub use agent::{AgentProfile, AgentStatus};
pub use grocery_list::{GroceryList, GrocerySections};
pub use meal_plan::{format_meals, MealPlan};
pub use properties::{PropertyMap, StatusKind};
pub use recipe::Recipe;

use serde::Serializer;
use serde_json::{json, Map, Value};

/// Notion rejects rich text objects whose content exceeds this many characters.
pub const TEXT_SEGMENT_LIMIT: usize = 2000;

pub type Properties = Map<String, Value>;

// --- encode -----------------------------------------------------------------

pub fn title(content: &str) -> Value {
    json!({ "title": text_segments(content) })
}

pub fn rich_text(content: &str) -> Value {
    json!({ "rich_text": text_segments(content) })
}

pub fn number(value: f64) -> Value {
    json!({ "number": compact_number(value) })
}

pub fn select(name: &str) -> Value {
    json!({ "select": { "name": name } })
}

pub fn date(start: &str) -> Value {
    json!({ "date": { "start": start } })
}

/// Equals filter on a status column, shaped for its property type.
pub fn status_equals(property: &str, kind: StatusKind, value: &str) -> Value {
    let mut filter = Map::new();
    filter.insert("property".to_string(), Value::from(property));
    filter.insert(kind.as_str().to_string(), json!({ "equals": value }));
    Value::Object(filter)
}

fn text_segments(content: &str) -> Vec<Value> {
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(TEXT_SEGMENT_LIMIT)
        .map(|chunk| {
            let content: String = chunk.iter().collect();
            json!({ "text": { "content": content } })
        })
        .collect()
}

/// Whole numbers go out as JSON integers (`185`, not `185.0`).
pub fn compact_number(value: f64) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;

    if !value.is_finite() {
        return Value::from(0);
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE {
        return Value::from(value as i64);
    }
    Value::from(value)
}

pub(crate) fn serialize_compact<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&compact_number(*value), serializer)
}

// --- decode -----------------------------------------------------------------

fn typed<'a>(properties: &'a Properties, name: &str, kind: &str) -> Option<&'a Value> {
    properties.get(name)?.get(kind)
}

/// Concatenated text of a `title` property; `None` when absent or empty.
pub fn read_title(properties: &Properties, name: &str) -> Option<String> {
    join_text(typed(properties, name, "title")?)
}

pub fn read_rich_text(properties: &Properties, name: &str) -> Option<String> {
    join_text(typed(properties, name, "rich_text")?)
}

/// Name of a `select` option. Notion `status` properties carry the same shape.
pub fn read_select(properties: &Properties, name: &str) -> Option<String> {
    let property = properties.get(name)?;
    let option = property.get("select").or_else(|| property.get("status"))?;
    option
        .get("name")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn read_number(properties: &Properties, name: &str) -> Option<f64> {
    typed(properties, name, "number")?.as_f64()
}

fn join_text(segments: &Value) -> Option<String> {
    let text: String = segments
        .as_array()?
        .iter()
        .filter_map(|segment| {
            segment
                .get("plain_text")
                .or_else(|| segment.get("text").and_then(|t| t.get("content")))
                .and_then(Value::as_str)
        })
        .collect();

    Some(text).filter(|t| !t.is_empty())
}
