// handlers/mod.rs - HTTP handlers grouped by agent
//
// root  → GET / liveness, unknown-route fallback
// nora  → recipes, preferences, meal plans, grocery lists, Notion diagnostics
// clark → coordination requests
pub mod clark;
pub mod nora;
pub mod root;
