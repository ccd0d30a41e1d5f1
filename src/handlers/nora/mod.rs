// Nora - nutrition and shopping endpoints backed by Notion
pub mod coordinate;
pub mod grocery_list;
pub mod meal_plan;
pub mod preferences;
pub mod recipes;
pub mod test_auth;

pub use coordinate::coordinate_clark;
pub use grocery_list::save as grocery_list_save;
pub use meal_plan::save as meal_plan_save;
pub use preferences::get as preferences_get;
pub use recipes::list as recipes_list;
pub use test_auth::test_auth;
