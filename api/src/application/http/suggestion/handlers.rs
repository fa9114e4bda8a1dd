pub mod get_regions;
pub mod get_suggestions;
