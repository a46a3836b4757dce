// Base template trait for inheritance
pub mod base_template;
pub use base_template::BaseTemplate;

// Individual template files
pub mod pricing_template;

// Re-export all templates
pub use pricing_template::PricingTemplate;
