use askama::Template;

use crate::models::{Plan, SelectionState, SummaryView};

#[derive(Template)]
#[template(path = "pricing.html")]
pub struct PricingTemplate<'a> {
    pub platform_name: String,
    pub base_url: String,
    pub tagline: &'static str,
    pub home_url: String,
    pub plans: &'a [Plan],
    pub gpu_options: &'a [String],
    pub memory_options: &'a [String],
    pub state: &'a SelectionState,
    pub summary: SummaryView,
}

crate::impl_base_template!(PricingTemplate<'_>);
