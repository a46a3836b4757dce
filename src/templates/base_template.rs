/// Base template trait providing common properties for all templates.
/// This eliminates redundant field definitions across templates.
pub trait BaseTemplate {
    fn platform_name(&self) -> &str;
    fn base_url(&self) -> &str;
}

/// Macro to implement BaseTemplate for a struct with standard fields
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn platform_name(&self) -> &str {
                &self.platform_name
            }
            fn base_url(&self) -> &str {
                &self.base_url
            }
        }
    };
}
