/// Templates module for embedded YAML templates

/// Get the default devup.yaml template content
/// The template is embedded at compile time using include_str! macro
pub fn get_devup_template() -> &'static str {
    include_str!("../../templates/devup.yaml")
}
