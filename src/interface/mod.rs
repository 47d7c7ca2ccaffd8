pub mod prompts;
pub mod render;
pub mod theme;

pub use prompts::{
    prompt_action, prompt_activity_level, prompt_gender, prompt_language, prompt_numeric,
    prompt_theme, FormAction,
};
pub use render::{
    display_form, display_header, display_languages, display_metrics, display_result,
    display_themes, result_json,
};
pub use theme::{CustomColors, Rgb, Theme, ThemePreset};
