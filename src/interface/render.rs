use crate::error::Result;
use crate::i18n::{gender_label, Language, Translations};
use crate::input::FieldLabels;
use crate::interface::theme::{Theme, ThemePreset};
use crate::models::{CalculationResult, NumericField, UserMetrics};
use crate::state::CalculatorForm;

const RULE_WIDTH: usize = 48;

/// Title, subtitle and a themed divider.
pub fn display_header(t: &Translations, theme: &Theme) {
    println!();
    println!("{}", theme.accent().apply_to(t.title));
    println!("{}", t.subtitle);
    println!("{}", theme.gradient_rule(RULE_WIDTH));
}

/// Current form values. Unset numeric fields show as "-".
pub fn display_metrics(metrics: &UserMetrics, t: &Translations, theme: &Theme) {
    println!();
    println!("=== {} ===", theme.accent().apply_to(t.personal_info));

    let show = |value: f64| {
        if value == 0.0 {
            "-".to_string()
        } else {
            value.to_string()
        }
    };

    println!("  {}: {}", t.field_label(NumericField::Age), show(metrics.numeric(NumericField::Age)));
    println!("  {}: {}", t.gender, gender_label(metrics.gender));
    println!("  {}: {}", t.field_label(NumericField::Weight), show(metrics.weight));
    println!("  {}: {}", t.field_label(NumericField::Height), show(metrics.height));
    println!("  {}: {}", t.activity_level, t.activity_label(metrics.activity_level));
}

/// Calculation results with descriptions.
pub fn display_result(result: &CalculationResult, t: &Translations, theme: &Theme) {
    let accent = theme.accent();

    println!();
    println!("=== {} ===", accent.apply_to(t.results));
    println!();
    println!("{}", t.bmr);
    println!("  {} kcal", accent.apply_to(result.bmr));
    println!("  {}", t.bmr_description);
    println!();
    println!("{}", t.tdee);
    println!("  {} kcal", accent.apply_to(result.tdee));
    println!("  {}", t.tdee_description);
    println!();
    println!("{}", t.weight_management);
    println!("  {}: {} kcal", t.weight_loss, accent.apply_to(result.weight_loss_target));
    println!("  {}: {} kcal", t.weight_gain, accent.apply_to(result.weight_gain_target));
    println!("  {}", t.weight_management_description);
    println!();
}

/// Full form view: values, then either the result, the pending
/// validation message, or the "enter your information" hint.
pub fn display_form(form: &CalculatorForm, theme: &Theme) {
    let t = form.translations();

    display_header(t, theme);
    display_metrics(form.metrics(), t, theme);

    if let Some(message) = form.validation_message() {
        println!();
        println!("{}", console::style(message).red());
    }

    match form.result() {
        Some(result) => display_result(result, t, theme),
        None => {
            println!();
            println!("{}", t.enter_info_message);
            println!();
        }
    }
}

pub fn display_languages() {
    println!();
    println!("=== Languages ===");
    for lang in Language::ALL {
        println!("  {:<6} {}", lang.code(), lang.native_name());
    }
    println!();
}

pub fn display_themes() {
    println!();
    println!("=== Themes ===");
    for preset in ThemePreset::ALL {
        let theme = Theme::Preset(preset);
        let colors = preset.colors();
        println!(
            "  {:<7} {}  {} -> {}, button {}",
            theme.accent().apply_to(preset.name()),
            theme.gradient_rule(8),
            colors.background_start,
            colors.background_end,
            colors.button
        );
    }
    println!("  Custom  #rrggbb or #start,#end,#button");
    println!();
}

/// Pretty-printed JSON for a result.
pub fn result_json(result: &CalculationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_json_fields() {
        let result = CalculationResult::new(1649, 2556, 2056, 3056);
        let json = result_json(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["bmr"], 1649);
        assert_eq!(value["tdee"], 2556);
        assert_eq!(value["weight_loss_target"], 2056);
        assert_eq!(value["weight_gain_target"], 3056);
    }
}
