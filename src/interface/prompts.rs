use dialoguer::{Input, Select};

use crate::error::Result;
use crate::i18n::{gender_label, Language, Translations};
use crate::input::FieldLabels;
use crate::interface::theme::{CustomColors, Rgb, Theme, ThemePreset};
use crate::models::{ActivityLevel, Gender, MetricUpdate, NumericField};

/// Menu entries of the interactive form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Edit(NumericField),
    EditGender,
    EditActivityLevel,
    Calculate,
    ChangeLanguage,
    ChangeTheme,
    Quit,
}

const FORM_ACTIONS: [FormAction; 9] = [
    FormAction::Edit(NumericField::Age),
    FormAction::EditGender,
    FormAction::Edit(NumericField::Weight),
    FormAction::Edit(NumericField::Height),
    FormAction::EditActivityLevel,
    FormAction::Calculate,
    FormAction::ChangeLanguage,
    FormAction::ChangeTheme,
    FormAction::Quit,
];

fn action_label(action: FormAction, t: &Translations) -> String {
    match action {
        FormAction::Edit(field) => t.field_label(field).to_string(),
        FormAction::EditGender => t.gender.to_string(),
        FormAction::EditActivityLevel => t.activity_level.to_string(),
        FormAction::Calculate => format!("▶ {}", t.calculate_button),
        FormAction::ChangeLanguage => t.language_selector.to_string(),
        FormAction::ChangeTheme => t.theme_selector.to_string(),
        FormAction::Quit => "Quit".to_string(),
    }
}

/// Ask which form action to run next. `last` is preselected.
pub fn prompt_action(t: &Translations, theme: &Theme, last: FormAction) -> Result<FormAction> {
    let items: Vec<String> = FORM_ACTIONS.iter().map(|a| action_label(*a, t)).collect();
    let default = FORM_ACTIONS.iter().position(|a| *a == last).unwrap_or(0);

    let selection = Select::with_theme(&theme.prompt_theme())
        .with_prompt(t.personal_info)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(FORM_ACTIONS[selection])
}

/// Prompt for raw text and normalize it into a field update.
///
/// An empty answer clears the field.
pub fn prompt_numeric(field: NumericField, t: &Translations, theme: &Theme) -> Result<MetricUpdate> {
    let raw: String = Input::with_theme(&theme.prompt_theme())
        .with_prompt(t.placeholder(field))
        .allow_empty(true)
        .interact_text()?;

    Ok(MetricUpdate::from_raw(field, raw.trim_end()))
}

pub fn prompt_gender(t: &Translations, theme: &Theme, current: Gender) -> Result<Gender> {
    let items: Vec<&str> = Gender::ALL.iter().map(|g| gender_label(*g)).collect();
    let default = Gender::ALL.iter().position(|g| *g == current).unwrap_or(0);

    let selection = Select::with_theme(&theme.prompt_theme())
        .with_prompt(t.gender)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Gender::ALL[selection])
}

pub fn prompt_activity_level(
    t: &Translations,
    theme: &Theme,
    current: ActivityLevel,
) -> Result<ActivityLevel> {
    let items: Vec<&str> = ActivityLevel::ALL
        .iter()
        .map(|level| t.activity_label(*level))
        .collect();
    let default = ActivityLevel::ALL
        .iter()
        .position(|level| *level == current)
        .unwrap_or(0);

    let selection = Select::with_theme(&theme.prompt_theme())
        .with_prompt(t.activity_level)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_language(t: &Translations, theme: &Theme, current: Language) -> Result<Language> {
    let items: Vec<&str> = Language::ALL.iter().map(|l| l.native_name()).collect();
    let default = Language::ALL.iter().position(|l| *l == current).unwrap_or(0);

    let selection = Select::with_theme(&theme.prompt_theme())
        .with_prompt(t.language_selector)
        .items(&items)
        .default(default)
        .interact()?;

    Ok(Language::ALL[selection])
}

/// Pick a preset, enter custom colors, or reset to the default theme.
pub fn prompt_theme(t: &Translations, current: &Theme) -> Result<Theme> {
    let mut items: Vec<&str> = ThemePreset::ALL.iter().map(|p| p.name()).collect();
    items.push(t.custom_colors);
    items.push(t.reset_colors);

    let default = match current {
        Theme::Preset(preset) => ThemePreset::ALL.iter().position(|p| p == preset).unwrap_or(0),
        Theme::Custom(_) => ThemePreset::ALL.len(),
    };

    let selection = Select::with_theme(&current.prompt_theme())
        .with_prompt(t.select_theme)
        .items(&items)
        .default(default)
        .interact()?;

    match selection {
        i if i < ThemePreset::ALL.len() => Ok(Theme::Preset(ThemePreset::ALL[i])),
        i if i == ThemePreset::ALL.len() => prompt_custom_colors(t, current),
        _ => Ok(Theme::default()),
    }
}

fn prompt_custom_colors(t: &Translations, current: &Theme) -> Result<Theme> {
    let initial = current.colors();
    let prompt_theme = current.prompt_theme();

    let ask = |label: &str, initial: Rgb| -> Result<Rgb> {
        let text: String = Input::with_theme(&prompt_theme)
            .with_prompt(label)
            .default(initial.to_string())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                input.parse::<Rgb>().map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;
        text.parse()
    };

    let colors = CustomColors {
        background_start: ask(t.background_start, initial.background_start)?,
        background_end: ask(t.background_end, initial.background_end)?,
        button: ask(t.button_color, initial.button)?,
    };

    Ok(Theme::Custom(colors))
}
