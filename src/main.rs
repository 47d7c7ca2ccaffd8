use clap::Parser;
use tracing_subscriber::EnvFilter;

use tdee_calc_rs::cli::{Cli, Command};
use tdee_calc_rs::error::{CalcError, Result};
use tdee_calc_rs::i18n::Language;
use tdee_calc_rs::interface::{
    display_form, display_header, display_languages, display_result, display_themes,
    prompt_action, prompt_activity_level, prompt_gender, prompt_language, prompt_numeric,
    prompt_theme, result_json, FormAction, Theme,
};
use tdee_calc_rs::models::{ActivityLevel, Gender, MetricUpdate, NumericField};
use tdee_calc_rs::state::CalculatorForm;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so results on stdout stay clean. `RUST_LOG` overrides the default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tdee_calc_rs=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Interactive => cmd_interactive(cli.lang, cli.theme),
        Command::Calculate {
            age,
            weight,
            height,
            gender,
            activity,
            json,
        } => {
            let raw = RawMetrics {
                age: age.as_deref().unwrap_or(""),
                weight: weight.as_deref().unwrap_or(""),
                height: height.as_deref().unwrap_or(""),
            };
            cmd_calculate(cli.lang, &cli.theme, raw, gender, activity, json)
        }
        Command::Languages => {
            display_languages();
            Ok(())
        }
        Command::Themes => {
            display_themes();
            Ok(())
        }
    }
}

/// Raw numeric text as typed on the command line.
struct RawMetrics<'a> {
    age: &'a str,
    weight: &'a str,
    height: &'a str,
}

/// Single calculation from command-line values.
fn cmd_calculate(
    lang: Language,
    theme: &Theme,
    raw: RawMetrics<'_>,
    gender: Gender,
    activity: ActivityLevel,
    json: bool,
) -> Result<()> {
    let mut form = CalculatorForm::new(lang);

    form.apply(MetricUpdate::from_raw(NumericField::Age, raw.age));
    form.apply(MetricUpdate::from_raw(NumericField::Weight, raw.weight));
    form.apply(MetricUpdate::from_raw(NumericField::Height, raw.height));
    form.apply(MetricUpdate::Gender(gender));
    form.apply(MetricUpdate::ActivityLevel(activity));

    let result = match form.calculate() {
        Ok(result) => result,
        Err(validation) => {
            let message = validation
                .message(form.translations().please_fill_fields)
                .unwrap_or_default();
            return Err(CalcError::IncompleteInput(message));
        }
    };

    if json {
        println!("{}", result_json(&result)?);
    } else {
        let t = form.translations();
        display_header(t, theme);
        display_result(&result, t, theme);
    }

    Ok(())
}

/// Menu-driven form: edit fields, calculate, switch language or theme.
fn cmd_interactive(lang: Language, mut theme: Theme) -> Result<()> {
    let mut form = CalculatorForm::new(lang);
    let mut last = FormAction::Edit(NumericField::Age);

    loop {
        display_form(&form, &theme);

        let t = form.translations();
        let action = prompt_action(t, &theme, last)?;

        match action {
            FormAction::Edit(field) => {
                let update = prompt_numeric(field, t, &theme)?;
                form.apply(update);
            }
            FormAction::EditGender => {
                let gender = prompt_gender(t, &theme, form.metrics().gender)?;
                form.apply(MetricUpdate::Gender(gender));
            }
            FormAction::EditActivityLevel => {
                let level = prompt_activity_level(t, &theme, form.metrics().activity_level)?;
                form.apply(MetricUpdate::ActivityLevel(level));
            }
            FormAction::Calculate => {
                // Outcome is rendered on the next pass through the loop
                let _ = form.calculate();
            }
            FormAction::ChangeLanguage => {
                let lang = prompt_language(t, &theme, form.language())?;
                form.set_language(lang);
            }
            FormAction::ChangeTheme => {
                theme = prompt_theme(t, &theme)?;
            }
            FormAction::Quit => break,
        }

        last = action;
    }

    Ok(())
}
