use clap::{Parser, Subcommand};

use crate::i18n::Language;
use crate::interface::Theme;
use crate::models::{ActivityLevel, Gender};

/// TDEE & BMR calculator: daily calorie needs from age, sex, weight, height and activity.
#[derive(Parser, Debug)]
#[command(name = "tdee_calc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Display language (en, zh-TW, zh-CN, ja).
    #[arg(short, long, global = true, env = "TDEE_LANG", default_value = "en")]
    pub lang: Language,

    /// Color theme: a preset name, #rrggbb, or #start,#end,#button.
    #[arg(short, long, global = true, env = "TDEE_THEME", default_value = "Blue")]
    pub theme: Theme,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fill in the form interactively.
    Interactive,

    /// Calculate once from command-line values.
    Calculate {
        /// Age in years.
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Weight in kilograms.
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<String>,

        /// Height in centimeters.
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// male or female.
        #[arg(long, default_value = "male")]
        gender: Gender,

        /// sedentary, light, moderate, active or very_active.
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List supported languages.
    Languages,

    /// List theme presets.
    Themes,
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "tdee_calc", "--lang", "ja", "calculate", "--age", "30", "--weight", "70",
            "--height", "175", "--gender", "female", "--activity", "very_active",
        ])
        .unwrap();

        assert_eq!(cli.lang, Language::Japanese);
        match cli.command {
            Some(Command::Calculate {
                age,
                gender,
                activity,
                json,
                ..
            }) => {
                assert_eq!(age.as_deref(), Some("30"));
                assert_eq!(gender, Gender::Female);
                assert_eq!(activity, ActivityLevel::VeryActive);
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_negative_text_reaches_normalizer() {
        let cli = Cli::try_parse_from(["tdee_calc", "calculate", "--weight", "-70"]).unwrap();
        match cli.command {
            Some(Command::Calculate { weight, .. }) => assert_eq!(weight.as_deref(), Some("-70")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_activity() {
        assert!(Cli::try_parse_from(["tdee_calc", "calculate", "--activity", "extreme"]).is_err());
    }

    #[test]
    fn test_default_command() {
        let cli = Cli::try_parse_from(["tdee_calc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.theme.name(), "Blue");
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
