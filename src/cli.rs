use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Type into a text field and pick from matching suggestions.
///
/// Candidates come from FILE, from piped stdin, or from --candidate.
/// The final text is printed to stdout on Enter; Esc or Ctrl+C exits with status 1.
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Candidate file: a JSON array of strings, or one candidate per line
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Add a candidate (repeatable)
    #[arg(short = 'c', long = "candidate", value_name = "TEXT")]
    pub candidates: Vec<String>,

    /// Text shown while the field is empty
    #[arg(short, long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Text the field starts with
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub initial: String,

    /// Maximum number of characters accepted
    #[arg(short = 'l', long, value_name = "N")]
    pub text_limit: Option<usize>,

    /// Suggestions appear once the text is longer than this
    #[arg(short = 'm', long = "min-chars", value_name = "N")]
    pub min_chars: Option<usize>,

    /// Rows shown in the dropdown before it scrolls
    #[arg(long, value_name = "N")]
    pub max_visible: Option<usize>,

    /// Show the field read-only
    #[arg(long)]
    pub disabled: bool,

    /// Config file (default: ~/.config/autofield/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the result as a JSON string
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Layer command-line flags over values from the config file
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(placeholder) = &self.placeholder {
            config.field.placeholder = placeholder.clone();
        }
        if let Some(limit) = self.text_limit {
            config.field.text_limit = limit;
        }
        if let Some(min_chars) = self.min_chars {
            config.field.min_chars_to_trigger = min_chars;
        }
        if let Some(max_visible) = self.max_visible {
            config.dropdown.max_visible = max_visible;
        }
        if self.disabled {
            config.field.disabled = true;
        }
        config
    }

    /// Format the submitted text for stdout
    pub fn format_output(&self, text: &str) -> String {
        if self.json {
            // Serializing a str cannot fail
            serde_json::to_string(text).unwrap_or_default()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["autofield"]).unwrap();
        assert!(cli.file.is_none());
        assert!(cli.candidates.is_empty());
        assert_eq!(cli.initial, "");
        assert!(!cli.disabled);
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "autofield",
            "fruits.txt",
            "-c",
            "Kiwi",
            "--candidate",
            "Lime",
            "-p",
            "Fruit",
            "-i",
            "ap",
            "-l",
            "10",
            "-m",
            "1",
            "--max-visible",
            "3",
            "--disabled",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("fruits.txt")));
        assert_eq!(cli.candidates, vec!["Kiwi", "Lime"]);
        assert_eq!(cli.placeholder.as_deref(), Some("Fruit"));
        assert_eq!(cli.initial, "ap");
        assert_eq!(cli.text_limit, Some(10));
        assert_eq!(cli.min_chars, Some(1));
        assert_eq!(cli.max_visible, Some(3));
        assert!(cli.disabled);
        assert!(cli.json);
    }

    #[test]
    fn test_non_numeric_limit_is_rejected() {
        assert!(Cli::try_parse_from(["autofield", "--text-limit", "lots"]).is_err());
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from(["autofield", "-l", "8", "--max-visible", "2", "--disabled"])
            .unwrap();
        let config = cli.apply_overrides(Config::default());

        assert_eq!(config.field.text_limit, 8);
        assert_eq!(config.dropdown.max_visible, 2);
        assert!(config.field.disabled);
        // Untouched values keep the config file's
        assert_eq!(config.field.min_chars_to_trigger, 2);
    }

    #[test]
    fn test_no_flags_keep_config_values() {
        let mut file_config = Config::default();
        file_config.field.text_limit = 30;
        file_config.field.disabled = true;

        let cli = Cli::default();
        assert_eq!(cli.apply_overrides(file_config.clone()), file_config);
    }

    #[test]
    fn test_format_output() {
        let plain = Cli::default();
        assert_eq!(plain.format_output("say \"hi\""), "say \"hi\"");

        let json = Cli {
            json: true,
            ..Cli::default()
        };
        assert_eq!(json.format_output("say \"hi\""), r#""say \"hi\"""#);
    }
}
