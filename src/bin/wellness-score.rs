//! Score one set of inputs from the command line.

use std::path::PathBuf;

use serde::Serialize;
use wellness::band::{self, ScoreBand};
use wellness::logging;
use wellness::score::{WellnessInput, WellnessScore};
use wellness::startup;

fn main() {
    if let Err(err) = logging::init_stderr() {
        eprintln!("Logging disabled: {err}");
    }
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct CliOptions {
    sleep_hours: Option<f32>,
    steps: Option<u32>,
    mood_rating: Option<u8>,
    model_path: Option<PathBuf>,
    json: bool,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    input: WellnessInput,
    score: WellnessScore,
    band: ScoreBand,
    label: &'static str,
    color: String,
    message: &'static str,
}

impl ScoreReport {
    fn new(input: WellnessInput, score: WellnessScore) -> Self {
        let presentation = band::classify(score);
        Self {
            input,
            score,
            band: presentation.band,
            label: presentation.label,
            color: presentation.color.hex(),
            message: presentation.band.feedback_message(),
        }
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        println!("{}", help_text());
        return Ok(());
    };
    let mut settings = startup::load_settings().map_err(|err| err.to_string())?;
    if let Some(path) = options.model_path.clone() {
        settings.model.path = Some(path);
        settings.model.sha256 = None;
    }
    let scorer = startup::shared_scorer(&settings).map_err(|err| err.to_string())?;
    let input = resolve_input(&options, settings.ui.initial_input());
    let score = scorer.score(&input).map_err(|err| err.to_string())?;
    let report = ScoreReport::new(input, score);

    if options.json {
        let json = serde_json::to_string_pretty(&report).map_err(|err| err.to_string())?;
        println!("{json}");
    } else {
        println!("score: {}/100", report.score);
        println!("band: {} ({})", report.label, report.color);
        println!("{}", report.message);
    }
    Ok(())
}

/// Fill unspecified inputs from the configured starting values.
fn resolve_input(options: &CliOptions, defaults: WellnessInput) -> WellnessInput {
    WellnessInput::new(
        options.sleep_hours.unwrap_or(defaults.sleep_hours),
        options.steps.unwrap_or(defaults.steps),
        options.mood_rating.unwrap_or(defaults.mood_rating),
    )
}

/// `Ok(None)` means help was requested.
fn parse_args(args: Vec<String>) -> Result<Option<CliOptions>, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Ok(None),
            "--sleep" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--sleep requires a value".to_string())?;
                let hours = value
                    .parse::<f32>()
                    .map_err(|_| format!("Invalid --sleep value: {value}"))?;
                if !hours.is_finite() {
                    return Err(format!("Invalid --sleep value: {value}"));
                }
                options.sleep_hours = Some(hours);
            }
            "--steps" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--steps requires a value".to_string())?;
                options.steps = Some(
                    value
                        .parse::<u32>()
                        .map_err(|_| format!("Invalid --steps value: {value}"))?,
                );
            }
            "--mood" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--mood requires a value".to_string())?;
                options.mood_rating = Some(
                    value
                        .parse::<u8>()
                        .map_err(|_| format!("Invalid --mood value: {value}"))?,
                );
            }
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                options.model_path = Some(PathBuf::from(value));
            }
            "--json" => options.json = true,
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(Some(options))
}

fn help_text() -> String {
    [
        "wellness-score",
        "",
        "Compute a wellness score from sleep, steps and mood.",
        "",
        "Usage:",
        "  wellness-score [--sleep <hours>] [--steps <count>] [--mood <1-10>] [--model <path>] [--json]",
        "",
        "Options:",
        "  --sleep <hours>   Hours of sleep, 0 to 12",
        "  --steps <count>   Daily steps, 0 to 25000",
        "  --mood <rating>   Mood rating, 1 to 10",
        "  --model <path>    Model artifact to load instead of the configured one",
        "  --json            Print the result as JSON",
        "",
        "Omitted inputs fall back to the starting values in config.toml.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let options = parse_args(args(&[
            "--sleep", "8", "--steps", "12000", "--mood", "8", "--model", "m.json", "--json",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(options.sleep_hours, Some(8.0));
        assert_eq!(options.steps, Some(12000));
        assert_eq!(options.mood_rating, Some(8));
        assert_eq!(options.model_path, Some(PathBuf::from("m.json")));
        assert!(options.json);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_args(args(&["--sleep", "7", "--help"])).unwrap(), None);
    }

    #[test]
    fn rejects_missing_and_malformed_values() {
        assert!(parse_args(args(&["--sleep"])).unwrap_err().contains("requires a value"));
        assert!(parse_args(args(&["--steps", "-5"])).unwrap_err().contains("--steps"));
        assert!(parse_args(args(&["--mood", "300"])).unwrap_err().contains("--mood"));
        assert!(parse_args(args(&["--sleep", "NaN"])).unwrap_err().contains("--sleep"));
        assert!(parse_args(args(&["--bogus"])).unwrap_err().starts_with("Unknown argument"));
    }

    #[test]
    fn omitted_inputs_use_defaults() {
        let options = CliOptions {
            steps: Some(3000),
            ..CliOptions::default()
        };
        let input = resolve_input(&options, WellnessInput::new(7.5, 8000, 7));
        assert_eq!(input, WellnessInput::new(7.5, 3000, 7));
    }

    #[test]
    fn report_matches_band() {
        let report = ScoreReport::new(WellnessInput::default(), WellnessScore::from_raw(70.5));
        assert_eq!(report.band, ScoreBand::Excellent);
        assert_eq!(report.label, "Excellent");
        assert_eq!(report.color, "#10b981");
        assert_eq!(report.message, "Outstanding wellness habits!");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 70.5);
        assert_eq!(json["band"], "excellent");
        assert_eq!(json["input"]["steps"], 8000);
    }
}
