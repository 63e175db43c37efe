use anyhow::{anyhow, bail, Context, Result};
use logit_visualizer::config::{check_temperature, check_threshold};
use logit_visualizer::format::{format_number, format_percent};
use logit_visualizer::{Mode, Session, SliderRange, Steps, Visualization, VisualizerConfig};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    mode: Option<Mode>,
    temperature: Option<f64>,
    threshold: Option<f64>,
}

fn parse_args(raw: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut iter = raw.into_iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .ok_or_else(|| anyhow!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--mode" => {
                args.mode = Some(value("--mode")?.parse::<Mode>().map_err(|e: String| anyhow!(e))?);
            }
            "--temperature" => {
                let temperature = value("--temperature")?
                    .parse::<f64>()
                    .context("--temperature expects a number")?;
                args.temperature = Some(check_temperature(temperature)?);
            }
            "--threshold" => {
                let threshold = value("--threshold")?
                    .parse::<f64>()
                    .context("--threshold expects a number")?;
                args.threshold = Some(check_threshold(threshold)?);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            path => args.config = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn print_frame(frame: &Visualization, temperature: f64, decimals: usize) {
    let fmt = |x: f64| format_number(x, decimals);

    println!(" - Mode: {} | Temperature: {}", frame.steps.mode(), fmt(temperature));
    println!("{:-<78}", "");
    match &frame.steps {
        Steps::Softmax(steps) => {
            println!(
                "{:<14} | {:>12} | {:>12} | {:>12} | {:>12}",
                "label", "logit", "scaled", "exp", "probability"
            );
            for s in steps {
                println!(
                    "{:<14} | {:>12} | {:>12} | {:>12} | {:>12}",
                    s.label,
                    fmt(s.original_logit),
                    fmt(s.scaled_logit),
                    fmt(s.exponential),
                    format_percent(s.probability)
                );
            }
            println!("{:-<78}", "");
            if let Some(sum) = frame.exponential_sum {
                println!("Sum of exponentials: {}", fmt(sum));
            }
            match &frame.winner {
                Some(w) => println!("★ Prediction: {} ({})", w.label, format_percent(w.probability)),
                None => println!("No prediction (probabilities are not finite)"),
            }
        }
        Steps::Sigmoid(steps) => {
            println!(
                "{:<14} | {:>12} | {:>12} | {:>12}",
                "label", "logit", "scaled", "probability"
            );
            for s in steps {
                let marker = if s.probability >= frame.threshold { "★" } else { " " };
                println!(
                    "{:<14} | {:>12} | {:>12} | {:>12} {marker}",
                    s.label,
                    fmt(s.original_logit),
                    fmt(s.scaled_logit),
                    fmt(s.probability)
                );
            }
            println!("{:-<78}", "");
            let labels = frame.selected_labels();
            if labels.is_empty() {
                println!("No labels selected (all below threshold {})", fmt(frame.threshold));
            } else {
                println!("Selected (>= {}): {}", fmt(frame.threshold), labels.join(", "));
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => VisualizerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => VisualizerConfig::default(),
    };

    let mut session = Session::from_config(&config)?;
    if let Some(mode) = args.mode {
        session = session.with_mode(mode);
    }
    if let Some(temperature) = args.temperature {
        session = session.with_temperature(temperature);
    }
    if let Some(threshold) = args.threshold {
        session = session.with_threshold(threshold);
    }
    if !SliderRange::TEMPERATURE.contains(session.temperature) {
        warn!(
            temperature = session.temperature,
            "temperature is outside the interactive range {}..={}",
            SliderRange::TEMPERATURE.min,
            SliderRange::TEMPERATURE.max
        );
    }
    if !SliderRange::THRESHOLD.contains(session.threshold) {
        warn!(
            threshold = session.threshold,
            "threshold is outside the interactive range {}..={}",
            SliderRange::THRESHOLD.min,
            SliderRange::THRESHOLD.max
        );
    }

    print_frame(&session.visualize(), session.temperature, config.decimals);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Result<Args> {
        parse_args(raw.iter().map(ToString::to_string))
    }

    #[test]
    fn parses_flags_and_config_path() -> Result<()> {
        let parsed = args(&["demo.json", "--mode", "sigmoid", "--temperature", "0", "--threshold", "0.7"])?;
        assert_eq!(parsed.config, Some(PathBuf::from("demo.json")));
        assert_eq!(parsed.mode, Some(Mode::Sigmoid));
        assert_eq!(parsed.temperature, Some(0.0));
        assert_eq!(parsed.threshold, Some(0.7));
        Ok(())
    }

    #[test]
    fn rejects_non_finite_temperature() {
        for bad in ["NaN", "inf", "-inf"] {
            assert!(args(&["--temperature", bad]).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn rejects_threshold_outside_unit_interval() {
        assert!(args(&["--threshold", "1"]).is_err());
        assert!(args(&["--threshold", "0"]).is_err());
        assert!(args(&["--threshold"]).is_err());
    }
}
