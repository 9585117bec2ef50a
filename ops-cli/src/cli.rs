use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use config_engine::{ConfigValidator, RiskConfigValidator, RiskEngineConfig};
use risk_engine::Vitals;

/// RustCare clinical risk scoring
#[derive(Parser, Debug)]
#[command(name = "rustcare-risk")]
#[command(about = "Score vitals, inspect datasets and evaluate the clinical risk rules")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "rustcare-risk.yaml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a single vitals sample
    Assess(AssessArgs),

    /// Classify the first record of the configured dataset
    Analyze(DatasetArgs),

    /// Write a synthetic labelled dataset as CSV
    Generate(GenerateArgs),

    /// Compare the rule set against the labels in a dataset
    Evaluate(DatasetArgs),

    /// Print the effective configuration as YAML
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    /// Breaths per minute
    #[arg(long)]
    pub respiratory_rate: f64,

    /// SpO2 percentage
    #[arg(long)]
    pub oxygen_saturation: f64,

    /// Beats per minute
    #[arg(long)]
    pub heart_rate: f64,

    /// Systolic blood pressure, mmHg
    #[arg(long)]
    pub systolic_bp: f64,

    /// Diastolic blood pressure, mmHg
    #[arg(long)]
    pub diastolic_bp: f64,

    /// Patient is on supplemental oxygen
    #[arg(long)]
    pub oxygen_therapy: bool,
}

impl From<&AssessArgs> for Vitals {
    fn from(args: &AssessArgs) -> Self {
        Vitals {
            respiratory_rate: args.respiratory_rate,
            oxygen_saturation: args.oxygen_saturation,
            heart_rate: args.heart_rate,
            systolic_bp: args.systolic_bp,
            diastolic_bp: args.diastolic_bp,
            oxygen_therapy: args.oxygen_therapy,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Dataset file, overriding `dataset.path`
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Number of records, overriding `synthetic.count`
    #[arg(long)]
    pub count: Option<usize>,

    /// RNG seed, overriding `synthetic.seed`
    #[arg(long)]
    pub seed: Option<u64>,

    /// Destination file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Fold per-invocation flags over the loaded configuration and validate
    /// the result, so a flag cannot bypass the rules a file is held to
    pub fn apply_overrides(
        &self,
        mut config: RiskEngineConfig,
    ) -> config_engine::Result<RiskEngineConfig> {
        if self.verbose {
            config.log.level = "debug".to_string();
        }

        match &self.command {
            Command::Analyze(args) | Command::Evaluate(args) => {
                if let Some(path) = &args.dataset {
                    config.dataset.path = path.clone();
                }
            }
            Command::Generate(args) => {
                if let Some(count) = args.count {
                    config.synthetic.count = count;
                }
                if args.seed.is_some() {
                    config.synthetic.seed = args.seed;
                }
            }
            Command::Assess(_) | Command::Config => {}
        }

        RiskConfigValidator.validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_assess_flags() {
        let cli = parse(&[
            "rustcare-risk",
            "assess",
            "--respiratory-rate",
            "18",
            "--oxygen-saturation",
            "88",
            "--heart-rate",
            "78",
            "--systolic-bp",
            "128",
            "--diastolic-bp",
            "82",
            "--oxygen-therapy",
        ]);

        let Command::Assess(args) = &cli.command else {
            panic!("expected assess, got {:?}", cli.command);
        };
        let vitals = Vitals::from(args);
        assert_eq!(vitals.oxygen_saturation, 88.0);
        assert!(vitals.oxygen_therapy);
        assert_eq!(cli.config, PathBuf::from("rustcare-risk.yaml"));
    }

    #[test]
    fn test_assess_requires_every_vital() {
        let result = Cli::try_parse_from(["rustcare-risk", "assess", "--heart-rate", "78"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["rustcare-risk", "evaluate", "--verbose", "--config", "staging.yaml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("staging.yaml"));
    }

    #[test]
    fn test_dataset_override() {
        let cli = parse(&["rustcare-risk", "analyze", "--dataset", "/tmp/vitals.csv"]);
        let config = cli.apply_overrides(RiskEngineConfig::default()).unwrap();
        assert_eq!(config.dataset.path, PathBuf::from("/tmp/vitals.csv"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_generate_overrides_keep_unset_values() {
        let mut base = RiskEngineConfig::default();
        base.synthetic.seed = Some(3);

        let cli = parse(&["rustcare-risk", "-v", "generate", "--count", "12"]);
        let config = cli.apply_overrides(base).unwrap();
        assert_eq!(config.synthetic.count, 12);
        assert_eq!(config.synthetic.seed, Some(3));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_zero_count_override_rejected() {
        let cli = parse(&["rustcare-risk", "generate", "--count", "0"]);
        let result = cli.apply_overrides(RiskEngineConfig::default());
        assert!(matches!(result, Err(config_engine::ConfigError::ValidationError(_))));
    }
}
