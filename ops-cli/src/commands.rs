use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config_engine::RiskEngineConfig;
use error_common::{Result, RustCareError};
use risk_engine::{
    describe_model, evaluate, generate_seeded_dataset, generate_synthetic_dataset, write_csv,
    EvaluationReport, ModelSummary, RiskAnalyzer, Vitals,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{AssessArgs, Cli, Command, GenerateArgs};

/// Output of `evaluate`
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutput {
    pub model: ModelSummary,
    pub evaluation: EvaluationReport,
}

/// Dispatch a parsed command against its effective configuration
pub fn run<W: Write>(cli: &Cli, config: RiskEngineConfig, out: &mut W) -> Result<()> {
    match &cli.command {
        Command::Assess(args) => assess(args, config, out),
        Command::Analyze(_) => analyze(config, out),
        Command::Generate(args) => generate(args, &config, out),
        Command::Evaluate(_) => evaluate_dataset(config, out),
        Command::Config => {
            write!(out, "{}", config.to_yaml()?)?;
            Ok(())
        }
    }
}

pub fn assess<W: Write>(args: &AssessArgs, config: RiskEngineConfig, out: &mut W) -> Result<()> {
    let vitals = Vitals::from(args);
    ensure_finite(&vitals)?;

    let report = RiskAnalyzer::new(config).analyze_vitals(vitals);
    write_json(&report, out)
}

pub fn analyze<W: Write>(config: RiskEngineConfig, out: &mut W) -> Result<()> {
    let report = RiskAnalyzer::new(config).analyze();
    write_json(&report, out)
}

pub fn evaluate_dataset<W: Write>(config: RiskEngineConfig, out: &mut W) -> Result<()> {
    let dataset = RiskAnalyzer::new(config).load_dataset();
    let output = EvaluationOutput {
        model: describe_model(&dataset.records),
        evaluation: evaluate(&dataset.records),
    };

    info!(
        source = ?dataset.source,
        labelled = output.evaluation.labelled,
        agreement_rate = output.evaluation.agreement_rate,
        "Evaluated rule set against dataset"
    );
    write_json(&output, out)
}

/// Write synthetic records to `--output`, or to `out` when none is given
pub fn generate<W: Write>(args: &GenerateArgs, config: &RiskEngineConfig, out: &mut W) -> Result<()> {
    let count = config.synthetic.count;
    let records = match config.synthetic.seed {
        Some(seed) => generate_seeded_dataset(count, seed),
        None => generate_synthetic_dataset(count),
    };

    match &args.output {
        Some(path) => {
            write_csv(&records, BufWriter::new(create_output(path)?))?;
            info!(path = %path.display(), count, "Synthetic dataset written");
        }
        None => write_csv(&records, out)?,
    }
    Ok(())
}

fn create_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

fn ensure_finite(vitals: &Vitals) -> Result<()> {
    let readings = [
        ("respiratory_rate", vitals.respiratory_rate),
        ("oxygen_saturation", vitals.oxygen_saturation),
        ("heart_rate", vitals.heart_rate),
        ("systolic_bp", vitals.systolic_bp),
        ("diastolic_bp", vitals.diastolic_bp),
    ];

    match readings.iter().find(|(_, value)| !value.is_finite()) {
        Some((name, value)) => Err(RustCareError::ValidationError(format!(
            "{name} must be a finite number, got {value}"
        ))),
        None => Ok(()),
    }
}

fn write_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use risk_engine::{load, RiskLevel};

    fn run_args(args: &[&str], config: RiskEngineConfig) -> Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        let config = cli.apply_overrides(config)?;
        let mut out = Vec::new();
        run(&cli, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn missing_dataset_config(dir: &tempfile::TempDir) -> RiskEngineConfig {
        let mut config = RiskEngineConfig::default();
        config.dataset.path = dir.path().join("missing.csv");
        config.synthetic.seed = Some(5);
        config
    }

    #[test]
    fn test_assess_prints_report() {
        let output = run_args(
            &[
                "rustcare-risk",
                "assess",
                "--respiratory-rate",
                "8",
                "--oxygen-saturation",
                "85",
                "--heart-rate",
                "120",
                "--systolic-bp",
                "170",
                "--diastolic-bp",
                "105",
                "--oxygen-therapy",
            ],
            RiskEngineConfig::default(),
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["riskLevel"], "High");
        assert_eq!(json["riskScore"], 100);
        assert_eq!(json["factors"].as_array().unwrap().len(), 5);
        assert_eq!(json["metadata"]["datasetSource"], "live");
    }

    #[test]
    fn test_assess_rejects_non_finite_vitals() {
        let args = AssessArgs {
            respiratory_rate: 18.0,
            oxygen_saturation: f64::NAN,
            heart_rate: 78.0,
            systolic_bp: 128.0,
            diastolic_bp: 82.0,
            oxygen_therapy: false,
        };

        let err = assess(&args, RiskEngineConfig::default(), &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_1001");
    }

    #[test]
    fn test_analyze_falls_back_to_synthetic() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_args(&["rustcare-risk", "analyze"], missing_dataset_config(&dir)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["metadata"]["datasetSource"], "synthetic");
        assert_eq!(json["metadata"]["datasetSize"], 100);
    }

    #[test]
    fn test_generate_to_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/synthetic.csv");
        let path_arg = path.to_str().unwrap();

        let output = run_args(
            &["rustcare-risk", "generate", "--count", "20", "--seed", "4", "--output", path_arg],
            RiskEngineConfig::default(),
        )
        .unwrap();
        assert!(output.is_empty());

        let records = load(&path);
        assert_eq!(records, generate_seeded_dataset(20, 4));
        assert_eq!(records[19].risk_level.level(), Some(RiskLevel::High));
    }

    #[test]
    fn test_generate_to_stdout() {
        let output = run_args(
            &["rustcare-risk", "generate", "--count", "3", "--seed", "1"],
            RiskEngineConfig::default(),
        )
        .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], risk_engine::DATASET_HEADER);
    }

    #[test]
    fn test_evaluate_reports_model_and_agreement() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("vitals.csv");
        std::fs::write(
            &dataset,
            "header\n18,96,78,128,82,false,Low\n8,85,120,170,105,true,Medium\n",
        )
        .unwrap();

        let output = run_args(
            &["rustcare-risk", "evaluate", "--dataset", dataset.to_str().unwrap()],
            RiskEngineConfig::default(),
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["model"]["model"], "decision-tree-v1");
        assert_eq!(json["model"]["trainingSize"], 2);
        assert_eq!(json["evaluation"]["labelled"], 2);
        assert_eq!(json["evaluation"]["agreements"], 1);
    }

    #[test]
    fn test_config_prints_effective_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_args(&["rustcare-risk", "config"], missing_dataset_config(&dir)).unwrap();
        assert!(output.contains("fallback_to_synthetic: true"));
        assert!(output.contains("seed: 5"));
    }

    #[test]
    fn test_generate_zero_count_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let err = run_args(
            &["rustcare-risk", "generate", "--count", "0", "--output", path.to_str().unwrap()],
            RiskEngineConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err.code(), "CONFIG_6001");
        assert!(!path.exists());
    }
}
