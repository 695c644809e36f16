use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Dataset locations
    pub data: DataConfig,

    /// Artifact and report locations
    pub artifacts: ArtifactsConfig,

    /// Training pipeline configuration
    pub training: TrainingConfig,

    /// Model hyperparameters
    pub model: ModelConfig,

    /// Out-of-process retraining configuration
    #[serde(default)]
    pub retrain: RetrainConfig,

    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from the embedded defaults, an optional file and
    /// the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/default.toml".to_string());

        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(&config_path).required(false))
            // Override with environment variables (prefix: NEWSGUARD_)
            .add_source(
                config::Environment::with_prefix("NEWSGUARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            artifacts: ArtifactsConfig::default(),
            training: TrainingConfig::default(),
            model: ModelConfig::default(),
            retrain: RetrainConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV corpus of known-fake articles (label 1)
    #[serde(default = "default_fake_corpus")]
    pub fake_corpus: PathBuf,

    /// CSV corpus of known-true articles (label 0)
    #[serde(default = "default_true_corpus")]
    pub true_corpus: PathBuf,

    /// Optional production feedback log used for augmentation
    #[serde(default = "default_feedback_log")]
    pub feedback_log: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            fake_corpus: default_fake_corpus(),
            true_corpus: default_true_corpus(),
            feedback_log: default_feedback_log(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Canonical path of the serialized model artifact
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Directory receiving metrics and diagnostic reports
    #[serde(default = "default_reports_dir")]
    pub reports_dir: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            reports_dir: default_reports_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Single seed driving every random operation in the pipeline
    /// (sampling cap, stratified split, cross-validation subsample)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Upper bound on total training rows; larger corpora are sampled down
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,

    /// Held-out fraction for evaluation
    #[serde(default = "default_test_fraction")]
    pub test_fraction: f64,

    /// Number of cross-validation folds
    #[serde(default = "default_cv_folds")]
    pub cv_folds: usize,

    /// Upper bound on rows used for cross-validation
    #[serde(default = "default_cv_sample_cap")]
    pub cv_sample_cap: usize,

    /// Documents whose normalized text is at most this long are dropped
    #[serde(default = "default_min_normalized_len")]
    pub min_normalized_len: usize,

    /// Feedback rows below this confidence are discarded
    #[serde(default = "default_feedback_min_confidence")]
    pub feedback_min_confidence: f64,

    /// Upper bound on feedback rows folded into a training run
    #[serde(default = "default_feedback_cap")]
    pub feedback_cap: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            max_samples: default_max_samples(),
            test_fraction: default_test_fraction(),
            cv_folds: default_cv_folds(),
            cv_sample_cap: default_cv_sample_cap(),
            min_normalized_len: default_min_normalized_len(),
            feedback_min_confidence: default_feedback_min_confidence(),
            feedback_cap: default_feedback_cap(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Maximum vocabulary size
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Minimum document frequency for a term to enter the vocabulary
    #[serde(default = "default_min_doc_freq")]
    pub min_doc_freq: usize,

    /// Maximum document frequency as a fraction of the corpus
    #[serde(default = "default_max_doc_ratio")]
    pub max_doc_ratio: f64,

    /// Inverse regularization strength; small values under-fit on purpose
    #[serde(default = "default_c")]
    pub c: f64,

    /// Optimizer iteration bound
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,

    /// Gradient descent step size
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Fake-probability decision threshold
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            min_doc_freq: default_min_doc_freq(),
            max_doc_ratio: default_max_doc_ratio(),
            c: default_c(),
            max_iter: default_max_iter(),
            learning_rate: default_learning_rate(),
            threshold: default_threshold(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrainConfig {
    /// Trainer program; when unset the newsguard-train binary next to the
    /// running executable is used
    pub program: Option<PathBuf>,

    /// Extra arguments passed to the trainer
    #[serde(default)]
    pub args: Vec<String>,

    /// Wall-clock timeout for a training job (seconds)
    #[serde(default = "default_retrain_timeout")]
    pub timeout_secs: u64,
}

impl Default for RetrainConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: Vec::new(),
            timeout_secs: default_retrain_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7000
}

fn default_fake_corpus() -> PathBuf {
    "./data/datasets/Fake.csv".into()
}

fn default_true_corpus() -> PathBuf {
    "./data/datasets/True.csv".into()
}

fn default_feedback_log() -> PathBuf {
    "./data/logs/feedback.csv".into()
}

fn default_model_path() -> PathBuf {
    "./data/artifacts/news_model.bin".into()
}

fn default_reports_dir() -> PathBuf {
    "./data/reports".into()
}

fn default_seed() -> u64 {
    42
}

fn default_max_samples() -> usize {
    30000
}

fn default_test_fraction() -> f64 {
    0.2
}

fn default_cv_folds() -> usize {
    3
}

fn default_cv_sample_cap() -> usize {
    8000
}

fn default_min_normalized_len() -> usize {
    10
}

fn default_feedback_min_confidence() -> f64 {
    85.0
}

fn default_feedback_cap() -> usize {
    5000
}

fn default_max_features() -> usize {
    500
}

fn default_min_doc_freq() -> usize {
    20
}

fn default_max_doc_ratio() -> f64 {
    0.95
}

fn default_c() -> f64 {
    0.005
}

fn default_max_iter() -> usize {
    50
}

fn default_learning_rate() -> f64 {
    0.5
}

fn default_threshold() -> f64 {
    0.5
}

fn default_retrain_timeout() -> u64 {
    1800
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        assert_eq!(default_port(), 7000);
        assert_eq!(default_max_samples(), 30000);
        assert_eq!(default_max_features(), 500);
        assert_eq!(default_min_doc_freq(), 20);
        assert_eq!(default_feedback_cap(), 5000);
        assert_eq!(default_retrain_timeout(), 1800);
    }

    #[test]
    fn test_embedded_defaults_parse() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.training.seed, 42);
        assert_eq!(config.model.threshold, 0.5);
        assert_eq!(config.retrain.timeout_secs, 1800);
    }
}
