//! Worker configuration: compiled defaults overridden by environment
//! variables. There is no settings file — one invocation, one config,
//! passed by value into the pipeline.

use std::path::PathBuf;

/// Environment variable naming the deployment root directory.
const TASK_ROOT_VAR: &str = "LAMBDA_TASK_ROOT";
/// Model-name override.
const MODEL_VAR: &str = "MURMUR_MODEL";
/// Model-directory override.
const MODEL_DIR_VAR: &str = "MURMUR_MODEL_DIR";
/// Scratch-path override.
const SCRATCH_VAR: &str = "MURMUR_SCRATCH";
/// Store-root override for the filesystem backend.
const STORE_ROOT_VAR: &str = "MURMUR_STORE_ROOT";

/// Per-invocation configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Deployment root; the engine executable lives under `bin/` here.
    pub task_root: PathBuf,
    /// Model name passed to the invoker.
    pub model: String,
    /// Directory holding `ggml-<name>.bin` artifacts.
    pub model_dir: PathBuf,
    /// Fixed scratch path the staged audio copy is written to.
    ///
    /// Non-unique on purpose: concurrent invocations are assumed to run
    /// in isolated sandboxes, each with its own scratch filesystem.
    pub scratch: PathBuf,
    /// Root directory for the filesystem object-store backend.
    pub store_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_root: PathBuf::from("."),
            model: murmur_transcribe::DEFAULT_MODEL.to_owned(),
            model_dir: PathBuf::from("models"),
            scratch: PathBuf::from("/tmp/audio.wav"),
            store_root: PathBuf::from("/srv/murmur"),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied on top.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden through a variable lookup.
    ///
    /// The seam exists so tests can supply variables without mutating
    /// the process-global environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = lookup(TASK_ROOT_VAR) {
            config.task_root = PathBuf::from(v);
        }
        if let Some(v) = lookup(MODEL_VAR) {
            config.model = v;
        }
        if let Some(v) = lookup(MODEL_DIR_VAR) {
            config.model_dir = PathBuf::from(v);
        }
        if let Some(v) = lookup(SCRATCH_VAR) {
            config.scratch = PathBuf::from(v);
        }
        if let Some(v) = lookup(STORE_ROOT_VAR) {
            config.store_root = PathBuf::from(v);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_deployment_conventions() {
        let config = Config::default();
        assert_eq!(config.task_root, PathBuf::from("."));
        assert_eq!(config.model, "tiny");
        assert_eq!(config.model_dir, PathBuf::from("models"));
        assert_eq!(config.scratch, PathBuf::from("/tmp/audio.wav"));
    }

    #[test]
    fn each_variable_overrides_its_default() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (TASK_ROOT_VAR, "/var/task"),
            (MODEL_VAR, "base.en"),
            (MODEL_DIR_VAR, "/opt/models"),
            (SCRATCH_VAR, "/scratch/in.wav"),
            (STORE_ROOT_VAR, "/data/buckets"),
        ]);
        let config = Config::from_lookup(|name| vars.get(name).map(ToString::to_string));
        assert_eq!(config.task_root, PathBuf::from("/var/task"));
        assert_eq!(config.model, "base.en");
        assert_eq!(config.model_dir, PathBuf::from("/opt/models"));
        assert_eq!(config.scratch, PathBuf::from("/scratch/in.wav"));
        assert_eq!(config.store_root, PathBuf::from("/data/buckets"));
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = Config::from_lookup(|name| {
            (name == MODEL_VAR).then(|| "small".to_owned())
        });
        assert_eq!(config.model, "small");
        // Everything else stays at its default
        assert_eq!(config.task_root, PathBuf::from("."));
        assert_eq!(config.model_dir, PathBuf::from("models"));
        assert_eq!(config.scratch, PathBuf::from("/tmp/audio.wav"));
        assert_eq!(config.store_root, PathBuf::from("/srv/murmur"));
    }
}
