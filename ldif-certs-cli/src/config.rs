use crate::cli::{ARG_CONFIG, ARG_INPUT, ARG_LOG_LEVEL, ARG_SKIP_INVALID};
use anyhow::Context as _;
use clap::ArgMatches;
use ldif_certs::ErrorPolicy;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::env;
use std::io;
use std::path::{Path, PathBuf};

const YAML_CONF_PATH: &str = "ldif_certs_conf.yaml";

const LDIF_CERTS_INPUT_ENV: &str = "LDIF_CERTS_INPUT";
const LDIF_CERTS_LOG_LEVEL_ENV: &str = "LDIF_CERTS_LOG_LEVEL";
const LDIF_CERTS_ON_ERROR_ENV: &str = "LDIF_CERTS_ON_ERROR";

fn default_input() -> PathBuf {
    PathBuf::from("sts-certificates.txt")
}

const fn default_log_level() -> LevelFilter {
    LevelFilter::Warn
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: LevelFilter,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            log_level: default_log_level(),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// Resolves the configuration: defaults, then YAML file, then environment, then command line.
    pub fn startup_init(matches: &ArgMatches<'_>) -> anyhow::Result<Self> {
        Self::resolve(matches, |key| env::var(key).ok())
    }

    fn resolve<F>(matches: &ArgMatches<'_>, env_lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match matches.value_of(ARG_CONFIG) {
            Some(path) => Self::from_yaml_file(Path::new(path), true)?,
            None => Self::from_yaml_file(Path::new(YAML_CONF_PATH), false)?,
        };

        config.inject_env(env_lookup)?;
        config.inject_cli(matches)?;

        Ok(config)
    }

    /// Loads a YAML configuration; a missing file yields the defaults unless `required`.
    pub fn from_yaml_file(path: &Path, required: bool) -> anyhow::Result<Self> {
        let yaml_conf = match std::fs::read_to_string(path) {
            Ok(yaml_conf) => yaml_conf,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("couldn't read yaml config `{}`", path.display()));
            }
        };

        serde_yaml::from_str(&yaml_conf).with_context(|| format!("invalid yaml config `{}`", path.display()))
    }

    fn inject_env<F>(&mut self, env_lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env_lookup(LDIF_CERTS_INPUT_ENV) {
            self.input = PathBuf::from(val);
        }

        if let Some(val) = env_lookup(LDIF_CERTS_LOG_LEVEL_ENV) {
            self.log_level = val
                .parse()
                .with_context(|| format!("invalid {LDIF_CERTS_LOG_LEVEL_ENV} value `{val}`"))?;
        }

        if let Some(val) = env_lookup(LDIF_CERTS_ON_ERROR_ENV) {
            self.on_error = val
                .parse()
                .with_context(|| format!("invalid {LDIF_CERTS_ON_ERROR_ENV} value"))?;
        }

        Ok(())
    }

    fn inject_cli(&mut self, matches: &ArgMatches<'_>) -> anyhow::Result<()> {
        if let Some(v) = matches.value_of(ARG_INPUT) {
            self.input = PathBuf::from(v);
        }

        if let Some(v) = matches.value_of(ARG_LOG_LEVEL) {
            self.log_level = v.parse().with_context(|| format!("invalid log level `{v}`"))?;
        }

        if matches.is_present(ARG_SKIP_INVALID) {
            self.on_error = ErrorPolicy::Skip;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn matches(args: &[&str]) -> ArgMatches<'static> {
        cli::app().get_matches_from(std::iter::once("ldif-certs").chain(args.iter().copied()))
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn write_yaml(dir: &tempfile::TempDir, content: &str) -> String {
        let path = dir.path().join("conf.yaml");
        std::fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_owned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(config.input, PathBuf::from("sts-certificates.txt"));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.on_error, ErrorPolicy::FailFast);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(&dir, "on_error: skip\n");

        let config = Config::resolve(&matches(&["-c", path.as_str()]), lookup(&[])).unwrap();

        assert_eq!(
            config,
            Config {
                on_error: ErrorPolicy::Skip,
                ..Config::default()
            }
        );
    }

    #[test]
    fn env_overrides_yaml_and_cli_overrides_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(&dir, "input: from-yaml.ldif\nlog_level: INFO\n");

        let env = lookup(&[
            (LDIF_CERTS_INPUT_ENV, "from-env.ldif"),
            (LDIF_CERTS_LOG_LEVEL_ENV, "debug"),
        ]);
        let config = Config::resolve(&matches(&["-c", path.as_str(), "--log-level", "trace"]), env).unwrap();

        assert_eq!(config.input, PathBuf::from("from-env.ldif"));
        assert_eq!(config.log_level, LevelFilter::Trace);

        let config = Config::resolve(&matches(&["-c", path.as_str(), "-i", "from-cli.ldif"]), lookup(&[])).unwrap();
        assert_eq!(config.input, PathBuf::from("from-cli.ldif"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn skip_invalid_flag() {
        let env = lookup(&[(LDIF_CERTS_ON_ERROR_ENV, "fail-fast")]);
        let config = Config::resolve(&matches(&["--skip-invalid"]), env).unwrap();

        assert_eq!(config.on_error, ErrorPolicy::Skip);
    }

    #[test]
    fn invalid_env_value_is_an_error() {
        let err = Config::resolve(&matches(&[]), lookup(&[(LDIF_CERTS_ON_ERROR_ENV, "ignore")])).unwrap_err();
        assert!(format!("{err:#}").contains("unknown error policy `ignore`"));

        let err = Config::resolve(&matches(&[]), lookup(&[(LDIF_CERTS_LOG_LEVEL_ENV, "loud")])).unwrap_err();
        assert!(err.to_string().contains(LDIF_CERTS_LOG_LEVEL_ENV));
    }

    #[test]
    fn missing_optional_yaml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_yaml_file(&dir.path().join(YAML_CONF_PATH), false).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_explicit_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = Config::resolve(&matches(&["-c", path.to_str().unwrap()]), lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("missing.yaml"));
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_yaml(&dir, "on_error: sometimes\n");

        let err = Config::resolve(&matches(&["-c", path.as_str()]), lookup(&[])).unwrap_err();
        assert!(err.to_string().starts_with("invalid yaml config"));
    }
}
