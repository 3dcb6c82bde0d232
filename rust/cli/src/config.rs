use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing_subscriber::EnvFilter;

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON document per result.
    Json,
}

/// Which glyphs are used for suits in text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    /// ♥ ♦ ♣ ♠
    Unicode,
    /// h d c s
    Ascii,
}

/// Rendering choices for one run: configuration merged with command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub symbols: SymbolStyle,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            symbols: SymbolStyle::Unicode,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    pub symbols: SymbolStyle,
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub format: ValueSource,
    pub symbols: ValueSource,
    pub log_filter: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            symbols: ValueSource::Default,
            log_filter: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            symbols: SymbolStyle::Unicode,
            log_filter: "warn".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("FIVECARD_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.symbols {
            cfg.symbols = v;
            sources.symbols = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
    }

    if let Ok(format) = std::env::var("FIVECARD_FORMAT")
        && !format.is_empty()
    {
        cfg.format = OutputFormat::from_str(&format, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid format: {}", format)))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(symbols) = std::env::var("FIVECARD_SYMBOLS")
        && !symbols.is_empty()
    {
        cfg.symbols = SymbolStyle::from_str(&symbols, true)
            .map_err(|_| ConfigError::Invalid(format!("Invalid symbols: {}", symbols)))?;
        sources.symbols = ValueSource::Env;
    }
    if let Ok(filter) = std::env::var("FIVECARD_LOG")
        && !filter.is_empty()
    {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    symbols: Option<SymbolStyle>,
    #[serde(default)]
    log_filter: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Err(e) = EnvFilter::try_new(&cfg.log_filter) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: log_filter {:?}: {}",
            cfg.log_filter, e
        )));
    }
    Ok(())
}
