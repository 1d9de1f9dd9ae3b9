//! Output configuration for printing annotations.

/// How `dump` renders annotations.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Pretty-print JSON (ignored for text output)
    pub pretty: bool,
    /// Separator between path and signature in text output
    pub separator: String,
}

/// Output format for dumped annotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `path<separator>signature` line per annotation
    Text,
    /// A JSON object keyed by symbol path
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
            separator: "\t".to_string(),
        }
    }
}

impl OutputConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable pretty JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the text separator
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.pretty);
        assert_eq!(config.separator, "\t");
    }

    #[test]
    fn test_builder_chain() {
        let config = OutputConfig::new()
            .with_format(OutputFormat::Json)
            .with_pretty(false)
            .with_separator(" = ");
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.pretty);
        assert_eq!(config.separator, " = ");
    }
}
