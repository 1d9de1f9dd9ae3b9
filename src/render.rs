//! Rendering of annotations and diagnostics for terminal output.

use miette::{NamedSource, Report};
use serde_json::{Map, Value};
use sgoann_syntax::AnnotationError;

use crate::annotations::Annotations;
use crate::config::{OutputConfig, OutputFormat};
use crate::registry::AnnotationRegistry;

/// Render one store according to `config`.
///
/// ## Errors
/// Only JSON serialization can fail.
pub fn render_annotations(annotations: &Annotations, config: &OutputConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Text => Ok(text_lines(annotations, "", &config.separator)),
        OutputFormat::Json => to_json(&annotations_value(annotations), config.pretty),
    }
}

/// Render a whole registry according to `config`.
///
/// Text output prefixes every path with its package and `:`; JSON output nests stores under
/// their package path.
pub fn render_registry(registry: &AnnotationRegistry, config: &OutputConfig) -> Result<String, serde_json::Error> {
    match config.format {
        OutputFormat::Text => Ok(registry
            .packages()
            .map(|(package, annotations)| text_lines(annotations, &format!("{package}:"), &config.separator))
            .collect()),
        OutputFormat::Json => {
            let packages: Map<String, Value> = registry
                .packages()
                .map(|(package, annotations)| (package.to_string(), annotations_value(annotations)))
                .collect();
            to_json(&Value::Object(packages), config.pretty)
        }
    }
}

fn text_lines(annotations: &Annotations, prefix: &str, separator: &str) -> String {
    let mut out = String::new();
    for (path, signature) in annotations.iter() {
        out.push_str(prefix);
        out.push_str(path);
        out.push_str(separator);
        out.push_str(signature);
        out.push('\n');
    }
    out
}

fn annotations_value(annotations: &Annotations) -> Value {
    Value::Object(
        annotations
            .iter()
            .map(|(path, signature)| (path.to_string(), Value::String(signature.to_string())))
            .collect(),
    )
}

fn to_json(value: &Value, pretty: bool) -> Result<String, serde_json::Error> {
    let mut out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    out.push('\n');
    Ok(out)
}

/// Format an [`AnnotationError`] with source context.
///
/// Invalid UTF-8 is shown lossily; offsets before the error position are unaffected.
pub fn format_error(file_name: &str, source: &[u8], error: &AnnotationError) -> String {
    let source_text = String::from_utf8_lossy(source).into_owned();
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source_text));
    format!("{report:?}")
}
