//! Integration tests for the converter module.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use mdocx::convert::{
    convert_batch, ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter,
    MarkdownConverter, OutputFormat,
};
use mdocx::error::{Error, Result};
use mdocx::render::ConversionStats;

/// Mock converter for testing.
struct MockConverter {
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockConverter {
    fn new(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self { extensions, name }
    }
}

impl DocumentConverter for MockConverter {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn convert(&self, _path: &Path, _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(ConvertResult::new(
            format!("Converted by {}", self.name).into_bytes(),
            Default::default(),
        ))
    }

    fn convert_bytes(&self, _bytes: &[u8], _options: &ConvertOptions) -> Result<ConvertResult> {
        Ok(ConvertResult::new(
            format!("Converted bytes by {}", self.name).into_bytes(),
            Default::default(),
        ))
    }
}

#[test]
fn test_converter_registry_new() {
    let registry = ConverterRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("md"));
    assert!(!registry.supports("docx"));
}

#[test]
fn test_converter_registry_with_defaults() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry.supports("md"));
    assert!(registry.supports("markdown"));
    assert!(registry.supports("MD")); // Case insensitive
    assert!(!registry.supports("docx"));
}

#[test]
fn test_converter_registry_register() {
    let mut registry = ConverterRegistry::new();
    let converter = Arc::new(MockConverter::new(vec!["txt", "text"], "text"));

    registry.register(converter);

    assert!(registry.supports("txt"));
    assert!(registry.supports("text"));
    assert!(registry.supports("TXT"));
}

#[test]
fn test_converter_registry_lookup() {
    let registry = ConverterRegistry::with_defaults();

    let converter = registry.get_by_extension("markdown");
    assert_eq!(converter.map(|c| c.name().to_string()), Some("markdown".to_string()));
    assert!(registry.get_by_extension("docx").is_none());

    assert!(registry.get_by_name("MARKDOWN").is_some());
    assert!(registry.get_by_name("unknown").is_none());
}

#[test]
fn test_converter_registry_multiple_converters() {
    let mut registry = ConverterRegistry::new();

    registry.register(Arc::new(MarkdownConverter::new()));
    registry.register(Arc::new(MockConverter::new(vec!["rst"], "restructured")));

    assert!(registry.supports("md"));
    assert!(registry.supports("rst"));

    let result = registry
        .convert_bytes(b"ignored", "rst", &ConvertOptions::default())
        .unwrap();
    assert_eq!(result.content, b"Converted bytes by restructured");

    let mut extensions = registry.supported_extensions();
    extensions.sort_unstable();
    assert_eq!(extensions, vec!["markdown", "md", "rst"]);
}

#[test]
fn test_registry_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.markdown");
    fs::write(&path, "# Cases\n\n| Id | Title |\n|---|---|\n| TC-1 | Login |").unwrap();

    let registry = ConverterRegistry::with_defaults();
    let options = ConvertOptions::new().with_format(OutputFormat::Text);
    let result = registry.convert(&path, &options).unwrap();

    assert_eq!(result.content, b"Cases\n\nId\tTitle\nTC-1\tLogin");
    assert_eq!(result.mime_type, "text/plain");
    assert_eq!(result.document.metadata.source.as_deref(), Some(path.as_path()));
}

#[test]
fn test_registry_convert_missing_file() {
    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(Path::new("no/such/file.md"), &ConvertOptions::default());
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_registry_convert_errors() {
    let registry = ConverterRegistry::with_defaults();

    assert!(registry
        .convert(Path::new("noextension"), &ConvertOptions::default())
        .is_err());
    assert!(registry
        .convert(Path::new("test.xyz"), &ConvertOptions::default())
        .is_err());
    assert!(registry
        .convert_bytes(b"test", "xyz", &ConvertOptions::default())
        .is_err());
}

#[test]
fn test_convert_result_methods() {
    let stats = ConversionStats {
        paragraph_count: 20,
        ..Default::default()
    };
    let result = ConvertResult::new(b"hello".to_vec(), Default::default())
        .with_stats(stats)
        .with_mime_type("text/plain");

    assert_eq!(result.content_len(), 5);
    assert_eq!(result.stats.paragraph_count, 20);
    assert_eq!(result.mime_type, "text/plain");
}

#[test]
fn test_output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Docx);
    assert_eq!(
        ConvertResult::new(Vec::new(), Default::default()).mime_type,
        OutputFormat::Docx.mime_type()
    );
}

#[test]
fn test_batch_writes_into_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let files = ["api.md", "uat.md", "missing.md"].map(|name| dir.path().join(name));
    fs::write(&files[0], "# API\n\nText.").unwrap();
    fs::write(&files[1], "# UAT").unwrap();

    let options = ConvertOptions::new()
        .with_format(OutputFormat::Json)
        .with_output_dir(&out);
    let report = convert_batch(&files, &options);

    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert!(report.items[2].result.as_ref().unwrap_err().is_not_found());
    assert_eq!(report.items[0].output, out.join("api.json"));

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(out.join("api.json")).unwrap()).unwrap();
    assert_eq!(json["blocks"][1]["text"], "Text.");
    assert!(out.join("uat.json").exists());
    assert!(!out.join("missing.json").exists());
}
