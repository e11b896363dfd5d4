//! File conversion and the batch driver.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, MarkdownConverter,
    OutputFormat,
};
use crate::error::Result;
use crate::render::ConversionStats;

/// Output path for `input`: same location, extension replaced by the
/// format's extension.
pub fn output_path_for(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Convert one file and write the result to `output`.
///
/// Inputs whose extension has no registered converter, or that have no
/// extension at all, are read as Markdown. A missing source yields
/// [`Error::NotFound`](crate::Error::NotFound).
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
    let registry = ConverterRegistry::with_defaults();
    let converter: Arc<dyn DocumentConverter> = input
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.get_by_extension(ext))
        .unwrap_or_else(|| Arc::new(MarkdownConverter::new()));
    let result = converter.convert(input, options)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, &result.content)?;

    log::info!(
        "converted {} -> {} ({} blocks, {} bytes)",
        input.display(),
        output.display(),
        result.stats.block_count(),
        result.content_len()
    );
    Ok(result)
}

/// Outcome of converting one batch input.
#[derive(Debug)]
pub struct BatchItem {
    /// Source path
    pub input: PathBuf,

    /// Destination path
    pub output: PathBuf,

    /// Statistics on success, the error otherwise
    pub result: Result<ConversionStats>,
}

impl BatchItem {
    /// Whether this input converted successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-file outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One item per input
    pub items: Vec<BatchItem>,
}

impl BatchReport {
    /// Number of inputs converted.
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_ok()).count()
    }

    /// Number of inputs that failed.
    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }

    /// Whether every input converted.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Combined statistics of the successful conversions.
    pub fn total_stats(&self) -> ConversionStats {
        let mut total = ConversionStats::new();
        for stats in self.items.iter().filter_map(|item| item.result.as_ref().ok()) {
            total.merge(stats);
        }
        total
    }
}

/// Convert every input independently.
///
/// A failing input is recorded in the report and does not stop the batch.
/// With the `parallel` feature and [`ConvertOptions::parallel`] set, inputs
/// are converted on the rayon thread pool; the report keeps input order.
pub fn convert_batch<P: AsRef<Path> + Sync>(inputs: &[P], options: &ConvertOptions) -> BatchReport {
    #[cfg(feature = "parallel")]
    let items: Vec<BatchItem> = if options.parallel {
        inputs
            .par_iter()
            .map(|input| convert_item(input.as_ref(), options))
            .collect()
    } else {
        inputs
            .iter()
            .map(|input| convert_item(input.as_ref(), options))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let items: Vec<BatchItem> = inputs
        .iter()
        .map(|input| convert_item(input.as_ref(), options))
        .collect();

    BatchReport { items }
}

fn convert_item(input: &Path, options: &ConvertOptions) -> BatchItem {
    let output = batch_output_path(input, options);
    let result = convert_file(input, &output, options).map(|converted| converted.stats);
    if let Err(ref e) = result {
        log::warn!("{}: {}", input.display(), e);
    }
    BatchItem {
        input: input.to_path_buf(),
        output,
        result,
    }
}

fn batch_output_path(input: &Path, options: &ConvertOptions) -> PathBuf {
    let output = output_path_for(input, options.output_format);
    match (&options.output_dir, output.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("docs/plan.md"), OutputFormat::Docx),
            PathBuf::from("docs/plan.docx")
        );
        assert_eq!(
            output_path_for(Path::new("plan.markdown"), OutputFormat::Json),
            PathBuf::from("plan.json")
        );
        assert_eq!(
            output_path_for(Path::new("plan.md"), OutputFormat::Text),
            PathBuf::from("plan.txt")
        );
    }

    #[test]
    fn test_batch_output_dir() {
        let options = ConvertOptions::new().with_output_dir("out");
        assert_eq!(
            batch_output_path(Path::new("docs/plan.md"), &options),
            PathBuf::from("out/plan.docx")
        );
    }

    #[test]
    fn test_convert_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plan.md");
        fs::write(&input, "# Plan\n\nBody text.").unwrap();
        let output = dir.path().join("nested").join("plan.docx");

        let result = convert_file(&input, &output, &ConvertOptions::default()).unwrap();
        assert_eq!(fs::read(&output).unwrap(), result.content);
        assert_eq!(result.stats.heading_count, 1);
    }

    #[test]
    fn test_convert_file_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.md");
        let output = dir.path().join("missing.docx");

        let result = convert_file(&input, &output, &ConvertOptions::default());
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_file_reads_any_extension_as_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "# Title\n\nBody").unwrap();
        let output = dir.path().join("notes.docx");

        let result = convert_file(&input, &output, &ConvertOptions::default()).unwrap();
        assert_eq!(result.stats.heading_count, 1);
        assert!(output.exists());
    }

    #[test]
    fn test_batch_missing_inputs_without_markdown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let plan = dir.path().join("plan.txt");
        let readme = dir.path().join("README");
        let notes = dir.path().join("notes.txt");
        fs::write(&notes, "# Title").unwrap();

        let report = convert_batch(&[&plan, &readme, &notes], &ConvertOptions::default());
        assert!(matches!(report.items[0].result, Err(Error::NotFound(_))));
        assert!(matches!(report.items[1].result, Err(Error::NotFound(_))));
        assert!(report.items[2].is_ok());
        assert_eq!(report.items[1].output, dir.path().join("README.docx"));
        assert!(dir.path().join("notes.docx").exists());
    }

    #[test]
    fn test_batch_continues_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.md");
        let missing = dir.path().join("b.md");
        let third = dir.path().join("c.md");
        fs::write(&first, "# A").unwrap();
        fs::write(&third, "## C\n\n**Bold**").unwrap();

        for parallel in [false, true] {
            let options = ConvertOptions::new().with_parallel(parallel);
            let report = convert_batch(&[&first, &missing, &third], &options);

            assert_eq!(report.items.len(), 3);
            assert_eq!(report.succeeded(), 2);
            assert_eq!(report.failed(), 1);
            assert!(!report.is_success());
            assert!(matches!(report.items[1].result, Err(Error::NotFound(_))));
            assert_eq!(report.items[2].input, third);
            assert!(dir.path().join("a.docx").exists());
            assert!(dir.path().join("c.docx").exists());
            assert_eq!(report.total_stats().heading_count, 2);
        }
    }
}
