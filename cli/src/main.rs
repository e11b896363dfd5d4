//! mdocx CLI - Markdown to Word conversion and traceability tooling

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdocx::convert::{self, ConvertOptions, OutputFormat};
use mdocx::extract::{extract_requirements, read_tables, DEFAULT_PREFIX};
use mdocx::mapping::{self, REQUIREMENT_MAPPINGS};
use mdocx::{
    ConversionStats, HeadingLevel, JsonFormat, MarkdownParser, ParseOptions, RenderOptions,
    RowPolicy,
};

#[derive(Parser)]
#[command(name = "mdocx")]
#[command(version)]
#[command(about = "Convert Markdown test designs to Word documents", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output .docx file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to .docx
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (input with .docx extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Handling of table rows whose cell count differs from the header
        #[arg(long, value_enum, default_value = "drop")]
        row_policy: RowPolicyArg,

        /// NFC-normalize the source before parsing
        #[arg(long)]
        nfc: bool,

        /// Document title (defaults to the first H1)
        #[arg(long)]
        title: Option<String>,
    },

    /// Convert several Markdown files, continuing past failures
    Batch {
        /// Input Markdown files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (next to each input if not specified)
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Convert files in parallel
        #[arg(long)]
        parallel: bool,

        /// Handling of table rows whose cell count differs from the header
        #[arg(long, value_enum, default_value = "drop")]
        row_policy: RowPolicyArg,
    },

    /// Convert Markdown to the JSON document model
    Json {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert Markdown to plain text
    Text {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show document information
    Info {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List requirement descriptions found in a traceability matrix
    Requirements {
        /// Traceability matrix (.docx)
        #[arg(value_name = "DOCX")]
        input: PathBuf,

        /// Requirement id prefix
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,

        /// Highest requirement number to list
        #[arg(long, default_value_t = 27)]
        count: u32,
    },

    /// Print the requirement to OWASP Top 10 mapping report
    Mapping {
        /// Print the mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RowPolicyArg {
    /// Omit the row (default)
    Drop,
    /// Pad short rows with empty cells, truncate long rows
    Pad,
    /// Discard the whole table
    Reject,
}

impl From<RowPolicyArg> for RowPolicy {
    fn from(arg: RowPolicyArg) -> Self {
        match arg {
            RowPolicyArg::Drop => RowPolicy::Drop,
            RowPolicyArg::Pad => RowPolicy::Pad,
            RowPolicyArg::Reject => RowPolicy::Reject,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            row_policy,
            nfc,
            title,
        }) => cmd_convert(&input, output.as_deref(), row_policy, nfc, title),
        Some(Commands::Batch {
            inputs,
            dir,
            parallel,
            row_policy,
        }) => cmd_batch(&inputs, dir, parallel, row_policy),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Requirements {
            input,
            prefix,
            count,
        }) => cmd_requirements(&input, &prefix, count),
        Some(Commands::Mapping { json }) => cmd_mapping(json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), RowPolicyArg::Drop, false, None)
            } else {
                println!("{}", "Usage: mdocx <FILE> [OUTPUT]".yellow());
                println!("       mdocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn parse_options(row_policy: RowPolicyArg, nfc: bool) -> ParseOptions {
    ParseOptions::new()
        .with_row_policy(row_policy.into())
        .with_unicode_normalization(nfc)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    row_policy: RowPolicyArg,
    nfc: bool,
    title: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| convert::output_path_for(input, OutputFormat::Docx));

    let mut render_options = RenderOptions::new();
    if let Some(title) = title {
        render_options = render_options.with_title(title);
    }
    let options = ConvertOptions::new()
        .with_parse_options(parse_options(row_policy, nfc))
        .with_render_options(render_options);

    let result = convert::convert_file(input, &output, &options)?;

    println!("{} {}", "Saved to".green(), output.display());
    let stats = &result.stats;
    if stats.dropped_row_count > 0 || stats.padded_row_count > 0 || stats.discarded_table_count > 0
    {
        println!(
            "{} {} table rows dropped, {} padded, {} tables discarded",
            "Note:".yellow(),
            stats.dropped_row_count,
            stats.padded_row_count,
            stats.discarded_table_count
        );
    }

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    dir: Option<PathBuf>,
    parallel: bool,
    row_policy: RowPolicyArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::new()
        .with_parse_options(parse_options(row_policy, false))
        .with_parallel(parallel);
    if let Some(dir) = dir {
        fs::create_dir_all(&dir)?;
        options = options.with_output_dir(dir);
    }

    println!("{}", "Converting markdown to Word documents...".cyan());

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Converting {} files...", inputs.len()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let report = convert::convert_batch(inputs, &options);
    pb.finish_and_clear();

    for item in &report.items {
        let name = display_name(&item.input);
        match &item.result {
            Ok(_) => println!(
                "{} {} -> {}",
                "✓".green(),
                name,
                display_name(&item.output)
            ),
            Err(e) if e.is_not_found() => {
                println!("{} File not found: {}", "✗".red(), name)
            }
            Err(e) => println!("{} {}: {}", "✗".red(), name, e),
        }
    }

    println!("\n{}", "Conversion completed!".green().bold());
    if !report.is_success() {
        println!(
            "{} converted, {} failed",
            report.succeeded(),
            report.failed()
        );
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = mdocx::to_json(input, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_text(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let text = mdocx::to_text(input)?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parser = MarkdownParser::open(input)?;
    let (doc, report) = parser.parse_with_report();

    let mut stats = ConversionStats::from_document(&doc);
    stats.add_parse_report(&report);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(title) = doc.title() {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Blocks".bold(), stats.block_count());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for level in HeadingLevel::ALL {
        let count = doc.headings().filter(|(l, _)| *l == level).count();
        println!("{}: {}", format!("Headings ({})", level).bold(), count);
    }
    println!("{}: {}", "Bold lines".bold(), stats.bold_line_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Table rows".bold(), stats.table_row_count);
    println!("{}: {}", "Words".bold(), stats.word_count);

    if !report.is_clean() {
        println!();
        println!("{}", "Table Issues".yellow().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "Dropped rows".bold(), report.dropped_rows);
        println!("{}: {}", "Padded rows".bold(), report.padded_rows);
        println!("{}: {}", "Discarded tables".bold(), report.discarded_tables);
    }

    Ok(())
}

fn cmd_requirements(
    input: &Path,
    prefix: &str,
    count: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let tables = read_tables(input)?;
    let index = extract_requirements(&tables, prefix);
    log::info!("{} requirements found in {}", index.len(), input.display());

    for line in index.listing(1..=count) {
        println!("{}", line);
    }

    Ok(())
}

fn cmd_mapping(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", mapping::to_json(REQUIREMENT_MAPPINGS)?);
    } else {
        print!("{}", mapping::render_report(REQUIREMENT_MAPPINGS));
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdocx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to Word conversion for QA documentation");
    println!();
    println!("License: MIT");
}
