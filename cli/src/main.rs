//! labdoc CLI - protocol document structuring tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use labdoc::{
    parse_file_with_options, render, Corpus, JsonFormat, ParseOptions, PromptBuilder,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "labdoc")]
#[command(version)]
#[command(about = "Structure .docx protocol documents into Markdown, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit recovered table captions
        #[arg(long)]
        captions: bool,

        /// Section heading level (1-6)
        #[arg(long, default_value = "3")]
        heading_level: u8,

        /// Keep empty-bodied section headings
        #[arg(long)]
        keep_empty_sections: bool,
    },

    /// Convert a document to plain text
    Text {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit recovered table captions
        #[arg(long)]
        captions: bool,
    },

    /// Convert a document to JSON
    Json {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document structure information
    Info {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Build the assistant system prompt for a department document
    Prompt {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Department name (defaults to the file stem)
        #[arg(short, long)]
        department: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Verify and preload a directory of protocol documents
    Check {
        /// Directory holding the documents
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Document file names within the directory
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> labdoc::Result<()> {
    match cli.command {
        Commands::Markdown {
            input,
            output,
            captions,
            heading_level,
            keep_empty_sections,
        } => {
            let mut parse_options = ParseOptions::new();
            if keep_empty_sections {
                parse_options = parse_options.keep_empty_sections();
            }
            let doc = parse_file_with_options(&input, parse_options)?;
            let render_options = RenderOptions::new()
                .with_captions(captions)
                .with_heading_level(heading_level);
            let markdown = render::to_markdown(&doc, &render_options)?;
            write_output(output.as_deref(), &markdown)
        }

        Commands::Text {
            input,
            output,
            captions,
        } => {
            let doc = labdoc::parse_file(&input)?;
            let text = render::to_text(&doc, &RenderOptions::new().with_captions(captions))?;
            write_output(output.as_deref(), &text)
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let doc = labdoc::parse_file(&input)?;
            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = render::to_json(&doc, format)?;
            write_output(output.as_deref(), &json)
        }

        Commands::Info { input } => {
            let doc = labdoc::parse_file(&input)?;
            println!("{}", input.display().to_string().bold());
            println!("  sections: {}", doc.section_count().to_string().cyan());
            println!("  tables:   {}", doc.table_count().to_string().cyan());
            for (i, table) in doc.tables.iter().enumerate() {
                let caption = if table.has_caption() {
                    table.caption.replace('\n', " / ")
                } else {
                    "(no caption)".to_string()
                };
                println!(
                    "  table {}: {} columns, {} rows - {}",
                    i + 1,
                    table.column_count(),
                    table.row_count(),
                    caption.dimmed()
                );
            }
            Ok(())
        }

        Commands::Prompt {
            input,
            department,
            output,
        } => {
            let department = department.unwrap_or_else(|| file_stem(&input));
            let doc = labdoc::parse_file(&input)?;
            let prompt = PromptBuilder::new().system_prompt(&department, &doc);
            write_output(output.as_deref(), &prompt)
        }

        Commands::Check { dir, files } => {
            let mut corpus = Corpus::new(&dir);
            for file in &files {
                corpus = corpus.register(stem_of(file), file.clone());
            }

            let missing = corpus.missing();
            if !missing.is_empty() {
                eprintln!(
                    "{} missing documents: {}",
                    "error:".red().bold(),
                    missing.join(", ")
                );
                process::exit(1);
            }

            let bar = ProgressBar::new(files.len() as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            for id in corpus.ids() {
                bar.set_message(id.to_string());
                let doc = corpus.load(id)?;
                log::debug!(
                    "{id}: {} sections, {} tables",
                    doc.section_count(),
                    doc.table_count()
                );
                bar.inc(1);
            }
            bar.finish_with_message("done");

            println!(
                "{} {} documents verified in {}",
                "ok:".green().bold(),
                files.len(),
                dir.display()
            );
            Ok(())
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> labdoc::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("{} wrote {}", "ok:".green().bold(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Document".to_string())
}

fn stem_of(file: &str) -> String {
    file_stem(Path::new(file))
}
