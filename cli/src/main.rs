//! chapterize CLI - convert structured documents to Markdown and split
//! them into chapter archives.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use chapterize::{
    chapter_archive_bytes, classify, extract_title, parse_page_ranges, render_document,
    sanitize_name, split_with_bookmarks, split_with_embedded_outline, Document, PageSource,
    RenderOptions,
};

#[derive(Parser)]
#[command(name = "chapterize")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert structured documents to Markdown and split them into chapters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to a single Markdown file
    Convert {
        /// Input document JSON (extractor output)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (derived from the first heading if not given)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g. "1-5,8,10-12"; all pages if omitted)
        #[arg(short, long)]
        pages: Option<String>,

        /// Page separator template; `{n}` becomes the page number
        #[arg(long, default_value = "<!-- Page {n} -->")]
        page_sep: String,
    },

    /// Split a document into a zip of chapter files along an outline
    Split {
        /// Input document JSON (extractor output)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Bookmark XML file (embedded outline used when omitted)
        #[arg(short, long, value_name = "FILE")]
        bookmarks: Option<PathBuf>,

        /// Offset added to every outline page number
        #[arg(long, default_value_t = 0)]
        page_offset: i64,

        /// Output zip path (default: <stem>_chapters.zip)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page separator template; `{n}` becomes the page number
        #[arg(long, default_value = "<!-- Page {n} -->")]
        page_sep: String,
    },

    /// Show document and classifier information
    Info {
        /// Input document JSON (extractor output)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            pages,
            page_sep,
        } => cmd_convert(&input, output.as_deref(), pages.as_deref(), &page_sep),
        Commands::Split {
            input,
            bookmarks,
            page_offset,
            output,
            page_sep,
        } => cmd_split(
            &input,
            bookmarks.as_deref(),
            page_offset,
            output.as_deref(),
            &page_sep,
        ),
        Commands::Info { input } => cmd_info(&input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(path: &Path) -> Result<Document, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)?;
    Ok(Document::from_json(&json)?)
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
    page_sep: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let indices = match pages {
        Some(spec) => parse_page_ranges(spec, doc.page_count())?,
        None => Vec::new(),
    };

    let options = RenderOptions::new().with_page_separator(page_sep);
    let markdown = render_document(&doc, &indices, &options)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_markdown_name(input, &markdown),
    };

    fs::write(&output_path, &markdown)?;

    let page_count = if indices.is_empty() {
        doc.page_count()
    } else {
        indices.len()
    };
    println!(
        "{} {} pages -> {}",
        "Converted".green(),
        page_count,
        output_path.display()
    );

    Ok(())
}

fn cmd_split(
    input: &Path,
    bookmarks: Option<&Path>,
    page_offset: i64,
    output: Option<&Path>,
    page_sep: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let options = RenderOptions::new().with_page_separator(page_sep);

    let chapters = match bookmarks {
        Some(xml_path) => {
            let xml = fs::read_to_string(xml_path)?;
            split_with_bookmarks(&doc, &xml, page_offset, &options)?
        }
        None => split_with_embedded_outline(&doc, page_offset, &options)?,
    };

    let bytes = chapter_archive_bytes(&chapters)?;

    let output_path = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{stem}_chapters.zip"))
    });
    fs::write(&output_path, &bytes)?;

    println!(
        "{} {} chapters -> {}",
        "Split into".green(),
        chapters.len(),
        output_path.display()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Outline entries".bold(), doc.outline.len());

    let all_pages: Vec<usize> = (0..doc.page_count()).collect();
    match classify(&doc, &all_pages) {
        Ok(levels) => {
            println!(
                "{}: {:.1} pt",
                "Body size".bold(),
                levels.body_size_key() as f32 / 10.0
            );
            let sizes: Vec<String> = levels
                .heading_sizes()
                .iter()
                .map(|&key| format!("{:.1}", key as f32 / 10.0))
                .collect();
            println!("{}: {}", "Heading sizes".bold(), sizes.join(", "));
        }
        Err(_) => {
            println!("{}: {}", "Body size".bold(), "no text found".yellow());
        }
    }

    Ok(())
}

/// Default output name: `<input stem>_<first H1>.md`, falling back to
/// `untitled` when the document has no level-1 heading.
fn default_markdown_name(input: &Path, markdown: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let title = extract_title(markdown)
        .map(|t| sanitize_name(&t))
        .unwrap_or_else(|| "untitled".to_string());
    let name = format!("{stem}_{title}.md");
    input.with_file_name(name)
}
