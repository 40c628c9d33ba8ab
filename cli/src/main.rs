//! docjson CLI - PDF/DOCX to JSON conversion tool

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docjson::{
    convert_to_file, to_json, ConversionOptions, JsonFormat, DEFAULT_OUTPUT_DIR,
};

#[derive(Parser, Debug)]
#[command(name = "docjson")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert PDF and DOCX documents to JSON", long_about = None)]
struct Cli {
    /// Input document (.pdf or .docx)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Do not split the text into sections
    #[arg(long)]
    no_sections: bool,

    /// Section delimiter as a regular expression (default: blank lines).
    /// Capture groups only match; captured text never becomes a section
    #[arg(long, value_name = "REGEX")]
    delimiter: Option<String>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Do not print the JSON to stdout
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn conversion_options(&self) -> docjson::Result<ConversionOptions> {
        let options = ConversionOptions::new().with_sections(!self.no_sections);
        match self.delimiter {
            Some(ref pattern) => options.with_delimiter(pattern),
            None => Ok(options),
        }
    }

    fn json_format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(&e));
        }
    };

    let Some(input) = cli.input.as_deref() else {
        eprintln!("{}: No file path provided.", "Error".red().bold());
        eprintln!("{}", "Usage: docjson <FILE> [--output-dir DIR]".yellow());
        eprintln!("       docjson --help for more information");
        std::process::exit(1);
    };

    if let Err(e) = cmd_convert(&cli, input).await {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Exit code for a failed parse: 0 for `--help`/`--version`, 1 otherwise.
fn parse_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

async fn cmd_convert(cli: &Cli, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let options = cli.conversion_options()?;
    let format = cli.json_format();

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Converting {}...", input.display()));

    let result = convert_to_file(input, &cli.output_dir, &options, format).await;
    pb.finish_and_clear();
    let (doc, path) = result?;

    if !cli.quiet {
        println!("{}", to_json(&doc, format)?);
    }

    eprintln!("{} {}", "Document processed successfully!".green().bold(), input.display());
    eprintln!(
        "  {} {} words, {} characters",
        "├─".dimmed(),
        doc.metadata.word_count,
        doc.metadata.character_count
    );
    if let Some(ref sections) = doc.sections {
        eprintln!("  {} {} sections", "├─".dimmed(), sections.len());
    }
    eprintln!("  {} {} {}", "└─".dimmed(), "Saved to".green(), path.display());

    Ok(())
}
