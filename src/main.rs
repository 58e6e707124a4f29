//! vortaro - Reta Vortaro XML to JSON dictionary exporter

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use vortaro::collate::sort_words;
use vortaro::spelling::WordList;
use vortaro::{Dictionary, ExportConfig, JsonExporter};

#[derive(Parser)]
#[command(name = "vortaro")]
#[command(version, about = "Export Reta Vortaro XML articles as a JSON dictionary", long_about = None)]
#[command(after_help = "EXAMPLES:
    vortaro revo/xml vortaro.json           Export every article
    vortaro --sort words.txt                Print lines in Esperanto order
    vortaro --spell episodo --word-list words.txt")]
struct Cli {
    /// Directory of XML articles
    #[arg(value_name = "INPUT_DIR", required_unless_present_any = ["sort", "spell"])]
    input: Option<PathBuf>,

    /// JSON file to write
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["sort", "spell"])]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Skip files with invalid records instead of failing
    #[arg(long = "skip-invalid")]
    skip_invalid: bool,

    /// Print the lines of FILE in Esperanto alphabetical order
    #[arg(long, value_name = "FILE", conflicts_with = "spell")]
    sort: Option<PathBuf>,

    /// Print known words one edit away from WORD
    #[arg(long, value_name = "WORD", requires = "word_list")]
    spell: Option<String>,

    /// Newline separated list of known words
    #[arg(long = "word-list", value_name = "FILE")]
    word_list: Option<PathBuf>,

    /// Increase log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(cli.log_level())
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let result = if let Some(path) = &cli.sort {
        sort_file(path)
    } else if let (Some(word), Some(list)) = (&cli.spell, &cli.word_list) {
        spell(word, list)
    } else if let (Some(input), Some(output)) = (&cli.input, &cli.output) {
        export(input, output, &cli)
    } else {
        Err("INPUT_DIR and OUTPUT are required".to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn export(input: &Path, output: &Path, cli: &Cli) -> Result<(), String> {
    let config = ExportConfig {
        pretty: cli.pretty,
        skip_invalid_records: cli.skip_invalid,
    };

    let dictionary = Dictionary::load_dir(input, &config).map_err(|e| e.to_string())?;
    JsonExporter::with_config(config)
        .write_file(&dictionary, output)
        .map_err(|e| e.to_string())?;

    if !cli.quiet {
        println!("{} words written to {}", dictionary.len(), output.display());
    }
    Ok(())
}

fn sort_file(path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let mut lines: Vec<&str> = content.lines().collect();
    sort_words(&mut lines);

    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}").map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn spell(word: &str, list: &Path) -> Result<(), String> {
    let words = WordList::load(list).map_err(|e| e.to_string())?;
    for suggestion in words.suggest(&word.to_lowercase()) {
        println!("{suggestion}");
    }
    Ok(())
}
