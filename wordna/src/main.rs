use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use wordna_lib::output::{analysis_to_lines, to_bracketed, to_display, to_dotted};
use wordna_lib::types::{AnalysisSegmentation, Segment, WordSegmentation};
use wordna_lib::{parse_analysis, segment_analysis, segment_word, AffixVocabulary};

#[derive(Parser)]
#[command(name = "wordna", version, about = "Split English derived words into prefixes, root and suffixes")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON vocabulary ({"prefixes": [...], "suffixes": [...]}) replacing the built-in affix lists.
    #[arg(long, global = true, env = "WORDNA_VOCAB")]
    vocab: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Dotted)]
    format: Format,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Segment a single derived word.
    Segment {
        /// The derived word, e.g. "unhelpful".
        word: String,

        /// The canonical root, e.g. "help".
        #[arg(short, long)]
        root: String,

        /// A prefix claimed for this word (repeatable), e.g. "un-".
        #[arg(short = 'p', long = "prefix", allow_hyphen_values = true)]
        prefixes: Vec<String>,

        /// A suffix claimed for this word (repeatable), e.g. "-ful".
        #[arg(short = 's', long = "suffix", allow_hyphen_values = true)]
        suffixes: Vec<String>,
    },
    /// Segment every word of an analysis result. Reads stdin if FILE is omitted.
    Render {
        file: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// un·help·ful
    Dotted,
    /// {un-}, {help}, {-ful}
    Bracketed,
    /// Segments as {text, isSeparator} objects.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocab = match &cli.vocab {
        Some(path) => AffixVocabulary::from_path(path)
            .with_context(|| format!("failed to load vocabulary {}", path.display()))?,
        None => AffixVocabulary::new(),
    };

    match &cli.command {
        Command::Segment {
            word,
            root,
            prefixes,
            suffixes,
        } => {
            let ws = segment_word(word.trim(), root.trim(), prefixes, suffixes, &vocab);
            print_word(&ws, &cli)
        }
        Command::Render { file } => {
            let input = read_input(file.as_ref())?;
            let analysis = parse_analysis(&input).context("failed to parse analysis result")?;
            let seg = segment_analysis(&analysis, &vocab);
            print_analysis(&seg, &cli)
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            log::info!("reading analysis from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_word(ws: &WordSegmentation, cli: &Cli) -> Result<()> {
    match cli.format {
        Format::Dotted => println!("{}", to_dotted(&ws.segments)),
        Format::Bracketed => println!("{}", to_bracketed(&ws.segments)),
        Format::Json => println!("{}", render_json(&word_json(ws), cli.pretty)?),
    }
    Ok(())
}

fn print_analysis(seg: &AnalysisSegmentation, cli: &Cli) -> Result<()> {
    let render: fn(&[Segment]) -> String = match cli.format {
        Format::Dotted => to_dotted,
        Format::Bracketed => to_bracketed,
        Format::Json => {
            let value = json!({
                "isRoot": seg.is_root,
                "root": word_json(&seg.root),
                "derived": seg.derived.iter().map(word_json).collect::<Vec<_>>(),
            });
            println!("{}", render_json(&value, cli.pretty)?);
            return Ok(());
        }
    };
    for line in analysis_to_lines(seg, render) {
        println!("{line}");
    }
    Ok(())
}

fn word_json(ws: &WordSegmentation) -> Value {
    json!({
        "word": ws.word,
        "rootWord": ws.root_word,
        "partOfSpeech": ws.part_of_speech,
        "rootMatch": ws.root_match,
        "segments": to_display(&ws.segments),
    })
}

fn render_json(value: &Value, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("JSON serialization failed")
}
