use anyhow::{Context, Result};
use clap::Parser;
use questions_core::{load_corpus, Answer, Pipeline, RankConfig};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "questions")]
#[command(about = "Answer a question with the best-matching sentence from a text corpus", long_about = None)]
pub struct Cli {
    /// Directory of .txt documents to search
    pub corpus: PathBuf,
    /// Number of top documents to draw candidate sentences from
    #[arg(long = "files")]
    pub file_matches: Option<usize>,
    /// Number of sentences to print
    #[arg(long = "sentences")]
    pub sentence_matches: Option<usize>,
    /// Stem words before matching
    #[arg(long, default_value_t = false)]
    pub stem: bool,
    /// JSON file with ranking options; command-line flags take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Answer this query instead of prompting on stdin
    #[arg(long)]
    pub query: Option<String>,
    /// Print the scored answer as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Keep prompting for queries until end of input
    #[arg(long, default_value_t = false)]
    pub repl: bool,
}

impl Cli {
    pub fn rank_config(&self) -> Result<RankConfig> {
        let mut config = match &self.config {
            Some(path) => RankConfig::from_json_file(path)?,
            None => RankConfig::default(),
        };
        if let Some(n) = self.file_matches { config.file_matches = n; }
        if let Some(n) = self.sentence_matches { config.sentence_matches = n; }
        config.stem |= self.stem;
        config.validate()?;
        Ok(config)
    }
}

/// Load the corpus, then answer `--query` or queries read from `input`. Answers go to
/// `output`; the `Query: ` prompt goes to `prompt` so `output` carries only answers.
pub fn run<R: BufRead, W: Write, P: Write>(cli: &Cli, mut input: R, mut output: W, mut prompt: P) -> Result<()> {
    let config = cli.rank_config()?;
    tracing::debug!(?config, "ranking configuration");
    let raw = load_corpus(&cli.corpus)
        .with_context(|| format!("loading corpus from {}", cli.corpus.display()))?;
    let pipeline = Pipeline::new(raw, config)?;

    if let Some(query) = &cli.query {
        let answer = pipeline.answer(query)?;
        return render(&answer, cli.json, &mut output);
    }

    loop {
        write!(prompt, "Query: ")?;
        prompt.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let answer = pipeline.answer(line.trim_end())?;
        render(&answer, cli.json, &mut output)?;
        if !cli.repl {
            break;
        }
    }
    Ok(())
}

fn render<W: Write>(answer: &Answer, json: bool, output: &mut W) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *output, answer)?;
        writeln!(output)?;
    } else {
        for line in answer.lines() {
            writeln!(output, "{line}")?;
        }
    }
    output.flush()?;
    Ok(())
}
