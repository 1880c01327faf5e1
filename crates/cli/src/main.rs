use std::fs;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use readalong_core::alignment::domain::passage_aligner::PassageAligner;
use readalong_core::alignment::domain::reference_passage::ReferencePassage;
use readalong_core::alignment::domain::word_status::WordStatus;
use readalong_core::pipeline::follow_passage_use_case::FollowPassageUseCase;
use readalong_core::session::domain::token_provider::TokenProvider;
use readalong_core::session::infrastructure::http_token_provider::HttpTokenProvider;
use readalong_core::session::infrastructure::scripted_session::ScriptedSession;
use readalong_core::shared::constants::{DEFAULT_LOOKAHEAD_WINDOW, SAMPLE_PASSAGES};

/// Follow a spoken passage against a live transcript, word by word.
///
/// Transcript fragments are read one per line from a script file or
/// stdin: plain lines are final results, `~`-prefixed lines are interim
/// results, `!`-prefixed lines simulate a recognizer error. After every
/// update the passage is reprinted with `[word]` for missed words and
/// `_word_` for words not yet reached.
#[derive(Parser)]
#[command(name = "readalong")]
struct Cli {
    /// Passage text file (defaults to a built-in sample paragraph).
    passage: Option<PathBuf>,

    /// Built-in sample paragraph to use when no passage file is given.
    #[arg(long, default_value = "0")]
    paragraph: usize,

    /// Transcript script file ("-" or omitted = read stdin).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Reference positions examined per spoken token (>= 1).
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD_WINDOW)]
    lookahead: usize,

    /// Fetch a recognition token from this URL before starting.
    #[arg(long)]
    token_url: Option<String>,

    /// Pause between scripted events, in milliseconds.
    #[arg(long, default_value = "0")]
    delay_ms: u64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    if let Some(url) = &cli.token_url {
        let provider = HttpTokenProvider::new(url);
        let token = provider.fetch()?;
        log::info!("authorized recognition session for region {}", token.region);
    }

    let passage = load_passage(&cli)?;
    let mut session = match &cli.script {
        Some(path) if path.as_os_str() != "-" => {
            let file = fs::File::open(path)
                .map_err(|e| format!("cannot open script {}: {e}", path.display()))?;
            ScriptedSession::from_reader(Box::new(BufReader::new(file)))
        }
        _ => ScriptedSession::from_reader(Box::new(BufReader::new(io::stdin()))),
    };
    if cli.delay_ms > 0 {
        session = session.with_delay(Duration::from_millis(cli.delay_ms));
    }

    let display_words: Vec<String> = passage.words().to_vec();
    let on_update = Box::new(move |statuses: &[WordStatus]| {
        println!("{}", render(&display_words, statuses));
    });

    let mut use_case = FollowPassageUseCase::new(
        Box::new(session),
        PassageAligner::with_lookahead(cli.lookahead),
        Some(on_update),
    );
    let statuses = use_case.execute(&passage)?;

    let matched = count(&statuses, WordStatus::Matched);
    let missed = count(&statuses, WordStatus::Missed);
    let pending = count(&statuses, WordStatus::Pending);
    log::info!("finished: {matched} matched, {missed} missed, {pending} pending");

    Ok(())
}

fn load_passage(cli: &Cli) -> Result<ReferencePassage, Box<dyn std::error::Error>> {
    let text = match &cli.passage {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("cannot read passage {}: {e}", path.display()))?,
        None => SAMPLE_PASSAGES[cli.paragraph].to_string(),
    };
    let passage = ReferencePassage::from_text(&text);
    if passage.is_empty() {
        return Err("passage contains no words".into());
    }
    Ok(passage)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.lookahead == 0 {
        return Err("Lookahead must be at least 1".into());
    }
    if cli.passage.is_none() && cli.paragraph >= SAMPLE_PASSAGES.len() {
        return Err(format!(
            "Paragraph must be between 0 and {}, got {}",
            SAMPLE_PASSAGES.len() - 1,
            cli.paragraph
        )
        .into());
    }
    if let Some(path) = &cli.passage {
        if !path.exists() {
            return Err(format!("Passage file not found: {}", path.display()).into());
        }
    }
    Ok(())
}

fn render(words: &[String], statuses: &[WordStatus]) -> String {
    words
        .iter()
        .zip(statuses)
        .map(|(word, status)| match status {
            WordStatus::Matched => word.clone(),
            WordStatus::Missed => format!("[{word}]"),
            WordStatus::Pending => format!("_{word}_"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn count(statuses: &[WordStatus], status: WordStatus) -> usize {
    statuses.iter().filter(|s| **s == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("readalong").chain(args.iter().copied()))
    }

    #[test]
    fn test_render_marks_each_status() {
        let words = vec!["The".to_string(), "cat,".to_string(), "sat".to_string()];
        let statuses = [WordStatus::Matched, WordStatus::Missed, WordStatus::Pending];
        assert_eq!(render(&words, &statuses), "The [cat,] _sat_");
    }

    #[test]
    fn test_validate_rejects_zero_lookahead() {
        assert!(validate(&cli(&["--lookahead", "0"])).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_paragraph() {
        assert!(validate(&cli(&["--paragraph", "99"])).is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(validate(&cli(&[])).is_ok());
    }

    #[test]
    fn test_load_passage_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "The cat sat.").unwrap();
        let args = cli(&[file.path().to_str().unwrap()]);
        let passage = load_passage(&args).unwrap();
        assert_eq!(passage.words(), &["The", "cat", "sat."]);
    }

    #[test]
    fn test_load_passage_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let args = cli(&[file.path().to_str().unwrap()]);
        assert!(load_passage(&args).is_err());
    }

    #[test]
    fn test_load_passage_uses_selected_sample() {
        let args = cli(&["--paragraph", "1"]);
        let passage = load_passage(&args).unwrap();
        assert_eq!(passage.words()[0], "In");
    }
}
