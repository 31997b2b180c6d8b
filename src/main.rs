use std::collections::BTreeSet;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
#[macro_use]
extern crate text_io;

use wordgrid::boggle::DEFAULT_MIN_LENGTH;
use wordgrid::utils::serialization;
use wordgrid::{Board, Dictionary, Lexicon, Result, SearchConfig, Strategy, WordSearchGame};

/// Find words on a square board of letter tiles
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Dictionary file holding whitespace separated words
    #[arg(short, long, default_value = "words.txt")]
    dictionary: PathBuf,

    #[command(flatten)]
    board: BoardSource,

    /// Seed for a random board
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

/// Where the board comes from. Without any of these the default board is used.
#[derive(Debug, Args)]
#[group(multiple = false)]
struct BoardSource {
    /// Board file: a JSON array of labels or of rows, or whitespace separated labels
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Labels in row-major order, e.g. "E E C A A L E P ..."
    #[arg(short, long)]
    tiles: Option<String>,

    /// Deal a random board with this side length
    #[arg(short, long)]
    random: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the board
    Show,

    /// Find where words are on the board
    Locate {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every dictionary word on the board
    Solve {
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,

        /// board or dictionary
        #[arg(short, long, default_value_t = Strategy::Board)]
        strategy: Strategy,

        /// Search on all cores
        #[arg(short, long)]
        parallel: bool,

        /// Print a JSON report instead of a word list
        #[arg(long)]
        json: bool,
    },

    /// Score a list of words against the board
    Score {
        #[arg(required = true)]
        words: Vec<String>,

        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },

    /// Enter words interactively and keep score
    Play {
        #[arg(short, long, default_value_t = DEFAULT_MIN_LENGTH)]
        min_length: usize,
    },
}

#[derive(Debug, Serialize)]
struct Solution<'a> {
    board: Vec<Vec<String>>,
    min_length: usize,
    strategy: Strategy,
    words: &'a BTreeSet<String>,
    score: usize,
}

impl BoardSource {
    fn load(&self, seed: Option<u64>) -> Result<Option<Board>> {
        if let Some(path) = &self.board {
            return Board::from_file(path).map(Some);
        }
        if let Some(tiles) = &self.tiles {
            return tiles.parse::<Board>().map(Some);
        }
        if let Some(size) = self.random {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            return Board::random(size, &mut rng).map(Some);
        }
        Ok(None)
    }
}

fn locate_words(game: &WordSearchGame, words: &[String]) -> Result<()> {
    for word in words {
        let path = game.locate(word)?;
        if path.is_empty() {
            println!("{} is not on the board", word.to_uppercase());
        } else {
            println!("{} is on the board at {:?}", word.to_uppercase(), path);
            print!("{}", game.board().render_highlight(&path));
        }
    }
    Ok(())
}

fn solve(game: &WordSearchGame, min_length: usize, json: bool) -> Result<()> {
    let words = game.all_words(min_length)?;
    let score = game.score(&words, min_length)?;
    if json {
        let solution = Solution {
            board: game.board().rows(),
            min_length,
            strategy: game.config().strategy,
            words: &words,
            score,
        };
        return serialization::write_json(&solution, io::stdout().lock());
    }

    for word in &words {
        println!("{}", word);
    }
    println!("{} words, {} points", words.len(), score);
    Ok(())
}

fn score_words(game: &WordSearchGame, words: &[String], min_length: usize) -> Result<()> {
    let mut total = BTreeSet::new();
    for word in words {
        let single = BTreeSet::from([word.to_uppercase()]);
        println!("{:<16} {}", word.to_uppercase(), game.score(&single, min_length)?);
        total.extend(single);
    }
    println!("Total: {}", game.score(&total, min_length)?);
    Ok(())
}

fn play(game: &WordSearchGame, min_length: usize) -> Result<()> {
    let on_board = game.all_words(min_length)?;
    print!("{}", game.render_board());
    println!("Enter words one per line, an empty line to finish:");

    let mut found = BTreeSet::new();
    loop {
        let line: std::result::Result<String, _> = try_read!("{}\n");
        let word = match line {
            Ok(line) if !line.trim().is_empty() => line.trim().to_uppercase(),
            _ => break,
        };
        if found.contains(&word) {
            println!("{} was already found", word);
            continue;
        }
        let points = game.score(&BTreeSet::from([word.clone()]), min_length)?;
        if points == 0 {
            println!("{} does not score", word);
            continue;
        }
        found.insert(word);
        println!("+{} ({} total)", points, game.score(&found, min_length)?);
    }

    println!("Final score: {}", game.score(&found, min_length)?);
    let missed = on_board.difference(&found).cloned().collect::<Vec<_>>();
    println!("Missed {} words: {}", missed.len(), missed.join(" "));
    Ok(())
}

fn run(opts: Opts) -> Result<()> {
    let mut game = WordSearchGame::<Dictionary>::new();
    if let Some(board) = opts.board.load(opts.seed)? {
        game.replace_board(board);
    }

    if !matches!(opts.command, Command::Show) {
        game.load_dictionary(&opts.dictionary)?;
        info!(
            "{} words in {}",
            game.lexicon().map_or(0, |l| l.len()),
            opts.dictionary.display()
        );
    }

    match opts.command {
        Command::Show => {
            print!("{}", game.render_board());
            Ok(())
        }
        Command::Locate { words } => locate_words(&game, &words),
        Command::Solve {
            min_length,
            strategy,
            parallel,
            json,
        } => {
            game.set_config(SearchConfig { strategy, parallel });
            solve(&game, min_length, json)
        }
        Command::Score { words, min_length } => score_words(&game, &words, min_length),
        Command::Play { min_length } => play(&game, min_length),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    debug!("Command line options: {:?}", opts);

    if let Err(e) = run(opts) {
        error!("{}", e);
        process::exit(1);
    }
}
