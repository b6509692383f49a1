use hangman::cli::{CliInterface, parse_cli};
use hangman::info_log;
use hangman::logging::init_logger;
use hangman::tui::TuiInterface;
use hangman::{HangmanError, WordList, game_loop, load_wordbank_from_file, load_wordbank_from_str};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logger(cli.tui);

    let wordbank = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                // Keep going with an empty pool; picking a word reports it below.
                log::error!("{e}");
                eprintln!("{e}");
                WordList::default()
            }
        },
        None => load_wordbank_from_str(cli.dictionary.contents()),
    };
    info_log!("Loaded {} words.", wordbank.len());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut tui) => game_loop(&wordbank, cli.spaces, &mut tui, &mut rng),
            Err(e) => Err(HangmanError::from(e)),
        }
    } else {
        let stdin = io::stdin();
        let mut console = CliInterface::new(stdin.lock(), io::stdout());
        game_loop(&wordbank, cli.spaces, &mut console, &mut rng)
    };

    match result {
        Ok(rounds) => {
            info_log!("Exiting after {rounds} round(s)");
            ExitCode::SUCCESS
        }
        Err(HangmanError::InputExhausted) => {
            info_log!("Input closed, exiting");
            println!();
            ExitCode::SUCCESS
        }
        Err(HangmanError::EmptyPool) => {
            log::error!("No playable words loaded");
            eprintln!("No words available to play.");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
