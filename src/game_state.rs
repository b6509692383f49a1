use crate::error::HangmanError;
use crate::info_log;
use crate::session::{GuessReport, RoundStatus, Session, SpacePolicy};
use crate::wordbank::WordList;
use rand::Rng;
use std::io;

/// What the player asked for at a guess prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    Exit,
}

/// Front end the game loop talks to. Implemented by the line console and the
/// full-screen terminal UI.
pub trait GameInterface {
    fn display_round_start(&mut self, session: &Session) -> io::Result<()>;

    /// Block until the player makes a guess or asks to leave.
    ///
    /// # Errors
    /// `HangmanError::InputExhausted` once input has run out.
    fn read_guess(&mut self) -> Result<UserAction, HangmanError>;

    fn display_guess_result(&mut self, report: &GuessReport) -> io::Result<()>;

    /// Ask whether to start another round after `progress` correct guesses.
    ///
    /// # Errors
    /// `HangmanError::InputExhausted` once input has run out.
    fn read_play_again(&mut self, progress: usize) -> Result<bool, HangmanError>;

    fn display_exit_message(&mut self) -> io::Result<()>;
}

/// Play rounds until the player declines a replay or exits.
///
/// Returns the number of rounds started.
///
/// # Errors
/// `EmptyPool` when no word can be picked, `InputExhausted` when input ends
/// mid-game, `Io` when the interface fails to write.
pub fn game_loop<I, G>(
    wordbank: &WordList,
    policy: SpacePolicy,
    interface: &mut I,
    rng: &mut G,
) -> Result<usize, HangmanError>
where
    I: GameInterface + ?Sized,
    G: Rng + ?Sized,
{
    let mut rounds = 0;

    loop {
        let word = wordbank.pick(rng)?;
        let mut session = Session::new(word, policy);
        rounds += 1;
        info_log!("Round {} started, {} characters to find", rounds, session.target());
        interface.display_round_start(&session)?;

        let progress = loop {
            let guess = match interface.read_guess()? {
                UserAction::Guess(c) => c,
                UserAction::Exit => {
                    interface.display_exit_message()?;
                    return Ok(rounds);
                }
            };

            let report = session.process_guess(guess);
            interface.display_guess_result(&report)?;

            if report.status == RoundStatus::RoundComplete {
                break report.progress;
            }
        };
        info_log!(
            "Round {} complete: {} correct out of {} attempts",
            rounds,
            progress,
            session.attempts()
        );

        if !interface.read_play_again(progress)? {
            interface.display_exit_message()?;
            return Ok(rounds);
        }
    }
}
