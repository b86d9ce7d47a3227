use crate::{game::Game, io::Io};
use anyhow::Error as Anyhow;
use lib::nimm::{GameState, Role};
use std::io::{self, ErrorKind, Read, Write};
use std::num::NonZeroU32;
use tracing::{info, instrument};

/// A series of games against the same human player.
#[derive(Debug)]
pub struct Session<W: Write, R: Read> {
    io: Io<W, R>,
    name: Option<String>,
    pile: Option<NonZeroU32>,
}

impl<W: Write, R: Read> Session<W, R> {
    /// Constructs a [`Session`], optionally skipping the questions for the name and the first pile.
    pub fn new(io: Io<W, R>, name: Option<String>, pile: Option<NonZeroU32>) -> Self {
        Session { io, name, pile }
    }

    /// Plays games until the human player quits or the input ends.
    #[instrument(level = "trace", skip(self), err)]
    pub fn run(mut self) -> Result<(), Anyhow> {
        match self.play() {
            Err(e) if is_end_of_input(&e) => Ok(()),
            result => result,
        }
    }

    fn play(&mut self) -> Result<(), Anyhow> {
        self.io.send("")?;
        self.io.send("**********************")?;
        self.io.send("Hello, welcome to Nimm!")?;

        let name = match self.name.take() {
            Some(name) => name,
            None => self.io.ask("What is your name?")?.trim().to_string(),
        };

        let mut wins = 0;
        let mut losses = 0;

        loop {
            let pile = match self.pile.take() {
                Some(pile) => pile,
                None => {
                    let msg = "Please enter the number of tokens in the pile, or 'q' to quit:";
                    match self.io.ask(msg)?.trim().parse::<NonZeroU32>() {
                        Ok(pile) => pile,
                        Err(_) => break,
                    }
                }
            };

            let state = GameState::new(pile.get());

            self.io.send("")?;
            self.io.send(format_args!("The pile has {} tokens.", pile))?;
            self.io.send(format_args!(
                "The maximum you may take in any turn is {}",
                state.bound()
            ))?;

            let outcome = Game::new(&mut self.io, &name).play(state)?;

            match outcome.winner() {
                Role::Human => wins += 1,
                Role::Machine => losses += 1,
            }

            info!(games = wins + losses, wins, losses, %outcome);

            self.io.send("")?;
            self.io.send("Would you like to play again?")?;
        }

        self.io.send("Good Bye!")?;
        self.io.flush()?;

        Ok(())
    }
}

fn is_end_of_input(e: &Anyhow) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::UnexpectedEof)
}
