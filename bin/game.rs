use crate::{human, io::Io};
use anyhow::Error as Anyhow;
use lib::nimm::{GameState, Outcome, Role};
use lib::search::Searcher;
use std::io::{Read, Write};
use tracing::{field::display, instrument, Span};

/// A game between the human player and the machine, the human moving first.
#[derive(Debug)]
pub struct Game<'a, W: Write, R: Read> {
    io: &'a mut Io<W, R>,
    name: &'a str,
    searcher: Searcher,
}

impl<'a, W: Write, R: Read> Game<'a, W, R> {
    pub fn new(io: &'a mut Io<W, R>, name: &'a str) -> Self {
        Game {
            io,
            name,
            searcher: Searcher::new(),
        }
    }

    /// Plays until either player wins.
    #[instrument(level = "debug", skip(self, state), err, fields(%state, outcome))]
    pub fn play(mut self, mut state: GameState) -> Result<Outcome, Anyhow> {
        let mut turn = Role::Human;

        let outcome = loop {
            if let Some(o) = state.outcome(turn) {
                Span::current().record("outcome", display(o));
                break o;
            }

            match turn {
                Role::Human => self.human(&mut state)?,
                Role::Machine => self.machine(&mut state)?,
            }

            turn = !turn;
        };

        self.announce(outcome)?;
        Ok(outcome)
    }

    fn human(&mut self, state: &mut GameState) -> Result<(), Anyhow> {
        let m = loop {
            self.io.send("")?;
            let line = self.io.ask("How many do you want?")?;

            match human::pick(&line, state) {
                Ok(m) => break m,
                Err(e) => self.io.send(e)?,
            }
        };

        state.apply(m, Role::Human);
        self.io.send(format_args!("{} tokens left", state.count()))?;
        self.io.send(format_args!("* {} takes {}", self.name, m))?;

        Ok(())
    }

    fn machine(&mut self, state: &mut GameState) -> Result<(), Anyhow> {
        let m = self.searcher.choose(state)?;

        state.apply(m, Role::Machine);
        self.io.send(format_args!("* AI takes {}", m))?;
        self.io.send(format_args!("{} tokens left", state.count()))?;

        Ok(())
    }

    fn player(&self, role: Role) -> &str {
        match role {
            Role::Human => self.name,
            Role::Machine => "The AI",
        }
    }

    fn announce(&mut self, outcome: Outcome) -> Result<(), Anyhow> {
        self.io.send("")?;

        match outcome {
            Outcome::Emptied(_) => self.io.send("* The pile is empty.")?,
            Outcome::Stuck(r) => {
                let msg = format!("* {} can't move anymore.", self.player(r));
                self.io.send(msg)?
            }
        }

        let msg = format!("** {} wins! **", self.player(outcome.winner()));
        self.io.send("")?;
        self.io.send(msg)?;

        Ok(())
    }
}
