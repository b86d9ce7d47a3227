use crate::{io::Io, session::Session};
use anyhow::Error as Anyhow;
use clap::Parser;
use std::io::{stderr, stdin, stdout};
use std::{cmp::min, num::NonZeroU32};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Command line interface.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    /// The human player's name, asked for if not given.
    #[clap(short, long)]
    name: Option<String>,

    /// The number of tokens in the first game's pile, asked for if not given.
    #[clap(short, long)]
    pile: Option<NonZeroU32>,
}

impl Cli {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let filter = Targets::new()
            .with_target("nimm", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .with_thread_names(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();

        let io = Io::new(stdout(), stdin());
        Session::new(io, self.name, self.pile).run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn name_and_pile_are_optional() {
        let cli = Cli::try_parse_from(["nimm"]).unwrap();
        assert_eq!(cli.name, None);
        assert_eq!(cli.pile, None);
    }

    #[test]
    fn name_and_pile_can_be_given() {
        let cli = Cli::try_parse_from(["nimm", "-n", "Alice", "--pile", "10", "-v", "trace"]);
        let cli = cli.unwrap();
        assert_eq!(cli.name.as_deref(), Some("Alice"));
        assert_eq!(cli.pile, NonZeroU32::new(10));
        assert_eq!(cli.verbosity, Level::TRACE);
    }

    #[test]
    fn pile_must_be_positive() {
        assert!(Cli::try_parse_from(["nimm", "--pile", "0"]).is_err());
    }
}
