//! # tweetsent
//!
//! Offline pipeline turning scraped tweet dumps into sentiment scores.
//!
//! ```sh
//! tweetsent 0.1.0
//! tweet sentiment pipeline.
//!
//! USAGE:
//!     tweetsent <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     help          Prints this message or the help of the given subcommand(s)
//!     preprocess    Rebuild a tweet table from a raw dump
//!     score         Compute sentiment scores
//!     tokenize      Tokenize tweets
//!     translate     Translate and lemmatize tweets
//! ```
use structopt::StructOpt;
use tweetsent::error::Error;
use tweetsent::pipelines::{Pipeline, Preprocess, Score, Tokenize, Translate};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Tweetsent::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Tweetsent::Preprocess(p) => {
            Preprocess::new(p.into()).run()?;
        }
        cli::Tweetsent::Tokenize(t) => {
            Tokenize::new(t.into()).run()?;
        }
        cli::Tweetsent::Translate(t) => {
            Translate::new(t.into()).run()?;
        }
        cli::Tweetsent::Score(s) => {
            Score::new(s.into()).run()?;
        }
    };
    Ok(())
}
