mod app;
mod command;
mod consts;
mod game;
mod settings;
mod util;
use crate::app::App;
use crate::game::obstacles::WallSpec;
use crate::game::Game;
use crate::settings::Settings;
use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

static HELP: &str = "\
Usage: gridsnake [--seed <N>]

Steer the snake with the arrow keys, hjkl, or wasd.  Eat the food, and don't
hit the walls, the edges, or yourself!  Press r to restart and q to quit.

Options:
  --seed <N>      Seed the random number generator for a reproducible layout
  -h, --help      Show this help and exit
  -V, --version   Show the program version and exit

Set RUST_LOG (and redirect stderr) to see log messages.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Arguments {
    Run { seed: Option<u64> },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: lexopt::Parser) -> Result<Arguments, lexopt::Error> {
        use lexopt::prelude::*;
        let mut seed = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Short('h') | Long("help") => return Ok(Arguments::Help),
                Short('V') | Long("version") => return Ok(Arguments::Version),
                Long("seed") => seed = Some(parser.value()?.parse::<u64>()?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { seed })
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match Arguments::from_parser(lexopt::Parser::from_env()) {
        Ok(Arguments::Run { seed }) => exit_code(run(seed)),
        Ok(Arguments::Help) => {
            println!("{HELP}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(seed: Option<u64>) -> anyhow::Result<()> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let settings = Settings::new(
        consts::BOARD_WIDTH,
        consts::BOARD_HEIGHT,
        consts::UNIT,
        WallSpec::default(),
    )
    .context("invalid board settings")?;
    let game = Game::new(settings, rng).context("failed to start game")?;
    let terminal = ratatui::init();
    let r = App::new(game).run(terminal);
    ratatui::restore();
    r.context("game aborted")
}

fn exit_code(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
    })
}
