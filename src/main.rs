//! Terminal front end for forbidden-face.
//!
//! Draws the grid as text, reads taps as `row col` lines, and shows
//! drinking-mode prompts until they are acknowledged with Enter.

use std::io::{self, BufRead, Write};

use clap::Parser;
use forbidden_face::{
    AvatarSet, GameMode, Grid, Phase, RoundConfig, RoundController, RoundEvent, RoundEventKind,
    TileId, TilePosition,
};

#[derive(Debug, Parser)]
#[command(name = "forbidden-face", about = "Tap the faces, but never the forbidden one")]
struct Args {
    /// Grid size N (N×N tiles, 2 to 64)
    #[arg(short, long, default_value_t = forbidden_face::core::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Game mode: classic or drinking
    #[arg(short, long, default_value_t = GameMode::Classic)]
    mode: GameMode,

    /// Seed for reproducible rounds (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Mark the forbidden tile on the board
    #[arg(long)]
    show_marker: bool,

    /// Avatar keys assigned to tiles in order (repeatable)
    #[arg(short, long = "avatar")]
    avatars: Vec<String>,
}

enum Command {
    Tap(TilePosition),
    Restart,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "q" | "quit" => return Command::Quit,
        "r" | "restart" => return Command::Restart,
        _ => {}
    }

    let mut parts = line.split_whitespace().map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Command::Tap(TilePosition::new(row, col)),
        _ => Command::Unknown,
    }
}

fn render(out: &mut impl Write, grid: &Grid, marker: Option<TileId>) -> io::Result<()> {
    let size = grid.size();
    write!(out, "   ")?;
    for col in 0..size {
        write!(out, " {col:^3}")?;
    }
    writeln!(out)?;

    for row in 0..size {
        write!(out, "{row:>2} ")?;
        for col in 0..size {
            let cell = match grid.tile_at(TilePosition::new(row, col)) {
                None => "   ".to_string(),
                Some(id) if Some(id) == marker => "[X]".to_string(),
                Some(id) => {
                    let face = grid
                        .tile(id)
                        .and_then(|tile| tile.avatar.as_ref())
                        .and_then(|avatar| avatar.key().chars().next())
                        .unwrap_or('o');
                    format!("[{face}]")
                }
            };
            write!(out, " {cell}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn announce(
    out: &mut impl Write,
    controller: &RoundController,
    event: &RoundEvent,
) -> io::Result<()> {
    match event.kind {
        RoundEventKind::Started | RoundEventKind::Eliminated => {}
        RoundEventKind::PunishmentPrompted => {
            if let Some(punishment) = &event.punishment {
                writeln!(out, "\n  >>> {punishment} <<<")?;
            }
            write!(out, "Press Enter when done... ")?;
            out.flush()?;
            return Ok(());
        }
        RoundEventKind::Won | RoundEventKind::Lost => {
            if let Some(summary) = controller.summary() {
                writeln!(out, "\nGame over. {}", summary.scoreline())?;
            }
            write!(out, "Play again? [r]estart / [q]uit: ")?;
            out.flush()?;
            return Ok(());
        }
    }

    if let (Some(summary), Some(grid)) = (controller.summary(), controller.grid()) {
        writeln!(out, "\n{summary}")?;
        render(out, grid, event.forbidden)?;
    }
    write!(out, "Tap (row col), [r]estart, [q]uit: ")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {seed}");

    let config = RoundConfig::new(args.size)
        .with_mode(args.mode)
        .with_avatars(args.avatars.into_iter().collect::<AvatarSet>())
        .with_marker(args.show_marker);

    let mut controller = RoundController::new(seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let event = controller.start(config)?;
    announce(&mut out, &controller, &event)?;

    for line in io::stdin().lock().lines() {
        let line = line?;

        let event = match controller.phase() {
            Some(Phase::AwaitingPunishmentAck) => controller.acknowledge_punishment()?,
            Some(Phase::Won | Phase::Lost) => match parse_command(&line) {
                Command::Restart => controller.restart()?,
                _ => break,
            },
            _ => match parse_command(&line) {
                Command::Tap(position) => controller.on_tap_at(position)?,
                Command::Restart => controller.restart()?,
                Command::Quit => break,
                Command::Unknown => {
                    write!(out, "Expected `row col`, `r` or `q`: ")?;
                    out.flush()?;
                    continue;
                }
            },
        };

        match event {
            Some(event) => announce(&mut out, &controller, &event)?,
            None => {
                write!(out, "Nothing there. Tap (row col): ")?;
                out.flush()?;
            }
        }
    }

    Ok(())
}
