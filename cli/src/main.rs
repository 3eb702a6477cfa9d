use anyhow::Result;
use clap::Parser;
use minefinder_core::{Game, GameConfig, MinefieldGenerator, RandomGenerator, Status};

mod ui;

/// Terminal minesweeper.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Board width in cells (5-99).
    #[arg(long, default_value_t = 10)]
    width: u8,

    /// Board height in cells (5-99).
    #[arg(long, default_value_t = 10)]
    height: u8,

    /// Number of mines to place.
    #[arg(long, default_value_t = 10)]
    mines: u16,

    /// Seed for mine placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = GameConfig::new((args.width, args.height), args.mines)?;
    let generator = match args.seed {
        Some(seed) => RandomGenerator::from_seed(seed),
        None => RandomGenerator::from_entropy(),
    };
    let mut game = Game::new(generator.generate(config));

    while !game.is_finished() {
        ui::clear_screen();
        ui::render(&game);
        let (coords, action) = ui::read_turn(&game)?;
        match action {
            ui::Action::Clear => game.reveal(coords)?,
            ui::Action::Flag => game.toggle_flag(coords)?,
        }
        game.update_status();
    }

    ui::clear_screen();
    ui::render(&game);
    match game.status() {
        Status::Won => println!("You win!"),
        Status::Lost => println!("You lose!"),
        Status::Active => unreachable!("loop only exits on a finished game"),
    }
    Ok(())
}
