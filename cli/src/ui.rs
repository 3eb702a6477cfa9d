use std::io::{self, Write};

use anyhow::{Result, bail};
use minefinder_core::{Coord, Coord2, Game, TileView};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Clear,
    Flag,
}

pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

/// Prints the remaining-mine header and the grid with 1-based row and column
/// labels.
pub fn render(game: &Game) {
    let (width, height) = game.size();

    println!();
    println!(" Mines: {}", game.mines_remaining());
    println!();

    let mut header = String::from("    ");
    for col in 1..=width {
        if col <= 9 {
            header.push_str(&format!(" {col} "));
        } else {
            header.push_str(&format!(" {col}"));
        }
    }
    println!("{header}");
    println!();

    for row in 0..height {
        let label = row + 1;
        let mut line = if label <= 9 {
            format!(" {label}  ")
        } else {
            format!("{label}  ")
        };
        for col in 0..width {
            line.push_str(&tile_glyph(game.tile_at((col, row))));
        }
        println!("{line}");
    }
}

fn tile_glyph(tile: TileView) -> String {
    match tile {
        TileView::Hidden => " · ".into(),
        TileView::Flagged | TileView::AutoFlagged => " 🚩".into(),
        TileView::Exploded => " 💣".into(),
        TileView::Revealed(0) => "   ".into(),
        TileView::Revealed(danger) => format!(" {danger} "),
    }
}

/// Reads one full turn: a target cell and an action. Clearing a flagged cell
/// is rejected here, before the engine ever sees it, and sends the player
/// back to cell selection.
pub fn read_turn(game: &Game) -> Result<(Coord2, Action)> {
    loop {
        let coords = read_coords(game)?;
        if let Some(action) = read_action(game, coords)? {
            return Ok((coords, action));
        }
    }
}

fn read_coords(game: &Game) -> Result<Coord2> {
    let (width, height) = game.size();
    loop {
        let row = read_index("Select a row: ", height)?;
        let col = read_index("Select a column: ", width)?;
        let coords = (col, row);
        if game.is_revealed(coords) {
            println!("That square has already been cleared!");
        } else {
            return Ok(coords);
        }
    }
}

fn read_index(prompt: &str, limit: Coord) -> Result<Coord> {
    loop {
        let line = read_line(prompt)?;
        if let Some(index) = parse_index(&line, limit) {
            return Ok(index);
        }
    }
}

fn read_action(game: &Game, coords: Coord2) -> Result<Option<Action>> {
    loop {
        let line = read_line("Select (C)lear or (F)lag/unflag: ")?;
        match parse_action(&line) {
            None => println!("Invalid action!"),
            Some(Action::Clear) if game.is_flagged(coords) => {
                println!("You can't clear a flagged square!");
                return Ok(None);
            }
            Some(action) => return Ok(Some(action)),
        }
    }
}

/// Parses a 1-based row/column label into its 0-based coordinate.
fn parse_index(input: &str, limit: Coord) -> Option<Coord> {
    let label: Coord = input.trim().parse().ok()?;
    (1..=limit).contains(&label).then(|| label - 1)
}

fn parse_action(input: &str) -> Option<Action> {
    match input.trim().to_ascii_lowercase().as_str() {
        "c" => Some(Action::Clear),
        "f" => Some(Action::Flag),
        _ => None,
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line)
}
