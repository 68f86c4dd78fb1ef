use std::io::{stdin, stdout};

use anyhow::Context;
use clap::arg;
use clap::command;
use clap::Command;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use console_chess::chess_board::{ChessBoard, Color, StartPosition};
use console_chess::game::{color_for_turn, TurnLoop};
use console_chess::ui::{render_to_string, GlyphSet};

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ).global(true))
        .arg(arg!(
            --ascii "Draw pieces as letters instead of chess symbols"
        ).global(true))
        .arg(
            arg!(
            -f --fen <FEN> "Start position, standard layout if omitted"
                    )
            .global(true),
        )
        .subcommand(Command::new("play").about("Play a game on this terminal"))
        .subcommand(Command::new("show").about("Print the start position and its pieces"))
        .get_matches();

    init_logging(matches.get_flag("debug"));

    let glyphs = if matches.get_flag("ascii") { GlyphSet::Ascii } else { GlyphSet::Unicode };
    let position = match matches.get_one::<String>("fen") {
        Some(fen) => ChessBoard::from_fen(fen).with_context(|| format!("cannot set up position {:?}", fen))?,
        None => StartPosition::default(),
    };

    match matches.subcommand() {
        Some(("show", _)) => show(&position, glyphs),
        Some(("play", _)) | None => play(position, glyphs)?,
        _ => unreachable!("Exhausted list of subcommands"),
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn play(position: StartPosition, glyphs: GlyphSet) -> anyhow::Result<()> {
    tracing::info!(turn = position.turn, "starting game");
    let mut game = TurnLoop::new(position.board, position.turn, glyphs, stdin().lock(), stdout());
    game.run().context("terminal I/O failed")?;
    Ok(())
}

#[derive(Tabled)]
struct PieceRow {
    square: String,
    color: String,
    piece: String,
    glyph: char,
}

fn show(position: &StartPosition, glyphs: GlyphSet) {
    let mut pieces: Vec<_> = position.board.pieces().collect();
    pieces.sort_by_key(|p| (p.color == Color::Black, p.position.row, p.position.col));

    let table_rows: Vec<PieceRow> = pieces
        .into_iter()
        .map(|p| PieceRow {
            square: p.position.as_algebraic(),
            color: p.color.to_string(),
            piece: p.kind.name().to_string(),
            glyph: glyphs.glyph(p),
        })
        .collect();

    print!("{}", render_to_string(&position.board, glyphs));
    println!("{}", position.board.to_fen());
    println!(
        "{} pieces, turn {} ({} to move)",
        position.board.piece_count(),
        position.turn,
        color_for_turn(position.turn)
    );
    println!("{}", Table::new(table_rows).with(Style::modern()));
}
