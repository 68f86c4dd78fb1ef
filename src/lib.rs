//! Two player console chess: board state, per-piece move rules, a text
//! renderer and the turn loop that ties them to a terminal.

pub mod chess_board;
pub mod game;
pub mod ui;
