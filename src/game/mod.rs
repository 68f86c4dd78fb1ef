pub mod turn_loop;

pub use turn_loop::{color_for_turn, parse_move, TurnLoop};
