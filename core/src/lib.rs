pub mod board;
pub mod capture;
pub mod error;
pub mod game_state;
pub mod move_gen;
pub mod perft;
pub mod types;
pub mod variant;

pub use board::*;
pub use capture::capture_chains;
pub use error::*;
pub use game_state::*;
pub use move_gen::*;
pub use perft::{perft, perft_detailed, perft_divide, PerftResults};
pub use types::*;
pub use variant::Variant;
