pub mod direction;
pub mod error;
pub mod instruction;
pub mod position;
pub mod route;

pub mod part1;
pub mod part2;

pub use direction::Direction;
pub use error::RouteError;
pub use instruction::{Instruction, Turn};
pub use position::{manhattan_distance, Position, ORIGIN};
pub use route::Route;
