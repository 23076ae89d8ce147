//! Four-in-a-row
//! Two players take turns claiming cells of a 5x5 grid, the first to line up four marks wins

/// Grid of cells and player marks
pub mod board;

/// Detection of four connected marks
pub mod detector;

/// Turn controller
pub mod game;

/// Parsing of typed moves
pub mod input;

/// Interactive terminal session
pub mod session;
