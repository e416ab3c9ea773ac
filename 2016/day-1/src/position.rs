use glam::I64Vec2;

/// An intersection on the city grid.
///
/// `glam` already gives us everything a grid position needs: `+` for moving,
/// `* k` for scaling a unit step by a length, and `Eq + Hash` so positions can
/// be stored in a `HashSet`.
pub type Position = I64Vec2;

/// Where every walk starts.
pub const ORIGIN: Position = Position::ZERO;

/// Blocks between `position` and the origin when only walking along streets.
///
/// `unsigned_abs` so a coordinate of `i64::MIN` does not overflow.
pub fn manhattan_distance(position: Position) -> u64 {
    position.x.unsigned_abs() + position.y.unsigned_abs()
}
