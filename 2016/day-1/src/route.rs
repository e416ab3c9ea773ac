use std::collections::HashSet;
use std::str::FromStr;

use itertools::repeat_n;
use tracing::debug;

use crate::direction::Direction;
use crate::error::RouteError;
use crate::instruction::{self, Instruction};
use crate::position::{manhattan_distance, Position, ORIGIN};

/// The full list of instructions from the recruiting document.
///
/// Every walk over a route starts again at the origin facing North, so the
/// queries below can be called in any order, any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    instructions: Vec<Instruction>,
}

impl Route {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Builds a route from tokens that were already split apart, e.g.
    /// `["R2", "L3"]`. The first bad token fails the whole route.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .map(|token| token.as_ref().parse::<Instruction>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Direction faced and blocks walked for each instruction, in order.
    fn legs(&self) -> impl Iterator<Item = (Direction, u32)> + '_ {
        self.instructions
            .iter()
            .scan(Direction::default(), |facing, instruction| {
                *facing = facing.turn(instruction.turn);
                Some((*facing, instruction.length))
            })
    }

    /// Every intersection reached, one block at a time, not counting the
    /// origin we start on.
    pub fn steps(&self) -> impl Iterator<Item = Position> + '_ {
        self.legs()
            .flat_map(|(facing, length)| repeat_n(facing.vector(), length as usize))
            .scan(ORIGIN, |position, step| {
                *position += step;
                Some(*position)
            })
    }

    /// Where the route ends, walking each instruction in one go.
    #[tracing::instrument(skip(self), fields(instructions = self.instructions.len()))]
    pub fn final_position(&self) -> Position {
        let position = self
            .legs()
            .fold(ORIGIN, |position, (facing, length)| {
                position + facing.vector() * i64::from(length)
            });
        debug!(?position, "route walked");
        position
    }

    pub fn final_distance(&self) -> u64 {
        manhattan_distance(self.final_position())
    }

    /// The first intersection visited twice.
    ///
    /// The origin counts as visited before the first step. Fails with
    /// [`RouteError::HeadquartersNotFound`] if the route never crosses itself.
    #[tracing::instrument(skip(self), fields(instructions = self.instructions.len()))]
    pub fn headquarters(&self) -> Result<Position, RouteError> {
        let mut visited = HashSet::from([ORIGIN]);

        let repeat = self.steps().find(|position| !visited.insert(*position));

        match repeat {
            Some(position) => {
                debug!(?position, visited = visited.len(), "found headquarters");
                Ok(position)
            }
            None => Err(RouteError::HeadquartersNotFound {
                // every step landed somewhere new, so only the origin is extra
                steps: visited.len() as u64 - 1,
            }),
        }
    }

    pub fn headquarters_distance(&self) -> Result<u64, RouteError> {
        self.headquarters().map(manhattan_distance)
    }
}

impl From<Vec<Instruction>> for Route {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}

impl FromStr for Route {
    type Err = RouteError;

    /// Parses a document line such as `R2, L3`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        instruction::parse_with(instruction::route(), line).map(Self::new)
    }
}
