//! Board layout: ladders and snakes as immutable jump tables.
//!
//! A jump is keyed by the square it starts on (ladder foot or snake head) and
//! maps to the square the counter ends on. Jump starts are pass-through
//! squares: a roll landing there is redirected before the turn ends, so the
//! counter never rests on them.
//!
//! The transition builder leaves the rows of pass-through squares empty. That
//! is only sound when no jump lands on another jump start, which
//! [`Board::new`] enforces.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::*;
use crate::error::BoardError;

/// Immutable board layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    ladders: BTreeMap<usize, usize>,
    snakes: BTreeMap<usize, usize>,
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl Board {
    /// The MB layout: 9 ladders, 10 snakes.
    pub fn classic() -> Self {
        let board = Self {
            ladders: CLASSIC_LADDERS.iter().copied().collect(),
            snakes: CLASSIC_SNAKES.iter().copied().collect(),
        };
        debug_assert!(board.validate().is_ok());
        board
    }

    /// A board with no snakes or ladders.
    pub fn plain() -> Self {
        Self {
            ladders: BTreeMap::new(),
            snakes: BTreeMap::new(),
        }
    }

    /// Build and validate an arbitrary layout.
    pub fn new<L, S>(ladders: L, snakes: S) -> Result<Self, BoardError>
    where
        L: IntoIterator<Item = (usize, usize)>,
        S: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::plain();
        for (foot, top) in ladders {
            if board.ladders.insert(foot, top).is_some() {
                return Err(BoardError::OverlappingSquare { square: foot });
            }
        }
        for (head, tail) in snakes {
            if board.ladders.contains_key(&head) || board.snakes.insert(head, tail).is_some() {
                return Err(BoardError::OverlappingSquare { square: head });
            }
        }
        board.validate()?;
        Ok(board)
    }

    fn validate(&self) -> Result<(), BoardError> {
        for (&from, &to) in self.jumps() {
            for square in [from, to] {
                if square > FINAL_SQUARE {
                    return Err(BoardError::SquareOutOfRange {
                        square,
                        last: FINAL_SQUARE,
                    });
                }
            }
            if from == 0 {
                return Err(BoardError::JumpFromStart);
            }
            if from == FINAL_SQUARE {
                return Err(BoardError::NotAbsorbing { square: from });
            }
            if from == to {
                return Err(BoardError::DegenerateJump { square: from });
            }
            if self.is_pass_through(to) {
                return Err(BoardError::ChainedRedirect { from, to });
            }
        }
        for (&foot, &top) in &self.ladders {
            if top < foot {
                return Err(BoardError::LadderGoesDown { foot, top });
            }
        }
        for (&head, &tail) in &self.snakes {
            if tail > head {
                return Err(BoardError::SnakeGoesUp { head, tail });
            }
        }
        Ok(())
    }

    /// All jumps, ladders first, each group ordered by start square.
    pub fn jumps(&self) -> impl Iterator<Item = (&usize, &usize)> {
        self.ladders.iter().chain(self.snakes.iter())
    }

    pub fn ladders(&self) -> &BTreeMap<usize, usize> {
        &self.ladders
    }

    pub fn snakes(&self) -> &BTreeMap<usize, usize> {
        &self.snakes
    }

    /// Destination of the jump starting on `square`, if any.
    #[inline]
    pub fn jump_from(&self, square: usize) -> Option<usize> {
        self.ladders
            .get(&square)
            .or_else(|| self.snakes.get(&square))
            .copied()
    }

    /// Where a counter landing on `square` ends up. Single lookup: jumps never chain.
    #[inline]
    pub fn redirect(&self, square: usize) -> usize {
        self.jump_from(square).unwrap_or(square)
    }

    /// True for ladder feet and snake heads.
    #[inline]
    pub fn is_pass_through(&self, square: usize) -> bool {
        self.ladders.contains_key(&square) || self.snakes.contains_key(&square)
    }
}
