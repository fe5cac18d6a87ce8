//! Board constants and the classic MB layout.
//!
//! Maps chain notation to concrete values:
//! - absorbing state = [`FINAL_SQUARE`] = 100
//! - |S| = [`NUM_SQUARES`] = 101 (squares 0..=100)
//! - |transient| = [`NUM_TRANSIENT`] = 100 (squares 0..=99)
//!
//! Square 0 is the off-board start position. A roll that would carry the
//! counter past [`FINAL_SQUARE`] is forfeited.

/// The winning square. Absorbing: once reached, the chain stays there.
pub const FINAL_SQUARE: usize = 100;

/// Number of chain states, including the off-board start square 0.
pub const NUM_SQUARES: usize = FINAL_SQUARE + 1;

/// Number of transient states (everything except [`FINAL_SQUARE`]).
pub const NUM_TRANSIENT: usize = FINAL_SQUARE;

/// Faces on the die. Each face has probability 1 / DIE_FACES.
pub const DIE_FACES: usize = 6;

/// Probability of a single die face.
pub const FACE_PROBABILITY: f64 = 1.0 / DIE_FACES as f64;

/// Ladders of the MB layout: (foot, top).
pub const CLASSIC_LADDERS: [(usize, usize); 9] = [
    (1, 38),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (80, 100),
];

/// Snakes of the MB layout: (head, tail).
pub const CLASSIC_SNAKES: [(usize, usize); 10] = [
    (16, 6),
    (47, 26),
    (49, 11),
    (56, 53),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 78),
];

/// Pivots with absolute value below this are treated as zero by the LU factorization.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Forward density evolution stops once the unabsorbed mass drops below this.
pub const DENSITY_TOLERANCE: f64 = 1e-12;

/// Hard cap on forward density evolution turns.
pub const DEFAULT_MAX_TURNS: usize = 2000;

/// Decimal places in the printed headline.
pub const DEFAULT_PRECISION: usize = 6;

/// Largest accepted precision: beyond 17 digits an f64 carries no more information.
pub const MAX_PRECISION: u8 = 17;

/// Headline text preceding the expected move count.
pub const HEADLINE_PREFIX: &str = "Average number of moves to win the MB version of Snakes and Ladders";
