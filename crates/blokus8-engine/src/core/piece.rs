use super::bit_board::cell_mask;

/// One of the eight piece shapes in the catalog.
///
/// The discriminant doubles as the piece's inventory bit index, so a seat's
/// 8-bit inventory mask and this enum stay in lockstep.
///
/// # Example
///
/// ```
/// use blokus8_engine::{Orientation, PieceKind};
///
/// let piece = PieceKind::Domino;
/// assert_eq!(piece.area(), 2);
/// assert_eq!(piece.dimensions(Orientation::new(0)), (2, 1));
/// assert_eq!(piece.dimensions(Orientation::new(1)), (1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    /// Single tile.
    Mono = 0,
    /// 1×2 bar.
    Domino = 1,
    /// Three tiles in a small staircase.
    Staircase = 2,
    /// 3×1 bar.
    Line = 3,
    /// T shape.
    Tee = 4,
    /// L shape.
    Hook = 5,
    /// S shape.
    Squiggle = 6,
    /// 2×2 block.
    Square = 7,
}

impl PieceKind {
    /// Number of piece kinds (8).
    pub const LEN: usize = 8;

    /// All piece kinds in inventory-bit order.
    pub const ALL: [Self; Self::LEN] = [
        Self::Mono,
        Self::Domino,
        Self::Staircase,
        Self::Line,
        Self::Tee,
        Self::Hook,
        Self::Squiggle,
        Self::Square,
    ];

    /// Returns the inventory bit index of this piece kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the piece kind with the given inventory bit index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::LEN {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the single set bit this piece occupies in an inventory mask.
    #[must_use]
    pub const fn inventory_bit(self) -> u8 {
        1 << self as u8
    }

    /// Returns the piece's cell pattern in the given orientation.
    ///
    /// Patterns are anchored with the bounding box's bottom-left corner at
    /// bit 0, so a placement at `(x, y)` is just a left shift by `y*8 + x`.
    #[must_use]
    pub const fn pattern(self, orientation: Orientation) -> u64 {
        PIECE_PATTERNS[self.index()][orientation.index()]
    }

    /// Returns the `(width, height)` of the piece's bounding box in the given
    /// orientation.
    #[must_use]
    pub const fn dimensions(self, orientation: Orientation) -> (usize, usize) {
        let (width, height) = PIECE_DIMENSIONS[self.index()];
        if orientation.index() % 2 == 0 {
            (width, height)
        } else {
            (height, width)
        }
    }

    /// Returns the number of tiles the piece covers.
    #[must_use]
    pub const fn area(self) -> u32 {
        PIECE_AREAS[self.index()]
    }

    /// Returns a short human-readable name for the piece.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Domino => "domino",
            Self::Staircase => "staircase",
            Self::Line => "line",
            Self::Tee => "tee",
            Self::Hook => "hook",
            Self::Squiggle => "squiggle",
            Self::Square => "square",
        }
    }
}

/// Rotation state of a piece.
///
/// Represents one of four counterclockwise quarter-turns:
///
/// - `0`: as listed in the catalog
/// - `1`: 90° counterclockwise
/// - `2`: 180°
/// - `3`: 270° counterclockwise
///
/// Construction reduces modulo 4, so any turn count is valid input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation(u8);

impl Orientation {
    /// Number of distinct orientations (4).
    pub const LEN: usize = 4;

    /// All orientations in quarter-turn order.
    pub const ALL: [Self; Self::LEN] = [Self(0), Self(1), Self(2), Self(3)];

    /// Creates an orientation from a quarter-turn count, reduced modulo 4.
    #[must_use]
    pub const fn new(turns: u8) -> Self {
        Self(turns % 4)
    }

    /// Returns the quarter-turn count in `0..4`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rotates a further quarter-turn counterclockwise.
    #[must_use]
    pub const fn rotated_left(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    /// Rotates a quarter-turn clockwise.
    #[must_use]
    pub const fn rotated_right(self) -> Self {
        Self((self.0 + 3) % 4)
    }
}

/// Generates all 4 orientations of a pattern by rotating 90° counterclockwise.
///
/// Each result is re-anchored with its bounding box's bottom-left corner at
/// bit 0: the cell `(x, y)` of a `w×h` pattern maps to `(h-1-y, x)`.
const fn rotations(width: usize, height: usize, pattern: u64) -> [u64; 4] {
    let mut turns = [pattern; 4];
    let mut w = width;
    let mut h = height;
    let mut i = 1;
    while i < 4 {
        let prev = turns[i - 1];
        let mut next = 0;
        let mut y = 0;
        while y < h {
            let mut x = 0;
            while x < w {
                if prev & cell_mask(x, y) != 0 {
                    next |= cell_mask(h - 1 - y, x);
                }
                x += 1;
            }
            y += 1;
        }
        turns[i] = next;
        let swap = w;
        w = h;
        h = swap;
        i += 1;
    }
    turns
}

const PIECE_PATTERNS: [[u64; 4]; PieceKind::LEN] = {
    const fn cells(coords: &[(usize, usize)]) -> u64 {
        let mut pattern = 0;
        let mut i = 0;
        while i < coords.len() {
            pattern |= cell_mask(coords[i].0, coords[i].1);
            i += 1;
        }
        pattern
    }

    [
        // Mono
        rotations(1, 1, cells(&[(0, 0)])),
        // Domino
        rotations(2, 1, cells(&[(0, 0), (1, 0)])),
        // Staircase
        rotations(2, 2, cells(&[(0, 0), (1, 0), (0, 1)])),
        // Line
        rotations(3, 1, cells(&[(0, 0), (1, 0), (2, 0)])),
        // Tee
        rotations(3, 2, cells(&[(0, 0), (1, 0), (2, 0), (1, 1)])),
        // Hook
        rotations(3, 2, cells(&[(0, 0), (1, 0), (2, 0), (0, 1)])),
        // Squiggle
        rotations(3, 2, cells(&[(0, 0), (1, 0), (1, 1), (2, 1)])),
        // Square
        rotations(2, 2, cells(&[(0, 0), (1, 0), (0, 1), (1, 1)])),
    ]
};

/// Bounding-box `(width, height)` of each piece at orientation 0.
const PIECE_DIMENSIONS: [(usize, usize); PieceKind::LEN] = [
    (1, 1), // Mono
    (2, 1), // Domino
    (2, 2), // Staircase
    (3, 1), // Line
    (3, 2), // Tee
    (3, 2), // Hook
    (3, 2), // Squiggle
    (2, 2), // Square
];

const PIECE_AREAS: [u32; PieceKind::LEN] = {
    let mut areas = [0; PieceKind::LEN];
    let mut i = 0;
    while i < PieceKind::LEN {
        areas[i] = PIECE_PATTERNS[i][0].count_ones();
        i += 1;
    }
    areas
};
