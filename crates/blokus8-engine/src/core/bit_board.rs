use serde::{Deserialize, Serialize};

use super::{BOARD_HEIGHT, BOARD_WIDTH, piece::PieceKind};

/// Converts cell coordinates to a one-bit occupancy mask.
///
/// Bit `y*8 + x` corresponds to cell `(x, y)`, with `(0, 0)` at the
/// bottom-left of the board.
#[must_use]
pub const fn cell_mask(x: usize, y: usize) -> u64 {
    1 << (y * BOARD_WIDTH + x)
}

/// The four board-corner cells `(0,0)`, `(7,0)`, `(0,7)` and `(7,7)`.
///
/// A seat's opening placement must cover one of these.
pub const CORNER_MASK: u64 = cell_mask(0, 0)
    | cell_mask(BOARD_WIDTH - 1, 0)
    | cell_mask(0, BOARD_HEIGHT - 1)
    | cell_mask(BOARD_WIDTH - 1, BOARD_HEIGHT - 1);

/// Inventory mask with all 8 pieces still unused.
pub const FULL_INVENTORY: u8 = 0xFF;

/// Size in bytes of the persisted board record.
pub const RECORD_LEN: usize = 18;

/// One of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Seat {
    /// The seat that moves first.
    #[display("player one")]
    One,
    /// The seat that moves second.
    #[display("player two")]
    Two,
}

impl Seat {
    /// Both seats in turn order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Returns the other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// Complete state of a match, packed into 18 bytes.
///
/// Holds one 64-bit occupancy mask and one 8-bit piece inventory per seat.
/// `BitBoard` is a value type: no operation mutates a board in place, every
/// transformation yields a new value. That makes speculative exploration of
/// candidate moves aliasing-free, since callers keep the original board
/// untouched no matter what they try on a copy.
///
/// Invariants upheld by every constructor and transformation:
///
/// - the two occupancy masks are disjoint;
/// - an inventory bit, once cleared, is never set again on any derived board.
///
/// # Example
///
/// ```
/// use blokus8_engine::{BitBoard, FULL_INVENTORY, Seat};
///
/// let board = BitBoard::new();
/// assert_eq!(board.coverage(Seat::One), 0);
/// assert_eq!(board.inventory(Seat::Two), FULL_INVENTORY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitBoard {
    occupancy: [u64; 2],
    inventory: [u8; 2],
}

impl Default for BitBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BitBoard {
    /// The starting position: no tiles covered, both inventories full.
    pub const EMPTY: Self = Self {
        occupancy: [0; 2],
        inventory: [FULL_INVENTORY; 2],
    };

    /// Creates a new, empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a board from raw occupancy and inventory masks.
    ///
    /// Rejects overlapping occupancies; inventories are taken as-is.
    pub const fn from_parts(
        occupancy_one: u64,
        occupancy_two: u64,
        inventory_one: u8,
        inventory_two: u8,
    ) -> Result<Self, BoardRecordError> {
        if occupancy_one & occupancy_two != 0 {
            return Err(BoardRecordError::OverlappingOccupancy);
        }
        Ok(Self {
            occupancy: [occupancy_one, occupancy_two],
            inventory: [inventory_one, inventory_two],
        })
    }

    /// Returns the occupancy mask of the given seat.
    #[must_use]
    pub const fn occupancy(&self, seat: Seat) -> u64 {
        self.occupancy[seat.index()]
    }

    /// Returns the union of both seats' occupancy masks.
    #[must_use]
    pub const fn occupied(&self) -> u64 {
        self.occupancy[0] | self.occupancy[1]
    }

    /// Returns the inventory mask of the given seat.
    #[must_use]
    pub const fn inventory(&self, seat: Seat) -> u8 {
        self.inventory[seat.index()]
    }

    /// Returns whether the given seat still holds the given piece.
    #[must_use]
    pub const fn has_piece(&self, seat: Seat, piece: PieceKind) -> bool {
        self.inventory(seat) & piece.inventory_bit() != 0
    }

    /// Returns the number of tiles covered by the given seat.
    #[must_use]
    pub const fn coverage(&self, seat: Seat) -> u32 {
        self.occupancy(seat).count_ones()
    }

    /// Returns a board with the two seats' occupancies and inventories
    /// swapped.
    ///
    /// This produces the subjective view handed to [`Player`]
    /// implementations: whoever is about to move sees itself as
    /// [`Seat::One`].
    ///
    /// [`Player`]: crate::Player
    #[must_use]
    pub const fn flipped(&self) -> Self {
        Self {
            occupancy: [self.occupancy[1], self.occupancy[0]],
            inventory: [self.inventory[1], self.inventory[0]],
        }
    }

    /// Covers `placed_mask` for `seat` and removes `piece` from its
    /// inventory.
    ///
    /// Callers must have established legality via verification first; this
    /// primitive stays crate-internal so that no unverified mask can reach
    /// the occupancy sets.
    pub(crate) const fn with_move_applied(
        &self,
        seat: Seat,
        piece: PieceKind,
        placed_mask: u64,
    ) -> Self {
        let mut board = *self;
        board.occupancy[seat.index()] |= placed_mask;
        board.inventory[seat.index()] &= !piece.inventory_bit();
        board
    }

    /// Encodes the board as its fixed-size binary record.
    ///
    /// Layout: both occupancy masks as little-endian `u64`, then one
    /// inventory byte per seat. 18 bytes, no padding.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; RECORD_LEN] {
        let mut bytes = [0; RECORD_LEN];
        bytes[..8].copy_from_slice(&self.occupancy[0].to_le_bytes());
        bytes[8..16].copy_from_slice(&self.occupancy[1].to_le_bytes());
        bytes[16] = self.inventory[0];
        bytes[17] = self.inventory[1];
        bytes
    }

    /// Decodes a board from its binary record, validating length and
    /// occupancy disjointness.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BoardRecordError> {
        if bytes.len() != RECORD_LEN {
            return Err(BoardRecordError::WrongLength { length: bytes.len() });
        }
        let occupancy_one = u64::from_le_bytes(bytes[..8].try_into().unwrap());
        let occupancy_two = u64::from_le_bytes(bytes[8..16].try_into().unwrap());
        Self::from_parts(occupancy_one, occupancy_two, bytes[16], bytes[17])
    }

    /// Creates a `BitBoard` from ASCII art for testing.
    ///
    /// `'1'` and `'2'` mark tiles covered by the respective seat, `'.'` marks
    /// an empty cell. Exactly 8 rows of 8 cells, top row first (y=7). Both
    /// inventories start full; combine with [`Self::from_parts`] when a test
    /// needs consumed pieces.
    ///
    /// # Panics
    ///
    /// Panics if the art does not describe an 8×8 board.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let rows: Vec<&str> = art.lines().filter(|line| !line.trim().is_empty()).collect();
        assert_eq!(rows.len(), BOARD_HEIGHT, "expected {BOARD_HEIGHT} rows");

        let mut board = Self::EMPTY;
        for (row, line) in rows.iter().enumerate() {
            let y = BOARD_HEIGHT - 1 - row;
            let cells: Vec<char> = line
                .chars()
                .filter(|c| matches!(c, '1' | '2' | '.'))
                .collect();
            assert_eq!(
                cells.len(),
                BOARD_WIDTH,
                "expected {BOARD_WIDTH} cells in row {row}",
            );
            for (x, &cell) in cells.iter().enumerate() {
                match cell {
                    '1' => board.occupancy[0] |= cell_mask(x, y),
                    '2' => board.occupancy[1] |= cell_mask(x, y),
                    _ => {}
                }
            }
        }
        assert_eq!(
            board.occupancy[0] & board.occupancy[1],
            0,
            "seats may not share a cell",
        );
        board
    }
}

impl Serialize for BitBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "<occupancy1>,<occupancy2>,<inventory1>,<inventory2>" as
        // fixed-width lowercase hex (e.g. "0000000000000000,...,ff,ff")
        let s = format!(
            "{:016x},{:016x},{:02x},{:02x}",
            self.occupancy[0], self.occupancy[1], self.inventory[0], self.inventory[1],
        );
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for BitBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(serde::de::Error::custom(format!(
                "expected 4 comma-separated hex fields, got {}",
                parts.len()
            )));
        }

        let widths = [16, 16, 2, 2];
        for (i, (part, width)) in parts.iter().zip(widths).enumerate() {
            if part.len() != width {
                return Err(serde::de::Error::custom(format!(
                    "field {i} must be {width} hex digits, got '{part}'"
                )));
            }
        }

        let parse_u64 = |field: &str| -> Result<u64, D::Error> {
            u64::from_str_radix(field, 16)
                .map_err(|e| serde::de::Error::custom(format!("invalid hex: {field} ({e})")))
        };
        let parse_u8 = |field: &str| -> Result<u8, D::Error> {
            u8::from_str_radix(field, 16)
                .map_err(|e| serde::de::Error::custom(format!("invalid hex: {field} ({e})")))
        };

        Self::from_parts(
            parse_u64(parts[0])?,
            parse_u64(parts[1])?,
            parse_u8(parts[2])?,
            parse_u8(parts[3])?,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// Failure to reconstruct a board from an untrusted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardRecordError {
    /// The record does not have the fixed 18-byte size.
    #[display("board record must be 18 bytes, got {length}")]
    WrongLength {
        /// Size of the rejected record.
        length: usize,
    },
    /// The record claims a cell for both seats at once.
    #[display("board record has overlapping occupancies")]
    OverlappingOccupancy,
}
