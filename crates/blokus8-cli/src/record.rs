use std::{fs, path::Path};

use anyhow::Context as _;
use blokus8_engine::BitBoard;

/// Reads a board from its 18-byte record file.
pub(crate) fn load(path: &Path) -> anyhow::Result<BitBoard> {
    let bytes = fs::read(path)
        .with_context(|| format!("failed to read board record {}", path.display()))?;
    let board = BitBoard::from_bytes(&bytes)
        .with_context(|| format!("invalid board record {}", path.display()))?;
    Ok(board)
}

/// Writes a board to its 18-byte record file.
pub(crate) fn save(path: &Path, board: &BitBoard) -> anyhow::Result<()> {
    fs::write(path, board.to_bytes())
        .with_context(|| format!("failed to write board record {}", path.display()))
}
