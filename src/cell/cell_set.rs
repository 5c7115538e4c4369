use super::*;

/// An insertion-ordered collection of cells with unique keys, as held by one editor panel
pub struct CellSet {
    cells: Vec<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Adds a cell, rejecting keys already present
    pub fn add(&mut self, cell: Cell) -> CellResult<()> {
        if self.cells.iter().any(|existing| existing.key() == cell.key()) {
            return Err(CellError::DuplicateKey(cell.key().to_string()));
        }
        self.cells.push(cell);
        Ok(())
    }

    // Not the most efficient but good enough for the usecase
    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.key() == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|cell| cell.key() == key)
    }

    /// Freezes or thaws every cell at once, for loading a batch of values without a storm of
    /// events
    pub fn set_frozen(&mut self, frozen: bool) {
        for cell in &mut self.cells {
            cell.set_frozen(frozen);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
