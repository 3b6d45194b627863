use std::collections::HashMap;

use log::debug;

use crate::cell::Cell;

/// Owns every [Cell] created during a run, in insertion order.
///
/// Cells are keyed by their index. Creating a cell with an index that is
/// already present replaces the stored cell in place.
#[derive(Debug, Default)]
pub struct CellStore {
    cells: Vec<Cell>,
    positions: HashMap<usize, usize>,
}

impl CellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cell from `row` and store it under `index`.
    pub fn create(&mut self, index: usize, row: &HashMap<String, String>) -> &Cell {
        let cell = Cell::new(index, row);

        let position = match self.positions.get(&index) {
            Some(&position) => {
                debug!("Replacing cell {}", index);
                self.cells[position] = cell;
                position
            }
            None => {
                debug!("Creating cell {}", index);
                self.cells.push(cell);
                let position = self.cells.len() - 1;
                self.positions.insert(index, position);
                position
            }
        };

        &self.cells[position]
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.positions.clear();
    }

    pub fn all(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.positions
            .get(&index)
            .map(|&position| &self.cells[position])
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
