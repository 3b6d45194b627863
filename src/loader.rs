use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::store::CellStore;

pub type Row = HashMap<String, String>;

/// Load every row of the csv at `path` into `store`, returning the row count.
pub fn load_csv<P: AsRef<Path>>(path: P, store: &mut CellStore) -> Result<usize> {
    let path = path.as_ref();
    debug!("Reading cells from {}", path.display());
    let file = File::open(path)?;
    load_reader(file, store)
}

/// Load a headered csv from any reader.
///
/// Rows are indexed from 0 in file order. Every row is parsed before the
/// store is touched, so a bad row leaves `store` as it was.
pub fn load_reader<R: Read>(reader: R, store: &mut CellStore) -> Result<usize> {
    let rows = read_rows(reader)?;

    for (index, row) in rows.iter().enumerate() {
        store.create(index, row);
    }
    info!("Loaded {} cells", rows.len());

    Ok(rows.len())
}

fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let mut rows = Vec::new();
    for row in reader.deserialize::<Row>() {
        let mut row = row?;
        // Empty cells are missing fields.
        row.retain(|_, value| !value.is_empty());
        rows.push(row);
    }
    Ok(rows)
}
