mod error;
pub mod record;

use std::{fs, io, path};

pub use error::{LoadError, LoadResult};
pub use record::{NodeKind, NodeRecord};

// Read the node table at `path`.
// The file handle lives inside the csv reader and is dropped
// on every return, including parse failures
pub fn load<P: AsRef<path::Path>>(path: P) -> LoadResult<Vec<NodeRecord>> {
    let path = path.as_ref();

    let file = fs::File::open(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Reading node table from {}", path.display());

    from_reader(io::BufReader::new(file))
}

pub fn from_reader<R: io::Read>(reader: R) -> LoadResult<Vec<NodeRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| parse_error(e, &csv::StringRecord::new()))?
        .clone();

    // Every column is checked up front so a bad header
    // never gets as far as the first row
    if let Some(column) = record::COLUMNS
        .into_iter()
        .find(|&column| !headers.iter().any(|header| header == column)) {

        return Err(LoadError::MissingColumn { column });
    }

    let records = reader
        .deserialize::<NodeRecord>()
        .map(|result| result.map_err(|e| parse_error(e, &headers)))
        .collect::<LoadResult<Vec<_>>>()?;

    log::debug!("Parsed {} node records", records.len());

    Ok(records)
}

fn parse_error(e: csv::Error, headers: &csv::StringRecord) -> LoadError {
    let row = e.position()
        .map(csv::Position::line)
        .unwrap_or_default();

    let (column, reason) = match e.kind() {
        csv::ErrorKind::Deserialize { err, .. } => {
            let column = err
                .field()
                .and_then(|idx| headers.get(idx as usize))
                .unwrap_or("?");

            (column.to_owned(), err.kind().to_string())
        },
        _ => (String::from("?"), e.to_string()),
    };

    LoadError::Parse { row, column, reason }
}
