use crate::error::ExportError;
use crate::export::Receipt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn export_json<P: AsRef<Path>>(receipts: &[Receipt], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, receipts)?;
    writer.flush().map_err(|source| ExportError::Flush {
        path: path_ref.to_path_buf(),
        source,
    })?;

    Ok(())
}
