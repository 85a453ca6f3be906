use crate::error::ExportError;
use crate::export::Receipt;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(receipts: &[Receipt], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Ticket", "Plate", "Class", "Spot", "Entry", "Exit", "Units", "Fee",
    ])?;

    for receipt in receipts {
        let record = &receipt.record;
        writer.write_record([
            record.ticket_id().to_string(),
            record.vehicle().plate().to_string(),
            record.vehicle().class().to_string(),
            record.spot().to_string(),
            record.entry_time().to_rfc3339(),
            record
                .exit_time()
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            receipt.fee.billed_units.to_string(),
            receipt.fee.amount_minor.to_string(),
        ])?;
    }

    writer.flush().map_err(|source| ExportError::Flush {
        path: path_ref.to_path_buf(),
        source,
    })?;

    Ok(())
}
