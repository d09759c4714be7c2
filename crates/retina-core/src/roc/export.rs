use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use num_traits::Float;

use crate::consts::ROC_EXPORT_PRECISION;
use crate::error::{Result, RetinaError};

use super::curve::RocCurve;

/// Write one `-1 <TPR> <FPR>` line per point, rates with six decimals.
pub fn write_roc<T: Float, W: Write>(curve: &RocCurve<T>, mut writer: W) -> std::io::Result<()> {
    for (tpr, fpr) in curve.rates() {
        writeln!(
            writer,
            "-1 {:.prec$} {:.prec$}",
            tpr.to_f64().unwrap_or(f64::NAN),
            fpr.to_f64().unwrap_or(f64::NAN),
            prec = ROC_EXPORT_PRECISION
        )?;
    }
    writer.flush()
}

/// Save a ROC curve as text at `path`.
pub fn save_roc<T: Float>(curve: &RocCurve<T>, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| RetinaError::CannotOpenDestination {
        path: path.to_path_buf(),
        source,
    })?;
    write_roc(curve, BufWriter::new(file))?;
    Ok(())
}
