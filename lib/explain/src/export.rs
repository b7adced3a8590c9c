//! Delimited-text rendering of an annotated selection.
//!
//! Columns follow the display order of the annotated table; the eight
//! similarity columns are appended on request. Unknown numerics render as
//! empty cells.

use crate::select::AnnotatedMatch;
use matchlens_core::Component;
use thiserror::Error;

/// Display column order of the annotated table.
pub const BASE_COLUMNS: [&str; 12] = [
    "MatchScore",
    "Property ID",
    "Location",
    "Type",
    "Condition",
    "Bedrooms",
    "Bathrooms",
    "Size",
    "Year Built",
    "Price",
    "g_budget",
    "Why this matched",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV flush error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV buffer was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render the annotated matches as CSV text in display column order.
pub fn to_csv(matches: &[AnnotatedMatch], include_components: bool) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    if include_components {
        header.extend(Component::ALL.iter().map(|c| c.column()));
    }
    writer.write_record(&header)?;

    for m in matches {
        let r = &m.record;
        let mut row = vec![
            fmt_cell(r.match_score),
            r.property_id.clone(),
            r.location.clone(),
            r.property_type.clone(),
            r.condition.clone(),
            fmt_cell(r.bedrooms),
            fmt_cell(r.bathrooms),
            fmt_cell(r.size),
            fmt_cell(r.year_built),
            fmt_cell(r.price),
            fmt_cell(r.budget_gate),
            m.reason.clone(),
        ];
        if include_components {
            row.extend(Component::ALL.iter().map(|&c| fmt_cell(r.similarity.clamped(c))));
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let bytes = writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

// NaN marks an unknown value; export it as an empty cell.
fn fmt_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
