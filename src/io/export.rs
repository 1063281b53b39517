use anyhow::Result;
use std::io::Write;

use crate::domain::Receipt;

/// Output formats for receipts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ExportFormat::Text),
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Write a receipt in the requested format.
pub fn export_receipt<W: Write>(receipt: &Receipt, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Text => export_receipt_text(receipt, writer),
        ExportFormat::Json => export_receipt_json(receipt, writer),
        ExportFormat::Csv => export_receipt_csv(receipt, writer),
    }
}

/// Human-readable receipt: one line per item plus a total.
pub fn export_receipt_text<W: Write>(receipt: &Receipt, mut writer: W) -> Result<()> {
    writeln!(writer, "Receipt {}", receipt.id)?;
    writeln!(
        writer,
        "Closed at {}",
        receipt.closed_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(writer, "{:<24} {:>10}", "ITEM", "QTY")?;
    writeln!(writer, "{}", "-".repeat(35))?;
    for line in &receipt.lines {
        writeln!(writer, "{:<24} {:>10}", line.item, line.quantity)?;
    }
    writeln!(writer, "{}", "-".repeat(35))?;
    writeln!(writer, "{:<24} {:>10}", "TOTAL", receipt.total_quantity)?;
    writer.flush()?;
    Ok(())
}

pub fn export_receipt_json<W: Write>(receipt: &Receipt, mut writer: W) -> Result<()> {
    let json = serde_json::to_string_pretty(receipt)?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn export_receipt_csv<W: Write>(receipt: &Receipt, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["item", "quantity"])?;
    for line in &receipt.lines {
        let quantity = line.quantity.to_string();
        csv_writer.write_record([line.item.as_str(), quantity.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
