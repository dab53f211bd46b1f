//! Output formatting module

use avia_app::FuelReport;
use avia_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &FuelReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        println!("\nРасчёт топлива");
        println!("==============");

        let rows = report.rows();
        let label_width = rows
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        for (label, value) in rows {
            // Pad by char count; these labels are Cyrillic
            let padding = label_width - label.chars().count();
            println!("{}{}  {}", label, " ".repeat(padding), value);
        }
    }

    Ok(())
}
