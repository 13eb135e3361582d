use crate::freq::WordCounts;
use anyhow::Result;
use std::io::Write;

/// Word color for the extended schema, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Render as six lower-case hex digits, `rrggbb`, no leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Output configuration: which schema to emit and, for the tagul.com
/// schema, the styling replicated on every row.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub for_tagul: bool,
    pub color: Rgb,
    pub font: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            for_tagul: true,
            color: Rgb { r: 0, g: 0, b: 1 },
            font: "Expressway Regular".to_string(),
        }
    }
}

/// Write the complete frequency report to `out`, words in ascending
/// lexicographic order.
///
/// Header fields are comma separated while data rows are tab separated; the
/// tagul.com importer consumes exactly this shape, so both are load-bearing.
pub fn write_report(out: &mut impl Write, counts: &WordCounts, style: &ReportStyle) -> Result<()> {
    // Static columns appended to every tagul row: color, angle, font, and
    // an empty url field.
    let (header, suffix) = if style.for_tagul {
        (
            "word,weight,color,angle,font,url",
            format!("\t{}\t0\t{}\t", style.color.to_hex(), style.font),
        )
    } else {
        ("word,weight", String::new())
    };

    writeln!(out, "{header}")?;
    let mut words: Vec<(&String, &u64)> = counts.iter().collect();
    words.sort_unstable_by_key(|&(word, _)| word);
    for (word, count) in words {
        writeln!(out, "{word}\t{count}{suffix}")?;
    }
    Ok(())
}
