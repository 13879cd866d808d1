use std::io::{self, IsTerminal, Write};

use anyhow::{Context, anyhow};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::column::Column;
use crate::config::Config;
use crate::range::DateRange;
use crate::week::WeekInfo;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    json: bool,
}

impl Renderer {
    pub fn new(cfg: &Config, json: bool) -> anyhow::Result<Self> {
        let color_cfg = cfg.get("color").unwrap_or_else(|| "on".to_string());
        let color = match color_cfg.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => true,
            "off" | "no" | "false" | "0" => false,
            other => return Err(anyhow!("invalid color setting: {other}")),
        };

        Ok(Self { color, json })
    }

    #[tracing::instrument(skip(self, columns))]
    pub fn print_columns(&mut self, columns: &[Column]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            return write_json(&mut out, &columns);
        }

        let headers = vec![
            "Key".to_string(),
            "Label".to_string(),
            "Sublabel".to_string(),
            "Start".to_string(),
            "End".to_string(),
            "Days".to_string(),
        ];

        let rows = columns
            .iter()
            .map(|column| {
                let end = column.end.format(DATE_FORMAT).to_string();
                let end = if column.is_clipped() {
                    self.paint(&end, "33")
                } else {
                    end
                };
                vec![
                    self.paint(&column.key, "36"),
                    column.label.clone(),
                    column.sublabel.clone(),
                    column.start.format(DATE_FORMAT).to_string(),
                    end,
                    column
                        .day_labels
                        .as_ref()
                        .map(|days| days.join(" "))
                        .unwrap_or_default(),
                ]
            })
            .collect();

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn print_range(&mut self, range: &DateRange) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            return write_json(&mut out, range);
        }

        writeln!(out, "start     {}", range.start.format(DATE_FORMAT))?;
        writeln!(out, "end       {}", range.end.format(DATE_FORMAT))?;
        writeln!(out, "days      {}", range.len_days())?;
        writeln!(out, "summary   {}", range.summary())?;
        Ok(())
    }

    pub fn print_week_number(&mut self, number: u32) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            return write_json(&mut out, &number);
        }
        writeln!(out, "{number}")?;
        Ok(())
    }

    pub fn print_labels(&mut self, labels: &[String]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            return write_json(&mut out, &labels);
        }
        for label in labels {
            writeln!(out, "{label}")?;
        }
        Ok(())
    }

    #[tracing::instrument(skip(self, weeks))]
    pub fn print_weeks(&mut self, weeks: &[WeekInfo], current: usize) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if self.json {
            return write_json(&mut out, &weeks);
        }

        let headers = vec!["Week".to_string(), "Start".to_string(), "End".to_string()];
        let rows = weeks
            .iter()
            .enumerate()
            .map(|(idx, week)| {
                let label = format!("Week {}", week.number);
                let label = if idx == current {
                    self.paint(&label, "1")
                } else {
                    label
                };
                vec![
                    label,
                    week.start.format(DATE_FORMAT).to_string(),
                    week.end.format(DATE_FORMAT).to_string(),
                ]
            })
            .collect();

        write_table(&mut out, headers, rows)?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color || !io::stdout().is_terminal() {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut writer, value).context("failed to encode JSON output")?;
    writeln!(writer)?;
    Ok(())
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate().take(column_count) {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for (header, width) in headers.iter().zip(&widths) {
        write!(writer, "{:width$} ", header, width = *width)?;
    }
    writeln!(writer)?;

    for width in &widths {
        write!(writer, "{:-<width$} ", "", width = *width)?;
    }
    writeln!(writer)?;

    for row in rows {
        for (cell, width) in row.iter().zip(&widths) {
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = width.saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{strip_ansi, write_json, write_table};

    #[test]
    fn table_pads_to_widest_visible_cell() {
        let mut buf = Vec::new();
        write_table(
            &mut buf,
            vec!["Key".to_string(), "Label".to_string()],
            vec![
                vec!["\x1b[36m2024-01\x1b[0m".to_string(), "January".to_string()],
                vec!["2024-02".to_string(), "February".to_string()],
            ],
        )
        .expect("write table");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Key     Label    ");
        assert_eq!(lines[1], "------- -------- ");
        assert_eq!(strip_ansi(lines[2]), "2024-01 January  ");
        assert_eq!(lines[3], "2024-02 February ");
    }

    #[test]
    fn strip_ansi_removes_escape_sequences() {
        assert_eq!(strip_ansi("\x1b[1mWeek 3\x1b[0m"), "Week 3");
    }

    #[test]
    fn json_output_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &vec!["00:00", "01:00"]).expect("write json");
        let text = String::from_utf8(buf).expect("utf8");
        assert!(text.ends_with("]\n"));
        assert!(text.contains("\"01:00\""));
    }
}
