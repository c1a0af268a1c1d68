#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rmonitorias::models::attendance::Attendance;
use rmonitorias::models::raw_record::RawRecord;
use rmonitorias::utils::date::CalendarDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rmo() -> Command {
    cargo_bin_cmd!("rmonitorias")
}

pub fn day(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).expect("valid test date")
}

/// Attendance rows for `analyst` on March `from..=to`, 2024.
pub fn march_run(analyst: &str, from: u32, to: u32, status: &str) -> Vec<Attendance> {
    (from..=to)
        .map(|d| Attendance::new(analyst, day(2024, 3, d), status))
        .collect()
}

/// Raw CSV-like rows for `analyst` on March `from..=to`, 2024 (DD/MM/YYYY dates).
pub fn raw_march_run(analyst: &str, from: u32, to: u32, team: &str) -> Vec<RawRecord> {
    (from..=to)
        .map(|d| {
            RawRecord::from_pairs([
                ("NOME", analyst.to_string()),
                ("DATA", format!("{:02}/03/2024", d)),
                ("ESCALA", "Escalado".to_string()),
                ("SUB OPERAÇÃO", team.to_string()),
            ])
        })
        .collect()
}

/// Unique path in the temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rmonitorias_{}.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write a report CSV with the usual export headers.
pub fn write_report(name: &str, rows: &[(&str, String, &str, &str)]) -> PathBuf {
    let path = temp_path(name, "csv");
    let mut content = String::from("NOME,DATA,ESCALA,SUB OPERAÇÃO\n");
    for (analyst, date, status, team) in rows {
        content.push_str(&format!("{},{},{},{}\n", analyst, date, status, team));
    }
    fs::write(&path, content).expect("write report");
    path
}

/// Rows for `analyst` working March `from..=to`, 2024.
pub fn report_rows<'a>(
    analyst: &'a str,
    from: u32,
    to: u32,
    team: &'a str,
) -> Vec<(&'a str, String, &'a str, &'a str)> {
    (from..=to)
        .map(|d| (analyst, format!("{:02}/03/2024", d), "escalado", team))
        .collect()
}

/// A config path that does not exist yet, so defaults apply.
pub fn fresh_config(name: &str) -> PathBuf {
    temp_path(name, "conf")
}
