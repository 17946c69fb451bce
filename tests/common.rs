#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str =
    "Start;End;Location;Break;Time;Comment;AbsenceName;AbsenceStart;AbsenceEnd;RequiredHours\n";

/// Two past years of data plus a future row that must be ignored.
///
/// Uncapped months: Nov 2020 = 0, Dec 2020 = 5, Jan 2021 = -4, Feb 2021 = 6.
pub const SAMPLE_ROWS: &str = "\
2020-11-02 08:00:00;2020-11-02 18:00:00;Office;0.5;10;;;;;8
2020-11-03 08:00:00;2020-11-03 14:00:00;Office;0;6;;;;;8
2020-12-01 08:00:00;2020-12-01 12:00:00;Office;0;12;;;;;8
2020-12-01 13:00:00;2020-12-01 14:00:00;Office;0;1;;;;;8
2021-01-04 08:00:00;2021-01-04 12:00:00;Home;0;4;;;;;8
2021-02-01 08:00:00;2021-02-01 22:00:00;Office;1;14;Release;;;;8
2099-01-01 08:00:00;2099-01-01 16:00:00;Office;0;8;;;;;8
";

/// Isolated environment: a temporary HOME and a backup file inside it.
pub struct Sandbox {
    pub home: TempDir,
    pub backup: PathBuf,
}

impl Sandbox {
    pub fn with_rows(rows: &str) -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let backup = home.path().join("StempelUhrDataBackup.csv");
        fs::write(&backup, format!("{HEADER}{rows}")).expect("write backup");
        Self { home, backup }
    }

    pub fn sample() -> Self {
        Self::with_rows(SAMPLE_ROWS)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }

    /// Binary pointed at this sandbox, with no outside configuration leaking in.
    pub fn rti(&self) -> Command {
        let mut cmd = rti();
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env("FILE_PATH", &self.backup)
            .env_remove("MONTHLY_COMPENSATED")
            .env_remove("RUST_LOG");
        cmd
    }
}

pub fn rti() -> Command {
    cargo_bin_cmd!("rovertime")
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read output file")
}
