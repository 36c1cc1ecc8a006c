use std::path::PathBuf;

/// Outcome of one scoring run, for the terminal summary.
#[derive(Debug)]
pub struct RunResult {
    pub input_file: PathBuf,
    /// Written output path; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    /// Subjects that went through the full derivation.
    pub scored: usize,
    /// Input rows dropped before scoring for an entirely missing age.
    pub dropped_missing_age: usize,
    /// Subjects retained in the output with sentinel scores.
    pub flags: Vec<AgeFlag>,
}

impl RunResult {
    /// Rows in the output file.
    pub fn total_subjects(&self) -> usize {
        self.scored + self.flags.len()
    }
}

/// A subject whose age no norm band covers.
#[derive(Debug)]
pub struct AgeFlag {
    pub subject_id: String,
    pub age: String,
}
