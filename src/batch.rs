//! Sequential batch over the configured images

use std::path::{Path, PathBuf};

use unblack_alpha::{remove_black_background, KeyStats};

/// What happened to one file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Saved(KeyStats),
    Missing,
    Failed(String),
}

/// Outcomes of a run, in list order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub entries: Vec<(PathBuf, FileOutcome)>,
}

impl BatchReport {
    pub fn saved(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Saved(_)))
    }

    pub fn missing(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Missing))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

/// Walks a fixed list of image paths one at a time.
/// No single file can abort the run.
pub struct Batch {
    targets: Vec<PathBuf>,
}

impl Batch {
    pub fn new(targets: Vec<PathBuf>) -> Self {
        Self { targets }
    }

    pub fn run(&self) -> BatchReport {
        let mut report = BatchReport::default();
        for path in &self.targets {
            let outcome = process_file(path);
            report.entries.push((path.clone(), outcome));
        }
        report
    }
}

fn process_file(path: &Path) -> FileOutcome {
    if !path.exists() {
        println!("File not found: {}", path.display());
        return FileOutcome::Missing;
    }

    println!("Processing {}...", path.display());
    match remove_black_background(path) {
        Ok(stats) => {
            println!("Saved {}", path.display());
            FileOutcome::Saved(stats)
        }
        Err(e) => {
            println!("Error processing {}: {}", path.display(), e);
            FileOutcome::Failed(e.to_string())
        }
    }
}
