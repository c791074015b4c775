//! Output formatting utilities

use serde::Serialize;

use costar_core::{GraphStore, Path, PersonId};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// One connection in the report, with names resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub person1: String,
    pub person2: String,
    pub movie: String,
}

/// Outcome of a degrees-of-separation query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeparationReport {
    pub source: String,
    pub target: String,
    /// `None` when the two people are not connected
    pub degrees: Option<usize>,
    pub steps: Vec<StepReport>,
}

fn person_name(store: &GraphStore, id: &PersonId) -> String {
    store
        .person(id)
        .map(|p| p.name.clone())
        .unwrap_or_else(|| id.to_string())
}

impl SeparationReport {
    pub fn new(
        store: &GraphStore,
        source: &PersonId,
        target: &PersonId,
        path: Option<&Path>,
    ) -> Self {
        let steps = match path {
            Some(path) => {
                let mut previous = source;
                path.iter()
                    .map(|step| {
                        let report = StepReport {
                            person1: person_name(store, previous),
                            person2: person_name(store, &step.person),
                            movie: store
                                .movie(&step.movie)
                                .map(|m| m.title.clone())
                                .unwrap_or_else(|| step.movie.to_string()),
                        };
                        previous = &step.person;
                        report
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        Self {
            source: person_name(store, source),
            target: person_name(store, target),
            degrees: path.map(Path::degrees),
            steps,
        }
    }
}

/// Format a report based on format type
pub fn format_report(report: &SeparationReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => match report.degrees {
            None => "Not connected.".to_string(),
            Some(degrees) => {
                let mut lines = vec![format!("{} degrees of separation.", degrees)];
                for (i, step) in report.steps.iter().enumerate() {
                    lines.push(format!(
                        "{}: {} and {} starred in {}",
                        i + 1,
                        step.person1,
                        step.person2,
                        step.movie
                    ));
                }
                lines.join("\n")
            }
        },
    }
}
