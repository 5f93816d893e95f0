//! Static content catalog — the immutable records the page renders.
//!
//! Content is supplied before first render, as TOML: an embedded default
//! ships in the crate, and a file can override it (`--content` in the
//! front end). Malformed records are a construction-time contract
//! violation, rejected by [`Catalog::from_toml_str`]; once built the
//! catalog is never mutated.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

const EMBEDDED: &str = include_str!("content.toml");

/// The six in-page anchors, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    Work,
    Signals,
    Decisions,
    Outcomes,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Profile,
        Section::Work,
        Section::Signals,
        Section::Decisions,
        Section::Outcomes,
        Section::Contact,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::Profile => 0,
            Section::Work => 1,
            Section::Signals => 2,
            Section::Decisions => 3,
            Section::Outcomes => 4,
            Section::Contact => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Work => "Work",
            Section::Signals => "Signals",
            Section::Decisions => "Decisions",
            Section::Outcomes => "Outcomes",
            Section::Contact => "Contact",
        }
    }

    /// Anchor name, matching the page's named in-page anchors.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Work => "work",
            Section::Signals => "signals",
            Section::Decisions => "decisions",
            Section::Outcomes => "outcomes",
            Section::Contact => "contact",
        }
    }

    pub fn next(self) -> Section {
        Section::from_index((self.index() + 1) % Self::ALL.len()).unwrap_or(Section::Profile)
    }

    pub fn prev(self) -> Section {
        Section::from_index((self.index() + Self::ALL.len() - 1) % Self::ALL.len())
            .unwrap_or(Section::Profile)
    }
}

/// Biography block at the top of the page.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub summary: String,
}

/// One project summary in the Work section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub stack: Vec<String>,
}

/// A short working-principle entry in the Signals section.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalRecord {
    pub label: String,
    pub detail: String,
}

/// Before/after percentages attached to a decision record.
#[derive(Debug, Clone, Deserialize)]
pub struct Metric {
    pub label: String,
    pub baseline_pct: u8,
    pub after_pct: u8,
}

/// One Q&A entry in the Decisions section. Records without a metric render
/// only the textual answer.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub metric: Option<Metric>,
}

/// A headline figure in the Outcomes section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeRecord {
    pub figure: String,
    pub caption: String,
}

/// An external one-shot destination — rendered for copying, never followed.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("content is not valid TOML: {0}")]
    Parse(#[from] Box<toml::de::Error>),
    #[error("content has no {0} records")]
    Empty(&'static str),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("metric percentage out of range for decision {id}: {value}")]
    MetricRange { id: String, value: u8 },
}

/// The full content catalog. Immutable after construction.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<ProjectRecord>,
    pub signals: Vec<SignalRecord>,
    pub decisions: Vec<DecisionRecord>,
    pub outcomes: Vec<OutcomeRecord>,
    pub contacts: Vec<ContactLink>,
}

impl Catalog {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(text).map_err(Box::new)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// The catalog compiled into the binary. Covered by a unit test, so a
    /// parse failure here is unreachable in a built crate.
    pub fn embedded() -> Self {
        Self::from_toml_str(EMBEDDED).expect("embedded content.toml is valid")
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.projects.is_empty() {
            return Err(CatalogError::Empty("project"));
        }
        if self.decisions.is_empty() {
            return Err(CatalogError::Empty("decision"));
        }
        if self.contacts.is_empty() {
            return Err(CatalogError::Empty("contact"));
        }
        check_unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        check_unique("decision", self.decisions.iter().map(|d| d.id.as_str()))?;
        for decision in &self.decisions {
            if let Some(metric) = &decision.metric {
                for value in [metric.baseline_pct, metric.after_pct] {
                    if value > 100 {
                        return Err(CatalogError::MetricRange {
                            id: decision.id.clone(),
                            value,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
