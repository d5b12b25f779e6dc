//! Session wrapper around a lazily opened workspace.
//!
//! Executes parsed actions and returns a typed `Output` for the formatter.
//! Record files are read fresh on every call. Only layout commands open the
//! workspace, which creates the data directory. Query, search and training
//! status read `safetysync.toml` if present and never write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use safetysync_core::{
    Certificate, Document, Employee, Record, RecordId, RecordKind, SupportTicket, TrainingSession,
};
use safetysync_dashboard::WidgetDescriptor;
use safetysync_engine::{
    load_collection, JsonFileSource, QuickSearch, RecordCollection, SafetySyncConfig, Workspace,
    CONFIG_FILE_NAME,
};
use safetysync_query::{run_query_limited, FilterState, Selector, SortSpec};
use safetysync_views::{
    training_status, training_status_summary, CertificateIndex, Presentation, TrainingOverview,
    TrainingStatus, TrainingStatusRule, View,
};
use tracing::debug;

use crate::parse::{CliAction, LayoutOp, QueryArgs};

/// Result of one executed action.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "kebab-case")]
pub enum Output {
    /// Projected query result.
    Records {
        kind: RecordKind,
        total: usize,
        matched: usize,
        #[serde(flatten)]
        view: View,
    },
    /// Quick-search hits.
    SearchHits {
        total: usize,
        employees: Vec<SearchHit>,
    },
    /// Training status overview plus one row per employee.
    Training {
        #[serde(flatten)]
        overview: TrainingOverview,
        employees: Vec<EmployeeStatusRow>,
    },
    /// Current widget layout.
    Layout { widgets: Vec<WidgetDescriptor> },
    /// Widget visibility after a toggle.
    Toggled { id: String, visible: bool },
    /// Whether a saved default was applied.
    DefaultLoaded { applied: bool },
    /// Plain acknowledgement.
    Done { message: String },
}

/// One quick-search hit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub department: String,
}

/// Training status of one employee.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeStatusRow {
    pub id: RecordId,
    pub name: String,
    pub status: TrainingStatus,
}

/// Data directory plus the workspace, once opened.
pub struct SessionState {
    data_dir: PathBuf,
    workspace: Option<Workspace>,
}

impl SessionState {
    /// Create a session for `data_dir` without touching the filesystem.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            workspace: None,
        }
    }

    /// Execute one action.
    pub fn execute(&mut self, action: CliAction) -> Result<Output> {
        match action {
            CliAction::Query(args) => run_query_action(&args),
            CliAction::Search { file, text, limit } => {
                let search = match limit {
                    Some(n) => QuickSearch::with_limit(n),
                    None => self.config()?.quick_search(),
                };
                self.search(&file, &text, search)
            }
            CliAction::TrainingStatus {
                employees,
                certificates,
                as_of,
            } => {
                let as_of = as_of.unwrap_or_else(|| chrono::Local::now().date_naive());
                let rule = self.config()?.training_rule();
                self.training(&employees, &certificates, &rule, as_of)
            }
            CliAction::Layout(op) => self.layout(op),
        }
    }

    /// Settings for read-only commands.
    fn config(&self) -> Result<SafetySyncConfig> {
        if let Some(workspace) = &self.workspace {
            return Ok(workspace.config().clone());
        }
        let path = self.data_dir.join(CONFIG_FILE_NAME);
        debug!(path = %path.display(), "reading settings without opening workspace");
        SafetySyncConfig::load_if_present(&path)
            .with_context(|| format!("Failed to read settings from '{}'", path.display()))
    }

    /// The workspace, opened (and created) on first use.
    fn workspace(&mut self) -> Result<&Workspace> {
        let workspace = match self.workspace.take() {
            Some(workspace) => workspace,
            None => Workspace::open(&self.data_dir).with_context(|| {
                format!("Failed to open workspace '{}'", self.data_dir.display())
            })?,
        };
        Ok(&*self.workspace.insert(workspace))
    }

    fn search(&self, file: &Path, text: &str, search: QuickSearch) -> Result<Output> {
        let roster: RecordCollection<Employee> = read_records(file)?;
        let hits = search.search(roster.as_slice(), text);
        Ok(Output::SearchHits {
            total: hits.total,
            employees: hits
                .employees
                .iter()
                .map(|e| SearchHit {
                    id: e.id.clone(),
                    name: e.name.clone(),
                    email: e.email.clone(),
                    department: e.department.clone(),
                })
                .collect(),
        })
    }

    fn training(
        &self,
        employees: &Path,
        certificates: &Path,
        rule: &TrainingStatusRule,
        as_of: NaiveDate,
    ) -> Result<Output> {
        let roster: RecordCollection<Employee> = read_records(employees)?;
        let certs: RecordCollection<Certificate> = read_records(certificates)?;
        let index = CertificateIndex::build(certs.as_slice());

        let refs: Vec<&Employee> = roster.iter().collect();
        let overview = training_status_summary(&refs, &index, rule, as_of);
        let rows = roster
            .iter()
            .map(|e| EmployeeStatusRow {
                id: e.id.clone(),
                name: e.name.clone(),
                status: training_status(e, &index, rule, as_of),
            })
            .collect();
        Ok(Output::Training {
            overview,
            employees: rows,
        })
    }

    fn layout(&mut self, op: LayoutOp) -> Result<Output> {
        let mut layout = self.workspace()?.layout();
        debug!(?op, "applying layout operation");
        let output = match op {
            LayoutOp::Show => Output::Layout {
                widgets: layout.widgets().to_vec(),
            },
            LayoutOp::Toggle(id) => {
                let visible = layout.toggle(&id)?;
                Output::Toggled { id, visible }
            }
            LayoutOp::Move { id, rect } => {
                layout.move_widget(&id, rect)?;
                Output::Done {
                    message: format!("Moved {} to {}", id, rect),
                }
            }
            LayoutOp::Reset => {
                layout.reset_to_factory()?;
                Output::Done {
                    message: "Layout reset to factory default".to_string(),
                }
            }
            LayoutOp::SaveDefault => {
                layout.save_as_default()?;
                Output::Done {
                    message: "Current layout saved as default".to_string(),
                }
            }
            LayoutOp::LoadDefault => Output::DefaultLoaded {
                applied: layout.load_default()?,
            },
        };
        Ok(output)
    }
}

fn run_query_action(args: &QueryArgs) -> Result<Output> {
    match args.entity {
        RecordKind::Employee => query_records::<Employee>(args),
        RecordKind::Certificate => query_records::<Certificate>(args),
        RecordKind::TrainingSession => query_records::<TrainingSession>(args),
        RecordKind::Document => query_records::<Document>(args),
        RecordKind::SupportTicket => query_records::<SupportTicket>(args),
    }
}

fn query_records<R>(args: &QueryArgs) -> Result<Output>
where
    R: Presentation + DeserializeOwned,
{
    let collection: RecordCollection<R> = read_records(&args.file)?;

    let mut state = FilterState::new().with_query(args.query.as_str());
    for (name, value) in &args.filters {
        state.set_selector(R::parse_field(name)?, Selector::parse(value));
    }
    if let Some((name, direction)) = &args.sort {
        state.set_sort(Some(SortSpec::new(R::parse_field(name)?, *direction)));
    }
    let group_by = args
        .group_by
        .iter()
        .map(|name| R::parse_field(name))
        .collect::<safetysync_core::Result<Vec<_>>>()?;

    let result = run_query_limited(collection.as_slice(), &state, args.limit);
    let view = R::project_view(args.view, &result.records, &group_by);
    Ok(Output::Records {
        kind: R::KIND,
        total: result.total,
        matched: result.matched,
        view,
    })
}

fn read_records<R>(path: &Path) -> Result<RecordCollection<R>>
where
    R: Record + DeserializeOwned,
{
    load_collection(&JsonFileSource::new(path))
        .with_context(|| format!("Failed to load {} records from '{}'", R::KIND, path.display()))
}
