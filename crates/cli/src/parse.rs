//! ArgMatches → CliAction conversion.
//!
//! Translates clap's parsed arguments into a typed action. Only syntax is
//! checked here; field names are resolved against the entity when the
//! action runs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ArgMatches;

use safetysync_core::{RecordKind, DATE_FORMAT};
use safetysync_dashboard::GridRect;
use safetysync_query::SortDirection;
use safetysync_views::ViewKind;

/// The result of parsing the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum CliAction {
    /// Filter, sort and project a record file.
    Query(QueryArgs),
    /// Employee quick search.
    Search {
        file: PathBuf,
        text: String,
        limit: Option<usize>,
    },
    /// Training status overview.
    TrainingStatus {
        employees: PathBuf,
        certificates: PathBuf,
        as_of: Option<NaiveDate>,
    },
    /// Dashboard layout operation.
    Layout(LayoutOp),
}

/// Arguments of `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryArgs {
    pub entity: RecordKind,
    pub file: PathBuf,
    pub query: String,
    pub filters: Vec<(String, String)>,
    pub sort: Option<(String, SortDirection)>,
    pub view: ViewKind,
    pub group_by: Vec<String>,
    pub limit: Option<usize>,
}

/// Layout subcommands.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutOp {
    Show,
    Toggle(String),
    Move { id: String, rect: GridRect },
    Reset,
    SaveDefault,
    LoadDefault,
}

/// Convert top-level matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    match matches.subcommand() {
        Some(("query", sub)) => parse_query(sub).map(CliAction::Query),
        Some(("search", sub)) => Ok(CliAction::Search {
            file: required_path(sub, "employees")?,
            text: required_str(sub, "text")?.to_string(),
            limit: optional_usize(sub, "limit")?,
        }),
        Some(("training-status", sub)) => Ok(CliAction::TrainingStatus {
            employees: required_path(sub, "employees")?,
            certificates: required_path(sub, "certificates")?,
            as_of: sub
                .get_one::<String>("as-of")
                .map(|s| parse_date(s))
                .transpose()?,
        }),
        Some(("layout", sub)) => parse_layout(sub).map(CliAction::Layout),
        Some((other, _)) => Err(format!("Unknown command: {}", other)),
        None => Err("No command given".to_string()),
    }
}

fn parse_query(sub: &ArgMatches) -> Result<QueryArgs, String> {
    let entity_raw = required_str(sub, "entity")?;
    let entity = RecordKind::from_id(entity_raw)
        .ok_or_else(|| format!("Unknown entity '{}'", entity_raw))?;

    let filters = sub
        .get_many::<String>("filter")
        .into_iter()
        .flatten()
        .map(|raw| parse_filter(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let direction = if sub.get_flag("desc") {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let sort = sub
        .get_one::<String>("sort")
        .map(|field| (field.clone(), direction));

    let view = match sub.get_one::<String>("view") {
        Some(raw) => raw.parse::<ViewKind>().map_err(|e| e.to_string())?,
        None => ViewKind::default(),
    };

    let group_by = sub
        .get_many::<String>("group-by")
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    Ok(QueryArgs {
        entity,
        file: required_path(sub, "file")?,
        query: sub.get_one::<String>("query").cloned().unwrap_or_default(),
        filters,
        sort,
        view,
        group_by,
        limit: optional_usize(sub, "limit")?,
    })
}

fn parse_layout(sub: &ArgMatches) -> Result<LayoutOp, String> {
    match sub.subcommand() {
        Some(("show", _)) => Ok(LayoutOp::Show),
        Some(("toggle", m)) => Ok(LayoutOp::Toggle(required_str(m, "id")?.to_string())),
        Some(("move", m)) => Ok(LayoutOp::Move {
            id: required_str(m, "id")?.to_string(),
            rect: parse_rect(required_str(m, "rect")?)?,
        }),
        Some(("reset", _)) => Ok(LayoutOp::Reset),
        Some(("save-default", _)) => Ok(LayoutOp::SaveDefault),
        Some(("load-default", _)) => Ok(LayoutOp::LoadDefault),
        Some((other, _)) => Err(format!("Unknown layout command: {}", other)),
        None => Err("layout requires a subcommand".to_string()),
    }
}

// =========================================================================
// Value parsers
// =========================================================================

/// Split `field=value`; the value may itself contain `=`.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid filter '{}', expected FIELD=VALUE", raw)),
    }
}

/// Parse `x,y,w,h`.
pub fn parse_rect(raw: &str) -> Result<GridRect, String> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<u32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Invalid rectangle '{}', expected X,Y,W,H", raw))?;
    match parts.as_slice() {
        &[x, y, w, h] => Ok(GridRect::new(x, y, w, h)),
        _ => Err(format!("Invalid rectangle '{}', expected X,Y,W,H", raw)),
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", raw))
}

fn required_str<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    m.get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Missing required argument: {}", name))
}

fn required_path(m: &ArgMatches, name: &str) -> Result<PathBuf, String> {
    required_str(m, name).map(PathBuf::from)
}

fn optional_usize(m: &ArgMatches, name: &str) -> Result<Option<usize>, String> {
    m.get_one::<String>(name)
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("Invalid {} '{}', expected a number", name, s))
        })
        .transpose()
}
