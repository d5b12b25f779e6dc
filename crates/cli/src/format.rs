//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): aligned text tables and short status lines
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use safetysync_views::{Grid, ItemList, Summary, View};

use crate::state::Output;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a successful output.
pub fn format_output(output: &Output, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(output)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e)),
        OutputMode::Human => format_human(output),
    }
}

/// Format an error.
pub fn format_error(err: &anyhow::Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{:#}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {:#}", err),
    }
}

fn format_human(output: &Output) -> String {
    match output {
        Output::Records {
            kind,
            total,
            matched,
            view,
        } => {
            let header = format!("{} of {} {} records", matched, total, kind);
            let body = match view {
                View::List(list) => format_list(list),
                View::Grid(grid) => format_grid(grid),
                View::Summary(summary) => format_summary(summary),
            };
            if body.is_empty() {
                header
            } else {
                format!("{}\n{}", header, body)
            }
        }
        Output::SearchHits { total, employees } => {
            let mut lines = vec![format!("{} match(es)", total)];
            lines.extend(
                employees
                    .iter()
                    .map(|e| format!("{}) {} <{}> {}", e.id, e.name, e.email, e.department)),
            );
            if employees.len() < *total {
                lines.push(format!("... {} more", total - employees.len()));
            }
            lines.join("\n")
        }
        Output::Training {
            overview,
            employees,
        } => {
            let mut lines = vec![format!(
                "Training status as of {} ({} employees)",
                overview.as_of, overview.total
            )];
            lines.extend(
                overview
                    .counts
                    .iter()
                    .map(|c| format!("  {:<14} {}", c.status.as_str(), c.count)),
            );
            if !employees.is_empty() {
                lines.push(String::new());
                let rows: Vec<Vec<String>> = employees
                    .iter()
                    .map(|e| vec![e.id.to_string(), e.name.clone(), e.status.to_string()])
                    .collect();
                lines.push(render_table(&["id", "name", "status"], &rows));
            }
            lines.join("\n")
        }
        Output::Layout { widgets } => {
            let rows: Vec<Vec<String>> = widgets
                .iter()
                .map(|w| {
                    vec![
                        w.id.to_string(),
                        w.title.clone(),
                        if w.visible { "shown" } else { "hidden" }.to_string(),
                        format!("{},{},{},{}", w.rect.x, w.rect.y, w.rect.w, w.rect.h),
                    ]
                })
                .collect();
            render_table(&["id", "title", "visible", "x,y,w,h"], &rows)
        }
        Output::Toggled { id, visible } => {
            format!("{} is now {}", id, if *visible { "shown" } else { "hidden" })
        }
        Output::DefaultLoaded { applied } => {
            if *applied {
                "Default layout applied".to_string()
            } else {
                "(nil) no default layout saved".to_string()
            }
        }
        Output::Done { message } => message.clone(),
    }
}

fn format_list(list: &ItemList) -> String {
    list.items
        .iter()
        .map(|item| {
            let mut line = format!("{}) {}", item.id, item.title);
            if let Some(subtitle) = &item.subtitle {
                line.push_str(" | ");
                line.push_str(subtitle);
            }
            if let Some(badge) = &item.badge {
                line.push_str(&format!(" [{}]", badge));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_grid(grid: &Grid) -> String {
    let headers: Vec<&str> = grid.headers.iter().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = grid.rows.iter().map(|r| r.cells.clone()).collect();
    render_table(&headers, &rows)
}

fn format_summary(summary: &Summary) -> String {
    let mut lines = Vec::new();
    for group in &summary.groups {
        lines.push(format!("{}:", group.field));
        if group.counts.is_empty() {
            lines.push("  (empty)".to_string());
        }
        let width = group
            .counts
            .iter()
            .map(|c| c.value.chars().count())
            .max()
            .unwrap_or(0);
        for count in &group.counts {
            lines.push(format!("  {:<width$}  {}", count.value, count.count, width = width));
        }
    }
    lines.join("\n")
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Render a left-aligned text table with a header rule.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut lines = vec![render_row(headers.iter().copied(), &widths)];
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}
