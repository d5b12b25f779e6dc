//! Clap command tree definition.
//!
//! Builds the full `clap::Command` tree for the `safetysync` binary.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("safetysync")
        .about("Search, summarize and lay out SafetySync compliance records")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Workspace directory (default: .safetysync)")
                .global(true),
        )
        .subcommand(build_query())
        .subcommand(build_search())
        .subcommand(build_training_status())
        .subcommand(build_layout())
}

// =========================================================================
// Query
// =========================================================================

fn build_query() -> Command {
    Command::new("query")
        .about("Filter, sort and project a record file")
        .arg(
            Arg::new("entity")
                .required(true)
                .value_name("ENTITY")
                .help("employees, certificates, training, documents or tickets"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .required(true)
                .value_name("PATH")
                .help("JSON array of records"),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .short('q')
                .value_name("TEXT")
                .help("Case-insensitive substring search"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .value_name("FIELD=VALUE")
                .action(ArgAction::Append)
                .help("Exact match on a field; 'all' disables it (repeatable)"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .short('s')
                .value_name("FIELD")
                .help("Sort by field"),
        )
        .arg(
            Arg::new("desc")
                .long("desc")
                .action(ArgAction::SetTrue)
                .requires("sort")
                .help("Sort descending"),
        )
        .arg(
            Arg::new("view")
                .long("view")
                .value_name("VIEW")
                .default_value("list")
                .help("list, grid or summary"),
        )
        .arg(
            Arg::new("group-by")
                .long("group-by")
                .value_name("FIELD")
                .action(ArgAction::Append)
                .help("Summary grouping field (repeatable)"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('n')
                .value_name("N")
                .help("Return at most N records"),
        )
}

// =========================================================================
// Quick search
// =========================================================================

fn build_search() -> Command {
    Command::new("search")
        .about("Employee quick search, names ascending")
        .arg(Arg::new("text").required(true).help("Search text"))
        .arg(
            Arg::new("employees")
                .long("employees")
                .required(true)
                .value_name("PATH")
                .help("JSON array of employees"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('n')
                .value_name("N")
                .help("Maximum results (default: quick_search_limit from config)"),
        )
}

// =========================================================================
// Training status
// =========================================================================

fn build_training_status() -> Command {
    Command::new("training-status")
        .about("Derive each employee's training status from certificates")
        .arg(
            Arg::new("employees")
                .long("employees")
                .required(true)
                .value_name("PATH")
                .help("JSON array of employees"),
        )
        .arg(
            Arg::new("certificates")
                .long("certificates")
                .required(true)
                .value_name("PATH")
                .help("JSON array of certificates"),
        )
        .arg(
            Arg::new("as-of")
                .long("as-of")
                .value_name("YYYY-MM-DD")
                .help("Evaluation date (default: today)"),
        )
}

// =========================================================================
// Layout
// =========================================================================

fn build_layout() -> Command {
    Command::new("layout")
        .about("Admin dashboard widget layout")
        .subcommand_required(true)
        .subcommand(Command::new("show").about("List widgets with visibility and placement"))
        .subcommand(
            Command::new("toggle")
                .about("Show or hide one widget")
                .arg(Arg::new("id").required(true).help("Widget id")),
        )
        .subcommand(
            Command::new("move")
                .about("Move or resize one widget")
                .arg(Arg::new("id").required(true).help("Widget id"))
                .arg(
                    Arg::new("rect")
                        .required(true)
                        .value_name("X,Y,W,H")
                        .help("Grid rectangle"),
                ),
        )
        .subcommand(Command::new("reset").about("Restore the factory layout"))
        .subcommand(Command::new("save-default").about("Save the current layout as default"))
        .subcommand(Command::new("load-default").about("Apply the saved default layout"))
}
