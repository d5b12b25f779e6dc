//! Workspace and record-source integration tests

mod workspace_flow;
