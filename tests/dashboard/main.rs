//! Dashboard layout integration tests

mod layout_persistence;
