//! Connection registry - the fixed list of simulated remote hosts

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::mock;
use crate::types::Connection;

/// Immutable, ordered set of connections with unique ids.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    connections: Vec<Connection>,
}

impl Registry {
    /// Build a registry, rejecting empty lists and duplicate ids
    pub fn new(connections: Vec<Connection>) -> Result<Self> {
        if connections.is_empty() {
            return Err(Error::config("connection registry is empty"));
        }

        let mut seen = HashSet::new();
        for conn in &connections {
            if !seen.insert(conn.id.as_str()) {
                return Err(Error::duplicate_connection(&conn.id));
            }
        }

        Ok(Self { connections })
    }

    /// The built-in mock hosts shown by the dashboard
    pub fn mock() -> Self {
        Self {
            connections: mock::connections(),
        }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    pub fn as_slice(&self) -> &[Connection] {
        &self.connections
    }

    /// Connection at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Connection> {
        self.connections.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.connections.iter().position(|c| c.id == id)
    }

    /// Number of connections counted as "active" (status online)
    pub fn online_count(&self) -> usize {
        self.connections
            .iter()
            .filter(|c| c.status.is_online())
            .count()
    }

    /// Indices of connections that are not offline, in registry order.
    ///
    /// These populate the terminal target selector and the monitoring view.
    pub fn reachable_indices(&self) -> Vec<usize> {
        self.connections
            .iter()
            .enumerate()
            .filter(|(_, c)| c.status.is_reachable())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn reachable(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(|c| c.status.is_reachable())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::mock()
    }
}
