//! Core domain types for Server Control

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Connections
// ─────────────────────────────────────────────────────────────────────────────

/// Reachability of a remote host as shown in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Online,
    Offline,
    Idle,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Online => "online",
            ConnectionStatus::Offline => "offline",
            ConnectionStatus::Idle => "idle",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, ConnectionStatus::Online)
    }

    /// Offline hosts are hidden from the terminal target selector and monitoring
    pub fn is_reachable(&self) -> bool {
        !matches!(self, ConnectionStatus::Offline)
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Load classification used to color CPU/RAM/disk readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadLevel {
    Normal,
    Elevated,
    Critical,
}

impl LoadLevel {
    /// CPU: above 70% is critical, above 40% elevated
    pub fn for_cpu(percent: u8) -> Self {
        match percent {
            p if p > 70 => LoadLevel::Critical,
            p if p > 40 => LoadLevel::Elevated,
            _ => LoadLevel::Normal,
        }
    }

    /// RAM: above 80% is critical, above 50% elevated
    pub fn for_ram(percent: u8) -> Self {
        match percent {
            p if p > 80 => LoadLevel::Critical,
            p if p > 50 => LoadLevel::Elevated,
            _ => LoadLevel::Normal,
        }
    }
}

/// A simulated remote host.
///
/// Readings are fixed numbers captured when the registry was built; nothing
/// samples them at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub ip: String,
    pub os: String,
    pub status: ConnectionStatus,
    /// Human-readable "last seen" text ("now", "5 min ago")
    pub last_seen: String,
    /// CPU usage percentage (0-100)
    pub cpu: u8,
    /// RAM usage percentage (0-100)
    pub ram: u8,
    /// Uptime text ("45d 12h")
    pub uptime: String,
}

impl Connection {
    /// Hostname derived from the display name: lowercased, every whitespace
    /// character replaced by `-`
    pub fn hostname(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_whitespace() { '-' } else { c })
            .collect()
    }

    /// Disk usage is not reported by the hosts; it is derived from CPU load
    pub fn disk_percent(&self) -> u8 {
        (f64::from(self.cpu) * 1.3 + 20.0).round().min(100.0) as u8
    }

    pub fn cpu_level(&self) -> LoadLevel {
        LoadLevel::for_cpu(self.cpu)
    }

    pub fn ram_level(&self) -> LoadLevel {
        LoadLevel::for_ram(self.ram)
    }

    /// Label for the terminal target selector, e.g. `Dev Machine (192.168.1.101)`
    pub fn selector_label(&self) -> String {
        format!("{} ({})", self.name, self.ip)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session feed entries
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of an event log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single event log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Sequential id assigned by the feed
    pub id: u64,
    /// Wall-clock time as `HH:MM:SS`
    pub time: String,
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    /// Create an entry with an unassigned id (the feed assigns it on record)
    pub fn new(time: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            time: time.into(),
            severity,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// One submitted terminal command with its canned response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandEntry {
    /// Sequential id assigned by the feed
    pub id: u64,
    /// Input exactly as typed
    pub input: String,
    pub output: String,
    /// Wall-clock time as `HH:MM:SS`
    pub time: String,
    /// Id of the connection the command was sent to
    pub host: String,
}

impl CommandEntry {
    /// Create an entry with an unassigned id (the feed assigns it on record)
    pub fn new(
        input: impl Into<String>,
        output: impl Into<String>,
        time: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            input: input.into(),
            output: output.into(),
            time: time.into(),
            host: host.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn(name: &str, cpu: u8, ram: u8) -> Connection {
        Connection {
            id: "srv-x".to_string(),
            name: name.to_string(),
            ip: "127.0.0.1".to_string(),
            os: "Linux".to_string(),
            status: ConnectionStatus::Online,
            last_seen: "now".to_string(),
            cpu,
            ram,
            uptime: "1d".to_string(),
        }
    }

    #[test]
    fn test_hostname_lowercases_and_hyphenates() {
        assert_eq!(
            conn("Production Server", 0, 0).hostname(),
            "production-server"
        );
    }

    #[test]
    fn test_hostname_replaces_each_whitespace_char() {
        assert_eq!(conn("Dev  Box\tOne", 0, 0).hostname(), "dev--box-one");
    }

    #[test]
    fn test_disk_percent_derived_from_cpu() {
        assert_eq!(conn("a", 34, 0).disk_percent(), 64); // 44.2 + 20
        assert_eq!(conn("a", 12, 0).disk_percent(), 36); // 15.6 + 20
        assert_eq!(conn("a", 2, 0).disk_percent(), 23); // 2.6 + 20
        assert_eq!(conn("a", 0, 0).disk_percent(), 20);
    }

    #[test]
    fn test_disk_percent_clamped() {
        assert_eq!(conn("a", 100, 0).disk_percent(), 100);
    }

    #[test]
    fn test_cpu_load_levels() {
        assert_eq!(LoadLevel::for_cpu(40), LoadLevel::Normal);
        assert_eq!(LoadLevel::for_cpu(41), LoadLevel::Elevated);
        assert_eq!(LoadLevel::for_cpu(70), LoadLevel::Elevated);
        assert_eq!(LoadLevel::for_cpu(71), LoadLevel::Critical);
    }

    #[test]
    fn test_ram_load_levels() {
        assert_eq!(LoadLevel::for_ram(50), LoadLevel::Normal);
        assert_eq!(LoadLevel::for_ram(67), LoadLevel::Elevated);
        assert_eq!(LoadLevel::for_ram(80), LoadLevel::Elevated);
        assert_eq!(LoadLevel::for_ram(81), LoadLevel::Critical);
    }

    #[test]
    fn test_status_reachability() {
        assert!(ConnectionStatus::Online.is_reachable());
        assert!(ConnectionStatus::Idle.is_reachable());
        assert!(!ConnectionStatus::Offline.is_reachable());
        assert!(ConnectionStatus::Online.is_online());
        assert!(!ConnectionStatus::Idle.is_online());
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_new_entries_have_unassigned_id() {
        assert_eq!(LogEntry::new("10:00:00", Severity::Info, "x").id, 0);
        assert_eq!(CommandEntry::new("ls", "out", "10:00:00", "srv-01").id, 0);
    }
}
