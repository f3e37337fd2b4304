//! Hardcoded hosts, events and history shown by the dashboard

use crate::types::{CommandEntry, Connection, ConnectionStatus, LogEntry, Severity};

#[allow(clippy::too_many_arguments)]
fn connection(
    id: &str,
    name: &str,
    ip: &str,
    os: &str,
    status: ConnectionStatus,
    last_seen: &str,
    cpu: u8,
    ram: u8,
    uptime: &str,
) -> Connection {
    Connection {
        id: id.to_string(),
        name: name.to_string(),
        ip: ip.to_string(),
        os: os.to_string(),
        status,
        last_seen: last_seen.to_string(),
        cpu,
        ram,
        uptime: uptime.to_string(),
    }
}

/// The four simulated hosts, in display order
pub fn connections() -> Vec<Connection> {
    use ConnectionStatus::*;

    vec![
        connection(
            "srv-01",
            "Production Server",
            "192.168.1.100",
            "Ubuntu 22.04",
            Online,
            "now",
            34,
            67,
            "45d 12h",
        ),
        connection(
            "srv-02",
            "Dev Machine",
            "192.168.1.101",
            "Windows 11",
            Online,
            "now",
            12,
            45,
            "12d 3h",
        ),
        connection(
            "srv-03",
            "Backup Node",
            "192.168.1.102",
            "Debian 12",
            Idle,
            "5 min ago",
            2,
            23,
            "90d 1h",
        ),
        connection(
            "srv-04",
            "Test Server",
            "10.0.0.50",
            "CentOS 9",
            Offline,
            "2h ago",
            0,
            0,
            "—",
        ),
    ]
}

/// Seed event log, newest first, ids 1..=8
pub fn logs() -> Vec<LogEntry> {
    use Severity::*;

    let seed = [
        ("17:42:01", Success, "[srv-01] Connection established"),
        ("17:42:03", Info, "[srv-01] Session active, ping 12ms"),
        ("17:41:55", Info, "[srv-02] Agent update completed v2.4.1"),
        ("17:41:30", Warning, "[srv-03] High disk usage: 89%"),
        ("17:40:12", Error, "[srv-04] Connection lost — timeout 30s"),
        (
            "17:39:50",
            Info,
            "[srv-01] Command executed: systemctl status nginx",
        ),
        (
            "17:38:22",
            Success,
            "[srv-02] File backup.tar.gz transferred successfully (2.3 GB)",
        ),
        ("17:37:10", Info, "Monitoring system started"),
    ];

    seed.iter()
        .enumerate()
        .map(|(i, (time, severity, message))| LogEntry {
            id: i as u64 + 1,
            ..LogEntry::new(*time, *severity, *message)
        })
        .collect()
}

/// Seed command history, oldest first, ids 1..=2
pub fn commands() -> Vec<CommandEntry> {
    vec![
        CommandEntry {
            id: 1,
            ..CommandEntry::new(
                "systemctl status nginx",
                "● nginx.service - A high performance web server\n   Active: active (running) since Mon 2026-02-10 05:12:33 UTC\n   Main PID: 1234 (nginx)\n   Tasks: 5 (limit: 4915)\n   Memory: 12.4M",
                "17:39:50",
                "srv-01",
            )
        },
        CommandEntry {
            id: 2,
            ..CommandEntry::new(
                "df -h",
                "Filesystem      Size  Used Avail Use% Mounted on\n/dev/sda1        50G   23G   25G  48% /\ntmpfs           2.0G  156M  1.8G   8% /dev/shm",
                "17:40:22",
                "srv-01",
            )
        },
    ]
}
