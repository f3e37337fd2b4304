//! Mock shell: turns submitted text into a canned response.
//!
//! Lookup is an exact, case- and whitespace-sensitive match on the trimmed
//! input. Anything unknown gets a generic reply naming the first token.

use std::collections::HashMap;

use srvctl_core::Connection;

use crate::clock::{Clock, DATE_FORMAT};

/// How a known command produces its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Response {
    Fixed(&'static str),
    /// Derived from the selected connection's display name
    Hostname,
    /// Wall-clock "now"
    Date,
}

const LS_OUTPUT: &str =
    "bin  boot  dev  etc  home  lib  media  mnt  opt  proc  root  run  sbin  srv  sys  tmp  usr  var";

const UPTIME_OUTPUT: &str =
    " 17:42:01 up 45 days, 12:33,  2 users,  load average: 0.34, 0.28, 0.21";

const FREE_OUTPUT: &str = "              total        used        free      shared  buff/cache   available
Mem:          7.8Gi       5.2Gi       0.8Gi       256Mi       1.8Gi       2.1Gi
Swap:         2.0Gi       0.1Gi       1.9Gi";

const TOP_OUTPUT: &str = "top - 17:42:01 up 45 days, 12:33,  2 users,  load average: 0.34
Tasks: 156 total,   1 running, 155 sleeping,   0 stopped
%Cpu(s):  3.4 us,  1.2 sy,  0.0 ni, 95.1 id,  0.3 wa
MiB Mem :   7987.4 total,    812.3 free,   5324.1 used,   1851.0 buff/cache
MiB Swap:   2048.0 total,   1932.8 free,    115.2 used.   2187.3 avail Mem";

/// Fixed command table, built once at startup
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    responses: HashMap<&'static str, Response>,
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandInterpreter {
    pub fn new() -> Self {
        let responses = HashMap::from([
            ("ls", Response::Fixed(LS_OUTPUT)),
            ("whoami", Response::Fixed("root")),
            ("uptime", Response::Fixed(UPTIME_OUTPUT)),
            ("free -h", Response::Fixed(FREE_OUTPUT)),
            ("top -bn1 | head -5", Response::Fixed(TOP_OUTPUT)),
            ("hostname", Response::Hostname),
            ("pwd", Response::Fixed("/root")),
            ("date", Response::Date),
        ]);

        Self { responses }
    }

    /// Produce the output for `command` as if run on `target`.
    ///
    /// `command` must already be trimmed; callers skip blank input entirely.
    pub fn execute(&self, command: &str, target: &Connection, clock: &dyn Clock) -> String {
        match self.responses.get(command) {
            Some(Response::Fixed(text)) => (*text).to_string(),
            Some(Response::Hostname) => target.hostname(),
            Some(Response::Date) => clock.now().format(DATE_FORMAT).to_string(),
            None => fallback(command),
        }
    }
}

/// Reply for commands outside the table
fn fallback(command: &str) -> String {
    let program = command.split_whitespace().next().unwrap_or_default();
    format!("bash: {program}: command executed")
}
