use serde::{Deserialize, Serialize};

/// Response of getter function 13.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventLogTable {
    #[serde(rename = "eventlog")]
    pub event_logs: Vec<EventLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventLog {
    /// Syslog priority, e.g. `notice`
    #[serde(rename = "prior")]
    pub prior: String,
    #[serde(rename = "text")]
    pub text: String,
    /// Local time as `DD-MM-YYYY HH:MM:SS`
    #[serde(rename = "time")]
    pub time: String,
    /// Unix timestamp of the same event
    #[serde(rename = "t")]
    pub t: String,
}

/// Response of getter function 19.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FirewallLogTable {
    #[serde(rename = "firewalllog")]
    pub firewall_logs: Vec<FirewallLog>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FirewallLog {
    #[serde(rename = "prior")]
    pub prior: String,
    #[serde(rename = "text")]
    pub text: String,
    #[serde(rename = "time")]
    pub time: String,
}
