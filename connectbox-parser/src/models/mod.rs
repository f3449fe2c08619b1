//! Typed records for getter.xml responses, grouped by device area.
//!
//! Each record maps one getter function code; see [`crate::registry`] for
//! the code table. Fields keep the literal text the device emits unless a
//! conversion is documented on the field.

pub mod docsis;
pub mod firewall;
pub mod lan;
pub mod logs;
pub mod system;
pub mod wan;
pub mod wireless;

pub use docsis::{
    CmState, CmStatus, CmStatusDownstream, CmStatusUpstream, Downstream, DownstreamTable,
    ServiceFlow, Signal, SignalTable, Upstream, UpstreamTable,
};
pub use firewall::{
    Forwarding, IpFiltering, Ipv6Filtering, Ipv6WebFilter, MacFiltering, PortTrigger, UpnpForward,
    WebFilter,
};
pub use lan::{
    BasicDhcp, Dhcpv6Info, EthFlaplist, LanClient, LanSetting, LanUserTable, MtuSize, ReservedAddr,
    WiredPort, WiredState1, WiredState2,
};
pub use logs::{EventLog, EventLogTable, FirewallLog, FirewallLogTable};
pub use system::{
    CmSystemInfo, Configuration, DefaultValue, Fail, GlobalSettings, LangSetList, LoginTimer,
    Multilang, Status,
};
pub use wan::{Ddns, RemoteAccess, WanSetting};
pub use wireless::{
    BssAccessEntry, BssAccessEntry5g, ChannelBand2g, ChannelBand5g, ChannelMap,
    CmWirelessAccessControl, CmWirelessWps1, CmWirelessWps2, GstRandomPassword, GuestInterface2g,
    GuestInterface5g, WifiState, WirelessBasic1, WirelessBasic2, WirelessClient,
    WirelessClientGroup, WirelessClientInfo, WirelessGuestNetwork1, WirelessGuestNetwork2,
    WirelessResetting, WirelessSiteSurvey, WirelessWmm,
};
