//! LAN side records: addressing, DHCP, attached clients, wired ports.

use serde::{Deserialize, Serialize};

use crate::common::lists::client_info_entries;

/// Response of getter function 100.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LanSetting {
    #[serde(rename = "UPnP")]
    pub upnp: String,
    #[serde(rename = "LanMAC")]
    pub lan_mac: String,
    #[serde(rename = "LanIP")]
    pub lan_ip: String,
    #[serde(rename = "DMZaddr")]
    pub dmz_addr: String,
    #[serde(rename = "DMZ")]
    pub dmz: String,
    #[serde(rename = "LanIPv6")]
    pub lan_ipv6: String,
    #[serde(rename = "LanIPv6Prefix")]
    pub lan_ipv6_prefix: String,
    #[serde(rename = "subnetmask")]
    pub subnet_mask: String,
    #[serde(rename = "DHCP_startaddress")]
    pub dhcp_start_address: String,
    #[serde(rename = "DHCP_endaddress")]
    pub dhcp_end_address: String,
}

/// Response of getter function 103.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Dhcpv6Info {
    #[serde(rename = "AllowDHCPv6Setting")]
    pub allow_dhcpv6_setting: String,
    #[serde(rename = "ipv6RAManagedflag")]
    pub ipv6_ra_managed_flag: String,
    #[serde(rename = "ipv6_saddr")]
    pub ipv6_saddr: String,
    #[serde(rename = "ipv6_prefix")]
    pub ipv6_prefix: String,
    #[serde(rename = "NumberOfAddr")]
    pub number_of_addr: String,
    #[serde(rename = "ipv6PrefixPreferredLifeTime")]
    pub ipv6_prefix_preferred_life_time: String,
    #[serde(rename = "ipv6PrefixValidLifeTime")]
    pub ipv6_prefix_valid_life_time: String,
    #[serde(rename = "dhcpV6AddrLifeTime")]
    pub dhcpv6_addr_life_time: String,
    #[serde(rename = "ipv6RALifetime")]
    pub ipv6_ra_lifetime: String,
    #[serde(rename = "ipv6RAIntervaltime")]
    pub ipv6_ra_interval_time: String,
}

/// Response of getter function 105, DHCPv4 server configuration.
///
/// `BlockSubnetIP` and `BlockSubnetMask` are emitted as interleaved pairs;
/// the two lists line up by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BasicDhcp {
    #[serde(rename = "enableDHCPv4")]
    pub enable_dhcpv4: String,
    #[serde(rename = "Addr_start")]
    pub addr_start: String,
    #[serde(rename = "NumberOfCpes")]
    pub number_of_cpes: String,
    /// Lease time in seconds
    #[serde(rename = "LeaseTime")]
    pub lease_time: String,
    #[serde(rename = "LanIP")]
    pub lan_ip: String,
    #[serde(rename = "subnetmask")]
    pub subnet_mask: String,
    #[serde(rename = "ReserveIpadrr")]
    pub reserved_addrs: Vec<ReservedAddr>,
    #[serde(rename = "BlockSubnetIP")]
    pub block_subnet_ip: Vec<String>,
    #[serde(rename = "BlockSubnetMask")]
    pub block_subnet_mask: Vec<String>,
    #[serde(rename = "HideCustomerDhcpLanChange")]
    pub hide_customer_dhcp_lan_change: String,
}

/// Static DHCP lease.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReservedAddr {
    #[serde(rename = "MacAddress")]
    pub mac_address: String,
    #[serde(rename = "LeasedIP")]
    pub leased_ip: String,
}

/// Response of getter function 123.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LanUserTable {
    #[serde(rename = "Ethernet", deserialize_with = "client_info_entries")]
    pub ethernet: Vec<LanClient>,
    #[serde(rename = "WIFI", deserialize_with = "client_info_entries")]
    pub wifi: Vec<LanClient>,
    #[serde(rename = "totalClient")]
    pub total_client: String,
    #[serde(rename = "Customer")]
    pub customer: String,
}

/// A client attached over Ethernet or Wi-Fi.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LanClient {
    /// Port name for wired clients, SSID for wireless ones
    #[serde(rename = "interface")]
    pub interface: String,
    #[serde(rename = "IPv4Addr")]
    pub ipv4_addr: String,
    #[serde(rename = "xmlhostname")]
    pub xml_hostname: String,
    #[serde(rename = "xmlicon")]
    pub xml_icon: String,
    #[serde(rename = "index")]
    pub index: String,
    #[serde(rename = "interfaceid")]
    pub interface_id: String,
    #[serde(rename = "hostname")]
    pub hostname: String,
    #[serde(rename = "MACAddr")]
    pub mac_addr: String,
    #[serde(rename = "method")]
    pub method: String,
    /// Remaining lease as `DD:HH:MM:SS`
    #[serde(rename = "leaseTime")]
    pub lease_time: String,
    /// Link speed in Mbit/s
    #[serde(rename = "speed")]
    pub speed: String,
}

/// Response of getter function 134.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MtuSize {
    #[serde(rename = "size")]
    pub size: String,
}

/// Response of getter function 137.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WiredState1 {
    /// One entry per physical port; unplugged ports are empty
    #[serde(rename = "port")]
    pub ports: Vec<WiredPort>,
    #[serde(rename = "Device")]
    pub device: String,
    #[serde(rename = "ethflaplistFile")]
    pub eth_flaplist_file: String,
}

/// Response of getter function 143.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WiredState2 {
    #[serde(rename = "port")]
    pub ports: Vec<WiredPort>,
    #[serde(rename = "Device")]
    pub device: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WiredPort {
    #[serde(rename = "Eth")]
    pub eth: String,
    #[serde(rename = "Speed")]
    pub speed: String,
}

/// Response of getter function 147.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EthFlaplist {
    #[serde(rename = "ethflaplistFile")]
    pub eth_flaplist_file: String,
}
