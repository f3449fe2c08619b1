//! WAN side records.

use serde::{Deserialize, Serialize};

use crate::common::lists::{
    wan_ipv4_dnsaddr_entries, wan_ipv6_addr_entries, wan_ipv6_dnsaddr_entries,
};

/// Response of getter function 107.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WanSetting {
    #[serde(rename = "NAPT_mode")]
    pub napt_mode: String,
    #[serde(rename = "WanMAC")]
    pub wan_mac: String,
    #[serde(rename = "wan_ipv6_addr", deserialize_with = "wan_ipv6_addr_entries")]
    pub wan_ipv6_addrs: Vec<String>,
    #[serde(rename = "WanDhcpv6Srv")]
    pub wan_dhcpv6_srv: String,
    #[serde(rename = "ipv6_LeaseTime")]
    pub ipv6_lease_time: String,
    #[serde(rename = "ipv6_LeaseExpire")]
    pub ipv6_lease_expire: String,
    #[serde(rename = "wan_ipv6_dnsaddr", deserialize_with = "wan_ipv6_dnsaddr_entries")]
    pub wan_ipv6_dns_addrs: Vec<String>,
    #[serde(rename = "WanIP")]
    pub wan_ip: String,
    #[serde(rename = "gateway_address")]
    pub gateway_address: String,
    #[serde(rename = "LeaseTime")]
    pub lease_time: String,
    #[serde(rename = "LeaseExpire")]
    pub lease_expire: String,
    #[serde(rename = "wan_ipv4_dnsaddr", deserialize_with = "wan_ipv4_dnsaddr_entries")]
    pub wan_ipv4_dns_addrs: Vec<String>,
    #[serde(rename = "dslite_enable")]
    pub dslite_enable: String,
    #[serde(rename = "dslite_fqdn")]
    pub dslite_fqdn: String,
    #[serde(rename = "dslite_addr")]
    pub dslite_addr: String,
}

/// Response of getter function 124.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ddns {
    #[serde(rename = "Enable")]
    pub enable: String,
    #[serde(rename = "DDNSProvider")]
    pub ddns_provider: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "WanIP")]
    pub wan_ip: String,
}

/// Response of getter function 131. The device sends no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteAccess {}
