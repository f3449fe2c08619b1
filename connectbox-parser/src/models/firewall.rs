//! Filtering and forwarding records.

use serde::{Deserialize, Serialize};

/// Response of getter function 109.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IpFiltering {
    #[serde(rename = "LanIP")]
    pub lan_ip: String,
    #[serde(rename = "subnetmask")]
    pub subnet_mask: String,
    #[serde(rename = "time_mode")]
    pub time_mode: String,
    #[serde(rename = "GeneralTime")]
    pub general_time: String,
    #[serde(rename = "DailyTime")]
    pub daily_time: String,
}

/// Response of getter function 111.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ipv6Filtering {
    #[serde(rename = "ipv6_prefix")]
    pub ipv6_prefix: String,
    #[serde(rename = "dir")]
    pub dir: String,
    #[serde(rename = "time_mode")]
    pub time_mode: String,
    #[serde(rename = "GeneralTime")]
    pub general_time: String,
    #[serde(rename = "DailyTime")]
    pub daily_time: String,
}

/// Response of getter function 113. The device sends no fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PortTrigger {}

/// Response of getter function 115.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WebFilter {
    #[serde(rename = "firewallProtection")]
    pub firewall_protection: String,
    #[serde(rename = "blockIpFragments")]
    pub block_ip_fragments: String,
    #[serde(rename = "portScanDetection")]
    pub port_scan_detection: String,
    #[serde(rename = "synFloodDetection")]
    pub syn_flood_detection: String,
    #[serde(rename = "IcmpFloodDetection")]
    pub icmp_flood_detection: String,
    #[serde(rename = "IcmpFloodDetectRate")]
    pub icmp_flood_detect_rate: String,
}

/// Response of getter function 117.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Ipv6WebFilter {
    #[serde(rename = "IPv6firewallProtection")]
    pub firewall_protection: String,
    #[serde(rename = "IPv6blockIpFragments")]
    pub block_ip_fragments: String,
    #[serde(rename = "IPv6portScanDetection")]
    pub port_scan_detection: String,
    #[serde(rename = "IPv6synFloodDetection")]
    pub syn_flood_detection: String,
    #[serde(rename = "IPv6IcmpFloodDetection")]
    pub icmp_flood_detection: String,
    #[serde(rename = "IPv6IcmpFloodDetectRate")]
    pub icmp_flood_detect_rate: String,
}

/// Response of getter function 119.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MacFiltering {
    #[serde(rename = "maxInstance")]
    pub max_instance: String,
    #[serde(rename = "time_mode")]
    pub time_mode: String,
    #[serde(rename = "GeneralTime")]
    pub general_time: String,
    #[serde(rename = "DailyTime")]
    pub daily_time: String,
}

/// Response of getter function 121.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Forwarding {
    #[serde(rename = "LanIP")]
    pub lan_ip: String,
    #[serde(rename = "subnetmask")]
    pub subnet_mask: String,
    /// Rules created over UPnP by LAN clients
    #[serde(rename = "UPnP")]
    pub upnp: Vec<UpnpForward>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpnpForward {
    #[serde(rename = "LanIPAddr")]
    pub lan_ip_addr: String,
    #[serde(rename = "LanPort")]
    pub lan_port: String,
    #[serde(rename = "WanPort")]
    pub wan_port: String,
    #[serde(rename = "Protocol")]
    pub protocol: String,
    #[serde(rename = "Description")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::xml_decode::parse;

    #[test]
    fn test_port_trigger_self_closing() {
        let trigger: PortTrigger =
            parse(r#"<?xml version="1.0" encoding="utf-8"?><PortTrigger />"#).unwrap();
        assert_eq!(trigger, PortTrigger {});
    }

    #[test]
    fn test_web_filter() {
        let xml = r#"<WebFilter>
                <firewallProtection>1</firewallProtection>
                <blockIpFragments>2</blockIpFragments>
                <portScanDetection>3</portScanDetection>
                <synFloodDetection>4</synFloodDetection>
                <IcmpFloodDetection>5</IcmpFloodDetection>
                <IcmpFloodDetectRate>6</IcmpFloodDetectRate>
            </WebFilter>"#;

        let filter: WebFilter = parse(xml).unwrap();
        assert_eq!(
            filter,
            WebFilter {
                firewall_protection: "1".into(),
                block_ip_fragments: "2".into(),
                port_scan_detection: "3".into(),
                syn_flood_detection: "4".into(),
                icmp_flood_detection: "5".into(),
                icmp_flood_detect_rate: "6".into(),
            }
        );
    }

    #[test]
    fn test_ipv6_web_filter_prefixed_tags() {
        let xml = r#"<IPv6WebFilter>
                <IPv6firewallProtection>1</IPv6firewallProtection>
                <IPv6IcmpFloodDetectRate>15</IPv6IcmpFloodDetectRate>
            </IPv6WebFilter>"#;

        let filter: Ipv6WebFilter = parse(xml).unwrap();
        assert_eq!(filter.firewall_protection, "1");
        assert_eq!(filter.icmp_flood_detect_rate, "15");
        assert_eq!(filter.port_scan_detection, "");
    }

    #[test]
    fn test_forwarding_upnp_rules() {
        let xml = r#"<Forwarding>
                <LanIP>192.168.178.1</LanIP>
                <subnetmask>255.255.255.0</subnetmask>
                <UPnP>
                    <LanIPAddr>192.168.178.20</LanIPAddr>
                    <LanPort>51413</LanPort>
                    <WanPort>51413</WanPort>
                    <Protocol>TCP</Protocol>
                    <Description>Transmission</Description>
                </UPnP>
                <UPnP>
                    <LanIPAddr>192.168.178.21</LanIPAddr>
                    <LanPort>3074</LanPort>
                    <WanPort>3074</WanPort>
                    <Protocol>UDP</Protocol>
                    <Description>console</Description>
                </UPnP>
            </Forwarding>"#;

        let forwarding: Forwarding = parse(xml).unwrap();
        assert_eq!(forwarding.lan_ip, "192.168.178.1");
        assert_eq!(forwarding.upnp.len(), 2);
        assert_eq!(forwarding.upnp[1].protocol, "UDP");
        assert_eq!(forwarding.upnp[1].description, "console");
    }
}
