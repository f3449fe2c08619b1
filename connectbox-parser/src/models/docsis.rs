//! Cable modem (DOCSIS) records: channel tables, provisioning state and
//! hardware temperatures.

use serde::{Deserialize, Serialize};

use crate::common::lists::wan_ipv6_addr_entries;
use crate::common::transform::fahrenheit_to_celsius;
use crate::common::xml_decode::{parse, FromXml};
use crate::error::ParseResult;

/// Response of getter function 10.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DownstreamTable {
    #[serde(rename = "ds_num")]
    pub ds_num: String,
    #[serde(rename = "downstream")]
    pub downstreams: Vec<Downstream>,
}

/// One bonded downstream channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Downstream {
    /// Center frequency in Hz
    #[serde(rename = "freq")]
    pub freq: String,
    /// Power level in dBmV
    #[serde(rename = "pow")]
    pub pow: String,
    #[serde(rename = "snr")]
    pub snr: String,
    #[serde(rename = "mod")]
    pub modulation: String,
    #[serde(rename = "chid")]
    pub chid: String,
    #[serde(rename = "RxMER")]
    pub rx_mer: String,
    #[serde(rename = "PreRs")]
    pub pre_rs: String,
    #[serde(rename = "PostRs")]
    pub post_rs: String,
    #[serde(rename = "IsQamLocked")]
    pub is_qam_locked: String,
    #[serde(rename = "IsFECLocked")]
    pub is_fec_locked: String,
    #[serde(rename = "IsMpegLocked")]
    pub is_mpeg_locked: String,
}

/// Response of getter function 11.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamTable {
    #[serde(rename = "us_num")]
    pub us_num: String,
    #[serde(rename = "upstream")]
    pub upstreams: Vec<Upstream>,
}

/// One bonded upstream channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Upstream {
    #[serde(rename = "usid")]
    pub usid: String,
    #[serde(rename = "freq")]
    pub freq: String,
    #[serde(rename = "power")]
    pub power: String,
    #[serde(rename = "srate")]
    pub srate: String,
    #[serde(rename = "mod")]
    pub modulation: String,
    #[serde(rename = "ustype")]
    pub us_type: String,
    #[serde(rename = "t1Timeouts")]
    pub t1_timeouts: String,
    #[serde(rename = "t2Timeouts")]
    pub t2_timeouts: String,
    #[serde(rename = "t3Timeouts")]
    pub t3_timeouts: String,
    #[serde(rename = "t4Timeouts")]
    pub t4_timeouts: String,
    #[serde(rename = "channeltype")]
    pub channel_type: String,
    #[serde(rename = "messageType")]
    pub message_type: String,
}

/// Response of getter function 12, codeword error counters per downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalTable {
    #[serde(rename = "sig_num")]
    pub sig_num: String,
    #[serde(rename = "signal")]
    pub signals: Vec<Signal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Signal {
    #[serde(rename = "dsid")]
    pub dsid: String,
    #[serde(rename = "unerrored")]
    pub unerrored: String,
    #[serde(rename = "correctable")]
    pub correctable: String,
    #[serde(rename = "uncorrectable")]
    pub uncorrectable: String,
}

/// Response of getter function 136.
///
/// Both temperatures arrive in Fahrenheit and are stored in Celsius.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CmState {
    /// Tuner temperature, °C
    #[serde(rename = "TunnerTemperature")]
    pub tuner_temperature: i32,
    /// Board temperature, °C
    #[serde(rename = "Temperature")]
    pub temperature: i32,
    #[serde(rename = "OperState")]
    pub oper_state: String,
    #[serde(rename = "wan_ipv4_addr")]
    pub wan_ipv4_addr: String,
    #[serde(rename = "wan_ipv6_addr")]
    pub wan_ipv6_addrs: Vec<String>,
}

/// Structural shape of [`CmState`], temperatures still in Fahrenheit.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCmState {
    // The firmware spells it "Tunner".
    #[serde(rename = "TunnerTemperature")]
    tuner_temperature: i32,
    #[serde(rename = "Temperature")]
    temperature: i32,
    #[serde(rename = "OperState")]
    oper_state: String,
    #[serde(rename = "wan_ipv4_addr")]
    wan_ipv4_addr: String,
    #[serde(rename = "wan_ipv6_addr", deserialize_with = "wan_ipv6_addr_entries")]
    wan_ipv6_addrs: Vec<String>,
}

impl FromXml for CmState {
    fn from_xml(xml: &str) -> ParseResult<Self> {
        let raw: RawCmState = parse(xml)?;
        Ok(Self {
            tuner_temperature: fahrenheit_to_celsius(raw.tuner_temperature),
            temperature: fahrenheit_to_celsius(raw.temperature),
            oper_state: raw.oper_state,
            wan_ipv4_addr: raw.wan_ipv4_addr,
            wan_ipv6_addrs: raw.wan_ipv6_addrs,
        })
    }
}

/// Response of getter function 144, provisioning overview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CmStatus {
    #[serde(rename = "provisioning_st")]
    pub provisioning_st: String,
    #[serde(rename = "provisioning_st_num")]
    pub provisioning_st_num: String,
    #[serde(rename = "cm_comment")]
    pub cm_comment: String,
    #[serde(rename = "ds_num")]
    pub ds_num: String,
    #[serde(rename = "downstream")]
    pub downstreams: Vec<CmStatusDownstream>,
    #[serde(rename = "us_num")]
    pub us_num: String,
    #[serde(rename = "upstream")]
    pub upstreams: Vec<CmStatusUpstream>,
    #[serde(rename = "cm_docsis_mode")]
    pub cm_docsis_mode: String,
    #[serde(rename = "cm_network_access")]
    pub cm_network_access: String,
    #[serde(rename = "NumberOfCpes")]
    pub number_of_cpes: String,
    #[serde(rename = "dMaxCpes")]
    pub d_max_cpes: String,
    #[serde(rename = "bpiEnable")]
    pub bpi_enable: String,
    /// Name of the provisioned config file
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "serviceflow")]
    pub service_flows: Vec<ServiceFlow>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CmStatusDownstream {
    #[serde(rename = "freq")]
    pub freq: String,
    #[serde(rename = "mod")]
    pub modulation: String,
    #[serde(rename = "chid")]
    pub chid: String,
    #[serde(rename = "state")]
    pub state: String,
    #[serde(rename = "status")]
    pub status: String,
    #[serde(rename = "primarySettings")]
    pub primary_settings: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CmStatusUpstream {
    #[serde(rename = "usid")]
    pub usid: String,
    #[serde(rename = "freq")]
    pub freq: String,
    #[serde(rename = "power")]
    pub power: String,
    #[serde(rename = "srate")]
    pub srate: String,
    #[serde(rename = "state")]
    pub state: String,
}

/// A provisioned DOCSIS service flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceFlow {
    #[serde(rename = "Sfid")]
    pub sfid: String,
    #[serde(rename = "direction")]
    pub direction: String,
    #[serde(rename = "pMaxTrafficRate")]
    pub max_traffic_rate: String,
    #[serde(rename = "pMaxTrafficBurst")]
    pub max_traffic_burst: String,
    #[serde(rename = "pMinReservedRate")]
    pub min_reserved_rate: String,
    #[serde(rename = "pMaxConcatBurst")]
    pub max_concat_burst: String,
    #[serde(rename = "pSchedulingType")]
    pub scheduling_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_downstream_table() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <downstream_table>
                <ds_num>30</ds_num>
                <downstream>
                    <freq>826000000</freq>
                    <pow>6</pow>
                    <snr>38</snr>
                    <mod>256qam</mod>
                    <chid>32</chid>
                    <RxMER>38.701</RxMER>
                    <PreRs>13810000000</PreRs>
                    <PostRs>500</PostRs>
                    <IsQamLocked>1</IsQamLocked>
                    <IsFECLocked>1</IsFECLocked>
                    <IsMpegLocked>1</IsMpegLocked>
                </downstream>
                <downstream>
                    <freq>754000000</freq>
                    <pow>7</pow>
                    <snr>38</snr>
                    <mod>256qam</mod>
                    <chid>23</chid>
                    <RxMER>38.701</RxMER>
                    <PreRs>13810000000</PreRs>
                    <PostRs>392</PostRs>
                    <IsQamLocked>1</IsQamLocked>
                    <IsFECLocked>1</IsFECLocked>
                    <IsMpegLocked>1</IsMpegLocked>
                </downstream>
            </downstream_table>"#;

        let table: DownstreamTable = parse(xml).unwrap();
        assert_eq!(table.ds_num, "30");
        assert_eq!(table.downstreams.len(), 2);
        assert_eq!(
            table.downstreams[0],
            Downstream {
                freq: "826000000".into(),
                pow: "6".into(),
                snr: "38".into(),
                modulation: "256qam".into(),
                chid: "32".into(),
                rx_mer: "38.701".into(),
                pre_rs: "13810000000".into(),
                post_rs: "500".into(),
                is_qam_locked: "1".into(),
                is_fec_locked: "1".into(),
                is_mpeg_locked: "1".into(),
            }
        );
        assert_eq!(table.downstreams[1].chid, "23");
        assert_eq!(table.downstreams[1].post_rs, "392");
    }

    #[test]
    fn test_upstream_table_single_channel() {
        let xml = r#"<upstream_table>
                <us_num>1</us_num>
                <upstream>
                    <usid>1</usid>
                    <freq>50200000</freq>
                    <power>44</power>
                    <srate>5.120</srate>
                    <mod>64qam</mod>
                    <ustype>3</ustype>
                    <t1Timeouts>0</t1Timeouts>
                    <t2Timeouts>0</t2Timeouts>
                    <t3Timeouts>2</t3Timeouts>
                    <t4Timeouts>0</t4Timeouts>
                    <channeltype>ATDMA</channeltype>
                    <messageType>29</messageType>
                </upstream>
            </upstream_table>"#;

        let table: UpstreamTable = parse(xml).unwrap();
        assert_eq!(table.upstreams.len(), 1);
        assert_eq!(table.upstreams[0].modulation, "64qam");
        assert_eq!(table.upstreams[0].t3_timeouts, "2");
        assert_eq!(table.upstreams[0].channel_type, "ATDMA");
    }

    #[test]
    fn test_signal_table_empty() {
        let table: SignalTable =
            parse("<signal_table><sig_num>0</sig_num></signal_table>").unwrap();
        assert_eq!(table.sig_num, "0");
        assert!(table.signals.is_empty());
    }

    #[test]
    fn test_cm_state_converts_temperatures() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <cmstate>
                <TunnerTemperature>80</TunnerTemperature>
                <Temperature>59</Temperature>
                <OperState>OPERATIONAL</OperState>
                <wan_ipv4_addr>10.0.0.1</wan_ipv4_addr>
                <wan_ipv6_addr>
                    <wan_ipv6_addr_entry>bbbb:aaaa:0:5555:4444:3333:2222:0000/128</wan_ipv6_addr_entry>
                    <wan_ipv6_addr_entry>bbbb::6a02:5555:feee:3333/64</wan_ipv6_addr_entry>
                </wan_ipv6_addr>
            </cmstate>"#;

        let state = CmState::from_xml(xml).unwrap();
        assert_eq!(
            state,
            CmState {
                tuner_temperature: 26,
                temperature: 15,
                oper_state: "OPERATIONAL".into(),
                wan_ipv4_addr: "10.0.0.1".into(),
                wan_ipv6_addrs: vec![
                    "bbbb:aaaa:0:5555:4444:3333:2222:0000/128".into(),
                    "bbbb::6a02:5555:feee:3333/64".into(),
                ],
            }
        );
    }

    #[test]
    fn test_cm_state_non_numeric_temperature() {
        let xml = "<cmstate><Temperature>hot</Temperature></cmstate>";
        let err = CmState::from_xml(xml).unwrap_err();
        assert!(matches!(err, ParseError::XmlDeserializationFailed(_)));
    }

    #[test]
    fn test_cm_status() {
        let xml = r#"<cmstatus>
                <provisioning_st>Online</provisioning_st>
                <provisioning_st_num>12</provisioning_st_num>
                <cm_comment>Operational</cm_comment>
                <ds_num>2</ds_num>
                <downstream>
                    <freq>682000000</freq>
                    <mod>256qam</mod>
                    <chid>14</chid>
                    <state>3</state>
                    <status>Locked</status>
                    <primarySettings>1</primarySettings>
                </downstream>
                <downstream>
                    <freq>690000000</freq>
                    <mod>256qam</mod>
                    <chid>15</chid>
                    <state>3</state>
                    <status>Locked</status>
                    <primarySettings>0</primarySettings>
                </downstream>
                <us_num>1</us_num>
                <upstream>
                    <usid>1</usid>
                    <freq>50200000</freq>
                    <power>44</power>
                    <srate>5.120</srate>
                    <state>Locked</state>
                </upstream>
                <cm_docsis_mode>DOCSIS 3.0</cm_docsis_mode>
                <cm_network_access>Allowed</cm_network_access>
                <NumberOfCpes>1</NumberOfCpes>
                <dMaxCpes>1</dMaxCpes>
                <bpiEnable>1</bpiEnable>
                <FileName>nl-ziggo.cfg</FileName>
                <serviceflow>
                    <Sfid>1</Sfid>
                    <direction>2</direction>
                    <pMaxTrafficRate>440000000</pMaxTrafficRate>
                    <pMaxTrafficBurst>42600</pMaxTrafficBurst>
                    <pMinReservedRate>0</pMinReservedRate>
                    <pMaxConcatBurst>42600</pMaxConcatBurst>
                    <pSchedulingType>2</pSchedulingType>
                </serviceflow>
                <serviceflow>
                    <Sfid>2</Sfid>
                    <direction>1</direction>
                    <pMaxTrafficRate>44000000</pMaxTrafficRate>
                    <pMaxTrafficBurst>42600</pMaxTrafficBurst>
                    <pMinReservedRate>0</pMinReservedRate>
                    <pMaxConcatBurst>42600</pMaxConcatBurst>
                    <pSchedulingType>2</pSchedulingType>
                </serviceflow>
            </cmstatus>"#;

        let status: CmStatus = parse(xml).unwrap();
        assert_eq!(status.provisioning_st, "Online");
        assert_eq!(status.downstreams.len(), 2);
        assert_eq!(status.downstreams[1].primary_settings, "0");
        assert_eq!(status.upstreams.len(), 1);
        assert_eq!(status.upstreams[0].state, "Locked");
        assert_eq!(status.file_name, "nl-ziggo.cfg");
        let sfids: Vec<_> = status.service_flows.iter().map(|f| f.sfid.as_str()).collect();
        assert_eq!(sfids, ["1", "2"]);
        assert_eq!(status.service_flows[0].max_traffic_rate, "440000000");
    }
}
