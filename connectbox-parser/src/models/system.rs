//! Device-wide records: global settings, system info, login state.

use serde::{Deserialize, Serialize};

use crate::common::transform::parse_uptime;
use crate::common::xml_decode::{parse, FromXml};
use crate::error::ParseResult;

/// Response of getter function 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Access level of the current session
    #[serde(rename = "AccessLevel")]
    pub access_level: String,
    /// Firmware version, e.g. `CH7465LG-NCIP-6.15.30-1p3-1-NOSH`
    #[serde(rename = "SwVersion")]
    pub sw_version: String,
    #[serde(rename = "CmProvisionMode")]
    pub cm_provision_mode: String,
    #[serde(rename = "DsLite")]
    pub ds_lite: String,
    #[serde(rename = "GwProvisionMode")]
    pub gw_provision_mode: String,
    #[serde(rename = "GWOperMode")]
    pub gw_oper_mode: String,
    #[serde(rename = "ConfigVenderModel")]
    pub config_vender_model: String,
    #[serde(rename = "HideRemoteAccess")]
    pub hide_remote_access: String,
    #[serde(rename = "HideModemMode")]
    pub hide_modem_mode: String,
    #[serde(rename = "HideCustomerDhcpLanChange")]
    pub hide_customer_dhcp_lan_change: String,
    #[serde(rename = "ShowDDNS")]
    pub show_ddns: String,
    /// ISP identifier, e.g. `ZIGGO`
    #[serde(rename = "OperatorId")]
    pub operator_id: String,
    #[serde(rename = "AccessDenied")]
    pub access_denied: String,
    #[serde(rename = "LockedOut")]
    pub locked_out: String,
    #[serde(rename = "CountryID")]
    pub country_id: String,
    #[serde(rename = "title")]
    pub title: String,
    #[serde(rename = "Interface")]
    pub interface: String,
    #[serde(rename = "operStatus")]
    pub oper_status: String,
}

/// Response of getter function 2.
///
/// The device reports uptime as text (`4day(s)16h:30m:35s`); it is converted
/// to seconds after the structural decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CmSystemInfo {
    #[serde(rename = "cm_docsis_mode")]
    pub docsis_mode: String,
    #[serde(rename = "cm_hardware_version")]
    pub hardware_version: String,
    #[serde(rename = "cm_mac_addr")]
    pub mac_addr: String,
    #[serde(rename = "cm_serial_number")]
    pub serial_number: String,
    /// Seconds since the cable modem booted
    #[serde(rename = "cm_system_uptime")]
    pub system_uptime: u64,
    #[serde(rename = "cm_network_access")]
    pub network_access: String,
}

/// Structural shape of [`CmSystemInfo`] before the uptime conversion.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCmSystemInfo {
    cm_docsis_mode: String,
    cm_hardware_version: String,
    cm_mac_addr: String,
    cm_serial_number: String,
    cm_system_uptime: String,
    cm_network_access: String,
}

impl FromXml for CmSystemInfo {
    fn from_xml(xml: &str) -> ParseResult<Self> {
        let raw: RawCmSystemInfo = parse(xml)?;
        Ok(Self {
            system_uptime: parse_uptime(&raw.cm_system_uptime)?,
            docsis_mode: raw.cm_docsis_mode,
            hardware_version: raw.cm_hardware_version,
            mac_addr: raw.cm_mac_addr,
            serial_number: raw.cm_serial_number,
            network_access: raw.cm_network_access,
        })
    }
}

/// Response of getter function 3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Multilang {
    #[serde(rename = "WebCapPor")]
    pub web_cap_por: String,
    #[serde(rename = "Lang")]
    pub lang: String,
}

/// Response of getter function 5, the summary shown on the login page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Status {
    #[serde(rename = "cm_status")]
    pub cm_status: String,
    #[serde(rename = "Bandmode")]
    pub band_mode: String,
    #[serde(rename = "BssEnable2g")]
    pub bss_enable_2g: String,
    #[serde(rename = "SSID2G")]
    pub ssid_2g: String,
    #[serde(rename = "PreSharedKey2gLength")]
    pub pre_shared_key_2g_length: String,
    #[serde(rename = "BssEnable5g")]
    pub bss_enable_5g: String,
    #[serde(rename = "SSID5G")]
    pub ssid_5g: String,
    #[serde(rename = "PreSharedKey5gLength")]
    pub pre_shared_key_5g_length: String,
    /// Number of attached LAN clients
    #[serde(rename = "LanUserCount")]
    pub lan_user_count: String,
}

/// Response of getter function 6.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    #[serde(rename = "FrequencyPlan")]
    pub frequency_plan: String,
    /// Downstream start frequency in Hz
    #[serde(rename = "Frequency")]
    pub frequency: String,
}

/// Response of getter function 21.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LangSetList {
    #[serde(rename = "langSet_support")]
    pub lang_set_support: Vec<String>,
}

/// Response of getter function 22.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Fail {
    /// Failed login attempts since the last successful one
    #[serde(rename = "FailCount")]
    pub fail_count: String,
}

/// Response of getter function 24.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoginTimer {
    #[serde(rename = "Flag")]
    pub flag: String,
    #[serde(rename = "AccessLevel")]
    pub access_level: String,
}

/// Response of getter function 324, the factory defaults printed on the label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultValue {
    #[serde(rename = "loginPwd")]
    pub login_pwd: String,
    #[serde(rename = "WiFiSSID")]
    pub wifi_ssid: String,
    #[serde(rename = "WiFikey")]
    pub wifi_key: String,
}
