//! Wi-Fi records (the 300 range of getter functions).
//!
//! The device mixes `2g`/`2G` and `5g`/`5G` suffixes freely; every field is
//! renamed to the tag exactly as emitted.

use serde::{Deserialize, Serialize};

/// Response of getter function 300.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessBasic1 {
    #[serde(rename = "NvCountry")]
    pub nv_country: String,
    #[serde(rename = "Bandmode")]
    pub band_mode: String,
    #[serde(rename = "ChannelRange")]
    pub channel_range: String,
    #[serde(rename = "BssEnable2g")]
    pub bss_enable_2g: String,
    #[serde(rename = "SSID2G")]
    pub ssid_2g: String,
    #[serde(rename = "HideNetwork2G")]
    pub hide_network_2g: String,
    #[serde(rename = "BandWidth2G")]
    pub band_width_2g: String,
    #[serde(rename = "BssCoexistence")]
    pub bss_coexistence: String,
    #[serde(rename = "TransmissionRate2g")]
    pub transmission_rate_2g: String,
    #[serde(rename = "TransmissionMode2g")]
    pub transmission_mode_2g: String,
    #[serde(rename = "SecurityMode2g")]
    pub security_mode_2g: String,
    #[serde(rename = "MulticastRate2G")]
    pub multicast_rate_2g: String,
    #[serde(rename = "ChannelSetting2G")]
    pub channel_setting_2g: String,
    #[serde(rename = "CurrentChannel2G")]
    pub current_channel_2g: String,
    #[serde(rename = "PreSharedKey2g")]
    pub pre_shared_key_2g: String,
    #[serde(rename = "GroupRekeyInterval2g")]
    pub group_rekey_interval_2g: String,
    #[serde(rename = "WpaAlgorithm2G")]
    pub wpa_algorithm_2g: String,
    #[serde(rename = "SONAdminStatus")]
    pub son_admin_status: String,
    #[serde(rename = "SONOperationalStatus")]
    pub son_operational_status: String,
    #[serde(rename = "BssEnable5g")]
    pub bss_enable_5g: String,
    #[serde(rename = "SSID5G")]
    pub ssid_5g: String,
    #[serde(rename = "HideNetwork5G")]
    pub hide_network_5g: String,
    #[serde(rename = "BandWidth5G")]
    pub band_width_5g: String,
    #[serde(rename = "TransmissionRate5g")]
    pub transmission_rate_5g: String,
    #[serde(rename = "TransmissionMode5g")]
    pub transmission_mode_5g: String,
    #[serde(rename = "SecurityMode5g")]
    pub security_mode_5g: String,
    #[serde(rename = "MulticastRate5G")]
    pub multicast_rate_5g: String,
    #[serde(rename = "ChannelSetting5G")]
    pub channel_setting_5g: String,
    #[serde(rename = "CurrentChannel5G")]
    pub current_channel_5g: String,
    #[serde(rename = "PreSharedKey5g")]
    pub pre_shared_key_5g: String,
    #[serde(rename = "GroupRekeyInterval5g")]
    pub group_rekey_interval_5g: String,
    #[serde(rename = "WpaAlgorithm5G")]
    pub wpa_algorithm_5g: String,
}

/// Response of getter function 302.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessWmm {
    #[serde(rename = "WMM2G")]
    pub wmm_2g: String,
    #[serde(rename = "Apsd2G")]
    pub apsd_2g: String,
    #[serde(rename = "TransmissionMode2g")]
    pub transmission_mode_2g: String,
    #[serde(rename = "WMM5G")]
    pub wmm_5g: String,
    #[serde(rename = "Apsd5G")]
    pub apsd_5g: String,
    #[serde(rename = "TransmissionMode5g")]
    pub transmission_mode_5g: String,
}

/// Response of getter function 305.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessSiteSurvey {
    #[serde(rename = "count2G")]
    pub count_2g: String,
    #[serde(rename = "count5G")]
    pub count_5g: String,
    #[serde(rename = "BandMode_2_4G")]
    pub band_mode_2_4g: String,
    #[serde(rename = "BandMode_5G")]
    pub band_mode_5g: String,
}

/// Response of getter function 307.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessGuestNetwork1 {
    #[serde(rename = "MainEnable2G")]
    pub main_enable_2g: String,
    #[serde(rename = "MainEnable5G")]
    pub main_enable_5g: String,
    #[serde(rename = "Interface")]
    pub interfaces: Vec<GuestInterface2g>,
    #[serde(rename = "Interface5G")]
    pub interfaces_5g: Vec<GuestInterface5g>,
}

/// 2.4 GHz guest network. `main_enable_2g` is only sent by function 317.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GuestInterface2g {
    #[serde(rename = "MainEnable2G")]
    pub main_enable_2g: String,
    #[serde(rename = "Enable2G")]
    pub enable_2g: String,
    #[serde(rename = "BSSID2G")]
    pub bssid_2g: String,
    #[serde(rename = "GuestMac2G")]
    pub guest_mac_2g: String,
    #[serde(rename = "HideNetwork2G")]
    pub hide_network_2g: String,
    #[serde(rename = "SecurityMode2g")]
    pub security_mode_2g: String,
    #[serde(rename = "PreSharedKey2g")]
    pub pre_shared_key_2g: String,
    #[serde(rename = "GroupRekeyInterval2g")]
    pub group_rekey_interval_2g: String,
    #[serde(rename = "WpaAlgorithm2G")]
    pub wpa_algorithm_2g: String,
}

/// 5 GHz guest network. `main_enable_5g` is only sent by function 317.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GuestInterface5g {
    #[serde(rename = "MainEnable5G")]
    pub main_enable_5g: String,
    #[serde(rename = "Enable5G")]
    pub enable_5g: String,
    #[serde(rename = "BSSID5G")]
    pub bssid_5g: String,
    #[serde(rename = "GuestMac5G")]
    pub guest_mac_5g: String,
    #[serde(rename = "HideNetwork5G")]
    pub hide_network_5g: String,
    #[serde(rename = "SecurityMode5g")]
    pub security_mode_5g: String,
    #[serde(rename = "PreSharedKey5g")]
    pub pre_shared_key_5g: String,
    #[serde(rename = "GroupRekeyInterval5g")]
    pub group_rekey_interval_5g: String,
    #[serde(rename = "WpaAlgorithm5G")]
    pub wpa_algorithm_5g: String,
}

/// Response of getter function 309.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CmWirelessWps1 {
    #[serde(rename = "MainEnable2g")]
    pub main_enable_2g: String,
    #[serde(rename = "MainEnable5g")]
    pub main_enable_5g: String,
    #[serde(rename = "WpsEnable24G")]
    pub wps_enable_24g: String,
    #[serde(rename = "WpsEnable5G")]
    pub wps_enable_5g: String,
    #[serde(rename = "WpsMethod24G")]
    pub wps_method_24g: String,
    #[serde(rename = "WpsMethod5G")]
    pub wps_method_5g: String,
    #[serde(rename = "WpsAPPIN24G")]
    pub wps_ap_pin_24g: String,
    #[serde(rename = "WpsAPPIN5G")]
    pub wps_ap_pin_5g: String,
    #[serde(rename = "WpsPINNUM24G")]
    pub wps_pin_num_24g: String,
    #[serde(rename = "WpsPINNUM5G")]
    pub wps_pin_num_5g: String,
    #[serde(rename = "WpsEnablePBC")]
    pub wps_enable_pbc: String,
    #[serde(rename = "WpsEnablePIN")]
    pub wps_enable_pin: String,
    #[serde(rename = "WpsEnablePBC5G")]
    pub wps_enable_pbc_5g: String,
    #[serde(rename = "WpsEnablePIN5G")]
    pub wps_enable_pin_5g: String,
}

/// Response of getter function 311.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CmWirelessAccessControl {
    #[serde(rename = "BandMode")]
    pub band_mode: String,
    #[serde(rename = "BssEnable2g")]
    pub bss_enable_2g: String,
    #[serde(rename = "BssEnable5g")]
    pub bss_enable_5g: String,
    #[serde(rename = "SSID2G")]
    pub ssid_2g: String,
    #[serde(rename = "SSID5G")]
    pub ssid_5g: String,
    #[serde(rename = "HideNetwork2G")]
    pub hide_network_2g: String,
    #[serde(rename = "HideNetwork5G")]
    pub hide_network_5g: String,
    #[serde(rename = "SecurityMode2g")]
    pub security_mode_2g: String,
    #[serde(rename = "SecurityMode5g")]
    pub security_mode_5g: String,
    #[serde(rename = "PreSharedKey2g")]
    pub pre_shared_key_2g: String,
    #[serde(rename = "PreSharedKey5g")]
    pub pre_shared_key_5g: String,
    #[serde(rename = "WpaAlgorithm2G")]
    pub wpa_algorithm_2g: String,
    #[serde(rename = "WpaAlgorithm5G")]
    pub wpa_algorithm_5g: String,
    #[serde(rename = "AccessMode24G")]
    pub access_mode_24g: String,
    #[serde(rename = "AccessMode5G")]
    pub access_mode_5g: String,
    #[serde(rename = "BssAccessEntry")]
    pub access_entries: Vec<BssAccessEntry>,
    #[serde(rename = "BssAccessEntry5G")]
    pub access_entries_5g: Vec<BssAccessEntry5g>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BssAccessEntry {
    /// Station MAC address
    #[serde(rename = "AccessStation")]
    pub access_station: String,
    #[serde(rename = "AccessDeviceName")]
    pub access_device_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BssAccessEntry5g {
    #[serde(rename = "AccessStation5G")]
    pub access_station_5g: String,
    #[serde(rename = "AccessDeviceName5G")]
    pub access_device_name_5g: String,
}

/// Response of getter function 313, per-channel occupancy seen by the radios.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelMap {
    #[serde(rename = "count2G")]
    pub count_2g: String,
    #[serde(rename = "MyCurrentChannel2G")]
    pub my_current_channel_2g: String,
    #[serde(rename = "count5G")]
    pub count_5g: String,
    #[serde(rename = "MyCurrentChannel5G")]
    pub my_current_channel_5g: String,
    #[serde(rename = "BandMode_2_4G")]
    pub band_mode_2_4g: ChannelBand2g,
    #[serde(rename = "BandMode_5G")]
    pub band_mode_5g: ChannelBand5g,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelBand2g {
    #[serde(rename = "W2GCH1")]
    pub ch1: String,
    #[serde(rename = "W2GCH2")]
    pub ch2: String,
    #[serde(rename = "W2GCH3")]
    pub ch3: String,
    #[serde(rename = "W2GCH4")]
    pub ch4: String,
    #[serde(rename = "W2GCH5")]
    pub ch5: String,
    #[serde(rename = "W2GCH6")]
    pub ch6: String,
    #[serde(rename = "W2GCH7")]
    pub ch7: String,
    #[serde(rename = "W2GCH8")]
    pub ch8: String,
    #[serde(rename = "W2GCH9")]
    pub ch9: String,
    #[serde(rename = "W2GCH10")]
    pub ch10: String,
    #[serde(rename = "W2GCH11")]
    pub ch11: String,
    #[serde(rename = "W2GCH12")]
    pub ch12: String,
    #[serde(rename = "W2GCH13")]
    pub ch13: String,
    #[serde(rename = "maxaxis2G")]
    pub max_axis: String,
    #[serde(rename = "total2g")]
    pub total: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelBand5g {
    #[serde(rename = "W5GCH1")]
    pub ch1: String,
    #[serde(rename = "W5GCH2")]
    pub ch2: String,
    #[serde(rename = "W5GCH3")]
    pub ch3: String,
    #[serde(rename = "W5GCH4")]
    pub ch4: String,
    #[serde(rename = "W5GCH5")]
    pub ch5: String,
    #[serde(rename = "W5GCH6")]
    pub ch6: String,
    #[serde(rename = "W5GCH7")]
    pub ch7: String,
    #[serde(rename = "W5GCH8")]
    pub ch8: String,
    #[serde(rename = "W5GCH9")]
    pub ch9: String,
    #[serde(rename = "W5GCH10")]
    pub ch10: String,
    #[serde(rename = "W5GCH11")]
    pub ch11: String,
    #[serde(rename = "W5GCH12")]
    pub ch12: String,
    #[serde(rename = "W5GCH13")]
    pub ch13: String,
    #[serde(rename = "W5GCH14")]
    pub ch14: String,
    #[serde(rename = "W5GCH15")]
    pub ch15: String,
    #[serde(rename = "W5GCH16")]
    pub ch16: String,
    #[serde(rename = "W5GCH17")]
    pub ch17: String,
    #[serde(rename = "W5GCH18")]
    pub ch18: String,
    #[serde(rename = "W5GCH19")]
    pub ch19: String,
    #[serde(rename = "maxaxis5G")]
    pub max_axis: String,
    #[serde(rename = "total5g")]
    pub total: String,
}

/// Response of getter function 315.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessBasic2 {
    #[serde(rename = "Bandmode")]
    pub band_mode: String,
    #[serde(rename = "BssEnable2g")]
    pub bss_enable_2g: String,
    #[serde(rename = "BssEnable5g")]
    pub bss_enable_5g: String,
    #[serde(rename = "WiFi_chip_status")]
    pub wifi_chip_status: String,
    #[serde(rename = "cm_status")]
    pub cm_status: String,
}

/// Response of getter function 317. Unlike function 307 each band is a
/// single element, and the schedule is reported alongside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessGuestNetwork2 {
    #[serde(rename = "year")]
    pub year: String,
    /// Month; the device spells the tag `mouth`
    #[serde(rename = "mouth")]
    pub month: String,
    #[serde(rename = "day")]
    pub day: String,
    #[serde(rename = "hour")]
    pub hour: String,
    #[serde(rename = "minute")]
    pub minute: String,
    #[serde(rename = "Interface")]
    pub interface: GuestInterface2g,
    #[serde(rename = "Interface5G")]
    pub interface_5g: GuestInterface5g,
}

/// Response of getter function 322.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessClient {
    #[serde(rename = "Client2G")]
    pub client_2g: Vec<WirelessClientGroup>,
    #[serde(rename = "Client5G")]
    pub client_5g: Vec<WirelessClientGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessClientGroup {
    #[serde(rename = "clientinfo")]
    pub clients: Vec<WirelessClientInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessClientInfo {
    #[serde(rename = "SSID")]
    pub ssid: String,
    #[serde(rename = "MAC")]
    pub mac: String,
    /// Transmit PHY rate in bit/s
    #[serde(rename = "phy_rate_tx")]
    pub phy_rate_tx: String,
    #[serde(rename = "phy_rate_rx")]
    pub phy_rate_rx: String,
    #[serde(rename = "phy_mode")]
    pub phy_mode: String,
    #[serde(rename = "Auth_mode")]
    pub auth_mode: String,
    #[serde(rename = "RSSI")]
    pub rssi: String,
    #[serde(rename = "EncryptMethod")]
    pub encrypt_method: String,
}

/// Response of getter function 323.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CmWirelessWps2 {
    #[serde(rename = "WPS_stat")]
    pub wps_stat: String,
    #[serde(rename = "WPS_result")]
    pub wps_result: String,
}

/// Response of getter function 325.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GstRandomPassword {
    #[serde(rename = "PreSharedKey")]
    pub pre_shared_key: String,
}

/// Response of getter function 326.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WifiState {
    #[serde(rename = "primary24g")]
    pub primary_24g: String,
    #[serde(rename = "primary5g")]
    pub primary_5g: String,
}

/// Response of getter function 328.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WirelessResetting {
    #[serde(rename = "isWirelessResetting")]
    pub is_wireless_resetting: String,
}
