//! The function-code table.
//!
//! Every operation on the device is multiplexed through `getter.xml` or
//! `setter.xml` by a numeric function code. The `functions!` table below is
//! the single place that binds a code to its record type; the [`Function`]
//! enum, the [`Getter`] impls, the [`Record`] enum and [`decode`] are all
//! generated from it.

use std::fmt;

use serde::Serialize;

use crate::common::xml_decode::FromXml;
use crate::error::{ParseError, ParseResult};
use crate::models::*;

/// A record type bound to the getter function code that produces it.
pub trait Getter: FromXml {
    const FUNCTION: Function;
}

macro_rules! functions {
    (
        getters { $($getter:ident = $gcode:literal,)* }
        setters { $($(#[$smeta:meta])* $setter:ident = $scode:literal,)* }
    ) => {
        /// A function code understood by the device.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Function {
            $($getter,)*
            $($(#[$smeta])* $setter,)*
        }

        impl Function {
            /// All getter functions, in table order.
            pub const GETTERS: &'static [Function] = &[$(Function::$getter,)*];

            /// The numeric code sent as the `fun` form field.
            pub fn code(self) -> &'static str {
                match self {
                    $(Function::$getter => $gcode,)*
                    $(Function::$setter => $scode,)*
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($gcode => Some(Function::$getter),)*
                    $($scode => Some(Function::$setter),)*
                    _ => None,
                }
            }

            /// Whether the function is read through `getter.xml` and has a record.
            pub fn is_getter(self) -> bool {
                matches!(self, $(Function::$getter)|*)
            }
        }

        $(
            impl Getter for $getter {
                const FUNCTION: Function = Function::$getter;
            }
        )*

        /// A decoded getter response of any kind.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub enum Record {
            $($getter($getter),)*
        }

        impl Record {
            /// The function this record answers.
            pub fn function(&self) -> Function {
                match self {
                    $(Record::$getter(_) => Function::$getter,)*
                }
            }
        }

        /// Decode a getter response body into the record bound to `function`.
        ///
        /// Setter functions have no record and yield [`ParseError::NoDecoder`].
        pub fn decode(function: Function, xml: &str) -> ParseResult<Record> {
            match function {
                $(Function::$getter => <$getter as FromXml>::from_xml(xml).map(Record::$getter),)*
                other => Err(ParseError::NoDecoder(other.code().to_string())),
            }
        }
    };
}

functions! {
    getters {
        GlobalSettings = "1",
        CmSystemInfo = "2",
        Multilang = "3",
        Status = "5",
        Configuration = "6",
        DownstreamTable = "10",
        UpstreamTable = "11",
        SignalTable = "12",
        EventLogTable = "13",
        FirewallLogTable = "19",
        LangSetList = "21",
        Fail = "22",
        LoginTimer = "24",
        LanSetting = "100",
        Dhcpv6Info = "103",
        BasicDhcp = "105",
        WanSetting = "107",
        IpFiltering = "109",
        Ipv6Filtering = "111",
        PortTrigger = "113",
        WebFilter = "115",
        Ipv6WebFilter = "117",
        MacFiltering = "119",
        Forwarding = "121",
        LanUserTable = "123",
        Ddns = "124",
        RemoteAccess = "131",
        MtuSize = "134",
        CmState = "136",
        WiredState1 = "137",
        WiredState2 = "143",
        CmStatus = "144",
        EthFlaplist = "147",
        WirelessBasic1 = "300",
        WirelessWmm = "302",
        WirelessSiteSurvey = "305",
        WirelessGuestNetwork1 = "307",
        CmWirelessWps1 = "309",
        CmWirelessAccessControl = "311",
        ChannelMap = "313",
        WirelessBasic2 = "315",
        WirelessGuestNetwork2 = "317",
        WirelessClient = "322",
        CmWirelessWps2 = "323",
        DefaultValue = "324",
        GstRandomPassword = "325",
        WifiState = "326",
        WirelessResetting = "328",
    }
    setters {
        /// Posted to `setter.xml` with `Username` and `Password`.
        Login = "15",
        /// Posted to `setter.xml` with no arguments.
        Logout = "16",
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
