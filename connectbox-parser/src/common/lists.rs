//! Deserializers for the device's wrapped list pattern.
//!
//! Some getters nest a repeated element inside a container element:
//! ```xml
//! <wan_ipv6_addr>
//!   <wan_ipv6_addr_entry>2001:db8::1/128</wan_ipv6_addr_entry>
//!   <wan_ipv6_addr_entry>2001:db8::/64</wan_ipv6_addr_entry>
//! </wan_ipv6_addr>
//! ```
//! The records expose these as a flat `Vec`, so each container gets a
//! `deserialize_with` function that unwraps it. Use together with
//! `#[serde(default)]` so a missing container yields an empty list.

/// Generate a `deserialize_with` function that unwraps
/// `<container><$entry>..</$entry>*</container>`.
macro_rules! wrapped_list {
    ($(#[$meta:meta])* $fn_name:ident, $entry:literal, $item:ty) => {
        $(#[$meta])*
        pub(crate) fn $fn_name<'de, D>(deserializer: D) -> Result<Vec<$item>, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            #[derive(serde::Deserialize)]
            struct Wrapper {
                #[serde(rename = $entry, default)]
                items: Vec<$item>,
            }

            let wrapper = <Wrapper as serde::Deserialize>::deserialize(deserializer)?;
            Ok(wrapper.items)
        }
    };
}

wrapped_list!(
    /// `<wan_ipv6_addr>` → IPv6 addresses with prefix length.
    wan_ipv6_addr_entries,
    "wan_ipv6_addr_entry",
    String
);

wrapped_list!(
    /// `<wan_ipv6_dnsaddr>` → IPv6 DNS servers.
    wan_ipv6_dnsaddr_entries,
    "wan_ipv6_dnsaddr_entry",
    String
);

wrapped_list!(
    /// `<wan_ipv4_dnsaddr>` → IPv4 DNS servers.
    wan_ipv4_dnsaddr_entries,
    "wan_ipv4_dnsaddr_entry",
    String
);

wrapped_list!(
    /// `<Ethernet>` / `<WIFI>` → attached LAN clients.
    client_info_entries,
    "clientinfo",
    crate::models::lan::LanClient
);

#[cfg(test)]
mod tests {
    use crate::common::xml_decode::parse;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(rename = "wan_ipv6_addr", deserialize_with = "super::wan_ipv6_addr_entries")]
        addrs: Vec<String>,
        other: String,
    }

    #[test]
    fn test_wrapped_list_unwraps_entries_in_order() {
        let xml = r#"<root>
            <wan_ipv6_addr>
                <wan_ipv6_addr_entry>b::/64</wan_ipv6_addr_entry>
                <wan_ipv6_addr_entry>a::/64</wan_ipv6_addr_entry>
                <wan_ipv6_addr_entry>a::/64</wan_ipv6_addr_entry>
            </wan_ipv6_addr>
            <other>x</other>
        </root>"#;

        let holder: Holder = parse(xml).unwrap();
        assert_eq!(holder.addrs, vec!["b::/64", "a::/64", "a::/64"]);
        assert_eq!(holder.other, "x");
    }

    #[test]
    fn test_wrapped_list_missing_or_empty_container() {
        let holder: Holder = parse("<root><other>x</other></root>").unwrap();
        assert!(holder.addrs.is_empty());

        let holder: Holder = parse("<root><wan_ipv6_addr></wan_ipv6_addr></root>").unwrap();
        assert!(holder.addrs.is_empty());
    }
}
