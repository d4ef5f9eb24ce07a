//! Special-use IPv4 range detection and RFC classification.
//!
//! Membership ([`is_special`]) and labelling ([`classify`]) are separate
//! tests and can disagree: `239.1.0.0/16` lies inside the multicast block
//! yet only `239.x.x.x/32` networks get the multicast label.

use crate::config::REPO_URL;
use crate::models::Ipv4;
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Reserved blocks a network must fall inside to count as special (RFC 3330).
pub const SPECIAL_RANGES: [(Ipv4Addr, u8, &str); 6] = [
    (Ipv4Addr::new(0, 0, 0, 0), 8, "this-network"),
    (Ipv4Addr::new(127, 0, 0, 0), 8, "loopback"),
    (Ipv4Addr::new(169, 254, 0, 0), 16, "link-local"),
    (Ipv4Addr::new(224, 0, 0, 0), 4, "multicast"),
    (Ipv4Addr::new(240, 0, 0, 0), 4, "reserved"),
    (Ipv4Addr::new(255, 255, 255, 255), 32, "broadcast"),
];

/// RFC category attached to a special network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Unspecified,
    Loopback,
    LinkLocal,
    Multicast,
    Reserved,
    Broadcast,
}

impl Classification {
    pub fn rfc(&self) -> u16 {
        match self {
            Classification::Unspecified => 1122,
            Classification::Loopback => 3330,
            Classification::LinkLocal => 3927,
            Classification::Multicast => 5771,
            Classification::Reserved => 3330,
            Classification::Broadcast => 919,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Classification::Unspecified => "Unspecified",
            Classification::Loopback => "Loopback",
            Classification::LinkLocal => "Link-local",
            Classification::Multicast => "Multicast",
            Classification::Reserved => "Reserved",
            Classification::Broadcast => "Broadcast",
        }
    }

    fn anchor(&self) -> &'static str {
        match self {
            Classification::Unspecified => "rfc-1122---unspecified-addresses",
            Classification::Loopback => "rfc-3330---loopback-addresses",
            Classification::LinkLocal => "rfc-3927---link-local-addresses",
            Classification::Multicast => "rfc-5771---multicast-addresses",
            Classification::Reserved => "rfc-3330---reserved-addresses",
            Classification::Broadcast => "rfc-919---broadcast-address",
        }
    }

    /// Short label, e.g. `RFC 3330 Loopback`.
    pub fn label(&self) -> String {
        format!("RFC {} {}", self.rfc(), self.name())
    }

    /// Documentation link for this category.
    pub fn url(&self) -> String {
        format!("{REPO_URL}/blob/main/docs/RFC.md#{}", self.anchor())
    }

    /// Label followed by the documentation link in parentheses.
    pub fn comment(&self) -> String {
        format!("{} ({})", self.label(), self.url())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.comment())
    }
}

/// True when `network` is fully contained in one of [`SPECIAL_RANGES`].
pub fn is_special(network: &Ipv4) -> bool {
    SPECIAL_RANGES.iter().any(|(addr, prefix, _)| {
        Ipv4::from_parts(*addr, *prefix)
            .map(|special| network.subnet_of(&special))
            .unwrap_or(false)
    })
}

/// Label a network by its network address, first matching rule wins.
pub fn classify(network: &Ipv4) -> Option<Classification> {
    let prefix = network.mask();
    let net = network.lo();
    let [a, b, ..] = net.octets();

    if net == Ipv4Addr::UNSPECIFIED && prefix == 8 {
        Some(Classification::Unspecified)
    } else if a == 127 {
        Some(Classification::Loopback)
    } else if a == 169 && b == 254 {
        Some(Classification::LinkLocal)
    } else if a == 224 || (a == 239 && prefix == 32) {
        Some(Classification::Multicast)
    } else if a == 240 {
        Some(Classification::Reserved)
    } else if net == Ipv4Addr::BROADCAST {
        Some(Classification::Broadcast)
    } else {
        None
    }
}

/// Text form of [`is_special`]; unparsable input is simply not special.
pub fn is_special_range(ip: &str, prefix: u8) -> bool {
    ip.parse::<Ipv4Addr>()
        .ok()
        .and_then(|addr| Ipv4::from_parts(addr, prefix).ok())
        .map(|network| is_special(&network))
        .unwrap_or(false)
}

/// Text form of [`classify`]; returns an empty string when nothing matches.
pub fn classify_ipv4_range(ip: &str, prefix: u8) -> String {
    ip.parse::<Ipv4Addr>()
        .ok()
        .and_then(|addr| Ipv4::from_parts(addr, prefix).ok())
        .and_then(|network| classify(&network))
        .map(|c| c.comment())
        .unwrap_or_default()
}

static COMMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_comment_regex() -> &'static Regex {
    COMMENT_REGEX
        .get_or_init(|| Regex::new(r"^(.*?) \((https://[^)]+)\)$").expect("Invalid Regex"))
}

/// Split a classification comment into its label and link.
pub fn split_comment(comment: &str) -> Option<(&str, &str)> {
    let caps = get_comment_regex().captures(comment)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(cidr: &str) -> Ipv4 {
        Ipv4::new(cidr).unwrap()
    }

    #[test]
    fn test_is_special() {
        assert!(is_special(&net("0.0.0.0/8")));
        assert!(is_special(&net("0.1.2.3/16")));
        assert!(is_special(&net("127.0.0.1/8")));
        assert!(is_special(&net("127.0.0.1/32")));
        assert!(is_special(&net("169.254.10.0/24")));
        assert!(is_special(&net("224.0.0.1/4")));
        assert!(is_special(&net("239.255.255.250/32")));
        assert!(is_special(&net("250.0.0.0/8")));
        assert!(is_special(&net("255.255.255.255/32")));

        assert!(!is_special(&net("0.0.0.0/0")));
        assert!(!is_special(&net("192.168.1.1/24")));
        assert!(!is_special(&net("169.254.0.0/15")));
        assert!(!is_special(&net("224.0.0.0/3")));
        assert!(!is_special(&net("10.0.0.0/8")));
    }

    #[test]
    fn test_classify_rules() {
        assert_eq!(classify(&net("0.0.0.0/8")), Some(Classification::Unspecified));
        assert_eq!(classify(&net("0.0.0.0/16")), None);
        assert_eq!(classify(&net("127.0.0.1/8")), Some(Classification::Loopback));
        assert_eq!(classify(&net("169.254.1.1/16")), Some(Classification::LinkLocal));
        assert_eq!(classify(&net("224.0.0.1/4")), Some(Classification::Multicast));
        assert_eq!(classify(&net("239.1.2.3/32")), Some(Classification::Multicast));
        assert_eq!(classify(&net("240.0.0.0/4")), Some(Classification::Reserved));
        assert_eq!(classify(&net("255.255.255.255/32")), Some(Classification::Broadcast));
        assert_eq!(classify(&net("8.8.8.8/32")), None);
    }

    #[test]
    fn test_special_without_label() {
        let n = net("239.1.0.0/16");
        assert!(is_special(&n));
        assert_eq!(classify(&n), None);
        assert_eq!(classify_ipv4_range("239.1.0.0", 16), "");
        assert!(is_special_range("239.1.0.0", 16));
    }

    #[test]
    fn test_classification_is_on_network_address() {
        // 255.255.255.255/4 has network 240.0.0.0
        assert_eq!(classify(&net("255.255.255.255/4")), Some(Classification::Reserved));
    }

    #[test]
    fn test_comment_text() {
        assert_eq!(
            Classification::Loopback.comment(),
            "RFC 3330 Loopback (https://github.com/lancalc/lancalc/blob/main/docs/RFC.md#rfc-3330---loopback-addresses)"
        );
        assert_eq!(Classification::Broadcast.label(), "RFC 919 Broadcast");
        assert!(classify_ipv4_range("169.254.3.4", 16).starts_with("RFC 3927 Link-local ("));
    }

    #[test]
    fn test_text_forms_swallow_bad_input() {
        assert!(!is_special_range("not-an-ip", 8));
        assert!(!is_special_range("127.0.0.1", 40));
        assert_eq!(classify_ipv4_range("127.0.0.1", 40), "");
    }

    #[test]
    fn test_split_comment() {
        let comment = Classification::Multicast.comment();
        let (label, url) = split_comment(&comment).unwrap();
        assert_eq!(label, "RFC 5771 Multicast");
        assert!(url.ends_with("#rfc-5771---multicast-addresses"));
        assert_eq!(split_comment("no link here"), None);
    }
}
