//! Human-readable terminal output.

use crate::models::SubnetResult;
use crate::processing::split_comment;
use colored::Colorize;

/// Right-align a value in a field of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:>width$}")
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn label(key: &str, color: bool) -> String {
    let key = capitalize(key);
    if color {
        key.bold().to_string()
    } else {
        key
    }
}

/// `Key: value` lines for a result, with a `Comment:` line for labelled ranges.
pub fn format_result(res: &SubnetResult, color: bool) -> String {
    let mut lines: Vec<String> = res
        .fields()
        .iter()
        .map(|(key, value)| format!("{}: {}", label(key, color), value))
        .collect();

    if !res.comment.is_empty() {
        let comment = match split_comment(&res.comment) {
            Some((text, url)) if color => format!("{} ({})", text.yellow(), url.underline()),
            _ => res.comment.clone(),
        };
        lines.push(format!("{}: {}", label("comment", color), comment));
    }
    lines.join("\n")
}

/// Detected local address and prefix.
pub fn format_interface(address: &str, prefix: u8, color: bool) -> String {
    format!(
        "{}: {address}\n{}: /{prefix}",
        label("address", color),
        label("prefix", color)
    )
}

/// One `/N  netmask` row per prefix length.
pub fn format_netmask_table(table: &[(u8, String)]) -> String {
    table
        .iter()
        .map(|(prefix, mask)| {
            format!(
                "{} {}",
                format_field(format!("/{prefix}"), 3),
                format_field(mask, 15)
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{compute, netmask_table};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "      test");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 4), "  42");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hostmin"), "Hostmin");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_format_result_normal() {
        let res = compute("192.168.1.1", 24).unwrap();
        assert_eq!(
            format_result(&res, false),
            "Network: 192.168.1.0
Prefix: /24
Netmask: 255.255.255.0
Broadcast: 192.168.1.255
Hostmin: 192.168.1.1
Hostmax: 192.168.1.254
Hosts: 254"
        );
    }

    #[test]
    fn test_format_result_with_comment() {
        let res = compute("127.0.0.1", 8).unwrap();
        let text = format_result(&res, false);
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("Comment: RFC 3330 Loopback (https://"));
        assert!(text.contains("Broadcast: *"));
    }

    #[test]
    fn test_format_interface() {
        assert_eq!(
            format_interface("10.1.1.7", 22, false),
            "Address: 10.1.1.7\nPrefix: /22"
        );
    }

    #[test]
    fn test_format_netmask_table() {
        let text = format_netmask_table(&netmask_table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 33);
        assert_eq!(lines[0], " /0         0.0.0.0");
        assert_eq!(lines[24], "/24   255.255.255.0");
    }
}
