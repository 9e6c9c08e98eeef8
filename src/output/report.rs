//! Human readable network report.

use super::terminal::{format_field, yes_no};
use crate::models::Network;
use itertools::Itertools;

const LABEL_WIDTH: usize = 16;

/// How many addresses to show at each end of the address preview.
const PREVIEW: usize = 3;

/// Multi-line summary of a network.
pub fn network_report(network: &Network) -> String {
    let lines = [
        format_field("cidr", network.cidr(), LABEL_WIDTH),
        format_field("ip", network.ip(), LABEL_WIDTH),
        format_field("subnet mask", network.subnet_mask(), LABEL_WIDTH),
        format_field("network address", network.network_address(), LABEL_WIDTH),
        format_field("first usable", network.first_usable(), LABEL_WIDTH),
        format_field("last usable", network.last_usable(), LABEL_WIDTH),
        format_field("host capacity", network.host_capacity(), LABEL_WIDTH),
        format_field("addresses", address_preview(network), LABEL_WIDTH),
    ];
    lines.join("\n")
}

/// First and last few usable addresses, e.g. `10.0.0.1, 10.0.0.2, 10.0.0.3 .. 10.0.0.255`.
pub fn address_preview(network: &Network) -> String {
    let mut addresses = network.addresses();
    if addresses.remaining() <= (PREVIEW * 2) as u64 {
        return addresses.join(", ");
    }
    let tail = addresses.clone().rev().take(PREVIEW).collect_vec();
    format!(
        "{} .. {}",
        addresses.take(PREVIEW).join(", "),
        tail.iter().rev().join(", ")
    )
}

/// One line telling whether `address` is in `network`, or why it could not be checked.
pub fn membership_line(network: &Network, address: &str) -> String {
    match network.includes(address) {
        Ok(included) => format!("{address} in {network}: {}", yes_no(included)),
        Err(e) => {
            log::warn!("Skipping membership check for '{address}': {e}");
            format!("{address}: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_report() {
        let nw = Network::new("192.168.10.10", "255.255.255.0").unwrap();
        let report = network_report(&nw);
        assert_eq!(report.lines().count(), 8);
        assert!(report.starts_with(&format!("{:>16}: 192.168.10.10/24", "cidr")));
        assert!(report.contains("network address: 192.168.10.0"));
        assert!(report.contains("  host capacity: 255"));
    }

    #[test]
    fn test_address_preview() {
        let small = Network::from_cidr("10.0.0.0/30").unwrap();
        assert_eq!(address_preview(&small), "10.0.0.1, 10.0.0.2, 10.0.0.3");

        let big = Network::from_cidr("10.0.0.0/24").unwrap();
        assert_eq!(
            address_preview(&big),
            "10.0.0.1, 10.0.0.2, 10.0.0.3 .. 10.0.0.253, 10.0.0.254, 10.0.0.255"
        );

        let host = Network::from_cidr("10.0.0.7/32").unwrap();
        assert_eq!(address_preview(&host), "");

        let all = Network::from_cidr("0.0.0.0/0").unwrap();
        assert_eq!(
            address_preview(&all),
            "0.0.0.1, 0.0.0.2, 0.0.0.3 .. 255.255.255.253, 255.255.255.254, 255.255.255.255"
        );
    }

    #[test]
    fn test_membership_line() {
        let nw = Network::from_cidr("192.168.1.10/24").unwrap();
        let line = membership_line(&nw, "192.168.1.200");
        assert!(line.starts_with("192.168.1.200 in 192.168.1.10/24: "));
        assert!(line.contains("yes"));
        assert!(membership_line(&nw, "192.168.2.1").contains("no"));
        assert_eq!(
            membership_line(&nw, "192.168.1"),
            "192.168.1: IP not in [xxx.xxx.xxx.xxx] format: '192.168.1'"
        );
    }
}
