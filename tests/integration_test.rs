//! Integration tests for ipv4-subnet-calc
//!
//! These tests drive the public API the way a caller would.

use ipv4_subnet_calc::{Address, Network, SubnetError};

fn ip(text: &str) -> Address {
    Address::new(text).expect("valid address")
}

#[test]
fn test_network_from_ip_and_mask() {
    let nw = Network::new("192.168.10.10", "255.255.255.0").expect("Failed to build network");

    assert_eq!(nw.network_address().to_string(), "192.168.10.0");
    assert_eq!(nw.first_usable().to_string(), "192.168.10.1");
    assert_eq!(nw.last_usable().to_string(), "192.168.10.255");
    assert_eq!(nw.host_capacity(), 255);
    assert_eq!(nw.cidr(), "192.168.10.10/24");

    let snapshot = nw.snapshot();
    assert_eq!(snapshot.subnet_mask, "255.255.255.0");
    let addresses = snapshot.addresses.as_ref().expect("small network lists addresses");
    assert_eq!(addresses.len(), 255);
    assert_eq!(addresses[0], "192.168.10.1");
    assert_eq!(addresses[254], "192.168.10.255");
    assert!(nw.includes(ip("192.168.10.50")).unwrap());
}

#[test]
fn test_binary_conversion() {
    let addr = ip("192.168.1.2");
    assert_eq!(addr.to_binary(), "11000000101010000000000100000010");
    assert_eq!(
        Address::from_binary("11000000101010000000000100000010")
            .unwrap()
            .to_string(),
        "192.168.1.2"
    );
}

#[test]
fn test_address_round_trips() {
    for text in [
        "0.0.0.0",
        "1.2.3.4",
        "9.0.0.0",
        "10.0.0.255",
        "127.0.0.1",
        "172.16.254.1",
        "192.168.1.2",
        "255.255.255.255",
    ] {
        let addr = ip(text);
        assert_eq!(addr.to_string(), text);
        assert_eq!(Address::from_binary(&addr.to_binary()).unwrap().to_string(), text);
    }
}

#[test]
fn test_address_arithmetic_properties() {
    let samples = [ip("10.0.0.1"), ip("192.168.1.2"), ip("255.255.0.0"), ip("0.0.0.0")];
    for a in samples {
        assert_eq!(a.bitwise_and(a).unwrap(), a);
        assert_eq!(a.distance_to(&a), 0);
        for b in samples {
            assert_eq!(a.bitwise_and(b).unwrap(), b.bitwise_and(a).unwrap());
            assert_eq!(a.distance_to(&b), b.distance_to(&a));
        }
    }

    let a = ip("172.16.0.9");
    for k in [1, 7, 256, 65_536] {
        assert_eq!(a.next(k).unwrap().previous(k).unwrap(), a);
    }
}

#[test]
fn test_cidr_validation_and_includes() {
    assert!(Network::validate_cidr("192.168.10.1/29"));
    assert!(!Network::validate_cidr("192.168.10.1/33"));

    let nw = Network::from_cidr("192.168.1.10/24").unwrap();
    assert!(nw.includes(ip("192.168.1.200")).unwrap());
    assert!(ip("192.168.1.2").contained_in(&nw));
    assert!(!nw.includes("192.168.2.1").unwrap());
}

#[test]
fn test_containment_boundaries() {
    for cidr in ["10.20.30.40/27", "192.168.0.1/16", "172.16.5.5/30", "100.64.0.0/10"] {
        let nw = Network::from_cidr(cidr).unwrap();
        let first = nw.first_usable();
        let last = nw.last_usable();
        assert!(nw.includes(first).unwrap(), "{cidr} should include {first}");
        assert!(nw.includes(last).unwrap(), "{cidr} should include {last}");
        assert!(!nw.includes(first.previous(1).unwrap()).unwrap());
        assert!(!nw.includes(last.next(1).unwrap()).unwrap());
    }
}

#[test]
fn test_cidr_round_trip() {
    for (addr, mask) in [
        ("192.168.10.10", "255.255.255.0"),
        ("10.1.2.3", "255.0.0.0"),
        ("172.16.40.3", "255.255.255.192"),
        ("8.8.8.8", "255.255.255.255"),
    ] {
        let nw = Network::new(addr, mask).unwrap();
        let again = Network::new(addr, mask).unwrap();
        assert_eq!(nw.snapshot(), again.snapshot());
        assert_eq!(Network::from_cidr(nw.cidr()).unwrap().snapshot(), nw.snapshot());
    }
}

#[test]
fn test_adjacent_networks() {
    let nw = Network::new("192.168.10.1", "255.255.255.0").unwrap();
    let next = nw.next_network(1).unwrap();
    let prev = nw.previous_network(1).unwrap();

    assert_eq!(next.network_address(), ip("192.168.11.0"));
    assert_eq!(prev.network_address(), ip("192.168.9.0"));
    assert_eq!(next.host_capacity(), nw.host_capacity());
    assert!(!next.includes(nw.last_usable()).unwrap());
    assert!(next.includes(nw.last_usable().next(2).unwrap()).unwrap());
}

#[test]
fn test_large_network_is_lazy() {
    let nw = Network::from_cidr("0.0.0.0/0").unwrap();
    assert_eq!(nw.snapshot().addresses, None);
    assert!(matches!(
        nw.address_list(),
        Err(SubnetError::TooManyAddresses { .. })
    ));
    let mut walk = nw.addresses();
    assert_eq!(walk.next(), Some(ip("0.0.0.1")));
    assert_eq!(walk.next_back(), Some(ip("255.255.255.255")));
}

#[test]
fn test_errors_are_typed() {
    assert!(matches!(
        Address::new("192.168.1.300"),
        Err(SubnetError::InvalidAddressFormat(_))
    ));
    assert!(matches!(
        Network::from_cidr("192.168.1.0/33"),
        Err(SubnetError::InvalidCidrFormat(_))
    ));
    assert!(matches!(
        Network::new(None::<&str>, "255.0.0.0"),
        Err(SubnetError::MissingArgument("ip"))
    ));
    assert!(matches!(
        Network::new("10.0.0.1", "255.255.0.255"),
        Err(SubnetError::InvalidSubnetMask(_))
    ));
    assert!(matches!(
        Network::from_json(r#"{"ip": ["10.0.0.1"], "subnet_mask": "255.0.0.0"}"#),
        Err(SubnetError::InvalidArgumentType { name: "ip", .. })
    ));
}
