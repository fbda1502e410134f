#![cfg(test)]
use nodeip_core::{NodeIpError, parse_node_ip_annotation, parse_node_ip_argument};
use std::net::IpAddr;

const PARSE: &str = "could not parse";
const NOT_SUPPORTED: &str = "not supported in this configuration";
const ARITY: &str = "either a single IP or a dual-stack pair of IPs";

/// (description, input, expected address, expected error substring)
const CASES: &[(&str, &str, Option<&str>, &str)] = &[
    ("empty", "", None, PARSE),
    ("just whitespace", " ", None, PARSE),
    ("garbage", "blah", None, PARSE),
    ("single IPv4", "1.2.3.4", Some("1.2.3.4"), ""),
    ("single IPv4 with whitespace", " 1.2.3.4   ", None, PARSE),
    ("single IPv4 non-canonical", "01.2.3.004", Some("1.2.3.4"), ""),
    ("single IPv4 invalid", "1.2.3", None, PARSE),
    ("single IPv4 CIDR", "1.2.3.0/24", None, PARSE),
    ("single IPv4 unspecified", "0.0.0.0", Some("0.0.0.0"), ""),
    ("single IPv4 plus garbage", "1.2.3.4,not-an-IPv6-address", None, PARSE),
    ("single IPv6", "abcd::ef01", Some("abcd::ef01"), ""),
    ("single IPv6 non-canonical", "abcd:0abc:00ab:0000:0000::1", Some("abcd:abc:ab::1"), ""),
    ("simple dual-stack", "1.2.3.4,abcd::ef01", None, NOT_SUPPORTED),
    ("dual-stack with whitespace", "abcd::ef01 , 1.2.3.4", None, PARSE),
    ("double IPv4", "1.2.3.4,5.6.7.8", None, ARITY),
    ("double IPv6", "abcd::1,abcd::2", None, ARITY),
    ("dual-stack with unspecified IPv6", "1.2.3.4,::", None, NOT_SUPPORTED),
    ("dual-stack with unspecified IPv4", "0.0.0.0,abcd::1", None, NOT_SUPPORTED),
    ("dual-stack plus garbage", "abcd::ef01 , 1.2.3.4, something else", None, PARSE),
    ("triple stack!", "1.2.3.4,abcd::1,5.6.7.8", None, ARITY),
];

#[test]
fn node_ip_annotation_cases() {
    for &(desc, input, out, err) in CASES {
        let expected: Option<IpAddr> = out.map(|s| s.parse().unwrap());

        match parse_node_ip_annotation(input) {
            Ok(parsed) => {
                assert!(err.is_empty(), "{desc}: expected error with {err:?}, got {parsed}");
                assert_eq!(Some(parsed), expected, "{desc}");
            }
            Err(e) => {
                assert!(!err.is_empty(), "{desc}: unexpected error {e}");
                assert!(e.to_string().contains(err), "{desc}: expected error with {err:?}, got {e}");
            }
        }
    }
}

#[test]
fn annotation_is_stricter_than_argument() {
    for input in [" 1.2.3.4   ", "1.2.3.4,not-an-IPv6-address"] {
        assert_eq!(
            parse_node_ip_argument(input, "", false),
            Ok(vec!["1.2.3.4".parse::<IpAddr>().unwrap()])
        );
        assert!(matches!(
            parse_node_ip_annotation(input),
            Err(NodeIpError::ParseError { .. })
        ));
    }
}

#[test]
fn annotation_accepts_what_argument_returns() {
    for input in ["1.2.3.4", "01.2.3.004", "abcd:0abc:00ab:0000:0000::1", "::"] {
        let parsed = parse_node_ip_argument(input, "", false).unwrap();
        let written = parsed[0].to_string();
        assert_eq!(parse_node_ip_annotation(&written), Ok(parsed[0]), "input {input:?}");
    }
}
