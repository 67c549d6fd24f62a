//! Integration tests for subnet-calc
//!
//! These tests run the compiled binary and check stdout, stderr and exit status.

use assert_cmd::Command;
use predicates::prelude::*;

fn subnet_calc() -> Command {
    let mut cmd = Command::cargo_bin("subnet-calc").expect("binary should build");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_ipv4_network() {
    subnet_calc()
        .args(["-4", "192.168.1.0/24"])
        .assert()
        .success()
        .stdout(concat!(
            "  Input CIDR          : 192.168.1.0/24\n",
            "  Network Address     : 192.168.1.0\n",
            "  Broadcast Address   : 192.168.1.255\n",
            "  First usable Address: 192.168.1.1\n",
            "  Last usable Address : 192.168.1.254\n",
            "  Total Addresses     : 256\n",
        ));
}

#[test]
fn test_ipv6_network_by_default() {
    let expected = concat!(
        "  Input CIDR          : 2001:db8::/32\n",
        "  Network Address     : 2001:db8::\n",
        "  First usable Address: 2001:db8::1\n",
        "  Last usable Address : 2001:db8:ffff:ffff:ffff:ffff:ffff:ffff\n",
        "  Total Addresses     : 79,228,162,514,264,337,593,543,950,336\n",
    );
    subnet_calc()
        .arg("2001:db8::/32")
        .assert()
        .success()
        .stdout(expected);
    subnet_calc()
        .args(["-6", "2001:db8::/32"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_host_bits_are_masked() {
    subnet_calc()
        .args(["-4", "192.168.1.5/24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input CIDR          : 192.168.1.0/24"));
}

#[test]
fn test_single_address() {
    subnet_calc()
        .args(["-4", "10.0.0.1/32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First usable Address: 10.0.0.1\n"))
        .stdout(predicate::str::contains("Last usable Address : 10.0.0.1\n"))
        .stdout(predicate::str::contains("Total Addresses     : 1\n"));
}

#[test]
fn test_whole_ipv6_space() {
    subnet_calc()
        .arg("::/0")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "340,282,366,920,938,463,463,374,607,431,768,211,456",
        ));
}

#[test]
fn test_both_families_is_usage_error() {
    subnet_calc()
        .args(["-4", "-6", "10.0.0.0/8"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_address_is_usage_error() {
    subnet_calc()
        .arg("-4")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_ipv4() {
    subnet_calc()
        .args(["-4", "999.1.1.1/24"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Invalid IPv4 address or prefix. '999.1.1.1' does not appear to be an IPv4 address",
        ));
}

#[test]
fn test_not_an_ip() {
    subnet_calc()
        .args(["-4", "not-an-ip/24"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_ipv6() {
    subnet_calc()
        .args(["-6", "gg::/64"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not appear to be an IPv6 address"));
}

#[test]
fn test_ipv4_literal_on_ipv6_path() {
    subnet_calc()
        .arg("192.168.1.0/24")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid IPv6 address or prefix"));
}

#[test]
fn test_netmask_prefix() {
    subnet_calc()
        .args(["-4", "10.1.2.3/255.255.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input CIDR          : 10.1.0.0/16"));
}

#[test]
fn test_json_output() {
    let output = subnet_calc()
        .args(["-4", "--json", "10.0.0.0/30"])
        .output()
        .expect("run subnet-calc");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["version"], 4);
    assert_eq!(value["network_address"], "10.0.0.0");
    assert_eq!(value["broadcast_address"], "10.0.0.3");
    assert_eq!(value["first_usable_address"], "10.0.0.1");
    assert_eq!(value["last_usable_address"], "10.0.0.2");
    assert_eq!(value["total_addresses"], "4");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    subnet_calc()
        .args(["-vv", "-4", "10.0.0.0/8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("  Input CIDR"))
        .stderr(predicate::str::contains("calculate("));
}
