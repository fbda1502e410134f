use std::net::IpAddr;

use colored::*;
use nodeip_common::network::ip::{self, IpFamily};
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "nodeip::print";
const KEY_WIDTH: usize = 8;

pub fn initialize(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&line.to_string());
}

pub fn aligned_line(key: &str, value: ColoredString) {
    let dots: String = ".".repeat(KEY_WIDTH.saturating_sub(key.len()) + 1);
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    print(&format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn addresses(ips: &[IpAddr]) {
    for addr in ips {
        let value: ColoredString = match ip::ip_family(addr) {
            IpFamily::V4 => addr.to_string().color(colors::IPV4_ADDR),
            IpFamily::V6 => addr.to_string().color(colors::IPV6_ADDR),
        };
        aligned_line(&ip::ip_family(addr).to_string(), value);
    }
}
