//! Line filters over nmap's grepable (`-oG` / `.gnmap`) output.
//!
//! Both parsers work on fixed token positions: the address is the second
//! whitespace-delimited token of a matching line. Nothing checks that the line
//! really is a `Host:` record, so a format change in nmap yields wrong or
//! missing entries rather than an error. Lines too short to carry an address
//! are skipped.

use crate::domain::entities::HostPort;

const STATUS_UP: &str = "Status: Up";
const PORTS_MARKER: &str = "Ports:";
const PORTS_PREFIX: &str = "Ports: ";
const RECORD_SEPARATOR: &str = ", ";
const OPEN_STATE: &str = "/open/";

/// Addresses of every `Status: Up` line, in file order.
pub fn alive_hosts(gnmap: &str) -> Vec<String> {
    gnmap
        .lines()
        .filter(|line| line.contains(STATUS_UP))
        .filter_map(address_of)
        .map(str::to_owned)
        .collect()
}

/// Every open port of every `Ports:` line, in line order then record order.
pub fn open_ports(gnmap: &str) -> Vec<HostPort> {
    let mut found = Vec::new();

    for line in gnmap.lines().filter(|line| line.contains(PORTS_MARKER)) {
        let Some(address) = address_of(line) else {
            continue;
        };
        let Some((_, records)) = line.split_once(PORTS_PREFIX) else {
            continue;
        };

        found.extend(
            records
                .split(RECORD_SEPARATOR)
                .filter(|record| record.contains(OPEN_STATE))
                .filter_map(|record| record.split('/').next())
                .map(|port| HostPort::new(address, port)),
        );
    }

    found
}

/// Join entries one per line, without a trailing newline.
pub fn render_lines<T: ToString>(entries: &[T]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn address_of(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}
