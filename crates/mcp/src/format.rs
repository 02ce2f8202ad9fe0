//! Markdown rendering for tool output.

use std::fmt::Write;

use meraki_api::{Client, Device, Network, Organization, Ssid, Vlan};

const UNKNOWN: &str = "Unknown";

fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// Note appended when a listing was cut at `shown` of `total` entries.
fn truncation_note(out: &mut String, shown: usize, total: usize, things: &str) {
    if total > shown {
        let _ = writeln!(out, "_... and {} more {things} not shown._", total - shown);
    }
}

pub fn organizations(orgs: &[Organization]) -> String {
    if orgs.is_empty() {
        return "No organizations found for this API key.".into();
    }
    let mut out = String::from("# Organizations\n\n");
    for org in orgs {
        let _ = writeln!(out, "- **{}** (ID: `{}`)", org.name, org.id);
        if let Some(url) = &org.url {
            let _ = writeln!(out, "  - Dashboard: {url}");
        }
    }
    out
}

pub fn organization(org: &Organization) -> String {
    let mut out = format!("# Organization: {}\n\n", org.name);
    let _ = writeln!(out, "- ID: `{}`", org.id);
    if let Some(url) = &org.url {
        let _ = writeln!(out, "- Dashboard: {url}");
    }
    out
}

pub fn networks(organization_id: &str, networks: &[Network]) -> String {
    if networks.is_empty() {
        return format!("No networks found for organization {organization_id}.");
    }
    let mut out = format!("# Networks in Organization ({organization_id})\n\n");
    for network in networks {
        let _ = writeln!(out, "- **{}** (ID: `{}`)", network.name, network.id);
        let _ = writeln!(out, "  - Products: {}", product_types(network));
        if let Some(tz) = &network.time_zone {
            let _ = writeln!(out, "  - Time zone: {tz}");
        }
    }
    out
}

pub fn network(network: &Network) -> String {
    let mut out = format!("# Network: {}\n\n", network.name);
    let _ = writeln!(out, "- ID: `{}`", network.id);
    let _ = writeln!(out, "- Products: {}", product_types(network));
    if let Some(tz) = &network.time_zone {
        let _ = writeln!(out, "- Time zone: {tz}");
    }
    if !network.tags.is_empty() {
        let _ = writeln!(out, "- Tags: {}", network.tags.join(", "));
    }
    out
}

fn product_types(network: &Network) -> String {
    if network.product_types.is_empty() {
        "none".into()
    } else {
        network.product_types.join(", ")
    }
}

/// Device listing, capped at `limit` entries.
pub fn devices(network_id: &str, devices: &[Device], limit: usize) -> String {
    if devices.is_empty() {
        return format!("No devices found for network {network_id}.");
    }
    let mut out = format!("# Devices in Network ({network_id})\n\n");
    for device in devices.iter().take(limit) {
        let _ = writeln!(
            out,
            "- **{}** (Model: {})",
            device.name.as_deref().unwrap_or("Unnamed"),
            or_unknown(device.model.as_deref())
        );
        let _ = writeln!(out, "  - Serial: `{}`", device.serial);
        let _ = writeln!(out, "  - MAC: `{}`", or_unknown(device.mac.as_deref()));
        let _ = writeln!(out, "  - Status: {}", or_unknown(device.status.as_deref()));
        location(&mut out, device, "  ");
        out.push('\n');
    }
    truncation_note(&mut out, limit.min(devices.len()), devices.len(), "devices");
    out
}

pub fn device(device: &Device) -> String {
    let mut out = format!(
        "# Device: {}\n\n",
        device.name.as_deref().unwrap_or(&device.serial)
    );
    let _ = writeln!(out, "- Serial: `{}`", device.serial);
    let _ = writeln!(out, "- Model: {}", or_unknown(device.model.as_deref()));
    let _ = writeln!(out, "- MAC: `{}`", or_unknown(device.mac.as_deref()));
    if let Some(network_id) = &device.network_id {
        let _ = writeln!(out, "- Network: `{network_id}`");
    }
    if let Some(ip) = &device.lan_ip {
        let _ = writeln!(out, "- LAN IP: `{ip}`");
    }
    if let Some(firmware) = &device.firmware {
        let _ = writeln!(out, "- Firmware: {firmware}");
    }
    if let Some(status) = &device.status {
        let _ = writeln!(out, "- Status: {status}");
    }
    location(&mut out, device, "");
    if let Some(notes) = device.notes.as_deref().filter(|n| !n.is_empty()) {
        let _ = writeln!(out, "- Notes: {notes}");
    }
    if !device.tags.is_empty() {
        let _ = writeln!(out, "- Tags: {}", device.tags.join(", "));
    }
    out
}

fn location(out: &mut String, device: &Device, indent: &str) {
    if let (Some(lat), Some(lng)) = (device.lat, device.lng) {
        let _ = writeln!(out, "{indent}- Location: ({lat}, {lng})");
    }
    if let Some(address) = device.address.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "{indent}- Address: {address}");
    }
}

/// Client listing, capped at `limit` entries.
pub fn clients(network_id: &str, clients: &[Client], limit: usize) -> String {
    if clients.is_empty() {
        return format!("No clients found for network {network_id}.");
    }
    let mut out = format!("# Clients in Network ({network_id})\n\n");
    for client in clients.iter().take(limit) {
        let _ = writeln!(
            out,
            "- **{}**",
            client.description.as_deref().unwrap_or("Unknown Device")
        );
        let _ = writeln!(out, "  - MAC: `{}`", or_unknown(client.mac.as_deref()));
        let _ = writeln!(out, "  - IP: `{}`", or_unknown(client.ip.as_deref()));
        let vlan = client.vlan.as_ref().map(ToString::to_string);
        let _ = writeln!(out, "  - VLAN: {}", or_unknown(vlan.as_deref()));
        if let Some(manufacturer) = &client.manufacturer {
            let _ = writeln!(out, "  - Manufacturer: {manufacturer}");
        }
        if let Some(os) = &client.os {
            let _ = writeln!(out, "  - OS: {os}");
        }
        if let Some(user) = &client.user {
            let _ = writeln!(out, "  - User: {user}");
        }
        let _ = writeln!(
            out,
            "  - Connection: {}",
            or_unknown(client.status.as_deref())
        );
        if let Some(usage) = &client.usage {
            let _ = writeln!(
                out,
                "  - Usage: {} KB sent, {} KB received",
                usage.sent, usage.recv
            );
        }
        out.push('\n');
    }
    truncation_note(&mut out, limit.min(clients.len()), clients.len(), "clients");
    out
}

pub fn ssids(network_id: &str, ssids: &[Ssid]) -> String {
    if ssids.is_empty() {
        return format!("No SSIDs found for network {network_id}.");
    }
    let mut out = format!("# Wireless SSIDs in Network ({network_id})\n\n");
    for ssid in ssids {
        let state = if ssid.enabled { "enabled" } else { "disabled" };
        let _ = writeln!(out, "- **{}** (#{}, {state})", ssid.name, ssid.number);
        if let Some(auth) = &ssid.auth_mode {
            let _ = writeln!(out, "  - Auth: {auth}");
        }
        if let Some(encryption) = &ssid.encryption_mode {
            let _ = writeln!(out, "  - Encryption: {encryption}");
        }
    }
    out
}

pub fn vlans(network_id: &str, vlans: &[Vlan]) -> String {
    if vlans.is_empty() {
        return format!("No VLANs found for network {network_id}.");
    }
    let mut out = format!("# VLANs in Network ({network_id})\n\n");
    for vlan in vlans {
        let _ = writeln!(out, "- **VLAN {}**: {}", vlan.id, vlan.name);
        if let Some(subnet) = &vlan.subnet {
            let _ = writeln!(out, "  - Subnet: {subnet}");
        }
        if let Some(ip) = &vlan.appliance_ip {
            let _ = writeln!(out, "  - Appliance IP: `{ip}`");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use meraki_api::{Client, Device};

    use crate::format;

    #[test]
    fn client_listing_is_truncated() {
        let clients: Vec<Client> = (0..30)
            .map(|i| Client {
                description: Some(format!("host-{i}")),
                ..Default::default()
            })
            .collect();
        let out = format::clients("N_1", &clients, 25);

        assert_eq!(out.matches("- **host-").count(), 25);
        assert!(out.contains("host-24"));
        assert!(!out.contains("host-25"));
        assert!(out.contains("_... and 5 more clients not shown._"));
    }

    #[test]
    fn no_note_under_the_cap() {
        let devices = vec![Device {
            serial: "Q2XX-1".into(),
            lat: Some(1.5),
            lng: Some(-2.0),
            address: Some("1 Main St".into()),
            ..Default::default()
        }];
        let out = format::devices("N_1", &devices, 25);
        assert!(out.contains("- **Unnamed** (Model: Unknown)"));
        assert!(out.contains("  - Location: (1.5, -2)"));
        assert!(out.contains("  - Address: 1 Main St"));
        assert!(!out.contains("not shown"));
    }

    #[test]
    fn empty_listings() {
        assert_eq!(
            format::devices("N_1", &[], 25),
            "No devices found for network N_1."
        );
        assert_eq!(format::ssids("N_1", &[]), "No SSIDs found for network N_1.");
    }
}
