//! In-memory [`Dashboard`] for tests. Records every call it receives.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use meraki_api::{Client, Dashboard, Device, Error, Network, Organization, Ssid, Vlan};
use serde_json::json;

use crate::{MerakiServer, ServerConfig};

#[derive(Default)]
pub(crate) struct MockDashboard {
    organizations: Vec<Organization>,
    networks: HashMap<String, Vec<Network>>,
    devices: HashMap<String, Vec<Device>>,
    clients: HashMap<String, Vec<Client>>,
    ssids: HashMap<String, Vec<Ssid>>,
    vlans: HashMap<String, Vec<Vlan>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
    networks_in_flight: AtomicUsize,
    networks_peak: AtomicUsize,
}

impl MockDashboard {
    pub(crate) fn with_org(mut self, id: &str, name: &str) -> Self {
        self.organizations.push(Organization {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        });
        self
    }

    pub(crate) fn with_network(mut self, org_id: &str, id: &str, name: &str) -> Self {
        self.networks
            .entry(org_id.into())
            .or_default()
            .push(Network {
                id: id.into(),
                name: name.into(),
                product_types: vec!["wireless".into()],
                ..Default::default()
            });
        self
    }

    pub(crate) fn with_devices(mut self, network_id: &str, count: usize) -> Self {
        let devices = (0..count)
            .map(|i| Device {
                serial: format!("Q2XX-{i:04}"),
                name: Some(format!("AP {i}")),
                model: Some("MR46".into()),
                network_id: Some(network_id.into()),
                status: Some("online".into()),
                ..Default::default()
            })
            .collect();
        self.devices.insert(network_id.into(), devices);
        self
    }

    pub(crate) fn with_clients(mut self, network_id: &str, count: usize) -> Self {
        let clients = (0..count)
            .map(|i| Client {
                mac: Some(format!("00:11:22:33:44:{i:02x}")),
                ip: Some(format!("10.0.0.{}", i + 10)),
                description: Some(format!("laptop-{i}")),
                ..Default::default()
            })
            .collect();
        self.clients.insert(network_id.into(), clients);
        self
    }

    pub(crate) fn with_ssid(mut self, network_id: &str, number: u32, name: &str) -> Self {
        let ssid = serde_json::from_value(json!({
            "number": number,
            "name": name,
            "enabled": true,
            "authMode": "psk"
        }))
        .expect("valid ssid");
        self.ssids.entry(network_id.into()).or_default().push(ssid);
        self
    }

    pub(crate) fn with_vlan(mut self, network_id: &str, id: u32, name: &str) -> Self {
        let vlan = serde_json::from_value(json!({
            "id": id,
            "name": name,
            "subnet": format!("10.{id}.0.0/24"),
            "applianceIp": format!("10.{id}.0.1")
        }))
        .expect("valid vlan");
        self.vlans.entry(network_id.into()).or_default().push(vlan);
        self
    }

    /// Make the call with this key (as recorded in [`Self::calls`]) fail.
    pub(crate) fn failing(mut self, call: &str) -> Self {
        self.failing.insert(call.into());
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    /// Most `organization_networks` calls ever pending at once.
    pub(crate) fn peak_network_fetches(&self) -> usize {
        self.networks_peak.load(Ordering::SeqCst)
    }

    pub(crate) fn into_server(self, config: ServerConfig) -> (MerakiServer, Arc<MockDashboard>) {
        let mock = Arc::new(self);
        let server = MerakiServer::new(mock.clone(), config);
        (server, mock)
    }

    fn record(&self, call: String) -> Result<(), Error> {
        let fail = self.failing.contains(&call);
        self.calls.lock().expect("calls lock").push(call.clone());
        if fail {
            return Err(Error::Api {
                status: 500,
                message: format!("simulated failure for {call}"),
            });
        }
        Ok(())
    }
}

fn not_found(what: &str) -> Error {
    Error::Api {
        status: 404,
        message: format!("{what} not found"),
    }
}

#[async_trait]
impl Dashboard for MockDashboard {
    async fn organizations(&self) -> Result<Vec<Organization>, Error> {
        self.record("organizations".into())?;
        Ok(self.organizations.clone())
    }

    async fn organization(&self, organization_id: &str) -> Result<Organization, Error> {
        self.record(format!("organization:{organization_id}"))?;
        self.organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned()
            .ok_or_else(|| not_found("Organization"))
    }

    async fn organization_networks(&self, organization_id: &str) -> Result<Vec<Network>, Error> {
        let pending = self.networks_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.networks_peak.fetch_max(pending, Ordering::SeqCst);
        // Stay pending across a few polls so concurrent fetches overlap.
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.networks_in_flight.fetch_sub(1, Ordering::SeqCst);

        self.record(format!("organization_networks:{organization_id}"))?;
        Ok(self
            .networks
            .get(organization_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn network(&self, network_id: &str) -> Result<Network, Error> {
        self.record(format!("network:{network_id}"))?;
        self.networks
            .values()
            .flatten()
            .find(|n| n.id == network_id)
            .cloned()
            .ok_or_else(|| not_found("Network"))
    }

    async fn network_devices(&self, network_id: &str) -> Result<Vec<Device>, Error> {
        self.record(format!("network_devices:{network_id}"))?;
        Ok(self.devices.get(network_id).cloned().unwrap_or_default())
    }

    async fn device(&self, serial: &str) -> Result<Device, Error> {
        self.record(format!("device:{serial}"))?;
        self.devices
            .values()
            .flatten()
            .find(|d| d.serial == serial)
            .cloned()
            .ok_or_else(|| not_found("Device"))
    }

    async fn network_clients(
        &self,
        network_id: &str,
        timespan_secs: u32,
    ) -> Result<Vec<Client>, Error> {
        self.record(format!("network_clients:{network_id}:{timespan_secs}"))?;
        Ok(self.clients.get(network_id).cloned().unwrap_or_default())
    }

    async fn network_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, Error> {
        self.record(format!("network_ssids:{network_id}"))?;
        Ok(self.ssids.get(network_id).cloned().unwrap_or_default())
    }

    async fn network_vlans(&self, network_id: &str) -> Result<Vec<Vlan>, Error> {
        self.record(format!("network_vlans:{network_id}"))?;
        Ok(self.vlans.get(network_id).cloned().unwrap_or_default())
    }
}
