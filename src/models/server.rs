//! Server model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A server in the team's fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: u64,
    pub server_name: String,
    pub ip: String,
    pub os: String,
    pub purpose: String,
    pub assigned_team: String,
    pub attached_devices: String,
    pub status: String,
}

impl Record for Server {
    const FILE: &'static str = "servers.json";
    const NAME: &'static str = "Server";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Request body for registering a server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServerRequest {
    pub server_name: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub assigned_team: String,
    #[serde(default)]
    pub attached_devices: String,
    #[serde(default)]
    pub status: String,
}

impl CreateServerRequest {
    pub fn into_record(self) -> Server {
        Server {
            id: 0,
            server_name: self.server_name,
            ip: self.ip,
            os: self.os,
            purpose: self.purpose,
            assigned_team: self.assigned_team,
            attached_devices: self.attached_devices,
            status: self.status,
        }
    }
}

/// Request body for updating a server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServerRequest {
    #[serde(default)]
    pub server_name: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub assigned_team: Option<String>,
    #[serde(default)]
    pub attached_devices: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateServerRequest {
    pub fn apply(self, server: &mut Server) {
        if let Some(server_name) = self.server_name {
            server.server_name = server_name;
        }
        if let Some(ip) = self.ip {
            server.ip = ip;
        }
        if let Some(os) = self.os {
            server.os = os;
        }
        if let Some(purpose) = self.purpose {
            server.purpose = purpose;
        }
        if let Some(assigned_team) = self.assigned_team {
            server.assigned_team = assigned_team;
        }
        if let Some(attached_devices) = self.attached_devices {
            server.attached_devices = attached_devices;
        }
        if let Some(status) = self.status {
            server.status = status;
        }
    }
}
