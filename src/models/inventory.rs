//! Inventory item model.

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A tracked hardware item and who currently holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: u64,
    pub item_name: String,
    pub assigned_to: String,
    pub serial_no: String,
    pub condition: String,
    pub remarks: String,
}

impl Record for InventoryItem {
    const FILE: &'static str = "inventory.json";
    const NAME: &'static str = "Inventory item";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Request body for adding an inventory item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventoryItemRequest {
    pub item_name: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub serial_no: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub remarks: String,
}

impl CreateInventoryItemRequest {
    pub fn into_record(self) -> InventoryItem {
        InventoryItem {
            id: 0,
            item_name: self.item_name,
            assigned_to: self.assigned_to,
            serial_no: self.serial_no,
            condition: self.condition,
            remarks: self.remarks,
        }
    }
}

/// Request body for updating an inventory item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInventoryItemRequest {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub serial_no: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl UpdateInventoryItemRequest {
    pub fn apply(self, item: &mut InventoryItem) {
        if let Some(item_name) = self.item_name {
            item.item_name = item_name;
        }
        if let Some(assigned_to) = self.assigned_to {
            item.assigned_to = assigned_to;
        }
        if let Some(serial_no) = self.serial_no {
            item.serial_no = serial_no;
        }
        if let Some(condition) = self.condition {
            item.condition = condition;
        }
        if let Some(remarks) = self.remarks {
            item.remarks = remarks;
        }
    }
}
