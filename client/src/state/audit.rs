//! Progress of one sub-location inventory walkthrough.
//!
//! The dialog loads the live bottles expected on the shelf, then every
//! scanned sticker is checked off. Bottles found elsewhere are moved here
//! first. Whatever is still unchecked at the end is marked dead.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use std::collections::BTreeSet;

use records::{ShelfBottle, StickerLookup};

/// What happened to one scanned sticker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scan {
    /// Already on this shelf.
    Confirmed(String),
    /// Found in another sub-location and moved here.
    Moved { sticker: String, from: String },
    /// No bottle carries this sticker.
    Unknown(String),
}

impl Scan {
    pub fn message(&self) -> String {
        match self {
            Self::Confirmed(sticker) => format!("{sticker}: confirmed"),
            Self::Moved { sticker, from } => format!("{sticker}: moved from {from}"),
            Self::Unknown(sticker) => format!("{sticker}: sticker not found"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuditState {
    pub sub_location_id: Option<i32>,
    pub expected: Vec<ShelfBottle>,
    scanned: BTreeSet<i32>,
    pub log: Vec<Scan>,
}

impl AuditState {
    /// Begin auditing `sub_location_id`, forgetting any earlier progress.
    pub fn start(&mut self, sub_location_id: i32, expected: Vec<ShelfBottle>) {
        *self = Self { sub_location_id: Some(sub_location_id), expected, ..Self::default() };
    }

    /// `true` when the found bottle lives in a different sub-location and
    /// must be relocated before it counts.
    pub fn needs_move(&self, found: &StickerLookup) -> bool {
        self.sub_location_id.is_some_and(|here| here != found.sub_location_id)
    }

    /// Check off a bottle that is now known to be on this shelf.
    pub fn record(&mut self, sticker: &str, found: &StickerLookup, moved: bool) {
        self.scanned.insert(found.inventory_id);
        let sticker = sticker.trim().to_owned();
        self.log.push(if moved {
            Scan::Moved { sticker, from: format!("{} / {}", found.location_name, found.sub_location_name) }
        } else {
            Scan::Confirmed(sticker)
        });
    }

    pub fn record_unknown(&mut self, sticker: &str) {
        self.log.push(Scan::Unknown(sticker.trim().to_owned()));
    }

    pub fn is_scanned(&self, inventory_id: i32) -> bool {
        self.scanned.contains(&inventory_id)
    }

    /// Expected bottles nobody scanned, in shelf order.
    pub fn unscanned(&self) -> Vec<i32> {
        self.expected
            .iter()
            .map(|b| b.inventory_id)
            .filter(|id| !self.scanned.contains(id))
            .collect()
    }
}
