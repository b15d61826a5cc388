//! # Flat-File Wish Repository
//!
//! ```text
//! id|description|requiredLevel|approved|purchased|childUsername
//! 1c9e…|Lego|3|true|false|bob
//! ```
//!
//! Same escaping as the tasks file; lines with fewer than six fields are
//! ignored.

use anyhow::Result;
use csv::StringRecord;
use log::{debug, info, warn};

use super::codec;
use super::connection::FlatFileConnection;
use crate::domain::models::Wish;
use crate::storage::traits::WishStorage;

const WISH_FIELDS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
struct WishRecord {
    id: String,
    description: String,
    required_level: String,
    approved: String,
    purchased: String,
    child_username: String,
}

impl WishRecord {
    fn from_line(line: &StringRecord) -> Option<Self> {
        if line.len() < WISH_FIELDS {
            return None;
        }
        let field = |i: usize| line.get(i).unwrap_or_default().to_string();
        Some(WishRecord {
            id: codec::unescape(&field(0)),
            description: codec::unescape(&field(1)),
            required_level: field(2),
            approved: field(3),
            purchased: field(4),
            child_username: codec::unescape(&field(5)),
        })
    }

    fn into_line(self) -> Vec<String> {
        vec![
            codec::escape(&self.id),
            codec::escape(&self.description),
            self.required_level,
            self.approved,
            self.purchased,
            codec::escape(&self.child_username),
        ]
    }
}

impl From<&Wish> for WishRecord {
    fn from(wish: &Wish) -> Self {
        WishRecord {
            id: wish.id().to_string(),
            description: wish.description().to_string(),
            required_level: wish.required_level().to_string(),
            approved: codec::format_flag(wish.is_approved()).to_string(),
            purchased: codec::format_flag(wish.is_purchased()).to_string(),
            child_username: wish.child_username().to_string(),
        }
    }
}

impl TryFrom<WishRecord> for Wish {
    type Error = anyhow::Error;

    fn try_from(record: WishRecord) -> Result<Self> {
        let required_level = record.required_level.trim().parse::<i64>().map_err(|e| {
            anyhow::anyhow!("Invalid required level '{}': {}", record.required_level, e)
        })?;

        Ok(Wish::restore(
            record.id,
            record.description,
            required_level,
            codec::parse_flag(&record.approved),
            codec::parse_flag(&record.purchased),
            &record.child_username,
        )?)
    }
}

/// Wish repository backed by the wishes file of a [`FlatFileConnection`]
#[derive(Debug, Clone)]
pub struct WishRepository {
    connection: FlatFileConnection,
}

impl WishRepository {
    pub fn new(connection: FlatFileConnection) -> Self {
        Self { connection }
    }
}

impl WishStorage for WishRepository {
    fn load_wishes(&self) -> Result<Vec<Wish>> {
        let path = self.connection.wishes_path();
        let mut wishes = Vec::new();

        for (index, line) in codec::read_records(&path)?.iter().enumerate() {
            let Some(record) = WishRecord::from_line(line) else {
                debug!("Skipping short wish record on line {}", index + 1);
                continue;
            };
            match Wish::try_from(record) {
                Ok(wish) => wishes.push(wish),
                Err(e) => {
                    warn!("Failed to parse wish record on line {}: {}. Skipping.", index + 1, e);
                    continue;
                }
            }
        }

        info!("Loaded {} wishes from {:?}", wishes.len(), path);
        Ok(wishes)
    }

    fn save_wishes(&self, wishes: &[Wish]) -> Result<()> {
        self.connection.ensure_base_directory()?;
        let path = self.connection.wishes_path();
        codec::write_records(&path, wishes.iter().map(|w| WishRecord::from(w).into_line()))?;
        debug!("Saved {} wishes to {:?}", wishes.len(), path);
        Ok(())
    }
}
