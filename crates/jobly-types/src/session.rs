use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Transcript sent to the history endpoint so a conversation can be shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub messages: Vec<Message>,
}

impl HistoryRecord {
    pub fn new(messages: Vec<Message>) -> Self {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let entropy = uuid::Uuid::new_v4().as_u128();
        Self {
            id: history_id(now_ms, entropy),
            messages,
        }
    }
}

const SUFFIX_LEN: usize = 4;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `conv_<epoch-ms>_<4 base36 chars>`
pub fn history_id(epoch_ms: i64, entropy: u128) -> String {
    let mut suffix = [0u8; SUFFIX_LEN];
    let mut n = entropy;
    for slot in suffix.iter_mut() {
        *slot = BASE36[(n % 36) as usize];
        n /= 36;
    }
    let suffix: String = suffix.iter().map(|&b| b as char).collect();
    format!("conv_{}_{}", epoch_ms, suffix)
}
