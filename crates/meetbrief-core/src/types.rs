use serde::{Deserialize, Serialize};

/// A transcript sentence flagged as describing a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub text: String,
    /// PERSON / ORG mentions inside the sentence, in engine order.
    pub owners: Vec<String>,
    /// DATE / TIME mentions inside the sentence, in engine order.
    pub dates: Vec<String>,
}

/// A PERSON or ORG mention with its frequency across the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEntity {
    pub name: String,
    pub mentions: usize,
}

/// The structured brief returned for one transcript.
///
/// Field names are part of the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub summary: String,
    pub action_items: Vec<ActionItem>,
    pub clients: Vec<String>,
    pub requirements: Vec<String>,
    /// Map-stage sentences, before the final reduction.
    pub minutes: Vec<String>,
}
