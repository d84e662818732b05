//! Client and organization ranking by mention frequency.

use std::collections::HashMap;

use meetbrief_core::{ClientEntity, Result};
use meetbrief_nlp::NlpEngine;

/// Every PERSON/ORG mention counted by exact text, most mentioned first.
/// Ties keep the order in which names were first seen.
pub fn rank_clients(engine: &dyn NlpEngine, transcript: &str) -> Result<Vec<ClientEntity>> {
    let mut ranked: Vec<ClientEntity> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entity in engine.recognize_entities(transcript)? {
        if !entity.label.is_party() {
            continue;
        }
        match index.get(&entity.text) {
            Some(&i) => ranked[i].mentions += 1,
            None => {
                index.insert(entity.text.clone(), ranked.len());
                ranked.push(ClientEntity {
                    name: entity.text,
                    mentions: 1,
                });
            }
        }
    }

    // sort_by is stable
    ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions));
    Ok(ranked)
}

/// Names of the `topn` most mentioned people and organizations.
pub fn extract_clients(engine: &dyn NlpEngine, transcript: &str, topn: usize) -> Result<Vec<String>> {
    Ok(rank_clients(engine, transcript)?
        .into_iter()
        .take(topn)
        .map(|c| c.name)
        .collect())
}
