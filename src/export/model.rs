// src/export/model.rs

use crate::core::render::Card;
use serde::Serialize;

/// Flat row for exported cards (one per visible event).
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CardExport {
    pub id: u32,
    pub tag: String,
    pub sport: String,
    pub channel: String,
    pub title: String,
    pub competition: String,
    pub date: String,
    pub date_label: String,
    pub time: String,
}

impl From<&Card> for CardExport {
    fn from(c: &Card) -> Self {
        Self {
            id: c.id,
            tag: c.tag.clone(),
            sport: c.sport.clone(),
            channel: c.channel.clone(),
            title: c.title.clone(),
            competition: c.competition.clone(),
            date: c.date.clone(),
            date_label: c.date_label.clone(),
            time: c.time.clone(),
        }
    }
}

pub(crate) fn cards_to_rows(cards: &[Card]) -> Vec<CardExport> {
    cards.iter().map(CardExport::from).collect()
}
