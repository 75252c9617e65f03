//! Extension list view model.
//!
//! # Responsibility
//! - Map a sequence of extensions to one card per extension, in order.
//! - Track removal transitions until the card is detached.
//!
//! # Invariants
//! - `render` always replaces every prior card, including leaving ones.
//! - A card is detached no earlier than `REMOVE_TRANSITION` after removal
//!   started.
//! - Cards carry the extension id; handlers never key on display text.

use crate::model::extension::{Extension, ExtensionId};
use std::time::{Duration, Instant};

/// Fade/slide duration applied before a removed card is detached.
pub const REMOVE_TRANSITION: Duration = Duration::from_millis(300);

/// Presentation phase of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Visible,
    /// Removal transition running; detach at `detach_at`.
    Leaving { detach_at: Instant },
}

/// Rendered element for one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionCard {
    pub id: ExtensionId,
    pub name: String,
    pub description: String,
    pub logo: String,
    /// Toggle control state.
    pub checked: bool,
    pub phase: CardPhase,
}

impl ExtensionCard {
    fn from_extension(extension: &Extension) -> Self {
        Self {
            id: extension.id,
            name: extension.name.clone(),
            description: extension.description.clone(),
            logo: extension.logo.clone(),
            checked: extension.is_active,
            phase: CardPhase::Visible,
        }
    }

    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, CardPhase::Leaving { .. })
    }
}

/// Container owning the rendered cards.
///
/// A fresh view is unrendered: nothing has been drawn into the container
/// yet. It becomes rendered on the first `render` call.
#[derive(Debug, Default)]
pub struct ExtensionListView {
    cards: Vec<ExtensionCard>,
    rendered: bool,
}

impl ExtensionListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the container and appends one card per extension.
    pub fn render<'a>(&mut self, extensions: impl IntoIterator<Item = &'a Extension>) {
        self.cards = extensions
            .into_iter()
            .map(ExtensionCard::from_extension)
            .collect();
        self.rendered = true;
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Cards currently attached, in render order.
    pub fn cards(&self) -> &[ExtensionCard] {
        &self.cards
    }

    pub fn card(&self, id: ExtensionId) -> Option<&ExtensionCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Display names of attached cards, in render order.
    pub fn names(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.name.as_str()).collect()
    }

    /// Mirrors a toggle change on the card. Returns `false` when absent.
    pub fn set_checked(&mut self, id: ExtensionId, checked: bool) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Starts the removal transition for the card with `id`.
    ///
    /// Returns `false` when the card is absent or already leaving.
    pub fn begin_removal(&mut self, id: ExtensionId, now: Instant) -> bool {
        match self.cards.iter_mut().find(|card| card.id == id) {
            Some(card) if !card.is_leaving() => {
                card.phase = CardPhase::Leaving {
                    detach_at: now + REMOVE_TRANSITION,
                };
                true
            }
            _ => false,
        }
    }

    /// Detaches every leaving card whose transition has elapsed at `now`.
    ///
    /// Returns the detached ids in render order.
    pub fn detach_expired(&mut self, now: Instant) -> Vec<ExtensionId> {
        let mut detached = Vec::new();
        self.cards.retain(|card| match card.phase {
            CardPhase::Leaving { detach_at } if detach_at <= now => {
                detached.push(card.id);
                false
            }
            _ => true,
        });
        detached
    }

    /// Earliest pending detach deadline, if any card is leaving.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.cards
            .iter()
            .filter_map(|card| match card.phase {
                CardPhase::Leaving { detach_at } => Some(detach_at),
                CardPhase::Visible => None,
            })
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtensionListView, REMOVE_TRANSITION};
    use crate::model::extension::{Extension, ExtensionRecord};
    use std::time::{Duration, Instant};

    fn extensions() -> Vec<Extension> {
        vec![
            Extension::from_record(ExtensionRecord::new("A", true)),
            Extension::from_record(ExtensionRecord::new("B", false)),
        ]
    }

    #[test]
    fn removal_detaches_only_after_transition() {
        let items = extensions();
        let mut view = ExtensionListView::new();
        view.render(&items);

        let start = Instant::now();
        assert!(view.begin_removal(items[0].id, start));
        assert!(!view.begin_removal(items[0].id, start));
        assert_eq!(view.next_deadline(), Some(start + REMOVE_TRANSITION));

        assert!(view
            .detach_expired(start + Duration::from_millis(299))
            .is_empty());
        assert_eq!(view.cards().len(), 2);

        assert_eq!(view.detach_expired(start + REMOVE_TRANSITION), vec![items[0].id]);
        assert_eq!(view.names(), vec!["B"]);
        assert_eq!(view.next_deadline(), None);
    }

    #[test]
    fn render_drops_leaving_cards() {
        let items = extensions();
        let mut view = ExtensionListView::new();
        view.render(&items);
        view.begin_removal(items[1].id, Instant::now());

        view.render(items.iter().take(1));
        assert_eq!(view.names(), vec!["A"]);
        assert!(!view.cards()[0].is_leaving());
    }
}
