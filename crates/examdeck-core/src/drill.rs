//! Flashcard drill engine.
//!
//! Cycles through a deck of cards, tracks per-card "known" vs "repeat"
//! classification, and requeues repeat cards for another pass once the end
//! of the deck is reached.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Flashcard;

/// A drill over a deck of flashcards.
///
/// Each deck instance is exclusively owned by the view that created it; no
/// drill state survives the process.
#[derive(Debug)]
pub struct DrillDeck {
    cards: Vec<Flashcard>,
    cursor: usize,
    revealed: bool,
    known: HashSet<u32>,
    repeat: HashSet<u32>,
}

impl DrillDeck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            cursor: 0,
            revealed: false,
            known: HashSet::new(),
            repeat: HashSet::new(),
        }
    }

    /// The card currently shown, or `None` for an empty deck.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.get(self.cursor)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Zero-based position of the current card.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the answer side is currently shown.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn repeat_count(&self) -> usize {
        self.repeat.len()
    }

    /// Toggle answer-side visibility. Purely presentational.
    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    /// Mark the current card as known and advance. Idempotent per card.
    pub fn mark_known(&mut self) {
        if let Some(id) = self.current_card().map(|card| card.id) {
            self.known.insert(id);
            self.advance();
        }
    }

    /// Mark the current card for another pass and advance.
    pub fn mark_repeat(&mut self) {
        if let Some(id) = self.current_card().map(|card| card.id) {
            self.repeat.insert(id);
            self.advance();
        }
    }

    /// Move past the current card.
    ///
    /// Past the last card, a non-empty repeat set replaces the active deck
    /// with exactly the repeat cards (deck order preserved), clears the set,
    /// and resets the cursor. With an empty repeat set the deck stays
    /// exhausted and the cursor stays on the last card.
    fn advance(&mut self) {
        self.revealed = false;
        if self.cursor + 1 < self.cards.len() {
            self.cursor += 1;
        } else if !self.repeat.is_empty() {
            self.cards.retain(|card| self.repeat.contains(&card.id));
            self.repeat.clear();
            self.cursor = 0;
        }
    }

    /// Whether every card has been classified known with nothing queued for
    /// another pass. The consuming view treats this as session completion.
    pub fn is_complete(&self) -> bool {
        match self.cards.last() {
            Some(last) => {
                self.cursor + 1 == self.cards.len()
                    && self.known.contains(&last.id)
                    && self.repeat.is_empty()
            }
            None => true,
        }
    }

    /// Reorder the active deck randomly and reset the cursor.
    ///
    /// Unbiased Fisher–Yates via `rand`; card identity and content are
    /// untouched, only order. Seedable through the caller-supplied `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
        self.revealed = false;
    }

    /// Restart the drill: cursor to the front, classifications cleared.
    ///
    /// Cards removed by a completed requeue pass are not restored; the
    /// drill restarts over the deck as it stands.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.revealed = false;
        self.known.clear();
        self.repeat.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cards(n: u32) -> Vec<Flashcard> {
        (1..=n)
            .map(|id| Flashcard {
                id,
                question: format!("Question {id}?"),
                answer: format!("Answer {id}"),
                category: "History".into(),
            })
            .collect()
    }

    #[test]
    fn flip_toggles_visibility() {
        let mut deck = DrillDeck::new(cards(2));
        assert!(!deck.is_revealed());
        deck.flip();
        assert!(deck.is_revealed());
        deck.flip();
        assert!(!deck.is_revealed());
    }

    #[test]
    fn marking_hides_answer_and_advances() {
        let mut deck = DrillDeck::new(cards(3));
        deck.flip();
        deck.mark_known();
        assert_eq!(deck.cursor(), 1);
        assert!(!deck.is_revealed());
        assert_eq!(deck.known_count(), 1);
    }

    #[test]
    fn repeat_cards_are_requeued() {
        let mut deck = DrillDeck::new(cards(3));
        deck.mark_known(); // card 1
        deck.mark_repeat(); // card 2
        deck.mark_known(); // card 3, end of deck

        assert_eq!(deck.card_count(), 1);
        assert_eq!(deck.current_card().unwrap().id, 2);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.repeat_count(), 0);
        assert!(!deck.is_complete());
    }

    #[test]
    fn requeue_preserves_deck_order() {
        let mut deck = DrillDeck::new(cards(4));
        deck.mark_repeat(); // card 1
        deck.mark_known(); // card 2
        deck.mark_repeat(); // card 3
        deck.mark_known(); // card 4

        let mut ids = Vec::new();
        while !deck.is_complete() {
            ids.push(deck.current_card().unwrap().id);
            deck.mark_known();
        }
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn known_marking_is_idempotent() {
        let mut deck = DrillDeck::new(cards(2));
        deck.mark_known(); // card 1
        deck.mark_repeat(); // card 2, requeued; deck is now [card 2]
        deck.mark_known(); // card 2
        // Second pass over the same card.
        deck.mark_known();
        assert_eq!(deck.known_count(), 2);
    }

    #[test]
    fn exhausted_deck_stays_on_last_card() {
        let mut deck = DrillDeck::new(cards(2));
        deck.mark_known();
        deck.mark_known();
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.card_count(), 2);
        assert!(deck.is_complete());

        // Further marking keeps the deck exhausted.
        deck.mark_known();
        assert_eq!(deck.cursor(), 1);
        assert!(deck.is_complete());
    }

    #[test]
    fn empty_deck_is_complete() {
        let deck = DrillDeck::new(vec![]);
        assert!(deck.current_card().is_none());
        assert!(deck.is_complete());
    }

    #[test]
    fn shuffle_is_seedable_and_preserves_cards() {
        let mut deck_a = DrillDeck::new(cards(10));
        let mut deck_b = DrillDeck::new(cards(10));

        deck_a.shuffle(&mut StdRng::seed_from_u64(42));
        deck_b.shuffle(&mut StdRng::seed_from_u64(42));

        let order = |deck: &DrillDeck| -> Vec<u32> { deck.cards.iter().map(|c| c.id).collect() };
        assert_eq!(order(&deck_a), order(&deck_b));
        assert_eq!(deck_a.cursor(), 0);

        let mut sorted = order(&deck_a);
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn reset_clears_classification_but_not_requeued_removals() {
        let mut deck = DrillDeck::new(cards(3));
        deck.mark_known(); // card 1
        deck.mark_repeat(); // card 2
        deck.mark_known(); // card 3 -> deck becomes [card 2]

        deck.reset();
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.known_count(), 0);
        assert_eq!(deck.repeat_count(), 0);
        // The requeue already replaced the deck; reset does not undo that.
        assert_eq!(deck.card_count(), 1);
    }
}
