/**
 * Choose the cards for a study or quiz session.
 *
 * Cards are drawn at random with replacement, so a session may be longer than the
 * number of cards available. The drawn cards are then reordered so that cards from the
 * same section are spread out: each section's cards are shuffled, and the deck is built
 * in rounds, taking one card from each section per round in a random order.
 *
 * Version: October 2026
 */
use rand::seq::SliceRandom;
use rand::Rng;

use super::card::Card;


/// Return a new deck of `count` cards drawn from the sections in `sections`. If no card
/// in `pool` belongs to a selected section, the whole pool is used instead.
///
/// The deck is empty only if `count` is zero or `pool` is empty.
pub fn compose<'a, R: Rng>(
    pool: &'a [Card],
    sections: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<&'a Card> {
    let candidates = filter_cards(pool, sections);
    let sample = sample(&candidates, count, rng);
    spread(sample, rng)
}


fn filter_cards<'a>(pool: &'a [Card], sections: &[String]) -> Vec<&'a Card> {
    let candidates: Vec<&Card> = pool
        .iter()
        .filter(|card| sections.iter().any(|s| s == card.section()))
        .collect();

    if candidates.is_empty() {
        if !pool.is_empty() {
            log::warn!("no cards in the selected sections, using all {} cards", pool.len());
        }
        pool.iter().collect()
    } else {
        candidates
    }
}


/// Draw `count` cards uniformly at random, with replacement.
fn sample<'a, R: Rng>(candidates: &[&'a Card], count: usize, rng: &mut R) -> Vec<&'a Card> {
    if candidates.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| candidates[rng.gen_range(0..candidates.len())])
        .collect()
}


/// Reorder `cards` to avoid runs of cards from the same section.
fn spread<'a, R: Rng>(cards: Vec<&'a Card>, rng: &mut R) -> Vec<&'a Card> {
    let total = cards.len();

    // Buckets are kept in order of first appearance so that a seeded RNG always yields
    // the same deck.
    let mut buckets: Vec<(&str, Vec<&Card>)> = Vec::new();
    for card in cards {
        match buckets.iter_mut().find(|(section, _)| *section == card.section()) {
            Some((_, bucket)) => bucket.push(card),
            None => buckets.push((card.section(), vec![card])),
        }
    }

    for (_, bucket) in buckets.iter_mut() {
        bucket.shuffle(rng);
    }

    let mut order: Vec<usize> = (0..buckets.len()).collect();
    let mut deck = Vec::with_capacity(total);
    while deck.len() < total {
        order.shuffle(rng);
        for i in order.iter() {
            if let Some(card) = buckets[*i].1.pop() {
                deck.push(card);
            }
        }
    }
    deck
}
