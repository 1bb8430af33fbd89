//! Round orchestration and end-to-end tests.

use std::process::Command;

use bjdeal::{
    Card, DealError, Deck, DeckOptions, Rank, Round, RoundOptions, RoundSummary, Suit,
};

fn deck_from_draws(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::from_cards(cards)
}

#[test]
fn deal_gives_player_then_dealer() {
    let round = Round::new(RoundOptions::default(), 0);
    let deck = deck_from_draws(&[
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Nine, Suit::Diamonds),
        Card::new(Rank::Two, Suit::Hearts),
    ]);

    let summary = round.deal(deck).unwrap();
    assert_eq!(summary.player_value(), 21);
    assert_eq!(summary.dealer_value(), 19);
    assert_eq!(summary.cards_remaining, 1);
    assert_eq!(
        summary.to_string(),
        "Player hand value: 21\nDealer hand value: 19"
    );
}

#[test]
fn short_deck_is_an_error_not_a_short_hand() {
    let round = Round::new(RoundOptions::default(), 0);
    let deck = deck_from_draws(&[
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Ten, Suit::Clubs),
    ]);

    assert_eq!(
        round.deal(deck),
        Err(DealError::NotEnoughCards {
            needed: 4,
            remaining: 3
        })
    );
}

#[test]
fn two_card_values_stay_in_range() {
    for seed in 0..200 {
        let summary = Round::new(RoundOptions::default(), seed).play().unwrap();
        assert_eq!(summary.player.len(), 2);
        assert_eq!(summary.dealer.len(), 2);
        assert_eq!(summary.cards_remaining, 48);
        assert!((4..=21).contains(&summary.player_value()));
        assert!((4..=21).contains(&summary.dealer_value()));
    }
}

#[test]
fn same_seed_same_round() {
    let a = Round::new(RoundOptions::default(), 12).play().unwrap();
    let b = Round::new(RoundOptions::default(), 12).play().unwrap();
    assert_eq!(a, b);
}

#[test]
fn options_control_deck_and_hand_size() {
    let options = RoundOptions::default()
        .with_deck(DeckOptions::legacy_two_suit())
        .with_cards_per_hand(3);
    let summary: RoundSummary = Round::new(options, 5).play().unwrap();
    assert_eq!(summary.player.len(), 3);
    assert_eq!(summary.dealer.len(), 3);
    assert_eq!(summary.cards_remaining, 20);

    let too_many = RoundOptions::default()
        .with_deck(DeckOptions::default().with_suits(&[Suit::Spades]))
        .with_cards_per_hand(7);
    assert_eq!(
        Round::new(too_many, 5).play(),
        Err(DealError::NotEnoughCards {
            needed: 14,
            remaining: 13
        })
    );
}

#[cfg(feature = "std")]
#[test]
fn entropy_round_deals_full_hands() {
    let summary = Round::from_entropy(RoundOptions::default()).play().unwrap();
    assert_eq!(summary.player.len() + summary.dealer.len(), 4);
}

#[cfg(feature = "cli")]
#[test]
fn binary_prints_two_value_lines() {
    let output = Command::new(env!("CARGO_BIN_EXE_bjdeal"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    for (line, prefix) in lines.iter().zip(["Player hand value: ", "Dealer hand value: "]) {
        let value: u16 = line.strip_prefix(prefix).unwrap().parse().unwrap();
        assert!((4..=21).contains(&value));
    }
}
