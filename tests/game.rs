//! Game integration tests.

use bigtwo::{
    Card, DECK_SIZE, DealError, Game, GameOptions, GameState, HAND_SIZE, PassError, PlayError,
    SelectError, full_deck,
};

fn cards(specs: &[&str]) -> Vec<Card> {
    specs.iter().map(|s| s.parse().unwrap()).collect()
}

/// Builds a game where each player holds the given cards, topped up to 13
/// cards from the unshuffled deck in player order.
fn rigged(options: GameOptions, fixed: [&[&str]; 4]) -> Game {
    let fixed = fixed.map(cards);
    let spare: Vec<Card> = full_deck()
        .into_iter()
        .filter(|card| !fixed.iter().any(|hand| hand.contains(card)))
        .collect();
    let mut spare = spare.into_iter();
    let hands = fixed.map(|mut hand| {
        while hand.len() < HAND_SIZE {
            hand.push(spare.next().unwrap());
        }
        hand
    });
    Game::with_hands(options, [&hands[0], &hands[1], &hands[2], &hands[3]], 1).unwrap()
}

#[test]
fn deal_partitions_deck_and_opener_holds_diamond_three() {
    let game = Game::new(GameOptions::default(), 42);

    let mut all: Vec<Card> = game
        .hands()
        .iter()
        .flat_map(|hand| hand.cards().iter().copied())
        .collect();
    assert_eq!(all.len(), DECK_SIZE);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), DECK_SIZE);

    for hand in game.hands() {
        assert_eq!(hand.len(), HAND_SIZE);
        assert!(hand.cards().windows(2).all(|w| w[0].value() < w[1].value()));
    }

    assert!(game.current_hand().contains(Card::OPENING));
    assert_eq!(game.state(), GameState::AwaitingOpeningPlay);
    assert!(game.last_play().is_empty());
    assert_eq!(game.last_player(), None);
    assert_eq!(game.winner(), None);
}

#[test]
fn same_seed_deals_same_hands() {
    let a = Game::new(GameOptions::default(), 7);
    let b = Game::new(GameOptions::default(), 7);
    assert_eq!(a.hands(), b.hands());
    assert_eq!(a.current_player(), b.current_player());
}

#[test]
fn redeal_resets_table() {
    let mut game = Game::new(GameOptions::default(), 3);
    game.play(&[Card::OPENING]).unwrap();
    assert!(game.is_started());

    game.deal();
    assert_eq!(game.state(), GameState::AwaitingOpeningPlay);
    assert!(game.last_play().is_empty());
    assert_eq!(game.last_player(), None);
    assert!(game.current_hand().contains(Card::OPENING));
    assert!(game.hands().iter().all(|hand| hand.len() == HAND_SIZE));
}

#[test]
fn with_hands_validates_partition() {
    let deck = full_deck();

    let short = Game::with_hands(
        GameOptions::default(),
        [&deck[0..13], &deck[13..26], &deck[26..39], &deck[39..51]],
        1,
    );
    assert_eq!(short.unwrap_err(), DealError::WrongHandSize);

    let duplicated = Game::with_hands(
        GameOptions::default(),
        [&deck[0..13], &deck[0..13], &deck[26..39], &deck[39..52]],
        1,
    );
    assert_eq!(duplicated.unwrap_err(), DealError::DuplicateCard);

    let game = Game::with_hands(
        GameOptions::default(),
        [&deck[0..13], &deck[13..26], &deck[26..39], &deck[39..52]],
        1,
    )
    .unwrap();
    assert_eq!(game.current_player(), 0);
}

#[test]
fn opening_play_requires_diamond_three() {
    let mut game = rigged(
        GameOptions::default(),
        [&[], &[], &["3D", "4C", "5H"], &[]],
    );
    assert_eq!(game.current_player(), 2);

    assert_eq!(game.pass().unwrap_err(), PassError::NotStarted);
    assert_eq!(
        game.play(&cards(&["4C"])).unwrap_err(),
        PlayError::MissingOpeningCard
    );
    assert!(!game.is_started());
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.current_hand().len(), HAND_SIZE);

    // Any shape is accepted as long as it holds the Diamonds-3
    let outcome = game.play(&cards(&["3D", "4C"])).unwrap();
    assert_eq!(outcome.player, 2);
    assert_eq!(outcome.winner, None);
    assert!(game.is_started());
    assert_eq!(game.state(), GameState::InRound);
    assert_eq!(game.last_play(), cards(&["3D", "4C"]).as_slice());
    assert_eq!(game.last_player(), Some(2));
    assert_eq!(game.current_player(), 3);
    assert_eq!(game.hand(2).unwrap().len(), HAND_SIZE - 2);
}

#[test]
fn opening_shape_can_be_enforced() {
    let options = GameOptions::default().with_validate_opening_shape(true);
    let mut game = rigged(options, [&["3D", "4C"], &[], &[], &[]]);

    assert_eq!(
        game.play(&cards(&["3D", "4C"])).unwrap_err(),
        PlayError::NotAPair
    );
    game.play(&cards(&["3D"])).unwrap();
}

#[test]
fn singles_and_round_reset() {
    let mut game = rigged(
        GameOptions::default(),
        [&["3D"], &["6S", "7S"], &["7H"], &[]],
    );

    game.play(&cards(&["3D"])).unwrap();
    game.play(&cards(&["7S"])).unwrap();
    assert_eq!(
        game.play(&cards(&["7H"])).unwrap_err(),
        PlayError::NotHigher
    );
    assert_eq!(game.current_player(), 2);

    let first = game.pass().unwrap();
    assert_eq!(first.player, 2);
    assert_eq!(first.next_player, 3);
    assert!(!first.round_reset);
    assert!(!game.pass().unwrap().round_reset);

    let last = game.pass().unwrap();
    assert_eq!(last.next_player, 1);
    assert!(last.round_reset);
    assert!(game.last_play().is_empty());
    assert_eq!(game.last_player(), None);
    assert!(game.is_fresh_round());

    // The round winner must lead
    assert_eq!(game.pass().unwrap_err(), PassError::FreshRound);
    game.play(&cards(&["6S"])).unwrap();
    assert_eq!(game.last_player(), Some(1));
}

#[test]
fn pairs_must_share_rank_and_beat_last_pair() {
    let mut game = rigged(
        GameOptions::default(),
        [&["3D", "3C"], &["6S", "6C"], &["7S", "7H", "8S"], &["5D", "5C", "AS"]],
    );

    game.play(&cards(&["3D", "3C"])).unwrap();
    game.play(&cards(&["6S", "6C"])).unwrap();

    assert_eq!(
        game.play(&cards(&["7S", "8S"])).unwrap_err(),
        PlayError::NotAPair
    );
    game.play(&cards(&["7S", "7H"])).unwrap();

    assert_eq!(
        game.play(&cards(&["AS"])).unwrap_err(),
        PlayError::LengthMismatch
    );
    assert_eq!(
        game.play(&cards(&["5D", "5C"])).unwrap_err(),
        PlayError::NotHigher
    );
    assert_eq!(game.current_player(), 3);
    assert_eq!(game.last_play(), cards(&["7S", "7H"]).as_slice());
}

#[test]
fn five_card_hands_rank_by_classification() {
    let mut game = rigged(
        GameOptions::default(),
        [
            &["3D", "4C", "5H", "6S", "7D"],
            &["8H", "10H", "QH", "KH", "2H"],
            &["4D", "5D", "9D", "JD", "KD", "KS", "3S", "4S", "8S", "10S", "AS"],
            &["9C", "10C", "JC", "QC", "KC"],
        ],
    );

    game.play(&cards(&["3D", "4C", "5H", "6S", "7D"])).unwrap();
    game.play(&cards(&["8H", "10H", "QH", "KH", "2H"])).unwrap();

    assert_eq!(
        game.play(&cards(&["4D", "5D", "9D", "JD", "KS"])).unwrap_err(),
        PlayError::InvalidFiveCardShape
    );
    // Diamonds flush loses to the hearts flush whatever the ranks
    assert_eq!(
        game.play(&cards(&["4D", "5D", "9D", "JD", "KD"])).unwrap_err(),
        PlayError::NotHigher
    );
    game.play(&cards(&["3S", "4S", "8S", "10S", "AS"])).unwrap();
    game.play(&cards(&["9C", "10C", "JC", "QC", "KC"])).unwrap();

    assert_eq!(game.last_player(), Some(3));
    assert_eq!(game.current_player(), 0);
}

#[test]
fn five_cards_cannot_follow_unclassified_opening() {
    let mut game = rigged(
        GameOptions::default(),
        [&["3D", "5C", "9H", "JS", "KD"], &["4C", "5H", "6S", "7D", "8C"], &[], &[]],
    );

    game.play(&cards(&["3D", "5C", "9H", "JS", "KD"])).unwrap();
    assert_eq!(
        game.play(&cards(&["4C", "5H", "6S", "7D", "8C"])).unwrap_err(),
        PlayError::InvalidLastPlay
    );
}

#[test]
fn fresh_round_shape_validation() {
    let fixed: [&[&str]; 4] = [&["3D", "4D", "4C", "4H"], &[], &[], &[]];

    let mut strict = rigged(GameOptions::default(), fixed);
    strict.play(&cards(&["3D"])).unwrap();
    for _ in 0..3 {
        strict.pass().unwrap();
    }
    assert_eq!(strict.current_player(), 0);
    assert_eq!(
        strict.play(&cards(&["4D", "4C", "4H"])).unwrap_err(),
        PlayError::InvalidLength
    );

    let mut loose = rigged(
        GameOptions::default().with_validate_fresh_round_shape(false),
        fixed,
    );
    loose.play(&cards(&["3D"])).unwrap();
    for _ in 0..3 {
        loose.pass().unwrap();
    }
    loose.play(&cards(&["4D", "4C", "4H"])).unwrap();
    assert_eq!(loose.last_play().len(), 3);
}

#[test]
fn play_rejects_foreign_and_repeated_cards() {
    let mut game = Game::new(GameOptions::default(), 11);
    let opener = game.current_player();
    let foreign = game.hands()[(opener + 1) % 4].cards()[0];

    assert_eq!(game.play(&[]).unwrap_err(), PlayError::Empty);
    assert_eq!(
        game.play(&[Card::OPENING, foreign]).unwrap_err(),
        PlayError::CardNotInHand
    );
    assert_eq!(
        game.play(&[Card::OPENING, Card::OPENING]).unwrap_err(),
        PlayError::DuplicateCard
    );
    assert!(!game.is_started());
    assert_eq!(game.current_player(), opener);
}

#[test]
fn emptying_a_hand_ends_the_game() {
    let mut game = Game::new(GameOptions::default(), 5);
    let opener = game.current_player();
    let whole_hand = game.current_hand().cards().to_vec();

    let outcome = game.play(&whole_hand).unwrap();
    assert_eq!(outcome.winner, Some(opener));
    assert!(game.is_game_over());
    assert_eq!(game.state(), GameState::GameOver { winner: opener });
    assert_eq!(game.winner(), Some(opener));
    assert_eq!(game.current_player(), opener);

    let next = game.hands()[(opener + 1) % 4].cards()[0];
    assert_eq!(game.play(&[next]).unwrap_err(), PlayError::GameOver);
    assert_eq!(game.pass().unwrap_err(), PassError::GameOver);
    assert_eq!(game.toggle_select(next).unwrap_err(), SelectError::GameOver);
}

#[test]
fn selection_builds_the_play() {
    let mut game = rigged(GameOptions::default(), [&["3D", "3S"], &["4H"], &[], &[]]);
    let three_spades: Card = "3S".parse().unwrap();

    assert!(game.toggle_select(Card::OPENING).unwrap());
    assert!(!game.toggle_select(Card::OPENING).unwrap());
    assert_eq!(
        game.toggle_select("4H".parse().unwrap()).unwrap_err(),
        SelectError::CardNotInHand
    );

    // A rejected play keeps the selection
    game.toggle_select(three_spades).unwrap();
    assert_eq!(
        game.play_selected().unwrap_err(),
        PlayError::MissingOpeningCard
    );
    assert!(game.is_selected(three_spades));

    game.toggle_select(Card::OPENING).unwrap();
    let outcome = game.play_selected().unwrap();
    assert_eq!(outcome.cards, cards(&["3D", "3S"]));
    assert!(game.selected().is_empty());
    assert_eq!(game.current_player(), 1);

    game.toggle_select("4H".parse().unwrap()).unwrap();
    game.pass().unwrap();
    assert!(game.selected().is_empty());
}
