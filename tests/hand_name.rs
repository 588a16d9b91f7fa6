//! Hand naming integration tests.

use handname::convert::{RANK_SYMBOLS, SUIT_SYMBOLS, convert};
use handname::split::Splitter;
use handname::{
    Card, Hand, HandName, HandParser, ParseError, ParserOptions, Pattern, Rank, Suit,
    get_hand_name,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn names_each_pattern() {
    assert_eq!(get_hand_name("AS,3S,5S,9S,KS"), "Flush");
    assert_eq!(get_hand_name("AS,AH,AD,7D,KC"), "ThreeOfAKind");
    assert_eq!(get_hand_name("AS,AH,4D,7D,KC"), "Pair");
    assert_eq!(get_hand_name("AS,2H,3D,7C,KC"), "No Match");
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(get_hand_name("A,AH,4D,7D,KC"), "Error");
    assert_eq!(get_hand_name("AS,AH,AD,AC,AK"), "Error");
    assert_eq!(get_hand_name("AS,AH,4D,7D,KCX"), "Error");
    assert_eq!(get_hand_name("AS,AH,4d,7D,KC"), "Error");
    assert_eq!(get_hand_name("AS,1H,4D,7D,KC"), "Error");
    assert_eq!(get_hand_name("AS"), "Error");
    assert_eq!(get_hand_name(""), "Error");
    assert_eq!(get_hand_name(",,,"), "Error");
    assert_eq!(get_hand_name(" "), "Error");
    assert_eq!(get_hand_name("AS, AH"), "Error");
}

#[test]
fn parse_errors_carry_details() {
    let parser = HandParser::default();

    assert_eq!(
        parser.parse("A,AH").unwrap_err(),
        ParseError::InvalidTokenLength { length: 1 }
    );
    assert_eq!(
        parser.parse("AS,XH").unwrap_err(),
        ParseError::UnknownRank('X')
    );
    assert_eq!(
        parser.parse("AS,Ah").unwrap_err(),
        ParseError::UnknownSuit('h')
    );
    assert_eq!(
        parser.parse("KD").unwrap_err(),
        ParseError::TooFewCards {
            count: 1,
            minimum: 2
        }
    );
    assert_eq!(
        parser.parse("7S,7H,7D,7C,7S").unwrap_err(),
        ParseError::FiveOfAKind(Rank::Seven)
    );
}

#[test]
fn length_is_checked_before_symbols() {
    let parser = HandParser::default();
    assert_eq!(
        parser.parse("XX,AH,4D,7D,KCC").unwrap_err(),
        ParseError::InvalidTokenLength { length: 3 }
    );
}

#[test]
fn length_counts_characters() {
    let parser = HandParser::default();
    assert_eq!(
        parser.parse("A♠,KH").unwrap_err(),
        ParseError::UnknownSuit('♠')
    );
}

#[test]
fn five_of_a_kind_rejected_in_larger_hands() {
    assert_eq!(get_hand_name("9S,9H,9D,9C,9S,2H"), "Error");
    assert_eq!(get_hand_name("9S,9H,9D,9C,2H"), "No Match");
}

#[test]
fn flush_beats_rank_patterns() {
    assert_eq!(get_hand_name("AS,AS,4S,7S,KS"), "Flush");
    assert_eq!(get_hand_name("AH,AH,AH,7H,KH"), "Flush");
    assert_eq!(get_hand_name("2C,2C"), "Flush");
}

#[test]
fn three_of_a_kind_beats_pair() {
    assert_eq!(get_hand_name("AS,AH,AD,KD,KC"), "ThreeOfAKind");
}

#[test]
fn four_of_a_kind_is_not_a_pattern() {
    assert_eq!(get_hand_name("AS,AH,AD,AC,KC"), "No Match");
    assert_eq!(get_hand_name("AS,AH,AD,AC,KC,KD"), "Pair");
}

#[test]
fn rank_aliases() {
    assert_eq!(get_hand_name("QS,QH,OD,7C,KC"), "ThreeOfAKind");
    assert_eq!(get_hand_name("TS,tH,4D,7C,KC"), "Pair");
    assert_eq!(get_hand_name("tS,QH"), "No Match");
    assert_eq!(get_hand_name("jS,QH"), "Error");
    assert_eq!(get_hand_name("qS,QH"), "Error");
}

#[test]
fn converters_return_none_for_unknown_symbols() {
    assert_eq!(convert('O', RANK_SYMBOLS), Some(Rank::Queen));
    assert_eq!(convert('t', RANK_SYMBOLS), Some(Rank::Ten));
    assert_eq!(convert('1', RANK_SYMBOLS), None);
    assert_eq!(convert('C', SUIT_SYMBOLS), Some(Suit::Clubs));
    assert_eq!(convert('c', SUIT_SYMBOLS), None);

    for rank in Rank::ALL {
        assert_eq!(Rank::from_symbol(rank.symbol()), Some(rank));
    }
    for suit in Suit::ALL {
        assert_eq!(Suit::from_symbol(suit.symbol()), Some(suit));
    }
}

#[test]
fn card_from_str_and_display() {
    let parsed: Card = "tH".parse().unwrap();
    assert_eq!(parsed, card(Suit::Hearts, Rank::Ten));
    assert_eq!(parsed.to_string(), "TH");

    let queen: Card = "OD".parse().unwrap();
    assert_eq!(queen.to_string(), "QD");

    assert_eq!(
        "10H".parse::<Card>().unwrap_err(),
        ParseError::InvalidTokenLength { length: 3 }
    );
}

#[test]
fn splitter_drops_empty_fragments() {
    let mut splitter = Splitter::new(vec![',']);
    assert_eq!(splitter.split(",AS,,KH,").collect::<Vec<_>>(), ["AS", "KH"]);
    assert_eq!(splitter.split("").count(), 0);
    assert_eq!(splitter.split("AS").collect::<Vec<_>>(), ["AS"]);

    splitter.add_delimiter(';');
    assert_eq!(splitter.delimiters(), [',', ';']);
    assert_eq!(splitter.split("AS;KH,2D").collect::<Vec<_>>(), ["AS", "KH", "2D"]);

    let empty = Splitter::default();
    assert_eq!(empty.split("AS,KH").collect::<Vec<_>>(), ["AS,KH"]);
}

#[test]
fn hand_keeps_order_and_duplicates() {
    let parser = HandParser::default();
    let hand = parser.parse("KC,2H,KC").unwrap();

    assert_eq!(
        hand.cards(),
        [
            card(Suit::Clubs, Rank::King),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Clubs, Rank::King),
        ]
    );
    assert_eq!(hand.rank_counts()[&Rank::King], 2);
    assert_eq!(hand.suit_counts()[&Suit::Hearts], 1);
    assert_eq!(parser.classify("KC,2H,KC").unwrap(), Some(Pattern::TwoOfAKind));
}

#[test]
fn hand_from_card_vec() {
    let cards = vec![
        card(Suit::Diamonds, Rank::Jack),
        card(Suit::Diamonds, Rank::Three),
    ];
    let hand = Hand::from(cards.clone());

    assert_eq!(hand.cards(), cards.as_slice());
    assert_eq!(hand.len(), 2);
    assert!(!hand.is_empty());
    assert!(Hand::new().is_empty());
    assert_eq!(Pattern::find(hand.cards()), Some(Pattern::Flush));
}

#[test]
fn pattern_predicates() {
    let empty: [Card; 0] = [];
    assert!(!Pattern::Flush.is_match(&empty));
    assert!(Pattern::Flush.is_match(&[card(Suit::Spades, Rank::Ace)]));
    assert_eq!(Pattern::find(&empty), None);

    let full_house: Hand = [
        card(Suit::Spades, Rank::Ace),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::King),
    ]
    .into_iter()
    .collect();
    assert!(Pattern::ThreeOfAKind.is_match(full_house.cards()));
    assert!(Pattern::TwoOfAKind.is_match(full_house.cards()));
    assert!(!Pattern::Flush.is_match(full_house.cards()));
    assert_eq!(Pattern::find(full_house.cards()), Some(Pattern::ThreeOfAKind));

    assert_eq!(Pattern::TwoOfAKind.hand_name(), HandName::Pair);
}

#[test]
fn options_builder_sets_fields() {
    let options = ParserOptions::default()
        .with_delimiters(vec![';'])
        .with_delimiter(' ')
        .with_min_cards(5);

    assert_eq!(options.delimiters, [';', ' ']);
    assert_eq!(options.min_cards, 5);
}

#[test]
fn custom_options_change_parsing() {
    let parser = HandParser::new(ParserOptions::default().with_delimiter(' '));
    assert_eq!(parser.hand_name("AS, AH, 4D"), HandName::Pair);

    let strict = HandParser::new(ParserOptions::default().with_min_cards(5));
    assert_eq!(
        strict.parse("AS,AH,4D").unwrap_err(),
        ParseError::TooFewCards {
            count: 3,
            minimum: 5
        }
    );
    assert_eq!(strict.options().min_cards, 5);
}

#[test]
fn hand_name_display_matches_output() {
    let names = [
        (HandName::Flush, "Flush"),
        (HandName::ThreeOfAKind, "ThreeOfAKind"),
        (HandName::Pair, "Pair"),
        (HandName::NoMatch, "No Match"),
        (HandName::Error, "Error"),
    ];
    for (name, text) in names {
        assert_eq!(name.to_string(), text);
    }
}
