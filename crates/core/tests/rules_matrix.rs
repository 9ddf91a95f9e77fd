use patience_core::{Card, Foundation, Rank, Suit, Tableau};

macro_rules! foundation_case {
    ($name:ident, [$(($s:ident, $r:ident)),*], ($cs:ident, $cr:ident), $expected:expr) => {
        #[test]
        fn $name() {
            let mut foundation = Foundation::new();
            $(foundation.push(Card::new(Suit::$s, Rank::$r)).unwrap();)*
            let candidate = Card::new(Suit::$cs, Rank::$cr);
            assert_eq!(foundation.accepts(&candidate), $expected);
        }
    };
}

macro_rules! tableau_case {
    ($name:ident, [$(($s:ident, $r:ident)),*], ($cs:ident, $cr:ident), $expected:expr) => {
        #[test]
        fn $name() {
            let mut tableau = Tableau::new(0);
            $(tableau.place(Card::new(Suit::$s, Rank::$r)).unwrap();)*
            let candidate = Card::new(Suit::$cs, Rank::$cr);
            assert_eq!(tableau.accepts(&candidate), $expected);
        }
    };
}

foundation_case!(foundation_empty_takes_ace, [], (Hearts, Ace), true);
foundation_case!(foundation_empty_rejects_two, [], (Hearts, Two), false);
foundation_case!(foundation_empty_rejects_king, [], (Spades, King), false);
foundation_case!(
    foundation_follows_suit_upward,
    [(Hearts, Ace)],
    (Hearts, Two),
    true
);
foundation_case!(
    foundation_rejects_wrong_suit,
    [(Hearts, Ace), (Hearts, Two)],
    (Spades, Three),
    false
);
foundation_case!(
    foundation_rejects_rank_gap,
    [(Hearts, Ace)],
    (Hearts, Three),
    false
);
foundation_case!(
    foundation_rejects_rank_repeat,
    [(Hearts, Ace), (Hearts, Two)],
    (Hearts, Two),
    false
);
foundation_case!(
    foundation_rejects_descent,
    [(Clubs, Ace), (Clubs, Two), (Clubs, Three)],
    (Clubs, Two),
    false
);

tableau_case!(tableau_empty_takes_king, [], (Spades, King), true);
tableau_case!(tableau_empty_rejects_queen, [], (Spades, Queen), false);
tableau_case!(tableau_empty_rejects_ace, [], (Diamonds, Ace), false);
tableau_case!(
    tableau_rejects_second_king,
    [(Spades, King)],
    (Hearts, King),
    false
);
tableau_case!(
    tableau_rejects_same_color_queen,
    [(Spades, King)],
    (Spades, Queen),
    false
);
tableau_case!(
    tableau_rejects_other_black_queen,
    [(Spades, King)],
    (Clubs, Queen),
    false
);
tableau_case!(
    tableau_takes_red_queen_on_black_king,
    [(Spades, King)],
    (Hearts, Queen),
    true
);
tableau_case!(
    tableau_takes_either_red_queen,
    [(Spades, King)],
    (Diamonds, Queen),
    true
);
tableau_case!(
    tableau_takes_black_jack_on_red_queen,
    [(Spades, King), (Hearts, Queen)],
    (Clubs, Jack),
    true
);
tableau_case!(
    tableau_rejects_rank_gap,
    [(Spades, King)],
    (Hearts, Jack),
    false
);
tableau_case!(
    tableau_rejects_ascent,
    [(Spades, King), (Hearts, Queen)],
    (Spades, King),
    false
);
