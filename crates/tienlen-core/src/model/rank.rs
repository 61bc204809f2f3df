use core::fmt;

/// Card rank in Tiến Lên order: three is the lowest rank and two the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u8)]
pub enum Rank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl Rank {
    pub const ORDERED: [Rank; 13] = [
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Two,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ORDERED.len() {
            Some(Self::ORDERED[index])
        } else {
            None
        }
    }

    /// Position in game order, 0 for a three up to 12 for a two.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            '0' | 'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            _ => None,
        }
    }

    /// Single-character code symbol; ten is written `0`.
    pub const fn symbol(self) -> char {
        match self {
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => '0',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Two => '2',
        }
    }

    /// The rank one step above in game order, if any.
    pub const fn successor(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Twos never take part in straights or double straights.
    pub const fn can_run(self) -> bool {
        !matches!(self, Rank::Two)
    }

    pub const fn is_power(self) -> bool {
        matches!(self, Rank::Ace | Rank::Two)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn two_outranks_ace_and_three_is_lowest() {
        assert!(Rank::Two > Rank::Ace);
        assert!(Rank::Three < Rank::Four);
        assert_eq!(Rank::ORDERED.iter().min(), Some(&Rank::Three));
        assert_eq!(Rank::ORDERED.iter().max(), Some(&Rank::Two));
    }

    #[test]
    fn symbols_accept_both_ten_spellings() {
        assert_eq!(Rank::from_symbol('0'), Some(Rank::Ten));
        assert_eq!(Rank::from_symbol('t'), Some(Rank::Ten));
        assert_eq!(Rank::from_symbol('1'), None);
        assert_eq!(Rank::Ten.symbol(), '0');
    }

    #[test]
    fn successor_stops_after_two() {
        assert_eq!(Rank::King.successor(), Some(Rank::Ace));
        assert_eq!(Rank::Ace.successor(), Some(Rank::Two));
        assert_eq!(Rank::Two.successor(), None);
    }

    #[test]
    fn index_roundtrip() {
        for (i, rank) in Rank::ORDERED.iter().enumerate() {
            assert_eq!(Rank::from_index(i), Some(*rank));
            assert_eq!(rank.index(), i);
        }
        assert_eq!(Rank::from_index(13), None);
    }

    #[test]
    fn display_matches_faces() {
        assert_eq!(Rank::Queen.to_string(), "Q");
        assert_eq!(Rank::Ten.to_string(), "10");
    }
}
