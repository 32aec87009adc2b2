//! Per-country structural grammars for VAT numbers.
//!
//! Each [`Rule`] is data: one or more [`Shape`]s, each pairing an accepted
//! length with the character classes required at given positions. Positions
//! index the full normalized number, country prefix included, so `ATU...`
//! has its `U` at position 2.

use super::countries::Country;

/// Character class required at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII digit `0-9`.
    Digit,
    /// ASCII letter.
    Alpha,
    /// ASCII letter other than `O` and `I`.
    CheckLetter,
    /// Exactly this character.
    Literal(char),
}

impl CharClass {
    /// Whether `c` belongs to this class.
    pub fn accepts(self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Alpha => c.is_ascii_alphabetic(),
            CharClass::CheckLetter => c.is_ascii_alphabetic() && c != 'O' && c != 'I',
            CharClass::Literal(l) => c == l,
        }
    }
}

/// A run of positions that must all belong to one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: usize,
    /// Inclusive end; `None` runs to the end of the number.
    end: Option<usize>,
    class: CharClass,
}

impl Span {
    /// A single position.
    pub const fn at(pos: usize, class: CharClass) -> Self {
        Self {
            start: pos,
            end: Some(pos),
            class,
        }
    }

    /// Positions `start..=end`.
    pub const fn range(start: usize, end: usize, class: CharClass) -> Self {
        Self {
            start,
            end: Some(end),
            class,
        }
    }

    /// Positions from `start` to the end of the number.
    pub const fn tail(start: usize, class: CharClass) -> Self {
        Self {
            start,
            end: None,
            class,
        }
    }

    fn accepts(&self, chars: &[char]) -> bool {
        let end = match self.end {
            Some(end) => end + 1,
            None => chars.len(),
        };
        match chars.get(self.start..end) {
            // An empty digit run would not parse as a number.
            Some(run) => !run.is_empty() && run.iter().all(|&c| self.class.accepts(c)),
            None => false,
        }
    }
}

/// Accepted total lengths, prefix included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Exact(usize),
    OneOf(&'static [usize]),
    /// Inclusive range.
    Between(usize, usize),
}

impl Length {
    pub fn accepts(self, len: usize) -> bool {
        match self {
            Length::Exact(n) => len == n,
            Length::OneOf(ns) => ns.contains(&len),
            Length::Between(min, max) => (min..=max).contains(&len),
        }
    }
}

/// One accepted layout of a country's VAT number.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    pub length: Length,
    pub spans: &'static [Span],
}

impl Shape {
    pub fn matches(&self, chars: &[char]) -> bool {
        self.length.accepts(chars.len()) && self.spans.iter().all(|s| s.accepts(chars))
    }
}

/// The grammar for one country.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub country: Country,
    /// Message shown when a number fails this rule.
    pub expected: &'static str,
    pub shapes: &'static [Shape],
}

impl Rule {
    /// Whether the normalized number matches any of this rule's shapes.
    pub fn matches(&self, chars: &[char]) -> bool {
        self.shapes.iter().any(|shape| shape.matches(chars))
    }
}

/// The grammar for `country`.
pub fn rule(country: Country) -> &'static Rule {
    // RULES is ordered like Country's variants.
    &RULES[country as usize]
}

/// All grammars, in [`Country::ALL`] order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

use CharClass::{Alpha, CheckLetter, Digit, Literal};

/// Digits from position 2 to the end, at the given lengths.
macro_rules! digits_only {
    ($length:expr) => {
        &[Shape {
            length: $length,
            spans: &[Span::tail(2, Digit)],
        }]
    };
}

static RULES: [Rule; 28] = [
    Rule {
        country: Country::Austria,
        expected: "Austrian VAT numbers must be 'ATU' followed by 8 digits.",
        shapes: &[Shape {
            length: Length::Exact(11),
            spans: &[Span::at(2, Literal('U')), Span::range(3, 10, Digit)],
        }],
    },
    Rule {
        country: Country::Belgium,
        expected: "Belgian VAT numbers must be 'BE' followed by 10 digits.",
        shapes: digits_only!(Length::Exact(12)),
    },
    Rule {
        country: Country::Bulgaria,
        expected: "Bulgarian VAT numbers must be 'BG' followed by 9 or 10 digits.",
        shapes: digits_only!(Length::OneOf(&[11, 12])),
    },
    Rule {
        country: Country::Cyprus,
        expected: "Cypriot VAT numbers must be 'CY' followed by 8 digits and a letter.",
        shapes: &[Shape {
            length: Length::Exact(11),
            spans: &[Span::range(2, 9, Digit), Span::at(10, Alpha)],
        }],
    },
    Rule {
        country: Country::CzechRepublic,
        expected: "Czech VAT numbers must be 'CZ' followed by 8 to 10 digits.",
        shapes: digits_only!(Length::Between(10, 12)),
    },
    Rule {
        country: Country::Denmark,
        expected: "Danish VAT numbers must be 'DK' followed by 8 digits.",
        shapes: digits_only!(Length::Exact(10)),
    },
    Rule {
        country: Country::Estonia,
        expected: "Estonian VAT numbers must be 'EE' followed by 9 digits.",
        shapes: digits_only!(Length::Exact(11)),
    },
    Rule {
        country: Country::Finland,
        expected: "Finnish VAT numbers must be 'FI' followed by 8 digits.",
        shapes: digits_only!(Length::Exact(10)),
    },
    Rule {
        country: Country::France,
        expected: "French VAT numbers must be 'FR' followed by a 2-character key \
                   (digits, or letters other than O and I) and 9 digits.",
        shapes: &[
            Shape {
                length: Length::Exact(13),
                spans: &[Span::at(2, CheckLetter), Span::tail(3, Digit)],
            },
            Shape {
                length: Length::Exact(13),
                spans: &[
                    Span::at(2, Alpha),
                    Span::at(3, CheckLetter),
                    Span::tail(4, Digit),
                ],
            },
            Shape {
                length: Length::Exact(13),
                spans: &[
                    Span::at(2, Digit),
                    Span::at(3, CheckLetter),
                    Span::tail(4, Digit),
                ],
            },
            Shape {
                length: Length::Exact(13),
                spans: &[Span::tail(2, Digit)],
            },
        ],
    },
    Rule {
        country: Country::Germany,
        expected: "German VAT numbers must be 'DE' followed by 9 digits.",
        shapes: digits_only!(Length::Exact(11)),
    },
    Rule {
        country: Country::Greece,
        expected: "Greek VAT numbers must be 'EL' followed by 9 digits, starting with 0.",
        shapes: &[Shape {
            length: Length::Exact(11),
            spans: &[Span::range(2, 10, Digit), Span::at(2, Literal('0'))],
        }],
    },
    Rule {
        country: Country::Hungary,
        expected: "Hungarian VAT numbers must be 'HU' followed by 8 digits.",
        shapes: digits_only!(Length::Exact(10)),
    },
    Rule {
        country: Country::Ireland,
        expected: "Irish VAT numbers must be 'IE' followed by 7 digits and 1 or 2 letters, \
                   or a digit, a letter, 5 digits and a letter.",
        shapes: &[
            Shape {
                length: Length::Exact(10),
                spans: &[Span::range(2, 8, Digit), Span::at(9, Alpha)],
            },
            Shape {
                length: Length::Exact(11),
                spans: &[
                    Span::at(2, Digit),
                    Span::at(3, Alpha),
                    Span::range(4, 8, Digit),
                    Span::at(9, Alpha),
                ],
            },
            Shape {
                length: Length::Exact(11),
                spans: &[Span::range(2, 8, Digit), Span::range(9, 10, Alpha)],
            },
        ],
    },
    Rule {
        country: Country::Italy,
        expected: "Italian VAT numbers must be 'IT' followed by 11 digits.",
        shapes: digits_only!(Length::Exact(13)),
    },
    Rule {
        country: Country::Latvia,
        expected: "Latvian VAT numbers must be 'LV' followed by 11 digits.",
        shapes: digits_only!(Length::Exact(13)),
    },
    Rule {
        country: Country::Lithuania,
        expected: "Lithuanian VAT numbers must be 'LT' followed by 9 or 12 digits.",
        shapes: digits_only!(Length::OneOf(&[11, 14])),
    },
    Rule {
        country: Country::Luxembourg,
        expected: "Luxembourgish VAT numbers must be 'LU' followed by 8 digits.",
        shapes: digits_only!(Length::Exact(10)),
    },
    Rule {
        country: Country::Malta,
        expected: "Maltese VAT numbers must be 'MT' followed by 8 digits.",
        shapes: digits_only!(Length::Exact(10)),
    },
    Rule {
        country: Country::Netherlands,
        expected: "Dutch VAT numbers must be 'NL' followed by 9 digits, the letter B and 2 digits.",
        shapes: &[Shape {
            length: Length::Exact(14),
            spans: &[
                Span::range(2, 10, Digit),
                Span::at(11, Literal('B')),
                Span::range(12, 13, Digit),
            ],
        }],
    },
    Rule {
        country: Country::Poland,
        expected: "Polish VAT numbers must be 'PL' followed by 10 digits.",
        shapes: digits_only!(Length::Exact(12)),
    },
    Rule {
        country: Country::Portugal,
        expected: "Portuguese VAT numbers must be 'PT' followed by 9 digits.",
        shapes: digits_only!(Length::Exact(11)),
    },
    Rule {
        country: Country::Slovakia,
        expected: "Slovak VAT numbers must be 'SK' followed by 10 digits.",
        shapes: digits_only!(Length::Exact(12)),
    },
    Rule {
        country: Country::Slovenia,
        expected: "Slovenian VAT numbers must be 'SI' followed by 8 digits.",
        shapes: digits_only!(Length::Exact(10)),
    },
    Rule {
        country: Country::Spain,
        expected: "Spanish VAT numbers must be 'ES' followed by 9 characters: \
                   a letter or digit, 7 digits, and a letter or digit.",
        shapes: &[
            Shape {
                length: Length::Exact(11),
                spans: &[
                    Span::at(2, Alpha),
                    Span::at(10, Alpha),
                    Span::range(3, 9, Digit),
                ],
            },
            Shape {
                length: Length::Exact(11),
                spans: &[Span::at(2, Alpha), Span::range(3, 10, Digit)],
            },
            Shape {
                length: Length::Exact(11),
                spans: &[Span::range(2, 9, Digit)],
            },
        ],
    },
    Rule {
        country: Country::Sweden,
        expected: "Swedish VAT numbers must be 'SE' followed by 12 digits.",
        shapes: digits_only!(Length::Exact(14)),
    },
    // VIES stopped answering for GB after Brexit. With registry checking on,
    // every GB number ends as RegistryUnavailable.
    Rule {
        country: Country::UnitedKingdom,
        expected: "UK VAT numbers must be 'GB' followed by 5 characters, or by 9 or 12 digits.",
        shapes: &[
            Shape {
                length: Length::Exact(7),
                spans: &[],
            },
            Shape {
                length: Length::OneOf(&[11, 14]),
                spans: &[Span::tail(2, Digit)],
            },
        ],
    },
    Rule {
        country: Country::Romania,
        expected: "Romanian VAT numbers must be 'RO' followed by 2 to 10 digits.",
        shapes: digits_only!(Length::Between(4, 12)),
    },
    Rule {
        country: Country::Croatia,
        expected: "Croatian VAT numbers must be 'HR' followed by 11 digits.",
        shapes: digits_only!(Length::Exact(13)),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn passes(country: Country, s: &str) -> bool {
        rule(country).matches(&chars(s))
    }

    #[test]
    fn table_follows_country_order() {
        assert_eq!(rules().len(), Country::ALL.len());
        for (rule, country) in rules().iter().zip(Country::ALL) {
            assert_eq!(rule.country, country);
        }
    }

    #[test]
    fn every_message_names_its_prefix() {
        for rule in rules() {
            assert!(
                rule.expected.contains(&format!("'{}", rule.country.code())),
                "{} message does not name its prefix",
                rule.country
            );
        }
    }

    #[test]
    fn check_letter_excludes_o_and_i() {
        assert!(CharClass::CheckLetter.accepts('X'));
        assert!(!CharClass::CheckLetter.accepts('O'));
        assert!(!CharClass::CheckLetter.accepts('I'));
        assert!(!CharClass::CheckLetter.accepts('5'));
    }

    #[test]
    fn digit_is_ascii_only() {
        assert!(CharClass::Digit.accepts('7'));
        assert!(!CharClass::Digit.accepts('٣'));
    }

    #[test]
    fn span_out_of_bounds_fails() {
        assert!(!Span::at(5, Digit).accepts(&chars("AB12")));
        assert!(!Span::tail(4, Digit).accepts(&chars("AB12")));
    }

    #[test]
    fn length_variants() {
        assert!(Length::Exact(3).accepts(3));
        assert!(!Length::Exact(3).accepts(4));
        assert!(Length::OneOf(&[7, 11]).accepts(11));
        assert!(!Length::OneOf(&[7, 11]).accepts(9));
        assert!(Length::Between(4, 12).accepts(4));
        assert!(Length::Between(4, 12).accepts(12));
        assert!(!Length::Between(4, 12).accepts(13));
    }

    #[test]
    fn france_shapes() {
        assert!(passes(Country::France, "FRX2345678901"));
        assert!(passes(Country::France, "FRAB345678901"));
        assert!(passes(Country::France, "FR1B345678901"));
        assert!(passes(Country::France, "FR12345678901"));
        assert!(!passes(Country::France, "FRO2345678901"));
        assert!(!passes(Country::France, "FRAO345678901"));
        assert!(!passes(Country::France, "FR1I345678901"));
    }

    #[test]
    fn ireland_shapes() {
        assert!(passes(Country::Ireland, "IE1234567A"));
        assert!(passes(Country::Ireland, "IE1A23456BX"));
        assert!(passes(Country::Ireland, "IE1234567AB"));
        assert!(!passes(Country::Ireland, "IE12345678"));
        assert!(!passes(Country::Ireland, "IE12345678A"));
    }

    #[test]
    fn spain_shapes() {
        assert!(passes(Country::Spain, "ESX1234567X"));
        assert!(passes(Country::Spain, "ESA12345678"));
        assert!(passes(Country::Spain, "ES12345678Z"));
        assert!(!passes(Country::Spain, "ESAB234567X"));
    }

    #[test]
    fn greece_requires_leading_zero() {
        assert!(passes(Country::Greece, "EL012345678"));
        assert!(!passes(Country::Greece, "EL123456789"));
    }

    #[test]
    fn uk_short_form_is_unchecked() {
        assert!(passes(Country::UnitedKingdom, "GBGD001"));
        assert!(passes(Country::UnitedKingdom, "GB123456789"));
        assert!(passes(Country::UnitedKingdom, "GB123456789012"));
        assert!(!passes(Country::UnitedKingdom, "GB12345678"));
        assert!(!passes(Country::UnitedKingdom, "GB12345678A"));
    }
}
