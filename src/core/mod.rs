pub mod catalog;

use serde::{Deserialize, Serialize};

/// Question factor tag.
///
/// A through E are the classifying factors; S is the stress factor, which is
/// collected and reported but never consulted by type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Factor {
    A,
    B,
    C,
    D,
    E,
    S,
}

impl Factor {
    /// The six factors in presentation order.
    pub const ALL: [Factor; 6] = [
        Factor::A,
        Factor::B,
        Factor::C,
        Factor::D,
        Factor::E,
        Factor::S,
    ];

    /// The five factors that feed type classification.
    pub const CLASSIFYING: [Factor; 5] = [Factor::A, Factor::B, Factor::C, Factor::D, Factor::E];

    /// Korean section title, as shown in the questionnaire header.
    pub fn title_ko(&self) -> &'static str {
        match self {
            Factor::A => "규범성",
            Factor::B => "협조성",
            Factor::C => "논리성",
            Factor::D => "활동성",
            Factor::E => "안정성",
            Factor::S => "스트레스",
        }
    }

    /// Single-letter label used in tables and logs.
    pub fn short_label(&self) -> &'static str {
        match self {
            Factor::A => "A",
            Factor::B => "B",
            Factor::C => "C",
            Factor::D => "D",
            Factor::E => "E",
            Factor::S => "S",
        }
    }
}

/// One entry in the static questionnaire catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub factor: Factor,
}

/// A single yes/no response keyed by question id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "questionId")]
    pub question_id: u32,
    pub value: bool,
}

/// Primary personality archetype.
///
/// Closed set of six labels with paired Japanese/Korean display names.
/// `Sakura` doubles as the fallback when no classification rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Sakura,
    Ume,
    Momo,
    Sumomo,
    Anzu,
    Kaki,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Sakura,
        Archetype::Ume,
        Archetype::Momo,
        Archetype::Sumomo,
        Archetype::Anzu,
        Archetype::Kaki,
    ];

    /// Japanese display name.
    pub fn label_ja(&self) -> &'static str {
        match self {
            Archetype::Sakura => "さくら",
            Archetype::Ume => "うめ",
            Archetype::Momo => "もも",
            Archetype::Sumomo => "すもも",
            Archetype::Anzu => "あんず",
            Archetype::Kaki => "かき",
        }
    }

    /// Korean display name.
    pub fn label_ko(&self) -> &'static str {
        match self {
            Archetype::Sakura => "벚꽃",
            Archetype::Ume => "매화",
            Archetype::Momo => "복숭아",
            Archetype::Sumomo => "자두",
            Archetype::Anzu => "살구",
            Archetype::Kaki => "감",
        }
    }
}

/// Secondary thinking-style axis, derived from the C factor alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryAxis {
    Digital,
    Analog,
}

impl SecondaryAxis {
    pub fn label_ja(&self) -> &'static str {
        match self {
            SecondaryAxis::Digital => "デジタル",
            SecondaryAxis::Analog => "アナログ",
        }
    }

    pub fn label_ko(&self) -> &'static str {
        match self {
            SecondaryAxis::Digital => "디지털",
            SecondaryAxis::Analog => "아날로그",
        }
    }
}

/// Per-factor true-answer tallies. Each score ranges 0..=10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorScores {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub stress: u8,
}

impl FactorScores {
    pub fn get(&self, factor: Factor) -> u8 {
        match factor {
            Factor::A => self.a,
            Factor::B => self.b,
            Factor::C => self.c,
            Factor::D => self.d,
            Factor::E => self.e,
            Factor::S => self.stress,
        }
    }
}

/// Outcome of classifying a completed answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityResult {
    #[serde(rename = "primaryType")]
    pub primary: Archetype,
    #[serde(rename = "secondaryType")]
    pub secondary: SecondaryAxis,
}
