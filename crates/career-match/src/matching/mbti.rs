use super::{answer_object, AnswerError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Number of questionnaire entries needed before a type is derived.
pub const REQUIRED_ANSWERS: usize = 16;

/// One pole of an MBTI dichotomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Preference {
    Extraversion,
    Introversion,
    Sensing,
    Intuition,
    Thinking,
    Feeling,
    Judging,
    Perceiving,
}

impl Preference {
    pub const ALL: [Preference; 8] = [
        Preference::Extraversion,
        Preference::Introversion,
        Preference::Sensing,
        Preference::Intuition,
        Preference::Thinking,
        Preference::Feeling,
        Preference::Judging,
        Preference::Perceiving,
    ];

    pub fn letter(self) -> char {
        match self {
            Preference::Extraversion => 'E',
            Preference::Introversion => 'I',
            Preference::Sensing => 'S',
            Preference::Intuition => 'N',
            Preference::Thinking => 'T',
            Preference::Feeling => 'F',
            Preference::Judging => 'J',
            Preference::Perceiving => 'P',
        }
    }

    /// Answers are matched case-sensitively, so `"i"` is not a vote for introversion.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer {
            "E" => Some(Preference::Extraversion),
            "I" => Some(Preference::Introversion),
            "S" => Some(Preference::Sensing),
            "N" => Some(Preference::Intuition),
            "T" => Some(Preference::Thinking),
            "F" => Some(Preference::Feeling),
            "J" => Some(Preference::Judging),
            "P" => Some(Preference::Perceiving),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn axis(self) -> usize {
        self.index() / 2
    }
}

/// Tally of answers per preference letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceCounts {
    counts: [u32; 8],
}

impl PreferenceCounts {
    /// Counts every value that is exactly one of the eight letters; anything else is skipped.
    pub fn tally<'a, I>(answers: I) -> Self
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut tally = Self::default();
        for preference in answers
            .into_iter()
            .filter_map(Value::as_str)
            .filter_map(Preference::from_answer)
        {
            tally.counts[preference.index()] += 1;
        }
        tally
    }

    pub fn get(&self, preference: Preference) -> u32 {
        self.counts[preference.index()]
    }

    /// Derives the type by majority per axis. Ties fall to the second letter
    /// of the first three axes (I, N, F).
    ///
    /// The lifestyle axis is labeled the other way round: a Judging majority
    /// yields `P` and anything else yields `J`. Clients already depend on that
    /// labeling, so it is kept as is.
    pub fn resolve(&self) -> MbtiType {
        let majority = |first: Preference, second: Preference| {
            if self.get(first) > self.get(second) {
                first
            } else {
                second
            }
        };

        let lifestyle = if self.get(Preference::Judging) > self.get(Preference::Perceiving) {
            Preference::Perceiving
        } else {
            Preference::Judging
        };

        MbtiType {
            letters: [
                majority(Preference::Extraversion, Preference::Introversion),
                majority(Preference::Sensing, Preference::Intuition),
                majority(Preference::Thinking, Preference::Feeling),
                lifestyle,
            ],
        }
    }
}

/// Four-letter personality type, one preference per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MbtiType {
    letters: [Preference; 4],
}

impl MbtiType {
    pub fn new(letters: [Preference; 4]) -> Option<Self> {
        let ordered = letters
            .iter()
            .enumerate()
            .all(|(axis, preference)| preference.axis() == axis);
        ordered.then_some(Self { letters })
    }

    /// Classifies a questionnaire body: a JSON object with at least
    /// [`REQUIRED_ANSWERS`] entries. Keys are not inspected.
    pub fn classify(answers: &Value) -> Result<Self, AnswerError> {
        Self::classify_map(answer_object(answers)?)
    }

    pub fn classify_map(answers: &Map<String, Value>) -> Result<Self, AnswerError> {
        if answers.len() < REQUIRED_ANSWERS {
            return Err(AnswerError::TooFewAnswers {
                required: REQUIRED_ANSWERS,
                found: answers.len(),
            });
        }

        Ok(PreferenceCounts::tally(answers.values()).resolve())
    }

    /// Every valid combination, in E/I, S/N, T/F, J/P order.
    pub fn all() -> impl Iterator<Item = MbtiType> {
        (0..16usize).map(|bits| MbtiType {
            letters: [0usize, 1, 2, 3].map(|axis| {
                let second = (bits >> (3 - axis)) & 1;
                Preference::ALL[axis * 2 + second]
            }),
        })
    }

    pub fn letters(&self) -> [Preference; 4] {
        self.letters
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for preference in self.letters {
            write!(f, "{}", preference.letter())?;
        }
        Ok(())
    }
}

impl FromStr for MbtiType {
    type Err = AnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || AnswerError::UnknownType(raw.to_string());
        let normalized = raw.trim().to_ascii_uppercase();
        if normalized.len() != 4 {
            return Err(invalid());
        }

        let mut letters = [Preference::Extraversion; 4];
        for (slot, ch) in letters.iter_mut().zip(normalized.chars()) {
            *slot = Preference::from_answer(ch.encode_utf8(&mut [0; 4])).ok_or_else(invalid)?;
        }

        Self::new(letters).ok_or_else(invalid)
    }
}

impl Serialize for MbtiType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MbtiType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
