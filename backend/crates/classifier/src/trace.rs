use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Word,
    Phrase,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Phrase => "phrase",
        }
    }
}

impl FromStr for MatchKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "word" => Ok(Self::Word),
            "phrase" => Ok(Self::Phrase),
            _ => Err(format!("unknown match kind: {value}")),
        }
    }
}

/// One matched keyword, rendered as `"<keyword> (<kind>)"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordHit {
    pub keyword: String,
    pub kind: MatchKind,
}

impl KeywordHit {
    pub fn new(keyword: impl Into<String>, kind: MatchKind) -> Self {
        Self {
            keyword: keyword.into(),
            kind,
        }
    }
}

impl fmt::Display for KeywordHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.keyword, self.kind.as_str())
    }
}

impl FromStr for KeywordHit {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (keyword, rest) = value
            .rsplit_once(" (")
            .ok_or_else(|| format!("missing match kind in: {value}"))?;
        let kind = rest
            .strip_suffix(')')
            .ok_or_else(|| format!("unterminated match kind in: {value}"))?
            .parse()?;
        Ok(Self::new(keyword, kind))
    }
}

impl Serialize for KeywordHit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeywordHit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Score and evidence for a single CO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoScore {
    pub co: String,
    pub score: u32,
    pub matched: Vec<KeywordHit>,
}
