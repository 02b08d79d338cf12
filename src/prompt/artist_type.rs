//! Best-effort inference of what kind of act performs a song.
//!
//! Works on the encyclopedia lead paragraph. Rules run in order and the
//! first one with an opinion wins; when none has one the act is simply an
//! "artist". Pronouns referring to someone other than the performer (a
//! producer, a songwriter) skew the tally, so treat the result as a hint.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

pub const DEFAULT_ARTIST_TYPE: &str = "artist";

/// Words that mark a multi-member act, in priority order.
pub const GROUP_KEYWORDS: [&str; 6] = ["band", "group", "duo", "trio", "quartet", "ensemble"];

lazy_static! {
    static ref GROUP_PHRASE_RES: Vec<(&'static str, Regex)> = GROUP_KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = format!(r"\b(\w+\s+{})\b", keyword);
            (*keyword, Regex::new(&pattern).expect("group phrase regex is valid"))
        })
        .collect();
    static ref FEMALE_RE: Regex = Regex::new(r"\b(she|her|hers)\b").expect("pronoun regex is valid");
    static ref MALE_RE: Regex = Regex::new(r"\b(he|him|his)\b").expect("pronoun regex is valid");
    static ref PLURAL_RE: Regex =
        Regex::new(r"\b(they|them|their)\b").expect("pronoun regex is valid");
}

/// A named classification rule over a lowercased description.
pub struct ArtistTypeRule {
    pub name: &'static str,
    pub classify: fn(&str) -> Option<String>,
}

/// Rules in priority order.
pub const ARTIST_TYPE_RULES: &[ArtistTypeRule] = &[
    ArtistTypeRule {
        name: "group_phrase",
        classify: group_phrase,
    },
    ArtistTypeRule {
        name: "pronoun_majority",
        classify: pronoun_majority,
    },
];

/// Pronoun occurrence totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PronounTally {
    pub female: usize,
    pub male: usize,
    pub plural: usize,
}

impl PronounTally {
    pub fn count(text: &str) -> Self {
        Self {
            female: FEMALE_RE.find_iter(text).count(),
            male: MALE_RE.find_iter(text).count(),
            plural: PLURAL_RE.find_iter(text).count(),
        }
    }

    /// The act type the tally points to, if any set of pronouns dominates.
    pub fn verdict(&self) -> Option<&'static str> {
        if self.plural > self.female && self.plural > self.male {
            Some("group")
        } else if self.female > self.male {
            Some("female vocalist")
        } else if self.male > self.female {
            Some("male vocalist")
        } else {
            None
        }
    }
}

/// Classify the act described by `description`, e.g. "rock band" or "female vocalist".
pub fn classify_artist_type(description: &str) -> String {
    let lower = description.to_lowercase();
    ARTIST_TYPE_RULES
        .iter()
        .find_map(|rule| {
            let artist_type = (rule.classify)(&lower)?;
            debug!("Artist type {:?} inferred by {}", artist_type, rule.name);
            Some(artist_type)
        })
        .unwrap_or_else(|| DEFAULT_ARTIST_TYPE.to_string())
}

/// "<word> <keyword>" for the first keyword that appears with a word before it.
///
/// A keyword present without a preceding word does not count on its own.
fn group_phrase(text: &str) -> Option<String> {
    GROUP_PHRASE_RES
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .find_map(|(_, re)| re.captures(text).map(|caps| caps[1].to_string()))
}

fn pronoun_majority(text: &str) -> Option<String> {
    let tally = PronounTally::count(text);
    debug!("Pronoun tally: {:?}", tally);
    tally.verdict().map(str::to_string)
}
