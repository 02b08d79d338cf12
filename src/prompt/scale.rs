//! Mapping of continuous audio features onto descriptive words.
//!
//! A scale is a list of bands with inclusive upper bounds, checked in
//! ascending order. Values above every bound (and NaN) fall into the last
//! band. Within a band the word is picked uniformly at random from the
//! caller's RNG, so identical inputs may describe differently.

use rand::seq::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBand {
    /// Inclusive upper bound of the band.
    pub upper_bound: f64,
    pub terms: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveScale {
    pub name: &'static str,
    /// Bands in ascending `upper_bound` order; never empty.
    pub bands: &'static [ScaleBand],
}

pub const ENERGY_SCALE: DescriptiveScale = DescriptiveScale {
    name: "energy",
    bands: &[
        ScaleBand {
            upper_bound: 0.3,
            terms: &["mellow", "relaxed", "calm", "gentle", "soft"],
        },
        ScaleBand {
            upper_bound: 0.6,
            terms: &["moderate", "balanced", "steady", "mid-tempo"],
        },
        ScaleBand {
            upper_bound: 1.0,
            terms: &["energetic", "lively", "upbeat", "dynamic", "vibrant"],
        },
    ],
};

pub const DANCEABILITY_SCALE: DescriptiveScale = DescriptiveScale {
    name: "danceability",
    bands: &[
        ScaleBand {
            upper_bound: 0.3,
            terms: &[
                "contemplative",
                "introspective",
                "atmospheric",
                "ambient",
                "meditative",
            ],
        },
        ScaleBand {
            upper_bound: 0.6,
            terms: &[
                "moderately groovy",
                "somewhat rhythmic",
                "fairly lively",
                "mildly bouncy",
            ],
        },
        ScaleBand {
            upper_bound: 1.0,
            terms: &[
                "groovy",
                "rhythmic",
                "foot-tapping",
                "body-moving",
                "infectious",
            ],
        },
    ],
};

/// Mood words, driven by valence.
pub const MOOD_SCALE: DescriptiveScale = DescriptiveScale {
    name: "mood",
    bands: &[
        ScaleBand {
            upper_bound: 0.3,
            terms: &["melancholic", "somber", "wistful", "brooding"],
        },
        ScaleBand {
            upper_bound: 0.6,
            terms: &["balanced", "calm", "composed"],
        },
        ScaleBand {
            upper_bound: 1.0,
            terms: &["joyful", "uplifting", "cheerful", "exuberant", "optimistic"],
        },
    ],
};

impl DescriptiveScale {
    /// The band `value` falls into; `None` only for a scale without bands.
    pub fn band_for(&self, value: f64) -> Option<&ScaleBand> {
        self.bands
            .iter()
            .find(|band| value <= band.upper_bound)
            .or_else(|| self.bands.last())
    }

    /// A random term from the band `value` falls into.
    pub fn describe<R: Rng + ?Sized>(&self, value: f64, rng: &mut R) -> &'static str {
        self.band_for(value)
            .and_then(|band| band.terms.choose(rng))
            .copied()
            .unwrap_or_default()
    }
}
