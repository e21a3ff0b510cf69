//! Corpus model decoded from the API JSON
//!
//! `{ "data": { "surahs": [ { "ayahs": [ { "text", "numberInSurah" } ] } ] } }`

use crate::error::{DatasetError, DatasetResult};
use crate::provider::Edition;
use ayat_render::VerseAddress;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Corpus,
}

/// One verse entry of one edition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ayah {
    pub text: String,
    #[serde(rename = "numberInSurah")]
    pub number_in_surah: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Surah {
    #[serde(default, rename = "englishName")]
    pub english_name: String,
    pub ayahs: Vec<Ayah>,
}

/// All chapters of one edition, in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Corpus {
    pub surahs: Vec<Surah>,
}

impl Corpus {
    /// Decode the API response body for `edition`.
    pub fn from_json(bytes: &[u8], edition: Edition) -> DatasetResult<Self> {
        serde_json::from_slice::<Envelope>(bytes)
            .map(|envelope| envelope.data)
            .map_err(|source| DatasetError::Decode { edition, source })
    }

    pub fn chapter_count(&self) -> usize {
        self.surahs.len()
    }

    /// Chapter by 1-based number.
    pub fn surah(&self, chapter: u32) -> Option<&Surah> {
        let index = (chapter as usize).checked_sub(1)?;
        self.surahs.get(index)
    }
}

/// A verse with both texts, borrowed from the corpora.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse<'a> {
    pub address: VerseAddress,
    pub original: &'a str,
    pub translation: &'a str,
}

/// Arabic and English corpora checked to line up verse for verse.
#[derive(Debug, Clone)]
pub struct CorpusPair {
    arabic: Corpus,
    english: Corpus,
}

impl CorpusPair {
    pub fn new(arabic: Corpus, english: Corpus) -> DatasetResult<Self> {
        if arabic.chapter_count() != english.chapter_count() {
            return Err(DatasetError::mismatch(format!(
                "Arabic has {} surahs, English has {}",
                arabic.chapter_count(),
                english.chapter_count()
            )));
        }

        for (index, (ar, en)) in arabic.surahs.iter().zip(&english.surahs).enumerate() {
            if ar.ayahs.len() != en.ayahs.len() {
                return Err(DatasetError::mismatch(format!(
                    "surah {} has {} Arabic ayahs but {} English ayahs",
                    index + 1,
                    ar.ayahs.len(),
                    en.ayahs.len()
                )));
            }
        }

        Ok(Self { arabic, english })
    }

    pub fn chapter_count(&self) -> usize {
        self.arabic.chapter_count()
    }

    pub fn arabic(&self) -> &Corpus {
        &self.arabic
    }

    pub fn english(&self) -> &Corpus {
        &self.english
    }

    /// Transliterated chapter name, when the dataset carries one.
    pub fn surah_name(&self, chapter: u32) -> Option<&str> {
        self.english
            .surah(chapter)
            .map(|s| s.english_name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Verses of a 1-based chapter. The verse number is taken from the
    /// English entry's own `numberInSurah`.
    pub fn verses(&self, chapter: u32) -> DatasetResult<impl Iterator<Item = Verse<'_>> + '_> {
        let out_of_range = || DatasetError::ChapterOutOfRange {
            requested: chapter,
            available: self.chapter_count(),
        };
        let ar = self.arabic.surah(chapter).ok_or_else(out_of_range)?;
        let en = self.english.surah(chapter).ok_or_else(out_of_range)?;

        Ok(ar.ayahs.iter().zip(&en.ayahs).map(move |(a, e)| Verse {
            address: VerseAddress::new(chapter, e.number_in_surah),
            original: a.text.as_str(),
            translation: e.text.as_str(),
        }))
    }
}
