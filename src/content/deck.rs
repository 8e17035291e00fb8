use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::content::model::{Quiz, Section, Slide, SlideBody, VocabEntry};

/// A complete lesson: song sections, quiz, and the ordered slide sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub sections: Vec<Section>,
    pub quiz: Quiz,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Loads a deck from a JSON file and validates it.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck: {}", path.display()))?;
        let deck: Deck = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse deck: {}", path.display()))?;
        deck.validate()
            .with_context(|| format!("Invalid deck: {}", path.display()))?;
        Ok(deck)
    }

    /// Saves the deck as pretty-printed JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Number of slides in the sequence.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// All vocabulary entries across sections, in section order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &VocabEntry> {
        self.sections.iter().flat_map(|s| s.vocabulary.iter())
    }

    /// Look up a vocabulary entry by token, ignoring case and punctuation,
    /// the way lyric highlighting matches words.
    pub fn find_vocab(&self, token: &str) -> Option<&VocabEntry> {
        let wanted = normalize_token(token);
        self.vocabulary()
            .find(|entry| normalize_token(&entry.word) == wanted)
    }

    /// Check catalogue invariants. Runs at load time, before a session
    /// starts; the running core has no failure paths of its own.
    pub fn validate(&self) -> Result<()> {
        if self.slides.is_empty() {
            bail!("deck has no slides");
        }

        let last = self.slides.len() - 1;
        for (i, slide) in self.slides.iter().enumerate() {
            if i == 0 && slide.nav.back {
                bail!("slide 0 must not offer a back affordance");
            }
            if i > 0 && !slide.nav.back {
                bail!("slide {i} must offer a back affordance");
            }
            if i == last {
                if !slide.nav.restart {
                    bail!("closing slide must offer restart");
                }
                if slide.nav.advance.is_some() {
                    bail!("closing slide must not offer advance");
                }
            } else {
                if slide.nav.restart {
                    bail!("slide {i} offers restart but is not the closing slide");
                }
                if slide.nav.advance.is_none() {
                    bail!("slide {i} must offer an advance affordance");
                }
            }

            for binding in &slide.audio {
                if binding.source.is_empty() {
                    bail!("slide {i}: audio binding with empty source");
                }
                if binding.label.is_empty() {
                    bail!("slide {i}: audio binding {:?} has no label", binding.source);
                }
            }

            match &slide.body {
                SlideBody::Lyrics { section, .. } => {
                    if *section >= self.sections.len() {
                        bail!("slide {i}: lyrics section {section} out of range");
                    }
                    if slide.audio.len() != 1 {
                        bail!("slide {i}: lyrics slide needs exactly one audio binding");
                    }
                }
                SlideBody::FirstListen { .. } => {
                    if slide.audio.len() != self.sections.len() {
                        bail!("slide {i}: first-listen slide needs one audio binding per section");
                    }
                }
                _ => {}
            }
        }

        for (s, section) in self.sections.iter().enumerate() {
            for (l, line) in section.lyrics.iter().enumerate() {
                if line.translation_highlights.len() != line.highlights.len() {
                    bail!("section {s} line {l}: highlight lists differ in length");
                }
                for word in &line.highlights {
                    if self.find_vocab(word).is_none() {
                        bail!("section {s} line {l}: highlight {word:?} not in vocabulary");
                    }
                }
            }
        }

        for (q, question) in self.quiz.choice.iter().enumerate() {
            if question.options.is_empty() {
                bail!("choice question {q} has no options");
            }
            if question.correct >= question.options.len() {
                bail!("choice question {q}: correct index out of range");
            }
            if self.find_vocab(&question.word).is_none() {
                bail!("choice question {q}: word {:?} not in vocabulary", question.word);
            }
        }
        for (q, question) in self.quiz.true_false.iter().enumerate() {
            if self.find_vocab(&question.word).is_none() {
                bail!(
                    "true/false question {q}: word {:?} not in vocabulary",
                    question.word
                );
            }
        }

        Ok(())
    }
}

/// Lower-case a token and strip punctuation, matching the tolerance of the
/// lyric highlighter.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !",.:!?'".contains(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::carolus_rex;
    use crate::content::model::{AudioBinding, Nav, SlideBody};

    #[test]
    fn normalize_strips_case_and_punctuation() {
        assert_eq!(normalize_token("Krönas,"), "krönas");
        assert_eq!(normalize_token("church?"), "church");
        assert_eq!(normalize_token("Carolus'"), "carolus");
        assert_eq!(normalize_token("arv"), "arv");
    }

    #[test]
    fn find_vocab_ignores_case_and_punctuation() {
        let deck = carolus_rex();
        assert!(deck.find_vocab("Nalkas,").is_some());
        assert!(deck.find_vocab("KYRKAN").is_some());
        assert!(deck.find_vocab("saknas").is_none());
    }

    #[test]
    fn builtin_deck_is_valid() {
        carolus_rex().validate().unwrap();
    }

    #[test]
    fn empty_deck_is_rejected() {
        let mut deck = carolus_rex();
        deck.slides.clear();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn back_on_first_slide_is_rejected() {
        let mut deck = carolus_rex();
        deck.slides[0].nav.back = true;
        assert!(deck.validate().is_err());
    }

    #[test]
    fn missing_restart_on_closing_slide_is_rejected() {
        let mut deck = carolus_rex();
        deck.slides.last_mut().unwrap().nav.restart = false;
        assert!(deck.validate().is_err());
    }

    #[test]
    fn unknown_highlight_word_is_rejected() {
        let mut deck = carolus_rex();
        deck.sections[0].lyrics[0].highlights = vec!["okänd".to_string()];
        deck.sections[0].lyrics[0].translation_highlights = vec!["unknown".to_string()];
        assert!(deck.validate().is_err());
    }

    #[test]
    fn mismatched_highlight_lists_are_rejected() {
        let mut deck = carolus_rex();
        deck.sections[0].lyrics[0].highlights = vec!["nalkas".to_string()];
        deck.sections[0].lyrics[0].translation_highlights = Vec::new();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn out_of_range_choice_answer_is_rejected() {
        let mut deck = carolus_rex();
        deck.quiz.choice[0].correct = 99;
        assert!(deck.validate().is_err());
    }

    #[test]
    fn lyrics_slide_without_binding_is_rejected() {
        let mut deck = carolus_rex();
        let lyrics_index = deck
            .slides
            .iter()
            .position(|s| matches!(s.body, SlideBody::Lyrics { .. }))
            .unwrap();
        deck.slides[lyrics_index].audio.clear();
        assert!(deck.validate().is_err());
    }

    #[test]
    fn empty_binding_source_is_rejected() {
        let mut deck = carolus_rex();
        let slide = deck
            .slides
            .iter_mut()
            .find(|s| !s.audio.is_empty())
            .unwrap();
        slide.audio[0] = AudioBinding {
            source: String::new(),
            label: "Verse".to_string(),
        };
        assert!(deck.validate().is_err());
    }

    #[test]
    fn mid_deck_restart_is_rejected() {
        let mut deck = carolus_rex();
        deck.slides[3].nav = Nav {
            back: true,
            advance: None,
            restart: true,
        };
        assert!(deck.validate().is_err());
    }
}
