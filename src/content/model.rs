use serde::{Deserialize, Serialize};

/// Word class of a vocabulary entry, keys the display accenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Verb,
    Noun,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub word: String,
    pub meaning: String,
    pub class: WordClass,
    pub phonetic: String,
}

/// One lyric line with its translation.
///
/// `highlights` names the vocabulary words accented in `text`;
/// `translation_highlights` names the accented tokens in `translation`,
/// paired with `highlights` by index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    pub text: String,
    pub translation: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub translation_highlights: Vec<String>,
}

/// One part of the song: its vocabulary and its lyric lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub vocabulary: Vec<VocabEntry>,
    pub lyrics: Vec<LyricLine>,
}

/// Multiple choice question over a vocabulary word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    pub word: String,
    pub options: Vec<String>,
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrueFalseQuestion {
    pub statement: String,
    pub answer: bool,
    pub word: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub choice: Vec<ChoiceQuestion>,
    pub true_false: Vec<TrueFalseQuestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    /// Rendered with strong emphasis.
    #[serde(default)]
    pub emphasis: bool,
}

/// A numeric callout under a story image, e.g. "15 / crowned".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatFigure {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryPanel {
    pub eyebrow: String,
    pub heading: String,
    #[serde(default)]
    pub subheading: Option<String>,
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub stats: Vec<StatFigure>,
}

/// Display content of one slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideBody {
    Title {
        eyebrow: String,
        heading: String,
        tagline: String,
    },
    Story(StoryPanel),
    Vocabulary {
        eyebrow: String,
        heading: String,
    },
    FirstListen {
        heading: String,
        intro: String,
    },
    Lyrics {
        heading: String,
        /// Index into the deck's sections.
        section: usize,
    },
    Quiz {
        heading: String,
    },
    Answers {
        heading: String,
    },
    Recap {
        eyebrow: String,
        heading: String,
        closing_line: String,
    },
}

/// Navigation affordances of one slide.
///
/// The slide controller is label-agnostic; labels and which affordances
/// exist are presentation data carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nav {
    #[serde(default)]
    pub back: bool,
    /// Forward affordance label, e.g. "Begin" or "Quick check".
    #[serde(default)]
    pub advance: Option<String>,
    /// Offered instead of advance on the closing slide.
    #[serde(default)]
    pub restart: bool,
}

/// An audio clip embedded in a slide: source identifier plus display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioBinding {
    pub source: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub nav: Nav,
    #[serde(default)]
    pub audio: Vec<AudioBinding>,
    pub body: SlideBody,
}
