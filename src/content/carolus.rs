//! The built-in lesson: Sabaton's "Carolus Rex", Swedish through metal.

use crate::content::deck::Deck;
use crate::content::model::{
    AudioBinding, ChoiceQuestion, LyricLine, Nav, Paragraph, Quiz, Section, Slide, SlideBody,
    StatFigure, StoryPanel, TrueFalseQuestion, VocabEntry, WordClass,
};

const VERSE_CLIP: &str = "audio/verse.mp3";
const CHORUS_CLIP: &str = "audio/chorus.mp3";

fn vocab(word: &str, meaning: &str, class: WordClass, phonetic: &str) -> VocabEntry {
    VocabEntry {
        word: word.to_string(),
        meaning: meaning.to_string(),
        class,
        phonetic: phonetic.to_string(),
    }
}

fn line(text: &str, translation: &str, highlights: &[&str], translated: &[&str]) -> LyricLine {
    LyricLine {
        text: text.to_string(),
        translation: translation.to_string(),
        highlights: highlights.iter().map(|s| s.to_string()).collect(),
        translation_highlights: translated.iter().map(|s| s.to_string()).collect(),
    }
}

fn para(text: &str) -> Paragraph {
    Paragraph {
        text: text.to_string(),
        emphasis: false,
    }
}

fn strong(text: &str) -> Paragraph {
    Paragraph {
        text: text.to_string(),
        emphasis: true,
    }
}

fn nav(back: bool, advance: &str) -> Nav {
    Nav {
        back,
        advance: Some(advance.to_string()),
        restart: false,
    }
}

fn clip(source: &str, label: &str) -> AudioBinding {
    AudioBinding {
        source: source.to_string(),
        label: label.to_string(),
    }
}

/// The eleven-slide Carolus Rex lesson.
pub fn carolus_rex() -> Deck {
    let verse = Section {
        label: "PART 1 - THE VERSE".to_string(),
        vocabulary: vec![
            vocab("nalkas", "approaches", WordClass::Verb, "nal-kas"),
            vocab("krönas", "to be crowned", WordClass::Verb, "krur-nas"),
            vocab("ej", "not", WordClass::Other, "ay"),
            vocab("kyrkan", "the church", WordClass::Noun, "shir-kan"),
        ],
        lyrics: vec![
            line(
                "Ny tid nalkas, denna tid går mot sitt slut",
                "A new time approaches, this era nears its end",
                &["nalkas"],
                &["approaches"],
            ),
            line(
                "Hela Stockholm se mig krönas, kanoner skjut salut",
                "All of Stockholm see me crowned, cannons fire salute",
                &["krönas"],
                &["crowned"],
            ),
            line(
                "Ingen ed avlagd, ingen ed jag svär",
                "No oath given, no oath I swear",
                &[],
                &[],
            ),
            line(
                "Kronan kommer ej från kyrkan",
                "The crown comes not from the church",
                &["ej", "kyrkan"],
                &["not", "church"],
            ),
            line(
                "den kom direkt ifrån Gud",
                "it came directly from God",
                &[],
                &[],
            ),
        ],
    };

    let chorus = Section {
        label: "PART 2 - THE CHORUS".to_string(),
        vocabulary: vec![
            vocab("härskar", "reigns / rules", WordClass::Verb, "hair-skar"),
            vocab("arv", "heritage", WordClass::Noun, "arv"),
            vocab("skräck", "terror", WordClass::Noun, "skrek"),
            vocab("gång", "time / occasion", WordClass::Noun, "gong"),
        ],
        lyrics: vec![
            line(
                "Över Norden jag härskar",
                "Over the North I reign",
                &["härskar"],
                &["reign"],
            ),
            line(
                "Med det arv som jag gavs",
                "With the heritage I was given",
                &["arv"],
                &["heritage"],
            ),
            line(
                "Gång på gång, sjung Carolus sång",
                "Time and again, sing Carolus' song",
                &["gång"],
                &["Time"],
            ),
            line(
                "Krigets konst jag behärskar",
                "The art of war I master",
                &[],
                &[],
            ),
            line(
                "Låt mitt namn sprida skräck",
                "Let my name spread terror",
                &["skräck"],
                &["terror"],
            ),
            line(
                "Gång på gång, sjung Carolus sång",
                "Time and again, sing Carolus' song",
                &["gång"],
                &["Time"],
            ),
            line(
                "Än en gång, sjung Carolus sång",
                "Once more, sing Carolus' song",
                &["gång"],
                &["Once"],
            ),
        ],
    };

    let quiz = Quiz {
        choice: vec![
            ChoiceQuestion {
                word: "nalkas".to_string(),
                options: ["conquers", "approaches", "falls", "swears"]
                    .map(String::from)
                    .to_vec(),
                correct: 1,
            },
            ChoiceQuestion {
                word: "krönas".to_string(),
                options: ["to surrender", "to march", "to be crowned", "to pray"]
                    .map(String::from)
                    .to_vec(),
                correct: 2,
            },
            ChoiceQuestion {
                word: "härskar".to_string(),
                options: ["reigns / rules", "destroys", "inherits", "suffers"]
                    .map(String::from)
                    .to_vec(),
                correct: 0,
            },
            ChoiceQuestion {
                word: "arv".to_string(),
                options: ["crown", "army", "heritage", "battle"]
                    .map(String::from)
                    .to_vec(),
                correct: 2,
            },
        ],
        true_false: vec![
            TrueFalseQuestion {
                statement: "'ej' means 'not'".to_string(),
                answer: true,
                word: "ej".to_string(),
            },
            TrueFalseQuestion {
                statement: "'kyrkan' means 'the crown'".to_string(),
                answer: false,
                word: "kyrkan".to_string(),
            },
            TrueFalseQuestion {
                statement: "'skräck' means 'strength'".to_string(),
                answer: false,
                word: "skräck".to_string(),
            },
            TrueFalseQuestion {
                statement: "'gång' means 'time / occasion'".to_string(),
                answer: true,
                word: "gång".to_string(),
            },
        ],
    };

    let slides = vec![
        Slide {
            title: "Carolus Rex".to_string(),
            nav: Nav {
                back: false,
                advance: Some("Begin".to_string()),
                restart: false,
            },
            audio: Vec::new(),
            body: SlideBody::Title {
                eyebrow: "SWEDISH THROUGH METAL".to_string(),
                heading: "Carolus Rex".to_string(),
                tagline: "The Last Viking".to_string(),
            },
        },
        Slide {
            title: "The Boy".to_string(),
            nav: nav(true, "Continue"),
            audio: Vec::new(),
            body: SlideBody::Story(StoryPanel {
                eyebrow: "I. THE BOY".to_string(),
                heading: "1697".to_string(),
                subheading: None,
                paragraphs: vec![
                    para(
                        "In 1697, the Swedish Empire was vast. Finland, Estonia, Latvia, \
                         parts of Germany. The Baltic Sea was essentially a Swedish lake.",
                    ),
                    para("Then the king died. The crown passed to his son, Karl XII."),
                    strong("He was fifteen."),
                    para(
                        "They would come to call him \"The Last Viking.\" \
                         \"The Swedish Meteor.\"",
                    ),
                ],
                stats: Vec::new(),
            }),
        },
        Slide {
            title: "The Crown".to_string(),
            nav: nav(true, "Continue"),
            audio: Vec::new(),
            body: SlideBody::Story(StoryPanel {
                eyebrow: "II. THE CROWN".to_string(),
                heading: "Kronan kommer ej från kyrkan".to_string(),
                subheading: Some("The crown comes not from the church".to_string()),
                paragraphs: vec![
                    para(
                        "As the coronation reached its peak, Karl stepped toward the \
                         archbishop and instead of kneeling to receive the crown, he took \
                         it and placed it on his own head.",
                    ),
                    para(
                        "He then refused to swear an oath to the church, declaring that \
                         his crown came not from the church, but directly from God.",
                    ),
                    para(
                        "As a king, he was unique. He preferred to dress like a common \
                         soldier, eat with his men and sleep in the same tents. Never \
                         marrying.",
                    ),
                    para("He said he was \"married to his troops, in life and in death.\""),
                ],
                stats: Vec::new(),
            }),
        },
        Slide {
            title: "The Last Viking".to_string(),
            nav: nav(true, "Learn the music"),
            audio: Vec::new(),
            body: SlideBody::Story(StoryPanel {
                eyebrow: "III. THE LAST VIKING".to_string(),
                heading: "Young, but fierce".to_string(),
                subheading: None,
                paragraphs: vec![
                    para(
                        "The day he was crowned, three countries attacked Sweden at once. \
                         Denmark. Poland. Russia. They thought a child would be an easy \
                         target.",
                    ),
                    para(
                        "At 18, he defeated a Russian army four times his size - in a \
                         blizzard. He left Stockholm with his army and spent the next \
                         eighteen years fighting across Europe. Refusing to surrender. \
                         Refusing to negotiate.",
                    ),
                    para(
                        "In 1718, during a siege in Norway, he was struck by a bullet to \
                         the head.",
                    ),
                    strong("And so ended the reign of the Last Viking."),
                ],
                stats: vec![
                    StatFigure {
                        value: "15".to_string(),
                        label: "crowned".to_string(),
                    },
                    StatFigure {
                        value: "18".to_string(),
                        label: "years at war".to_string(),
                    },
                    StatFigure {
                        value: "36".to_string(),
                        label: "died".to_string(),
                    },
                ],
            }),
        },
        Slide {
            title: "Words to listen for".to_string(),
            nav: nav(true, "Hear the song"),
            audio: Vec::new(),
            body: SlideBody::Vocabulary {
                eyebrow: "THE STORY'S LANGUAGE".to_string(),
                heading: "Words to listen for".to_string(),
            },
        },
        Slide {
            title: "First listen".to_string(),
            nav: nav(true, "Continue"),
            audio: vec![clip(VERSE_CLIP, "Verse"), clip(CHORUS_CLIP, "Chorus")],
            body: SlideBody::FirstListen {
                heading: "Hear the words".to_string(),
                intro: "Just try to hear the words. Don't worry about anything else yet."
                    .to_string(),
            },
        },
        Slide {
            title: "Line by line - Part 1".to_string(),
            nav: nav(true, "Part 2"),
            audio: vec![clip(VERSE_CLIP, "Verse")],
            body: SlideBody::Lyrics {
                heading: "Line by line".to_string(),
                section: 0,
            },
        },
        Slide {
            title: "Line by line - Part 2".to_string(),
            nav: nav(true, "Quick check"),
            audio: vec![clip(CHORUS_CLIP, "Chorus")],
            body: SlideBody::Lyrics {
                heading: "Line by line".to_string(),
                section: 1,
            },
        },
        Slide {
            title: "Quick check".to_string(),
            nav: nav(true, "Answers"),
            audio: Vec::new(),
            body: SlideBody::Quiz {
                heading: "Quick check".to_string(),
            },
        },
        Slide {
            title: "Answers".to_string(),
            nav: nav(true, "Finish"),
            audio: Vec::new(),
            body: SlideBody::Answers {
                heading: "Answers".to_string(),
            },
        },
        Slide {
            title: "The full song".to_string(),
            nav: Nav {
                back: true,
                advance: None,
                restart: true,
            },
            audio: Vec::new(),
            body: SlideBody::Recap {
                eyebrow: "THE FULL SONG".to_string(),
                heading: "Carolus Rex".to_string(),
                closing_line: "Gång på gång, sjung Carolus sång".to_string(),
            },
        },
    ];

    Deck {
        title: "Carolus Rex".to_string(),
        sections: vec![verse, chorus],
        quiz,
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_eleven_slides() {
        let deck = carolus_rex();
        assert_eq!(deck.len(), 11);
    }

    #[test]
    fn only_boundary_slides_differ_in_affordances() {
        let deck = carolus_rex();
        let first = &deck.slides[0];
        assert!(!first.nav.back);
        assert_eq!(first.nav.advance.as_deref(), Some("Begin"));

        let last = deck.slides.last().unwrap();
        assert!(last.nav.back);
        assert!(last.nav.restart);
        assert!(last.nav.advance.is_none());

        for slide in &deck.slides[1..deck.len() - 1] {
            assert!(slide.nav.back);
            assert!(slide.nav.advance.is_some());
            assert!(!slide.nav.restart);
        }
    }

    #[test]
    fn eight_vocabulary_entries_across_two_sections() {
        let deck = carolus_rex();
        assert_eq!(deck.sections.len(), 2);
        assert_eq!(deck.vocabulary().count(), 8);
    }

    #[test]
    fn every_quiz_word_resolves() {
        let deck = carolus_rex();
        for q in &deck.quiz.choice {
            assert!(deck.find_vocab(&q.word).is_some(), "missing {:?}", q.word);
        }
        for q in &deck.quiz.true_false {
            assert!(deck.find_vocab(&q.word).is_some(), "missing {:?}", q.word);
        }
    }

    #[test]
    fn audio_slides_reference_the_two_clips() {
        let deck = carolus_rex();
        let sources: Vec<&str> = deck
            .slides
            .iter()
            .flat_map(|s| s.audio.iter().map(|b| b.source.as_str()))
            .collect();
        assert_eq!(sources, vec![VERSE_CLIP, CHORUS_CLIP, VERSE_CLIP, CHORUS_CLIP]);
    }
}
