//! Static content registry.
//!
//! Every article, entity and gallery image the archive can display. All of
//! it is compiled in; nothing is loaded or mutated at runtime.

use crate::page::PageId;
use crate::rich_text::RichText;
use crate::types::{ContentEntry, Entity, GlyphCircle, PixelArtEntry, Section, Sigil, SigilGlyph};

/// Introduction paragraph on the home page
pub const HOME_INTRO: &str = "Explore the hidden knowledge of universal laws, ancient demonology, \
powerful rituals, and the philosophies of the Left-Hand Path. Unveil the mysteries that shape reality.";

/// Shortcut buttons on the home page: (label, target)
pub const HOME_SHORTCUTS: [(&str, PageId); 3] = [
    ("Explore Laws", PageId::UniversalLaws),
    ("Discover Entities", PageId::MorningStar),
    ("Unveil Rituals", PageId::Rituals),
];

pub const SITE_TITLE: &str = "Esoteric Knowledge Hub";

/// Footer line for the given calendar year
pub fn footer_text(year: i32) -> String {
    format!("\u{00A9} {} Esoteric Knowledge. All rights reserved.", year)
}

// === Universal Laws ===

const UNIVERSAL_LAWS: &[ContentEntry] = &[
    ContentEntry {
        title: "Kybalion",
        author: Some("Three Initiates"),
        summary: "The Kybalion, published anonymously in 1908, presents seven universal principles of Hermetic philosophy.",
        full_details: RichText::new(
            "These principles are Mentalism, Correspondence, Vibration, Polarity, Rhythm, Cause and Effect, and Gender. \
They are presented as the fundamental truths governing the universe, intended to provide keys to understanding and \
mastering one's reality through mental and spiritual development. The book encourages the practitioner to align their \
consciousness with these cosmic laws to influence their personal experiences.",
        ),
    },
    ContentEntry {
        title: "The Master Key System",
        author: Some("Charles F. Hanaal"),
        summary: "Charles F. Haanel's 'The Master Key System' is a personal development guide, originally a 24-lesson correspondence course from 1912.",
        full_details: RichText::new(
            "It focuses heavily on the power of thought and the law of attraction, instructing readers on how to harness \
their mental faculties to achieve personal and material success. Haanel emphasizes visualization, affirmations, and \
regular mental exercises to align one's subconscious with desired outcomes, aiming to unlock a 'master key' to wealth, \
health, and spiritual fulfillment.",
        ),
    },
];

// === Demonology ===

const DEMONOLOGY: &[ContentEntry] = &[
    ContentEntry {
        title: "Inferno",
        author: Some("Dante Alighieri"),
        summary: "Dante's 'Inferno,' the first part of his 'Divine Comedy,' describes an allegorical journey through the nine circles of Hell.",
        full_details: RichText::new(
            "Guided by the poet Virgil, Dante witnesses vivid punishments tailored to specific sins, reflecting medieval \
Christian theology and morality. Each circle is a deeper descent into depravity, illustrating the consequences of \
unrepentant sin and exploring themes of divine justice, free will, and the path to salvation through suffering and \
repentance.",
        ),
    },
    ContentEntry {
        title: "Grimorium Verum (1517 & 1817)",
        author: Some("Attributed to Alibeck of Memphis"),
        summary: "The 'Grimorium Verum' is an influential grimoire, a magical textbook claiming an earlier date than its actual 18th-century appearance.",
        full_details: RichText::new(
            "It contains detailed instructions for summoning various demons and spirits, including their sigils, rituals, \
and incantations. Known for its notorious reputation and diverse interpretations across different editions, it remains \
a significant (and controversial) text in ceremonial magic, offering pathways for practitioners to engage with infernal \
entities for various purposes, from gaining knowledge to commanding obedience.",
        ),
    },
    ContentEntry {
        title: "Advanced Demonology Concepts",
        author: None,
        summary: "Delve deeper into the hierarchy, classifications, and practical applications of demonology in esoteric traditions.",
        full_details: RichText::new(
            "Advanced demonology often explores the intricate relationships between various demonic entities, their \
historical and cultural evolution, and their roles in different magical systems. This can involve studying specific \
grimoires, understanding the concept of pacts, recognizing demonic influences in mundane life, and exploring methods of \
banishment or invocation, always with an emphasis on knowledge and self-protection.",
        ),
    },
];

// === Chaos Magic ===

const CHAOS_MAGIC: &[ContentEntry] = &[
    ContentEntry {
        title: "Liber Null (1) and Liber Kaos (2)",
        author: Some("Peter Carroll"),
        summary: "Peter Carroll's 'Liber Null' and 'Liber Kaos' are foundational texts in Chaos Magic, emphasizing experiential magic and subjective belief.",
        full_details: RichText::new(
            "Liber Null introduces core concepts like sigilization, gnosis, and the flexible nature of belief systems as \
tools for magical work. Liber Kaos expands on these, delving into advanced magical theory, ethics, and the application \
of chaos principles to diverse magical workings, including paradigm shifting, invocation, and evocation. Together, they \
advocate for a highly experimental and results-oriented approach to magic, detached from rigid dogmas.",
        ),
    },
    ContentEntry {
        title: "Beginner Chaos Magic: Core Principles",
        author: None,
        summary: "An introduction to the fundamental concepts and initial practices of Chaos Magic for new practitioners.",
        full_details: RichText::new(
            "Beginner Chaos Magic focuses on understanding 'belief as a tool,' sigilization (condensing desire into a \
symbol), and achieving gnosis (a state of heightened consciousness for magical work). It often starts with simple \
exercises like creating and charging sigils for minor desires, learning basic meditation techniques, and developing a \
flexible mindset towards magical paradigms, emphasizing personal experimentation over dogma.",
        ),
    },
    ContentEntry {
        title: "Advanced Chaos Magic: Theory & Practice",
        author: None,
        summary: "Explore complex theories, advanced techniques, and the broader implications of Chaos Magic for experienced practitioners.",
        full_details: RichText::new(
            "Advanced Chaos Magic delves into more intricate concepts such as meta-belief, paradigm shifting on a grand \
scale, advanced servitor creation, and the manipulation of archetypes. Practitioners might explore complex ritual \
structures, dream magic, or the application of chaos principles to non-magical fields like art and psychology. It \
encourages deep self-analysis, rigorous experimentation, and the continuous deconstruction and reconstruction of \
personal realities.",
        ),
    },
];

// === The Satanic Temple ===

const SATANIC_TEMPLE: &[ContentEntry] = &[
    ContentEntry {
        title: "Origins and Philosophy",
        author: None,
        summary: "The Satanic Temple (TST) is a non-theistic religious and political activist organization founded in 2013.",
        full_details: RichText::new(
            "TST's mission is to encourage benevolence and empathy, reject tyrannical authority, advocate practical common \
sense, oppose injustice, and undertake noble pursuits. They use Satan as a metaphorical figure representing rebellion \
against arbitrary authority and the pursuit of knowledge, not as a literal deity. Their seven fundamental tenets \
underpin their activism, often involving legal challenges to protect religious freedom and promote secularism.",
        ),
    },
    ContentEntry {
        title: "Key Activism and Tenets",
        author: None,
        summary: "TST engages in various forms of activism, notably in areas of religious freedom, reproductive rights, and separation of church and state.",
        full_details: RichText::new(
            "Their seven tenets include: compassion and reason, the struggle for justice, respect for autonomy, embracing \
scientific understanding, individual action for collective well-being, and the tenet that 'every tenet is a guiding \
principle designed to inspire nobility in action and thought.'",
        ),
    },
];

// === Rituals ===

const RITUALS: &[ContentEntry] = &[
    ContentEntry {
        title: "Purpose of Rituals",
        author: None,
        summary: "In esoteric traditions, rituals serve as structured acts designed to achieve specific magical or spiritual outcomes.",
        full_details: RichText::new(
            "They can range from simple daily affirmations to complex ceremonial workings involving specific tools, \
invocations, and visualizations. The primary purpose is to focus the practitioner's will and consciousness, bypass the \
conscious mind, and influence reality on subtle planes, often by connecting with archetypal energies, spirits, or \
subconscious forces to manifest desired changes.",
        ),
    },
    ContentEntry {
        title: "Common Ritual Components",
        author: None,
        summary: "Most rituals share common elements, regardless of their specific magical system or intent.",
        full_details: RichText::new(
            "- **Preparation:** Cleansing, meditation, creating a sacred space.
- **Invocation/Evocation:** Calling upon specific energies, deities, or spirits.
- **Gnosis:** Achieving an altered state of consciousness to empower the magical act.
- **Visualization:** Clearly imagining the desired outcome.
- **Banishing:** Closing the ritual and dispelling unwanted energies.

The specific components vary widely by tradition and personal practice.",
        ),
    },
    ContentEntry {
        title: "Rituals in Modern Occultism",
        author: None,
        summary: "Modern occultism sees rituals adapted for contemporary practice, often focusing on personal transformation and psychological effects.",
        full_details: RichText::new(
            "Beyond traditional ceremonial magic, modern practitioners use rituals for self-exploration, shadow work, \
psychological reprogramming, and artistic expression. The emphasis shifts from literal summoning to understanding the \
symbolic power and psychological impact of ritual acts, integrating elements from various traditions or creating \
entirely new practices based on individual needs and experiences.",
        ),
    },
];

// === Left-Hand Path ===

const LEFT_HAND_PATH: &[ContentEntry] = &[
    ContentEntry {
        title: "Core Philosophy",
        author: None,
        summary: "The Left-Hand Path (LHP) is a broad categorization for esoteric and spiritual philosophies that emphasize individualism and self-deification.",
        full_details: RichText::new(
            "Unlike Right-Hand Path (RHP) traditions, which often seek union with a higher divine force through adherence \
to established moral codes and surrender of the ego, LHP systems prioritize the development of the individual will, \
self-knowledge, and the transgression of conventional norms. Practitioners often aim to become 'gods' or 'masters' of \
their own reality rather than serving an external deity.",
        ),
    },
    ContentEntry {
        title: "Key Characteristics",
        author: None,
        summary: "LHP traditions are characterized by several key traits, though specifics vary widely between different schools of thought.",
        full_details: RichText::new(
            "- **Individual Sovereignty:** Emphasis on personal freedom and autonomy.
- **Self-Deification:** The goal of becoming one's own divine authority.
- **Transgression/Taboo Breaking:** Deliberately challenging societal or religious taboos to gain insight or power.
- **Antinomianism:** Rejection of external moral laws in favor of self-determined ethics.
- **Carnal vs. Spiritual:** Often integrates the physical and material aspects of existence into spiritual practice.

It is important to note that LHP does not inherently equate to 'evil,' but rather a different path of spiritual development.",
        ),
    },
    ContentEntry {
        title: "LHP vs. Right-Hand Path",
        author: None,
        summary: "The distinction between LHP and RHP is primarily philosophical, regarding the practitioner's relationship with the divine and societal norms.",
        full_details: RichText::new(
            "RHP traditions typically involve submission to divine will, adherence to strict moral codes, and the eventual \
dissolution of the ego into a larger whole. LHP, conversely, focuses on strengthening the ego, challenging dogmas, and \
forging one's own spiritual path. While RHP often seeks external spiritual authority, LHP emphasizes internal authority \
and self-mastery.",
        ),
    },
];

const SECTIONS: &[Section] = &[
    Section {
        page: PageId::UniversalLaws,
        entries: UNIVERSAL_LAWS,
    },
    Section {
        page: PageId::Demonology,
        entries: DEMONOLOGY,
    },
    Section {
        page: PageId::ChaosMagic,
        entries: CHAOS_MAGIC,
    },
    Section {
        page: PageId::SatanicTemple,
        entries: SATANIC_TEMPLE,
    },
    Section {
        page: PageId::Rituals,
        entries: RITUALS,
    },
    Section {
        page: PageId::LeftHandPath,
        entries: LEFT_HAND_PATH,
    },
];

// === Morning Star ===

const ENTITIES: &[Entity] = &[
    Entity {
        name: "Lucifer (Venus)",
        details: "Lucifer, often associated with the planet Venus (the Morning Star), represents themes of worldly \
influence, illumination, vanity, and the pursuit of power. In some esoteric traditions, he is seen as a bringer of light \
and knowledge, challenging established norms and encouraging individual will, though this can lead to hubris and a focus \
on material dominion. His temptations often involve promises of earthly success and self-glory.",
        sigil: Sigil::Glyph(SigilGlyph {
            paths: &["M12 1L9 7l-6 1.5 4.5 4.5L6 23l6-3 6 3-1.5-8.5 4.5-4.5-6-1.5L12 1zM12 3.86l2.12 4.3 4.75.69-3.44 3.36.81 4.73L12 18.27l-4.24 2.23.81-4.73L4.13 8.85l4.75-.69L12 3.86z"],
            circles: &[],
        }),
        has_idle_animation: false,
        idle_gif: None,
    },
    Entity {
        name: "Astaroth",
        details: "Astaroth is a powerful demon often associated with pride, wrath, and rationality. In various \
grimoires, Astaroth is depicted as a grand duke of Hell, capable of revealing secrets of the past, present, and future, \
and teaching liberal sciences. The temptations related to Astaroth can involve intellectual arrogance, inciting conflict, \
and manipulating others through cunning, emphasizing a detached and often cold logic over empathy.",
        sigil: Sigil::Glyph(SigilGlyph {
            paths: &["M12 1L3 12h5v11h8V12h5L12 1zm0 3.76L16.24 9H7.76L12 4.76zM9 11h6v10H9V11z"],
            circles: &[],
        }),
        has_idle_animation: false,
        idle_gif: None,
    },
    Entity {
        name: "Leviathan",
        details: "Leviathan, a primordial sea serpent, is typically associated with envy, chaos, and \
instigation/manipulation. This entity represents the vast, uncontrollable forces of the subconscious and the deep, often \
turbulent, emotional waters. Temptations linked to Leviathan involve stirring up discord, fostering resentment, and \
subtly influencing others through emotional exploitation, playing on insecurities and desires for control.",
        sigil: Sigil::Glyph(SigilGlyph {
            paths: &[
                "M12 2C6.477 2 2 6.477 2 12s4.477 10 10 10 10-4.477 10-10S17.523 2 12 2zm0 18c-4.418 0-8-3.582-8-8s3.582-8 8-8 8 3.582 8 8-3.582 8-8 8zM12 6c-3.313 0-6 2.687-6 6s2.687 6 6 6 6-2.687 6-6-2.687-6-6-6zm-2 2h4v8h-4zM12 4a8 8 0 0 0-7.071 4H19.071A8 8 0 0 0 12 4z",
                // serpent flow
                "M7 12c0 2.76 2.24 5 5 5s5-2.24 5-5-2.24-5-5-5-5 2.24-5 5z",
                "M17 12c0 2.76-2.24 5-5 5s-5-2.24-5-5-2.24-5-5-5-5 2.24-5 5z",
            ],
            circles: &[],
        }),
        has_idle_animation: false,
        idle_gif: None,
    },
    Entity {
        name: "Asmodeus",
        details: "Asmodeus is often known as the demon of lust and wrath, but also strongly associated with revenge \
and perceived luck or ill fortune. In some texts, he is said to be the king of demons who governs dice and gaming. His \
temptations can lead individuals down paths of uncontrolled desire, violent retribution, or a belief that their fate is \
solely determined by external forces rather than personal agency, sometimes manifesting as irrational gambling or risky \
ventures.",
        sigil: Sigil::Text("Asmoday sigil: this can be found in the Lesser Key of Solomon."),
        has_idle_animation: true,
        idle_gif: Some("https://media2.giphy.com/media/4PHcnqCQFpNrQ7KCw0/giphy.gif?cid=9b38fe91kqq07g7pqr31u4d9nhdvs0l9ai1u0gtg2qoggzwk&ep=v1_gifs_username&rid=giphy.gif&ct=g"),
    },
    Entity {
        name: "Mammon",
        details: "Mammon personifies wealth, greed, and avarice. This entity is often depicted as a demon or a pagan \
deity embodying material possessions and the pursuit of earthly riches. Temptations associated with Mammon involve an \
insatiable desire for money and material goods, leading to exploitation, hoarding, and a disregard for spiritual or \
ethical values in favor of financial gain. It represents the corrupting influence of excessive materialism.",
        sigil: Sigil::Glyph(SigilGlyph {
            // money bag with coins
            paths: &[
                "M17 4H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V6a2 2 0 00-2-2zM7 6h10v2H7V6zm0 4h10v8H7v-8z",
                "M12 11v-1m0 8v-1m-3-4h1m4 0h1",
            ],
            circles: &[GlyphCircle {
                cx: 12.0,
                cy: 14.0,
                r: 3.0,
            }],
        }),
        has_idle_animation: false,
        idle_gif: None,
    },
    Entity {
        name: "Lilith",
        details: "Lilith is a complex figure often associated with femininity, lustful temptation, and fierce \
independence. In some traditions, she is depicted as the first woman, created equal to Adam, who refused to be \
subservient and left Eden. Her influence encourages autonomy, sexual liberation, and a rejection of patriarchal norms, \
but her temptations can also lead to excessive indulgence, unrestrained desire, and a destructive pursuit of freedom \
without responsibility.",
        sigil: Sigil::Glyph(SigilGlyph {
            paths: &[
                "M12 2C6.477 2 2 6.477 2 12s4.477 10 10 10 10-4.477 10-10S17.523 2 12 2zm0 18c-4.418 0-8-3.582-8-8s3.582-8 8-8 8 3.582 8 8-3.582 8-8 8zm-1-10v-2H9v2H7v2h2v2h2v-2h2v-2h-2zM12 4a8 8 0 0 0-7.071 4H19.071A8 8 0 0 0 12 4z",
                "M10 8L7 16H9L12 8H10z",
                "M17 12c0 2.21-1.79 4-4 4s-4-1.79-4-4 1.79-4 4-4 4 1.79 4 4zM13 8v8h2V8h-2z",
            ],
            circles: &[],
        }),
        has_idle_animation: true,
        idle_gif: Some("https://media3.giphy.com/media/JBS9s9anIsvDC8uEUo/giphy.gif?cid=9b38fe91lv9bdrk5m3wk8sgii1e2y6f66iz83a20eprgnwss&ep=v1_gifs_username&rid=giphy.gif&ct=g"),
    },
];

// === Pixel Art Gallery ===

const PIXEL_ART: &[PixelArtEntry] = &[
    PixelArtEntry {
        name: "Lucifer",
        image_url: "https://i.ibb.co/cXCxf2qb/download-2.png",
    },
    PixelArtEntry {
        name: "Astaroth",
        image_url: "https://i.ibb.co/93djxM1F/download-3.png",
    },
    PixelArtEntry {
        name: "Leviathan",
        image_url: "https://i.ibb.co/JRjSWb64/download-4.png",
    },
    PixelArtEntry {
        name: "Asmodeus",
        image_url: "https://i.ibb.co/d4RjdB5X/download-1.png",
    },
    PixelArtEntry {
        name: "Mammon",
        image_url: "https://i.ibb.co/q38LKrqD/download-5.png",
    },
    PixelArtEntry {
        name: "Lilith",
        image_url: "https://i.ibb.co/Df7wCMnw/download.png",
    },
];

/// Text section for a page, if the page is made of expandable cards.
pub fn section(page: PageId) -> Option<&'static Section> {
    SECTIONS.iter().find(|section| section.page == page)
}

/// All text sections in navigation order
pub fn sections() -> &'static [Section] {
    SECTIONS
}

/// Entities shown on the Morning Star page, in display order
pub fn entities() -> &'static [Entity] {
    ENTITIES
}

/// Portraits shown in the pixel art gallery
pub fn pixel_art() -> &'static [PixelArtEntry] {
    PIXEL_ART
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_text_page_has_a_section() {
        for page in [
            PageId::UniversalLaws,
            PageId::Demonology,
            PageId::ChaosMagic,
            PageId::SatanicTemple,
            PageId::Rituals,
            PageId::LeftHandPath,
        ] {
            let section = section(page).expect("section for text page");
            assert!(!section.entries.is_empty(), "{} has no entries", page);
        }
    }

    #[test]
    fn non_text_pages_have_no_section() {
        assert!(section(PageId::Home).is_none());
        assert!(section(PageId::MorningStar).is_none());
        assert!(section(PageId::PixelArtGallery).is_none());
    }

    #[test]
    fn section_counts() {
        let counts: Vec<usize> = sections().iter().map(|s| s.entries.len()).collect();
        assert_eq!(counts, vec![2, 3, 3, 2, 3, 3]);
    }

    #[test]
    fn entities_validate() {
        for entity in entities() {
            entity.validate().unwrap();
        }
    }

    #[test]
    fn pixel_art_validates() {
        assert_eq!(pixel_art().len(), 6);
        for entry in pixel_art() {
            entry.validate().unwrap();
        }
    }

    #[test]
    fn animated_entities() {
        let animated: Vec<&str> = entities()
            .iter()
            .filter(|e| e.idle_animation().is_some())
            .map(|e| e.name)
            .collect();
        assert_eq!(animated.len(), 2);
        assert!(animated.iter().any(|name| name.starts_with("Asmodeus")));
        assert!(animated.iter().any(|name| name.starts_with("Lilith")));
    }

    #[test]
    fn list_entries_render_as_lists() {
        let rituals = section(PageId::Rituals).unwrap();
        let html = rituals.entries[1].full_details.to_html();
        assert!(html.contains("<ul>"));
        assert_eq!(html.matches("<li>").count(), 5);
        assert!(html.contains("<strong>Banishing:</strong>"));
        assert!(html.contains("<p>The specific components vary widely"));
    }

    #[test]
    fn footer_embeds_year() {
        assert_eq!(
            footer_text(2026),
            "\u{00A9} 2026 Esoteric Knowledge. All rights reserved."
        );
    }
}
