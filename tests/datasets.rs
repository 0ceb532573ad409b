// Integration tests for dataset invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use hanzi_garden::content::{baijiaxing, hanzi, pinyin, sanzi_jing, tang_poetry, thousand_character};
use hanzi_garden::content::ContentSource;

#[test]
fn initials_are_unique_and_nonempty() {
    let mut seen = HashSet::new();
    for l in pinyin::INITIALS {
        assert!(seen.insert(l.letter), "duplicate initial '{}'", l.letter);
        assert!(!l.example.is_empty(), "empty example for initial '{}'", l.letter);
        assert!(!l.example_pinyin.is_empty(), "empty example pinyin for '{}'", l.letter);
    }
    assert_eq!(pinyin::INITIALS.len(), 23, "the phonetic alphabet has 23 initials");
}

#[test]
fn finals_and_whole_syllables_have_expected_counts() {
    assert_eq!(pinyin::SIMPLE_FINALS.len(), 6);
    assert_eq!(pinyin::COMPOUND_FINALS.len(), 18);
    assert_eq!(pinyin::WHOLE_SYLLABLES.len(), 16);

    let mut seen = HashSet::new();
    for l in pinyin::SIMPLE_FINALS.iter().chain(pinyin::COMPOUND_FINALS) {
        assert!(seen.insert(l.letter), "duplicate final '{}'", l.letter);
    }
}

#[test]
fn hanzi_entries_are_unique_and_valid() {
    let mut seen = HashSet::new();
    for e in hanzi::HANZI {
        assert!(seen.insert(e.hanzi), "duplicate hanzi '{}'", e.hanzi);
        let s = e.pinyin;
        assert!(!s.is_empty(), "empty pinyin for hanzi '{}'", e.hanzi);
        // pinyin should end with tone digit 1..5
        let last = s.chars().last().unwrap();
        assert!(('1'..='5').contains(&last), "pinyin '{}' for '{}' does not end with tone digit", s, e.hanzi);
        let digit_count = s.chars().filter(|c| ('1'..='5').contains(c)).count();
        assert_eq!(digit_count, 1, "single hanzi pinyin '{}' for '{}' should contain exactly one tone digit", s, e.hanzi);
        for c in s.chars() {
            assert!(c.is_ascii_lowercase() || ('1'..='5').contains(&c), "invalid char '{}' in pinyin '{}' for '{}'", c, s, e.hanzi);
        }
    }
}

#[test]
fn every_hanzi_grade_is_populated() {
    use hanzi_garden::content::Grade;
    for grade in [Grade::Basic, Grade::Intermediate, Grade::Advanced] {
        assert!(hanzi::graded(grade).count() >= 8, "grade {:?} needs enough entries for a memory board", grade);
    }
}

#[test]
fn passage_section_ids_are_contiguous() {
    for (i, s) in thousand_character::SECTIONS.iter().enumerate() {
        assert_eq!(s.id, i, "thousand-character section ids must match positions");
        assert!(!s.characters.is_empty() && !s.pinyin.is_empty());
    }
    for (i, s) in sanzi_jing::SECTIONS.iter().enumerate() {
        assert_eq!(s.id, i, "sanzi-jing section ids must match positions");
        assert!(!s.characters.is_empty() && !s.pinyin.is_empty());
    }
}

#[test]
fn surname_sections_hold_eight_surnames_each() {
    for (i, s) in baijiaxing::SECTIONS.iter().enumerate() {
        assert_eq!(s.id, i);
        assert_eq!(s.surnames.len(), 8, "section '{}' should list 8 surnames", s.title);
        for surname in s.surnames {
            assert!(!surname.surname.is_empty() && !surname.pinyin.is_empty());
        }
    }
}

#[test]
fn poems_are_fully_annotated() {
    let mut titles = HashSet::new();
    for p in tang_poetry::POEMS {
        assert!(titles.insert(p.title), "duplicate poem '{}'", p.title);
        assert!(!p.author.is_empty(), "poem '{}' missing author", p.title);
        assert!(!p.content.is_empty() && !p.pinyin.is_empty() && !p.translation.is_empty());
    }
}

#[test]
fn rotation_covers_every_source_once() {
    let unique: HashSet<&str> = ContentSource::ROTATION.iter().map(|c| c.as_str()).collect();
    assert_eq!(unique.len(), ContentSource::ROTATION.len());
    for source in ContentSource::ROTATION {
        assert!(source.section_count() > 0, "source '{}' has no sections", source.as_str());
        assert_eq!(ContentSource::parse(source.as_str()), Some(source));
    }
}

#[test]
fn sections_by_ids_preserves_registry_order() {
    let source = ContentSource::Tangshi;
    // Request out of order; items must come back in registry order.
    let picked = source.sections_by_ids(&[5, 1, 3]);
    assert_eq!(picked.len(), 3);
    let titles: Vec<&str> = picked
        .iter()
        .map(|item| match item {
            hanzi_garden::content::ContentItem::Poem(p) => p.title,
            _ => panic!("tangshi source must yield poems"),
        })
        .collect();
    assert_eq!(titles[0], tang_poetry::POEMS[1].title);
    assert_eq!(titles[1], tang_poetry::POEMS[3].title);
    assert_eq!(titles[2], tang_poetry::POEMS[5].title);
}
