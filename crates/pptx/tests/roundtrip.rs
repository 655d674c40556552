use deck_core::plan::{build_az305_deck, expectations};
use deck_core::{validate, CheckStatus, Grade, Presentation, Segment, SlideLayout};
use deck_pptx::{PptxParser, PptxWriter};
use std::io::Cursor;

fn write_and_read(deck: &deck_core::Deck) -> Presentation {
    let bytes = PptxWriter::new()
        .write(deck, Cursor::new(Vec::new()))
        .unwrap()
        .into_inner();
    PptxParser::new()
        .parse(Cursor::new(bytes), "deck.pptx")
        .unwrap()
}

#[test]
fn test_built_deck_survives_the_file_format() {
    let deck = build_az305_deck().unwrap();
    let read = write_and_read(&deck);

    assert_eq!(read.slides.len(), 97);
    assert_eq!(read.slide_size, Some((12_191_695, 6_858_000)));

    // What a reader sees matches the in-memory view of the deck.
    let in_memory = Presentation::from_deck(&deck);
    for (ours, theirs) in in_memory.slides.iter().zip(&read.slides) {
        assert_eq!(ours.number, theirs.number);
        assert_eq!(ours.segment, theirs.segment);
        assert_eq!(ours.layout, theirs.layout);
        assert_eq!(
            ours.texts().collect::<Vec<_>>(),
            theirs.texts().collect::<Vec<_>>(),
            "slide {}",
            ours.number
        );
    }

    assert_eq!(read.slides[8].segment, Some(Segment::Identity));
    assert_eq!(read.slides[8].layout, Some(SlideLayout::Divider));
}

#[test]
fn test_written_deck_validates() {
    let read = write_and_read(&build_az305_deck().unwrap());
    let report = validate(&read, &expectations());

    assert_eq!(report.fails, 0, "{report}");
    assert!(matches!(report.grade, Grade::A | Grade::AMinus));
    let dividers = report
        .results()
        .find(|r| r.name == "segment_dividers")
        .unwrap();
    assert_eq!(dividers.status, CheckStatus::Pass);
    assert_eq!(dividers.locations.len(), 5);
}

#[test]
fn test_missing_divider_is_reported() {
    let mut deck = build_az305_deck().unwrap();
    let removed = deck.slides.remove(8);
    assert_eq!(removed.layout, SlideLayout::Divider);

    let report = validate(&write_and_read(&deck), &expectations());
    let dividers = report
        .results()
        .find(|r| r.name == "segment_dividers")
        .unwrap();
    assert_eq!(dividers.status, CheckStatus::Fail);
    assert!(dividers.detail.contains("Missing divider for 'Identity, Governance'"));
    assert_ne!(report.grade, Grade::A);
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deck.pptx");
    let deck = build_az305_deck().unwrap();

    PptxWriter::new().save(&deck, &path).unwrap();
    let read = PptxParser::new().open(&path).unwrap();

    assert_eq!(read.filename, "deck.pptx");
    assert_eq!(read.slides.len(), 97);
    assert_eq!(read.slides[96].title(), "Thank You!");
}
