//! The AZ-305 course deck: 97 slides across an opening, five weighted topic
//! segments and a closing block.
//!
//! [`expectations`] lives next to the plan so the validator's counts and
//! keywords change together with the content.

mod closing;
mod compute;
mod continuity;
mod data;
mod identity;
mod networking;
mod opening;

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::Deck;
use crate::segment::Segment;
use crate::validate::{DeckExpectations, SegmentExpectation};

pub const DECK_TITLE: &str = "AZ-305: Designing Microsoft Azure Infrastructure Solutions";

/// Default file name of the built deck.
pub const OUTPUT_FILENAME: &str = "warner-az-305-2026-comprehensive.pptx";

/// Build the full course deck.
pub fn build_az305_deck() -> Result<Deck> {
    let mut deck = DeckBuilder::new(DECK_TITLE);

    opening::build(&mut deck)?;
    identity::build(&mut deck)?;
    data::build(&mut deck)?;
    continuity::build(&mut deck)?;
    compute::build(&mut deck)?;
    networking::build(&mut deck)?;
    closing::build(&mut deck)?;

    log::debug!("Planned {} slides", deck.slide_count());
    Ok(deck.finish())
}

/// What the validator expects of the deck built by [`build_az305_deck`].
pub fn expectations() -> DeckExpectations {
    DeckExpectations {
        slide_count: 97,
        dividers: vec![
            ("Identity, Governance", "25-30%"),
            ("Data Storage", "20-25%"),
            ("Business Continuity", "15-20%"),
            ("Compute", "~17%"),
            ("Networking", "~18%"),
        ],
        segments: vec![
            SegmentExpectation {
                number: 1,
                segment: Segment::Identity,
                name: "Identity/Governance",
                range: 9..=27,
            },
            SegmentExpectation {
                number: 2,
                segment: Segment::DataStorage,
                name: "Data Storage",
                range: 28..=45,
            },
            SegmentExpectation {
                number: 3,
                segment: Segment::Continuity,
                name: "BCDR",
                range: 46..=60,
            },
            SegmentExpectation {
                number: 4,
                segment: Segment::Compute,
                name: "Compute/App",
                range: 61..=76,
            },
            SegmentExpectation {
                number: 5,
                segment: Segment::Networking,
                name: "Networking/Migration",
                range: 77..=92,
            },
        ],
        section_markers: vec![
            ("learning_objectives", "learning objective"),
            ("demo_callout", "demo"),
            ("exam_tips", "exam tip"),
            ("review_questions", "review question"),
        ],
        decision_matrices: vec![
            "authentication decision",
            "storage decision",
            "redundancy",
            "rto",
            "compute decision",
            "messaging",
            "load balancing",
            "migration",
            "firewall",
            "governance decision",
        ],
        opening_keywords: vec![
            "az-305",
            "about",
            "course objectives",
            "exam overview",
            "agenda",
            "cross-cutting",
            "well-architected",
            "how to use",
        ],
        opening_slides: 8,
        closing_keywords: vec![
            "recap",
            "exam day",
            "study resources",
            "next steps",
            "thank you",
        ],
        closing_slides: 5,
        course_topics: vec![
            // Identity
            "entra id",
            "conditional access",
            "rbac",
            "management group",
            "azure policy",
            "key vault",
            "azure monitor",
            "pim",
            "sentinel",
            // Data storage
            "sql database",
            "sql managed instance",
            "cosmos db",
            "blob storage",
            "data lake",
            "data factory",
            "synapse",
            "partition key",
            // Continuity
            "rto",
            "rpo",
            "availability zone",
            "availability set",
            "site recovery",
            "backup",
            "failover group",
            "sla",
            // Compute
            "container apps",
            "aks",
            "azure functions",
            "service bus",
            "event grid",
            "event hubs",
            "api management",
            "redis cache",
            // Networking
            "hub-spoke",
            "expressroute",
            "vpn gateway",
            "nsg",
            "azure firewall",
            "private endpoint",
            "front door",
            "azure migrate",
            "virtual wan",
        ],
        exam_weights: vec![
            ("25-30%", "Identity/Governance"),
            ("20-25%", "Data Storage"),
            ("15-20%", "Business Continuity"),
        ],
        min_table_slides: 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SlideLayout;

    #[test]
    fn test_deck_has_97_numbered_slides() {
        let deck = build_az305_deck().unwrap();
        assert_eq!(deck.slide_count(), 97);
        for (i, slide) in deck.slides.iter().enumerate() {
            assert_eq!(slide.number, i + 1);
        }
    }

    #[test]
    fn test_segments_match_expected_ranges() {
        let deck = build_az305_deck().unwrap();
        for seg in expectations().segments {
            let numbers: Vec<usize> = deck.segment_slides(seg.segment).map(|s| s.number).collect();
            assert_eq!(numbers, seg.range.collect::<Vec<_>>(), "{}", seg.name);
        }
        assert_eq!(deck.segment_slides(Segment::Opening).count(), 8);
        assert_eq!(deck.segment_slides(Segment::Closing).count(), 5);
    }

    #[test]
    fn test_dividers_open_each_topic_segment() {
        let deck = build_az305_deck().unwrap();
        let dividers: Vec<(usize, Segment)> = deck
            .slides
            .iter()
            .filter(|s| s.layout == SlideLayout::Divider)
            .map(|s| (s.number, s.segment))
            .collect();
        assert_eq!(
            dividers,
            vec![
                (9, Segment::Identity),
                (28, Segment::DataStorage),
                (46, Segment::Continuity),
                (61, Segment::Compute),
                (77, Segment::Networking),
            ]
        );
        for segment in Segment::TOPICS {
            let divider = deck
                .segment_slides(segment)
                .find(|s| s.layout == SlideLayout::Divider)
                .unwrap();
            let badge = format!("{} of Exam", segment.exam_weight().unwrap());
            assert!(divider.texts().contains(&badge));
        }
    }

    #[test]
    fn test_title_and_thank_you_slides() {
        let deck = build_az305_deck().unwrap();
        assert_eq!(deck.slides[0].layout, SlideLayout::Title);
        assert_eq!(deck.slides[96].layout, SlideLayout::Title);
        assert!(deck.slides[96].texts().contains(&"Thank You!".to_string()));
        assert!(deck.slides[95]
            .texts()
            .iter()
            .any(|t| t.starts_with("[IMMEDIATE]  ")));
    }
}
