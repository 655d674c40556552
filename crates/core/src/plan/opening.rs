//! Opening block: course introduction, exam facts and agenda.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{Align, BulletList, Frame, Table, TextBox};
use crate::segment::Segment;
use crate::theme::{Font, GOLD, MID_GRAY, WHITE};

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    let slide = deck.add_title_slide(Segment::Opening, 2.8);
    slide.add_text(
        TextBox::new(
            Frame::inches(1.0, 1.0, 11.0, 1.5),
            "AZ-305: Designing Microsoft Azure\nInfrastructure Solutions",
        )
        .font_size(40)
        .bold()
        .color(WHITE)
        .align(Align::Center)
        .font(Font::Semibold),
    );
    slide.add_text(
        TextBox::new(
            Frame::inches(1.0, 3.2, 11.0, 1.0),
            "Tim Warner  |  O'Reilly Live Learning  |  January 2026",
        )
        .font_size(22)
        .color(GOLD)
        .align(Align::Center),
    );
    slide.add_text(
        TextBox::new(
            Frame::inches(1.0, 4.5, 11.0, 1.0),
            "Microsoft MVP  |  MCT  |  Azure Solutions Architect Expert",
        )
        .color(WHITE)
        .align(Align::Center),
    );

    let slide = deck.add_content_slide("About the Instructor", Segment::Opening, None);
    slide.add_bullet_list(
        BulletList::new([
            "Tim Warner: Microsoft MVP, Microsoft Certified Trainer (MCT)",
            "Certification: Azure Solutions Architect Expert (AZ-305)",
            "Platform: O'Reilly Live Learning instructor -- courses on Azure, DevOps, and cloud architecture",
            "Experience: 20+ years in IT training and consulting",
            "Contact: timothywarner316@gmail.com",
            "Social: @TechTrainerTim",
            "GitHub: github.com/timothywarner",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("Course Objectives", Segment::Opening, None);
    slide.add_bullet_list(
        BulletList::new([
            "Segment 1: Design identity, governance, and monitoring solutions (25-30%)",
            "Segment 2: Design data storage solutions for relational, non-relational, and unstructured data (20-25%)",
            "Segment 3: Design business continuity, high availability, and disaster recovery solutions (15-20%)",
            "Segment 4: Design compute and application architecture solutions (~17%)",
            "Segment 5: Design networking solutions and plan migrations (~18%)",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("Exam Overview", Segment::Opening, Some("AZ-305 Key Facts"));
    slide.add_table(
        Table::new(
            &[
                ["Attribute", "Detail"],
                ["Exam Code", "AZ-305"],
                ["Title", "Designing Microsoft Azure Infrastructure Solutions"],
                ["Pass Score", "700 / 1000"],
                ["Duration", "120 minutes"],
                ["Questions", "~40-60 (multiple choice, case studies, drag-and-drop)"],
                ["Last Updated", "October 18, 2024"],
                ["Prerequisite", "AZ-104 recommended (not required)"],
                ["Cost", "$165 USD"],
            ],
            &[3.0, 8.0],
        ),
    )?;

    let slide = deck.add_content_slide("Agenda & Schedule", Segment::Opening, None);
    slide.add_table(
        Table::new(
            &[
                ["Time", "Segment", "Topic", "Weight"],
                ["9:00 - 9:55", "Segment 1", "Identity, Governance & Monitoring", "25-30%"],
                ["10:05 - 10:55", "Segment 2", "Data Storage Solutions", "20-25%"],
                ["11:05 - 11:55", "Segment 3", "Business Continuity & HA", "15-20%"],
                ["12:05 - 12:55", "Segment 4", "Compute & Application Architecture", "~17%"],
                ["1:05 - 1:50", "Segment 5", "Networking & Migrations", "~18%"],
            ],
            &[2.2, 2.0, 5.5, 1.8],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 4.8, 11.0, 0.5),
            "10-minute breaks between each segment. All times Eastern.",
        )
        .font_size(16)
        .color(MID_GRAY),
    );

    let slide = deck.add_content_slide(
        "Cross-Cutting Themes",
        Segment::Opening,
        Some("Three pillars that appear in EVERY segment"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "Well-Architected Framework: The lens through which every architecture decision is evaluated -- reliability, security, cost, operations, performance.",
            "Zero Trust: \"Never trust, always verify.\" Assume breach, verify explicitly, use least-privilege access. This model drives networking, identity, and data design.",
            "Managed Identity: Eliminate secrets from code. System-assigned and user-assigned identities replace connection strings, API keys, and passwords.",
        ])
        .top(1.6),
    );

    let slide = deck.add_content_slide(
        "Azure Well-Architected Framework",
        Segment::Opening,
        Some("5 Pillars"),
    );
    slide.add_table(
        Table::new(
            &[
                ["Pillar", "Focus", "Key Question"],
                ["Reliability", "Resiliency & recovery", "Can the system recover from failures?"],
                ["Security", "Threat protection", "How do we protect data and systems?"],
                ["Cost Optimization", "Manage costs", "Are we spending only what we need?"],
                ["Operational Excellence", "Operations processes", "Can we monitor and improve?"],
                ["Performance Efficiency", "Scaling & performance", "Does it meet demand efficiently?"],
            ],
            &[2.5, 3.5, 5.5],
        ),
    )?;

    let slide = deck.add_content_slide("How to Use This Session", Segment::Opening, None);
    slide.add_bullet_list(
        BulletList::new([
            "Decision Matrices: Map directly to exam question logic -- learn the selection criteria, not just the services.",
            "Architecture Diagrams: Visual patterns that appear in case studies -- understand component relationships.",
            "Exam Tips (pink slides): Specific test-day tactics -- common traps, default answers, and elimination strategies.",
            "Demo Callouts: Hands-on exercises you can replicate in your own Azure subscription or sandbox.",
            "Review Questions: Scenario-based practice at the end of each segment -- mirrors the actual exam format.",
            "Ask Questions: Use the chat throughout. Real-time Q&A helps everyone learn.",
        ]),
    );

    Ok(())
}
