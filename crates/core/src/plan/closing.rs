//! Closing block: recap, exam-day strategy and next steps.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{
    Align, BulletList, Frame, Paragraph, Run, Shape, ShapeKind, Table, TextBox, TextStyle,
};
use crate::segment::Segment;
use crate::theme::{Font, AZURE_BLUE, GOLD, GREEN, PURPLE, WHITE};

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    let slide = deck.add_content_slide(
        "Course Recap",
        Segment::Closing,
        Some("5 Segments, 3 Cross-Cutting Themes"),
    );
    slide.add_table(
        Table::new(
            &[
                ["Segment", "Core Theme", "Key Takeaway"],
                ["1. Identity & Governance", "Who & What", "Managed Identity + PHS + PIM + Policy"],
                ["2. Data Storage", "Store & Protect", "SQL MI + Cosmos DB + Private Endpoints"],
                ["3. BCDR", "Survive & Recover", "AZ + Failover Groups + ASR + Backup"],
                ["4. Compute & Apps", "Build & Run", "Container Apps + Service Bus + APIM"],
                ["5. Network & Migration", "Connect & Move", "Hub-Spoke + ExpressRoute + Azure Migrate"],
            ],
            &[2.5, 2.0, 7.0],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 5.0, 11.0, 0.8),
            "Everywhere: Well-Architected Framework | Zero Trust | Managed Identity",
        )
        .font_size(20)
        .bold()
        .color(AZURE_BLUE),
    );

    let slide = deck.add_content_slide("Exam Day Strategy", Segment::Closing, None);
    slide.add_bullet_list(
        BulletList::new([
            "Pace: ~2 minutes per question. 40-60 questions in 120 minutes. Do NOT spend 5+ minutes on one question.",
            "Case Studies: Read the questions FIRST, then scan the case study for relevant details. Do not read the entire case study top-to-bottom.",
            "Elimination: Remove obviously wrong answers first. Usually 1-2 are clearly wrong. Then compare remaining options.",
            "Flag & Return: Flag uncertain questions and return after completing all others. Fresh perspective helps.",
            "No Penalty: There is NO penalty for guessing. NEVER leave a question blank. Always select your best guess.",
            "Multiple Correct: Some questions have multiple correct answers but ask for the BEST answer. Look for 'most cost-effective', 'least effort', 'most secure'.",
            "Read Carefully: Watch for qualifiers: 'minimum', 'maximum', 'only', 'must', 'should'. These change the correct answer.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Study Resources", Segment::Closing, None);
    slide.add_bullet_list(
        BulletList::new([
            "Microsoft Learn: Free learning paths aligned to AZ-305 exam objectives",
            "AZ-305 Study Guide: https://aka.ms/AZ305-StudyGuide -- official skills measured document",
            "Practice Assessment: Free practice questions on Microsoft Learn -- take at least 3 times",
            "Exam Sandbox: https://aka.ms/examdemo -- experience the exam interface before test day",
            "Azure Architecture Center: https://learn.microsoft.com/azure/architecture/ -- reference architectures, patterns, best practices",
            "Well-Architected Framework: https://learn.microsoft.com/azure/well-architected/ -- 5 pillars deep dive",
            "GitHub Labs: https://github.com/MicrosoftLearning/AZ-305-DesigningMicrosoftAzureInfrastructureSolutions",
            "This Course Repo: Contains all demo scripts, Bicep templates, and practice questions",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Three Prioritized Next Steps", Segment::Closing, None);
    let priorities = [
        (
            "[IMMEDIATE]",
            "Take the Microsoft Learn practice assessment TODAY. Identify your weak areas immediately.",
            GREEN,
            1.5,
        ),
        (
            "[SHORT-TERM]",
            "Build 3 architectures in an Azure sandbox THIS WEEK: hub-spoke networking, SQL failover group, Container Apps deployment.",
            AZURE_BLUE,
            3.2,
        ),
        (
            "[LONG-TERM]",
            "Schedule the AZ-305 exam within 2 WEEKS. A deadline creates urgency. You have the knowledge -- go prove it.",
            PURPLE,
            4.9,
        ),
    ];
    for (label, description, fill, top) in priorities {
        slide.add_shape(
            Shape::new(
                ShapeKind::RoundedRectangle,
                Frame::inches(0.8, top, 11.5, 1.3),
                fill,
            )
            .with_text(vec![Paragraph::new(vec![
                Run::new(
                    format!("{label}  "),
                    TextStyle::new(20, GOLD).bold().font(Font::Semibold),
                ),
                Run::new(description, TextStyle::new(18, WHITE)),
            ])]),
        );
    }

    let slide = deck.add_title_slide(Segment::Closing, 3.3);
    slide.add_text(
        TextBox::new(Frame::inches(1.0, 1.0, 11.0, 1.0), "Thank You!")
            .font_size(48)
            .bold()
            .color(WHITE)
            .align(Align::Center)
            .font(Font::Semibold),
    );
    slide.add_text(
        TextBox::new(Frame::inches(1.0, 2.0, 11.0, 1.0), "Questions? Let's discuss!")
            .font_size(28)
            .color(GOLD)
            .align(Align::Center),
    );
    slide.add_text(
        TextBox::new(Frame::inches(1.0, 3.8, 11.0, 0.5), "Tim Warner")
            .font_size(24)
            .bold()
            .color(WHITE)
            .align(Align::Center),
    );
    slide.add_text(
        TextBox::new(
            Frame::inches(1.0, 4.5, 11.0, 2.0),
            "timothywarner316@gmail.com  |  @TechTrainerTim\nO'Reilly Live Learning\nMicrosoft MVP  |  MCT  |  Azure Solutions Architect Expert",
        )
        .font_size(18)
        .color(WHITE)
        .align(Align::Center),
    );

    Ok(())
}
