//! Segment 3: business continuity and high availability.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{BulletList, Frame, Table, TextBox};
use crate::segment::Segment;
use crate::theme::{AZURE_BLUE, DARK_BLUE};

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    deck.add_divider_slide(
        "Business Continuity\n& High Availability",
        "15-20% of Exam",
        Segment::Continuity,
    );

    let slide = deck.add_content_slide("Segment 3 Learning Objectives", Segment::Continuity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Design for high availability using availability zones, sets, and load balancing",
            "Design backup and recovery solutions with Azure Backup and site recovery",
            "Design disaster recovery strategies for multi-region architectures",
            "Calculate composite SLAs and map RTO/RPO to Azure services",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("RTO vs RPO Fundamentals", Segment::Continuity, None);
    slide.add_bullet_list(
        BulletList::new([
            "RPO (Recovery Point Objective): Maximum acceptable DATA LOSS measured in time. How much data can you afford to lose?",
            "RTO (Recovery Time Objective): Maximum acceptable DOWNTIME measured in time. How quickly must you recover?",
            "Example: RPO = 1 hour means you can lose up to 1 hour of data. RTO = 4 hours means you must recover within 4 hours.",
            "Cost Relationship: Lower RPO/RTO = higher cost. Near-zero RPO requires synchronous replication. Near-zero RTO requires hot standby.",
            "Business drives the numbers: Finance and stakeholders define acceptable RPO/RTO, architects design to meet them.",
            "Exam Pattern: Scenario gives RPO/RTO requirements -> you select the appropriate Azure service/configuration.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("RTO / RPO Decision Matrix", Segment::Continuity, None);
    slide.add_table(
        Table::new(
            &[
                ["RPO Requirement", "Solution", "RTO Requirement", "Solution"],
                ["RPO = 0 (zero loss)", "Sync replication / AZ", "RTO < 1 min", "Auto-failover (SQL FG, Cosmos)"],
                ["RPO < 15 min", "Continuous replication / ASR", "RTO < 1 hour", "Hot standby / ASR failover"],
                ["RPO < 1 hour", "Frequent backups / log shipping", "RTO < 4 hours", "Warm standby / ASR"],
                ["RPO < 24 hours", "Daily backups", "RTO < 24 hours", "Cold / backup restore"],
                ["RPO = days", "Weekly backups / geo-restore", "RTO = days", "Rebuild from backup"],
            ],
            &[2.5, 3.5, 2.5, 3.0],
        ),
    )?;

    let slide = deck.add_content_slide(
        "Availability Zones vs Availability Sets",
        Segment::Continuity,
        None,
    );
    slide.add_table(
        Table::new(
            &[
                ["Attribute", "Availability Zones", "Availability Sets"],
                ["Protection Level", "Datacenter failure", "Rack/hardware failure"],
                ["SLA", "99.99%", "99.95%"],
                ["Spread", "3 physically separate datacenters", "Up to 3 fault + 20 update domains"],
                ["Network Latency", "< 2 ms between zones", "N/A (same datacenter)"],
                ["Cost", "Cross-zone data transfer charged", "No extra cost"],
                ["Example", "VMs in Zone 1, 2, 3 + zone LB", "VMs in FD 0, 1, 2 behind LB"],
                ["Recommendation", "DEFAULT for production", "Legacy or regions without zones"],
            ],
            &[2.5, 4.5, 4.5],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("SLA Calculation", Segment::Continuity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Single VM SLAs: Premium SSD = 99.9%, Availability Set = 99.95%, Availability Zones = 99.99%",
            "Composite SLA (serial): Multiply individual SLAs. Web (99.95%) x DB (99.99%) = 99.94%",
            "Composite SLA (parallel/redundant): 1 - (1-SLA_A) x (1-SLA_B). Two 99.9% instances = 99.9999%",
            "Example: Web tier (2 VMs in zones, 99.99%) x App tier (99.95%) x SQL (99.99%) = 99.93%",
            "Impact: 99.9% = ~8.76 hrs/year downtime. 99.99% = ~52 min/year. 99.95% = ~4.38 hrs/year.",
            "Strategy: Add redundancy to the WEAKEST component. That is where you get the most SLA improvement.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Azure Backup Architecture", Segment::Continuity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Recovery Services Vault: Central management for backup and ASR. Supports VMs, SQL, Files, SAP, on-prem.",
            "Backup Vault: Newer vault type for Azure Disks, Blobs, PostgreSQL, AKS. Simpler management.",
            "Agents: VM Extension (Azure VMs), MARS (files/folders to cloud), MABS/DPM (on-prem workloads).",
            "Policies: Daily/weekly/monthly/yearly retention. Customize per workload. Instant restore from snapshots.",
            "Storage Redundancy: LRS (default), ZRS (zone protection), GRS (cross-region). Choose at vault creation.",
            "Soft Delete: 14 additional days to recover deleted backup data. Enhanced soft delete for ransomware protection.",
            "Cross-Region Restore: Enable on GRS vaults to restore in paired region even when primary is healthy.",
        ])
        .font_size(16),
    );

    let slide = deck.add_content_slide("Azure Site Recovery (ASR)", Segment::Continuity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Azure-to-Azure: Replicate VMs between Azure regions. RPO ~30 seconds for VMs.",
            "On-prem-to-Azure: VMware VMs, Hyper-V VMs, physical servers. Process Server handles replication.",
            "Test Failover: Failover to isolated VNet. NO impact to production. Validate DR plan safely.",
            "Planned Failover: Zero data loss. Shut down source, replicate final changes, bring up target.",
            "Unplanned Failover: Source is down. Use latest recovery point. Some data loss possible (within RPO).",
            "Recovery Plans: Group VMs, define startup order, add scripts/manual actions. Automate entire DR sequence.",
            "Key Distinction: ASR = DR (disaster recovery), NOT backup. Use Azure Backup for backup.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("SQL BCDR Options", Segment::Continuity, None);
    slide.add_table(
        Table::new(
            &[
                ["Option", "RPO", "Scope", "Auto Failover?", "Best For"],
                ["Zone Redundant", "0", "Same region, 3 zones", "Automatic", "HA within region"],
                ["Active Geo-Replication", "~5 seconds", "Up to 4 secondaries, any region", "Manual", "Read scale, custom DR"],
                ["Auto-Failover Groups", "~5 seconds", "1 secondary region", "Automatic (DNS)", "Production DR"],
                ["Geo-Restore", "~1 hour", "Paired region", "Manual (restore)", "Budget DR"],
                ["PITR", "5 min (up to 35 days)", "Same region", "Manual (restore)", "Accidental changes"],
            ],
            &[2.2, 1.3, 3.5, 2.0, 2.5],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("Multi-Region Patterns", Segment::Continuity, None);
    slide.add_table(
        Table::new(
            &[
                ["Pattern", "RTO", "RPO", "Cost", "Complexity", "Use Case"],
                ["Active-Active", "~0", "~0", "Highest", "Highest", "Global apps, zero downtime"],
                ["Active-Passive (Hot)", "Minutes", "Near-zero", "High", "Medium", "Critical apps"],
                ["Active-Passive (Warm)", "Minutes-hours", "Minutes", "Medium", "Medium", "Important apps"],
                ["Active-Passive (Cold)", "Hours", "Hours", "Low", "Low", "Non-critical"],
            ],
            &[2.2, 1.3, 1.5, 1.5, 1.5, 3.5],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 4.5, 11.0, 1.0),
            "Traffic Routing: Azure Front Door (global HTTP) or Traffic Manager (DNS-based) for multi-region failover.",
        )
        .font_size(16)
        .bold()
        .color(AZURE_BLUE),
    );

    let slide = deck.add_content_slide("HA Decision Matrix by Service", Segment::Continuity, None);
    slide.add_table(
        Table::new(
            &[
                ["Service", "HA Mechanism", "SLA", "Key Configuration"],
                ["VMs", "Availability Zones + Load Balancer", "99.99%", "Zone-redundant deployment"],
                ["Azure SQL", "Auto-Failover Groups", "99.99%", "Automatic DNS failover"],
                ["Cosmos DB", "Multi-region writes", "99.999%", "5-nines with multi-write"],
                ["App Service", "Zone-redundant plan", "99.99%", "Premium v3 + zone enabled"],
                ["AKS", "Zone-spanning node pools", "99.99%", "3 zones, system + user pools"],
                ["Storage", "ZRS / GZRS", "99.99%+", "Zone or geo-zone redundant"],
                ["Functions", "Zone-redundant Premium", "99.99%", "Premium plan required"],
            ],
            &[1.8, 3.2, 1.3, 5.2],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("DR Testing", Segment::Continuity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Test Failover (ASR): Failover VMs to isolated VNet. No impact to production. Validate apps work.",
            "Test Failover (SQL): Failover groups support test failover with alternate DNS suffix.",
            "Recovery Plans: Define multi-VM failover with sequencing. Add pre/post scripts for configuration.",
            "Documented Runbooks: Step-by-step DR procedures. Who does what, in what order, with what approvals.",
            "Regular DR Drills: Quarterly or semi-annual. Test RTO/RPO claims. Document lessons learned.",
            "Chaos Engineering: Azure Chaos Studio for fault injection. Test resilience under controlled failure.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Segment 3 Demos", Segment::Continuity, None);
    slide.add_demo([
        "Azure Backup Policy: Create a Recovery Services Vault with daily backup policy for Azure VMs",
        "ASR Replication: Enable Azure-to-Azure replication for a VM, view replication health",
        "SQL Failover Group: Create an auto-failover group between two Azure SQL servers in different regions",
        "Zone Deployment: Deploy a VM to a specific availability zone and verify zone placement",
    ]);

    let slide = deck.add_exam_tip_slide("Segment 3 Exam Tips", Segment::Continuity);
    slide.add_bullet_list(
        BulletList::new([
            "Auto-failover groups > active geo-replication for SQL DR. Groups provide automatic DNS failover.",
            "ASR is for DR, NOT backup. If the question asks about 'recovering deleted files', use Azure Backup.",
            "Availability Zones = 99.99% SLA. This is the default HA recommendation for production workloads.",
            "Front Door for global HTTP HA. Traffic Manager for DNS-based global routing (non-HTTP or simple).",
            "Test failover = no production impact. Always recommend test failover for DR validation.",
            "Composite SLA math: Multiply serial components, use parallel formula for redundant components.",
        ])
        .top(1.5)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Segment 3 Review Questions", Segment::Continuity, None);
    slide.add_review_questions([
        (
            "Your SQL database must survive a complete Azure region outage with automatic failover and near-zero RPO. Users connect via a single DNS name. What do you implement?",
            "Auto-failover group across two regions. Provides automatic DNS failover (~5 second RPO), single read-write endpoint, and optional read-only endpoint.",
        ),
        (
            "A web application runs on 3 VMs behind a load balancer. The SLA for each VM is 99.9%. The LB SLA is 99.99%. What is the composite SLA for the web tier?",
            "Parallel VMs: 1 - (1-0.999)^3 = 99.9999%. Serial with LB: 99.9999% x 99.99% = 99.9899%. The LB becomes the limiting factor.",
        ),
        (
            "Your company needs to protect Azure VMs with RPO < 30 minutes and RTO < 1 hour for DR to a secondary region. Which service?",
            "Azure Site Recovery (ASR). Provides ~30 second RPO for Azure VMs with continuous replication, and minutes RTO with automated failover via recovery plans.",
        ),
    ]);

    Ok(())
}
