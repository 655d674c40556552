//! Segment 2: data storage solutions.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{BulletList, Frame, Table, TextBox};
use crate::segment::Segment;
use crate::theme::{AZURE_BLUE, DARK_BLUE};

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    deck.add_divider_slide("Data Storage Solutions", "20-25% of Exam", Segment::DataStorage);

    let slide = deck.add_content_slide("Segment 2 Learning Objectives", Segment::DataStorage, None);
    slide.add_bullet_list(
        BulletList::new([
            "Design storage solutions for relational data (SQL Database, SQL MI, SQL on VM)",
            "Design for semi-structured and NoSQL data (Cosmos DB, Table Storage)",
            "Design for unstructured data (Blob Storage, ADLS Gen2, Azure Files)",
            "Design data integration and analytics architectures (ADF, Synapse, Event Hubs)",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("Storage Decision Tree", Segment::DataStorage, None);
    slide.add_table(
        Table::new(
            &[
                ["Data Type", "Service", "When to Use"],
                ["Structured / Relational", "Azure SQL Database", "Cloud-native, auto-scaling, managed"],
                ["Structured / High compat", "Azure SQL Managed Instance", "SQL Server compat, VNet native"],
                ["Structured / Full control", "SQL Server on Azure VM", "OS-level access, legacy features"],
                ["Semi-structured / Global", "Azure Cosmos DB", "Multi-model, global dist, low latency"],
                ["Semi-structured / Simple", "Table Storage", "Key-value, low cost, simple queries"],
                ["Unstructured / Objects", "Blob Storage", "Images, documents, backups, media"],
                ["Unstructured / Analytics", "ADLS Gen2", "Big data, hierarchical namespace, Spark"],
                ["File shares", "Azure Files", "SMB/NFS, lift-and-shift, AD DS integration"],
                ["High-perf file shares", "Azure NetApp Files", "SAP, HPC, Oracle, low-latency NFS"],
            ],
            &[2.5, 3.5, 5.5],
        )
        .font_size(13)
        .top(1.4),
    )?;

    let slide = deck.add_content_slide("Storage Redundancy Matrix", Segment::DataStorage, None);
    slide.add_table(
        Table::new(
            &[
                ["Option", "Copies", "Scope", "Use Case", "Read Secondary?"],
                ["LRS", "3", "Single datacenter", "Dev/test, non-critical", "No"],
                ["ZRS", "3", "3 availability zones", "Production, zone resilience", "No"],
                ["GRS", "6", "2 regions (primary+secondary)", "DR, cross-region", "No (failover only)"],
                ["GZRS", "6", "3 zones + secondary region", "Mission-critical", "No (failover only)"],
                ["RA-GRS", "6", "2 regions", "DR + read from secondary", "Yes (read-only)"],
                ["RA-GZRS", "6", "3 zones + secondary region", "Maximum resilience + read", "Yes (read-only)"],
            ],
            &[1.5, 1.0, 3.0, 3.5, 2.5],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide(
        "Blob Storage Tiers & Lifecycle",
        Segment::DataStorage,
        None,
    );
    slide.add_table(
        Table::new(
            &[
                ["Tier", "Access", "Min Duration", "Retrieval Cost", "Storage Cost"],
                ["Hot", "Frequent", "None", "Low", "Highest"],
                ["Cool", "Infrequent (30+ days)", "30 days", "Medium", "Lower"],
                ["Cold", "Rarely (90+ days)", "90 days", "Higher", "Lower still"],
                ["Archive", "Offline (180+ days)", "180 days", "Highest (rehydrate)", "Lowest"],
            ],
            &[1.5, 2.8, 2.0, 2.5, 2.5],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 4.5, 11.0, 1.5),
            "Lifecycle Management: Automate tier transitions with rules.\nExample: Move to Cool after 30 days, Archive after 90, delete after 365.\nRehydration: Archive requires rehydration (Standard: up to 15 hours, High priority: <1 hour).",
        )
        .font_size(16)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Azure Files & NetApp Files", Segment::DataStorage, None);
    slide.add_bullet_list(
        BulletList::new([
            "Azure Files: Managed SMB (445) and NFS (2049) file shares in the cloud",
            "Tiers: Premium (SSD, low latency), Transaction Optimized (HDD), Hot, Cool",
            "AD DS Integration: Entra Domain Services or on-prem AD DS for identity-based access with NTFS permissions",
            "Azure File Sync: Sync on-prem file servers with Azure Files. Cloud tiering frees local disk space. Multi-site sync.",
            "Azure NetApp Files: Enterprise NAS -- sub-millisecond latency, Oracle, SAP HANA, HPC workloads",
            "NetApp tiers: Standard, Premium, Ultra. Capacity pools with volume allocation.",
            "Exam tip: Azure Files for general file shares; NetApp Files for high-performance or SAP/Oracle.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Relational Database Decision Matrix",
        Segment::DataStorage,
        None,
    );
    slide.add_table(
        Table::new(
            &[
                ["Feature", "SQL Database", "SQL Managed Instance", "SQL on VM"],
                ["Managed?", "Fully managed PaaS", "Fully managed PaaS", "IaaS (you manage OS)"],
                ["SQL Compat", "~95% (some gaps)", "~99% (near full)", "100% (full engine)"],
                ["VNet Native", "No (PE/service endpoint)", "Yes (in VNet)", "Yes (in VNet)"],
                ["SQL Agent", "Elastic Jobs", "Yes", "Yes"],
                ["Cross-DB Queries", "Elastic Query", "Yes", "Yes"],
                ["CLR / Linked Servers", "No", "Yes", "Yes"],
                ["Best For", "New cloud apps", "Migration / compat", "Legacy / full control"],
                ["Cost Model", "DTU or vCore", "vCore only", "VM + license"],
            ],
            &[2.3, 3.0, 3.0, 3.2],
        )
        .font_size(12)
        .top(1.4),
    )?;

    let slide = deck.add_content_slide(
        "Azure SQL Architecture Patterns",
        Segment::DataStorage,
        None,
    );
    slide.add_bullet_list(
        BulletList::new([
            "Elastic Pools: Share resources across multiple databases. Ideal for multi-tenant SaaS with variable workloads.",
            "Hyperscale: Up to 100 TB, rapid scale-out reads (up to 4 read replicas), fast backups regardless of size.",
            "Serverless: Auto-pause after idle period, auto-scale compute. Pay only for compute used. Best for intermittent workloads.",
            "DTU vs vCore: DTU = bundled (CPU+IO+memory). vCore = choose independently. vCore recommended for new deployments.",
            "Azure Hybrid Benefit: Use existing SQL Server licenses for ~55% savings. Apply at server or pool level.",
            "Ledger tables: Tamper-evident tables with blockchain-like verification. Regulatory and audit scenarios.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Cosmos DB Design",
        Segment::DataStorage,
        Some("Global Distribution & Multi-Model"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "APIs: NoSQL (native, recommended), MongoDB, Cassandra, Gremlin (graph), Table, PostgreSQL",
            "Global Distribution: Multi-region writes for active-active. Single-region writes + multi-region reads for active-passive.",
            "Partition Key Rules: (1) High cardinality -- many distinct values. (2) Even distribution -- no hot partitions. (3) Included in queries -- avoid cross-partition queries.",
            "RU/s: Request Units per second. Provisioned (predictable) or Autoscale (variable, min 10% of max). Serverless for dev/test.",
            "Item Size: Max 2 MB per item. Design for smaller documents with proper denormalization.",
            "Change Feed: Stream of changes for event-driven patterns. Trigger Functions, update caches, sync data.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Cosmos DB Consistency Spectrum",
        Segment::DataStorage,
        None,
    );
    slide.add_table(
        Table::new(
            &[
                ["Level", "Guarantee", "Latency", "Throughput", "Use Case"],
                ["Strong", "Linearizable reads", "Highest", "Lowest", "Financial transactions"],
                ["Bounded Staleness", "Reads lag by k versions or t time", "High", "Lower", "Leaderboards, counters"],
                ["Session (DEFAULT)", "Read-your-own-writes in session", "Medium", "Medium", "Most applications"],
                ["Consistent Prefix", "Reads never see out-of-order writes", "Lower", "Higher", "Social updates"],
                ["Eventual", "No ordering guarantee", "Lowest", "Highest", "Counters, likes, non-critical"],
            ],
            &[2.0, 3.0, 1.5, 1.5, 3.5],
        )
        .font_size(13),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 5.0, 11.0, 0.5),
            "Exam Default: Session consistency is the default and suits most applications.",
        )
        .font_size(16)
        .bold()
        .color(AZURE_BLUE),
    );

    let slide = deck.add_content_slide(
        "Data Platform Architecture",
        Segment::DataStorage,
        Some("Medallion Pattern"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "Bronze Layer (Raw): Ingest raw data as-is. ADLS Gen2 with hierarchical namespace. Parquet or Delta format.",
            "Silver Layer (Cleansed): Validated, deduplicated, conformed. Schema enforcement. Business logic applied.",
            "Gold Layer (Curated): Aggregated, business-ready. Star schema for BI. Served via Synapse SQL pools or Power BI.",
            "ADLS Gen2: Storage foundation. Hierarchical namespace + Blob APIs. ACLs for fine-grained access.",
            "Synapse Analytics: Unified analytics -- serverless SQL, dedicated SQL pools, Spark, Pipelines, Data Explorer.",
            "Microsoft Fabric: Next-gen unified analytics platform. Integrates Power BI, Data Factory, Synapse, Real-Time Analytics.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Data Integration", Segment::DataStorage, None);
    slide.add_table(
        Table::new(
            &[
                ["Service", "Pattern", "Use Case"],
                ["Azure Data Factory", "ETL / ELT orchestration", "Batch data movement, 90+ connectors, mapping data flows"],
                ["Synapse Pipelines", "Same ADF engine", "Data integration within Synapse workspace"],
                ["Event Hubs", "Streaming ingestion", "Millions of events/sec, Kafka compatible, capture to storage"],
                ["Stream Analytics", "Real-time processing", "SQL-like queries on streams, windowing functions"],
                ["Azure Databricks", "Spark-based analytics", "ML, data engineering, collaborative notebooks"],
                ["Logic Apps", "Integration workflows", "B2B, SaaS connectors, low-code orchestration"],
            ],
            &[2.5, 3.0, 6.0],
        ),
    )?;

    let slide = deck.add_content_slide("Data Protection & Encryption", Segment::DataStorage, None);
    slide.add_bullet_list(
        BulletList::new([
            "At Rest: Storage Service Encryption (SSE) for blobs/files. TDE for SQL databases. Always on by default.",
            "In Transit: TLS 1.2+ enforced. Minimum TLS version configurable on storage accounts.",
            "In Use: Always Encrypted for SQL (client-side encryption). Confidential computing for VMs.",
            "Key Management: Microsoft-managed keys (MMK, default) or Customer-managed keys (CMK, Key Vault).",
            "CMK Benefits: You control rotation, you can revoke access. Required by some compliance standards.",
            "Double Encryption: Infrastructure encryption adds second layer. Enable at storage account creation.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Private Endpoints for Data",
        Segment::DataStorage,
        Some("Zero Trust Networking for Data Services"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "Architecture: VNet -> Private Endpoint (NIC with private IP) -> Private DNS Zone -> Data Service",
            "DNS Resolution: privatelink.blob.core.windows.net resolves to PE private IP, not public IP",
            "Disable Public Access: After PE is configured, disable public network access on the service",
            "On-prem Access: Conditional DNS forwarder forwards privatelink.* queries to Azure DNS (168.63.129.16)",
            "Supported Services: Storage, SQL, Cosmos DB, Key Vault, App Config, Event Hubs, Service Bus, and 60+ more",
            "Cost: ~$7.30/month per PE + data processing charges. Small cost for significant security improvement.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Data Residency & Microsoft Purview",
        Segment::DataStorage,
        None,
    );
    slide.add_bullet_list(
        BulletList::new([
            "Sovereign Regions: Azure Government (US), Azure China (21Vianet). Data stays within sovereign boundary.",
            "Data Residency: Choose regions that meet regulatory requirements (GDPR, LGPD, etc.). Paired regions for DR.",
            "Microsoft Purview: Unified data governance -- data catalog, lineage tracking, classifications, access policies.",
            "Data Catalog: Scan and classify data across Azure, on-prem, and multi-cloud. Automatic sensitivity labels.",
            "Data Lineage: Visual tracking of data flow from source to consumption. Supports ADF, Synapse, Power BI.",
            "Exam Context: Know when Purview is the answer -- 'discover, classify, govern data estate' keywords.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Segment 2 Demos", Segment::DataStorage, None);
    slide.add_demo([
        "Storage Lifecycle: Configure blob lifecycle management to transition from Hot to Cool to Archive",
        "Cosmos DB Configuration: Create a Cosmos DB account with NoSQL API, select partition key, set consistency",
        "Private Endpoint for SQL: Create a PE for Azure SQL Database with private DNS zone integration",
        "Data Factory Pipeline: Build a simple copy pipeline from Blob Storage to SQL Database",
    ]);

    let slide = deck.add_exam_tip_slide("Segment 2 Exam Tips", Segment::DataStorage);
    slide.add_bullet_list(
        BulletList::new([
            "ZRS for zone resilience in production. LRS only for dev/test or non-critical data.",
            "SQL Managed Instance is the migration sweet spot -- near 100% SQL Server compatibility with full PaaS management.",
            "Session consistency is the Cosmos DB default. Strong only when absolutely required (higher latency, lower throughput).",
            "Private Endpoints = Zero Trust for data. If the question mentions 'secure access' to a data service, think PE.",
            "Archive tier = offline. You CANNOT read archived blobs without rehydrating first. Plan for up to 15 hours.",
            "Partition key rules: High cardinality, even distribution, included in WHERE clause of queries.",
        ])
        .top(1.5)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Segment 2 Review Questions", Segment::DataStorage, None);
    slide.add_review_questions([
        (
            "A global e-commerce app needs sub-10ms read latency worldwide. Data is semi-structured product catalog. Users mostly read their own recent changes. Which database and consistency?",
            "Cosmos DB with NoSQL API, multi-region reads, Session consistency (default). Partition key = productCategory or productId depending on query patterns.",
        ),
        (
            "You are migrating a SQL Server 2019 database that uses SQL Agent jobs, cross-database queries, and CLR assemblies. The team wants full PaaS management. What do you recommend?",
            "Azure SQL Managed Instance. It supports SQL Agent, cross-DB queries, and CLR -- features not available in SQL Database. Fully managed PaaS.",
        ),
        (
            "A healthcare company must store patient images for 7 years at minimum cost, with rare access. Images must never leave the US East region. What storage design?",
            "Blob Storage in US East, LRS or ZRS. Lifecycle policy: move to Archive tier after 30 days. RA-GRS NOT needed (single region requirement). Use immutability policies for retention.",
        ),
    ]);

    Ok(())
}
