//! Segment 5: networking and migrations.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{BulletList, Frame, Table, TextBox};
use crate::segment::Segment;
use crate::theme::{AZURE_BLUE, DARK_BLUE};

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    deck.add_divider_slide("Networking\n& Migrations", "~18% of Exam", Segment::Networking);

    let slide = deck.add_content_slide("Segment 5 Learning Objectives", Segment::Networking, None);
    slide.add_bullet_list(
        BulletList::new([
            "Design network solutions including VNets, hub-spoke, and Virtual WAN",
            "Design hybrid connectivity with VPN Gateway and ExpressRoute",
            "Design network security with Azure Firewall, NSGs, and DDoS Protection",
            "Plan and design migration strategies using Azure Migrate and CAF",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("VNet Architecture", Segment::Networking, None);
    slide.add_bullet_list(
        BulletList::new([
            "Address Space Planning: Use RFC 1918 ranges (10.0.0.0/8, 172.16.0.0/12, 192.168.0.0/16). Plan for growth.",
            "Non-Overlapping Addresses: Critical for peering and VPN. Hub and spokes must have unique CIDR ranges.",
            "Subnets: Segment by workload type. Some services require dedicated subnets (AKS, App Service VNet Integration, Bastion, Firewall).",
            "NSGs: Network Security Groups. Layer 4 (IP, port, protocol) rules. Attach to subnet or NIC. Processed by priority (100-4096).",
            "ASGs: Application Security Groups. Group VMs logically (web, app, db). Use in NSG rules instead of IP addresses.",
            "Service Endpoints vs Private Endpoints: SE = optimized route, still public IP. PE = private IP in your VNet. PE is preferred (Zero Trust).",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Hub-Spoke Topology", Segment::Networking, None);
    slide.add_bullet_list(
        BulletList::new([
            "Hub VNet: Centralized shared services -- Azure Firewall, VPN Gateway, ExpressRoute Gateway, Bastion, DNS.",
            "Spoke VNets: Workload isolation. Each spoke is a separate VNet peered to the hub.",
            "Peering: VNet peering is non-transitive. Spoke A cannot reach Spoke B through the hub without UDR + Firewall/NVA.",
            "UDRs (User-Defined Routes): Force spoke traffic through the hub Firewall. 0.0.0.0/0 -> Firewall private IP.",
            "Gateway Transit: Hub's VPN/ER gateway shared with spokes. Enable 'Allow gateway transit' on hub, 'Use remote gateways' on spoke.",
            "DNS: Azure Private DNS Zones linked to hub. Spoke VNets use hub's DNS or Azure DNS Private Resolver.",
            "Scale: Suitable for up to ~10-15 spokes. Beyond that, consider Virtual WAN.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Azure Virtual WAN", Segment::Networking, None);
    slide.add_bullet_list(
        BulletList::new([
            "Managed Hub-Spoke: Microsoft manages the hub router, VPN/ER gateways, routing tables.",
            "When to Use: 10+ branch offices, global transit (any-to-any), SD-WAN integration, multiple ER circuits.",
            "Hub: Virtual WAN hub is a managed VNet. You cannot deploy custom VMs inside it (except NVAs from marketplace).",
            "Routing: Automatic any-to-any connectivity between spokes, branches, and ExpressRoute. Route tables for segmentation.",
            "Secured Virtual Hub: Integrated Azure Firewall Manager for centralized security policies.",
            "vs Manual Hub-Spoke: Virtual WAN = less control, more automation, better for scale. Manual = more control, better for customization.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Hybrid Connectivity Decision", Segment::Networking, None);
    slide.add_table(
        Table::new(
            &[
                ["Attribute", "VPN Gateway", "ExpressRoute"],
                ["Connection", "Over public internet (encrypted)", "Private connection (NOT encrypted by default)"],
                ["Bandwidth", "Up to 10 Gbps (VpnGw5)", "50 Mbps to 100 Gbps (Direct)"],
                ["Latency", "Variable (internet dependent)", "Predictable, low latency"],
                ["Redundancy", "Active-active with 2 tunnels", "Dual circuits to different peering locations"],
                ["Cost", "Lower (gateway + data egress)", "Higher (circuit + gateway + provider fees)"],
                ["Setup Time", "Minutes to hours", "Days to weeks (provider circuit)"],
                ["Use Case", "Dev/test, backup path, small offices", "Production, latency-sensitive, large data"],
                ["Max Resilience", "VPN + ExpressRoute together", "2 ER circuits + VPN as backup"],
            ],
            &[2.0, 5.0, 4.5],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("ExpressRoute Deep Dive", Segment::Networking, None);
    slide.add_bullet_list(
        BulletList::new([
            "Peering Types: Azure Private Peering (VNets), Microsoft Peering (M365, Dynamics, Azure PaaS public IPs).",
            "ExpressRoute Direct: Dedicated 10/100 Gbps port pair at peering location. Massive data transfer, MACsec encryption.",
            "Global Reach: Connect on-prem sites through Microsoft backbone. Site A (ER) <-> Microsoft <-> Site B (ER). No VPN needed.",
            "FastPath: Bypass the ExpressRoute gateway for data-plane traffic. Ultra performance for latency-sensitive workloads.",
            "Encryption: ExpressRoute is NOT encrypted by default. Use MACsec (Direct) or IPsec VPN over ER for encryption.",
            "Billing: Unlimited data (flat rate) or Metered data (per GB egress). Premium add-on for global route access.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Network Security Layers",
        Segment::Networking,
        Some("Defense in Depth"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "Layer 1 - DDoS Protection: Standard plan for VNet resources. Adaptive tuning, cost protection, rapid response.",
            "Layer 2 - Azure Front Door WAF: Global HTTP protection. OWASP rules, bot protection, geo-filtering, rate limiting.",
            "Layer 3 - Azure Firewall: Centralized egress and east-west filtering. FQDN rules, threat intelligence, TLS inspection.",
            "Layer 4 - NSGs: Distributed L4 filtering at subnet and NIC. Allow/deny by IP, port, protocol. Flow logs for visibility.",
            "Layer 5 - Application Identity: Managed identity, RBAC, service endpoints/private endpoints. No network path = no attack surface.",
            "Layer 6 - Encryption: TLS in transit, SSE/TDE at rest, Always Encrypted in use. End-to-end protection.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Firewall vs NSG vs NVA", Segment::Networking, None);
    slide.add_table(
        Table::new(
            &[
                ["Attribute", "NSG", "Azure Firewall", "NVA (3rd Party)"],
                ["OSI Layer", "L3-L4", "L3-L7", "L3-L7 (vendor dependent)"],
                ["Cost", "Free", "~$1.25/hr + data processing", "VM cost + license"],
                ["Management", "Distributed (per subnet/NIC)", "Centralized in hub", "Self-managed or vendor console"],
                ["FQDN Filtering", "No", "Yes (application rules)", "Yes (vendor dependent)"],
                ["TLS Inspection", "No", "Yes (Premium)", "Yes (most vendors)"],
                ["Threat Intelligence", "No", "Yes (alert/deny known bad IPs)", "Yes (vendor feeds)"],
                ["Best For", "Micro-segmentation", "Centralized egress control", "Specific vendor requirements"],
            ],
            &[2.0, 3.2, 3.5, 2.8],
        )
        .font_size(12)
        .top(1.4),
    )?;

    let slide = deck.add_content_slide("Private Link Architecture", Segment::Networking, None);
    slide.add_bullet_list(
        BulletList::new([
            "Private Endpoint: NIC with a private IP from your VNet, connected to an Azure service via Private Link.",
            "Private DNS Zone: Maps service FQDN (e.g., mydb.database.windows.net) to the PE private IP.",
            "DNS Resolution Flow: Client -> Azure DNS -> privatelink zone -> PE private IP -> Service (via Microsoft backbone).",
            "Disable Public Access: Once PE is configured, disable public network access on the service for full Zero Trust.",
            "On-Prem Access: DNS conditional forwarder for privatelink.* zones -> Azure DNS (168.63.129.16) via VPN/ER.",
            "Private Link Service: Expose YOUR services behind a Standard LB as Private Link endpoints for consumers in other VNets/tenants.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Load Balancing Decision", Segment::Networking, None);
    slide.add_table(
        Table::new(
            &[
                ["Scope", "HTTP(S)?", "Service", "Key Features"],
                ["Global", "Yes", "Azure Front Door", "CDN, WAF, SSL offload, path routing, caching"],
                ["Global", "No", "Traffic Manager", "DNS-based, health probes, priority/weighted/geographic"],
                ["Regional", "Yes", "Application Gateway", "L7 LB, WAF, SSL termination, URL routing, rewrite"],
                ["Regional", "No", "Azure Load Balancer", "L4 LB, HA Ports, cross-region (Global tier)"],
            ],
            &[1.3, 1.3, 3.0, 5.9],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 4.5, 11.0, 1.5),
            "Common Combo: Front Door (global) -> Application Gateway (regional WAF) -> Load Balancer (backend VMs).\nExam Shortcut: 'Global + HTTP' = Front Door. 'Regional + HTTP' = App Gateway. 'Non-HTTP' = LB or Traffic Manager.",
        )
        .font_size(16)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Migration Strategies (5 Rs)", Segment::Networking, None);
    slide.add_table(
        Table::new(
            &[
                ["Strategy", "Definition", "Effort", "Azure Service"],
                ["Rehost (Lift & Shift)", "Move as-is to Azure VMs", "Low", "Azure Migrate, ASR"],
                ["Replatform", "Minor optimizations during migration", "Low-Medium", "SQL MI, App Service"],
                ["Refactor", "Re-architect for cloud-native", "High", "Container Apps, Functions"],
                ["Rebuild", "Rewrite from scratch", "Highest", "New cloud-native services"],
                ["Replace", "Switch to SaaS product", "Varies", "M365, Dynamics, SaaS apps"],
            ],
            &[2.5, 3.5, 1.5, 4.0],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 5.0, 11.0, 0.5),
            "CAF Migration Phases: Discover -> Assess -> Plan -> Migrate -> Optimize -> Govern -> Manage",
        )
        .font_size(16)
        .bold()
        .color(AZURE_BLUE),
    );

    let slide = deck.add_content_slide("Migration Tools", Segment::Networking, None);
    slide.add_table(
        Table::new(
            &[
                ["Tool", "Purpose", "Key Capability"],
                ["Azure Migrate", "Discovery + assessment + migration", "VM, DB, web app, VDI assessment. Agentless or agent-based."],
                ["Database Migration Service", "Database migration", "SQL Server, PostgreSQL, MySQL to Azure. Online (minimal downtime) + Offline."],
                ["Azure Data Box", "Offline large data transfer", "100TB (Data Box) or 1PB (Data Box Heavy). Ship physical device."],
                ["App Service Migration Assistant", "Web app migration", "Assess IIS/.NET apps, migrate to App Service."],
                ["Azure Migrate: Server Migration", "VM migration", "VMware (agentless), Hyper-V, physical. Continuous replication."],
                ["Storage Migration Service", "File server migration", "Migrate Windows file servers to Azure Files or Windows VMs."],
            ],
            &[2.8, 2.5, 6.2],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("Segment 5 Demos", Segment::Networking, None);
    slide.add_demo([
        "Hub-Spoke + Peering: Create hub VNet with Firewall, spoke VNets with peering and UDRs",
        "Private Endpoint + DNS: Create a Private Endpoint for a storage account with Private DNS Zone",
        "NSG + Firewall: Configure NSG micro-segmentation and Azure Firewall application rules",
        "Azure Migrate Assessment: Run a migration assessment for an on-premises environment",
    ]);

    let slide = deck.add_exam_tip_slide("Segment 5 Exam Tips", Segment::Networking);
    slide.add_bullet_list(
        BulletList::new([
            "ExpressRoute is NOT encrypted by default. If a question asks for encrypted private connectivity, add IPsec VPN over ER or use MACsec (Direct).",
            "Private Endpoint + Private DNS Zone = Zero Trust networking. Default recommendation for all data services.",
            "Azure Firewall for centralized egress control. UDRs force spoke traffic through the hub firewall.",
            "Front Door for global HTTP. App Gateway for regional HTTP. Load Balancer for regional non-HTTP. Traffic Manager for DNS-based global.",
            "SQL Managed Instance = migration sweet spot. Near 100% SQL Server compat with fully managed PaaS. First choice for SQL migration.",
            "Virtual WAN for scale (10+ branches). Manual hub-spoke for customization and smaller environments.",
        ])
        .top(1.5)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Segment 5 Review Questions", Segment::Networking, None);
    slide.add_review_questions([
        (
            "Your company has 50 branch offices connecting to Azure. They need any-to-any connectivity between branches and Azure VNets with centralized security policies. What do you recommend?",
            "Azure Virtual WAN with Secured Virtual Hub (integrated Firewall Manager). Provides managed routing, automatic any-to-any connectivity, and centralized security at scale for 50+ branches.",
        ),
        (
            "An application in a spoke VNet needs to access Azure SQL Database without any traffic traversing the public internet. How do you design this?",
            "Create a Private Endpoint for Azure SQL in the spoke VNet (or hub). Configure Private DNS Zone (privatelink.database.windows.net). Disable public access on SQL. UDR routes through hub firewall if cross-spoke.",
        ),
        (
            "You are migrating 200 SQL Server databases from on-prem. Most use SQL Agent, cross-database queries, and CLR. You want minimal application changes. What is your migration target and tool?",
            "Target: Azure SQL Managed Instance (supports all three features). Tool: Azure Database Migration Service (DMS) in online mode for minimal downtime. Assess with Azure Migrate first.",
        ),
    ]);

    Ok(())
}
