//! Segment 1: identity, governance and monitoring.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{BulletList, Frame, Table, TextBox};
use crate::segment::Segment;
use crate::theme::{AZURE_BLUE, DARK_BLUE};

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    deck.add_divider_slide(
        "Identity, Governance\n& Monitoring",
        "25-30% of Exam",
        Segment::Identity,
    );

    let slide = deck.add_content_slide("Segment 1 Learning Objectives", Segment::Identity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Design authentication and authorization solutions using Microsoft Entra ID",
            "Design governance solutions with management groups, policies, and RBAC",
            "Design monitoring and logging solutions with Azure Monitor, Sentinel, and Application Insights",
            "Design secure access to secrets, keys, and certificates using Key Vault with managed identities",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("Microsoft Entra ID Core Concepts", Segment::Identity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Tenant: A dedicated instance of Entra ID representing an organization. Each tenant has a unique directory.",
            "Directory: The identity store within a tenant -- users, groups, applications, service principals.",
            "Subscription: A billing boundary linked to one tenant. Multiple subscriptions per tenant, one tenant per subscription.",
            "CRITICAL RENAME: 'Azure AD' is now 'Microsoft Entra ID'. The exam uses the NEW naming exclusively.",
            "Entra External ID: Replaces Azure AD B2C for consumer-facing identity scenarios.",
        ]),
    );

    let slide = deck.add_content_slide("Authentication Decision Matrix", Segment::Identity, None);
    slide.add_table(
        Table::new(
            &[
                ["Scenario", "Solution", "Key Detail"],
                ["Employees only", "Microsoft Entra ID", "Cloud-native, MFA, Conditional Access"],
                ["Partner organizations", "Entra External ID (B2B)", "Invite external users, cross-tenant access"],
                ["Consumer applications", "Entra External ID (B2C)", "Custom sign-up/sign-in, social logins"],
                ["Hybrid identity", "Entra Connect / Cloud Sync", "Sync on-prem AD to cloud"],
                ["Federated / complex", "AD FS", "On-prem federation, claims-based auth"],
                ["Multi-tenant SaaS", "Multi-tenant app registration", "Consent framework, service principals"],
            ],
            &[2.8, 3.8, 5.0],
        ),
    )?;

    let slide = deck.add_content_slide("Hybrid Identity Options", Segment::Identity, None);
    slide.add_table(
        Table::new(
            &[
                ["Method", "How It Works", "Passwords in Cloud?", "Complexity", "Recommendation"],
                ["Password Hash Sync (PHS)", "Hash of hash synced to Entra ID", "Yes (hashed)", "Low", "DEFAULT -- start here"],
                ["Pass-Through Auth (PTA)", "Auth request forwarded to on-prem", "No", "Medium", "Regulatory requirement"],
                ["Federation (AD FS)", "Redirect to on-prem AD FS farm", "No", "High", "Only if required"],
            ],
            &[2.2, 3.3, 2.2, 1.5, 2.5],
        )
        .font_size(13),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 4.5, 11.0, 1.0),
            "Exam Default: PHS is the recommended starting point. Cloud Sync is the modern lightweight alternative to Entra Connect.",
        )
        .font_size(16)
        .bold()
        .color(AZURE_BLUE),
    );

    let slide = deck.add_content_slide(
        "Conditional Access Architecture",
        Segment::Identity,
        Some("Policy = Assignments + Conditions + Controls"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "Signals (Inputs): User/group, Cloud app, Location (named/IP), Device platform & state, Sign-in risk level (Identity Protection)",
            "Decisions (Grant Controls): Allow, Block, Require MFA, Require compliant device, Require Hybrid Entra joined, Require app protection policy",
            "Session Controls: App-enforced restrictions, Conditional Access App Control (MCAS), Sign-in frequency, Persistent browser session",
            "Key Principle: Policies are additive. If ANY policy blocks, access is denied. Most restrictive policy wins.",
            "Report-Only Mode: Test policies without enforcement. Always use this before enabling enforcement.",
            "Named Locations: Define trusted IPs/countries. Combine with policies to skip MFA on corporate networks.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Managed Identity Deep Dive",
        Segment::Identity,
        Some("Eliminate secrets from your code"),
    );
    slide.add_table(
        Table::new(
            &[
                ["Attribute", "System-Assigned", "User-Assigned"],
                ["Lifecycle", "Tied to resource (deleted together)", "Independent (manage separately)"],
                ["Sharing", "1:1 with resource", "1:Many across resources"],
                ["Use Case", "Single resource needs access", "Multiple resources share same identity"],
                ["Creation", "Enable on the resource", "Create as standalone resource, then assign"],
                ["Example", "VM accessing Key Vault", "Multiple VMs accessing same storage account"],
                ["Exam Default", "Start with system-assigned", "Use when sharing is needed"],
            ],
            &[2.0, 4.8, 4.8],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("RBAC & Authorization", Segment::Identity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Scope Hierarchy: Management Group > Subscription > Resource Group > Resource. Permissions inherit downward.",
            "Built-in Roles: Owner (full + assign), Contributor (full - assign), Reader (view only), User Access Admin (assign only).",
            "Custom Roles: JSON definition with Actions, NotActions, DataActions, NotDataActions. Assignable at MG, Sub, or RG scope.",
            "Deny Assignments: Override RBAC allows. Created by Blueprints and managed apps. Cannot create directly.",
            "Best Practice: Assign roles to GROUPS, not individual users. Use PIM for just-in-time elevation.",
            "Scope Tip: Assign at the NARROWEST scope possible. If access is needed at RG level, do not assign at subscription level.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("PIM & Identity Governance", Segment::Identity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Privileged Identity Management (PIM): Just-in-time (JIT) role activation. Eligible vs Active assignments.",
            "PIM Workflow: User requests activation -> Approval (optional) -> Time-limited access (e.g., 8 hours) -> Auto-expires",
            "Access Reviews: Periodic review of who has access to what. Self-review, manager review, or group owner review.",
            "Entitlement Management: Access packages bundle resources (groups, apps, SharePoint). Catalog + Policies + Requests.",
            "Identity Governance: Lifecycle workflows for joiner/mover/leaver. Automate onboarding and offboarding.",
            "Exam Key: PIM requires Entra ID P2 license. Access Reviews also require P2.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Management Group Hierarchy",
        Segment::Identity,
        Some("Cloud Adoption Framework Landing Zone"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "Root MG: Tenant Root Group (auto-created, do NOT apply restrictive policies here)",
            "  Platform MG: Shared services -- contains Identity, Management, and Connectivity subscriptions",
            "    Identity MG: Domain controllers, Entra Connect servers",
            "    Management MG: Log Analytics, Automation, Monitor resources",
            "    Connectivity MG: Hub VNet, VPN/ExpressRoute gateways, DNS, Firewall",
            "  Landing Zones MG: Workload subscriptions",
            "    Corp MG: Internal apps connected to corporate network",
            "    Online MG: Internet-facing apps",
            "  Sandbox MG: Experimentation subscriptions (no connectivity to corp)",
            "  Decommissioned MG: Subscriptions being retired",
            "Depth Limit: 6 levels deep (excluding Root and subscription level)",
        ])
        .font_size(16),
    );

    let slide = deck.add_content_slide("Azure Policy Deep Dive", Segment::Identity, None);
    slide.add_table(
        Table::new(
            &[
                ["Effect", "What It Does", "When to Use"],
                ["Deny", "Blocks non-compliant resource creation/update", "Enforce hard requirements"],
                ["Audit", "Logs non-compliance, allows creation", "Monitor before enforcing"],
                ["Append", "Adds fields to resource during creation", "Add tags, IP rules"],
                ["DeployIfNotExists", "Deploys related resource if missing", "Auto-configure diagnostics"],
                ["Modify", "Changes properties on existing resources", "Add/update tags, settings"],
                ["AuditIfNotExists", "Audits if related resource is missing", "Check for diagnostics settings"],
                ["Disabled", "Policy exists but not enforced", "Testing, temporary disable"],
            ],
            &[2.5, 4.5, 4.5],
        )
        .font_size(13),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 5.5, 11.0, 0.5),
            "Initiative = Collection of policies assigned together. Use initiatives for compliance standards (e.g., CIS, NIST).",
        )
        .font_size(15)
        .bold()
        .color(AZURE_BLUE),
    );

    let slide = deck.add_content_slide("Governance Decision Matrix", Segment::Identity, None);
    slide.add_table(
        Table::new(
            &[
                ["Requirement", "Tool", "Details"],
                ["Enforce naming conventions", "Azure Policy (Deny)", "Regex patterns on resource names"],
                ["Control costs", "Budgets + Cost Management + Policy", "Alerts at thresholds, deny expensive SKUs"],
                ["Regulatory compliance", "Policy Initiatives", "Built-in: CIS, NIST, ISO, PCI DSS"],
                ["Resource organization", "Tags + Management Groups", "Cost center, environment, owner tags"],
                ["Prevent accidental deletion", "Resource Locks", "CanNotDelete or ReadOnly locks"],
                ["Standardize deployments", "Blueprints / Template Specs", "Versioned, governed ARM/Bicep templates"],
                ["Track changes", "Activity Log + Change Analysis", "Who changed what and when"],
            ],
            &[2.8, 3.5, 5.2],
        )
        .font_size(13),
    )?;

    let slide = deck.add_content_slide("Azure Monitor Architecture", Segment::Identity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Data Sources: Applications (App Insights), OS (agents), Azure resources (diagnostics), Subscriptions (activity log), Tenant (Entra logs)",
            "Collection: Data Collection Rules (DCR) and Diagnostic Settings route data to destinations",
            "Destinations: Log Analytics workspace (KQL queries), Metrics (near real-time), Storage (archive), Event Hub (streaming)",
            "Analysis: KQL queries, Workbooks (visual dashboards), Alerts (action groups: email, SMS, webhook, Logic App, Function)",
            "Azure Monitor Agent (AMA): Replaces legacy agents (MMA, Telegraf). Single agent for Windows and Linux. Uses DCRs.",
            "Log Analytics Retention: 30 days free interactive, up to 730 days, archive up to 12 years.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Application Insights & Observability",
        Segment::Identity,
        None,
    );
    slide.add_bullet_list(
        BulletList::new([
            "APM: Application Performance Management -- automatic instrumentation for .NET, Java, Node.js, Python",
            "Distributed Tracing: End-to-end transaction tracking across microservices. Correlates with Operation ID.",
            "Live Metrics: Real-time stream of requests, failures, dependencies. Zero-cost when viewing.",
            "Availability Tests: URL ping (global), Standard test (status + SSL + content), Custom TrackAvailability.",
            "Smart Detection: AI-driven anomaly detection for failures, performance degradation, memory leaks.",
            "Application Map: Visual topology of dependencies. Shows call rates, latency, failure rates between components.",
            "Workspace-based: Always use workspace-based App Insights (not classic). Required for cross-resource queries.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide(
        "Microsoft Sentinel",
        Segment::Identity,
        Some("Cloud-Native SIEM + SOAR"),
    );
    slide.add_bullet_list(
        BulletList::new([
            "SIEM: Security Information and Event Management -- collect, detect, investigate, respond",
            "SOAR: Security Orchestration, Automation and Response -- playbooks (Logic Apps) for automated response",
            "Data Connectors: 100+ built-in. Microsoft 365, Entra ID, Defender, AWS, GCP, firewalls, custom (CEF/Syslog)",
            "Analytics Rules: Scheduled (KQL), Microsoft Security (from Defender), Fusion (ML correlation), NRT (near real-time)",
            "Workbooks: Interactive dashboards for SOC analysts. Built-in templates for common scenarios.",
            "When Sentinel vs Defender for Cloud: Sentinel = full SIEM for SOC teams. Defender = CSPM + workload protection. Use both together.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Key Vault Patterns", Segment::Identity, None);
    slide.add_bullet_list(
        BulletList::new([
            "Access Model: RBAC (recommended) vs Vault Access Policies (legacy). RBAC integrates with Entra ID roles.",
            "Soft Delete: Enabled by default, 7-90 day retention. CANNOT be disabled on new vaults.",
            "Purge Protection: When enabled, soft-deleted items cannot be force-purged during retention period. Enable for production.",
            "Managed Identity Access: Grant Key Vault Secrets User role to managed identity. Zero secrets in code.",
            "Secret Rotation: Event Grid notifies when secret nears expiry -> Function rotates -> Stores new secret in Key Vault.",
            "Key Types: RSA & EC keys, software or HSM-backed. Premium SKU for HSM. Managed HSM for FIPS 140-2 L3.",
            "Network Security: Private Endpoint for VNet access. Firewall rules for IP restrictions. Disable public access.",
        ])
        .font_size(16),
    );

    let slide = deck.add_content_slide("Segment 1 Demos", Segment::Identity, None);
    slide.add_demo([
        "Conditional Access Policy: Create a policy requiring MFA for Azure portal access from non-corporate locations",
        "Azure Policy Assignment: Assign 'Require tag on resource group' policy with Deny effect to a test subscription",
        "Managed Identity + Key Vault: Create a VM with system-assigned identity, grant Key Vault access, retrieve secret from code",
        "Log Analytics KQL: Query sign-in logs to find failed authentications and risky sign-ins",
    ]);

    let slide = deck.add_exam_tip_slide("Segment 1 Exam Tips", Segment::Identity);
    slide.add_bullet_list(
        BulletList::new([
            "PHS is the DEFAULT hybrid identity recommendation. Choose PTA only if passwords must never leave on-prem.",
            "Managed Identity eliminates secrets. If a question mentions connection strings or API keys, Managed Identity is likely the answer.",
            "Policy > Locks for enforcement. Locks prevent deletion; Policies prevent non-compliant creation.",
            "PIM provides JIT access. If a question asks about 'least privilege for admins', PIM is the answer.",
            "Sentinel = SIEM. If the question mentions 'correlate security events across sources', think Sentinel.",
            "Log Analytics retention: 30 days free interactive. Archive tier for long-term at lower cost.",
        ])
        .top(1.5)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Segment 1 Review Questions", Segment::Identity, None);
    slide.add_review_questions([
        (
            "Your company requires that IT admins only have elevated privileges when performing admin tasks, with approval from a security manager. What should you implement?",
            "PIM (Privileged Identity Management) with eligible assignments and approval workflow. Admins request activation, security manager approves, access auto-expires.",
        ),
        (
            "A web application needs to read secrets from Key Vault without storing any credentials in code or configuration. The app runs on Azure App Service. What do you recommend?",
            "Enable system-assigned managed identity on the App Service. Grant it the 'Key Vault Secrets User' RBAC role on the Key Vault. Use DefaultAzureCredential in code.",
        ),
        (
            "You need to enforce that all resources in a subscription must have a 'CostCenter' tag. Resources without the tag should be blocked from creation. What do you use?",
            "Azure Policy with the 'Require a tag on resources' built-in definition, set with Deny effect. Assign at subscription scope.",
        ),
    ]);

    Ok(())
}
