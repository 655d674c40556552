//! Segment 4: compute and application architecture.

use crate::builder::DeckBuilder;
use crate::error::Result;
use crate::model::{BulletList, Frame, Table, TextBox};
use crate::segment::Segment;
use crate::theme::DARK_BLUE;

pub(super) fn build(deck: &mut DeckBuilder) -> Result<()> {
    deck.add_divider_slide("Compute & Application\nArchitecture", "~17% of Exam", Segment::Compute);

    let slide = deck.add_content_slide("Segment 4 Learning Objectives", Segment::Compute, None);
    slide.add_bullet_list(
        BulletList::new([
            "Select appropriate compute solutions (VMs, containers, serverless, PaaS)",
            "Design container strategies with AKS, Container Apps, and ACI",
            "Design serverless solutions with Azure Functions and Logic Apps",
            "Design application architecture patterns including messaging, caching, and API management",
        ])
        .font_size(20),
    );

    let slide = deck.add_content_slide("Compute Decision Tree", Segment::Compute, None);
    slide.add_table(
        Table::new(
            &[
                ["Requirement", "Service", "Key Differentiator"],
                ["Full OS control", "VMs / VMSS", "Custom software, legacy apps, Windows/Linux"],
                ["Container orchestration", "AKS", "Full Kubernetes, complex microservices"],
                ["Serverless containers", "Container Apps", "RECOMMENDED DEFAULT. Dapr, KEDA, simple scaling"],
                ["Event-driven code", "Azure Functions", "Per-execution billing, triggers + bindings"],
                ["Web applications", "App Service", "Managed PaaS, deployment slots, custom domains"],
                ["Simple container run", "Azure Container Instances", "Quick burst, sidecar, no orchestration"],
                ["Batch / HPC", "Azure Batch", "Large-scale parallel, job scheduling"],
                ["Desktop apps", "Azure Virtual Desktop", "VDI, multi-session Windows, RemoteApp"],
            ],
            &[2.5, 3.0, 6.0],
        ),
    )?;

    let slide = deck.add_content_slide("VM Design Patterns", Segment::Compute, None);
    slide.add_bullet_list(
        BulletList::new([
            "Series Selection: B (burstable, dev/test), D (general), E (memory, SAP/DB), N (GPU, AI/ML), L (storage, big data), F (compute-optimized)",
            "VMSS: Virtual Machine Scale Sets. Autoscale 0-1000 instances. Uniform (identical VMs) or Flexible (mixed) mode.",
            "Proximity Placement Groups: Co-locate VMs in same datacenter for lowest latency. Used with E/N series for SAP/HPC.",
            "Dedicated Hosts: Physical server dedicated to your org. Compliance, licensing (BYOL), isolated hardware.",
            "Spot VMs: Up to 90% discount, can be evicted. Batch jobs, dev/test, stateless workloads. NOT for production SLAs.",
            "Ephemeral OS Disks: Use local VM storage for OS disk. Faster reimaging, lower latency, no storage cost. Stateless VMs only.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("App Service Architecture", Segment::Compute, None);
    slide.add_bullet_list(
        BulletList::new([
            "Plans: Free/Shared (dev) -> Basic (dedicated, no scaling) -> Standard (autoscale, slots) -> Premium (more perf, VNet integration) -> Isolated (ASE, full VNet)",
            "Deployment Slots: Swap staging to production with zero downtime. Slot-specific settings (connection strings, app settings).",
            "VNet Integration: Regional VNet integration (outbound from app to VNet). Private Endpoint (inbound to app from VNet).",
            "Managed Certificates: Free TLS certificates for custom domains in Standard+ plans. Auto-renewal.",
            "Health Checks: Built-in health check path. Removes unhealthy instances from LB rotation. Minimum 2 instances.",
            "App Service Environment (ASE) v3: Single-tenant, fully in your VNet. Internal LB for private-only apps. Zone redundant.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Container Strategy", Segment::Compute, None);
    slide.add_table(
        Table::new(
            &[
                ["Attribute", "AKS", "Container Apps", "ACI"],
                ["Orchestrator", "Full Kubernetes", "Managed (Kubernetes under hood)", "None"],
                ["Scaling", "Cluster + pod autoscaler", "KEDA (event-driven, 0 to N)", "Manual (1:1)"],
                ["Networking", "Full K8s networking, CNI", "Built-in ingress, Envoy", "VNet or public IP"],
                ["Service Mesh", "Istio, Linkerd, OSM", "Dapr (built-in)", "N/A"],
                ["Complexity", "High (K8s expertise needed)", "Low-Medium", "Lowest"],
                ["Cost", "Node VMs + management", "Per-request/vCPU+memory", "Per-second vCPU+memory"],
                ["Best For", "Complex microservices", "Most containerized apps", "Simple tasks, burst"],
                ["RECOMMENDATION", "When K8s is mandated", "DEFAULT for containers", "Sidecar / quick run"],
            ],
            &[2.0, 3.5, 3.5, 2.5],
        )
        .font_size(12)
        .top(1.4),
    )?;

    let slide = deck.add_content_slide("AKS Deep Dive", Segment::Compute, None);
    slide.add_bullet_list(
        BulletList::new([
            "Node Pools: System pool (CoreDNS, kube-proxy) + User pools (workloads). Different VM sizes per pool.",
            "Cluster Autoscaler: Scale nodes 0-100+ based on pending pods. Combine with Horizontal Pod Autoscaler.",
            "Workload Identity: Replace pod identity with federated OIDC tokens. Managed identity bound to K8s service account.",
            "Ingress: NGINX, Application Gateway Ingress Controller (AGIC), or managed NGINX. TLS termination at ingress.",
            "Service Mesh: Istio add-on (managed by Azure). mTLS, traffic management, observability.",
            "When AKS is Warranted: Team has K8s expertise, need for custom operators, complex networking, multi-cluster.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Container Apps with Dapr", Segment::Compute, None);
    slide.add_bullet_list(
        BulletList::new([
            "Dapr Service Invocation: Service-to-service calls with built-in retries, mTLS, and observability.",
            "Dapr Pub/Sub: Decouple services with topics. Supports Service Bus, Event Hubs, Redis as brokers.",
            "Dapr State Management: Pluggable state stores (Cosmos DB, Redis, SQL). Consistent API across stores.",
            "Dapr Bindings: Input/output bindings to external services (queues, databases, HTTP endpoints).",
            "KEDA Scaling: Scale to zero and back. Scale based on queue depth, HTTP requests, CPU, custom metrics.",
            "Revisions & Traffic Splitting: Blue-green and canary deployments. Split traffic between revisions by percentage.",
            "Jobs: Run-to-completion tasks, scheduled (cron) or event-triggered. Parallel execution.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("Serverless: Azure Functions", Segment::Compute, None);
    slide.add_table(
        Table::new(
            &[
                ["Plan", "Scale", "Max Timeout", "VNet", "Min Instances", "Cost Model"],
                ["Consumption", "0 to 200 instances", "10 min (default)", "No", "0", "Per execution"],
                ["Premium", "10-100 instances", "Unlimited", "Yes", "1 (pre-warmed)", "vCPU/memory/sec"],
                ["Dedicated (App Svc)", "Manual/autoscale", "Unlimited", "Yes", "Plan-defined", "App Service plan"],
            ],
            &[2.0, 2.2, 2.0, 1.0, 1.8, 2.5],
        )
        .font_size(13),
    )?;
    slide.add_bullet_list(
        BulletList::new([
            "Durable Functions: Stateful workflows. Patterns: Chaining, Fan-out/Fan-in, Async HTTP, Monitor, Human interaction.",
            "Triggers: HTTP, Timer, Queue, Blob, Event Grid, Event Hub, Cosmos DB change feed, Service Bus.",
            "Bindings: Input (read data) and Output (write data) without SDK code. Declarative in function.json.",
            "Cold Start: Consumption plan has cold start latency. Use Premium plan or Flex Consumption to avoid.",
        ])
        .font_size(16)
        .top(4.2),
    );

    let slide = deck.add_content_slide("Messaging Service Selection", Segment::Compute, None);
    slide.add_table(
        Table::new(
            &[
                ["Pattern", "Service", "Key Feature", "Example"],
                ["Commands / Transactions", "Service Bus", "Queues + Topics, sessions, FIFO, dead-letter", "Order processing"],
                ["Events / Notifications", "Event Grid", "Push delivery, filtering, serverless events", "Blob created, resource changed"],
                ["Streaming / Telemetry", "Event Hubs", "Millions/sec, partitions, Kafka compatible", "IoT telemetry, clickstream"],
                ["Simple queue", "Storage Queue", "64KB messages, millions queued, low cost", "Background jobs"],
            ],
            &[2.3, 2.0, 4.0, 3.2],
        ),
    )?;
    slide.add_text(
        TextBox::new(
            Frame::inches(0.8, 4.5, 11.0, 1.5),
            "Exam Rule of Thumb:\n  'Commands' or 'exactly once' = Service Bus\n  'Events' or 'react to changes' = Event Grid\n  'Stream' or 'millions of events' = Event Hubs",
        )
        .font_size(16)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Application Architecture Patterns", Segment::Compute, None);
    slide.add_bullet_list(
        BulletList::new([
            "Microservices: Independent services with own data stores. Deploy, scale, update independently. Use with Container Apps or AKS.",
            "Event-Driven: Services react to events asynchronously. Event Grid for discrete events, Event Hubs for streaming.",
            "CQRS: Command Query Responsibility Segregation. Separate read and write models. Cosmos DB + SQL read replicas.",
            "Saga Pattern: Distributed transactions across services. Choreography (events) or Orchestration (coordinator).",
            "Queue-Based Load Leveling: Buffer requests with Service Bus queue. Backend processes at its own pace. Prevents overload.",
            "Retry + Circuit Breaker: Transient fault handling. Exponential backoff. Circuit breaker prevents cascading failures.",
        ])
        .font_size(17),
    );

    let slide = deck.add_content_slide("API Management (APIM)", Segment::Compute, None);
    slide.add_table(
        Table::new(
            &[
                ["Tier", "Gateway", "Developer Portal", "VNet", "Multi-region", "Use Case"],
                ["Consumption", "Serverless", "No", "No", "No", "Low traffic APIs"],
                ["Developer", "Shared", "Yes", "No", "No", "Dev/test"],
                ["Basic", "Dedicated", "Yes", "No", "No", "Small production"],
                ["Standard", "Dedicated", "Yes", "External", "No", "Production"],
                ["Premium", "Dedicated", "Yes", "Internal + External", "Yes", "Enterprise"],
            ],
            &[1.5, 1.5, 2.0, 2.0, 1.5, 3.0],
        )
        .font_size(13),
    )?;
    slide.add_bullet_list(
        BulletList::new([
            "Policies: Rate limiting (throttling), JWT validation, caching, request/response transformation, IP filtering.",
            "Internal Mode: APIM inside VNet with private IP only. Use App Gateway as frontend for public access.",
        ])
        .font_size(16)
        .top(4.8),
    );

    let slide = deck.add_content_slide("Caching Strategy", Segment::Compute, None);
    slide.add_table(
        Table::new(
            &[
                ["Tier", "Memory", "SLA", "Features"],
                ["Basic", "250MB - 53GB", "No SLA", "Dev/test only"],
                ["Standard", "250MB - 53GB", "99.9%", "Replication, production"],
                ["Premium", "6GB - 120GB per shard", "99.9%", "Clustering, persistence, VNet, geo-replication"],
                ["Enterprise", "12GB - 2TB", "99.99%", "RediSearch, RedisBloom, RedisTimeSeries, active geo-replication"],
            ],
            &[1.5, 2.5, 1.3, 6.2],
        )
        .font_size(13),
    )?;
    slide.add_bullet_list(
        BulletList::new([
            "Cache-Aside Pattern: App checks cache first. On miss, reads from DB, writes to cache. Most common pattern.",
            "Session Store: Store session state in Redis instead of in-memory. Enables stateless app tier with sticky sessions off.",
            "Output Caching: Cache rendered pages or API responses. Reduce backend load for read-heavy workloads.",
        ])
        .font_size(16)
        .top(4.3),
    );

    let slide = deck.add_content_slide("Segment 4 Demos", Segment::Compute, None);
    slide.add_demo([
        "Container Apps + Dapr: Deploy a microservice app with Dapr pub/sub and KEDA scaling to zero",
        "Functions + Service Bus: Create an Azure Function triggered by a Service Bus queue message",
        "APIM Policies: Configure rate limiting and JWT validation policies on an API",
        "App Service Deployment Slots: Deploy to staging slot, test, then swap to production with zero downtime",
    ]);

    let slide = deck.add_exam_tip_slide("Segment 4 Exam Tips", Segment::Compute);
    slide.add_bullet_list(
        BulletList::new([
            "Container Apps is the DEFAULT container recommendation. Choose AKS only when full Kubernetes control is needed.",
            "AKS when: Custom operators, advanced networking (CNI), multi-cluster, team has K8s expertise.",
            "Service Bus for commands (ordered, transactional). Event Grid for events (reactive, push). Do not confuse them.",
            "Event Hubs for streaming (high volume, partitioned, Kafka). Not for request/response patterns.",
            "APIM for API governance: rate limiting, versioning, developer portal. Internal mode for private APIs.",
            "Durable Functions for stateful serverless: function chaining, fan-out/fan-in, human interaction patterns.",
        ])
        .top(1.5)
        .color(DARK_BLUE),
    );

    let slide = deck.add_content_slide("Segment 4 Review Questions", Segment::Compute, None);
    slide.add_review_questions([
        (
            "Your team wants to deploy containerized microservices with event-driven autoscaling (including scale to zero) and built-in service-to-service communication. They do not have Kubernetes expertise. What do you recommend?",
            "Azure Container Apps with Dapr enabled and KEDA scaling rules. Provides event-driven scaling, service invocation, pub/sub, and state management without Kubernetes complexity.",
        ),
        (
            "An order processing system must guarantee FIFO (first-in-first-out) message delivery with exactly-once processing and dead-letter support. Which messaging service?",
            "Azure Service Bus with sessions enabled for FIFO ordering. Service Bus provides exactly-once delivery, dead-letter queues, and session-based ordering. Storage Queue does NOT support FIFO.",
        ),
        (
            "You need to expose internal APIs to external partners with rate limiting, API key authentication, and a developer portal. The APIs must only be accessible through the gateway. What do you design?",
            "Azure API Management (Standard or Premium tier). Configure rate-limit policies, subscription keys, and developer portal. Premium with internal VNet mode if APIs must be fully private.",
        ),
    ]);

    Ok(())
}
