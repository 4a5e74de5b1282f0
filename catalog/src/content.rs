//! Long-form content for a subset of catalog entries.
//!
//! Coverage is deliberately partial: entries without content fall back to
//! their short description (modules) or tile summary page (case studies)
//! at assembly time.

use pitchkit_types::{
    CaseStudyContent, CaseStudyId, ModuleContent, ModuleId, ResultBlock, Solution,
};

fn module(id: &str, full_description: &str) -> ModuleContent {
    ModuleContent {
        id: ModuleId::new(id),
        full_description: full_description.to_string(),
    }
}

pub(crate) fn module_content() -> Vec<ModuleContent> {
    vec![
        module(
            "day1-onboarding",
            "Launching a GCC is a high-stakes endeavor: retention, culture, and \
             productivity are shaped long before employees write their first line of \
             code or support their first customer. Day 1 cannot be left to chance. It \
             must be seamless, consistent, and confidence-building.\n\n\
             Our Day 1 Onboarding Delivery ensures that every new joiner arrives fully \
             ready, operationally and culturally, from the moment they walk through the \
             door. A proven structured flow (Pre-Day 1 Prep, Welcome, Tech & Access, \
             Company Introduction, Confidence Check) handles everything that typically \
             strains HRBPs, IT, and business teams.\n\n\
             Your employees start with the essentials already in place:\n\
             \u{2022} Access, assets, and tech readiness set up without delays\n\
             \u{2022} A warm, brand-aligned welcome experience\n\
             \u{2022} Clear understanding of purpose, values, and ways of working\n\
             \u{2022} A first-day confidence pulse that flags early risks immediately\n\n\
             For you, this means faster ramp-up, fewer early failures, a consistent \
             experience across cohorts, and more time for your leaders to focus on \
             Day 2 and beyond.",
        ),
        module(
            "30-60-90-onboarding",
            "Most onboarding programs handle HR formalities and tool setup but fail to \
             deliver what GCCs need most: fast ramp-up, cultural alignment, and early \
             value creation.\n\n\
             The 30-60-90 Onboarding Framework provides a structured, \
             performance-oriented experience that enables every new hire to become a \
             confident, contributing team member within their first 90 days.\n\n\
             Day 30 - Onboard & Understand\n\
             New hires develop clarity on the business, products, processes, and \
             policies. They gain full system access and complete early deliverables \
             with growing confidence.\n\n\
             Day 60 - Contribute & Apply\n\
             They deliver independently with reduced handholding, integrate into \
             sprint cycles, and build peer credibility.\n\n\
             Day 90 - Own & Impact\n\
             They independently deliver scoped outcomes, enhance processes, and \
             prepare for full performance ownership.\n\n\
             With this model your GCC gains faster time-to-productivity, higher early \
             retention, stronger manager confidence, and consistent, scalable \
             onboarding for rapid growth.",
        ),
        module(
            "critical-thinking",
            "Critical Thinking builds the decision-making muscle GCC teams need to \
             operate as equal partners to HQ rather than as executors of instructions.\n\n\
             The program moves through three arcs:\n\
             \u{2022} Self-Awareness: how personal defaults and team norms shape judgment\n\
             \u{2022} Cognitive Bias: recognizing anchoring, confirmation, and authority \
             bias in day-to-day engineering and operations decisions\n\
             \u{2022} Structured Decision-Making: framing problems, weighing evidence, \
             and committing to reversible-vs-irreversible calls at the right speed\n\n\
             Sessions are case-driven and use the client's own escalation and review \
             scenarios, so the behaviors transfer directly to the floor.",
        ),
        module(
            "guiding-performance",
            "Guiding Performance equips GCC leaders with a practical GROW coaching \
             routine for everyday performance conversations.\n\n\
             Managers practice moving from instruction to inquiry: setting Goals, \
             checking Reality, generating Options, and agreeing the Way forward in \
             20-minute conversations that fit inside a sprint cadence.\n\n\
             The program closes with live practice against realistic scenarios - a \
             missed handoff, a quality regression, a stretch assignment - with \
             structured peer feedback.",
        ),
    ]
}

pub(crate) fn case_study_content() -> Vec<CaseStudyContent> {
    vec![
        CaseStudyContent {
            id: CaseStudyId::new("functional-onboarding"),
            title: "Accelerating Functional Readiness & Speed to Performance".to_string(),
            subtitle: "Technology Global Capability Center (GCC)".to_string(),
            context: "A rapidly growing multinational technology firm expanded its GCC \
                      handling mission-critical engineering, product lifecycle support, \
                      and internal automation work. A large cohort of mid-career hires \
                      arrived unfamiliar with the company's complex product ecosystem, \
                      internal development practices, and escalation norms."
                .to_string(),
            challenges: vec![
                "Unclear product and process knowledge: new hires struggled to \
                 understand the interconnected product architecture with scattered, \
                 outdated documentation"
                    .to_string(),
                "No clear framework for seeking help, leading to delays, incorrect \
                 decisions, and rework"
                    .to_string(),
                "Limited cross-functional understanding: organization-specific \
                 language created misunderstandings that slowed collaboration"
                    .to_string(),
                "Productivity ramp-up significantly slower than expected, with early \
                 project cycles suffering from defects"
                    .to_string(),
            ],
            solution: Solution {
                description: "A structured functional onboarding program designed to \
                              standardize role-specific onboarding, strengthen \
                              understanding of products and workflows, establish clear \
                              escalation pathways, and explicitly teach cultural norms."
                    .to_string(),
                components: vec![
                    "Core product and system knowledge: deep dives into architecture, \
                     product lifecycles, and dependencies"
                        .to_string(),
                    "Process, tools and workflow familiarization with hands-on \
                     simulated tasks"
                        .to_string(),
                    "Escalation and support frameworks: decision maps, escalation \
                     matrices, and playbooks"
                        .to_string(),
                    "Hybrid learning: self-paced microlearning, live virtual sessions, \
                     and hands-on simulations"
                        .to_string(),
                ],
            },
            results: vec![ResultBlock {
                timeframe: "Within 45-60 days".to_string(),
                metrics: vec![
                    "35% reduction in time required to reach baseline productivity".to_string(),
                    "40% reduction in early-cycle errors and rework".to_string(),
                    "New hires consistently met performance benchmarks".to_string(),
                    "Managers reported stronger confidence in new hire readiness".to_string(),
                ],
            }],
            summary: "By hardwiring communication norms, cultural alignment, and \
                      functional mastery into its onboarding process, the organization \
                      created a sustainable performance engine that strengthens the \
                      global delivery ecosystem."
                .to_string(),
        },
        CaseStudyContent {
            id: CaseStudyId::new("critical-thinking-gcc"),
            title: "Building Decision-Making, Ownership, and Enterprise Confidence".to_string(),
            subtitle: "Financial Services GCC".to_string(),
            context: "A financial services GCC had grown past a thousand associates but \
                      was still perceived by HQ as an execution arm. Work arrived \
                      pre-decided; associates escalated rather than resolved; business \
                      context stayed thin across teams."
                .to_string(),
            challenges: vec![
                "Decisions routinely deferred to HQ even when the GCC held the data".to_string(),
                "Low business fluency outside immediate team scope".to_string(),
                "Escalations framed as questions rather than recommendations".to_string(),
            ],
            solution: Solution {
                description: "A critical-thinking program pairing bias awareness with \
                              structured decision frameworks, run against the client's \
                              own recent escalations."
                    .to_string(),
                components: vec![
                    "Cohort workshops on cognitive bias in operational decisions".to_string(),
                    "Decision-framing drills using real escalation transcripts".to_string(),
                    "Manager follow-through kit to reinforce the framing in reviews".to_string(),
                ],
            },
            results: vec![ResultBlock {
                timeframe: "Within one quarter".to_string(),
                metrics: vec![
                    "Business acumen and fluency scores up 30 points".to_string(),
                    "Escalations increasingly arrived with a recommended option".to_string(),
                ],
            }],
            summary: "Structured decision-making turned the GCC from an executor of \
                      instructions into a partner that brings recommendations, \
                      shifting how HQ routes work to the center."
                .to_string(),
        },
        CaseStudyContent {
            id: CaseStudyId::new("lead-with-intent"),
            title: "Lead with Intent".to_string(),
            subtitle: "Enabling New Managers to Shift from Doing to Leading".to_string(),
            context: "A scaling GCC promoted its strongest individual contributors into \
                      management faster than it could prepare them. New managers kept \
                      solving problems themselves instead of building teams that could."
                .to_string(),
            challenges: vec![
                "First-time managers defaulting to individual-contributor habits".to_string(),
                "Uneven, ad-hoc people decisions across new teams".to_string(),
                "Attrition risk concentrated under the newest managers".to_string(),
            ],
            solution: Solution {
                description: "A cohort program for first-time managers combining \
                              delegation practice, coaching conversations, and a \
                              shared people-decision playbook."
                    .to_string(),
                components: vec![
                    "Delegation labs with live team scenarios".to_string(),
                    "GROW-based coaching conversation practice".to_string(),
                    "Peer circles that continue after the program ends".to_string(),
                ],
            },
            results: vec![ResultBlock {
                timeframe: "Post-program survey".to_string(),
                metrics: vec![
                    "86% report higher confidence in people decisions".to_string(),
                    "Delegated work product quality held steady while manager \
                     hands-on hours dropped"
                        .to_string(),
                ],
            }],
            summary: "Deliberate practice moved new managers from doing the work to \
                      leading the people who do, without the quality dip leadership \
                      feared."
                .to_string(),
        },
    ]
}
