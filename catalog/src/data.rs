//! Built-in entity registries.
//!
//! Identifiers are stable lowercase hyphenated strings; they appear in export
//! payloads and must not be renamed casually.

use pitchkit_types::{
    Ambition, AmbitionId, CaseStudyId, CaseStudyTile, ModuleId, Stage, StageId, TrainingModule,
};

fn stage(id: &str, name: &str, description: &str) -> Stage {
    Stage {
        id: StageId::new(id),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn module(id: &str, name: &str, stage_affinity: &str, short_description: &str) -> TrainingModule {
    TrainingModule {
        id: ModuleId::new(id),
        name: name.to_string(),
        stage_affinity: StageId::new(stage_affinity),
        short_description: short_description.to_string(),
    }
}

fn tile(
    id: &str,
    title: &str,
    short_description: &str,
    metric: &str,
    icon_key: &str,
    related: &[&str],
) -> CaseStudyTile {
    CaseStudyTile {
        id: CaseStudyId::new(id),
        title: title.to_string(),
        short_description: short_description.to_string(),
        metric: metric.to_string(),
        icon_key: icon_key.to_string(),
        related_modules: related.iter().copied().map(ModuleId::new).collect(),
    }
}

pub(crate) fn stages() -> Vec<Stage> {
    vec![
        stage(
            "design-setup",
            "Design-Setup (IDS)",
            "Define what from HQ onboarding can be repurposed and what must be localized",
        ),
        stage(
            "stabilize",
            "Stabilize",
            "Build consistent processes and strengthen team performance",
        ),
        stage(
            "scale",
            "Scale",
            "Expand operations and optimize for growth",
        ),
        stage(
            "transform",
            "Transform",
            "Drive innovation and strategic transformation",
        ),
    ]
}

pub(crate) fn ambitions() -> Vec<Ambition> {
    vec![
        Ambition {
            id: AmbitionId::new("capability-hub"),
            name: "Capability Hub".to_string(),
        },
        Ambition {
            id: AmbitionId::new("talent-differentiator"),
            name: "Talent Differentiator".to_string(),
        },
        Ambition {
            id: AmbitionId::new("innovation-center"),
            name: "Innovation Center".to_string(),
        },
    ]
}

pub(crate) fn modules() -> Vec<TrainingModule> {
    vec![
        // Individual contributor courses
        module(
            "day1-onboarding",
            "Day 1 Onboarding Delivery for GCCs",
            "design-setup",
            "We deliver Day 1 so your teams can focus on Day 2 and beyond",
        ),
        module(
            "30-60-90-onboarding",
            "The 30-60-90 Structure",
            "design-setup",
            "Onboard & Understand, Contribute & Apply, Own & Impact",
        ),
        module(
            "critical-thinking",
            "Critical Thinking",
            "stabilize",
            "Self-Awareness, Cognitive Bias, Structured Decision-Making",
        ),
        module(
            "navigating-matrix",
            "Navigating the Matrix",
            "stabilize",
            "Accelerating Decision-Making in a Global Matrix",
        ),
        module(
            "decoding-business",
            "Decoding the Business: A Practical Guide for GCC Talent",
            "stabilize",
            "Hybrid Learning with optional Business Acumen Simulation",
        ),
        // Manager courses
        module(
            "ascend-leadership",
            "ASCEND: Leadership Alignment Program",
            "scale",
            "A Half-Day Framework for New Managers",
        ),
        module(
            "guiding-performance",
            "Guiding Performance",
            "scale",
            "Practical GROW Coaching for GCC Leaders",
        ),
        module(
            "delegation-stakeholder",
            "Delegation & Stakeholder Alignment",
            "scale",
            "Build delegation and stakeholder management capabilities",
        ),
        module(
            "ascend-plus",
            "ASCEND+ Advanced Manager Program",
            "scale",
            "Advanced leadership development for experienced managers",
        ),
        module(
            "conflict-performance",
            "Conflict & Performance Conversations",
            "scale",
            "Driving Results with Empathy",
        ),
        module(
            "people-leader-academy",
            "People Leader Academy (pipeline to director)",
            "transform",
            "Prepare high-potential managers for director-level roles",
        ),
        module(
            "coaching-next-line",
            "Coaching Next Line Leaders",
            "transform",
            "Enable senior leaders to develop their teams",
        ),
        module(
            "leading-change-scale",
            "Leading Change at Scale",
            "transform",
            "Navigate organizational transformation effectively",
        ),
        // Executive courses
        module(
            "one-voice",
            "One Voice, One Message, One Direction",
            "transform",
            "Executive alignment for unified leadership action",
        ),
        module(
            "enterprise-thinking",
            "Enterprise Thinking and Ownership",
            "transform",
            "Develop strategic thinking at the enterprise level",
        ),
        module(
            "high-performance-culture",
            "Building a High-Performance Culture",
            "transform",
            "Create and sustain a culture of excellence",
        ),
        module(
            "change-leadership-transformation",
            "Change Leadership & Transformation",
            "transform",
            "Director-Level Change Leadership in Practice",
        ),
        module(
            "leadership-coaching-cross-border",
            "Leadership Coaching for Cross-border Impact",
            "transform",
            "Executive coaching for global leadership",
        ),
        module(
            "enterprise-mindset-strategy",
            "Enterprise Mindset & Business Strategy",
            "transform",
            "Align leadership thinking with business strategy",
        ),
        module(
            "global-mobility",
            "Global Mobility Readiness",
            "transform",
            "Prepare leaders for international assignments",
        ),
        module(
            "summit-innovation",
            "SUMMIT: Building a Growth and Innovation Mindset",
            "transform",
            "Capstone for Executive Leaders",
        ),
        module(
            "miscellaneous",
            "Miscellaneous",
            "transform",
            "Additional executive development topics",
        ),
        module(
            "global-perspectives",
            "Global Perspectives",
            "design-setup",
            "First 30 Days Cross-Cultural Communication Onboarding",
        ),
    ]
}

pub(crate) fn case_studies() -> Vec<CaseStudyTile> {
    vec![
        tile(
            "critical-thinking-gcc",
            "Critical Thinking",
            "Building Decision-Making, Ownership, and Enterprise Confidence in a GCC",
            "Business acumen & fluency +30 points",
            "monitor",
            &["critical-thinking", "decoding-business"],
        ),
        tile(
            "time-to-productivity",
            "Accelerating Time to Productivity",
            "Scaling a GCC Through Structured Functional Onboarding",
            "Time to productivity reduced by 35%",
            "trending-up",
            &["30-60-90-onboarding"],
        ),
        tile(
            "granulearn-digital",
            "Turning Digital Investment into Frontline Execution",
            "Using GranuLearn to Build Last-Mile Adoption at Scale",
            "25-30% reduction in manual errors",
            "book",
            &[],
        ),
        tile(
            "functional-onboarding",
            "Functional Onboarding",
            "Accelerating Time to Productivity",
            "35% reduction in time to productivity",
            "calendar",
            &["day1-onboarding", "30-60-90-onboarding"],
        ),
        tile(
            "change-management",
            "Change Management",
            "Driving Behavior Change at Scale",
            "Consistent adoption of new behaviors",
            "users",
            &["leading-change-scale"],
        ),
        tile(
            "culture-behaviors",
            "Culture",
            "Turning Values into Daily Behaviors",
            "Values shift from \"posters\" to operating norms",
            "target",
            &["high-performance-culture"],
        ),
        tile(
            "lead-with-intent",
            "Lead with Intent",
            "Enabling New Managers to Shift from Doing to Leading",
            "86% report higher confidence in people decisions",
            "users",
            &["ascend-leadership", "guiding-performance"],
        ),
        tile(
            "storytelling",
            "Storytelling",
            "Signal Shift: Building communication and storytelling as a capability",
            "Rework down 32%",
            "monitor",
            &[],
        ),
    ]
}
