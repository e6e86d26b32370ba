//! Phase model and the closed set of known phase categories.

use serde::Serialize;

use super::Task;

/// A named group of tasks, executed in list order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Phase {
    /// Category label of the phase, not unique within a plan
    #[serde(rename = "phase")]
    pub name: String,

    /// Tasks of the phase in start-to-finish order (never empty once validated)
    pub tasks: Vec<Task>,
}

impl Phase {
    /// The known category this phase's name maps to.
    pub fn category(&self) -> PhaseCategory {
        PhaseCategory::from_name(&self.name)
    }
}

/// Known phase categories, each with its own icon.
///
/// Names are matched exactly and case-sensitively; anything else is
/// [`PhaseCategory::Generic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseCategory {
    Planning,
    Design,
    UiUxDesign,
    Development,
    FrontendDevelopment,
    BackendDevelopment,
    Testing,
    Marketing,
    Deployment,
    Research,
    Strategy,
    ContentCreation,
    ChannelSetup,
    Execution,
    Analysis,
    Review,
    Completion,
    Concept,
    Logistics,
    FollowUp,
    Generic,
}

impl PhaseCategory {
    /// Every named category, in table order.
    pub const KNOWN: [PhaseCategory; 20] = [
        PhaseCategory::Planning,
        PhaseCategory::Design,
        PhaseCategory::UiUxDesign,
        PhaseCategory::Development,
        PhaseCategory::FrontendDevelopment,
        PhaseCategory::BackendDevelopment,
        PhaseCategory::Testing,
        PhaseCategory::Marketing,
        PhaseCategory::Deployment,
        PhaseCategory::Research,
        PhaseCategory::Strategy,
        PhaseCategory::ContentCreation,
        PhaseCategory::ChannelSetup,
        PhaseCategory::Execution,
        PhaseCategory::Analysis,
        PhaseCategory::Review,
        PhaseCategory::Completion,
        PhaseCategory::Concept,
        PhaseCategory::Logistics,
        PhaseCategory::FollowUp,
    ];

    /// Look up the category for a phase name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Planning" => PhaseCategory::Planning,
            "Design" => PhaseCategory::Design,
            "UI/UX Design" => PhaseCategory::UiUxDesign,
            "Development" => PhaseCategory::Development,
            "Frontend Development" => PhaseCategory::FrontendDevelopment,
            "Backend Development" => PhaseCategory::BackendDevelopment,
            "Testing" => PhaseCategory::Testing,
            "Marketing" => PhaseCategory::Marketing,
            "Deployment" => PhaseCategory::Deployment,
            "Research" => PhaseCategory::Research,
            "Strategy" => PhaseCategory::Strategy,
            "Content Creation" => PhaseCategory::ContentCreation,
            "Channel Setup" => PhaseCategory::ChannelSetup,
            "Execution" => PhaseCategory::Execution,
            "Analysis" => PhaseCategory::Analysis,
            "Review" => PhaseCategory::Review,
            "Completion" => PhaseCategory::Completion,
            "Concept" => PhaseCategory::Concept,
            "Logistics" => PhaseCategory::Logistics,
            "Follow-up" => PhaseCategory::FollowUp,
            _ => PhaseCategory::Generic,
        }
    }

    /// The phase name this category is matched from, `None` for the fallback.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            PhaseCategory::Planning => "Planning",
            PhaseCategory::Design => "Design",
            PhaseCategory::UiUxDesign => "UI/UX Design",
            PhaseCategory::Development => "Development",
            PhaseCategory::FrontendDevelopment => "Frontend Development",
            PhaseCategory::BackendDevelopment => "Backend Development",
            PhaseCategory::Testing => "Testing",
            PhaseCategory::Marketing => "Marketing",
            PhaseCategory::Deployment => "Deployment",
            PhaseCategory::Research => "Research",
            PhaseCategory::Strategy => "Strategy",
            PhaseCategory::ContentCreation => "Content Creation",
            PhaseCategory::ChannelSetup => "Channel Setup",
            PhaseCategory::Execution => "Execution",
            PhaseCategory::Analysis => "Analysis",
            PhaseCategory::Review => "Review",
            PhaseCategory::Completion => "Completion",
            PhaseCategory::Concept => "Concept",
            PhaseCategory::Logistics => "Logistics",
            PhaseCategory::FollowUp => "Follow-up",
            PhaseCategory::Generic => return None,
        };
        Some(name)
    }

    /// Icon class key for the category.
    pub fn icon(&self) -> &'static str {
        match self {
            PhaseCategory::Planning => "fas fa-lightbulb",
            PhaseCategory::Design => "fas fa-palette",
            PhaseCategory::UiUxDesign => "fas fa-pencil-ruler",
            PhaseCategory::Development => "fas fa-code",
            PhaseCategory::FrontendDevelopment => "fas fa-laptop-code",
            PhaseCategory::BackendDevelopment => "fas fa-server",
            PhaseCategory::Testing => "fas fa-vial",
            PhaseCategory::Marketing => "fas fa-bullhorn",
            PhaseCategory::Deployment => "fas fa-rocket",
            PhaseCategory::Research => "fas fa-search",
            PhaseCategory::Strategy => "fas fa-chess",
            PhaseCategory::ContentCreation => "fas fa-pen-fancy",
            PhaseCategory::ChannelSetup => "fas fa-share-alt",
            PhaseCategory::Execution => "fas fa-play",
            PhaseCategory::Analysis => "fas fa-chart-bar",
            PhaseCategory::Review => "fas fa-clipboard-check",
            PhaseCategory::Completion => "fas fa-check-circle",
            PhaseCategory::Concept => "fas fa-brain",
            PhaseCategory::Logistics => "fas fa-truck",
            PhaseCategory::FollowUp => "fas fa-redo",
            PhaseCategory::Generic => "fas fa-tasks",
        }
    }
}
