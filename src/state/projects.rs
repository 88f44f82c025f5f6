#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One entry in the static project catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// The project catalog, in display order. Immutable for the page lifetime;
/// only read to populate modal content on demand.
pub const PROJECTS: &[Project] = &[
    Project {
        id: "bcg",
        title: "BCG Strategy Consulting Simulation",
        description: "A comprehensive profitability analysis for a telecom \
            client. This simulation involved breaking down revenue streams, \
            identifying cost-saving opportunities, and presenting strategic \
            recommendations to improve the bottom line in a highly \
            competitive market.",
        tags: &[
            "Profitability Analysis",
            "Telecom Strategy",
            "Excel",
            "Consulting Frameworks",
        ],
    },
    Project {
        id: "powerbi",
        title: "Power BI Text Analysis",
        description: "An advanced emotional analytics dashboard developed \
            using Power BI. Extracted insights from large datasets of text \
            to visualize sentiment, track emotional trends, and interpret \
            user feedback for data-driven product improvements.",
        tags: &[
            "Sentiment Visualization",
            "Emotional Analytics",
            "Power BI",
            "DAX",
        ],
    },
    Project {
        id: "tata",
        title: "TATA Data Visualization Simulation",
        description: "Built interactive executive dashboards and established \
            a client questioning framework. Modeled business scenarios to \
            provide clarity to stakeholders and facilitate high-level \
            strategic decision-making.",
        tags: &[
            "Executive Dashboards",
            "Framework Design",
            "Tableau",
            "Data Storytelling",
        ],
    },
];

/// Catalog lookup by the `data-project` identifier. Unknown ids are a
/// silent miss.
pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
