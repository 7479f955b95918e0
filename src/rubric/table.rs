use crate::types::rubric::{Criterion, PatternRule as P, SubCriterion as Sub};

pub const ESSENTIAL: &str = "Essential Documentation";
pub const USAGE: &str = "Usage & Examples";
pub const VISUAL: &str = "Visual & Demo";
pub const QUALITY: &str = "Project Quality";
pub const COMMUNITY: &str = "Community & Legal";
pub const ADVANCED: &str = "Advanced Features";

pub const TITLE_DESCRIPTION: &str = "Project Title & Description";
pub const INSTALLATION: &str = "Installation Instructions";
pub const USAGE_EXAMPLES: &str = "Usage Examples";
pub const VISUAL_DEMOS: &str = "Visual Demonstrations";
pub const CONTRIBUTING: &str = "Contributing Guidelines";
pub const LICENSE: &str = "License Information";

pub const CATEGORY_WEIGHTS: [(&str, f64); 6] = [
    (ESSENTIAL, 1.2),
    (USAGE, 1.1),
    (VISUAL, 1.0),
    (QUALITY, 1.0),
    (COMMUNITY, 0.9),
    (ADVANCED, 0.8),
];

pub fn standard_criteria() -> Vec<Criterion> {
    vec![
        Criterion::new(
            TITLE_DESCRIPTION,
            ESSENTIAL,
            15.0,
            vec![
                P::regex("^# ", 3.0),
                P::contains("description", 2.0),
                P::regex("what (is|does)", 2.0),
                P::contains("overview", 1.0),
                P::contains("about", 1.0),
            ],
        )
        .with_sub_criteria(vec![
            Sub::new("Clear Title", 5.0, vec![P::regex("^# [A-Za-z]", 1.0)]),
            Sub::new(
                "Project Description",
                5.0,
                vec![
                    P::contains("description", 1.0),
                    P::regex("what (is|does)", 1.0),
                ],
            ),
            Sub::new(
                "Purpose/Problem Statement",
                5.0,
                vec![
                    P::contains("problem", 1.0),
                    P::contains("solves", 1.0),
                    P::contains("purpose", 1.0),
                ],
            ),
        ]),
        Criterion::new(
            INSTALLATION,
            ESSENTIAL,
            20.0,
            vec![
                P::contains("install", 3.0),
                P::contains("npm install", 3.0),
                P::contains("pip install", 3.0),
                P::regex("yarn (install|add)", 2.0),
                P::contains("setup", 2.0),
                P::contains("getting started", 2.0),
                P::contains("requirements", 2.0),
                P::contains("prerequisites", 2.0),
            ],
        )
        .with_sub_criteria(vec![
            Sub::new(
                "Package Manager Commands",
                8.0,
                vec![
                    P::contains("npm install", 2.0),
                    P::contains("pip install", 2.0),
                    P::contains("yarn", 1.0),
                ],
            ),
            Sub::new(
                "Prerequisites",
                6.0,
                vec![
                    P::contains("requirements", 1.0),
                    P::contains("prerequisites", 1.0),
                    P::contains("dependencies", 1.0),
                ],
            ),
            Sub::new(
                "Step-by-step Guide",
                6.0,
                vec![
                    P::regex(r"1\.", 1.0),
                    P::contains("step", 1.0),
                    P::contains("first", 1.0),
                ],
            ),
        ]),
        Criterion::new(
            USAGE_EXAMPLES,
            USAGE,
            20.0,
            vec![
                P::contains("usage", 3.0),
                P::contains("example", 3.0),
                P::contains("```", 3.0),
                P::contains("how to use", 2.0),
                P::contains("quick start", 2.0),
                P::contains("demo", 1.0),
            ],
        )
        .with_sub_criteria(vec![
            Sub::new(
                "Code Examples",
                10.0,
                vec![P::contains("```", 3.0), P::regex("`[^`]+`", 2.0)],
            ),
            Sub::new(
                "Multiple Examples",
                5.0,
                vec![
                    P::contains("example", 2.0),
                    P::contains("basic", 1.0),
                    P::contains("advanced", 1.0),
                ],
            ),
            Sub::new(
                "Output Examples",
                5.0,
                vec![P::contains("output", 1.0), P::contains("result", 1.0)],
            ),
        ]),
        Criterion::new(
            "API Documentation",
            USAGE,
            10.0,
            vec![
                P::contains("api", 3.0),
                P::contains("methods", 2.0),
                P::contains("functions", 2.0),
                P::contains("endpoints", 2.0),
                P::contains("reference", 1.0),
                P::contains("documentation", 1.0),
            ],
        ),
        Criterion::new(
            VISUAL_DEMOS,
            VISUAL,
            15.0,
            vec![
                P::regex(r"!\[.*\]\(.*\.(png|jpg|jpeg|gif|svg)\)", 4.0),
                P::contains("screenshot", 2.0),
                P::contains("demo", 2.0),
                P::contains("preview", 2.0),
                P::contains("video", 2.0),
                P::contains("gif", 2.0),
            ],
        ),
        Criterion::new(
            "Live Demo Links",
            VISUAL,
            5.0,
            vec![
                P::contains("demo", 2.0),
                P::contains("live", 2.0),
                P::contains("playground", 1.0),
                P::contains("try it", 1.0),
            ],
        ),
        Criterion::new(
            "Status Badges",
            QUALITY,
            10.0,
            vec![
                P::regex(r"!\[.*\]\(https://.*badge", 3.0),
                P::contains("build", 2.0),
                P::contains("coverage", 2.0),
                P::contains("version", 1.0),
                P::contains("license", 1.0),
                P::contains("downloads", 1.0),
            ],
        ),
        Criterion::new(
            "Testing Information",
            QUALITY,
            8.0,
            vec![
                P::contains("test", 2.0),
                P::contains("testing", 2.0),
                P::contains("coverage", 2.0),
                P::contains("ci", 1.0),
                P::contains("continuous integration", 2.0),
            ],
        ),
        Criterion::new(
            "Changelog/Versioning",
            QUALITY,
            7.0,
            vec![
                P::contains("changelog", 2.0),
                P::contains("version", 1.0),
                P::contains("release", 1.0),
                P::contains("history", 1.0),
            ],
        ),
        Criterion::new(
            CONTRIBUTING,
            COMMUNITY,
            8.0,
            vec![
                P::contains("contributing", 3.0),
                P::contains("contribute", 2.0),
                P::contains("pull request", 2.0),
                P::contains("issues", 1.0),
                P::contains("guidelines", 1.0),
            ],
        ),
        Criterion::new(
            LICENSE,
            COMMUNITY,
            7.0,
            vec![
                P::contains("license", 3.0),
                P::contains("mit", 2.0),
                P::contains("apache", 2.0),
                P::contains("gpl", 2.0),
                P::contains("copyright", 1.0),
            ],
        ),
        Criterion::new(
            "Contact Information",
            COMMUNITY,
            5.0,
            vec![
                P::contains("author", 2.0),
                P::contains("maintainer", 2.0),
                P::contains("contact", 2.0),
                P::contains("support", 1.0),
                P::regex(r"@\w+", 1.0),
            ],
        ),
        Criterion::new(
            "Configuration Documentation",
            ADVANCED,
            6.0,
            vec![
                P::contains("config", 2.0),
                P::contains("options", 2.0),
                P::contains("settings", 1.0),
                P::contains("parameters", 1.0),
            ],
        ),
        Criterion::new(
            "Troubleshooting",
            ADVANCED,
            6.0,
            vec![
                P::contains("troubleshoot", 2.0),
                P::contains("faq", 2.0),
                P::contains("common issues", 2.0),
                P::contains("problems", 1.0),
            ],
        ),
        Criterion::new(
            "Performance & Benchmarks",
            ADVANCED,
            4.0,
            vec![
                P::contains("performance", 2.0),
                P::contains("benchmark", 2.0),
                P::contains("speed", 1.0),
            ],
        ),
        Criterion::new(
            "Security Information",
            ADVANCED,
            4.0,
            vec![
                P::contains("security", 2.0),
                P::contains("vulnerability", 1.0),
                P::contains("secure", 1.0),
            ],
        ),
    ]
}
