use serde::Serialize;

/// A team principle.
#[derive(Debug, Clone, Serialize)]
pub struct Principle {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub static PRINCIPLES: &[Principle] = &[
    Principle {
        id: "ship-small",
        name: "Ship Small",
        description: "Deliver work in small, reviewable increments so feedback arrives early \
                      and mistakes stay cheap to fix.",
    },
    Principle {
        id: "own-outcomes",
        name: "Own Outcomes",
        description: "Take ownership of results rather than tasks: follow changes through \
                      deployment and learn from how they behave in production.",
    },
    Principle {
        id: "learn-openly",
        name: "Learn Openly",
        description: "Share mistakes, lessons and insights openly so the whole team learns \
                      faster; write lessons down where others can find them.",
    },
    Principle {
        id: "collaborate-early",
        name: "Collaborate Early",
        description: "Pair, ask for review and seek input early instead of polishing work \
                      alone; questions are cheaper than rework.",
    },
    Principle {
        id: "sustainable-pace",
        name: "Sustainable Pace",
        description: "Protect focus time and energy; a steady pace the team can keep beats \
                      heroic bursts followed by burnout.",
    },
    Principle {
        id: "automate-feedback",
        name: "Automate Feedback",
        description: "Let tests, continuous integration and tooling catch problems \
                      automatically so people can spend attention on design.",
    },
];
