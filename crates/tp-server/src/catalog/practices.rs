use serde::Serialize;

/// A concrete practice and the principles it supports.
#[derive(Debug, Clone, Serialize)]
pub struct Practice {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    /// Principle ids.
    pub principles: &'static [&'static str],
}

pub static PRACTICES: &[Practice] = &[
    Practice {
        id: "small-prs",
        name: "Small Pull Requests",
        summary: "Keep pull requests under a few hundred lines and focused on one change \
                  so review happens the same day.",
        principles: &["ship-small", "collaborate-early"],
    },
    Practice {
        id: "pair-programming",
        name: "Pair Programming",
        summary: "Work through tricky problems with a partner, rotating driver and \
                  navigator.",
        principles: &["collaborate-early", "learn-openly"],
    },
    Practice {
        id: "blameless-retros",
        name: "Blameless Retrospectives",
        summary: "Review incidents and iterations by asking what the system allowed, \
                  not who failed; every action item gets an owner.",
        principles: &["learn-openly", "own-outcomes"],
    },
    Practice {
        id: "insight-logging",
        name: "Insight Logging",
        summary: "Record short insights in the team insight log as they happen, tagged \
                  so they can be found again.",
        principles: &["learn-openly"],
    },
    Practice {
        id: "test-first",
        name: "Test First",
        summary: "Write a failing test before the fix or feature, and keep the suite fast \
                  enough to run on every change.",
        principles: &["automate-feedback", "ship-small"],
    },
    Practice {
        id: "focus-blocks",
        name: "Focus Blocks",
        summary: "Reserve meeting-free blocks each day for deep work.",
        principles: &["sustainable-pace"],
    },
    Practice {
        id: "run-what-you-build",
        name: "Run What You Build",
        summary: "The team that ships a change watches its rollout and carries the pager \
                  for it.",
        principles: &["own-outcomes"],
    },
];
