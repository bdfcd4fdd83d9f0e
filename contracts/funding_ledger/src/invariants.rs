#![allow(dead_code)]

extern crate std;

use crate::types::Project;

/// INV-1: Project goal must always be positive.
pub fn assert_goal_positive(project: &Project) {
    assert!(
        project.goal > 0,
        "INV-1 violated: project {} has non-positive goal ({})",
        project.id,
        project.goal
    );
}

/// INV-2: Amount raised must never be negative.
pub fn assert_raised_non_negative(project: &Project) {
    assert!(
        project.amount_raised >= 0,
        "INV-2 violated: project {} has negative amount_raised ({})",
        project.id,
        project.amount_raised
    );
}

/// INV-3: Before any withdrawal, `amount_raised` equals the sum of the
/// recorded contributions.
pub fn assert_raised_matches_contributions(project: &Project, contributions: &[i128]) {
    let sum: i128 = contributions.iter().sum();
    assert_eq!(
        project.amount_raised, sum,
        "INV-3 violated: project {} raised {} but contributions sum to {}",
        project.id, project.amount_raised, sum
    );
}

/// INV-4: `is_funded` is monotone. It can only go false -> true, never back.
pub fn assert_funded_monotonic(funded_before: bool, funded_after: bool) {
    assert!(
        funded_after || !funded_before,
        "INV-4 violated: is_funded was cleared (true -> false)"
    );
}

/// INV-5: Fund invariant. After accepting `amount`, the running total grows
/// by exactly that amount.
pub fn assert_fund_invariant(raised_before: i128, raised_after: i128, amount: i128) {
    assert_eq!(
        raised_after,
        raised_before + amount,
        "INV-5 violated: fund invariant broken: {} + {} != {}",
        raised_before,
        amount,
        raised_after
    );
}

/// INV-6: Project IDs are sequential starting from 0.
pub fn assert_sequential_ids(projects: &[Project]) {
    for (i, project) in projects.iter().enumerate() {
        assert_eq!(
            project.id, i as u64,
            "INV-6 violated: expected id {}, got {}",
            i, project.id
        );
    }
}

/// INV-7: Fields set at creation (owner, title, description, goal, deadline)
/// remain unchanged for the life of the project.
pub fn assert_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-7 violated: project id changed");
    assert_eq!(
        original.owner, current.owner,
        "INV-7 violated: project owner changed"
    );
    assert_eq!(
        original.title, current.title,
        "INV-7 violated: project title changed"
    );
    assert_eq!(
        original.description, current.description,
        "INV-7 violated: project description changed"
    );
    assert_eq!(
        original.goal, current.goal,
        "INV-7 violated: project goal changed"
    );
    assert_eq!(
        original.deadline, current.deadline,
        "INV-7 violated: project deadline changed"
    );
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_goal_positive(project);
    assert_raised_non_negative(project);
}
