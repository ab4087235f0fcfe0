//! Loaded entities ready for rendering

use super::plan::{Checklist, TestCase, TestPlan, TestStrategy};
use super::run::TestRun;
use crate::types::{EntityId, EntityKind};

/// An entity together with its owned child collections
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregate {
    TestPlan(TestPlan),
    TestCase(TestCase),
    Checklist(Checklist),
    TestStrategy(TestStrategy),
    TestRun(TestRun),
}

impl Aggregate {
    pub fn kind(&self) -> EntityKind {
        match self {
            Aggregate::TestPlan(_) => EntityKind::TestPlan,
            Aggregate::TestCase(_) => EntityKind::TestCase,
            Aggregate::Checklist(_) => EntityKind::Checklist,
            Aggregate::TestStrategy(_) => EntityKind::TestStrategy,
            Aggregate::TestRun(_) => EntityKind::TestRun,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            Aggregate::TestPlan(plan) => plan.id,
            Aggregate::TestCase(case) => case.id,
            Aggregate::Checklist(checklist) => checklist.id,
            Aggregate::TestStrategy(strategy) => strategy.id,
            Aggregate::TestRun(run) => run.id,
        }
    }

    /// The entity's name, or title for test cases
    pub fn display_name(&self) -> &str {
        match self {
            Aggregate::TestPlan(plan) => &plan.name,
            Aggregate::TestCase(case) => &case.title,
            Aggregate::Checklist(checklist) => &checklist.name,
            Aggregate::TestStrategy(strategy) => &strategy.name,
            Aggregate::TestRun(run) => &run.name,
        }
    }
}

impl From<TestPlan> for Aggregate {
    fn from(plan: TestPlan) -> Self {
        Aggregate::TestPlan(plan)
    }
}

impl From<TestCase> for Aggregate {
    fn from(case: TestCase) -> Self {
        Aggregate::TestCase(case)
    }
}

impl From<Checklist> for Aggregate {
    fn from(checklist: Checklist) -> Self {
        Aggregate::Checklist(checklist)
    }
}

impl From<TestStrategy> for Aggregate {
    fn from(strategy: TestStrategy) -> Self {
        Aggregate::TestStrategy(strategy)
    }
}

impl From<TestRun> for Aggregate {
    fn from(run: TestRun) -> Self {
        Aggregate::TestRun(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_uses_title_for_cases() {
        let case = TestCase::new(EntityId::new(), "Login works");
        let aggregate = Aggregate::from(case.clone());
        assert_eq!(aggregate.display_name(), "Login works");
        assert_eq!(aggregate.kind(), EntityKind::TestCase);
        assert_eq!(aggregate.id(), case.id);
    }

    #[test]
    fn test_kinds() {
        let project = EntityId::new();
        assert_eq!(
            Aggregate::from(TestPlan::new(project, "p")).kind(),
            EntityKind::TestPlan
        );
        assert_eq!(
            Aggregate::from(Checklist::new(project, "c")).kind(),
            EntityKind::Checklist
        );
        assert_eq!(
            Aggregate::from(TestStrategy::new(project, "s")).kind(),
            EntityKind::TestStrategy
        );
        assert_eq!(
            Aggregate::from(TestRun::new(project, "r")).kind(),
            EntityKind::TestRun
        );
    }
}
