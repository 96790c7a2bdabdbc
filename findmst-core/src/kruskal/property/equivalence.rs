//! Oracle equivalence and cross-strategy agreement.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeList, KruskalStrategy, MinimumSpanningForest};

use super::oracle::{OracleForest, brute_force_forest, reference_kruskal};
use super::types::MstFixture;

fn run(
    strategy: KruskalStrategy,
    graph: &EdgeList,
    context: &str,
) -> Result<MinimumSpanningForest, TestCaseError> {
    strategy.run(graph).map_err(|e| {
        TestCaseError::fail(format!("{} run failed: {e} ({context})", strategy.label()))
    })
}

fn compare(forest: &MinimumSpanningForest, oracle: OracleForest, context: &str) -> TestCaseResult {
    let actual = OracleForest {
        total_weight: forest.total_weight(),
        edge_count: forest.edges().len(),
        component_count: forest.component_count(),
    };
    if actual != oracle {
        return Err(TestCaseError::fail(format!(
            "{} disagrees with oracle: actual={actual:?}, oracle={oracle:?} ({context})",
            forest.strategy().label(),
        )));
    }
    Ok(())
}

/// Both strategies match the union-by-rank reference on total weight, edge
/// count and component count.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.describe();
    let oracle = reference_kruskal(&fixture.graph);
    for strategy in KruskalStrategy::ALL {
        let forest = run(strategy, &fixture.graph, &context)?;
        compare(&forest, oracle, &context)?;
    }
    Ok(())
}

/// Both strategies accept the identical edge sequence.
pub(super) fn run_strategy_agreement_property(fixture: &MstFixture) -> TestCaseResult {
    let context = fixture.describe();
    let sorted = run(KruskalStrategy::Sort, &fixture.graph, &context)?;
    let heaped = run(KruskalStrategy::Heap, &fixture.graph, &context)?;
    if sorted.edges() != heaped.edges() {
        return Err(TestCaseError::fail(format!(
            "strategies diverged: sort={:?}, heap={:?} ({context})",
            sorted.edges(),
            heaped.edges(),
        )));
    }
    Ok(())
}

/// Both strategies match exhaustive enumeration on a small graph.
pub(super) fn run_brute_force_property(graph: &EdgeList) -> TestCaseResult {
    let context = format!("vertices={}, edges={}", graph.vertex_count(), graph.len());
    let Some(oracle) = brute_force_forest(graph) else {
        return Err(TestCaseError::reject("graph too large for enumeration"));
    };
    for strategy in KruskalStrategy::ALL {
        let forest = run(strategy, graph, &context)?;
        compare(&forest, oracle, &context)?;
    }
    Ok(())
}
