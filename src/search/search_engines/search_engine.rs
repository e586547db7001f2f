use crate::search::{Path, SearchProblem, SearchStatistics};

/// Terminal outcome of one search call.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S, A> {
    /// A goal state was reached; the path runs initial state to goal state.
    Success(Path<S, A>),
    /// The frontier was exhausted without reaching a goal. Not an error: the
    /// caller decides what an unreachable goal means.
    Unsolvable,
}

impl<S, A> SearchResult<S, A> {
    pub fn path(&self) -> Option<&Path<S, A>> {
        match self {
            SearchResult::Success(path) => Some(path),
            SearchResult::Unsolvable => None,
        }
    }
}

/// A search engine explores the implicit state graph of a
/// [`SearchProblem`] in an algorithm-specific order. One call runs to
/// completion synchronously; engines own their frontier and explored set, so
/// independent calls never share mutable state.
pub trait SearchEngine {
    fn search<P: SearchProblem>(
        &mut self,
        problem: &P,
    ) -> (SearchResult<P::State, P::Action>, SearchStatistics);
}
