//! Utilities for parallelism

/// Evaluates `oper(0)`, `oper(1)`, ..., `oper(count - 1)` and collects the results in order.
///
/// Runs on the rayon pool if and only if `parallel` is set to `true` and the `parallel`
/// feature is enabled.
#[allow(unused_variables)] // when `parallel` feature is disabled, the variable is ignored
pub(crate) fn map_maybe_in_parallel<F, R>(parallel: bool, count: usize, oper: F) -> Vec<R>
where
    F: Fn(usize) -> R + Send + Sync,
    R: Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        if parallel {
            (0..count).into_par_iter().map(oper).collect()
        } else {
            (0..count).map(oper).collect()
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(oper).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_keep_index_order() {
        for parallel in [false, true] {
            let squares = map_maybe_in_parallel(parallel, 100, |i| i * i);
            assert_eq!(squares, (0..100).map(|i| i * i).collect::<Vec<_>>());
        }
    }
}
