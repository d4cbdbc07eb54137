//! Batching and worker pool utilities.
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Error;

/// Default number of batches a file list is split into.
pub const DEFAULT_BATCHES: usize = 100;

/// Split `items` into `nb_batches` batches.
///
/// Batches are of `items.len() / nb_batches` items, the last one getting the remainder.
/// If there are fewer items than batches, each item gets its own batch.
pub fn batches<T>(items: &[T], nb_batches: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }

    let nb_batches = nb_batches.clamp(1, items.len());
    let batch_size = items.len() / nb_batches;

    let mut batches: Vec<&[T]> = Vec::with_capacity(nb_batches);
    let (head, last) = items.split_at(batch_size * (nb_batches - 1));
    batches.extend(head.chunks(batch_size));
    batches.push(last);

    debug!(
        "{} items in {} batches of {} (last: {})",
        items.len(),
        batches.len(),
        batch_size,
        last.len()
    );
    batches
}

/// Build a worker pool. Defaults to one thread per available core.
pub fn thread_pool(nb_threads: Option<usize>) -> Result<ThreadPool, Error> {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(nb_threads) = nb_threads {
        builder = builder.num_threads(nb_threads);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(total: usize, nb: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..total).collect();
        batches(&items, nb).iter().map(|b| b.len()).collect()
    }

    #[test]
    fn remainder_in_last() {
        assert_eq!(sizes(10, 3), vec![3, 3, 4]);
        assert_eq!(sizes(250, 100).len(), 100);
        assert_eq!(sizes(250, 100)[..99], [2; 99]);
        assert_eq!(sizes(250, 100)[99], 52);
    }

    #[test]
    fn fewer_items_than_batches() {
        assert_eq!(sizes(3, 100), vec![1, 1, 1]);
    }

    #[test]
    fn exact() {
        assert_eq!(sizes(300, 100), vec![3; 100]);
    }

    #[test]
    fn edge_cases() {
        assert!(sizes(0, 100).is_empty());
        assert_eq!(sizes(5, 0), vec![5]);
        assert_eq!(sizes(5, 1), vec![5]);
    }

    #[test]
    fn keeps_order() {
        let items: Vec<usize> = (0..11).collect();
        let flat: Vec<usize> = batches(&items, 4).concat();
        assert_eq!(flat, items);
    }

    #[test]
    fn pool() {
        let pool = thread_pool(Some(2)).unwrap();
        assert_eq!(pool.current_num_threads(), 2);
        assert!(thread_pool(None).is_ok());
    }
}
