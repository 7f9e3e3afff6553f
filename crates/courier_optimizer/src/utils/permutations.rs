/// Visits every permutation of `items` in place using Heap's algorithm.
///
/// The visitor sees `n!` arrangements (a single, empty one when `items` is
/// empty). Visiting stops at the first error, which is returned as is.
/// `items` is left in an unspecified order afterwards.
pub fn try_for_each_permutation<T, E>(
    items: &mut [T],
    mut visit: impl FnMut(&[T]) -> Result<(), E>,
) -> Result<(), E> {
    let n = items.len();
    let mut counters = vec![0usize; n];

    visit(items)?;

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                items.swap(0, i);
            } else {
                items.swap(counters[i], i);
            }

            visit(items)?;

            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::try_for_each_permutation;

    fn collect_permutations(items: &mut [u8]) -> Vec<Vec<u8>> {
        let mut seen = Vec::new();
        try_for_each_permutation(items, |permutation| {
            seen.push(permutation.to_vec());
            Ok::<(), ()>(())
        })
        .unwrap();
        seen
    }

    #[test]
    fn test_empty_slice_has_one_permutation() {
        let permutations = collect_permutations(&mut []);
        assert_eq!(permutations, vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_visits_every_permutation_exactly_once() {
        for n in 1..=6u8 {
            let mut items = (0..n).collect::<Vec<_>>();
            let permutations = collect_permutations(&mut items);
            let expected = (1..=n as usize).product::<usize>();

            assert_eq!(permutations.len(), expected);

            let unique = permutations.iter().collect::<FxHashSet<_>>();
            assert_eq!(unique.len(), expected);

            for permutation in &permutations {
                let mut sorted = permutation.clone();
                sorted.sort();
                assert_eq!(sorted, (0..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_stops_on_first_error() {
        let mut items = [1, 2, 3, 4];
        let mut visits = 0;
        let result = try_for_each_permutation(&mut items, |_| {
            visits += 1;
            if visits == 5 { Err("stop") } else { Ok(()) }
        });

        assert_eq!(result, Err("stop"));
        assert_eq!(visits, 5);
    }
}
