use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use typed_list::{Capacity, CapacityMode, ErrorKind, IntList};

/// Applies a random operation and checks the capacity invariants around it
fn step(list: &mut IntList, rng: &mut SmallRng) {
    let before_len = list.len();
    let before_cap = list.capacity();

    match rng.gen_range(0..8) {
        0..=2 => {
            let value = rng.gen_range(-5..5);
            match list.append(value).map(|_| ()) {
                Ok(_) => {
                    assert_eq!(list.len(), before_len + 1);
                    assert_eq!(list.get(before_len).unwrap(), &value);
                }
                Err(err) => {
                    assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
                    assert!(list.is_strict());
                    assert_eq!(list.len(), before_len);
                }
            }
        }
        3 => {
            let index = rng.gen_range(0..=before_len + 1);
            match list.remove(index) {
                Ok(_) => assert_eq!(list.len(), before_len - 1),
                Err(err) => {
                    assert_eq!(err.kind(), ErrorKind::OutOfRange);
                    assert!(index >= before_len);
                    assert_eq!(list.len(), before_len);
                }
            }
        }
        4 => {
            let index = rng.gen_range(0..=before_len);
            let value = rng.gen_range(-5..5);
            match list.replace(index, value).map(|_| ()) {
                Ok(_) => assert_eq!(list.get(index).unwrap(), &value),
                Err(err) => assert_eq!(err.kind(), ErrorKind::OutOfRange),
            }
            assert_eq!(list.len(), before_len);
        }
        5 => {
            let once = list.unique().values().to_vec();
            assert_eq!(list.unique().values(), once.as_slice());
        }
        6 => {
            list.filter(|v| *v != 0);
        }
        _ => {
            list.sort();
            assert!(list.values().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    assert!(list.len() <= list.capacity());
    assert_eq!(list.left(), list.capacity() - list.len());

    match list.capacity_mode() {
        CapacityMode::Strict => assert_eq!(list.capacity(), before_cap),
        CapacityMode::Elastic => {
            if list.capacity() != before_cap {
                // only an append that fills the list grows it
                assert_eq!(list.len(), before_len + 1);
                assert_eq!(before_len + 1, before_cap.max(1));
                assert_eq!(list.capacity(), (before_cap * 2).max(2));
            }
        }
    }
}

fn run(mut list: IntList, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mode = list.capacity_mode();
    for _ in 0..500 {
        step(&mut list, &mut rng);
        assert_eq!(list.capacity_mode(), mode);
    }
}

#[test]
fn elastic_invariants_hold() {
    for seed in 0..16 {
        run(IntList::new(vec![1, 2, 3]), seed);
        run(IntList::new(vec![]), seed);
    }
}

#[test]
fn strict_invariants_hold() {
    for seed in 0..16 {
        run(IntList::try_new(vec![1, 2], Capacity::Strict(8)).unwrap(), seed);
        run(IntList::try_new(vec![], Capacity::Strict(1)).unwrap(), seed);
    }
}
