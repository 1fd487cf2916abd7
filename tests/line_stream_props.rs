// tests/line_stream_props.rs

use proptest::prelude::*;
use upall::exec::line_stream::{collect_rows, for_each_row};

fn block_on<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("build runtime")
        .block_on(f)
}

proptest! {
    #[test]
    fn rows_concatenate_back_to_the_input(input in proptest::collection::vec(any::<u8>(), 0..200)) {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        block_on(for_each_row(&input[..], |row| rows.push(row.to_vec()))).unwrap();

        prop_assert_eq!(rows.concat(), input.clone());

        // Every row but the last ends in '\n'; none is empty.
        for row in rows.iter().rev().skip(1) {
            prop_assert_eq!(row.last(), Some(&b'\n'));
        }
        prop_assert!(rows.iter().all(|r| !r.is_empty()));

        let newlines = input.iter().filter(|&&b| b == b'\n').count();
        let partial = usize::from(input.last().is_some_and(|&b| b != b'\n'));
        prop_assert_eq!(rows.len(), newlines + partial);

        prop_assert_eq!(block_on(collect_rows(&input[..])).unwrap(), input);
    }
}
