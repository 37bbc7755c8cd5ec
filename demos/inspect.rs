//! Verbose per-element dumps.
//!
//! Run with: cargo run --example inspect

use seqview::{inspect, inspect_nested, inspect_with, try_from_fn, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let longs: Vec<i64> = vec![1, 3, 5, 7, 9];
    println!("{}\n", inspect(Some(&longs[..]))?);

    let matrix = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    println!("{}\n", inspect_nested(Some(&matrix[..]))?);

    println!("{}", inspect::<i64>(None)?);
    println!("{}\n", inspect::<i64>(Some(&[][..]))?);

    // Mapping failures surface unchanged
    let ascii = try_from_fn(|c: &char| {
        if c.is_ascii() {
            Ok(c.to_string())
        } else {
            Err(Error::custom(format!("non-ascii character {c:?}")))
        }
    });
    match inspect_with(Some(&['a', 'é'][..]), &ascii) {
        Ok(dump) => println!("{dump}"),
        Err(err) => println!("inspection failed: {err}"),
    }

    Ok(())
}
