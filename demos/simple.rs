//! Rendering whole sequences and bounded views of them.
//!
//! Run with: cargo run --example simple

use seqview::{to_string, to_string_nullable, to_string_range, Limit, ViewRange};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let readings = [5, 7, 9, 12, 15];

    println!("all:        {}", to_string(&readings)?);
    println!("first:      {}", to_string_range(&readings, &ViewRange::first())?);
    println!("last:       {}", to_string_range(&readings, &ViewRange::last())?);
    println!("window 1-3: {}", to_string_range(&readings, &ViewRange::window(1, 3))?);
    println!("head 2:     {}", to_string_range(&readings, &ViewRange::limit(1, Limit::ToFirst))?);
    println!("tail 2:     {}", to_string_range(&readings, &ViewRange::limit(1, Limit::ToLast))?);

    // Out-of-range requests clamp to the nearest element
    println!("single 40:  {}", to_string_range(&readings, &ViewRange::single(40))?);

    let sparse = [Some(5), Some(7), None, Some(12), None];
    println!("nullable:   {}", to_string_nullable(&sparse)?);

    let nothing: [i32; 0] = [];
    assert_eq!(to_string(&nothing)?, "[]");
    println!("✓ Empty sequence renders as []");

    Ok(())
}
