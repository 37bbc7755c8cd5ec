//! Custom tokens, mappings and reusable formatter configurations.
//!
//! Run with: cargo run --example custom_tokens

use seqview::{
    format_labelled, format_view, from_fn, join_texts, FormatTokens, Identity, Limit,
    RangeFormatter, ViewRange,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bytes = [0xca_u8, 0xfe, 0xba, 0xbe];
    let hex = from_fn(|b: &u8| format!("{b:02x}"));
    let compact = FormatTokens::new().with_prefix("0x").with_join("").with_suffix("");
    println!("{}", format_view(&bytes, &ViewRange::all(), &hex, &compact)?);

    let path = ["usr", "local", "bin"];
    let slashes = FormatTokens::new().with_prefix("/").with_join("/").with_suffix("");
    println!("{}", format_view(&path, &ViewRange::all(), &Identity, &slashes)?);
    println!("{}", join_texts(&path, " > ")?);

    let ids = [101, 102, 103, 104];
    println!("{}", format_labelled("ids", &ids, &ViewRange::window(1, 2), ",")?);

    // Formatter configurations can be stored alongside other settings
    let tail = RangeFormatter::new()
        .with_range(ViewRange::limit(1, Limit::ToLast))
        .with_tokens(FormatTokens::new().with_prefix("...["));
    let json = serde_json::to_string(&tail)?;
    println!("config: {json}");

    let restored: RangeFormatter = serde_json::from_str(&json)?;
    println!("{}", restored.format(&ids)?);

    Ok(())
}
