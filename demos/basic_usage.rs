// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// trace events emitted when an operation fails.

use canonical_ratio::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Canonical Ratio Example ===\n");

    // Construction always reduces and moves the sign to the numerator
    println!("Construction:");
    for (n, d) in [(2i64, 6i64), (-1, -3), (1, -3), (0, 42), (31_833_193, i64::MAX)] {
        match Ratio::new(n, d) {
            Ok(ratio) => println!("  create({}, {}) = {}", n, d, ratio),
            Err(err) => println!("  create({}, {}) failed: {}", n, d, err),
        }
    }
    println!("  default = {}", Ratio::default());

    // Arithmetic
    println!("\nArithmetic:");
    let half = Ratio::new(1, 2).unwrap();
    let third = Ratio::new(1, 3).unwrap();
    let pairs = [
        ("+", half.checked_add(third)),
        ("-", half.checked_sub(third)),
        ("*", half.checked_mul(third)),
        ("/", half.checked_div(third)),
    ];
    for (op, result) in pairs {
        match result {
            Ok(value) => println!("  {} {} {} = {}", half, op, third, value),
            Err(err) => println!("  {} {} {} failed: {}", half, op, third, err),
        }
    }

    // Rendering policies
    println!("\nRendering:");
    let whole = Ratio::from(4);
    println!("  compact:  {}", whole.render(RenderStyle::Compact));
    println!("  fraction: {}", whole.render(RenderStyle::Fraction));
    println!("  approx:   {:.6}", Ratio::new(22, 7).unwrap().to_f64());

    // Failures are reported, never wrapped
    println!("\nFailures:");
    println!("  1/0            -> {:?}", Ratio::new(1, 0));
    println!("  reciprocal(0)  -> {:?}", Ratio::ZERO.reciprocal());
    println!("  -MIN           -> {:?}", Ratio::MIN.checked_neg());
    println!("  MAX + 1        -> {:?}", Ratio::MAX.checked_increment());
    println!("  MAX cmp MIN    -> {:?}", Ratio::MAX.checked_cmp(Ratio::MIN));
    println!("  MAX > MIN      -> {}", Ratio::MAX > Ratio::MIN);
}
