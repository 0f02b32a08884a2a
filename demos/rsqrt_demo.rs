//! Fast Inverse Square Root Demo
//!
//! Shows the accuracy of each stage and a rough timing against `1.0 / x.sqrt()`.
//!
//! ```bash
//! cargo run --example rsqrt_demo --release
//! ```

use qrsqrt::{approximate, estimate, newton_step, try_approximate, MAGIC};
use std::time::Instant;

fn main() {
    println!("Fast Inverse Square Root Demo");
    println!("=============================\n");

    // 1. Accuracy per stage
    demo_accuracy();

    // 2. Worst case over a wide range
    demo_worst_case();

    // 3. Performance comparison
    demo_performance();

    // 4. Checked wrapper
    demo_checked();

    println!("Done!");
}

fn demo_accuracy() {
    println!("1. Accuracy per Stage");
    println!("   -------------------\n");

    println!("   y0 = from_bits({:#x} - (bits(x) >> 1))", MAGIC);
    println!("   y1 = y0 * (1.5 - 0.5 * x * y0 * y0)\n");

    println!(
        "   {:>12}  {:>12}  {:>12}  {:>12}  {:>12}",
        "Input", "Exact", "Estimate", "Approximate", "Rel Error"
    );
    println!(
        "   {:->12}  {:->12}  {:->12}  {:->12}  {:->12}",
        "", "", "", "", ""
    );

    for &x in &[0.001f32, 0.01, 0.25, 1.0, 2.0, 4.0, 100.0, 1000.0] {
        let exact = 1.0 / x.sqrt();
        let y0 = estimate(x);
        let y1 = approximate(x);
        let rel_error = (y1 - exact).abs() / exact;

        println!(
            "   {:>12.4}  {:>12.6}  {:>12.6}  {:>12.6}  {:>11.2e}",
            x, exact, y0, y1, rel_error
        );
    }
    println!();
}

fn demo_worst_case() {
    println!("2. Worst Case over 2^-20 .. 2^20");
    println!("   ------------------------------\n");

    let steps = 200_000;
    let (mut worst0, mut worst1, mut worst2) = (0.0f64, 0.0f64, 0.0f64);
    for k in 0..=steps {
        let e = -20.0 + 40.0 * k as f64 / steps as f64;
        let x = 2f64.powf(e) as f32;
        let exact = 1.0 / (x as f64).sqrt();

        let y0 = estimate(x);
        let y1 = newton_step(x, y0);
        let y2 = newton_step(x, y1);

        worst0 = worst0.max((y0 as f64 - exact).abs() / exact);
        worst1 = worst1.max((y1 as f64 - exact).abs() / exact);
        worst2 = worst2.max((y2 as f64 - exact).abs() / exact);
    }

    println!("   estimate only:        {:.4}%", worst0 * 100.0);
    println!("   one Newton step:      {:.4}%", worst1 * 100.0);
    println!("   two Newton steps:     {:.6}%", worst2 * 100.0);
    println!();
}

fn demo_performance() {
    println!("3. Performance Comparison");
    println!("   -----------------------\n");

    let values: Vec<f32> = (1..=4096).map(|i| i as f32 * 0.37).collect();
    let iterations = 10_000;

    let start = Instant::now();
    let mut sum = 0.0f32;
    for _ in 0..iterations {
        for &x in &values {
            sum += 1.0 / x.sqrt();
        }
    }
    let standard_time = start.elapsed();
    std::hint::black_box(sum);

    let start = Instant::now();
    let mut sum = 0.0f32;
    for _ in 0..iterations {
        for &x in &values {
            sum += approximate(x);
        }
    }
    let fast_time = start.elapsed();
    std::hint::black_box(sum);

    let evals = (iterations * values.len()) as f64;
    let standard_ns = standard_time.as_nanos() as f64 / evals;
    let fast_ns = fast_time.as_nanos() as f64 / evals;

    println!("   1.0 / x.sqrt():   {:>6.2} ns/eval", standard_ns);
    println!("   approximate(x):   {:>6.2} ns/eval", fast_ns);
    println!("   Speedup:          {:>6.2}x", standard_ns / fast_ns);
    println!();
    println!("   Modern CPUs have fast hardware sqrt; the gap is largest on");
    println!("   targets without it.");
    println!();
}

fn demo_checked() {
    println!("4. Checked Wrapper");
    println!("   ----------------\n");

    for &x in &[16.0f32, 0.0, -1.0, f32::NAN, f32::INFINITY] {
        match try_approximate(x) {
            Ok(r) => println!("   try_approximate({:>5}) = Ok({})", x, r),
            Err(e) => println!("   try_approximate({:>5}) = Err({})", x, e),
        }
    }
    println!();
}
