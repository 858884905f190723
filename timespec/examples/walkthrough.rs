//! Runs each `Timespec` operation on a few literal values and prints the
//! results.

use timespec::{Error, Timespec};

fn main() -> Result<(), Error> {
    println!("as_millis_f64");
    let ts = Timespec::new(2, 700_000_000);
    println!("  {ts} -> {} ms", ts.as_millis_f64());
    let ts = Timespec::new(-2, -500_000_000);
    println!("  {ts} -> {} ms", ts.as_millis_f64());

    println!("from_millis_f64");
    for millis in [3456.789, -1500.0] {
        let ts = Timespec::from_millis_f64(millis);
        println!("  {millis} ms -> {ts} (back to {} ms)", ts.as_millis_f64());
    }

    println!("negate");
    for ts in [Timespec::new(5, 500_000_000), Timespec::new(3, 250_000_000)] {
        println!("  -({ts}) = {}", -ts);
    }

    println!("add");
    let (a, b) = (Timespec::new(1, 800_000_000), Timespec::new(0, 300_000_000));
    println!("  {a} + {b} = {}", a + b);
    let (a, b) = (Timespec::new(3, 0), Timespec::new(-1, -500_000_000));
    println!("  {a} + {b} = {}", a + b);

    println!("sub");
    let (a, b) = (Timespec::new(5, 200_000_000), Timespec::new(2, 700_000_000));
    println!("  {a} - {b} = {}", a - b);

    println!("compound");
    let mut ts = Timespec::new(1, 0);
    ts += Timespec::new(0, 500_000_000);
    println!("  1s 0ns += 0s 500000000ns -> {ts}");
    let mut ts = Timespec::new(3, 0);
    ts -= Timespec::new(1, 250_000_000);
    println!("  3s 0ns -= 1s 250000000ns -> {ts}");

    println!("compare");
    let a = Timespec::new(2, 500_000_000);
    let b = Timespec::new(2, 500_000_000);
    let c = Timespec::new(1, 0);
    println!("  A == B: {}", a == b);
    println!("  A != C: {}", a != c);
    println!("  C < A: {}", c < a);
    println!("  A > C: {}", a > c);

    println!("now");
    let now = timespec::now()?;
    println!("  {now} ({} ms since epoch)", now.as_millis_f64());

    println!("wait");
    let before = timespec::now()?;
    timespec::wait(Timespec::from_millis(500))?;
    let elapsed = timespec::now()? - before;
    println!("  waited 500 ms, measured {} ms", elapsed.as_millis_f64());

    Ok(())
}
