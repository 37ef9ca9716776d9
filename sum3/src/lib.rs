//! Curried three-way addition, constructed two ways.
//!
//! The same function `f` with `f(a)(b)(c) == a + b + c` is built once as a
//! chain of single-argument closures (via the `#[curry]` attribute) and
//! once as explicit callable objects, one type per link. [`run`] applies
//! both to the literals `(1, 2, 3)` and writes the result of each, showing
//! the two spellings are interchangeable.

use std::io::{self, Write};

use curry::curry;

/// Concise form. The attribute expands this into
/// `fn sum3(a: i32) -> impl Fn(i32) -> Box<dyn Fn(i32) -> i32>`,
/// so it is called as `sum3(a)(b)(c)`.
#[curry]
pub fn sum3(a: i32, b: i32, c: i32) -> i32 {
    a + b + c
}

/// A single-argument callable. Spelling the chain out by hand means
/// implementing this once per link.
pub trait Function<T> {
    type Output;

    fn apply(&self, arg: T) -> Self::Output;
}

/// Verbose form: the chain entry point. Each link is its own type,
/// carrying the arguments applied so far as fields.
pub struct Sum3;

pub struct Partial1 {
    a: i32,
}

pub struct Partial2 {
    a: i32,
    b: i32,
}

impl Function<i32> for Sum3 {
    type Output = Partial1;

    fn apply(&self, a: i32) -> Partial1 {
        Partial1 { a }
    }
}

impl Function<i32> for Partial1 {
    type Output = Partial2;

    fn apply(&self, b: i32) -> Partial2 {
        Partial2 { a: self.a, b }
    }
}

impl Function<i32> for Partial2 {
    type Output = i32;

    fn apply(&self, c: i32) -> i32 {
        self.a + self.b + c
    }
}

fn closure_chain(out: &mut dyn Write) -> io::Result<()> {
    let result = sum3(1)(2)(3);
    writeln!(out, "result = {result}")
}

fn nested_callables(out: &mut dyn Write) -> io::Result<()> {
    let result = Sum3.apply(1).apply(2).apply(3);
    writeln!(out, "result = {result}")
}

/// Writes the full transcript: both constructions applied to `(1, 2, 3)`,
/// each under its own banner.
pub fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n-----")?;
    writeln!(out, "----- closure_chain")?;
    closure_chain(out)?;
    writeln!(out, "----- nested_callables")?;
    nested_callables(out)?;
    writeln!(out, "-----\n")
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn both_constructions_add_the_literals() {
        assert_eq!(sum3(1)(2)(3), 6);
        assert_eq!(Sum3.apply(1).apply(2).apply(3), 6);
    }

    #[test]
    fn attribute_matches_a_handwritten_chain() {
        let by_hand = |a: i32| move |b: i32| move |c: i32| a + b + c;
        for (a, b, c) in [(0, 0, 0), (1, 2, 3), (-4, 9, -5), (100, -100, 7)] {
            assert_eq!(sum3(a)(b)(c), by_hand(a)(b)(c));
        }
    }

    #[test]
    fn constructions_agree_on_sampled_inputs() {
        let mut rng = SmallRng::seed_from_u64(123);
        for _ in 0..1_000 {
            let a = rng.gen_range(-10_000..10_000);
            let b = rng.gen_range(-10_000..10_000);
            let c = rng.gen_range(-10_000..10_000);
            assert_eq!(sum3(a)(b)(c), a + b + c);
            assert_eq!(Sum3.apply(a).apply(b).apply(c), a + b + c);
        }
    }

    #[test]
    fn transcript_reports_the_result_twice() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("result = 6").count(), 2);
    }
}
