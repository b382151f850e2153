//! One small function per language feature.
//!
//! Every demonstration writes its walkthrough to an `impl Write` and returns
//! what it computed, so the printed output and the values can both be checked.

use serde::Deserialize;
use std::any::type_name;
use std::io::{self, Write};

// ============================================================================
// Functions and return values
// ============================================================================

/// Wraps around on overflow.
pub fn add(x: i64, y: i64) -> i64 {
    x.wrapping_add(y)
}

/// Join two words with a space and terminate the line.
pub fn concat(x: &str, y: &str) -> String {
    let mut z = String::with_capacity(x.len() + y.len() + 2);
    z.push_str(x);
    z.push(' ');
    z.push_str(y);
    z.push('\n');
    z
}

/// Return both arguments, swapped.
pub fn swap<A, B>(x: A, y: B) -> (B, A) {
    (y, x)
}

/// Write `s` exactly as given.
pub fn echo<W: Write>(s: &str, out: &mut W) -> io::Result<()> {
    out.write_all(s.as_bytes())
}

// ============================================================================
// Control flow
// ============================================================================

/// `v` is bound by the match guard and goes out of scope with it. The
/// addition wraps, so `i64::MAX` lands on "less than 10".
pub fn conditioner<W: Write>(check_me: i64, out: &mut W) -> io::Result<String> {
    let add = 1;

    let result = match check_me.wrapping_add(add) {
        v if v < 10 => "less than 10",
        _ => "not less than 10",
    };

    let line = format!("{check_me} is {result} (if you add {add})");
    writeln!(out, "{line}")?;
    Ok(line)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopReport {
    pub running_sums: Vec<i32>,
    pub doubled: i32,
}

pub fn looper<W: Write>(out: &mut W) -> io::Result<LoopReport> {
    let mut running_sums = Vec::with_capacity(10);
    let mut sum_a = 0;
    for i in 0..10 {
        sum_a += i;
        writeln!(out, "{sum_a}")?;
        running_sums.push(sum_a);
    }

    // condition-only loop
    let mut sum_b = 1;
    while sum_b < 1000 {
        sum_b += sum_b;
    }
    writeln!(out, "{sum_b}")?;

    Ok(LoopReport {
        running_sums,
        doubled: sum_b,
    })
}

// ============================================================================
// References
// ============================================================================

/// Read and write two locals through a mutable reference.
pub fn pointers<W: Write>(out: &mut W) -> io::Result<(i32, i32)> {
    let mut i = 42;
    let mut j = 2701;

    {
        let p = &mut i;
        writeln!(out, "{}", *p)?;
        *p = 21;
    }
    writeln!(out, "{i}")?;

    {
        let p = &mut j;
        *p /= 37;
    }
    writeln!(out, "{j}")?;

    Ok((i, j))
}

// ============================================================================
// Structs
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

pub fn structs<W: Write>(out: &mut W) -> io::Result<Vertex> {
    let mut v = Vertex { x: 1, y: 2 };
    writeln!(out, "{v:?}")?;

    v.x = 4;
    writeln!(out, "{}", v.x)?;

    let p = &mut v;
    p.x = 1_000_000_000;
    writeln!(out, "{v:?}")?;

    // y falls back to its default
    let v2 = Vertex {
        x: 1,
        ..Default::default()
    };
    writeln!(out, "{v2:?}")?;

    Ok(v)
}

// ============================================================================
// Match
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingHours {
    pub morning_until: u32,
    pub afternoon_until: u32,
}

impl Default for GreetingHours {
    fn default() -> Self {
        Self {
            morning_until: 12,
            afternoon_until: 17,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    pub fn message(self) -> &'static str {
        match self {
            Greeting::Morning => "Good morning!",
            Greeting::Afternoon => "Good afternoon.",
            Greeting::Evening => "Good evening.",
        }
    }
}

pub fn os_label(os: &str) -> String {
    match os {
        "macos" => "macOS".to_string(),
        "linux" => "Linux".to_string(),
        other => format!("{other}."),
    }
}

/// A guard-only match standing in for an if/else-if chain.
pub fn greeting_for_hour(hour: u32, hours: &GreetingHours) -> Greeting {
    match hour {
        h if h < hours.morning_until => Greeting::Morning,
        h if h < hours.afternoon_until => Greeting::Afternoon,
        _ => Greeting::Evening,
    }
}

pub fn switcheroo<W: Write>(
    os: &str,
    hour: u32,
    hours: &GreetingHours,
    out: &mut W,
) -> io::Result<Greeting> {
    writeln!(out, "{}", os_label(os))?;
    let greeting = greeting_for_hour(hour, hours);
    writeln!(out, "{}", greeting.message())?;
    Ok(greeting)
}

// ============================================================================
// Variables
// ============================================================================

static C: bool = false;
static PYTHON: bool = false;
static JAVA: bool = false;

fn type_of<T>(_: &T) -> &'static str {
    type_name::<T>()
}

pub fn variables<W: Write>(out: &mut W) -> io::Result<()> {
    let i = i32::default();
    writeln!(out, "{i} {C} {PYTHON} {JAVA}")?;

    let (a, b): (&str, &str) = ("a", "b");
    let n = 123;
    let m = "🎻";
    let (is_ok, is_valid) = (true, false);
    writeln!(out, "{a} {b} {n} {m} {is_ok} {is_valid}")?;

    let v = 1337;
    writeln!(out, "v is of type {}", type_of(&v))?;

    #[allow(clippy::approx_constant)]
    const PI: f64 = 3.14;
    writeln!(out, "Happy {PI} Day")?;
    Ok(())
}
