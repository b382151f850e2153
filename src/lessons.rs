//! Lesson registry: every demonstration in `basics` and `reverse`, addressable
//! by name from the command line and the config file.

use crate::basics::{self, GreetingHours};
use crate::error::{Result, ScratchpadError};
use crate::reverse::{reverse, reverse_graphemes};
use chrono::{Local, Timelike};
use colored::Colorize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    Add,
    Concat,
    Swap,
    Conditioner,
    Echo,
    Looper,
    Pointers,
    Structs,
    Switcheroo,
    Variables,
    Reverse,
}

impl Lesson {
    /// Teaching order.
    pub const ALL: [Lesson; 11] = [
        Lesson::Variables,
        Lesson::Add,
        Lesson::Concat,
        Lesson::Swap,
        Lesson::Echo,
        Lesson::Conditioner,
        Lesson::Looper,
        Lesson::Switcheroo,
        Lesson::Pointers,
        Lesson::Structs,
        Lesson::Reverse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Lesson::Add => "add",
            Lesson::Concat => "concat",
            Lesson::Swap => "swap",
            Lesson::Conditioner => "conditioner",
            Lesson::Echo => "echo",
            Lesson::Looper => "looper",
            Lesson::Pointers => "pointers",
            Lesson::Structs => "structs",
            Lesson::Switcheroo => "switcheroo",
            Lesson::Variables => "variables",
            Lesson::Reverse => "reverse",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Lesson::Add => "function parameters and a return value",
            Lesson::Concat => "building a String from two slices",
            Lesson::Swap => "returning several values as a tuple",
            Lesson::Conditioner => "a match with a guard in place of if/else",
            Lesson::Echo => "writing to a generic output",
            Lesson::Looper => "counted and condition-only loops",
            Lesson::Pointers => "reading and writing through &mut",
            Lesson::Structs => "struct literals, field access and update syntax",
            Lesson::Switcheroo => "matching on strings and on guards alone",
            Lesson::Variables => "bindings, defaults, statics and constants",
            Lesson::Reverse => "reversing text by code point and by grapheme",
        }
    }

    pub fn run<W: Write>(self, ctx: &LessonContext, out: &mut W) -> Result<()> {
        debug!(lesson = self.name(), "running lesson");
        match self {
            Lesson::Add => {
                writeln!(out, "{}", basics::add(42, 13))?;
            }
            Lesson::Concat => {
                write!(out, "{}", basics::concat("hello", "world"))?;
            }
            Lesson::Swap => {
                let (a, b) = basics::swap("hello", "world");
                writeln!(out, "{a} {b}")?;
            }
            Lesson::Conditioner => {
                basics::conditioner(5, out)?;
                basics::conditioner(12, out)?;
            }
            Lesson::Echo => {
                basics::echo("echo, echo, echo\n", out)?;
            }
            Lesson::Looper => {
                basics::looper(out)?;
            }
            Lesson::Pointers => {
                basics::pointers(out)?;
            }
            Lesson::Structs => {
                basics::structs(out)?;
            }
            Lesson::Switcheroo => {
                basics::switcheroo(&ctx.os, ctx.hour, &ctx.greeting, out)?;
            }
            Lesson::Variables => {
                basics::variables(out)?;
            }
            Lesson::Reverse => {
                for sample in REVERSE_SAMPLES {
                    writeln!(out, "{sample} -> {}", reverse(sample))?;
                }
                let family = "a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}b";
                writeln!(out, "by code point: {}", reverse(family))?;
                writeln!(out, "by grapheme:   {}", reverse_graphemes(family))?;
            }
        }
        Ok(())
    }

    /// Closest lesson name within an edit distance of two.
    pub fn suggest(name: &str) -> Option<&'static str> {
        const MAX_DISTANCE: usize = 2;
        let name = name.to_ascii_lowercase();

        Lesson::ALL
            .iter()
            .map(|lesson| (lesson.name(), levenshtein_distance(&name, lesson.name())))
            .filter(|&(_, distance)| distance <= MAX_DISTANCE)
            .min_by_key(|&(_, distance)| distance)
            .map(|(candidate, _)| candidate)
    }
}

const REVERSE_SAMPLES: [&str; 3] = ["hello", "日本語", "Hello, 世界"];

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lesson {
    type Err = ScratchpadError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Lesson::ALL
            .iter()
            .copied()
            .find(|lesson| lesson.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ScratchpadError::unknown_lesson(wanted, Lesson::suggest(wanted).map(String::from))
            })
    }
}

/// Inputs a lesson may read from its surroundings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContext {
    pub os: String,
    pub hour: u32,
    pub greeting: GreetingHours,
}

impl LessonContext {
    /// The current OS and local hour.
    pub fn current(greeting: GreetingHours) -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            hour: Local::now().hour(),
            greeting,
        }
    }
}

/// Run each lesson under a header line, with a blank line between lessons.
pub fn run_lessons<W: Write>(lessons: &[Lesson], ctx: &LessonContext, out: &mut W) -> Result<()> {
    info!(count = lessons.len(), "running lessons");

    for (i, lesson) in lessons.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{} {}",
            format!("== {lesson}").cyan().bold(),
            lesson.summary().dimmed()
        )?;
        lesson.run(ctx, out)?;
    }
    Ok(())
}

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, &ca) in a_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(hour: u32) -> LessonContext {
        LessonContext {
            os: "linux".to_string(),
            hour,
            greeting: GreetingHours::default(),
        }
    }

    fn run_to_string(lesson: Lesson, ctx: &LessonContext) -> String {
        let mut buf = Vec::new();
        lesson.run(ctx, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_names_are_unique_and_parse_back() {
        for lesson in Lesson::ALL {
            assert_eq!(lesson.name().parse::<Lesson>().unwrap(), lesson);
        }
        let mut names: Vec<&str> = Lesson::ALL.iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Lesson::ALL.len());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Reverse ".parse::<Lesson>().unwrap(), Lesson::Reverse);
        assert_eq!("LOOPER".parse::<Lesson>().unwrap(), Lesson::Looper);
    }

    #[test]
    fn test_unknown_lesson_suggests_closest() {
        let err = "revrese".parse::<Lesson>().unwrap_err();
        match err {
            ScratchpadError::UnknownLesson { name, suggestion } => {
                assert_eq!(name, "revrese");
                assert_eq!(suggestion.as_deref(), Some("reverse"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_lesson_too_far_has_no_suggestion() {
        assert_eq!(Lesson::suggest("generics"), None);
    }

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("swap", "swap"), 0);
        assert_eq!(levenshtein_distance("日本", "日本語"), 1);
    }

    #[test]
    fn test_switcheroo_uses_context() {
        assert_eq!(run_to_string(Lesson::Switcheroo, &ctx(7)), "Linux\nGood morning!\n");
        assert_eq!(run_to_string(Lesson::Switcheroo, &ctx(20)), "Linux\nGood evening.\n");
    }

    #[test]
    fn test_reverse_lesson_output() {
        let text = run_to_string(Lesson::Reverse, &ctx(9));
        assert!(text.contains("hello -> olleh"));
        assert!(text.contains("日本語 -> 語本日"));
        assert!(text.contains("by grapheme:   b\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}a"));
    }

    #[test]
    fn test_every_lesson_writes_something() {
        for lesson in Lesson::ALL {
            assert!(!run_to_string(lesson, &ctx(12)).is_empty(), "{lesson} was silent");
        }
    }

    #[test]
    fn test_run_lessons_headers_and_separators() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        run_lessons(&[Lesson::Swap, Lesson::Add], &ctx(0), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "== swap returning several values as a tuple\n\
             world hello\n\
             \n\
             == add function parameters and a return value\n\
             55\n"
        );
    }

    #[test]
    fn test_run_lessons_empty_writes_nothing() {
        let mut buf = Vec::new();
        run_lessons(&[], &ctx(0), &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_swap_and_concat_lessons() {
        assert_eq!(run_to_string(Lesson::Swap, &ctx(0)), "world hello\n");
        assert_eq!(run_to_string(Lesson::Concat, &ctx(0)), "hello world\n");
    }
}
