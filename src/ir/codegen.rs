//! # Code Generation
//!
//! Converts IR programs to PPD document text.
//!
//! Every op renders to one or more complete lines terminated by `\n`.

use std::fmt;
use std::io::{self, Write};

use super::ops::{Choice, Disposition, Metadata, Op, Program, Value};

impl Program {
    /// Compile the IR program to document text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            out.push_str(&op.to_string());
        }
        out
    }

    /// Compile the IR program to document bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_text().into_bytes()
    }

    /// Stream the compiled document into a sink.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for op in &self.ops {
            write!(out, "{}", op)?;
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => write!(f, ": \"\""),
            Value::Code(code) => write!(f, ":\t\"{}\"", code),
            Value::Quoted(text) => write!(f, ": \"{}\"", text),
            Value::Bare(text) => write!(f, ": {}", text),
        }
    }
}

/// `Keyword Option/Label: Value`, without the leading `*`.
fn write_choice(f: &mut fmt::Formatter<'_>, choice: &Choice) -> fmt::Result {
    write!(
        f,
        "{} {}/{}{}",
        choice.keyword, choice.option, choice.label, choice.value
    )
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {:.3} {:.3} {:.3}",
            self.p_type.code(),
            i32::from(self.mandatory),
            self.class,
            self.level,
            self.channel,
            self.lower,
            self.upper,
            self.default
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // ===== Structure =====
            Op::Comment(text) => writeln!(f, "*%{}", text),
            Op::Blank => writeln!(f),
            Op::Attribute { keyword, value } => writeln!(f, "*{}: {}", keyword, value),

            // ===== UI Blocks =====
            Op::OpenUi { keyword, label } => writeln!(f, "*OpenUI *{}/{}: PickOne", keyword, label),
            Op::CloseUi(keyword) => write!(f, "*CloseUI: *{}\n\n", keyword),
            Op::ColorKeyword(keyword) => writeln!(f, "*ColorKeyWords: \"{}\"", keyword),
            Op::OptionHints { keyword, hints } => {
                writeln!(f, "*OPOptionHints {}: \"{}\"", keyword, hints)
            }
            Op::OrderDependency { order, keyword } => {
                writeln!(f, "*OrderDependency: {} AnySetup *{}", order, keyword)
            }
            Op::Metadata { name, meta } => writeln!(f, "*StpStp{}: {}", name, meta),
            Op::Default { keyword, value } => {
                writeln!(f, "*Default{}: {}", keyword, value)?;
                writeln!(f, "*StpDefault{}: {}", keyword, value)
            }
            Op::Choice(choice) => {
                let prefix = match choice.disposition {
                    Disposition::Normal => "*",
                    Disposition::Ignorable => "*?",
                };
                write!(f, "{}", prefix)?;
                write_choice(f, choice)?;
                writeln!(f)
            }
            Op::Localized { lang, choice } => {
                write!(f, "*{}.", lang)?;
                write_choice(f, choice)?;
                writeln!(f)
            }

            // ===== Groups =====
            Op::OpenGroup {
                class,
                level,
                label,
            } => write!(f, "*OpenGroup: C{}L{}/{}\n\n", class, level, label),
            Op::CloseGroup {
                class,
                level,
                label,
            } => write!(f, "*CloseGroup: C{}L{}/{}\n\n", class, level, label),

            // ===== Driver Attributes =====
            Op::ResolutionMap {
                presentable,
                internal,
            } => writeln!(f, "*StpResolutionMap: {} {}", presentable, internal),
            Op::Constraint {
                keyword,
                first,
                second,
            } => writeln!(f, "*{}: {} {}", keyword, first, second),
        }
    }
}
