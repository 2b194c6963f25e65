use super::{warning_result::WarningResult, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::{
    collections::HashSet,
    io::{BufRead, BufReader, Read},
};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\)\.\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\)\.\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\)\.\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\)\.\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const COMMENT_PREFIX: char = '%';

fn captured_arg(c: &Captures, i: usize) -> WarningResult<String> {
    let str_arg = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let label = str_arg.trim().to_lowercase();
    if str_arg.trim().len() == str_arg.len() {
        WarningResult::Ok(label)
    } else {
        WarningResult::Warned(
            label,
            vec!["argument names beginning or ending by spaces may be ambiguous".to_string()],
        )
    }
}

fn try_read_arg_line(l: &str) -> Result<Option<WarningResult<String>>> {
    if !ARG_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1))),
        None => Err(anyhow!("invalid argument name in {}", l.trim())),
    }
}

fn try_read_att_line(l: &str) -> Result<Option<WarningResult<(String, String)>>> {
    if !ATT_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1).zip(captured_arg(&c, 2)))),
        None => Err(anyhow!("invalid argument names in {}", l.trim())),
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// % a comment
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// Labels are converted to lowercase.
/// Arguments may be declared anywhere in the file, but an attack can only involve arguments declared on previous lines.
/// Lines beginning with `%` are ignored, as well as empty lines.
///
/// Declaring the same argument or the same attack twice is allowed, but raises a warning.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::AAFramework;
/// # use bruteaf::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line: usize, message: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, message.to_string()));
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = vec![];
        let mut declared = HashSet::new();
        let mut attacks = vec![];
        let mut known_attacks = HashSet::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line {}", i + 1);
            let warning_consumer = |warnings: Vec<String>| {
                warnings.iter().for_each(|w| self.warn(i + 1, w));
            };
            let l = &line.with_context(context)?;
            if l.trim().is_empty() || l.trim_start().starts_with(COMMENT_PREFIX) {
                continue;
            }
            if let Some(a) = try_read_arg_line(l).with_context(context)? {
                let label = a.consume_warnings(warning_consumer);
                if declared.insert(label.clone()) {
                    arg_labels.push(label);
                } else {
                    self.warn(i + 1, &format!(r#"argument "{}" is declared twice"#, label));
                }
                continue;
            }
            if let Some(result) = try_read_att_line(l).with_context(context)? {
                let (a, b) = result.consume_warnings(warning_consumer);
                if let Some(undeclared) = [&a, &b].into_iter().find(|x| !declared.contains(*x)) {
                    return Err(anyhow!(
                        r#"argument "{}" is used in an attack before being declared"#,
                        undeclared
                    ))
                    .with_context(context);
                }
                if known_attacks.insert((a.clone(), b.clone())) {
                    attacks.push((a, b));
                } else {
                    self.warn(i + 1, &format!("attack ({},{}) is declared twice", a, b));
                }
                continue;
            }
            return Err(anyhow!(r#"syntax error in line "{}""#, l)).with_context(context);
        }
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&arg_labels));
        for (a, b) in attacks.iter() {
            af.new_attack(a, b)?;
        }
        Ok(af)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
