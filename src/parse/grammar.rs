use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, repeat};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Bundle, Check, Condition, FieldStatus, Requirement};

use super::parser::ParsedConditionSet;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

fn expected(what: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(what))
}

// -- Tokens -----------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-'
        }),
    )
        .take()
        .parse_next(input)
}

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn field_status(input: &mut &str) -> ModalResult<FieldStatus> {
    ident
        .try_map(|s: &str| s.parse::<FieldStatus>())
        .context(expected("field status (all, empty, match)"))
        .parse_next(input)
}

fn requirement(input: &mut &str) -> ModalResult<Requirement> {
    ws.parse_next(input)?;
    ident
        .try_map(|s: &str| s.parse::<Requirement>())
        .context(expected("requirement (all, any)"))
        .parse_next(input)
}

// -- Field check ------------------------------------------------------------

fn field_check(input: &mut &str) -> ModalResult<(bool, Check)> {
    ws.parse_next(input)?;
    let mut name = ident.context(expected("field name")).parse_next(input)?;
    let negate = matches!(name, "NOT" | "not");
    if negate {
        ws.parse_next(input)?;
        name = cut_err(ident)
            .context(expected("field name"))
            .parse_next(input)?;
    }

    ws.parse_next(input)?;
    let status = cut_err(field_status).parse_next(input)?;

    let match_value = if status == FieldStatus::Match {
        ws.parse_next(input)?;
        cut_err(string_literal)
            .context(expected("match value"))
            .parse_next(input)?
    } else {
        String::new()
    };

    let check = Check {
        field_name: name.to_owned(),
        status,
        match_value,
    };
    Ok((negate, check))
}

// -- Statements -------------------------------------------------------------

enum Statement {
    Bundle(Bundle),
    Require(Requirement),
    Condition(Condition),
}

fn bundle_decl(input: &mut &str) -> ModalResult<Bundle> {
    ws.parse_next(input)?;
    let id = ident.context(expected("bundle id")).parse_next(input)?;
    ws.parse_next(input)?;
    let label = string_literal
        .context(expected("bundle label"))
        .parse_next(input)?;
    Ok(Bundle::new(id, label))
}

fn condition_def(input: &mut &str) -> ModalResult<Condition> {
    ws.parse_next(input)?;
    let name = ident
        .context(expected("condition name"))
        .parse_next(input)?;
    ws.parse_next(input)?;
    "on".context(StrContext::Expected(StrContextValue::StringLiteral("on")))
        .parse_next(input)?;
    ws.parse_next(input)?;
    let bundle = ident.context(expected("bundle id")).parse_next(input)?;
    ws.parse_next(input)?;
    ':'.context(StrContext::Expected(StrContextValue::CharLiteral(':')))
        .parse_next(input)?;

    let (negate, check) = field_check
        .context(expected("field check"))
        .parse_next(input)?;

    Ok(Condition {
        name: name.to_owned(),
        bundle: bundle.to_owned(),
        check: Some(check),
        negate,
    })
}

fn statement(input: &mut &str) -> ModalResult<Statement> {
    ws.parse_next(input)?;
    let keyword = ident.parse_next(input)?;
    match keyword {
        "bundle" => cut_err(bundle_decl)
            .map(Statement::Bundle)
            .parse_next(input),
        "require" => cut_err(requirement)
            .map(Statement::Require)
            .parse_next(input),
        "condition" => cut_err(condition_def)
            .map(Statement::Condition)
            .parse_next(input),
        _ => Err(ErrMode::from_input(input)),
    }
}

// -- Top-level parser -------------------------------------------------------

/// A later `require` statement overrides an earlier one.
pub fn parse_condition_set(input: &mut &str) -> ModalResult<ParsedConditionSet> {
    let mut parsed = ParsedConditionSet {
        bundles: Vec::new(),
        requirement: None,
        conditions: Vec::new(),
    };

    let statements: Vec<Statement> = repeat(0.., statement).parse_next(input)?;
    for statement in statements {
        match statement {
            Statement::Bundle(b) => parsed.bundles.push(b),
            Statement::Require(r) => parsed.requirement = Some(r),
            Statement::Condition(c) => parsed.conditions.push(c),
        }
    }

    ws.parse_next(input)?;

    Ok(parsed)
}
