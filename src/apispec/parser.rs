use super::record::{FunctionRecord, Param, ParamAttribute, ParamAttributeKind};
use crate::error::SpecError;

/// Parse spec text into records, in declaration order
///
/// Duplicated names are returned as-is; [`super::FunctionSpec`] decides
/// which definition wins.
pub(crate) fn parse_records(text: &str) -> Result<Vec<FunctionRecord>, SpecError> {
    let mut records = Vec::new();
    let mut current: Option<FunctionRecord> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;

        // Only a '#' in the very first column starts a comment
        if raw.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            continue;
        };

        if keyword == "name" {
            let name = required(args, 0, line, keyword, "a function name")?;
            if let Some(done) = current.take() {
                records.push(finish(done)?);
            }
            current = Some(FunctionRecord::new(name.to_string(), line));
            continue;
        }

        let Some(record) = current.as_mut() else {
            return Err(SpecError::OrphanAttribute {
                line,
                keyword: keyword.to_string(),
            });
        };

        apply_attribute(record, keyword, args, line)?;
    }

    if let Some(done) = current.take() {
        records.push(finish(done)?);
    }

    tracing::debug!(records = records.len(), "parsed API spec");
    Ok(records)
}

fn apply_attribute(
    record: &mut FunctionRecord,
    keyword: &str,
    args: &[&str],
    line: usize,
) -> Result<(), SpecError> {
    match keyword {
        "return" => {
            record.return_type = args.join(" ");
        }
        "param" => {
            let name = required(args, 0, line, keyword, "a parameter name and type")?;
            if args.len() < 2 {
                return Err(SpecError::MissingArgument {
                    line,
                    keyword: keyword.to_string(),
                    expected: "a parameter name and type",
                });
            }
            record.params.push(Param {
                name: name.to_string(),
                ty: args[1..].join(" "),
                vec_size: 0,
            });
        }
        "category" => {
            record.category = required(args, 0, line, keyword, "a category")?.to_string();
        }
        "chromium" => {
            record.chromium = owned(args);
        }
        "props" => {
            record.props = owned(args);
        }
        "alias" => {
            record.alias = Some(required(args, 0, line, keyword, "a function name")?.to_string());
        }
        "vectoralias" => {
            record.vector_alias =
                Some(required(args, 0, line, keyword, "a function name")?.to_string());
        }
        "chrelopcode" => {
            let value = required(args, 0, line, keyword, "an opcode")?;
            let opcode = value.parse::<i64>().map_err(|_| SpecError::InvalidOpcode {
                line,
                function: record.name.clone(),
                value: value.to_string(),
            })?;
            record.chrelopcode = Some(opcode);
        }
        _ => {
            if let Some(kind) = ParamAttributeKind::from_keyword(keyword) {
                let param = required(args, 0, line, keyword, "a parameter name")?;
                let values = owned(&args[1..]);
                if kind == ParamAttributeKind::Vec {
                    if let Some(p) = record.params.iter_mut().find(|p| p.name == param) {
                        p.vec_size = values.len();
                    }
                }
                record.param_attributes.push(ParamAttribute {
                    kind,
                    param: param.to_string(),
                    values,
                });
            } else {
                tracing::warn!(
                    line,
                    keyword,
                    function = %record.name,
                    "ignoring unknown spec keyword"
                );
            }
        }
    }
    Ok(())
}

fn finish(record: FunctionRecord) -> Result<FunctionRecord, SpecError> {
    if record.category.is_empty() {
        return Err(SpecError::MissingCategory {
            line: record.line,
            function: record.name,
        });
    }
    Ok(record)
}

fn required<'a>(
    args: &[&'a str],
    index: usize,
    line: usize,
    keyword: &str,
    expected: &'static str,
) -> Result<&'a str, SpecError> {
    args.get(index)
        .copied()
        .ok_or_else(|| SpecError::MissingArgument {
            line,
            keyword: keyword.to_string(),
            expected,
        })
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}
