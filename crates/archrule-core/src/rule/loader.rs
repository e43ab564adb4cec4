//! DTO → Domain model conversion with validation.

use std::collections::HashSet;

use crate::types::Severity;

use super::dto::{DetectDto, PatternDto, RuleDefinitionDto, ScopeDto, TestCaseDto, TestsDto};
use super::model::{
    DetectConfig, Fixtures, GlobPattern, ImportSpec, ModelError, NamedPattern, RegexFlags,
    RegexPattern, RuleDefinition, RuleId, Scope, TestCase,
};

/// Errors during DTO → Domain conversion.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A field-level validation error.
    #[error("{context}: {reason}")]
    Validation {
        /// Where the error occurred (e.g., "ARCH-1.detect.patterns[0].regex").
        context: String,
        /// The underlying model error.
        reason: ModelError,
    },

    /// Unknown severity string.
    #[error("{context}: unknown severity `{value}`, expected: error, warning, info")]
    UnknownSeverity {
        /// Where the error occurred.
        context: String,
        /// The invalid value.
        value: String,
    },
}

fn validation(context: impl Into<String>) -> impl FnOnce(ModelError) -> LoadError {
    let context = context.into();
    move |reason| LoadError::Validation { context, reason }
}

/// Converts a `RuleDefinitionDto` to a validated `RuleDefinition`.
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: RuleDefinitionDto) -> Result<RuleDefinition, LoadError> {
    let id = RuleId::new(&dto.id).map_err(validation("id"))?;
    let ctx = id.to_string();

    let scope = convert_scope(dto.scope.unwrap_or_default(), &ctx)?;
    let detect = convert_detect(dto.detect.unwrap_or_default(), &ctx)?;
    let tests = convert_tests(dto.tests.unwrap_or_default());

    let mut rule = RuleDefinition::new(id, dto.title, scope, detect, tests);

    if let Some(value) = dto.severity {
        let severity = Severity::parse(&value).ok_or_else(|| LoadError::UnknownSeverity {
            context: format!("{ctx}.severity"),
            value: value.clone(),
        })?;
        rule = rule.with_severity(severity);
    }
    if let Some(message) = dto.message {
        rule = rule.with_message(message);
    }
    if let Some(doc) = dto.doc {
        rule = rule.with_doc_ref(doc);
    }

    Ok(rule)
}

fn convert_globs(patterns: Option<Vec<String>>, ctx: &str) -> Result<Vec<GlobPattern>, LoadError> {
    patterns
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, p)| GlobPattern::new(p).map_err(validation(format!("{ctx}[{i}]"))))
        .collect()
}

fn convert_regexes(
    patterns: Option<Vec<String>>,
    ctx: &str,
) -> Result<Vec<RegexPattern>, LoadError> {
    patterns
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, p)| RegexPattern::new(p).map_err(validation(format!("{ctx}[{i}]"))))
        .collect()
}

fn convert_scope(dto: ScopeDto, ctx: &str) -> Result<Scope, LoadError> {
    let include = convert_globs(dto.include_paths, &format!("{ctx}.scope.include_paths"))?;
    let exclude = convert_globs(dto.exclude_paths, &format!("{ctx}.scope.exclude_paths"))?;
    Ok(Scope::new(include, exclude))
}

fn convert_detect(dto: DetectDto, ctx: &str) -> Result<DetectConfig, LoadError> {
    let ctx = format!("{ctx}.detect");

    let disallowed_imports = dto
        .disallowed_imports
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, m)| {
            ImportSpec::new(m).map_err(validation(format!("{ctx}.disallowed_imports[{i}]")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let disallowed_calls = dto.disallowed_calls.unwrap_or_default();
    if let Some(i) = disallowed_calls.iter().position(String::is_empty) {
        return Err(LoadError::Validation {
            context: format!("{ctx}.disallowed_calls[{i}]"),
            reason: ModelError::EmptyCall,
        });
    }

    let patterns = convert_patterns(dto.patterns.unwrap_or_default(), &ctx)?;

    Ok(DetectConfig {
        disallowed_imports,
        allowlist_imports: dto.allowlist_imports.unwrap_or_default().into_iter().collect(),
        disallowed_calls,
        patterns,
        allowlist_patterns: convert_regexes(
            dto.allowlist_patterns,
            &format!("{ctx}.allowlist_patterns"),
        )?,
        allowlist_paths: convert_globs(dto.allowlist_paths, &format!("{ctx}.allowlist_paths"))?,
        require_patterns: convert_regexes(
            dto.require_patterns,
            &format!("{ctx}.require_patterns"),
        )?,
        ignore_line_patterns: convert_regexes(
            dto.ignore_line_patterns,
            &format!("{ctx}.ignore_line_patterns"),
        )?,
    })
}

fn convert_patterns(dtos: Vec<PatternDto>, ctx: &str) -> Result<Vec<NamedPattern>, LoadError> {
    let mut seen = HashSet::new();
    let mut patterns = Vec::with_capacity(dtos.len());

    for (i, dto) in dtos.into_iter().enumerate() {
        let pctx = format!("{ctx}.patterns[{i}]");
        if dto.id.is_empty() {
            return Err(LoadError::Validation {
                context: format!("{pctx}.id"),
                reason: ModelError::EmptyPatternId,
            });
        }
        if !seen.insert(dto.id.clone()) {
            return Err(LoadError::Validation {
                context: format!("{pctx}.id"),
                reason: ModelError::DuplicatePatternId { id: dto.id },
            });
        }
        let flags = RegexFlags::parse(dto.flags.as_deref().unwrap_or_default())
            .map_err(validation(format!("{pctx}.flags")))?;
        let regex = RegexPattern::with_flags(&dto.regex, flags)
            .map_err(validation(format!("{pctx}.regex")))?;
        patterns.push(NamedPattern::new(dto.id, regex));
    }

    Ok(patterns)
}

fn convert_tests(dto: TestsDto) -> Fixtures {
    let convert = |cases: Option<Vec<TestCaseDto>>| {
        cases
            .unwrap_or_default()
            .into_iter()
            .map(|c| TestCase {
                path: c.path,
                content: c.content,
            })
            .collect()
    };
    Fixtures {
        should_flag: convert(dto.should_flag),
        should_pass: convert(dto.should_pass),
    }
}
