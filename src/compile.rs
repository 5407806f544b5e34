use std::collections::{HashMap, HashSet};

use crate::types::CompiledCondition;
use crate::{
    Bundle, Condition, ConditionEvaluator, ConditionSet, ConfigurationError, FieldMap,
    Requirement, Rule,
};

pub(crate) fn compile(
    bundles: Vec<Bundle>,
    conditions: &[Condition],
    requirement: Requirement,
    fields: Option<&dyn FieldMap>,
) -> Result<ConditionSet, ConfigurationError> {
    if conditions.is_empty() {
        return Err(ConfigurationError::NoConditions);
    }
    check_duplicate_conditions(conditions)?;
    let bundle_map = index_bundles(&bundles)?;

    let compiled = conditions
        .iter()
        .map(|c| compile_condition(c, &bundle_map, fields))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        conditions = compiled.len(),
        bundles = bundles.len(),
        requirement = %requirement,
        "compiled condition set"
    );

    Ok(ConditionSet {
        conditions: compiled,
        bundles,
        requirement,
    })
}

fn check_duplicate_conditions(conditions: &[Condition]) -> Result<(), ConfigurationError> {
    let mut seen = HashSet::new();
    for condition in conditions {
        if !seen.insert(condition.name.as_str()) {
            return Err(ConfigurationError::DuplicateCondition {
                name: condition.name.clone(),
            });
        }
    }
    Ok(())
}

fn index_bundles(bundles: &[Bundle]) -> Result<HashMap<&str, &Bundle>, ConfigurationError> {
    let mut map = HashMap::with_capacity(bundles.len());
    for bundle in bundles {
        if map.insert(bundle.id(), bundle).is_some() {
            return Err(ConfigurationError::DuplicateBundle {
                bundle: bundle.id().to_owned(),
            });
        }
    }
    Ok(map)
}

fn compile_condition(
    condition: &Condition,
    bundles: &HashMap<&str, &Bundle>,
    fields: Option<&dyn FieldMap>,
) -> Result<CompiledCondition, ConfigurationError> {
    let bundle = bundles.get(condition.bundle.as_str()).ok_or_else(|| {
        ConfigurationError::UndefinedBundle {
            condition: condition.name.clone(),
            bundle: condition.bundle.clone(),
        }
    })?;

    let check = condition
        .check
        .as_ref()
        .ok_or_else(|| ConfigurationError::MissingCheck {
            condition: condition.name.clone(),
        })?;

    let rule = Rule::new(
        check.field_name.as_str(),
        check.status,
        check.match_value.as_str(),
    )?;

    if let Some(fields) = fields {
        let known = fields.field_names(bundle.id());
        if !known.iter().any(|f| f == rule.field_name()) {
            return Err(ConfigurationError::UndefinedField {
                condition: condition.name.clone(),
                field: rule.field_name().to_owned(),
            });
        }
    }

    let mut evaluator = ConditionEvaluator::new((*bundle).clone(), rule);
    if condition.negate {
        evaluator = evaluator.negated();
    }

    Ok(CompiledCondition {
        name: condition.name.clone(),
        evaluator,
    })
}
